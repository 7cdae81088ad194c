//! Simple line-based CLI output utilities.
//!
//! Formatting is split from printing so reports can be asserted on in tests.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Line width for separators.
pub const LINE_WIDTH: usize = 60;

/// Width of the label column in [`format_row`].
const LABEL_WIDTH: usize = 16;

/// Status icons
pub mod icons {
    pub const FAILURE: &str = "✗";
    pub const WARNING: &str = "⚠";
}

/// ```text
/// ENCYBARA DASHBOARD
/// ════════════════════════════════════════════════════════════
/// ```
pub fn format_header(title: &str) -> Vec<String> {
    vec![title.to_string(), "═".repeat(LINE_WIDTH)]
}

/// `  Users:          128`
pub fn format_row(label: &str, value: &str) -> String {
    format!("  {:<width$}{}", format!("{}:", label), value, width = LABEL_WIDTH)
}

/// `  ✓ message`
pub fn format_step_line(icon: &str, message: &str) -> String {
    format!("  {} {}", icon, message)
}

/// Pad or cut `text` to exactly `width` terminal columns. Cut text ends in `…`.
pub fn fit_width(text: &str, width: usize) -> String {
    let text_width = text.width();
    if text_width <= width {
        return format!("{}{}", text, " ".repeat(width - text_width));
    }
    if width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    used += 1;
    out.push_str(&" ".repeat(width - used));
    out
}

pub fn format_rule() -> String {
    "─".repeat(LINE_WIDTH)
}

pub fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_row_aligns_values() {
        assert_eq!(format_row("Users", "12"), format!("  Users:{}12", " ".repeat(10)));
        assert_eq!(format_row("Specializations", "4"), "  Specializations:4");
    }

    #[test]
    fn test_header_and_rule_width() {
        let header = format_header("ENCYBARA");
        assert_eq!(header[0], "ENCYBARA");
        assert_eq!(header[1].chars().count(), LINE_WIDTH);
        assert_eq!(format_rule().chars().count(), LINE_WIDTH);
    }

    #[test]
    fn test_fit_width_pads_and_cuts() {
        assert_eq!(fit_width("An", 5), "An   ");
        assert_eq!(fit_width("Nguyễn Văn An", 8), "Nguyễn …");
        assert_eq!(fit_width("Nguyễn Văn An", 8).width(), 8);
        assert_eq!(fit_width("漢字漢字", 5), "漢字…");
        assert_eq!(fit_width("abc", 0), "");
    }

    #[test]
    fn test_step_line() {
        assert_eq!(format_step_line(icons::FAILURE, "users"), "  ✗ users");
    }
}
