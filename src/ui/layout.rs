//! Responsive layout helpers.
//!
//! `LayoutContext` wraps the terminal dimensions and answers the sizing
//! questions the screens ask (dialog widths, how many tiles per row, whether
//! to drop secondary table columns).

// ============================================================================
// Screen Size Breakpoints
// ============================================================================

/// Terminal width and height breakpoints
pub mod breakpoints {
    /// Extra small terminal (< 60 columns)
    pub const XS_WIDTH: u16 = 60;
    /// Small terminal (< 80 columns)
    pub const SM_WIDTH: u16 = 80;
    /// Medium terminal (< 120 columns)
    pub const MD_WIDTH: u16 = 120;

    /// Extra small terminal height (< 16 rows)
    pub const XS_HEIGHT: u16 = 16;
    /// Small terminal height (< 24 rows)
    pub const SM_HEIGHT: u16 = 24;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutContext {
    /// Terminal width in columns
    pub width: u16,
    /// Terminal height in rows
    pub height: u16,
}

impl LayoutContext {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Calculate a width as a percentage of terminal width, minimum 1.
    pub fn percent_width(&self, percentage: u16) -> u16 {
        ((self.width as u32 * percentage as u32) / 100).max(1) as u16
    }

    /// Calculate proportional width with min/max bounds.
    pub fn bounded_width(&self, percentage: u16, min: u16, max: u16) -> u16 {
        self.percent_width(percentage).clamp(min, max)
    }

    /// Less than 80 columns.
    pub fn is_narrow(&self) -> bool {
        self.width < breakpoints::SM_WIDTH
    }

    /// Less than 24 rows.
    pub fn is_short(&self) -> bool {
        self.height < breakpoints::SM_HEIGHT
    }

    /// Narrow or short; labels and chrome are condensed.
    pub fn is_compact(&self) -> bool {
        self.is_narrow() || self.is_short()
    }

    pub fn is_extra_small(&self) -> bool {
        self.width < breakpoints::XS_WIDTH || self.height < breakpoints::XS_HEIGHT
    }

    /// Dashboard tiles per row.
    pub fn tile_columns(&self) -> usize {
        if self.width >= breakpoints::MD_WIDTH {
            5
        } else if self.is_narrow() {
            1
        } else {
            3
        }
    }

    /// The email column is dropped from the results table when narrow.
    pub fn show_email_column(&self) -> bool {
        !self.is_narrow()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_and_bounds() {
        let ctx = LayoutContext::new(200, 40);
        assert_eq!(ctx.percent_width(50), 100);
        assert_eq!(ctx.bounded_width(30, 20, 50), 50);
        assert_eq!(LayoutContext::new(10, 10).percent_width(1), 1);
    }

    #[test]
    fn test_size_states() {
        assert!(LayoutContext::new(70, 30).is_narrow());
        assert!(LayoutContext::new(100, 20).is_compact());
        assert!(LayoutContext::new(50, 30).is_extra_small());
        assert!(!LayoutContext::new(120, 40).is_compact());
    }

    #[test]
    fn test_tile_columns() {
        assert_eq!(LayoutContext::new(140, 40).tile_columns(), 5);
        assert_eq!(LayoutContext::new(100, 40).tile_columns(), 3);
        assert_eq!(LayoutContext::new(60, 40).tile_columns(), 1);
    }
}
