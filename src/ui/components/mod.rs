//! Reusable UI Components
//!
//! - `TabSelector` - Horizontal tab selector with arrow markers
//! - `StatusIndicator` - Spinner and empty-state lines
//! - `DialogFrame` - Centered dialog overlay with rounded borders

mod dialog_frame;
mod status_indicator;
mod tab_selector;

pub use dialog_frame::{render_dialog_frame, DialogFrameConfig};
pub use status_indicator::{render_status_indicator, spinner_frame, StatusIndicatorType};
pub use tab_selector::{render_tab_selector, TabItem};
