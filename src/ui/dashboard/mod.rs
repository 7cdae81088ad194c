//! Dashboard summary screen
//!
//! A grid of counter tiles: the four live platform counts followed by the
//! fixed specializations tile.
//!
//! ```text
//! +-----------+ +-----------+ +-----------+ +-----------+ +-----------+
//! | Users     | | Courses   | | Lessons   | | Questions | | Special.. |
//! |      128  | |       12  | |       96  | |      340  | |        4  |
//! +-----------+ +-----------+ +-----------+ +-----------+ +-----------+
//! ```

pub mod tile;

use ratatui::{
    layout::{Constraint, Layout, Rect},
    Frame,
};

use crate::app::App;
use crate::models::{SummaryTile, SPECIALIZATION_COUNT};
use crate::ui::layout::LayoutContext;
use tile::{render_tile, TILE_HEIGHT};

/// Title and value for every tile, in display order.
pub fn tile_values(app: &App) -> Vec<(&'static str, u64)> {
    SummaryTile::ALL
        .into_iter()
        .map(|tile| (tile.title(), app.summary.get(tile)))
        .chain(std::iter::once(("Specializations", SPECIALIZATION_COUNT)))
        .collect()
}

pub fn render_dashboard(frame: &mut Frame, area: Rect, app: &App, ctx: &LayoutContext) {
    let tiles = tile_values(app);
    let columns = ctx.tile_columns().max(1);

    let row_areas = Layout::vertical(
        tiles
            .chunks(columns)
            .map(|_| Constraint::Length(TILE_HEIGHT))
            .chain(std::iter::once(Constraint::Fill(1))),
    )
    .split(area);

    for (row, chunk) in tiles.chunks(columns).enumerate() {
        let cells = Layout::horizontal((0..columns).map(|_| Constraint::Fill(1)))
            .spacing(1)
            .split(row_areas[row]);
        for (cell, (title, value)) in cells.iter().zip(chunk) {
            render_tile(frame, *cell, title, *value);
        }
    }
}
