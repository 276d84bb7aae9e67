//! Custom widget components

mod controls;
mod game_over_dialog;
mod header;
mod light_grid;
pub mod modal_overlay;

pub use controls::Controls;
pub use game_over_dialog::{dialog_rect, GameOverDialog};
pub use header::MainHeader;
pub use light_grid::LightGrid;
