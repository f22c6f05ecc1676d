//! Terminal UI for playing Connect Four, plus the plain-text board used by
//! the headless front end.

mod app;
pub mod board_widget;
mod game_view;
pub mod text;

pub use app::App;
