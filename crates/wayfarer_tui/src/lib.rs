//! wayfarer-tui — the chat surface.
//!
//! Colors live in `theme`, screen regions in `layouts`, message rendering in
//! `messages`; [state] and [view] hold and draw everything. Entry points are
//! [run_tui] and [run_tui_with_runtime].

pub mod layouts;
pub mod messages;
pub mod run;
pub mod runtime_events;
pub mod state;
pub mod theme;
pub mod utils;
pub mod view;

pub use run::{run_tui, run_tui_with_runtime};
pub use state::{ChatItem, Screen, TuiState};
pub use view::draw as draw_view;
