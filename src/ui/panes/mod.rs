//! TUI pane rendering modules
//!
//! Each pane is a stateless render function over the session's
//! [`Projection`](crate::engine::Projection):
//!
//! - [`info`]: algorithm name, array contents, step/swap counters and speed
//! - [`bars`]: the bar chart with comparison and write highlights
//! - [`status`]: status bar with keybindings and playback state

pub mod bars;
pub mod info;
pub mod status;

pub use bars::render_bars_pane;
pub use info::render_info_pane;
pub use status::render_status_bar;
