//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! - **[`app`]**: application state, keyboard event loop, autoplay timing
//! - **[`panes`]**: stateless render functions for each visible pane
//! - **[`theme`]**: centralized color palette used by all panes
//!
//! The UI only talks to the core through [`Intent`]s and renders from the
//! session's [`Projection`].
//!
//! [`Intent`]: crate::engine::Intent
//! [`Projection`]: crate::engine::Projection

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
