//! Sort session: the driver between the UI and the step functions
//!
//! - [`session`]: [`SortSession`], which owns the array, the original
//!   snapshot used by reset, the active step function and the counters
//! - [`intent`]: inbound [`Intent`]s from the UI and the read-only
//!   [`Projection`] it renders from
//!
//! # Lifecycle
//!
//! ```text
//! Ready --step--> Running --terminated--> Complete
//!   ^                |                        |
//!   +---- reset / select / randomize / resize +
//! ```
//!
//! Every entry point runs to completion before returning. Rejected intents
//! leave the session untouched.

pub mod intent;
pub mod session;

pub use intent::{Intent, Outcome, Projection, Status};
pub use session::{step_budget, Phase, SessionOptions, SizeBounds, SortSession, Value};
