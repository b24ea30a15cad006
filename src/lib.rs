//! # Introduction
//!
//! Sortty animates sorting algorithms on a terminal bar chart, one
//! comparison or write at a time. Every algorithm is a resumable state
//! machine that performs a single unit of work per call, so the UI can pause,
//! single-step, rewind, or switch algorithms between any two operations.
//!
//! ## Pipeline
//!
//! ```text
//! Registry → SortSession → StepFunction → Projection → TUI
//!                ↑                                      │
//!                └──────────────── Intent ──────────────┘
//! ```
//!
//! 1. [`algorithms`]: the [`algorithms::StepFunction`] contract and one
//!    implementation per algorithm (bubble, selection, two insertion
//!    variants, bottom-up merge).
//! 2. [`registry`]: name-unique catalog of algorithms, built once at startup.
//! 3. [`engine`]: [`engine::SortSession`], which owns the array and the active
//!    step function, applies [`engine::Intent`]s and exposes a read-only
//!    [`engine::Projection`].
//! 4. [`history`]: bounded snapshot history used for stepping backward.
//! 5. [`config`] / [`logging`]: command-line configuration and tracing setup.
//! 6. [`ui`]: ratatui-based TUI; not part of the stable library API.

pub mod algorithms;
pub mod config;
pub mod engine;
pub mod errors;
pub mod history;
pub mod logging;
pub mod registry;
pub mod ui;
