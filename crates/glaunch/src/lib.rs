//! Terminal game launcher
//!
//! Aggregates a local game library (games grouped by platform) and presents
//! it through a keyboard-driven multilist view: one logically continuous
//! list with an inline header per platform, single-list filtering, and
//! launch-on-Enter activation events.
//!
//! The actual list widget lives in `glaunch_core`; this crate supplies the
//! app shell, the JSON-backed library, and the data-source adapter between
//! the two.

pub mod app;
pub mod components;
pub mod data;
pub mod logging;
pub mod screens;
pub mod state;
pub mod util;

pub use app::App;
pub use logging::init_logging;
