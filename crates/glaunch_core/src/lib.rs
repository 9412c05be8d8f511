//! Multilist widget library
//!
//! This crate provides the scrollable multi-sublist view used by the glaunch
//! terminal UI. A multilist renders an ordered set of named sublists (games
//! grouped by platform, tag, ...) as one logically continuous list with an
//! inline header row above each sublist. It supports:
//! - A 2D (sublist, item) cursor with flat "global index" accounting
//! - Multi-list and single-list display modes
//! - Viewport tracking that keeps the cursor row visible as it crosses
//!   sublist boundaries of varying length
//! - Selection-changed and item-opened listener registration
//!
//! Data is supplied through the [`MultilistSource`] trait; the view never
//! touches the underlying collections and only reports what the user did.

pub mod source;
pub mod view;

#[cfg(test)]
mod tests;

pub use source::{Cursor, MultilistSource, SelectionEvent};
pub use view::{ListMode, MultilistView};
