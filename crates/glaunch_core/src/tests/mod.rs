//! Integration tests for the multilist view
//!
//! Tests are organized by topic:
//! - `navigation` - Cursor movement and global-index accounting
//! - `viewport` - Viewport containment and scrolling
//! - `modes` - Single-list confinement and mode-switch resets
//! - `events` - Listener dispatch and idempotence


mod modes;
