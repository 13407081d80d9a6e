//! Komichi — declarative hierarchical menu / navigation engine.
//!
//! The engine is a single state machine: one active-path string, resolved
//! against a read-only menu tree on every change. [`menu`] holds the
//! framework-agnostic core (path resolution, view composition, click
//! routing); [`tui`] is the ratatui/crossterm front-end that draws the
//! composed view and feeds input back in; [`portal`] builds the demo tree
//! the binary ships with.

pub mod menu;
pub mod portal;
pub mod tui;

pub use menu::{Link, Menu, MenuItem, Segment, ViewNode};
