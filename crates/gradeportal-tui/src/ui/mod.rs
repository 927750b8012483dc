//! Terminal UI module using ratatui.
//!
//! This module provides the TUI rendering and input handling:
//!
//! - `render`: Main frame rendering and per-route screens
//! - `header`: The page header shared by every screen
//! - `input`: Keyboard event handling
//! - `styles`: Color schemes and text styling

pub mod header;
pub mod input;
pub mod render;
pub mod styles;
