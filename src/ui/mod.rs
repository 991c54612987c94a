//! Terminal User Interface module.
//!
//! This module provides the TUI for the city portal, including:
//! - Main event loop (`run`)
//! - Key dispatch for each section and for text input
//! - Rendering of the header, the five sections and the overlays
//! - Background task event processing
//!
//! # Module Structure
//!
//! - `loop_runner` - Main event loop and terminal management
//! - `input` - Keyboard input handling
//! - `events` - Background task event processing
//! - `render` - Layout and overlay dispatch
//! - `helpers` - Shared drawing helpers
//! - `header` - Section tabs, city and user
//! - `housing`, `shops`, `navigator`, `subscription`, `community` - Section screens
//! - `status` - Status bar widget
//! - `toast` - Toast stack
//! - `help` - Keybinding overlay

mod community;
mod events;
mod header;
mod help;
mod helpers;
mod housing;
mod input;
mod loop_runner;
mod navigator;
mod render;
mod shops;
mod status;
mod subscription;
mod toast;

// Re-export the public API
pub use loop_runner::{run, Action};
