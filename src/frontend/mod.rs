//! Frontend layer - terminal lifecycle and input events
//!
//! Translates crossterm's native event stream into the frontend-agnostic
//! [`FrontendEvent`] enum so the core logic (and its tests) only handle one
//! event shape, without a live terminal.

pub mod events;
pub mod tui;

pub use events::FrontendEvent;
pub use tui::TuiFrontend;
