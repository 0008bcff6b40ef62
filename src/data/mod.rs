//! Data layer - Pure state without UI coupling
//!
//! NO imports from frontend/ or any rendering code. The frontend reads
//! from these structures to render.

pub mod view_state;

pub use view_state::*;
