//! Value types and pure math for the swiperow interaction engine.
//!
//! Everything in this crate is side-effect free: colors, geometry, the
//! trigger-state model, the shared configuration struct, and the percentage
//! arithmetic that turns a horizontal drag offset into trigger states,
//! indicator colors, and icon-slot positions.

pub mod color;
pub mod config;
pub mod geometry;
pub mod percent;
pub mod state;

pub use color::Color;
pub use config::{defaults, SwipeConfig};
pub use geometry::{Point, Size};
pub use state::{ActionMode, SwipeDirection, TriggerState, TriggerStates};
