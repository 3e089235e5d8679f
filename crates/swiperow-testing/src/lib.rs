//! Scripted-gesture testing for swiperow.
//!
//! [`SwipeRobot`] wires a real [`swiperow::SwipeInteractionController`] to
//! stub collaborators, drives it with scripted drag phases, and steps a
//! manual frame clock so settle/exit animations run deterministically.

pub mod robot;

pub use robot::{CountingSnapshotProvider, RobotEvent, SwipeRobot};
