//! Animation support for swiperow.
//!
//! Time-based tweens with easing curves and a damped-spring snap-back,
//! exposed behind the [`AnimationDriver`] collaborator trait. The bundled
//! [`FrameDriver`] is deterministic: the embedder feeds it frame timestamps
//! and it calls back with eased progress, which makes settle/exit behavior
//! fully testable without a real clock.

pub mod driver;
pub mod easing;
pub mod spec;

pub use driver::{AnimationDriver, FrameDriver};
pub use easing::Easing;
pub use spec::{MotionSpec, SpringSpec, TweenSpec};
