//! Swipe-to-reveal interaction controller for list rows.
//!
//! A row is dragged horizontally to reveal one of up to four contextual
//! actions (left/right, short/long), each bound to a view handle, a color,
//! an [`ActionMode`](swiperow_core::ActionMode), and a completion callback.
//! [`SwipeInteractionController`] owns the gesture-to-state translation:
//! drag phases come in, a [`SwipeVisuals`] render model and exactly one
//! completion per gesture come out.
//!
//! Rendering and input recognition stay with the host. The controller only
//! asks its two collaborators for a row snapshot
//! ([`RowSnapshotProvider`]) and for timed animations
//! ([`swiperow_animation::AnimationDriver`]).

pub mod binding;
pub mod controller;
pub mod row;
pub mod snapshot;
pub mod velocity;
pub mod visuals;

pub use binding::{ActionBinding, CompletionFn, ViewHandle};
pub use controller::{DragPhase, SwipeInteractionController, SwipeListener};
pub use row::{DefaultBinding, SwipeRow};
pub use snapshot::{ImageHandle, RowSnapshot, RowSnapshotProvider};
pub use velocity::{VelocityTracker1D, VelocityTracker2D};
pub use visuals::SwipeVisuals;

pub use swiperow_core::{
    ActionMode, Color, Point, Size, SwipeConfig, SwipeDirection, TriggerState, TriggerStates,
};
