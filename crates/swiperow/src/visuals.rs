//! The render model the host draws each frame.

use swiperow_core::{Color, Point};

use crate::binding::ViewHandle;
use crate::snapshot::ImageHandle;

/// Snapshot of everything visible during a swipe interaction.
///
/// Exists only while drag visuals are materialized: from the first drag
/// movement until the settle animation tears them down (an exited row keeps
/// its visuals until [`reset`](crate::SwipeInteractionController::reset)).
/// Layering, bottom to top: indicator color layer, sliding action view,
/// row snapshot.
#[derive(Clone, Debug, PartialEq)]
pub struct SwipeVisuals {
    /// The dragged row content, rendered flat.
    pub snapshot: ImageHandle,
    /// Horizontal offset of the snapshot from its resting position.
    pub snapshot_offset: f32,
    /// Background color of the indicator layer revealed behind the row.
    pub indicator_color: Color,
    /// The active action view, if any side is configured for this drag.
    pub sliding_view: Option<ViewHandle>,
    /// Alpha of the sliding view in [0, 1].
    pub sliding_alpha: f32,
    /// Center of the sliding view; `None` while it has no slot.
    pub sliding_center: Option<Point>,
}
