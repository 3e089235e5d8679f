//! Row snapshot collaborator.
//!
//! During a drag the real row content is replaced by a flat bitmap so it can
//! be moved as a single layer. The host supplies that bitmap (and the row's
//! content bounds) through [`RowSnapshotProvider`]; the controller asks for
//! it lazily on the first drag movement of each interaction.

use swiperow_core::Size;

/// Opaque handle to a host-owned bitmap.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ImageHandle(pub u64);

/// A rendered row: the bitmap and the content bounds it was taken at.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RowSnapshot {
    pub image: ImageHandle,
    pub bounds: Size,
}

/// Collaborator that renders the row content to a bitmap.
pub trait RowSnapshotProvider {
    fn snapshot(&mut self) -> RowSnapshot;
}
