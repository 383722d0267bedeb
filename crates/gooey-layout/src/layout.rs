//! The two-phase size negotiation protocol.
//!
//! A parent first asks each child what size it would like
//! ([`Layout::request_size`], [`Layout::size_hint`]), then commits a
//! rectangle with [`Layout::set_bounds`]. A layout only accepts bounds
//! whose size is a fixed point of its own `request_size`.

use crate::error::LayoutError;
use gooey_core::{Rect, Vector};

/// A node in a layout tree.
pub trait Layout {
    /// The closest size to `candidate` this layout is willing to occupy.
    fn request_size(&self, candidate: Vector) -> Vector;

    /// Preferred size when the parent has no opinion.
    ///
    /// Implementations that override this must return a size `s` for which
    /// `request_size(s) == s`.
    fn size_hint(&self) -> Vector {
        self.request_size(Vector::ZERO)
    }

    /// True if `size` would be accepted unchanged.
    fn check_size(&self, size: Vector) -> bool {
        self.request_size(size) == size
    }

    /// Commit final bounds, propagating to children first.
    ///
    /// Fails with [`LayoutError::RejectedSize`] if `bounds.size()` is not
    /// accepted. Composites check every child placement with
    /// [`Layout::check_size`] before committing any of them, so a
    /// rejection leaves the whole subtree as it was. A child whose
    /// `set_bounds` fails despite accepting the size can still leave
    /// earlier siblings committed; the parent's own bounds stay unchanged.
    fn set_bounds(&mut self, bounds: Rect) -> Result<(), LayoutError>;

    /// Bounds from the last successful [`Layout::set_bounds`].
    fn bounds(&self) -> Result<Rect, LayoutError>;
}

impl<L: Layout + ?Sized> Layout for Box<L> {
    fn request_size(&self, candidate: Vector) -> Vector {
        (**self).request_size(candidate)
    }

    fn size_hint(&self) -> Vector {
        (**self).size_hint()
    }

    fn check_size(&self, size: Vector) -> bool {
        (**self).check_size(size)
    }

    fn set_bounds(&mut self, bounds: Rect) -> Result<(), LayoutError> {
        (**self).set_bounds(bounds)
    }

    fn bounds(&self) -> Result<Rect, LayoutError> {
        (**self).bounds()
    }
}

impl<L: Layout + ?Sized> Layout for &mut L {
    fn request_size(&self, candidate: Vector) -> Vector {
        (**self).request_size(candidate)
    }

    fn size_hint(&self) -> Vector {
        (**self).size_hint()
    }

    fn check_size(&self, size: Vector) -> bool {
        (**self).check_size(size)
    }

    fn set_bounds(&mut self, bounds: Rect) -> Result<(), LayoutError> {
        (**self).set_bounds(bounds)
    }

    fn bounds(&self) -> Result<Rect, LayoutError> {
        (**self).bounds()
    }
}

/// Reject `bounds` unless its size is a fixed point of `layout`.
pub(crate) fn ensure_accepted<L: Layout + ?Sized>(
    layout: &L,
    bounds: Rect,
) -> Result<(), LayoutError> {
    let requested = bounds.size();
    let accepted = layout.request_size(requested);
    if accepted == requested {
        Ok(())
    } else {
        tracing::debug!(?requested, ?accepted, "bounds rejected");
        Err(LayoutError::RejectedSize {
            requested,
            accepted,
        })
    }
}

/// Offer each child its placement, in order.
///
/// Every placement is checked before the first child is committed.
pub(crate) fn commit_children<L: Layout>(
    children: &mut [L],
    placements: &[Rect],
) -> Result<(), LayoutError> {
    for (child, placed) in children.iter().zip(placements) {
        ensure_accepted(child, *placed)?;
    }
    for (child, placed) in children.iter_mut().zip(placements) {
        child.set_bounds(*placed)?;
    }
    Ok(())
}

/// Read a stored bounds slot.
pub(crate) fn stored(bounds: Option<Rect>) -> Result<Rect, LayoutError> {
    bounds.ok_or(LayoutError::NotLaidOut)
}
