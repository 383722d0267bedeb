//! Core geometry for the Gooey layout engine.
//!
//! This crate provides the value types every layout works with:
//! - Integer primitives: [`Vector`] and [`Rect`]
//! - Anchor directions: [`Direction`], [`DirectionSet`] and the
//!   [`DirectionOptions`] masks
//! - Construction errors: [`GeometryError`]

mod direction;
mod error;
mod geometry;

pub use direction::{Direction, DirectionOptions, DirectionSet};
pub use error::GeometryError;
pub use geometry::{Rect, Vector};

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn any_direction() -> impl Strategy<Value = Direction> {
        prop::sample::select(Direction::ALL.to_vec())
    }

    fn any_mask() -> impl Strategy<Value = DirectionOptions> {
        prop::sample::select(DirectionOptions::ALL.to_vec())
    }

    fn any_rect() -> impl Strategy<Value = Rect> {
        (-500i32..500, -500i32..500, 0i32..500, 0i32..500)
            .prop_map(|(x, y, w, h)| Rect::new(x, y, w, h).unwrap())
    }

    /// Points spanning every rect from `any_rect` plus a margin.
    fn any_point() -> impl Strategy<Value = Vector> {
        (-600i32..1100, -600i32..1100).prop_map(|(x, y)| Vector::new(x, y))
    }

    // ==========================================================================
    // DIRECTION PROPERTIES
    // ==========================================================================

    proptest! {
        #[test]
        fn prop_mirror_is_involution(direction in any_direction()) {
            prop_assert_eq!(direction.mirror().mirror(), direction);
            prop_assert_eq!(direction.mirror().unit(), -direction.unit());
        }

        #[test]
        fn prop_normalize_lands_in_mask(mask in any_mask(), direction in any_direction()) {
            match mask.normalize(Some(direction)) {
                Some(snapped) => {
                    prop_assert!(mask.contains(snapped));
                    prop_assert_eq!(mask.normalize(Some(snapped)), Some(snapped));
                }
                None => prop_assert_eq!(mask, DirectionOptions::None),
            }
        }
    }

    // ==========================================================================
    // RECT PROPERTIES
    // ==========================================================================

    proptest! {
        #[test]
        fn prop_anchor_keeps_size(rect in any_rect(), container in any_rect(), direction in any_direction()) {
            prop_assert_eq!(rect.anchor(&container, direction).size(), rect.size());
        }

        #[test]
        fn prop_anchor_fits_inside_larger_container(
            w in 0i32..100, h in 0i32..100,
            extra_w in 0i32..100, extra_h in 0i32..100,
            x in -200i32..200, y in -200i32..200,
            direction in any_direction()
        ) {
            let rect = Rect::new(0, 0, w, h).unwrap();
            let container = Rect::new(x, y, w + extra_w, h + extra_h).unwrap();
            let anchored = rect.anchor(&container, direction);
            prop_assert!(anchored.min_x() >= container.min_x());
            prop_assert!(anchored.min_y() >= container.min_y());
            prop_assert!(anchored.max_x() <= container.max_x());
            prop_assert!(anchored.max_y() <= container.max_y());
        }

        #[test]
        fn prop_anchor_outside_touches(rect in any_rect(), container in any_rect(), direction in any_direction()) {
            let attached = rect.anchor_outside(&container, direction);
            prop_assert_eq!(
                attached.anchor_point(direction.mirror()),
                container.anchor_point(direction)
            );
        }

        #[test]
        fn prop_union_is_bounding_box(a in any_rect(), b in any_rect()) {
            let union = a.union(&b);
            prop_assert_eq!(union.min(), a.min().min(b.min()));
            prop_assert_eq!(union.max(), a.max().max(b.max()));
        }

        #[test]
        fn prop_union_covers_points(a in any_rect(), b in any_rect(), point in any_point()) {
            if a.contains(point) || b.contains(point) {
                prop_assert!(a.union(&b).contains(point));
            }
        }

        #[test]
        fn prop_intersect_holds_shared_points(a in any_rect(), b in any_rect(), point in any_point()) {
            let in_both = a.contains(point) && b.contains(point);
            match a.intersect(&b) {
                Some(overlap) => prop_assert_eq!(overlap.contains(point), in_both),
                None => prop_assert!(!in_both),
            }
        }

        #[test]
        fn prop_intersect_within_both(a in any_rect(), b in any_rect()) {
            if let Some(overlap) = a.intersect(&b) {
                prop_assert_eq!(a.union(&overlap), a);
                prop_assert_eq!(b.union(&overlap), b);
            }
        }

        #[test]
        fn prop_corner_view_roundtrip(rect in any_rect()) {
            prop_assert_eq!(Rect::from_corners(rect.min(), rect.max()), Ok(rect));
            prop_assert_eq!(Rect::from_position_size(rect.position(), rect.size()), Ok(rect));
            prop_assert_eq!(rect.max(), rect.position() + rect.size());
        }

        #[test]
        fn prop_new_keeps_corners_in_range(x in any::<i32>(), y in any::<i32>(), w in any::<i32>(), h in any::<i32>()) {
            match Rect::new(x, y, w, h) {
                Ok(rect) => {
                    prop_assert_eq!(rect.max_x().checked_sub(rect.width()), Some(x));
                    prop_assert_eq!(rect.max_y().checked_sub(rect.height()), Some(y));
                }
                Err(GeometryError::NegativeDimension { .. }) => prop_assert!(w < 0 || h < 0),
                Err(err) => {
                    prop_assert_eq!(err, GeometryError::Overflow);
                    prop_assert!(x.checked_add(w).is_none() || y.checked_add(h).is_none());
                }
            }
        }

        #[test]
        fn prop_translate_preserves_size(rect in any_rect(), dx in -500i32..500, dy in -500i32..500) {
            let moved = rect.translate_xy(dx, dy);
            prop_assert_eq!(moved.size(), rect.size());
            prop_assert_eq!(moved.translate_xy(-dx, -dy), rect);
        }

        #[test]
        fn prop_scale_about_fixes_pivot(x in -500i32..500, y in -500i32..500, f in -4.0f32..4.0) {
            let pivot = Vector::new(x, y);
            prop_assert_eq!(pivot.scale_about(f, f, pivot), pivot);
        }
    }
}
