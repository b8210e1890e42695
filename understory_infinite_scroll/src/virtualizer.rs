// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Replication of the logical item set into virtual slots.

use crate::Geometry;
use crate::geometry::ceil_to_usize;

/// Number of viewports of virtual content kept on each side of the visible one.
const VIEWPORT_COPIES: usize = 3;

/// Factor by which the logical item count is replicated.
///
/// Without looping this is `1`. With looping it is
/// `3 * ceil(bound_length / unit_length)`: enough copies to cover at least
/// three viewports so the user cannot reach either edge before a boundary
/// correction fires. The ratio is at least `1`, so a looping multiplier is
/// never smaller than `3`, even before the viewport has been laid out.
#[must_use]
pub fn loop_multiplier(looping_enabled: bool, geometry: &Geometry) -> usize {
    if !looping_enabled {
        return 1;
    }
    let unit = geometry.unit_length();
    let ratio = if unit > 0.0 {
        ceil_to_usize(geometry.bound_length / unit).max(1)
    } else {
        1
    };
    ratio.saturating_mul(VIEWPORT_COPIES)
}

/// Number of virtual slots presented to the host list surface.
///
/// A single logical item is never replicated, and no items means no slots.
#[must_use]
pub fn virtual_item_count(logical_count: usize, multiplier: usize) -> usize {
    match logical_count {
        0 => 0,
        1 => 1,
        n => n.saturating_mul(multiplier.max(1)),
    }
}

/// Logical index backing `virtual_index`, or `None` when there are no items.
///
/// Negative virtual indices (transient overscroll) wrap with Euclidean
/// remainder, so the result is always in `0..logical_count`.
#[must_use]
pub fn logical_index(virtual_index: isize, logical_count: usize) -> Option<usize> {
    let count = isize::try_from(logical_count).ok()?;
    if count == 0 {
        return None;
    }
    usize::try_from(virtual_index.rem_euclid(count)).ok()
}

#[cfg(test)]
mod tests {
    use super::{logical_index, loop_multiplier, virtual_item_count};
    use crate::Geometry;

    fn geometry(item: f64, spacing: f64, bound: f64) -> Geometry {
        Geometry {
            item_length: item,
            item_spacing: spacing,
            bound_length: bound,
            ..Geometry::default()
        }
    }

    #[test]
    fn multiplier_covers_three_viewports() {
        let g = geometry(100.0, 0.0, 300.0);
        let multiple = loop_multiplier(true, &g);
        assert_eq!(multiple, 9);
        assert_eq!(virtual_item_count(5, multiple), 45);
    }

    #[test]
    fn multiplier_rounds_partial_units_up() {
        // 375 / 300 -> 2 units per viewport.
        let g = geometry(280.0, 20.0, 375.0);
        assert_eq!(loop_multiplier(true, &g), 6);
    }

    #[test]
    fn multiplier_is_one_without_looping() {
        let g = geometry(100.0, 0.0, 300.0);
        assert_eq!(loop_multiplier(false, &g), 1);
        assert_eq!(virtual_item_count(5, 1), 5);
    }

    #[test]
    fn degenerate_geometry_still_loops() {
        assert_eq!(loop_multiplier(true, &Geometry::default()), 3);
        assert_eq!(loop_multiplier(true, &geometry(100.0, 0.0, 0.0)), 3);
    }

    #[test]
    fn single_and_empty_counts() {
        assert_eq!(virtual_item_count(1, 9), 1);
        assert_eq!(virtual_item_count(1, 1), 1);
        assert_eq!(virtual_item_count(0, 9), 0);
    }

    #[test]
    fn every_virtual_slot_maps_into_logical_range() {
        let count = 5;
        let total = virtual_item_count(count, 9);
        for virtual_index in 0..total {
            let v = isize::try_from(virtual_index).unwrap();
            let logical = logical_index(v, count).unwrap();
            assert!(logical < count, "logical index out of range");
            assert_eq!(logical, virtual_index % count);
        }
    }

    #[test]
    fn negative_indices_wrap() {
        assert_eq!(logical_index(-1, 3), Some(2));
        assert_eq!(logical_index(-3, 3), Some(0));
        assert_eq!(logical_index(4, 0), None);
    }
}
