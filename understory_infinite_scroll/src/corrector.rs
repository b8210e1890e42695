// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Silent re-centering of the scroll offset near the ends of virtual content.

use crate::Geometry;

/// Distance of one correction jump.
///
/// This is `unit_length * logical_count * (multiplier / 2)`, a whole number of
/// logical cycles, so the content under the viewport looks identical before
/// and after the jump.
#[must_use]
pub fn correction_cycle(geometry: &Geometry, logical_count: usize, multiplier: usize) -> f64 {
    geometry.unit_length() * logical_count as f64 * (multiplier / 2) as f64
}

/// Returns the re-centered offset if `offset` has left the safe range.
///
/// The safe range is `0..=scroll_length - bound_length`. Returns `None` when
/// no correction is needed: looping is off, fewer than two items exist, the
/// content fits in one viewport, or the offset is already inside the range.
#[must_use]
pub fn corrected_offset(
    geometry: &Geometry,
    offset: f64,
    logical_count: usize,
    multiplier: usize,
    looping_enabled: bool,
) -> Option<f64> {
    if !looping_enabled || logical_count < 2 {
        return None;
    }
    let top_threshold = 0.0;
    let bottom_threshold = geometry.scroll_length - geometry.bound_length;
    if bottom_threshold <= top_threshold {
        return None;
    }
    let cycle = correction_cycle(geometry, logical_count, multiplier);
    if cycle <= 0.0 {
        return None;
    }
    if offset < top_threshold {
        Some(offset + cycle)
    } else if offset > bottom_threshold {
        Some(offset - cycle)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::{corrected_offset, correction_cycle};
    use crate::{Geometry, logical_index, loop_multiplier, virtual_item_count};

    fn looping_geometry(count: usize) -> (Geometry, usize) {
        let mut g = Geometry {
            item_length: 100.0,
            item_spacing: 0.0,
            padding: 0.0,
            bound_length: 300.0,
            scroll_length: 0.0,
        };
        let multiple = loop_multiplier(true, &g);
        g.scroll_length = g.content_length(virtual_item_count(count, multiple));
        (g, multiple)
    }

    #[test]
    fn cycle_is_whole_logical_rounds() {
        let (g, multiple) = looping_geometry(5);
        assert_eq!(multiple, 9);
        // 100 * 5 * 4
        assert_eq!(correction_cycle(&g, 5, multiple), 2000.0);
    }

    #[test]
    fn leading_overscroll_jumps_forward_keeping_item() {
        let (g, multiple) = looping_geometry(5);
        let before = -10.0;
        let after = corrected_offset(&g, before, 5, multiple, true).unwrap();
        assert_eq!(after, 1990.0);
        assert_eq!(
            logical_index(g.current_index(before), 5),
            logical_index(g.current_index(after), 5)
        );
    }

    #[test]
    fn trailing_overscroll_jumps_backward_keeping_item() {
        let (g, multiple) = looping_geometry(5);
        // Bottom threshold is 4500 - 300.
        let before = 4210.0;
        let after = corrected_offset(&g, before, 5, multiple, true).unwrap();
        assert_eq!(after, 2210.0);
        assert_eq!(
            logical_index(g.current_index(before), 5),
            logical_index(g.current_index(after), 5)
        );
    }

    #[test]
    fn correction_is_idempotent() {
        let (g, multiple) = looping_geometry(5);
        let once = corrected_offset(&g, -10.0, 5, multiple, true).unwrap();
        assert!(corrected_offset(&g, once, 5, multiple, true).is_none());
    }

    #[test]
    fn offsets_inside_range_are_left_alone() {
        let (g, multiple) = looping_geometry(5);
        assert!(corrected_offset(&g, 0.0, 5, multiple, true).is_none());
        assert!(corrected_offset(&g, 4200.0, 5, multiple, true).is_none());
    }

    #[test]
    fn disabled_cases_never_correct() {
        let (g, multiple) = looping_geometry(5);
        assert!(corrected_offset(&g, -10.0, 5, multiple, false).is_none());
        assert!(corrected_offset(&g, -10.0, 1, multiple, true).is_none());

        let fits = Geometry {
            scroll_length: 300.0,
            ..g
        };
        assert!(corrected_offset(&fits, -10.0, 5, multiple, true).is_none());
    }
}
