// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared geometry state and the offset mapping built on it.

use kurbo::{Insets, Size};

use crate::ScrollAxis;

/// Lengths along the scroll axis that every loop computation shares.
///
/// `bound_length` and `scroll_length` track the host surface (viewport and
/// content extent); the item metrics are fixed between data reloads.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Geometry {
    /// Extent of one item along the scroll axis.
    pub item_length: f64,
    /// Gap between items and leading/trailing inset along the scroll axis.
    pub item_spacing: f64,
    /// Inset on both edges perpendicular to the scroll axis.
    pub padding: f64,
    /// Viewport extent along the scroll axis.
    pub bound_length: f64,
    /// Total content extent along the scroll axis.
    pub scroll_length: f64,
}

impl Geometry {
    /// Distance between the leading edges of two consecutive items.
    #[must_use]
    pub fn unit_length(&self) -> f64 {
        self.item_length + self.item_spacing
    }

    /// Virtual index of the item whose center is closest to the viewport center.
    ///
    /// The result is not clamped to the virtual range: during fast flings it
    /// may transiently fall outside it, and it is negative when the offset has
    /// overscrolled the leading edge. Returns `0` when the unit length is zero.
    #[must_use]
    pub fn current_index(&self, offset: f64) -> isize {
        let unit = self.unit_length();
        if unit <= 0.0 {
            return 0;
        }
        let centered =
            offset + self.bound_length / 2.0 - self.item_length / 2.0 - self.item_spacing;
        floor_to_isize(centered / unit)
    }

    /// Page index when one viewport is treated as one page.
    #[must_use]
    pub fn current_page_index(&self, offset: f64) -> isize {
        if self.bound_length <= 0.0 {
            return 0;
        }
        floor_to_isize(offset / self.bound_length)
    }

    /// Number of viewport-sized pages needed to cover the content.
    #[must_use]
    pub fn total_pages(&self) -> usize {
        if self.bound_length <= 0.0 {
            return 0;
        }
        ceil_to_usize(self.scroll_length / self.bound_length)
    }

    /// Offset that centers the item at `virtual_index` in the viewport.
    #[must_use]
    pub fn item_offset(&self, virtual_index: isize) -> f64 {
        index_to_f64(virtual_index) * self.unit_length() + self.item_spacing
            + self.item_length / 2.0
            - self.bound_length / 2.0
    }

    /// Offset of the leading edge of page `page`.
    #[must_use]
    pub fn page_offset(&self, page: isize) -> f64 {
        index_to_f64(page) * self.bound_length
    }

    /// Content extent a flow layout produces for `virtual_count` items.
    ///
    /// This is `item_spacing` for the leading inset, then `virtual_count`
    /// units (each item plus its trailing gap, where the last gap doubles as
    /// the trailing inset).
    #[must_use]
    pub fn content_length(&self, virtual_count: usize) -> f64 {
        if virtual_count == 0 {
            return 0.0;
        }
        self.item_spacing + virtual_count as f64 * self.unit_length()
    }

    /// Size of every item cell for a viewport of `viewport` size.
    ///
    /// The cross-axis extent is the viewport's cross extent minus padding on
    /// both sides, clamped to zero.
    #[must_use]
    pub fn item_size(&self, axis: ScrollAxis, viewport: Size) -> Size {
        let cross = (axis.cross(viewport) - 2.0 * self.padding).max(0.0);
        axis.pack_size(self.item_length, cross)
    }

    /// Section insets: `padding` across the axis, `item_spacing` along it.
    #[must_use]
    pub fn section_insets(&self, axis: ScrollAxis) -> Insets {
        axis.pack_insets(self.item_spacing, self.padding)
    }
}

fn index_to_f64(index: isize) -> f64 {
    index as f64
}

pub(crate) fn floor_to_isize(value: f64) -> isize {
    if !value.is_finite() {
        return 0;
    }
    #[expect(
        clippy::cast_possible_truncation,
        reason = "Saturating conversion of an already floored value"
    )]
    {
        libm::floor(value) as isize
    }
}

pub(crate) fn ceil_to_usize(value: f64) -> usize {
    if !value.is_finite() || value <= 0.0 {
        return 0;
    }
    #[expect(
        clippy::cast_possible_truncation,
        reason = "Value is positive and finite; conversion saturates"
    )]
    {
        libm::ceil(value) as usize
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Size;

    use super::Geometry;
    use crate::ScrollAxis;

    fn sample() -> Geometry {
        Geometry {
            item_length: 280.0,
            item_spacing: 20.0,
            padding: 10.0,
            bound_length: 375.0,
            scroll_length: 3620.0,
        }
    }

    #[test]
    fn current_index_tracks_viewport_center() {
        let g = sample();
        // Item 0 is centered at offset spacing + item/2 - bound/2.
        let centered_zero = g.item_offset(0);
        assert_eq!(g.current_index(centered_zero), 0);
        assert_eq!(g.current_index(g.item_offset(5)), 5);
        // The index advances once a full unit has scrolled past.
        assert_eq!(g.current_index(centered_zero + 299.0), 0);
        assert_eq!(g.current_index(centered_zero + 301.0), 1);
    }

    #[test]
    fn current_index_floors_negative_offsets() {
        let g = Geometry {
            item_length: 100.0,
            item_spacing: 0.0,
            padding: 0.0,
            bound_length: 100.0,
            scroll_length: 1000.0,
        };
        assert_eq!(g.current_index(-10.0), -1);
        assert_eq!(g.current_index(0.0), 0);
    }

    #[test]
    fn zero_unit_length_never_divides() {
        let g = Geometry::default();
        assert_eq!(g.current_index(123.0), 0);
        assert_eq!(g.current_page_index(123.0), 0);
        assert_eq!(g.total_pages(), 0);
    }

    #[test]
    fn pages_cover_content() {
        let g = Geometry {
            bound_length: 300.0,
            scroll_length: 1000.0,
            ..Geometry::default()
        };
        assert_eq!(g.total_pages(), 4);
        assert_eq!(g.current_page_index(299.0), 0);
        assert_eq!(g.current_page_index(300.0), 1);
        assert_eq!(g.page_offset(2), 600.0);
    }

    #[test]
    fn content_length_matches_flow_layout() {
        let g = sample();
        assert_eq!(g.content_length(0), 0.0);
        // 20 + 12 * 300
        assert_eq!(g.content_length(12), 3620.0);
    }

    #[test]
    fn item_size_and_insets_follow_axis() {
        let g = sample();
        let viewport = Size::new(375.0, 200.0);
        assert_eq!(
            g.item_size(ScrollAxis::Horizontal, viewport),
            Size::new(280.0, 180.0)
        );
        assert_eq!(
            g.item_size(ScrollAxis::Vertical, viewport),
            Size::new(355.0, 280.0)
        );

        let insets = g.section_insets(ScrollAxis::Horizontal);
        assert_eq!((insets.x0, insets.y0), (20.0, 10.0));
    }
}
