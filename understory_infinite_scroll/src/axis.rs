// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Insets, Point, Size};

/// Axis along which a carousel scrolls.
///
/// Every length the controller works with (item length, viewport extent,
/// scroll offset) is measured along this axis. Sizes and positions handed to
/// or received from the host are projected through it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ScrollAxis {
    /// Items are laid out left to right; offsets are `x` coordinates.
    #[default]
    Horizontal,
    /// Items are laid out top to bottom; offsets are `y` coordinates.
    Vertical,
}

impl ScrollAxis {
    /// Returns the extent of `size` along this axis.
    #[must_use]
    pub fn main(self, size: Size) -> f64 {
        match self {
            Self::Horizontal => size.width,
            Self::Vertical => size.height,
        }
    }

    /// Returns the extent of `size` perpendicular to this axis.
    #[must_use]
    pub fn cross(self, size: Size) -> f64 {
        match self {
            Self::Horizontal => size.height,
            Self::Vertical => size.width,
        }
    }

    /// Returns the coordinate of `point` along this axis.
    #[must_use]
    pub fn offset_of(self, point: Point) -> f64 {
        match self {
            Self::Horizontal => point.x,
            Self::Vertical => point.y,
        }
    }

    /// Returns `point` with its coordinate along this axis replaced by `offset`.
    ///
    /// The cross-axis coordinate is left untouched.
    #[must_use]
    pub fn with_offset(self, point: Point, offset: f64) -> Point {
        match self {
            Self::Horizontal => Point::new(offset, point.y),
            Self::Vertical => Point::new(point.x, offset),
        }
    }

    /// Builds a size from main- and cross-axis extents.
    #[must_use]
    pub fn pack_size(self, main: f64, cross: f64) -> Size {
        match self {
            Self::Horizontal => Size::new(main, cross),
            Self::Vertical => Size::new(cross, main),
        }
    }

    /// Builds symmetric insets: `main` on both edges along the axis and
    /// `cross` on both edges perpendicular to it.
    #[must_use]
    pub fn pack_insets(self, main: f64, cross: f64) -> Insets {
        match self {
            Self::Horizontal => Insets::new(main, cross, main, cross),
            Self::Vertical => Insets::new(cross, main, cross, main),
        }
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Size};

    use super::ScrollAxis;

    #[test]
    fn projections_follow_axis() {
        let size = Size::new(320.0, 180.0);
        assert_eq!(ScrollAxis::Horizontal.main(size), 320.0);
        assert_eq!(ScrollAxis::Horizontal.cross(size), 180.0);
        assert_eq!(ScrollAxis::Vertical.main(size), 180.0);
        assert_eq!(ScrollAxis::Vertical.cross(size), 320.0);

        let p = Point::new(12.0, 34.0);
        assert_eq!(ScrollAxis::Horizontal.offset_of(p), 12.0);
        assert_eq!(ScrollAxis::Vertical.offset_of(p), 34.0);
    }

    #[test]
    fn with_offset_keeps_cross_coordinate() {
        let p = Point::new(12.0, 34.0);
        assert_eq!(
            ScrollAxis::Horizontal.with_offset(p, 100.0),
            Point::new(100.0, 34.0)
        );
        assert_eq!(
            ScrollAxis::Vertical.with_offset(p, 100.0),
            Point::new(12.0, 100.0)
        );
    }

    #[test]
    fn insets_put_spacing_along_axis_and_padding_across() {
        let h = ScrollAxis::Horizontal.pack_insets(20.0, 10.0);
        assert_eq!((h.x0, h.y0, h.x1, h.y1), (20.0, 10.0, 20.0, 10.0));

        let v = ScrollAxis::Vertical.pack_insets(20.0, 10.0);
        assert_eq!((v.x0, v.y0, v.x1, v.y1), (10.0, 20.0, 10.0, 20.0));
    }
}
