// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Navigation targets derived from the current scroll offset.

use crate::Geometry;

/// Where a navigation command should move the scroll offset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollTarget {
    /// Virtual item index, or page index for page navigation.
    pub index: isize,
    /// Scroll offset along the scroll axis.
    pub offset: f64,
}

/// Computes the target for advancing one item from `offset`.
///
/// Returns `None` when fewer than two logical items exist. With looping the
/// next virtual index is simply `current + 1`; without looping it wraps back
/// to the first item after the last one.
#[must_use]
pub fn next_item_target(
    geometry: &Geometry,
    offset: f64,
    logical_count: usize,
    looping_enabled: bool,
) -> Option<ScrollTarget> {
    if logical_count < 2 {
        return None;
    }
    let next = geometry.current_index(offset).saturating_add(1);
    let index = if looping_enabled {
        next
    } else {
        next.rem_euclid(isize::try_from(logical_count).ok()?)
    };
    Some(ScrollTarget {
        index,
        offset: geometry.item_offset(index),
    })
}

/// Computes the target for advancing one viewport-sized page from `offset`.
///
/// Returns `None` when fewer than two logical items exist, or when looping is
/// off and the content has no pages to wrap over.
#[must_use]
pub fn next_page_target(
    geometry: &Geometry,
    offset: f64,
    logical_count: usize,
    looping_enabled: bool,
) -> Option<ScrollTarget> {
    if logical_count < 2 {
        return None;
    }
    let next = geometry.current_page_index(offset).saturating_add(1);
    let index = if looping_enabled {
        next
    } else {
        let pages = isize::try_from(geometry.total_pages()).ok()?;
        if pages == 0 {
            return None;
        }
        next.rem_euclid(pages)
    };
    Some(ScrollTarget {
        index,
        offset: geometry.page_offset(index),
    })
}
