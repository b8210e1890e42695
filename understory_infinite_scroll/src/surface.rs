// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Capabilities the controller consumes from, and reports to, its host.

use alloc::boxed::Box;

use kurbo::{Point, Size};

use crate::ScrollAxis;

/// The host's virtualized list widget.
///
/// Implementations wrap whatever scrollable surface the UI stack provides.
/// The controller only reads extents and the scroll position, rewrites the
/// scroll position, and asks for reloads; all rendering stays with the host.
pub trait ListSurface {
    /// Size of the visible viewport.
    fn viewport_size(&self) -> Size;

    /// Size of the laid-out content.
    fn content_size(&self) -> Size;

    /// Current scroll position (content offset).
    fn scroll_position(&self) -> Point;

    /// Moves the scroll position, optionally animating the change.
    ///
    /// Non-animated calls are used for silent boundary corrections and must
    /// take effect immediately.
    fn set_scroll_position(&mut self, position: Point, animated: bool);

    /// Discards presented items and queries the item count again.
    fn request_full_reload(&mut self);

    /// Enables or disables viewport-sized snapping.
    fn set_paging_enabled(&mut self, _enabled: bool) {}

    /// Enables or disables direct user scrolling.
    fn set_user_scroll_enabled(&mut self, _enabled: bool) {}

    /// Switches the flow layout's scroll axis.
    fn set_scroll_axis(&mut self, _axis: ScrollAxis) {}
}

/// Supplies the logical items of a carousel.
pub trait ItemSource {
    /// Host-side handle for a rendered item (a cell, widget id, ...).
    type Item;

    /// Number of distinct logical items.
    fn item_count(&self) -> usize;

    /// Renders the item at `logical_index`, which is always below
    /// [`ItemSource::item_count`].
    fn render_item(&mut self, logical_index: usize) -> Self::Item;
}

/// Receives carousel notifications.
///
/// Every method defaults to doing nothing, and `()` is the silent observer.
pub trait LoopObserver {
    /// Scrolling came to rest with `logical_index` under the viewport center.
    fn settled_at_index(&mut self, _logical_index: usize) {}

    /// The user lifted their finger; `offset` is the scroll offset at that moment.
    fn drag_ended(&mut self, _offset: f64) {}

    /// The item at `logical_index` was tapped or clicked.
    fn item_selected(&mut self, _logical_index: usize) {}
}

impl LoopObserver for () {}

/// [`LoopObserver`] built from plain closures.
///
/// ```rust
/// use understory_infinite_scroll::{FnObserver, LoopObserver};
///
/// let mut last = None;
/// let mut observer = FnObserver::new().on_settled(|index| last = Some(index));
/// observer.settled_at_index(2);
/// drop(observer);
/// assert_eq!(last, Some(2));
/// ```
pub struct FnObserver<'a> {
    settled: Option<Box<dyn FnMut(usize) + 'a>>,
    drag_ended: Option<Box<dyn FnMut(f64) + 'a>>,
    selected: Option<Box<dyn FnMut(usize) + 'a>>,
}

impl core::fmt::Debug for FnObserver<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FnObserver")
            .field("settled", &self.settled.is_some())
            .field("drag_ended", &self.drag_ended.is_some())
            .field("selected", &self.selected.is_some())
            .finish()
    }
}

impl Default for FnObserver<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> FnObserver<'a> {
    /// Creates an observer with no callbacks registered.
    #[must_use]
    pub fn new() -> Self {
        Self {
            settled: None,
            drag_ended: None,
            selected: None,
        }
    }

    /// Registers the settle callback.
    #[must_use]
    pub fn on_settled(mut self, f: impl FnMut(usize) + 'a) -> Self {
        self.settled = Some(Box::new(f));
        self
    }

    /// Registers the drag-end callback.
    #[must_use]
    pub fn on_drag_ended(mut self, f: impl FnMut(f64) + 'a) -> Self {
        self.drag_ended = Some(Box::new(f));
        self
    }

    /// Registers the selection callback.
    #[must_use]
    pub fn on_selected(mut self, f: impl FnMut(usize) + 'a) -> Self {
        self.selected = Some(Box::new(f));
        self
    }
}

impl LoopObserver for FnObserver<'_> {
    fn settled_at_index(&mut self, logical_index: usize) {
        if let Some(f) = self.settled.as_mut() {
            f(logical_index);
        }
    }

    fn drag_ended(&mut self, offset: f64) {
        if let Some(f) = self.drag_ended.as_mut() {
            f(offset);
        }
    }

    fn item_selected(&mut self, logical_index: usize) {
        if let Some(f) = self.selected.as_mut() {
            f(logical_index);
        }
    }
}
