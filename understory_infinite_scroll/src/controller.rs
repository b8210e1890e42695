// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The stateful loop controller driven by host layout and scroll events.
//!
//! [`InfiniteScrollLoop`] owns the host's [`ListSurface`] handle, the
//! consumer's [`ItemSource`] and a [`LoopObserver`]. Hosts forward their list
//! widget's callbacks to it:
//!
//! | Host event                    | Controller call                                  |
//! |-------------------------------|--------------------------------------------------|
//! | layout pass                   | [`InfiniteScrollLoop::layout_invalidated`]       |
//! | item count query              | [`InfiniteScrollLoop::virtual_item_count`]       |
//! | cell request                  | [`InfiniteScrollLoop::render_item`]              |
//! | scroll position changed       | [`InfiniteScrollLoop::on_scroll_position_changed`] |
//! | drag ended                    | [`InfiniteScrollLoop::on_drag_ended`]            |
//! | deceleration ended            | [`InfiniteScrollLoop::on_deceleration_ended`]    |
//! | programmatic scroll finished  | [`InfiniteScrollLoop::on_scroll_animation_ended`] |
//! | item tapped                   | [`InfiniteScrollLoop::on_item_selected`]         |
//!
//! Item metrics and the loop multiplier are cached between data reloads and
//! recomputed lazily on the next query after an invalidation. Viewport and
//! content extents are always read live from the surface.

use kurbo::{Insets, Size};
use log::{debug, trace};

use crate::config::sanitize_length;
use crate::{
    Geometry, ItemSource, LayoutConfig, ListSurface, LoopObserver, LoopOptions, ScrollAxis,
    ScrollTarget, corrected_offset, logical_index, loop_multiplier, next_item_target,
    next_page_target, virtual_item_count,
};

/// Item metrics fixed between reloads.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Metrics {
    total_rows: usize,
    item_length: f64,
    item_spacing: f64,
    padding: f64,
    multiplier: usize,
}

impl Metrics {
    fn virtual_count(&self) -> usize {
        virtual_item_count(self.total_rows, self.multiplier)
    }
}

/// Infinite-looping carousel controller.
///
/// ## Minimal example
///
/// ```rust
/// use kurbo::{Point, Size};
/// use understory_infinite_scroll::{InfiniteScrollLoop, ItemSource, LayoutConfig, ListSurface};
///
/// struct Surface {
///     viewport: Size,
///     content: Size,
///     position: Point,
/// }
///
/// impl ListSurface for Surface {
///     fn viewport_size(&self) -> Size { self.viewport }
///     fn content_size(&self) -> Size { self.content }
///     fn scroll_position(&self) -> Point { self.position }
///     fn set_scroll_position(&mut self, position: Point, _animated: bool) {
///         self.position = position;
///     }
///     fn request_full_reload(&mut self) {}
/// }
///
/// struct Colors;
///
/// impl ItemSource for Colors {
///     type Item = &'static str;
///     fn item_count(&self) -> usize { 3 }
///     fn render_item(&mut self, logical_index: usize) -> &'static str {
///         ["red", "green", "blue"][logical_index]
///     }
/// }
///
/// let surface = Surface {
///     viewport: Size::new(300.0, 200.0),
///     content: Size::ZERO,
///     position: Point::ZERO,
/// };
/// let mut carousel = InfiniteScrollLoop::new(surface, Colors)
///     .with_layout(LayoutConfig::new().with_item_length(100.0));
///
/// // 3 items, 3 per viewport, 3 viewports of copies.
/// assert_eq!(carousel.virtual_item_count(), 27);
/// assert_eq!(carousel.render_item(4), "green");
/// ```
#[derive(Debug)]
pub struct InfiniteScrollLoop<S, D, O = ()> {
    surface: S,
    source: D,
    observer: O,
    options: LoopOptions,
    layout: LayoutConfig,
    metrics: Option<Metrics>,
}

impl<S: ListSurface, D: ItemSource> InfiniteScrollLoop<S, D> {
    /// Creates a controller with default options and layout and no observer.
    ///
    /// The default options are pushed to the surface immediately.
    pub fn new(surface: S, source: D) -> Self {
        let mut this = Self {
            surface,
            source,
            observer: (),
            options: LoopOptions::default(),
            layout: LayoutConfig::default(),
            metrics: None,
        };
        this.apply_options();
        this
    }
}

impl<S: ListSurface, D: ItemSource, O: LoopObserver> InfiniteScrollLoop<S, D, O> {
    /// Replaces the observer.
    pub fn with_observer<P: LoopObserver>(self, observer: P) -> InfiniteScrollLoop<S, D, P> {
        InfiniteScrollLoop {
            surface: self.surface,
            source: self.source,
            observer,
            options: self.options,
            layout: self.layout,
            metrics: self.metrics,
        }
    }

    /// Replaces the options and pushes them to the surface.
    #[must_use]
    pub fn with_options(mut self, options: LoopOptions) -> Self {
        self.options = options;
        self.metrics = None;
        self.apply_options();
        self
    }

    /// Replaces the item metrics.
    #[must_use]
    pub fn with_layout(mut self, layout: LayoutConfig) -> Self {
        self.layout = layout;
        self.metrics = None;
        self
    }

    /// Returns the host surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Returns the host surface mutably.
    ///
    /// Changing the surface's extents here should be followed by
    /// [`InfiniteScrollLoop::layout_invalidated`].
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Returns the item source.
    pub fn source(&self) -> &D {
        &self.source
    }

    /// Returns the item source mutably.
    ///
    /// Changes to the item count are picked up by
    /// [`InfiniteScrollLoop::reload_data`].
    pub fn source_mut(&mut self) -> &mut D {
        &mut self.source
    }

    /// Returns the observer.
    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Returns the observer mutably.
    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    /// Returns the current options.
    pub fn options(&self) -> LoopOptions {
        self.options
    }

    /// Returns the current item metrics configuration.
    pub fn layout(&self) -> LayoutConfig {
        self.layout
    }

    // --- configuration -------------------------------------------------

    /// Turns looping on or off, reloading the surface if the value changed.
    pub fn set_looping_enabled(&mut self, enabled: bool) {
        if self.options.looping_enabled == enabled {
            return;
        }
        self.options.looping_enabled = enabled;
        self.reload_data();
    }

    /// Switches the scroll axis, reloading the surface if the value changed.
    pub fn set_scroll_axis(&mut self, axis: ScrollAxis) {
        if self.options.scroll_axis == axis {
            return;
        }
        self.options.scroll_axis = axis;
        self.surface.set_scroll_axis(axis);
        self.reload_data();
    }

    /// Enables or disables viewport-sized paging on the surface.
    pub fn set_paging_enabled(&mut self, enabled: bool) {
        self.options.paging_enabled = enabled;
        self.surface.set_paging_enabled(enabled);
    }

    /// Enables or disables user scrolling on the surface.
    pub fn set_user_scroll_enabled(&mut self, enabled: bool) {
        self.options.user_scroll_enabled = enabled;
        self.surface.set_user_scroll_enabled(enabled);
    }

    /// Replaces the item metrics and reloads the surface.
    pub fn set_layout_config(&mut self, layout: LayoutConfig) {
        if self.layout == layout {
            return;
        }
        self.layout = layout;
        self.reload_data();
    }

    // --- lifecycle -----------------------------------------------------

    /// Drops cached metrics and asks the surface for a full reload.
    ///
    /// Metrics are recomputed on the next query, typically the surface's
    /// item-count request during the reload.
    pub fn reload_data(&mut self) {
        debug!("infinite scroll: reload requested");
        self.metrics = None;
        self.surface.request_full_reload();
    }

    /// Re-establishes geometry after a host layout pass, then corrects the offset.
    ///
    /// If the new viewport changes the virtual item count, a full reload is
    /// requested so the surface presents the right number of slots.
    pub fn layout_invalidated(&mut self) {
        let previous = self.metrics.take().map(|m| m.virtual_count());
        let current = self.metrics().virtual_count();
        if previous.is_some_and(|count| count != current) {
            debug!("infinite scroll: virtual count {previous:?} -> {current} after layout");
            self.surface.request_full_reload();
        }
        self.correct_offset();
    }

    // --- data source ---------------------------------------------------

    /// Number of logical items captured at the last reload.
    pub fn logical_item_count(&mut self) -> usize {
        self.metrics().total_rows
    }

    /// Number of virtual slots the surface should present.
    pub fn virtual_item_count(&mut self) -> usize {
        self.metrics().virtual_count()
    }

    /// Current loop multiplier.
    pub fn loop_multiplier(&mut self) -> usize {
        self.metrics().multiplier
    }

    /// Logical index backing the slot at `virtual_index`.
    ///
    /// Returns `None` for slots beyond [`InfiniteScrollLoop::virtual_item_count`].
    pub fn logical_index(&mut self, virtual_index: usize) -> Option<usize> {
        let metrics = self.metrics();
        if virtual_index >= metrics.virtual_count() {
            return None;
        }
        Some(virtual_index % metrics.total_rows)
    }

    /// Renders the slot at `virtual_index` through the item source.
    ///
    /// # Panics
    ///
    /// Panics if `virtual_index` is not below
    /// [`InfiniteScrollLoop::virtual_item_count`]. Hosts must never request
    /// slots the controller did not announce.
    pub fn render_item(&mut self, virtual_index: usize) -> D::Item {
        let metrics = self.metrics();
        let count = metrics.virtual_count();
        assert!(
            virtual_index < count,
            "virtual index {virtual_index} out of range for {count} virtual items"
        );
        self.source.render_item(virtual_index % metrics.total_rows)
    }

    // --- layout --------------------------------------------------------

    /// Current geometry: cached item metrics plus live surface extents.
    pub fn geometry(&mut self) -> Geometry {
        let metrics = self.metrics();
        let axis = self.options.scroll_axis;
        Geometry {
            item_length: metrics.item_length,
            item_spacing: metrics.item_spacing,
            padding: metrics.padding,
            bound_length: sanitize_length(axis.main(self.surface.viewport_size())),
            scroll_length: sanitize_length(axis.main(self.surface.content_size())),
        }
    }

    /// Size of every item cell.
    pub fn item_size(&mut self) -> Size {
        let viewport = self.surface.viewport_size();
        self.geometry().item_size(self.options.scroll_axis, viewport)
    }

    /// Insets around the item section.
    pub fn section_insets(&mut self) -> Insets {
        self.geometry().section_insets(self.options.scroll_axis)
    }

    /// Spacing between consecutive items along the scroll axis.
    pub fn line_spacing(&mut self) -> f64 {
        self.metrics().item_spacing
    }

    // --- offsets -------------------------------------------------------

    /// Scroll offset along the active axis.
    pub fn offset(&self) -> f64 {
        self.options
            .scroll_axis
            .offset_of(self.surface.scroll_position())
    }

    /// Virtual index of the item at the viewport center. Not clamped.
    pub fn current_index(&mut self) -> isize {
        let offset = self.offset();
        self.geometry().current_index(offset)
    }

    /// Logical index of the item at the viewport center.
    pub fn current_logical_index(&mut self) -> Option<usize> {
        let index = self.current_index();
        logical_index(index, self.metrics().total_rows)
    }

    /// Index of the viewport-sized page under the current offset.
    pub fn current_page_index(&mut self) -> isize {
        let offset = self.offset();
        self.geometry().current_page_index(offset)
    }

    /// Number of viewport-sized pages in the content.
    pub fn total_pages(&mut self) -> usize {
        self.geometry().total_pages()
    }

    /// Scrolls so the next item is centered.
    ///
    /// Returns the target, or `None` when fewer than two items exist.
    pub fn scroll_to_next_item(&mut self, animated: bool) -> Option<ScrollTarget> {
        let rows = self.metrics().total_rows;
        let geometry = self.geometry();
        let target = next_item_target(
            &geometry,
            self.offset(),
            rows,
            self.options.looping_enabled,
        )?;
        self.set_offset(target.offset, animated);
        Some(target)
    }

    /// Scrolls forward by one viewport.
    ///
    /// Returns the target, or `None` when fewer than two items exist or there
    /// are no pages to wrap over.
    pub fn scroll_to_next_page(&mut self, animated: bool) -> Option<ScrollTarget> {
        let rows = self.metrics().total_rows;
        let geometry = self.geometry();
        let target = next_page_target(
            &geometry,
            self.offset(),
            rows,
            self.options.looping_enabled,
        )?;
        self.set_offset(target.offset, animated);
        Some(target)
    }

    /// Shifts the offset by whole logical cycles if it left the safe range.
    ///
    /// Returns `true` if the offset was rewritten. Running it again without an
    /// intervening scroll never moves the offset a second time.
    pub fn correct_offset(&mut self) -> bool {
        let metrics = self.metrics();
        let geometry = self.geometry();
        let offset = self.offset();
        let Some(corrected) = corrected_offset(
            &geometry,
            offset,
            metrics.total_rows,
            metrics.multiplier,
            self.options.looping_enabled,
        ) else {
            return false;
        };
        trace!("infinite scroll: offset {offset} -> {corrected}");
        self.set_offset(corrected, false);
        true
    }

    // --- scroll events -------------------------------------------------

    /// Host scroll position changed.
    pub fn on_scroll_position_changed(&mut self) {
        self.correct_offset();
    }

    /// The user stopped dragging.
    ///
    /// Without deceleration the carousel has settled and the index is reported
    /// now; otherwise the report waits for
    /// [`InfiniteScrollLoop::on_deceleration_ended`]. The drag-end offset is
    /// reported either way.
    pub fn on_drag_ended(&mut self, will_decelerate: bool) {
        if !will_decelerate {
            self.settle();
        }
        let offset = self.offset();
        self.observer.drag_ended(offset);
    }

    /// Post-drag deceleration finished.
    pub fn on_deceleration_ended(&mut self) {
        self.settle();
    }

    /// An animated [`InfiniteScrollLoop::scroll_to_next_item`] or
    /// [`InfiniteScrollLoop::scroll_to_next_page`] finished.
    pub fn on_scroll_animation_ended(&mut self) {
        self.settle();
    }

    /// The host reports a tap on the slot at `virtual_index`.
    pub fn on_item_selected(&mut self, virtual_index: usize) {
        if let Some(index) = self.logical_index(virtual_index) {
            self.observer.item_selected(index);
        }
    }

    /// Snapshot of the controller state for debugging and inspection.
    pub fn debug_info(&mut self) -> LoopDebugInfo {
        let metrics = self.metrics();
        LoopDebugInfo {
            options: self.options,
            geometry: self.geometry(),
            logical_count: metrics.total_rows,
            virtual_count: metrics.virtual_count(),
            multiplier: metrics.multiplier,
            offset: self.offset(),
            current_index: self.current_index(),
        }
    }

    fn settle(&mut self) {
        self.correct_offset();
        if let Some(index) = self.current_logical_index() {
            trace!("infinite scroll: settled at {index}");
            self.observer.settled_at_index(index);
        }
    }

    fn set_offset(&mut self, offset: f64, animated: bool) {
        let position = self
            .options
            .scroll_axis
            .with_offset(self.surface.scroll_position(), offset);
        self.surface.set_scroll_position(position, animated);
    }

    fn apply_options(&mut self) {
        self.surface.set_scroll_axis(self.options.scroll_axis);
        self.surface.set_paging_enabled(self.options.paging_enabled);
        self.surface
            .set_user_scroll_enabled(self.options.user_scroll_enabled);
    }

    fn metrics(&mut self) -> Metrics {
        if let Some(metrics) = self.metrics {
            return metrics;
        }
        let bound_length = sanitize_length(
            self.options
                .scroll_axis
                .main(self.surface.viewport_size()),
        );
        let sizing = Geometry {
            item_length: self.layout.resolved_item_length(bound_length),
            item_spacing: self.layout.resolved_item_spacing(),
            padding: self.layout.resolved_padding(),
            bound_length,
            scroll_length: 0.0,
        };
        let metrics = Metrics {
            total_rows: self.source.item_count(),
            item_length: sizing.item_length,
            item_spacing: sizing.item_spacing,
            padding: sizing.padding,
            multiplier: loop_multiplier(self.options.looping_enabled, &sizing),
        };
        debug!(
            "infinite scroll: {} items x{} over {bound_length} viewport",
            metrics.total_rows, metrics.multiplier
        );
        self.metrics = Some(metrics);
        metrics
    }
}

/// Debug snapshot of an [`InfiniteScrollLoop`] state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LoopDebugInfo {
    /// Active options.
    pub options: LoopOptions,
    /// Geometry at the time of the snapshot.
    pub geometry: Geometry,
    /// Logical item count captured at the last reload.
    pub logical_count: usize,
    /// Number of virtual slots presented to the surface.
    pub virtual_count: usize,
    /// Current loop multiplier.
    pub multiplier: usize,
    /// Scroll offset along the active axis.
    pub offset: f64,
    /// Unclamped virtual index at the viewport center.
    pub current_index: isize,
}
