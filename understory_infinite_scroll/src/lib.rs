// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_infinite_scroll --heading-base-level=0

//! Understory Infinite Scroll: headless infinite-looping carousels.
//!
//! This crate makes a small set of logical items appear to loop endlessly in
//! either direction on top of an ordinary virtualized list widget. It does so
//! by presenting many copies of the items to the list ("virtual slots") and by
//! silently moving the scroll offset back by whole cycles whenever it nears an
//! end of the virtual content. Because the content is periodic, the jump is
//! invisible.
//!
//! The core pieces are:
//!
//! - [`Geometry`]: item length, spacing, padding, viewport extent, and content
//!   extent along the [`ScrollAxis`], plus the offset ↔ index mapping built on
//!   them ([`Geometry::current_index`], [`Geometry::current_page_index`]).
//! - [`loop_multiplier`] / [`virtual_item_count`] / [`logical_index`]: how many
//!   virtual slots to present and which logical item backs each one.
//! - [`next_item_target`] / [`next_page_target`]: where "next item" and "next
//!   page" commands should scroll to, with or without looping.
//! - [`corrected_offset`]: the boundary correction that keeps the offset away
//!   from both ends of the virtual content.
//! - [`InfiniteScrollLoop`]: a controller that wires all of the above to a host
//!   [`ListSurface`], an [`ItemSource`], and a [`LoopObserver`].
//!
//! This crate deliberately does **not** render anything or own any widgets.
//! Host frameworks are responsible for:
//!
//! - Presenting [`InfiniteScrollLoop::virtual_item_count`] slots and asking
//!   [`InfiniteScrollLoop::render_item`] for each one.
//! - Sizing slots with [`InfiniteScrollLoop::item_size`],
//!   [`InfiniteScrollLoop::section_insets`] and
//!   [`InfiniteScrollLoop::line_spacing`].
//! - Forwarding layout passes and scroll notifications to the controller.
//!
//! ## Minimal example
//!
//! The pure functions can be used without the controller:
//!
//! ```rust
//! use understory_infinite_scroll::{
//!     Geometry, corrected_offset, logical_index, loop_multiplier, virtual_item_count,
//! };
//!
//! let mut geometry = Geometry {
//!     item_length: 100.0,
//!     item_spacing: 0.0,
//!     padding: 0.0,
//!     bound_length: 300.0,
//!     scroll_length: 0.0,
//! };
//!
//! // 5 items, 3 per viewport, looping: 9 copies of the sequence.
//! let multiple = loop_multiplier(true, &geometry);
//! let slots = virtual_item_count(5, multiple);
//! assert_eq!(slots, 45);
//! geometry.scroll_length = geometry.content_length(slots);
//!
//! // Overscrolling the leading edge jumps forward by whole cycles and keeps
//! // the same logical item under the viewport center.
//! let before = -10.0;
//! let after = corrected_offset(&geometry, before, 5, multiple, true).unwrap();
//! assert_eq!(
//!     logical_index(geometry.current_index(before), 5),
//!     logical_index(geometry.current_index(after), 5),
//! );
//! ```
//!
//! All lengths live in a caller-chosen 1D coordinate space (typically logical
//! pixels) and are expected to be finite and non-negative; invalid item
//! metrics are treated as zero. This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod axis;
mod config;
mod controller;
mod corrector;
mod geometry;
mod mapper;
mod surface;
mod virtualizer;

pub use axis::ScrollAxis;
pub use config::{LayoutConfig, LoopOptions};
pub use controller::{InfiniteScrollLoop, LoopDebugInfo};
pub use corrector::{corrected_offset, correction_cycle};
pub use geometry::Geometry;
pub use mapper::{ScrollTarget, next_item_target, next_page_target};
pub use surface::{FnObserver, ItemSource, ListSurface, LoopObserver};
pub use virtualizer::{logical_index, loop_multiplier, virtual_item_count};
