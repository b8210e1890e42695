// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Consumer-facing configuration.

use crate::ScrollAxis;

/// Per-item metrics supplied by the consumer.
///
/// All fields are optional in spirit: the [`Default`] value lays out one item
/// per viewport with no spacing and no cross-axis padding.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct LayoutConfig {
    /// Extent of each item along the scroll axis.
    ///
    /// `None` means "the viewport extent along the scroll axis", which turns
    /// the carousel into a pager with one item per viewport.
    pub item_length: Option<f64>,
    /// Gap between consecutive items, also used as the leading and trailing
    /// section inset along the scroll axis.
    pub item_spacing: f64,
    /// Inset applied on both edges perpendicular to the scroll axis.
    pub padding: f64,
}

impl LayoutConfig {
    /// Creates a configuration with the default metrics.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            item_length: None,
            item_spacing: 0.0,
            padding: 0.0,
        }
    }

    /// Sets a fixed item length.
    #[must_use]
    pub const fn with_item_length(mut self, length: f64) -> Self {
        self.item_length = Some(length);
        self
    }

    /// Sets the spacing between items.
    #[must_use]
    pub const fn with_item_spacing(mut self, spacing: f64) -> Self {
        self.item_spacing = spacing;
        self
    }

    /// Sets the cross-axis padding.
    #[must_use]
    pub const fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    /// Resolves the item length against the current viewport extent.
    pub(crate) fn resolved_item_length(&self, viewport_extent: f64) -> f64 {
        sanitize_length(self.item_length.unwrap_or(viewport_extent))
    }

    pub(crate) fn resolved_item_spacing(&self) -> f64 {
        sanitize_length(self.item_spacing)
    }

    pub(crate) fn resolved_padding(&self) -> f64 {
        sanitize_length(self.padding)
    }
}

/// Behavioral switches of an [`InfiniteScrollLoop`](crate::InfiniteScrollLoop).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoopOptions {
    /// Whether the item sequence is replicated so it can be scrolled endlessly.
    pub looping_enabled: bool,
    /// Axis the carousel scrolls along.
    pub scroll_axis: ScrollAxis,
    /// Whether the host surface snaps to whole viewports.
    pub paging_enabled: bool,
    /// Whether the user may scroll the host surface directly.
    pub user_scroll_enabled: bool,
}

impl Default for LoopOptions {
    fn default() -> Self {
        Self {
            looping_enabled: true,
            scroll_axis: ScrollAxis::default(),
            paging_enabled: false,
            user_scroll_enabled: true,
        }
    }
}

/// Clamps negative, NaN, and infinite lengths to zero.
pub(crate) fn sanitize_length(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::{LayoutConfig, LoopOptions, sanitize_length};
    use crate::ScrollAxis;

    #[test]
    fn default_layout_fills_viewport() {
        let config = LayoutConfig::default();
        assert_eq!(config, LayoutConfig::new());
        assert_eq!(config.resolved_item_length(375.0), 375.0);
        assert_eq!(config.resolved_item_spacing(), 0.0);
        assert_eq!(config.resolved_padding(), 0.0);
    }

    #[test]
    fn builder_overrides_metrics() {
        let config = LayoutConfig::new()
            .with_item_length(280.0)
            .with_item_spacing(20.0)
            .with_padding(10.0);
        assert_eq!(config.resolved_item_length(375.0), 280.0);
        assert_eq!(config.resolved_item_spacing(), 20.0);
        assert_eq!(config.resolved_padding(), 10.0);
    }

    #[test]
    fn invalid_metrics_collapse_to_zero() {
        let config = LayoutConfig::new()
            .with_item_length(f64::NAN)
            .with_item_spacing(-4.0)
            .with_padding(f64::INFINITY);
        assert_eq!(config.resolved_item_length(375.0), 0.0);
        assert_eq!(config.resolved_item_spacing(), 0.0);
        assert_eq!(config.resolved_padding(), 0.0);
        assert_eq!(sanitize_length(-0.0), 0.0);
    }

    #[test]
    fn looping_is_on_by_default() {
        let options = LoopOptions::default();
        assert!(options.looping_enabled);
        assert!(options.user_scroll_enabled);
        assert!(!options.paging_enabled);
        assert_eq!(options.scroll_axis, ScrollAxis::Horizontal);
    }
}
