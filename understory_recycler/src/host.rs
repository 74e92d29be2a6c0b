// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Seams to the host UI: the scroll container and the pooled views.

use kurbo::{Point, Rect, Vec2};

use crate::Orientation;

/// The four corners of the viewport in viewport-local space.
///
/// Corners are ordered bottom-left, top-left, top-right, bottom-right. Only
/// corners `0` and `2` are read, and only as a diagonal pair.
pub type ViewportCorners = [Point; 4];

/// Axis-aligned bounds spanned by `corners`.
#[must_use]
pub fn viewport_bounds(corners: &ViewportCorners) -> Rect {
    Rect::from_points(corners[0], corners[2])
}

/// Builds a corner array from viewport bounds.
#[must_use]
pub fn corners_from_rect(rect: Rect) -> ViewportCorners {
    [
        Point::new(rect.x0, rect.y0),
        Point::new(rect.x0, rect.y1),
        Point::new(rect.x1, rect.y1),
        Point::new(rect.x1, rect.y0),
    ]
}

/// The scroll container a [`Recycler`](crate::Recycler) lives in.
///
/// The host owns the viewport and the content node the pooled views are
/// parented to. It forwards each scroll change to
/// [`Recycler::on_scroll`](crate::Recycler::on_scroll) for as long as a
/// subscription handed out by [`subscribe`](Self::subscribe) is live.
pub trait ScrollHost {
    /// Token identifying a scroll-notification registration.
    type Subscription;

    /// Current viewport corners.
    fn viewport_corners(&self) -> ViewportCorners;

    /// Translation of the content inside the viewport.
    ///
    /// Scrolling a vertical list toward later items moves the content up,
    /// so `y` grows; scrolling a horizontal list toward later items moves it
    /// left, so `x` shrinks.
    fn content_offset(&self) -> Vec2;

    /// Whether the container scrolls along `orientation`.
    fn scrolls_along(&self, orientation: Orientation) -> bool {
        let _ = orientation;
        true
    }

    /// Registers interest in scroll notifications.
    fn subscribe(&mut self) -> Self::Subscription;

    /// Drops a registration made by [`subscribe`](Self::subscribe).
    fn unsubscribe(&mut self, subscription: Self::Subscription);

    /// Scrolls back to the start of the content along `orientation`.
    fn scroll_to_start(&mut self, orientation: Orientation);

    /// Resizes the scrollable content to `extent` along `orientation`.
    fn resize_content(&mut self, orientation: Orientation, extent: f64);
}

/// A pooled, renderable view.
///
/// Handles are typically cheap references into the host's own scene (an id,
/// an `Rc`, a widget pointer); the recycler only moves them around and
/// toggles their visibility.
pub trait ViewHandle {
    /// Offset of the view inside the content node.
    fn local_offset(&self) -> Point;

    /// Moves the view inside the content node.
    fn set_local_offset(&mut self, offset: Point);

    /// Whether the view is currently shown.
    fn is_visible(&self) -> bool;

    /// Shows or hides the view.
    fn set_visible(&mut self, visible: bool);

    /// Name used by [`SortMode::Alphabetic`](crate::SortMode::Alphabetic).
    fn display_name(&self) -> &str {
        ""
    }
}
