// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A tiny simulated scroll view for the recycler demos.
//!
//! [`SimHost`] stands in for a UI framework's scroll container and [`SimView`]
//! for a pooled label. Neither draws anything; the demos print what a real
//! host would render.

use std::fmt::Write as _;

use kurbo::{Point, Rect, Vec2};
use understory_recycler::{
    Orientation, Recycler, ScrollHost, ViewHandle, ViewportCorners, corners_from_rect,
};

/// A scroll container with a fixed viewport and a clamped content offset.
#[derive(Debug)]
pub struct SimHost {
    viewport: Rect,
    orientation: Orientation,
    offset: f64,
    extent: f64,
    listeners: u32,
}

impl SimHost {
    /// A host whose viewport has its leading corner at the content origin.
    pub fn new(width: f64, height: f64, orientation: Orientation) -> Self {
        Self {
            viewport: Rect::new(0.0, -height, width, 0.0),
            orientation,
            offset: 0.0,
            extent: 0.0,
            listeners: 0,
        }
    }

    /// Scroll distance from the start, clamped to the content.
    pub fn scroll_to(&mut self, distance: f64) {
        let viewport = match self.orientation {
            Orientation::Horizontal => self.viewport.width(),
            Orientation::Vertical => self.viewport.height(),
        };
        self.offset = distance.clamp(0.0, (self.extent - viewport).max(0.0));
    }

    /// Current scroll distance from the start.
    pub fn scrolled(&self) -> f64 {
        self.offset
    }

    /// Content extent last set by the recycler.
    pub fn extent(&self) -> f64 {
        self.extent
    }

    /// Number of live scroll subscriptions.
    pub fn listeners(&self) -> u32 {
        self.listeners
    }
}

impl ScrollHost for SimHost {
    type Subscription = ();

    fn viewport_corners(&self) -> ViewportCorners {
        corners_from_rect(self.viewport)
    }

    fn content_offset(&self) -> Vec2 {
        match self.orientation {
            // Content moves left as a horizontal list scrolls forward.
            Orientation::Horizontal => Vec2::new(-self.offset, 0.0),
            Orientation::Vertical => Vec2::new(0.0, self.offset),
        }
    }

    fn scrolls_along(&self, orientation: Orientation) -> bool {
        orientation == self.orientation
    }

    fn subscribe(&mut self) {
        self.listeners += 1;
    }

    fn unsubscribe(&mut self, (): ()) {
        self.listeners -= 1;
    }

    fn scroll_to_start(&mut self, _orientation: Orientation) {
        self.offset = 0.0;
    }

    fn resize_content(&mut self, _orientation: Orientation, extent: f64) {
        self.extent = extent;
        self.scroll_to(self.offset);
    }
}

/// A pooled label.
#[derive(Clone, Debug, Default)]
pub struct SimView {
    /// Offset inside the content node.
    pub at: Point,
    /// Whether the label is shown.
    pub visible: bool,
    /// Rendered text.
    pub text: String,
    /// How many times this label has been bound.
    pub binds: u32,
}

impl ViewHandle for SimView {
    fn local_offset(&self) -> Point {
        self.at
    }

    fn set_local_offset(&mut self, offset: Point) {
        self.at = offset;
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn display_name(&self) -> &str {
        &self.text
    }
}

/// One line per pooled view in pool order: slot, offset, text, visibility.
pub fn describe(recycler: &Recycler<SimHost, SimView>) -> String {
    let mut out = String::new();
    for &id in recycler.order() {
        let Some(view) = recycler.handle(id) else {
            continue;
        };
        let _ = writeln!(
            out,
            "  slot {:>2} at ({:>6.0}, {:>6.0})  {:<10} {}",
            id.idx(),
            view.at.x,
            view.at.y,
            view.text,
            if view.visible { "shown" } else { "hidden" },
        );
    }
    out
}
