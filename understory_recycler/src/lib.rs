// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_recycler --heading-base-level=0

//! Understory Recycler: fixed-pool view recycling for uniform lists and grids.
//!
//! Where a virtual list tells the host which indices to realize, this crate
//! goes one step further and manages a fixed pool of already-realized views.
//! As content scrolls, views that leave the viewport are moved to the opposite
//! edge and rebound to a new data index. The pool size depends only on the
//! viewport and the cell size, so a data set of a million items costs the same
//! number of views as one of twenty.
//!
//! The core concepts are:
//!
//! - [`RecycleConfig`]: cell stride, lanes per line, scroll axis, and culling.
//! - [`CellGeometry`]: the bijection between flat data indices and cell
//!   offsets in content space.
//! - [`ScrollHost`] and [`ViewHandle`]: the two seams to the host framework.
//!   The host reports its viewport and content offset and resizes its content;
//!   each pooled view exposes its local offset and visibility.
//! - [`Recycler`]: the controller. It owns the pool, keeps it in scroll order,
//!   places it contiguously after count changes, and runs a wrap pass on every
//!   scroll notification. Each (re)bind is reported through a callback with a
//!   [`BindEvent`].
//!
//! The lower-level building blocks ([`order_slots`], [`place_slots`], and
//! [`wrap_pass`]) are public for hosts that want to drive the pool themselves.
//!
//! Coordinates follow the usual content-space convention for scroll views:
//! `+x` is right and `+y` is up, so vertical content grows toward `-y` and
//! horizontal content toward `+x`. The content offset is the translation of
//! the content inside the viewport; scrolling forward increases it.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect, Vec2};
//! use understory_recycler::{
//!     Orientation, RecycleConfig, Recycler, ScrollHost, ViewHandle, ViewportCorners,
//!     corners_from_rect,
//! };
//!
//! #[derive(Debug)]
//! struct Scroller {
//!     offset: Vec2,
//! }
//!
//! impl ScrollHost for Scroller {
//!     type Subscription = ();
//!     fn viewport_corners(&self) -> ViewportCorners {
//!         // 300x450 viewport with its top-left at the content origin.
//!         corners_from_rect(Rect::new(0.0, -450.0, 300.0, 0.0))
//!     }
//!     fn content_offset(&self) -> Vec2 {
//!         self.offset
//!     }
//!     fn subscribe(&mut self) {}
//!     fn unsubscribe(&mut self, _: ()) {}
//!     fn scroll_to_start(&mut self, _: Orientation) {
//!         self.offset = Vec2::ZERO;
//!     }
//!     fn resize_content(&mut self, _: Orientation, _: f64) {}
//! }
//!
//! #[derive(Debug, Default)]
//! struct Label {
//!     at: Point,
//!     shown: bool,
//!     text: String,
//! }
//!
//! impl ViewHandle for Label {
//!     fn local_offset(&self) -> Point {
//!         self.at
//!     }
//!     fn set_local_offset(&mut self, offset: Point) {
//!         self.at = offset;
//!     }
//!     fn is_visible(&self) -> bool {
//!         self.shown
//!     }
//!     fn set_visible(&mut self, visible: bool) {
//!         self.shown = visible;
//!     }
//! }
//!
//! let host = Scroller { offset: Vec2::ZERO };
//! let mut recycler = Recycler::with_host(RecycleConfig::new(300, 100), host)?;
//!
//! // Five visible lines plus a buffer line on each side.
//! let pool = recycler.compute_required_pool_size()?;
//! assert_eq!(pool, 7);
//! recycler.populate((0..pool).map(|_| Label::default()))?;
//! recycler.set_on_bind(|label, event| label.text = format!("item {}", event.index));
//!
//! recycler.update_count(1_000, false)?;
//! assert_eq!(recycler.visible_indices(), [0, 1, 2, 3, 4, 5]);
//!
//! // Scroll 3.5 cells forward; the three leading views wrap to the end.
//! recycler.host_mut().unwrap().offset = Vec2::new(0.0, 350.0);
//! recycler.on_scroll();
//! let seven = recycler.slot_for_index(7).unwrap();
//! assert_eq!(recycler.handle(seven).unwrap().text, "item 7");
//! # Ok::<(), understory_recycler::RecycleError>(())
//! ```
//!
//! Data and view content stay with the host: the bind callback is the only
//! place data reaches a view. Logging goes through the [`log`] facade; install
//! any logger to see lifecycle events at `debug` and per-slot wraps at `trace`.
//!
//! This crate is `no_std` and uses `alloc`.
//!
//! [`log`]: https://docs.rs/log

#![no_std]

extern crate alloc;

mod config;
mod error;
mod host;
mod mapper;
mod order;
mod placement;
mod recycler;
mod slot;
mod wrap;

pub use config::{LayoutMode, Orientation, RecycleConfig};
pub use error::RecycleError;
pub use host::{ScrollHost, ViewHandle, ViewportCorners, corners_from_rect, viewport_bounds};
pub use mapper::{BUFFER_LINES, CellGeometry};
pub use order::{SortMode, compare_scroll, order_slots};
pub use placement::place_slots;
pub use recycler::Recycler;
pub use slot::{BindEvent, BindFn, Slot, SlotId, SlotOrder};
pub use wrap::{WrapInput, WrapReport, valid_index, wrap_pass};
