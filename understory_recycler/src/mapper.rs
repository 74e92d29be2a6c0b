// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pure conversions between slot offsets and data indices.
//!
//! Indices are laid out in *lines* along the scroll axis and *lanes* across
//! it. In a vertical layout a line is a row and a lane is a column; in a
//! horizontal layout the roles swap. Lines grow toward `+x` (horizontal) or
//! `-y` (vertical), lanes grow toward `+x` (vertical) or `-y` (horizontal).

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Size};

use crate::{LayoutMode, Orientation, RecycleConfig};

/// Lines added to the visible line count when sizing the pool.
pub const BUFFER_LINES: usize = 2;

/// Cell geometry derived from a [`RecycleConfig`].
///
/// Everything here is a pure function of the layout mode, the orientation,
/// and the cell stride.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CellGeometry {
    /// Single axis or grid.
    pub layout: LayoutMode,
    /// Scroll axis.
    pub orientation: Orientation,
    /// Cell stride on both axes.
    pub cell: Size,
}

impl CellGeometry {
    /// Builds the geometry for `config`.
    #[must_use]
    pub fn from_config(config: &RecycleConfig) -> Self {
        Self {
            layout: config.layout(),
            orientation: config.orientation,
            cell: config.cell_size(),
        }
    }

    /// Items per line.
    #[must_use]
    pub const fn lanes(&self) -> usize {
        self.layout.lanes()
    }

    /// Cell stride along the scroll axis.
    #[must_use]
    pub fn stride(&self) -> f64 {
        match self.orientation {
            Orientation::Horizontal => self.cell.width,
            Orientation::Vertical => self.cell.height,
        }
    }

    /// Component of `p` along the scroll axis.
    #[must_use]
    pub fn primary(&self, p: Point) -> f64 {
        match self.orientation {
            Orientation::Horizontal => p.x,
            Orientation::Vertical => p.y,
        }
    }

    /// Returns `p` with its scroll-axis component replaced by `value`.
    #[must_use]
    pub fn with_primary(&self, p: Point, value: f64) -> Point {
        match self.orientation {
            Orientation::Horizontal => Point::new(value, p.y),
            Orientation::Vertical => Point::new(p.x, value),
        }
    }

    /// Line containing `index`.
    #[must_use]
    pub const fn line_of(&self, index: usize) -> usize {
        index / self.lanes()
    }

    /// Lane of `index` within its line.
    #[must_use]
    pub const fn lane_of(&self, index: usize) -> usize {
        index % self.lanes()
    }

    /// Maps a content-local offset to a data index.
    ///
    /// The result may be negative or past the end of the data set; callers
    /// check it against `0..total_count`.
    #[must_use]
    pub fn offset_to_index(&self, offset: Point) -> isize {
        let (line, lane) = match self.orientation {
            Orientation::Horizontal => (
                round_index(offset.x / self.cell.width),
                round_index(-offset.y / self.cell.height),
            ),
            Orientation::Vertical => (
                round_index(-offset.y / self.cell.height),
                round_index(offset.x / self.cell.width),
            ),
        };
        match self.layout {
            LayoutMode::SingleAxis => line,
            LayoutMode::Grid(lanes) => lane + line * lanes.get() as isize,
        }
    }

    /// Maps a data index to its content-local offset relative to `base`.
    #[must_use]
    pub fn index_to_offset(&self, index: usize, base: Point) -> Point {
        let line = self.line_of(index) as f64;
        let lane = self.lane_of(index) as f64;
        match self.orientation {
            Orientation::Horizontal => Point::new(
                base.x + line * self.cell.width,
                base.y - lane * self.cell.height,
            ),
            Orientation::Vertical => Point::new(
                base.x + lane * self.cell.width,
                base.y - line * self.cell.height,
            ),
        }
    }

    /// Number of lines covered by a pool of `pool_len` slots.
    #[must_use]
    pub const fn pool_lines(&self, pool_len: usize) -> usize {
        pool_len.div_ceil(self.lanes())
    }

    /// Distance a slot travels when it wraps: the full span of the pool.
    #[must_use]
    pub fn wrap_span(&self, pool_len: usize) -> f64 {
        self.stride() * self.pool_lines(pool_len) as f64
    }

    /// Pool size needed to cover a viewport `viewport_extent` long on the
    /// scroll axis without exposing an unbound gap before a wrap fires.
    ///
    /// This depends only on the viewport, the stride, and the lane count.
    #[must_use]
    pub fn pool_size_for_viewport(&self, viewport_extent: f64) -> usize {
        let visible_lines = (viewport_extent.max(0.0) / self.stride()).ceil();
        #[allow(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            reason = "Line count is non-negative and bounded by the viewport size"
        )]
        let visible_lines = visible_lines as usize;
        (visible_lines + BUFFER_LINES) * self.lanes()
    }

    /// Scroll-axis extent of content holding `total_count` items.
    #[must_use]
    pub fn content_extent(&self, total_count: usize) -> f64 {
        self.stride() * total_count.div_ceil(self.lanes()) as f64
    }
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "Offsets are bounded by the content extent, far below isize::MAX"
)]
fn round_index(ratio: f64) -> isize {
    ratio.round() as isize
}
