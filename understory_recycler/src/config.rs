// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recycler configuration: cell size, lanes, scroll axis, and culling policy.

use core::num::NonZeroUsize;

use kurbo::Size;

use crate::RecycleError;

/// The viewport axis content scrolls along.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Content scrolls along `x`; items grow toward `+x`.
    Horizontal,
    /// Content scrolls along `y`; items grow toward `-y`.
    #[default]
    Vertical,
}

/// How flat data indices are laid out in content space.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum LayoutMode {
    /// One item per line along the scroll axis.
    SingleAxis,
    /// Several items (lanes) per line; lanes run across the scroll axis.
    Grid(NonZeroUsize),
}

impl LayoutMode {
    /// Number of items per line.
    #[must_use]
    pub const fn lanes(self) -> usize {
        match self {
            Self::SingleAxis => 1,
            Self::Grid(lanes) => lanes.get(),
        }
    }
}

/// Configuration for a [`Recycler`](crate::Recycler).
///
/// The configuration is fixed for the duration of a session. Swap it between
/// sessions with [`Recycler::configure`](crate::Recycler::configure).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RecycleConfig {
    /// Horizontal cell stride, including any gap.
    pub item_width: u32,
    /// Vertical cell stride, including any gap.
    pub item_height: u32,
    /// Items per line. `1` is a plain list, anything larger is a grid.
    pub columns_or_rows: usize,
    /// Scroll axis.
    pub orientation: Orientation,
    /// Hide slots that fall outside the viewport (extended by one stride).
    pub cull_offscreen: bool,
    /// Leave hidden handles out of the pool order when sorting.
    pub ignore_inactive_in_sort: bool,
}

impl Default for RecycleConfig {
    fn default() -> Self {
        Self {
            item_width: 100,
            item_height: 100,
            columns_or_rows: 1,
            orientation: Orientation::Vertical,
            cull_offscreen: true,
            ignore_inactive_in_sort: false,
        }
    }
}

impl RecycleConfig {
    /// Creates a vertical single-axis configuration with the given cell size.
    #[must_use]
    pub fn new(item_width: u32, item_height: u32) -> Self {
        Self {
            item_width,
            item_height,
            ..Self::default()
        }
    }

    /// Sets the number of items per line.
    #[must_use]
    pub fn with_columns_or_rows(mut self, columns_or_rows: usize) -> Self {
        self.columns_or_rows = columns_or_rows;
        self
    }

    /// Sets the scroll axis.
    #[must_use]
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Sets whether offscreen slots are hidden.
    #[must_use]
    pub fn with_cull_offscreen(mut self, cull: bool) -> Self {
        self.cull_offscreen = cull;
        self
    }

    /// Sets whether hidden handles are left out when sorting.
    #[must_use]
    pub fn with_ignore_inactive_in_sort(mut self, ignore: bool) -> Self {
        self.ignore_inactive_in_sort = ignore;
        self
    }

    /// Checks the cell size and lane count.
    pub fn validate(&self) -> Result<(), RecycleError> {
        if self.item_width == 0 || self.item_height == 0 {
            return Err(RecycleError::ZeroItemSize {
                width: self.item_width,
                height: self.item_height,
            });
        }
        if self.columns_or_rows == 0 {
            return Err(RecycleError::ZeroLanes);
        }
        Ok(())
    }

    /// The layout mode implied by `columns_or_rows`.
    ///
    /// A zero lane count is treated as a single axis; [`validate`](Self::validate)
    /// rejects it before it reaches the engine.
    #[must_use]
    pub fn layout(&self) -> LayoutMode {
        match NonZeroUsize::new(self.columns_or_rows) {
            Some(lanes) if lanes.get() > 1 => LayoutMode::Grid(lanes),
            _ => LayoutMode::SingleAxis,
        }
    }

    /// Cell stride as a [`Size`].
    #[must_use]
    pub fn cell_size(&self) -> Size {
        Size::new(f64::from(self.item_width), f64::from(self.item_height))
    }
}
