// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Setup-time errors.

use core::fmt;

use crate::Orientation;

/// A configuration defect that prevents the recycler from operating.
///
/// These are raised synchronously from setup calls and are never recovered
/// internally. Rejecting a wrap whose target index is out of range is *not*
/// an error; the slot simply stays where it is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecycleError {
    /// No scroll host has been attached.
    NoScrollHost,
    /// The attached host does not scroll along the configured axis.
    AxisNotScrollable(Orientation),
    /// One of the cell dimensions is zero.
    ZeroItemSize {
        /// Configured cell width.
        width: u32,
        /// Configured cell height.
        height: u32,
    },
    /// `columns_or_rows` is zero.
    ZeroLanes,
    /// [`Recycler::populate`](crate::Recycler::populate) was called twice.
    PoolAlreadyPopulated,
    /// The pool was populated with no handles.
    EmptyPool,
    /// The pool has fewer views than the viewport needs for the configured
    /// cell size, so scrolling would expose unbound cells.
    PoolTooSmall {
        /// Views the viewport needs.
        required: usize,
        /// Views in the pool.
        pool: usize,
    },
    /// The recycler was disposed and has not been re-attached.
    Disposed,
}

impl fmt::Display for RecycleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoScrollHost => f.write_str("no scroll host attached"),
            Self::AxisNotScrollable(orientation) => {
                write!(f, "scroll host does not scroll along the {orientation:?} axis")
            }
            Self::ZeroItemSize { width, height } => {
                write!(f, "item size must be positive, got {width}x{height}")
            }
            Self::ZeroLanes => f.write_str("columns_or_rows must be at least 1"),
            Self::PoolAlreadyPopulated => f.write_str("view pool is already populated"),
            Self::EmptyPool => f.write_str("view pool must contain at least one handle"),
            Self::PoolTooSmall { required, pool } => {
                write!(f, "view pool of {pool} is smaller than the {required} the viewport needs")
            }
            Self::Disposed => f.write_str("recycler has been disposed"),
        }
    }
}

impl core::error::Error for RecycleError {}
