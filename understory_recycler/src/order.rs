// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deterministic traversal orders over the pool.

use core::cmp::Ordering;

use kurbo::Point;

use crate::{Orientation, Slot, SlotId, SlotOrder, ViewHandle};

/// Which comparator [`order_slots`] sorts with.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SortMode {
    /// Leading slot first along the scroll axis.
    #[default]
    Scroll,
    /// By [`ViewHandle::display_name`]. Meant for laying out a fresh pool
    /// while debugging, not for steady-state recycling.
    Alphabetic,
}

/// Compares two offsets in scroll order.
///
/// Horizontal content leads with the smallest `x`, vertical content with the
/// largest `y`. Within a line, lanes are compared in their own growth
/// direction so grid order matches index order.
#[must_use]
pub fn compare_scroll(a: Point, b: Point, orientation: Orientation) -> Ordering {
    match orientation {
        Orientation::Horizontal => a.x.total_cmp(&b.x).then_with(|| b.y.total_cmp(&a.y)),
        Orientation::Vertical => b.y.total_cmp(&a.y).then_with(|| a.x.total_cmp(&b.x)),
    }
}

/// Sorts `slots` into a traversal.
///
/// The traversal always covers the whole pool. With `ignore_inactive`, hidden
/// handles are left out of the sort: they follow the active ones in
/// population order. The sort is stable, so exact ties keep population order.
pub fn order_slots<V: ViewHandle>(
    slots: &[Slot<V>],
    mode: SortMode,
    orientation: Orientation,
    ignore_inactive: bool,
) -> SlotOrder {
    let mut order: SlotOrder = slots.iter().map(|slot| slot.id).collect();
    let inactive = |id: &SlotId| ignore_inactive && !slots[id.idx()].handle.is_visible();
    order.sort_by(|a, b| match (inactive(a), inactive(b)) {
        (false, false) => {
            let (a, b) = (&slots[a.idx()].handle, &slots[b.idx()].handle);
            match mode {
                SortMode::Scroll => {
                    compare_scroll(a.local_offset(), b.local_offset(), orientation)
                }
                SortMode::Alphabetic => a.display_name().cmp(b.display_name()),
            }
        }
        (true, true) => Ordering::Equal,
        (a, b) => a.cmp(&b),
    });
    order
}
