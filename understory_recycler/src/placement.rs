// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Contiguous placement of an ordered pool.

use kurbo::Point;

use crate::mapper::CellGeometry;
use crate::slot::slot_mut;
use crate::{BindEvent, BindFn, Slot, SlotId, ViewHandle};

/// Lays `order` out contiguously starting at data index `baseline`.
///
/// The slot at position `i` moves to the offset of index `baseline + i`. Every
/// slot whose index lies in `0..total_count` is bound and rendered; the rest
/// are placed but left unbound. Returns how many slots were bound.
pub fn place_slots<V: ViewHandle>(
    slots: &mut [Slot<V>],
    order: &[SlotId],
    geometry: &CellGeometry,
    baseline: usize,
    total_count: usize,
    bind: &mut BindFn<'_, V>,
) -> usize {
    let mut bound = 0;
    for (position, &id) in order.iter().enumerate() {
        let Some(slot) = slot_mut(slots, id) else {
            continue;
        };
        let index = baseline + position;
        slot.handle
            .set_local_offset(geometry.index_to_offset(index, Point::ORIGIN));
        if index < total_count {
            slot.bound = Some(index);
            bind(
                &mut slot.handle,
                BindEvent {
                    slot: id,
                    position,
                    index,
                },
            );
            bound += 1;
        } else {
            slot.bound = None;
        }
    }
    bound
}
