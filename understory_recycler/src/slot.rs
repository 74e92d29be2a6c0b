// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pool slots and bind events.

use smallvec::SmallVec;

/// Identifier of a slot in the pool.
///
/// Ids are assigned densely from zero in population order and never change.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotId(pub(crate) u32);

impl SlotId {
    /// Position of the slot in population order.
    #[must_use]
    pub const fn idx(self) -> usize {
        self.0 as usize
    }
}

/// A traversal of the pool, produced by [`order_slots`](crate::order_slots).
pub type SlotOrder = SmallVec<[SlotId; 16]>;

/// One member of the fixed view pool.
#[derive(Clone, Debug)]
pub struct Slot<V> {
    pub(crate) id: SlotId,
    pub(crate) handle: V,
    pub(crate) bound: Option<usize>,
}

impl<V> Slot<V> {
    pub(crate) const fn new(id: SlotId, handle: V) -> Self {
        Self {
            id,
            handle,
            bound: None,
        }
    }

    /// This slot's id.
    #[must_use]
    pub const fn id(&self) -> SlotId {
        self.id
    }

    /// The pooled view.
    #[must_use]
    pub const fn handle(&self) -> &V {
        &self.handle
    }

    /// Data index last rendered into this slot, if any.
    #[must_use]
    pub const fn bound_index(&self) -> Option<usize> {
        self.bound
    }
}

/// Arguments passed to the bind callback.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct BindEvent {
    /// Slot being rebound.
    pub slot: SlotId,
    /// Position of the slot within the current pool order.
    pub position: usize,
    /// Data index the slot now shows.
    pub index: usize,
}

/// Bind callback invoked whenever a slot is (re)labelled with a data index.
pub type BindFn<'a, V> = dyn FnMut(&mut V, BindEvent) + 'a;

/// Looks up a slot by id. Ids are dense, so this is a plain index.
pub(crate) fn slot_mut<V>(slots: &mut [Slot<V>], id: SlotId) -> Option<&mut Slot<V>> {
    slots.get_mut(id.idx())
}
