// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The per-scroll wrap pass.
//!
//! Each slot is measured against the viewport center. A slot that has drifted
//! more than half the pool span away is teleported by whole pool spans toward
//! the opposite edge, so the pool stays contiguous no matter how many times it
//! wraps. The move is only applied when the slot's new data index is valid.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::Vec2;

use crate::host::viewport_bounds;
use crate::mapper::CellGeometry;
use crate::slot::slot_mut;
use crate::{BindEvent, BindFn, Orientation, Slot, SlotId, ViewHandle, ViewportCorners};

/// Per-pass inputs sampled from the host and the session.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct WrapInput {
    /// Viewport corners, sampled at the start of the pass.
    pub corners: ViewportCorners,
    /// Content translation inside the viewport.
    pub content_offset: Vec2,
    /// Size of the data set.
    pub total_count: usize,
    /// Hide slots outside the viewport extended by one stride.
    pub cull_offscreen: bool,
    /// Render slots that did not move but are not yet showing their index.
    pub first_pass: bool,
}

/// What a single wrap pass did.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct WrapReport {
    /// Slots moved and rebound.
    pub wrapped: usize,
    /// Slots that wanted to wrap onto an out-of-range index and stayed put.
    pub rejected: usize,
    /// Slots rendered in place on the first pass.
    pub rendered_in_place: usize,
}

/// Returns `index` if it lies in `0..total_count`.
#[must_use]
pub fn valid_index(index: isize, total_count: usize) -> Option<usize> {
    usize::try_from(index).ok().filter(|&i| i < total_count)
}

/// Runs one wrap pass over `order`.
pub fn wrap_pass<V: ViewHandle>(
    slots: &mut [Slot<V>],
    order: &[SlotId],
    geometry: &CellGeometry,
    input: &WrapInput,
    bind: &mut BindFn<'_, V>,
) -> WrapReport {
    let mut report = WrapReport::default();
    if order.is_empty() {
        return report;
    }

    let bounds = viewport_bounds(&input.corners);
    let center = geometry.primary(bounds.center());
    let (scroll, near, far) = match geometry.orientation {
        Orientation::Horizontal => (input.content_offset.x, bounds.x0, bounds.x1),
        Orientation::Vertical => (input.content_offset.y, bounds.y0, bounds.y1),
    };
    let span = geometry.wrap_span(order.len());
    let half = span * 0.5;
    // Culling window relative to the center, one stride wider on each side.
    let stride = geometry.stride();
    let show_min = near - center - stride;
    let show_max = far - center + stride;

    for (position, &id) in order.iter().enumerate() {
        let Some(slot) = slot_mut(slots, id) else {
            continue;
        };
        let at = slot.handle.local_offset();
        let primary = geometry.primary(at);
        let mut distance = primary - center + scroll;

        let shift = if distance < -half {
            Some(((-half - distance) / span).ceil() * span)
        } else if distance > half {
            Some(-((distance - half) / span).ceil() * span)
        } else {
            None
        };

        if let Some(shift) = shift {
            let candidate = geometry.with_primary(at, primary + shift);
            let raw = geometry.offset_to_index(candidate);
            if let Some(index) = valid_index(raw, input.total_count) {
                slot.handle.set_local_offset(candidate);
                slot.bound = Some(index);
                distance += shift;
                bind(
                    &mut slot.handle,
                    BindEvent {
                        slot: id,
                        position,
                        index,
                    },
                );
                report.wrapped += 1;
                log::trace!("slot {} wrapped to index {index}", id.idx());
            } else {
                report.rejected += 1;
                log::trace!("slot {} kept in place, index {raw} out of range", id.idx());
            }
        } else if input.first_pass
            && let Some(index) = valid_index(geometry.offset_to_index(at), input.total_count)
            && slot.bound != Some(index)
        {
            slot.bound = Some(index);
            bind(
                &mut slot.handle,
                BindEvent {
                    slot: id,
                    position,
                    index,
                },
            );
            report.rendered_in_place += 1;
        }

        if input.cull_offscreen {
            let here = geometry.offset_to_index(slot.handle.local_offset());
            let visible = distance > show_min
                && distance < show_max
                && valid_index(here, input.total_count).is_some();
            if slot.handle.is_visible() != visible {
                slot.handle.set_visible(visible);
            }
        }
    }
    report
}
