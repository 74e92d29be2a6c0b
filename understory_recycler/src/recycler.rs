// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The recycling controller: session state, count updates, and lifecycle.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use kurbo::Point;

use crate::host::viewport_bounds;
use crate::mapper::CellGeometry;
use crate::placement::place_slots;
use crate::wrap::{WrapInput, WrapReport, wrap_pass};
use crate::{
    BindEvent, BindFn, Orientation, RecycleConfig, RecycleError, ScrollHost, Slot, SlotId,
    SlotOrder, SortMode, ViewHandle, ViewportCorners, order_slots,
};

/// Recycles a fixed pool of views across a data set of arbitrary size.
///
/// A typical session:
///
/// 1. [`Recycler::new`] with a validated [`RecycleConfig`], then
///    [`attach`](Self::attach) the scroll host.
/// 2. Ask [`compute_required_pool_size`](Self::compute_required_pool_size) how
///    many views to create and hand them to [`populate`](Self::populate).
/// 3. Install a bind callback with [`set_on_bind`](Self::set_on_bind).
/// 4. Call [`update_count`](Self::update_count) whenever the data set size
///    changes and [`on_scroll`](Self::on_scroll) from the host's scroll
///    notification.
/// 5. [`dispose`](Self::dispose) (or drop) when the host view is torn down.
///
/// All methods run to completion over the fixed pool; nothing blocks and no
/// work is deferred.
pub struct Recycler<H: ScrollHost, V: ViewHandle> {
    config: RecycleConfig,
    geometry: CellGeometry,
    host: Option<H>,
    subscription: Option<H::Subscription>,
    slots: Vec<Slot<V>>,
    order: SlotOrder,
    total_count: usize,
    baseline: usize,
    content_extent: f64,
    corners: ViewportCorners,
    first_pass: bool,
    disposed: bool,
    on_bind: Option<Box<BindFn<'static, V>>>,
}

impl<H: ScrollHost, V: ViewHandle> fmt::Debug for Recycler<H, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Recycler")
            .field("config", &self.config)
            .field("attached", &self.host.is_some())
            .field("pool_size", &self.slots.len())
            .field("order", &self.order)
            .field("total_count", &self.total_count)
            .field("baseline", &self.baseline)
            .field("content_extent", &self.content_extent)
            .field("first_pass", &self.first_pass)
            .field("disposed", &self.disposed)
            .field("has_on_bind", &self.on_bind.is_some())
            .finish_non_exhaustive()
    }
}

impl<H: ScrollHost, V: ViewHandle> Recycler<H, V> {
    /// Creates a detached recycler.
    pub fn new(config: RecycleConfig) -> Result<Self, RecycleError> {
        config.validate()?;
        Ok(Self {
            config,
            geometry: CellGeometry::from_config(&config),
            host: None,
            subscription: None,
            slots: Vec::new(),
            order: SlotOrder::new(),
            total_count: 0,
            baseline: 0,
            content_extent: 0.0,
            corners: [Point::ORIGIN; 4],
            first_pass: true,
            disposed: false,
            on_bind: None,
        })
    }

    /// Creates a recycler and attaches it to `host`.
    pub fn with_host(config: RecycleConfig, host: H) -> Result<Self, RecycleError> {
        let mut recycler = Self::new(config)?;
        recycler.attach(host)?;
        Ok(recycler)
    }

    /// Attaches to `host` and subscribes to its scroll notifications.
    ///
    /// A previously attached host is unsubscribed and dropped. Attaching
    /// starts a new session, so a disposed recycler becomes usable again.
    pub fn attach(&mut self, mut host: H) -> Result<(), RecycleError> {
        if !host.scrolls_along(self.config.orientation) {
            return Err(RecycleError::AxisNotScrollable(self.config.orientation));
        }
        drop(self.detach());
        self.subscription = Some(host.subscribe());
        self.corners = host.viewport_corners();
        self.host = Some(host);
        self.first_pass = true;
        self.disposed = false;
        log::debug!("recycler attached ({:?})", self.config.orientation);
        Ok(())
    }

    /// Unsubscribes from the current host and hands it back.
    pub fn detach(&mut self) -> Option<H> {
        let mut host = self.host.take()?;
        if let Some(subscription) = self.subscription.take() {
            host.unsubscribe(subscription);
        }
        Some(host)
    }

    /// Replaces the configuration.
    ///
    /// With a populated pool and an attached host the new configuration
    /// takes effect immediately: the pool is re-placed from index 0 and the
    /// host scrolls back to the start. A configuration whose cells need more
    /// views than the pool holds is rejected and the old one stays active.
    pub fn configure(&mut self, config: RecycleConfig) -> Result<(), RecycleError> {
        config.validate()?;
        let geometry = CellGeometry::from_config(&config);
        if let Some(host) = &self.host {
            if !host.scrolls_along(config.orientation) {
                return Err(RecycleError::AxisNotScrollable(config.orientation));
            }
            if !self.slots.is_empty() {
                let required = required_pool_size(host, &geometry);
                check_pool_size(required, self.slots.len())?;
            }
        }
        self.config = config;
        self.geometry = geometry;
        if self.host.is_some() && !self.slots.is_empty() && !self.disposed {
            self.update_count(self.total_count, true)?;
        }
        Ok(())
    }

    /// Number of views to create before calling [`populate`](Self::populate).
    ///
    /// Depends only on the viewport size, the cell stride, and the lane
    /// count, never on the data set size.
    pub fn compute_required_pool_size(&self) -> Result<usize, RecycleError> {
        let host = self.host.as_ref().ok_or(RecycleError::NoScrollHost)?;
        Ok(required_pool_size(host, &self.geometry))
    }

    /// Hands the recycler its pool. Can only be done once.
    ///
    /// With a host attached, the pool must hold at least
    /// [`compute_required_pool_size`](Self::compute_required_pool_size) views.
    /// Returns the pool size.
    pub fn populate(&mut self, handles: impl IntoIterator<Item = V>) -> Result<usize, RecycleError> {
        if !self.slots.is_empty() {
            return Err(RecycleError::PoolAlreadyPopulated);
        }
        let slots: Vec<_> = (0_u32..)
            .zip(handles)
            .map(|(i, handle)| Slot::new(SlotId(i), handle))
            .collect();
        if slots.is_empty() {
            return Err(RecycleError::EmptyPool);
        }
        if let Ok(required) = self.compute_required_pool_size() {
            check_pool_size(required, slots.len())?;
        }
        self.slots = slots;
        self.order = self.sorted(SortMode::Scroll);
        log::debug!("pool populated with {} views", self.slots.len());
        Ok(self.slots.len())
    }

    /// Installs the callback that renders a data index into a view.
    pub fn set_on_bind(&mut self, on_bind: impl FnMut(&mut V, BindEvent) + 'static) {
        self.on_bind = Some(Box::new(on_bind));
    }

    /// Removes the bind callback.
    pub fn clear_on_bind(&mut self) {
        self.on_bind = None;
    }

    /// Updates the data set size.
    ///
    /// With `reset_position`, the pool is re-placed from index 0 and the host
    /// scrolls back to the start. Otherwise the pool is rebased on the index
    /// of its leading slot so the visible items stay put, pulled back if that
    /// would run past the new end.
    pub fn update_count(&mut self, total_count: usize, reset_position: bool) -> Result<(), RecycleError> {
        if self.disposed {
            return Err(RecycleError::Disposed);
        }
        if self.host.is_none() {
            return Err(RecycleError::NoScrollHost);
        }
        if self.slots.is_empty() {
            return Err(RecycleError::EmptyPool);
        }

        let order = self.sorted(SortMode::Scroll);
        let baseline = if reset_position {
            0
        } else {
            self.rebased_baseline(&order, total_count)
        };
        log::debug!(
            "count {} -> {total_count}, baseline {} -> {baseline}",
            self.total_count,
            self.baseline
        );
        self.total_count = total_count;
        self.baseline = baseline;
        self.content_extent = self.geometry.content_extent(total_count);

        let orientation = self.config.orientation;
        if let Some(host) = self.host.as_mut() {
            host.resize_content(orientation, self.content_extent);
            if reset_position {
                host.scroll_to_start(orientation);
            }
        }

        self.order = order;
        self.place();
        self.run_wrap();
        Ok(())
    }

    /// Scroll notification entry point. Runs one wrap pass.
    ///
    /// Does nothing while detached, disposed, or unpopulated.
    pub fn on_scroll(&mut self) -> WrapReport {
        if self.disposed || self.slots.is_empty() {
            return WrapReport::default();
        }
        self.run_wrap()
    }

    /// Re-sorts the pool by position and lays it out again from the index of
    /// its leading slot.
    pub fn sort_by_scroll(&mut self) -> Result<(), RecycleError> {
        self.ensure_session()?;
        let order = self.sorted(SortMode::Scroll);
        self.baseline = self.rebased_baseline(&order, self.total_count);
        self.order = order;
        self.place();
        self.run_wrap();
        Ok(())
    }

    /// Lays the pool out in display-name order from the current baseline.
    pub fn sort_alphabetically(&mut self) -> Result<(), RecycleError> {
        self.ensure_session()?;
        self.order = self.sorted(SortMode::Alphabetic);
        self.place();
        self.run_wrap();
        Ok(())
    }

    /// Ends the session: unsubscribes from the host and drops the callback.
    ///
    /// Calling this more than once is a no-op. Dropping the recycler
    /// disposes it.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        if let Some(subscription) = self.subscription.take()
            && let Some(host) = self.host.as_mut()
        {
            host.unsubscribe(subscription);
        }
        self.on_bind = None;
        self.disposed = true;
        log::debug!("recycler disposed");
    }

    /// Whether [`dispose`](Self::dispose) has run since the last attach.
    #[must_use]
    pub const fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> &RecycleConfig {
        &self.config
    }

    /// Cell geometry derived from the configuration.
    #[must_use]
    pub const fn geometry(&self) -> &CellGeometry {
        &self.geometry
    }

    /// The attached host, if any.
    #[must_use]
    pub const fn host(&self) -> Option<&H> {
        self.host.as_ref()
    }

    /// Mutable access to the attached host.
    pub fn host_mut(&mut self) -> Option<&mut H> {
        self.host.as_mut()
    }

    /// All slots in population order.
    #[must_use]
    pub fn slots(&self) -> &[Slot<V>] {
        &self.slots
    }

    /// The handle in `slot`.
    #[must_use]
    pub fn handle(&self, slot: SlotId) -> Option<&V> {
        self.slots.get(slot.idx()).map(Slot::handle)
    }

    /// Current pool traversal.
    #[must_use]
    pub fn order(&self) -> &[SlotId] {
        &self.order
    }

    /// Number of pooled views.
    #[must_use]
    pub fn pool_size(&self) -> usize {
        self.slots.len()
    }

    /// Size of the data set.
    #[must_use]
    pub const fn total_count(&self) -> usize {
        self.total_count
    }

    /// Data index the leading slot was placed at.
    #[must_use]
    pub const fn baseline_index(&self) -> usize {
        self.baseline
    }

    /// Scroll-axis content extent last pushed to the host.
    #[must_use]
    pub const fn content_extent(&self) -> f64 {
        self.content_extent
    }

    /// Viewport corners sampled by the last wrap pass.
    #[must_use]
    pub const fn viewport_corners(&self) -> &ViewportCorners {
        &self.corners
    }

    /// Data index currently rendered into `slot`.
    #[must_use]
    pub fn bound_index(&self, slot: SlotId) -> Option<usize> {
        self.slots.get(slot.idx()).and_then(Slot::bound_index)
    }

    /// Slot currently showing `index`.
    #[must_use]
    pub fn slot_for_index(&self, index: usize) -> Option<SlotId> {
        self.order
            .iter()
            .copied()
            .find(|id| self.bound_index(*id) == Some(index))
    }

    /// Sorted data indices of bound slots whose views are shown.
    #[must_use]
    pub fn visible_indices(&self) -> Vec<usize> {
        let mut indices: Vec<_> = self
            .order
            .iter()
            .filter_map(|id| self.slots.get(id.idx()))
            .filter(|slot| slot.handle.is_visible())
            .filter_map(Slot::bound_index)
            .collect();
        indices.sort_unstable();
        indices
    }

    fn ensure_session(&self) -> Result<(), RecycleError> {
        if self.disposed {
            return Err(RecycleError::Disposed);
        }
        if self.host.is_none() {
            return Err(RecycleError::NoScrollHost);
        }
        if self.slots.is_empty() {
            return Err(RecycleError::EmptyPool);
        }
        Ok(())
    }

    fn sorted(&self, mode: SortMode) -> SlotOrder {
        order_slots(
            &self.slots,
            mode,
            self.config.orientation,
            self.config.ignore_inactive_in_sort,
        )
    }

    /// Baseline that keeps the leading slot's index, aligned to a line and
    /// pulled back so the pool ends at `total_count`.
    fn rebased_baseline(&self, order: &[SlotId], total_count: usize) -> usize {
        let lanes = self.geometry.lanes();
        let leading = order
            .first()
            .and_then(|id| self.slots.get(id.idx()))
            .map_or(0, |slot| {
                slot.bound.unwrap_or_else(|| {
                    usize::try_from(self.geometry.offset_to_index(slot.handle.local_offset()))
                        .unwrap_or(0)
                })
            });
        let baseline = leading - leading % lanes;
        if baseline + order.len() > total_count {
            let tail = total_count.saturating_sub(order.len());
            tail - tail % lanes
        } else {
            baseline
        }
    }

    fn place(&mut self) {
        let Self {
            slots,
            order,
            geometry,
            baseline,
            total_count,
            on_bind,
            ..
        } = self;
        let bound = with_binder(on_bind, |bind| {
            place_slots(slots, order, geometry, *baseline, *total_count, bind)
        });
        self.first_pass = true;
        log::trace!("placed {} slots from {}, {bound} bound", self.order.len(), self.baseline);
    }

    fn run_wrap(&mut self) -> WrapReport {
        let Some(host) = self.host.as_ref() else {
            return WrapReport::default();
        };
        let input = WrapInput {
            corners: host.viewport_corners(),
            content_offset: host.content_offset(),
            total_count: self.total_count,
            cull_offscreen: self.config.cull_offscreen,
            first_pass: self.first_pass,
        };
        self.corners = input.corners;
        let Self {
            slots,
            order,
            geometry,
            on_bind,
            ..
        } = self;
        let report = with_binder(on_bind, |bind| wrap_pass(slots, order, geometry, &input, bind));
        self.first_pass = false;
        report
    }
}

impl<H: ScrollHost, V: ViewHandle> Drop for Recycler<H, V> {
    fn drop(&mut self) {
        self.dispose();
    }
}

/// Pool size `geometry` needs in the viewport of `host`.
fn required_pool_size<H: ScrollHost>(host: &H, geometry: &CellGeometry) -> usize {
    let bounds = viewport_bounds(&host.viewport_corners());
    let extent = match geometry.orientation {
        Orientation::Horizontal => bounds.width(),
        Orientation::Vertical => bounds.height(),
    };
    geometry.pool_size_for_viewport(extent)
}

fn check_pool_size(required: usize, pool: usize) -> Result<(), RecycleError> {
    if pool < required {
        return Err(RecycleError::PoolTooSmall { required, pool });
    }
    Ok(())
}

/// Runs `f` with the installed bind callback, or a no-op when there is none.
fn with_binder<V, R>(
    on_bind: &mut Option<Box<BindFn<'static, V>>>,
    f: impl FnOnce(&mut BindFn<'_, V>) -> R,
) -> R {
    match on_bind {
        Some(bind) => f(bind.as_mut()),
        None => f(&mut |_, _| {}),
    }
}

#[cfg(test)]
mod tests {
    use alloc::rc::Rc;
    use alloc::vec::Vec;
    use core::cell::RefCell;

    use kurbo::{Point, Rect, Vec2};

    use super::Recycler;
    use crate::{
        Orientation, RecycleConfig, RecycleError, ScrollHost, SlotId, ViewHandle,
        ViewportCorners, WrapReport, corners_from_rect,
    };

    #[derive(Debug, Default)]
    struct Log {
        subscribed: usize,
        unsubscribed: usize,
        resized: Vec<f64>,
        resets: usize,
    }

    #[derive(Debug)]
    struct Host {
        viewport: Rect,
        offset: Vec2,
        axes: (bool, bool),
        log: Rc<RefCell<Log>>,
    }

    impl Host {
        fn vertical(height: f64) -> (Self, Rc<RefCell<Log>>) {
            let log = Rc::new(RefCell::new(Log::default()));
            (
                Self {
                    viewport: Rect::new(0.0, -height, 300.0, 0.0),
                    offset: Vec2::ZERO,
                    axes: (false, true),
                    log: log.clone(),
                },
                log,
            )
        }
    }

    impl ScrollHost for Host {
        type Subscription = u32;

        fn viewport_corners(&self) -> ViewportCorners {
            corners_from_rect(self.viewport)
        }
        fn content_offset(&self) -> Vec2 {
            self.offset
        }
        fn scrolls_along(&self, orientation: Orientation) -> bool {
            match orientation {
                Orientation::Horizontal => self.axes.0,
                Orientation::Vertical => self.axes.1,
            }
        }
        fn subscribe(&mut self) -> u32 {
            self.log.borrow_mut().subscribed += 1;
            7
        }
        fn unsubscribe(&mut self, subscription: u32) {
            assert_eq!(subscription, 7, "unknown subscription");
            self.log.borrow_mut().unsubscribed += 1;
        }
        fn scroll_to_start(&mut self, _orientation: Orientation) {
            self.offset = Vec2::ZERO;
            self.log.borrow_mut().resets += 1;
        }
        fn resize_content(&mut self, _orientation: Orientation, extent: f64) {
            self.log.borrow_mut().resized.push(extent);
        }
    }

    #[derive(Debug, Default)]
    struct View {
        at: Point,
        visible: bool,
        shown: Option<usize>,
    }

    impl ViewHandle for View {
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
    }

    fn list(height: f64, config: RecycleConfig) -> (Recycler<Host, View>, Rc<RefCell<Log>>) {
        let (host, log) = Host::vertical(height);
        let mut recycler = Recycler::with_host(config, host).unwrap();
        let size = recycler.compute_required_pool_size().unwrap();
        recycler
            .populate((0..size).map(|_| View::default()))
            .unwrap();
        recycler.set_on_bind(|view, event| view.shown = Some(event.index));
        (recycler, log)
    }

    fn scroll_to(recycler: &mut Recycler<Host, View>, y: f64) {
        recycler.host_mut().unwrap().offset = Vec2::new(0.0, y);
        recycler.on_scroll();
    }

    fn all_bound(recycler: &Recycler<Host, View>) -> Vec<usize> {
        let mut indices: Vec<_> = recycler
            .slots()
            .iter()
            .filter_map(|slot| slot.bound_index())
            .collect();
        indices.sort_unstable();
        indices
    }

    #[test]
    fn missing_host_is_a_configuration_error() {
        let mut recycler: Recycler<Host, View> = Recycler::new(RecycleConfig::default()).unwrap();
        assert_eq!(
            recycler.compute_required_pool_size(),
            Err(RecycleError::NoScrollHost)
        );
        recycler.populate([View::default()]).unwrap();
        assert_eq!(
            recycler.update_count(10, false),
            Err(RecycleError::NoScrollHost)
        );
    }

    #[test]
    fn host_must_scroll_along_the_configured_axis() {
        let (host, _) = Host::vertical(450.0);
        let config = RecycleConfig::default().with_orientation(Orientation::Horizontal);
        assert_eq!(
            Recycler::<Host, View>::with_host(config, host).unwrap_err(),
            RecycleError::AxisNotScrollable(Orientation::Horizontal)
        );
    }

    #[test]
    fn invalid_config_is_rejected_up_front() {
        assert_eq!(
            Recycler::<Host, View>::new(RecycleConfig::new(100, 0)).unwrap_err(),
            RecycleError::ZeroItemSize {
                width: 100,
                height: 0
            }
        );
    }

    #[test]
    fn pool_can_only_be_populated_once() {
        let (mut recycler, _) = list(450.0, RecycleConfig::default());
        assert_eq!(
            recycler.populate([View::default()]),
            Err(RecycleError::PoolAlreadyPopulated)
        );
        let (host, _) = Host::vertical(450.0);
        let mut empty: Recycler<Host, View> =
            Recycler::with_host(RecycleConfig::default(), host).unwrap();
        assert_eq!(empty.populate([]), Err(RecycleError::EmptyPool));
    }

    #[test]
    fn update_count_binds_the_first_indices_and_sizes_content() {
        let (mut recycler, log) = list(450.0, RecycleConfig::new(100, 100));
        assert_eq!(recycler.pool_size(), 7);

        recycler.update_count(13, false).unwrap();
        assert_eq!(all_bound(&recycler), [0, 1, 2, 3, 4, 5, 6]);
        assert_eq!(log.borrow().resized, [1300.0]);
        assert!((recycler.content_extent() - 1300.0).abs() < f64::EPSILON);
        // The last slot sits more than a stride below the viewport.
        assert_eq!(recycler.visible_indices(), [0, 1, 2, 3, 4, 5]);
        let shown: Vec<_> = recycler.slots().iter().map(|s| s.handle().shown).collect();
        assert!(shown.iter().all(Option::is_some));
    }

    #[test]
    fn scrolling_wraps_slots_forward_and_back() {
        let (mut recycler, _) = list(450.0, RecycleConfig::new(100, 100));
        recycler.update_count(13, false).unwrap();

        scroll_to(&mut recycler, 350.0);
        assert_eq!(all_bound(&recycler), [3, 4, 5, 6, 7, 8, 9]);
        let seven = recycler.slot_for_index(7).unwrap();
        assert_eq!(recycler.handle(seven).unwrap().shown, Some(7));
        assert_eq!(recycler.handle(seven).unwrap().at, Point::new(0.0, -700.0));

        scroll_to(&mut recycler, 0.0);
        assert_eq!(all_bound(&recycler), [0, 1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn scrolling_to_the_end_never_binds_past_the_count() {
        let (mut recycler, _) = list(450.0, RecycleConfig::new(100, 100));
        recycler.update_count(13, false).unwrap();

        scroll_to(&mut recycler, 350.0);
        scroll_to(&mut recycler, 850.0);
        assert_eq!(all_bound(&recycler), [6, 7, 8, 9, 10, 11, 12]);
        assert_eq!(recycler.visible_indices(), [8, 9, 10, 11, 12]);
    }

    #[test]
    fn growing_the_count_keeps_visible_indices() {
        let (mut recycler, _) = list(450.0, RecycleConfig::new(100, 100));
        recycler.update_count(13, false).unwrap();
        scroll_to(&mut recycler, 350.0);
        let before = recycler.visible_indices();

        recycler.update_count(40, false).unwrap();
        assert_eq!(recycler.baseline_index(), 3);
        assert_eq!(recycler.visible_indices(), before);
    }

    #[test]
    fn shrinking_below_the_leading_index_clamps_to_the_tail() {
        let (mut recycler, _) = list(450.0, RecycleConfig::new(100, 100));
        recycler.update_count(100, false).unwrap();
        scroll_to(&mut recycler, 5000.0);
        assert_eq!(recycler.baseline_index(), 0);
        assert!(all_bound(&recycler).iter().all(|&i| i >= 48));

        recycler.update_count(20, false).unwrap();
        assert_eq!(recycler.baseline_index(), 13);
        assert_eq!(all_bound(&recycler).last(), Some(&19));
    }

    #[test]
    fn reset_scrolls_home_and_restarts_from_zero() {
        let (mut recycler, log) = list(450.0, RecycleConfig::new(100, 100));
        recycler.update_count(100, false).unwrap();
        scroll_to(&mut recycler, 2000.0);

        recycler.update_count(50, true).unwrap();
        assert_eq!(log.borrow().resets, 1);
        assert_eq!(recycler.baseline_index(), 0);
        assert_eq!(all_bound(&recycler), [0, 1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn fewer_items_than_slots_leaves_the_rest_unbound_and_hidden() {
        let (mut recycler, _) = list(450.0, RecycleConfig::new(100, 100));
        recycler.update_count(3, false).unwrap();
        assert_eq!(all_bound(&recycler), [0, 1, 2]);
        assert_eq!(recycler.visible_indices(), [0, 1, 2]);
        let hidden = recycler
            .slots()
            .iter()
            .filter(|slot| !slot.handle().visible)
            .count();
        assert_eq!(hidden, 4);
    }

    #[test]
    fn grid_rebinds_whole_lines() {
        let config = RecycleConfig::new(100, 100).with_columns_or_rows(3);
        let (mut recycler, _) = list(450.0, config);
        assert_eq!(recycler.pool_size(), 21);

        recycler.update_count(40, false).unwrap();
        assert_eq!(all_bound(&recycler), (0..21).collect::<Vec<_>>());

        scroll_to(&mut recycler, 350.0);
        assert_eq!(all_bound(&recycler), (9..30).collect::<Vec<_>>());
        let ten = recycler.slot_for_index(10).unwrap();
        assert_eq!(recycler.handle(ten).unwrap().at, Point::new(100.0, -300.0));
    }

    #[test]
    fn alphabetic_sort_lays_out_by_name() {
        #[derive(Debug)]
        struct Named(&'static str, Point, bool);
        impl ViewHandle for Named {
            fn local_offset(&self) -> Point {
                self.1
            }
            fn set_local_offset(&mut self, offset: Point) {
                self.1 = offset;
            }
            fn is_visible(&self) -> bool {
                self.2
            }
            fn set_visible(&mut self, visible: bool) {
                self.2 = visible;
            }
            fn display_name(&self) -> &str {
                self.0
            }
        }

        let (host, _) = Host::vertical(50.0);
        let mut recycler = Recycler::with_host(RecycleConfig::new(50, 50), host).unwrap();
        recycler
            .populate(["c", "a", "b"].map(|name| Named(name, Point::ORIGIN, true)))
            .unwrap();
        recycler.update_count(3, false).unwrap();
        recycler.sort_alphabetically().unwrap();

        assert_eq!(recycler.order(), [SlotId(1), SlotId(2), SlotId(0)]);
        assert_eq!(recycler.bound_index(SlotId(1)), Some(0));
        assert_eq!(recycler.bound_index(SlotId(0)), Some(2));
    }

    #[test]
    fn sort_by_scroll_keeps_the_current_window() {
        let (mut recycler, _) = list(450.0, RecycleConfig::new(100, 100));
        recycler.update_count(30, false).unwrap();
        scroll_to(&mut recycler, 1000.0);
        let before = all_bound(&recycler);

        recycler.sort_by_scroll().unwrap();
        assert_eq!(all_bound(&recycler), before);
        assert_eq!(recycler.baseline_index(), before[0]);
    }

    #[test]
    fn dispose_unsubscribes_once_and_clears_the_callback() {
        let (mut recycler, log) = list(450.0, RecycleConfig::new(100, 100));
        recycler.update_count(13, false).unwrap();

        recycler.dispose();
        recycler.dispose();
        assert!(recycler.is_disposed());
        assert_eq!(log.borrow().subscribed, 1);
        assert_eq!(log.borrow().unsubscribed, 1);
        assert_eq!(recycler.update_count(5, false), Err(RecycleError::Disposed));
        assert_eq!(recycler.on_scroll(), WrapReport::default());

        drop(recycler);
        assert_eq!(log.borrow().unsubscribed, 1);
    }

    #[test]
    fn dropping_disposes() {
        let (recycler, log) = list(450.0, RecycleConfig::new(100, 100));
        drop(recycler);
        assert_eq!(log.borrow().unsubscribed, 1);
    }

    #[test]
    fn reconfiguring_replaces_and_resets() {
        let (mut recycler, log) = list(450.0, RecycleConfig::new(100, 100));
        recycler.update_count(13, false).unwrap();
        recycler
            .configure(RecycleConfig::new(100, 150).with_cull_offscreen(false))
            .unwrap();
        assert_eq!(log.borrow().resets, 1);
        assert!((recycler.content_extent() - 1950.0).abs() < f64::EPSILON);
        assert_eq!(
            recycler.configure(RecycleConfig::new(100, 100).with_columns_or_rows(0)),
            Err(RecycleError::ZeroLanes)
        );
        assert_eq!(recycler.config().item_height, 150);
    }

    #[test]
    fn reconfiguring_past_the_pool_size_is_rejected() {
        let (mut recycler, log) = list(450.0, RecycleConfig::new(300, 100));
        recycler.update_count(100, false).unwrap();

        // Half-height cells need 11 views; the pool holds 7.
        assert_eq!(
            recycler.configure(RecycleConfig::new(300, 50)),
            Err(RecycleError::PoolTooSmall {
                required: 11,
                pool: 7
            })
        );
        assert_eq!(recycler.config().item_height, 100);
        assert_eq!(log.borrow().resets, 0);
        assert_eq!(recycler.visible_indices(), [0, 1, 2, 3, 4, 5]);

        // Grids multiply the requirement by the lane count.
        assert!(matches!(
            recycler.configure(RecycleConfig::new(100, 100).with_columns_or_rows(3)),
            Err(RecycleError::PoolTooSmall { required: 21, .. })
        ));
    }

    #[test]
    fn undersized_pools_are_rejected_when_attached() {
        let (host, _) = Host::vertical(450.0);
        let mut recycler: Recycler<Host, View> =
            Recycler::with_host(RecycleConfig::new(100, 100), host).unwrap();
        assert_eq!(
            recycler.populate((0..6).map(|_| View::default())),
            Err(RecycleError::PoolTooSmall {
                required: 7,
                pool: 6
            })
        );
        assert_eq!(recycler.pool_size(), 0);
        assert_eq!(recycler.populate((0..7).map(|_| View::default())), Ok(7));
    }

    #[test]
    fn hidden_slots_stay_in_the_pool_when_ignored_by_the_sort() {
        let config = RecycleConfig::new(300, 100).with_ignore_inactive_in_sort(true);
        let (mut recycler, _) = list(450.0, config);
        recycler.update_count(13, false).unwrap();
        // The trailing slot is hidden now; a second update sorts without it.
        recycler.update_count(13, false).unwrap();
        assert_eq!(recycler.order().len(), recycler.pool_size());

        scroll_to(&mut recycler, 350.0);
        assert_eq!(all_bound(&recycler), [3, 4, 5, 6, 7, 8, 9]);

        recycler.update_count(100, false).unwrap();
        assert_eq!(recycler.baseline_index(), 3);
        scroll_to(&mut recycler, 2000.0);
        assert_eq!(all_bound(&recycler), (19..26).collect::<Vec<_>>());
        assert_eq!(recycler.visible_indices(), [20, 21, 22, 23, 24, 25]);
    }
}
