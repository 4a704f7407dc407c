use std::cell::RefCell;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::{Mutex, ReentrantMutex};

use crate::clock::{Clock, MonotonicClock};
use crate::coords::SurfaceLayout;
use crate::event::{Button, KeyEvent, PointerSlot, TouchEvent, MAX_POINTERS};
use crate::keys::Key;
use crate::listener::InputListener;
use crate::pool::Pool;
use crate::session::SessionMap;
use crate::settings::PipelineSettings;
use crate::slots::SlotAllocator;
use crate::state::{KeyTracker, PointerTracker};

pub(crate) type FrameWaker = Arc<dyn Fn() + Send + Sync>;

/// Everything guarded by the pipeline lock. The listener is moved out for
/// the duration of a drain.
pub(crate) struct PipelineState {
    pub(crate) key_pool: Pool<KeyEvent>,
    pub(crate) touch_pool: Pool<TouchEvent>,
    pub(crate) key_queue: Vec<KeyEvent>,
    pub(crate) touch_queue: Vec<TouchEvent>,
    pub(crate) slots: SlotAllocator,
    pub(crate) sessions: SessionMap,
    pub(crate) layout: SurfaceLayout,
    pub(crate) pointers: PointerTracker,
    pub(crate) keys: KeyTracker,
    pub(crate) just_touched: bool,
    pub(crate) current_event_time: u64,
    pub(crate) listener: Option<Box<dyn InputListener>>,
}

impl PipelineState {
    fn new(settings: PipelineSettings) -> Self {
        Self {
            key_pool: Pool::new(settings.key_pool),
            touch_pool: Pool::new(settings.touch_pool),
            key_queue: Vec::new(),
            touch_queue: Vec::new(),
            slots: SlotAllocator::new(),
            sessions: SessionMap::new(),
            layout: settings.layout,
            pointers: PointerTracker::default(),
            keys: KeyTracker::default(),
            just_touched: false,
            current_event_time: 0,
            listener: None,
        }
    }

    /// Slot 0 reports the aggregate flag, tracked slots report ownership.
    fn is_touched_at(&self, slot: PointerSlot) -> bool {
        if slot.is_primary() {
            self.pointers.touch_down
        } else {
            self.slots.is_used(slot)
        }
    }
}

/// Pool occupancy snapshot, for diagnostics and tests.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct PoolStats {
    pub key_free: usize,
    pub key_created: usize,
    pub touch_free: usize,
    pub touch_created: usize,
}

/// Shared input pipeline.
///
/// Wrap it in an [`Arc`] and hand clones to every producer. All capture
/// handlers and [`process_events`](Self::process_events) serialize on one
/// internal lock. The lock is reentrant, so a listener may query the pipeline
/// from inside a callback.
pub struct InputPipeline {
    pub(crate) state: ReentrantMutex<RefCell<PipelineState>>,
    tracking_active: AtomicBool,
    clock: Arc<dyn Clock>,
    frame_waker: Mutex<Option<FrameWaker>>,
}

impl InputPipeline {
    pub fn new(settings: PipelineSettings) -> Self {
        Self::with_clock(settings, Arc::new(MonotonicClock::new()))
    }

    pub fn with_clock(settings: PipelineSettings, clock: Arc<dyn Clock>) -> Self {
        Self {
            state: ReentrantMutex::new(RefCell::new(PipelineState::new(settings))),
            tracking_active: AtomicBool::new(false),
            clock,
            frame_waker: Mutex::new(None),
        }
    }

    /// Runs `read` against the state under the lock.
    pub(crate) fn read<R>(&self, read: impl FnOnce(&PipelineState) -> R) -> R {
        let guard = self.state.lock();
        let state = guard.borrow();
        read(&state)
    }

    /// Runs `update` against the state under the lock. Must not be nested
    /// inside another `read` or `update` on the same thread.
    pub(crate) fn update<R>(&self, update: impl FnOnce(&mut PipelineState) -> R) -> R {
        let guard = self.state.lock();
        let mut state = guard.borrow_mut();
        update(&mut state)
    }

    pub(crate) fn now(&self) -> u64 {
        self.clock.now_nanos()
    }

    pub(crate) fn wake(&self) {
        let waker = self.frame_waker.lock().clone();
        if let Some(waker) = waker {
            waker();
        }
    }

    /// Installs `listener` and returns the one it replaces.
    pub fn set_listener(
        &self,
        listener: impl InputListener + 'static,
    ) -> Option<Box<dyn InputListener>> {
        self.update(|state| state.listener.replace(Box::new(listener)))
    }

    pub fn take_listener(&self) -> Option<Box<dyn InputListener>> {
        self.update(|state| state.listener.take())
    }

    pub fn has_listener(&self) -> bool {
        self.read(|state| state.listener.is_some())
    }

    pub fn set_surface_layout(&self, layout: SurfaceLayout) {
        self.update(|state| state.layout = layout);
    }

    pub fn surface_layout(&self) -> SurfaceLayout {
        self.read(|state| state.layout.clone())
    }

    /// Registers a callback run after every captured event, outside the lock.
    pub fn set_frame_waker(&self, waker: impl Fn() + Send + Sync + 'static) {
        *self.frame_waker.lock() = Some(Arc::new(waker));
    }

    pub fn clear_frame_waker(&self) {
        *self.frame_waker.lock() = None;
    }

    /// While set, native pointer moves, presses, releases and enter/exit are
    /// ignored so the tracking source owns the pointer.
    pub fn set_tracking_active(&self, active: bool) {
        self.tracking_active.store(active, Ordering::Release);
    }

    pub fn is_tracking_active(&self) -> bool {
        self.tracking_active.load(Ordering::Acquire)
    }

    pub fn x(&self) -> i32 {
        self.read(|state| state.pointers.last_position().x)
    }

    pub fn y(&self) -> i32 {
        self.read(|state| state.pointers.last_position().y)
    }

    pub fn x_of(&self, slot: PointerSlot) -> i32 {
        self.read(|state| state.pointers.position(slot).x)
    }

    pub fn y_of(&self, slot: PointerSlot) -> i32 {
        self.read(|state| state.pointers.position(slot).y)
    }

    pub fn delta_x(&self) -> i32 {
        self.read(|state| state.pointers.last_delta().x)
    }

    pub fn delta_y(&self) -> i32 {
        self.read(|state| state.pointers.last_delta().y)
    }

    pub fn delta_x_of(&self, slot: PointerSlot) -> i32 {
        self.read(|state| state.pointers.delta(slot).x)
    }

    pub fn delta_y_of(&self, slot: PointerSlot) -> i32 {
        self.read(|state| state.pointers.delta(slot).y)
    }

    /// Whether a mouse button or a tracked contact is down.
    pub fn is_touched(&self) -> bool {
        self.read(|state| state.pointers.touch_down)
    }

    pub fn is_touched_at(&self, slot: PointerSlot) -> bool {
        self.read(|state| state.is_touched_at(slot))
    }

    pub fn pressure(&self) -> f32 {
        if self.is_touched() {
            1.0
        } else {
            0.0
        }
    }

    pub fn pressure_at(&self, slot: PointerSlot) -> f32 {
        if self.is_touched_at(slot) {
            1.0
        } else {
            0.0
        }
    }

    /// True when a touch-down was dispatched during the last
    /// [`process_events`](Self::process_events).
    pub fn just_touched(&self) -> bool {
        self.read(|state| state.just_touched)
    }

    /// Accepts [`Key::ANY_KEY`].
    pub fn is_key_pressed(&self, key: Key) -> bool {
        self.read(|state| state.keys.is_pressed(key))
    }

    pub fn is_key_just_pressed(&self, key: Key) -> bool {
        self.read(|state| state.keys.is_just_pressed(key))
    }

    pub fn is_button_pressed(&self, button: Button) -> bool {
        self.read(|state| state.pointers.buttons.contains(button))
    }

    pub fn is_button_just_pressed(&self, button: Button) -> bool {
        self.read(|state| state.pointers.just_pressed_buttons.contains(button))
    }

    /// Timestamp of the event most recently delivered to the listener.
    pub fn current_event_time(&self) -> u64 {
        self.read(|state| state.current_event_time)
    }

    pub fn max_pointers(&self) -> usize {
        MAX_POINTERS
    }

    /// Events captured but not yet dispatched, as `(key, touch)`.
    pub fn pending_events(&self) -> (usize, usize) {
        self.read(|state| (state.key_queue.len(), state.touch_queue.len()))
    }

    pub fn pool_stats(&self) -> PoolStats {
        self.read(|state| PoolStats {
            key_free: state.key_pool.free_count(),
            key_created: state.key_pool.created(),
            touch_free: state.touch_pool.free_count(),
            touch_created: state.touch_pool.created(),
        })
    }
}

impl Default for InputPipeline {
    fn default() -> Self {
        Self::new(PipelineSettings::default())
    }
}

impl std::fmt::Debug for InputPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (keys, touches) = self.pending_events();
        f.debug_struct("InputPipeline")
            .field("pending_keys", &keys)
            .field("pending_touches", &touches)
            .field("tracking_active", &self.is_tracking_active())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_pipeline_reports_idle_state() {
        let pipeline = InputPipeline::default();
        assert_eq!(pipeline.x(), 0);
        assert_eq!(pipeline.delta_y(), 0);
        assert!(!pipeline.is_touched());
        assert!(!pipeline.just_touched());
        assert!(!pipeline.is_key_pressed(Key::ANY_KEY));
        assert_eq!(pipeline.max_pointers(), 11);
        assert_eq!(pipeline.pending_events(), (0, 0));
    }

    #[test]
    fn default_pools_are_prefilled() {
        let pipeline = InputPipeline::default();
        assert_eq!(
            pipeline.pool_stats(),
            PoolStats {
                key_free: 16,
                key_created: 16,
                touch_free: 16,
                touch_created: 16,
            }
        );
    }

    #[test]
    fn out_of_range_slot_queries_are_zero() {
        let pipeline = InputPipeline::default();
        assert_eq!(pipeline.x_of(PointerSlot(42)), 0);
        assert_eq!(pipeline.delta_y_of(PointerSlot(42)), 0);
        assert!(!pipeline.is_touched_at(PointerSlot(42)));
        assert_eq!(pipeline.pressure_at(PointerSlot(42)), 0.0);
    }

    #[test]
    fn set_listener_returns_previous() {
        struct Quiet;
        impl InputListener for Quiet {}

        let pipeline = InputPipeline::default();
        assert!(pipeline.set_listener(Quiet).is_none());
        assert!(pipeline.set_listener(Quiet).is_some());
        assert!(pipeline.take_listener().is_some());
        assert!(!pipeline.has_listener());
    }

    #[test]
    fn tracking_flag_round_trips() {
        let pipeline = InputPipeline::default();
        pipeline.set_tracking_active(true);
        assert!(pipeline.is_tracking_active());
        pipeline.set_tracking_active(false);
        assert!(!pipeline.is_tracking_active());
    }
}
