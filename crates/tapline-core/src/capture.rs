//! Producer-side handlers.
//!
//! Each handler turns one native or tracking notification into a pooled
//! record, appends it to the matching queue and updates the derived pointer
//! and key state, all under the pipeline lock. The frame waker runs after
//! the lock is released.

use tapline_geometry::Point;

use crate::event::{Button, KeyEvent, KeyEventKind, PointerSlot, SessionId, TouchEventKind};
use crate::keys::Key;
use crate::pipeline::{InputPipeline, PipelineState};

impl PipelineState {
    fn push_touch(
        &mut self,
        timestamp: u64,
        kind: TouchEventKind,
        position: Point,
        pointer: PointerSlot,
        button: Button,
    ) {
        let mut event = self.touch_pool.obtain();
        event.timestamp = timestamp;
        event.kind = kind;
        event.x = position.x;
        event.y = position.y;
        event.pointer = pointer;
        event.button = button;
        self.touch_queue.push(event);
    }

    fn push_key(&mut self, timestamp: u64, kind: KeyEventKind, key: Key, key_char: char) {
        let mut event: KeyEvent = self.key_pool.obtain();
        event.timestamp = timestamp;
        event.kind = kind;
        event.key = key;
        event.key_char = key_char;
        self.key_queue.push(event);
    }
}

impl InputPipeline {
    /// Runs `handler` under the lock with a fresh timestamp, then wakes the
    /// host if the handler reported a change.
    fn capture(&self, handler: impl FnOnce(&mut PipelineState, u64) -> bool) {
        let changed = self.update(|state| {
            let now = self.now();
            handler(state, now)
        });
        if changed {
            self.wake();
        }
    }

    /// Native pointer moved with no button held.
    pub fn mouse_moved(&self, x: i32, y: i32) {
        if self.is_tracking_active() {
            return;
        }
        self.capture(|state, now| {
            let position = Point::new(x, y);
            state.push_touch(
                now,
                TouchEventKind::Moved,
                position,
                PointerSlot::PRIMARY,
                Button::Left,
            );
            state.pointers.record(PointerSlot::PRIMARY, position);
            true
        });
    }

    /// Native pointer moved while a button is held.
    pub fn mouse_dragged(&self, x: i32, y: i32) {
        self.capture(|state, now| {
            let position = Point::new(x, y);
            state.push_touch(
                now,
                TouchEventKind::Dragged,
                position,
                PointerSlot::PRIMARY,
                Button::Left,
            );
            state.pointers.record(PointerSlot::PRIMARY, position);
            true
        });
    }

    pub fn mouse_pressed(&self, x: i32, y: i32, button: Button) {
        if self.is_tracking_active() {
            return;
        }
        self.capture(|state, now| {
            let position = Point::new(x, y);
            state.push_touch(
                now,
                TouchEventKind::Down,
                position,
                PointerSlot::PRIMARY,
                button,
            );
            state.pointers.record(PointerSlot::PRIMARY, position);
            state.pointers.touch_down = true;
            state.pointers.buttons.insert(button);
            true
        });
    }

    pub fn mouse_released(&self, x: i32, y: i32, button: Button) {
        if self.is_tracking_active() {
            return;
        }
        self.capture(|state, now| {
            let position = Point::new(x, y);
            state.push_touch(now, TouchEventKind::Up, position, PointerSlot::PRIMARY, button);
            state.pointers.record(PointerSlot::PRIMARY, position);
            state.pointers.buttons.remove(button);
            state.pointers.touch_down = !state.pointers.buttons.is_empty();
            true
        });
    }

    /// Wheel rotation in notches, positive towards the user. The event is
    /// reported at the primary pointer's last position.
    pub fn mouse_wheel(&self, amount: i32) {
        self.capture(|state, now| {
            let position = state.pointers.position(PointerSlot::PRIMARY);
            state.push_touch(
                now,
                TouchEventKind::Scrolled,
                position,
                PointerSlot::PRIMARY,
                Button::Left,
            );
            if let Some(event) = state.touch_queue.last_mut() {
                event.scroll_amount = amount;
            }
            true
        });
    }

    /// Pointer entered the surface. Records the position without an event.
    pub fn mouse_entered(&self, x: i32, y: i32) {
        if self.is_tracking_active() {
            return;
        }
        self.capture(|state, _| {
            state.pointers.place(PointerSlot::PRIMARY, Point::new(x, y));
            true
        });
    }

    pub fn mouse_exited(&self) {
        if self.is_tracking_active() {
            return;
        }
        self.wake();
    }

    pub fn key_pressed(&self, key: Key) {
        self.capture(|state, now| {
            state.push_key(now, KeyEventKind::KeyDown, key, '\0');
            state.keys.press(key);
            true
        });
    }

    pub fn key_released(&self, key: Key) {
        self.capture(|state, now| {
            state.push_key(now, KeyEventKind::KeyUp, key, '\0');
            state.keys.release(key);
            true
        });
    }

    pub fn key_typed(&self, character: char) {
        self.capture(|state, now| {
            state.push_key(now, KeyEventKind::KeyTyped, Key::UNKNOWN, character);
            true
        });
    }

    /// A tracked contact appeared at normalized `(nx, ny)`.
    ///
    /// Contacts outside the surface or hidden by an overlay are dropped.
    /// When every tracking slot is taken the contact shares the primary slot.
    /// A repeated add for a session that is already bound moves that contact
    /// instead of claiming a second slot.
    pub fn contact_added(&self, session: SessionId, nx: f32, ny: f32) {
        self.capture(|state, now| {
            if let Some(slot) = state.sessions.resolve(session) {
                log::trace!("contact {session} added twice, treating as a move");
                let position = state.layout.map_existing_contact(nx, ny);
                state.push_touch(now, TouchEventKind::Dragged, position, slot, Button::Left);
                state.pointers.record(slot, position);
                return true;
            }
            let Some(position) = state.layout.map_new_contact(nx, ny) else {
                log::trace!("dropping contact {session} at ({nx}, {ny}): off surface or occluded");
                return false;
            };
            let slot = state.slots.allocate();
            if slot.is_primary() {
                log::warn!("pointer slots exhausted, contact {session} falls back to slot 0");
            }
            state.sessions.bind(session, slot);
            state.push_touch(now, TouchEventKind::Down, position, slot, Button::Left);
            state.pointers.record(slot, position);
            state.pointers.touch_down = true;
            true
        });
    }

    /// A tracked contact moved. Unknown sessions are ignored.
    pub fn contact_updated(&self, session: SessionId, nx: f32, ny: f32) {
        self.capture(|state, now| {
            let Some(slot) = state.sessions.resolve(session) else {
                log::trace!("ignoring update for unbound contact {session}");
                return false;
            };
            let position = state.layout.map_existing_contact(nx, ny);
            state.push_touch(now, TouchEventKind::Dragged, position, slot, Button::Left);
            state.pointers.record(slot, position);
            true
        });
    }

    /// A tracked contact lifted. Frees its slot; unknown sessions are ignored.
    pub fn contact_removed(&self, session: SessionId, nx: f32, ny: f32) {
        self.capture(|state, now| {
            let Some(slot) = state.sessions.unbind(session) else {
                log::trace!("ignoring removal of unbound contact {session}");
                return false;
            };
            let position = state.layout.map_existing_contact(nx, ny);
            state.push_touch(now, TouchEventKind::Up, position, slot, Button::Left);
            state.pointers.record(slot, position);
            state.slots.free(slot);
            if state.slots.is_empty() {
                state.pointers.touch_down = false;
            }
            true
        });
    }
}
