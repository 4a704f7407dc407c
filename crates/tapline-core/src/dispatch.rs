use std::mem;

use crate::event::{KeyEventKind, TouchEventKind};
use crate::pipeline::InputPipeline;

impl InputPipeline {
    /// Drains both queues and replays them to the listener, keys first, each
    /// queue in arrival order.
    ///
    /// Call once per tick from the thread that owns the listener. The lock is
    /// held for the whole drain, so producers on other threads block until it
    /// returns. Without a listener the queues are still drained and
    /// `just_touched` still reflects touch-downs, but nothing is delivered.
    ///
    /// Listener callbacks may query the pipeline. Events a callback captures
    /// are queued for the next tick, and a listener installed from a callback
    /// takes over once the drain finishes.
    pub fn process_events(&self) {
        let guard = self.state.lock();

        let (mut key_queue, mut touch_queue, mut listener) = {
            let mut state = guard.borrow_mut();
            state.just_touched = false;
            state.keys.clear_just_pressed();
            state.pointers.just_pressed_buttons.clear();
            (
                mem::take(&mut state.key_queue),
                mem::take(&mut state.touch_queue),
                state.listener.take(),
            )
        };
        let touch_count = touch_queue.len();

        for event in key_queue.drain(..) {
            {
                let mut state = guard.borrow_mut();
                if event.kind == KeyEventKind::KeyDown {
                    state.keys.mark_just_pressed(event.key);
                }
                if listener.is_some() {
                    state.current_event_time = event.timestamp;
                }
            }
            if let Some(listener) = listener.as_deref_mut() {
                match event.kind {
                    KeyEventKind::KeyDown => listener.key_down(event.key),
                    KeyEventKind::KeyUp => listener.key_up(event.key),
                    KeyEventKind::KeyTyped => listener.key_typed(event.key_char),
                }
            }
            guard.borrow_mut().key_pool.free(event);
        }

        for event in touch_queue.drain(..) {
            {
                let mut state = guard.borrow_mut();
                if event.kind == TouchEventKind::Down {
                    state.just_touched = true;
                    if event.pointer.is_primary() {
                        state.pointers.just_pressed_buttons.insert(event.button);
                    }
                }
                if listener.is_some() {
                    state.current_event_time = event.timestamp;
                }
            }
            if let Some(listener) = listener.as_deref_mut() {
                match event.kind {
                    TouchEventKind::Down => {
                        listener.touch_down(event.x, event.y, event.pointer, event.button)
                    }
                    TouchEventKind::Up => {
                        listener.touch_up(event.x, event.y, event.pointer, event.button)
                    }
                    TouchEventKind::Dragged => {
                        listener.touch_dragged(event.x, event.y, event.pointer)
                    }
                    TouchEventKind::Moved => listener.mouse_moved(event.x, event.y),
                    TouchEventKind::Scrolled => listener.scrolled(event.scroll_amount, 0),
                }
            }
            guard.borrow_mut().touch_pool.free(event);
        }

        let mut state = guard.borrow_mut();
        if touch_count == 0 {
            state.pointers.reset_deltas();
        }
        if state.listener.is_none() {
            state.listener = listener;
        }

        // Hand the drained buffers back so their capacity is reused, unless a
        // callback already queued events for the next tick.
        if state.key_queue.is_empty() {
            state.key_queue = key_queue;
        }
        if state.touch_queue.is_empty() {
            state.touch_queue = touch_queue;
        }
    }
}
