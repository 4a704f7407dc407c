//! A listener that records every callback for later inspection.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tapline_core::{Button, InputListener, Key, PointerSlot};

/// One listener callback, with its arguments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Recorded {
    KeyDown(Key),
    KeyUp(Key),
    KeyTyped(char),
    TouchDown {
        x: i32,
        y: i32,
        pointer: PointerSlot,
        button: Button,
    },
    TouchUp {
        x: i32,
        y: i32,
        pointer: PointerSlot,
        button: Button,
    },
    TouchDragged {
        x: i32,
        y: i32,
        pointer: PointerSlot,
    },
    MouseMoved {
        x: i32,
        y: i32,
    },
    Scrolled {
        amount_x: i32,
        amount_y: i32,
    },
}

impl Recorded {
    /// Pointer slot carried by touch callbacks.
    pub fn pointer(&self) -> Option<PointerSlot> {
        match self {
            Recorded::TouchDown { pointer, .. }
            | Recorded::TouchUp { pointer, .. }
            | Recorded::TouchDragged { pointer, .. } => Some(*pointer),
            _ => None,
        }
    }
}

/// Cloneable recording listener.
///
/// Install one clone in the pipeline and keep another in the test to read
/// what was dispatched.
#[derive(Clone, Debug, Default)]
pub struct RecordingListener {
    events: Arc<Mutex<Vec<Recorded>>>,
}

impl RecordingListener {
    pub fn new() -> Self {
        Self::default()
    }

    fn events_mut(&self) -> MutexGuard<'_, Vec<Recorded>> {
        self.events.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn push(&self, event: Recorded) {
        self.events_mut().push(event);
    }

    pub fn events(&self) -> Vec<Recorded> {
        self.events_mut().clone()
    }

    /// Returns and clears everything recorded so far.
    pub fn take(&self) -> Vec<Recorded> {
        std::mem::take(&mut *self.events_mut())
    }

    pub fn len(&self) -> usize {
        self.events_mut().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events_mut().is_empty()
    }
}

impl InputListener for RecordingListener {
    fn key_down(&mut self, key: Key) {
        self.push(Recorded::KeyDown(key));
    }

    fn key_up(&mut self, key: Key) {
        self.push(Recorded::KeyUp(key));
    }

    fn key_typed(&mut self, character: char) {
        self.push(Recorded::KeyTyped(character));
    }

    fn touch_down(&mut self, x: i32, y: i32, pointer: PointerSlot, button: Button) {
        self.push(Recorded::TouchDown {
            x,
            y,
            pointer,
            button,
        });
    }

    fn touch_up(&mut self, x: i32, y: i32, pointer: PointerSlot, button: Button) {
        self.push(Recorded::TouchUp {
            x,
            y,
            pointer,
            button,
        });
    }

    fn touch_dragged(&mut self, x: i32, y: i32, pointer: PointerSlot) {
        self.push(Recorded::TouchDragged { x, y, pointer });
    }

    fn mouse_moved(&mut self, x: i32, y: i32) {
        self.push(Recorded::MouseMoved { x, y });
    }

    fn scrolled(&mut self, amount_x: i32, amount_y: i32) {
        self.push(Recorded::Scrolled { amount_x, amount_y });
    }
}
