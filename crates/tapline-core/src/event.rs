//! Canonical event records and pointer identities.

use crate::keys::Key;
use crate::pool::Recycle;

/// Number of pointer slots, including the primary pointer at slot 0.
pub const MAX_POINTERS: usize = 11;

/// Identifier the tracking protocol assigns to one physical contact.
pub type SessionId = u64;

/// Integer identity of a concurrent pointer.
///
/// Slot 0 belongs to the native mouse; slots `1..MAX_POINTERS` are handed out
/// to tracked contacts by the [`SlotAllocator`](crate::SlotAllocator).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct PointerSlot(pub u8);

impl PointerSlot {
    /// The primary pointer (native mouse).
    pub const PRIMARY: PointerSlot = PointerSlot(0);

    pub const fn index(self) -> usize {
        self.0 as usize
    }

    pub const fn is_primary(self) -> bool {
        self.0 == 0
    }

    /// Returns the slot for `index` if it is below [`MAX_POINTERS`].
    pub fn from_index(index: usize) -> Option<Self> {
        (index < MAX_POINTERS).then_some(PointerSlot(index as u8))
    }
}

#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Button {
    #[default]
    Left = 0,
    Right = 1,
    Middle = 2,
}

/// Set of pressed [`Button`]s.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Buttons(u8);

impl Buttons {
    pub const NONE: Self = Self(0);

    pub fn with(mut self, button: Button) -> Self {
        self.insert(button);
        self
    }

    pub fn insert(&mut self, button: Button) {
        self.0 |= 1 << (button as u8);
    }

    pub fn remove(&mut self, button: Button) {
        self.0 &= !(1 << (button as u8));
    }

    pub fn contains(&self, button: Button) -> bool {
        (self.0 & (1 << (button as u8))) != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn clear(&mut self) {
        self.0 = 0;
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum KeyEventKind {
    #[default]
    KeyDown,
    KeyUp,
    KeyTyped,
}

/// A pooled keyboard record.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct KeyEvent {
    /// Capture time in nanoseconds, see [`Clock`](crate::Clock).
    pub timestamp: u64,
    pub kind: KeyEventKind,
    /// Set for `KeyDown`/`KeyUp`, `Key::UNKNOWN` for `KeyTyped`.
    pub key: Key,
    /// Set for `KeyTyped`, `'\0'` otherwise.
    pub key_char: char,
}

impl Recycle for KeyEvent {
    fn fresh() -> Self {
        Self::default()
    }

    fn reset(&mut self) {
        *self = Self::default();
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TouchEventKind {
    #[default]
    Down,
    Up,
    Dragged,
    Moved,
    Scrolled,
}

/// A pooled pointer/touch record. Coordinates are surface-local pixels.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct TouchEvent {
    pub timestamp: u64,
    pub kind: TouchEventKind,
    pub x: i32,
    pub y: i32,
    pub pointer: PointerSlot,
    pub button: Button,
    /// Wheel rotation in notches, positive towards the user.
    pub scroll_amount: i32,
}

impl Recycle for TouchEvent {
    fn fresh() -> Self {
        Self::default()
    }

    fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buttons_set_operations() {
        let mut buttons = Buttons::NONE.with(Button::Left).with(Button::Middle);
        assert!(buttons.contains(Button::Left));
        assert!(buttons.contains(Button::Middle));
        assert!(!buttons.contains(Button::Right));

        buttons.remove(Button::Left);
        assert!(!buttons.contains(Button::Left));
        assert!(!buttons.is_empty());

        buttons.clear();
        assert!(buttons.is_empty());
    }

    #[test]
    fn slot_from_index_respects_bound() {
        assert_eq!(PointerSlot::from_index(0), Some(PointerSlot::PRIMARY));
        assert_eq!(PointerSlot::from_index(10), Some(PointerSlot(10)));
        assert_eq!(PointerSlot::from_index(MAX_POINTERS), None);
    }

    #[test]
    fn reset_clears_every_field() {
        let mut event = TouchEvent {
            timestamp: 42,
            kind: TouchEventKind::Scrolled,
            x: 3,
            y: 4,
            pointer: PointerSlot(5),
            button: Button::Right,
            scroll_amount: -2,
        };
        event.reset();
        assert_eq!(event, TouchEvent::default());
    }
}
