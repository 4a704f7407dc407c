//! Derived pointer and keyboard state maintained by capture and dispatch.

use rustc_hash::FxHashSet;
use tapline_geometry::Point;

use crate::event::{Buttons, PointerSlot, MAX_POINTERS};
use crate::keys::Key;

#[derive(Clone, Debug, Default)]
pub(crate) struct PointerTracker {
    positions: [Point; MAX_POINTERS],
    deltas: [Point; MAX_POINTERS],
    /// Most recently moved pointer, exposed through the slot-less accessors.
    last_position: Point,
    last_delta: Point,
    pub(crate) touch_down: bool,
    pub(crate) buttons: Buttons,
    pub(crate) just_pressed_buttons: Buttons,
}

impl PointerTracker {
    /// Moves `slot` to `position`; deltas are position based for both the
    /// slot and the global accessors.
    pub(crate) fn record(&mut self, slot: PointerSlot, position: Point) {
        let index = slot.index();
        self.deltas[index] = position - self.positions[index];
        self.positions[index] = position;
        self.last_delta = position - self.last_position;
        self.last_position = position;
    }

    /// Updates a slot's position without producing motion.
    pub(crate) fn place(&mut self, slot: PointerSlot, position: Point) {
        self.positions[slot.index()] = position;
    }

    pub(crate) fn reset_deltas(&mut self) {
        self.deltas = [Point::ZERO; MAX_POINTERS];
        self.last_delta = Point::ZERO;
    }

    /// Last position of `slot`; out-of-range slots read as the origin.
    pub(crate) fn position(&self, slot: PointerSlot) -> Point {
        self.positions.get(slot.index()).copied().unwrap_or_default()
    }

    pub(crate) fn delta(&self, slot: PointerSlot) -> Point {
        self.deltas.get(slot.index()).copied().unwrap_or_default()
    }

    pub(crate) fn last_position(&self) -> Point {
        self.last_position
    }

    pub(crate) fn last_delta(&self) -> Point {
        self.last_delta
    }
}

#[derive(Clone, Debug, Default)]
pub(crate) struct KeyTracker {
    pressed: FxHashSet<Key>,
    just_pressed: FxHashSet<Key>,
}

impl KeyTracker {
    pub(crate) fn press(&mut self, key: Key) {
        self.pressed.insert(key);
    }

    pub(crate) fn release(&mut self, key: Key) {
        self.pressed.remove(&key);
    }

    pub(crate) fn mark_just_pressed(&mut self, key: Key) {
        self.just_pressed.insert(key);
    }

    pub(crate) fn clear_just_pressed(&mut self) {
        self.just_pressed.clear();
    }

    pub(crate) fn is_pressed(&self, key: Key) -> bool {
        if key == Key::ANY_KEY {
            !self.pressed.is_empty()
        } else {
            self.pressed.contains(&key)
        }
    }

    pub(crate) fn is_just_pressed(&self, key: Key) -> bool {
        if key == Key::ANY_KEY {
            !self.just_pressed.is_empty()
        } else {
            self.just_pressed.contains(&key)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_tracks_slot_and_global_delta() {
        let mut pointers = PointerTracker::default();
        pointers.record(PointerSlot::PRIMARY, Point::new(10, 10));
        pointers.record(PointerSlot::PRIMARY, Point::new(15, 7));

        assert_eq!(pointers.position(PointerSlot::PRIMARY), Point::new(15, 7));
        assert_eq!(pointers.delta(PointerSlot::PRIMARY), Point::new(5, -3));
        assert_eq!(pointers.last_delta(), Point::new(5, -3));
    }

    #[test]
    fn global_delta_follows_latest_pointer() {
        let mut pointers = PointerTracker::default();
        pointers.record(PointerSlot::PRIMARY, Point::new(100, 100));
        pointers.record(PointerSlot(2), Point::new(130, 90));

        assert_eq!(pointers.delta(PointerSlot(2)), Point::new(130, 90));
        assert_eq!(pointers.last_position(), Point::new(130, 90));
        assert_eq!(pointers.last_delta(), Point::new(30, -10));
    }

    #[test]
    fn reset_keeps_positions() {
        let mut pointers = PointerTracker::default();
        pointers.record(PointerSlot(3), Point::new(4, 4));
        pointers.reset_deltas();

        assert_eq!(pointers.delta(PointerSlot(3)), Point::ZERO);
        assert_eq!(pointers.position(PointerSlot(3)), Point::new(4, 4));
    }

    #[test]
    fn out_of_range_slot_reads_zero() {
        let mut pointers = PointerTracker::default();
        pointers.record(PointerSlot(10), Point::new(8, 9));
        assert_eq!(pointers.position(PointerSlot(11)), Point::ZERO);
        assert_eq!(pointers.delta(PointerSlot(200)), Point::ZERO);
    }

    #[test]
    fn any_key_matches_when_something_is_held() {
        let mut keys = KeyTracker::default();
        assert!(!keys.is_pressed(Key::ANY_KEY));

        keys.press(Key::SPACE);
        assert!(keys.is_pressed(Key::ANY_KEY));
        assert!(keys.is_pressed(Key::SPACE));

        keys.release(Key::SPACE);
        assert!(!keys.is_pressed(Key::ANY_KEY));
    }
}
