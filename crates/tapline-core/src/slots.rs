//! Pointer slot allocation for tracked contacts.

use crate::event::{PointerSlot, MAX_POINTERS};

/// Hands out pointer slots `1..MAX_POINTERS` to concurrent contacts.
///
/// Slots are scanned in ascending order so the lowest free index is always
/// reused first. Slot 0 is the primary pointer and is never tracked here; it
/// is only returned when every dynamic slot is taken.
#[derive(Clone, Debug, Default)]
pub struct SlotAllocator {
    used: [bool; MAX_POINTERS],
}

impl SlotAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claims the lowest free slot, or [`PointerSlot::PRIMARY`] when exhausted.
    pub fn allocate(&mut self) -> PointerSlot {
        for index in 1..MAX_POINTERS {
            if !self.used[index] {
                self.used[index] = true;
                return PointerSlot(index as u8);
            }
        }
        PointerSlot::PRIMARY
    }

    /// Releases a slot. Freeing the primary slot does nothing.
    pub fn free(&mut self, slot: PointerSlot) {
        if slot.is_primary() {
            return;
        }
        if let Some(used) = self.used.get_mut(slot.index()) {
            *used = false;
        }
    }

    pub fn is_used(&self, slot: PointerSlot) -> bool {
        !slot.is_primary() && self.used.get(slot.index()).copied().unwrap_or(false)
    }

    /// Number of dynamic slots currently claimed.
    pub fn in_use(&self) -> usize {
        self.used.iter().filter(|used| **used).count()
    }

    pub fn is_empty(&self) -> bool {
        self.in_use() == 0
    }

    pub fn clear(&mut self) {
        self.used = [false; MAX_POINTERS];
    }
}
