//! Tracking session to pointer slot bindings.
//!
//! A binding is created when a contact appears and removed when it lifts.
//! Messages from the tracking protocol can arrive late or twice, so lookups
//! for unknown sessions simply return `None` and callers drop the message.

use rustc_hash::FxHashMap;

use crate::event::{PointerSlot, SessionId};

#[derive(Clone, Debug, Default)]
pub struct SessionMap {
    slots: FxHashMap<SessionId, PointerSlot>,
}

impl SessionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds a session to a slot, replacing any previous binding.
    pub fn bind(&mut self, session: SessionId, slot: PointerSlot) {
        self.slots.insert(session, slot);
    }

    pub fn resolve(&self, session: SessionId) -> Option<PointerSlot> {
        self.slots.get(&session).copied()
    }

    /// Removes the binding and returns the slot to reclaim.
    pub fn unbind(&mut self, session: SessionId) -> Option<PointerSlot> {
        self.slots.remove(&session)
    }

    pub fn contains(&self, session: SessionId) -> bool {
        self.slots.contains_key(&session)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn clear(&mut self) {
        self.slots.clear();
    }
}
