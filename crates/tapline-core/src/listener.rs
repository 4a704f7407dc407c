use crate::event::{Button, PointerSlot};
use crate::keys::Key;

/// Receives dispatched input once per tick.
///
/// Every method defaults to doing nothing, so listeners only implement the
/// callbacks they care about. Callbacks run on the thread that calls
/// [`InputPipeline::process_events`](crate::InputPipeline::process_events)
/// while the pipeline lock is held, so they should be short. The lock is
/// reentrant: a callback may query the pipeline, and anything it captures is
/// delivered on the next tick.
#[allow(unused_variables)]
pub trait InputListener: Send {
    fn key_down(&mut self, key: Key) {}

    fn key_up(&mut self, key: Key) {}

    fn key_typed(&mut self, character: char) {}

    fn touch_down(&mut self, x: i32, y: i32, pointer: PointerSlot, button: Button) {}

    fn touch_up(&mut self, x: i32, y: i32, pointer: PointerSlot, button: Button) {}

    fn touch_dragged(&mut self, x: i32, y: i32, pointer: PointerSlot) {}

    /// Pointer moved with no button held. Only the primary pointer moves.
    fn mouse_moved(&mut self, x: i32, y: i32) {}

    /// Wheel input; vertical wheels report `(amount, 0)`.
    fn scrolled(&mut self, amount_x: i32, amount_y: i32) {}
}
