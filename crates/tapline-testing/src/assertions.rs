//! Assertion helpers for dispatched input.

use tapline_core::PointerSlot;

use crate::recorder::Recorded;

/// Assert that the recorded touch callbacks used exactly `expected` slots,
/// in order.
pub fn assert_pointer_sequence(events: &[Recorded], expected: &[PointerSlot], msg: &str) {
    let actual: Vec<PointerSlot> = events.iter().filter_map(Recorded::pointer).collect();
    assert_eq!(
        actual, expected,
        "{}: pointer sequence {:?} != {:?}",
        msg, actual, expected
    );
}

/// Assert that `earlier` appears before `later` in the recorded stream.
pub fn assert_ordered(events: &[Recorded], earlier: &Recorded, later: &Recorded, msg: &str) {
    let first = events.iter().position(|event| event == earlier);
    let second = events.iter().position(|event| event == later);
    match (first, second) {
        (Some(a), Some(b)) => assert!(
            a < b,
            "{}: {:?} at {} is not before {:?} at {}",
            msg,
            earlier,
            a,
            later,
            b
        ),
        _ => panic!(
            "{}: {:?} or {:?} missing from {:?}",
            msg, earlier, later, events
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordered_events_pass() {
        let events = vec![Recorded::KeyTyped('a'), Recorded::KeyTyped('b')];
        assert_ordered(
            &events,
            &Recorded::KeyTyped('a'),
            &Recorded::KeyTyped('b'),
            "typed",
        );
    }

    #[test]
    #[should_panic]
    fn missing_event_fails() {
        assert_ordered(&[], &Recorded::KeyTyped('a'), &Recorded::KeyTyped('b'), "empty");
    }
}
