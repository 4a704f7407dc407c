//! Capture → dispatch scenarios driven through the public pipeline API.

use std::sync::Arc;

use tapline_core::{
    Button, InputPipeline, Key, PipelineSettings, PointerSlot, PoolSettings, Rect, Size,
    SurfaceLayout, MAX_POINTERS,
};
use tapline_testing::prelude::*;

fn pipeline_with(layout: SurfaceLayout) -> (InputPipeline, RecordingListener) {
    let pipeline = InputPipeline::with_clock(
        PipelineSettings::new().with_layout(layout),
        Arc::new(ManualClock::new(1_000).with_step(1)),
    );
    let recorder = RecordingListener::new();
    pipeline.set_listener(recorder.clone());
    (pipeline, recorder)
}

fn full_screen() -> SurfaceLayout {
    SurfaceLayout::new(Size::new(1000, 1000), Rect::new(0, 0, 1000, 1000))
}

#[test]
fn centre_contact_lands_on_first_tracking_slot() {
    let (pipeline, recorder) = pipeline_with(full_screen());

    pipeline.contact_added(1, 0.5, 0.5);
    pipeline.process_events();

    assert_eq!(
        recorder.events(),
        vec![Recorded::TouchDown {
            x: 500,
            y: 500,
            pointer: PointerSlot(1),
            button: Button::Left,
        }]
    );
    assert!(pipeline.just_touched());
}

#[test]
fn update_for_unbound_session_is_a_no_op() {
    let (pipeline, recorder) = pipeline_with(full_screen());

    pipeline.contact_updated(404, 0.2, 0.2);
    pipeline.process_events();

    assert!(recorder.is_empty());
    assert_eq!(pipeline.x_of(PointerSlot(1)), 0);
}

#[test]
fn eleven_contacts_fill_slots_then_fall_back_to_primary() {
    let (pipeline, recorder) = pipeline_with(full_screen());

    for session in 0..MAX_POINTERS as u64 {
        pipeline.contact_added(session, 0.1, 0.1);
    }
    pipeline.process_events();

    let expected: Vec<PointerSlot> = (1..MAX_POINTERS as u8)
        .map(PointerSlot)
        .chain(std::iter::once(PointerSlot::PRIMARY))
        .collect();
    assert_pointer_sequence(&recorder.events(), &expected, "contact slots");
}

#[test]
fn press_release_without_drag_keeps_position() {
    let (pipeline, recorder) = pipeline_with(full_screen());

    pipeline.mouse_pressed(120, 80, Button::Left);
    pipeline.mouse_released(120, 80, Button::Left);
    pipeline.process_events();

    assert_eq!(
        recorder.events(),
        vec![
            Recorded::TouchDown {
                x: 120,
                y: 80,
                pointer: PointerSlot::PRIMARY,
                button: Button::Left,
            },
            Recorded::TouchUp {
                x: 120,
                y: 80,
                pointer: PointerSlot::PRIMARY,
                button: Button::Left,
            },
        ]
    );
    assert_eq!(pipeline.delta_x_of(PointerSlot::PRIMARY), 0);
    assert_eq!(pipeline.delta_y_of(PointerSlot::PRIMARY), 0);
    assert!(!pipeline.is_touched());
}

#[test]
fn contact_removed_off_surface_is_clamped() {
    let layout = SurfaceLayout::new(Size::new(1000, 1000), Rect::new(100, 100, 500, 500));
    let (pipeline, recorder) = pipeline_with(layout);

    pipeline.contact_added(7, 0.3, 0.3);
    pipeline.contact_updated(7, 0.9, 0.05);
    pipeline.contact_removed(7, 0.95, 0.95);
    pipeline.process_events();

    assert_eq!(
        recorder.events(),
        vec![
            Recorded::TouchDown {
                x: 200,
                y: 200,
                pointer: PointerSlot(1),
                button: Button::Left,
            },
            Recorded::TouchDragged {
                x: 499,
                y: 0,
                pointer: PointerSlot(1),
            },
            Recorded::TouchUp {
                x: 499,
                y: 499,
                pointer: PointerSlot(1),
                button: Button::Left,
            },
        ]
    );
    assert!(!pipeline.is_touched());
}

#[test]
fn freed_slot_is_reused_by_next_contact() {
    let (pipeline, recorder) = pipeline_with(full_screen());

    pipeline.contact_added(1, 0.1, 0.1);
    pipeline.contact_added(2, 0.2, 0.2);
    pipeline.contact_removed(1, 0.1, 0.1);
    assert!(pipeline.is_touched());
    pipeline.contact_added(3, 0.3, 0.3);
    pipeline.process_events();

    assert_pointer_sequence(
        &recorder.events(),
        &[PointerSlot(1), PointerSlot(2), PointerSlot(1), PointerSlot(1)],
        "slot reuse",
    );
}

#[test]
fn no_listener_still_drains_and_flags_touch() {
    let pipeline = InputPipeline::with_clock(
        PipelineSettings::new().with_layout(full_screen()),
        Arc::new(ManualClock::new(0).with_step(1)),
    );

    pipeline.contact_added(1, 0.5, 0.5);
    pipeline.key_pressed(Key::Q);
    pipeline.process_events();

    assert_eq!(pipeline.pending_events(), (0, 0));
    assert!(pipeline.just_touched());
    assert_eq!(pipeline.current_event_time(), 0);
}

#[test]
fn replacing_listener_redirects_following_ticks() {
    let (pipeline, first) = pipeline_with(full_screen());
    pipeline.key_typed('a');
    pipeline.process_events();

    let second = RecordingListener::new();
    assert!(pipeline.set_listener(second.clone()).is_some());
    pipeline.key_typed('b');
    pipeline.process_events();

    assert_eq!(first.events(), vec![Recorded::KeyTyped('a')]);
    assert_eq!(second.events(), vec![Recorded::KeyTyped('b')]);
}

#[test]
fn event_time_follows_capture_clock() {
    let clock = Arc::new(ManualClock::new(5_000));
    let pipeline = InputPipeline::with_clock(PipelineSettings::new(), clock.clone());
    pipeline.set_listener(RecordingListener::new());

    pipeline.key_pressed(Key::W);
    clock.advance(250);
    pipeline.mouse_moved(4, 4);
    pipeline.process_events();

    // Touches replay after keys, so the last delivered stamp is the move.
    assert_eq!(pipeline.current_event_time(), 5_250);
}

#[test]
fn steady_traffic_does_not_grow_pools() {
    let settings = PipelineSettings::new()
        .with_touch_pool(PoolSettings {
            initial_capacity: 4,
            max_free: 1000,
        })
        .with_key_pool(PoolSettings {
            initial_capacity: 0,
            max_free: 2,
        });
    let pipeline = InputPipeline::new(settings);

    for tick in 0..200 {
        pipeline.mouse_moved(tick, tick);
        pipeline.mouse_moved(tick + 1, tick);
        pipeline.key_typed('x');
        pipeline.process_events();
    }

    let stats = pipeline.pool_stats();
    assert_eq!(stats.touch_created, 4);
    assert_eq!(stats.touch_free, 4);
    assert_eq!(stats.key_created, 1);
    assert!(stats.key_free <= 2);
}

#[test]
fn global_position_follows_latest_pointer() {
    let (pipeline, _recorder) = pipeline_with(full_screen());

    pipeline.mouse_moved(10, 10);
    pipeline.contact_added(1, 0.4, 0.4);
    pipeline.process_events();

    assert_eq!((pipeline.x(), pipeline.y()), (400, 400));
    assert_eq!(pipeline.delta_x(), 390);
    assert_eq!(pipeline.x_of(PointerSlot::PRIMARY), 10);
}

#[test]
fn occluding_overlay_blocks_new_contacts_only() {
    use tapline_core::OverlayWindow;

    let (pipeline, recorder) = pipeline_with(full_screen());
    pipeline.contact_added(1, 0.5, 0.5);

    pipeline.set_surface_layout(full_screen().with_overlays(vec![OverlayWindow {
        showing: true,
        modal: true,
        ..OverlayWindow::default()
    }]));
    pipeline.contact_added(2, 0.6, 0.6);
    pipeline.contact_updated(1, 0.55, 0.5);
    pipeline.process_events();

    assert_pointer_sequence(
        &recorder.events(),
        &[PointerSlot(1), PointerSlot(1)],
        "overlay filtering",
    );
}
