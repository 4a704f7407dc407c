use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tapline_core::{Button, InputListener, InputPipeline, Key, PipelineSettings, PointerSlot};
use tapline_core::{Rect, Size, SurfaceLayout};

const EVENTS_PER_TICK_SAMPLES: &[usize] = &[8, 64, 512];

#[derive(Default)]
struct Sink {
    checksum: i64,
}

impl InputListener for Sink {
    fn key_down(&mut self, key: Key) {
        self.checksum += i64::from(key.code());
    }

    fn touch_down(&mut self, x: i32, y: i32, pointer: PointerSlot, _button: Button) {
        self.checksum += i64::from(x + y) + pointer.index() as i64;
    }

    fn touch_dragged(&mut self, x: i32, y: i32, _pointer: PointerSlot) {
        self.checksum += i64::from(x ^ y);
    }

    fn mouse_moved(&mut self, x: i32, y: i32) {
        self.checksum += i64::from(x - y);
    }
}

fn layout() -> SurfaceLayout {
    SurfaceLayout::new(Size::new(1920, 1080), Rect::new(0, 0, 1920, 1080))
}

fn bench_native_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("native_tick");
    for &events in EVENTS_PER_TICK_SAMPLES {
        group.bench_with_input(BenchmarkId::new("events", events), &events, |b, &events| {
            let pipeline = InputPipeline::new(PipelineSettings::new().with_layout(layout()));
            pipeline.set_listener(Sink::default());
            b.iter(|| {
                for i in 0..events as i32 {
                    pipeline.mouse_moved(i, i / 2);
                    if i % 16 == 0 {
                        pipeline.key_pressed(Key::A);
                        pipeline.key_released(Key::A);
                    }
                }
                pipeline.process_events();
                black_box(pipeline.delta_x());
            });
        });
    }
    group.finish();
}

fn bench_tracking_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("tracking_tick");
    for &events in EVENTS_PER_TICK_SAMPLES {
        group.bench_with_input(BenchmarkId::new("events", events), &events, |b, &events| {
            let pipeline = InputPipeline::new(PipelineSettings::new().with_layout(layout()));
            pipeline.set_listener(Sink::default());
            b.iter(|| {
                let contacts = (events / 4).max(1) as u64;
                for session in 0..contacts {
                    let n = session as f32 / contacts as f32;
                    pipeline.contact_added(session, n, 0.5);
                    pipeline.contact_updated(session, n, 0.6);
                    pipeline.contact_removed(session, n, 0.7);
                }
                pipeline.process_events();
                black_box(pipeline.just_touched());
            });
        });
    }
    group.finish();
}

criterion_group!(dispatch, bench_native_tick, bench_tracking_tick);
criterion_main!(dispatch);
