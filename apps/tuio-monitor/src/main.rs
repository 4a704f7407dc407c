//! Listens for TUIO cursors and logs what the pipeline dispatches each tick.
//!
//! `RUST_LOG=debug tuio-monitor --port 3333 --display 1920x1080`

mod settings;

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::thread;

use anyhow::{Context, Result};
use tapline_core::{
    Button, InputListener, InputPipeline, PipelineSettings, PointerSlot, Rect, SurfaceLayout,
};
use tapline_tuio::{TuioClient, TuioSettings};

use settings::MonitorSettings;

#[derive(Default)]
struct LoggingListener {
    dispatched: Arc<AtomicU64>,
}

impl LoggingListener {
    fn count(&self) {
        self.dispatched.fetch_add(1, Ordering::Relaxed);
    }
}

impl InputListener for LoggingListener {
    fn touch_down(&mut self, x: i32, y: i32, pointer: PointerSlot, button: Button) {
        self.count();
        log::info!("down    #{} at ({x}, {y}) {button:?}", pointer.0);
    }

    fn touch_up(&mut self, x: i32, y: i32, pointer: PointerSlot, button: Button) {
        self.count();
        log::info!("up      #{} at ({x}, {y}) {button:?}", pointer.0);
    }

    fn touch_dragged(&mut self, x: i32, y: i32, pointer: PointerSlot) {
        self.count();
        log::debug!("dragged #{} to ({x}, {y})", pointer.0);
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let settings = MonitorSettings::from_args(std::env::args().skip(1))?;
    log::info!("{settings:?}");

    let layout = SurfaceLayout::new(settings.display, Rect::from_size(settings.display));
    let pipeline = Arc::new(InputPipeline::new(
        PipelineSettings::new().with_layout(layout),
    ));

    let captured = Arc::new(AtomicU64::new(0));
    pipeline.set_frame_waker({
        let captured = Arc::clone(&captured);
        move || {
            captured.fetch_add(1, Ordering::Relaxed);
        }
    });

    let listener = LoggingListener::default();
    let dispatched = Arc::clone(&listener.dispatched);
    pipeline.set_listener(listener);

    let mut client = TuioClient::new(TuioSettings::new().with_port(settings.port));
    client
        .connect(pipeline.clone())
        .with_context(|| format!("could not listen for TUIO on port {}", settings.port))?;
    if let Some(addr) = client.local_addr() {
        log::info!("listening for TUIO cursors on {addr}");
    }

    let interval = settings.tick_interval();
    let mut tick: u64 = 0;
    while settings.max_ticks.map_or(true, |max| tick < max) {
        pipeline.process_events();
        if pipeline.just_touched() {
            log::debug!("tick {tick}: new contact, {} active", active_contacts(&pipeline));
        }
        tick += 1;
        thread::sleep(interval);
    }

    client.disconnect();
    pipeline.process_events();
    let stats = pipeline.pool_stats();
    log::info!(
        "{} events captured, {} dispatched over {tick} ticks; {} touch records allocated",
        captured.load(Ordering::Relaxed),
        dispatched.load(Ordering::Relaxed),
        stats.touch_created,
    );
    Ok(())
}

fn active_contacts(pipeline: &InputPipeline) -> usize {
    (1..pipeline.max_pointers())
        .filter_map(PointerSlot::from_index)
        .filter(|slot| pipeline.is_touched_at(*slot))
        .count()
}
