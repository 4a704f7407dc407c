//! Input normalization and dispatch pipeline for tapline.
//!
//! Producers on any thread (the native windowing callbacks, the TUIO receive
//! thread) push pointer, keyboard and tracked-contact input into an
//! [`InputPipeline`]. The host drains it once per tick with
//! [`InputPipeline::process_events`], which replays everything to the
//! registered [`InputListener`] in arrival order.
//!
//! ```text
//! winit / TUIO thread ──► capture ──► pool.obtain ──► queues ─┐
//!                                                             │ (one lock)
//! render thread ──► process_events ──► listener ──► pool.free ◄┘
//! ```

mod capture;
mod clock;
mod device;
mod dispatch;
mod error;
mod event;
mod keys;
mod listener;
mod pipeline;
mod settings;
mod state;

pub mod coords;
pub mod pool;
pub mod session;
pub mod slots;

pub use clock::{Clock, MonotonicClock};
pub use coords::{OverlayWindow, SurfaceLayout};
pub use device::{Orientation, Peripheral};
pub use error::InputError;
pub use event::{
    Button, Buttons, KeyEvent, KeyEventKind, PointerSlot, SessionId, TouchEvent, TouchEventKind,
    MAX_POINTERS,
};
pub use keys::Key;
pub use listener::InputListener;
pub use pipeline::{InputPipeline, PoolStats};
pub use pool::{Pool, Recycle};
pub use session::SessionMap;
pub use settings::{PipelineSettings, PoolSettings};
pub use slots::SlotAllocator;

// Re-export geometry so hosts don't need a direct dependency.
pub use tapline_geometry::{Point, Rect, Size};

pub mod prelude {
    pub use crate::event::{Button, PointerSlot, SessionId};
    pub use crate::keys::Key;
    pub use crate::listener::InputListener;
    pub use crate::pipeline::InputPipeline;
    pub use crate::settings::PipelineSettings;
    pub use crate::coords::SurfaceLayout;
    pub use tapline_geometry::{Point, Rect, Size};
}
