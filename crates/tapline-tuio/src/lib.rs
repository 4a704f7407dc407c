//! TUIO 1.1 tracking client for tapline.
//!
//! Listens for `/tuio/2Dcur` frames over UDP, turns them into cursor
//! add/update/remove callbacks and, through the [`TuioListener`] impl on
//! [`InputPipeline`](tapline_core::InputPipeline), into tracked contacts.
//!
//! ```no_run
//! use std::sync::Arc;
//! use tapline_core::InputPipeline;
//! use tapline_tuio::{TuioClient, TuioSettings};
//!
//! let pipeline = Arc::new(InputPipeline::default());
//! let mut client = TuioClient::new(TuioSettings::default());
//! client.connect(pipeline.clone())?;
//! # Ok::<(), tapline_tuio::TuioError>(())
//! ```

mod client;
mod error;
mod listener;

pub mod cursor;
pub mod osc;

pub use client::{TuioClient, TuioSettings, DEFAULT_PORT};
pub use cursor::{CursorChange, CursorPosition, CursorTracker};
pub use error::TuioError;
pub use listener::TuioListener;
pub use osc::{OscArg, OscError, OscMessage, OscPacket};
