//! Testing utilities and harness for tapline

pub mod assertions;
pub mod clock;
pub mod recorder;

pub use clock::ManualClock;
pub use recorder::{Recorded, RecordingListener};

pub mod prelude {
    pub use crate::assertions::*;
    pub use crate::clock::ManualClock;
    pub use crate::recorder::{Recorded, RecordingListener};
}
