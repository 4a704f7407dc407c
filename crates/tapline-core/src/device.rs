//! Device capabilities a desktop host does not have.
//!
//! Motion sensors always read zero, vibration does nothing and only a
//! hardware keyboard is reported.

use crate::error::InputError;
use crate::keys::Key;
use crate::pipeline::InputPipeline;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    Landscape,
    Portrait,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Peripheral {
    HardwareKeyboard,
    OnscreenKeyboard,
    MultitouchScreen,
    Accelerometer,
    Gyroscope,
    Compass,
    Vibrator,
}

impl InputPipeline {
    pub fn accelerometer_x(&self) -> f32 {
        0.0
    }

    pub fn accelerometer_y(&self) -> f32 {
        0.0
    }

    pub fn accelerometer_z(&self) -> f32 {
        0.0
    }

    pub fn gyroscope_x(&self) -> f32 {
        0.0
    }

    pub fn gyroscope_y(&self) -> f32 {
        0.0
    }

    pub fn gyroscope_z(&self) -> f32 {
        0.0
    }

    pub fn azimuth(&self) -> f32 {
        0.0
    }

    pub fn pitch(&self) -> f32 {
        0.0
    }

    pub fn roll(&self) -> f32 {
        0.0
    }

    pub fn rotation(&self) -> i32 {
        0
    }

    /// Leaves `matrix` untouched.
    pub fn rotation_matrix(&self, _matrix: &mut [f32; 16]) {}

    pub fn native_orientation(&self) -> Orientation {
        Orientation::Landscape
    }

    pub fn is_peripheral_available(&self, peripheral: Peripheral) -> bool {
        peripheral == Peripheral::HardwareKeyboard
    }

    pub fn vibrate(&self, _milliseconds: u32) {}

    pub fn cancel_vibrate(&self) {}

    pub fn is_catch_back_key(&self) -> bool {
        false
    }

    pub fn is_catch_menu_key(&self) -> bool {
        false
    }

    pub fn is_catch_key(&self, _key: Key) -> bool {
        false
    }

    /// Desktop keys cannot be intercepted from the host.
    pub fn set_catch_key(&self, _key: Key, _catch: bool) -> Result<(), InputError> {
        Err(InputError::Unsupported {
            operation: "set_catch_key",
        })
    }
}
