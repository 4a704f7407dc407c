//! Static translation from winit identifiers to tapline codes.

use tapline_core::{Button, Key};
use winit::event::MouseButton;
use winit::keyboard::{KeyCode, PhysicalKey};

/// Maps a physical key to its canonical code; unknown keys map to
/// [`Key::UNKNOWN`].
pub fn translate_physical_key(key: PhysicalKey) -> Key {
    match key {
        PhysicalKey::Code(code) => translate_key_code(code),
        PhysicalKey::Unidentified(_) => Key::UNKNOWN,
    }
}

pub fn translate_key_code(code: KeyCode) -> Key {
    match code {
        KeyCode::Digit0 | KeyCode::Numpad0 => Key::NUM_0,
        KeyCode::Digit1 | KeyCode::Numpad1 => Key::NUM_1,
        KeyCode::Digit2 | KeyCode::Numpad2 => Key::NUM_2,
        KeyCode::Digit3 | KeyCode::Numpad3 => Key::NUM_3,
        KeyCode::Digit4 | KeyCode::Numpad4 => Key::NUM_4,
        KeyCode::Digit5 | KeyCode::Numpad5 => Key::NUM_5,
        KeyCode::Digit6 | KeyCode::Numpad6 => Key::NUM_6,
        KeyCode::Digit7 | KeyCode::Numpad7 => Key::NUM_7,
        KeyCode::Digit8 | KeyCode::Numpad8 => Key::NUM_8,
        KeyCode::Digit9 | KeyCode::Numpad9 => Key::NUM_9,

        KeyCode::KeyA => Key::A,
        KeyCode::KeyB => Key::B,
        KeyCode::KeyC => Key::C,
        KeyCode::KeyD => Key::D,
        KeyCode::KeyE => Key::E,
        KeyCode::KeyF => Key::F,
        KeyCode::KeyG => Key::G,
        KeyCode::KeyH => Key::H,
        KeyCode::KeyI => Key::I,
        KeyCode::KeyJ => Key::J,
        KeyCode::KeyK => Key::K,
        KeyCode::KeyL => Key::L,
        KeyCode::KeyM => Key::M,
        KeyCode::KeyN => Key::N,
        KeyCode::KeyO => Key::O,
        KeyCode::KeyP => Key::P,
        KeyCode::KeyQ => Key::Q,
        KeyCode::KeyR => Key::R,
        KeyCode::KeyS => Key::S,
        KeyCode::KeyT => Key::T,
        KeyCode::KeyU => Key::U,
        KeyCode::KeyV => Key::V,
        KeyCode::KeyW => Key::W,
        KeyCode::KeyX => Key::X,
        KeyCode::KeyY => Key::Y,
        KeyCode::KeyZ => Key::Z,

        KeyCode::ArrowUp => Key::DPAD_UP,
        KeyCode::ArrowDown => Key::DPAD_DOWN,
        KeyCode::ArrowLeft => Key::DPAD_LEFT,
        KeyCode::ArrowRight => Key::DPAD_RIGHT,

        KeyCode::Comma | KeyCode::NumpadComma => Key::COMMA,
        KeyCode::Period | KeyCode::NumpadDecimal => Key::PERIOD,
        KeyCode::AltLeft => Key::ALT_LEFT,
        KeyCode::AltRight => Key::ALT_RIGHT,
        KeyCode::ShiftLeft => Key::SHIFT_LEFT,
        KeyCode::ShiftRight => Key::SHIFT_RIGHT,
        KeyCode::ControlLeft => Key::CONTROL_LEFT,
        KeyCode::ControlRight => Key::CONTROL_RIGHT,
        KeyCode::SuperLeft | KeyCode::SuperRight => Key::SYM,
        KeyCode::Tab => Key::TAB,
        KeyCode::Space => Key::SPACE,
        KeyCode::Enter | KeyCode::NumpadEnter => Key::ENTER,
        KeyCode::Backspace => Key::DEL,
        KeyCode::Delete => Key::FORWARD_DEL,
        KeyCode::Backquote => Key::GRAVE,
        KeyCode::Minus | KeyCode::NumpadSubtract => Key::MINUS,
        KeyCode::Equal | KeyCode::NumpadEqual => Key::EQUALS,
        KeyCode::NumpadAdd => Key::PLUS,
        KeyCode::BracketLeft => Key::LEFT_BRACKET,
        KeyCode::BracketRight => Key::RIGHT_BRACKET,
        KeyCode::Backslash => Key::BACKSLASH,
        KeyCode::Semicolon => Key::SEMICOLON,
        KeyCode::Quote => Key::APOSTROPHE,
        KeyCode::Slash | KeyCode::NumpadDivide => Key::SLASH,

        KeyCode::Home => Key::HOME,
        KeyCode::End => Key::END,
        KeyCode::PageUp => Key::PAGE_UP,
        KeyCode::PageDown => Key::PAGE_DOWN,
        KeyCode::Insert => Key::INSERT,
        KeyCode::Escape => Key::ESCAPE,

        KeyCode::F1 => Key::F1,
        KeyCode::F2 => Key::F2,
        KeyCode::F3 => Key::F3,
        KeyCode::F4 => Key::F4,
        KeyCode::F5 => Key::F5,
        KeyCode::F6 => Key::F6,
        KeyCode::F7 => Key::F7,
        KeyCode::F8 => Key::F8,
        KeyCode::F9 => Key::F9,
        KeyCode::F10 => Key::F10,
        KeyCode::F11 => Key::F11,
        KeyCode::F12 => Key::F12,

        _ => Key::UNKNOWN,
    }
}

/// Extra buttons fall back to [`Button::Left`].
pub fn translate_button(button: MouseButton) -> Button {
    match button {
        MouseButton::Right => Button::Right,
        MouseButton::Middle => Button::Middle,
        _ => Button::Left,
    }
}
