//! Canonical key codes.
//!
//! Platform adapters translate their native key identifiers into this space
//! before handing them to the capture layer. The numbering is stable so that
//! key codes can be stored or sent over the wire.

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Key(pub i32);

impl Key {
    /// Matches any pressed key in [`InputPipeline::is_key_pressed`](crate::InputPipeline::is_key_pressed).
    pub const ANY_KEY: Key = Key(-1);
    pub const UNKNOWN: Key = Key(0);

    pub const HOME: Key = Key(3);

    pub const NUM_0: Key = Key(7);
    pub const NUM_1: Key = Key(8);
    pub const NUM_2: Key = Key(9);
    pub const NUM_3: Key = Key(10);
    pub const NUM_4: Key = Key(11);
    pub const NUM_5: Key = Key(12);
    pub const NUM_6: Key = Key(13);
    pub const NUM_7: Key = Key(14);
    pub const NUM_8: Key = Key(15);
    pub const NUM_9: Key = Key(16);

    pub const DPAD_UP: Key = Key(19);
    pub const DPAD_DOWN: Key = Key(20);
    pub const DPAD_LEFT: Key = Key(21);
    pub const DPAD_RIGHT: Key = Key(22);
    pub const DPAD_CENTER: Key = Key(23);

    pub const A: Key = Key(29);
    pub const B: Key = Key(30);
    pub const C: Key = Key(31);
    pub const D: Key = Key(32);
    pub const E: Key = Key(33);
    pub const F: Key = Key(34);
    pub const G: Key = Key(35);
    pub const H: Key = Key(36);
    pub const I: Key = Key(37);
    pub const J: Key = Key(38);
    pub const K: Key = Key(39);
    pub const L: Key = Key(40);
    pub const M: Key = Key(41);
    pub const N: Key = Key(42);
    pub const O: Key = Key(43);
    pub const P: Key = Key(44);
    pub const Q: Key = Key(45);
    pub const R: Key = Key(46);
    pub const S: Key = Key(47);
    pub const T: Key = Key(48);
    pub const U: Key = Key(49);
    pub const V: Key = Key(50);
    pub const W: Key = Key(51);
    pub const X: Key = Key(52);
    pub const Y: Key = Key(53);
    pub const Z: Key = Key(54);

    pub const COMMA: Key = Key(55);
    pub const PERIOD: Key = Key(56);
    pub const ALT_LEFT: Key = Key(57);
    pub const ALT_RIGHT: Key = Key(58);
    pub const SHIFT_LEFT: Key = Key(59);
    pub const SHIFT_RIGHT: Key = Key(60);
    pub const TAB: Key = Key(61);
    pub const SPACE: Key = Key(62);
    pub const SYM: Key = Key(63);
    pub const ENTER: Key = Key(66);
    /// Backspace.
    pub const DEL: Key = Key(67);
    pub const GRAVE: Key = Key(68);
    pub const MINUS: Key = Key(69);
    pub const EQUALS: Key = Key(70);
    pub const LEFT_BRACKET: Key = Key(71);
    pub const RIGHT_BRACKET: Key = Key(72);
    pub const BACKSLASH: Key = Key(73);
    pub const SEMICOLON: Key = Key(74);
    pub const APOSTROPHE: Key = Key(75);
    pub const SLASH: Key = Key(76);
    pub const PLUS: Key = Key(81);
    pub const PAGE_UP: Key = Key(92);
    pub const PAGE_DOWN: Key = Key(93);
    pub const ESCAPE: Key = Key(111);
    pub const FORWARD_DEL: Key = Key(112);
    pub const END: Key = Key(123);
    pub const INSERT: Key = Key(124);
    pub const CONTROL_LEFT: Key = Key(129);
    pub const CONTROL_RIGHT: Key = Key(130);

    pub const F1: Key = Key(131);
    pub const F2: Key = Key(132);
    pub const F3: Key = Key(133);
    pub const F4: Key = Key(134);
    pub const F5: Key = Key(135);
    pub const F6: Key = Key(136);
    pub const F7: Key = Key(137);
    pub const F8: Key = Key(138);
    pub const F9: Key = Key(139);
    pub const F10: Key = Key(140);
    pub const F11: Key = Key(141);
    pub const F12: Key = Key(142);

    pub const COLON: Key = Key(243);

    pub const fn code(self) -> i32 {
        self.0
    }

    pub fn is_unknown(self) -> bool {
        self == Key::UNKNOWN
    }

    /// Human readable name, used in log output.
    pub fn name(self) -> Option<&'static str> {
        let name = match self {
            Key::ANY_KEY => "Any",
            Key::HOME => "Home",
            Key::NUM_0 => "0",
            Key::NUM_1 => "1",
            Key::NUM_2 => "2",
            Key::NUM_3 => "3",
            Key::NUM_4 => "4",
            Key::NUM_5 => "5",
            Key::NUM_6 => "6",
            Key::NUM_7 => "7",
            Key::NUM_8 => "8",
            Key::NUM_9 => "9",
            Key::DPAD_UP => "Up",
            Key::DPAD_DOWN => "Down",
            Key::DPAD_LEFT => "Left",
            Key::DPAD_RIGHT => "Right",
            Key::DPAD_CENTER => "Center",
            Key::COMMA => ",",
            Key::PERIOD => ".",
            Key::ALT_LEFT => "L-Alt",
            Key::ALT_RIGHT => "R-Alt",
            Key::SHIFT_LEFT => "L-Shift",
            Key::SHIFT_RIGHT => "R-Shift",
            Key::TAB => "Tab",
            Key::SPACE => "Space",
            Key::SYM => "SYM",
            Key::ENTER => "Enter",
            Key::DEL => "Delete",
            Key::GRAVE => "`",
            Key::MINUS => "-",
            Key::EQUALS => "=",
            Key::LEFT_BRACKET => "[",
            Key::RIGHT_BRACKET => "]",
            Key::BACKSLASH => "\\",
            Key::SEMICOLON => ";",
            Key::APOSTROPHE => "'",
            Key::SLASH => "/",
            Key::PLUS => "Plus",
            Key::PAGE_UP => "Page Up",
            Key::PAGE_DOWN => "Page Down",
            Key::ESCAPE => "Escape",
            Key::FORWARD_DEL => "Forward Delete",
            Key::END => "End",
            Key::INSERT => "Insert",
            Key::CONTROL_LEFT => "L-Ctrl",
            Key::CONTROL_RIGHT => "R-Ctrl",
            Key::COLON => ":",
            Key(code @ 29..=54) => return LETTERS.get((code - 29) as usize).copied(),
            Key(code @ 131..=142) => return FUNCTION_KEYS.get((code - 131) as usize).copied(),
            _ => return None,
        };
        Some(name)
    }
}

const LETTERS: [&str; 26] = [
    "A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L", "M", "N", "O", "P", "Q", "R", "S",
    "T", "U", "V", "W", "X", "Y", "Z",
];

const FUNCTION_KEYS: [&str; 12] = [
    "F1", "F2", "F3", "F4", "F5", "F6", "F7", "F8", "F9", "F10", "F11", "F12",
];

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "Key({})", self.0),
        }
    }
}
