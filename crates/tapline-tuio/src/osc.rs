//! Minimal Open Sound Control codec.
//!
//! Covers what TUIO senders emit: messages and (nested) bundles carrying
//! int32, float32, string, blob, int64, float64 and timetag arguments, plus
//! the argument-less `T`, `F`, `N` and `I` tags. All numbers are big-endian
//! and every field is padded to a multiple of four bytes.

use std::fmt;

const BUNDLE_TAG: &[u8] = b"#bundle\0";

#[derive(Clone, Debug, PartialEq)]
pub enum OscArg {
    Int(i32),
    Float(f32),
    Str(String),
    Blob(Vec<u8>),
    Long(i64),
    Double(f64),
    Time(u64),
    Bool(bool),
    Nil,
    Impulse,
}

impl OscArg {
    pub fn as_int(&self) -> Option<i32> {
        match self {
            OscArg::Int(value) => Some(*value),
            OscArg::Long(value) => i32::try_from(*value).ok(),
            _ => None,
        }
    }

    /// Accepts any numeric argument; some senders encode positions as doubles.
    pub fn as_float(&self) -> Option<f32> {
        match self {
            OscArg::Float(value) => Some(*value),
            OscArg::Double(value) => Some(*value as f32),
            OscArg::Int(value) => Some(*value as f32),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            OscArg::Str(value) => Some(value),
            _ => None,
        }
    }

    fn tag(&self) -> u8 {
        match self {
            OscArg::Int(_) => b'i',
            OscArg::Float(_) => b'f',
            OscArg::Str(_) => b's',
            OscArg::Blob(_) => b'b',
            OscArg::Long(_) => b'h',
            OscArg::Double(_) => b'd',
            OscArg::Time(_) => b't',
            OscArg::Bool(true) => b'T',
            OscArg::Bool(false) => b'F',
            OscArg::Nil => b'N',
            OscArg::Impulse => b'I',
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct OscMessage {
    pub address: String,
    pub args: Vec<OscArg>,
}

impl OscMessage {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            args: Vec::new(),
        }
    }

    pub fn with_arg(mut self, arg: OscArg) -> Self {
        self.args.push(arg);
        self
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::new();
        write_string(&mut out, &self.address);
        let mut tags = String::with_capacity(self.args.len() + 1);
        tags.push(',');
        tags.extend(self.args.iter().map(|arg| arg.tag() as char));
        write_string(&mut out, &tags);
        for arg in &self.args {
            match arg {
                OscArg::Int(value) => out.extend_from_slice(&value.to_be_bytes()),
                OscArg::Float(value) => out.extend_from_slice(&value.to_be_bytes()),
                OscArg::Str(value) => write_string(&mut out, value),
                OscArg::Blob(bytes) => {
                    out.extend_from_slice(&(bytes.len() as i32).to_be_bytes());
                    out.extend_from_slice(bytes);
                    pad(&mut out);
                }
                OscArg::Long(value) => out.extend_from_slice(&value.to_be_bytes()),
                OscArg::Double(value) => out.extend_from_slice(&value.to_be_bytes()),
                OscArg::Time(value) => out.extend_from_slice(&value.to_be_bytes()),
                OscArg::Bool(_) | OscArg::Nil | OscArg::Impulse => {}
            }
        }
        out
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum OscPacket {
    Message(OscMessage),
    Bundle { time: u64, packets: Vec<OscPacket> },
}

impl OscPacket {
    pub fn decode(bytes: &[u8]) -> Result<Self, OscError> {
        let mut reader = Reader::new(bytes);
        let packet = read_packet(&mut reader)?;
        Ok(packet)
    }

    pub fn encode(&self) -> Vec<u8> {
        match self {
            OscPacket::Message(message) => message.encode(),
            OscPacket::Bundle { time, packets } => {
                let mut out = BUNDLE_TAG.to_vec();
                out.extend_from_slice(&time.to_be_bytes());
                for packet in packets {
                    let element = packet.encode();
                    out.extend_from_slice(&(element.len() as i32).to_be_bytes());
                    out.extend_from_slice(&element);
                }
                out
            }
        }
    }

    /// Visits every message, descending into bundles in order.
    pub fn for_each_message(&self, visit: &mut impl FnMut(&OscMessage)) {
        match self {
            OscPacket::Message(message) => visit(message),
            OscPacket::Bundle { packets, .. } => {
                for packet in packets {
                    packet.for_each_message(visit);
                }
            }
        }
    }
}

/// Reasons a datagram could not be decoded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OscError {
    Truncated { needed: usize, remaining: usize },
    UnterminatedString,
    InvalidUtf8,
    MissingTypeTags,
    UnknownTag(char),
    BadElementSize(i32),
    NotOsc,
}

impl fmt::Display for OscError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OscError::Truncated { needed, remaining } => {
                write!(f, "packet truncated: need {needed} bytes, {remaining} left")
            }
            OscError::UnterminatedString => write!(f, "string is not NUL terminated"),
            OscError::InvalidUtf8 => write!(f, "string is not valid UTF-8"),
            OscError::MissingTypeTags => write!(f, "message has no type tag string"),
            OscError::UnknownTag(tag) => write!(f, "unsupported type tag '{tag}'"),
            OscError::BadElementSize(size) => write!(f, "invalid bundle element size {size}"),
            OscError::NotOsc => write!(f, "packet is neither a message nor a bundle"),
        }
    }
}

impl std::error::Error for OscError {}

struct Reader<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    fn remaining(&self) -> usize {
        self.bytes.len() - self.pos
    }

    fn take(&mut self, len: usize) -> Result<&'a [u8], OscError> {
        if self.remaining() < len {
            return Err(OscError::Truncated {
                needed: len,
                remaining: self.remaining(),
            });
        }
        let bytes = self.bytes;
        let slice = &bytes[self.pos..self.pos + len];
        self.pos += len;
        Ok(slice)
    }

    fn array<const N: usize>(&mut self) -> Result<[u8; N], OscError> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.take(N)?);
        Ok(out)
    }

    fn string(&mut self) -> Result<String, OscError> {
        let bytes = self.bytes;
        let rest = &bytes[self.pos..];
        let len = rest
            .iter()
            .position(|byte| *byte == 0)
            .ok_or(OscError::UnterminatedString)?;
        let text = std::str::from_utf8(&rest[..len]).map_err(|_| OscError::InvalidUtf8)?;
        let text = text.to_owned();
        self.take(padded(len + 1))?;
        Ok(text)
    }
}

fn padded(len: usize) -> usize {
    (len + 3) & !3
}

fn pad(out: &mut Vec<u8>) {
    while out.len() % 4 != 0 {
        out.push(0);
    }
}

fn write_string(out: &mut Vec<u8>, text: &str) {
    out.extend_from_slice(text.as_bytes());
    out.push(0);
    pad(out);
}

fn read_packet(reader: &mut Reader<'_>) -> Result<OscPacket, OscError> {
    match reader.bytes.get(reader.pos) {
        Some(b'/') => read_message(reader).map(OscPacket::Message),
        Some(b'#') => read_bundle(reader),
        _ => Err(OscError::NotOsc),
    }
}

fn read_bundle(reader: &mut Reader<'_>) -> Result<OscPacket, OscError> {
    if reader.take(BUNDLE_TAG.len())? != BUNDLE_TAG {
        return Err(OscError::NotOsc);
    }
    let time = u64::from_be_bytes(reader.array()?);
    let mut packets = Vec::new();
    while reader.remaining() > 0 {
        let size = i32::from_be_bytes(reader.array()?);
        let len = usize::try_from(size).map_err(|_| OscError::BadElementSize(size))?;
        let mut element = Reader::new(reader.take(len)?);
        packets.push(read_packet(&mut element)?);
    }
    Ok(OscPacket::Bundle { time, packets })
}

fn read_message(reader: &mut Reader<'_>) -> Result<OscMessage, OscError> {
    let address = reader.string()?;
    if reader.remaining() == 0 {
        // Pre-1.0 senders may omit the tag string for argument-less messages.
        return Ok(OscMessage::new(address));
    }
    let tags = reader.string()?;
    let tags = tags.strip_prefix(',').ok_or(OscError::MissingTypeTags)?;

    let mut args = Vec::with_capacity(tags.len());
    for tag in tags.chars() {
        let arg = match tag {
            'i' => OscArg::Int(i32::from_be_bytes(reader.array()?)),
            'f' => OscArg::Float(f32::from_be_bytes(reader.array()?)),
            's' | 'S' => OscArg::Str(reader.string()?),
            'b' => {
                let size = i32::from_be_bytes(reader.array()?);
                let len = usize::try_from(size).map_err(|_| OscError::BadElementSize(size))?;
                let bytes = reader.take(len)?.to_vec();
                reader.take(padded(len) - len)?;
                OscArg::Blob(bytes)
            }
            'h' => OscArg::Long(i64::from_be_bytes(reader.array()?)),
            'd' => OscArg::Double(f64::from_be_bytes(reader.array()?)),
            't' => OscArg::Time(u64::from_be_bytes(reader.array()?)),
            'T' => OscArg::Bool(true),
            'F' => OscArg::Bool(false),
            'N' => OscArg::Nil,
            'I' => OscArg::Impulse,
            other => return Err(OscError::UnknownTag(other)),
        };
        args.push(arg);
    }
    Ok(OscMessage { address, args })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_hand_built_message() {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(b"/tuio/2Dcur\0");
        bytes.extend_from_slice(b",sif\0\0\0\0");
        bytes.extend_from_slice(b"set\0");
        bytes.extend_from_slice(&7i32.to_be_bytes());
        bytes.extend_from_slice(&0.25f32.to_be_bytes());

        let packet = OscPacket::decode(&bytes).unwrap();
        assert_eq!(
            packet,
            OscPacket::Message(OscMessage {
                address: "/tuio/2Dcur".into(),
                args: vec![
                    OscArg::Str("set".into()),
                    OscArg::Int(7),
                    OscArg::Float(0.25)
                ],
            })
        );
    }

    #[test]
    fn encoded_fields_are_four_byte_aligned() {
        let message = OscMessage::new("/a")
            .with_arg(OscArg::Str("xyz".into()))
            .with_arg(OscArg::Blob(vec![1, 2, 3, 4, 5]))
            .with_arg(OscArg::Bool(true));
        let bytes = message.encode();
        // "/a\0\0" + ",sbT\0\0\0\0" + "xyz\0" + size + 5 bytes padded to 8
        assert_eq!(bytes.len(), 4 + 8 + 4 + 4 + 8);
        assert_eq!(
            OscPacket::decode(&bytes).unwrap(),
            OscPacket::Message(message)
        );
    }

    #[test]
    fn nested_bundles_visit_messages_in_order() {
        let inner = OscPacket::Bundle {
            time: 1,
            packets: vec![OscPacket::Message(OscMessage::new("/b"))],
        };
        let outer = OscPacket::Bundle {
            time: 1,
            packets: vec![OscPacket::Message(OscMessage::new("/a")), inner],
        };
        let decoded = OscPacket::decode(&outer.encode()).unwrap();

        let mut seen = Vec::new();
        decoded.for_each_message(&mut |message| seen.push(message.address.clone()));
        assert_eq!(seen, vec!["/a", "/b"]);
    }

    #[test]
    fn truncated_argument_is_an_error() {
        let mut bytes = OscMessage::new("/x").with_arg(OscArg::Int(5)).encode();
        bytes.truncate(bytes.len() - 2);
        assert_eq!(
            OscPacket::decode(&bytes),
            Err(OscError::Truncated {
                needed: 4,
                remaining: 2
            })
        );
    }

    #[test]
    fn rejects_unknown_tags_and_garbage() {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(b"/x\0\0");
        bytes.extend_from_slice(b",q\0\0");
        assert_eq!(OscPacket::decode(&bytes), Err(OscError::UnknownTag('q')));
        assert_eq!(OscPacket::decode(b"hello"), Err(OscError::NotOsc));
        assert_eq!(OscPacket::decode(b""), Err(OscError::NotOsc));
    }

    #[test]
    fn numeric_accessors_coerce() {
        assert_eq!(OscArg::Double(0.5).as_float(), Some(0.5));
        assert_eq!(OscArg::Long(9).as_int(), Some(9));
        assert_eq!(OscArg::Str("x".into()).as_float(), None);
    }
}
