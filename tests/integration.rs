//! Integration tests for packwire.
//!
//! These tests drive the public API the way an application-level encoder
//! would: a fixed field order written into a pre-sized packet, then read
//! back in the same order.

use packwire::packet::{LengthPrefix, SHORT_PREFIX_SIZE};
use packwire::{Packet, PackwireError};
use proptest::prelude::*;

#[derive(Debug, Clone, PartialEq)]
struct Position {
    x: f32,
    y: f32,
    z: f32,
}

#[derive(Debug, Clone, PartialEq)]
struct Player {
    id: u32,
    name: String,
    location: Position,
    stats: Vec<i16>,
}

impl Player {
    /// Bytes needed by `write_to`.
    fn encoded_len(&self) -> usize {
        4 + SHORT_PREFIX_SIZE + self.name.len() + 3 * 4 + 2 + self.stats.len() * 2
    }

    fn write_to(&self, packet: &mut Packet) -> packwire::Result<()> {
        packet.write_u32(self.id)?;
        packet.write_string(&self.name)?;
        packet.write_f32(self.location.x)?;
        packet.write_f32(self.location.y)?;
        packet.write_f32(self.location.z)?;
        packet.write_i16(self.stats.len() as i16)?;
        for stat in &self.stats {
            packet.write_i16(*stat)?;
        }
        Ok(())
    }

    fn read_from(packet: &mut Packet) -> packwire::Result<Self> {
        let id = packet.read_u32()?;
        let name = packet.read_string()?;
        let location = Position {
            x: packet.read_f32()?,
            y: packet.read_f32()?,
            z: packet.read_f32()?,
        };
        let count = packet.read_i16()?.max(0) as usize;
        let mut stats = Vec::with_capacity(count);
        for _ in 0..count {
            stats.push(packet.read_i16()?);
        }
        Ok(Self {
            id,
            name,
            location,
            stats,
        })
    }
}

fn sample_player() -> Player {
    Player {
        id: 1337,
        name: "Zeroeh".to_string(),
        location: Position {
            x: 103.71,
            y: 2123.71,
            z: 14.71,
        },
        stats: vec![0, 1, 2, 3],
    }
}

/// Encode a record, reset, decode the same field sequence.
#[test]
fn test_player_round_trip() {
    let player = sample_player();
    let mut packet = Packet::new(player.encoded_len());

    player.write_to(&mut packet).unwrap();
    assert_eq!(packet.position(), packet.capacity());

    packet.reset();
    let decoded = Player::read_from(&mut packet).unwrap();
    assert_eq!(decoded, player);
    assert_eq!(packet.remaining(), 0);
}

/// Bytes handed to a transport decode on the other side.
#[test]
fn test_player_through_frozen_bytes() {
    let player = sample_player();
    let mut packet = Packet::new(64);
    player.write_to(&mut packet).unwrap();
    let sent = packet.written().to_vec();

    let mut received = Packet::from(sent);
    assert_eq!(received.length(), player.encoded_len());
    assert_eq!(Player::read_from(&mut received).unwrap(), player);
}

#[test]
fn test_player_prefix_bytes() {
    let player = sample_player();
    let mut packet = Packet::new(player.encoded_len());
    player.write_to(&mut packet).unwrap();

    let bytes = packet.into_bytes();
    // id = 1337
    assert_eq!(&bytes[..4], &[0x00, 0x00, 0x05, 0x39]);
    // name length + "Zeroeh"
    assert_eq!(&bytes[4..12], b"\x00\x06Zeroeh");
    // stat count and stats at the tail
    assert_eq!(
        &bytes[bytes.len() - 10..],
        &[0, 4, 0, 0, 0, 1, 0, 2, 0, 3]
    );
}

/// An undersized packet fails part-way without corrupting earlier fields.
#[test]
fn test_undersized_packet_reports_out_of_bounds() {
    let player = sample_player();
    let mut packet = Packet::new(player.encoded_len() - 1);

    let err = player.write_to(&mut packet).unwrap_err();
    assert!(matches!(err, PackwireError::OutOfBounds { .. }));
    assert_eq!(packet.position(), player.encoded_len() - 2);

    packet.reset();
    assert_eq!(packet.read_u32().unwrap(), 1337);
    assert_eq!(packet.read_string().unwrap(), "Zeroeh");
}

/// Grow storage, keep what was written, continue at the same cursor.
#[test]
fn test_grow_and_continue_writing() {
    let mut packet = Packet::new(6);
    packet.write_u32(7).unwrap();
    assert!(packet.write_utf_string("more").is_err());

    let written = packet.position();
    packet.resize(16, written, 0).unwrap();
    assert_eq!(packet.position(), written);
    packet.write_utf_string("more").unwrap();

    packet.reset();
    assert_eq!(packet.read_u32().unwrap(), 7);
    assert_eq!(packet.read_utf_string().unwrap(), "more");
}

#[test]
fn test_mixed_string_forms() {
    let mut packet = Packet::new(64);
    packet.write_string("short").unwrap();
    packet.write_utf_string("extended").unwrap();
    packet.write_bool(false).unwrap();
    packet.write_bytes(&[0xDE, 0xAD]).unwrap();
    let end = packet.position();
    assert_eq!(
        end,
        LengthPrefix::Short.size() + 5 + LengthPrefix::Long.size() + 8 + 1 + 2
    );

    packet.reset();
    assert_eq!(packet.read_string().unwrap(), "short");
    assert_eq!(packet.read_utf_string().unwrap(), "extended");
    assert!(!packet.read_bool().unwrap());
    assert_eq!(packet.read_bytes(2).unwrap(), &[0xDE, 0xAD]);
    assert_eq!(packet.position(), end);
}

#[derive(Debug, Clone)]
enum Field {
    I16(i16),
    U16(u16),
    I32(i32),
    U32(u32),
    I64(i64),
    U64(u64),
    F32(f32),
    Bool(bool),
    Byte(u8),
    Str(String),
    Utf(String),
    Raw(Vec<u8>),
}

impl Field {
    fn size(&self) -> usize {
        match self {
            Field::I16(_) | Field::U16(_) => 2,
            Field::I32(_) | Field::U32(_) | Field::F32(_) => 4,
            Field::I64(_) | Field::U64(_) => 8,
            Field::Bool(_) | Field::Byte(_) => 1,
            Field::Str(s) => 2 + s.len(),
            Field::Utf(s) => 4 + s.len(),
            Field::Raw(b) => b.len(),
        }
    }

    fn write(&self, packet: &mut Packet) -> packwire::Result<()> {
        match self {
            Field::I16(v) => packet.write_i16(*v),
            Field::U16(v) => packet.write_u16(*v),
            Field::I32(v) => packet.write_i32(*v),
            Field::U32(v) => packet.write_u32(*v),
            Field::I64(v) => packet.write_i64(*v),
            Field::U64(v) => packet.write_u64(*v),
            Field::F32(v) => packet.write_f32(*v),
            Field::Bool(v) => packet.write_bool(*v),
            Field::Byte(v) => packet.write_byte(*v),
            Field::Str(s) => packet.write_string(s),
            Field::Utf(s) => packet.write_utf_string(s),
            Field::Raw(b) => packet.write_bytes(b),
        }
    }

    /// Read a field of the same kind and check it matches.
    fn read_matches(&self, packet: &mut Packet) -> bool {
        match self {
            Field::I16(v) => packet.read_i16().unwrap() == *v,
            Field::U16(v) => packet.read_u16().unwrap() == *v,
            Field::I32(v) => packet.read_i32().unwrap() == *v,
            Field::U32(v) => packet.read_u32().unwrap() == *v,
            Field::I64(v) => packet.read_i64().unwrap() == *v,
            Field::U64(v) => packet.read_u64().unwrap() == *v,
            Field::F32(v) => packet.read_f32().unwrap().to_bits() == v.to_bits(),
            Field::Bool(v) => packet.read_bool().unwrap() == *v,
            Field::Byte(v) => packet.read_byte().unwrap() == *v,
            Field::Str(s) => packet.read_string().unwrap() == *s,
            Field::Utf(s) => packet.read_utf_string().unwrap() == *s,
            Field::Raw(b) => packet.read_bytes(b.len()).unwrap() == b.as_slice(),
        }
    }
}

fn field() -> impl Strategy<Value = Field> {
    prop_oneof![
        any::<i16>().prop_map(Field::I16),
        any::<u16>().prop_map(Field::U16),
        any::<i32>().prop_map(Field::I32),
        any::<u32>().prop_map(Field::U32),
        any::<i64>().prop_map(Field::I64),
        any::<u64>().prop_map(Field::U64),
        any::<f32>().prop_map(Field::F32),
        any::<bool>().prop_map(Field::Bool),
        any::<u8>().prop_map(Field::Byte),
        ".{0,40}".prop_map(Field::Str),
        ".{0,40}".prop_map(Field::Utf),
        prop::collection::vec(any::<u8>(), 0..40).prop_map(Field::Raw),
    ]
}

proptest! {
    /// Any field sequence reads back in order, and the cursor advances by
    /// the same amount on write and read.
    #[test]
    fn prop_field_sequence_round_trip(fields in prop::collection::vec(field(), 0..32)) {
        let total: usize = fields.iter().map(Field::size).sum();
        let mut packet = Packet::new(total);

        let mut expected = 0;
        for f in &fields {
            f.write(&mut packet).unwrap();
            expected += f.size();
            prop_assert_eq!(packet.position(), expected);
        }

        packet.reset();
        let mut expected = 0;
        for f in &fields {
            prop_assert!(f.read_matches(&mut packet), "mismatch on {:?}", f);
            expected += f.size();
            prop_assert_eq!(packet.position(), expected);
        }
        prop_assert_eq!(packet.remaining(), 0);
    }

    /// Reading a bool is true exactly for 0x01.
    #[test]
    fn prop_bool_totality(byte in any::<u8>()) {
        let mut packet = Packet::from_slice(&[byte]);
        prop_assert_eq!(packet.read_bool().unwrap(), byte == 0x01);
    }

    /// Failed accesses never move the cursor.
    #[test]
    fn prop_out_of_bounds_is_side_effect_free(cap in 0usize..16, pos in 0usize..16, value in any::<u64>()) {
        let pos = pos.min(cap);
        let mut packet = Packet::new(cap);
        packet.set_position(pos).unwrap();

        let result = packet.write_u64(value);
        if pos + 8 > cap {
            prop_assert!(result.is_err());
            prop_assert_eq!(packet.position(), pos);
            prop_assert!(packet.as_bytes().iter().all(|&b| b == 0));
        } else {
            prop_assert!(result.is_ok());
        }
    }
}
