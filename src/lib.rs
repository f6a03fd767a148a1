//! # packwire
//!
//! Cursor-based binary packet buffer for hand-rolled wire formats.
//!
//! A [`Packet`] pairs a fixed-size byte region with a read/write cursor.
//! Callers decide the field order; the packet writes and reads primitives
//! in that order, always Big Endian.
//!
//! ## Layout
//!
//! - Integers (`i16`..`u64`): Big Endian, two's-complement for signed
//! - `f32`: IEEE-754 bit pattern as a Big Endian `u32`
//! - `bool`: one byte, `0x01` is true, anything else false
//! - Short string: `u16` length + raw bytes
//! - UTF string: `u32` length + raw bytes
//! - Raw bytes: no framing, the reader supplies the count
//!
//! ## Example
//!
//! ```
//! use packwire::Packet;
//!
//! let mut packet = Packet::new(32);
//! packet.write_u32(1337).unwrap();
//! packet.write_string("Zeroeh").unwrap();
//! packet.write_f32(103.71).unwrap();
//! packet.write_bool(true).unwrap();
//!
//! // Hand `packet.written()` to a transport, or re-read in place:
//! packet.reset();
//! assert_eq!(packet.read_u32().unwrap(), 1337);
//! assert_eq!(packet.read_string().unwrap(), "Zeroeh");
//! assert_eq!(packet.read_f32().unwrap(), 103.71);
//! assert!(packet.read_bool().unwrap());
//! ```

pub mod error;
pub mod packet;

pub use error::{PackwireError, Result};
pub use packet::Packet;
