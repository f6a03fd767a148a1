//! Fixed-width reads and writes: integers, f32, single bytes and booleans.
//!
//! All multi-byte values are Big Endian. Signed values are stored as their
//! two's-complement bit pattern, f32 as its IEEE-754 bits.

use super::wire_format::{decode_bool, encode_bool};
use super::Packet;
use crate::error::Result;

macro_rules! be_integers {
    ($($ty:ty => $read:ident, $write:ident;)*) => {
        impl Packet {
            $(
                #[doc = concat!("Read a Big Endian `", stringify!($ty), "` and advance past it.")]
                #[inline]
                pub fn $read(&mut self) -> Result<$ty> {
                    let bytes = self.read_array::<{ ::std::mem::size_of::<$ty>() }>()?;
                    Ok(<$ty>::from_be_bytes(bytes))
                }

                #[doc = concat!("Write a Big Endian `", stringify!($ty), "` and advance past it.")]
                #[inline]
                pub fn $write(&mut self, value: $ty) -> Result<()> {
                    let bytes = value.to_be_bytes();
                    self.take_mut(bytes.len())?.copy_from_slice(&bytes);
                    Ok(())
                }
            )*
        }
    };
}

be_integers! {
    i16 => read_i16, write_i16;
    u16 => read_u16, write_u16;
    i32 => read_i32, write_i32;
    u32 => read_u32, write_u32;
    i64 => read_i64, write_i64;
    u64 => read_u64, write_u64;
}

impl Packet {
    /// Read a single byte.
    #[inline]
    pub fn read_byte(&mut self) -> Result<u8> {
        Ok(self.take(1)?[0])
    }

    /// Write a single byte.
    #[inline]
    pub fn write_byte(&mut self, value: u8) -> Result<()> {
        self.take_mut(1)?[0] = value;
        Ok(())
    }

    /// Read an f32 sent as its raw bit pattern (Big Endian u32).
    #[inline]
    pub fn read_f32(&mut self) -> Result<f32> {
        self.read_u32().map(f32::from_bits)
    }

    /// Write an f32 as its raw bit pattern (Big Endian u32).
    #[inline]
    pub fn write_f32(&mut self, value: f32) -> Result<()> {
        self.write_u32(value.to_bits())
    }

    /// Read a boolean byte. Only `0x01` decodes to `true`.
    #[inline]
    pub fn read_bool(&mut self) -> Result<bool> {
        self.read_byte().map(decode_bool)
    }

    /// Write a boolean as `0x01` or `0x00`.
    #[inline]
    pub fn write_bool(&mut self, value: bool) -> Result<()> {
        self.write_byte(encode_bool(value))
    }
}
