//! Byte-layout constants and length prefixes.
//!
//! Every multi-byte value is Big Endian:
//! ```text
//! ┌──────────────┬──────────────┬───────────────────────────┐
//! │ Short string │ u16 BE len   │ len raw bytes             │
//! │ UTF string   │ u32 BE len   │ len raw bytes             │
//! │ Bool         │ 1 byte       │ 0x01 = true, else false   │
//! └──────────────┴──────────────┴───────────────────────────┘
//! ```

/// Size of the short string prefix (u16).
pub const SHORT_PREFIX_SIZE: usize = 2;

/// Size of the extended string prefix (u32).
pub const LONG_PREFIX_SIZE: usize = 4;

/// Encoded `true`.
pub const BOOL_TRUE: u8 = 0x01;

/// Encoded `false`.
pub const BOOL_FALSE: u8 = 0x00;

/// Width of the length prefix in front of a string payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthPrefix {
    /// u16 prefix, payloads up to 65535 bytes.
    Short,
    /// u32 prefix, payloads up to `u32::MAX` bytes.
    Long,
}

impl LengthPrefix {
    /// Prefix width in bytes.
    #[inline]
    pub const fn size(self) -> usize {
        match self {
            Self::Short => SHORT_PREFIX_SIZE,
            Self::Long => LONG_PREFIX_SIZE,
        }
    }

    /// Largest payload length this prefix can describe.
    #[inline]
    pub const fn max_len(self) -> usize {
        match self {
            Self::Short => u16::MAX as usize,
            // Capped at usize::MAX where usize is narrower than u32.
            Self::Long => {
                if usize::BITS > 32 {
                    u32::MAX as usize
                } else {
                    usize::MAX
                }
            }
        }
    }

    /// Encode `len` into `buf` (Big Endian).
    ///
    /// Returns `None` if `len` exceeds [`max_len`](Self::max_len) or
    /// `buf` is shorter than the prefix.
    pub fn encode_into(self, len: usize, buf: &mut [u8]) -> Option<()> {
        if len > self.max_len() || buf.len() < self.size() {
            return None;
        }
        match self {
            Self::Short => buf[..2].copy_from_slice(&(len as u16).to_be_bytes()),
            Self::Long => buf[..4].copy_from_slice(&(len as u32).to_be_bytes()),
        }
        Some(())
    }

    /// Decode a length from the front of `buf` (Big Endian).
    ///
    /// Returns `None` if `buf` is shorter than the prefix.
    ///
    /// # Example
    ///
    /// ```
    /// use packwire::packet::LengthPrefix;
    ///
    /// assert_eq!(LengthPrefix::Short.decode(&[0x01, 0x00]), Some(256));
    /// assert_eq!(LengthPrefix::Long.decode(&[0, 0, 0x01, 0x00]), Some(256));
    /// assert_eq!(LengthPrefix::Long.decode(&[0, 0]), None);
    /// ```
    pub fn decode(self, buf: &[u8]) -> Option<usize> {
        match self {
            Self::Short => {
                let bytes: [u8; 2] = buf.get(..2)?.try_into().ok()?;
                Some(u16::from_be_bytes(bytes) as usize)
            }
            Self::Long => {
                let bytes: [u8; 4] = buf.get(..4)?.try_into().ok()?;
                Some(u32::from_be_bytes(bytes) as usize)
            }
        }
    }
}

/// Encode a boolean as a single byte.
#[inline]
pub fn encode_bool(value: bool) -> u8 {
    if value {
        BOOL_TRUE
    } else {
        BOOL_FALSE
    }
}

/// Decode a boolean byte. Only `0x01` is true; every other value is false.
#[inline]
pub fn decode_bool(byte: u8) -> bool {
    byte == BOOL_TRUE
}
