//! Length-prefixed strings and raw byte slices.
//!
//! Strings are written as a Big Endian length followed by the raw UTF-8
//! bytes. The short form uses a u16 prefix, the UTF form a u32 prefix.
//! Raw slices carry no prefix; the reader passes the exact count.

use super::wire_format::{LengthPrefix, LONG_PREFIX_SIZE};
use super::Packet;
use crate::error::{PackwireError, Result};

impl Packet {
    /// Write `value` with a u16 length prefix.
    ///
    /// An empty string writes just `0x0000`.
    ///
    /// # Errors
    ///
    /// Returns `LengthOverflow` if `value` is longer than 65535 bytes, and
    /// `OutOfBounds` if prefix and payload do not fit. Nothing is written
    /// in either case.
    pub fn write_string(&mut self, value: &str) -> Result<()> {
        self.write_prefixed(LengthPrefix::Short, value.as_bytes())
    }

    /// Read a string with a u16 length prefix.
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if the prefix or payload is cut short, and
    /// `InvalidUtf8` if the payload is not UTF-8. The cursor is left where
    /// it was in both cases.
    pub fn read_string(&mut self) -> Result<String> {
        self.read_prefixed_str(LengthPrefix::Short)
    }

    /// Write `value` with a u32 length prefix.
    ///
    /// # Example
    ///
    /// ```
    /// use packwire::Packet;
    ///
    /// let mut packet = Packet::new(6);
    /// packet.write_utf_string("hi").unwrap();
    /// assert_eq!(packet.as_bytes(), &[0, 0, 0, 2, b'h', b'i']);
    /// ```
    pub fn write_utf_string(&mut self, value: &str) -> Result<()> {
        self.write_prefixed(LengthPrefix::Long, value.as_bytes())
    }

    /// Read a string with a u32 length prefix.
    pub fn read_utf_string(&mut self) -> Result<String> {
        self.read_prefixed_str(LengthPrefix::Long)
    }

    /// Read the payload of a u16-prefixed string without UTF-8 checking.
    pub fn read_string_bytes(&mut self) -> Result<&[u8]> {
        self.read_prefixed(LengthPrefix::Short)
    }

    /// Read the payload of a u32-prefixed string without UTF-8 checking.
    pub fn read_utf_string_bytes(&mut self) -> Result<&[u8]> {
        self.read_prefixed(LengthPrefix::Long)
    }

    /// Read `amount` raw bytes at the cursor. No length prefix is consumed.
    #[inline]
    pub fn read_bytes(&mut self, amount: usize) -> Result<&[u8]> {
        self.take(amount)
    }

    /// Write `bytes` verbatim at the cursor. No length prefix is written.
    #[inline]
    pub fn write_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        self.take_mut(bytes.len())?.copy_from_slice(bytes);
        Ok(())
    }

    fn write_prefixed(&mut self, prefix: LengthPrefix, payload: &[u8]) -> Result<()> {
        let mut head = [0u8; LONG_PREFIX_SIZE];
        if prefix.encode_into(payload.len(), &mut head).is_none() {
            tracing::trace!(
                length = payload.len(),
                max = prefix.max_len(),
                "string too long for length prefix"
            );
            return Err(PackwireError::LengthOverflow {
                length: payload.len(),
                max: prefix.max_len(),
            });
        }

        let head = &head[..prefix.size()];
        let span = self.take_mut(head.len().saturating_add(payload.len()))?;
        let (span_head, span_body) = span.split_at_mut(head.len());
        span_head.copy_from_slice(head);
        span_body.copy_from_slice(payload);
        Ok(())
    }

    /// Read a prefixed payload. The cursor only moves if the whole
    /// prefix and payload are in bounds.
    fn read_prefixed(&mut self, prefix: LengthPrefix) -> Result<&[u8]> {
        let start = self.position;
        let len = prefix
            .decode(&self.data[start..])
            .ok_or_else(|| self.out_of_bounds(prefix.size()))?;

        self.span_end(len.saturating_add(prefix.size()))?;
        self.advance(prefix.size());
        self.take(len)
    }

    fn read_prefixed_str(&mut self, prefix: LengthPrefix) -> Result<String> {
        let start = self.position;
        let decoded = std::str::from_utf8(self.read_prefixed(prefix)?).map(str::to_owned);
        if decoded.is_err() {
            self.position = start;
        }
        Ok(decoded?)
    }
}
