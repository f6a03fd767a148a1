//! Packet module - cursor buffer, byte layout, typed reads and writes.
//!
//! A [`Packet`] owns a fixed-size byte region and a cursor. Every typed
//! read or write touches the bytes at the cursor and advances it by the
//! exact number of bytes consumed or produced. Storage never grows on
//! write; callers size it up front and call [`Packet::resize`] when the
//! capacity has to change.
//!
//! # Example
//!
//! ```
//! use packwire::Packet;
//!
//! let mut packet = Packet::new(16);
//! packet.write_u32(1337).unwrap();
//! packet.write_string("Zeroeh").unwrap();
//! assert_eq!(packet.position(), 12);
//!
//! packet.reset();
//! assert_eq!(packet.read_u32().unwrap(), 1337);
//! assert_eq!(packet.read_string().unwrap(), "Zeroeh");
//! ```

mod numeric;
mod text;
mod wire_format;

pub use wire_format::{
    decode_bool, encode_bool, LengthPrefix, BOOL_FALSE, BOOL_TRUE, LONG_PREFIX_SIZE,
    SHORT_PREFIX_SIZE,
};

use bytes::{Bytes, BytesMut};

use crate::error::{PackwireError, Result};

/// Byte buffer with a read/write cursor.
///
/// `0 <= position <= capacity` holds before and after every call. An
/// operation that would cross the end of storage fails with
/// [`PackwireError::OutOfBounds`] and leaves both cursor and bytes untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Packet {
    /// Allocated storage. Its length is the packet capacity.
    data: BytesMut,
    /// Next byte to read or write.
    position: usize,
    /// Advisory logical length, maintained by the caller.
    length: usize,
}

impl Packet {
    /// Create a zero-filled packet of `capacity` bytes.
    pub fn new(capacity: usize) -> Self {
        Self {
            data: BytesMut::zeroed(capacity),
            position: 0,
            length: 0,
        }
    }

    /// Create a packet holding a copy of `bytes`, positioned at the start.
    ///
    /// The advisory length is set to `bytes.len()`.
    pub fn from_slice(bytes: &[u8]) -> Self {
        Self::from(BytesMut::from(bytes))
    }

    /// Current cursor position.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Move the cursor to `position`.
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if `position` is past the end of storage.
    pub fn set_position(&mut self, position: usize) -> Result<()> {
        if position > self.data.len() {
            return Err(PackwireError::OutOfBounds {
                position,
                requested: 0,
                capacity: self.data.len(),
            });
        }
        self.position = position;
        Ok(())
    }

    /// Move the cursor back to the start, e.g. to re-read what was written.
    #[inline]
    pub fn reset(&mut self) {
        self.position = 0;
    }

    /// Size of the allocated storage in bytes.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Bytes between the cursor and the end of storage.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.data.len() - self.position
    }

    /// Advisory logical length. Never read by any codec operation.
    #[inline]
    pub fn length(&self) -> usize {
        self.length
    }

    /// Set the advisory logical length.
    #[inline]
    pub fn set_length(&mut self, length: usize) {
        self.length = length;
    }

    /// The whole storage, regardless of cursor position.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Bytes before the cursor.
    #[inline]
    pub fn written(&self) -> &[u8] {
        &self.data[..self.position]
    }

    /// Freeze the storage into `Bytes` for handing to a transport.
    pub fn into_bytes(self) -> Bytes {
        self.data.freeze()
    }

    /// Reallocate storage to `new_size` zero-filled bytes, carrying over
    /// the old bytes in `[from_index, keep)` at the same indices.
    ///
    /// Nothing is copied when `keep <= from_index`. The cursor is not
    /// reset; it is only pulled back to `new_size` when the new storage
    /// is shorter than the cursor.
    ///
    /// If `from_index` is past the end of the current storage the call is
    /// a no-op and returns `Ok(())`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the copied range would exceed either
    /// the old or the new storage. The packet is left unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// use packwire::Packet;
    ///
    /// let mut packet = Packet::from_slice(&[0x11, 0x22, 0x33, 0x44]);
    /// packet.resize(8, 3, 0).unwrap();
    /// assert_eq!(packet.as_bytes(), &[0x11, 0x22, 0x33, 0, 0, 0, 0, 0]);
    /// ```
    pub fn resize(&mut self, new_size: usize, keep: usize, from_index: usize) -> Result<()> {
        let old_size = self.data.len();
        if from_index > old_size {
            tracing::debug!(from_index, old_size, "resize start index past end of storage, ignored");
            return Ok(());
        }

        if keep > from_index && (keep > new_size || keep > old_size) {
            return Err(PackwireError::InvalidArgument(format!(
                "cannot keep bytes up to {} when resizing {} -> {} bytes",
                keep, old_size, new_size
            )));
        }

        let mut data = BytesMut::zeroed(new_size);
        if keep > from_index {
            data[from_index..keep].copy_from_slice(&self.data[from_index..keep]);
        }
        self.data = data;

        if self.position > new_size {
            tracing::debug!(
                position = self.position,
                new_size,
                "cursor past end of resized storage, clamped"
            );
            self.position = new_size;
        }

        Ok(())
    }

    /// Advance the cursor, returning the amount advanced.
    #[inline]
    fn advance(&mut self, amount: usize) -> usize {
        self.position += amount;
        amount
    }

    /// End index of an `amount`-byte span at the cursor, if it fits.
    fn span_end(&self, amount: usize) -> Result<usize> {
        match self.position.checked_add(amount) {
            Some(end) if end <= self.data.len() => Ok(end),
            _ => Err(self.out_of_bounds(amount)),
        }
    }

    fn out_of_bounds(&self, requested: usize) -> PackwireError {
        tracing::trace!(
            position = self.position,
            requested,
            capacity = self.data.len(),
            "packet access out of bounds"
        );
        PackwireError::OutOfBounds {
            position: self.position,
            requested,
            capacity: self.data.len(),
        }
    }

    /// Borrow `amount` bytes at the cursor for reading and advance past them.
    fn take(&mut self, amount: usize) -> Result<&[u8]> {
        let start = self.position;
        let end = self.span_end(amount)?;
        self.advance(amount);
        Ok(&self.data[start..end])
    }

    /// Borrow `amount` bytes at the cursor for writing and advance past them.
    fn take_mut(&mut self, amount: usize) -> Result<&mut [u8]> {
        let start = self.position;
        let end = self.span_end(amount)?;
        self.advance(amount);
        Ok(&mut self.data[start..end])
    }

    /// Read exactly `N` bytes into an array.
    #[inline]
    fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.take(N)?);
        Ok(out)
    }
}

impl From<BytesMut> for Packet {
    fn from(data: BytesMut) -> Self {
        let length = data.len();
        Self {
            data,
            position: 0,
            length,
        }
    }
}

impl From<Vec<u8>> for Packet {
    fn from(data: Vec<u8>) -> Self {
        Self::from_slice(&data)
    }
}

impl AsRef<[u8]> for Packet {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}
