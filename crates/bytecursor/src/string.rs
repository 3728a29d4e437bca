// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! UTF-8 string codec.
//!
//! Two framings:
//!
//! - fixed length: the caller knows the payload size (`read_string(n)`,
//!   `write_string(text)`); only the payload is on the wire.
//! - prefixed: `[len: 1|2|4 bytes, native order][payload]`, see
//!   [`PrefixWidth`]. An empty string is just the prefix.
//!
//! Owned reads decode lossily: malformed sequences become U+FFFD, as the
//! legacy decoders on the other end of these buffers do. Borrowed reads
//! through [`ReadStr`] are strict and report [`CursorError::InvalidUtf8`].

use crate::error::{check_remaining, fail, CursorError, CursorResult};
use crate::prefix::PrefixWidth;
use crate::primitive::{ReadPrimitive, WritePrimitive};
use crate::view::{ByteView, ByteViewMut};

/// Bytes a prefixed write of `text` occupies, prefix included.
///
/// Fails with [`CursorError::PrefixOverflow`] when `text` is too long for
/// `width`.
pub fn prefixed_len(text: &str, width: PrefixWidth) -> CursorResult<usize> {
    width.check_capacity(text.len())?;
    width
        .framed_len(text.len())
        .ok_or(CursorError::PrefixOverflow {
            width,
            len: text.len(),
        })
}

/// Payload length of the prefixed string at the front of `view`, once both
/// the prefix and the payload are known to fit.
fn checked_payload_len<V: ReadStrings>(view: &V, width: PrefixWidth) -> CursorResult<usize> {
    let remaining = view.remaining_len();
    check_remaining(width.byte_len(), remaining)?;
    let len = view.peek_prefixed_len(width).unwrap_or(usize::MAX);
    check_remaining(width.framed_len(len).unwrap_or(usize::MAX), remaining)?;
    Ok(len)
}

/// Writes the length field; capacity and room are already verified.
fn put_prefix<V: WritePrimitive>(view: &mut V, width: PrefixWidth, len: usize) {
    match width {
        PrefixWidth::Byte => view.write_u8(len as u8),
        PrefixWidth::Short => view.write_u16(len as u16),
        PrefixWidth::Int => view.write_u32(len as u32),
    }
}

/// Reads UTF-8 strings from any [`ByteView`].
pub trait ReadStrings: ByteView {
    /// Consumes exactly `byte_len` bytes and decodes them lossily.
    ///
    /// # Panics
    ///
    /// When fewer than `byte_len` bytes remain.
    #[track_caller]
    fn read_string(&mut self, byte_len: usize) -> String {
        let chunk = self.consume(byte_len);
        String::from_utf8_lossy(&chunk).into_owned()
    }

    /// Checked [`read_string`](ReadStrings::read_string).
    fn try_read_string(&mut self, byte_len: usize) -> CursorResult<String> {
        let chunk = self.try_consume(byte_len)?;
        Ok(String::from_utf8_lossy(&chunk).into_owned())
    }

    /// Decodes the length prefix without consuming anything.
    ///
    /// `None` when the view is shorter than the prefix.
    fn peek_prefixed_len(&self, width: PrefixWidth) -> Option<usize> {
        match width {
            PrefixWidth::Byte => self.peek_value::<u8>().map(usize::from),
            PrefixWidth::Short => self.peek_value::<u16>().map(usize::from),
            PrefixWidth::Int => self
                .peek_value::<u32>()
                .and_then(|len| usize::try_from(len).ok()),
        }
    }

    /// Reads a length-prefixed string.
    ///
    /// # Panics
    ///
    /// When the view cannot hold the prefix or the payload it announces.
    /// The view is checked as a whole before anything is consumed.
    #[track_caller]
    fn read_prefixed(&mut self, width: PrefixWidth) -> String {
        self.try_read_prefixed(width).unwrap_or_else(|err| fail(err))
    }

    /// Checked [`read_prefixed`](ReadStrings::read_prefixed): prefix and
    /// payload are both verified before the view moves.
    fn try_read_prefixed(&mut self, width: PrefixWidth) -> CursorResult<String> {
        let len = checked_payload_len(&*self, width)?;
        self.skip(width.byte_len());
        if len == 0 {
            return Ok(String::new());
        }
        Ok(self.read_string(len))
    }
}

impl<V: ByteView> ReadStrings for V {}

/// Writes UTF-8 strings into any [`ByteViewMut`].
pub trait WriteStrings: ByteViewMut {
    /// Writes the UTF-8 bytes of `text`, no framing.
    ///
    /// # Panics
    ///
    /// When the view is shorter than `text.len()`. Nothing is written.
    #[inline]
    #[track_caller]
    fn write_string(&mut self, text: &str) {
        self.write_bytes(text.as_bytes());
    }

    /// Checked [`write_string`](WriteStrings::write_string).
    #[inline]
    fn try_write_string(&mut self, text: &str) -> CursorResult<()> {
        self.try_write_bytes(text.as_bytes())
    }

    /// Writes `text` behind a `width` length prefix.
    ///
    /// # Panics
    ///
    /// When `text` exceeds the prefix capacity, or the view cannot hold
    /// prefix and payload. Nothing is written in either case.
    #[track_caller]
    fn write_prefixed(&mut self, text: &str, width: PrefixWidth) {
        if let Err(err) = self.try_write_prefixed(text, width) {
            fail(err);
        }
    }

    /// Checked [`write_prefixed`](WriteStrings::write_prefixed).
    ///
    /// Capacity overflow is reported as [`CursorError::PrefixOverflow`]
    /// even when the view is also too short.
    fn try_write_prefixed(&mut self, text: &str, width: PrefixWidth) -> CursorResult<()> {
        let framed = prefixed_len(text, width)?;
        check_remaining(framed, self.remaining_len())?;
        put_prefix(self, width, text.len());
        if !text.is_empty() {
            self.write_bytes(text.as_bytes());
        }
        Ok(())
    }
}

impl<V: ByteViewMut> WriteStrings for V {}

/// Zero-copy strict string reads from a borrowed slice.
pub trait ReadStr<'a> {
    /// Borrows the next `byte_len` bytes as `&str`.
    ///
    /// Fails without consuming on shortfall or malformed UTF-8.
    fn try_read_str(&mut self, byte_len: usize) -> CursorResult<&'a str>;

    /// Borrows the next length-prefixed string as `&str`.
    fn try_read_prefixed_str(&mut self, width: PrefixWidth) -> CursorResult<&'a str>;
}

impl<'a> ReadStr<'a> for &'a [u8] {
    fn try_read_str(&mut self, byte_len: usize) -> CursorResult<&'a str> {
        check_remaining(byte_len, self.len())?;
        let view: &'a [u8] = *self;
        let text = core::str::from_utf8(&view[..byte_len])?;
        *self = &view[byte_len..];
        Ok(text)
    }

    fn try_read_prefixed_str(&mut self, width: PrefixWidth) -> CursorResult<&'a str> {
        let len = checked_payload_len(&*self, width)?;
        let view: &'a [u8] = *self;
        let start = width.byte_len();
        let text = core::str::from_utf8(&view[start..start + len]).map_err(|err| {
            log::trace!("[ReadStr::try_read_prefixed_str] rejected: {}", err);
            CursorError::from(err)
        })?;
        *self = &view[start + len..];
        Ok(text)
    }
}
