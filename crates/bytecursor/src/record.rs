// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Plain-data record codec.
//!
//! A record is any `T: Pod`: `Copy`, no padding, no pointers, every bit
//! pattern valid. Wire records are declared `#[repr(C, packed)]` so their
//! bytes are the fields in declaration order with no gaps:
//!
//! ```
//! use bytecursor::prelude::*;
//! use bytemuck::{Pod, Zeroable};
//!
//! #[repr(C, packed)]
//! #[derive(Clone, Copy, Zeroable, Pod)]
//! struct Sample {
//!     id: u16,
//!     value: f64,
//! }
//!
//! let mut buffer = [0u8; 32];
//! let mut writer: &mut [u8] = &mut buffer;
//! writer.write_many(&[Sample { id: 1, value: 0.5 }, Sample { id: 2, value: 1.5 }]);
//! assert_eq!(writer.remaining_len(), 32 - 20);
//!
//! let mut reader: &[u8] = &buffer;
//! let samples: Vec<Sample> = reader.read_many(None);
//! assert_eq!(samples.len(), 3); // 32 / 10, two trailing bytes left
//! assert_eq!({ samples[1].id }, 2);
//! assert_eq!(reader.remaining_len(), 2);
//! ```
//!
//! Padding or references in `T` fail to compile (`Pod` cannot be derived),
//! so raw bytes are never reinterpreted as a type they cannot represent.

use core::mem::size_of;

use bytemuck::Pod;

use crate::error::{fail, CursorError, CursorResult};
use crate::primitive::{ReadPrimitive, WritePrimitive};
use crate::view::{ByteView, ByteViewMut};

/// Byte span of `count` records of `T`.
fn span_len<T>(count: usize) -> CursorResult<usize> {
    let size = size_of::<T>();
    count.checked_mul(size).ok_or_else(|| {
        log::debug!("[record::span_len] {} x {} bytes overflows", count, size);
        CursorError::CountOverflow { count, size }
    })
}

/// Records of `T` that fit in `remaining` bytes.
fn fit_count<T>(remaining: usize) -> CursorResult<usize> {
    match size_of::<T>() {
        0 => {
            log::debug!("[record::fit_count] zero-sized record, count required");
            Err(CursorError::ZeroSizedRecord)
        }
        size => Ok(remaining / size),
    }
}

fn resolve_count<T>(count: Option<usize>, remaining: usize) -> CursorResult<usize> {
    match count {
        Some(count) => Ok(count),
        None => fit_count::<T>(remaining),
    }
}

/// Copies `bytes` into freshly built records; the source may be unaligned.
fn decode_records<T: Pod>(bytes: &[u8], count: usize) -> Vec<T> {
    if size_of::<T>() == 0 {
        return vec![T::zeroed(); count];
    }
    bytes
        .chunks_exact(size_of::<T>())
        .map(bytemuck::pod_read_unaligned)
        .collect()
}

fn record_bytes<T: Pod>(items: &[T]) -> &[u8] {
    if size_of::<T>() == 0 {
        return &[];
    }
    bytemuck::cast_slice(items)
}

fn record_bytes_mut<T: Pod>(items: &mut [T]) -> &mut [u8] {
    if size_of::<T>() == 0 {
        return &mut [];
    }
    bytemuck::cast_slice_mut(items)
}

/// Reads records from any [`ByteView`].
pub trait ReadRecords: ByteView {
    /// Reads a single record.
    #[inline]
    #[track_caller]
    fn read_one<T: Pod>(&mut self) -> T {
        self.read_value::<T>()
    }

    /// Checked [`read_one`](ReadRecords::read_one).
    #[inline]
    fn try_read_one<T: Pod>(&mut self) -> CursorResult<T> {
        self.try_read_value::<T>()
    }

    /// Reads `count` records, or as many whole records as remain when
    /// `count` is `None`; trailing partial-record bytes stay unconsumed.
    ///
    /// # Panics
    ///
    /// When the view is too short, `count * size_of::<T>()` overflows, or
    /// `count` is `None` for a zero-sized `T`.
    #[track_caller]
    fn read_many<T: Pod>(&mut self, count: Option<usize>) -> Vec<T> {
        let count =
            resolve_count::<T>(count, self.remaining_len()).unwrap_or_else(|err| fail(err));
        let byte_len = span_len::<T>(count).unwrap_or_else(|err| fail(err));
        let chunk = self.consume(byte_len);
        decode_records(&chunk, count)
    }

    /// Checked [`read_many`](ReadRecords::read_many): every record is read or
    /// none is. Argument errors are reported before the length check.
    fn try_read_many<T: Pod>(&mut self, count: Option<usize>) -> CursorResult<Vec<T>> {
        let count = resolve_count::<T>(count, self.remaining_len())?;
        let byte_len = span_len::<T>(count)?;
        let chunk = self.try_consume(byte_len)?;
        Ok(decode_records(&chunk, count))
    }

    /// Fills `dst` with the next `dst.len()` records without allocating.
    #[track_caller]
    fn read_many_into<T: Pod>(&mut self, dst: &mut [T]) {
        let byte_len = span_len::<T>(dst.len()).unwrap_or_else(|err| fail(err));
        let chunk = self.consume(byte_len);
        record_bytes_mut(dst).copy_from_slice(&chunk);
    }

    /// Checked [`read_many_into`](ReadRecords::read_many_into); `dst` is
    /// untouched on failure.
    fn try_read_many_into<T: Pod>(&mut self, dst: &mut [T]) -> CursorResult<()> {
        let byte_len = span_len::<T>(dst.len())?;
        let chunk = self.try_consume(byte_len)?;
        record_bytes_mut(dst).copy_from_slice(&chunk);
        Ok(())
    }
}

impl<V: ByteView> ReadRecords for V {}

/// Writes records into any [`ByteViewMut`].
pub trait WriteRecords: ByteViewMut {
    /// Writes a single record.
    #[inline]
    #[track_caller]
    fn write_one<T: Pod>(&mut self, value: T) {
        self.write_value(value);
    }

    /// Checked [`write_one`](WriteRecords::write_one).
    #[inline]
    fn try_write_one<T: Pod>(&mut self, value: T) -> CursorResult<()> {
        self.try_write_value(value)
    }

    /// Writes every record of `items` back to back.
    ///
    /// # Panics
    ///
    /// When the view cannot hold all of them. Nothing is written.
    #[inline]
    #[track_caller]
    fn write_many<T: Pod>(&mut self, items: &[T]) {
        self.write_bytes(record_bytes(items));
    }

    /// Checked [`write_many`](WriteRecords::write_many): all records are
    /// written or none is.
    #[inline]
    fn try_write_many<T: Pod>(&mut self, items: &[T]) -> CursorResult<()> {
        self.try_write_bytes(record_bytes(items))
    }
}

impl<V: ByteViewMut> WriteRecords for V {}
