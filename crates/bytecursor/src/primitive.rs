// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Native-layout primitive codec.
//!
//! | Type      | Size | Encoding                              |
//! |-----------|------|---------------------------------------|
//! | `i8`/`u8` | 1    | raw byte                              |
//! | `i16`/`u16` | 2  | native endian                         |
//! | `i32`/`u32` | 4  | native endian                         |
//! | `i64`/`u64` | 8  | native endian                         |
//! | `f32`     | 4    | IEEE 754 bits, native endian          |
//! | `f64`     | 8    | IEEE 754 bits, native endian          |
//! | `Uuid`    | 16   | verbatim, byte 0 first                |
//! | `Decimal` | 16   | four native words `flags, hi, lo, mid`|
//!
//! No byte swapping is performed: producer and consumer must agree on byte
//! order. Values are copied out of (and into) the buffer, so the buffer
//! never needs to be aligned for the value type.

use core::mem::size_of;

use bytemuck::Pod;

use crate::decimal::Decimal;
use crate::error::CursorResult;
use crate::view::{ByteView, ByteViewMut};

/// Generate named unchecked/checked readers for one primitive type
macro_rules! impl_read_native {
    ($read:ident, $try_read:ident, $type:ty) => {
        #[inline]
        #[track_caller]
        fn $read(&mut self) -> $type {
            self.read_value::<$type>()
        }

        #[inline]
        fn $try_read(&mut self) -> CursorResult<$type> {
            self.try_read_value::<$type>()
        }
    };
}

/// Generate named unchecked/checked writers for one primitive type
macro_rules! impl_write_native {
    ($write:ident, $try_write:ident, $type:ty) => {
        #[inline]
        #[track_caller]
        fn $write(&mut self, value: $type) {
            self.write_value::<$type>(value)
        }

        #[inline]
        fn $try_write(&mut self, value: $type) -> CursorResult<()> {
            self.try_write_value::<$type>(value)
        }
    };
}

/// Reads fixed-size values from any [`ByteView`].
pub trait ReadPrimitive: ByteView {
    /// Reads a `T` and advances by `size_of::<T>()`.
    ///
    /// # Panics
    ///
    /// When the view is shorter than `T`.
    #[inline]
    #[track_caller]
    fn read_value<T: Pod>(&mut self) -> T {
        let chunk = self.consume(size_of::<T>());
        bytemuck::pod_read_unaligned(&chunk)
    }

    /// Checked [`read_value`](ReadPrimitive::read_value); the view is left
    /// unchanged on failure.
    #[inline]
    fn try_read_value<T: Pod>(&mut self) -> CursorResult<T> {
        let chunk = self.try_consume(size_of::<T>())?;
        Ok(bytemuck::pod_read_unaligned(&chunk))
    }

    /// Decodes a `T` from the front of the view without consuming it.
    #[inline]
    fn peek_value<T: Pod>(&self) -> Option<T> {
        self.peek()
            .get(..size_of::<T>())
            .map(bytemuck::pod_read_unaligned)
    }

    impl_read_native!(read_u8, try_read_u8, u8);
    impl_read_native!(read_i8, try_read_i8, i8);
    impl_read_native!(read_u16, try_read_u16, u16);
    impl_read_native!(read_i16, try_read_i16, i16);
    impl_read_native!(read_u32, try_read_u32, u32);
    impl_read_native!(read_i32, try_read_i32, i32);
    impl_read_native!(read_u64, try_read_u64, u64);
    impl_read_native!(read_i64, try_read_i64, i64);
    impl_read_native!(read_f32, try_read_f32, f32);
    impl_read_native!(read_f64, try_read_f64, f64);
    impl_read_native!(read_decimal, try_read_decimal, Decimal);
    #[cfg(feature = "uuid")]
    impl_read_native!(read_uuid, try_read_uuid, uuid::Uuid);
}

impl<V: ByteView> ReadPrimitive for V {}

/// Writes fixed-size values into any [`ByteViewMut`].
pub trait WritePrimitive: ByteViewMut {
    /// Writes `value` and advances by `size_of::<T>()`.
    ///
    /// # Panics
    ///
    /// When the view is shorter than `T`. Nothing is written.
    #[inline]
    #[track_caller]
    fn write_value<T: Pod>(&mut self, value: T) {
        self.write_bytes(bytemuck::bytes_of(&value));
    }

    /// Checked [`write_value`](WritePrimitive::write_value); nothing is
    /// written on failure.
    #[inline]
    fn try_write_value<T: Pod>(&mut self, value: T) -> CursorResult<()> {
        self.try_write_bytes(bytemuck::bytes_of(&value))
    }

    impl_write_native!(write_u8, try_write_u8, u8);
    impl_write_native!(write_i8, try_write_i8, i8);
    impl_write_native!(write_u16, try_write_u16, u16);
    impl_write_native!(write_i16, try_write_i16, i16);
    impl_write_native!(write_u32, try_write_u32, u32);
    impl_write_native!(write_i32, try_write_i32, i32);
    impl_write_native!(write_u64, try_write_u64, u64);
    impl_write_native!(write_i64, try_write_i64, i64);
    impl_write_native!(write_f32, try_write_f32, f32);
    impl_write_native!(write_f64, try_write_f64, f64);
    impl_write_native!(write_decimal, try_write_decimal, Decimal);
    #[cfg(feature = "uuid")]
    impl_write_native!(write_uuid, try_write_uuid, uuid::Uuid);
}

impl<V: ByteViewMut> WritePrimitive for V {}
