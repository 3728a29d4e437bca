// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! # bytecursor - advancing byte-view cursors
//!
//! Read and write native-layout primitives, plain-data records and UTF-8
//! strings sequentially over a caller-owned byte region. The view *is* the
//! cursor: every operation consumes bytes from its front.
//!
//! ## Quick Start
//!
//! ```rust
//! use bytecursor::prelude::*;
//!
//! let mut buffer = [0u8; 64];
//!
//! let mut writer: &mut [u8] = &mut buffer;
//! writer.write_u32(7);
//! writer.write_prefixed("sensor/temp", PrefixWidth::Byte);
//! writer.write_f64(21.5);
//!
//! let mut reader: &[u8] = &buffer;
//! assert_eq!(reader.read_u32(), 7);
//! assert_eq!(reader.read_prefixed(PrefixWidth::Byte), "sensor/temp");
//! assert_eq!(reader.read_f64(), 21.5);
//!
//! // Checked reads never move the view on failure
//! let mut short: &[u8] = &buffer[..3];
//! assert!(short.try_read_u32().is_err());
//! assert_eq!(short.remaining_len(), 3);
//! ```
//!
//! ## Architecture
//!
//! ```text
//! +-----------------------------+-----------------------------+
//! |  string (fixed / prefixed)  |  record (one / many)        |
//! +-----------------------------+-----------------------------+
//! |  primitive (ints, floats, Uuid, Decimal)                  |
//! +-----------------------------------------------------------+
//! |  view (consume / try_consume over &[u8], &mut [u8],       |
//! |        Bytes, BytesMut)                                   |
//! +-----------------------------------------------------------+
//! ```
//!
//! ## Access disciplines
//!
//! | Form       | Shortfall                  | View on failure |
//! |------------|----------------------------|-----------------|
//! | `read_*`   | panic (caller bug)         | unchanged       |
//! | `try_*`    | `Err(Insufficient)`        | unchanged       |
//!
//! Argument errors (prefix capacity, count overflow) panic on the unchecked
//! path and return a non-`Insufficient` [`CursorError`] on the checked one.
//!
//! ## Byte order
//!
//! Everything is native endian with no swapping. Producer and consumer must
//! run on platforms with the same byte order.

/// 16-byte scaled decimal with a fixed four-word layout.
pub mod decimal;
/// Error type shared by every checked operation.
pub mod error;
/// Length prefix widths for prefixed strings.
pub mod prefix;
/// Fixed-size primitive codec.
pub mod primitive;
/// Plain-data record codec.
pub mod record;
/// UTF-8 string codec.
pub mod string;
/// Advancing byte views (the cursor primitive).
pub mod view;

pub use decimal::Decimal;
pub use error::{CursorError, CursorResult};
pub use prefix::PrefixWidth;
pub use primitive::{ReadPrimitive, WritePrimitive};
pub use record::{ReadRecords, WriteRecords};
pub use string::{prefixed_len, ReadStr, ReadStrings, WriteStrings};
pub use view::{ByteView, ByteViewMut};

#[cfg(feature = "uuid")]
pub use uuid::Uuid;

/// Re-export bytes for convenience
#[cfg(feature = "bytes")]
pub use bytes::{Bytes, BytesMut};

/// Everything needed to drive a view: the extension traits and value types.
pub mod prelude {
    pub use crate::decimal::Decimal;
    pub use crate::error::{CursorError, CursorResult};
    pub use crate::prefix::PrefixWidth;
    pub use crate::primitive::{ReadPrimitive, WritePrimitive};
    pub use crate::record::{ReadRecords, WriteRecords};
    pub use crate::string::{prefixed_len, ReadStr, ReadStrings, WriteStrings};
    pub use crate::view::{ByteView, ByteViewMut};
}
