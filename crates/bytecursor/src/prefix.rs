// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Length prefix widths for self-describing strings.
//!
//! | Width   | Prefix bytes | Max payload length |
//! |---------|--------------|--------------------|
//! | `Byte`  | 1            | 255                |
//! | `Short` | 2            | 65 535             |
//! | `Int`   | 4            | 4 294 967 295      |
//!
//! The prefix is stored in native byte order, like every other primitive.

use std::fmt;

use crate::error::{CursorError, CursorResult};

/// Width of the length field preceding a prefixed string payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PrefixWidth {
    /// 1-byte `u8` prefix.
    #[default]
    Byte,
    /// 2-byte `u16` prefix.
    Short,
    /// 4-byte `u32` prefix.
    Int,
}

impl PrefixWidth {
    /// All widths, narrowest first.
    pub const ALL: [PrefixWidth; 3] = [PrefixWidth::Byte, PrefixWidth::Short, PrefixWidth::Int];

    /// Size of the prefix field itself.
    #[inline]
    pub const fn byte_len(self) -> usize {
        match self {
            PrefixWidth::Byte => 1,
            PrefixWidth::Short => 2,
            PrefixWidth::Int => 4,
        }
    }

    /// Largest payload length this prefix can represent.
    #[inline]
    pub const fn max_len(self) -> usize {
        match self {
            PrefixWidth::Byte => u8::MAX as usize,
            PrefixWidth::Short => u16::MAX as usize,
            PrefixWidth::Int => u32::MAX as usize,
        }
    }

    /// Rejects payload lengths the prefix cannot carry.
    pub fn check_capacity(self, len: usize) -> CursorResult<()> {
        if len > self.max_len() {
            log::debug!(
                "[PrefixWidth::check_capacity] {} bytes exceed {} prefix",
                len,
                self
            );
            return Err(CursorError::PrefixOverflow { width: self, len });
        }
        Ok(())
    }

    /// Total bytes occupied by a prefixed payload of `len` bytes.
    ///
    /// Returns `None` when the sum overflows `usize`.
    #[inline]
    pub const fn framed_len(self, len: usize) -> Option<usize> {
        self.byte_len().checked_add(len)
    }
}

impl fmt::Display for PrefixWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrefixWidth::Byte => write!(f, "byte"),
            PrefixWidth::Short => write!(f, "short"),
            PrefixWidth::Int => write!(f, "int"),
        }
    }
}
