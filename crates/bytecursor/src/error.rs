// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Cursor error types.
//!
//! Two failure classes share one enum:
//!
//! - [`CursorError::Insufficient`] is the only recoverable condition: the view
//!   is shorter than the operation needs. Checked (`try_*`) operations return
//!   it and leave the view untouched.
//! - Every other variant is an argument error (capacity, count or content
//!   violation). Checked operations return it before touching the view;
//!   unchecked operations panic with its rendered message.

use thiserror::Error;

use crate::prefix::PrefixWidth;

/// Result type for checked cursor operations.
pub type CursorResult<T> = core::result::Result<T, CursorError>;

/// Cursor operation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CursorError {
    /// Not enough unconsumed bytes left in the view.
    #[error("insufficient bytes: needed {needed}, remaining {remaining}")]
    Insufficient { needed: usize, remaining: usize },

    /// Encoded string length exceeds what the prefix width can represent.
    #[error("string of {len} bytes does not fit a {width} length prefix (max {})", .width.max_len())]
    PrefixOverflow { width: PrefixWidth, len: usize },

    /// `count * size` does not fit in `usize`.
    #[error("record span overflows: {count} records of {size} bytes")]
    CountOverflow { count: usize, size: usize },

    /// Record count cannot be inferred from the view for a zero-sized type.
    #[error("cannot infer record count for a zero-sized type")]
    ZeroSizedRecord,

    /// Payload is not valid UTF-8 (strict borrowed reads only).
    #[error("invalid UTF-8: {0}")]
    InvalidUtf8(#[from] core::str::Utf8Error),

    /// Decimal parts outside the representable range.
    #[error("invalid decimal: {reason}")]
    InvalidDecimal { reason: &'static str },
}

impl CursorError {
    /// True for the recoverable length shortfall, false for argument errors.
    pub fn is_insufficient(&self) -> bool {
        matches!(self, CursorError::Insufficient { .. })
    }
}

/// Fails with [`CursorError::Insufficient`] when `needed` exceeds `remaining`.
#[inline]
pub(crate) fn check_remaining(needed: usize, remaining: usize) -> CursorResult<()> {
    if needed > remaining {
        log::trace!(
            "[cursor] rejected: needed {} bytes, {} remaining",
            needed,
            remaining
        );
        return Err(CursorError::Insufficient { needed, remaining });
    }
    Ok(())
}

/// Unchecked-path failure: contract violations are caller bugs.
#[cold]
#[track_caller]
pub(crate) fn fail(err: CursorError) -> ! {
    panic!("{}", err)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_error_display_variants() {
        let err = CursorError::Insufficient {
            needed: 8,
            remaining: 3,
        };
        assert_eq!(err.to_string(), "insufficient bytes: needed 8, remaining 3");

        let err = CursorError::PrefixOverflow {
            width: PrefixWidth::Byte,
            len: 256,
        };
        assert_eq!(
            err.to_string(),
            "string of 256 bytes does not fit a byte length prefix (max 255)"
        );

        let err = CursorError::CountOverflow {
            count: usize::MAX,
            size: 2,
        };
        assert!(err.to_string().starts_with("record span overflows"));
    }

    #[test]
    fn test_only_shortfall_is_insufficient() {
        assert!(CursorError::Insufficient {
            needed: 1,
            remaining: 0
        }
        .is_insufficient());
        assert!(!CursorError::ZeroSizedRecord.is_insufficient());
        assert!(!CursorError::PrefixOverflow {
            width: PrefixWidth::Short,
            len: 65536
        }
        .is_insufficient());
    }

    #[test]
    fn test_check_remaining_boundary() {
        assert!(check_remaining(4, 4).is_ok());
        assert_eq!(
            check_remaining(5, 4),
            Err(CursorError::Insufficient {
                needed: 5,
                remaining: 4
            })
        );
    }

    #[test]
    #[should_panic(expected = "insufficient bytes: needed 2, remaining 1")]
    fn test_fail_panics_with_rendered_error() {
        fail(CursorError::Insufficient {
            needed: 2,
            remaining: 1,
        });
    }
}
