// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Advancing byte views.
//!
//! A view is the cursor: consuming `n` bytes re-slices the view so that it
//! starts `n` bytes later and is `n` bytes shorter. There is no separate
//! offset to keep in sync.
//!
//! Two flavors implement the same contract:
//!
//! | Flavor  | Read-only  | Read/write   | Notes                              |
//! |---------|------------|--------------|------------------------------------|
//! | fixed   | `&[u8]`    | `&mut [u8]`  | borrows a caller-owned slice       |
//! | movable | `Bytes`    | `BytesMut`   | refcounted handle (`bytes` feature)|
//!
//! Every operation comes in two forms:
//!
//! - unchecked (`consume`, `skip`, `write_bytes`, ...) panics when the view
//!   is too short. The panic fires before any byte is touched.
//! - checked (`try_*`) returns [`CursorError::Insufficient`] and leaves the
//!   view exactly as it was.

use core::ops::Deref;

use crate::error::{check_remaining, fail, CursorError, CursorResult};

/// A shrinking window over a contiguous byte region.
pub trait ByteView: Sized {
    /// What `consume` hands back: a view of the consumed bytes.
    type Chunk: Deref<Target = [u8]>;

    /// Unconsumed byte count.
    fn remaining_len(&self) -> usize;

    /// Unconsumed bytes, without consuming them.
    fn peek(&self) -> &[u8];

    /// Detaches the first `count` bytes. Caller guarantees
    /// `count <= remaining_len()`.
    #[doc(hidden)]
    fn split_front(&mut self, count: usize) -> Self::Chunk;

    /// True once every byte has been consumed.
    #[inline]
    fn is_exhausted(&self) -> bool {
        self.remaining_len() == 0
    }

    /// Consumes `count` bytes and returns them.
    ///
    /// # Panics
    ///
    /// When fewer than `count` bytes remain. The view is not modified.
    #[inline]
    #[track_caller]
    fn consume(&mut self, count: usize) -> Self::Chunk {
        let remaining = self.remaining_len();
        if count > remaining {
            fail(CursorError::Insufficient {
                needed: count,
                remaining,
            });
        }
        self.split_front(count)
    }

    /// Consumes `count` bytes if available; otherwise leaves the view
    /// untouched and reports the shortfall.
    #[inline]
    fn try_consume(&mut self, count: usize) -> CursorResult<Self::Chunk> {
        check_remaining(count, self.remaining_len())?;
        Ok(self.split_front(count))
    }

    /// Consumes and discards `count` bytes.
    #[inline]
    #[track_caller]
    fn skip(&mut self, count: usize) {
        let _ = self.consume(count);
    }

    /// Checked [`skip`](ByteView::skip).
    #[inline]
    fn try_skip(&mut self, count: usize) -> CursorResult<()> {
        self.try_consume(count).map(|_| ())
    }
}

/// A view whose unconsumed bytes can be overwritten in place.
///
/// Writes never grow the region: they overwrite the front of the view and
/// then consume what they wrote.
pub trait ByteViewMut: ByteView {
    /// Unconsumed bytes, writable, without consuming them.
    fn peek_mut(&mut self) -> &mut [u8];

    /// Copies `src` to the front of the view and consumes it.
    ///
    /// # Panics
    ///
    /// When `src` is longer than the view. Nothing is written.
    #[inline]
    #[track_caller]
    fn write_bytes(&mut self, src: &[u8]) {
        let remaining = self.remaining_len();
        if src.len() > remaining {
            fail(CursorError::Insufficient {
                needed: src.len(),
                remaining,
            });
        }
        self.peek_mut()[..src.len()].copy_from_slice(src);
        self.split_front(src.len());
    }

    /// Checked [`write_bytes`](ByteViewMut::write_bytes): all of `src` is
    /// written, or nothing is.
    #[inline]
    fn try_write_bytes(&mut self, src: &[u8]) -> CursorResult<()> {
        check_remaining(src.len(), self.remaining_len())?;
        self.peek_mut()[..src.len()].copy_from_slice(src);
        self.split_front(src.len());
        Ok(())
    }

    /// Zeroes `count` bytes (reserved/padding fields) and consumes them.
    #[inline]
    #[track_caller]
    fn fill_zero(&mut self, count: usize) {
        let remaining = self.remaining_len();
        if count > remaining {
            fail(CursorError::Insufficient {
                needed: count,
                remaining,
            });
        }
        self.peek_mut()[..count].fill(0);
        self.split_front(count);
    }

    /// Checked [`fill_zero`](ByteViewMut::fill_zero).
    #[inline]
    fn try_fill_zero(&mut self, count: usize) -> CursorResult<()> {
        check_remaining(count, self.remaining_len())?;
        self.peek_mut()[..count].fill(0);
        self.split_front(count);
        Ok(())
    }
}

impl<'a> ByteView for &'a [u8] {
    type Chunk = &'a [u8];

    #[inline]
    fn remaining_len(&self) -> usize {
        self.len()
    }

    #[inline]
    fn peek(&self) -> &[u8] {
        self
    }

    #[inline]
    fn split_front(&mut self, count: usize) -> &'a [u8] {
        let view: &'a [u8] = *self;
        let (head, tail) = view.split_at(count);
        *self = tail;
        head
    }
}

impl<'a> ByteView for &'a mut [u8] {
    type Chunk = &'a mut [u8];

    #[inline]
    fn remaining_len(&self) -> usize {
        self.len()
    }

    #[inline]
    fn peek(&self) -> &[u8] {
        self
    }

    #[inline]
    fn split_front(&mut self, count: usize) -> &'a mut [u8] {
        let (head, tail) = core::mem::take(self).split_at_mut(count);
        *self = tail;
        head
    }
}

impl<'a> ByteViewMut for &'a mut [u8] {
    #[inline]
    fn peek_mut(&mut self) -> &mut [u8] {
        self
    }
}

#[cfg(feature = "bytes")]
mod movable {
    use bytes::{Bytes, BytesMut};

    use super::{ByteView, ByteViewMut};

    impl ByteView for Bytes {
        type Chunk = Bytes;

        #[inline]
        fn remaining_len(&self) -> usize {
            self.len()
        }

        #[inline]
        fn peek(&self) -> &[u8] {
            self
        }

        #[inline]
        fn split_front(&mut self, count: usize) -> Bytes {
            self.split_to(count)
        }
    }

    /// The view covers the handle's current length, not its capacity:
    /// `BytesMut::with_capacity(n)` is an empty view. Size write targets
    /// with `BytesMut::zeroed(n)`. Writes overwrite bytes and never extend
    /// the buffer.
    impl ByteView for BytesMut {
        type Chunk = BytesMut;

        #[inline]
        fn remaining_len(&self) -> usize {
            self.len()
        }

        #[inline]
        fn peek(&self) -> &[u8] {
            self
        }

        #[inline]
        fn split_front(&mut self, count: usize) -> BytesMut {
            self.split_to(count)
        }
    }

    impl ByteViewMut for BytesMut {
        #[inline]
        fn peek_mut(&mut self) -> &mut [u8] {
            self
        }
    }
}
