// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

#![no_main]

use bytecursor::prelude::*;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Some((&selector, payload)) = data.split_first() else {
        return;
    };
    let text = String::from_utf8_lossy(payload);
    let width = PrefixWidth::ALL[usize::from(selector) % 3];

    let Ok(framed) = prefixed_len(&text, width) else {
        assert!(text.len() > width.max_len());
        return;
    };

    // One byte short must write nothing
    let mut short = vec![0xEEu8; framed - 1];
    {
        let mut writer: &mut [u8] = &mut short;
        assert!(writer.try_write_prefixed(&text, width).is_err());
        assert_eq!(writer.remaining_len(), framed - 1);
    }
    assert!(short.iter().all(|b| *b == 0xEE));

    let mut buffer = vec![0u8; framed];
    let mut writer: &mut [u8] = &mut buffer;
    writer.write_prefixed(&text, width);
    assert!(writer.is_exhausted());

    let mut reader: &[u8] = &buffer;
    assert_eq!(reader.try_read_prefixed_str(width), Ok(&*text));
    assert!(reader.is_exhausted());
});
