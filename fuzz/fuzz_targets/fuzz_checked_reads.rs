// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

#![no_main]

use bytecursor::prelude::*;
use libfuzzer_sys::fuzz_target;

/// Runs one checked read picked by `op`; `Err` must leave the view as it was.
fn step(view: &mut &[u8], op: u8) -> bool {
    let before: &[u8] = *view;
    let failed = match op % 12 {
        0 => view.try_read_u8().is_err(),
        1 => view.try_read_i16().is_err(),
        2 => view.try_read_u32().is_err(),
        3 => view.try_read_f64().is_err(),
        4 => view.try_read_decimal().is_err(),
        5 => view.try_read_uuid().is_err(),
        6 => view.try_read_many::<u32>(Some(usize::from(op >> 4))).is_err(),
        7 => view.try_read_many::<[u8; 3]>(None).is_err(),
        8 => view.try_read_string(usize::from(op >> 4)).is_err(),
        9 => view.try_read_prefixed(PrefixWidth::ALL[usize::from(op >> 4) % 3]).is_err(),
        10 => view.try_read_prefixed_str(PrefixWidth::ALL[usize::from(op >> 4) % 3]).is_err(),
        _ => view.try_skip(usize::from(op >> 4)).is_err(),
    };
    if failed {
        assert_eq!(view.len(), before.len());
        assert_eq!(view.as_ptr(), before.as_ptr());
    }
    !failed
}

fuzz_target!(|data: &[u8]| {
    // [control_len][control bytes][payload]
    let Some((&control_len, rest)) = data.split_first() else {
        return;
    };
    let split = usize::from(control_len).min(rest.len());
    let (control, payload) = rest.split_at(split);

    let mut view: &[u8] = payload;
    for &op in control {
        if !step(&mut view, op) {
            break;
        }
    }
});
