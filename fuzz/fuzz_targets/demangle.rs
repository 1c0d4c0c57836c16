#![no_main]

//! Fuzz target for namespaced package name decoding.
//!
//! Decoding must never panic or leave a raw hyphen behind.

use importfix_mangle::{demangle, mangle};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|name: &str| {
    let plain = demangle(name);
    assert!(!plain.contains('-'));

    let _ = demangle(&mangle(name));
});
