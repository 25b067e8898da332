// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for parser crash safety testing.
//!
//! This target feeds arbitrary byte sequences to the definition parser and
//! asserts that it never panics. Every input must end in either a set of
//! definitions or a `ParseError`.
//!
//! # Success Criteria
//!
//! The parser passes fuzzing if:
//! - It never panics on any UTF-8 input
//! - Every emitted icon and toolbar has a non-empty id
//! - Every error position lies inside the input

#![no_main]

use libfuzzer_sys::fuzz_target;
use shapedef_core::definition::parse_definitions;

fuzz_target!(|data: &[u8]| {
    // Definition files are text; invalid UTF-8 is rejected before parsing
    if let Ok(source) = std::str::from_utf8(data) {
        match parse_definitions("fuzz.def", source) {
            Ok(definitions) => {
                assert!(definitions.icons.iter().all(|icon| !icon.id.is_empty()));
                assert!(definitions.toolbars.iter().all(|toolbar| !toolbar.id.is_empty()));
            }
            Err(err) => {
                assert!(err.pos().offset() as usize <= source.len());
            }
        }
    }
});
