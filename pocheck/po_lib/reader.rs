//
// Copyright (c) 2026 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! Multi-line string values
//!
//! A string-bearing line may be followed by continuation lines that hold
//! nothing but a quoted literal (optionally indented by one tab):
//!
//! ```text
//! msgid ""
//! "first part "
//! "second part"
//! ```
//!
//! Reading starts at the opening line and stops before the first line
//! that is not a continuation, so the caller resumes there.

use crate::po_lib::escape::{decode, decode_mapped};

/// Decoded text of part of a string value and the span it occupies
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PositionedValue {
    pub value: String,
    pub start_line: usize,
    pub start_column: usize,
    pub end_line: usize,
    pub end_column: usize,
}

impl PositionedValue {
    /// A whole physical line
    fn line(index: usize, line: &str) -> Self {
        PositionedValue {
            value: decode(line),
            start_line: index,
            start_column: 0,
            end_line: index,
            end_column: line.len(),
        }
    }
}

pub fn is_continuation(line: &str) -> bool {
    line.strip_prefix('\t').unwrap_or(line).starts_with('"')
}

/// Read the value opened at `start` plus all its continuation lines.
///
/// Returns one value per physical line and the index of the first line
/// not consumed.
pub fn read_string(lines: &[&str], start: usize) -> (Vec<PositionedValue>, usize) {
    let mut values = vec![PositionedValue::line(start, lines[start])];
    let mut index = start + 1;

    while index < lines.len() && is_continuation(lines[index]) {
        values.push(PositionedValue::line(index, lines[index]));
        index += 1;
    }

    (values, index)
}

/// Read like [`read_string`], but cut the decoded text at every `split`
/// character instead of at line boundaries.
///
/// Each piece ends just after its `split` escape and starts at its first
/// character, which may be on an earlier line than the end.  Text after
/// the last split is returned as a final piece.
pub fn read_split(lines: &[&str], start: usize, split: char) -> (Vec<PositionedValue>, usize) {
    let mut values = Vec::new();
    let mut piece = PositionedValue::default();
    let mut open = false;
    let mut index = start;

    loop {
        for decoded in decode_mapped(lines[index]) {
            if !open {
                piece.start_line = index;
                piece.start_column = decoded.source.start;
                open = true;
            }
            piece.end_line = index;
            piece.end_column = decoded.source.end;

            if decoded.ch == split {
                values.push(std::mem::take(&mut piece));
                open = false;
            } else {
                piece.value.push(decoded.ch);
            }
        }

        if index + 1 < lines.len() && is_continuation(lines[index + 1]) {
            index += 1;
        } else {
            break;
        }
    }

    if open && !piece.value.is_empty() {
        values.push(piece);
    }

    (values, index + 1)
}
