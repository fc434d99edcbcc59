//
// Copyright (c) 2026 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! Placeholder tokenizer
//!
//! Runs an entry's placeholder pattern over the decoded text of its
//! string fields and maps every match back to document positions.  A
//! field is matched as one string, so a placeholder split across two
//! continuation lines is still found.

use std::fmt;

use crate::po_lib::catalog::Catalog;
use crate::po_lib::entry::{CatalogEntry, Field, Position, Translation};
use crate::po_lib::escape::decode_mapped;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A whole placeholder
    Placeholder,
    /// Part of a brace field before its `arg` group
    LeadingSpec,
    /// The `arg` group of a brace field
    Argument,
    /// Part of a brace field after its `arg` group
    TrailingSpec,
}

impl TokenKind {
    /// Highlighting class name
    pub fn legend(self) -> &'static str {
        match self {
            TokenKind::Placeholder => "placeholder",
            TokenKind::LeadingSpec => "leading-spec",
            TokenKind::Argument => "argument",
            TokenKind::TrailingSpec => "trailing-spec",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.legend())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderToken {
    pub kind: TokenKind,
    pub start: Position,
    pub end: Position,
    /// Decoded text of the token
    pub text: String,
}

/// Decoded field text with the source position of every byte
struct MappedText {
    text: String,
    starts: Vec<Position>,
    ends: Vec<Position>,
}

impl MappedText {
    fn token(&self, kind: TokenKind, start: usize, end: usize) -> PlaceholderToken {
        PlaceholderToken {
            kind,
            start: self.starts[start],
            end: self.ends[end - 1],
            text: self.text[start..end].to_string(),
        }
    }
}

/// Tokenizer over one document's text
pub struct Tokenizer<'a> {
    lines: Vec<&'a str>,
}

impl<'a> Tokenizer<'a> {
    /// `text` must be the document the entries were parsed from
    pub fn new(text: &'a str) -> Self {
        Tokenizer {
            lines: text.lines().collect(),
        }
    }

    /// Tokens of msgid, msgid_plural and every translation, in that order
    pub fn entry_tokens(&self, entry: &CatalogEntry) -> Vec<PlaceholderToken> {
        let mut fields: Vec<&Field> = vec![&entry.msgid];
        fields.extend(entry.msgid_plural.as_ref());
        match &entry.translation {
            Translation::Singular(field) => fields.push(field),
            Translation::Plural(forms) => fields.extend(forms),
        }

        let pattern = entry.format_pattern();
        let mut tokens = Vec::new();

        for field in fields {
            let mapped = self.map_field(field);
            for caps in pattern.captures_iter(&mapped.text) {
                let Some(whole) = caps.get(0) else {
                    continue;
                };
                if whole.is_empty() {
                    continue;
                }

                match caps.name("arg").filter(|arg| !arg.is_empty()) {
                    Some(arg) => {
                        let parts = [
                            (TokenKind::LeadingSpec, whole.start(), arg.start()),
                            (TokenKind::Argument, arg.start(), arg.end()),
                            (TokenKind::TrailingSpec, arg.end(), whole.end()),
                        ];
                        tokens.extend(
                            parts
                                .into_iter()
                                .filter(|(_, start, end)| start < end)
                                .map(|(kind, start, end)| mapped.token(kind, start, end)),
                        );
                    }
                    None => {
                        tokens.push(mapped.token(
                            TokenKind::Placeholder,
                            whole.start(),
                            whole.end(),
                        ));
                    }
                }
            }
        }

        tokens
    }

    /// Tokens of every entry of a parsed catalog
    pub fn catalog_tokens(&self, catalog: &Catalog) -> Vec<PlaceholderToken> {
        catalog
            .entries
            .iter()
            .flat_map(|entry| self.entry_tokens(entry))
            .collect()
    }

    fn map_field(&self, field: &Field) -> MappedText {
        let mut mapped = MappedText {
            text: String::with_capacity(field.value.len()),
            starts: Vec::with_capacity(field.value.len()),
            ends: Vec::with_capacity(field.value.len()),
        };

        for segment in &field.segments {
            let line = segment.start_line;
            let Some(source) = self.lines.get(line) else {
                continue;
            };

            for decoded in decode_mapped(source) {
                mapped.text.push(decoded.ch);
                for _ in 0..decoded.ch.len_utf8() {
                    mapped.starts.push(Position::new(line, decoded.source.start));
                    mapped.ends.push(Position::new(line, decoded.source.end));
                }
            }
        }

        mapped
    }
}
