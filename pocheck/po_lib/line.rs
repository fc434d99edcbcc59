//
// Copyright (c) 2026 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! Line classification
//!
//! Each physical line of a catalog begins at most one construct:
//! - `#~` - obsolete (deleted) entry
//! - `#,` - flags (fuzzy, c-format)
//! - `#.` - extracted comments
//! - `#:` - references (file:line)
//! - `#|` - previous msgid
//! - `#`  - translator comments
//! - `msgctxt`, `msgid`, `msgid_plural`, `msgstr`, `msgstr[N]` followed
//!   by a quoted string
//!
//! The two-character comment prefixes are tested before bare `#`.

use std::sync::LazyLock;

use regex::Regex;

static FLAG_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\w-]+").expect("flag pattern must compile"));

static REFERENCE_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+:[\d;]*").expect("reference pattern must compile"));

/// A token of a flag or reference line with its byte columns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineToken<'a> {
    pub text: &'a str,
    pub start: usize,
    pub end: usize,
}

/// The construct a line begins
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    Comment(&'a str),
    ExtractedComment(&'a str),
    Reference(Vec<LineToken<'a>>),
    Flag(Vec<LineToken<'a>>),
    PreviousMsgid(&'a str),
    Msgctxt,
    Msgid,
    MsgidPlural,
    Msgstr,
    /// Raw text between the brackets of `msgstr[...]`
    MsgstrPlural(&'a str),
    Deleted(&'a str),
    Blank,
    Other,
}

pub fn classify(line: &str) -> LineKind<'_> {
    if line.trim().is_empty() {
        return LineKind::Blank;
    }

    if let Some(rest) = line.strip_prefix('#') {
        return if let Some(rest) = rest.strip_prefix('~') {
            LineKind::Deleted(rest.trim())
        } else if rest.starts_with(',') {
            LineKind::Flag(tokens(&FLAG_TOKEN, line, 2))
        } else if let Some(rest) = rest.strip_prefix('.') {
            LineKind::ExtractedComment(rest.trim())
        } else if rest.starts_with(':') {
            LineKind::Reference(tokens(&REFERENCE_TOKEN, line, 2))
        } else if let Some(rest) = rest.strip_prefix('|') {
            LineKind::PreviousMsgid(rest.trim())
        } else {
            LineKind::Comment(rest.trim())
        };
    }

    if keyword(line, "msgctxt") {
        LineKind::Msgctxt
    } else if keyword(line, "msgid_plural") {
        LineKind::MsgidPlural
    } else if keyword(line, "msgid") {
        LineKind::Msgid
    } else if let Some(rest) = line.strip_prefix("msgstr[") {
        LineKind::MsgstrPlural(rest.split(']').next().unwrap_or(rest))
    } else if keyword(line, "msgstr") {
        LineKind::Msgstr
    } else {
        LineKind::Other
    }
}

/// `keyword`, at least one blank, then an opening quote
fn keyword(line: &str, keyword: &str) -> bool {
    match line.strip_prefix(keyword) {
        Some(rest) => {
            rest.starts_with(char::is_whitespace) && rest.trim_start().starts_with('"')
        }
        None => false,
    }
}

/// Find pattern tokens after the comment prefix, with line columns
fn tokens<'a>(pattern: &Regex, line: &'a str, skip: usize) -> Vec<LineToken<'a>> {
    pattern
        .find_iter(&line[skip..])
        .map(|m| LineToken {
            text: &line[skip + m.start()..skip + m.end()],
            start: skip + m.start(),
            end: skip + m.end(),
        })
        .collect()
}
