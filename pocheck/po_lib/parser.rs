//
// Copyright (c) 2026 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! Catalog parser
//!
//! A single top-to-bottom pass over the document.  Comment, flag and
//! reference lines accumulate on the pending entry; `msgctxt`, `msgid`
//! and `msgid_plural` capture string values; `msgstr` closes a singular
//! entry, and a run of `msgstr[N]` lines is closed by the first line that
//! is not part of it (or by end of input).
//!
//! Problems are reported as diagnostics and never stop the scan.

use std::collections::HashMap;

use crate::po_lib::catalog::Catalog;
use crate::po_lib::diagnostic::{Diagnostic, DiagnosticKind};
use crate::po_lib::entry::{
    CatalogEntry, CatalogHeader, Field, HeaderField, Located, Position, Span, Translation,
};
use crate::po_lib::format::FormatLanguage;
use crate::po_lib::line::{classify, LineKind, LineToken};
use crate::po_lib::reader::{read_split, read_string};

/// Parse a whole document.  The result depends only on `text`.
pub fn parse(text: &str) -> Catalog {
    let lines: Vec<&str> = text.lines().collect();
    Parser::new(&lines).run()
}

/// Fields collected for the entry currently being read
#[derive(Debug, Default)]
struct Pending {
    msgctxt: Option<Field>,
    msgid: Option<Field>,
    msgid_plural: Option<Field>,
    forms: Vec<Field>,
    last_index: Option<usize>,
    /// At least one msgstr[N] line was seen for this entry
    in_plural: bool,
    flags: Vec<Located<String>>,
    references: Vec<Located<String>>,
    comments: Vec<String>,
    extracted_comments: Vec<String>,
    previous_msgid: Vec<String>,
}

impl Pending {
    /// Start of the first string field, if any
    fn start(&self) -> Option<Position> {
        [&self.msgctxt, &self.msgid, &self.msgid_plural]
            .into_iter()
            .flatten()
            .map(|f| f.span.start)
            .min()
    }

    fn is_header(&self) -> bool {
        let empty = |f: &Option<Field>| f.as_ref().is_none_or(Field::is_empty);
        self.msgid.as_ref().is_some_and(Field::is_empty)
            && empty(&self.msgctxt)
            && empty(&self.msgid_plural)
    }
}

struct Parser<'a> {
    lines: &'a [&'a str],
    index: usize,
    pending: Pending,
    entries: Vec<CatalogEntry>,
    /// (msgctxt, msgid) -> index of the first entry with that identity
    seen: HashMap<(Option<String>, String), usize>,
    header: Option<CatalogHeader>,
    diagnostics: Vec<Diagnostic>,
    obsolete: Vec<String>,
}

impl<'a> Parser<'a> {
    fn new(lines: &'a [&'a str]) -> Self {
        Parser {
            lines,
            index: 0,
            pending: Pending::default(),
            entries: Vec::new(),
            seen: HashMap::new(),
            header: None,
            diagnostics: Vec::new(),
            obsolete: Vec::new(),
        }
    }

    fn run(mut self) -> Catalog {
        while self.index < self.lines.len() {
            let line = self.lines[self.index];
            let kind = classify(line);

            if self.pending.in_plural
                && !matches!(kind, LineKind::MsgstrPlural(_) | LineKind::Msgstr)
            {
                self.close_plural();
            }

            match kind {
                LineKind::Comment(text) => {
                    self.pending.comments.push(text.to_string());
                    self.index += 1;
                }
                LineKind::ExtractedComment(text) => {
                    self.pending.extracted_comments.push(text.to_string());
                    self.index += 1;
                }
                LineKind::PreviousMsgid(text) => {
                    self.pending.previous_msgid.push(text.to_string());
                    self.index += 1;
                }
                LineKind::Flag(tokens) => {
                    self.add_flags(tokens);
                    self.index += 1;
                }
                LineKind::Reference(tokens) => {
                    self.add_references(tokens);
                    self.index += 1;
                }
                LineKind::Msgctxt => {
                    self.drop_incomplete();
                    self.pending.msgctxt = Some(self.read_field());
                }
                LineKind::Msgid => {
                    self.drop_incomplete();
                    let msgid = self.read_field();
                    self.check_duplicate(&msgid);
                    self.pending.msgid = Some(msgid);
                }
                LineKind::MsgidPlural => {
                    self.pending.msgid_plural = Some(self.read_field());
                }
                LineKind::Msgstr => self.msgstr(),
                LineKind::MsgstrPlural(token) => self.msgstr_plural(token),
                LineKind::Deleted(text) => {
                    self.obsolete.push(text.to_string());
                    self.index += 1;
                }
                LineKind::Blank | LineKind::Other => self.index += 1,
            }
        }

        if self.pending.in_plural {
            self.close_plural();
        } else if let Some(msgid) = &self.pending.msgid {
            log::debug!(
                "line {}: entry without msgstr at end of input dropped",
                msgid.span.start.line + 1
            );
        }

        Catalog {
            entries: self.entries,
            header: self.header,
            diagnostics: self.diagnostics,
            obsolete: self.obsolete,
        }
    }

    /// Capture the string value opened on the current line
    fn read_field(&mut self) -> Field {
        let (segments, next) = read_string(self.lines, self.index);
        self.index = next;
        Field::from_segments(segments)
    }

    /// A new msgctxt or msgid while an entry already has a msgid means
    /// the previous entry never got a msgstr
    fn drop_incomplete(&mut self) {
        if let Some(msgid) = &self.pending.msgid {
            log::debug!(
                "line {}: entry without msgstr dropped",
                msgid.span.start.line + 1
            );
            self.pending = Pending::default();
        }
    }

    fn add_flags(&mut self, tokens: Vec<LineToken>) {
        for token in tokens {
            let span = Span::on_line(self.index, token.start, token.end);
            if self.pending.flags.iter().any(|f| f.value == token.text) {
                self.diagnostics.push(Diagnostic::new(
                    DiagnosticKind::DuplicateFlag {
                        flag: token.text.to_string(),
                    },
                    span,
                ));
            }
            self.pending.flags.push(Located {
                value: token.text.to_string(),
                span,
            });
        }
    }

    fn add_references(&mut self, tokens: Vec<LineToken>) {
        for token in tokens {
            let span = Span::on_line(self.index, token.start, token.end);
            if self.pending.references.iter().any(|r| r.value == token.text) {
                self.diagnostics.push(Diagnostic::new(
                    DiagnosticKind::DuplicateReference {
                        reference: token.text.to_string(),
                    },
                    span,
                ));
            }
            self.pending.references.push(Located {
                value: token.text.to_string(),
                span,
            });
        }
    }

    /// S004: same msgid and msgctxt as an entry already finalized
    fn check_duplicate(&mut self, msgid: &Field) {
        let key = (
            self.pending.msgctxt.as_ref().map(|f| f.value.clone()),
            msgid.value.clone(),
        );
        let Some(&first) = self.seen.get(&key) else {
            return;
        };

        let prior = &self.entries[first];
        let related = format!("{}: {}", prior.msgid(), prior.translations().join(", "));
        self.diagnostics.push(
            Diagnostic::new(DiagnosticKind::DuplicateMessage, msgid.span)
                .with_related(related, prior.msgid.span),
        );
    }

    fn msgstr(&mut self) {
        let line = self.index;

        if self.pending.msgid_plural.is_some() {
            self.diagnostics.push(Diagnostic::new(
                DiagnosticKind::SingularAfterPlural,
                Span::on_line(line, 0, "msgstr".len()),
            ));
            let (_, next) = read_string(self.lines, line);
            self.index = next;
            let forms = std::mem::take(&mut self.pending.forms);
            self.finish(Translation::Plural(forms));
            return;
        }

        if self.pending.is_header() {
            if self.header.is_none() {
                self.read_header();
            } else {
                let msgstr = self.read_field();
                let start = self.pending.start().unwrap_or(Position::new(line, 0));
                self.diagnostics.push(Diagnostic::new(
                    DiagnosticKind::DuplicateHeader,
                    Span::new(start, msgstr.span.end),
                ));
                self.pending = Pending::default();
            }
            return;
        }

        let msgstr = self.read_field();
        self.finish(Translation::Singular(msgstr));
    }

    /// Split the header msgstr into `Key: Value` lines
    fn read_header(&mut self) {
        let (pieces, next) = read_split(self.lines, self.index, '\n');
        self.index = next;

        let mut header = CatalogHeader::default();
        for piece in pieces {
            let text = piece.value.trim();
            if text.is_empty() {
                continue;
            }
            let (key, value) = text.split_once(':').unwrap_or((text, ""));
            let field = HeaderField {
                key: key.trim().to_string(),
                value: value.trim().to_string(),
                span: Span::new(
                    Position::new(piece.start_line, piece.start_column),
                    Position::new(piece.end_line, piece.end_column),
                ),
            };
            let span = field.span;
            let key = field.key.clone();
            if !header.insert(field) {
                self.diagnostics.push(Diagnostic::new(
                    DiagnosticKind::DuplicateHeaderKey { key },
                    span,
                ));
            }
        }

        log::debug!("header with {} fields", header.len());
        self.header = Some(header);
        self.pending = Pending::default();
    }

    fn msgstr_plural(&mut self, token: &str) {
        let line = self.index;

        if self.pending.msgid_plural.is_none() {
            self.diagnostics.push(Diagnostic::new(
                DiagnosticKind::MissingMsgidPlural,
                Span::on_line(line, 0, self.lines[line].len()),
            ));
            let (_, next) = read_string(self.lines, line);
            self.index = next;
            return;
        }

        self.pending.in_plural = true;
        let expected = self.pending.last_index.map_or(0, |i| i + 1);
        let valid = !token.is_empty()
            && token.bytes().all(|b| b.is_ascii_digit())
            && token.parse::<usize>() == Ok(expected);

        if !valid {
            let keyword_end = "msgstr[".len() + token.len();
            let close = usize::from(self.lines[line][keyword_end..].starts_with(']'));
            self.diagnostics.push(Diagnostic::new(
                DiagnosticKind::PluralIndex { expected },
                Span::on_line(line, 0, keyword_end + close),
            ));
            let (_, next) = read_string(self.lines, line);
            self.index = next;
            return;
        }

        let form = self.read_field();
        self.pending.forms.push(form);
        self.pending.last_index = Some(expected);
    }

    /// End a msgstr[N] run; kept only if some index was accepted
    fn close_plural(&mut self) {
        if self.pending.forms.is_empty() {
            log::debug!("plural entry without valid msgstr[N] dropped");
            self.pending = Pending::default();
        } else {
            let forms = std::mem::take(&mut self.pending.forms);
            self.finish(Translation::Plural(forms));
        }
    }

    /// Turn the pending fields into an entry and reset
    fn finish(&mut self, translation: Translation) {
        let pending = std::mem::take(&mut self.pending);

        let Some(msgid) = pending.msgid else {
            log::debug!("line {}: msgstr without msgid dropped", self.index);
            return;
        };

        let format = FormatLanguage::select(pending.flags.iter().map(|f| f.value.as_str()));
        let entry = CatalogEntry {
            msgctxt: pending.msgctxt,
            msgid,
            msgid_plural: pending.msgid_plural,
            translation,
            flags: pending.flags,
            references: pending.references,
            comments: pending.comments,
            extracted_comments: pending.extracted_comments,
            previous_msgid: pending.previous_msgid,
            format,
        };
        log::trace!(
            "entry {:?} ({} format) at line {}",
            entry.msgid(),
            entry.format,
            entry.msgid.span.start.line + 1
        );

        let key = (entry.msgctxt().map(str::to_string), entry.msgid().to_string());
        self.seen.entry(key).or_insert(self.entries.len());
        self.entries.push(entry);
    }
}
