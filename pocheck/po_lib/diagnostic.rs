//
// Copyright (c) 2026 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! Diagnostic catalog
//!
//! Every problem the parser reports has a stable code:
//!
//! | Code | Severity | Condition                                   |
//! |------|----------|---------------------------------------------|
//! | S001 | error    | `msgstr` after `msgid_plural`               |
//! | S002 | error    | `msgstr[N]` index out of sequence           |
//! | S003 | error    | `msgstr[N]` without `msgid_plural`          |
//! | S004 | error    | duplicate (msgid, msgctxt) pair             |
//! | F001 | warning  | duplicate header block                      |
//! | F002 | warning  | duplicate header key                        |
//! | F003 | warning  | duplicate flag in one entry                 |
//! | F004 | warning  | duplicate reference in one entry            |

use std::fmt;

use crate::po_lib::entry::Span;

/// Where each code is documented; the code is appended as a fragment
pub const ERROR_CODE_DOCS: &str = "https://github.com/a3510377/vscode-gettext/wiki/error-code";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => f.write_str("error"),
            Severity::Warning => f.write_str("warning"),
        }
    }
}

/// What went wrong, with the data needed to explain or fix it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// S001
    SingularAfterPlural,
    /// S002
    PluralIndex { expected: usize },
    /// S003
    MissingMsgidPlural,
    /// S004
    DuplicateMessage,
    /// F001
    DuplicateHeader,
    /// F002
    DuplicateHeaderKey { key: String },
    /// F003
    DuplicateFlag { flag: String },
    /// F004
    DuplicateReference { reference: String },
}

impl DiagnosticKind {
    pub fn code(&self) -> &'static str {
        match self {
            DiagnosticKind::SingularAfterPlural => "S001",
            DiagnosticKind::PluralIndex { .. } => "S002",
            DiagnosticKind::MissingMsgidPlural => "S003",
            DiagnosticKind::DuplicateMessage => "S004",
            DiagnosticKind::DuplicateHeader => "F001",
            DiagnosticKind::DuplicateHeaderKey { .. } => "F002",
            DiagnosticKind::DuplicateFlag { .. } => "F003",
            DiagnosticKind::DuplicateReference { .. } => "F004",
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            DiagnosticKind::SingularAfterPlural
            | DiagnosticKind::PluralIndex { .. }
            | DiagnosticKind::MissingMsgidPlural
            | DiagnosticKind::DuplicateMessage => Severity::Error,
            DiagnosticKind::DuplicateHeader
            | DiagnosticKind::DuplicateHeaderKey { .. }
            | DiagnosticKind::DuplicateFlag { .. }
            | DiagnosticKind::DuplicateReference { .. } => Severity::Warning,
        }
    }

    pub fn message(&self) -> String {
        match self {
            DiagnosticKind::SingularAfterPlural => {
                "msgid_plural is set, use msgstr[N] instead of msgstr".to_string()
            }
            DiagnosticKind::PluralIndex { expected } => {
                format!("plural index out of sequence, expected msgstr[{}]", expected)
            }
            DiagnosticKind::MissingMsgidPlural => {
                "msgstr[N] used without a preceding msgid_plural".to_string()
            }
            DiagnosticKind::DuplicateMessage => "duplicate message definition".to_string(),
            DiagnosticKind::DuplicateHeader => "duplicate header definition".to_string(),
            DiagnosticKind::DuplicateHeaderKey { key } => {
                format!("duplicate header key '{}'", key)
            }
            DiagnosticKind::DuplicateFlag { flag } => format!("duplicate flag '{}'", flag),
            DiagnosticKind::DuplicateReference { reference } => {
                format!("duplicate reference '{}'", reference)
            }
        }
    }
}

/// A secondary location attached to a diagnostic
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelatedInformation {
    pub message: String,
    pub location: Span,
}

/// A problem found while parsing a catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub range: Span,
    pub related: Vec<RelatedInformation>,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, range: Span) -> Self {
        Diagnostic {
            kind,
            range,
            related: Vec::new(),
        }
    }

    pub fn with_related(mut self, message: String, location: Span) -> Self {
        self.related.push(RelatedInformation { message, location });
        self
    }

    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn severity(&self) -> Severity {
        self.kind.severity()
    }

    pub fn message(&self) -> String {
        self.kind.message()
    }

    /// Documentation link for this diagnostic's code
    pub fn link(&self) -> String {
        format!("{}#{}", ERROR_CODE_DOCS, self.code().to_lowercase())
    }

    pub fn is_error(&self) -> bool {
        self.severity() == Severity::Error
    }
}

/// `LINE:COL: severity: message [CODE]`, 1-based
impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}: {} [{}]",
            self.range.start,
            self.severity(),
            self.message(),
            self.code()
        )
    }
}
