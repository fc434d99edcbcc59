//
// Copyright (c) 2026 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! Automatic fixes for plural keyword diagnostics

use crate::po_lib::diagnostic::{Diagnostic, DiagnosticKind};
use crate::po_lib::entry::Span;
use crate::po_lib::parser::parse;

/// Replace the text in `range` with `new_text`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextEdit {
    pub range: Span,
    pub new_text: String,
}

/// The edit that resolves `diagnostic`, if it has one.
///
/// - S001: `msgstr` becomes `msgstr[0]`
/// - S002: `msgstr[N]` becomes `msgstr[<expected>]`
pub fn fix(diagnostic: &Diagnostic) -> Option<TextEdit> {
    let new_text = match &diagnostic.kind {
        DiagnosticKind::SingularAfterPlural => "msgstr[0]".to_string(),
        DiagnosticKind::PluralIndex { expected } => format!("msgstr[{}]", expected),
        _ => return None,
    };

    Some(TextEdit {
        range: diagnostic.range,
        new_text,
    })
}

/// Apply every available fix to `text`, re-parsing until no fixable
/// diagnostic remains.  Line endings are preserved.
///
/// Rejected `msgstr[N]` lines of one run all expect the same index, so
/// a single pass can leave the run out of sequence.
pub fn apply_fixes(text: &str, diagnostics: &[Diagnostic]) -> String {
    let mut fixed = apply_edits(text, diagnostics);

    for _ in 0..fixed.lines().count() {
        let catalog = parse(&fixed);
        if !catalog.diagnostics.iter().any(|d| fix(d).is_some()) {
            break;
        }
        let next = apply_edits(&fixed, &catalog.diagnostics);
        if next == fixed {
            break;
        }
        fixed = next;
    }

    fixed
}

/// One pass of single-line edits; edits whose range no longer fits the
/// text are skipped
fn apply_edits(text: &str, diagnostics: &[Diagnostic]) -> String {
    let mut edits: Vec<TextEdit> = diagnostics
        .iter()
        .filter_map(fix)
        .filter(|e| e.range.start.line == e.range.end.line)
        .collect();
    // back to front, so earlier columns stay valid
    edits.sort_by(|a, b| b.range.start.cmp(&a.range.start));

    let mut lines: Vec<String> = text.split_inclusive('\n').map(str::to_string).collect();

    for edit in edits {
        let Some(line) = lines.get_mut(edit.range.start.line) else {
            continue;
        };
        let content = line.trim_end_matches(['\n', '\r']).len();
        let (start, end) = (edit.range.start.column, edit.range.end.column);
        if start > end
            || end > content
            || !line.is_char_boundary(start)
            || !line.is_char_boundary(end)
        {
            log::debug!("skipping stale edit at {}", edit.range.start);
            continue;
        }
        line.replace_range(start..end, &edit.new_text);
    }

    lines.concat()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fix_singular_after_plural() {
        let text = "msgid \"a\"\nmsgid_plural \"as\"\nmsgstr \"x\"\n";
        let catalog = parse(text);
        let edit = fix(&catalog.diagnostics[0]).unwrap();
        assert_eq!(edit.new_text, "msgstr[0]");

        let fixed = apply_fixes(text, &catalog.diagnostics);
        assert_eq!(fixed, "msgid \"a\"\nmsgid_plural \"as\"\nmsgstr[0] \"x\"\n");
        assert!(parse(&fixed).diagnostics.is_empty());
    }

    #[test]
    fn test_fix_plural_indices() {
        let text = "msgid \"a\"\r\nmsgid_plural \"as\"\r\nmsgstr[1] \"x\"\r\nmsgstr[5] \"y\"\r\n";
        let catalog = parse(text);
        assert_eq!(catalog.diagnostics.len(), 2);

        let fixed = apply_fixes(text, &catalog.diagnostics);
        assert_eq!(
            fixed,
            "msgid \"a\"\r\nmsgid_plural \"as\"\r\nmsgstr[0] \"x\"\r\nmsgstr[1] \"y\"\r\n"
        );
        assert!(parse(&fixed).diagnostics.is_empty());
    }

    #[test]
    fn test_fix_renumbers_whole_plural_run() {
        let text = "msgid \"a\"\nmsgid_plural \"as\"\nmsgstr[1] \"x\"\nmsgstr[2] \"y\"\nmsgstr[7] \"z\"\nmsgstr \"w\"\n";
        let fixed = apply_fixes(text, &parse(text).diagnostics);
        assert_eq!(
            fixed,
            "msgid \"a\"\nmsgid_plural \"as\"\nmsgstr[0] \"x\"\nmsgstr[1] \"y\"\nmsgstr[2] \"z\"\nmsgstr[3] \"w\"\n"
        );
        assert!(parse(&fixed).diagnostics.is_empty());
    }

    #[test]
    fn test_no_fix_for_duplicates() {
        let catalog = parse("msgid \"a\"\nmsgstr \"\"\nmsgid \"a\"\nmsgstr \"\"\n");
        assert_eq!(catalog.diagnostics.len(), 1);
        assert!(fix(&catalog.diagnostics[0]).is_none());
    }
}
