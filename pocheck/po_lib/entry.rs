//
// Copyright (c) 2026 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! Parsed catalog entries and the catalog header
//!
//! Every value keeps the source span it was read from, so diagnostics and
//! highlighting can point back into the document.  Lines and columns are
//! 0-based; columns are byte offsets within the physical line.

use std::fmt;

use regex::Regex;

use crate::po_lib::format::FormatLanguage;
use crate::po_lib::reader::PositionedValue;

/// A line/column position in a document
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Position { line, column }
    }
}

/// Printed 1-based, the way compilers and editors report locations
impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line + 1, self.column + 1)
    }
}

/// A half-open range between two positions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    pub fn new(start: Position, end: Position) -> Self {
        Span { start, end }
    }

    /// Span covering `start..end` on a single line
    pub fn on_line(line: usize, start: usize, end: usize) -> Self {
        Span::new(Position::new(line, start), Position::new(line, end))
    }
}

/// A value together with the span it was read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Located<T> {
    pub value: T,
    pub span: Span,
}

/// A complete (possibly multi-line) string field of an entry
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Field {
    /// Decoded value, all line fragments concatenated
    pub value: String,
    /// Whole lines covered by the field
    pub span: Span,
    /// One fragment per physical line, in order
    pub segments: Vec<PositionedValue>,
}

impl Field {
    /// Join line fragments into one field.  The span starts at column 0 of
    /// the first line and ends at the furthest column reached on the last
    /// line.
    pub fn from_segments(segments: Vec<PositionedValue>) -> Self {
        let start_line = segments.iter().map(|s| s.start_line).min().unwrap_or(0);
        let end_line = segments.iter().map(|s| s.end_line).max().unwrap_or(0);
        let end_column = segments
            .iter()
            .filter(|s| s.end_line == end_line)
            .map(|s| s.end_column)
            .max()
            .unwrap_or(0);

        Field {
            value: segments.iter().map(|s| s.value.as_str()).collect(),
            span: Span::new(Position::new(start_line, 0), Position::new(end_line, end_column)),
            segments,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

/// Translation side of an entry: a singular `msgstr` or `msgstr[N]` forms
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Translation {
    Singular(Field),
    Plural(Vec<Field>),
}

/// A `#:` reference split into file and line numbers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceReference {
    pub file: String,
    pub lines: Vec<u32>,
}

impl SourceReference {
    /// Parse `file:line`, `file:12;40` or `file:`
    pub fn parse(token: &str) -> Option<Self> {
        let (file, lines) = token.rsplit_once(':')?;
        if file.is_empty() {
            return None;
        }

        Some(SourceReference {
            file: file.to_string(),
            lines: lines
                .split(';')
                .filter_map(|n| n.parse().ok())
                .collect(),
        })
    }
}

/// A single message entry from a catalog
#[derive(Debug, Clone)]
pub struct CatalogEntry {
    /// Message context
    pub msgctxt: Option<Field>,
    /// Original string
    pub msgid: Field,
    /// Plural original
    pub msgid_plural: Option<Field>,
    /// Translation, singular or plural
    pub translation: Translation,
    /// Flags (#, fuzzy, c-format), every occurrence in declaration order
    pub flags: Vec<Located<String>>,
    /// References (#: file:line), every occurrence in declaration order
    pub references: Vec<Located<String>>,
    /// Translator comments (# ...)
    pub comments: Vec<String>,
    /// Extracted comments (#. ...)
    pub extracted_comments: Vec<String>,
    /// Previous msgid lines (#| ...)
    pub previous_msgid: Vec<String>,
    /// Placeholder syntax selected from the flags
    pub format: FormatLanguage,
}

impl CatalogEntry {
    pub fn msgid(&self) -> &str {
        &self.msgid.value
    }

    pub fn msgctxt(&self) -> Option<&str> {
        self.msgctxt.as_ref().map(|f| f.value.as_str())
    }

    pub fn msgid_plural(&self) -> Option<&str> {
        self.msgid_plural.as_ref().map(|f| f.value.as_str())
    }

    /// Singular translation, `None` for plural entries
    pub fn msgstr(&self) -> Option<&str> {
        match &self.translation {
            Translation::Singular(field) => Some(&field.value),
            Translation::Plural(_) => None,
        }
    }

    /// Plural translations, empty for singular entries
    pub fn msgstr_plural(&self) -> Vec<&str> {
        match &self.translation {
            Translation::Singular(_) => Vec::new(),
            Translation::Plural(forms) => forms.iter().map(|f| f.value.as_str()).collect(),
        }
    }

    /// All translation strings, singular or plural
    pub fn translations(&self) -> Vec<&str> {
        match &self.translation {
            Translation::Singular(field) => vec![field.value.as_str()],
            Translation::Plural(forms) => forms.iter().map(|f| f.value.as_str()).collect(),
        }
    }

    pub fn is_plural(&self) -> bool {
        self.msgid_plural.is_some()
    }

    /// Distinct flag names, in order of first appearance
    pub fn flags(&self) -> Vec<&str> {
        distinct(&self.flags)
    }

    pub fn has_flag(&self, name: &str) -> bool {
        self.flags.iter().any(|f| f.value == name)
    }

    pub fn is_fuzzy(&self) -> bool {
        self.has_flag("fuzzy")
    }

    /// Distinct reference tokens, in order of first appearance
    pub fn references(&self) -> Vec<&str> {
        distinct(&self.references)
    }

    pub fn source_references(&self) -> Vec<SourceReference> {
        self.references()
            .into_iter()
            .filter_map(SourceReference::parse)
            .collect()
    }

    /// Translated: a non-empty singular msgstr, or at least one plural
    /// form with every form non-empty
    pub fn is_translated(&self) -> bool {
        match &self.translation {
            Translation::Singular(field) => !field.is_empty(),
            Translation::Plural(forms) => {
                !forms.is_empty() && forms.iter().all(|f| !f.is_empty())
            }
        }
    }

    /// Compiled placeholder pattern for this entry
    pub fn format_pattern(&self) -> &'static Regex {
        self.format.pattern()
    }
}

fn distinct(items: &[Located<String>]) -> Vec<&str> {
    let mut out: Vec<&str> = Vec::with_capacity(items.len());
    for item in items {
        if !out.contains(&item.value.as_str()) {
            out.push(&item.value);
        }
    }
    out
}

/// One `Key: Value` line of the header block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderField {
    pub key: String,
    pub value: String,
    pub span: Span,
}

/// Catalog metadata from the entry with empty msgid
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogHeader {
    fields: Vec<HeaderField>,
}

impl CatalogHeader {
    /// Add a field; the first occurrence of a key wins
    pub fn insert(&mut self, field: HeaderField) -> bool {
        if self.get(&field.key).is_some() {
            return false;
        }
        self.fields.push(field);
        true
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.field(key).map(|f| f.value.as_str())
    }

    pub fn field(&self, key: &str) -> Option<&HeaderField> {
        self.fields.iter().find(|f| f.key == key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &HeaderField> {
        self.fields.iter()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn language(&self) -> Option<&str> {
        self.get("Language").filter(|l| !l.is_empty())
    }

    /// Get the charset from the Content-Type field
    pub fn charset(&self) -> Option<&str> {
        self.get("Content-Type")?
            .split(';')
            .find_map(|part| part.trim().strip_prefix("charset="))
            .map(str::trim)
    }

    pub fn plural_forms(&self) -> Option<&str> {
        self.get("Plural-Forms")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segment(value: &str, line: usize, end_column: usize) -> PositionedValue {
        PositionedValue {
            value: value.to_string(),
            start_line: line,
            start_column: 0,
            end_line: line,
            end_column,
        }
    }

    fn header_field(key: &str, value: &str) -> HeaderField {
        HeaderField {
            key: key.to_string(),
            value: value.to_string(),
            span: Span::default(),
        }
    }

    #[test]
    fn test_field_from_segments() {
        let field = Field::from_segments(vec![segment("foo", 3, 11), segment("bar", 4, 5)]);
        assert_eq!(field.value, "foobar");
        assert_eq!(field.span, Span::new(Position::new(3, 0), Position::new(4, 5)));
    }

    #[test]
    fn test_source_reference() {
        let r = SourceReference::parse("src/main.c:42").unwrap();
        assert_eq!(r.file, "src/main.c");
        assert_eq!(r.lines, vec![42]);

        let r = SourceReference::parse("lib/a.c:12;40").unwrap();
        assert_eq!(r.lines, vec![12, 40]);

        assert!(SourceReference::parse("nocolon").is_none());
    }

    #[test]
    fn test_header_first_key_wins() {
        let mut header = CatalogHeader::default();
        assert!(header.insert(header_field("Language", "es")));
        assert!(!header.insert(header_field("Language", "fr")));
        assert_eq!(header.get("Language"), Some("es"));
        assert_eq!(header.len(), 1);
    }

    #[test]
    fn test_header_charset() {
        let mut header = CatalogHeader::default();
        header.insert(header_field("Content-Type", "text/plain; charset=UTF-8"));
        header.insert(header_field("Plural-Forms", "nplurals=2; plural=(n != 1);"));
        assert_eq!(header.charset(), Some("UTF-8"));
        assert!(header.plural_forms().unwrap().contains("nplurals=2"));
        assert_eq!(header.language(), None);
    }

    #[test]
    fn test_position_display() {
        assert_eq!(Position::new(0, 4).to_string(), "1:5");
    }
}
