//
// Copyright (c) 2026 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! Result of parsing one document

use std::collections::BTreeMap;
use std::fmt;

use crate::po_lib::diagnostic::{Diagnostic, Severity};
use crate::po_lib::entry::{CatalogEntry, CatalogHeader};

/// Entries, header and diagnostics of one document
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    /// Entries in document order, header excluded
    pub entries: Vec<CatalogEntry>,
    pub header: Option<CatalogHeader>,
    pub diagnostics: Vec<Diagnostic>,
    /// Text of `#~` lines
    pub obsolete: Vec<String>,
}

/// Translation progress counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Statistics {
    pub total: usize,
    pub translated: usize,
    pub fuzzy: usize,
    pub untranslated: usize,
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} translated messages, {} fuzzy translations, {} untranslated messages.",
            self.translated, self.fuzzy, self.untranslated
        )
    }
}

impl Catalog {
    /// Count entries; a fuzzy entry is counted as fuzzy only
    pub fn statistics(&self) -> Statistics {
        let mut stats = Statistics {
            total: self.entries.len(),
            ..Statistics::default()
        };

        for entry in &self.entries {
            if entry.is_fuzzy() {
                stats.fuzzy += 1;
            } else if entry.is_translated() {
                stats.translated += 1;
            } else {
                stats.untranslated += 1;
            }
        }

        stats
    }

    /// Header `Language`, or `fallback` (usually the file stem)
    pub fn locale(&self, fallback: &str) -> String {
        self.header
            .as_ref()
            .and_then(|h| h.language())
            .unwrap_or(fallback)
            .to_string()
    }

    /// msgid -> translations.  The first entry wins when a msgid repeats
    /// under several contexts.
    pub fn dictionary(&self) -> BTreeMap<&str, Vec<&str>> {
        let mut dict = BTreeMap::new();
        for entry in &self.entries {
            dict.entry(entry.msgid()).or_insert_with(|| entry.translations());
        }
        dict
    }

    pub fn find(&self, msgid: &str, msgctxt: Option<&str>) -> Option<&CatalogEntry> {
        self.entries
            .iter()
            .find(|e| e.msgid() == msgid && e.msgctxt() == msgctxt)
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.is_error())
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity() == Severity::Warning)
    }

    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }
}

#[cfg(test)]
mod tests {
    use crate::po_lib::parse;

    const CATALOG: &str = r#"msgid ""
msgstr ""
"Language: es\n"

msgid "Hello"
msgstr "Hola"

#, fuzzy
msgid "Bye"
msgstr "Adios"

msgid "Empty"
msgstr ""

msgid "file"
msgid_plural "files"
msgstr[0] "archivo"
msgstr[1] ""

msgctxt "verb"
msgid "Hello"
msgstr "Saludar"
"#;

    #[test]
    fn test_statistics() {
        let stats = parse(CATALOG).statistics();
        assert_eq!(stats.total, 5);
        assert_eq!(stats.translated, 2);
        assert_eq!(stats.fuzzy, 1);
        assert_eq!(stats.untranslated, 2);
        assert_eq!(
            stats.to_string(),
            "2 translated messages, 1 fuzzy translations, 2 untranslated messages."
        );
    }

    #[test]
    fn test_locale() {
        assert_eq!(parse(CATALOG).locale("fr"), "es");
        assert_eq!(parse("msgid \"a\"\nmsgstr \"b\"\n").locale("fr"), "fr");
    }

    #[test]
    fn test_dictionary_and_find() {
        let catalog = parse(CATALOG);
        let dict = catalog.dictionary();
        assert_eq!(dict["Hello"], vec!["Hola"]);
        assert_eq!(dict["file"], vec!["archivo", ""]);

        let verb = catalog.find("Hello", Some("verb")).unwrap();
        assert_eq!(verb.msgstr(), Some("Saludar"));
        assert!(catalog.find("Hello", Some("noun")).is_none());
        assert!(!catalog.has_errors());
    }

    #[test]
    fn test_warnings_and_source_references() {
        let catalog = parse("#: src/a.c:3;9 src/a.c:3;9\nmsgid \"a\"\nmsgstr \"b\"\n");
        assert_eq!(catalog.warnings().count(), 1);
        assert_eq!(catalog.errors().count(), 0);

        let refs = catalog.entries[0].source_references();
        assert_eq!(refs.len(), 1);
        assert_eq!(refs[0].file, "src/a.c");
        assert_eq!(refs[0].lines, vec![3, 9]);
    }
}
