//
// Copyright (c) 2026 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! Placeholder syntax per format language
//!
//! Entries declare the language of their format strings with flags such
//! as `#, python-format`.  Each language maps to a regular expression that
//! matches its placeholders.  Brace-style patterns expose the format spec
//! of a field as the named group `arg`.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

/// printf conversion specification, including POSIX `%n$` positions
const C_FORMAT: &str = r"%(\d+\$)?[#0\- +']*[,;:_]?((-?\d+)|\*(-?\d+\$)?)?(\.((-?\d+)|\*(-?\d+\$)?)?)?(hh|h|ll|l|j|t|z|q|L|vh|vl|v|hv|hl)?[diouxXDOUeEfFgGaACcSspn%]";

/// Qt/KDE positional arguments: `%1`, `%L2`, `%n`
const QT_FORMAT: &str = r"(%L?(\d\d?|n))";

const PYTHON_PERCENT: &str =
    r"%(\([\w\s]*\))?[-+#0]*(\d+|\*)?(\.(\d+|\*))?([hlL])?[diouxXeEfFgGcrsab%]";

/// str.format() replacement fields and escaped braces
const PYTHON_BRACE: &str = r#"\{\{|\}\}|(\{\w*(\.[a-zA-Z_]\w*|\[[^\]'"]+\])*(?P<arg>(![rsa])?(:\w?[><=^]?[ +-]?#?\d*,?(\.\d+)?[bcdeEfFgGnosxX%]?))?\})"#;

const JAVASCRIPT_FORMAT: &str = r"%(\([\w\s]*\))?[#0+\- ]*[diouxXeEfFgGcrs%]";

const RUBY_FORMAT: &str =
    r"(%(\d+\$)?[-+ #0]{0,5}(\d+|\*)?(\.(\d+|\*))?(hh|ll|[hljztL])?[%csdioxXufFeEaAgGnp])";

const LUA_FORMAT: &str = r"(%[- 0]*\d*(\.\d+)?[sqdiouXxAaEefGgc])";

const OBJECT_PASCAL_FORMAT: &str = r"(%(\*:|\d*:)?-?(\*|\d+)?(\.\*|\.\d+)?[dDuUxXeEfFgGnNmMsSpP])";

const PHP_FORMAT: &str = r"(%(\d+\$)?[-+]{0,2}([ 0]|'.)?-?\d*(\..?\d+)?[%bcdeEfFgGosuxX])";

/// Like C, but a flag run may not open with `'` (`%'` is a literal quote)
const GCC_INTERNAL_FORMAT: &str = r"%(?:\d+\$[#0\- +']*|[#0\- +][#0\- +']*)?[,;:_]?((-?\d+)|\*(-?\d+\$)?)?(\.((-?\d+)|\*(-?\d+\$)?)?)?(hh|h|ll|l|j|t|z|q|L|vh|vl|v|hv|hl)?[diouxXDOUeEfFgGaACcSspn%]";

const BRACE_FIELD: &str = r"(\{[\w.-:,]+\})";

/// Languages with a known placeholder syntax
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum FormatLanguage {
    #[default]
    C,
    Python,
    PythonBrace,
    JavaScript,
    ObjC,
    Ruby,
    Lua,
    ObjectPascal,
    Php,
    GccInternal,
    CSharp,
    PerlBrace,
    Qt,
    QtPlural,
    Kde,
    KdeKuit,
}

impl FormatLanguage {
    pub const ALL: [FormatLanguage; 16] = [
        FormatLanguage::C,
        FormatLanguage::Python,
        FormatLanguage::PythonBrace,
        FormatLanguage::JavaScript,
        FormatLanguage::ObjC,
        FormatLanguage::Ruby,
        FormatLanguage::Lua,
        FormatLanguage::ObjectPascal,
        FormatLanguage::Php,
        FormatLanguage::GccInternal,
        FormatLanguage::CSharp,
        FormatLanguage::PerlBrace,
        FormatLanguage::Qt,
        FormatLanguage::QtPlural,
        FormatLanguage::Kde,
        FormatLanguage::KdeKuit,
    ];

    /// Flag tag without the `-format` suffix
    pub fn tag(self) -> &'static str {
        match self {
            FormatLanguage::C => "c",
            FormatLanguage::Python => "python",
            FormatLanguage::PythonBrace => "python-brace",
            FormatLanguage::JavaScript => "javascript",
            FormatLanguage::ObjC => "objc",
            FormatLanguage::Ruby => "ruby",
            FormatLanguage::Lua => "lua",
            FormatLanguage::ObjectPascal => "object-pascal",
            FormatLanguage::Php => "php",
            FormatLanguage::GccInternal => "gcc-internal",
            FormatLanguage::CSharp => "csharp",
            FormatLanguage::PerlBrace => "perl-brace",
            FormatLanguage::Qt => "qt",
            FormatLanguage::QtPlural => "qt-plural",
            FormatLanguage::Kde => "kde",
            FormatLanguage::KdeKuit => "kde-kuit",
        }
    }

    /// Regular expression source for this language
    pub fn source(self) -> String {
        match self {
            FormatLanguage::C => C_FORMAT.to_string(),
            FormatLanguage::Python => alternation(&[PYTHON_PERCENT, PYTHON_BRACE]),
            FormatLanguage::PythonBrace => PYTHON_BRACE.to_string(),
            FormatLanguage::JavaScript => JAVASCRIPT_FORMAT.to_string(),
            FormatLanguage::ObjC => alternation(&[C_FORMAT, "%@"]),
            FormatLanguage::Ruby => RUBY_FORMAT.to_string(),
            FormatLanguage::Lua => LUA_FORMAT.to_string(),
            FormatLanguage::ObjectPascal => OBJECT_PASCAL_FORMAT.to_string(),
            FormatLanguage::Php => PHP_FORMAT.to_string(),
            FormatLanguage::GccInternal => GCC_INTERNAL_FORMAT.to_string(),
            FormatLanguage::CSharp | FormatLanguage::PerlBrace => BRACE_FIELD.to_string(),
            FormatLanguage::Qt
            | FormatLanguage::QtPlural
            | FormatLanguage::Kde
            | FormatLanguage::KdeKuit => QT_FORMAT.to_string(),
        }
    }

    /// Compiled placeholder pattern, built once per process
    pub fn pattern(self) -> &'static Regex {
        &PATTERNS[self as usize]
    }

    /// Pick the format language for an entry from its flags.
    ///
    /// The first `<lang>-format` flag naming a known language wins, unless
    /// the same entry also carries `no-<lang>-format`.  Without a match the
    /// C syntax is used, even when the only format flag is a `no-` flag.
    pub fn select<'a, I>(flags: I) -> FormatLanguage
    where
        I: IntoIterator<Item = &'a str>,
    {
        let flags: Vec<&str> = flags.into_iter().collect();
        let suppressed = |tag: &str| {
            flags
                .iter()
                .filter_map(|f| f.strip_prefix("no-")?.strip_suffix("-format"))
                .any(|t| t == tag)
        };

        flags
            .iter()
            .filter(|f| !f.starts_with("no-"))
            .filter_map(|f| f.strip_suffix("-format"))
            .filter(|tag| !suppressed(*tag))
            .find_map(|tag| tag.parse().ok())
            .unwrap_or_default()
    }
}

impl fmt::Display for FormatLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownFormat(pub String);

impl fmt::Display for UnknownFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown format language: {}", self.0)
    }
}

impl std::error::Error for UnknownFormat {}

impl FromStr for FormatLanguage {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FormatLanguage::ALL
            .into_iter()
            .find(|lang| lang.tag() == s)
            .ok_or_else(|| UnknownFormat(s.to_string()))
    }
}

/// Combine patterns into one alternation, first match wins
pub fn alternation(patterns: &[&str]) -> String {
    patterns
        .iter()
        .map(|p| format!("(?:{p})"))
        .collect::<Vec<_>>()
        .join("|")
}

static PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    FormatLanguage::ALL
        .iter()
        .map(|lang| Regex::new(&lang.source()).expect("placeholder pattern must compile"))
        .collect()
});
