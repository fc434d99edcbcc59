//
// Copyright (c) 2026 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! PO catalog parsing and validation engine
//!
//! Data flows one way: document text is split into lines, each line is
//! classified, string-bearing lines are read together with their
//! continuation lines, and the parser state machine turns the result into
//! entries, an optional header and a list of diagnostics.  The tokenizer
//! then finds placeholders inside the parsed strings.

pub mod catalog;
pub mod diagnostic;
pub mod entry;
pub mod error;
pub mod escape;
pub mod fix;
pub mod format;
pub mod line;
pub mod parser;
pub mod reader;
pub mod repository;
pub mod tokens;

pub use catalog::Catalog;
pub use diagnostic::{Diagnostic, DiagnosticKind, Severity};
pub use entry::{CatalogEntry, CatalogHeader, Position, Span};
pub use parser::parse;
pub use repository::CatalogRepository;
