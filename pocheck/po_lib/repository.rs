//
// Copyright (c) 2026 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! Parsed documents keyed by identity
//!
//! The repository is owned by the caller.  Every update re-parses the
//! full text and replaces the stored catalog; nothing is patched in place.

use std::collections::HashMap;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

use crate::po_lib::catalog::Catalog;
use crate::po_lib::error::{Error, Result};
use crate::po_lib::parser::parse;

#[derive(Debug, Default)]
pub struct CatalogRepository {
    documents: HashMap<String, Catalog>,
}

impl CatalogRepository {
    pub fn new() -> Self {
        CatalogRepository::default()
    }

    /// Parse `text` and store the result under `id`
    pub fn update(&mut self, id: impl Into<String>, text: &str) -> &Catalog {
        let id = id.into();
        let catalog = parse(text);
        log::debug!(
            "{}: {} entries, {} diagnostics",
            id,
            catalog.entries.len(),
            catalog.diagnostics.len()
        );

        self.documents.insert(id.clone(), catalog);
        &self.documents[&id]
    }

    /// Read `path` (or stdin for `-`) and store it under its path
    pub fn load(&mut self, path: &Path) -> Result<&Catalog> {
        let text = read_document(path)?;
        Ok(self.update(path.display().to_string(), &text))
    }

    pub fn get(&self, id: &str) -> Option<&Catalog> {
        self.documents.get(id)
    }

    pub fn remove(&mut self, id: &str) -> Option<Catalog> {
        self.documents.remove(id)
    }

    pub fn clear(&mut self) {
        self.documents.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Catalog)> {
        self.documents.iter().map(|(id, c)| (id.as_str(), c))
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

/// Read a whole document as UTF-8; `-` reads standard input
pub fn read_document(path: &Path) -> Result<String> {
    let io_error = |source| Error::Io {
        path: path.to_path_buf(),
        source,
    };

    let bytes = if path.as_os_str() == "-" {
        let mut buf = Vec::new();
        io::stdin().read_to_end(&mut buf).map_err(io_error)?;
        buf
    } else {
        fs::read(path).map_err(io_error)?
    };

    String::from_utf8(bytes).map_err(|_| Error::Encoding {
        path: path.to_path_buf(),
    })
}
