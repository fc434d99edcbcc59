//
// Copyright (c) 2026 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! posixutils-pocheck library
//!
//! This library provides the engine behind the `pocheck` utility:
//! - parsing .po/.pot catalogs into position-addressable entries
//! - validating plural sequencing, duplicates and header consistency
//! - classifying printf-style placeholders for highlighting

pub mod po_lib;
