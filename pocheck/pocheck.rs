//
// Copyright (c) 2026 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! pocheck - validate gettext message catalogs
//!
//! The pocheck utility parses portable object (.po) and template (.pot)
//! files, reports grammar and consistency problems with their exact
//! source locations, and can repair plural keyword mistakes in place.

use clap::Parser;
use pocheck::po_lib::error::Error;
use pocheck::po_lib::fix::apply_fixes;
use pocheck::po_lib::repository::read_document;
use pocheck::po_lib::tokens::Tokenizer;
use pocheck::po_lib::{Catalog, CatalogRepository, Severity};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::exit;

/// pocheck - validate gettext PO/POT message catalogs
#[derive(Parser)]
#[command(version, about = "pocheck - validate gettext PO/POT message catalogs")]
struct Args {
    #[arg(short = 's', help = "Print translation statistics for each file")]
    statistics: bool,

    #[arg(short = 't', help = "Print the placeholder tokens of every message")]
    tokens: bool,

    #[arg(short = 'w', help = "Treat warnings as errors")]
    warnings_as_errors: bool,

    #[arg(short = 'q', help = "Quiet mode - do not print warnings")]
    quiet: bool,

    #[arg(short = 'f', help = "Apply automatic fixes and rewrite the input files")]
    fix: bool,

    #[arg(short = 'D', action = clap::ArgAction::Append, help = "Add directory to search path for input files")]
    directories: Vec<PathBuf>,

    #[arg(required = true, help = "Input .po/.pot files, - for standard input")]
    files: Vec<PathBuf>,
}

fn main() {
    env_logger::init();

    let args = Args::parse();

    let mut exit_code = 0;
    let mut repository = CatalogRepository::new();

    for input_path in &args.files {
        let path = find_input_file(input_path, &args.directories);

        let text = match read_document(&path) {
            Ok(text) => text,
            Err(e) => {
                eprintln!("pocheck: {}", e);
                exit_code = 1;
                continue;
            }
        };

        let name = path.display().to_string();
        let catalog = repository.update(name.clone(), &text);

        if report(&name, catalog, &args) {
            exit_code = 1;
        }

        if args.tokens {
            print_tokens(&name, &text, catalog);
        }

        if args.statistics {
            let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("");
            println!("{}: {}: {}", name, catalog.locale(stem), catalog.statistics());
        }

        if args.fix {
            if let Err(e) = write_fixes(&path, &text, catalog) {
                eprintln!("pocheck: {}", e);
                exit_code = 1;
            }
        }
    }

    exit(exit_code);
}

/// Find an input file, searching directories if needed
fn find_input_file(path: &PathBuf, directories: &[PathBuf]) -> PathBuf {
    if path.as_os_str() == "-" || path.exists() {
        return path.clone();
    }

    for dir in directories {
        let full_path = dir.join(path);
        if full_path.exists() {
            return full_path;
        }
    }

    path.clone()
}

/// Print diagnostics to stderr; returns true if the file fails the check
fn report(name: &str, catalog: &Catalog, args: &Args) -> bool {
    let mut failed = false;

    for diag in &catalog.diagnostics {
        let is_warning = diag.severity() == Severity::Warning;
        if diag.is_error() || args.warnings_as_errors {
            failed = true;
        }
        if is_warning && args.quiet {
            continue;
        }

        eprintln!("{}:{}", name, diag);
        for related in &diag.related {
            eprintln!("{}:{}: note: {}", name, related.location.start, related.message);
        }
    }

    failed
}

fn print_tokens(name: &str, text: &str, catalog: &Catalog) {
    let tokenizer = Tokenizer::new(text);
    for token in tokenizer.catalog_tokens(catalog) {
        println!("{}:{}: {}: {}", name, token.start, token.kind, token.text);
    }
}

/// Rewrite the file with all available fixes; stdin input goes to stdout
fn write_fixes(path: &Path, text: &str, catalog: &Catalog) -> Result<(), Error> {
    let fixed = apply_fixes(text, &catalog.diagnostics);

    if path.as_os_str() == "-" {
        print!("{}", fixed);
        return Ok(());
    }

    if fixed != text {
        log::info!("{}: writing fixes", path.display());
        fs::write(path, fixed).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
    }

    Ok(())
}
