//
// Copyright (c) 2026 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

use crate::testing::{create_temp_po_file, path_arg, run_test, TestPlan};
use std::fs;

/// -f rewrites msgstr after msgid_plural to msgstr[0]
#[test]
fn test_pocheck_fix_in_place() {
    let po_content = "msgid \"a\"\nmsgid_plural \"as\"\nmsgstr \"x\"\n";
    let (_temp_dir, po_path) = create_temp_po_file(po_content);

    run_test(TestPlan {
        args: vec![String::from("-f"), path_arg(&po_path)],
        stdin_data: String::new(),
        expected_out: String::new(),
        expected_err: format!(
            "{}:3:1: error: msgid_plural is set, use msgstr[N] instead of msgstr [S001]\n",
            po_path.display()
        ),
        expected_exit_code: 1,
    });

    let fixed = fs::read_to_string(&po_path).unwrap();
    assert_eq!(fixed, "msgid \"a\"\nmsgid_plural \"as\"\nmsgstr[0] \"x\"\n");

    // the fixed file checks clean
    run_test(TestPlan {
        args: vec![path_arg(&po_path)],
        stdin_data: String::new(),
        expected_out: String::new(),
        expected_err: String::new(),
        expected_exit_code: 0,
    });
}

/// -f on standard input prints the fixed catalog
#[test]
fn test_pocheck_fix_stdin() {
    let po_content = "msgid \"a\"\nmsgid_plural \"as\"\nmsgstr[1] \"x\"\n";

    run_test(TestPlan {
        args: vec![String::from("-q"), String::from("-f"), String::from("-")],
        stdin_data: String::from(po_content),
        expected_out: String::from("msgid \"a\"\nmsgid_plural \"as\"\nmsgstr[0] \"x\"\n"),
        expected_err: String::from(
            "-:3:1: error: plural index out of sequence, expected msgstr[0] [S002]\n",
        ),
        expected_exit_code: 1,
    });
}

/// -f numbers a whole out-of-sequence plural run from 0
#[test]
fn test_pocheck_fix_plural_run() {
    let po_content = "msgid \"a\"\nmsgid_plural \"as\"\nmsgstr[1] \"x\"\nmsgstr[2] \"y\"\n";

    run_test(TestPlan {
        args: vec![String::from("-f"), String::from("-")],
        stdin_data: String::from(po_content),
        expected_out: String::from(
            "msgid \"a\"\nmsgid_plural \"as\"\nmsgstr[0] \"x\"\nmsgstr[1] \"y\"\n",
        ),
        expected_err: String::from(
            "-:3:1: error: plural index out of sequence, expected msgstr[0] [S002]\n\
             -:4:1: error: plural index out of sequence, expected msgstr[0] [S002]\n",
        ),
        expected_exit_code: 1,
    });
}
