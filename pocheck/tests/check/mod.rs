//
// Copyright (c) 2026 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

use crate::testing::{create_temp_po_file, path_arg, run_test, TestPlan};

/// A clean catalog produces no output
#[test]
fn test_pocheck_clean() {
    let po_content = r#"msgid ""
msgstr ""
"Language: es\n"
"Content-Type: text/plain; charset=UTF-8\n"

msgid "Hello"
msgstr "Hola"

msgid "One file"
msgid_plural "%d files"
msgstr[0] "Un archivo"
msgstr[1] "%d archivos"
"#;

    let (_temp_dir, po_path) = create_temp_po_file(po_content);

    run_test(TestPlan {
        args: vec![path_arg(&po_path)],
        stdin_data: String::new(),
        expected_out: String::new(),
        expected_err: String::new(),
        expected_exit_code: 0,
    });
}

/// Plural index errors are reported with the expected index
#[test]
fn test_pocheck_plural_index() {
    let po_content = "msgid \"a\"\nmsgid_plural \"as\"\nmsgstr[0] \"x\"\nmsgstr[2] \"y\"\n";

    run_test(TestPlan {
        args: vec![String::from("-")],
        stdin_data: String::from(po_content),
        expected_out: String::new(),
        expected_err: String::from(
            "-:4:1: error: plural index out of sequence, expected msgstr[1] [S002]\n",
        ),
        expected_exit_code: 1,
    });
}

/// Duplicate messages point back at the first definition
#[test]
fn test_pocheck_duplicate_message() {
    let po_content = "msgid \"Hello\"\nmsgstr \"Hola\"\n\nmsgid \"Hello\"\nmsgstr \"Buenas\"\n";

    run_test(TestPlan {
        args: vec![String::from("-")],
        stdin_data: String::from(po_content),
        expected_out: String::new(),
        expected_err: String::from(
            "-:4:1: error: duplicate message definition [S004]\n-:1:1: note: Hello: Hola\n",
        ),
        expected_exit_code: 1,
    });
}

/// Messages with different contexts are not duplicates
#[test]
fn test_pocheck_context() {
    let po_content = "msgctxt \"a\"\nmsgid \"x\"\nmsgstr \"\"\n\nmsgctxt \"b\"\nmsgid \"x\"\nmsgstr \"\"\n";

    run_test(TestPlan {
        args: vec![String::from("-")],
        stdin_data: String::from(po_content),
        expected_out: String::new(),
        expected_err: String::new(),
        expected_exit_code: 0,
    });
}

/// msgstr[N] without msgid_plural is an error
#[test]
fn test_pocheck_missing_msgid_plural() {
    run_test(TestPlan {
        args: vec![String::from("-")],
        stdin_data: String::from("msgid \"a\"\nmsgstr[0] \"x\"\n"),
        expected_out: String::new(),
        expected_err: String::from(
            "-:2:1: error: msgstr[N] used without a preceding msgid_plural [S003]\n",
        ),
        expected_exit_code: 1,
    });
}

/// Missing input files are reported and fail the run
#[test]
fn test_pocheck_missing_file() {
    let output = crate::testing::run_pocheck(&[String::from("/nonexistent/none.po")], "");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.starts_with("pocheck: /nonexistent/none.po: "));
    assert_eq!(output.status.code(), Some(1));
}

/// Input files are found through -D search directories
#[test]
fn test_pocheck_search_directory() {
    let (temp_dir, _po_path) = create_temp_po_file("msgid \"a\"\nmsgstr[0] \"x\"\n");

    run_test(TestPlan {
        args: vec![
            String::from("-D"),
            path_arg(temp_dir.path()),
            String::from("test.po"),
        ],
        stdin_data: String::new(),
        expected_out: String::new(),
        expected_err: format!(
            "{}:2:1: error: msgstr[N] used without a preceding msgid_plural [S003]\n",
            temp_dir.path().join("test.po").display()
        ),
        expected_exit_code: 1,
    });
}
