//
// Copyright (c) 2026 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

use crate::testing::{run_test, TestPlan};

const DUPLICATE_FLAG: &str = "#, fuzzy, fuzzy\nmsgid \"a\"\nmsgstr \"b\"\n";

/// Warnings are printed but do not fail the run
#[test]
fn test_pocheck_warning() {
    run_test(TestPlan {
        args: vec![String::from("-")],
        stdin_data: String::from(DUPLICATE_FLAG),
        expected_out: String::new(),
        expected_err: String::from("-:1:11: warning: duplicate flag 'fuzzy' [F003]\n"),
        expected_exit_code: 0,
    });
}

/// -w turns warnings into failures
#[test]
fn test_pocheck_warnings_as_errors() {
    run_test(TestPlan {
        args: vec![String::from("-w"), String::from("-")],
        stdin_data: String::from(DUPLICATE_FLAG),
        expected_out: String::new(),
        expected_err: String::from("-:1:11: warning: duplicate flag 'fuzzy' [F003]\n"),
        expected_exit_code: 1,
    });
}

/// -q hides warnings
#[test]
fn test_pocheck_quiet() {
    run_test(TestPlan {
        args: vec![String::from("-q"), String::from("-")],
        stdin_data: String::from(DUPLICATE_FLAG),
        expected_out: String::new(),
        expected_err: String::new(),
        expected_exit_code: 0,
    });
}

/// -s prints counts and the header language
#[test]
fn test_pocheck_statistics() {
    let po_content = r#"msgid ""
msgstr ""
"Language: de\n"

msgid "Hello"
msgstr "Hallo"

#, fuzzy
msgid "Bye"
msgstr "Tschuess"

msgid "Empty"
msgstr ""
"#;

    run_test(TestPlan {
        args: vec![String::from("-s"), String::from("-")],
        stdin_data: String::from(po_content),
        expected_out: String::from(
            "-: de: 1 translated messages, 1 fuzzy translations, 1 untranslated messages.\n",
        ),
        expected_err: String::new(),
        expected_exit_code: 0,
    });
}

/// -t lists placeholder tokens with their positions
#[test]
fn test_pocheck_tokens() {
    let po_content = "#, python-format\nmsgid \"%s and %(name)d\"\nmsgstr \"\"\n";

    run_test(TestPlan {
        args: vec![String::from("-t"), String::from("-")],
        stdin_data: String::from(po_content),
        expected_out: String::from(
            "-:2:8: placeholder: %s\n-:2:15: placeholder: %(name)d\n",
        ),
        expected_err: String::new(),
        expected_exit_code: 0,
    });
}
