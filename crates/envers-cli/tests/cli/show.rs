// Copyright (c) Contributors to the envers project.
// SPDX-License-Identifier: Apache-2.0

//! Integration tests for the show command.

use crate::support::*;

#[test]
fn test_show_before_init_fails() {
    let t = Test::new();

    let output = t.show();

    assert_failure(&output);
    assert_stderr_contains(&output, "No .envers directory found");
}

#[test]
fn test_show_empty_document() {
    let t = Test::init();

    let output = t.show();

    assert_success(&output);
    assert_stdout_contains(&output, "Releases");
    assert_stdout_contains(&output, "none yet");
}

#[test]
fn test_show_lists_releases() {
    let t = Test::drafted("1.0", "var=hello\n");

    let output = t.show();

    assert_success(&output);
    assert_stdout_contains(&output, "1.0");
    assert_stdout_contains(&output, "[draft]");
    assert_stdout_contains(&output, "profiles: base");
    assert_stdout_contains(&output, "1 var(s)");
}

#[test]
fn test_show_release_details() {
    let t = Test::drafted("1.0", "var=hello\nDB_HOST=localhost\n");

    let output = t.show_version("1.0");

    assert_success(&output);
    assert_stdout_contains(&output, "Release 1.0");
    assert_stdout_contains(&output, ".env");
    assert_stdout_contains(&output, "var = hello");
    assert_stdout_contains(&output, "DB_HOST = localhost");
}

#[test]
fn test_show_masks_encrypted_defaults() {
    let t = Test::drafted("1.0", "SECRET=s3cr3t-t0ken\n");
    t.mark_var_encrypted();

    let output = t.show_version("1.0");

    assert_success(&output);
    assert_stdout_contains(&output, "********");
    assert_stdout_contains(&output, "[encrypted]");
    let out = stdout(&output);
    assert!(!out.contains("s3cr3t-t0ken"), "secret default shown: {out}");
}

#[test]
fn test_show_unknown_version_fails() {
    let t = Test::init();

    let output = t.show_version("9.9");

    assert_failure(&output);
    assert_stderr_contains(&output, "Version 9.9 not found");
}
