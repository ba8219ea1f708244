// Copyright (c) Contributors to the envers project.
// SPDX-License-Identifier: Apache-2.0

//! Integration tests for the init command.

use crate::support::*;

#[test]
fn test_init_creates_spec_document() {
    let t = Test::new();

    let output = t.init_cmd();

    assert_success(&output);
    assert_stdout_contains(&output, "Initialized envers");
    assert!(t.specs_path().is_file(), "specs.yaml was not created");

    let specs = t.read_file(".envers/specs.yaml");
    assert!(specs.contains("version:"));
    assert!(specs.contains("releases:"));
}

#[test]
fn test_init_reports_next_steps() {
    let t = Test::new();

    let output = t.init_cmd();

    assert_success(&output);
    assert_stdout_contains(&output, "Next steps");
    assert_stdout_contains(&output, "envers draft");
}

#[test]
fn test_init_is_idempotent() {
    let t = Test::init();
    let before = t.read_file(".envers/specs.yaml");

    let output = t.init_cmd();

    assert_success(&output);
    assert_stdout_contains(&output, "already initialized");
    assert_eq!(t.read_file(".envers/specs.yaml"), before);
}

#[test]
fn test_init_preserves_existing_releases() {
    let t = Test::drafted("1.0", "var=hello\n");

    let output = t.init_cmd();

    assert_success(&output);
    let specs = t.read_file(".envers/specs.yaml");
    assert!(specs.contains("'1.0'"), "existing release was lost: {specs}");
}
