// Copyright (c) Contributors to the envers project.
// SPDX-License-Identifier: Apache-2.0

//! Integration tests for the profile-load command.

use crate::support::*;

#[test]
fn test_profile_load_before_deploy_fails() {
    let t = Test::drafted("1.0", "var=hello\n");

    let output = t.profile_load("base", "1.0");

    assert_failure(&output);
    assert_stderr_contains(&output, "No lock found");
}

#[test]
fn test_profile_load_restores_env_file() {
    let t = Test::drafted("1.0", "var=hello\n");
    assert_success(&t.deploy("base", "1.0"));
    std::fs::remove_file(t.dir.path().join(".env")).unwrap();

    let output = t.profile_load("base", "1.0");

    assert_success(&output);
    assert_stdout_contains(&output, "Loaded profile");
    assert_eq!(t.read_file(".env"), "var=hello\n");
}

#[test]
fn test_profile_load_overwrites_drifted_file() {
    let t = Test::drafted("1.0", "var=hello\n");
    assert_success(&t.deploy("base", "1.0"));
    t.write_file(".env", "var=changed\nROGUE=1\n");

    let output = t.profile_load("base", "1.0");

    assert_success(&output);
    assert_eq!(t.read_file(".env"), "var=hello\n");
}

#[test]
fn test_profile_load_version_not_in_lock_fails() {
    let t = Test::drafted("1.0", "var=hello\n");
    assert_success(&t.deploy("base", "1.0"));
    assert_success(&t.draft_from_version("2.0", "1.0"));

    let output = t.profile_load("base", "2.0");

    assert_failure(&output);
    assert_stderr_contains(&output, "No lock found for profile 'base' at version 2.0");
}

#[test]
fn test_profile_load_encrypted_round_trip() {
    let t = Test::drafted("1.0", "SECRET=s3cr3t-t0ken\n");
    t.mark_var_encrypted();
    assert_success(&t.deploy_with_password("base", "1.0", "hunter2"));
    std::fs::remove_file(t.dir.path().join(".env")).unwrap();

    let output = t.profile_load_with_password("base", "1.0", "hunter2");

    assert_success(&output);
    assert_eq!(t.read_file(".env"), "SECRET=s3cr3t-t0ken\n");
}

#[test]
fn test_profile_load_wrong_password_fails() {
    let t = Test::drafted("1.0", "SECRET=s3cr3t-t0ken\n");
    t.mark_var_encrypted();
    assert_success(&t.deploy_with_password("base", "1.0", "hunter2"));
    std::fs::remove_file(t.dir.path().join(".env")).unwrap();

    let output = t.profile_load_with_password("base", "1.0", "wrong");

    assert_failure(&output);
    assert_stderr_contains(&output, "Decryption failed");
    assert!(
        !t.dir.path().join(".env").exists(),
        "env file written despite failed decryption"
    );
}

#[test]
fn test_profile_load_missing_password_fails() {
    let t = Test::drafted("1.0", "SECRET=s3cr3t-t0ken\n");
    t.mark_var_encrypted();
    assert_success(&t.deploy_with_password("base", "1.0", "hunter2"));
    std::fs::remove_file(t.dir.path().join(".env")).unwrap();

    let output = t.profile_load("base", "1.0");

    assert_failure(&output);
    assert_stderr_contains(&output, "Password cannot be empty");
    assert!(!t.dir.path().join(".env").exists());
}

#[test]
fn test_profile_load_reads_password_from_environment() {
    let t = Test::drafted("1.0", "SECRET=s3cr3t-t0ken\n");
    t.mark_var_encrypted();
    assert_success(&t.deploy_with_password("base", "1.0", "hunter2"));
    std::fs::remove_file(t.dir.path().join(".env")).unwrap();

    let output = t
        .cmd()
        .env("ENVERS_PASSWORD", "hunter2")
        .args(["profile-load", "base", "1.0"])
        .output()
        .expect("failed to run profile-load");

    assert_success(&output);
    assert_eq!(t.read_file(".env"), "SECRET=s3cr3t-t0ken\n");
}

#[test]
fn test_profile_load_recreates_subdirectories() {
    let t = Test::init();
    t.write_file("services/api/.env", "PORT=8080\n");
    assert_success(&t.draft_from_env("1.0", "services/api/.env"));
    assert_success(&t.deploy("base", "1.0"));
    std::fs::remove_dir_all(t.dir.path().join("services")).unwrap();

    let output = t.profile_load("base", "1.0");

    assert_success(&output);
    assert_eq!(t.read_file("services/api/.env"), "PORT=8080\n");
}

#[test]
fn test_profile_load_survives_spec_edits_after_deploy() {
    // The lock embeds the release spec, so later edits to specs.yaml
    // must not change what gets rendered.
    let t = Test::drafted("1.0", "var=hello\n");
    assert_success(&t.deploy("base", "1.0"));
    let specs = t.read_file(".envers/specs.yaml");
    t.write_file(".envers/specs.yaml", &specs.replace("hello", "edited"));
    std::fs::remove_file(t.dir.path().join(".env")).unwrap();

    let output = t.profile_load("base", "1.0");

    assert_success(&output);
    assert_eq!(t.read_file(".env"), "var=hello\n");
}
