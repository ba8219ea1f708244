// Copyright (c) Contributors to the envers project.
// SPDX-License-Identifier: Apache-2.0

//! Command execution helpers for integration tests.

use std::process::Output;

use assert_cmd::Command;

use super::Test;

impl Test {
    /// Create a command for the envers binary rooted in the test workspace.
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("envers").expect("failed to find envers binary");
        cmd.current_dir(self.dir.path());
        // The surrounding shell may carry a password; tests opt in explicitly.
        cmd.env_remove("ENVERS_PASSWORD");
        cmd
    }

    /// Run `envers init`.
    pub fn init_cmd(&self) -> Output {
        self.cmd().arg("init").output().expect("failed to run init")
    }

    /// Run `envers draft <version>`.
    pub fn draft(&self, version: &str) -> Output {
        self.cmd()
            .args(["draft", version])
            .output()
            .expect("failed to run draft")
    }

    /// Run `envers draft <version> --from-env <path>`.
    pub fn draft_from_env(&self, version: &str, path: &str) -> Output {
        self.cmd()
            .args(["draft", version, "--from-env", path])
            .output()
            .expect("failed to run draft")
    }

    /// Run `envers draft <version> --from-version <source>`.
    pub fn draft_from_version(&self, version: &str, source: &str) -> Output {
        self.cmd()
            .args(["draft", version, "--from-version", source])
            .output()
            .expect("failed to run draft")
    }

    /// Run `envers deploy <profile> <version>`.
    pub fn deploy(&self, profile: &str, version: &str) -> Output {
        self.cmd()
            .args(["deploy", profile, version])
            .output()
            .expect("failed to run deploy")
    }

    /// Run `envers deploy <profile> <version> --password <password>`.
    pub fn deploy_with_password(&self, profile: &str, version: &str, password: &str) -> Output {
        self.cmd()
            .args(["deploy", profile, version, "--password", password])
            .output()
            .expect("failed to run deploy")
    }

    /// Run `envers profile-load <profile> <version>`.
    pub fn profile_load(&self, profile: &str, version: &str) -> Output {
        self.cmd()
            .args(["profile-load", profile, version])
            .output()
            .expect("failed to run profile-load")
    }

    /// Run `envers profile-load <profile> <version> --password <password>`.
    pub fn profile_load_with_password(
        &self,
        profile: &str,
        version: &str,
        password: &str,
    ) -> Output {
        self.cmd()
            .args(["profile-load", profile, version, "--password", password])
            .output()
            .expect("failed to run profile-load")
    }

    /// Run `envers show`.
    pub fn show(&self) -> Output {
        self.cmd().arg("show").output().expect("failed to run show")
    }

    /// Run `envers show <version>`.
    pub fn show_version(&self, version: &str) -> Output {
        self.cmd()
            .args(["show", version])
            .output()
            .expect("failed to run show")
    }
}
