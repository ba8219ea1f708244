// Copyright (c) Contributors to the envers project.
// SPDX-License-Identifier: Apache-2.0

//! Implementation of the `envers profile-load` command.

use clap::Args;
use colored::Colorize;
use miette::Result;

use envers::SpecStore;

/// Render a deployed profile back into its env files
#[derive(Debug, Args)]
pub struct CmdProfileLoad {
    /// Profile to load
    profile: String,

    /// Release version to load
    version: String,

    /// Password unsealing encrypted variables (prompted for when needed)
    #[clap(short, long, env = "ENVERS_PASSWORD", hide_env_values = true)]
    password: Option<String>,
}

impl CmdProfileLoad {
    pub fn run(&mut self) -> Result<i32> {
        let store = SpecStore::at(".");

        let password = match self.password.take() {
            Some(password) => Some(password),
            None if lock_needs_password(&store, &self.profile, &self.version) => {
                Some(crate::password::acquire("Password for encrypted variables")?)
            }
            None => None,
        };

        let written = envers::profile_load(
            &store,
            &self.profile,
            &self.version,
            password.as_deref(),
        )?;

        println!(
            "Loaded profile {} at release {}",
            self.profile.green(),
            self.version.cyan()
        );
        for path in &written {
            println!("  wrote {:?}", path);
        }

        Ok(0)
    }
}

/// Whether the deployed lock carries encrypted variables for this
/// version, meaning a password prompt is warranted. Lookup failures are
/// left for the load itself to report.
fn lock_needs_password(store: &SpecStore, profile: &str, version: &str) -> bool {
    store
        .load_lock(profile)
        .ok()
        .flatten()
        .and_then(|lock| {
            lock.releases
                .get(version)
                .map(|locked| locked.spec.has_encrypted_vars())
        })
        .unwrap_or(false)
}
