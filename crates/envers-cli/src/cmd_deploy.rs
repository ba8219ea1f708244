// Copyright (c) Contributors to the envers project.
// SPDX-License-Identifier: Apache-2.0

//! Implementation of the `envers deploy` command.

use clap::Args;
use colored::Colorize;
use miette::Result;

use envers::SpecStore;

/// Resolve a release into a profile's lock file
#[derive(Debug, Args)]
pub struct CmdDeploy {
    /// Profile to deploy
    profile: String,

    /// Release version to deploy
    version: String,

    /// Password sealing encrypted variables (prompted for when needed)
    #[clap(short, long, env = "ENVERS_PASSWORD", hide_env_values = true)]
    password: Option<String>,
}

impl CmdDeploy {
    pub fn run(&mut self) -> Result<i32> {
        let store = SpecStore::at(".");

        let password = match self.password.take() {
            Some(password) => Some(password),
            None if release_needs_password(&store, &self.version) => {
                Some(crate::password::acquire("Password for encrypted variables")?)
            }
            None => None,
        };

        envers::deploy(&store, &self.profile, &self.version, password.as_deref())?;

        println!(
            "Deployed release {} for profile {}",
            self.version.cyan(),
            self.profile.green()
        );
        println!("Lock written to {:?}", store.lock_path(&self.profile));

        Ok(0)
    }
}

/// Whether the release to deploy has encrypted variables, meaning a
/// password prompt is warranted. Lookup failures are left for the
/// deploy itself to report.
fn release_needs_password(store: &SpecStore, version: &str) -> bool {
    store
        .load()
        .ok()
        .and_then(|doc| doc.releases.get(version).map(|r| r.has_encrypted_vars()))
        .unwrap_or(false)
}
