// Copyright (c) Contributors to the envers project.
// SPDX-License-Identifier: Apache-2.0

//! Implementation of the `envers draft` command.

use std::path::PathBuf;

use clap::Args;
use colored::Colorize;
use miette::Result;

use envers::{DraftOptions, SpecStore};

/// Create or extend a release draft in the spec document
#[derive(Debug, Args)]
pub struct CmdDraft {
    /// Version id for the draft
    version: String,

    /// Copy an existing release as the starting point
    #[clap(long = "from-version", value_name = "VERSION")]
    from_version: Option<String>,

    /// Import variables from an env file (repeatable across calls)
    #[clap(long = "from-env", value_name = "PATH")]
    from_env: Option<PathBuf>,
}

impl CmdDraft {
    pub fn run(&mut self) -> Result<i32> {
        let store = SpecStore::at(".");
        let options = DraftOptions {
            from_version: self.from_version.clone(),
            from_env: self.from_env.clone(),
        };

        let doc = envers::draft(&store, &self.version, &options)?;

        let release = doc
            .releases
            .get(&self.version)
            .ok_or_else(|| miette::miette!("Draft {} vanished after save", self.version))?;
        let vars: usize = release.spec.files.values().map(|f| f.vars.len()).sum();
        println!(
            "Drafted release {} ({} file(s), {} var(s))",
            self.version.cyan(),
            release.spec.files.len(),
            vars
        );

        if let Some(path) = &self.from_env {
            println!("Imported {:?} into the draft", path);
        }

        Ok(0)
    }
}
