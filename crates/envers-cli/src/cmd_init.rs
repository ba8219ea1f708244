// Copyright (c) Contributors to the envers project.
// SPDX-License-Identifier: Apache-2.0

//! Implementation of the `envers init` command.

use clap::Args;
use miette::Result;
use std::path::PathBuf;

use envers::SpecStore;

/// Create the .envers directory and spec document
#[derive(Debug, Args)]
pub struct CmdInit {
    /// Directory to initialize
    #[clap(default_value = ".")]
    path: PathBuf,
}

impl CmdInit {
    pub fn run(&mut self) -> Result<i32> {
        let store = SpecStore::at(&self.path);
        let existed = store.is_initialized();
        store.init()?;

        if existed {
            println!("envers is already initialized at {:?}", store.spec_path());
            return Ok(0);
        }

        println!("Initialized envers at {:?}", store.spec_path());
        println!();
        println!("Next steps:");
        println!("  1. Run 'envers draft 1.0 --from-env .env' to import your env file");
        println!("  2. Run 'envers deploy base 1.0' to resolve it into a lock");
        println!("  3. Run 'envers profile-load base 1.0' to render the env file back");

        Ok(0)
    }
}
