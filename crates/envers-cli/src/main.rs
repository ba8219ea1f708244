// Copyright (c) Contributors to the envers project.
// SPDX-License-Identifier: Apache-2.0

//! envers - Versioned Environment Configuration Manager CLI

use clap::{Parser, Subcommand};
use miette::Result;

mod cmd_deploy;
mod cmd_draft;
mod cmd_init;
mod cmd_profile_load;
mod cmd_show;
mod password;

use cmd_deploy::CmdDeploy;
use cmd_draft::CmdDraft;
use cmd_init::CmdInit;
use cmd_profile_load::CmdProfileLoad;
use cmd_show::CmdShow;

#[derive(Parser)]
#[clap(
    name = "envers",
    about = "Versioned Environment Configuration Manager",
    version,
    long_about = "Manage versioned environment variable specs and deploy them \
                  as profile-scoped, optionally encrypted lock files"
)]
struct Opt {
    #[clap(flatten)]
    logging: Logging,

    #[clap(subcommand)]
    cmd: Command,
}

#[derive(Parser)]
struct Logging {
    /// Increase verbosity (-v, -vv, -vvv)
    #[clap(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[clap(short, long)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Create the .envers directory and spec document
    Init(CmdInit),

    /// Create or extend a release draft in the spec document
    Draft(CmdDraft),

    /// Resolve a release into a profile's lock file
    Deploy(CmdDeploy),

    /// Render a deployed profile back into its env files
    ProfileLoad(CmdProfileLoad),

    /// Display releases from the spec document
    Show(CmdShow),
}

impl Opt {
    fn run(self) -> Result<i32> {
        // Setup logging
        let log_level = match (self.logging.quiet, self.logging.verbose) {
            (true, _) => tracing::Level::ERROR,
            (false, 0) => tracing::Level::WARN,
            (false, 1) => tracing::Level::INFO,
            (false, 2) => tracing::Level::DEBUG,
            (false, _) => tracing::Level::TRACE,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .init();

        // Dispatch to command
        match self.cmd {
            Command::Init(mut cmd) => cmd.run(),
            Command::Draft(mut cmd) => cmd.run(),
            Command::Deploy(mut cmd) => cmd.run(),
            Command::ProfileLoad(mut cmd) => cmd.run(),
            Command::Show(mut cmd) => cmd.run(),
        }
    }
}

fn main() -> Result<()> {
    let opt = Opt::parse();
    let code = opt.run()?;
    std::process::exit(code);
}
