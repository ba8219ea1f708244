// Copyright (c) Contributors to the envers project.
// SPDX-License-Identifier: Apache-2.0

//! Implementation of the `envers show` command.

use clap::Args;
use colored::Colorize;
use miette::Result;

use envers::{Release, ReleaseStatus, SpecDocument, SpecStore};

/// Display releases from the spec document
#[derive(Debug, Args)]
pub struct CmdShow {
    /// Show one release in detail
    #[clap(value_name = "VERSION")]
    version: Option<String>,
}

impl CmdShow {
    pub fn run(&mut self) -> Result<i32> {
        let store = SpecStore::at(".");
        let doc = store.load()?;

        match &self.version {
            Some(version) => {
                let release = doc
                    .releases
                    .get(version)
                    .ok_or_else(|| envers::Error::SpecVersionNotFound(version.clone()))?;
                show_release(version, release);
            }
            None => show_summary(&doc),
        }

        Ok(0)
    }
}

fn show_summary(doc: &SpecDocument) {
    println!("{} (document version {})", "Releases".bold(), doc.version);

    if doc.releases.is_empty() {
        println!("  (none yet - create one with 'envers draft')");
        return;
    }

    for (id, release) in &doc.releases {
        let vars: usize = release.spec.files.values().map(|f| f.vars.len()).sum();
        println!(
            "  {} [{}] profiles: {} ({} file(s), {} var(s))",
            id.cyan(),
            status_label(release.status),
            release.profiles.join(", "),
            release.spec.files.len(),
            vars
        );
    }
}

fn show_release(id: &str, release: &Release) {
    println!("{} {} [{}]", "Release".bold(), id.cyan(), status_label(release.status));
    if !release.docs.is_empty() {
        println!("  {}", release.docs.dimmed());
    }
    println!("  profiles: {}", release.profiles.join(", "));

    for (path, file) in &release.spec.files {
        println!("  {} ({:?})", path.bold(), file.kind);
        for (name, var) in &file.vars {
            if var.encrypted {
                println!("    {} = {} {}", name, "********", "[encrypted]".yellow());
            } else {
                println!("    {} = {}", name, var.default);
            }
        }
    }
}

fn status_label(status: ReleaseStatus) -> colored::ColoredString {
    match status {
        ReleaseStatus::Draft => "draft".yellow(),
        ReleaseStatus::Released => "released".green(),
    }
}
