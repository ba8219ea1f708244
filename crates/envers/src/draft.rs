// Copyright (c) Contributors to the envers project.
// SPDX-License-Identifier: Apache-2.0

//! Derivation of new release drafts in the spec document.

use std::path::{Path, PathBuf};

use crate::spec::{FileSpec, Release, ReleaseStatus, SpecDocument, VarSpec};
use crate::store::SpecStore;
use crate::{Error, Result, dotenv};

#[cfg(test)]
#[path = "./draft_test.rs"]
mod draft_test;

/// Options controlling how a draft is derived.
#[derive(Debug, Clone, Default)]
pub struct DraftOptions {
    /// Copy an existing release as the starting point.
    pub from_version: Option<String>,

    /// Import variable definitions from this env file.
    pub from_env: Option<PathBuf>,
}

/// Derive a draft for `version` and persist the updated document.
///
/// The env file, when given, is read relative to the store's root and
/// its path as given becomes the file key inside the release, so the
/// same relative path round-trips through deploy and load. On any error
/// the document on disk is left untouched.
pub fn draft(store: &SpecStore, version: &str, options: &DraftOptions) -> Result<SpecDocument> {
    let doc = store.load()?;

    let env_import = match &options.from_env {
        Some(path) => {
            let read_path = if path.is_absolute() {
                path.clone()
            } else {
                store.root().join(path)
            };
            Some((file_key(path), dotenv::load(&read_path)?))
        }
        None => None,
    };

    let next = derive_release(
        doc,
        version,
        options.from_version.as_deref(),
        env_import,
        &store.defaults().profile,
    )?;
    store.save(&next)?;
    tracing::info!(version, "drafted release");
    Ok(next)
}

/// Derive a new document with a draft for `version`. Pure: the input
/// document is consumed and a new one returned, so a failed derivation
/// leaves nothing half-updated.
///
/// Rules:
/// - a taken `version` is rejected with [`Error::VersionExists`], except
///   when `env_import` targets an existing draft, which imports
///   incrementally into it
/// - releases with status `released` never change in place
/// - `from_version` copies the source release verbatim, status included;
///   an import, when also given, is applied to the copy
pub fn derive_release(
    mut doc: SpecDocument,
    version: &str,
    from_version: Option<&str>,
    env_import: Option<(String, Vec<(String, String)>)>,
    default_profile: &str,
) -> Result<SpecDocument> {
    let mut release = match from_version {
        Some(source) => {
            if doc.releases.contains_key(version) {
                return Err(Error::VersionExists(version.to_string()));
            }
            doc.releases
                .get(source)
                .cloned()
                .ok_or_else(|| Error::SourceVersionNotFound(source.to_string()))?
        }
        None => match doc.releases.get(version) {
            Some(existing) if existing.status == ReleaseStatus::Released => {
                return Err(Error::VersionExists(version.to_string()));
            }
            Some(_) if env_import.is_none() => {
                return Err(Error::VersionExists(version.to_string()));
            }
            Some(existing) => existing.clone(),
            None => Release::new_draft(default_profile),
        },
    };

    if let Some((file_key, vars)) = env_import {
        import_env_vars(&mut release, file_key, vars);
    }

    doc.releases.insert(version.to_string(), release);
    Ok(doc)
}

/// Merge parsed env vars into the release under the given file key.
///
/// Other file entries are untouched; within the file, each imported key
/// inserts or overwrites its variable as a plaintext string with the
/// file's value as the default.
fn import_env_vars(release: &mut Release, file_key: String, vars: Vec<(String, String)>) {
    let file = release
        .spec
        .files
        .entry(file_key)
        .or_insert_with(FileSpec::dotenv);
    for (name, value) in vars {
        file.vars.insert(name, VarSpec::string(value));
    }
}

/// The spec file key for an imported env file: its path as given.
fn file_key(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
