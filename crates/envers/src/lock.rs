// Copyright (c) Contributors to the envers project.
// SPDX-License-Identifier: Apache-2.0

//! Lock file structures and deploy resolution.
//!
//! A lock file snapshots one release for one profile: the release spec
//! is embedded and every variable is resolved to a concrete value.
//! Variables marked `encrypted` appear only as armored ciphertext
//! blobs, in the resolved data and in the embedded spec's defaults
//! alike; everything else is plaintext.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::spec::{FileKind, Release, SpecDocument};
use crate::store::SpecStore;
use crate::{Error, Result, crypto};

#[cfg(test)]
#[path = "./lock_test.rs"]
mod lock_test;

/// Resolved values for one tracked file within a profile.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct FileData {
    /// File format discriminant, mirrored from the file spec.
    #[serde(rename = "type", default)]
    pub kind: FileKind,

    /// Resolved value per variable, in spec order. Encrypted variables
    /// hold an armored ciphertext blob instead of the plain value.
    pub vars: IndexMap<String, String>,
}

/// Resolved values for every file of one profile.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct ProfileData {
    /// Resolved files keyed by workspace-relative path.
    pub files: IndexMap<String, FileData>,
}

/// One release's embedded spec plus its resolved per-profile data.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct LockedRelease {
    /// Verbatim copy of the release the data was resolved from.
    pub spec: Release,

    /// Resolved data keyed by profile name.
    pub data: IndexMap<String, ProfileData>,
}

/// Root of a per-profile lock file.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct LockDocument {
    /// Document format version, mirrored from the spec document.
    pub version: String,

    /// Locked releases keyed by version id.
    pub releases: IndexMap<String, LockedRelease>,
}

impl LockDocument {
    /// Check the structural invariants of a lock read back from disk.
    ///
    /// Every resolved value must correspond to a variable in the embedded
    /// spec and every spec variable must have a resolved value. For a
    /// variable marked `encrypted`, both the resolved value and the
    /// embedded default must be ciphertext blobs rather than plaintext.
    /// `path` is only used for error context.
    pub fn validate(&self, path: &Path) -> Result<()> {
        for (version, locked) in &self.releases {
            for (profile, data) in &locked.data {
                for (file_path, file_data) in &data.files {
                    let Some(file_spec) = locked.spec.spec.files.get(file_path) else {
                        return Err(Error::structural(
                            path,
                            format!(
                                "profile '{profile}' resolves file '{file_path}' \
                                 which release {version} does not declare"
                            ),
                        ));
                    };

                    for name in file_data.vars.keys() {
                        if !file_spec.vars.contains_key(name) {
                            return Err(Error::structural(
                                path,
                                format!(
                                    "file '{file_path}' resolves variable '{name}' \
                                     which release {version} does not declare"
                                ),
                            ));
                        }
                    }

                    for (name, var_spec) in &file_spec.vars {
                        let Some(value) = file_data.vars.get(name) else {
                            return Err(Error::structural(
                                path,
                                format!(
                                    "variable '{name}' of file '{file_path}' has no \
                                     resolved value for profile '{profile}'"
                                ),
                            ));
                        };
                        if var_spec.encrypted
                            && !(crypto::is_ciphertext(value)
                                && crypto::is_ciphertext(&var_spec.default))
                        {
                            return Err(Error::structural(
                                path,
                                format!(
                                    "variable '{name}' of file '{file_path}' is marked \
                                     encrypted but stored in the clear"
                                ),
                            ));
                        }
                    }
                }
            }
        }
        Ok(())
    }
}

/// Resolve one release of a spec document into a lock for one profile.
///
/// Every variable's default becomes its resolved value; variables marked
/// `encrypted` are sealed with the password first, and the same sealed
/// blob replaces the default in the embedded spec so no plaintext for an
/// encrypted variable survives anywhere in the lock. Apart from the
/// fresh salt inside each ciphertext blob this is a pure function of
/// its inputs: nothing ambient (time, host, user) leaks into the lock.
pub fn resolve_release(
    doc: &SpecDocument,
    profile: &str,
    version: &str,
    password: Option<&str>,
) -> Result<LockDocument> {
    let release = doc
        .releases
        .get(version)
        .ok_or_else(|| Error::SpecVersionNotFound(version.to_string()))?;

    if !release.profiles.iter().any(|p| p == profile) {
        return Err(Error::ProfileNotDeclared {
            profile: profile.to_string(),
            version: version.to_string(),
        });
    }

    let mut embedded = release.clone();
    let mut files = IndexMap::new();
    for (file_path, file_spec) in &mut embedded.spec.files {
        let mut vars = IndexMap::new();
        for (name, var_spec) in &mut file_spec.vars {
            let resolved = if var_spec.encrypted {
                let password = password.ok_or_else(|| Error::PasswordRequired {
                    version: version.to_string(),
                })?;
                let blob = crypto::encrypt(&var_spec.default, password)?;
                var_spec.default = blob.clone();
                blob
            } else {
                var_spec.default.clone()
            };
            vars.insert(name.clone(), resolved);
        }
        files.insert(
            file_path.clone(),
            FileData {
                kind: file_spec.kind,
                vars,
            },
        );
    }

    let mut data = IndexMap::new();
    data.insert(profile.to_string(), ProfileData { files });

    let mut releases = IndexMap::new();
    releases.insert(
        version.to_string(),
        LockedRelease {
            spec: embedded,
            data,
        },
    );

    Ok(LockDocument {
        version: doc.version.clone(),
        releases,
    })
}

/// Resolve `(profile, version)` and persist the profile's lock file,
/// replacing any previously deployed lock for that profile.
pub fn deploy(
    store: &SpecStore,
    profile: &str,
    version: &str,
    password: Option<&str>,
) -> Result<LockDocument> {
    let doc = store.load()?;
    let lock = resolve_release(&doc, profile, version, password)?;
    store.save_lock(profile, &lock)?;
    tracing::info!(profile, version, "deployed lock");
    Ok(lock)
}
