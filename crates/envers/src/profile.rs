// Copyright (c) Contributors to the envers project.
// SPDX-License-Identifier: Apache-2.0

//! Rendering locked profiles back into env files.

use std::path::{Path, PathBuf};

use crate::lock::LockDocument;
use crate::store::{self, SpecStore};
use crate::{Error, Result, crypto, dotenv};

#[cfg(test)]
#[path = "./profile_test.rs"]
mod profile_test;

/// Render every file of `(profile, version)` from a lock document.
///
/// Returns `(file key, rendered content)` pairs in spec order. All
/// decryption happens here, before anything touches disk, so a wrong
/// password can never leave a half-written workspace behind.
/// `lock_path` is only used for error context.
pub fn render_profile(
    lock: &LockDocument,
    profile: &str,
    version: &str,
    password: Option<&str>,
    lock_path: &Path,
) -> Result<Vec<(String, String)>> {
    let locked = lock.releases.get(version).ok_or_else(|| Error::LockNotFound {
        profile: profile.to_string(),
        version: version.to_string(),
    })?;
    let data = locked.data.get(profile).ok_or_else(|| Error::LockNotFound {
        profile: profile.to_string(),
        version: version.to_string(),
    })?;

    let mut rendered = Vec::new();
    for (file_path, file_data) in &data.files {
        let Some(file_spec) = locked.spec.spec.files.get(file_path) else {
            return Err(Error::structural(
                lock_path,
                format!("file '{file_path}' is resolved but not declared by release {version}"),
            ));
        };

        let mut pairs = Vec::new();
        for (name, var_spec) in &file_spec.vars {
            let Some(raw) = file_data.vars.get(name) else {
                return Err(Error::structural(
                    lock_path,
                    format!("variable '{name}' of file '{file_path}' has no resolved value"),
                ));
            };

            let value = if var_spec.encrypted {
                let Some(password) = password else {
                    return Err(Error::DecryptionFailed(format!(
                        "variable '{name}' is encrypted but no password was supplied"
                    )));
                };
                crypto::decrypt(raw, password).map_err(|_| {
                    Error::DecryptionFailed(format!(
                        "variable '{name}': wrong password or corrupted value"
                    ))
                })?
            } else {
                raw.clone()
            };
            pairs.push((name.clone(), value));
        }

        let content = dotenv::render(pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        rendered.push((file_path.clone(), content));
    }
    Ok(rendered)
}

/// Load `(profile, version)` from its lock and write the env files.
///
/// Target files are rendered fully in memory first and then each is
/// replaced atomically, parent directories created as needed. Existing
/// files at the target paths are overwritten. Returns the paths written.
pub fn profile_load(
    store: &SpecStore,
    profile: &str,
    version: &str,
    password: Option<&str>,
) -> Result<Vec<PathBuf>> {
    let lock = store
        .load_lock(profile)?
        .ok_or_else(|| Error::LockNotFound {
            profile: profile.to_string(),
            version: version.to_string(),
        })?;

    let rendered = render_profile(&lock, profile, version, password, &store.lock_path(profile))?;

    let mut written = Vec::new();
    for (file_path, content) in rendered {
        let target = store.root().join(&file_path);
        if let Some(parent) = target.parent() {
            std::fs::create_dir_all(parent).map_err(|e| Error::WriteFailed {
                path: parent.to_path_buf(),
                error: e,
            })?;
        }
        store::write_atomic(&target, &content)?;
        tracing::info!(path = %target.display(), "wrote env file");
        written.push(target);
    }
    Ok(written)
}
