// Copyright (c) Contributors to the envers project.
// SPDX-License-Identifier: Apache-2.0

//! On-disk storage for the spec document and per-profile lock files.
//!
//! All state lives under `.envers/` at the workspace root:
//!
//! ```text
//! .envers/
//!   specs.yaml        # the versioned spec document
//!   data/
//!     <profile>.lock  # one lock file per deployed profile
//! ```

use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::lock::LockDocument;
use crate::spec::SpecDocument;
use crate::{Error, Result};

#[cfg(test)]
#[path = "./store_test.rs"]
mod store_test;

/// Values seeded into new documents and releases.
#[derive(Debug, Clone)]
pub struct Defaults {
    /// Document format version written by `init`.
    pub spec_version: String,
    /// Profile every new release declares.
    pub profile: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            spec_version: crate::DEFAULT_SPEC_VERSION.to_string(),
            profile: crate::DEFAULT_PROFILE.to_string(),
        }
    }
}

/// Storage anchored at a workspace root directory.
#[derive(Debug, Clone)]
pub struct SpecStore {
    root: PathBuf,
    defaults: Defaults,
}

impl SpecStore {
    /// A store rooted at the given workspace directory.
    pub fn at(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            defaults: Defaults::default(),
        }
    }

    /// Replace the seeded defaults.
    pub fn with_defaults(mut self, defaults: Defaults) -> Self {
        self.defaults = defaults;
        self
    }

    /// The workspace root this store is anchored at.
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn defaults(&self) -> &Defaults {
        &self.defaults
    }

    /// The `.envers` directory under the root.
    pub fn envers_dir(&self) -> PathBuf {
        self.root.join(crate::ENVERS_DIRNAME)
    }

    /// Path of the spec document.
    pub fn spec_path(&self) -> PathBuf {
        self.envers_dir().join(crate::SPECS_FILENAME)
    }

    /// Directory holding per-profile lock files.
    pub fn data_dir(&self) -> PathBuf {
        self.envers_dir().join(crate::DATA_DIRNAME)
    }

    /// Path of the lock file for a profile.
    pub fn lock_path(&self, profile: &str) -> PathBuf {
        self.data_dir()
            .join(format!("{profile}.{}", crate::LOCK_EXTENSION))
    }

    /// Whether a spec document exists at this root.
    pub fn is_initialized(&self) -> bool {
        self.spec_path().is_file()
    }

    /// Create the `.envers` directory and an empty spec document.
    ///
    /// Idempotent: an existing document is left exactly as it is.
    pub fn init(&self) -> Result<()> {
        std::fs::create_dir_all(self.envers_dir()).map_err(|e| Error::WriteFailed {
            path: self.envers_dir(),
            error: e,
        })?;

        if self.is_initialized() {
            tracing::debug!(path = %self.spec_path().display(), "spec document already present");
            return Ok(());
        }

        let doc = SpecDocument::new(&self.defaults.spec_version);
        self.save(&doc)
    }

    /// Load the spec document.
    pub fn load(&self) -> Result<SpecDocument> {
        let path = self.spec_path();
        if !path.is_file() {
            return Err(Error::NotInitialized(self.root.clone()));
        }

        let yaml = std::fs::read_to_string(&path).map_err(|e| Error::ReadFailed {
            path: path.clone(),
            error: e,
        })?;
        serde_yaml::from_str(&yaml).map_err(|e| Error::malformed(path, e))
    }

    /// Persist the spec document, replacing the previous one atomically.
    pub fn save(&self, doc: &SpecDocument) -> Result<()> {
        let path = self.spec_path();
        let yaml = serde_yaml::to_string(doc).map_err(|e| Error::malformed(path.clone(), e))?;
        write_atomic(&path, &yaml)?;
        tracing::debug!(
            path = %path.display(),
            releases = doc.releases.len(),
            "spec document saved"
        );
        Ok(())
    }

    /// Load the lock document for a profile, if one has been deployed.
    ///
    /// The lock's structural invariants are checked before it is returned.
    pub fn load_lock(&self, profile: &str) -> Result<Option<LockDocument>> {
        let path = self.lock_path(profile);
        if !path.is_file() {
            return Ok(None);
        }

        let yaml = std::fs::read_to_string(&path).map_err(|e| Error::ReadFailed {
            path: path.clone(),
            error: e,
        })?;
        let lock: LockDocument =
            serde_yaml::from_str(&yaml).map_err(|e| Error::malformed(path.clone(), e))?;
        lock.validate(&path)?;
        Ok(Some(lock))
    }

    /// Persist a profile's lock document, replacing any previous lock.
    pub fn save_lock(&self, profile: &str, lock: &LockDocument) -> Result<()> {
        std::fs::create_dir_all(self.data_dir()).map_err(|e| Error::WriteFailed {
            path: self.data_dir(),
            error: e,
        })?;

        let path = self.lock_path(profile);
        let yaml = serde_yaml::to_string(lock).map_err(|e| Error::malformed(path.clone(), e))?;
        write_atomic(&path, &yaml)?;
        tracing::debug!(path = %path.display(), profile, "lock file saved");
        Ok(())
    }
}

/// Write content to `path` with no window where a partial file is visible.
///
/// The content goes to a temp file in the same directory first and is
/// renamed over the target, so readers see either the old file or the
/// new one.
pub(crate) fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| Error::WriteFailed {
        path: path.to_path_buf(),
        error: e,
    })?;
    tmp.write_all(content.as_bytes())
        .map_err(|e| Error::WriteFailed {
            path: path.to_path_buf(),
            error: e,
        })?;
    tmp.persist(path).map_err(|e| Error::WriteFailed {
        path: path.to_path_buf(),
        error: e.error,
    })?;
    Ok(())
}
