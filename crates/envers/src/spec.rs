// Copyright (c) Contributors to the envers project.
// SPDX-License-Identifier: Apache-2.0

//! Spec document parsing and data types for .envers/specs.yaml files.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "./spec_test.rs"]
mod spec_test;

/// Lifecycle state of a release.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
pub enum ReleaseStatus {
    /// Editable: may gain files and variables.
    #[serde(rename = "draft")]
    Draft,
    /// Frozen: may only be copied from, never changed in place.
    #[serde(rename = "released")]
    Released,
}

/// On-disk format of a file tracked by a release.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
pub enum FileKind {
    /// A KEY=VALUE env file.
    #[serde(rename = "dotenv")]
    Dotenv,
}

impl Default for FileKind {
    fn default() -> Self {
        Self::Dotenv
    }
}

/// Value type of a variable.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
pub enum VarKind {
    #[serde(rename = "string")]
    String,
}

impl Default for VarKind {
    fn default() -> Self {
        Self::String
    }
}

/// A single variable tracked by a file spec.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct VarSpec {
    /// Value type discriminant.
    #[serde(rename = "type", default)]
    pub kind: VarKind,

    /// Value materialized at deploy time.
    pub default: String,

    /// When true the resolved value is sealed in lock files.
    #[serde(default)]
    pub encrypted: bool,

    /// Human-readable description.
    #[serde(default)]
    pub docs: String,
}

impl VarSpec {
    /// A plaintext string variable, as created by env file imports.
    pub fn string(default: impl Into<String>) -> Self {
        Self {
            kind: VarKind::String,
            default: default.into(),
            encrypted: false,
            docs: String::new(),
        }
    }
}

/// One file tracked by a release, keyed in `ReleaseSpec::files` by its
/// path relative to the workspace root.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct FileSpec {
    /// File format discriminant.
    #[serde(rename = "type", default)]
    pub kind: FileKind,

    /// Human-readable description.
    #[serde(default)]
    pub docs: String,

    /// Variables this file defines, in declaration order.
    #[serde(default)]
    pub vars: IndexMap<String, VarSpec>,
}

impl FileSpec {
    /// An empty dotenv file spec.
    pub fn dotenv() -> Self {
        Self {
            kind: FileKind::Dotenv,
            docs: String::new(),
            vars: IndexMap::new(),
        }
    }
}

/// Schema portion of a release: the files it manages.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct ReleaseSpec {
    /// Tracked files keyed by workspace-relative path.
    #[serde(default)]
    pub files: IndexMap<String, FileSpec>,
}

/// One named version of the environment configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct Release {
    /// Lifecycle state.
    pub status: ReleaseStatus,

    /// Human-readable description.
    #[serde(default)]
    pub docs: String,

    /// Profiles this release may be deployed to. Never empty.
    pub profiles: Vec<String>,

    /// The files and variables this release defines.
    #[serde(default)]
    pub spec: ReleaseSpec,
}

impl Release {
    /// A fresh empty draft declaring the given initial profile.
    pub fn new_draft(profile: impl Into<String>) -> Self {
        Self {
            status: ReleaseStatus::Draft,
            docs: String::new(),
            profiles: vec![profile.into()],
            spec: ReleaseSpec::default(),
        }
    }

    /// Whether any variable in any file is marked encrypted.
    pub fn has_encrypted_vars(&self) -> bool {
        self.spec
            .files
            .values()
            .any(|file| file.vars.values().any(|var| var.encrypted))
    }
}

/// Root of the versioned specification document.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct SpecDocument {
    /// Document format version.
    pub version: String,

    /// All known releases keyed by version id, in creation order.
    #[serde(default)]
    pub releases: IndexMap<String, Release>,
}

impl SpecDocument {
    /// An empty document with the given format version.
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            releases: IndexMap::new(),
        }
    }
}
