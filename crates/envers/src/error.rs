// Copyright (c) Contributors to the envers project.
// SPDX-License-Identifier: Apache-2.0

//! Error types for envers operations.

use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

/// Convenience Result type with envers Error.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during envers operations.
#[derive(Error, Diagnostic, Debug)]
pub enum Error {
    /// No .envers/specs.yaml at the given root
    #[error("No .envers directory found at {0:?}")]
    #[diagnostic(
        code(envers::not_initialized),
        help("Run 'envers init' to create the .envers directory")
    )]
    NotInitialized(PathBuf),

    /// Version id already taken in the spec document
    #[error("Version {0} already exists in the spec document")]
    #[diagnostic(
        code(envers::version_exists),
        help("Pick a new version id, or use --from-env to extend an existing draft")
    )]
    VersionExists(String),

    /// --from-version named a version that does not exist
    #[error("Source version {0} not found in the spec document")]
    #[diagnostic(
        code(envers::source_version_not_found),
        help("Check 'envers show' for the versions that exist")
    )]
    SourceVersionNotFound(String),

    /// --from-env named a file that does not exist
    #[error("Env file not found: {0:?}")]
    #[diagnostic(code(envers::env_file_not_found))]
    EnvFileNotFound(PathBuf),

    /// Deploy or show named a version that does not exist
    #[error("Version {0} not found in the spec document")]
    #[diagnostic(
        code(envers::spec_version_not_found),
        help("Check 'envers show' for the versions that exist")
    )]
    SpecVersionNotFound(String),

    /// Deploy named a profile the release does not declare
    #[error("Profile '{profile}' is not declared by release {version}")]
    #[diagnostic(
        code(envers::profile_not_declared),
        help("Add the profile to the release's 'profiles' list before deploying")
    )]
    ProfileNotDeclared { profile: String, version: String },

    /// Release has encrypted variables but no password was supplied
    #[error("Release {version} has encrypted variables but no password was supplied")]
    #[diagnostic(
        code(envers::password_required),
        help("Pass --password or set ENVERS_PASSWORD")
    )]
    PasswordRequired { version: String },

    /// No deployed lock covers the requested profile and version
    #[error("No lock found for profile '{profile}' at version {version}")]
    #[diagnostic(
        code(envers::lock_not_found),
        help("Run 'envers deploy <profile> <version>' first")
    )]
    LockNotFound { profile: String, version: String },

    /// Wrong password, missing password, or corrupted ciphertext
    #[error("Decryption failed: {0}")]
    #[diagnostic(
        code(envers::decryption_failed),
        help("Check that the password matches the one used at deploy time")
    )]
    DecryptionFailed(String),

    /// Sealing a value for the lock file failed
    #[error("Encryption failed: {0}")]
    #[diagnostic(code(envers::encryption_failed))]
    EncryptionFailed(String),

    /// On-disk document failed to parse or violates a structural invariant
    #[error("Malformed document {path:?}: {reason}")]
    #[diagnostic(
        code(envers::malformed_document),
        help("Fix the file by hand or restore it from version control")
    )]
    MalformedDocument {
        path: PathBuf,
        reason: String,
        #[source]
        source: Option<serde_yaml::Error>,
    },

    /// Failed to read file
    #[error("Failed to read file: {path:?}")]
    #[diagnostic(code(envers::read_failed))]
    ReadFailed {
        path: PathBuf,
        #[source]
        error: std::io::Error,
    },

    /// Failed to write file
    #[error("Failed to write file: {path:?}")]
    #[diagnostic(code(envers::write_failed))]
    WriteFailed {
        path: PathBuf,
        #[source]
        error: std::io::Error,
    },

    /// IO error passthrough
    #[error(transparent)]
    #[diagnostic(code(envers::io_error))]
    Io(#[from] std::io::Error),
}

impl Error {
    /// A document that failed YAML parsing.
    pub(crate) fn malformed(path: impl Into<PathBuf>, error: serde_yaml::Error) -> Self {
        Self::MalformedDocument {
            path: path.into(),
            reason: "invalid YAML".to_string(),
            source: Some(error),
        }
    }

    /// A document that parsed cleanly but violates a structural invariant.
    pub(crate) fn structural(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::MalformedDocument {
            path: path.into(),
            reason: reason.into(),
            source: None,
        }
    }
}
