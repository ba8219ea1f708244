// Copyright (c) Contributors to the envers project.
// SPDX-License-Identifier: Apache-2.0

//! envers - Versioned Environment Configuration Manager
//!
//! This crate provides the core library for managing versioned environment
//! variable specifications (`.envers/specs.yaml`) and resolving them into
//! per-profile lock files that render back into env files.
//!
//! # Overview
//!
//! A spec document holds named releases. A release starts life as an
//! editable draft, typically seeded by importing an existing env file,
//! and declares the profiles it may be deployed to. Deploying resolves a
//! release into a lock file for one profile, sealing variables marked
//! `encrypted` with a password, and loading a profile renders the locked
//! values back into the env files they came from.
//!
//! # Example
//!
//! ```yaml
//! # .envers/specs.yaml
//! version: '0.1'
//! releases:
//!   '1.0':
//!     status: draft
//!     docs: ''
//!     profiles:
//!       - base
//!     spec:
//!       files:
//!         .env:
//!           type: dotenv
//!           docs: ''
//!           vars:
//!             DATABASE_URL:
//!               type: string
//!               default: postgres://localhost/dev
//!               encrypted: false
//!               docs: ''
//! ```

pub mod crypto;
pub mod dotenv;
pub mod draft;
pub mod error;
pub mod lock;
pub mod profile;
pub mod spec;
pub mod store;

pub use draft::{DraftOptions, derive_release, draft};
pub use error::{Error, Result};
pub use lock::{FileData, LockDocument, LockedRelease, ProfileData, deploy, resolve_release};
pub use profile::{profile_load, render_profile};
pub use spec::{
    FileKind, FileSpec, Release, ReleaseSpec, ReleaseStatus, SpecDocument, VarKind, VarSpec,
};
pub use store::{Defaults, SpecStore};

/// Well-known directory holding all envers state.
pub const ENVERS_DIRNAME: &str = ".envers";

/// Well-known filename for the spec document, under [`ENVERS_DIRNAME`].
pub const SPECS_FILENAME: &str = "specs.yaml";

/// Well-known directory for lock files, under [`ENVERS_DIRNAME`].
pub const DATA_DIRNAME: &str = "data";

/// Extension for per-profile lock files.
pub const LOCK_EXTENSION: &str = "lock";

/// Document format version written by `init`.
pub const DEFAULT_SPEC_VERSION: &str = "0.1";

/// Profile every new release starts with.
pub const DEFAULT_PROFILE: &str = "base";
