// Copyright (c) Contributors to the envers project.
// SPDX-License-Identifier: Apache-2.0

//! Parsing and rendering of KEY=VALUE env files.

use std::path::Path;

use crate::{Error, Result};

#[cfg(test)]
#[path = "./dotenv_test.rs"]
mod dotenv_test;

/// Parse env file content into key/value pairs in file order.
///
/// Blank lines and `#` comments are skipped, as are lines without a `=`.
/// Matching single or double quotes around a value are stripped.
pub fn parse(content: &str) -> Vec<(String, String)> {
    let mut vars = Vec::new();

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            tracing::debug!(line, "skipping line without KEY=VALUE shape");
            continue;
        };
        let key = key.trim();
        if key.is_empty() {
            continue;
        }
        let value = unquote(value.trim());
        vars.push((key.to_string(), value.to_string()));
    }

    vars
}

/// Read and parse an env file from disk.
pub fn load(path: &Path) -> Result<Vec<(String, String)>> {
    if !path.is_file() {
        return Err(Error::EnvFileNotFound(path.to_path_buf()));
    }
    let content = std::fs::read_to_string(path).map_err(|e| Error::ReadFailed {
        path: path.to_path_buf(),
        error: e,
    })?;
    Ok(parse(&content))
}

/// Render key/value pairs as env file content, one KEY=VALUE per line.
pub fn render<'a>(vars: impl IntoIterator<Item = (&'a str, &'a str)>) -> String {
    let mut out = String::new();
    for (key, value) in vars {
        out.push_str(key);
        out.push('=');
        out.push_str(value);
        out.push('\n');
    }
    out
}

fn unquote(value: &str) -> &str {
    let stripped = value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .or_else(|| value.strip_prefix('\'').and_then(|v| v.strip_suffix('\'')));
    stripped.unwrap_or(value)
}
