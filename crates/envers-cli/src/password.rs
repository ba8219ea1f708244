// Copyright (c) Contributors to the envers project.
// SPDX-License-Identifier: Apache-2.0

//! Password acquisition for commands touching encrypted variables.

use std::io::{self, IsTerminal};

use dialoguer::Password;
use miette::Result;

/// Read a password, prompting with hidden input on a terminal and
/// reading a single line from stdin otherwise (piped input).
pub fn acquire(prompt: &str) -> Result<String> {
    let password = if !io::stdin().is_terminal() {
        let mut input = String::new();
        io::stdin()
            .read_line(&mut input)
            .map_err(|e| miette::miette!("Failed to read password from stdin: {e}"))?;
        input.trim().to_string()
    } else {
        Password::new()
            .with_prompt(prompt)
            .interact()
            .map_err(|e| miette::miette!("Failed to read password: {e}"))?
    };

    if password.is_empty() {
        return Err(miette::miette!("Password cannot be empty"));
    }
    Ok(password)
}
