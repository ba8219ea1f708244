// Copyright (c) Contributors to the envers project.
// SPDX-License-Identifier: Apache-2.0

//! Password-based sealing of lock file values.
//!
//! Variables marked `encrypted` are sealed with the age format using a
//! passphrase (scrypt key derivation with a random salt, authenticated
//! payload) and stored ASCII armored so lock files stay plain text.

use std::io::{Read, Write};

use age::armor::{ArmoredReader, ArmoredWriter, Format};
use age::secrecy::SecretString;

use crate::{Error, Result};

#[cfg(test)]
#[path = "./crypto_test.rs"]
mod crypto_test;

/// Banner line opening every armored ciphertext blob.
const ARMOR_BEGIN: &str = "-----BEGIN AGE ENCRYPTED FILE-----";

/// Encrypt a value with the given password.
///
/// The armored output carries the salt and auth tag, so only the
/// password is needed to get the value back. Two calls with identical
/// inputs produce different blobs (fresh salt per call); both decrypt
/// to the same plaintext.
pub fn encrypt(plaintext: &str, password: &str) -> Result<String> {
    let recipient = age::scrypt::Recipient::new(SecretString::from(password.to_owned()));
    let encryptor =
        age::Encryptor::with_recipients(std::iter::once(&recipient as &dyn age::Recipient))
            .map_err(|e| Error::EncryptionFailed(format!("{e}")))?;

    let mut encrypted = Vec::new();
    let mut writer = encryptor
        .wrap_output(ArmoredWriter::wrap_output(&mut encrypted, Format::AsciiArmor)?)
        .map_err(|e| Error::EncryptionFailed(format!("{e}")))?;

    writer.write_all(plaintext.as_bytes())?;
    let armored = writer
        .finish()
        .map_err(|e| Error::EncryptionFailed(format!("{e}")))?;
    armored
        .finish()
        .map_err(|e| Error::EncryptionFailed(format!("{e}")))?;

    String::from_utf8(encrypted).map_err(|e| Error::EncryptionFailed(format!("UTF-8 error: {e}")))
}

/// Decrypt an armored ciphertext blob with the given password.
///
/// Fails closed: a wrong password, a tampered payload and a malformed
/// blob all surface as [`Error::DecryptionFailed`].
pub fn decrypt(blob: &str, password: &str) -> Result<String> {
    let reader = ArmoredReader::new(blob.as_bytes());
    let decryptor =
        age::Decryptor::new(reader).map_err(|e| Error::DecryptionFailed(format!("{e}")))?;

    let identity = age::scrypt::Identity::new(SecretString::from(password.to_owned()));
    let mut decrypted = Vec::new();
    let mut reader = decryptor
        .decrypt(std::iter::once(&identity as &dyn age::Identity))
        .map_err(|e| Error::DecryptionFailed(format!("{e}")))?;

    reader
        .read_to_end(&mut decrypted)
        .map_err(|e| Error::DecryptionFailed(format!("{e}")))?;

    String::from_utf8(decrypted).map_err(|e| Error::DecryptionFailed(format!("UTF-8 error: {e}")))
}

/// Whether a stored value is an armored ciphertext blob.
pub fn is_ciphertext(value: &str) -> bool {
    value.trim_start().starts_with(ARMOR_BEGIN)
}
