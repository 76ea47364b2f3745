//! Locks and unlocks note content with a password.
//!
//! Content is encrypted with AES-256-GCM. The key is the SHA-256 digest of the
//! password; there is no salt and no work factor. Each call to [`lock`] picks
//! a fresh random nonce, so locking the same content twice gives different
//! ciphertexts.
//!
//! The ciphertext string is the base64 encoding of
//! `MAGIC || nonce || ciphertext-with-tag`.

use aes_gcm::{Aes256Gcm, KeyInit, Nonce, aead::Aead};
use base64::{Engine, engine::general_purpose::STANDARD as BASE64};
use rand::RngCore;
use sha2::{Digest, Sha256};

const MAGIC: &[u8; 4] = b"NKL1";
const NONCE_LEN: usize = 12;

/// The ciphertext could not be decrypted with the given password.
///
/// A wrong password and corrupt data are indistinguishable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("failed to decrypt note content: {reason}")]
pub struct DecryptionError {
    reason: &'static str,
}

impl DecryptionError {
    const fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

fn cipher_for(password: &str) -> Aes256Gcm {
    let key = Sha256::digest(password.as_bytes());
    Aes256Gcm::new(&key)
}

/// Encrypts `plaintext` under `password`.
///
/// # Panics
///
/// Panics if AES-GCM rejects the input, which only happens for messages far
/// larger than any note.
#[must_use]
pub fn lock(plaintext: &str, password: &str) -> String {
    let mut nonce = [0u8; NONCE_LEN];
    rand::rngs::OsRng.fill_bytes(&mut nonce);

    let ciphertext = cipher_for(password)
        .encrypt(Nonce::from_slice(&nonce), plaintext.as_bytes())
        .expect("AES-GCM encryption of an in-memory buffer cannot fail");

    let mut out = Vec::with_capacity(MAGIC.len() + NONCE_LEN + ciphertext.len());
    out.extend_from_slice(MAGIC);
    out.extend_from_slice(&nonce);
    out.extend_from_slice(&ciphertext);
    BASE64.encode(out)
}

/// Decrypts a string produced by [`lock`].
///
/// # Errors
///
/// Returns [`DecryptionError`] if the password is wrong, the ciphertext is
/// malformed or tampered with, or the recovered bytes are not valid UTF-8.
pub fn unlock(ciphertext: &str, password: &str) -> Result<String, DecryptionError> {
    let raw = BASE64
        .decode(ciphertext.trim())
        .map_err(|_| DecryptionError::new("not valid base64"))?;

    let payload = raw
        .strip_prefix(MAGIC.as_slice())
        .ok_or(DecryptionError::new("unrecognised format"))?;
    if payload.len() < NONCE_LEN {
        return Err(DecryptionError::new("truncated ciphertext"));
    }
    let (nonce, sealed) = payload.split_at(NONCE_LEN);

    let plaintext = cipher_for(password)
        .decrypt(Nonce::from_slice(nonce), sealed)
        .map_err(|_| DecryptionError::new("wrong password or corrupt data"))?;

    String::from_utf8(plaintext).map_err(|_| DecryptionError::new("content is not valid text"))
}
