//! One-time-pad cipher service.
//!
//! Each character of the message is XORed, code point by code point, with the
//! key's characters, repeating the key when it is shorter than the message.
//! The XORed characters travel as lowercase hex of their UTF-8 encoding.

use crate::error::{Error, Result};

pub trait Cipher {
    fn encrypt(&self, plaintext: &str, key: &str) -> Result<String>;
    fn decrypt(&self, ciphertext: &str, key: &str) -> Result<String>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct OneTimePad;

impl Cipher for OneTimePad {
    fn encrypt(&self, plaintext: &str, key: &str) -> Result<String> {
        let pad = xor_with_key(plaintext, key)?;
        Ok(hex::encode(pad))
    }

    fn decrypt(&self, ciphertext: &str, key: &str) -> Result<String> {
        if key.is_empty() {
            return Err(Error::EmptyKey);
        }
        let pad = String::from_utf8(hex::decode(ciphertext)?)?;
        xor_with_key(&pad, key)
    }
}

// With binary keys a mismatch only toggles bit 0, and the surrogate block is
// even-aligned, so a wrong key garbles text without leaving the scalar range.
fn xor_with_key(text: &str, key: &str) -> Result<String> {
    if key.is_empty() {
        return Err(Error::EmptyKey);
    }
    text.chars()
        .zip(key.chars().cycle())
        .map(|(t, k)| {
            let point = u32::from(t) ^ u32::from(k);
            char::from_u32(point).ok_or(Error::InvalidCodePoint(point))
        })
        .collect()
}
