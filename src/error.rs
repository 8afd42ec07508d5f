use std::string::FromUtf8Error;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Failures surfaced by a key exchange run.
#[derive(Debug, Error)]
pub enum Error {
    /// The key source reported that the exchange did not complete cleanly.
    #[error("quantum key exchange reported failure (eavesdropping or excessive noise)")]
    ExchangeFailed,

    #[error("key length mismatch: alice has {alice} bits, bob has {bob} bits")]
    KeyLengthMismatch { alice: usize, bob: usize },

    #[error("one-time pad key is empty")]
    EmptyKey,

    #[error("ciphertext is not valid hex: {0}")]
    InvalidCiphertext(#[from] hex::FromHexError),

    #[error("ciphertext does not decode to UTF-8 text: {0}")]
    CiphertextEncoding(#[from] FromUtf8Error),

    /// XOR of a message character with a key character left the Unicode scalar range.
    #[error("pad produced invalid code point U+{0:04X}")]
    InvalidCodePoint(u32),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
