use sha2::{Digest, Sha256};

/// Renders a raw key as a binary digit string, `'1'` for true and `'0'` for false.
pub fn encode_key(bits: &[bool]) -> String {
    bits.iter().map(|&bit| if bit { '1' } else { '0' }).collect()
}

/// Short SHA-256 fingerprint of an encoded key, safe to log.
pub fn key_fingerprint(key: &str) -> String {
    let digest = Sha256::digest(key.as_bytes());
    hex::encode(&digest[..8])
}
