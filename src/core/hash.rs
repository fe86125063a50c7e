//! Checksums and identifiers.

use sha1::Sha1;
use sha2::{Digest, Sha256};
use uuid::Uuid;

const ADLER_MOD: u32 = 65_521;

/// Lowercase hex SHA-1 of the input bytes.
pub fn sha1sum(input: &str) -> String {
    let mut hasher = Sha1::new();
    hasher.update(input.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Lowercase hex SHA-256 of the input bytes.
pub fn sha256sum(input: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Adler-32 checksum rendered in decimal.
pub fn adler32sum(input: &str) -> String {
    let (a, b) = input.as_bytes().iter().fold((1u32, 0u32), |(a, b), byte| {
        let a = (a + u32::from(*byte)) % ADLER_MOD;
        (a, (b + a) % ADLER_MOD)
    });
    ((b << 16) | a).to_string()
}

pub fn uuidv4() -> String {
    Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sha1_hex_digest() {
        assert_eq!(sha1sum("abc"), "a9993e364706816aba3e25717850c26c9cd0d89d");
        assert_eq!(sha1sum(""), "da39a3ee5e6b4b0d3255bfef95601890afd80709");
    }

    #[test]
    fn sha256_hex_digest() {
        assert_eq!(
            sha256sum("abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn adler32_decimal() {
        assert_eq!(adler32sum(""), "1");
        assert_eq!(adler32sum("Wikipedia"), "300286872");
    }

    #[test]
    fn uuidv4_is_version_four() {
        let id = uuidv4();
        let parsed = Uuid::parse_str(&id).unwrap();
        assert_eq!(parsed.get_version_num(), 4);
        assert_ne!(uuidv4(), id);
    }
}
