use sha2::{Digest, Sha256};

/// Lowercase hex SHA-256 of `url` with surrounding whitespace removed.
pub fn hash_url(url: &str) -> String {
	hex::encode(Sha256::digest(url.trim().as_bytes()))
}
