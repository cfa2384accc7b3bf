//! Domain-separated SHA-256 digests for states and plans.
//!
//! Digest input is `domain || data`. Every domain prefix ends in a NUL byte
//! so no prefix is a prefix of another.

use std::fmt;

use sha2::{Digest, Sha256};

/// Domain prefix for state fingerprints.
pub const DOMAIN_STATE_FINGERPRINT: &[u8] = b"MCPLAN::STATE::V1\0";

/// Domain prefix for plan digests.
pub const DOMAIN_PLAN: &[u8] = b"MCPLAN::PLAN::V1\0";

const PREFIX: &str = "sha256:";

/// A SHA-256 digest, rendered as `"sha256:<64 lowercase hex>"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContentHash([u8; 32]);

impl ContentHash {
    /// Parse the rendered form back into a digest.
    ///
    /// Returns `None` for any other algorithm tag, a wrong length, or
    /// non-hex characters.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let hex_digest = s.strip_prefix(PREFIX)?;
        let mut bytes = [0u8; 32];
        hex::decode_to_slice(hex_digest, &mut bytes).ok()?;
        Some(Self(bytes))
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Lowercase hex of the raw digest, without the algorithm tag.
    #[must_use]
    pub fn hex_digest(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{PREFIX}{}", self.hex_digest())
    }
}

/// SHA-256 of `data` under `domain`.
#[must_use]
pub fn canonical_hash(domain: &[u8], data: &[u8]) -> ContentHash {
    let mut hasher = Sha256::new();
    hasher.update(domain);
    hasher.update(data);
    let mut digest = [0u8; 32];
    digest.copy_from_slice(&hasher.finalize());
    ContentHash(digest)
}
