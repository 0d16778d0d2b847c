//! HMAC-SHA256 password hasher.
//!
//! Hash format: `gg1$<cost>$<salt>$<digest>` with a random UUID salt and
//! `cost` chained HMAC-SHA256 iterations. The format prefix allows future
//! algorithm migrations without rehashing every stored credential at once.

use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, SecretString};
use sha2::Sha256;
use subtle::ConstantTimeEq;
use uuid::Uuid;

use crate::ports::PasswordHasher;

type HmacSha256 = Hmac<Sha256>;

const FORMAT_TAG: &str = "gg1";

/// Password hasher backed by iterated HMAC-SHA256.
pub struct HmacSha256PasswordHasher {
    cost: u32,
}

impl HmacSha256PasswordHasher {
    /// Creates a hasher with the given iteration count.
    ///
    /// # Panics
    ///
    /// Panics on a zero cost; a single unkeyed pass is a configuration bug.
    pub fn new(cost: u32) -> Self {
        assert!(cost > 0, "password hash cost must be positive");
        Self { cost }
    }

    fn digest(raw: &SecretString, salt: &str, cost: u32) -> String {
        let mut block = raw.expose_secret().as_bytes().to_vec();
        for _ in 0..cost {
            let mut mac = HmacSha256::new_from_slice(salt.as_bytes())
                .expect("HMAC accepts keys of any length");
            mac.update(&block);
            block = mac.finalize().into_bytes().to_vec();
        }
        hex_encode(&block)
    }
}

impl PasswordHasher for HmacSha256PasswordHasher {
    fn hash(&self, raw: &SecretString) -> String {
        let salt = Uuid::new_v4().simple().to_string();
        let digest = Self::digest(raw, &salt, self.cost);
        format!("{FORMAT_TAG}${}${salt}${digest}", self.cost)
    }

    fn verify(&self, raw: &SecretString, hash: &str) -> bool {
        let mut parts = hash.split('$');
        let (tag, cost, salt, digest) = match (
            parts.next(),
            parts.next(),
            parts.next(),
            parts.next(),
            parts.next(),
        ) {
            (Some(tag), Some(cost), Some(salt), Some(digest), None) => {
                (tag, cost, salt, digest)
            }
            _ => return false,
        };
        if tag != FORMAT_TAG {
            return false;
        }
        let cost: u32 = match cost.parse() {
            Ok(cost) if cost > 0 => cost,
            _ => return false,
        };

        let candidate = Self::digest(raw, salt, cost);
        candidate.as_bytes().ct_eq(digest.as_bytes()).into()
    }
}

fn hex_encode(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        use std::fmt::Write;
        write!(out, "{byte:02x}").expect("writing to a String cannot fail");
    }
    out
}
