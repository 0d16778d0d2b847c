//! Security configuration.

use serde::Deserialize;

use super::error::ValidationError;

/// Credential hashing settings.
#[derive(Debug, Clone, Deserialize)]
pub struct SecurityConfig {
    /// HMAC-SHA256 iteration count for password hashing.
    #[serde(default = "default_password_hash_cost")]
    pub password_hash_cost: u32,
}

impl SecurityConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.password_hash_cost == 0 {
            return Err(ValidationError::InvalidHashCost);
        }
        Ok(())
    }
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            password_hash_cost: default_password_hash_cost(),
        }
    }
}

fn default_password_hash_cost() -> u32 {
    600
}
