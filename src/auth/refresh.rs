//! Opaque refresh token generation
//!
//! Refresh tokens carry no structure: 32 bytes from the OS CSPRNG,
//! hex-encoded. Everything else about their lifecycle (owner, expiry,
//! revocation) lives in the refresh_tokens table.

use rand::{rngs::OsRng, RngCore};

use crate::auth::AuthError;

/// Raw entropy per token; hex-encodes to 64 characters
pub const REFRESH_TOKEN_BYTES: usize = 32;

/// Generate a new refresh token
///
/// No uniqueness check is performed here; collisions are cryptographically
/// negligible and the table's UNIQUE constraint is the backstop.
pub fn generate() -> Result<String, AuthError> {
    let mut bytes = [0u8; REFRESH_TOKEN_BYTES];
    OsRng
        .try_fill_bytes(&mut bytes)
        .map_err(|e| AuthError::TokenGeneration(e.to_string()))?;

    Ok(hex::encode(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_format() {
        let token = generate().unwrap();

        assert_eq!(token.len(), 64);
        assert!(token.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_generate_unique() {
        let token1 = generate().unwrap();
        let token2 = generate().unwrap();

        assert_ne!(token1, token2);
    }
}
