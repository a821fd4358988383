// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Password hashing.
//!
//! bcrypt with a fixed work factor of 10. The hash embeds its own salt and
//! cost, and `bcrypt::verify` compares in constant time. Hashes are opaque:
//! they are stored, never logged, never serialized to clients.

use bcrypt::BcryptError;

/// bcrypt cost factor. Raising it invalidates nothing (the cost is embedded
/// per hash) but slows every new signup.
pub const HASH_COST: u32 = 10;

/// Hash a plaintext password with a fresh random salt.
pub fn hash(plaintext: &str) -> Result<String, BcryptError> {
    bcrypt::hash(plaintext, HASH_COST)
}

/// Verify a plaintext password against a stored hash.
pub fn verify(plaintext: &str, hashed: &str) -> Result<bool, BcryptError> {
    bcrypt::verify(plaintext, hashed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_then_verify_round_trips() {
        let hashed = hash("Abcdef1!").unwrap();
        assert!(verify("Abcdef1!", &hashed).unwrap());
        assert!(!verify("Abcdef1?", &hashed).unwrap());
    }

    #[test]
    fn hashes_are_salted() {
        let first = hash("Abcdef1!").unwrap();
        let second = hash("Abcdef1!").unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn verify_rejects_garbage_hash() {
        assert!(verify("Abcdef1!", "not-a-bcrypt-hash").is_err());
    }
}
