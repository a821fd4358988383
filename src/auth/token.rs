// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Session token issuance and verification.
//!
//! Tokens are stateless HS256 JWTs binding the account id (`sub`). There is
//! one [`TokenIssuer`] per role namespace, each constructed from its own
//! injected secret; issuer and verifier are the same process, so symmetric
//! signing suffices.
//!
//! Tokens carry no `exp` claim and never expire: there is no revocation or
//! refresh path, so a leaked token stays valid until the secret rotates.

use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use super::error::AuthError;
use crate::models::AccountId;

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    /// Subject: the account id within the issuing namespace.
    sub: String,
    /// Issued-at timestamp (seconds).
    iat: i64,
}

/// Issues and verifies tokens for one role namespace.
#[derive(Clone)]
pub struct TokenIssuer {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl TokenIssuer {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// Sign a token for the given account.
    pub fn issue(&self, subject: &AccountId) -> Result<String, jsonwebtoken::errors::Error> {
        let claims = Claims {
            sub: subject.0.clone(),
            iat: Utc::now().timestamp(),
        };
        encode(&Header::default(), &claims, &self.encoding)
    }

    /// Verify a token and return the subject it binds. Any failure --
    /// malformed token, bad signature, a token signed for the other role
    /// namespace -- collapses to [`AuthError::InvalidToken`].
    pub fn verify(&self, token: &str) -> Result<AccountId, AuthError> {
        let mut validation = Validation::new(Algorithm::HS256);
        // Tokens carry no expiry claim.
        validation.required_spec_claims.clear();
        validation.validate_exp = false;

        let data = decode::<Claims>(token, &self.decoding, &validation)
            .map_err(|_| AuthError::InvalidToken)?;
        Ok(AccountId(data.claims.sub))
    }
}
