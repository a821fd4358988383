// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::auth::TokenIssuer;
use crate::config::Config;
use crate::store::InMemoryStore;

/// Shared application state. The store is the only mutable piece; the token
/// issuers are read-only after construction.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RwLock<InMemoryStore>>,
    /// Issuer/verifier for the admin token namespace.
    pub admin_tokens: TokenIssuer,
    /// Issuer/verifier for the user token namespace.
    pub user_tokens: TokenIssuer,
}

impl AppState {
    pub fn new(store: InMemoryStore, config: &Config) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            admin_tokens: TokenIssuer::new(&config.admin_token_secret),
            user_tokens: TokenIssuer::new(&config.user_token_secret),
        }
    }
}

impl Default for AppState {
    /// Test state with an empty store and fixed, distinct secrets per
    /// namespace.
    fn default() -> Self {
        Self::new(
            InMemoryStore::new(),
            &Config {
                admin_token_secret: "admin-test-secret".to_string(),
                user_token_secret: "user-test-secret".to_string(),
            },
        )
    }
}
