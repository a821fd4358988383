// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Runtime Configuration
//!
//! Configuration is loaded from the environment at startup. The two signing
//! secrets partition the token space between the admin and user role
//! namespaces: a token signed with one secret never verifies against the
//! other.
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `HOST` | Server bind address | `0.0.0.0` |
//! | `PORT` | Server bind port | `8080` |
//! | `JWT_ADMIN_SECRET` | Signing secret for admin session tokens | Required |
//! | `JWT_USER_SECRET` | Signing secret for user session tokens | Required |
//! | `LOG_FORMAT` | Logging format (`json` or `pretty`) | `pretty` |
//! | `RUST_LOG` | Log level filter | `info,tower_http=debug` |

use std::env;

use thiserror::Error;

/// Environment variable holding the admin token signing secret.
pub const JWT_ADMIN_SECRET_ENV: &str = "JWT_ADMIN_SECRET";

/// Environment variable holding the user token signing secret.
pub const JWT_USER_SECRET_ENV: &str = "JWT_USER_SECRET";

/// Configuration error raised during startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),
}

/// Process configuration, read once at startup and injected into
/// [`crate::state::AppState`].
#[derive(Clone)]
pub struct Config {
    /// Signing secret for the admin token namespace.
    pub admin_token_secret: String,
    /// Signing secret for the user token namespace.
    pub user_token_secret: String,
}

impl Config {
    /// Load configuration from the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            admin_token_secret: env::var(JWT_ADMIN_SECRET_ENV)
                .map_err(|_| ConfigError::MissingVar(JWT_ADMIN_SECRET_ENV))?,
            user_token_secret: env::var(JWT_USER_SECRET_ENV)
                .map_err(|_| ConfigError::MissingVar(JWT_USER_SECRET_ENV))?,
        })
    }
}

// Secrets must never end up in logs, so Debug redacts both fields.
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("admin_token_secret", &"<redacted>")
            .field("user_token_secret", &"<redacted>")
            .finish()
    }
}
