// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Account roles.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The two role namespaces of the storefront.
///
/// Roles partition accounts and signing secrets; they are not a privilege
/// hierarchy. An admin token carries no weight on user endpoints and vice
/// versa.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Creates and manages courses
    Admin,
    /// Buys courses
    User,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::User => "user",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
