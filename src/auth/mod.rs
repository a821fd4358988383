// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Authentication Module
//!
//! Credentials and session tokens for the two role namespaces.
//!
//! ## Auth Flow
//!
//! 1. Client signs up or signs in against `/api/v1/{admin,user}`
//! 2. The handler hashes/verifies the password (`password`) and issues a
//!    JWT bound to the account id (`token`)
//! 3. Subsequent requests send `Authorization: Bearer <token>`
//! 4. The [`AdminAuth`]/[`UserAuth`] extractors verify the token against the
//!    namespace's secret and hand the resolved account id to the handler
//!
//! ## Security
//!
//! - Admin and user tokens are signed with distinct secrets; a token from
//!   one namespace fails verification in the other
//! - Tokens carry no expiry claim (a known, accepted limitation)
//! - Password hashes never leave the process

pub mod error;
pub mod extractor;
pub mod password;
pub mod roles;
pub mod token;

pub use error::AuthError;
pub use extractor::{AdminAuth, UserAuth};
pub use roles::Role;
pub use token::TokenIssuer;
