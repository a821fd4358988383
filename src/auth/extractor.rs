// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Axum extractors for the role-scoped authorization gate.
//!
//! Use [`AdminAuth`] or [`UserAuth`] in a handler signature to require a
//! token from that role namespace:
//!
//! ```rust,ignore
//! async fn create_course(
//!     AdminAuth(admin_id): AdminAuth,
//!     State(state): State<AppState>,
//!     Json(request): Json<CreateCourseRequest>,
//! ) -> Result<Json<CreateCourseResponse>, ApiError> {
//!     // admin_id is the verified admin account id
//! }
//! ```
//!
//! The gate rejects before the handler body runs and performs no store
//! access; it only resolves the token to a subject id.

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};

use super::error::AuthError;
use crate::models::AccountId;
use crate::state::AppState;

fn bearer_token(parts: &Parts) -> Result<&str, AuthError> {
    let header = parts
        .headers
        .get(AUTHORIZATION)
        .ok_or(AuthError::MissingAuthHeader)?
        .to_str()
        .map_err(|_| AuthError::InvalidAuthHeader)?;

    header
        .strip_prefix("Bearer ")
        .map(str::trim)
        .ok_or(AuthError::InvalidAuthHeader)
}

/// Requires a token from the admin namespace; yields the admin account id.
pub struct AdminAuth(pub AccountId);

impl FromRequestParts<AppState> for AdminAuth {
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts)?;
        let subject = state.admin_tokens.verify(token)?;
        Ok(AdminAuth(subject))
    }
}

/// Requires a token from the user namespace; yields the user account id.
pub struct UserAuth(pub AccountId);

impl FromRequestParts<AppState> for UserAuth {
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts)?;
        let subject = state.user_tokens.verify(token)?;
        Ok(UserAuth(subject))
    }
}
