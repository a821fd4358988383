// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! User endpoints: signup/signin and purchase lookup.

use axum::{extract::State, Json};

use crate::{
    auth::{password, Role, UserAuth},
    error::ApiError,
    models::{
        CourseId, NewAccount, PurchasesResponse, SigninRequest, SigninResponse, SignupRequest,
        SignupResponse,
    },
    state::AppState,
    validate,
};

#[utoipa::path(
    post,
    path = "/api/v1/user/signup",
    request_body = SignupRequest,
    tag = "User",
    responses(
        (status = 200, body = SignupResponse),
        (status = 400, description = "Invalid inputs (with field errors) or email already registered")
    )
)]
pub async fn signup(
    State(state): State<AppState>,
    Json(request): Json<SignupRequest>,
) -> Result<Json<SignupResponse>, ApiError> {
    // Unlike the admin path, the user path enumerates the violated fields.
    if let Err(errors) = validate::user_signup(&request) {
        return Err(ApiError::bad_request_with_errors("Incorrect inputs", errors));
    }

    {
        let store = state.store.read().await;
        if store
            .find_account_by_email(Role::User, &request.email)
            .is_some()
        {
            return Err(ApiError::bad_request("User with this email already exists"));
        }
    }

    let password_hash = password::hash(&request.password).map_err(|e| {
        tracing::error!(error = %e, "password hashing failed");
        ApiError::internal("Internal server error")
    })?;

    let account = state
        .store
        .write()
        .await
        .create_account(
            Role::User,
            NewAccount {
                email: request.email,
                password_hash,
                first_name: request.first_name,
                last_name: request.last_name,
            },
        )
        .map_err(|_| ApiError::bad_request("User with this email already exists"))?;

    let token = state.user_tokens.issue(&account.id).map_err(|e| {
        tracing::error!(error = %e, "token issuance failed");
        ApiError::internal("Internal server error")
    })?;

    Ok(Json(SignupResponse {
        message: "Signup succeeded".to_string(),
        token,
    }))
}

#[utoipa::path(
    post,
    path = "/api/v1/user/signin",
    request_body = SigninRequest,
    tag = "User",
    responses(
        (status = 200, body = SigninResponse),
        (status = 400, description = "Malformed credentials"),
        (status = 403, description = "Incorrect credentials")
    )
)]
pub async fn signin(
    State(state): State<AppState>,
    Json(request): Json<SigninRequest>,
) -> Result<Json<SigninResponse>, ApiError> {
    // The credential schema is checked before any lookup: a password that
    // cannot satisfy the policy is a 400, not a 403.
    if let Err(errors) = validate::user_credentials(&request) {
        return Err(ApiError::bad_request_with_errors("Incorrect inputs", errors));
    }

    let account = state
        .store
        .read()
        .await
        .find_account_by_email(Role::User, &request.email)
        .ok_or_else(|| ApiError::forbidden("Incorrect credentials"))?;

    let password_matches =
        password::verify(&request.password, &account.password_hash).map_err(|e| {
            tracing::error!(error = %e, "password verification failed");
            ApiError::internal("Internal server error")
        })?;

    if !password_matches {
        return Err(ApiError::forbidden("Incorrect credentials"));
    }

    let token = state.user_tokens.issue(&account.id).map_err(|e| {
        tracing::error!(error = %e, "token issuance failed");
        ApiError::internal("Internal server error")
    })?;

    Ok(Json(SigninResponse { token }))
}

#[utoipa::path(
    get,
    path = "/api/v1/user/purchases",
    tag = "User",
    responses(
        (status = 200, body = PurchasesResponse),
        (status = 401, description = "Missing or invalid user token")
    )
)]
pub async fn purchases(
    UserAuth(user_id): UserAuth,
    State(state): State<AppState>,
) -> Result<Json<PurchasesResponse>, ApiError> {
    let store = state.store.read().await;

    let purchases = store.purchases_by_user(&user_id);
    let course_ids: Vec<CourseId> = purchases
        .iter()
        .map(|purchase| purchase.course_id.clone())
        .collect();
    let courses_data = store.courses_by_ids(&course_ids);

    Ok(Json(PurchasesResponse {
        purchases,
        courses_data,
    }))
}
