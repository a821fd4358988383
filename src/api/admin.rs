// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Admin endpoints: signup/signin and course management.

use axum::{extract::State, Json};

use crate::{
    auth::{password, AdminAuth, Role},
    error::ApiError,
    models::{
        CourseListResponse, CreateCourseRequest, CreateCourseResponse, NewAccount, NewCourse,
        SigninRequest, SigninResponse, SignupRequest, SignupResponse, UpdateCourseRequest,
        UpdateCourseResponse,
    },
    state::AppState,
    validate,
};

#[utoipa::path(
    post,
    path = "/api/v1/admin/signup",
    request_body = SignupRequest,
    tag = "Admin",
    responses(
        (status = 200, body = SignupResponse),
        (status = 400, description = "Invalid inputs or email already registered")
    )
)]
pub async fn signup(
    State(state): State<AppState>,
    Json(request): Json<SignupRequest>,
) -> Result<Json<SignupResponse>, ApiError> {
    if validate::admin_signup(&request).is_err() {
        return Err(ApiError::bad_request("Incorrect inputs"));
    }

    // Probe before hashing so a known duplicate skips the bcrypt work.
    {
        let store = state.store.read().await;
        if store
            .find_account_by_email(Role::Admin, &request.email)
            .is_some()
        {
            return Err(ApiError::bad_request("Admin with this email already exists"));
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
            Role::Admin,
            NewAccount {
                email: request.email,
                password_hash,
                first_name: request.first_name,
                last_name: request.last_name,
            },
        )
        .map_err(|_| ApiError::bad_request("Admin with this email already exists"))?;

    let token = state.admin_tokens.issue(&account.id).map_err(|e| {
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
    path = "/api/v1/admin/signin",
    request_body = SigninRequest,
    tag = "Admin",
    responses(
        (status = 200, body = SigninResponse),
        (status = 403, description = "Incorrect credentials")
    )
)]
pub async fn signin(
    State(state): State<AppState>,
    Json(request): Json<SigninRequest>,
) -> Result<Json<SigninResponse>, ApiError> {
    // Unknown email and wrong password produce the same response; the
    // distinction must not be observable.
    let account = state
        .store
        .read()
        .await
        .find_account_by_email(Role::Admin, &request.email)
        .ok_or_else(|| ApiError::forbidden("Incorrect credentials"))?;

    let password_matches =
        password::verify(&request.password, &account.password_hash).map_err(|e| {
            tracing::error!(error = %e, "password verification failed");
            ApiError::internal("Internal server error")
        })?;

    if !password_matches {
        return Err(ApiError::forbidden("Incorrect credentials"));
    }

    let token = state.admin_tokens.issue(&account.id).map_err(|e| {
        tracing::error!(error = %e, "token issuance failed");
        ApiError::internal("Internal server error")
    })?;

    Ok(Json(SigninResponse { token }))
}

#[utoipa::path(
    post,
    path = "/api/v1/admin/course",
    request_body = CreateCourseRequest,
    tag = "Admin",
    responses(
        (status = 200, body = CreateCourseResponse),
        (status = 400, description = "Invalid inputs"),
        (status = 401, description = "Missing or invalid admin token")
    )
)]
pub async fn create_course(
    AdminAuth(admin_id): AdminAuth,
    State(state): State<AppState>,
    Json(request): Json<CreateCourseRequest>,
) -> Result<Json<CreateCourseResponse>, ApiError> {
    if validate::course_payload(&request).is_err() {
        return Err(ApiError::bad_request("Incorrect inputs"));
    }

    let course = state.store.write().await.create_course(NewCourse {
        title: request.title,
        description: request.description,
        image_url: request.image_url,
        price: request.price,
        creator_id: admin_id,
    });

    Ok(Json(CreateCourseResponse {
        message: "Course created".to_string(),
        course_id: course.id,
    }))
}

#[utoipa::path(
    put,
    path = "/api/v1/admin/course",
    request_body = UpdateCourseRequest,
    tag = "Admin",
    responses(
        (status = 200, body = UpdateCourseResponse),
        (status = 404, description = "No course with this id owned by the caller"),
        (status = 401, description = "Missing or invalid admin token")
    )
)]
pub async fn update_course(
    AdminAuth(admin_id): AdminAuth,
    State(state): State<AppState>,
    Json(request): Json<UpdateCourseRequest>,
) -> Result<Json<UpdateCourseResponse>, ApiError> {
    // Ownership is part of the lookup predicate: someone else's course and a
    // nonexistent course are the same 404.
    let course = state
        .store
        .write()
        .await
        .update_course(&request.course_id, &admin_id, &request.updates)
        .ok_or_else(|| ApiError::not_found("Course not found"))?;

    Ok(Json(UpdateCourseResponse {
        message: "Course updated successfully".to_string(),
        course,
    }))
}

#[utoipa::path(
    get,
    path = "/api/v1/admin/course/bulk",
    tag = "Admin",
    responses(
        (status = 200, body = CourseListResponse),
        (status = 401, description = "Missing or invalid admin token")
    )
)]
pub async fn course_bulk(
    AdminAuth(admin_id): AdminAuth,
    State(state): State<AppState>,
) -> Result<Json<CourseListResponse>, ApiError> {
    let courses = state.store.read().await.courses_by_creator(&admin_id);
    Ok(Json(CourseListResponse { courses }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AccountId, CourseUpdate};
    use axum::http::StatusCode;

    fn signup_request(email: &str) -> SignupRequest {
        SignupRequest {
            email: email.to_string(),
            password: "Abcdef1!".to_string(),
            first_name: "A".to_string(),
            last_name: "B".to_string(),
        }
    }

    async fn signed_up_admin(state: &AppState, email: &str) -> (AccountId, String) {
        let Json(response) = signup(State(state.clone()), Json(signup_request(email)))
            .await
            .expect("signup succeeds");
        let id = state.admin_tokens.verify(&response.token).unwrap();
        (id, response.token)
    }

    #[tokio::test]
    async fn signup_issues_verifiable_token() {
        let state = AppState::default();

        let Json(response) = signup(State(state.clone()), Json(signup_request("a@x.com")))
            .await
            .expect("signup succeeds");

        assert_eq!(response.message, "Signup succeeded");
        assert!(!response.token.is_empty());

        let subject = state.admin_tokens.verify(&response.token).unwrap();
        let stored = state
            .store
            .read()
            .await
            .find_account_by_email(Role::Admin, "a@x.com")
            .unwrap();
        assert_eq!(subject, stored.id);
        // The plaintext never reaches the store.
        assert_ne!(stored.password_hash, "Abcdef1!");
    }

    #[tokio::test]
    async fn signup_rejects_duplicate_email_and_keeps_first_record() {
        let state = AppState::default();
        signed_up_admin(&state, "a@x.com").await;

        let first_hash = state
            .store
            .read()
            .await
            .find_account_by_email(Role::Admin, "a@x.com")
            .unwrap()
            .password_hash;

        let err = signup(State(state.clone()), Json(signup_request("a@x.com")))
            .await
            .unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.message, "Admin with this email already exists");

        let stored = state
            .store
            .read()
            .await
            .find_account_by_email(Role::Admin, "a@x.com")
            .unwrap();
        assert_eq!(stored.password_hash, first_hash);
    }

    #[tokio::test]
    async fn signup_rejects_bad_inputs_without_creating_account() {
        let state = AppState::default();
        let mut request = signup_request("a@x.com");
        request.password = "weak".to_string();

        let err = signup(State(state.clone()), Json(request)).await.unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.message, "Incorrect inputs");
        // The admin path reports no field errors.
        assert!(err.errors.is_none());

        assert!(state
            .store
            .read()
            .await
            .find_account_by_email(Role::Admin, "a@x.com")
            .is_none());
    }

    #[tokio::test]
    async fn signin_failure_does_not_reveal_which_credential_was_wrong() {
        let state = AppState::default();
        signed_up_admin(&state, "a@x.com").await;

        let unknown_email = signin(
            State(state.clone()),
            Json(SigninRequest {
                email: "nobody@x.com".to_string(),
                password: "Abcdef1!".to_string(),
            }),
        )
        .await
        .unwrap_err();

        let wrong_password = signin(
            State(state.clone()),
            Json(SigninRequest {
                email: "a@x.com".to_string(),
                password: "Wrong1!pass".to_string(),
            }),
        )
        .await
        .unwrap_err();

        assert_eq!(unknown_email.status, StatusCode::FORBIDDEN);
        assert_eq!(unknown_email.status, wrong_password.status);
        assert_eq!(unknown_email.message, wrong_password.message);
        assert_eq!(unknown_email.message, "Incorrect credentials");
    }

    #[tokio::test]
    async fn signin_returns_token_for_valid_credentials() {
        let state = AppState::default();
        let (id, _) = signed_up_admin(&state, "a@x.com").await;

        let Json(response) = signin(
            State(state.clone()),
            Json(SigninRequest {
                email: "a@x.com".to_string(),
                password: "Abcdef1!".to_string(),
            }),
        )
        .await
        .expect("signin succeeds");

        assert_eq!(state.admin_tokens.verify(&response.token).unwrap(), id);
    }

    #[tokio::test]
    async fn create_course_persists_with_creator() {
        let state = AppState::default();
        let (admin_id, _) = signed_up_admin(&state, "a@x.com").await;

        let Json(response) = create_course(
            AdminAuth(admin_id.clone()),
            State(state.clone()),
            Json(CreateCourseRequest {
                title: "T".to_string(),
                description: "D".to_string(),
                image_url: "https://x.com/i.png".to_string(),
                price: 10.0,
            }),
        )
        .await
        .expect("course creation succeeds");

        assert_eq!(response.message, "Course created");

        let courses = state.store.read().await.courses_by_creator(&admin_id);
        assert_eq!(courses.len(), 1);
        assert_eq!(courses[0].id, response.course_id);
        assert_eq!(courses[0].creator_id, admin_id);
    }

    #[tokio::test]
    async fn create_course_rejects_unparseable_image_url() {
        let state = AppState::default();

        let err = create_course(
            AdminAuth(AccountId::from("admin-1")),
            State(state.clone()),
            Json(CreateCourseRequest {
                title: "T".to_string(),
                description: "D".to_string(),
                image_url: "not a url".to_string(),
                price: 10.0,
            }),
        )
        .await
        .unwrap_err();

        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.message, "Incorrect inputs");
    }

    #[tokio::test]
    async fn update_course_of_another_admin_is_not_found() {
        let state = AppState::default();
        let (owner, _) = signed_up_admin(&state, "owner@x.com").await;
        let (intruder, _) = signed_up_admin(&state, "intruder@x.com").await;

        let Json(created) = create_course(
            AdminAuth(owner.clone()),
            State(state.clone()),
            Json(CreateCourseRequest {
                title: "T".to_string(),
                description: "D".to_string(),
                image_url: "https://x.com/i.png".to_string(),
                price: 10.0,
            }),
        )
        .await
        .unwrap();

        let err = update_course(
            AdminAuth(intruder),
            State(state.clone()),
            Json(UpdateCourseRequest {
                course_id: created.course_id.clone(),
                updates: CourseUpdate {
                    title: Some("Hijacked".to_string()),
                    ..CourseUpdate::default()
                },
            }),
        )
        .await
        .unwrap_err();

        // Not-found, not forbidden: existence must not leak.
        assert_eq!(err.status, StatusCode::NOT_FOUND);
        assert_eq!(err.message, "Course not found");

        let courses = state.store.read().await.courses_by_creator(&owner);
        assert_eq!(courses[0].title, "T");
    }

    #[tokio::test]
    async fn update_course_applies_supplied_fields() {
        let state = AppState::default();
        let (admin_id, _) = signed_up_admin(&state, "a@x.com").await;

        let Json(created) = create_course(
            AdminAuth(admin_id.clone()),
            State(state.clone()),
            Json(CreateCourseRequest {
                title: "T".to_string(),
                description: "D".to_string(),
                image_url: "https://x.com/i.png".to_string(),
                price: 10.0,
            }),
        )
        .await
        .unwrap();

        let Json(updated) = update_course(
            AdminAuth(admin_id),
            State(state.clone()),
            Json(UpdateCourseRequest {
                course_id: created.course_id,
                updates: CourseUpdate {
                    price: Some(25.0),
                    ..CourseUpdate::default()
                },
            }),
        )
        .await
        .expect("update succeeds");

        assert_eq!(updated.message, "Course updated successfully");
        assert_eq!(updated.course.price, 25.0);
        assert_eq!(updated.course.title, "T");
    }

    #[tokio::test]
    async fn course_bulk_returns_only_own_courses() {
        let state = AppState::default();
        let (mine, _) = signed_up_admin(&state, "mine@x.com").await;
        let (theirs, _) = signed_up_admin(&state, "theirs@x.com").await;

        for (admin, title) in [(&mine, "Mine"), (&theirs, "Theirs")] {
            create_course(
                AdminAuth(admin.clone()),
                State(state.clone()),
                Json(CreateCourseRequest {
                    title: title.to_string(),
                    description: "D".to_string(),
                    image_url: "https://x.com/i.png".to_string(),
                    price: 10.0,
                }),
            )
            .await
            .unwrap();
        }

        let Json(response) = course_bulk(AdminAuth(mine), State(state.clone()))
            .await
            .expect("listing succeeds");

        assert_eq!(response.courses.len(), 1);
        assert_eq!(response.courses[0].title, "Mine");
    }
}
