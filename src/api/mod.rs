// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    models::{
        Course, CourseListResponse, CourseUpdate, CreateCourseRequest, CreateCourseResponse,
        Purchase, PurchasesResponse, SigninRequest, SigninResponse, SignupRequest,
        SignupResponse, UpdateCourseRequest, UpdateCourseResponse,
    },
    state::AppState,
    validate::FieldError,
};

pub mod admin;
pub mod user;

pub fn router(state: AppState) -> Router {
    let admin_routes = Router::new()
        .route("/signup", post(admin::signup))
        .route("/signin", post(admin::signin))
        .route(
            "/course",
            post(admin::create_course).put(admin::update_course),
        )
        .route("/course/bulk", get(admin::course_bulk));

    let user_routes = Router::new()
        .route("/signup", post(user::signup))
        .route("/signin", post(user::signin))
        .route("/purchases", get(user::purchases));

    let v1_routes = Router::new()
        .nest("/admin", admin_routes)
        .nest("/user", user_routes)
        .with_state(state);

    Router::new()
        .nest("/api/v1", v1_routes)
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

#[derive(OpenApi)]
#[openapi(
    paths(
        admin::signup,
        admin::signin,
        admin::create_course,
        admin::update_course,
        admin::course_bulk,
        user::signup,
        user::signin,
        user::purchases
    ),
    components(
        schemas(
            Course,
            Purchase,
            SignupRequest,
            SigninRequest,
            SignupResponse,
            SigninResponse,
            CreateCourseRequest,
            CreateCourseResponse,
            CourseUpdate,
            UpdateCourseRequest,
            UpdateCourseResponse,
            CourseListResponse,
            PurchasesResponse,
            FieldError
        )
    ),
    tags(
        (name = "Admin", description = "Admin signup/signin and course management"),
        (name = "User", description = "User signup/signin and purchase lookup")
    )
)]
struct ApiDoc;
