// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # API Data Models
//!
//! Request and response structures for the REST API plus the stored record
//! types. Wire types derive `Serialize`/`Deserialize` with camelCase field
//! names and `ToSchema` for the OpenAPI document.
//!
//! ## Id Types
//!
//! [`AccountId`] and [`CourseId`] wrap the store-assigned uuid strings. They
//! provide type safety and keep ownership predicates (course `creator_id`
//! versus the authenticated subject) from degenerating into bare string
//! comparisons.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::auth::Role;

// =============================================================================
// Id Types
// =============================================================================

/// Store-assigned account identifier.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AccountId(pub String);

impl std::fmt::Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for AccountId {
    fn from(value: String) -> Self {
        AccountId(value)
    }
}

impl From<&str> for AccountId {
    fn from(value: &str) -> Self {
        AccountId(value.to_string())
    }
}

/// Store-assigned course identifier.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CourseId(pub String);

impl std::fmt::Display for CourseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for CourseId {
    fn from(value: String) -> Self {
        CourseId(value)
    }
}

impl From<&str> for CourseId {
    fn from(value: &str) -> Self {
        CourseId(value.to_string())
    }
}

// =============================================================================
// Stored Records
// =============================================================================

/// A stored account. Never serialized to clients; the password hash must not
/// leave the process.
#[derive(Clone, PartialEq)]
pub struct Account {
    pub id: AccountId,
    /// Unique within the account's role namespace, case-sensitive as stored.
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
}

// Manual Debug keeps the hash out of logs.
impl std::fmt::Debug for Account {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Account")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("password_hash", &"<redacted>")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("role", &self.role)
            .finish()
    }
}

/// Fields for a new account; the store assigns the id.
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
}

/// A stored course. Mutable only through the creator-scoped update path.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: CourseId,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub price: f64,
    /// References the admin account that created the course.
    pub creator_id: AccountId,
}

/// Fields for a new course; the store assigns the id.
#[derive(Debug, Clone)]
pub struct NewCourse {
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub price: f64,
    pub creator_id: AccountId,
}

/// A stored purchase record. Created outside this service; read-only here.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Purchase {
    pub id: String,
    pub user_id: AccountId,
    pub course_id: CourseId,
}

// =============================================================================
// Account Requests/Responses
// =============================================================================

/// Signup payload, shared by the admin and user flows. The two flows apply
/// different validation policies to it (see [`crate::validate`]).
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

/// Signin payload, shared by both role namespaces.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SigninRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SignupResponse {
    pub message: String,
    pub token: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SigninResponse {
    pub token: String,
}

// =============================================================================
// Course Requests/Responses
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCourseRequest {
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub price: f64,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCourseResponse {
    pub message: String,
    pub course_id: CourseId,
}

/// Partial course update. Absent fields are left untouched; unknown body
/// fields are ignored. Supplied values are applied without validation,
/// matching the create/update asymmetry of the original product.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CourseUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub price: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCourseRequest {
    pub course_id: CourseId,
    #[serde(flatten)]
    pub updates: CourseUpdate,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UpdateCourseResponse {
    pub message: String,
    pub course: Course,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CourseListResponse {
    pub courses: Vec<Course>,
}

// =============================================================================
// Purchase Responses
// =============================================================================

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PurchasesResponse {
    pub purchases: Vec<Purchase>,
    /// The courses referenced by `purchases`.
    pub courses_data: Vec<Course>,
}
