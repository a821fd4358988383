// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! In-memory document store for accounts, courses and purchases.
//!
//! Collections are keyed by store-assigned uuid strings and read through
//! filter predicates, mirroring an external document service. Admin and user
//! accounts live in separate namespaces: the same email may exist in both.
//!
//! [`InMemoryStore::create_account`] is a conditional insert (insert-if-absent
//! on email within the namespace), so the signup uniqueness check holds even
//! when the caller's earlier existence probe raced another request.

use std::collections::HashMap;

use thiserror::Error;
use uuid::Uuid;

use crate::auth::Role;
use crate::models::{Account, AccountId, Course, CourseId, CourseUpdate, NewAccount, NewCourse, Purchase};

/// Store-level failures.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("an account with this email already exists in the {0} namespace")]
    DuplicateEmail(Role),
}

#[derive(Default)]
pub struct InMemoryStore {
    admins: HashMap<String, Account>,
    users: HashMap<String, Account>,
    courses: HashMap<String, Course>,
    purchases: HashMap<String, Purchase>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn namespace(&self, role: Role) -> &HashMap<String, Account> {
        match role {
            Role::Admin => &self.admins,
            Role::User => &self.users,
        }
    }

    fn namespace_mut(&mut self, role: Role) -> &mut HashMap<String, Account> {
        match role {
            Role::Admin => &mut self.admins,
            Role::User => &mut self.users,
        }
    }

    /// Find an account by email within a role namespace. Emails are matched
    /// case-sensitively, as stored.
    pub fn find_account_by_email(&self, role: Role, email: &str) -> Option<Account> {
        self.namespace(role)
            .values()
            .find(|account| account.email == email)
            .cloned()
    }

    /// Conditionally insert a new account: fails without side effects if the
    /// email is already taken in the namespace.
    pub fn create_account(&mut self, role: Role, new: NewAccount) -> Result<Account, StoreError> {
        if self
            .namespace(role)
            .values()
            .any(|account| account.email == new.email)
        {
            return Err(StoreError::DuplicateEmail(role));
        }

        let id = Uuid::new_v4().to_string();
        let account = Account {
            id: AccountId(id.clone()),
            email: new.email,
            password_hash: new.password_hash,
            first_name: new.first_name,
            last_name: new.last_name,
            role,
        };
        self.namespace_mut(role).insert(id, account.clone());
        Ok(account)
    }

    pub fn create_course(&mut self, new: NewCourse) -> Course {
        let id = Uuid::new_v4().to_string();
        let course = Course {
            id: CourseId(id.clone()),
            title: new.title,
            description: new.description,
            image_url: new.image_url,
            price: new.price,
            creator_id: new.creator_id,
        };
        self.courses.insert(id, course.clone());
        course
    }

    /// Find-and-update matching both the course id and the creator. Returns
    /// the updated record, or `None` when no course matches the predicate --
    /// a missing course and someone else's course are indistinguishable.
    pub fn update_course(
        &mut self,
        course_id: &CourseId,
        creator_id: &AccountId,
        updates: &CourseUpdate,
    ) -> Option<Course> {
        let course = self
            .courses
            .get_mut(&course_id.0)
            .filter(|course| &course.creator_id == creator_id)?;

        if let Some(title) = &updates.title {
            course.title = title.clone();
        }
        if let Some(description) = &updates.description {
            course.description = description.clone();
        }
        if let Some(image_url) = &updates.image_url {
            course.image_url = image_url.clone();
        }
        if let Some(price) = updates.price {
            course.price = price;
        }

        Some(course.clone())
    }

    pub fn courses_by_creator(&self, creator_id: &AccountId) -> Vec<Course> {
        self.courses
            .values()
            .filter(|course| &course.creator_id == creator_id)
            .cloned()
            .collect()
    }

    pub fn courses_by_ids(&self, ids: &[CourseId]) -> Vec<Course> {
        self.courses
            .values()
            .filter(|course| ids.contains(&course.id))
            .cloned()
            .collect()
    }

    pub fn purchases_by_user(&self, user_id: &AccountId) -> Vec<Purchase> {
        self.purchases
            .values()
            .filter(|purchase| &purchase.user_id == user_id)
            .cloned()
            .collect()
    }

    /// Insert a purchase record. Purchases are created by the checkout
    /// service; this exists for seeding and tests.
    pub fn insert_purchase(&mut self, user_id: AccountId, course_id: CourseId) -> Purchase {
        let id = Uuid::new_v4().to_string();
        let purchase = Purchase {
            id: id.clone(),
            user_id,
            course_id,
        };
        self.purchases.insert(id, purchase.clone());
        purchase
    }
}
