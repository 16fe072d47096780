//! Course entity model, DTOs and the slug migration view.

use discovery_core::types::{DbId, Timestamp};
use discovery_core::url_slug::{CourseCategory, SlugInput};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A course row from the `courses` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Course {
    pub id: DbId,
    pub uuid: Uuid,
    pub key: String,
    pub title: String,
    pub draft: bool,
    pub course_type_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new course.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCourse {
    /// Generated if omitted. Pass the official copy's UUID when creating a draft.
    pub uuid: Option<Uuid>,
    pub key: String,
    pub title: String,
    /// Defaults to `false`.
    pub draft: Option<bool>,
    pub course_type_id: Option<DbId>,
}

/// A course with everything the slug rules read, loaded in one pass.
#[derive(Debug, Clone, Serialize)]
pub struct CourseSlugContext {
    pub course: Course,
    pub course_type_slug: Option<String>,
    pub active_slug: Option<String>,
    /// Primary subject first.
    pub subject_slugs: Vec<String>,
    /// Primary authoring organization first.
    pub organization_keys: Vec<String>,
}

impl CourseSlugContext {
    pub fn category(&self) -> CourseCategory {
        CourseCategory::from_course_type_slug(self.course_type_slug.as_deref())
    }

    /// Borrow the fields the slug rules need.
    pub fn slug_input(&self) -> SlugInput<'_> {
        SlugInput {
            active_slug: self.active_slug.as_deref(),
            title: &self.course.title,
            course_type_slug: self.course_type_slug.as_deref(),
            subject_slugs: self.subject_slugs.iter().map(String::as_str).collect(),
            organization_keys: self.organization_keys.iter().map(String::as_str).collect(),
        }
    }
}
