//! Course type model.

use discovery_core::types::{DbId, Timestamp};
use discovery_core::url_slug::CourseCategory;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `course_types` table. Seeded by migrations.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CourseType {
    pub id: DbId,
    pub slug: String,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl CourseType {
    pub fn category(&self) -> CourseCategory {
        CourseCategory::from_course_type_slug(Some(&self.slug))
    }
}
