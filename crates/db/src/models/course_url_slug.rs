//! Course URL slug history model.

use discovery_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `course_url_slugs` table.
///
/// Every slug a course has ever used is kept; at most one is active.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CourseUrlSlug {
    pub id: DbId,
    pub course_id: DbId,
    pub url_slug: String,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Result of switching a course's active slug.
#[derive(Debug, Clone)]
pub enum SlugUpdate {
    /// The slug is now the course's active slug.
    Activated(CourseUrlSlug),
    /// The slug belongs to another course's history; nothing was written.
    Conflict { owner_course_id: DbId },
}
