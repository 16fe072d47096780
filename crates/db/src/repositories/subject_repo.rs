//! Repository for the `subjects` table and the `course_subjects` junction.

use discovery_core::types::DbId;
use sqlx::PgPool;

use crate::models::subject::{CreateSubject, Subject};

const COLUMNS: &str = "id, slug, name, created_at, updated_at";

/// Provides operations for subjects and their course links.
pub struct SubjectRepo;

impl SubjectRepo {
    pub async fn create(pool: &PgPool, input: &CreateSubject) -> Result<Subject, sqlx::Error> {
        let query = format!(
            "INSERT INTO subjects (slug, name) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Subject>(&query)
            .bind(&input.slug)
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<Subject>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM subjects WHERE slug = $1");
        sqlx::query_as::<_, Subject>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// Link a subject to a course. Lower `sort_order` comes first; the first
    /// subject is the course's primary subject.
    pub async fn add_to_course(
        pool: &PgPool,
        course_id: DbId,
        subject_id: DbId,
        sort_order: i32,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO course_subjects (course_id, subject_id, sort_order) VALUES ($1, $2, $3)",
        )
        .bind(course_id)
        .bind(subject_id)
        .bind(sort_order)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// List a course's subjects, primary subject first.
    pub async fn list_for_course(
        pool: &PgPool,
        course_id: DbId,
    ) -> Result<Vec<Subject>, sqlx::Error> {
        sqlx::query_as::<_, Subject>(
            "SELECT s.id, s.slug, s.name, s.created_at, s.updated_at \
             FROM subjects s JOIN course_subjects cs ON cs.subject_id = s.id \
             WHERE cs.course_id = $1 \
             ORDER BY cs.sort_order, cs.id",
        )
        .bind(course_id)
        .fetch_all(pool)
        .await
    }
}
