//! Repository for the `course_url_slugs` history table.

use discovery_core::types::DbId;
use sqlx::PgPool;

use crate::models::course_url_slug::{CourseUrlSlug, SlugUpdate};

const COLUMNS: &str = "id, course_id, url_slug, is_active, created_at, updated_at";

/// Provides access to course slug history.
pub struct CourseUrlSlugRepo;

impl CourseUrlSlugRepo {
    /// Record a slug for a course without touching its other slugs.
    ///
    /// Inserting a second active slug for the same course violates
    /// `uq_course_url_slugs_active`; use [`Self::set_active`] to switch.
    pub async fn create(
        pool: &PgPool,
        course_id: DbId,
        url_slug: &str,
        is_active: bool,
    ) -> Result<CourseUrlSlug, sqlx::Error> {
        let query = format!(
            "INSERT INTO course_url_slugs (course_id, url_slug, is_active)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CourseUrlSlug>(&query)
            .bind(course_id)
            .bind(url_slug)
            .bind(is_active)
            .fetch_one(pool)
            .await
    }

    pub async fn find_active_for_course(
        pool: &PgPool,
        course_id: DbId,
    ) -> Result<Option<CourseUrlSlug>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM course_url_slugs WHERE course_id = $1 AND is_active"
        );
        sqlx::query_as::<_, CourseUrlSlug>(&query)
            .bind(course_id)
            .fetch_optional(pool)
            .await
    }

    /// Full slug history of a course, oldest first.
    pub async fn list_for_course(
        pool: &PgPool,
        course_id: DbId,
    ) -> Result<Vec<CourseUrlSlug>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM course_url_slugs WHERE course_id = $1 ORDER BY created_at, id"
        );
        sqlx::query_as::<_, CourseUrlSlug>(&query)
            .bind(course_id)
            .fetch_all(pool)
            .await
    }

    pub async fn find_by_slug(
        pool: &PgPool,
        url_slug: &str,
    ) -> Result<Option<CourseUrlSlug>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM course_url_slugs WHERE url_slug = $1");
        sqlx::query_as::<_, CourseUrlSlug>(&query)
            .bind(url_slug)
            .fetch_optional(pool)
            .await
    }

    /// Make `url_slug` the active slug of a course. Uses a transaction to
    /// ensure atomicity.
    ///
    /// The previous active slug stays in history as inactive. A slug already
    /// in this course's history is re-activated rather than duplicated. A
    /// slug owned by another course is refused with [`SlugUpdate::Conflict`].
    pub async fn set_active(
        pool: &PgPool,
        course_id: DbId,
        url_slug: &str,
    ) -> Result<SlugUpdate, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let owner: Option<(DbId,)> = sqlx::query_as(
            "SELECT course_id FROM course_url_slugs WHERE url_slug = $1 FOR UPDATE",
        )
        .bind(url_slug)
        .fetch_optional(&mut *tx)
        .await?;

        if let Some((owner_course_id,)) = owner {
            if owner_course_id != course_id {
                tx.rollback().await?;
                return Ok(SlugUpdate::Conflict { owner_course_id });
            }
        }

        // Deactivate first so the partial unique index never sees two active rows.
        sqlx::query(
            "UPDATE course_url_slugs SET is_active = false \
             WHERE course_id = $1 AND is_active AND url_slug <> $2",
        )
        .bind(course_id)
        .bind(url_slug)
        .execute(&mut *tx)
        .await?;

        let query = if owner.is_some() {
            format!(
                "UPDATE course_url_slugs SET is_active = true \
                 WHERE course_id = $1 AND url_slug = $2 \
                 RETURNING {COLUMNS}"
            )
        } else {
            format!(
                "INSERT INTO course_url_slugs (course_id, url_slug, is_active) \
                 VALUES ($1, $2, true) \
                 RETURNING {COLUMNS}"
            )
        };
        let slug = sqlx::query_as::<_, CourseUrlSlug>(&query)
            .bind(course_id)
            .bind(url_slug)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        tracing::debug!(course_id, url_slug, "Activated course url slug");
        Ok(SlugUpdate::Activated(slug))
    }
}
