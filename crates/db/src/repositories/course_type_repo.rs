//! Repository for the `course_types` lookup table.

use sqlx::PgPool;

use crate::models::course_type::CourseType;

const COLUMNS: &str = "id, slug, name, created_at, updated_at";

/// Read access to seeded course types.
pub struct CourseTypeRepo;

impl CourseTypeRepo {
    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<CourseType>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM course_types WHERE slug = $1");
        sqlx::query_as::<_, CourseType>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// List all course types ordered by slug.
    pub async fn list(pool: &PgPool) -> Result<Vec<CourseType>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM course_types ORDER BY slug");
        sqlx::query_as::<_, CourseType>(&query).fetch_all(pool).await
    }
}
