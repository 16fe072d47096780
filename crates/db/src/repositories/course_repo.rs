//! Repository for the `courses` table.

use std::collections::HashMap;

use discovery_core::types::DbId;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::course::{Course, CourseSlugContext, CreateCourse};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, uuid, key, title, draft, course_type_id, created_at, updated_at";

/// Provides CRUD operations for courses.
pub struct CourseRepo;

impl CourseRepo {
    /// Insert a new course, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateCourse) -> Result<Course, sqlx::Error> {
        let query = format!(
            "INSERT INTO courses (uuid, key, title, draft, course_type_id)
             VALUES (COALESCE($1, gen_random_uuid()), $2, $3, COALESCE($4, false), $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Course>(&query)
            .bind(input.uuid)
            .bind(&input.key)
            .bind(&input.title)
            .bind(input.draft)
            .bind(input.course_type_id)
            .fetch_one(pool)
            .await
    }

    /// Find the draft or official copy of a course by UUID.
    pub async fn find_by_uuid(
        pool: &PgPool,
        uuid: Uuid,
        draft: bool,
    ) -> Result<Option<Course>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM courses WHERE uuid = $1 AND draft = $2");
        sqlx::query_as::<_, Course>(&query)
            .bind(uuid)
            .bind(draft)
            .fetch_optional(pool)
            .await
    }

    /// Load the official (non-draft) courses with the given UUIDs together
    /// with their course type, ordered subjects, ordered authoring
    /// organizations and active slug. Ordered by course key.
    ///
    /// Unknown UUIDs are ignored.
    pub async fn list_for_slug_migration(
        pool: &PgPool,
        uuids: &[Uuid],
    ) -> Result<Vec<CourseSlugContext>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM courses WHERE uuid = ANY($1) AND draft = false ORDER BY key"
        );
        let courses = sqlx::query_as::<_, Course>(&query)
            .bind(uuids)
            .fetch_all(pool)
            .await?;
        if courses.is_empty() {
            return Ok(Vec::new());
        }

        let course_ids: Vec<DbId> = courses.iter().map(|c| c.id).collect();
        let type_ids: Vec<DbId> = courses.iter().filter_map(|c| c.course_type_id).collect();

        let type_slugs: HashMap<DbId, String> = sqlx::query_as::<_, (DbId, String)>(
            "SELECT id, slug FROM course_types WHERE id = ANY($1)",
        )
        .bind(&type_ids)
        .fetch_all(pool)
        .await?
        .into_iter()
        .collect();

        let subjects = sqlx::query_as::<_, (DbId, String)>(
            "SELECT cs.course_id, s.slug FROM course_subjects cs \
             JOIN subjects s ON s.id = cs.subject_id \
             WHERE cs.course_id = ANY($1) \
             ORDER BY cs.course_id, cs.sort_order, cs.id",
        )
        .bind(&course_ids)
        .fetch_all(pool)
        .await?;

        let organizations = sqlx::query_as::<_, (DbId, String)>(
            "SELECT cao.course_id, o.key FROM course_authoring_organizations cao \
             JOIN organizations o ON o.id = cao.organization_id \
             WHERE cao.course_id = ANY($1) \
             ORDER BY cao.course_id, cao.sort_order, cao.id",
        )
        .bind(&course_ids)
        .fetch_all(pool)
        .await?;

        let mut active_slugs: HashMap<DbId, String> = sqlx::query_as::<_, (DbId, String)>(
            "SELECT course_id, url_slug FROM course_url_slugs \
             WHERE course_id = ANY($1) AND is_active",
        )
        .bind(&course_ids)
        .fetch_all(pool)
        .await?
        .into_iter()
        .collect();

        let mut subjects_by_course = group_by_course(subjects);
        let mut organizations_by_course = group_by_course(organizations);

        Ok(courses
            .into_iter()
            .map(|course| CourseSlugContext {
                course_type_slug: course
                    .course_type_id
                    .and_then(|id| type_slugs.get(&id).cloned()),
                active_slug: active_slugs.remove(&course.id),
                subject_slugs: subjects_by_course.remove(&course.id).unwrap_or_default(),
                organization_keys: organizations_by_course
                    .remove(&course.id)
                    .unwrap_or_default(),
                course,
            })
            .collect())
    }
}

/// Group `(course_id, value)` rows, preserving row order within each course.
fn group_by_course(rows: Vec<(DbId, String)>) -> HashMap<DbId, Vec<String>> {
    let mut grouped: HashMap<DbId, Vec<String>> = HashMap::new();
    for (course_id, value) in rows {
        grouped.entry(course_id).or_default().push(value);
    }
    grouped
}
