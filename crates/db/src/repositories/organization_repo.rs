//! Repository for the `organizations` table and the
//! `course_authoring_organizations` junction.

use discovery_core::types::DbId;
use sqlx::PgPool;

use crate::models::organization::{CreateOrganization, Organization};

const COLUMNS: &str = "id, key, name, created_at, updated_at";

/// Provides operations for organizations and their authoring links.
pub struct OrganizationRepo;

impl OrganizationRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateOrganization,
    ) -> Result<Organization, sqlx::Error> {
        let query = format!(
            "INSERT INTO organizations (key, name) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Organization>(&query)
            .bind(&input.key)
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_key(pool: &PgPool, key: &str) -> Result<Option<Organization>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM organizations WHERE key = $1");
        sqlx::query_as::<_, Organization>(&query)
            .bind(key)
            .fetch_optional(pool)
            .await
    }

    /// Add an authoring organization to a course. The lowest `sort_order`
    /// is the primary organization.
    pub async fn add_authoring_to_course(
        pool: &PgPool,
        course_id: DbId,
        organization_id: DbId,
        sort_order: i32,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO course_authoring_organizations (course_id, organization_id, sort_order) \
             VALUES ($1, $2, $3)",
        )
        .bind(course_id)
        .bind(organization_id)
        .bind(sort_order)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// List a course's authoring organizations, primary first.
    pub async fn list_authoring_for_course(
        pool: &PgPool,
        course_id: DbId,
    ) -> Result<Vec<Organization>, sqlx::Error> {
        sqlx::query_as::<_, Organization>(
            "SELECT o.id, o.key, o.name, o.created_at, o.updated_at \
             FROM organizations o \
             JOIN course_authoring_organizations cao ON cao.organization_id = o.id \
             WHERE cao.course_id = $1 \
             ORDER BY cao.sort_order, cao.id",
        )
        .bind(course_id)
        .fetch_all(pool)
        .await
    }
}
