//! Migrate the active URL slug of courses to their category folder.
//!
//! ```text
//! discovery-manage migrate-url-slugs <course uuid>...
//! ```
//!
//! Courses whose active slug already has a subfolder are left alone.
//! Courses missing a subject mapping or an authoring organization are
//! logged and skipped. Each slug switch is its own transaction.

use std::collections::HashSet;

use discovery_core::url_slug::{derive_slug, SlugSkip};
use discovery_db::models::course_url_slug::SlugUpdate;
use discovery_db::repositories::{CourseRepo, CourseUrlSlugRepo};
use discovery_db::DbPool;
use serde::Serialize;
use uuid::Uuid;

use crate::error::CommandError;

/// A course whose slug was (or, in a dry run, would be) rewritten.
#[derive(Debug, Clone, Serialize)]
pub struct MigratedCourse {
    pub key: String,
    pub uuid: Uuid,
    pub old_slug: String,
    pub new_slug: String,
}

/// A course left untouched because its slug could not be derived or set.
#[derive(Debug, Clone, Serialize)]
pub struct SkippedCourse {
    pub key: String,
    pub uuid: Uuid,
    pub reason: String,
}

/// Outcome of one run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MigrationReport {
    pub dry_run: bool,
    pub migrated: Vec<MigratedCourse>,
    /// Keys of courses whose slug was already migrated.
    pub already_migrated: Vec<String>,
    pub skipped: Vec<SkippedCourse>,
    /// Requested UUIDs with no published course.
    pub not_found: Vec<Uuid>,
}

impl MigrationReport {
    pub fn summary(&self) -> String {
        let verb = if self.dry_run { "would migrate" } else { "migrated" };
        format!(
            "{verb} {}, already migrated {}, skipped {}, not found {}",
            self.migrated.len(),
            self.already_migrated.len(),
            self.skipped.len(),
            self.not_found.len()
        )
    }
}

/// Parse course UUID arguments, dropping repeats so each course is visited
/// once. Fails on an empty list or on any malformed UUID.
pub fn parse_course_uuids(args: &[String]) -> Result<Vec<Uuid>, CommandError> {
    if args.is_empty() {
        return Err(CommandError::MissingArguments);
    }

    let mut seen = HashSet::new();
    let mut uuids = Vec::with_capacity(args.len());
    for arg in args {
        let uuid =
            Uuid::parse_str(arg.trim()).map_err(|_| CommandError::InvalidUuid(arg.clone()))?;
        if seen.insert(uuid) {
            uuids.push(uuid);
        }
    }
    Ok(uuids)
}

/// Migrate the slugs of the published courses with the given UUIDs.
pub async fn run(
    pool: &DbPool,
    uuids: &[Uuid],
    dry_run: bool,
) -> Result<MigrationReport, CommandError> {
    if uuids.is_empty() {
        return Err(CommandError::MissingArguments);
    }

    let courses = CourseRepo::list_for_slug_migration(pool, uuids).await?;
    tracing::debug!(requested = uuids.len(), found = courses.len(), "Loaded courses");

    let mut report = MigrationReport {
        dry_run,
        ..Default::default()
    };

    let found: HashSet<Uuid> = courses.iter().map(|c| c.course.uuid).collect();
    report.not_found = uuids.iter().copied().filter(|u| !found.contains(u)).collect();
    for uuid in &report.not_found {
        tracing::warn!(%uuid, "Course not found");
    }

    for ctx in &courses {
        let key = &ctx.course.key;

        let new_slug = match derive_slug(&ctx.slug_input()) {
            Ok(slug) => slug,
            Err(SlugSkip::AlreadyMigrated) => {
                tracing::info!(course_key = %key, "Course already migrated: {key}");
                report.already_migrated.push(key.clone());
                continue;
            }
            Err(skip) => {
                tracing::warn!(course_key = %key, reason = %skip, "Skipping course");
                report.skipped.push(SkippedCourse {
                    key: key.clone(),
                    uuid: ctx.course.uuid,
                    reason: skip.to_string(),
                });
                continue;
            }
        };
        // derive_slug only succeeds with an active slug.
        let old_slug = ctx.active_slug.clone().unwrap_or_default();

        if dry_run {
            tracing::info!(course_key = %key, %old_slug, %new_slug, "Would migrate course slug");
        } else {
            match CourseUrlSlugRepo::set_active(pool, ctx.course.id, &new_slug).await? {
                SlugUpdate::Activated(_) => {
                    tracing::info!(course_key = %key, %old_slug, %new_slug, "Migrated course slug");
                }
                SlugUpdate::Conflict { owner_course_id } => {
                    tracing::warn!(
                        course_key = %key,
                        %new_slug,
                        owner_course_id,
                        "Slug already belongs to another course"
                    );
                    report.skipped.push(SkippedCourse {
                        key: key.clone(),
                        uuid: ctx.course.uuid,
                        reason: format!("slug {new_slug} already belongs to another course"),
                    });
                    continue;
                }
            }
        }

        report.migrated.push(MigratedCourse {
            key: key.clone(),
            uuid: ctx.course.uuid,
            old_slug,
            new_slug,
        });
    }

    Ok(report)
}
