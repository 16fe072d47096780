//! Integration tests for course metadata persistence and slug history.
//!
//! Exercises the repository layer against a real database:
//! - Seeded course types
//! - Ordered subject and organization links
//! - Slug migration view (draft filtering, ordering, active slug)
//! - Active slug switching (history, re-activation, conflicts)

use assert_matches::assert_matches;
use sqlx::PgPool;
use uuid::Uuid;

use discovery_core::url_slug::CourseCategory;
use discovery_db::models::course::{Course, CreateCourse};
use discovery_db::models::course_url_slug::SlugUpdate;
use discovery_db::models::organization::CreateOrganization;
use discovery_db::models::subject::CreateSubject;
use discovery_db::repositories::{
    CourseRepo, CourseTypeRepo, CourseUrlSlugRepo, OrganizationRepo, SubjectRepo,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_course(key: &str, title: &str) -> CreateCourse {
    CreateCourse {
        uuid: None,
        key: key.to_string(),
        title: title.to_string(),
        draft: None,
        course_type_id: None,
    }
}

async fn create_course(pool: &PgPool, key: &str) -> Course {
    CourseRepo::create(pool, &new_course(key, "Test Course"))
        .await
        .unwrap()
}

// ---------------------------------------------------------------------------
// Test: lookup tables
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_course_types_are_seeded(pool: PgPool) {
    discovery_db::health_check(&pool).await.unwrap();

    let exec_ed = CourseTypeRepo::find_by_slug(&pool, "executive-education-2u")
        .await
        .unwrap()
        .expect("executive education type should be seeded");
    assert_eq!(exec_ed.category(), CourseCategory::ExecutiveEducation);

    let bootcamp = CourseTypeRepo::find_by_slug(&pool, "bootcamp-2u")
        .await
        .unwrap()
        .expect("bootcamp type should be seeded");
    assert_eq!(bootcamp.category(), CourseCategory::Bootcamp);

    let all = CourseTypeRepo::list(&pool).await.unwrap();
    assert!(all.len() >= 2);
    assert!(CourseTypeRepo::find_by_slug(&pool, "nonexistent")
        .await
        .unwrap()
        .is_none());
}

// ---------------------------------------------------------------------------
// Test: courses
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_draft_and_official_copies_share_uuid(pool: PgPool) {
    let official = create_course(&pool, "MITx+6.00x").await;
    assert!(!official.draft);

    let draft = CourseRepo::create(
        &pool,
        &CreateCourse {
            uuid: Some(official.uuid),
            draft: Some(true),
            ..new_course("MITx+6.00x", "Draft Title")
        },
    )
    .await
    .unwrap();
    assert_eq!(draft.uuid, official.uuid);

    let found = CourseRepo::find_by_uuid(&pool, official.uuid, false)
        .await
        .unwrap()
        .expect("official copy should exist");
    assert_eq!(found.id, official.id);

    let found_draft = CourseRepo::find_by_uuid(&pool, official.uuid, true)
        .await
        .unwrap()
        .expect("draft copy should exist");
    assert_eq!(found_draft.id, draft.id);

    // A second official copy with the same UUID is rejected.
    let duplicate = CourseRepo::create(
        &pool,
        &CreateCourse {
            uuid: Some(official.uuid),
            ..new_course("MITx+6.00y", "Duplicate")
        },
    )
    .await;
    assert!(duplicate.is_err());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_subject_and_organization_order(pool: PgPool) {
    let course = create_course(&pool, "HarvardX+CS50").await;

    let math = SubjectRepo::create(
        &pool,
        &CreateSubject {
            slug: "math".into(),
            name: "Math".into(),
        },
    )
    .await
    .unwrap();
    let cs = SubjectRepo::create(
        &pool,
        &CreateSubject {
            slug: "computer-science".into(),
            name: "Computer Science".into(),
        },
    )
    .await
    .unwrap();
    SubjectRepo::add_to_course(&pool, course.id, math.id, 2).await.unwrap();
    SubjectRepo::add_to_course(&pool, course.id, cs.id, 1).await.unwrap();

    let subjects = SubjectRepo::list_for_course(&pool, course.id).await.unwrap();
    let slugs: Vec<&str> = subjects.iter().map(|s| s.slug.as_str()).collect();
    assert_eq!(slugs, ["computer-science", "math"]);

    let harvard = OrganizationRepo::create(
        &pool,
        &CreateOrganization {
            key: "HarvardX".into(),
            name: "Harvard University".into(),
        },
    )
    .await
    .unwrap();
    let mit = OrganizationRepo::create(
        &pool,
        &CreateOrganization {
            key: "MITx".into(),
            name: "MIT".into(),
        },
    )
    .await
    .unwrap();
    OrganizationRepo::add_authoring_to_course(&pool, course.id, harvard.id, 0)
        .await
        .unwrap();
    OrganizationRepo::add_authoring_to_course(&pool, course.id, mit.id, 0)
        .await
        .unwrap();

    let orgs = OrganizationRepo::list_authoring_for_course(&pool, course.id)
        .await
        .unwrap();
    let keys: Vec<&str> = orgs.iter().map(|o| o.key.as_str()).collect();
    assert_eq!(keys, ["HarvardX", "MITx"], "equal sort order falls back to link order");

    let found = OrganizationRepo::find_by_key(&pool, "MITx").await.unwrap();
    assert_eq!(found.map(|o| o.id), Some(mit.id));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_for_slug_migration(pool: PgPool) {
    let bootcamp_type = CourseTypeRepo::find_by_slug(&pool, "bootcamp-2u")
        .await
        .unwrap()
        .unwrap();

    let zeta = CourseRepo::create(
        &pool,
        &CreateCourse {
            course_type_id: Some(bootcamp_type.id),
            ..new_course("ZetaX+Boot", "Coding Boot Camp")
        },
    )
    .await
    .unwrap();
    let alpha = create_course(&pool, "AlphaX+Intro").await;
    let draft_only = CourseRepo::create(
        &pool,
        &CreateCourse {
            draft: Some(true),
            ..new_course("DraftX+Only", "Draft")
        },
    )
    .await
    .unwrap();

    let subject = SubjectRepo::create(
        &pool,
        &CreateSubject {
            slug: "computer-science".into(),
            name: "Computer Science".into(),
        },
    )
    .await
    .unwrap();
    SubjectRepo::add_to_course(&pool, zeta.id, subject.id, 0).await.unwrap();

    let org = OrganizationRepo::create(
        &pool,
        &CreateOrganization {
            key: "ZetaX".into(),
            name: "Zeta".into(),
        },
    )
    .await
    .unwrap();
    OrganizationRepo::add_authoring_to_course(&pool, zeta.id, org.id, 0)
        .await
        .unwrap();

    CourseUrlSlugRepo::create(&pool, zeta.id, "old-coding", false).await.unwrap();
    CourseUrlSlugRepo::create(&pool, zeta.id, "coding-boot-camp", true).await.unwrap();

    let contexts = CourseRepo::list_for_slug_migration(
        &pool,
        &[zeta.uuid, alpha.uuid, draft_only.uuid, Uuid::new_v4()],
    )
    .await
    .unwrap();

    let keys: Vec<&str> = contexts.iter().map(|c| c.course.key.as_str()).collect();
    assert_eq!(keys, ["AlphaX+Intro", "ZetaX+Boot"], "drafts and unknown UUIDs excluded");

    let alpha_ctx = &contexts[0];
    assert!(alpha_ctx.active_slug.is_none());
    assert!(alpha_ctx.subject_slugs.is_empty());
    assert_eq!(alpha_ctx.category(), CourseCategory::Standard);

    let zeta_ctx = &contexts[1];
    assert_eq!(zeta_ctx.course_type_slug.as_deref(), Some("bootcamp-2u"));
    assert_eq!(zeta_ctx.active_slug.as_deref(), Some("coding-boot-camp"));
    assert_eq!(zeta_ctx.subject_slugs, ["computer-science"]);
    assert_eq!(zeta_ctx.organization_keys, ["ZetaX"]);
    assert_eq!(zeta_ctx.category(), CourseCategory::Bootcamp);

    let input = zeta_ctx.slug_input();
    assert_eq!(input.title, "Coding Boot Camp");
    assert_eq!(input.active_slug, Some("coding-boot-camp"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_for_slug_migration_empty(pool: PgPool) {
    let contexts = CourseRepo::list_for_slug_migration(&pool, &[Uuid::new_v4()])
        .await
        .unwrap();
    assert!(contexts.is_empty());
}

// ---------------------------------------------------------------------------
// Test: active slug switching
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_set_active_keeps_history(pool: PgPool) {
    let course = create_course(&pool, "MITx+18.01x").await;
    CourseUrlSlugRepo::create(&pool, course.id, "calculus", true).await.unwrap();

    let update = CourseUrlSlugRepo::set_active(&pool, course.id, "learn/math/mitx-calculus")
        .await
        .unwrap();
    assert_matches!(update, SlugUpdate::Activated(ref slug) if slug.is_active);

    let active = CourseUrlSlugRepo::find_active_for_course(&pool, course.id)
        .await
        .unwrap()
        .expect("course should have an active slug");
    assert_eq!(active.url_slug, "learn/math/mitx-calculus");

    let history = CourseUrlSlugRepo::list_for_course(&pool, course.id).await.unwrap();
    assert_eq!(history.len(), 2);
    let old = history.iter().find(|s| s.url_slug == "calculus").unwrap();
    assert!(!old.is_active, "previous slug stays in history as inactive");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_set_active_reactivates_existing_slug(pool: PgPool) {
    let course = create_course(&pool, "MITx+8.01x").await;
    CourseUrlSlugRepo::create(&pool, course.id, "physics", false).await.unwrap();
    CourseUrlSlugRepo::create(&pool, course.id, "physics-2", true).await.unwrap();

    let update = CourseUrlSlugRepo::set_active(&pool, course.id, "physics")
        .await
        .unwrap();
    assert_matches!(update, SlugUpdate::Activated(ref slug) if slug.url_slug == "physics");

    let history = CourseUrlSlugRepo::list_for_course(&pool, course.id).await.unwrap();
    assert_eq!(history.len(), 2, "no duplicate row for a re-activated slug");
    assert_eq!(history.iter().filter(|s| s.is_active).count(), 1);

    // Setting the already-active slug again is a no-op.
    let again = CourseUrlSlugRepo::set_active(&pool, course.id, "physics")
        .await
        .unwrap();
    assert_matches!(again, SlugUpdate::Activated(_));
    let history = CourseUrlSlugRepo::list_for_course(&pool, course.id).await.unwrap();
    assert_eq!(history.len(), 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_set_active_refuses_slug_of_other_course(pool: PgPool) {
    let owner = create_course(&pool, "MITx+7.00x").await;
    let other = create_course(&pool, "HarvardX+Bio").await;
    CourseUrlSlugRepo::create(&pool, owner.id, "biology", true).await.unwrap();
    CourseUrlSlugRepo::create(&pool, other.id, "intro-bio", true).await.unwrap();

    let update = CourseUrlSlugRepo::set_active(&pool, other.id, "biology")
        .await
        .unwrap();
    assert_matches!(update, SlugUpdate::Conflict { owner_course_id } if owner_course_id == owner.id);

    let active = CourseUrlSlugRepo::find_active_for_course(&pool, other.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(active.url_slug, "intro-bio", "conflicting update writes nothing");

    let owned = CourseUrlSlugRepo::find_by_slug(&pool, "biology")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(owned.course_id, owner.id);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_second_active_slug_violates_constraint(pool: PgPool) {
    let course = create_course(&pool, "MITx+2.01x").await;
    CourseUrlSlugRepo::create(&pool, course.id, "mechanics", true).await.unwrap();

    let result = CourseUrlSlugRepo::create(&pool, course.id, "mechanics-2", true).await;
    assert!(result.is_err());
}
