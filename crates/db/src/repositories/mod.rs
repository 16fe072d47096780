//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods
//! that accept `&PgPool` as the first argument.

pub mod course_repo;
pub mod course_type_repo;
pub mod course_url_slug_repo;
pub mod organization_repo;
pub mod subject_repo;

pub use course_repo::CourseRepo;
pub use course_type_repo::CourseTypeRepo;
pub use course_url_slug_repo::CourseUrlSlugRepo;
pub use organization_repo::OrganizationRepo;
pub use subject_repo::SubjectRepo;
