//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts

pub mod course;
pub mod course_type;
pub mod course_url_slug;
pub mod organization;
pub mod subject;
