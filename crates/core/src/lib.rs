//! Pure course-metadata domain: choice enums, static lookup tables and the
//! URL slug rules. No database, no async, no I/O.

pub mod choices;
pub mod constants;
pub mod error;
pub mod learn_pages;
pub mod types;
pub mod url_slug;
