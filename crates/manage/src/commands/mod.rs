//! Management command implementations.

pub mod migrate_url_slugs;
