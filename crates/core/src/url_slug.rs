//! Course URL slug rules.
//!
//! Marketing URLs group courses into folders by category:
//!
//! - standard courses: `learn/{learn page}/{org}-{slug}`
//! - executive education: `executive-education/{org}-{slug}`
//! - bootcamps: `boot-camps/{bootcamp folder}/{org}-{slug}`
//!
//! `{org}` is the lower-cased key of the primary authoring organization and
//! `{slug}` is the course's current active slug. A slug that already has a
//! subfolder, whatever its category, counts as migrated and is never
//! rewritten.

use crate::learn_pages::{learn_page_for_subject, Language};

/// Course type slug for executive education courses.
pub const EXECUTIVE_EDUCATION_COURSE_TYPE_SLUG: &str = "executive-education-2u";

/// Course type slug for bootcamps.
pub const BOOTCAMP_COURSE_TYPE_SLUG: &str = "bootcamp-2u";

pub const LEARN_FOLDER: &str = "learn";
pub const EXECUTIVE_EDUCATION_FOLDER: &str = "executive-education";
pub const BOOTCAMP_FOLDER: &str = "boot-camps";

/// Bootcamp folder and the title phrases that select it. First match wins.
pub const BOOTCAMP_TITLE_FOLDERS: &[(&str, &[&str])] = &[
    (
        "coding",
        &["coding", "web development", "full stack", "software engineering"],
    ),
    ("data-analytics", &["data analytics", "data analysis", "data science"]),
    ("cybersecurity", &["cybersecurity", "cyber security"]),
    ("ux-ui-design", &["ux", "ui", "user experience"]),
    ("digital-marketing", &["digital marketing"]),
    ("product-management", &["product management"]),
    ("fintech", &["fintech", "financial technology"]),
    (
        "technology-project-management",
        &["technology project management", "tech project management"],
    ),
];

/// Marketing category of a course, derived from its course type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CourseCategory {
    Standard,
    ExecutiveEducation,
    Bootcamp,
}

impl CourseCategory {
    pub fn from_course_type_slug(slug: Option<&str>) -> Self {
        match slug {
            Some(EXECUTIVE_EDUCATION_COURSE_TYPE_SLUG) => Self::ExecutiveEducation,
            Some(BOOTCAMP_COURSE_TYPE_SLUG) => Self::Bootcamp,
            _ => Self::Standard,
        }
    }

    /// Top-level folder of slugs derived for this category.
    pub fn folder(self) -> &'static str {
        match self {
            Self::Standard => LEARN_FOLDER,
            Self::ExecutiveEducation => EXECUTIVE_EDUCATION_FOLDER,
            Self::Bootcamp => BOOTCAMP_FOLDER,
        }
    }
}

/// Why a course's slug was left as is.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SlugSkip {
    #[error("course already migrated")]
    AlreadyMigrated,

    #[error("course does not have an active url slug")]
    MissingActiveSlug,

    #[error("course does not have any subjects")]
    NoSubjects,

    #[error("could not find learn slug for subject: {0}")]
    UnmappedSubject(String),

    #[error("course does not have any authoring organizations")]
    NoOrganizations,
}

/// The course fields the slug rules read.
#[derive(Debug, Clone, Default)]
pub struct SlugInput<'a> {
    pub active_slug: Option<&'a str>,
    pub title: &'a str,
    pub course_type_slug: Option<&'a str>,
    /// Subject slugs, primary subject first.
    pub subject_slugs: Vec<&'a str>,
    /// Authoring organization keys, primary organization first.
    pub organization_keys: Vec<&'a str>,
}

impl SlugInput<'_> {
    pub fn category(&self) -> CourseCategory {
        CourseCategory::from_course_type_slug(self.course_type_slug)
    }
}

/// Whether the slug contains a folder. Such slugs are already migrated.
pub fn has_subfolder(slug: &str) -> bool {
    slug.contains('/')
}

/// Pick the bootcamp folder whose phrase appears as whole words in `title`.
pub fn bootcamp_folder_for_title(title: &str) -> Option<&'static str> {
    let lowered = title.to_lowercase();
    let words: Vec<&str> = lowered
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .collect();

    BOOTCAMP_TITLE_FOLDERS
        .iter()
        .find(|(_, phrases)| phrases.iter().any(|phrase| contains_phrase(&words, phrase)))
        .map(|(folder, _)| *folder)
}

fn contains_phrase(words: &[&str], phrase: &str) -> bool {
    let needle: Vec<&str> = phrase.split_whitespace().collect();
    if needle.is_empty() || needle.len() > words.len() {
        return false;
    }
    words.windows(needle.len()).any(|window| window == needle.as_slice())
}

/// Derive the migrated slug for a course.
///
/// # Examples
///
/// ```
/// use discovery_core::url_slug::{derive_slug, SlugInput};
///
/// let input = SlugInput {
///     active_slug: Some("intro-to-python"),
///     title: "Introduction to Python",
///     course_type_slug: Some("verified-audit"),
///     subject_slugs: vec!["computer-science"],
///     organization_keys: vec!["HarvardX"],
/// };
/// assert_eq!(
///     derive_slug(&input).unwrap(),
///     "learn/computer-programming/harvardx-intro-to-python"
/// );
/// ```
pub fn derive_slug(input: &SlugInput<'_>) -> Result<String, SlugSkip> {
    let current = input.active_slug.ok_or(SlugSkip::MissingActiveSlug)?;
    if has_subfolder(current) {
        return Err(SlugSkip::AlreadyMigrated);
    }

    let category = input.category();
    let root = category.folder();
    match category {
        CourseCategory::Standard => {
            let learn_slug = primary_learn_slug(input)?;
            let org = primary_organization(input)?;
            Ok(format!("{root}/{learn_slug}/{org}-{current}"))
        }
        CourseCategory::ExecutiveEducation => {
            let org = primary_organization(input)?;
            Ok(format!("{root}/{org}-{current}"))
        }
        CourseCategory::Bootcamp => {
            let folder = match bootcamp_folder_for_title(input.title) {
                Some(folder) => folder,
                None => primary_learn_slug(input)?,
            };
            let org = primary_organization(input)?;
            Ok(format!("{root}/{folder}/{org}-{current}"))
        }
    }
}

fn primary_learn_slug(input: &SlugInput<'_>) -> Result<&'static str, SlugSkip> {
    let subject = input.subject_slugs.first().ok_or(SlugSkip::NoSubjects)?;
    learn_page_for_subject(subject)
        .map(|page| page.slug_for(Language::En))
        .ok_or_else(|| SlugSkip::UnmappedSubject((*subject).to_string()))
}

fn primary_organization(input: &SlugInput<'_>) -> Result<String, SlugSkip> {
    input
        .organization_keys
        .first()
        .map(|key| key.to_lowercase())
        .ok_or(SlugSkip::NoOrganizations)
}
