//! Course-metadata constants: key formats, URL names, upload rules and the
//! analytics query templates.

use std::sync::LazyLock;

use regex::Regex;

use crate::choices::define_choice_enum;

// ---------------------------------------------------------------------------
// Key formats
// ---------------------------------------------------------------------------

/// Course key, e.g. `edX+DemoX` or the legacy `edX/DemoX`.
pub const COURSE_ID_REGEX: &str = r"[^/+]+(/|\+)[^/+]+";

/// Course run key, e.g. `course-v1:edX+DemoX+2024` or `edX/DemoX/2024`.
pub const COURSE_RUN_ID_REGEX: &str = r"[^/+]+(/|\+)[^/+]+(/|\+)[^/]+";

pub const COURSE_UUID_REGEX: &str = r"[0-9a-f-]+";

static COURSE_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!("^(?:{COURSE_ID_REGEX})$")).expect("valid regex"));
static COURSE_RUN_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!("^(?:{COURSE_RUN_ID_REGEX})$")).expect("valid regex"));
static COURSE_UUID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!("^(?:{COURSE_UUID_REGEX})$")).expect("valid regex"));

pub fn is_course_key(value: &str) -> bool {
    COURSE_ID_RE.is_match(value)
}

pub fn is_course_run_key(value: &str) -> bool {
    COURSE_RUN_ID_RE.is_match(value)
}

/// Loose check used by URL routing: lowercase hex digits and dashes only.
pub fn is_course_uuid(value: &str) -> bool {
    COURSE_UUID_RE.is_match(value)
}

// ---------------------------------------------------------------------------
// URL names and slugs
// ---------------------------------------------------------------------------

pub const COURSE_SKILLS_URL_NAME: &str = "course_skills";
pub const REFRESH_COURSE_SKILLS_URL_NAME: &str = "refresh_course_skills";
pub const REFRESH_PROGRAM_SKILLS_URL_NAME: &str = "refresh_program_skills";

pub const MASTERS_PROGRAM_TYPE_SLUG: &str = "masters";

// ---------------------------------------------------------------------------
// Uploads and rich text
// ---------------------------------------------------------------------------

/// Accepted image MIME types and the extension stored for each.
///
/// SVG uploads are converted to PNG, not stored as SVG.
pub const IMAGE_TYPES: &[(&str, &str)] = &[
    ("image/jpeg", "jpg"),
    ("image/png", "png"),
    ("image/svg+xml", "svg"),
];

pub fn image_extension(mime_type: &str) -> Option<&'static str> {
    IMAGE_TYPES
        .iter()
        .find(|(mime, _)| *mime == mime_type)
        .map(|(_, ext)| *ext)
}

pub const ALLOWED_ANCHOR_TAG_ATTRIBUTES: &[&str] = &["href", "title", "target", "rel"];

pub fn is_allowed_anchor_attribute(name: &str) -> bool {
    ALLOWED_ANCHOR_TAG_ATTRIBUTES.contains(&name)
}

pub const DRIVE_LINK_PATTERNS: &[&str] = &[
    r"https://docs\.google\.com/uc\?id=\w+",
    r"https://drive\.google\.com/file/d/\w+/view?usp=sharing",
];

static DRIVE_LINK_RES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    DRIVE_LINK_PATTERNS
        .iter()
        // `?` after `view` is the query separator, not an optional `w`.
        .map(|pattern| pattern.replace("/view?", r"/view\?"))
        .map(|pattern| Regex::new(&format!("^(?:{pattern})")).expect("valid regex"))
        .collect()
});

/// Whether `url` starts with a recognised Google Drive share link.
pub fn is_drive_link(url: &str) -> bool {
    DRIVE_LINK_RES.iter().any(|re| re.is_match(url))
}

pub const GOOGLE_CLIENT_API_SCOPE: &[&str] = &["https://www.googleapis.com/auth/drive.readonly"];

// ---------------------------------------------------------------------------
// Pathways
// ---------------------------------------------------------------------------

define_choice_enum! {
    /// Allowed values for a pathway's type.
    PathwayType {
        Credit => ("credit", "Credit"),
        Industry => ("industry", "Industry"),
    }
}

// ---------------------------------------------------------------------------
// Analytics query templates
// ---------------------------------------------------------------------------

/// Average hours-to-pass per course, binned into short/medium/long.
///
/// The bins match [`crate::choices::CourseLength::from_average_pass_hours`].
pub const SNOWFLAKE_POPULATE_COURSE_LENGTH_QUERY: &str = r#"
    WITH completions as (

    /* Get all completions, all time.
    */

    SELECT
        ccu.user_id,
        dc.course_uuid,
        ccu.courserun_key,
        DATE(ccu.passed_timestamp) as passed_date
    FROM
        business_intelligence.bi_course_completion as ccu
    LEFT JOIN
        core.dim_courseruns as dcr
    on
        ccu.courserun_key = dcr.courserun_key
    LEFT JOIN
        core.dim_courses as dc
    ON
        dcr.course_id = dc.course_id
    LEFT JOIN
        enterprise.ent_base_enterprise_enrollment as bee
    ON
        ccu.user_id = bee.lms_user_id AND ccu.courserun_key = bee.lms_courserun_key
    WHERE
        passed_timestamp IS NOT NULL

    ),

    time_to_pass as (

    /* Calculate the amount of time it took
       to pass the course for each completion.
    */


    SELECT
        completions.course_uuid,
        lt.user_id,
        SUM(lt.learning_time_seconds/60/60) as hours_of_learning
    FROM
        business_intelligence.learning_time as lt
    JOIN
        completions
    ON
        lt.user_id = completions.user_id
      AND
        lt.courserun_key = completions.courserun_key
      AND
        lt.date <= completions.passed_date
    JOIN
        discovery.course_metadata_courserun as disc
    ON
        lt.courserun_key = disc.key
    LEFT JOIN
        core.dim_courseruns as dim
    ON
        disc.key = dim.courserun_key
    WHERE
        disc.draft = False
    GROUP BY
        1,2
    ),

    courses as (

    /* Calculate the average amount
       of time it takes to pass a course.
        */

    SELECT
        course_uuid,
        round(AVG(hours_of_learning),1) as avg_pass_time,
        COUNT(*) as n_passed_learners
    FROM
        time_to_pass
    GROUP BY
        1
    )

    select
        course_uuid,
        avg_pass_time,
        case when avg_pass_time <= 6.5 then 'short'
        when avg_pass_time < 13 then 'medium'
        when avg_pass_time >= 13 then 'long'
        end as course_length_bin
    from
        courses
"#;

pub const SNOWFLAKE_REFRESH_COURSE_REVIEWS_QUERY: &str = r#"
    select
        COURSE_KEY,
        REVIEWS_COUNT,
        AVG_COURSE_RATING,
        CONFIDENT_LEARNERS_PERCENTAGE,
        MOST_COMMON_GOAL,
        MOST_COMMON_GOAL_LEARNERS_PERCENTAGE,
        TOTAL_ENROLLMENTS_IN_LAST_12_MONTHS
    from
        prod.enterprise.course_reviews
"#;
