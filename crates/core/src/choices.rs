//! Choice enums for course, course run and program metadata.
//!
//! Each variant has a stored value (the string persisted in the database and
//! exchanged over the wire) and an English display label. Serde uses the
//! stored value.

macro_rules! define_choice_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => ($value:literal, $label:literal) ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[ $( $name::$variant ),+ ];

            /// Return the value as stored in the database.
            pub fn as_str(self) -> &'static str {
                match self {
                    $( Self::$variant => $value ),+
                }
            }

            /// Return the human-readable label.
            pub fn label(self) -> &'static str {
                match self {
                    $( Self::$variant => $label ),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::error::CoreError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $value => Ok(Self::$variant), )+
                    _ => Err($crate::error::CoreError::UnknownChoice {
                        choice: stringify!($name),
                        value: s.to_string(),
                    }),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let value = String::deserialize(deserializer)?;
                value.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

pub(crate) use define_choice_enum;

// ---------------------------------------------------------------------------
// Course runs
// ---------------------------------------------------------------------------

define_choice_enum! {
    /// Editorial lifecycle of a course run.
    CourseRunStatus {
        Unpublished => ("unpublished", "Unpublished"),
        LegalReview => ("review_by_legal", "Awaiting Review from Legal"),
        InternalReview => ("review_by_internal", "Awaiting Internal Review"),
        Reviewed => ("reviewed", "Reviewed"),
        Published => ("published", "Published"),
    }
}

impl CourseRunStatus {
    /// Statuses that only internal staff may move a run into or out of.
    pub const INTERNAL_STATUS_TRANSITIONS: &'static [CourseRunStatus] =
        &[CourseRunStatus::InternalReview, CourseRunStatus::Reviewed];

    /// Statuses during which a run is waiting on a reviewer.
    pub fn review_states() -> [CourseRunStatus; 2] {
        [CourseRunStatus::LegalReview, CourseRunStatus::InternalReview]
    }

    pub fn is_in_review(self) -> bool {
        Self::review_states().contains(&self)
    }

    pub fn is_internal_transition(self) -> bool {
        Self::INTERNAL_STATUS_TRANSITIONS.contains(&self)
    }
}

define_choice_enum! {
    /// Who sets the schedule of a course run.
    CourseRunPacing {
        /// Runs on a schedule set by the instructor, like a university course.
        InstructorPaced => ("instructor_paced", "Instructor-paced"),
        /// Runs on the learner's own schedule.
        SelfPaced => ("self_paced", "Self-paced"),
    }
}

define_choice_enum! {
    ReportingType {
        Mooc => ("mooc", "mooc"),
        Spoc => ("spoc", "spoc"),
        Test => ("test", "test"),
        Demo => ("demo", "demo"),
        Other => ("other", "other"),
    }
}

// ---------------------------------------------------------------------------
// Programs
// ---------------------------------------------------------------------------

define_choice_enum! {
    /// Program lifecycle status.
    ProgramStatus {
        Unpublished => ("unpublished", "Unpublished"),
        Active => ("active", "Active"),
        Retired => ("retired", "Retired"),
        Deleted => ("deleted", "Deleted"),
    }
}

// ---------------------------------------------------------------------------
// Seats and commerce
// ---------------------------------------------------------------------------

define_choice_enum! {
    /// Certificate awarded by a seat.
    CertificateType {
        Honor => ("honor", "Honor"),
        Credit => ("credit", "Credit"),
        Verified => ("verified", "Verified"),
        Professional => ("professional", "Professional"),
        ExecutiveEducation => ("executive-education", "Executive Education"),
        PaidExecutiveEducation => ("paid-executive-education", "Paid Executive Education"),
        UnpaidExecutiveEducation => ("unpaid-executive-education", "Unpaid Executive Education"),
        PaidBootcamp => ("paid-bootcamp", "Paid Bootcamp"),
        UnpaidBootcamp => ("unpaid-bootcamp", "Unpaid Bootcamp"),
    }
}

impl CertificateType {
    pub fn is_executive_education(self) -> bool {
        matches!(
            self,
            Self::ExecutiveEducation | Self::PaidExecutiveEducation | Self::UnpaidExecutiveEducation
        )
    }

    pub fn is_bootcamp(self) -> bool {
        matches!(self, Self::PaidBootcamp | Self::UnpaidBootcamp)
    }
}

define_choice_enum! {
    PayeeType {
        Platform => ("platform", "Platform"),
        Organization => ("organization", "Organization"),
    }
}

// ---------------------------------------------------------------------------
// Courses
// ---------------------------------------------------------------------------

define_choice_enum! {
    /// Expected effort bucket for a course.
    CourseLength {
        Short => ("short", "Short"),
        Medium => ("medium", "Medium"),
        Long => ("long", "Long"),
    }
}

impl CourseLength {
    /// Upper bound (inclusive) of the short bucket, in hours.
    pub const SHORT_MAX_HOURS: f64 = 6.5;

    /// Lower bound (inclusive) of the long bucket, in hours.
    pub const LONG_MIN_HOURS: f64 = 13.0;

    /// Bucket the average hours learners needed to pass a course.
    ///
    /// Uses the same bins as the course-length analytics query.
    pub fn from_average_pass_hours(hours: f64) -> Self {
        if hours <= Self::SHORT_MAX_HOURS {
            Self::Short
        } else if hours < Self::LONG_MIN_HOURS {
            Self::Medium
        } else {
            Self::Long
        }
    }
}

define_choice_enum! {
    /// Status of an external product line.
    ExternalProductStatus {
        Archived => ("archived", "Archived"),
        Published => ("published", "Published"),
    }
}

define_choice_enum! {
    /// Marketing type of an externally hosted course.
    ExternalCourseMarketingType {
        ShortCourse => ("short_course", "Short Course"),
        Sprint => ("sprint", "Sprint"),
        CourseStack => ("course_stack", "Course Stack"),
    }
}
