//! # Error Module
//!
//! The error taxonomy for the records engine.
//!
//! Every variant is local, synchronous, and recoverable by the caller.
//! An operation that returns an error is guaranteed to have left all
//! involved state unchanged (no partial mutation).

use crate::course::CourseCode;
use crate::person::PersonId;
use thiserror::Error;

/// Errors produced by enrollment, roster, and transcript operations.
///
/// "Already enrolled" is deliberately NOT represented here: it is a
/// successful no-op reported as [`crate::student::Enrollment::AlreadyEnrolled`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RegistrarError {
    /// Enrollment attempted without the required completed courses.
    #[error("prerequisites not met for {course}")]
    PrerequisitesNotMet {
        /// The course whose prerequisites are unsatisfied.
        course: CourseCode,
    },

    /// Enrollment or roster-add attempted on a full course.
    #[error("course {course} is full")]
    CapacityExceeded {
        /// The course that is at capacity.
        course: CourseCode,
    },

    /// Drop attempted for a course the student is not enrolled in.
    #[error("not enrolled in {course}")]
    NotEnrolled {
        /// The course the student is not enrolled in.
        course: CourseCode,
    },

    /// Grade value outside the [0.0, 4.0] scale.
    #[error("grade must be between 0.0 and 4.0, got {points}")]
    InvalidGrade {
        /// The rejected grade value.
        points: f64,
    },

    /// A course code with no entry in the catalog.
    #[error("unknown course {course}")]
    UnknownCourse {
        /// The unrecognized course code.
        course: CourseCode,
    },

    /// A student id with no student record.
    #[error("unknown student {id}")]
    UnknownStudent {
        /// The unrecognized person id.
        id: PersonId,
    },
}
