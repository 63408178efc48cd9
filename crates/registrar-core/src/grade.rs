//! # Grade Module
//!
//! Fixed-point grade arithmetic and academic standing.
//!
//! Grades live on the 0.00-4.00 scale and are stored as integer
//! hundredths of a grade point. All averaging is integer arithmetic;
//! `f64` appears only at the API boundary (construction and display),
//! behind targeted lint allows.

use crate::error::RegistrarError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Upper bound of the grade scale, in hundredths (4.00).
pub const MAX_GRADE_HUNDREDTHS: u16 = 400;

/// GPA at or above this is Dean's List (3.70).
pub const DEANS_LIST_HUNDREDTHS: u16 = 370;

/// GPA at or above this (and below Dean's List) is Good Standing (2.00).
pub const GOOD_STANDING_HUNDREDTHS: u16 = 200;

// =============================================================================
// GRADE POINTS
// =============================================================================

/// A validated grade on the 0.00-4.00 scale, stored as hundredths.
///
/// Construction is the only place the range is checked; every value of
/// this type is in bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GradePoints(u16);

impl GradePoints {
    /// Create from integer hundredths (e.g. 380 for 3.80).
    #[allow(clippy::float_arithmetic)]
    pub fn from_hundredths(hundredths: u16) -> Result<Self, RegistrarError> {
        if hundredths > MAX_GRADE_HUNDREDTHS {
            return Err(RegistrarError::InvalidGrade {
                points: f64::from(hundredths) / 100.0,
            });
        }
        Ok(Self(hundredths))
    }

    /// Create from grade points (e.g. 3.8).
    ///
    /// Fails with `InvalidGrade` outside [0.0, 4.0]; NaN is rejected.
    #[allow(clippy::float_arithmetic)]
    pub fn try_from_points(points: f64) -> Result<Self, RegistrarError> {
        if !(0.0..=4.0).contains(&points) {
            return Err(RegistrarError::InvalidGrade { points });
        }
        // In bounds, so the scaled value fits u16 exactly.
        Ok(Self((points * 100.0).round() as u16))
    }

    /// The raw hundredths value.
    #[must_use]
    pub fn hundredths(self) -> u16 {
        self.0
    }

    /// The grade as a float, for display and reports only.
    #[allow(clippy::float_arithmetic)]
    #[must_use]
    pub fn points(self) -> f64 {
        f64::from(self.0) / 100.0
    }
}

impl fmt::Display for GradePoints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

// =============================================================================
// GPA
// =============================================================================

/// A grade-point average in integer hundredths.
///
/// Derived exclusively from a transcript via [`Gpa::mean`]; an empty
/// transcript averages to 0.00.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Gpa(u16);

impl Gpa {
    /// The zero GPA (empty transcript).
    pub const ZERO: Self = Self(0);

    /// Average a set of grades, rounding to the nearest hundredth
    /// (ties away from zero).
    ///
    /// Equivalent to rounding the mean of the grade points to two
    /// decimal places, computed entirely in integers.
    #[must_use]
    pub fn mean<I>(grades: I) -> Self
    where
        I: IntoIterator<Item = GradePoints>,
    {
        let mut sum: u64 = 0;
        let mut count: u64 = 0;
        for grade in grades {
            sum = sum.saturating_add(u64::from(grade.hundredths()));
            count = count.saturating_add(1);
        }
        if count == 0 {
            return Self::ZERO;
        }
        let rounded = (sum.saturating_add(count / 2)) / count;
        Self(rounded as u16)
    }

    /// The raw hundredths value.
    #[must_use]
    pub fn hundredths(self) -> u16 {
        self.0
    }

    /// The GPA as a float, for display and reports only.
    #[allow(clippy::float_arithmetic)]
    #[must_use]
    pub fn points(self) -> f64 {
        f64::from(self.0) / 100.0
    }
}

impl fmt::Display for Gpa {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

// =============================================================================
// ACADEMIC STATUS
// =============================================================================

/// Three-valued academic standing, a pure function of GPA.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AcademicStatus {
    /// GPA at or above 3.70.
    #[serde(rename = "Dean's List")]
    DeansList,
    /// GPA in [2.00, 3.70).
    #[serde(rename = "Good Standing")]
    GoodStanding,
    /// GPA below 2.00.
    #[serde(rename = "Probation")]
    Probation,
}

impl AcademicStatus {
    /// Derive the standing from a GPA.
    #[must_use]
    pub fn from_gpa(gpa: Gpa) -> Self {
        if gpa.hundredths() >= DEANS_LIST_HUNDREDTHS {
            Self::DeansList
        } else if gpa.hundredths() >= GOOD_STANDING_HUNDREDTHS {
            Self::GoodStanding
        } else {
            Self::Probation
        }
    }

    /// The display string for this standing.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::DeansList => "Dean's List",
            Self::GoodStanding => "Good Standing",
            Self::Probation => "Probation",
        }
    }
}

impl fmt::Display for AcademicStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// TESTS
// =============================================================================
