//! # Course Module
//!
//! One course: its catalog identity, capacity rule, prerequisite set,
//! and the roster of enrolled students.
//!
//! The roster stores opaque [`PersonId`] handles only; a course never
//! looks inside a student record. Roster order is insertion order, and
//! duplicate handles are the caller's responsibility.

use crate::error::RegistrarError;
use crate::person::PersonId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

// =============================================================================
// COURSE CODE
// =============================================================================

/// A course's unique catalog code (e.g. "CS101").
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CourseCode(String);

impl CourseCode {
    /// Create a course code.
    #[must_use]
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// The code as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CourseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CourseCode {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

// =============================================================================
// COURSE
// =============================================================================

/// A university course with a bounded roster.
///
/// Code and capacity are fixed at construction; the roster changes only
/// through [`Course::add_student`] and [`Course::remove_student`], which
/// preserve `roster.len() <= max_capacity`.
#[derive(Debug, Clone)]
pub struct Course {
    /// Unique catalog code, immutable.
    code: CourseCode,

    /// Human-readable title.
    title: String,

    /// Credit count.
    credits: u8,

    /// Maximum roster size, at least 1.
    max_capacity: usize,

    /// Codes that must be completed before enrolling.
    prerequisites: BTreeSet<CourseCode>,

    /// Enrolled students, in enrollment order.
    roster: Vec<PersonId>,
}

impl Course {
    /// Create a course with no prerequisites.
    ///
    /// A zero capacity is clamped to 1.
    #[must_use]
    pub fn new(
        code: impl Into<CourseCode>,
        title: impl Into<String>,
        credits: u8,
        max_capacity: usize,
    ) -> Self {
        Self {
            code: code.into(),
            title: title.into(),
            credits,
            max_capacity: max_capacity.max(1),
            prerequisites: BTreeSet::new(),
            roster: Vec::new(),
        }
    }

    /// Attach prerequisite codes (builder style).
    #[must_use]
    pub fn with_prerequisites<I, C>(mut self, prerequisites: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<CourseCode>,
    {
        self.prerequisites = prerequisites.into_iter().map(Into::into).collect();
        self
    }

    /// The catalog code.
    #[must_use]
    pub fn code(&self) -> &CourseCode {
        &self.code
    }

    /// The course title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The credit count.
    #[must_use]
    pub fn credits(&self) -> u8 {
        self.credits
    }

    /// The maximum roster size.
    #[must_use]
    pub fn max_capacity(&self) -> usize {
        self.max_capacity
    }

    /// The prerequisite codes.
    #[must_use]
    pub fn prerequisites(&self) -> &BTreeSet<CourseCode> {
        &self.prerequisites
    }

    /// The current roster, in enrollment order.
    #[must_use]
    pub fn roster(&self) -> &[PersonId] {
        &self.roster
    }

    /// Number of students currently enrolled.
    #[must_use]
    pub fn current_enrollment(&self) -> usize {
        self.roster.len()
    }

    /// Whether the roster has reached capacity.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.roster.len() >= self.max_capacity
    }

    /// Whether the student appears on the roster.
    #[must_use]
    pub fn has_student(&self, student: PersonId) -> bool {
        self.roster.contains(&student)
    }

    /// Append a student to the roster.
    ///
    /// Fails with `CapacityExceeded` when full; the roster is unchanged
    /// on failure. Duplicates are not checked here.
    pub fn add_student(&mut self, student: PersonId) -> Result<(), RegistrarError> {
        if self.is_full() {
            return Err(RegistrarError::CapacityExceeded {
                course: self.code.clone(),
            });
        }
        self.roster.push(student);
        Ok(())
    }

    /// Remove a student from the roster; silent no-op if absent.
    pub fn remove_student(&mut self, student: PersonId) {
        self.roster.retain(|enrolled| *enrolled != student);
    }

    /// Whether `completed` satisfies every prerequisite.
    ///
    /// An empty prerequisite set is always satisfied.
    #[must_use]
    pub fn check_prerequisites(&self, completed: &BTreeSet<CourseCode>) -> bool {
        self.prerequisites.is_subset(completed)
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.title)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn completed<const N: usize>(codes: [&str; N]) -> BTreeSet<CourseCode> {
        codes.iter().map(|c| CourseCode::new(*c)).collect()
    }

    #[test]
    fn fills_at_capacity() {
        let mut course = Course::new("T101", "Test Course", 3, 1);
        assert!(!course.is_full());

        assert!(course.add_student(PersonId(1)).is_ok());
        assert!(course.is_full());
        assert_eq!(course.current_enrollment(), 1);
    }

    #[test]
    fn add_beyond_capacity_fails_unchanged() {
        let mut course = Course::new("T101", "Test Course", 3, 1);
        assert!(course.add_student(PersonId(1)).is_ok());

        let result = course.add_student(PersonId(2));
        assert!(matches!(
            result,
            Err(RegistrarError::CapacityExceeded { .. })
        ));
        assert_eq!(course.current_enrollment(), 1);
        assert_eq!(course.roster(), &[PersonId(1)]);
    }

    #[test]
    fn zero_capacity_clamped_to_one() {
        let mut course = Course::new("T101", "Test Course", 3, 0);
        assert_eq!(course.max_capacity(), 1);
        assert!(course.add_student(PersonId(1)).is_ok());
        assert!(course.add_student(PersonId(2)).is_err());
    }

    #[test]
    fn remove_absent_is_noop() {
        let mut course = Course::new("T101", "Test Course", 3, 5);
        assert!(course.add_student(PersonId(1)).is_ok());

        course.remove_student(PersonId(99));
        assert_eq!(course.roster(), &[PersonId(1)]);

        course.remove_student(PersonId(1));
        assert!(course.roster().is_empty());
    }

    #[test]
    fn roster_preserves_enrollment_order() {
        let mut course = Course::new("T101", "Test Course", 3, 5);
        for id in [3, 1, 2] {
            assert!(course.add_student(PersonId(id)).is_ok());
        }
        assert_eq!(
            course.roster(),
            &[PersonId(3), PersonId(1), PersonId(2)]
        );
    }

    #[test]
    fn prerequisites_subset_rule() {
        let course =
            Course::new("CS301", "Machine Learning", 3, 30).with_prerequisites(["CS201", "CS101"]);

        assert!(!course.check_prerequisites(&completed([])));
        assert!(!course.check_prerequisites(&completed(["CS101"])));
        assert!(course.check_prerequisites(&completed(["CS101", "CS201"])));
        assert!(course.check_prerequisites(&completed(["CS101", "CS201", "MATH200"])));
    }

    #[test]
    fn empty_prerequisites_always_satisfied() {
        let course = Course::new("CS101", "Intro to Programming", 3, 100);
        assert!(course.check_prerequisites(&completed([])));
        assert!(course.check_prerequisites(&completed(["ANY999"])));
    }

    #[test]
    fn display_is_code_and_title() {
        let course = Course::new("CS101", "Intro to Programming", 3, 100);
        assert_eq!(course.to_string(), "CS101: Intro to Programming");
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        /// A roster mutation: add a student or remove one.
        #[derive(Debug, Clone)]
        enum Op {
            Add(u32),
            Remove(u32),
        }

        fn op_strategy() -> impl Strategy<Value = Op> {
            prop_oneof![(0u32..16).prop_map(Op::Add), (0u32..16).prop_map(Op::Remove)]
        }

        proptest! {
            #[test]
            fn capacity_never_exceeded(
                capacity in 1usize..8,
                ops in proptest::collection::vec(op_strategy(), 0..64),
            ) {
                let mut course = Course::new("T101", "Test Course", 3, capacity);

                for op in ops {
                    match op {
                        Op::Add(id) => {
                            let was_full = course.is_full();
                            let result = course.add_student(PersonId(id));
                            prop_assert_eq!(result.is_err(), was_full);
                        }
                        Op::Remove(id) => course.remove_student(PersonId(id)),
                    }
                    prop_assert!(course.current_enrollment() <= course.max_capacity());
                }
            }
        }
    }
}
