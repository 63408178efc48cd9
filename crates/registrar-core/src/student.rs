//! # Student Record Module
//!
//! A student's enrollments, transcript, and derived standing.
//!
//! The record drives every enrollment rule by calling into [`Course`];
//! the course only ever sees the student's opaque [`PersonId`]. GPA and
//! academic status are private and recomputed in one place, immediately
//! after every grade entry.

use crate::course::{Course, CourseCode};
use crate::error::RegistrarError;
use crate::grade::{AcademicStatus, GradePoints, Gpa};
use crate::person::PersonId;
use std::collections::{BTreeMap, BTreeSet};

/// Outcome of a successful enrollment call.
///
/// Enrolling in a course already held is an idempotent no-op, reported
/// here rather than as an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Enrollment {
    /// The student was added to the course.
    Enrolled,
    /// The student already held this course; nothing changed.
    AlreadyEnrolled,
}

/// A student's academic record.
///
/// Identity fields are fixed at construction. The enrollment list is
/// insertion-ordered and duplicate-free; the transcript maps course
/// code to grade, and a course counts as completed exactly when it has
/// a transcript entry.
#[derive(Debug, Clone)]
pub struct StudentRecord {
    name: String,
    id: PersonId,
    email: String,
    major: String,

    /// Current-term enrollments, in enrollment order.
    enrolled: Vec<CourseCode>,

    /// Recorded grades; keys double as the completed-course set.
    transcript: BTreeMap<CourseCode, GradePoints>,

    /// Cached mean of the transcript, maintained by `recompute_standing`.
    gpa: Gpa,

    /// Cached standing, always `AcademicStatus::from_gpa(self.gpa)`.
    status: AcademicStatus,
}

impl StudentRecord {
    /// Create an empty record.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        id: PersonId,
        email: impl Into<String>,
        major: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            id,
            email: email.into(),
            major: major.into(),
            enrolled: Vec::new(),
            transcript: BTreeMap::new(),
            gpa: Gpa::ZERO,
            status: AcademicStatus::from_gpa(Gpa::ZERO),
        }
    }

    /// The student's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The student's id.
    #[must_use]
    pub fn id(&self) -> PersonId {
        self.id
    }

    /// The student's email address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// The student's declared major.
    #[must_use]
    pub fn major(&self) -> &str {
        &self.major
    }

    /// Current enrollments, in enrollment order.
    #[must_use]
    pub fn enrolled_courses(&self) -> &[CourseCode] {
        &self.enrolled
    }

    /// Whether the student currently holds this course.
    #[must_use]
    pub fn is_enrolled(&self, code: &CourseCode) -> bool {
        self.enrolled.contains(code)
    }

    /// The recorded grades by course code.
    #[must_use]
    pub fn transcript(&self) -> &BTreeMap<CourseCode, GradePoints> {
        &self.transcript
    }

    /// Codes of every course with a recorded grade.
    #[must_use]
    pub fn completed_courses(&self) -> BTreeSet<CourseCode> {
        self.transcript.keys().cloned().collect()
    }

    /// The current grade-point average.
    #[must_use]
    pub fn gpa(&self) -> Gpa {
        self.gpa
    }

    /// The current academic standing.
    #[must_use]
    pub fn status(&self) -> AcademicStatus {
        self.status
    }

    /// Enroll in a course, validating prerequisites and capacity.
    ///
    /// Checks run in order: prerequisites, capacity, duplicate. The
    /// first two fail with `PrerequisitesNotMet` / `CapacityExceeded`
    /// and change nothing; a duplicate is a successful no-op. Otherwise
    /// the code is recorded here and the student is added to the course
    /// roster.
    pub fn enroll_course(
        &mut self,
        course: &mut Course,
        completed: &BTreeSet<CourseCode>,
    ) -> Result<Enrollment, RegistrarError> {
        if !course.check_prerequisites(completed) {
            return Err(RegistrarError::PrerequisitesNotMet {
                course: course.code().clone(),
            });
        }
        if course.is_full() {
            return Err(RegistrarError::CapacityExceeded {
                course: course.code().clone(),
            });
        }
        if self.is_enrolled(course.code()) {
            return Ok(Enrollment::AlreadyEnrolled);
        }

        self.enrolled.push(course.code().clone());
        if let Err(err) = course.add_student(self.id) {
            // Unreachable after the capacity check above, but the
            // enrollment entry must not outlive a failed roster add.
            self.enrolled.pop();
            return Err(err);
        }
        Ok(Enrollment::Enrolled)
    }

    /// Drop a currently-held course.
    ///
    /// Fails with `NotEnrolled` (nothing changed) when the course is
    /// not held; otherwise removes the enrollment here and the student
    /// from the course roster.
    pub fn drop_course(&mut self, course: &mut Course) -> Result<(), RegistrarError> {
        if !self.is_enrolled(course.code()) {
            return Err(RegistrarError::NotEnrolled {
                course: course.code().clone(),
            });
        }
        self.enrolled.retain(|code| code != course.code());
        course.remove_student(self.id);
        Ok(())
    }

    /// Record (or overwrite) a grade and mark the course completed.
    ///
    /// Fails with `InvalidGrade` outside [0.0, 4.0], leaving the
    /// transcript, GPA, and status untouched. A grade may be recorded
    /// for a course that was never enrolled; transcripts are
    /// independent of the current-term roster.
    pub fn record_grade(
        &mut self,
        course: impl Into<CourseCode>,
        points: f64,
    ) -> Result<(), RegistrarError> {
        let grade = GradePoints::try_from_points(points)?;
        self.transcript.insert(course.into(), grade);
        self.recompute_standing();
        Ok(())
    }

    /// The only mutation path for GPA and status.
    fn recompute_standing(&mut self) {
        self.gpa = Gpa::mean(self.transcript.values().copied());
        self.status = AcademicStatus::from_gpa(self.gpa);
    }

    /// Plain-text summary of the student's standing.
    #[must_use]
    pub fn academic_summary(&self) -> String {
        let enrolled = self
            .enrolled
            .iter()
            .map(CourseCode::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "Student: {}\nGPA: {}\nStatus: {}\nEnrolled Courses: {}",
            self.name, self.gpa, self.status, enrolled
        )
    }
}

// =============================================================================
// TESTS
// =============================================================================
