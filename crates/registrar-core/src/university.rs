//! # University Module
//!
//! The in-memory session the application layer drives.
//!
//! A `University` owns the course catalog, the people directory, the
//! student records, and the departments, and routes id-based requests
//! to the owning [`Course`] / [`StudentRecord`] pair. All state lives
//! here for the lifetime of the process; nothing is persisted.

use crate::course::{Course, CourseCode};
use crate::department::Department;
use crate::error::RegistrarError;
use crate::person::{Person, PersonId, Role};
use crate::student::{Enrollment, StudentRecord};
use std::collections::BTreeMap;

/// The aggregate in-memory academic records session.
#[derive(Debug, Clone, Default)]
pub struct University {
    name: String,

    /// Every course, keyed by code.
    catalog: BTreeMap<CourseCode, Course>,

    /// Everyone in the directory, keyed by id.
    people: BTreeMap<PersonId, Person>,

    /// One record per person with a student role.
    records: BTreeMap<PersonId, StudentRecord>,

    /// Departments, keyed by name.
    departments: BTreeMap<String, Department>,
}

impl University {
    /// Create an empty university.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// The university name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    // -------------------------------------------------------------------------
    // Setup
    // -------------------------------------------------------------------------

    /// Add a department, replacing any department of the same name.
    pub fn add_department(&mut self, department: Department) {
        self.departments
            .insert(department.name().to_owned(), department);
    }

    /// Add a course to the catalog, replacing any course with the same
    /// code. When `department` names a known department the course is
    /// recorded among its offerings.
    pub fn add_course(&mut self, course: Course, department: Option<&str>) {
        if let Some(dept) = department.and_then(|name| self.departments.get_mut(name)) {
            dept.offer_course(course.code().clone());
        }
        self.catalog.insert(course.code().clone(), course);
    }

    /// Add a person to the directory.
    ///
    /// A person with a student role also gets an empty student record.
    /// Faculty are added to their home department when it exists.
    pub fn add_person(&mut self, person: Person) {
        match person.role() {
            Role::Student { major } => {
                self.records.insert(
                    person.id(),
                    StudentRecord::new(person.name(), person.id(), person.email(), major.clone()),
                );
            }
            Role::Professor { department }
            | Role::Lecturer { department }
            | Role::TeachingAssistant { department } => {
                if let Some(dept) = self.departments.get_mut(department.as_str()) {
                    dept.add_faculty(person.id());
                }
            }
            Role::Staff { .. } => {}
        }
        self.people.insert(person.id(), person);
    }

    // -------------------------------------------------------------------------
    // Lookups
    // -------------------------------------------------------------------------

    /// Look up a course by code.
    #[must_use]
    pub fn course(&self, code: &CourseCode) -> Option<&Course> {
        self.catalog.get(code)
    }

    /// Look up a person by id.
    #[must_use]
    pub fn person(&self, id: PersonId) -> Option<&Person> {
        self.people.get(&id)
    }

    /// Look up a student record by id.
    #[must_use]
    pub fn record(&self, id: PersonId) -> Option<&StudentRecord> {
        self.records.get(&id)
    }

    /// Look up a department by name.
    #[must_use]
    pub fn department(&self, name: &str) -> Option<&Department> {
        self.departments.get(name)
    }

    /// All people, in id order.
    pub fn people(&self) -> impl Iterator<Item = &Person> {
        self.people.values()
    }

    /// All student records, in id order.
    pub fn records(&self) -> impl Iterator<Item = &StudentRecord> {
        self.records.values()
    }

    /// Number of catalog courses.
    #[must_use]
    pub fn course_count(&self) -> usize {
        self.catalog.len()
    }

    /// Number of student records.
    #[must_use]
    pub fn student_count(&self) -> usize {
        self.records.len()
    }

    // -------------------------------------------------------------------------
    // Operations
    // -------------------------------------------------------------------------

    /// Enroll a student in a catalog course.
    ///
    /// The student's own completed-course set is used for the
    /// prerequisite check.
    pub fn enroll(
        &mut self,
        student: PersonId,
        code: &CourseCode,
    ) -> Result<Enrollment, RegistrarError> {
        let record = self
            .records
            .get_mut(&student)
            .ok_or(RegistrarError::UnknownStudent { id: student })?;
        let course = self
            .catalog
            .get_mut(code)
            .ok_or_else(|| RegistrarError::UnknownCourse {
                course: code.clone(),
            })?;
        let completed = record.completed_courses();
        record.enroll_course(course, &completed)
    }

    /// Drop a student from a catalog course.
    pub fn drop_course(
        &mut self,
        student: PersonId,
        code: &CourseCode,
    ) -> Result<(), RegistrarError> {
        let record = self
            .records
            .get_mut(&student)
            .ok_or(RegistrarError::UnknownStudent { id: student })?;
        let course = self
            .catalog
            .get_mut(code)
            .ok_or_else(|| RegistrarError::UnknownCourse {
                course: code.clone(),
            })?;
        record.drop_course(course)
    }

    /// Record a grade on a student's transcript.
    ///
    /// The course code is not required to be in the catalog; transcript
    /// entries (transfer credit, prior terms) stand on their own.
    pub fn record_grade(
        &mut self,
        student: PersonId,
        code: CourseCode,
        points: f64,
    ) -> Result<(), RegistrarError> {
        let record = self
            .records
            .get_mut(&student)
            .ok_or(RegistrarError::UnknownStudent { id: student })?;
        record.record_grade(code, points)
    }

    /// Plain-text academic summary for a student.
    pub fn summary(&self, student: PersonId) -> Result<String, RegistrarError> {
        self.records
            .get(&student)
            .map(StudentRecord::academic_summary)
            .ok_or(RegistrarError::UnknownStudent { id: student })
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_university() -> University {
        let mut uni = University::new("State University");
        uni.add_department(Department::new("Computer Science"));
        uni.add_course(
            Course::new("CS101", "Intro to Programming", 3, 100),
            Some("Computer Science"),
        );
        uni.add_course(
            Course::new("CS201", "Data Visualization", 3, 50).with_prerequisites(["CS101"]),
            Some("Computer Science"),
        );
        uni.add_person(Person::new(
            "Ada Lovelace",
            PersonId(301),
            "ada@uni.edu",
            Role::Student {
                major: String::from("Computer Science"),
            },
        ));
        uni
    }

    #[test]
    fn student_role_creates_record() {
        let uni = sample_university();
        assert_eq!(uni.student_count(), 1);
        assert!(uni.record(PersonId(301)).is_some());
        assert!(uni.person(PersonId(301)).is_some());
    }

    #[test]
    fn faculty_join_their_department() {
        let mut uni = sample_university();
        uni.add_person(Person::new(
            "Milena Fernandz",
            PersonId(101),
            "milena@uni.edu",
            Role::Professor {
                department: String::from("Computer Science"),
            },
        ));

        let dept = uni.department("Computer Science");
        assert_eq!(dept.map(|d| d.faculty().to_vec()), Some(vec![PersonId(101)]));
        assert!(uni.record(PersonId(101)).is_none());
    }

    #[test]
    fn departments_track_offerings() {
        let uni = sample_university();
        let dept = uni.department("Computer Science");
        assert_eq!(dept.map(|d| d.offerings().len()), Some(2));
    }

    #[test]
    fn enroll_uses_students_completed_set() {
        let mut uni = sample_university();
        let cs201 = CourseCode::new("CS201");

        // Prerequisite CS101 not completed yet.
        let premature = uni.enroll(PersonId(301), &cs201);
        assert!(matches!(
            premature,
            Err(RegistrarError::PrerequisitesNotMet { .. })
        ));

        assert!(uni
            .record_grade(PersonId(301), CourseCode::new("CS101"), 3.8)
            .is_ok());
        assert_eq!(uni.enroll(PersonId(301), &cs201), Ok(Enrollment::Enrolled));

        let roster_has_student = uni.course(&cs201).map(|c| c.has_student(PersonId(301)));
        assert_eq!(roster_has_student, Some(true));
    }

    #[test]
    fn unknown_ids_are_reported() {
        let mut uni = sample_university();

        assert!(matches!(
            uni.enroll(PersonId(999), &CourseCode::new("CS101")),
            Err(RegistrarError::UnknownStudent { .. })
        ));
        assert!(matches!(
            uni.enroll(PersonId(301), &CourseCode::new("NOPE1")),
            Err(RegistrarError::UnknownCourse { .. })
        ));
        assert!(matches!(
            uni.summary(PersonId(999)),
            Err(RegistrarError::UnknownStudent { .. })
        ));
    }

    #[test]
    fn drop_via_university() {
        let mut uni = sample_university();
        let cs101 = CourseCode::new("CS101");

        assert!(uni.enroll(PersonId(301), &cs101).is_ok());
        assert!(uni.drop_course(PersonId(301), &cs101).is_ok());

        let enrollment = uni.course(&cs101).map(Course::current_enrollment);
        assert_eq!(enrollment, Some(0));
        assert!(matches!(
            uni.drop_course(PersonId(301), &cs101),
            Err(RegistrarError::NotEnrolled { .. })
        ));
    }

    #[test]
    fn grade_outside_catalog_is_accepted() {
        let mut uni = sample_university();
        assert!(uni
            .record_grade(PersonId(301), CourseCode::new("TRANSFER100"), 3.5)
            .is_ok());
        let summary = uni.summary(PersonId(301));
        assert!(summary.map(|s| s.contains("3.50")).unwrap_or(false));
    }
}
