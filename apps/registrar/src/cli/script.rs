//! # Script Module
//!
//! The JSON script format for the `run` command and its executor.
//!
//! A script declares a catalog (departments, courses, people) and a
//! sequence of actions. Execution builds a fresh [`University`], plays
//! the actions in order, and reports each outcome; a failed action is
//! recorded and the script continues.

use registrar_core::{
    AcademicStatus, Course, CourseCode, Department, Enrollment, Person, PersonId, RegistrarError,
    Role, StudentRecord, University,
};
use serde::{Deserialize, Serialize};

/// A complete script file.
#[derive(Debug, Clone, Deserialize)]
pub struct Script {
    /// University name for the session.
    #[serde(default = "default_university_name")]
    pub university: String,

    /// Department names to create before the catalog.
    #[serde(default)]
    pub departments: Vec<String>,

    /// Courses to add to the catalog.
    #[serde(default)]
    pub courses: Vec<CourseSpec>,

    /// People to add to the directory.
    #[serde(default)]
    pub people: Vec<PersonSpec>,

    /// Actions to play, in order.
    #[serde(default)]
    pub actions: Vec<Action>,
}

fn default_university_name() -> String {
    String::from("University")
}

/// One course declaration.
#[derive(Debug, Clone, Deserialize)]
pub struct CourseSpec {
    /// Catalog code.
    pub code: CourseCode,
    /// Course title.
    pub title: String,
    /// Credit count (defaults to 3).
    #[serde(default = "default_credits")]
    pub credits: u8,
    /// Maximum roster size.
    pub max_capacity: usize,
    /// Prerequisite course codes.
    #[serde(default)]
    pub prerequisites: Vec<CourseCode>,
    /// Owning department, if any.
    #[serde(default)]
    pub department: Option<String>,
}

fn default_credits() -> u8 {
    3
}

/// One person declaration; the role tag selects the role-specific field.
#[derive(Debug, Clone, Deserialize)]
pub struct PersonSpec {
    /// Full name.
    pub name: String,
    /// Directory id.
    pub id: PersonId,
    /// Email address.
    pub email: String,
    /// Role, e.g. `{"role": "student", "major": "Computer Science"}`.
    #[serde(flatten)]
    pub role: Role,
}

/// One scripted action.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    /// Enroll a student in a catalog course.
    Enroll {
        /// Student id.
        student: PersonId,
        /// Course code.
        course: CourseCode,
    },
    /// Drop a student from a course.
    Drop {
        /// Student id.
        student: PersonId,
        /// Course code.
        course: CourseCode,
    },
    /// Record a grade on a student's transcript.
    Grade {
        /// Student id.
        student: PersonId,
        /// Course code (need not be in the catalog).
        course: CourseCode,
        /// Grade on the 0.0-4.0 scale.
        points: f64,
    },
    /// Print a student's academic summary.
    Summary {
        /// Student id.
        student: PersonId,
    },
}

/// The result of one action.
#[derive(Debug)]
pub struct ActionOutcome {
    /// Human-readable description of the attempted action.
    pub description: String,
    /// Success message, or the engine error.
    pub result: Result<String, RegistrarError>,
}

/// A finished script run: the final state plus per-action outcomes.
#[derive(Debug)]
pub struct ScriptRun {
    /// The university after all actions.
    pub university: University,
    /// One outcome per scripted action, in order.
    pub outcomes: Vec<ActionOutcome>,
}

impl Script {
    /// Build the university and play every action in order.
    #[must_use]
    pub fn execute(&self) -> ScriptRun {
        let mut university = University::new(self.university.clone());
        for name in &self.departments {
            university.add_department(Department::new(name.clone()));
        }
        for spec in &self.courses {
            let course = Course::new(
                spec.code.clone(),
                spec.title.clone(),
                spec.credits,
                spec.max_capacity,
            )
            .with_prerequisites(spec.prerequisites.iter().cloned());
            university.add_course(course, spec.department.as_deref());
        }
        for spec in &self.people {
            university.add_person(Person::new(
                spec.name.clone(),
                spec.id,
                spec.email.clone(),
                spec.role.clone(),
            ));
        }

        let mut outcomes = Vec::with_capacity(self.actions.len());
        for action in &self.actions {
            outcomes.push(action.apply(&mut university));
        }
        ScriptRun {
            university,
            outcomes,
        }
    }
}

impl Action {
    /// Apply the action; errors become part of the outcome.
    fn apply(&self, university: &mut University) -> ActionOutcome {
        match self {
            Self::Enroll { student, course } => ActionOutcome {
                description: format!("enroll {student} in {course}"),
                result: university.enroll(*student, course).map(|outcome| match outcome {
                    Enrollment::Enrolled => format!("enrolled in {course}"),
                    Enrollment::AlreadyEnrolled => format!("already enrolled in {course}"),
                }),
            },
            Self::Drop { student, course } => ActionOutcome {
                description: format!("drop {student} from {course}"),
                result: university
                    .drop_course(*student, course)
                    .map(|()| format!("dropped {course}")),
            },
            Self::Grade {
                student,
                course,
                points,
            } => ActionOutcome {
                description: format!("grade {student} in {course}"),
                result: university
                    .record_grade(*student, course.clone(), *points)
                    .map(|()| format!("recorded {course} = {points}")),
            },
            Self::Summary { student } => ActionOutcome {
                description: format!("summary for {student}"),
                result: university.summary(*student),
            },
        }
    }
}

/// Final per-student report, for `--json` output.
#[derive(Debug, Serialize)]
pub struct StudentReport {
    /// Student name.
    pub name: String,
    /// Student id.
    pub id: PersonId,
    /// Declared major.
    pub major: String,
    /// GPA in grade points.
    pub gpa: f64,
    /// Derived standing.
    pub status: AcademicStatus,
    /// Currently enrolled codes, in enrollment order.
    pub enrolled: Vec<CourseCode>,
    /// Completed codes, in code order.
    pub completed: Vec<CourseCode>,
}

impl StudentReport {
    /// Snapshot a student record.
    #[must_use]
    pub fn from_record(record: &StudentRecord) -> Self {
        Self {
            name: record.name().to_owned(),
            id: record.id(),
            major: record.major().to_owned(),
            gpa: record.gpa().points(),
            status: record.status(),
            enrolled: record.enrolled_courses().to_vec(),
            completed: record.completed_courses().into_iter().collect(),
        }
    }
}
