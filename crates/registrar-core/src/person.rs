//! # Person Module
//!
//! People in the university and their roles.
//!
//! Roles form a closed set, so they are a tagged enum carrying the
//! role-specific field, with responsibility and workload exposed as
//! plain lookup functions. No dispatch hierarchy.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque handle for a person.
///
/// Course rosters store these; they carry no record data themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonId(pub u32);

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The closed set of university roles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "snake_case")]
pub enum Role {
    /// Tenured teaching and research faculty.
    Professor {
        /// Home department name.
        department: String,
    },
    /// Teaching-focused faculty.
    Lecturer {
        /// Home department name.
        department: String,
    },
    /// Graduate teaching assistant.
    TeachingAssistant {
        /// Home department name.
        department: String,
    },
    /// Administrative staff.
    Staff {
        /// Job title used in the responsibility line.
        job_title: String,
    },
    /// Enrolled student.
    Student {
        /// Declared major.
        major: String,
    },
}

impl Role {
    /// Short role name for display.
    #[must_use]
    pub fn title(&self) -> &'static str {
        match self {
            Self::Professor { .. } => "Professor",
            Self::Lecturer { .. } => "Lecturer",
            Self::TeachingAssistant { .. } => "Teaching Assistant",
            Self::Staff { .. } => "Staff",
            Self::Student { .. } => "Student",
        }
    }

    /// The responsibility line for this role.
    #[must_use]
    pub fn responsibilities(&self) -> String {
        match self {
            Self::Professor { .. } => {
                String::from("Teach advanced courses, conduct research, and mentor graduate students.")
            }
            Self::Lecturer { .. } => {
                String::from("Deliver lectures and grade undergraduate assignments.")
            }
            Self::TeachingAssistant { .. } => {
                String::from("Assist professors, lead tutorials, and grade papers.")
            }
            Self::Staff { job_title } => {
                format!("Perform administrative duties related to {job_title}.")
            }
            Self::Student { .. } => {
                String::from("Attend classes, complete assignments, and study.")
            }
        }
    }

    /// The workload line, for faculty roles only.
    #[must_use]
    pub fn workload(&self) -> Option<&'static str> {
        match self {
            Self::Professor { .. } => Some("High (Teaching + Research + Service)"),
            Self::Lecturer { .. } => Some("Medium (Primarily Teaching)"),
            Self::TeachingAssistant { .. } => Some("Variable (Based on assigned course)"),
            Self::Staff { .. } | Self::Student { .. } => None,
        }
    }

    /// Whether this role is faculty (has a workload).
    #[must_use]
    pub fn is_faculty(&self) -> bool {
        self.workload().is_some()
    }

    /// Whether this role is a student.
    #[must_use]
    pub fn is_student(&self) -> bool {
        matches!(self, Self::Student { .. })
    }
}

/// A person in the university directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    name: String,
    id: PersonId,
    email: String,
    role: Role,
}

impl Person {
    /// Create a person.
    #[must_use]
    pub fn new(name: impl Into<String>, id: PersonId, email: impl Into<String>, role: Role) -> Self {
        Self {
            name: name.into(),
            id,
            email: email.into(),
            role,
        }
    }

    /// The person's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The person's id.
    #[must_use]
    pub fn id(&self) -> PersonId {
        self.id
    }

    /// The person's email address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// The person's role.
    #[must_use]
    pub fn role(&self) -> &Role {
        &self.role
    }

    /// One-line directory entry.
    #[must_use]
    pub fn info_line(&self) -> String {
        format!(
            "Name: {}, ID: {}, Email: {}",
            self.name, self.id, self.email
        )
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn staff_responsibilities_use_job_title() {
        let role = Role::Staff {
            job_title: String::from("Admissions Officer"),
        };
        assert_eq!(
            role.responsibilities(),
            "Perform administrative duties related to Admissions Officer."
        );
    }

    #[test]
    fn workload_only_for_faculty() {
        let professor = Role::Professor {
            department: String::from("Computer Science"),
        };
        let staff = Role::Staff {
            job_title: String::from("Admissions Officer"),
        };
        let student = Role::Student {
            major: String::from("Computer Science"),
        };

        assert!(professor.workload().is_some());
        assert!(professor.is_faculty());
        assert!(staff.workload().is_none());
        assert!(student.workload().is_none());
        assert!(student.is_student());
    }

    #[test]
    fn faculty_workload_strings() {
        let lecturer = Role::Lecturer {
            department: String::from("Computer Science"),
        };
        let ta = Role::TeachingAssistant {
            department: String::from("Computer Science"),
        };
        assert_eq!(lecturer.workload(), Some("Medium (Primarily Teaching)"));
        assert_eq!(ta.workload(), Some("Variable (Based on assigned course)"));
    }

    #[test]
    fn info_line_format() {
        let person = Person::new(
            "Milena Fernandz",
            PersonId(101),
            "milena@uni.edu",
            Role::Professor {
                department: String::from("Computer Science"),
            },
        );
        assert_eq!(
            person.info_line(),
            "Name: Milena Fernandz, ID: 101, Email: milena@uni.edu"
        );
    }
}
