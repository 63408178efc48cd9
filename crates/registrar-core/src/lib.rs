//! # Registrar Core
//!
//! The deterministic academic-records engine: courses, people, student
//! transcripts, and the rules connecting them.
//!
//! The interesting logic lives in [`StudentRecord`] and [`Course`]:
//! prerequisite checking, bounded rosters, transcript-driven GPA, and
//! the three-valued academic standing derived from it. Everything is
//! synchronous, in-memory, and single-caller; there is no I/O here.
//!
//! ## Design rules
//!
//! - Keyed collections are `BTreeMap`/`BTreeSet` for deterministic
//!   iteration.
//! - Grade arithmetic is integer fixed-point (hundredths of a grade
//!   point); `f64` exists only at the construction/display boundary.
//! - Derived fields (GPA, status) are private and recomputed in exactly
//!   one routine.
//! - Failed operations leave all involved state unchanged.

pub mod course;
pub mod department;
pub mod error;
pub mod grade;
pub mod person;
pub mod student;
pub mod university;

pub use course::{Course, CourseCode};
pub use department::Department;
pub use error::RegistrarError;
pub use grade::{AcademicStatus, GradePoints, Gpa};
pub use person::{Person, PersonId, Role};
pub use student::{Enrollment, StudentRecord};
pub use university::University;
