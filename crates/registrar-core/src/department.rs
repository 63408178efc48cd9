//! # Department Module
//!
//! Department bookkeeping: which courses a department offers and which
//! faculty belong to it. Pure association tracking; departments impose
//! no rules of their own on enrollment or grading.

use crate::course::CourseCode;
use crate::person::PersonId;
use std::collections::BTreeSet;

/// A university department.
#[derive(Debug, Clone, Default)]
pub struct Department {
    name: String,

    /// Codes of the courses this department offers.
    offerings: BTreeSet<CourseCode>,

    /// Faculty members, in joining order.
    faculty: Vec<PersonId>,
}

impl Department {
    /// Create an empty department.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            offerings: BTreeSet::new(),
            faculty: Vec::new(),
        }
    }

    /// The department name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Record a course as offered by this department.
    pub fn offer_course(&mut self, code: CourseCode) {
        self.offerings.insert(code);
    }

    /// Whether this department offers the course.
    #[must_use]
    pub fn offers(&self, code: &CourseCode) -> bool {
        self.offerings.contains(code)
    }

    /// Offered course codes, in code order.
    #[must_use]
    pub fn offerings(&self) -> &BTreeSet<CourseCode> {
        &self.offerings
    }

    /// Add a faculty member.
    pub fn add_faculty(&mut self, member: PersonId) {
        if !self.faculty.contains(&member) {
            self.faculty.push(member);
        }
    }

    /// Faculty members, in joining order.
    #[must_use]
    pub fn faculty(&self) -> &[PersonId] {
        &self.faculty
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offerings_are_deduplicated_and_ordered() {
        let mut dept = Department::new("Computer Science");
        dept.offer_course(CourseCode::new("CS201"));
        dept.offer_course(CourseCode::new("CS101"));
        dept.offer_course(CourseCode::new("CS201"));

        let codes: Vec<_> = dept.offerings().iter().map(CourseCode::as_str).collect();
        assert_eq!(codes, vec!["CS101", "CS201"]);
        assert!(dept.offers(&CourseCode::new("CS101")));
        assert!(!dept.offers(&CourseCode::new("CS999")));
    }

    #[test]
    fn faculty_join_once_in_order() {
        let mut dept = Department::new("Computer Science");
        dept.add_faculty(PersonId(102));
        dept.add_faculty(PersonId(101));
        dept.add_faculty(PersonId(102));

        assert_eq!(dept.faculty(), &[PersonId(102), PersonId(101)]);
    }
}
