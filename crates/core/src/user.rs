//! User model - learners and instructors.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ParseError;
use crate::id::{CourseId, UserId};

/// A person enrolled in one or more courses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique identifier
    pub id: UserId,

    /// Display name
    pub name: String,

    /// Contact email
    pub email: String,

    /// Role within the catalog
    pub role: Role,

    /// Courses the user is enrolled in, in enrolment order
    #[serde(default)]
    pub enrolled_courses: Vec<CourseId>,
}

impl User {
    /// Whether the user is enrolled in `course_id`.
    pub fn is_enrolled(&self, course_id: &CourseId) -> bool {
        self.enrolled_courses.contains(course_id)
    }

    /// Whether the user is a student.
    pub fn is_student(&self) -> bool {
        self.role == Role::Student
    }
}

/// Catalog role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Tracks their own progress
    Student,
    /// Reviews a course roster
    Instructor,
}

impl FromStr for Role {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "student" => Ok(Role::Student),
            "instructor" => Ok(Role::Instructor),
            other => Err(ParseError::UnknownRole(other.to_string())),
        }
    }
}
