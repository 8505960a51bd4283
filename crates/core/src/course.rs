//! Course and catalog models.

use serde::{Deserialize, Serialize};

use crate::id::{CourseId, UserId};
use crate::module::Module;
use crate::user::User;

/// A course: an ordered collection of modules plus display metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    /// Unique identifier
    pub id: CourseId,

    /// Course title
    pub title: String,

    /// Course description
    #[serde(default)]
    pub description: String,

    /// Modules in insertion order
    #[serde(default)]
    pub modules: Vec<Module>,

    /// Instructor user id
    pub instructor: UserId,
}

/// Every course and user known to a host.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    /// Courses
    #[serde(default)]
    pub courses: Vec<Course>,

    /// Users
    #[serde(default)]
    pub users: Vec<User>,
}

impl Catalog {
    /// Look up a course by id.
    pub fn course(&self, id: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.id.as_str() == id)
    }

    /// Look up a user by id.
    pub fn user(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.id.as_str() == id)
    }

    /// Courses a user is enrolled in, in enrolment order.
    ///
    /// Enrolments naming an unknown course are skipped.
    pub fn courses_for(&self, user: &User) -> Vec<&Course> {
        user.enrolled_courses
            .iter()
            .filter_map(|id| self.course(id.as_str()))
            .collect()
    }

    /// The course selected by default for a user: their first enrolment.
    pub fn default_course_for(&self, user: &User) -> Option<&Course> {
        self.courses_for(user).into_iter().next()
    }
}
