//! Bundled sample catalog and an in-memory catalog source.

use async_trait::async_trait;
use modtrack_core::{
    Catalog, Course, CourseId, Module, ModuleStatus, Role, User, UserId,
};

use super::{CatalogSource, Result};

/// Catalog held entirely in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalog {
    catalog: Catalog,
}

impl MemoryCatalog {
    /// Wrap an existing catalog.
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    /// The bundled two-course sample catalog.
    pub fn sample() -> Self {
        Self::new(sample_catalog())
    }
}

#[async_trait]
impl CatalogSource for MemoryCatalog {
    async fn load_course(&self, id: &CourseId) -> Result<Option<Course>> {
        Ok(self.catalog.course(id.as_str()).cloned())
    }

    async fn list_courses(&self) -> Result<Vec<Course>> {
        Ok(self.catalog.courses.clone())
    }

    async fn load_user(&self, id: &UserId) -> Result<Option<User>> {
        Ok(self.catalog.user(id.as_str()).cloned())
    }

    async fn list_users(&self) -> Result<Vec<User>> {
        Ok(self.catalog.users.clone())
    }

    async fn load_catalog(&self) -> Result<Catalog> {
        Ok(self.catalog.clone())
    }
}

/// Two courses, two students and two instructors.
pub fn sample_catalog() -> Catalog {
    Catalog {
        courses: vec![web_fundamentals(), react_masterclass()],
        users: vec![
            user("user-1", "John Doe", "john@example.com", Role::Student, &["course-1", "course-2"]),
            user("user-2", "Jane Smith", "jane@example.com", Role::Student, &["course-1"]),
            user("instructor-1", "Dr. Alex Johnson", "alex@example.com", Role::Instructor, &["course-1"]),
            user("instructor-2", "Prof. Sarah Williams", "sarah@example.com", Role::Instructor, &["course-2"]),
        ],
    }
}

fn web_fundamentals() -> Course {
    Course {
        id: CourseId::new("course-1"),
        title: "Web Development Fundamentals".to_string(),
        description: "Learn the basics of web development with HTML, CSS, and JavaScript"
            .to_string(),
        instructor: UserId::new("instructor-1"),
        modules: vec![
            Module::new("module-1", "Introduction to HTML")
                .with_description("Learn the basics of HTML structure and elements")
                .with_completed(true)
                .with_score(92.0)
                .with_status(ModuleStatus::Completed)
                .with_due_date("2023-11-01")
                .with_notes("Completed all exercises, need to review semantic elements"),
            Module::new("module-2", "CSS Styling")
                .with_description("Learn how to style HTML elements with CSS")
                .with_completed(true)
                .with_score(88.0)
                .with_status(ModuleStatus::Completed)
                .with_due_date("2023-11-08")
                .with_notes("Flexbox was challenging, practice more"),
            Module::new("module-3", "JavaScript Basics")
                .with_description("Introduction to JavaScript programming")
                .with_score(0.0)
                .with_status(ModuleStatus::InProgress)
                .with_due_date("2023-11-15"),
            Module::new("module-4", "Building Interactive Websites")
                .with_description(
                    "Combine HTML, CSS, and JavaScript to create interactive websites",
                )
                .with_status(ModuleStatus::NotStarted)
                .with_due_date("2023-11-22"),
        ],
    }
}

fn react_masterclass() -> Course {
    Course {
        id: CourseId::new("course-2"),
        title: "React Masterclass".to_string(),
        description: "Advanced React concepts and patterns".to_string(),
        instructor: UserId::new("instructor-2"),
        modules: vec![
            Module::new("module-1", "React Fundamentals")
                .with_description("Core React concepts and component architecture")
                .with_completed(true)
                .with_score(95.0)
                .with_status(ModuleStatus::Completed)
                .with_due_date("2023-10-15"),
            Module::new("module-2", "State Management")
                .with_description("Managing state with hooks and context")
                .with_status(ModuleStatus::InProgress)
                .with_due_date("2023-10-22")
                .with_notes("Context API is powerful but tricky"),
            Module::new("module-3", "Advanced Hooks")
                .with_description("Deep dive into React hooks")
                .with_status(ModuleStatus::NotStarted)
                .with_due_date("2023-10-29"),
        ],
    }
}

fn user(id: &str, name: &str, email: &str, role: Role, courses: &[&str]) -> User {
    User {
        id: UserId::new(id),
        name: name.to_string(),
        email: email.to_string(),
        role,
        enrolled_courses: courses.iter().map(|c| CourseId::new(*c)).collect(),
    }
}
