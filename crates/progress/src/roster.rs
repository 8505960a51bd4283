//! Instructor roster: enrolled students with their course standing.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::str::FromStr;

use modtrack_core::{Course, Module, ParseError, SortDirection, User, UserId};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::aggregate::{average_score, completion_percentage};
use crate::query::compare_text;

/// Column a roster is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RosterSortKey {
    /// Student name
    #[default]
    Name,
    /// Completion percentage
    Progress,
    /// Average score
    Score,
}

impl FromStr for RosterSortKey {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(RosterSortKey::Name),
            "progress" => Ok(RosterSortKey::Progress),
            "score" => Ok(RosterSortKey::Score),
            other => Err(ParseError::UnknownSortKey(other.to_string())),
        }
    }
}

/// Roster search and ordering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RosterQuery {
    /// Case-insensitive substring matched against name or email
    pub search: String,
    /// Ordering column
    pub sort: RosterSortKey,
    /// Ordering direction
    pub direction: SortDirection,
}

/// One student row.
#[derive(Debug, Clone, PartialEq)]
pub struct RosterEntry<'a> {
    /// The student
    pub user: &'a User,
    /// Completion percentage over the student's modules
    pub progress: u8,
    /// Average score over the student's modules
    pub average_score: i64,
}

/// Students enrolled in `course`, filtered and ordered per `query`.
///
/// Each student's standing is computed from their entry in
/// `progress_by_user`; students without one are measured against the
/// course's own module list.
pub fn roster<'a>(
    users: &'a [User],
    course: &Course,
    progress_by_user: &HashMap<UserId, Vec<Module>>,
    query: &RosterQuery,
) -> Vec<RosterEntry<'a>> {
    let needle = query.search.to_lowercase();

    let mut entries: Vec<RosterEntry<'a>> = users
        .iter()
        .filter(|u| u.is_student() && u.is_enrolled(&course.id))
        .filter(|u| {
            u.name.to_lowercase().contains(&needle) || u.email.to_lowercase().contains(&needle)
        })
        .map(|user| {
            let modules = progress_by_user
                .get(&user.id)
                .map(Vec::as_slice)
                .unwrap_or(course.modules.as_slice());
            RosterEntry {
                user,
                progress: completion_percentage(modules),
                average_score: average_score(modules),
            }
        })
        .collect();

    entries.sort_by(|a, b| query.direction.apply(compare(query.sort, a, b)));

    debug!(
        "Roster for {}: {} students (search={:?})",
        course.id,
        entries.len(),
        query.search
    );
    entries
}

fn compare(key: RosterSortKey, a: &RosterEntry<'_>, b: &RosterEntry<'_>) -> Ordering {
    match key {
        RosterSortKey::Name => compare_text(&a.user.name, &b.user.name),
        RosterSortKey::Progress => a.progress.cmp(&b.progress),
        RosterSortKey::Score => a.average_score.cmp(&b.average_score),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use modtrack_core::{CourseId, ModuleStatus, Role};

    fn user(id: &str, name: &str, role: Role, courses: &[&str]) -> User {
        User {
            id: UserId::new(id),
            name: name.to_string(),
            email: format!("{}@example.com", id),
            role,
            enrolled_courses: courses.iter().map(|c| CourseId::new(*c)).collect(),
        }
    }

    fn course() -> Course {
        Course {
            id: CourseId::new("course-1"),
            title: "Web Development Fundamentals".to_string(),
            description: String::new(),
            modules: vec![
                Module::new("m1", "a").with_completed(true).with_score(80.0),
                Module::new("m2", "b"),
            ],
            instructor: UserId::new("teach"),
        }
    }

    fn users() -> Vec<User> {
        vec![
            user("zoe", "Zoe Quinn", Role::Student, &["course-1"]),
            user("adam", "adam Smith", Role::Student, &["course-1"]),
            user("teach", "Alex Johnson", Role::Instructor, &["course-1"]),
            user("other", "Bea Other", Role::Student, &["course-2"]),
        ]
    }

    fn names<'a>(entries: &[RosterEntry<'a>]) -> Vec<&'a str> {
        entries.iter().map(|e| e.user.id.as_str()).collect()
    }

    #[test]
    fn test_only_enrolled_students_listed() {
        let users = users();
        let entries = roster(&users, &course(), &HashMap::new(), &RosterQuery::default());
        assert_eq!(names(&entries), vec!["adam", "zoe"]);
        assert!(entries.iter().all(|e| e.progress == 50 && e.average_score == 80));
    }

    #[test]
    fn test_search_matches_name_or_email() {
        let users = users();
        let by_name = RosterQuery {
            search: "QUINN".to_string(),
            ..Default::default()
        };
        assert_eq!(names(&roster(&users, &course(), &HashMap::new(), &by_name)), vec!["zoe"]);

        let by_email = RosterQuery {
            search: "adam@".to_string(),
            ..Default::default()
        };
        assert_eq!(names(&roster(&users, &course(), &HashMap::new(), &by_email)), vec!["adam"]);
    }

    #[test]
    fn test_name_sort_collates_accented_names() {
        let mut users = users();
        users.push(user("elodie", "Élodie Martin", Role::Student, &["course-1"]));
        let entries = roster(&users, &course(), &HashMap::new(), &RosterQuery::default());
        assert_eq!(names(&entries), vec!["adam", "elodie", "zoe"]);
    }

    #[test]
    fn test_sort_by_progress_uses_per_user_modules() {
        let users = users();
        let mut progress = HashMap::new();
        progress.insert(
            UserId::new("zoe"),
            vec![Module::new("m1", "a")
                .with_completed(true)
                .with_status(ModuleStatus::Completed)
                .with_score(95.0)],
        );

        let query = RosterQuery {
            sort: RosterSortKey::Progress,
            direction: SortDirection::Desc,
            ..Default::default()
        };
        let entries = roster(&users, &course(), &progress, &query);
        assert_eq!(names(&entries), vec!["zoe", "adam"]);
        assert_eq!(entries[0].progress, 100);
        assert_eq!(entries[0].average_score, 95);
    }

    #[test]
    fn test_unknown_roster_key_rejected() {
        assert!("grade".parse::<RosterSortKey>().is_err());
        assert_eq!("score".parse::<RosterSortKey>(), Ok(RosterSortKey::Score));
    }
}
