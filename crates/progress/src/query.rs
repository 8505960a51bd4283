//! Module views: text search, status filter, then a stable sort.

use std::cmp::Ordering;

use feruca::Collator;
use modtrack_core::{Module, ModuleQuery, SortKey};
use tracing::debug;

/// Build the ordered view of `modules` described by `query`.
///
/// Steps run in a fixed order: text search, status filter, sort. The search
/// applies only when the search text has non-whitespace content; it matches
/// the lower-cased text as a substring of the lower-cased title or
/// description. The sort is stable and only sees the filtered subset. The
/// input slice is left untouched; the result borrows its elements.
pub fn view<'a>(modules: &'a [Module], query: &ModuleQuery) -> Vec<&'a Module> {
    let needle = (!query.search_text.trim().is_empty()).then(|| query.search_text.to_lowercase());

    let mut result: Vec<&Module> = modules
        .iter()
        .filter(|m| needle.as_deref().map_or(true, |n| matches_text(m, n)))
        .filter(|m| query.status_filter.matches(m.status))
        .collect();

    result.sort_by(|a, b| query.sort_direction.apply(compare(query.sort_key, a, b)));

    debug!(
        "View (search={:?}, status={}, sort={} {}): {} of {} modules",
        query.search_text,
        query.status_filter,
        query.sort_key,
        query.sort_direction.as_str(),
        result.len(),
        modules.len()
    );
    result
}

fn matches_text(module: &Module, needle: &str) -> bool {
    module.title.to_lowercase().contains(needle)
        || module.description.to_lowercase().contains(needle)
}

/// Ascending comparator for one sort key.
///
/// Each key owns its placement rules, so the caller's direction is a plain
/// reversal of this result:
/// - `title`: Unicode collation (CLDR root order), so accented letters sort
///   with their base letter and lower-case precedes upper-case on ties
/// - `dueDate`: chronological; a missing or unparseable date is the latest
///   possible date, so it lands last ascending and first descending
/// - `status`: higher priority first (completed, in-progress, failed,
///   not-started)
pub fn compare(key: SortKey, a: &Module, b: &Module) -> Ordering {
    match key {
        SortKey::Title => compare_text(&a.title, &b.title),
        SortKey::DueDate => match (a.due(), b.due()) {
            (Some(x), Some(y)) => x.cmp(&y),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        },
        SortKey::Status => b.status.priority().cmp(&a.status.priority()),
    }
}

/// Locale-aware text order used for display sorting.
///
/// Strings the collator ranks equal fall back to lower-case-first raw order.
pub(crate) fn compare_text(a: &str, b: &str) -> Ordering {
    let mut collator = Collator::default();
    collator
        .collate(a, b)
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| b.cmp(a))
}

#[cfg(test)]
mod tests {
    use super::*;
    use modtrack_core::{ModuleStatus, SortDirection, StatusFilter};

    fn module(id: &str, title: &str, status: ModuleStatus, due: Option<&str>) -> Module {
        let m = Module::new(id, title)
            .with_description(format!("About {}", title))
            .with_status(status);
        match due {
            Some(d) => m.with_due_date(d),
            None => m,
        }
    }

    fn fixture() -> Vec<Module> {
        vec![
            module("m1", "Introduction to HTML", ModuleStatus::Completed, Some("2023-11-01")),
            module("m2", "CSS Styling", ModuleStatus::Completed, Some("2023-11-08")),
            module("m3", "JavaScript Basics", ModuleStatus::InProgress, Some("2023-11-15")),
            module("m4", "Building Interactive Websites", ModuleStatus::NotStarted, None),
            module("m5", "Accessibility Review", ModuleStatus::Failed, Some("2023-10-20")),
        ]
    }

    fn ids<'a>(modules: &[&'a Module]) -> Vec<&'a str> {
        modules.iter().map(|m| m.id.as_str()).collect()
    }

    fn sorted(key: SortKey, direction: SortDirection) -> ModuleQuery {
        ModuleQuery::default().sorted_by(key, direction)
    }

    #[test]
    fn test_default_query_is_a_permutation() {
        let modules = fixture();
        for key in [SortKey::Title, SortKey::DueDate, SortKey::Status] {
            for direction in [SortDirection::Asc, SortDirection::Desc] {
                let result = view(&modules, &sorted(key, direction));
                let mut got = ids(&result);
                got.sort_unstable();
                assert_eq!(got, vec!["m1", "m2", "m3", "m4", "m5"]);
            }
        }
    }

    #[test]
    fn test_due_date_missing_last_ascending() {
        let modules = fixture();
        let result = view(&modules, &sorted(SortKey::DueDate, SortDirection::Asc));
        assert_eq!(ids(&result), vec!["m5", "m1", "m2", "m3", "m4"]);
    }

    #[test]
    fn test_due_date_missing_first_descending() {
        let modules = fixture();
        let result = view(&modules, &sorted(SortKey::DueDate, SortDirection::Desc));
        assert_eq!(ids(&result), vec!["m4", "m3", "m2", "m1", "m5"]);
    }

    #[test]
    fn test_unparseable_due_date_sorts_like_missing() {
        let modules = vec![
            module("junk", "a", ModuleStatus::NotStarted, Some("soon")),
            module("dated", "b", ModuleStatus::NotStarted, Some("2023-11-01")),
        ];
        let result = view(&modules, &sorted(SortKey::DueDate, SortDirection::Asc));
        assert_eq!(ids(&result), vec!["dated", "junk"]);
    }

    #[test]
    fn test_title_sort_is_case_insensitive() {
        let modules = vec![
            module("b", "banana", ModuleStatus::NotStarted, None),
            module("a", "Apple", ModuleStatus::NotStarted, None),
            module("c", "cherry", ModuleStatus::NotStarted, None),
        ];
        let asc = view(&modules, &sorted(SortKey::Title, SortDirection::Asc));
        assert_eq!(ids(&asc), vec!["a", "b", "c"]);

        let desc = view(&modules, &sorted(SortKey::Title, SortDirection::Desc));
        assert_eq!(ids(&desc), vec!["c", "b", "a"]);
    }

    #[test]
    fn test_title_sort_places_accented_letters_with_base_letter() {
        let modules = vec![
            module("z", "Zebra Patterns", ModuleStatus::NotStarted, None),
            module("e", "Éléments HTML", ModuleStatus::NotStarted, None),
            module("a", "apple Basics", ModuleStatus::NotStarted, None),
        ];
        let asc = view(&modules, &sorted(SortKey::Title, SortDirection::Asc));
        assert_eq!(ids(&asc), vec!["a", "e", "z"]);

        let desc = view(&modules, &sorted(SortKey::Title, SortDirection::Desc));
        assert_eq!(ids(&desc), vec!["z", "e", "a"]);
    }

    #[test]
    fn test_title_case_variants_order_lower_first() {
        let modules = vec![
            module("upper", "Intro", ModuleStatus::NotStarted, None),
            module("lower", "intro", ModuleStatus::NotStarted, None),
        ];
        let asc = view(&modules, &sorted(SortKey::Title, SortDirection::Asc));
        assert_eq!(ids(&asc), vec!["lower", "upper"]);
    }

    #[test]
    fn test_title_ties_are_stable() {
        let modules = vec![
            module("first", "Same", ModuleStatus::NotStarted, None),
            module("second", "Same", ModuleStatus::Completed, None),
        ];
        let asc = view(&modules, &sorted(SortKey::Title, SortDirection::Asc));
        assert_eq!(ids(&asc), vec!["first", "second"]);

        let desc = view(&modules, &sorted(SortKey::Title, SortDirection::Desc));
        assert_eq!(ids(&desc), vec!["first", "second"]);
    }

    #[test]
    fn test_status_sort_priority() {
        let modules = fixture();
        let asc = view(&modules, &sorted(SortKey::Status, SortDirection::Asc));
        assert_eq!(ids(&asc), vec!["m1", "m2", "m3", "m5", "m4"]);

        let desc = view(&modules, &sorted(SortKey::Status, SortDirection::Desc));
        assert_eq!(ids(&desc), vec!["m4", "m5", "m3", "m1", "m2"]);
    }

    #[test]
    fn test_search_matches_title_or_description_case_insensitively() {
        let modules = fixture();
        let by_title = view(&modules, &ModuleQuery::default().with_search("css"));
        assert_eq!(ids(&by_title), vec!["m2"]);

        let by_description = view(&modules, &ModuleQuery::default().with_search("ABOUT java"));
        assert_eq!(ids(&by_description), vec!["m3"]);
    }

    #[test]
    fn test_whitespace_search_is_noop() {
        let modules = fixture();
        let result = view(&modules, &ModuleQuery::default().with_search("   "));
        assert_eq!(result.len(), modules.len());
    }

    #[test]
    fn test_search_then_status_then_sort() {
        let modules = fixture();
        let query = ModuleQuery::default()
            .with_search("t")
            .with_status(StatusFilter::Only(ModuleStatus::Completed))
            .sorted_by(SortKey::Title, SortDirection::Asc);
        let result = view(&modules, &query);
        assert_eq!(ids(&result), vec!["m2", "m1"]);
    }

    #[test]
    fn test_status_filter_reads_status_not_completed_flag() {
        let modules = vec![
            Module::new("flagged", "x").with_completed(true).with_status(ModuleStatus::InProgress),
            Module::new("labelled", "y").with_status(ModuleStatus::Completed),
        ];
        let query = ModuleQuery::default().with_status(StatusFilter::Only(ModuleStatus::Completed));
        assert_eq!(ids(&view(&modules, &query)), vec!["labelled"]);
    }

    #[test]
    fn test_no_matches_yields_empty_view() {
        let modules = fixture();
        let result = view(&modules, &ModuleQuery::default().with_search("rust"));
        assert!(result.is_empty());
    }

    #[test]
    fn test_view_is_idempotent() {
        let modules = fixture();
        let query = sorted(SortKey::Status, SortDirection::Desc);
        assert_eq!(ids(&view(&modules, &query)), ids(&view(&modules, &query)));
    }

    #[test]
    fn test_view_does_not_reorder_input() {
        let modules = fixture();
        let before: Vec<_> = modules.iter().map(|m| m.id.clone()).collect();
        let _ = view(&modules, &sorted(SortKey::Title, SortDirection::Desc));
        let after: Vec<_> = modules.iter().map(|m| m.id.clone()).collect();
        assert_eq!(before, after);
    }
}
