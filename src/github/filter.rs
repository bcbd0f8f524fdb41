//! Exclusion of self-referential repositories from the fetched listing.

use std::collections::HashSet;

use super::models::RepositoryDescriptor;

/// Names excluded from the projects grid.
///
/// Matching is exact and case-sensitive; the relative order of retained
/// repositories is preserved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepositoryFilter {
    excluded: HashSet<String>,
}

impl RepositoryFilter {
    /// Creates a filter excluding the given repository names.
    #[must_use]
    pub fn new<I, S>(excluded: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            excluded: excluded.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns true when `name` is excluded.
    #[must_use]
    pub fn excludes(&self, name: &str) -> bool {
        self.excluded.contains(name)
    }

    /// Removes excluded repositories, keeping the rest in their original
    /// order.
    #[must_use]
    pub fn apply(&self, items: Vec<RepositoryDescriptor>) -> Vec<RepositoryDescriptor> {
        let before = items.len();
        let retained: Vec<RepositoryDescriptor> = items
            .into_iter()
            .filter(|item| !self.excludes(&item.name))
            .collect();
        tracing::debug!(
            fetched = before,
            retained = retained.len(),
            "filtered repository listing"
        );
        retained
    }
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};

    use super::RepositoryFilter;
    use crate::github::models::RepositoryDescriptor;
    use crate::github::models::test_support::minimal_repository;

    #[fixture]
    fn filter() -> RepositoryFilter {
        RepositoryFilter::new(["agnesmillie-portfolio", "AgnesMillie"])
    }

    fn names(items: &[RepositoryDescriptor]) -> Vec<&str> {
        items.iter().map(|item| item.name.as_str()).collect()
    }

    #[rstest]
    fn removes_exact_match_but_keeps_longer_name(filter: RepositoryFilter) {
        let items = vec![
            minimal_repository("AgnesMillie"),
            minimal_repository("AgnesMillie2"),
        ];

        let retained = filter.apply(items);

        assert_eq!(names(&retained), vec!["AgnesMillie2"]);
    }

    #[rstest]
    fn matching_is_case_sensitive(filter: RepositoryFilter) {
        let items = vec![
            minimal_repository("agnesmillie"),
            minimal_repository("AGNESMILLIE-PORTFOLIO"),
        ];

        let retained = filter.apply(items);

        assert_eq!(names(&retained), vec!["agnesmillie", "AGNESMILLIE-PORTFOLIO"]);
    }

    #[rstest]
    fn preserves_order_of_retained_items(filter: RepositoryFilter) {
        let items = vec![
            minimal_repository("zeta"),
            minimal_repository("agnesmillie-portfolio"),
            minimal_repository("alpha"),
            minimal_repository("AgnesMillie"),
            minimal_repository("mid"),
        ];

        let retained = filter.apply(items);

        assert_eq!(names(&retained), vec!["zeta", "alpha", "mid"]);
    }

    #[rstest]
    fn empty_filter_keeps_everything() {
        let items = vec![minimal_repository("one"), minimal_repository("two")];

        let retained = RepositoryFilter::default().apply(items.clone());

        assert_eq!(retained, items);
    }
}
