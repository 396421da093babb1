//! # Catalog Filter Engine
//!
//! Computes the visible subset of a catalog collection for a set of criteria. This is
//! what the projects, posts and certifications listings call every time a criterion
//! changes.
//!
//! ## Contract
//!
//! - [`filter_items`] is a pure, stable filter: the result is a subsequence of the input,
//!   in input order. There is no ranking and no re-sorting.
//! - The predicate is the conjunction of every criterion in [`CatalogFilter`]:
//!   - **search**: the lowercased term is a substring of any lowercased search field
//!     (title, description/excerpt, ...) or of any lowercased tag. An empty term
//!     excludes nothing.
//!   - **category** / **status**: [`Choice::All`] bypasses the criterion,
//!     [`Choice::Only`] requires exact equality.
//!   - **tag**: when set, the item's tags must contain it verbatim.
//! - [`partition_featured`] splits a result into the featured and regular groups. It is
//!   a display grouping, not a filter: every input item lands in exactly one group and
//!   both groups keep their relative order.
//!
//! The engine is total. Values that are not part of a taxonomy cannot be expressed here;
//! they are rejected when text is parsed into a [`Choice`].

use crate::model::{CatalogItem, Featured};
use std::fmt;
use std::str::FromStr;

/// Text that selects the "all" sentinel when parsing a [`Choice`].
pub const ALL: &str = "all";

/// A criterion value: either the "all" sentinel or one concrete value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Choice<T> {
    #[default]
    All,
    Only(T),
}

impl<T: PartialEq> Choice<T> {
    /// Whether `value` satisfies this criterion.
    pub fn admits(&self, value: &T) -> bool {
        match self {
            Choice::All => true,
            Choice::Only(wanted) => wanted == value,
        }
    }

    /// Like [`Choice::admits`] for attributes an item may not have. A missing value
    /// only passes the "all" sentinel.
    pub fn admits_optional(&self, value: Option<&T>) -> bool {
        match (self, value) {
            (Choice::All, _) => true,
            (Choice::Only(wanted), Some(v)) => wanted == v,
            (Choice::Only(_), None) => false,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Choice::All)
    }
}

impl<T: fmt::Display> fmt::Display for Choice<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Choice::All => f.write_str(ALL),
            Choice::Only(v) => write!(f, "{}", v),
        }
    }
}

impl<T: FromStr> FromStr for Choice<T> {
    type Err = T::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case(ALL) {
            Ok(Choice::All)
        } else {
            s.parse().map(Choice::Only)
        }
    }
}

/// The full set of criteria for one listing.
pub struct CatalogFilter<I: CatalogItem> {
    pub search: String,
    pub category: Choice<I::Category>,
    pub status: Choice<I::Status>,
    pub tag: Option<String>,
}

impl<I: CatalogItem> CatalogFilter<I> {
    /// A filter that admits every item.
    pub fn all() -> Self {
        Self {
            search: String::new(),
            category: Choice::All,
            status: Choice::All,
            tag: None,
        }
    }

    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search = term.into();
        self
    }

    pub fn with_category(mut self, category: Choice<I::Category>) -> Self {
        self.category = category;
        self
    }

    pub fn with_status(mut self, status: Choice<I::Status>) -> Self {
        self.status = status;
        self
    }

    pub fn with_tag(mut self, tag: Option<String>) -> Self {
        self.tag = tag;
        self
    }

    /// True when no criterion excludes anything.
    pub fn is_unconstrained(&self) -> bool {
        self.search.is_empty()
            && self.category.is_all()
            && self.status.is_all()
            && self.tag.is_none()
    }

    /// The conjunctive predicate.
    pub fn matches(&self, item: &I) -> bool {
        self.category.admits(&item.category())
            && self.status.admits_optional(item.status().as_ref())
            && self
                .tag
                .as_ref()
                .is_none_or(|tag| item.tags().iter().any(|t| t == tag))
            && matches_search(item, &self.search)
    }
}

impl<I: CatalogItem> Default for CatalogFilter<I> {
    fn default() -> Self {
        Self::all()
    }
}

impl<I: CatalogItem> Clone for CatalogFilter<I> {
    fn clone(&self) -> Self {
        Self {
            search: self.search.clone(),
            category: self.category,
            status: self.status,
            tag: self.tag.clone(),
        }
    }
}

impl<I: CatalogItem> fmt::Debug for CatalogFilter<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CatalogFilter")
            .field("search", &self.search)
            .field("category", &self.category)
            .field("status", &self.status)
            .field("tag", &self.tag)
            .finish()
    }
}

/// Case-insensitive substring search over an item's search fields and tags.
pub fn matches_search<I: CatalogItem>(item: &I, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let term = term.to_lowercase();

    item.search_fields()
        .into_iter()
        .any(|field| field.to_lowercase().contains(&term))
        || item.tags().iter().any(|tag| tag.to_lowercase().contains(&term))
}

/// Returns the items that satisfy every criterion, in their original order.
pub fn filter_items<I: CatalogItem>(items: &[I], filter: &CatalogFilter<I>) -> Vec<I> {
    items
        .iter()
        .filter(|item| filter.matches(item))
        .cloned()
        .collect()
}

/// The featured/regular display grouping of a filtered result.
#[derive(Debug, Clone, PartialEq)]
pub struct Partition<T> {
    pub featured: Vec<T>,
    pub regular: Vec<T>,
}

impl<T> Partition<T> {
    pub fn len(&self) -> usize {
        self.featured.len() + self.regular.len()
    }

    pub fn is_empty(&self) -> bool {
        self.featured.is_empty() && self.regular.is_empty()
    }

    /// Featured group first, then regular.
    pub fn into_ordered(self) -> Vec<T> {
        let mut out = self.featured;
        out.extend(self.regular);
        out
    }
}

impl<T> Default for Partition<T> {
    fn default() -> Self {
        Self {
            featured: Vec::new(),
            regular: Vec::new(),
        }
    }
}

/// Splits items into featured and regular groups, each in input order.
pub fn partition_featured<T: Featured>(items: Vec<T>) -> Partition<T> {
    let (featured, regular) = items.into_iter().partition(|item| item.is_featured());
    Partition { featured, regular }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        BlogPost, Certification, CertificationCategory, CertificationStatus, PostCategory,
        Project, ProjectCategory,
    };

    fn project(
        id: &str,
        title: &str,
        category: ProjectCategory,
        tags: &[&str],
        featured: bool,
    ) -> Project {
        let mut p = Project::new(title.to_string(), String::new(), category);
        p.id = id.to_string();
        p.technologies = tags.iter().map(|t| t.to_string()).collect();
        p.featured = featured;
        p
    }

    fn scenario() -> Vec<Project> {
        vec![
            project(
                "1",
                "E-commerce Platform",
                ProjectCategory::Fullstack,
                &["Next.js", "PostgreSQL"],
                true,
            ),
            project("2", "Task App", ProjectCategory::Fullstack, &["React"], true),
            project("3", "Portfolio Site", ProjectCategory::Frontend, &["Next.js"], false),
        ]
    }

    fn ids<I: CatalogItem>(items: &[I]) -> Vec<String> {
        items.iter().map(|i| i.id().to_string()).collect()
    }

    #[test]
    fn no_op_filter_returns_all_in_order() {
        let items = scenario();
        let result = filter_items(&items, &CatalogFilter::all());
        assert_eq!(result, items);
    }

    #[test]
    fn search_matches_tags_case_insensitively() {
        let items = scenario();
        let result = filter_items(&items, &CatalogFilter::all().with_search("next"));
        assert_eq!(ids(&result), vec!["1", "3"]);
    }

    #[test]
    fn category_filter_requires_exact_category() {
        let items = scenario();
        let filter = CatalogFilter::all().with_category(Choice::Only(ProjectCategory::Frontend));
        assert_eq!(ids(&filter_items(&items, &filter)), vec!["3"]);
    }

    #[test]
    fn criteria_are_combined_with_and() {
        let items = scenario();
        let filter = CatalogFilter::all()
            .with_search("next")
            .with_category(Choice::Only(ProjectCategory::Fullstack));
        assert_eq!(ids(&filter_items(&items, &filter)), vec!["1"]);
    }

    #[test]
    fn featured_partition_of_full_set() {
        let part = partition_featured(scenario());
        assert_eq!(ids(&part.featured), vec!["1", "2"]);
        assert_eq!(ids(&part.regular), vec!["3"]);
    }

    #[test]
    fn filtering_is_idempotent() {
        let items = scenario();
        let filter = CatalogFilter::all().with_search("a");
        let once = filter_items(&items, &filter);
        let twice = filter_items(&once, &filter);
        assert_eq!(once, twice);
    }

    #[test]
    fn extending_the_term_never_grows_the_result() {
        let items = scenario();
        let term = "platform";
        let mut previous = filter_items(&items, &CatalogFilter::all());
        for end in 1..=term.len() {
            let current = filter_items(&items, &CatalogFilter::all().with_search(&term[..end]));
            assert!(current.len() <= previous.len());
            // current must be a subsequence of previous
            let mut it = previous.iter();
            assert!(current.iter().all(|c| it.any(|p| p.id == c.id)));
            previous = current;
        }
        assert_eq!(ids(&previous), vec!["1"]);
    }

    #[test]
    fn partition_is_complete_and_disjoint() {
        let items = scenario();
        for term in ["", "next", "react", "zzz"] {
            let filtered = filter_items(&items, &CatalogFilter::all().with_search(term));
            let part = partition_featured(filtered.clone());
            assert_eq!(part.len(), filtered.len());
            assert!(part.featured.iter().all(|p| p.featured));
            assert!(part.regular.iter().all(|p| !p.featured));
            let mut union = ids(&part.featured);
            union.extend(ids(&part.regular));
            union.sort();
            let mut expected = ids(&filtered);
            expected.sort();
            assert_eq!(union, expected);
        }
    }

    #[test]
    fn search_is_case_insensitive() {
        let items = scenario();
        let upper = filter_items(&items, &CatalogFilter::all().with_search("REACT"));
        let lower = filter_items(&items, &CatalogFilter::all().with_search("react"));
        assert_eq!(upper, lower);
        assert_eq!(ids(&upper), vec!["2"]);
    }

    #[test]
    fn empty_collection_yields_empty_result() {
        let items: Vec<Project> = Vec::new();
        assert!(filter_items(&items, &CatalogFilter::all().with_search("x")).is_empty());
        assert!(partition_featured(items).is_empty());
    }

    #[test]
    fn filter_does_not_touch_source() {
        let items = scenario();
        let before = items.clone();
        let _ = filter_items(&items, &CatalogFilter::all().with_search("task"));
        assert_eq!(items, before);
    }

    #[test]
    fn search_covers_description() {
        let mut p = project("9", "Dashboard", ProjectCategory::Backend, &[], false);
        p.description = "Real-time analytics with WebSockets".into();
        assert!(matches_search(&p, "websocket"));
        assert!(!matches_search(&p, "graphql"));
    }

    #[test]
    fn status_filter_on_certifications() {
        let mut done = Certification::new(
            "React".into(),
            "Udemy".into(),
            CertificationCategory::Frontend,
            CertificationStatus::Completed,
        );
        done.id = "a".into();
        let mut expired = Certification::new(
            "Photoshop".into(),
            "Adobe".into(),
            CertificationCategory::Design,
            CertificationStatus::Expired,
        );
        expired.id = "b".into();
        let items = vec![done, expired];

        let filter = CatalogFilter::all().with_status(Choice::Only(CertificationStatus::Expired));
        assert_eq!(ids(&filter_items(&items, &filter)), vec!["b"]);

        let filter = CatalogFilter::all()
            .with_status(Choice::Only(CertificationStatus::Expired))
            .with_category(Choice::Only(CertificationCategory::Frontend));
        assert!(filter_items(&items, &filter).is_empty());

        // issuer is searchable
        let filter = CatalogFilter::all().with_search("udemy");
        assert_eq!(ids(&filter_items(&items, &filter)), vec!["a"]);
    }

    #[test]
    fn tag_filter_is_exact_membership() {
        let mut a = BlogPost::new("A".into(), "".into(), "me".into(), PostCategory::Frontend);
        a.id = "a".into();
        a.tags = vec!["React".into(), "TypeScript".into()];
        let mut b = BlogPost::new("B".into(), "".into(), "me".into(), PostCategory::Css);
        b.id = "b".into();
        b.tags = vec!["React Native".into()];
        let items = vec![a, b];

        let filter = CatalogFilter::all().with_tag(Some("React".into()));
        assert_eq!(ids(&filter_items(&items, &filter)), vec!["a"]);

        let filter = CatalogFilter::all().with_tag(Some("react".into()));
        assert!(filter_items(&items, &filter).is_empty());
    }

    #[test]
    fn choice_parsing() {
        assert_eq!("all".parse::<Choice<ProjectCategory>>().unwrap(), Choice::All);
        assert_eq!("ALL".parse::<Choice<ProjectCategory>>().unwrap(), Choice::All);
        assert_eq!(
            "backend".parse::<Choice<ProjectCategory>>().unwrap(),
            Choice::Only(ProjectCategory::Backend)
        );
        assert!("mobile".parse::<Choice<ProjectCategory>>().is_err());
        assert_eq!(Choice::Only(CertificationStatus::InProgress).to_string(), "in-progress");
        assert_eq!(Choice::<ProjectCategory>::All.to_string(), "all");
    }

    #[test]
    fn unconstrained_detection() {
        let filter: CatalogFilter<Project> = CatalogFilter::all();
        assert!(filter.is_unconstrained());
        assert!(!filter.clone().with_search("x").is_unconstrained());
        assert!(!filter
            .with_category(Choice::Only(ProjectCategory::Backend))
            .is_unconstrained());
    }

    #[test]
    fn partition_into_ordered_puts_featured_first() {
        let part = partition_featured(scenario());
        assert_eq!(ids(&part.into_ordered()), vec!["1", "2", "3"]);

        let items = vec![
            project("a", "A", ProjectCategory::Backend, &[], false),
            project("b", "B", ProjectCategory::Backend, &[], true),
        ];
        assert_eq!(ids(&partition_featured(items).into_ordered()), vec!["b", "a"]);
    }
}
