use crate::commands::CmdResult;
use crate::error::Result;
use crate::filter::{filter_items, partition_featured, CatalogFilter};
use crate::index::DisplayItem;
use crate::model::CatalogItem;
use crate::store::DataStore;

use super::helpers::indexed_items;

#[derive(Debug, Clone, Copy, Default)]
pub struct ListOptions {
    /// Also list unpublished items.
    pub include_drafts: bool,
    /// List only the featured group.
    pub featured_only: bool,
}

/// Lists the items of one collection that match `filter`.
///
/// The listing holds the featured group first, then the regular group, both newest
/// first. Indexes come from the whole collection, so they do not change with the filter.
pub fn run<I: CatalogItem, S: DataStore>(
    store: &S,
    filter: &CatalogFilter<I>,
    options: ListOptions,
) -> Result<CmdResult<I>> {
    let catalog = store.load()?;
    let indexed = indexed_items::<I>(&catalog);
    let total = indexed.len();

    let mut newest_first: Vec<I> = I::entries(&catalog).clone();
    newest_first.sort_by_key(|item| std::cmp::Reverse(item.timestamp()));
    let visible: Vec<I> = newest_first
        .into_iter()
        .filter(|item| options.include_drafts || item.is_published())
        .filter(|item| !options.featured_only || item.is_featured())
        .collect();

    let matched = filter_items(&visible, filter);
    let listed: Vec<DisplayItem<I>> = partition_featured(matched)
        .into_ordered()
        .into_iter()
        .filter_map(|item| {
            indexed
                .iter()
                .find(|dp| dp.item.id() == item.id())
                .map(|dp| DisplayItem {
                    index: dp.index.clone(),
                    item,
                })
        })
        .collect();

    Ok(CmdResult::default()
        .with_listed_items(listed)
        .with_total_items(total))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::Choice;
    use crate::index::DisplayIndex;
    use crate::model::{
        BlogPost, Certification, CertificationCategory, CertificationStatus, PostCategory,
        Project, ProjectCategory,
    };
    use crate::store::memory::fixtures::StoreFixture;

    fn labels<I: CatalogItem>(result: &CmdResult<I>) -> Vec<(String, String)> {
        result
            .listed_items
            .iter()
            .map(|dp| (dp.index.to_string(), dp.item.title().to_string()))
            .collect()
    }

    fn projects() -> StoreFixture {
        StoreFixture::new()
            .with_project(
                "Portfolio Site",
                ProjectCategory::Frontend,
                &["Next.js"],
                false,
            )
            .with_project("Task App", ProjectCategory::Fullstack, &["React"], true)
            .with_project(
                "E-commerce Platform",
                ProjectCategory::Fullstack,
                &["Next.js", "PostgreSQL"],
                true,
            )
    }

    #[test]
    fn lists_featured_group_first() {
        let fixture = projects();
        let result = run(&fixture.store, &CatalogFilter::<Project>::all(), ListOptions::default())
            .unwrap();
        assert_eq!(
            labels(&result),
            vec![
                ("f1".to_string(), "E-commerce Platform".to_string()),
                ("f2".to_string(), "Task App".to_string()),
                ("1".to_string(), "Portfolio Site".to_string()),
            ]
        );
        assert_eq!(result.total_items, 3);
    }

    #[test]
    fn filtering_keeps_indexes() {
        let fixture = projects();
        let filter = CatalogFilter::<Project>::all().with_search("next");
        let result = run(&fixture.store, &filter, ListOptions::default()).unwrap();
        assert_eq!(
            labels(&result),
            vec![
                ("f1".to_string(), "E-commerce Platform".to_string()),
                ("1".to_string(), "Portfolio Site".to_string()),
            ]
        );

        let filter = CatalogFilter::<Project>::all()
            .with_search("next")
            .with_category(Choice::Only(ProjectCategory::Frontend));
        let result = run(&fixture.store, &filter, ListOptions::default()).unwrap();
        assert_eq!(result.listed_items.len(), 1);
        assert_eq!(result.listed_items[0].index, DisplayIndex::Regular(1));
    }

    #[test]
    fn drafts_are_hidden_unless_requested() {
        let fixture = projects().with_draft_project("Secret");
        let filter = CatalogFilter::<Project>::all();

        let public = run(&fixture.store, &filter, ListOptions::default()).unwrap();
        assert!(public.listed_items.iter().all(|dp| dp.item.title != "Secret"));
        assert_eq!(public.total_items, 4);

        let all = run(
            &fixture.store,
            &filter,
            ListOptions {
                include_drafts: true,
                ..Default::default()
            },
        )
        .unwrap();
        assert!(all.listed_items.iter().any(|dp| dp.item.title == "Secret"));
    }

    #[test]
    fn featured_only_keeps_featured_indexes() {
        let fixture = projects();
        let options = ListOptions {
            featured_only: true,
            ..Default::default()
        };
        let result = run(&fixture.store, &CatalogFilter::<Project>::all(), options).unwrap();
        assert_eq!(
            labels(&result),
            vec![
                ("f1".to_string(), "E-commerce Platform".to_string()),
                ("f2".to_string(), "Task App".to_string()),
            ]
        );
        assert_eq!(result.total_items, 3);

        let filter = CatalogFilter::<Project>::all()
            .with_category(Choice::Only(ProjectCategory::Frontend));
        assert!(run(&fixture.store, &filter, options)
            .unwrap()
            .listed_items
            .is_empty());
    }

    #[test]
    fn empty_store_lists_nothing() {
        let fixture = StoreFixture::new();
        let result = run(&fixture.store, &CatalogFilter::<BlogPost>::all(), ListOptions::default())
            .unwrap();
        assert!(result.listed_items.is_empty());
        assert_eq!(result.total_items, 0);
    }

    #[test]
    fn posts_filter_by_tag() {
        let fixture = StoreFixture::new()
            .with_post("Hooks", PostCategory::Frontend, &["React"])
            .with_post("Grid", PostCategory::Css, &["CSS", "Design"]);
        let filter = CatalogFilter::<BlogPost>::all().with_tag(Some("CSS".to_string()));
        let result = run(&fixture.store, &filter, ListOptions::default()).unwrap();
        assert_eq!(result.listed_items.len(), 1);
        assert_eq!(result.listed_items[0].item.title, "Grid");
    }

    #[test]
    fn certifications_filter_by_status() {
        let fixture = StoreFixture::new()
            .with_certification(
                "React",
                "Udemy",
                CertificationCategory::Frontend,
                CertificationStatus::Completed,
            )
            .with_certification(
                "Photoshop",
                "Adobe",
                CertificationCategory::Design,
                CertificationStatus::Expired,
            );
        let filter = CatalogFilter::<Certification>::all()
            .with_status(Choice::Only(CertificationStatus::Expired));
        let result = run(&fixture.store, &filter, ListOptions::default()).unwrap();
        assert_eq!(result.listed_items.len(), 1);
        assert_eq!(result.listed_items[0].item.issuer, "Adobe");
    }
}
