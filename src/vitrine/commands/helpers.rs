use crate::error::{Result, VitrineError};
use crate::index::{index_items, DisplayItem, ItemSelector};
use crate::model::{Catalog, CatalogItem};

/// Every item of kind `I` in the catalog, with its canonical index.
pub fn indexed_items<I: CatalogItem>(catalog: &Catalog) -> Vec<DisplayItem<I>> {
    index_items(I::entries(catalog).clone())
}

/// Resolves selectors to items, in selector order. An item selected twice is
/// returned once.
pub fn resolve_selectors<I: CatalogItem>(
    catalog: &Catalog,
    selectors: &[ItemSelector],
) -> Result<Vec<DisplayItem<I>>> {
    let indexed = indexed_items::<I>(catalog);
    let mut resolved: Vec<DisplayItem<I>> = Vec::with_capacity(selectors.len());

    for selector in selectors {
        let found = indexed
            .iter()
            .find(|dp| match selector {
                ItemSelector::Index(idx) => &dp.index == idx,
                ItemSelector::Id(id) => dp.item.id() == id,
            })
            .ok_or_else(|| match selector {
                ItemSelector::Index(idx) => {
                    VitrineError::Api(format!("Index {} not found in {}", idx, I::COLLECTION))
                }
                ItemSelector::Id(id) => VitrineError::ItemNotFound(format!("{} {}", I::KIND, id)),
            })?;

        if !resolved.iter().any(|dp| dp.item.id() == found.item.id()) {
            resolved.push(found.clone());
        }
    }

    Ok(resolved)
}

/// Position of the item with `id` inside its collection.
pub fn position_of<I: CatalogItem>(catalog: &Catalog, id: &str) -> Result<usize> {
    I::entries(catalog)
        .iter()
        .position(|item| item.id() == id)
        .ok_or_else(|| VitrineError::ItemNotFound(format!("{} {}", I::KIND, id)))
}

/// "project" -> "Project", for the start of messages.
pub fn kind_label<I: CatalogItem>() -> String {
    let mut chars = I::KIND.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::DisplayIndex;
    use crate::model::{Certification, Project, ProjectCategory};
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::DataStore;

    fn catalog() -> Catalog {
        StoreFixture::new()
            .with_project("Old", ProjectCategory::Frontend, &[], false)
            .with_project("Star", ProjectCategory::Backend, &[], true)
            .with_project("New", ProjectCategory::Fullstack, &[], false)
            .store
            .load()
            .unwrap()
    }

    #[test]
    fn resolves_indexes_and_ids() {
        let catalog = catalog();
        let selectors = vec![
            ItemSelector::Index(DisplayIndex::Featured(1)),
            ItemSelector::Index(DisplayIndex::Regular(2)),
            ItemSelector::Id("p3".to_string()),
        ];
        let resolved = resolve_selectors::<Project>(&catalog, &selectors).unwrap();
        let titles: Vec<_> = resolved.iter().map(|d| d.item.title.as_str()).collect();
        assert_eq!(titles, vec!["Star", "Old", "New"]);
        assert_eq!(resolved[2].index, DisplayIndex::Regular(1));
    }

    #[test]
    fn duplicate_selection_is_collapsed() {
        let catalog = catalog();
        let selectors = vec![
            ItemSelector::Index(DisplayIndex::Regular(1)),
            ItemSelector::Id("p3".to_string()),
        ];
        let resolved = resolve_selectors::<Project>(&catalog, &selectors).unwrap();
        assert_eq!(resolved.len(), 1);
    }

    #[test]
    fn missing_index_is_an_error() {
        let catalog = catalog();
        let err = resolve_selectors::<Project>(
            &catalog,
            &[ItemSelector::Index(DisplayIndex::Regular(9))],
        )
        .unwrap_err();
        assert!(err.to_string().contains("Index 9 not found in projects"));

        let err =
            resolve_selectors::<Project>(&catalog, &[ItemSelector::Id("zzz".into())]).unwrap_err();
        assert!(matches!(err, VitrineError::ItemNotFound(_)));
    }

    #[test]
    fn labels_are_capitalized() {
        assert_eq!(kind_label::<Project>(), "Project");
        assert_eq!(kind_label::<Certification>(), "Certification");
    }
}
