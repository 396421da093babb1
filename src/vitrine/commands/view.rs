use crate::commands::CmdResult;
use crate::error::Result;
use crate::index::ItemSelector;
use crate::model::CatalogItem;
use crate::store::DataStore;

use super::helpers::resolve_selectors;

pub fn run<I: CatalogItem, S: DataStore>(
    store: &S,
    selectors: &[ItemSelector],
) -> Result<CmdResult<I>> {
    let catalog = store.load()?;
    let items = resolve_selectors::<I>(&catalog, selectors)?;
    Ok(CmdResult::default().with_listed_items(items))
}
