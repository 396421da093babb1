use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::ItemSelector;
use crate::model::CatalogItem;
use crate::store::DataStore;

use super::helpers::{kind_label, position_of, resolve_selectors};

pub fn feature<I: CatalogItem, S: DataStore>(
    store: &mut S,
    selectors: &[ItemSelector],
) -> Result<CmdResult<I>> {
    feature_state(store, selectors, true)
}

pub fn unfeature<I: CatalogItem, S: DataStore>(
    store: &mut S,
    selectors: &[ItemSelector],
) -> Result<CmdResult<I>> {
    feature_state(store, selectors, false)
}

fn feature_state<I: CatalogItem, S: DataStore>(
    store: &mut S,
    selectors: &[ItemSelector],
    featured: bool,
) -> Result<CmdResult<I>> {
    let mut catalog = store.load()?;
    let resolved = resolve_selectors::<I>(&catalog, selectors)?;
    let mut result = CmdResult::default();

    for dp in resolved {
        let pos = position_of::<I>(&catalog, dp.item.id())?;
        let item = &mut I::entries_mut(&mut catalog)[pos];

        if item.is_featured() == featured {
            let state = if featured { "featured" } else { "not featured" };
            result.add_message(CmdMessage::warning(format!(
                "{} ({}) is already {}: {}",
                kind_label::<I>(),
                dp.index,
                state,
                item.title()
            )));
            continue;
        }

        item.set_featured(featured);
        let verb = if featured { "featured" } else { "unfeatured" };
        result.add_message(CmdMessage::success(format!(
            "{} {} ({}): {}",
            kind_label::<I>(),
            verb,
            dp.index,
            item.title()
        )));
        result.affected_items.push(item.clone());
    }

    store.save(&catalog)?;
    Ok(result)
}
