use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::ItemSelector;
use crate::model::CatalogItem;
use crate::store::DataStore;

use super::helpers::{kind_label, position_of, resolve_selectors};

/// Removes the selected items for good.
pub fn run<I: CatalogItem, S: DataStore>(
    store: &mut S,
    selectors: &[ItemSelector],
) -> Result<CmdResult<I>> {
    let mut catalog = store.load()?;
    let resolved = resolve_selectors::<I>(&catalog, selectors)?;
    let mut result = CmdResult::default();

    for dp in resolved {
        let pos = position_of::<I>(&catalog, dp.item.id())?;
        let removed = I::entries_mut(&mut catalog).remove(pos);
        result.add_message(CmdMessage::success(format!(
            "{} deleted ({}): {}",
            kind_label::<I>(),
            dp.index,
            removed.title()
        )));
        result.affected_items.push(removed);
    }

    store.save(&catalog)?;
    Ok(result)
}
