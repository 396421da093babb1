//! Publishing applies to projects only; posts and certifications are always public.

use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::ItemSelector;
use crate::model::Project;
use crate::store::DataStore;
use chrono::Utc;

use super::helpers::{position_of, resolve_selectors};

pub fn publish<S: DataStore>(
    store: &mut S,
    selectors: &[ItemSelector],
) -> Result<CmdResult<Project>> {
    publish_state(store, selectors, true)
}

pub fn unpublish<S: DataStore>(
    store: &mut S,
    selectors: &[ItemSelector],
) -> Result<CmdResult<Project>> {
    publish_state(store, selectors, false)
}

fn publish_state<S: DataStore>(
    store: &mut S,
    selectors: &[ItemSelector],
    published: bool,
) -> Result<CmdResult<Project>> {
    let mut catalog = store.load()?;
    let resolved = resolve_selectors::<Project>(&catalog, selectors)?;
    let mut result = CmdResult::default();

    for dp in resolved {
        let pos = position_of::<Project>(&catalog, &dp.item.id)?;
        let project = &mut catalog.projects[pos];

        if project.published == published {
            let state = if published { "published" } else { "a draft" };
            result.add_message(CmdMessage::warning(format!(
                "Project ({}) is already {}: {}",
                dp.index, state, project.title
            )));
            continue;
        }

        project.published = published;
        project.updated_at = Utc::now();
        let verb = if published { "published" } else { "unpublished" };
        result.add_message(CmdMessage::success(format!(
            "Project {} ({}): {}",
            verb, dp.index, project.title
        )));
        result.affected_items.push(project.clone());
    }

    store.save(&catalog)?;
    Ok(result)
}
