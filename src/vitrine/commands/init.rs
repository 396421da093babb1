use crate::commands::{CmdMessage, CmdResult, VitrinePaths};
use crate::error::Result;
use crate::seed::sample_catalog;
use crate::store::DataStore;

/// Writes the sample catalog. An existing catalog is left alone unless `force` is set.
pub fn run<S: DataStore>(store: &mut S, paths: &VitrinePaths, force: bool) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let existing = store.load()?;

    if !existing.is_empty() && !force {
        result.add_message(CmdMessage::warning(format!(
            "A catalog already exists in {} (use --force to replace it)",
            paths.data_dir.display()
        )));
        return Ok(result);
    }

    let catalog = sample_catalog();
    store.save(&catalog)?;

    result.add_message(CmdMessage::info(format!(
        "{} projects, {} posts, {} certifications, {} positions, {} skills",
        catalog.projects.len(),
        catalog.posts.len(),
        catalog.certifications.len(),
        catalog.experiences.len(),
        catalog.skills.len()
    )));
    result.add_message(CmdMessage::success(format!(
        "Initialized catalog at {}",
        paths.data_dir.display()
    )));
    Ok(result)
}
