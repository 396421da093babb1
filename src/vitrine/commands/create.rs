use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, VitrineError};
use crate::model::{CatalogItem, Project, ProjectCategory};
use crate::store::DataStore;

use super::helpers::kind_label;

/// Input for a new project.
#[derive(Debug, Clone)]
pub struct NewProject {
    pub title: String,
    pub description: String,
    pub category: ProjectCategory,
    pub technologies: Vec<String>,
    pub featured: bool,
    pub draft: bool,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
}

impl NewProject {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        category: ProjectCategory,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            category,
            technologies: Vec::new(),
            featured: false,
            draft: false,
            github_url: None,
            live_url: None,
        }
    }

    pub fn into_project(self) -> Project {
        let mut project = Project::new(
            self.title.trim().to_string(),
            self.description,
            self.category,
        );
        project.technologies = self.technologies;
        project.featured = self.featured;
        project.published = !self.draft;
        project.github_url = self.github_url;
        project.live_url = self.live_url;
        project
    }
}

/// Adds a new item to its collection.
pub fn run<I: CatalogItem, S: DataStore>(store: &mut S, item: I) -> Result<CmdResult<I>> {
    if item.title().trim().is_empty() {
        return Err(VitrineError::Validation("Title cannot be empty".to_string()));
    }

    let mut catalog = store.load()?;
    let entries = I::entries_mut(&mut catalog);
    if entries.iter().any(|existing| existing.id() == item.id()) {
        return Err(VitrineError::DuplicateId(item.id().to_string()));
    }
    entries.push(item.clone());
    store.save(&catalog)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "{} created: {}",
        kind_label::<I>(),
        item.title()
    )));
    result.add_message(CmdMessage::info(format!("id: {}", item.id())));
    Ok(result.with_affected_items(vec![item]))
}
