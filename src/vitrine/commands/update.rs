use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, VitrineError};
use crate::index::ItemSelector;
use crate::model::{Project, ProjectCategory};
use crate::store::DataStore;
use chrono::Utc;

use super::helpers::{position_of, resolve_selectors};

/// A partial change to a project. Only the fields that are set are applied.
#[derive(Debug, Clone, Default)]
pub struct ProjectUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub long_description: Option<String>,
    pub category: Option<ProjectCategory>,
    pub technologies: Option<Vec<String>>,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
}

impl ProjectUpdate {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.long_description.is_none()
            && self.category.is_none()
            && self.technologies.is_none()
            && self.github_url.is_none()
            && self.live_url.is_none()
    }

    fn apply(&self, project: &mut Project) {
        if let Some(title) = &self.title {
            project.title = title.trim().to_string();
        }
        if let Some(description) = &self.description {
            project.description = description.clone();
        }
        if let Some(long) = &self.long_description {
            project.long_description = non_empty(long);
        }
        if let Some(category) = self.category {
            project.category = category;
        }
        if let Some(technologies) = &self.technologies {
            project.technologies = technologies.clone();
        }
        if let Some(url) = &self.github_url {
            project.github_url = non_empty(url);
        }
        if let Some(url) = &self.live_url {
            project.live_url = non_empty(url);
        }
    }
}

// An empty string clears an optional field.
fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

pub fn run<S: DataStore>(
    store: &mut S,
    selector: &ItemSelector,
    update: &ProjectUpdate,
) -> Result<CmdResult<Project>> {
    if update.is_empty() {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::warning("Nothing to update"));
        return Ok(result);
    }
    if update.title.as_deref().is_some_and(|t| t.trim().is_empty()) {
        return Err(VitrineError::Validation("Title cannot be empty".to_string()));
    }

    let mut catalog = store.load()?;
    let resolved = resolve_selectors::<Project>(&catalog, std::slice::from_ref(selector))?;
    let mut result = CmdResult::default();

    for dp in resolved {
        let pos = position_of::<Project>(&catalog, &dp.item.id)?;
        let project = &mut catalog.projects[pos];
        update.apply(project);
        project.updated_at = Utc::now();

        result.add_message(CmdMessage::success(format!(
            "Project updated ({}): {}",
            dp.index, project.title
        )));
        result.affected_items.push(project.clone());
    }

    store.save(&catalog)?;
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn applies_only_given_fields() {
        let mut fixture = StoreFixture::new().with_project(
            "Site",
            ProjectCategory::Frontend,
            &["HTML"],
            false,
        );
        let update = ProjectUpdate {
            category: Some(ProjectCategory::Fullstack),
            technologies: Some(vec!["Rust".into(), "Axum".into()]),
            ..Default::default()
        };
        run(&mut fixture.store, &ItemSelector::Id("p1".into()), &update).unwrap();

        let project = &fixture.store.load().unwrap().projects[0];
        assert_eq!(project.title, "Site");
        assert_eq!(project.description, "Description of Site");
        assert_eq!(project.category, ProjectCategory::Fullstack);
        assert_eq!(project.technologies, vec!["Rust", "Axum"]);
        assert!(project.updated_at > project.created_at);
    }

    #[test]
    fn empty_url_clears_link() {
        let mut fixture =
            StoreFixture::new().with_project("Site", ProjectCategory::Frontend, &[], false);
        let set = ProjectUpdate {
            github_url: Some("https://github.com/x/site".into()),
            ..Default::default()
        };
        run(&mut fixture.store, &ItemSelector::Id("p1".into()), &set).unwrap();
        assert!(fixture.store.load().unwrap().projects[0].github_url.is_some());

        let clear = ProjectUpdate {
            github_url: Some(String::new()),
            ..Default::default()
        };
        run(&mut fixture.store, &ItemSelector::Id("p1".into()), &clear).unwrap();
        assert!(fixture.store.load().unwrap().projects[0].github_url.is_none());
    }

    #[test]
    fn blank_title_is_rejected() {
        let mut fixture =
            StoreFixture::new().with_project("Site", ProjectCategory::Frontend, &[], false);
        let update = ProjectUpdate {
            title: Some(" ".into()),
            ..Default::default()
        };
        assert!(run(&mut fixture.store, &ItemSelector::Id("p1".into()), &update).is_err());
    }

    #[test]
    fn title_is_trimmed_like_on_create() {
        let mut fixture =
            StoreFixture::new().with_project("Site", ProjectCategory::Frontend, &[], false);
        let update = ProjectUpdate {
            title: Some("  Landing Page ".into()),
            ..Default::default()
        };
        let result = run(&mut fixture.store, &ItemSelector::Id("p1".into()), &update).unwrap();
        assert_eq!(result.affected_items[0].title, "Landing Page");
        assert_eq!(fixture.store.load().unwrap().projects[0].title, "Landing Page");
    }

    #[test]
    fn empty_update_warns() {
        let mut fixture =
            StoreFixture::new().with_project("Site", ProjectCategory::Frontend, &[], false);
        let result = run(
            &mut fixture.store,
            &ItemSelector::Id("p1".into()),
            &ProjectUpdate::default(),
        )
        .unwrap();
        assert!(result.affected_items.is_empty());
        assert_eq!(result.messages[0].content, "Nothing to update");
    }
}
