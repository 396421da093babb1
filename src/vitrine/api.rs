//! # API Facade
//!
//! The single entry point for every vitrine operation, whatever the client. The facade
//! turns raw user input (selector strings) into typed values and dispatches to the
//! command functions in `commands/`. It holds no business logic, does no I/O of its
//! own beyond what the store does, and returns data, never formatted text.
//!
//! `VitrineApi<S: DataStore>` is generic over the storage backend: the CLI uses
//! `VitrineApi<FileStore>`, tests use `VitrineApi<InMemoryStore>`.
//!
//! Operations that apply to every catalog collection are generic over the item kind:
//!
//! ```ignore
//! api.list::<Project>(&CatalogFilter::all().with_search("next"), ListOptions::default())?;
//! api.feature::<Certification, _>(&["f1", "3-4"])?;
//! ```

use crate::commands::{
    self, CmdResult, ContactForm, ListOptions, NewExperience, NewProject, NewSkill,
    ProjectUpdate,
};
use crate::error::{Result, VitrineError};
use crate::filter::{CatalogFilter, Choice};
use crate::index::{parse_selector, ItemSelector};
use crate::model::{CatalogItem, Project, SkillCategory};
use crate::store::DataStore;

pub struct VitrineApi<S: DataStore> {
    store: S,
    paths: commands::VitrinePaths,
}

impl<S: DataStore> VitrineApi<S> {
    pub fn new(store: S, paths: commands::VitrinePaths) -> Self {
        Self { store, paths }
    }

    pub fn list<I: CatalogItem>(
        &self,
        filter: &CatalogFilter<I>,
        options: ListOptions,
    ) -> Result<CmdResult<I>> {
        commands::list::run(&self.store, filter, options)
    }

    pub fn view<I: CatalogItem, A: AsRef<str>>(&self, selectors: &[A]) -> Result<CmdResult<I>> {
        let selectors = parse_selectors(selectors)?;
        commands::view::run(&self.store, &selectors)
    }

    pub fn delete<I: CatalogItem, A: AsRef<str>>(
        &mut self,
        selectors: &[A],
    ) -> Result<CmdResult<I>> {
        let selectors = parse_selectors(selectors)?;
        commands::delete::run(&mut self.store, &selectors)
    }

    pub fn feature<I: CatalogItem, A: AsRef<str>>(
        &mut self,
        selectors: &[A],
    ) -> Result<CmdResult<I>> {
        let selectors = parse_selectors(selectors)?;
        commands::featuring::feature(&mut self.store, &selectors)
    }

    pub fn unfeature<I: CatalogItem, A: AsRef<str>>(
        &mut self,
        selectors: &[A],
    ) -> Result<CmdResult<I>> {
        let selectors = parse_selectors(selectors)?;
        commands::featuring::unfeature(&mut self.store, &selectors)
    }

    pub fn publish<A: AsRef<str>>(&mut self, selectors: &[A]) -> Result<CmdResult<Project>> {
        let selectors = parse_selectors(selectors)?;
        commands::publishing::publish(&mut self.store, &selectors)
    }

    pub fn unpublish<A: AsRef<str>>(&mut self, selectors: &[A]) -> Result<CmdResult<Project>> {
        let selectors = parse_selectors(selectors)?;
        commands::publishing::unpublish(&mut self.store, &selectors)
    }

    pub fn create_project(&mut self, input: NewProject) -> Result<CmdResult<Project>> {
        commands::create::run(&mut self.store, input.into_project())
    }

    pub fn update_project(
        &mut self,
        selector: &str,
        update: &ProjectUpdate,
    ) -> Result<CmdResult<Project>> {
        let selectors = parse_selectors(&[selector])?;
        match selectors.as_slice() {
            [single] => commands::update::run(&mut self.store, single, update),
            _ => Err(VitrineError::Api(format!(
                "update-project takes exactly one item, got '{}'",
                selector
            ))),
        }
    }

    pub fn submit_contact(&mut self, form: ContactForm) -> Result<CmdResult> {
        commands::contact::submit(&mut self.store, form)
    }

    pub fn inbox(&self, unread_only: bool) -> Result<CmdResult> {
        commands::contact::inbox(&self.store, unread_only)
    }

    pub fn mark_read(&mut self, ids: &[String]) -> Result<CmdResult> {
        commands::contact::mark_read(&mut self.store, ids)
    }

    pub fn experiences(&self) -> Result<CmdResult> {
        commands::profile::experiences(&self.store)
    }

    pub fn add_experience(&mut self, input: NewExperience) -> Result<CmdResult> {
        commands::profile::add_experience(&mut self.store, input)
    }

    pub fn skills(&self, category: Choice<SkillCategory>) -> Result<CmdResult> {
        commands::profile::skills(&self.store, category)
    }

    pub fn add_skill(&mut self, input: NewSkill) -> Result<CmdResult> {
        commands::profile::add_skill(&mut self.store, input)
    }

    pub fn stats(&self) -> Result<CmdResult> {
        commands::stats::run(&self.store)
    }

    pub fn chat(&self, message: &str) -> Result<CmdResult> {
        commands::chat::run(&self.store, message)
    }

    pub fn config(&self, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(&self.paths, action)
    }

    pub fn init(&mut self, force: bool) -> Result<CmdResult> {
        commands::init::run(&mut self.store, &self.paths, force)
    }

    pub fn paths(&self) -> &commands::VitrinePaths {
        &self.paths
    }
}

/// Parses selector arguments. Every argument must be an index, a range or an `id:`
/// selector; anything else is an error naming the bad argument.
fn parse_selectors<A: AsRef<str>>(inputs: &[A]) -> Result<Vec<ItemSelector>> {
    if inputs.is_empty() {
        return Err(VitrineError::Api("No items selected".to_string()));
    }
    let mut selectors = Vec::new();
    for input in inputs {
        let parsed = parse_selector(input.as_ref().trim()).map_err(VitrineError::Api)?;
        selectors.extend(parsed);
    }
    Ok(selectors)
}

pub use crate::commands::config::ConfigAction;
pub use commands::{
    CatalogStats, ChatReply, CmdMessage, Intent, MessageLevel, VitrinePaths,
};
