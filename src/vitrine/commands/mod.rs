use crate::config::VitrineConfig;
use crate::index::DisplayItem;
use crate::model::{ContactMessage, Experience, Skill};
use std::path::PathBuf;

pub mod chat;
pub mod config;
pub mod contact;
pub mod create;
pub mod delete;
pub mod featuring;
pub mod helpers;
pub mod init;
pub mod list;
pub mod profile;
pub mod publishing;
pub mod stats;
pub mod update;
pub mod view;

pub use chat::{ChatReply, Intent};
pub use contact::ContactForm;
pub use create::NewProject;
pub use list::ListOptions;
pub use profile::{NewExperience, NewSkill};
pub use stats::CatalogStats;
pub use update::ProjectUpdate;

#[derive(Debug, Clone)]
pub struct VitrinePaths {
    pub data_dir: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// What a command hands back to its caller.
///
/// `I` is the catalog item kind the command worked on; commands that touch no
/// catalog items leave it as `()`.
#[derive(Debug)]
pub struct CmdResult<I = ()> {
    pub affected_items: Vec<I>,
    pub listed_items: Vec<DisplayItem<I>>,
    /// Size of the collection the listing was drawn from, before any filter.
    pub total_items: usize,
    pub contacts: Vec<ContactMessage>,
    pub experiences: Vec<Experience>,
    pub skills: Vec<Skill>,
    pub stats: Option<CatalogStats>,
    pub reply: Option<ChatReply>,
    pub config: Option<VitrineConfig>,
    pub messages: Vec<CmdMessage>,
}

impl<I> Default for CmdResult<I> {
    fn default() -> Self {
        Self {
            affected_items: Vec::new(),
            listed_items: Vec::new(),
            total_items: 0,
            contacts: Vec::new(),
            experiences: Vec::new(),
            skills: Vec::new(),
            stats: None,
            reply: None,
            config: None,
            messages: Vec::new(),
        }
    }
}

impl<I> CmdResult<I> {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_items(mut self, items: Vec<I>) -> Self {
        self.affected_items = items;
        self
    }

    pub fn with_listed_items(mut self, items: Vec<DisplayItem<I>>) -> Self {
        self.listed_items = items;
        self
    }

    pub fn with_total_items(mut self, total: usize) -> Self {
        self.total_items = total;
        self
    }

    pub fn with_contacts(mut self, contacts: Vec<ContactMessage>) -> Self {
        self.contacts = contacts;
        self
    }

    pub fn with_experiences(mut self, experiences: Vec<Experience>) -> Self {
        self.experiences = experiences;
        self
    }

    pub fn with_skills(mut self, skills: Vec<Skill>) -> Self {
        self.skills = skills;
        self
    }

    pub fn with_stats(mut self, stats: CatalogStats) -> Self {
        self.stats = Some(stats);
        self
    }

    pub fn with_reply(mut self, reply: ChatReply) -> Self {
        self.reply = Some(reply);
        self
    }

    pub fn with_config(mut self, config: VitrineConfig) -> Self {
        self.config = Some(config);
        self
    }
}
