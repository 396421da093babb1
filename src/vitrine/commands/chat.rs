//! Keyword assistant.
//!
//! A message is lowercased and checked against each intent's keywords in a fixed order;
//! the first intent with a keyword contained in the message wins. Answers are short
//! and built from the catalog where that makes sense.

use crate::commands::CmdResult;
use crate::error::{Result, VitrineError};
use crate::model::Catalog;
use crate::store::DataStore;
use serde::Serialize;
use std::fmt;

use super::profile::sort_experiences;
use super::stats::technology_counts;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    Greeting,
    About,
    Projects,
    Skills,
    Contact,
    Unknown,
}

impl Intent {
    /// Intents in matching order, with their keywords (Portuguese and English).
    const KEYWORDS: &'static [(Intent, &'static [&'static str])] = &[
        (Intent::Greeting, &["olá", "oi", "hello"]),
        (Intent::About, &["sobre", "quem", "about", "who"]),
        (Intent::Projects, &["projeto", "trabalho", "portfolio", "project"]),
        (Intent::Skills, &["skill", "habilidade", "tecnologia", "technolog"]),
        (Intent::Contact, &["contato", "email", "falar", "contact"]),
    ];

    pub fn classify(message: &str) -> Intent {
        let lower = message.to_lowercase();
        Self::KEYWORDS
            .iter()
            .find(|(_, words)| words.iter().any(|w| lower.contains(w)))
            .map(|(intent, _)| *intent)
            .unwrap_or(Intent::Unknown)
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Intent::Greeting => "greeting",
            Intent::About => "about",
            Intent::Projects => "projects",
            Intent::Skills => "skills",
            Intent::Contact => "contact",
            Intent::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatReply {
    pub intent: Intent,
    pub answer: String,
}

fn answer(intent: Intent, catalog: &Catalog) -> String {
    match intent {
        Intent::Greeting => {
            "Hi! Ask me about the projects, skills or how to get in touch.".to_string()
        }
        Intent::About => {
            let intro = "A full-stack developer working mostly with \
                         TypeScript, React, Next.js and Node.js.";
            let mut experiences = catalog.experiences.clone();
            sort_experiences(&mut experiences);
            match experiences.first().filter(|e| e.current) {
                Some(current) => format!(
                    "{} Currently {} at {}.",
                    intro, current.title, current.company
                ),
                None => intro.to_string(),
            }
        }
        Intent::Projects => {
            let featured: Vec<&str> = catalog
                .projects
                .iter()
                .filter(|p| p.featured && p.published)
                .map(|p| p.title.as_str())
                .collect();
            if featured.is_empty() {
                "No featured projects yet; run `vitrine projects` to see everything.".to_string()
            } else {
                format!("Featured projects: {}.", featured.join(", "))
            }
        }
        Intent::Skills if !catalog.skills.is_empty() => {
            let mut skills = catalog.skills.clone();
            skills.sort_by(|a, b| b.level.cmp(&a.level));
            let top: Vec<&str> = skills.iter().take(5).map(|s| s.name.as_str()).collect();
            format!("Strongest skills: {}.", top.join(", "))
        }
        Intent::Skills => {
            let top: Vec<String> = technology_counts(catalog, 5)
                .into_iter()
                .map(|(name, _)| name)
                .collect();
            if top.is_empty() {
                "No technologies listed yet.".to_string()
            } else {
                format!("Most used technologies: {}.", top.join(", "))
            }
        }
        Intent::Contact => {
            "Use `vitrine contact` to leave a message; replies usually come quickly.".to_string()
        }
        Intent::Unknown => {
            "I can talk about projects, skills or how to get in touch. Which one?".to_string()
        }
    }
}

pub fn run<S: DataStore>(store: &S, message: &str) -> Result<CmdResult> {
    if message.trim().is_empty() {
        return Err(VitrineError::Validation("Message cannot be empty".to_string()));
    }
    let catalog = store.load()?;
    let intent = Intent::classify(message);
    let reply = ChatReply {
        intent,
        answer: answer(intent, &catalog),
    };
    Ok(CmdResult::default().with_reply(reply))
}
