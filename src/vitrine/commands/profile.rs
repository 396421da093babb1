//! The about page: work history and skills.
//!
//! Neither is a catalog item. Experiences are listed current position first, then by
//! start date, newest first. Skills are grouped by category name and listed strongest
//! first within a group.

use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, VitrineError};
use crate::filter::Choice;
use crate::model::{Experience, Skill, SkillCategory};
use crate::store::DataStore;
use chrono::{DateTime, Utc};

/// Input for a new work history entry.
#[derive(Debug, Clone)]
pub struct NewExperience {
    pub title: String,
    pub company: String,
    pub location: String,
    pub start_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
    pub current: bool,
    pub description: String,
    pub technologies: Vec<String>,
}

impl NewExperience {
    pub fn new(
        title: impl Into<String>,
        company: impl Into<String>,
        start_date: DateTime<Utc>,
    ) -> Self {
        Self {
            title: title.into(),
            company: company.into(),
            location: String::new(),
            start_date,
            end_date: None,
            current: false,
            description: String::new(),
            technologies: Vec::new(),
        }
    }

    pub fn problems(&self) -> Vec<String> {
        let mut problems = Vec::new();
        if self.title.trim().is_empty() {
            problems.push("title cannot be empty".to_string());
        }
        if self.company.trim().is_empty() {
            problems.push("company cannot be empty".to_string());
        }
        match self.end_date {
            Some(_) if self.current => {
                problems.push("a current position has no end date".to_string())
            }
            Some(end) if end < self.start_date => {
                problems.push("end date is before start date".to_string())
            }
            _ => {}
        }
        problems
    }

    fn into_experience(self) -> Experience {
        let mut experience = Experience::new(
            self.title.trim().to_string(),
            self.company.trim().to_string(),
            self.start_date,
        );
        experience.location = self.location.trim().to_string();
        experience.end_date = self.end_date;
        experience.current = self.current;
        experience.description = self.description;
        experience.technologies = self.technologies;
        experience
    }
}

/// Input for a new skill.
#[derive(Debug, Clone)]
pub struct NewSkill {
    pub name: String,
    pub level: u8,
    pub category: SkillCategory,
}

/// Current positions first, then newest start date first. Ties keep stored order.
pub fn sort_experiences(experiences: &mut [Experience]) {
    experiences.sort_by(|a, b| {
        b.current
            .cmp(&a.current)
            .then_with(|| b.start_date.cmp(&a.start_date))
    });
}

/// Category name ascending, then level descending. Ties keep stored order.
pub fn sort_skills(skills: &mut [Skill]) {
    skills.sort_by(|a, b| {
        a.category
            .as_str()
            .cmp(b.category.as_str())
            .then_with(|| b.level.cmp(&a.level))
    });
}

pub fn experiences<S: DataStore>(store: &S) -> Result<CmdResult> {
    let mut experiences = store.load()?.experiences;
    sort_experiences(&mut experiences);
    Ok(CmdResult::default().with_experiences(experiences))
}

pub fn add_experience<S: DataStore>(store: &mut S, input: NewExperience) -> Result<CmdResult> {
    let problems = input.problems();
    if !problems.is_empty() {
        return Err(VitrineError::Validation(problems.join("; ")));
    }

    let experience = input.into_experience();
    let mut catalog = store.load()?;
    catalog.experiences.push(experience.clone());
    store.save(&catalog)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Experience added: {} at {}",
        experience.title, experience.company
    )));
    result.add_message(CmdMessage::info(format!("id: {}", experience.id)));
    Ok(result.with_experiences(vec![experience]))
}

pub fn skills<S: DataStore>(store: &S, category: Choice<SkillCategory>) -> Result<CmdResult> {
    let mut skills: Vec<Skill> = store
        .load()?
        .skills
        .into_iter()
        .filter(|skill| category.admits(&skill.category))
        .collect();
    sort_skills(&mut skills);
    Ok(CmdResult::default().with_skills(skills))
}

pub fn add_skill<S: DataStore>(store: &mut S, input: NewSkill) -> Result<CmdResult> {
    let name = input.name.trim();
    if name.is_empty() {
        return Err(VitrineError::Validation(
            "skill name cannot be empty".to_string(),
        ));
    }
    if input.level > Skill::MAX_LEVEL {
        return Err(VitrineError::Validation(format!(
            "level must be between 0 and {}, got {}",
            Skill::MAX_LEVEL,
            input.level
        )));
    }

    let mut catalog = store.load()?;
    if catalog
        .skills
        .iter()
        .any(|skill| skill.name.eq_ignore_ascii_case(name))
    {
        return Err(VitrineError::Validation(format!(
            "a skill named {} already exists",
            name
        )));
    }

    let skill = Skill::new(name.to_string(), input.level, input.category);
    catalog.skills.push(skill.clone());
    store.save(&catalog)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Skill added: {} ({}, {}%)",
        skill.name, skill.category, skill.level
    )));
    Ok(result.with_skills(vec![skill]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::utc_date;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    fn titles(result: &CmdResult) -> Vec<&str> {
        result.experiences.iter().map(|e| e.title.as_str()).collect()
    }

    #[test]
    fn current_position_comes_first() {
        let fixture = StoreFixture::new()
            .with_experience("Junior", 2020, false)
            .with_experience("Senior", 2022, true)
            .with_experience("Frontend", 2021, false)
            .with_experience("Consultant", 2019, true);

        let result = experiences(&fixture.store).unwrap();
        assert_eq!(
            titles(&result),
            vec!["Senior", "Consultant", "Frontend", "Junior"]
        );
    }

    #[test]
    fn adds_valid_experience() {
        let mut store = InMemoryStore::new();
        let mut input = NewExperience::new(" Developer ", "Acme", utc_date(2021, 3, 1));
        input.end_date = Some(utc_date(2022, 6, 1));
        input.technologies = vec!["Rust".into()];

        let result = add_experience(&mut store, input).unwrap();
        assert_eq!(result.messages[0].content, "Experience added: Developer at Acme");

        let stored = store.load().unwrap().experiences;
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].title, "Developer");
        assert_eq!(stored[0].technologies, vec!["Rust"]);
    }

    #[test]
    fn rejects_inconsistent_dates() {
        let mut store = InMemoryStore::new();

        let mut backwards = NewExperience::new("Dev", "Acme", utc_date(2022, 1, 1));
        backwards.end_date = Some(utc_date(2021, 1, 1));
        let err = add_experience(&mut store, backwards).unwrap_err().to_string();
        assert!(err.contains("end date is before start date"));

        let mut current_with_end = NewExperience::new("Dev", "Acme", utc_date(2022, 1, 1));
        current_with_end.current = true;
        current_with_end.end_date = Some(utc_date(2023, 1, 1));
        assert!(add_experience(&mut store, current_with_end).is_err());

        let blank = NewExperience::new("", " ", utc_date(2022, 1, 1));
        assert_eq!(blank.problems().len(), 2);

        assert!(store.load().unwrap().experiences.is_empty());
    }

    #[test]
    fn skills_sort_by_category_then_level() {
        let fixture = StoreFixture::new()
            .with_skill("Figma", 75, SkillCategory::Tools)
            .with_skill("React", 90, SkillCategory::Frontend)
            .with_skill("Node.js", 80, SkillCategory::Backend)
            .with_skill("HTML5", 95, SkillCategory::Frontend)
            .with_skill("Git", 90, SkillCategory::Tools)
            .with_skill("PostgreSQL", 70, SkillCategory::Database);

        let result = skills(&fixture.store, Choice::All).unwrap();
        let names: Vec<_> = result.skills.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Node.js", "PostgreSQL", "HTML5", "React", "Git", "Figma"]
        );
    }

    #[test]
    fn skills_filter_by_category() {
        let fixture = StoreFixture::new()
            .with_skill("React", 90, SkillCategory::Frontend)
            .with_skill("Git", 90, SkillCategory::Tools);

        let result = skills(&fixture.store, Choice::Only(SkillCategory::Tools)).unwrap();
        assert_eq!(result.skills.len(), 1);
        assert_eq!(result.skills[0].name, "Git");
    }

    #[test]
    fn skill_validation() {
        let mut fixture = StoreFixture::new().with_skill("React", 90, SkillCategory::Frontend);
        let skill = |name: &str, level| NewSkill {
            name: name.to_string(),
            level,
            category: SkillCategory::Frontend,
        };

        let err = add_skill(&mut fixture.store, skill("react", 50))
            .unwrap_err()
            .to_string();
        assert!(err.contains("a skill named react already exists"));
        assert!(matches!(
            add_skill(&mut fixture.store, skill("Vue", 101)),
            Err(VitrineError::Validation(_))
        ));
        assert!(add_skill(&mut fixture.store, skill("  ", 50)).is_err());

        let result = add_skill(&mut fixture.store, skill(" Vue ", 60)).unwrap();
        assert_eq!(result.messages[0].content, "Skill added: Vue (frontend, 60%)");
        assert_eq!(fixture.store.load().unwrap().skills.len(), 2);
    }
}
