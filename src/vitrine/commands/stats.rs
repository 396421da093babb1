use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::{Catalog, CertificationStatus};
use crate::store::DataStore;
use serde::Serialize;

/// Dashboard numbers for the whole catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CatalogStats {
    pub projects: usize,
    pub featured_projects: usize,
    pub draft_projects: usize,
    pub posts: usize,
    pub featured_posts: usize,
    pub certifications: usize,
    pub certifications_by_status: Vec<(String, usize)>,
    pub messages: usize,
    pub unread_messages: usize,
    pub experiences: usize,
    pub skills: usize,
    /// Most used technologies across projects, most frequent first.
    pub top_technologies: Vec<(String, usize)>,
}

const TOP_TECHNOLOGIES: usize = 5;

impl CatalogStats {
    pub fn from_catalog(catalog: &Catalog) -> Self {
        let certifications_by_status = CertificationStatus::ALL
            .iter()
            .map(|status| {
                let count = catalog
                    .certifications
                    .iter()
                    .filter(|c| c.status == *status)
                    .count();
                (status.to_string(), count)
            })
            .collect();

        Self {
            projects: catalog.projects.len(),
            featured_projects: catalog.projects.iter().filter(|p| p.featured).count(),
            draft_projects: catalog.projects.iter().filter(|p| !p.published).count(),
            posts: catalog.posts.len(),
            featured_posts: catalog.posts.iter().filter(|p| p.featured).count(),
            certifications: catalog.certifications.len(),
            certifications_by_status,
            messages: catalog.contacts.len(),
            unread_messages: catalog.contacts.iter().filter(|m| !m.read).count(),
            experiences: catalog.experiences.len(),
            skills: catalog.skills.len(),
            top_technologies: technology_counts(catalog, TOP_TECHNOLOGIES),
        }
    }
}

/// Counts technologies over all projects. Ties are broken alphabetically.
pub fn technology_counts(catalog: &Catalog, limit: usize) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for tech in catalog.projects.iter().flat_map(|p| p.technologies.iter()) {
        match counts.iter_mut().find(|(name, _)| name == tech) {
            Some((_, n)) => *n += 1,
            None => counts.push((tech.clone(), 1)),
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    counts.truncate(limit);
    counts
}

pub fn run<S: DataStore>(store: &S) -> Result<CmdResult> {
    let catalog = store.load()?;
    Ok(CmdResult::default().with_stats(CatalogStats::from_catalog(&catalog)))
}
