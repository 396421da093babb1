use super::DataStore;
use crate::error::Result;
use crate::model::Catalog;

/// Catalog storage that lives only as long as the value.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    catalog: Catalog,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_catalog(catalog: Catalog) -> Self {
        Self { catalog }
    }
}

impl DataStore for InMemoryStore {
    fn load(&self) -> Result<Catalog> {
        Ok(self.catalog.clone())
    }

    fn save(&mut self, catalog: &Catalog) -> Result<()> {
        self.catalog = catalog.clone();
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{
        utc_date, BlogPost, Certification, CertificationCategory, CertificationStatus,
        ContactMessage, Experience, PostCategory, Project, ProjectCategory, Skill,
        SkillCategory,
    };

    /// Builder for stores with known content.
    ///
    /// Every entry gets a predictable id (`p1`, `b1`, `c1`, `m1`, `x1`, ... in insertion order)
    /// and a timestamp one day after the previous entry of its kind, so the last one
    /// added is the newest.
    pub struct StoreFixture {
        pub store: InMemoryStore,
        catalog: Catalog,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
                catalog: Catalog::default(),
            }
        }

        pub fn with_project(
            mut self,
            title: &str,
            category: ProjectCategory,
            technologies: &[&str],
            featured: bool,
        ) -> Self {
            let n = self.catalog.projects.len() + 1;
            let mut project = Project::new(
                title.to_string(),
                format!("Description of {}", title),
                category,
            );
            project.id = format!("p{}", n);
            project.technologies = technologies.iter().map(|t| t.to_string()).collect();
            project.featured = featured;
            project.created_at = utc_date(2024, 1, n as u32);
            project.updated_at = project.created_at;
            self.catalog.projects.push(project);
            self.sync()
        }

        pub fn with_draft_project(mut self, title: &str) -> Self {
            self = self.with_project(title, ProjectCategory::Backend, &[], false);
            if let Some(last) = self.catalog.projects.last_mut() {
                last.published = false;
            }
            self.sync()
        }

        pub fn with_post(mut self, title: &str, category: PostCategory, tags: &[&str]) -> Self {
            let n = self.catalog.posts.len() + 1;
            let mut post = BlogPost::new(
                title.to_string(),
                format!("Excerpt of {}", title),
                "Test Author".to_string(),
                category,
            );
            post.id = format!("b{}", n);
            post.tags = tags.iter().map(|t| t.to_string()).collect();
            post.published_at = utc_date(2024, 2, n as u32);
            self.catalog.posts.push(post);
            self.sync()
        }

        pub fn with_certification(
            mut self,
            title: &str,
            issuer: &str,
            category: CertificationCategory,
            status: CertificationStatus,
        ) -> Self {
            let n = self.catalog.certifications.len() + 1;
            let mut cert =
                Certification::new(title.to_string(), issuer.to_string(), category, status);
            cert.id = format!("c{}", n);
            cert.issue_date = utc_date(2023, 1, n as u32);
            self.catalog.certifications.push(cert);
            self.sync()
        }

        pub fn with_contact(mut self, name: &str, subject: &str, read: bool) -> Self {
            let n = self.catalog.contacts.len() + 1;
            let mut msg = ContactMessage::new(
                name.to_string(),
                format!("{}@example.com", name.to_lowercase()),
                subject.to_string(),
                "Hello there, this is a test message.".to_string(),
            );
            msg.id = format!("m{}", n);
            msg.read = read;
            msg.created_at = utc_date(2024, 3, n as u32);
            self.catalog.contacts.push(msg);
            self.sync()
        }

        /// A position starting on January 1st of `start_year`. Past positions end a
        /// year later.
        pub fn with_experience(mut self, title: &str, start_year: i32, current: bool) -> Self {
            let n = self.catalog.experiences.len() + 1;
            let mut experience = Experience::new(
                title.to_string(),
                format!("Company {}", n),
                utc_date(start_year, 1, 1),
            );
            experience.id = format!("x{}", n);
            experience.current = current;
            if !current {
                experience.end_date = Some(utc_date(start_year + 1, 1, 1));
            }
            self.catalog.experiences.push(experience);
            self.sync()
        }

        pub fn with_skill(mut self, name: &str, level: u8, category: SkillCategory) -> Self {
            self.catalog
                .skills
                .push(Skill::new(name.to_string(), level, category));
            self.sync()
        }

        fn sync(mut self) -> Self {
            self.store = InMemoryStore::with_catalog(self.catalog.clone());
            self
        }
    }
}
