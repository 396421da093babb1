//! Catalog data types.
//!
//! Three kinds of entries are listed on the site: [`Project`], [`BlogPost`] and
//! [`Certification`]. They share the [`CatalogItem`] contract, which is everything the
//! filter engine and the generic commands need to know about an entry. Contact form
//! submissions ([`ContactMessage`]) live next to them in the [`Catalog`] but are not
//! catalog items: they are never filtered or featured.
//!
//! Categories and statuses are closed enums. Free text coming from the outside is
//! parsed with `FromStr` at the boundary, so an unknown value is an error there and
//! never reaches the filter as a value that silently matches nothing.

use crate::error::VitrineError;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

macro_rules! taxonomy {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal {
            $($variant:ident => $label:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = VitrineError;

            fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
                let wanted = s.trim();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str().eq_ignore_ascii_case(wanted))
                    .ok_or_else(|| VitrineError::InvalidFilter {
                        kind: $kind,
                        value: s.to_string(),
                        expected: Self::ALL
                            .iter()
                            .map(|v| v.as_str())
                            .collect::<Vec<_>>()
                            .join(", "),
                    })
            }
        }
    };
}

taxonomy! {
    /// Where a project sits in the stack.
    ProjectCategory, "project category" {
        Frontend => "frontend",
        Backend => "backend",
        Fullstack => "fullstack",
    }
}

taxonomy! {
    /// Blog taxonomy. Adding a category is a code change.
    PostCategory, "post category" {
        Frontend => "Frontend",
        Backend => "Backend",
        Css => "CSS",
        Performance => "Performance",
        Design => "Design",
        Carreira => "Carreira",
    }
}

taxonomy! {
    CertificationCategory, "certification category" {
        Frontend => "frontend",
        Backend => "backend",
        Fullstack => "fullstack",
        Design => "design",
        Other => "other",
    }
}

taxonomy! {
    CertificationStatus, "certification status" {
        Completed => "completed",
        InProgress => "in-progress",
        Expired => "expired",
    }
}

taxonomy! {
    SkillCategory, "skill category" {
        Frontend => "frontend",
        Backend => "backend",
        Database => "database",
        Tools => "tools",
        Other => "other",
    }
}

/// Status type for item kinds that have no status.
///
/// It has no values, so a status filter over such items can only ever be "all".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoStatus {}

impl fmt::Display for NoStatus {
    fn fmt(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {}
    }
}

impl FromStr for NoStatus {
    type Err = VitrineError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Err(VitrineError::InvalidFilter {
            kind: "status",
            value: s.to_string(),
            expected: "all".to_string(),
        })
    }
}

/// Which catalog collection an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Collection {
    Projects,
    Posts,
    Certifications,
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Collection::Projects => f.write_str("projects"),
            Collection::Posts => f.write_str("posts"),
            Collection::Certifications => f.write_str("certifications"),
        }
    }
}

/// Anything that can be placed in the featured section of a listing.
pub trait Featured {
    fn is_featured(&self) -> bool;
}

/// The contract shared by every filterable catalog entry.
pub trait CatalogItem: Featured + Clone + fmt::Debug {
    type Category: Copy + Eq + fmt::Debug + fmt::Display + FromStr<Err = VitrineError>;
    type Status: Copy + Eq + fmt::Debug + fmt::Display + FromStr<Err = VitrineError>;

    /// Singular noun used in messages ("project", "post", ...).
    const KIND: &'static str;
    const COLLECTION: Collection;

    fn id(&self) -> &str;
    fn title(&self) -> &str;

    /// Text fields eligible for free-text search, title first. Tags are matched separately.
    fn search_fields(&self) -> Vec<&str>;

    fn tags(&self) -> &[String];
    fn category(&self) -> Self::Category;

    fn status(&self) -> Option<Self::Status> {
        None
    }

    /// Timestamp used for newest-first ordering and for display.
    fn timestamp(&self) -> DateTime<Utc>;

    fn set_featured(&mut self, featured: bool);

    /// Drafts are hidden from public listings.
    fn is_published(&self) -> bool {
        true
    }

    fn entries(catalog: &Catalog) -> &Vec<Self>;
    fn entries_mut(catalog: &mut Catalog) -> &mut Vec<Self>;
}

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// Midnight UTC of a calendar date; used for dated seed entries and CLI input.
pub fn utc_date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(year, month, day)
        .map(utc_midnight)
        .unwrap_or_default()
}

pub fn utc_midnight(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long_description: Option<String>,
    #[serde(default)]
    pub image: String,
    pub technologies: Vec<String>,
    pub category: ProjectCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
    pub featured: bool,
    #[serde(default = "default_published")]
    pub published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

fn default_published() -> bool {
    true
}

impl Project {
    pub fn new(title: String, description: String, category: ProjectCategory) -> Self {
        let now = Utc::now();
        Self {
            id: new_id(),
            title,
            description,
            long_description: None,
            image: String::new(),
            technologies: Vec::new(),
            category,
            github_url: None,
            live_url: None,
            featured: false,
            published: true,
            created_at: now,
            updated_at: now,
        }
    }
}

impl Featured for Project {
    fn is_featured(&self) -> bool {
        self.featured
    }
}

impl CatalogItem for Project {
    type Category = ProjectCategory;
    type Status = NoStatus;

    const KIND: &'static str = "project";
    const COLLECTION: Collection = Collection::Projects;

    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.description.as_str()]
    }

    fn tags(&self) -> &[String] {
        &self.technologies
    }

    fn category(&self) -> ProjectCategory {
        self.category
    }

    fn timestamp(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn set_featured(&mut self, featured: bool) {
        self.featured = featured;
        self.updated_at = Utc::now();
    }

    fn is_published(&self) -> bool {
        self.published
    }

    fn entries(catalog: &Catalog) -> &Vec<Self> {
        &catalog.projects
    }

    fn entries_mut(catalog: &mut Catalog) -> &mut Vec<Self> {
        &mut catalog.projects
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    #[serde(default)]
    pub content: String,
    pub author: String,
    pub category: PostCategory,
    pub tags: Vec<String>,
    pub read_time_minutes: u32,
    pub featured: bool,
    pub published_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl BlogPost {
    pub fn new(title: String, excerpt: String, author: String, category: PostCategory) -> Self {
        Self {
            id: new_id(),
            title,
            excerpt,
            content: String::new(),
            author,
            category,
            tags: Vec::new(),
            read_time_minutes: 1,
            featured: false,
            published_at: Utc::now(),
            image: None,
        }
    }
}

impl Featured for BlogPost {
    fn is_featured(&self) -> bool {
        self.featured
    }
}

impl CatalogItem for BlogPost {
    type Category = PostCategory;
    type Status = NoStatus;

    const KIND: &'static str = "post";
    const COLLECTION: Collection = Collection::Posts;

    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.excerpt.as_str()]
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }

    fn category(&self) -> PostCategory {
        self.category
    }

    fn timestamp(&self) -> DateTime<Utc> {
        self.published_at
    }

    fn set_featured(&mut self, featured: bool) {
        self.featured = featured;
    }

    fn entries(catalog: &Catalog) -> &Vec<Self> {
        &catalog.posts
    }

    fn entries_mut(catalog: &mut Catalog) -> &mut Vec<Self> {
        &mut catalog.posts
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Certification {
    pub id: String,
    pub title: String,
    pub issuer: String,
    pub description: String,
    pub issue_date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credential_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credential_url: Option<String>,
    pub skills: Vec<String>,
    pub category: CertificationCategory,
    pub status: CertificationStatus,
    #[serde(default)]
    pub featured: bool,
}

impl Certification {
    pub fn new(
        title: String,
        issuer: String,
        category: CertificationCategory,
        status: CertificationStatus,
    ) -> Self {
        Self {
            id: new_id(),
            title,
            issuer,
            description: String::new(),
            issue_date: Utc::now(),
            expiry_date: None,
            credential_id: None,
            credential_url: None,
            skills: Vec::new(),
            category,
            status,
            featured: false,
        }
    }
}

impl Featured for Certification {
    fn is_featured(&self) -> bool {
        self.featured
    }
}

impl CatalogItem for Certification {
    type Category = CertificationCategory;
    type Status = CertificationStatus;

    const KIND: &'static str = "certification";
    const COLLECTION: Collection = Collection::Certifications;

    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    // The certifications page searches the issuer as well.
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.title.as_str(),
            self.issuer.as_str(),
            self.description.as_str(),
        ]
    }

    fn tags(&self) -> &[String] {
        &self.skills
    }

    fn category(&self) -> CertificationCategory {
        self.category
    }

    fn status(&self) -> Option<CertificationStatus> {
        Some(self.status)
    }

    fn timestamp(&self) -> DateTime<Utc> {
        self.issue_date
    }

    fn set_featured(&mut self, featured: bool) {
        self.featured = featured;
    }

    fn entries(catalog: &Catalog) -> &Vec<Self> {
        &catalog.certifications
    }

    fn entries_mut(catalog: &mut Catalog) -> &mut Vec<Self> {
        &mut catalog.certifications
    }
}

/// A message left through the contact form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub id: String,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    #[serde(default)]
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

impl ContactMessage {
    pub fn new(name: String, email: String, subject: String, message: String) -> Self {
        Self {
            id: new_id(),
            name,
            email,
            subject,
            message,
            read: false,
            created_at: Utc::now(),
        }
    }
}

/// A position in the work history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub id: String,
    pub title: String,
    pub company: String,
    #[serde(default)]
    pub location: String,
    pub start_date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
    /// Still holding the position; such entries have no end date.
    #[serde(default)]
    pub current: bool,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
}

impl Experience {
    pub fn new(title: String, company: String, start_date: DateTime<Utc>) -> Self {
        Self {
            id: new_id(),
            title,
            company,
            location: String::new(),
            start_date,
            end_date: None,
            current: false,
            description: String::new(),
            technologies: Vec::new(),
        }
    }
}

/// A skill with a self-assessed level from 0 to 100. Names are unique, ignoring case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: u8,
    pub category: SkillCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl Skill {
    pub const MAX_LEVEL: u8 = 100;

    pub fn new(name: String, level: u8, category: SkillCategory) -> Self {
        Self {
            name,
            level,
            category,
            icon: None,
        }
    }
}

/// Everything a store persists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub posts: Vec<BlogPost>,
    #[serde(default)]
    pub certifications: Vec<Certification>,
    #[serde(default)]
    pub contacts: Vec<ContactMessage>,
    #[serde(default)]
    pub experiences: Vec<Experience>,
    #[serde(default)]
    pub skills: Vec<Skill>,
}

impl Catalog {
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
            && self.posts.is_empty()
            && self.certifications.is_empty()
            && self.contacts.is_empty()
            && self.experiences.is_empty()
            && self.skills.is_empty()
    }
}
