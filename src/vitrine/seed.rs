//! The sample catalog written by `vitrine init`.

use crate::model::{
    utc_date, BlogPost, Catalog, Certification, CertificationCategory, CertificationStatus,
    Experience, PostCategory, Project, ProjectCategory, Skill, SkillCategory,
};

pub const SAMPLE_AUTHOR: &str = "Vanderson Cangaty";

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn project(
    id: &str,
    title: &str,
    description: &str,
    category: ProjectCategory,
    technologies: &[&str],
    featured: bool,
    created: (i32, u32, u32),
) -> Project {
    let mut p = Project::new(title.to_string(), description.to_string(), category);
    p.id = id.to_string();
    p.technologies = strings(technologies);
    p.featured = featured;
    p.created_at = utc_date(created.0, created.1, created.2);
    p.updated_at = p.created_at;
    p
}

#[allow(clippy::too_many_arguments)]
fn post(
    id: &str,
    title: &str,
    excerpt: &str,
    category: PostCategory,
    tags: &[&str],
    read_time_minutes: u32,
    featured: bool,
    published: (i32, u32, u32),
) -> BlogPost {
    let mut b = BlogPost::new(
        title.to_string(),
        excerpt.to_string(),
        SAMPLE_AUTHOR.to_string(),
        category,
    );
    b.id = id.to_string();
    b.tags = strings(tags);
    b.read_time_minutes = read_time_minutes;
    b.featured = featured;
    b.published_at = utc_date(published.0, published.1, published.2);
    b
}

#[allow(clippy::too_many_arguments)]
fn certification(
    id: &str,
    title: &str,
    issuer: &str,
    description: &str,
    category: CertificationCategory,
    status: CertificationStatus,
    skills: &[&str],
    issued: (i32, u32, u32),
) -> Certification {
    let mut c = Certification::new(title.to_string(), issuer.to_string(), category, status);
    c.id = id.to_string();
    c.description = description.to_string();
    c.skills = strings(skills);
    c.issue_date = utc_date(issued.0, issued.1, issued.2);
    c
}

fn experience(
    id: &str,
    title: &str,
    company: &str,
    description: &str,
    technologies: &[&str],
    years: (i32, Option<i32>),
) -> Experience {
    let mut e = Experience::new(
        title.to_string(),
        company.to_string(),
        utc_date(years.0, 1, 1),
    );
    e.id = id.to_string();
    e.location = "São Paulo, SP".to_string();
    e.description = description.to_string();
    e.technologies = strings(technologies);
    e.end_date = years.1.map(|end| utc_date(end, 1, 1));
    e.current = years.1.is_none();
    e
}

fn sample_experiences() -> Vec<Experience> {
    vec![
        experience(
            "1",
            "Senior Full Stack Developer",
            "TechCorp Solutions",
            "Technical lead on large projects with React, Next.js, Node.js and PostgreSQL. \
             Responsible for system architecture and mentoring junior developers.",
            &["React", "Next.js", "TypeScript", "Node.js", "PostgreSQL", "AWS"],
            (2022, None),
        ),
        experience(
            "2",
            "Frontend Developer",
            "Digital Innovations",
            "Modern, responsive interfaces for web applications, with a focus on \
             performance and user experience.",
            &["React", "Vue.js", "JavaScript", "Sass", "Webpack"],
            (2021, Some(2022)),
        ),
        experience(
            "3",
            "Junior Developer",
            "StartupTech",
            "First web applications, focused on learning and technical growth.",
            &["HTML", "CSS", "JavaScript", "PHP", "MySQL"],
            (2020, Some(2021)),
        ),
    ]
}

fn sample_skills() -> Vec<Skill> {
    use SkillCategory::{Backend, Frontend, Tools};
    [
        ("React.js", 90, Frontend),
        ("TypeScript", 85, Frontend),
        ("JavaScript", 85, Frontend),
        ("HTML5", 95, Frontend),
        ("CSS3", 95, Frontend),
        ("Tailwind CSS", 90, Frontend),
        ("Sass", 80, Frontend),
        ("Next.js", 88, Frontend),
        ("React Hooks", 85, Frontend),
        ("Context API", 80, Frontend),
        ("RESTful APIs", 85, Backend),
        ("Git", 90, Tools),
        ("GitHub", 88, Tools),
        ("Figma", 75, Tools),
        ("Photoshop", 70, Tools),
        ("Illustrator", 70, Tools),
    ]
    .into_iter()
    .map(|(name, level, category)| Skill::new(name.to_string(), level, category))
    .collect()
}

pub fn sample_catalog() -> Catalog {
    let mut ecommerce = project(
        "1",
        "E-commerce Platform",
        "Complete e-commerce platform with an admin panel, payments and inventory management.",
        ProjectCategory::Fullstack,
        &["Next.js", "TypeScript", "Node.js", "PostgreSQL", "Stripe", "Tailwind CSS"],
        true,
        (2024, 1, 15),
    );
    ecommerce.long_description = Some(
        "Authentication, shopping cart, Stripe payment processing and an admin panel \
         for products and orders, built with Next.js and Node.js."
            .to_string(),
    );
    ecommerce.github_url = Some("https://github.com/vandersoncangaty/ecommerce".to_string());
    ecommerce.live_url = Some("https://ecommerce-demo.vandersoncangaty.dev".to_string());

    let mut taskapp = project(
        "2",
        "Task Management App",
        "Task management with real-time collaboration and notifications.",
        ProjectCategory::Fullstack,
        &["React", "Socket.io", "Express", "MongoDB", "Material-UI"],
        true,
        (2023, 11, 20),
    );
    taskapp.github_url = Some("https://github.com/vandersoncangaty/taskapp".to_string());
    taskapp.live_url = Some("https://taskapp.vandersoncangaty.dev".to_string());

    let mut portfolio = project(
        "3",
        "Portfolio Website",
        "Responsive portfolio site with smooth animations and a modern design.",
        ProjectCategory::Frontend,
        &["Next.js", "Framer Motion", "Tailwind CSS", "TypeScript"],
        false,
        (2023, 9, 10),
    );
    portfolio.github_url = Some("https://github.com/vandersoncangaty/portfolio".to_string());
    portfolio.live_url = Some("https://vandersoncangaty.dev".to_string());

    let posts = vec![
        post(
            "1",
            "Building modern interfaces with React and TypeScript",
            "Best practices for scalable, type-safe user interfaces with React and TypeScript.",
            PostCategory::Frontend,
            &["React", "TypeScript", "Frontend"],
            8,
            true,
            (2024, 1, 15),
        ),
        post(
            "2",
            "Tailwind CSS: a complete beginner's guide",
            "How Tailwind CSS speeds up development and keeps designs consistent and responsive.",
            PostCategory::Css,
            &["CSS", "Tailwind", "Design"],
            6,
            false,
            (2024, 1, 10),
        ),
        post(
            "3",
            "Next.js 14: what's new and how to migrate",
            "The main changes in Next.js 14 and how to move existing projects to it.",
            PostCategory::Performance,
            &["Next.js", "React", "JavaScript"],
            10,
            true,
            (2024, 1, 5),
        ),
        post(
            "4",
            "Design Systems: building reusable components",
            "Creating and maintaining a design system that speeds up development.",
            PostCategory::Design,
            &["Design System", "UI/UX", "Frontend"],
            12,
            false,
            (2023, 12, 20),
        ),
    ];

    let mut degree = certification(
        "1",
        "Systems Analysis and Development",
        "UNICESUMAR",
        "Degree focused on software development, systems analysis and technology project management.",
        CertificationCategory::Fullstack,
        CertificationStatus::InProgress,
        &["Programming", "Systems Analysis", "Databases", "Project Management"],
        (2023, 3, 1),
    );
    degree.expiry_date = Some(utc_date(2025, 7, 1));

    let mut react = certification(
        "2",
        "React - The Complete Guide",
        "Udemy",
        "Complete React.js course covering hooks, the context API, Redux and best practices.",
        CertificationCategory::Frontend,
        CertificationStatus::Completed,
        &["React.js", "JavaScript", "Hooks", "Redux"],
        (2023, 8, 15),
    );
    react.credential_id = Some("UC-12345678".to_string());
    react.credential_url = Some("https://udemy.com/certificate/UC-12345678".to_string());

    let mut typescript = certification(
        "3",
        "TypeScript for Beginners",
        "Codecademy",
        "TypeScript fundamentals, static typing and integration with JavaScript projects.",
        CertificationCategory::Frontend,
        CertificationStatus::Completed,
        &["TypeScript", "JavaScript", "Static Typing"],
        (2023, 9, 20),
    );
    typescript.credential_id = Some("CERT-TS-2023".to_string());

    let mut photoshop = certification(
        "4",
        "Adobe Photoshop CC - Essentials",
        "Adobe",
        "Official Adobe course on Photoshop fundamentals for graphic design.",
        CertificationCategory::Design,
        CertificationStatus::Expired,
        &["Photoshop", "Graphic Design", "Image Editing"],
        (2022, 5, 10),
    );
    photoshop.expiry_date = Some(utc_date(2024, 5, 10));
    photoshop.credential_id = Some("ADOBE-PS-2022".to_string());

    let mut git = certification(
        "5",
        "Git & GitHub Masterclass",
        "Coursera",
        "Version control with Git, team collaboration and GitHub best practices.",
        CertificationCategory::Other,
        CertificationStatus::Completed,
        &["Git", "GitHub", "Version Control", "Collaboration"],
        (2023, 7, 5),
    );
    git.credential_id = Some("COURSERA-GIT-2023".to_string());
    git.credential_url = Some("https://coursera.org/verify/COURSERA-GIT-2023".to_string());

    let mut nextjs = certification(
        "6",
        "Next.js & React - The Complete Guide",
        "Udemy",
        "Full-stack applications with Next.js, including SSR, SSG and API routes.",
        CertificationCategory::Fullstack,
        CertificationStatus::Completed,
        &["Next.js", "React", "SSR", "SSG", "API Routes"],
        (2023, 10, 12),
    );
    nextjs.credential_id = Some("UC-NEXTJS-2023".to_string());

    Catalog {
        projects: vec![ecommerce, taskapp, portfolio],
        posts,
        certifications: vec![degree, react, typescript, photoshop, git, nextjs],
        contacts: Vec::new(),
        experiences: sample_experiences(),
        skills: sample_skills(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{filter_items, partition_featured, CatalogFilter, Choice};
    use crate::model::CatalogItem;

    #[test]
    fn sample_has_every_collection() {
        let catalog = sample_catalog();
        assert_eq!(catalog.projects.len(), 3);
        assert_eq!(catalog.posts.len(), 4);
        assert_eq!(catalog.certifications.len(), 6);
        assert_eq!(catalog.experiences.len(), 3);
        assert_eq!(catalog.skills.len(), 16);
        assert!(catalog.contacts.is_empty());
    }

    #[test]
    fn sample_has_one_current_position() {
        let catalog = sample_catalog();
        let current: Vec<_> = catalog
            .experiences
            .iter()
            .filter(|e| e.current)
            .map(|e| e.company.as_str())
            .collect();
        assert_eq!(current, vec!["TechCorp Solutions"]);
        assert!(catalog
            .experiences
            .iter()
            .all(|e| e.current == e.end_date.is_none()));
        assert!(catalog.skills.iter().all(|s| s.level <= Skill::MAX_LEVEL));
    }

    #[test]
    fn sample_ids_are_unique_per_collection() {
        let catalog = sample_catalog();
        let mut ids: Vec<_> = catalog.certifications.iter().map(|c| c.id()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), catalog.certifications.len());
    }

    #[test]
    fn udemy_search_finds_both_courses() {
        let catalog = sample_catalog();
        let found = filter_items(
            &catalog.certifications,
            &CatalogFilter::all().with_search("udemy"),
        );
        let ids: Vec<_> = found.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "6"]);
    }

    #[test]
    fn completed_frontend_certifications() {
        let catalog = sample_catalog();
        let filter = CatalogFilter::all()
            .with_category(Choice::Only(CertificationCategory::Frontend))
            .with_status(Choice::Only(CertificationStatus::Completed));
        assert_eq!(filter_items(&catalog.certifications, &filter).len(), 2);
    }

    #[test]
    fn featured_posts_split() {
        let part = partition_featured(sample_catalog().posts);
        assert_eq!(part.featured.len(), 2);
        assert_eq!(part.regular.len(), 2);
    }
}
