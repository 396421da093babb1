//! # Rendering Module
//!
//! Turns command results into styled terminal text through the templates in
//! `templates.rs` and the theme in `styles.rs`.
//!
//! Layout calculations (width, truncation, padding) stay in Rust because they require
//! Unicode-aware processing. Templates handle presentation: which style a piece of text
//! gets, section separators, empty states.
//!
//! Every public `render_*` function auto-detects color support; the `_internal` variants
//! take an explicit `use_color` so tests get stable output.

use super::styles::{names, VITRINE_THEME};
use super::templates::{
    CHAT_TEMPLATE, DETAIL_TEMPLATE, EXPERIENCE_TEMPLATE, INBOX_TEMPLATE, LIST_TEMPLATE,
    MESSAGES_TEMPLATE, SKILLS_TEMPLATE, STATS_TEMPLATE, TEXT_LIST_TEMPLATE,
};
use super::theme::{render, render_with_color};
use chrono::{DateTime, Utc};
use serde::Serialize;
use unicode_width::UnicodeWidthStr;
use vitrine::api::{CatalogStats, ChatReply, CmdMessage, MessageLevel};
use vitrine::config::VitrineConfig;
use vitrine::index::{DisplayIndex, DisplayItem};
use vitrine::model::{
    BlogPost, CatalogItem, Certification, ContactMessage, Experience, Project, Skill,
};

pub const TIME_WIDTH: usize = 14;
const LEFT_PAD: &str = "  ";
const LABEL_WIDTH: usize = 14;
const META_SEPARATOR: &str = " · ";
const UNREAD_MARKER: &str = "●";
const CURRENT_MARKER: &str = "●";
const PERIOD_FORMAT: &str = "%b %Y";
const LEVEL_BAR_WIDTH: usize = 20;

/// Width and date settings taken from the user's config.
#[derive(Debug, Clone)]
pub struct Layout {
    pub line_width: usize,
    pub date_format: String,
}

impl Layout {
    pub fn from_config(config: &VitrineConfig) -> Self {
        Self {
            line_width: config.effective_line_width(),
            date_format: config.effective_date_format().to_string(),
        }
    }

    fn date(&self, timestamp: DateTime<Utc>) -> String {
        timestamp.format(&self.date_format).to_string()
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::from_config(&VitrineConfig::default())
    }
}

/// Per-kind fields for the detail view.
pub trait Describe: CatalogItem {
    fn fields(&self, layout: &Layout) -> Vec<(&'static str, String)>;
    fn body(&self) -> Vec<&str>;
}

impl Describe for Project {
    fn fields(&self, layout: &Layout) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("Category", self.category.to_string()),
            ("Technologies", self.technologies.join(", ")),
            (
                "Status",
                if self.published { "published" } else { "draft" }.to_string(),
            ),
        ];
        if let Some(url) = &self.github_url {
            fields.push(("GitHub", url.clone()));
        }
        if let Some(url) = &self.live_url {
            fields.push(("Live", url.clone()));
        }
        fields.push(("Created", layout.date(self.created_at)));
        fields
    }

    fn body(&self) -> Vec<&str> {
        let mut body = vec![self.description.as_str()];
        if let Some(long) = &self.long_description {
            body.push(long);
        }
        body
    }
}

impl Describe for BlogPost {
    fn fields(&self, layout: &Layout) -> Vec<(&'static str, String)> {
        vec![
            ("Category", self.category.to_string()),
            ("Tags", self.tags.join(", ")),
            ("Author", self.author.clone()),
            ("Published", layout.date(self.published_at)),
            ("Read time", format!("{} min", self.read_time_minutes)),
        ]
    }

    fn body(&self) -> Vec<&str> {
        vec![self.excerpt.as_str(), self.content.as_str()]
    }
}

impl Describe for Certification {
    fn fields(&self, layout: &Layout) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("Issuer", self.issuer.clone()),
            ("Category", self.category.to_string()),
            ("Status", self.status.to_string()),
            ("Issued", layout.date(self.issue_date)),
        ];
        if let Some(expiry) = self.expiry_date {
            fields.push(("Expires", layout.date(expiry)));
        }
        if let Some(credential) = &self.credential_id {
            fields.push(("Credential", credential.clone()));
        }
        if let Some(url) = &self.credential_url {
            fields.push(("Verify at", url.clone()));
        }
        fields.push(("Skills", self.skills.join(", ")));
        fields
    }

    fn body(&self) -> Vec<&str> {
        vec![self.description.as_str()]
    }
}

#[derive(Serialize)]
struct ItemLineData {
    left_pad: String,
    index: String,
    index_style: &'static str,
    title: String,
    title_style: &'static str,
    padding: String,
    meta: String,
    meta_style: &'static str,
    date: String,
    is_separator: bool,
}

impl ItemLineData {
    fn separator() -> Self {
        Self {
            left_pad: String::new(),
            index: String::new(),
            index_style: names::LIST_INDEX,
            title: String::new(),
            title_style: names::LIST_TITLE,
            padding: String::new(),
            meta: String::new(),
            meta_style: names::CATEGORY,
            date: String::new(),
            is_separator: true,
        }
    }
}

#[derive(Serialize)]
struct ListData {
    rows: Vec<ItemLineData>,
    empty: bool,
    empty_message: String,
    hint: Option<String>,
    footer: Option<String>,
}

#[derive(Serialize)]
struct FieldData {
    label: String,
    value: String,
}

#[derive(Serialize)]
struct DetailEntry {
    index: String,
    index_style: &'static str,
    title: String,
    fields: Vec<FieldData>,
    body: String,
}

#[derive(Serialize)]
struct DetailData {
    entries: Vec<DetailEntry>,
}

#[derive(Serialize)]
struct InboxLineData {
    marker: String,
    subject: String,
    subject_style: &'static str,
    padding: String,
    time_ago: String,
    from: String,
    preview: String,
    id: String,
}

#[derive(Serialize)]
struct InboxData {
    messages: Vec<InboxLineData>,
    empty: bool,
    empty_message: String,
}

#[derive(Serialize)]
struct ExperienceEntry {
    marker: String,
    title: String,
    padding: String,
    period: String,
    place: String,
    description: String,
    technologies: String,
}

#[derive(Serialize)]
struct ExperienceData {
    entries: Vec<ExperienceEntry>,
    empty: bool,
    empty_message: String,
}

#[derive(Serialize)]
struct SkillLine {
    name: String,
    filled: String,
    rest: String,
    level: String,
}

#[derive(Serialize)]
struct SkillGroup {
    title: String,
    skills: Vec<SkillLine>,
}

#[derive(Serialize)]
struct SkillsData {
    groups: Vec<SkillGroup>,
    empty: bool,
    empty_message: String,
}

#[derive(Serialize)]
struct StatsRow {
    label: String,
    value: String,
}

#[derive(Serialize)]
struct StatsSection {
    title: String,
    rows: Vec<StatsRow>,
}

#[derive(Serialize)]
struct StatsData {
    sections: Vec<StatsSection>,
}

#[derive(Serialize)]
struct ChatData {
    answer: String,
    intent: String,
    show_intent: bool,
}

#[derive(Serialize)]
struct TextListData {
    lines: Vec<String>,
    empty_message: String,
}

#[derive(Serialize)]
struct MessageData {
    content: String,
    style: String,
}

#[derive(Serialize)]
struct MessagesData {
    messages: Vec<MessageData>,
}

fn render_template<T: Serialize>(
    template: &str,
    data: &T,
    use_color: Option<bool>,
) -> Result<String, minijinja::Error> {
    match use_color {
        Some(c) => render_with_color(template, data, &VITRINE_THEME, c),
        None => render(template, data, &VITRINE_THEME),
    }
}

fn index_style(index: &DisplayIndex) -> &'static str {
    match index {
        DisplayIndex::Featured(_) => names::FEATURED_INDEX,
        DisplayIndex::Regular(_) => names::LIST_INDEX,
    }
}

/// Renders a listing: featured rows first, a blank line, then the rest.
///
/// `total` is the size of the unfiltered collection and `filtered` whether any filter
/// was active; together they drive the "showing n of m" footer and the empty-state hint.
pub fn render_item_list<I: CatalogItem>(
    items: &[DisplayItem<I>],
    total: usize,
    filtered: bool,
    layout: &Layout,
) -> String {
    render_item_list_internal(items, total, filtered, layout, None)
}

fn render_item_list_internal<I: CatalogItem>(
    items: &[DisplayItem<I>],
    total: usize,
    filtered: bool,
    layout: &Layout,
    use_color: Option<bool>,
) -> String {
    let empty_message = format!("No {} found.", I::COLLECTION);

    if items.is_empty() {
        let hint = (filtered && total > 0).then(|| {
            "Nothing matches the current filters. Clear the search or use --category all."
                .to_string()
        });
        let data = ListData {
            rows: vec![],
            empty: true,
            empty_message: empty_message.clone(),
            hint,
            footer: None,
        };
        return render_template(LIST_TEMPLATE, &data, use_color)
            .unwrap_or_else(|_| format!("{}\n", empty_message));
    }

    let indexes: Vec<String> = items.iter().map(|di| format!("{}.", di.index)).collect();
    let metas: Vec<String> = items.iter().map(|di| item_meta(&di.item)).collect();
    let dates: Vec<String> = items.iter().map(|di| layout.date(di.item.timestamp())).collect();

    let index_width = indexes.iter().map(|s| s.width()).max().unwrap_or(0) + 1;
    let meta_width = metas.iter().map(|s| s.width()).max().unwrap_or(0);
    let date_width = dates.iter().map(|s| s.width()).max().unwrap_or(0);

    // left pad, index column, gap, meta column, gap, date column
    let fixed_width = LEFT_PAD.width() + index_width + 2 + meta_width + 2 + date_width;
    let available = layout.line_width.saturating_sub(fixed_width);

    let mut rows = Vec::new();
    let mut last_was_featured = false;

    for (i, di) in items.iter().enumerate() {
        let is_featured = matches!(di.index, DisplayIndex::Featured(_));
        if last_was_featured && !is_featured {
            rows.push(ItemLineData::separator());
        }
        last_was_featured = is_featured;

        let title = truncate_to_width(di.item.title(), available);
        let padding = " ".repeat(available.saturating_sub(title.width()) + 2);

        rows.push(ItemLineData {
            left_pad: LEFT_PAD.to_string(),
            index: format!("{:>width$} ", indexes[i], width = index_width - 1),
            index_style: index_style(&di.index),
            title,
            title_style: if di.item.is_published() {
                names::LIST_TITLE
            } else {
                names::DRAFT
            },
            padding,
            meta: pad_right(&metas[i], meta_width),
            meta_style: if di.item.is_published() {
                names::CATEGORY
            } else {
                names::DRAFT
            },
            date: format!("{:>width$}", dates[i], width = date_width),
            is_separator: false,
        });
    }

    let footer =
        filtered.then(|| format!("Showing {} of {} {}", items.len(), total, I::COLLECTION));

    let data = ListData {
        rows,
        empty: false,
        empty_message,
        hint: None,
        footer,
    };

    render_template(LIST_TEMPLATE, &data, use_color)
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

/// Category, then status when the kind has one, then a draft marker.
fn item_meta<I: CatalogItem>(item: &I) -> String {
    let mut parts = vec![item.category().to_string()];
    if let Some(status) = item.status() {
        parts.push(status.to_string());
    }
    if !item.is_published() {
        parts.push("draft".to_string());
    }
    parts.join(META_SEPARATOR)
}

/// Renders the full record of each selected item.
pub fn render_details<I: Describe>(items: &[DisplayItem<I>], layout: &Layout) -> String {
    render_details_internal(items, layout, None)
}

fn render_details_internal<I: Describe>(
    items: &[DisplayItem<I>],
    layout: &Layout,
    use_color: Option<bool>,
) -> String {
    let entries = items
        .iter()
        .map(|di| DetailEntry {
            index: di.index.to_string(),
            index_style: index_style(&di.index),
            title: di.item.title().to_string(),
            fields: di
                .item
                .fields(layout)
                .into_iter()
                .filter(|(_, value)| !value.is_empty())
                .map(|(label, value)| FieldData {
                    label: pad_right(&format!("{}:", label), LABEL_WIDTH),
                    value,
                })
                .collect(),
            body: di
                .item
                .body()
                .into_iter()
                .filter(|part| !part.trim().is_empty())
                .collect::<Vec<_>>()
                .join("\n\n"),
        })
        .collect();

    let data = DetailData { entries };
    render_template(DETAIL_TEMPLATE, &data, use_color)
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

pub fn render_inbox(messages: &[ContactMessage], layout: &Layout) -> String {
    render_inbox_internal(messages, layout, None)
}

fn render_inbox_internal(
    messages: &[ContactMessage],
    layout: &Layout,
    use_color: Option<bool>,
) -> String {
    // marker + space on the left, time column on the right
    let available = layout
        .line_width
        .saturating_sub(UNREAD_MARKER.width() + 1 + TIME_WIDTH);
    let preview_width = layout.line_width.saturating_sub(4);

    let lines = messages
        .iter()
        .map(|msg| {
            let subject = truncate_to_width(&msg.subject, available);
            let padding = " ".repeat(available.saturating_sub(subject.width()));
            let single_line: String = msg
                .message
                .chars()
                .map(|c| if c == '\n' { ' ' } else { c })
                .collect();
            InboxLineData {
                marker: if msg.read { " " } else { UNREAD_MARKER }.to_string(),
                subject,
                subject_style: if msg.read {
                    names::LIST_TITLE
                } else {
                    names::TITLE
                },
                padding,
                time_ago: format_time_ago(msg.created_at),
                from: format!("{} <{}>", msg.name, msg.email),
                preview: truncate_to_width(&single_line, preview_width),
                id: msg.id.clone(),
            }
        })
        .collect();

    let data = InboxData {
        messages: lines,
        empty: messages.is_empty(),
        empty_message: "No messages.".to_string(),
    };
    render_template(INBOX_TEMPLATE, &data, use_color)
        .unwrap_or_else(|_| "No messages.\n".to_string())
}

/// Work history in the order given, which the library already sorted.
pub fn render_experiences(experiences: &[Experience], layout: &Layout) -> String {
    render_experiences_internal(experiences, layout, None)
}

fn render_experiences_internal(
    experiences: &[Experience],
    layout: &Layout,
    use_color: Option<bool>,
) -> String {
    let body_width = layout.line_width.saturating_sub(4);

    let entries = experiences
        .iter()
        .map(|exp| {
            let period = experience_period(exp);
            // marker + space on the left, period and a gap on the right
            let available = layout
                .line_width
                .saturating_sub(CURRENT_MARKER.width() + 1 + period.width() + 2);
            let title = truncate_to_width(&exp.title, available);
            let padding = " ".repeat(available.saturating_sub(title.width()) + 2);
            let place = if exp.location.is_empty() {
                exp.company.clone()
            } else {
                format!("{}{}{}", exp.company, META_SEPARATOR, exp.location)
            };
            ExperienceEntry {
                marker: if exp.current { CURRENT_MARKER } else { " " }.to_string(),
                title,
                padding,
                period,
                place: truncate_to_width(&place, body_width),
                description: truncate_to_width(&exp.description, body_width),
                technologies: truncate_to_width(&exp.technologies.join(", "), body_width),
            }
        })
        .collect();

    let data = ExperienceData {
        entries,
        empty: experiences.is_empty(),
        empty_message: "No experience yet.".to_string(),
    };
    render_template(EXPERIENCE_TEMPLATE, &data, use_color)
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

fn experience_period(exp: &Experience) -> String {
    let start = exp.start_date.format(PERIOD_FORMAT).to_string();
    match (exp.current, exp.end_date) {
        (true, _) => format!("{} – present", start),
        (false, Some(end)) => format!("{} – {}", start, end.format(PERIOD_FORMAT)),
        (false, None) => start,
    }
}

/// Skills grouped by category, in the order given, each with a level bar.
pub fn render_skills(skills: &[Skill]) -> String {
    render_skills_internal(skills, None)
}

fn render_skills_internal(skills: &[Skill], use_color: Option<bool>) -> String {
    let name_width = skills.iter().map(|s| s.name.width()).max().unwrap_or(0) + 2;

    let mut groups: Vec<SkillGroup> = Vec::new();
    for skill in skills {
        let title = capitalize(skill.category.as_str());
        let line = skill_line(skill, name_width);
        match groups.last_mut() {
            Some(group) if group.title == title => group.skills.push(line),
            _ => groups.push(SkillGroup {
                title,
                skills: vec![line],
            }),
        }
    }

    let data = SkillsData {
        groups,
        empty: skills.is_empty(),
        empty_message: "No skills yet.".to_string(),
    };
    render_template(SKILLS_TEMPLATE, &data, use_color)
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

fn skill_line(skill: &Skill, name_width: usize) -> SkillLine {
    let level = usize::from(skill.level.min(Skill::MAX_LEVEL));
    let filled = (level * LEVEL_BAR_WIDTH + 50) / 100;
    SkillLine {
        name: pad_right(&skill.name, name_width),
        filled: "█".repeat(filled),
        rest: "░".repeat(LEVEL_BAR_WIDTH - filled),
        level: format!("{:>3}%", level),
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn render_stats(stats: &CatalogStats) -> String {
    render_stats_internal(stats, None)
}

fn render_stats_internal(stats: &CatalogStats, use_color: Option<bool>) -> String {
    fn row(label: &str, value: String) -> StatsRow {
        StatsRow {
            label: pad_right(label, LABEL_WIDTH),
            value,
        }
    }

    let mut sections = vec![StatsSection {
        title: "Catalog".to_string(),
        rows: vec![
            row(
                "Projects",
                format!(
                    "{} ({} featured, {} drafts)",
                    stats.projects, stats.featured_projects, stats.draft_projects
                ),
            ),
            row(
                "Posts",
                format!("{} ({} featured)", stats.posts, stats.featured_posts),
            ),
            row("Certifications", stats.certifications.to_string()),
            row(
                "Messages",
                format!("{} ({} unread)", stats.messages, stats.unread_messages),
            ),
            row("Experience", format!("{} positions", stats.experiences)),
            row("Skills", stats.skills.to_string()),
        ],
    }];

    sections.push(StatsSection {
        title: "Certifications by status".to_string(),
        rows: stats
            .certifications_by_status
            .iter()
            .map(|(status, count)| row(status, count.to_string()))
            .collect(),
    });

    if !stats.top_technologies.is_empty() {
        sections.push(StatsSection {
            title: "Top technologies".to_string(),
            rows: stats
                .top_technologies
                .iter()
                .map(|(name, count)| row(name, count.to_string()))
                .collect(),
        });
    }

    let data = StatsData { sections };
    render_template(STATS_TEMPLATE, &data, use_color)
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

pub fn render_chat(reply: &ChatReply, verbose: bool) -> String {
    render_chat_internal(reply, verbose, None)
}

fn render_chat_internal(reply: &ChatReply, verbose: bool, use_color: Option<bool>) -> String {
    let data = ChatData {
        answer: reply.answer.clone(),
        intent: format!("intent: {}", reply.intent),
        show_intent: verbose,
    };
    render_template(CHAT_TEMPLATE, &data, use_color)
        .unwrap_or_else(|_| format!("{}\n", reply.answer))
}

pub fn render_text_list(lines: &[String], empty_message: &str) -> String {
    render_text_list_internal(lines, empty_message, None)
}

fn render_text_list_internal(
    lines: &[String],
    empty_message: &str,
    use_color: Option<bool>,
) -> String {
    let data = TextListData {
        lines: lines.to_vec(),
        empty_message: empty_message.to_string(),
    };

    render_template(TEXT_LIST_TEMPLATE, &data, use_color)
        .unwrap_or_else(|_| format!("{}\n", empty_message))
}

/// Renders command messages. `Info` messages are only included when `verbose` is set.
pub fn render_messages(messages: &[CmdMessage], verbose: bool) -> String {
    render_messages_internal(messages, verbose, None)
}

fn render_messages_internal(
    messages: &[CmdMessage],
    verbose: bool,
    use_color: Option<bool>,
) -> String {
    let message_data: Vec<MessageData> = messages
        .iter()
        .filter(|msg| verbose || msg.level != MessageLevel::Info)
        .map(|msg| {
            let style = match msg.level {
                MessageLevel::Info => names::INFO,
                MessageLevel::Success => names::SUCCESS,
                MessageLevel::Warning => names::WARNING,
                MessageLevel::Error => names::ERROR,
            };
            MessageData {
                content: msg.content.clone(),
                style: style.to_string(),
            }
        })
        .collect();

    if message_data.is_empty() {
        return String::new();
    }

    let data = MessagesData {
        messages: message_data,
    };

    render_template(MESSAGES_TEMPLATE, &data, use_color).unwrap_or_else(|_| {
        messages
            .iter()
            .map(|m| format!("{}\n", m.content))
            .collect()
    })
}

pub fn print_messages(messages: &[CmdMessage], verbose: bool) {
    let output = render_messages(messages, verbose);
    if !output.is_empty() {
        print!("{}", output);
    }
}

fn pad_right(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(pad))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    let limit = max_width.saturating_sub(1);

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);

    let formatter = timeago::Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());

    // Pad units to the width of "seconds" so the column lines up:
    //   3 seconds ago
    //   1     day ago
    let time_str = time_str
        .replace("hours ago", "  hours ago")
        .replace("hour ago", "   hour ago")
        .replace("days ago", "   days ago")
        .replace("day ago", "    day ago")
        .replace("weeks ago", "  weeks ago")
        .replace("week ago", "   week ago")
        .replace("months ago", " months ago")
        .replace("month ago", "  month ago")
        .replace("years ago", "  years ago")
        .replace("year ago", "   year ago");

    format!("{:>width$}", time_str, width = TIME_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine::api::Intent;
    use vitrine::model::{
        utc_date, CertificationCategory, CertificationStatus, PostCategory, ProjectCategory,
    };

    fn project(title: &str, featured: bool) -> Project {
        let mut p = Project::new(
            title.to_string(),
            "A small site".to_string(),
            ProjectCategory::Frontend,
        );
        p.featured = featured;
        p.created_at = utc_date(2024, 1, 15);
        p
    }

    fn display(item: Project, index: DisplayIndex) -> DisplayItem<Project> {
        DisplayItem { item, index }
    }

    #[test]
    fn empty_list_without_filters() {
        let output =
            render_item_list_internal::<Project>(&[], 0, false, &Layout::default(), Some(false));
        assert_eq!(output.trim(), "No projects found.");
    }

    #[test]
    fn empty_list_with_filters_suggests_clearing_them() {
        let output = render_item_list_internal::<Certification>(
            &[],
            6,
            true,
            &Layout::default(),
            Some(false),
        );
        assert!(output.contains("No certifications found."));
        assert!(output.contains("--category all"));
    }

    #[test]
    fn rows_show_index_title_category_and_date() {
        let items = vec![display(project("Portfolio", false), DisplayIndex::Regular(1))];
        let output = render_item_list_internal(&items, 1, false, &Layout::default(), Some(false));

        assert!(output.contains("  1. Portfolio"));
        assert!(output.contains("frontend"));
        assert!(output.contains("15 Jan 2024"));
        assert!(!output.contains("Showing"));
    }

    #[test]
    fn featured_section_is_separated() {
        let items = vec![
            display(project("Shop", true), DisplayIndex::Featured(1)),
            display(project("Tasks", false), DisplayIndex::Regular(1)),
        ];
        let output = render_item_list_internal(&items, 2, false, &Layout::default(), Some(false));
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("f1. Shop"));
        assert!(lines[1].trim().is_empty());
        assert!(lines[2].contains(" 1. Tasks"));
    }

    #[test]
    fn filtered_list_has_footer() {
        let items = vec![display(project("Shop", false), DisplayIndex::Regular(2))];
        let output = render_item_list_internal(&items, 3, true, &Layout::default(), Some(false));
        assert!(output.contains("Showing 1 of 3 projects"));
    }

    #[test]
    fn rows_fit_the_line_width() {
        let long = "A very long project title that keeps going well past the edge of any terminal";
        let layout = Layout {
            line_width: 60,
            date_format: "%Y-%m-%d".to_string(),
        };
        let items = vec![display(project(long, false), DisplayIndex::Regular(1))];
        let output = render_item_list_internal(&items, 1, false, &layout, Some(false));

        let line = output.lines().next().unwrap();
        assert_eq!(line.width(), 60);
        assert!(line.contains('…'));
        assert!(line.ends_with("2024-01-15"));
    }

    #[test]
    fn drafts_and_statuses_appear_in_meta() {
        let mut draft = project("Draft", false);
        draft.published = false;
        assert_eq!(item_meta(&draft), "frontend · draft");

        let cert = Certification::new(
            "AWS".into(),
            "Amazon".into(),
            CertificationCategory::Backend,
            CertificationStatus::InProgress,
        );
        assert_eq!(item_meta(&cert), "backend · in-progress");
    }

    #[test]
    fn details_list_fields_and_body() {
        let mut post = BlogPost::new(
            "Hooks".into(),
            "Short intro".into(),
            "Ana".into(),
            PostCategory::Frontend,
        );
        post.tags = vec!["React".into()];
        post.content = "Full text".into();
        let items = vec![DisplayItem {
            item: post,
            index: DisplayIndex::Featured(2),
        }];

        let output = render_details_internal(&items, &Layout::default(), Some(false));
        assert!(output.starts_with("f2 Hooks"));
        assert!(output.contains("Tags:"));
        assert!(output.contains("React"));
        assert!(output.contains("Short intro\n\nFull text"));
    }

    #[test]
    fn details_skip_empty_fields() {
        let items = vec![display(project("Bare", false), DisplayIndex::Regular(1))];
        let output = render_details_internal(&items, &Layout::default(), Some(false));
        assert!(!output.contains("Technologies:"));
        assert!(!output.contains("GitHub:"));
    }

    #[test]
    fn inbox_marks_unread_messages() {
        let unread = ContactMessage::new(
            "Ana".into(),
            "ana@example.com".into(),
            "Freelance work".into(),
            "Hello there,\nare you available?".into(),
        );
        let mut read = unread.clone();
        read.read = true;
        read.subject = "Old thread".into();

        let output = render_inbox_internal(&[unread, read], &Layout::default(), Some(false));
        let lines: Vec<&str> = output.lines().collect();
        assert!(lines[0].starts_with("● Freelance work"));
        assert!(output.contains("Ana <ana@example.com>"));
        assert!(output.contains("Hello there, are you available?"));
        assert!(output.contains("  Old thread"));
    }

    #[test]
    fn empty_inbox() {
        let output = render_inbox_internal(&[], &Layout::default(), Some(false));
        assert_eq!(output.trim(), "No messages.");
    }

    #[test]
    fn stats_sections() {
        let stats = CatalogStats {
            projects: 3,
            featured_projects: 2,
            certifications_by_status: vec![("completed".into(), 4)],
            top_technologies: vec![("React".into(), 2)],
            ..Default::default()
        };
        let output = render_stats_internal(&stats, Some(false));
        assert!(output.contains("3 (2 featured, 0 drafts)"));
        assert!(output.contains("Certifications by status"));
        assert!(output.contains("completed"));
        assert!(output.contains("Top technologies"));
    }

    #[test]
    fn chat_intent_only_when_verbose() {
        let reply = ChatReply {
            intent: Intent::Skills,
            answer: "Most used technologies: React.".into(),
        };
        let quiet = render_chat_internal(&reply, false, Some(false));
        assert_eq!(quiet.trim(), "Most used technologies: React.");

        let verbose = render_chat_internal(&reply, true, Some(false));
        assert!(verbose.contains("intent: skills"));
    }

    #[test]
    fn text_list_falls_back_to_empty_message() {
        let output = render_text_list_internal(&[], "Nothing here.", Some(false));
        assert!(output.contains("Nothing here."));

        let lines = vec!["line-width = 100".to_string()];
        let output = render_text_list_internal(&lines, "", Some(false));
        assert_eq!(output, "line-width = 100\n");
    }

    #[test]
    fn info_messages_need_verbose() {
        let messages = vec![
            CmdMessage::info("id: 42"),
            CmdMessage::success("Project created: Site"),
        ];
        let quiet = render_messages_internal(&messages, false, Some(false));
        assert_eq!(quiet, "Project created: Site\n");

        let verbose = render_messages_internal(&messages, true, Some(false));
        assert!(verbose.contains("id: 42"));
    }

    #[test]
    fn only_info_messages_render_nothing_when_quiet() {
        let messages = vec![CmdMessage::info("details")];
        assert!(render_messages_internal(&messages, false, Some(false)).is_empty());
    }

    fn experience(title: &str, start: i32, end: Option<i32>) -> Experience {
        let mut exp = Experience::new(title.into(), "Acme".into(), utc_date(start, 3, 1));
        exp.location = "Lisbon".into();
        exp.end_date = end.map(|y| utc_date(y, 6, 1));
        exp.current = end.is_none();
        exp.technologies = vec!["Rust".into(), "Postgres".into()];
        exp
    }

    #[test]
    fn experience_shows_period_and_place() {
        let items = vec![
            experience("Lead Developer", 2022, None),
            experience("Developer", 2020, Some(2022)),
        ];
        let output = render_experiences_internal(&items, &Layout::default(), Some(false));
        let lines: Vec<&str> = output.lines().collect();

        assert!(lines[0].starts_with("● Lead Developer"));
        assert!(lines[0].ends_with("Mar 2022 – present"));
        assert_eq!(lines[0].width(), Layout::default().line_width);
        assert_eq!(lines[1], "    Acme · Lisbon");
        assert_eq!(lines[2], "    Rust, Postgres");
        assert!(lines[3].is_empty());
        assert!(lines[4].starts_with("  Developer"));
        assert!(lines[4].ends_with("Mar 2020 – Jun 2022"));
    }

    #[test]
    fn empty_experience() {
        let output = render_experiences_internal(&[], &Layout::default(), Some(false));
        assert_eq!(output.trim(), "No experience yet.");
    }

    #[test]
    fn skills_group_by_category_with_bars() {
        use vitrine::model::SkillCategory;
        let skills = vec![
            Skill::new("Node.js".into(), 80, SkillCategory::Backend),
            Skill::new("HTML5".into(), 95, SkillCategory::Frontend),
            Skill::new("React".into(), 90, SkillCategory::Frontend),
        ];
        let output = render_skills_internal(&skills, Some(false));
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[0], "Backend");
        assert_eq!(
            lines[1],
            format!("  Node.js  {}{}  80%", "█".repeat(16), "░".repeat(4))
        );
        assert!(lines[2].is_empty());
        assert_eq!(lines[3], "Frontend");
        assert!(lines[4].starts_with("  HTML5    "));
        assert!(lines[4].ends_with(" 95%"));
        assert_eq!(lines.len(), 6);
    }

    #[test]
    fn truncation_respects_width() {
        assert_eq!(truncate_to_width("short", 10), "short");
        assert_eq!(truncate_to_width("exactly10!", 10), "exactly10!");
        let cut = truncate_to_width("a longer sentence", 8);
        assert_eq!(cut.width(), 8);
        assert!(cut.ends_with('…'));
    }

    #[test]
    fn time_ago_is_padded() {
        let output = format_time_ago(Utc::now() - chrono::Duration::days(1));
        assert_eq!(output.width(), TIME_WIDTH);
        assert!(output.ends_with("day ago"));
    }
}
