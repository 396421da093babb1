//! Styles for the vitrine CLI.
//!
//! Styling gets done in layers. Templates only use the semantic names in [`names`]
//! (an index, a title, a category chip). Those names are bound here to a small palette
//! of presentation styles (muted, accent, featured), which in turn carry the actual
//! colors. Changing how "featured" looks is one line, and every template follows.
//!
//! The theme is built once through `once_cell::sync::Lazy`.

use super::theme::{rgb_to_ansi256, Theme};
use console::Style;
use once_cell::sync::Lazy;

/// Style identifiers shared between templates and renderers.
pub mod names {
    pub const MUTED: &str = "muted";
    pub const ERROR: &str = "error";
    pub const WARNING: &str = "warning";
    pub const SUCCESS: &str = "success";
    pub const INFO: &str = "info";
    pub const TITLE: &str = "title";
    pub const TIME: &str = "time";

    pub const LIST_INDEX: &str = "list-index";
    pub const FEATURED_INDEX: &str = "featured-index";
    pub const LIST_TITLE: &str = "list-title";
    pub const CATEGORY: &str = "category";
    pub const STATUS: &str = "status";
    pub const DRAFT: &str = "draft";
    pub const SECTION: &str = "section";
    pub const LABEL: &str = "label";
    pub const UNREAD: &str = "unread";
    pub const HINT: &str = "hint";
    pub const CURRENT: &str = "current";
    pub const LEVEL: &str = "level";
}

pub static VITRINE_THEME: Lazy<Theme> = Lazy::new(build_theme);

fn build_theme() -> Theme {
    let regular = Style::new();
    let muted = Style::new().color256(rgb_to_ansi256((138, 138, 138)));
    let accent = Style::new().color256(rgb_to_ansi256((0, 135, 175)));
    let featured = Style::new().color256(rgb_to_ansi256((215, 160, 0))).bold();

    Theme::new()
        .add(names::MUTED, muted.clone())
        .add(names::ERROR, Style::new().red().bold())
        .add(names::WARNING, Style::new().yellow().bold())
        .add(names::SUCCESS, Style::new().green())
        .add(names::INFO, muted.clone())
        .add(names::TITLE, regular.clone().bold())
        .add(names::TIME, muted.clone().italic())
        .add(names::LIST_INDEX, accent.clone())
        .add(names::FEATURED_INDEX, featured.clone())
        .add(names::LIST_TITLE, regular)
        .add(names::CATEGORY, accent.clone().italic())
        .add(names::STATUS, accent)
        .add(names::DRAFT, muted.clone().italic())
        .add(names::SECTION, featured.clone())
        .add(names::LABEL, muted.clone())
        .add(names::UNREAD, Style::new().yellow())
        .add(names::CURRENT, featured)
        .add(names::LEVEL, Style::new().green())
        .add(names::HINT, muted.italic())
}
