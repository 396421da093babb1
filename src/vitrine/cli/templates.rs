//! # CLI Templates
//!
//! Terminal output is rendered from minijinja templates kept in `templates/*.tmp`, so they
//! can be edited and diffed apart from the code, and included here as string constants.
//!
//! Conventions:
//!
//! 1. Line breaks are explicit. Block tags strip the whitespace after them (`-%}`), so
//!    every newline in the output comes from a line of literal text in the template.
//! 2. Layout math (widths, truncation, padding) happens in Rust; templates receive
//!    ready-made strings.
//! 3. Style selection that depends on state (featured, draft, unread, current) is decided in Rust
//!    and handed to the template as a style name, instead of branching in the template.

pub const LIST_TEMPLATE: &str = include_str!("templates/list.tmp");
pub const DETAIL_TEMPLATE: &str = include_str!("templates/detail.tmp");
pub const INBOX_TEMPLATE: &str = include_str!("templates/inbox.tmp");
pub const EXPERIENCE_TEMPLATE: &str = include_str!("templates/experience.tmp");
pub const SKILLS_TEMPLATE: &str = include_str!("templates/skills.tmp");
pub const STATS_TEMPLATE: &str = include_str!("templates/stats.tmp");
pub const CHAT_TEMPLATE: &str = include_str!("templates/chat.tmp");
pub const TEXT_LIST_TEMPLATE: &str = include_str!("templates/text_list.tmp");
pub const MESSAGES_TEMPLATE: &str = include_str!("templates/messages.tmp");
