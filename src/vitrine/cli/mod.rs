//! # CLI Behavior
//!
//! This is **one possible UI client** for vitrine, not the application itself.
//! The CLI is the only place that knows about terminal I/O, exit codes, and output formatting.
//!
//! For the overall architecture, see the library docs in `lib.rs`.
//!
//! ## Naked Execution (`vitrine`)
//!
//! Running `vitrine` with no arguments lists the projects, the same as `vitrine projects`.
//!
//! ## Filtering
//!
//! The three listing commands share one set of filter flags: `--search` matches text
//! case-insensitively, `--category` takes a category name or `all`, and `certs` adds
//! `--status`. Unknown category or status names are rejected as usage errors before
//! anything is read from disk. Listings show featured items first (`f1`, `f2`, …)
//! followed by the rest (`1`, `2`, …).
//!
//! ## Item Selection
//!
//! Per-item commands take the collection name and one or more selectors: a listing
//! index (`f1`, `3`), a range (`2-4`, `f1-f3`) or an explicit `id:<id>`. Indexes are
//! assigned over the whole collection, so the number shown in a filtered listing is
//! the one to pass.

mod commands;
mod render;
pub mod setup;
mod styles;
mod templates;
mod theme;

pub use commands::run;
