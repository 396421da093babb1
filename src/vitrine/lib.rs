//! # Vitrine Architecture
//!
//! Vitrine is a **UI-agnostic portfolio catalog library**: projects, blog posts and
//! certifications, listed through one shared filter engine (free-text search, category
//! and status choices with an "all" sentinel, featured items first). The `vitrine`
//! binary is one client of it; a web handler or a static-site generator could be another.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders templates, terminal I/O        │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Normalizes inputs (selector strings → ItemSelectors)     │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Business logic, generic over the catalog item kind       │
//! │  - Filtering delegates to the pure engine in filter.rs      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract DataStore trait                                 │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Filter Engine
//!
//! `filter::filter_items` is a pure function: a stable subsequence of the input where
//! every criterion of a [`filter::CatalogFilter`] holds. It never fails; unknown
//! categories and statuses are rejected earlier, when the user's text is parsed into
//! the closed taxonomy enums of [`model`].
//!
//! ## Display Indexes
//!
//! Listings number items over the whole collection, newest first: featured items get
//! `f1, f2, …`, the rest `1, 2, …`. Because numbering happens before filtering, an
//! index keeps pointing at the same item whatever filter is active. See `index.rs`.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward (API, commands, storage), code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`Result<CmdResult<I>>`)
//! - **Never** writes to stdout/stderr
//! - **Never** calls `std::process::exit`
//!
//! User-facing feedback travels as leveled [`commands::CmdMessage`]s inside the result.
//!
//! ## Testing Strategy
//!
//! 1. **Filter engine** (`filter.rs`): property-style unit tests (idempotence, identity,
//!    monotonicity, partition completeness, case insensitivity).
//! 2. **Commands** (`commands/*.rs`): business logic against `InMemoryStore` fixtures.
//! 3. **API** (`api.rs`): dispatch and selector parsing.
//! 4. **CLI**: rendering unit tests in `cli/render.rs`, end-to-end runs of the binary in
//!    `tests/`.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`filter`]: Search / category / status filtering and the featured partition
//! - [`index`]: Display indexing (`f1`, `1`, ranges, `id:` selectors)
//! - [`model`]: Catalog records and their taxonomies
//! - [`store`]: Storage abstraction and implementations
//! - [`seed`]: The sample catalog written by `vitrine init`
//! - [`config`]: Configuration management
//! - [`init`]: Data directory resolution and context setup
//! - [`error`]: Error types
//! - `cli`: Argument parsing and templated rendering for the binary (not part of the lib API)

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod filter;
pub mod index;
pub mod init;
pub mod model;
pub mod seed;
pub mod store;
