//! # Userdir Architecture
//!
//! Userdir is a **UI-agnostic user-directory library**: it fetches a list of users,
//! filters it by a search query and slices it into pages. The command-line client is
//! one consumer of it.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders tables, runs the browse loop   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Stateful facade owning one ListViewModel per session     │
//! │  - Turns loader failures into LoadState + messages          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs) + View-Model (viewmodel.rs)  │
//! │  - Filtering, paging, snapshots, detail lookup              │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Source Layer (source/)                                     │
//! │  - Abstract UserSource trait                                │
//! │  - HttpSource, FileSource, InMemorySource (testing)         │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The View-Model
//!
//! [`viewmodel::ListViewModel`] is the heart of the crate. It holds the full record
//! set, the query and the current page, and derives everything a list view shows.
//! Every operation on it is total: bad page numbers are clamped, an empty query
//! matches everything, and loading or searching always returns to page 1.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`CmdResult`, `Result<CmdResult>`)
//! - **Never** writes to stdout/stderr (diagnostics go through `tracing`)
//! - **Never** calls `std::process::exit`
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade and [`api::LoadState`]
//! - [`commands`]: List snapshots, detail lookup, stats, browse actions, config
//! - [`viewmodel`]: Search filtering and pagination
//! - [`source`]: Where users come from
//! - [`model`]: The `User` record
//! - [`config`]: Configuration management
//! - [`error`]: Error types
//! - `cli`: Argument parsing and terminal rendering for the binary (not part of the lib API)

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod source;
pub mod viewmodel;
