//! # Todoz Architecture
//!
//! Todoz is a **UI-agnostic todo-list library** with two thin clients: a
//! one-shot command surface and an interactive terminal session. Both sit
//! on the same core.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs + args.rs)   Interactive Session (tui/)  │
//! │  - Parses arguments / key events, formats output             │
//! │  - The ONLY place that knows about the terminal, stdout,     │
//! │    stderr and exit codes                                     │
//! └──────────────────────────────────────────────────────────────┘
//!                               │
//!                               ▼
//! ┌──────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                          │
//! │  - Thin facade over commands                                 │
//! │  - Normalizes inputs (1-based display positions → ids)       │
//! │  - Returns structured Result types                           │
//! └──────────────────────────────────────────────────────────────┘
//!                               │
//!                               ▼
//! ┌──────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                               │
//! │  - Pure business logic: ordering, soft delete, undo          │
//! │  - Operates on Rust types, returns Rust types                │
//! │  - No I/O assumptions beyond the store trait                 │
//! └──────────────────────────────────────────────────────────────┘
//!                               │
//!                               ▼
//! ┌──────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                      │
//! │  - Abstract TodoStore trait, whole-state atomic commits      │
//! │  - FileStore (production), InMemoryStore (testing)           │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular arguments, returns regular
//! `Result<CmdResult>` values, never writes to stdout/stderr and never
//! calls `std::process::exit`. The command layer is where the lion's share
//! of testing lives, against `InMemoryStore`.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade — entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Item`, `DeletedItem`, `StoreState`)
//! - [`init`]: Store-location resolution and context construction
//! - [`error`]: Error types
//! - [`tui`]: The interactive terminal session

pub mod api;
pub mod commands;
pub mod error;
pub mod init;
pub mod model;
pub mod store;
pub mod tui;
