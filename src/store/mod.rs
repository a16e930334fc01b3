//! # Storage Layer
//!
//! This module defines the storage abstraction for todoz. The [`TodoStore`]
//! trait allows the application to work with different storage backends.
//!
//! ## Design Rationale
//!
//! Storage is abstracted behind a trait to:
//! - Enable **testing** with `InMemoryStore` (no filesystem needed)
//! - Allow **future backends** (database, cloud, etc.) without changing core logic
//! - Keep business logic **decoupled** from persistence details
//!
//! ## Transaction Model
//!
//! The trait deals in whole [`StoreState`] snapshots: a command loads the
//! current state, mutates it in memory, and commits the new state in one
//! call. Multi-record mutations (delete + log append, undo, position swaps)
//! are therefore atomic — a commit either fully replaces the previous state
//! or leaves it intact.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage, a single JSON document
//!   (`todos.json`) replaced atomically via a temp file + rename.
//! - [`memory::InMemoryStore`]: In-memory storage for fast, isolated tests.

use crate::error::Result;
use crate::model::StoreState;

pub mod fs;
pub mod memory;

/// Abstract interface for todo persistence.
pub trait TodoStore {
    /// Read the current persisted state. A missing backing file reads as
    /// the empty state.
    fn load(&self) -> Result<StoreState>;

    /// Atomically replace the persisted state.
    fn commit(&mut self, state: &StoreState) -> Result<()>;
}
