//! Key-value persistence port for board collections.
//!
//! # Responsibility
//! - Define the storage contract the board repository is written against.
//! - Provide SQLite, in-memory, and detached (no backend) implementations.
//!
//! # Invariants
//! - Writes replace the whole payload stored under a key.
//! - A detached store reads as empty and refuses writes.

use crate::db::DbError;
use std::error::Error;
use std::fmt::{Display, Formatter};

mod detached;
mod memory;
mod sqlite;

pub use detached::DetachedStore;
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

pub type StoreResult<T> = Result<T, StoreError>;

/// The two independently keyed collections a board persists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectionKind {
    Venues,
    Events,
}

impl CollectionKind {
    /// Fixed storage key for this collection.
    pub fn key(self) -> &'static str {
        match self {
            Self::Venues => "event_timetable_venues",
            Self::Events => "event_timetable_events",
        }
    }
}

#[derive(Debug)]
pub enum StoreError {
    /// No persistent backend exists in the current context.
    Unavailable,
    Db(DbError),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unavailable => write!(f, "persistent storage is unavailable"),
            Self::Db(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Unavailable => None,
            Self::Db(err) => Some(err),
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Raw string storage keyed by collection name.
pub trait KeyValueStore {
    /// Whether writes can succeed in this context.
    fn is_available(&self) -> bool {
        true
    }

    /// Returns the stored payload, or `None` when the key was never written.
    fn read(&self, key: &str) -> StoreResult<Option<String>>;

    /// Replaces the payload stored under `key`.
    fn write(&self, key: &str, payload: &str) -> StoreResult<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn is_available(&self) -> bool {
        (**self).is_available()
    }

    fn read(&self, key: &str) -> StoreResult<Option<String>> {
        (**self).read(key)
    }

    fn write(&self, key: &str, payload: &str) -> StoreResult<()> {
        (**self).write(key, payload)
    }
}
