//! Persistent storage using redb.
//!
//! Holds the client-side state that must survive restarts. Today that is
//! only the admin session token, kept in the `session` table under
//! [`TOKEN_KEY`].

use std::path::Path;
use std::sync::Arc;

use parking_lot::RwLock;
use redb::{Database, ReadableTable, TableDefinition};

use crate::error::PortfolioResult;
use crate::session::{SessionStore, TOKEN_KEY};

const SESSION_TABLE: TableDefinition<&str, &str> = TableDefinition::new("session");

/// Storage layer using redb for ACID-compliant persistence
#[derive(Clone)]
pub struct Storage {
    db: Arc<RwLock<Database>>,
}

impl Storage {
    /// Create a new storage instance at the given path.
    ///
    /// This will:
    /// - Create the database directory if it doesn't exist
    /// - Initialize the database file
    /// - Create all required tables
    pub fn new(path: impl AsRef<Path>) -> PortfolioResult<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let db = Database::create(path)?;

        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(SESSION_TABLE)?;
        }
        write_txn.commit()?;

        tracing::debug!("Opened session storage at {:?}", path);

        Ok(Self {
            db: Arc::new(RwLock::new(db)),
        })
    }

    fn get(&self, key: &str) -> PortfolioResult<Option<String>> {
        let db = self.db.read();
        let read_txn = db.begin_read()?;
        let table = read_txn.open_table(SESSION_TABLE)?;

        let value = table.get(key)?.map(|v| v.value().to_string());
        Ok(value)
    }

    fn put(&self, key: &str, value: &str) -> PortfolioResult<()> {
        let db = self.db.read();
        let write_txn = db.begin_write()?;
        {
            let mut table = write_txn.open_table(SESSION_TABLE)?;
            table.insert(key, value)?;
        }
        write_txn.commit()?;
        Ok(())
    }

    fn remove(&self, key: &str) -> PortfolioResult<()> {
        let db = self.db.read();
        let write_txn = db.begin_write()?;
        {
            let mut table = write_txn.open_table(SESSION_TABLE)?;
            table.remove(key)?;
        }
        write_txn.commit()?;
        Ok(())
    }
}

impl SessionStore for Storage {
    fn token(&self) -> PortfolioResult<Option<String>> {
        self.get(TOKEN_KEY)
    }

    fn set_token(&self, token: &str) -> PortfolioResult<()> {
        self.put(TOKEN_KEY, token)
    }

    fn clear(&self) -> PortfolioResult<()> {
        self.remove(TOKEN_KEY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_token_roundtrip_and_clear() {
        let dir = TempDir::new().unwrap();
        let storage = Storage::new(dir.path().join("session.redb")).unwrap();

        assert_eq!(storage.token().unwrap(), None);
        storage.set_token("abc").unwrap();
        assert_eq!(storage.token().unwrap().as_deref(), Some("abc"));
        assert!(storage.is_authenticated());

        storage.clear().unwrap();
        assert!(!storage.is_authenticated());
        // Clearing twice is fine
        storage.clear().unwrap();
    }

    #[test]
    fn test_token_survives_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("session.redb");

        {
            let storage = Storage::new(&path).unwrap();
            storage.set_token("persisted").unwrap();
        }

        let reopened = Storage::new(&path).unwrap();
        assert_eq!(reopened.token().unwrap().as_deref(), Some("persisted"));
    }
}
