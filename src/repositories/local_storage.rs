// src/repositories/local_storage.rs

use crate::db::connection::SqlitePool;
use anyhow::{Context, Result};
use rusqlite::{params, OptionalExtension};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// String key/value persistence, the desktop counterpart of browser local storage.
pub trait KeyValueStore: Send + Sync {
	fn get_item(&self, key: &str) -> Result<Option<String>>;
	fn set_item(&self, key: &str, value: &str) -> Result<()>;
	fn remove_item(&self, key: &str) -> Result<()>;
}

pub struct SqliteStore {
	pool: Arc<SqlitePool>,
}

impl SqliteStore {
	pub fn new(pool: Arc<SqlitePool>) -> Self {
		Self { pool }
	}
}

impl KeyValueStore for SqliteStore {
	fn get_item(&self, key: &str) -> Result<Option<String>> {
		let conn = self.pool.get().context("Failed to get database connection")?;
		conn.query_row(
			"SELECT value FROM local_storage WHERE key = ?1",
			params![key],
			|row| row.get(0),
		)
			.optional()
			.context("Failed to read local storage item")
	}

	fn set_item(&self, key: &str, value: &str) -> Result<()> {
		let conn = self.pool.get().context("Failed to get database connection")?;
		conn.execute(
			"INSERT OR REPLACE INTO local_storage (key, value, updated_at)
			 VALUES (?1, ?2, datetime('now'))",
			params![key, value],
		)
			.context("Failed to write local storage item")?;
		Ok(())
	}

	fn remove_item(&self, key: &str) -> Result<()> {
		let conn = self.pool.get().context("Failed to get database connection")?;
		conn.execute("DELETE FROM local_storage WHERE key = ?1", params![key])
			.context("Failed to remove local storage item")?;
		Ok(())
	}
}

/// Process-local store for tests and throwaway sessions.
#[derive(Default)]
pub struct MemoryStore {
	items: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
	pub fn new() -> Self {
		Self::default()
	}

	fn items(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>> {
		self.items
			.lock()
			.map_err(|_| anyhow::anyhow!("Memory store lock poisoned"))
	}
}

impl KeyValueStore for MemoryStore {
	fn get_item(&self, key: &str) -> Result<Option<String>> {
		Ok(self.items()?.get(key).cloned())
	}

	fn set_item(&self, key: &str, value: &str) -> Result<()> {
		self.items()?.insert(key.to_string(), value.to_string());
		Ok(())
	}

	fn remove_item(&self, key: &str) -> Result<()> {
		self.items()?.remove(key);
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::db::{connection, schema};

	fn sqlite_store(dir: &tempfile::TempDir) -> SqliteStore {
		let pool = connection::establish_pool(&dir.path().join("nested").join("storage.db")).unwrap();
		schema::create_tables(&pool.get().unwrap()).unwrap();
		SqliteStore::new(Arc::new(pool))
	}

	#[test]
	fn sqlite_store_round_trips_and_overwrites() {
		let dir = tempfile::tempdir().unwrap();
		let store = sqlite_store(&dir);

		assert_eq!(store.get_item("adminAuth").unwrap(), None);
		store.set_item("adminAuth", "first").unwrap();
		store.set_item("adminAuth", "second").unwrap();
		assert_eq!(store.get_item("adminAuth").unwrap().as_deref(), Some("second"));

		store.remove_item("adminAuth").unwrap();
		assert_eq!(store.get_item("adminAuth").unwrap(), None);
	}

	#[test]
	fn sqlite_store_persists_across_pools() {
		let dir = tempfile::tempdir().unwrap();
		sqlite_store(&dir).set_item("k", "v").unwrap();
		assert_eq!(sqlite_store(&dir).get_item("k").unwrap().as_deref(), Some("v"));
	}

	#[test]
	fn removing_a_missing_key_is_not_an_error() {
		let store = MemoryStore::new();
		store.remove_item("nothing").unwrap();
		assert_eq!(store.get_item("nothing").unwrap(), None);
	}
}
