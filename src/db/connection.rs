use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use std::path::Path;
use anyhow::{Result, Context};
use log::info;

pub type SqlitePool = Pool<SqliteConnectionManager>;

/// Opens the local storage database, creating its directory when needed.
pub fn establish_pool(path: &Path) -> Result<SqlitePool> {
	info!("Local storage database will be located at: {:?}", path);

	if let Some(parent) = path.parent() {
		std::fs::create_dir_all(parent)
			.context("Failed to create storage directory")?;
	}

	let manager = SqliteConnectionManager::file(path);

	let pool = Pool::builder()
		.max_size(4)
		.build(manager)
		.context("Failed to create SQLite connection pool")?;

	info!("SQLite connection pool established successfully");
	Ok(pool)
}
