// src/main.rs

mod catalog;
mod config;
mod db;
mod gui;
mod models;
mod repositories;
mod session;
mod utils;

#[cfg(test)]
mod testing;

use anyhow::{Context, Result};
use config::AppConfig;
use db::connection::{self, SqlitePool};
use db::schema;
use gui::app;
use log::{error, info};
use repositories::local_storage::SqliteStore;
use session::SessionContext;
use std::sync::Arc;
use utils::api_client::{ApiClient, Transport};

struct App {
	config: AppConfig,
	pool: Arc<SqlitePool>,
	api: Arc<dyn Transport>,
}

impl App {
	fn new() -> Result<Self> {
		utils::logger::init();
		info!("Starting Pulse Robot admin application");

		let config = AppConfig::load();
		let pool = Arc::new(
			connection::establish_pool(&config.storage_path)
				.context("Failed to establish local storage pool")?,
		);

		let api: Arc<dyn Transport> = Arc::new(
			ApiClient::new(config.api_base_url.clone())
				.context("Failed to create API client")?,
		);

		info!("Local storage pool and API client established");

		Ok(App { config, pool, api })
	}

	fn init_storage(&self) -> Result<()> {
		let conn = self.pool.get().context("Failed to get storage connection")?;
		schema::create_tables(&conn).context("Failed to create storage tables")?;
		info!("Local storage initialized successfully");
		Ok(())
	}

	fn run(self) -> Result<()> {
		self.init_storage()?;

		let session = SessionContext::new(Arc::new(SqliteStore::new(self.pool.clone())));
		let flags = app::Flags {
			config: self.config,
			session,
			transport: self.api,
		};

		if let Err(e) = app::run(flags) {
			error!("GUI application error: {:#}", e);
			return Err(e);
		}

		info!("Application closed");
		Ok(())
	}
}

fn main() -> Result<()> {
	let app = App::new()?;
	app.run()
}
