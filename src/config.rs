// src/config.rs

use crate::gui::constants::{API_BASE_URL, APP_DIR_NAME, LOGIN_DELAY, STORAGE_FILE_NAME};
use log::info;
use std::path::PathBuf;
use std::time::Duration;

pub const ASSETS_DIR_ENV: &str = "PULSE_ASSETS_DIR";

#[derive(Debug, Clone)]
pub struct AppConfig {
	pub api_base_url: String,
	pub storage_path: PathBuf,
	pub export_dir: PathBuf,
	pub assets_dir: PathBuf,
	pub login_delay: Duration,
}

impl AppConfig {
	/// Resolves paths for the current user. The API host is fixed.
	pub fn load() -> Self {
		let storage_path = dirs::data_local_dir()
			.map(|dir| dir.join(APP_DIR_NAME))
			.unwrap_or_else(|| PathBuf::from(".").join("database"))
			.join(STORAGE_FILE_NAME);

		let export_dir = dirs::download_dir().unwrap_or_else(|| PathBuf::from("."));

		let assets_dir = std::env::var_os(ASSETS_DIR_ENV)
			.map(PathBuf::from)
			.unwrap_or_else(|| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets"));

		let config = Self {
			api_base_url: API_BASE_URL.to_string(),
			storage_path,
			export_dir,
			assets_dir,
			login_delay: LOGIN_DELAY,
		};
		info!("Using API at {} and storage at {:?}", config.api_base_url, config.storage_path);
		config
	}
}
