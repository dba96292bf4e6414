// src/catalog.rs

//! Public catalog: available robots with client-side prices.

use crate::models::robot::Robot;
use crate::models::Entry;
use crate::repositories::remote::Repository;
use crate::utils::api_client::ApiError;
use lazy_static::lazy_static;
use log::info;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

pub const DEFAULT_PRICE: f64 = 159999.99;
pub const FALLBACK_IMAGE: &str = "robot-images/hero-image.jpg";

lazy_static! {
	static ref ROBOT_PRICES: HashMap<&'static str, f64> = {
		let mut prices = HashMap::new();
		prices.insert("Atlas", 149999.99);
		prices.insert("Nexus", 199999.99);
		prices.insert("Orion", 179999.99);
		prices
	};
}

#[derive(Debug, Clone, PartialEq)]
pub struct CatalogItem {
	pub robot: Entry<Robot>,
	pub price: f64,
}

/// Price for a model name; unknown models get [`DEFAULT_PRICE`].
pub fn price_for(model: &str) -> f64 {
	ROBOT_PRICES.get(model).copied().unwrap_or(DEFAULT_PRICE)
}

/// Prices every robot and keeps only the available ones, in server order.
pub fn build_catalog(robots: Vec<Entry<Robot>>) -> Vec<CatalogItem> {
	robots
		.into_iter()
		.filter(|entry| entry.data.available)
		.map(|entry| CatalogItem {
			price: price_for(&entry.data.model),
			robot: entry,
		})
		.collect()
}

pub async fn load_catalog(repo: Repository<Robot>) -> Result<Vec<CatalogItem>, ApiError> {
	let robots = repo.list().await?;
	let total = robots.len();
	let catalog = build_catalog(robots);
	info!("Catalog ready: {} of {} robots available", catalog.len(), total);
	Ok(catalog)
}

/// Picks the image file for a robot under `assets_dir`.
///
/// Local image paths map to a per-model picture; anything else, and any
/// picture missing on disk, falls back to the hero image.
pub fn resolve_image(robot: &Robot, assets_dir: &Path) -> PathBuf {
	let candidate = if robot.image.starts_with('/') {
		assets_dir
			.join("robot-images")
			.join(format!("{}.jpg", robot.model.to_lowercase()))
	} else {
		assets_dir.join(FALLBACK_IMAGE)
	};

	if candidate.is_file() {
		candidate
	} else {
		assets_dir.join(FALLBACK_IMAGE)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::testing::FakeBackend;
	use serde_json::json;
	use std::sync::Arc;

	fn robot(id: i64, model: &str, available: bool) -> Entry<Robot> {
		Entry::new(
			id,
			Robot {
				model: model.into(),
				available,
				..Default::default()
			},
		)
	}

	#[test]
	fn known_models_use_the_table() {
		assert_eq!(price_for("Atlas"), 149999.99);
		assert_eq!(price_for("Nexus"), 199999.99);
		assert_eq!(price_for("Orion"), 179999.99);
	}

	#[test]
	fn unknown_model_gets_default_price_exactly() {
		assert_eq!(price_for("Zeta"), DEFAULT_PRICE);
		assert_eq!(price_for("atlas"), DEFAULT_PRICE);
	}

	#[test]
	fn unavailable_robots_never_listed() {
		let catalog = build_catalog(vec![
			robot(1, "Atlas", false),
			robot(2, "Zeta", true),
			robot(3, "Orion", false),
			robot(4, "Nexus", true),
		]);

		let ids: Vec<String> = catalog.iter().map(|c| c.robot.id.to_string()).collect();
		assert_eq!(ids, vec!["2", "4"]);
		assert_eq!(catalog[0].price, DEFAULT_PRICE);
		assert_eq!(catalog[1].price, 199999.99);
	}

	#[tokio::test]
	async fn load_catalog_filters_server_payload() {
		let backend = Arc::new(FakeBackend::new());
		backend.seed(
			"/robots",
			vec![
				json!({"id": 1, "model": "Atlas", "available": true}),
				json!({"id": 2, "model": "Orion"}),
			],
		);

		let catalog = load_catalog(Repository::new(backend)).await.unwrap();
		assert_eq!(catalog.len(), 1);
		assert_eq!(catalog[0].price, 149999.99);
	}

	#[test]
	fn missing_image_falls_back_to_hero() {
		let dir = tempfile::tempdir().unwrap();
		let images = dir.path().join("robot-images");
		std::fs::create_dir_all(&images).unwrap();
		std::fs::write(images.join("atlas.jpg"), b"jpg").unwrap();

		let mut atlas = robot(1, "Atlas", true).data;
		atlas.image = "/robot-showcase.png".into();
		assert_eq!(resolve_image(&atlas, dir.path()), images.join("atlas.jpg"));

		let mut orion = robot(2, "Orion", true).data;
		orion.image = "/robot-showcase.png".into();
		assert_eq!(resolve_image(&orion, dir.path()), dir.path().join(FALLBACK_IMAGE));

		atlas.image = "https://cdn.example.com/atlas.png".into();
		assert_eq!(resolve_image(&atlas, dir.path()), dir.path().join(FALLBACK_IMAGE));
	}
}
