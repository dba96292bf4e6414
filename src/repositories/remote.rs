// src/repositories/remote.rs

use crate::models::{Entry, RecordId, Resource};
use crate::utils::api_client::{ApiError, Transport};
use log::{debug, info};
use reqwest::Method;
use std::marker::PhantomData;
use std::sync::Arc;

/// REST operations for one collection endpoint.
///
/// Cloning is cheap; every call takes `&self` so the repository can be moved
/// into a `'static` future.
pub struct Repository<T> {
	transport: Arc<dyn Transport>,
	_resource: PhantomData<fn() -> T>,
}

impl<T> Clone for Repository<T> {
	fn clone(&self) -> Self {
		Self {
			transport: self.transport.clone(),
			_resource: PhantomData,
		}
	}
}

impl<T: Resource> Repository<T> {
	pub fn new(transport: Arc<dyn Transport>) -> Self {
		Self {
			transport,
			_resource: PhantomData,
		}
	}

	fn item_path(id: &RecordId) -> String {
		format!("{}/{}", T::ENDPOINT, id)
	}

	/// GET the whole collection
	pub async fn list(&self) -> Result<Vec<Entry<T>>, ApiError> {
		let value = self.transport.send(Method::GET, T::ENDPOINT, None).await?;
		let entries: Vec<Entry<T>> = serde_json::from_value(value)?;
		debug!("Loaded {} records from {}", entries.len(), T::ENDPOINT);
		Ok(entries)
	}

	/// POST a draft and return the stored record with its server id
	pub async fn create(&self, draft: T) -> Result<Entry<T>, ApiError> {
		let body = serde_json::to_value(&draft)?;
		let value = self
			.transport
			.send(Method::POST, T::ENDPOINT, Some(body))
			.await?;
		let created: Entry<T> = serde_json::from_value(value)?;
		info!("Created record {} in {}", created.id, T::ENDPOINT);
		Ok(created)
	}

	/// PUT the full record and return the server's copy
	pub async fn update(&self, entry: Entry<T>) -> Result<Entry<T>, ApiError> {
		let path = Self::item_path(&entry.id);
		let body = serde_json::to_value(&entry)?;
		let value = self.transport.send(Method::PUT, &path, Some(body)).await?;
		let updated: Entry<T> = serde_json::from_value(value)?;
		info!("Updated record {} in {}", updated.id, T::ENDPOINT);
		Ok(updated)
	}

	pub async fn delete(&self, id: RecordId) -> Result<(), ApiError> {
		let path = Self::item_path(&id);
		self.transport.send(Method::DELETE, &path, None).await?;
		info!("Deleted record {} from {}", id, T::ENDPOINT);
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::models::robot::Robot;
	use crate::models::testimonial::Testimonial;
	use crate::testing::FakeBackend;
	use serde_json::json;

	fn repo<T: Resource>(backend: &Arc<FakeBackend>) -> Repository<T> {
		Repository::new(backend.clone())
	}

	#[tokio::test]
	async fn list_decodes_collection() {
		let backend = Arc::new(FakeBackend::new());
		backend.seed(
			"/robots",
			vec![
				json!({"id": 1, "model": "Atlas", "available": true}),
				json!({"id": "b7", "model": "Nexus", "available": false}),
			],
		);

		let robots = repo::<Robot>(&backend).list().await.unwrap();
		assert_eq!(robots.len(), 2);
		assert_eq!(robots[0].id, RecordId::Number(1));
		assert_eq!(robots[1].id, RecordId::Text("b7".into()));
		assert_eq!(robots[1].data.model, "Nexus");
	}

	#[tokio::test]
	async fn one_numeric_field_does_not_fail_the_collection() {
		let backend = Arc::new(FakeBackend::new());
		backend.seed(
			"/robots",
			vec![
				json!({"id": 1, "model": "Atlas", "height": 180, "available": true}),
				json!({"id": 2, "model": "Orion", "height": "1,75m", "available": true}),
			],
		);

		let robots = repo::<Robot>(&backend).list().await.unwrap();
		assert_eq!(robots.len(), 2);
		assert_eq!(robots[0].data.height, "180");
		assert!(robots[0].extra.is_empty());
	}

	#[tokio::test]
	async fn create_posts_draft_without_id() {
		let backend = Arc::new(FakeBackend::new());
		let draft = Testimonial {
			content: "Mudou nossa fábrica".into(),
			author: "Carla".into(),
			..Default::default()
		};

		let created = repo::<Testimonial>(&backend).create(draft.clone()).await.unwrap();
		assert_eq!(created.data, draft);

		let (method, path, body) = backend.last_request().unwrap();
		assert_eq!(method, Method::POST);
		assert_eq!(path, "/testimonials");
		assert!(body.unwrap().get("id").is_none());
	}

	#[tokio::test]
	async fn update_puts_to_item_path() {
		let backend = Arc::new(FakeBackend::new());
		backend.seed("/testimonials", vec![json!({"id": 4, "author": "Old"})]);

		let mut entry: Entry<Testimonial> = Entry::new(4, Default::default());
		entry.data.author = "New".into();
		let updated = repo::<Testimonial>(&backend).update(entry).await.unwrap();

		assert_eq!(updated.data.author, "New");
		let (method, path, _) = backend.last_request().unwrap();
		assert_eq!(method, Method::PUT);
		assert_eq!(path, "/testimonials/4");
	}

	#[tokio::test]
	async fn update_writes_back_fields_the_model_does_not_know() {
		let backend = Arc::new(FakeBackend::new());
		backend.seed(
			"/testimonials",
			vec![json!({"id": 1, "author": "Ana", "avatar": "/a.png", "rating": 5})],
		);
		let testimonials = repo::<Testimonial>(&backend);

		let mut entry = testimonials.list().await.unwrap().remove(0);
		entry.data.company = "Acme".into();
		testimonials.update(entry).await.unwrap();

		let stored = backend.records("/testimonials");
		assert_eq!(stored[0]["company"], "Acme");
		assert_eq!(stored[0]["avatar"], "/a.png");
		assert_eq!(stored[0]["rating"], 5);
	}

	#[tokio::test]
	async fn delete_of_unknown_id_is_a_status_error() {
		let backend = Arc::new(FakeBackend::new());
		let err = repo::<Robot>(&backend)
			.delete(RecordId::Number(99))
			.await
			.unwrap_err();
		assert!(matches!(err, ApiError::Status { .. }));
	}

	#[tokio::test]
	async fn malformed_payload_is_a_json_error() {
		let backend = Arc::new(FakeBackend::new());
		backend.seed("/robots", vec![json!({"model": "no id"})]);

		let err = repo::<Robot>(&backend).list().await.unwrap_err();
		assert!(matches!(err, ApiError::Json(_)));
	}
}
