// In-memory REST backend used by unit tests.

use crate::utils::api_client::{ApiError, Transport};
use async_trait::async_trait;
use reqwest::{Method, StatusCode};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Mutex;

type Request = (Method, String, Option<Value>);

#[derive(Default)]
pub struct FakeBackend {
	collections: Mutex<HashMap<String, Vec<Value>>>,
	requests: Mutex<Vec<Request>>,
	failing: Mutex<Option<StatusCode>>,
	next_id: Mutex<i64>,
}

impl FakeBackend {
	pub fn new() -> Self {
		Self {
			next_id: Mutex::new(100),
			..Default::default()
		}
	}

	pub fn seed(&self, endpoint: &str, records: Vec<Value>) {
		self.collections
			.lock()
			.unwrap()
			.insert(endpoint.to_string(), records);
	}

	/// Every following request answers with `status`.
	pub fn fail_with(&self, status: StatusCode) {
		*self.failing.lock().unwrap() = Some(status);
	}

	pub fn last_request(&self) -> Option<Request> {
		self.requests.lock().unwrap().last().cloned()
	}

	pub fn records(&self, endpoint: &str) -> Vec<Value> {
		self.collections
			.lock()
			.unwrap()
			.get(endpoint)
			.cloned()
			.unwrap_or_default()
	}

	fn status_error(method: Method, path: &str, status: StatusCode) -> ApiError {
		ApiError::Status {
			method,
			url: format!("http://fake{}", path),
			status,
		}
	}
}

#[async_trait]
impl Transport for FakeBackend {
	async fn send(&self, method: Method, path: &str, body: Option<Value>) -> Result<Value, ApiError> {
		self.requests
			.lock()
			.unwrap()
			.push((method.clone(), path.to_string(), body.clone()));

		if let Some(status) = *self.failing.lock().unwrap() {
			return Err(Self::status_error(method, path, status));
		}

		let (endpoint, id) = match path[1..].split_once('/') {
			Some((collection, id)) => (format!("/{}", collection), Some(id.to_string())),
			None => (path.to_string(), None),
		};

		let mut collections = self.collections.lock().unwrap();
		let records = collections.entry(endpoint).or_default();
		let matches_id = |record: &Value, id: &str| {
			record.get("id").map(|v| match v {
				Value::String(s) => s == id,
				other => other.to_string() == id,
			}) == Some(true)
		};

		match id {
			None if method == Method::GET => Ok(Value::Array(records.clone())),
			None if method == Method::POST => {
				let mut next_id = self.next_id.lock().unwrap();
				*next_id += 1;
				let mut record = body.unwrap_or_else(|| json!({}));
				record["id"] = json!(*next_id);
				records.push(record.clone());
				Ok(record)
			}
			Some(id) if method == Method::PUT => match records.iter().position(|r| matches_id(r, id.as_str())) {
				Some(index) => {
					let record = body.unwrap_or_else(|| json!({}));
					records[index] = record.clone();
					Ok(record)
				}
				None => Err(Self::status_error(method, path, StatusCode::NOT_FOUND)),
			},
			Some(id) if method == Method::DELETE => {
				let before = records.len();
				records.retain(|r| !matches_id(r, id.as_str()));
				if records.len() == before {
					Err(Self::status_error(method, path, StatusCode::NOT_FOUND))
				} else {
					Ok(Value::Null)
				}
			}
			_ => Err(Self::status_error(method, path, StatusCode::METHOD_NOT_ALLOWED)),
		}
	}
}
