use anyhow::Context;
use async_trait::async_trait;
use log::debug;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use reqwest::{Method, StatusCode};
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
	#[error("request to {url} failed: {source}")]
	Transport {
		url: String,
		#[source]
		source: reqwest::Error,
	},
	#[error("{method} {url} returned status {status}")]
	Status {
		method: Method,
		url: String,
		status: StatusCode,
	},
	#[error("invalid JSON payload: {0}")]
	Json(#[from] serde_json::Error),
}

/// Sends JSON requests to the REST backend.
///
/// Bodies and responses are untyped here; callers convert them to models.
/// An empty response body is returned as `Value::Null`.
#[async_trait]
pub trait Transport: Send + Sync {
	async fn send(&self, method: Method, path: &str, body: Option<Value>) -> Result<Value, ApiError>;
}

#[derive(Clone)]
pub struct ApiClient {
	client: reqwest::Client,
	base_url: String,
}

impl ApiClient {
	pub fn new(base_url: impl Into<String>) -> anyhow::Result<Self> {
		let mut headers = HeaderMap::new();
		headers.insert(
			USER_AGENT,
			HeaderValue::from_static("Pulse-Robot-Admin/0.1"),
		);

		let client = reqwest::Client::builder()
			.default_headers(headers)
			.build()
			.context("Failed to create HTTP client")?;

		Ok(Self {
			client,
			base_url: base_url.into().trim_end_matches('/').to_string(),
		})
	}

	pub fn url_for(&self, path: &str) -> String {
		format!("{}{}", self.base_url, path)
	}
}

#[async_trait]
impl Transport for ApiClient {
	async fn send(&self, method: Method, path: &str, body: Option<Value>) -> Result<Value, ApiError> {
		let url = self.url_for(path);
		debug!("{} {}", method, url);

		let mut request = self.client.request(method.clone(), &url);
		if let Some(body) = body {
			request = request.json(&body);
		}

		let response = request.send().await.map_err(|source| ApiError::Transport {
			url: url.clone(),
			source,
		})?;

		if !response.status().is_success() {
			return Err(ApiError::Status {
				method,
				url,
				status: response.status(),
			});
		}

		let text = response
			.text()
			.await
			.map_err(|source| ApiError::Transport { url, source })?;

		if text.trim().is_empty() {
			return Ok(Value::Null);
		}
		Ok(serde_json::from_str(&text)?)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn base_url_is_joined_without_double_slash() {
		let client = ApiClient::new("http://localhost:3000/").unwrap();
		assert_eq!(client.url_for("/robots/4"), "http://localhost:3000/robots/4");
	}

	#[test]
	fn status_error_names_request() {
		let err = ApiError::Status {
			method: Method::DELETE,
			url: "http://localhost:3000/contacts/2".into(),
			status: StatusCode::NOT_FOUND,
		};
		assert_eq!(
			err.to_string(),
			"DELETE http://localhost:3000/contacts/2 returned status 404 Not Found"
		);
	}

	#[tokio::test]
	async fn refused_connection_is_a_transport_error() {
		let client = ApiClient::new("http://127.0.0.1:1").unwrap();
		let err = client.send(Method::GET, "/robots", None).await.unwrap_err();
		match err {
			ApiError::Transport { url, .. } => assert_eq!(url, "http://127.0.0.1:1/robots"),
			other => panic!("unexpected error: {}", other),
		}
	}
}
