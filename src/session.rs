// src/session.rs

//! Admin session persisted in local storage.
//!
//! This is a visibility gate for the dashboard, not a security boundary: the
//! credentials are fixed and the token is a placeholder.

use crate::repositories::local_storage::KeyValueStore;
use anyhow::{Context, Result};
use log::{error, info, warn};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

pub const SESSION_KEY: &str = "adminAuth";
pub const SESSION_TOKEN: &str = "simulado-jwt-token-123456789";

const ADMIN_USERNAME: &str = "admin";
const ADMIN_PASSWORD: &str = "admin123";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
	pub is_authenticated: bool,
	#[serde(default)]
	pub username: String,
	#[serde(default)]
	pub token: String,
}

impl SessionRecord {
	pub fn authenticated(username: &str) -> Self {
		Self {
			is_authenticated: true,
			username: username.to_string(),
			token: SESSION_TOKEN.to_string(),
		}
	}
}

/// Result of checking the stored session on dashboard entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardOutcome {
	Admitted { username: String },
	Missing,
	Unauthenticated,
	/// The stored record could not be read; it has been removed.
	Corrupt,
}

#[derive(Debug, Clone)]
pub struct Credentials {
	pub username: String,
	pub password: String,
}

impl Credentials {
	fn is_admin(&self) -> bool {
		self.username == ADMIN_USERNAME && self.password == ADMIN_PASSWORD
	}
}

#[derive(Debug, Error)]
pub enum AuthError {
	#[error("invalid credentials")]
	InvalidCredentials,
	#[error("failed to store session: {0}")]
	Storage(#[from] anyhow::Error),
}

/// Load/save/clear access to the session record.
#[derive(Clone)]
pub struct SessionContext {
	store: Arc<dyn KeyValueStore>,
}

impl SessionContext {
	pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
		Self { store }
	}

	/// Reads the record. A present but unparsable record is an error.
	pub fn load(&self) -> Result<Option<SessionRecord>> {
		let raw = match self.store.get_item(SESSION_KEY)? {
			Some(raw) => raw,
			None => return Ok(None),
		};
		let record = serde_json::from_str(&raw).context("Malformed session record")?;
		Ok(Some(record))
	}

	pub fn save(&self, record: &SessionRecord) -> Result<()> {
		let raw = serde_json::to_string(record).context("Failed to serialize session record")?;
		self.store.set_item(SESSION_KEY, &raw)
	}

	pub fn clear(&self) -> Result<()> {
		self.store.remove_item(SESSION_KEY)
	}

	pub fn guard(&self) -> GuardOutcome {
		match self.load() {
			Ok(None) => GuardOutcome::Missing,
			Ok(Some(record)) if !record.is_authenticated => GuardOutcome::Unauthenticated,
			Ok(Some(record)) => GuardOutcome::Admitted {
				username: record.username,
			},
			Err(e) => {
				error!("Failed to verify admin session: {:#}", e);
				if let Err(e) = self.clear() {
					warn!("Failed to remove corrupt session record: {:#}", e);
				}
				GuardOutcome::Corrupt
			}
		}
	}

	pub fn logout(&self) -> Result<()> {
		self.clear()?;
		info!("Admin session cleared");
		Ok(())
	}
}

/// Checks the fixed admin credentials after `delay` and stores a session on success.
///
/// Returns the username that was signed in. Nothing is written on failure.
pub async fn login(
	session: SessionContext,
	credentials: Credentials,
	delay: Duration,
) -> Result<String, AuthError> {
	tokio::time::sleep(delay).await;

	if !credentials.is_admin() {
		warn!("Rejected admin login for user {:?}", credentials.username);
		return Err(AuthError::InvalidCredentials);
	}

	session.save(&SessionRecord::authenticated(&credentials.username))?;
	info!("Admin {} signed in", credentials.username);
	Ok(credentials.username)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::repositories::local_storage::MemoryStore;

	fn context() -> (Arc<MemoryStore>, SessionContext) {
		let store = Arc::new(MemoryStore::new());
		(store.clone(), SessionContext::new(store))
	}

	fn creds(username: &str, password: &str) -> Credentials {
		Credentials {
			username: username.into(),
			password: password.into(),
		}
	}

	#[tokio::test]
	async fn only_the_fixed_pair_signs_in() {
		let (store, session) = context();
		let username = login(session.clone(), creds("admin", "admin123"), Duration::ZERO)
			.await
			.unwrap();

		assert_eq!(username, "admin");
		let record = session.load().unwrap().unwrap();
		assert_eq!(record, SessionRecord::authenticated("admin"));
		assert!(store.get_item(SESSION_KEY).unwrap().unwrap().contains("\"isAuthenticated\":true"));
	}

	#[tokio::test]
	async fn wrong_credentials_write_nothing() {
		for (user, pass) in [("admin", "admin"), ("Admin", "admin123"), ("", ""), ("root", "admin123"), ("admin", "admin123 ")] {
			let (store, session) = context();
			let result = login(session, creds(user, pass), Duration::ZERO).await;
			assert!(matches!(result, Err(AuthError::InvalidCredentials)));
			assert_eq!(store.get_item(SESSION_KEY).unwrap(), None);
		}
	}

	#[test]
	fn guard_reports_missing_record() {
		let (_, session) = context();
		assert_eq!(session.guard(), GuardOutcome::Missing);
	}

	#[test]
	fn guard_rejects_unauthenticated_record() {
		let (store, session) = context();
		store
			.set_item(SESSION_KEY, r#"{"isAuthenticated":false,"username":"admin","token":"x"}"#)
			.unwrap();
		assert_eq!(session.guard(), GuardOutcome::Unauthenticated);
	}

	#[test]
	fn record_without_username_is_unauthenticated_and_kept() {
		let (store, session) = context();
		store.set_item(SESSION_KEY, r#"{"isAuthenticated":false}"#).unwrap();

		assert_eq!(session.guard(), GuardOutcome::Unauthenticated);
		assert!(store.get_item(SESSION_KEY).unwrap().is_some());
	}

	#[test]
	fn guard_clears_corrupt_record() {
		let (store, session) = context();
		store.set_item(SESSION_KEY, "{not json").unwrap();

		assert_eq!(session.guard(), GuardOutcome::Corrupt);
		assert_eq!(store.get_item(SESSION_KEY).unwrap(), None);
	}

	#[test]
	fn guard_admits_authenticated_record() {
		let (_, session) = context();
		session.save(&SessionRecord::authenticated("admin")).unwrap();
		assert_eq!(
			session.guard(),
			GuardOutcome::Admitted {
				username: "admin".into()
			}
		);
	}

	#[test]
	fn logout_removes_record() {
		let (_, session) = context();
		session.save(&SessionRecord::authenticated("admin")).unwrap();
		session.logout().unwrap();
		assert_eq!(session.guard(), GuardOutcome::Missing);
	}
}
