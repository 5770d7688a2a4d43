use std::path::PathBuf;

use coarnotify::{Notify, Pattern};
use serde_json::Value;

use crate::{
	config::ServerConfig,
	server::{Receipt, ServerError, ServiceBinding},
};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
	#[error("i/o error on notification store: {0}")]
	Io(#[from] std::io::Error),

	#[error("stored notification is not valid json: {0}")]
	Json(#[from] serde_json::Error),
}

/// Service binding keeping every accepted notification as `<dir>/<uuid>.json`
#[derive(Debug, Clone)]
pub struct StoreBinding {
	dir: PathBuf,
	base_url: String,
}

impl StoreBinding {
	pub fn new(dir: impl Into<PathBuf>, base_url: &str) -> Self {
		StoreBinding { dir: dir.into(), base_url: base_url.trim_end_matches('/').to_string() }
	}

	pub fn from_config(config: &ServerConfig) -> Self {
		StoreBinding::new(&config.store, &config.base_url)
	}

	pub fn location(&self, key: &str) -> String {
		format!("{}/inbox/{key}", self.base_url)
	}

	fn path(&self, key: &str) -> Option<PathBuf> {
		// keys are always uuids, anything else could escape the store directory
		let key = uuid::Uuid::parse_str(key).ok()?;
		Some(self.dir.join(format!("{}.json", key.hyphenated())))
	}

	pub async fn save(&self, notification: &dyn Pattern) -> Result<String, StoreError> {
		let key = uuid::Uuid::new_v4().hyphenated().to_string();
		tokio::fs::create_dir_all(&self.dir).await?;
		let body = serde_json::to_vec_pretty(&notification.to_jsonld())?;
		tokio::fs::write(self.dir.join(format!("{key}.json")), body).await?;
		Ok(key)
	}

	pub async fn load(&self, key: &str) -> Result<Option<Value>, StoreError> {
		let Some(path) = self.path(key) else { return Ok(None) };
		match tokio::fs::read(path).await {
			Ok(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
			Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
			Err(e) => Err(e.into()),
		}
	}
}

#[async_trait::async_trait]
impl ServiceBinding for StoreBinding {
	async fn notification_received(&self, notification: Box<dyn Pattern>) -> Result<Receipt, ServerError> {
		match self.save(notification.as_ref()).await {
			Ok(key) => {
				tracing::info!("stored notification {} as {key}", notification.id().unwrap_or_default());
				Ok(Receipt::created(self.location(&key)))
			},
			Err(e) => {
				tracing::error!("failed storing notification: {e}");
				Err(ServerError::new(500, "Unable to store notification"))
			},
		}
	}
}

#[cfg(test)]
mod test {
	use coarnotify::{fixtures, NotifyOptions};

	use super::*;
	use crate::server::NotifyServer;

	fn scratch() -> PathBuf {
		std::env::temp_dir().join(format!("coarnotify-store-{}", uuid::Uuid::new_v4()))
	}

	#[tokio::test]
	async fn stored_notifications_can_be_read_back() {
		let dir = scratch();
		let server = NotifyServer::new(StoreBinding::new(&dir, "https://inbox.example/"), NotifyOptions::default());
		let receipt = server.receive(fixtures::request_review(), true).await.expect("stored");
		assert_eq!(receipt.status, 201);

		let location = receipt.location.expect("created has a location");
		let key = location.strip_prefix("https://inbox.example/inbox/").expect("location under base url");
		let stored = server.binding().load(key).await.expect("readable").expect("present");
		assert_eq!(stored["id"], fixtures::OFFER_ID);

		let _ = tokio::fs::remove_dir_all(dir).await;
	}

	#[tokio::test]
	async fn unknown_or_malformed_keys_are_absent() {
		let store = StoreBinding::new(scratch(), "https://inbox.example");
		assert!(store.load(&uuid::Uuid::new_v4().to_string()).await.expect("no i/o error").is_none());
		assert!(store.load("../../etc/passwd").await.expect("no i/o error").is_none());
	}
}
