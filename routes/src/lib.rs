use std::sync::Arc;

use coarnotify_core::{Config, NotifyServer, StoreBinding};
use tower_http::classify::{SharedClassifier, StatusInRangeAsFailures};

pub mod error;
pub use error::{ApiError, ApiResult};

pub mod inbox;

/// Shared state of the http inbox
#[derive(Clone)]
pub struct Inbox(Arc<InboxInner>);

struct InboxInner {
	server: NotifyServer<StoreBinding>,
	validate: bool,
}

impl Inbox {
	pub fn new(server: NotifyServer<StoreBinding>, validate: bool) -> Self {
		Inbox(Arc::new(InboxInner { server, validate }))
	}

	pub fn from_config(config: &Config) -> Self {
		let binding = StoreBinding::from_config(&config.server);
		let server = NotifyServer::new(binding, config.validation.options());
		Inbox::new(server, config.server.validate)
	}

	pub fn server(&self) -> &NotifyServer<StoreBinding> {
		&self.0.server
	}

	pub fn validate(&self) -> bool {
		self.0.validate
	}
}

pub fn router(inbox: Inbox) -> axum::Router {
	use axum::routing::{get, post};

	axum::Router::new()
		.route("/inbox", post(inbox::post))
		.route("/inbox/{id}", get(inbox::get))
		.with_state(inbox)
}

pub async fn serve(inbox: Inbox, bind: String, shutdown: impl ShutdownToken) -> Result<(), std::io::Error> {
	use tower_http::{cors::CorsLayer, trace::TraceLayer};

	let app = router(inbox)
		.layer(
			// rejected notifications are worth a log line too
			TraceLayer::new(SharedClassifier::new(StatusInRangeAsFailures::new(300..=999)))
				.make_span_with(|req: &axum::http::Request<_>| {
					tracing::span!(
						tracing::Level::INFO,
						"request",
						uri = %req.uri(),
						status_code = tracing::field::Empty,
					)
				})
		)
		.layer(CorsLayer::permissive());

	tracing::info!("serving notify inbox on {bind}");

	let listener = tokio::net::TcpListener::bind(bind).await?;
	axum::serve(listener, app)
		.with_graceful_shutdown(shutdown.event())
		.await?;

	Ok(())
}

pub trait ShutdownToken: Sync + Send + 'static {
	fn event(self) -> impl std::future::Future<Output = ()> + std::marker::Send;
}
