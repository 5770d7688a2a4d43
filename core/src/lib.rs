pub mod config;
pub mod ext;
pub mod client;
pub mod server;
pub mod store;

pub use config::Config;
pub use client::{Action, ClientError, NotifyClient, NotifyResponse, ReqwestTransport, Transport, TransportResponse};
pub use server::{NotifyServer, Receipt, ServerError, ServiceBinding};
pub use store::{StoreBinding, StoreError};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
