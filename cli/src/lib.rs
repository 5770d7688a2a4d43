mod validate;
pub use validate::*;

mod send;
pub use send::*;

mod patterns;
pub use patterns::*;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
	#[error("could not read notification file: {0}")]
	Io(#[from] std::io::Error),

	#[error("{0}")]
	Notify(#[from] coarnotify::NotifyError),

	#[error("{0}")]
	Client(#[from] coarnotify_core::ClientError),
}

#[derive(Debug, Clone, clap::Subcommand)]
pub enum CliCommand {
	/// check a notification file, reporting which pattern it is and what is wrong with it
	Validate {
		/// path to the json-ld notification
		file: std::path::PathBuf,
	},

	/// deliver a notification file to an inbox
	Send {
		/// path to the json-ld notification
		file: std::path::PathBuf,

		#[arg(long, env = "COAR_NOTIFY_INBOX")]
		/// inbox url, overrides configured inbox and notification target inbox
		inbox: Option<String>,

		#[arg(long, default_value_t = false)]
		/// send even if the notification doesn't validate
		no_validate: bool,
	},

	/// list registered patterns and the types they match
	Patterns,
}

pub async fn run(config: coarnotify_core::Config, command: CliCommand) -> Result<(), Box<dyn std::error::Error>> {
	tracing::info!("running cli task: {command:?}");
	match command {
		CliCommand::Validate { file } =>
			Ok(validate(&config, file).await?),
		CliCommand::Send { file, inbox, no_validate } =>
			Ok(send(&config, file, inbox, no_validate).await?),
		CliCommand::Patterns =>
			Ok(patterns(&config)),
	}
}

/// reads and resolves a notification without validating it
pub(crate) async fn load(config: &coarnotify_core::Config, file: &std::path::Path) -> Result<Box<dyn coarnotify::Pattern>, CliError> {
	let raw = tokio::fs::read_to_string(file).await?;
	let document: serde_json::Value = serde_json::from_str(&raw).map_err(coarnotify::NotifyError::from)?;
	let options = coarnotify::NotifyOptions {
		validate_stream_on_construct: false,
		..config.validation.options()
	};
	let registry = options.registry.clone();
	Ok(registry.get_by_object(document, options)?)
}
