use coarnotify_core::NotifyClient;

use crate::CliError;

pub async fn send(config: &coarnotify_core::Config, file: std::path::PathBuf, inbox: Option<String>, no_validate: bool) -> Result<(), CliError> {
	let notification = crate::load(config, &file).await?;
	let client = NotifyClient::from_config(&config.client)?;
	let validate = config.client.validate && !no_validate;
	let response = client.send(notification.as_ref(), inbox.as_deref(), validate).await?;
	println!("{}", serde_json::to_string_pretty(&response).unwrap_or_default());
	Ok(())
}
