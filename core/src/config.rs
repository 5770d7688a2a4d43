use coarnotify::{NotifyOptions, PropertiesBy};

#[serde_inline_default::serde_inline_default]
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize, serde_default::DefaultFromSerde)]
pub struct Config {
	#[serde(default)]
	pub client: ClientConfig,

	#[serde(default)]
	pub server: ServerConfig,

	#[serde(default)]
	pub validation: ValidationConfig,
}

#[serde_inline_default::serde_inline_default]
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize, serde_default::DefaultFromSerde)]
pub struct ClientConfig {
	#[serde(default)]
	/// inbox to deliver to when none is given explicitly, before falling back to the target's
	pub inbox: Option<String>,

	#[serde_inline_default(format!("coarnotify/{}", crate::VERSION))]
	pub user_agent: String,

	#[serde_inline_default(30)]
	/// max time, in seconds, before requests fail with timeout
	pub timeout_seconds: u64,

	#[serde_inline_default(true)]
	/// refuse to send notifications that don't validate
	pub validate: bool,
}

#[serde_inline_default::serde_inline_default]
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize, serde_default::DefaultFromSerde)]
pub struct ServerConfig {
	#[serde_inline_default("http://127.0.0.1:3000".into())]
	/// public base url of this inbox, used to build locations of stored notifications
	pub base_url: String,

	#[serde_inline_default("notifications/".into())]
	/// directory where accepted notifications are stored
	pub store: String,

	#[serde_inline_default(true)]
	/// reject incoming notifications that don't validate
	pub validate: bool,
}

#[serde_inline_default::serde_inline_default]
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize, serde_default::DefaultFromSerde)]
pub struct ValidationConfig {
	#[serde_inline_default(true)]
	/// check values as they are set, not only when validating whole notifications
	pub validate_properties: bool,

	#[serde_inline_default(true)]
	/// nested objects share their parent document, rather than being copies of it
	pub properties_by_reference: bool,
}

impl ValidationConfig {
	pub fn options(&self) -> NotifyOptions {
		NotifyOptions {
			validate_properties: self.validate_properties,
			properties_by: if self.properties_by_reference { PropertiesBy::Reference } else { PropertiesBy::Value },
			..Default::default()
		}
	}
}

impl Config {
	pub fn load(path: Option<&std::path::PathBuf>) -> Self {
		let Some(cfg_path) = path else { return Config::default() };
		match std::fs::read_to_string(cfg_path) {
			Ok(x) => match toml::from_str(&x) {
				Ok(cfg) => return cfg,
				Err(e) => tracing::error!("failed parsing config file: {e}"),
			},
			Err(e) => tracing::error!("failed reading config file: {e}"),
		}
		Config::default()
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn missing_sections_and_keys_get_defaults() {
		let config: Config = toml::from_str(r#"
			[client]
			inbox = "https://overlay-journal.com/inbox/"

			[validation]
			properties_by_reference = false
		"#).expect("valid toml");

		assert_eq!(config.client.inbox.as_deref(), Some("https://overlay-journal.com/inbox/"));
		assert_eq!(config.client.timeout_seconds, 30);
		assert!(config.client.validate);
		assert_eq!(config.server.base_url, "http://127.0.0.1:3000");
		assert_eq!(config.server.store, "notifications/");
		assert_eq!(config.validation.options().properties_by, PropertiesBy::Value);
		assert!(config.validation.options().validate_properties);
	}

	#[test]
	fn unreadable_file_falls_back_to_defaults() {
		let config = Config::load(Some(&std::path::PathBuf::from("/definitely/not/here.toml")));
		assert!(config.client.inbox.is_none());
		assert!(config.server.validate);
	}

	#[test]
	fn defaults_survive_a_round_trip() {
		let text = toml::to_string_pretty(&Config::default()).expect("serializable");
		let config: Config = toml::from_str(&text).expect("parseable");
		assert_eq!(config.client.user_agent, format!("coarnotify/{}", crate::VERSION));
	}
}
