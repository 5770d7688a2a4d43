use coarnotify::{Base, Notify, NotifyError};

use crate::CliError;

pub async fn validate(config: &coarnotify_core::Config, file: std::path::PathBuf) -> Result<(), CliError> {
	let notification = crate::load(config, &file).await?;
	let types = notification.types();
	let name = notification.base()
		.options()
		.registry
		.get_by_types(&types)
		.map(|e| e.name)
		.unwrap_or("unknown pattern");
	let id = notification.id().unwrap_or_default();

	match notification.validate() {
		Ok(()) => {
			println!("{name} {id}: valid");
			Ok(())
		},
		Err(e) => {
			println!("{name} {id}: invalid");
			println!("{}", serde_json::to_string_pretty(&e.to_json()).unwrap_or_default());
			Err(NotifyError::from(e).into())
		},
	}
}

#[cfg(test)]
mod test {
	use coarnotify::fixtures;

	use super::*;

	async fn write(doc: &serde_json::Value) -> std::path::PathBuf {
		let path = std::env::temp_dir().join(format!("coarnotify-cli-{}.json", uuid::Uuid::new_v4()));
		tokio::fs::write(&path, doc.to_string()).await.expect("writable temp dir");
		path
	}

	#[tokio::test]
	async fn valid_fixture_passes() {
		let path = write(&fixtures::announce_relationship()).await;
		assert!(validate(&Default::default(), path.clone()).await.is_ok());
		let _ = tokio::fs::remove_file(path).await;
	}

	#[tokio::test]
	async fn broken_notification_reports_fields() {
		let mut doc = fixtures::undo_offer();
		doc.as_object_mut().expect("object").remove("actor");
		doc["origin"]["inbox"] = "not a uri".into();
		let path = write(&doc).await;

		let err = validate(&Default::default(), path.clone()).await.expect_err("origin inbox is broken");
		let CliError::Notify(NotifyError::Validation(errors)) = err else { panic!("unexpected error: {err}") };
		assert!(errors.contains(&coarnotify::property::ORIGIN));
		let _ = tokio::fs::remove_file(path).await;
	}

	#[tokio::test]
	async fn missing_file_is_an_io_error() {
		let path = std::env::temp_dir().join(format!("coarnotify-cli-{}.json", uuid::Uuid::new_v4()));
		assert!(matches!(validate(&Default::default(), path).await, Err(CliError::Io(_))));
	}
}
