use coarnotify::Registry;

/// one line per registered pattern: its name and the types it requires
pub fn describe(registry: &Registry) -> Vec<String> {
	registry.patterns()
		.map(|entry| {
			let types: Vec<&str> = entry.types.iter().copied().collect();
			format!("{:<28}{}", entry.name, types.join(", "))
		})
		.collect()
}

pub fn patterns(config: &coarnotify_core::Config) {
	for line in describe(&config.validation.options().registry) {
		println!("{line}");
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn every_pattern_is_listed_with_its_types() {
		let lines = describe(&Registry::default());
		assert_eq!(lines.len(), 12);
		assert!(lines.iter().any(|l| l.starts_with("RequestReview") && l.contains("Offer, coar-notify:ReviewAction")));
		assert!(lines.iter().any(|l| l.starts_with("Accept") && l.trim_end().ends_with("Accept")));
	}
}
