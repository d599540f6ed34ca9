use log::{LevelFilter, Record};
use std::str::FromStr;

#[cfg(target_family = "wasm")]
pub mod wasm;

#[cfg(not(target_family = "wasm"))]
pub mod native;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
	pub level: LevelFilter,
	pub prefer_target: bool,
}

impl Default for Config {
	fn default() -> Self {
		Self {
			level: LevelFilter::from_str(crate::config::LOG_LEVEL).unwrap_or(LevelFilter::Debug),
			prefer_target: false,
		}
	}
}

impl Config {
	/// Prefix each line with the record's target instead of only its level.
	pub fn prefer_target(mut self) -> Self {
		self.prefer_target = true;
		self
	}
}

pub(crate) fn format_record(config: &Config, record: &Record) -> String {
	match config.prefer_target {
		true => format!("[{}] {}: {}", record.level(), record.target(), record.args()),
		false => format!("[{}] {}", record.level(), record.args()),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use log::Level;

	#[test]
	fn default_level_follows_config() {
		let config = Config::default();
		assert_eq!(config.level, LevelFilter::from_str(crate::config::LOG_LEVEL).unwrap());
		assert!(!config.prefer_target);
	}

	#[test]
	fn target_prefix_is_optional() {
		let plain = Config::default();
		let targeted = Config::default().prefer_target();
		let line = format_record(
			&plain,
			&Record::builder().args(format_args!("loaded {} movies", 3)).level(Level::Info).target("catalog").build(),
		);
		assert_eq!(line, "[INFO] loaded 3 movies");
		let line = format_record(
			&targeted,
			&Record::builder().args(format_args!("loaded {} movies", 3)).level(Level::Warn).target("catalog").build(),
		);
		assert_eq!(line, "[WARN] catalog: loaded 3 movies");
	}
}
