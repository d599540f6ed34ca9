use log::{Level, Log, Metadata, Record};
use wasm_bindgen::JsValue;

pub use super::Config;

struct ConsoleLogger {
	config: Config,
}

impl Log for ConsoleLogger {
	fn enabled(&self, metadata: &Metadata) -> bool {
		metadata.level() <= self.config.level
	}

	fn log(&self, record: &Record) {
		if !self.enabled(record.metadata()) {
			return;
		}
		let line = JsValue::from_str(&super::format_record(&self.config, record));
		match record.level() {
			Level::Error => web_sys::console::error_1(&line),
			Level::Warn => web_sys::console::warn_1(&line),
			Level::Info => web_sys::console::info_1(&line),
			Level::Debug | Level::Trace => web_sys::console::debug_1(&line),
		}
	}

	fn flush(&self) {}
}

/// Route the `log` facade to the browser console.
pub fn init(config: Config) -> anyhow::Result<()> {
	log::set_boxed_logger(Box::new(ConsoleLogger { config }))?;
	log::set_max_level(config.level);
	Ok(())
}
