use simplelog::{ColorChoice, TermLogger, TerminalMode};

pub use super::Config;

pub fn init(config: Config) -> anyhow::Result<()> {
	let mut builder = simplelog::ConfigBuilder::new();
	if !config.prefer_target {
		builder.set_target_level(log::LevelFilter::Off);
	}
	TermLogger::init(config.level, builder.build(), TerminalMode::Mixed, ColorChoice::Auto)?;
	Ok(())
}
