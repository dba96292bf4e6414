use env_logger::{Builder, Env};
use log::LevelFilter;

/// Initializes logging from `RUST_LOG`, defaulting to `info` for this crate.
///
/// The renderer stack is chatty at `info`, so it is capped at `warn` unless
/// `RUST_LOG` says otherwise.
pub fn init() {
	let mut builder = Builder::new();
	builder
		.filter_level(LevelFilter::Info)
		.filter_module("wgpu_core", LevelFilter::Warn)
		.filter_module("wgpu_hal", LevelFilter::Warn)
		.filter_module("naga", LevelFilter::Warn)
		.filter_module("iced_wgpu", LevelFilter::Warn)
		.filter_module("cosmic_text", LevelFilter::Warn)
		.parse_env(Env::default())
		.format_timestamp_millis()
		.format_module_path(true);

	if builder.try_init().is_err() {
		log::debug!("Logger already initialized");
	}
}
