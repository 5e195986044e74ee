//! Configuration loading for the demo host.
//!
//! Settings merge in layers: default config file locations, explicitly
//! passed config files, environment variables, then CLI overrides. The raw
//! merged form is validated into a [`ResolvedConfig`] before the host starts.

mod raw;
mod sources;

use anyhow::{Result, anyhow};

pub use raw::{DemoOptions, ResolvedConfig};

use crate::cli::CliArgs;
use raw::RawConfig;

/// Load configuration by combining CLI arguments, config files and
/// environment variables.
pub fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
	let builder = sources::build_config(cli)?;
	let mut raw: RawConfig = builder
		.try_deserialize()
		.map_err(|err| anyhow!("failed to deserialize configuration: {err}"))?;
	raw.apply_cli_overrides(cli);
	raw.resolve()
}

#[cfg(test)]
mod tests {
	use std::fs;

	use super::*;

	#[test]
	fn loads_explicit_config_files() {
		let dir = tempfile::tempdir().expect("tempdir");
		let path = dir.path().join("widget.toml");
		fs::write(
			&path,
			r#"
			[widget]
			on_click = "callMicroflow"
			microflow = "ACT_FromFile"
			bootstrap_style = "danger"

			[demo]
			capacity = 250.0

			[logging]
			level = "warn"
			file = "widget-test.log"
			"#,
		)
		.expect("write config");

		let cli = CliArgs {
			config: vec![path],
			no_config: true,
			..CliArgs::default()
		};
		let resolved = load(&cli).expect("load");

		assert_eq!(resolved.props.microflow, "ACT_FromFile");
		assert_eq!(
			resolved.props.on_click,
			progress_circle_host_api::ClickMode::CallMicroflow
		);
		assert_eq!(
			resolved.props.bootstrap_style,
			progress_circle_host_api::BootstrapStyle::Danger
		);
		assert_eq!(resolved.demo.capacity, 250.0);
		assert_eq!(resolved.log_level, log::LevelFilter::Warn);
	}

	#[test]
	fn missing_explicit_config_files_fail_loading() {
		let cli = CliArgs {
			config: vec!["definitely-not-here.toml".into()],
			no_config: true,
			..CliArgs::default()
		};
		assert!(load(&cli).is_err());
	}
}
