use std::path::PathBuf;

use anyhow::{Result, ensure};
use log::LevelFilter;
use serde::Deserialize;

use progress_circle_host_api::{BootstrapStyle, ClickMode, Placement, TextSize};
use progress_circle_widget::{ProgressCircleProps, StatePolicy};

use progress_circle::logging;

use crate::cli::CliArgs;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	widget: WidgetSection,
	demo: DemoSection,
	logging: LoggingSection,
}

/// Widget configuration as it is read from disk.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct WidgetSection {
	progress_attribute: Option<String>,
	maximum_value_attribute: Option<String>,
	static_maximum_value: Option<f64>,
	text_size: Option<TextSize>,
	animate: Option<bool>,
	on_click: Option<ClickMode>,
	microflow: Option<String>,
	page: Option<String>,
	page_placement: Option<Placement>,
	bootstrap_style: Option<BootstrapStyle>,
	positive_color: Option<String>,
	negative_color: Option<String>,
	policy: Option<StatePolicy>,
}

/// Simulated data feed options prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct DemoSection {
	entity: Option<String>,
	initial_value: Option<f64>,
	capacity: Option<f64>,
	step: Option<f64>,
	interval_ms: Option<u64>,
	views: Option<Vec<String>>,
}

/// Logging options prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct LoggingSection {
	level: Option<String>,
	file: Option<PathBuf>,
}

/// Options driving the simulated host data feed.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoOptions {
	/// Entity name of the demo object.
	pub entity: String,
	/// Value the progress attribute starts at.
	pub initial_value: f64,
	/// Value of the maximum attribute.
	pub capacity: f64,
	/// Amount the feed adds per tick.
	pub step: f64,
	/// Milliseconds between feed ticks.
	pub interval_ms: u64,
	/// Views the navigator accepts.
	pub views: Vec<String>,
}

impl Default for DemoOptions {
	fn default() -> Self {
		Self {
			entity: "Deployment.BuildJob".to_string(),
			initial_value: 0.0,
			capacity: 100.0,
			step: 2.5,
			interval_ms: 120,
			views: vec!["status.view".to_string(), "job.details".to_string()],
		}
	}
}

/// Validated configuration the host starts from.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
	pub props: ProgressCircleProps,
	pub demo: DemoOptions,
	pub log_level: LevelFilter,
	pub log_file: PathBuf,
}

impl ResolvedConfig {
	/// Print the effective configuration to stdout.
	pub fn print_summary(&self) {
		println!("Effective configuration:");
		println!("  Progress attribute: {}", self.props.progress_attribute);
		println!(
			"  Maximum: {}",
			match &self.props.maximum_value_attribute {
				Some(attribute) => format!("attribute '{attribute}'"),
				None => format!("static {}", self.props.static_maximum_value),
			}
		);
		println!("  On click: {:?}", self.props.on_click);
		println!("  Policy: {:?}", self.props.policy);
		println!("  Feed: +{} every {}ms", self.demo.step, self.demo.interval_ms);
		println!("  Log: {} -> {}", self.log_level, self.log_file.display());
	}
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(value) = cli.progress_attribute.clone() {
			self.widget.progress_attribute = Some(value);
		}
		if let Some(value) = cli.maximum_attribute.clone() {
			self.widget.maximum_value_attribute = Some(value);
		}
		if let Some(value) = cli.maximum {
			self.widget.static_maximum_value = Some(value);
		}
		if let Some(value) = cli.text_size {
			self.widget.text_size = Some(value.into());
		}
		if cli.no_animate {
			self.widget.animate = Some(false);
		}
		if let Some(value) = cli.on_click {
			self.widget.on_click = Some(value.into());
		}
		if let Some(value) = cli.microflow.clone() {
			self.widget.microflow = Some(value);
		}
		if let Some(value) = cli.page.clone() {
			self.widget.page = Some(value);
		}
		if let Some(value) = cli.placement {
			self.widget.page_placement = Some(value.into());
		}
		if let Some(value) = cli.style {
			self.widget.bootstrap_style = Some(value.into());
		}
		if let Some(value) = cli.positive_color.clone() {
			self.widget.positive_color = Some(value);
		}
		if let Some(value) = cli.negative_color.clone() {
			self.widget.negative_color = Some(value);
		}
		if let Some(value) = cli.policy {
			self.widget.policy = Some(value.into());
		}
		if let Some(value) = cli.log_level {
			self.logging.level = Some(LevelFilter::from(value).to_string());
		}
		if let Some(value) = cli.log_file.clone() {
			self.logging.file = Some(value);
		}
	}

	/// Validate the merged configuration into a [`ResolvedConfig`].
	pub(super) fn resolve(self) -> Result<ResolvedConfig> {
		let defaults = ProgressCircleProps::default();
		let props = ProgressCircleProps {
			progress_attribute: self
				.widget
				.progress_attribute
				.unwrap_or_else(|| "progress".to_string()),
			// Empty means unset: fall back to the static maximum.
			maximum_value_attribute: match self.widget.maximum_value_attribute {
				Some(attribute) if attribute.is_empty() => None,
				Some(attribute) => Some(attribute),
				None => Some("capacity".to_string()),
			},
			static_maximum_value: self
				.widget
				.static_maximum_value
				.unwrap_or(defaults.static_maximum_value),
			text_size: self.widget.text_size.unwrap_or(defaults.text_size),
			animate: self.widget.animate.unwrap_or(defaults.animate),
			on_click: self.widget.on_click.unwrap_or(defaults.on_click),
			microflow: self.widget.microflow.unwrap_or(defaults.microflow),
			page: self.widget.page.unwrap_or(defaults.page),
			page_placement: self.widget.page_placement.unwrap_or(defaults.page_placement),
			bootstrap_style: self
				.widget
				.bootstrap_style
				.unwrap_or(defaults.bootstrap_style),
			positive_color: self.widget.positive_color,
			negative_color: self.widget.negative_color,
			policy: self.widget.policy.unwrap_or(defaults.policy),
		};
		ensure!(
			!props.progress_attribute.is_empty(),
			"progress attribute must not be empty"
		);
		ensure!(
			props.static_maximum_value.is_finite(),
			"static maximum must be a finite number"
		);

		let demo_defaults = DemoOptions::default();
		let demo = DemoOptions {
			entity: self.demo.entity.unwrap_or(demo_defaults.entity),
			initial_value: self
				.demo
				.initial_value
				.unwrap_or(demo_defaults.initial_value),
			capacity: self.demo.capacity.unwrap_or(demo_defaults.capacity),
			step: self.demo.step.unwrap_or(demo_defaults.step),
			interval_ms: self.demo.interval_ms.unwrap_or(demo_defaults.interval_ms),
			views: self.demo.views.unwrap_or(demo_defaults.views),
		};
		ensure!(demo.interval_ms > 0, "feed interval must be at least 1ms");
		ensure!(
			demo.step.is_finite() && demo.step > 0.0,
			"feed step must be a positive number"
		);
		ensure!(demo.capacity.is_finite(), "capacity must be a finite number");

		let log_level = match self.logging.level {
			Some(level) => level
				.parse::<LevelFilter>()
				.map_err(|_| anyhow::anyhow!("unknown log level '{level}'"))?,
			None => LevelFilter::Info,
		};
		let log_file = match self.logging.file {
			Some(file) => file,
			None => logging::default_log_file()?,
		};

		Ok(ResolvedConfig {
			props,
			demo,
			log_level,
			log_file,
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn raw_with_log_file() -> RawConfig {
		// Pin the log file so tests do not depend on platform directories.
		let mut raw = RawConfig::default();
		raw.logging.file = Some(PathBuf::from("progress-circle-test.log"));
		raw
	}

	#[test]
	fn resolves_defaults_without_any_input() {
		let resolved = raw_with_log_file().resolve().expect("resolve");
		assert_eq!(resolved.props.progress_attribute, "progress");
		assert_eq!(
			resolved.props.maximum_value_attribute.as_deref(),
			Some("capacity")
		);
		assert_eq!(resolved.props.static_maximum_value, 100.0);
		assert!(resolved.props.animate);
		assert_eq!(resolved.demo.interval_ms, 120);
		assert_eq!(resolved.log_level, LevelFilter::Info);
	}

	#[test]
	fn cli_overrides_win_over_file_values() {
		let mut raw = raw_with_log_file();
		raw.widget.microflow = Some("ACT_FromFile".to_string());
		raw.logging.level = Some("debug".to_string());

		let cli = CliArgs {
			microflow: Some("ACT_FromCli".to_string()),
			no_animate: true,
			..CliArgs::default()
		};
		raw.apply_cli_overrides(&cli);

		let resolved = raw.resolve().expect("resolve");
		assert_eq!(resolved.props.microflow, "ACT_FromCli");
		assert!(!resolved.props.animate);
		assert_eq!(resolved.log_level, LevelFilter::Debug);
	}

	#[test]
	fn rejects_unusable_feed_settings() {
		let mut raw = RawConfig::default();
		raw.demo.interval_ms = Some(0);
		assert!(raw.resolve().is_err());

		let mut raw = RawConfig::default();
		raw.demo.step = Some(-1.0);
		assert!(raw.resolve().is_err());
	}

	#[test]
	fn rejects_unknown_log_levels() {
		let mut raw = RawConfig::default();
		raw.logging.level = Some("loud".to_string());
		assert!(raw.resolve().is_err());
	}
}
