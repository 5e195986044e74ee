//! Command-line interface for the demo host binary.

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use log::LevelFilter;

use progress_circle_host_api::{BootstrapStyle, ClickMode, Placement, TextSize};
use progress_circle_widget::StatePolicy;

/// Command-line arguments accepted by the `progress-circle` binary.
#[derive(Parser, Debug, Default)]
#[command(
	name = "progress-circle",
	version,
	about = "Animated circular progress gauge in a pluggable host runtime"
)]
pub struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "PROGRESS_CIRCLE_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub no_config: bool,
	#[arg(
		long = "progress-attribute",
		value_name = "NAME",
		help = "Attribute holding the measured value (default: progress)"
	)]
	pub progress_attribute: Option<String>,
	#[arg(
		long = "maximum-attribute",
		value_name = "NAME",
		help = "Attribute holding the maximum value (default: capacity)"
	)]
	pub maximum_attribute: Option<String>,
	#[arg(
		short = 'm',
		long = "maximum",
		value_name = "NUMBER",
		help = "Static maximum used when no attribute is bound (default: 100)"
	)]
	pub maximum: Option<f64>,
	#[arg(
		long = "text-size",
		value_enum,
		help = "Label size at the center of the gauge (default: medium)"
	)]
	pub text_size: Option<TextSizeArg>,
	#[arg(long = "no-animate", help = "Jump between values instead of sweeping")]
	pub no_animate: bool,
	#[arg(
		long = "on-click",
		value_enum,
		help = "Click behavior of the gauge (default: do-nothing)"
	)]
	pub on_click: Option<ClickModeArg>,
	#[arg(
		long,
		value_name = "NAME",
		help = "Action invoked for --on-click call-microflow"
	)]
	pub microflow: Option<String>,
	#[arg(
		long,
		value_name = "NAME",
		help = "View opened for --on-click show-page"
	)]
	pub page: Option<String>,
	#[arg(
		long = "placement",
		value_enum,
		help = "Where the opened view appears (default: content)"
	)]
	pub placement: Option<PlacementArg>,
	#[arg(
		long = "style",
		value_enum,
		help = "Bootstrap-inspired color style of the ring (default: default)"
	)]
	pub style: Option<StyleArg>,
	#[arg(
		long = "positive-color",
		value_name = "COLOR",
		help = "Ring color override for non-negative values"
	)]
	pub positive_color: Option<String>,
	#[arg(
		long = "negative-color",
		value_name = "COLOR",
		help = "Ring color override for negative values"
	)]
	pub negative_color: Option<String>,
	#[arg(
		long = "policy",
		value_enum,
		help = "Value-to-display policy (default: signed)"
	)]
	pub policy: Option<PolicyArg>,
	#[arg(
		long = "log-level",
		value_enum,
		help = "Log verbosity written to the log file (default: info)"
	)]
	pub log_level: Option<LogLevelArg>,
	#[arg(
		long = "log-file",
		value_name = "FILE",
		help = "Log file location (default: platform data directory)"
	)]
	pub log_file: Option<PathBuf>,
	#[arg(long = "print-config", help = "Print the effective configuration on startup")]
	pub print_config: bool,
}

/// Parse command-line arguments.
#[must_use]
pub fn parse_cli() -> CliArgs {
	CliArgs::parse()
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum TextSizeArg {
	Small,
	Medium,
	Large,
}

impl From<TextSizeArg> for TextSize {
	fn from(arg: TextSizeArg) -> Self {
		match arg {
			TextSizeArg::Small => Self::Small,
			TextSizeArg::Medium => Self::Medium,
			TextSizeArg::Large => Self::Large,
		}
	}
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ClickModeArg {
	DoNothing,
	ShowPage,
	CallMicroflow,
}

impl From<ClickModeArg> for ClickMode {
	fn from(arg: ClickModeArg) -> Self {
		match arg {
			ClickModeArg::DoNothing => Self::DoNothing,
			ClickModeArg::ShowPage => Self::ShowPage,
			ClickModeArg::CallMicroflow => Self::CallMicroflow,
		}
	}
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum PlacementArg {
	Content,
	Popup,
	Modal,
}

impl From<PlacementArg> for Placement {
	fn from(arg: PlacementArg) -> Self {
		match arg {
			PlacementArg::Content => Self::Content,
			PlacementArg::Popup => Self::Popup,
			PlacementArg::Modal => Self::Modal,
		}
	}
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum StyleArg {
	Default,
	Primary,
	Inverse,
	Success,
	Info,
	Warning,
	Danger,
}

impl From<StyleArg> for BootstrapStyle {
	fn from(arg: StyleArg) -> Self {
		match arg {
			StyleArg::Default => Self::Default,
			StyleArg::Primary => Self::Primary,
			StyleArg::Inverse => Self::Inverse,
			StyleArg::Success => Self::Success,
			StyleArg::Info => Self::Info,
			StyleArg::Warning => Self::Warning,
			StyleArg::Danger => Self::Danger,
		}
	}
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum PolicyArg {
	Signed,
	Blank,
	Clamped,
}

impl From<PolicyArg> for StatePolicy {
	fn from(arg: PolicyArg) -> Self {
		match arg {
			PolicyArg::Signed => Self::Signed,
			PolicyArg::Blank => Self::Blank,
			PolicyArg::Clamped => Self::Clamped,
		}
	}
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
	Off,
	Error,
	Warn,
	Info,
	Debug,
	Trace,
}

impl From<LogLevelArg> for LevelFilter {
	fn from(arg: LogLevelArg) -> Self {
		match arg {
			LogLevelArg::Off => Self::Off,
			LogLevelArg::Error => Self::Error,
			LogLevelArg::Warn => Self::Warn,
			LogLevelArg::Info => Self::Info,
			LogLevelArg::Debug => Self::Debug,
			LogLevelArg::Trace => Self::Trace,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use clap::Parser;

	#[test]
	fn parses_widget_overrides() {
		let cli = CliArgs::parse_from([
			"progress-circle",
			"--progress-attribute",
			"done",
			"--maximum",
			"250",
			"--on-click",
			"call-microflow",
			"--microflow",
			"ACT_Reset",
			"--no-animate",
		]);
		assert_eq!(cli.progress_attribute.as_deref(), Some("done"));
		assert_eq!(cli.maximum, Some(250.0));
		assert!(matches!(cli.on_click, Some(ClickModeArg::CallMicroflow)));
		assert_eq!(cli.microflow.as_deref(), Some("ACT_Reset"));
		assert!(cli.no_animate);
	}

	#[test]
	fn arg_enums_map_onto_library_types() {
		assert_eq!(TextSize::from(TextSizeArg::Large), TextSize::Large);
		assert_eq!(Placement::from(PlacementArg::Modal), Placement::Modal);
		assert_eq!(
			BootstrapStyle::from(StyleArg::Success),
			BootstrapStyle::Success
		);
		assert_eq!(StatePolicy::from(PolicyArg::Clamped), StatePolicy::Clamped);
		assert_eq!(LevelFilter::from(LogLevelArg::Debug), LevelFilter::Debug);
	}

	#[test]
	fn defaults_leave_overrides_unset() {
		let cli = CliArgs::parse_from(["progress-circle"]);
		assert!(cli.config.is_empty());
		assert!(!cli.no_config);
		assert!(cli.text_size.is_none());
		assert!(!cli.print_config);
	}
}
