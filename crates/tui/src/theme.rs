use std::str::FromStr;

use progress_circle_host_api::BootstrapStyle;
use ratatui::style::Color;

/// Colors applied to one rendered ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RingTheme {
	/// Arc color for non-negative sweeps.
	pub positive: Color,
	/// Arc color for negative sweeps.
	pub negative: Color,
	/// Full-circle trail behind the arc.
	pub trail: Color,
	/// Center label color.
	pub text: Color,
}

impl RingTheme {
	/// Palette for a bootstrap-inspired style selector.
	#[must_use]
	pub fn for_style(style: BootstrapStyle) -> Self {
		let positive = match style {
			BootstrapStyle::Default => Color::Cyan,
			BootstrapStyle::Primary => Color::Blue,
			BootstrapStyle::Inverse => Color::White,
			BootstrapStyle::Success => Color::Green,
			BootstrapStyle::Info => Color::LightBlue,
			BootstrapStyle::Warning => Color::Yellow,
			BootstrapStyle::Danger => Color::Red,
		};
		Self {
			positive,
			negative: Color::Red,
			trail: Color::DarkGray,
			text: Color::Reset,
		}
	}

	/// Apply explicit color overrides on top of the style palette.
	///
	/// Color names follow ratatui's parsing (`"green"`, `"#28a745"`, ...).
	/// Unparseable names are reported so configuration typos do not silently
	/// fall back to the palette.
	pub fn with_overrides(
		mut self,
		positive: Option<&str>,
		negative: Option<&str>,
	) -> Result<Self, String> {
		if let Some(name) = positive {
			self.positive = parse_color(name)?;
		}
		if let Some(name) = negative {
			self.negative = parse_color(name)?;
		}
		Ok(self)
	}

	/// Arc color for the given sweep direction.
	#[must_use]
	pub fn arc_color(&self, fraction: f64) -> Color {
		if fraction < 0.0 { self.negative } else { self.positive }
	}
}

impl Default for RingTheme {
	fn default() -> Self {
		Self::for_style(BootstrapStyle::Default)
	}
}

fn parse_color(name: &str) -> Result<Color, String> {
	Color::from_str(name).map_err(|_| format!("unknown color '{name}'"))
}
