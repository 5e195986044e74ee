use progress_circle_host_api::{TextSize, WidgetError};
use progress_circle_widget::{Gauge, GaugeFactory, GaugeOptions};
use ratatui::Frame;
use ratatui::layout::Rect;

use crate::ring::Ring;
use crate::state::RingState;
use crate::theme::RingTheme;

/// Ring-backed implementation of the widget's drawing seam.
pub struct RingGauge {
	state: RingState,
	theme: RingTheme,
	text_size: TextSize,
	disposed: bool,
}

impl RingGauge {
	/// Create a gauge with a resolved theme.
	#[must_use]
	pub fn new(animate: bool, theme: RingTheme, text_size: TextSize) -> Self {
		Self {
			state: RingState::new(animate),
			theme,
			text_size,
			disposed: false,
		}
	}

	/// Animation state, exposed for host frame pacing decisions.
	#[must_use]
	pub fn state(&self) -> &RingState {
		&self.state
	}
}

impl Gauge for RingGauge {
	fn set_text(&mut self, text: &str) {
		self.state.set_text(text);
	}

	fn animate(&mut self, fraction: f64) {
		self.state.set_target(fraction);
	}

	fn tick(&mut self) {
		if !self.disposed {
			self.state.calc_next();
		}
	}

	fn render(&mut self, frame: &mut Frame<'_>, area: Rect) {
		if self.disposed {
			return;
		}
		let ring = Ring::default()
			.theme(self.theme)
			.text(self.state.text())
			.fraction(self.state.shown())
			.text_size(self.text_size);
		frame.render_widget(ring, area);
	}

	fn dispose(&mut self) {
		self.disposed = true;
	}
}

/// Creates [`RingGauge`] instances from widget options.
#[derive(Debug, Clone, Copy, Default)]
pub struct RingGaugeFactory;

impl GaugeFactory for RingGaugeFactory {
	fn create(&self, options: GaugeOptions) -> Result<Box<dyn Gauge>, WidgetError> {
		let theme = RingTheme::for_style(options.bootstrap_style)
			.with_overrides(
				options.positive_color.as_deref(),
				options.negative_color.as_deref(),
			)
			.map_err(|message| WidgetError::GaugeCreation { message })?;
		Ok(Box::new(RingGauge::new(
			options.animate,
			theme,
			options.text_size,
		)))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use progress_circle_host_api::BootstrapStyle;
	use ratatui::Terminal;
	use ratatui::backend::TestBackend;

	fn options() -> GaugeOptions {
		GaugeOptions {
			animate: false,
			text_size: TextSize::Medium,
			bootstrap_style: BootstrapStyle::Success,
			positive_color: None,
			negative_color: None,
		}
	}

	#[test]
	fn factory_resolves_theme_and_animation() {
		let mut gauge = RingGaugeFactory.create(options()).expect("gauge");
		gauge.set_text("80%");
		gauge.animate(0.8);

		let backend = TestBackend::new(21, 11);
		let mut terminal = Terminal::new(backend).expect("terminal");
		terminal
			.draw(|frame| gauge.render(frame, frame.area()))
			.expect("draw frame");

		let buffer = terminal.backend().buffer();
		let middle: String = (0..21).map(|x| buffer[(x, 5)].symbol()).collect();
		assert!(middle.contains("80%"));
	}

	#[test]
	fn invalid_color_overrides_fail_creation() {
		let error = RingGaugeFactory
			.create(GaugeOptions {
				positive_color: Some("chartreuse-ish".to_string()),
				..options()
			})
			.err()
			.expect("invalid color");
		assert!(matches!(error, WidgetError::GaugeCreation { .. }));
	}

	#[test]
	fn disposed_gauges_stop_rendering() {
		let mut gauge = RingGaugeFactory.create(options()).expect("gauge");
		gauge.set_text("80%");
		gauge.dispose();

		let backend = TestBackend::new(21, 11);
		let mut terminal = Terminal::new(backend).expect("terminal");
		terminal
			.draw(|frame| gauge.render(frame, frame.area()))
			.expect("draw frame");

		let buffer = terminal.backend().buffer();
		let painted = (0..11)
			.flat_map(|y| (0..21).map(move |x| (x, y)))
			.filter(|&(x, y)| buffer[(x, y)].symbol() != " ")
			.count();
		assert_eq!(painted, 0);
	}
}
