use progress_circle_host_api::TextSize;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::{Line, Span};
use ratatui::widgets::Widget;
use ratatui::widgets::canvas::{Canvas, Circle, Painter, Shape};
use unicode_width::UnicodeWidthStr;

use crate::theme::RingTheme;

/// Margin between the ring and the canvas edge, in ring radii.
const BOUND: f64 = 1.2;

/// One frame of the circular gauge.
///
/// The ring is drawn on a Braille canvas: the trail as a full circle, the
/// sweep as an arc starting at the top and running clockwise (counter-
/// clockwise for negative fractions), and the label centered over it.
#[derive(Debug, Clone, Default)]
pub struct Ring {
	theme: RingTheme,
	text: String,
	fraction: f64,
	text_size: TextSize,
}

impl Ring {
	/// Set the color palette.
	#[must_use]
	pub fn theme(mut self, theme: RingTheme) -> Self {
		self.theme = theme;
		self
	}

	/// Set the center label.
	#[must_use]
	pub fn text(mut self, text: impl Into<String>) -> Self {
		self.text = text.into();
		self
	}

	/// Set the sweep fraction, expected within `[-1.0, 1.0]`.
	#[must_use]
	pub fn fraction(mut self, fraction: f64) -> Self {
		self.fraction = fraction;
		self
	}

	/// Set the label treatment.
	#[must_use]
	pub fn text_size(mut self, text_size: TextSize) -> Self {
		self.text_size = text_size;
		self
	}

	fn label_style(&self) -> Style {
		let style = Style::default().fg(self.theme.text);
		match self.text_size {
			TextSize::Small => style.add_modifier(Modifier::DIM),
			TextSize::Medium => style,
			TextSize::Large => style.add_modifier(Modifier::BOLD),
		}
	}

	fn render_label(&self, area: Rect, buf: &mut Buffer) {
		if self.text.is_empty() {
			return;
		}
		let width = self.text.width() as u16;
		if width == 0 {
			return;
		}
		let row = area.top() + area.height / 2;
		let start = if width >= area.width {
			area.left()
		} else {
			area.left() + (area.width - width) / 2
		};
		let line = Line::from(Span::styled(self.text.clone(), self.label_style()));
		buf.set_line(start, row, &line, area.width.min(width));
	}
}

impl Widget for Ring {
	fn render(self, area: Rect, buf: &mut Buffer) {
		if area.width == 0 || area.height == 0 {
			return;
		}
		if area.width >= 4 && area.height >= 3 {
			let (x_bounds, y_bounds) = square_bounds(area);
			let canvas = Canvas::default()
				.marker(Marker::Braille)
				.x_bounds(x_bounds)
				.y_bounds(y_bounds)
				.paint(|ctx| {
					ctx.draw(&Circle {
						x: 0.0,
						y: 0.0,
						radius: 1.0,
						color: self.theme.trail,
					});
					if self.fraction.abs() > f64::EPSILON {
						ctx.draw(&RingArc {
							fraction: self.fraction,
							color: self.theme.arc_color(self.fraction),
						});
					}
				});
			canvas.render(area, buf);
		}
		self.render_label(area, buf);
	}
}

/// Bounds keeping one world unit square on the Braille pixel grid, so the
/// ring stays round in non-square areas.
fn square_bounds(area: Rect) -> ([f64; 2], [f64; 2]) {
	let pixel_aspect = (f64::from(area.width) * 2.0) / (f64::from(area.height) * 4.0);
	if pixel_aspect >= 1.0 {
		([-BOUND * pixel_aspect, BOUND * pixel_aspect], [-BOUND, BOUND])
	} else {
		([-BOUND, BOUND], [-BOUND / pixel_aspect, BOUND / pixel_aspect])
	}
}

/// Partial circle swept from twelve o'clock.
struct RingArc {
	fraction: f64,
	color: ratatui::style::Color,
}

impl Shape for RingArc {
	fn draw(&self, painter: &mut Painter<'_, '_>) {
		let sweep = self.fraction.clamp(-1.0, 1.0) * 360.0;
		let steps = (sweep.abs().ceil() as usize).max(1);
		for step in 0..=steps {
			let progress = step as f64 / steps as f64;
			// Clockwise from the top for positive sweeps.
			let degrees = 90.0 - sweep * progress;
			let radians = degrees.to_radians();
			let x = radians.cos();
			let y = radians.sin();
			if let Some((px, py)) = painter.get_point(x, y) {
				painter.paint(px, py, self.color);
			}
		}
	}
}
