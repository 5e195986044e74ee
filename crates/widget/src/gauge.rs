use ratatui::Frame;
use ratatui::layout::Rect;

use progress_circle_host_api::{BootstrapStyle, TextSize, WidgetError};

/// Appearance and animation settings fixed at gauge creation time.
#[derive(Debug, Clone, PartialEq)]
pub struct GaugeOptions {
    /// Whether value changes sweep over time or jump.
    pub animate: bool,
    /// Label size at the center.
    pub text_size: TextSize,
    /// Color theme of the ring.
    pub bootstrap_style: BootstrapStyle,
    /// Explicit color override for non-negative sweeps.
    pub positive_color: Option<String>,
    /// Explicit color override for negative sweeps.
    pub negative_color: Option<String>,
}

/// The circular drawing primitive wrapped by the widget.
///
/// Implemented by the rendering backend; the widget only pushes text and a
/// sweep fraction through this seam and releases the primitive on teardown.
pub trait Gauge {
    /// Replace the label at the center of the ring.
    fn set_text(&mut self, text: &str);

    /// Set the sweep target. Callers pass values within `[-1.0, 1.0]`.
    fn animate(&mut self, fraction: f64);

    /// Advance the animation by one frame.
    fn tick(&mut self);

    /// Draw the gauge into the given area.
    fn render(&mut self, frame: &mut Frame<'_>, area: Rect);

    /// Release drawing resources. Called exactly once per created gauge.
    fn dispose(&mut self);
}

/// Creates gauges for widget instances.
pub trait GaugeFactory {
    /// Create a gauge with the given options.
    fn create(&self, options: GaugeOptions) -> Result<Box<dyn Gauge>, WidgetError>;
}
