use progress_circle_host_api::{BootstrapStyle, ClickMode, Placement, TextSize};

use crate::state::StatePolicy;

/// Designer-facing configuration of one progress circle instance.
///
/// The shape mirrors what a page designer fills in: attribute bindings, a
/// static fallback maximum, appearance knobs and the click behavior. All
/// fields default to the values the modeler applies, so partial
/// configurations deserialize cleanly.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ProgressCircleProps {
    /// Attribute holding the measured value.
    pub progress_attribute: String,
    /// Attribute holding the maximum, when bound dynamically.
    pub maximum_value_attribute: Option<String>,
    /// Maximum used when no attribute is bound or its value is unusable.
    pub static_maximum_value: f64,
    /// Label size at the center of the gauge.
    pub text_size: TextSize,
    /// Whether value changes sweep the ring or jump.
    pub animate: bool,
    /// What a click on the gauge does.
    pub on_click: ClickMode,
    /// Action name for [`ClickMode::CallMicroflow`]; empty means unset.
    pub microflow: String,
    /// View name for [`ClickMode::ShowPage`]; empty means unset.
    pub page: String,
    /// Where the view opens.
    pub page_placement: Placement,
    /// Color theme of the ring.
    pub bootstrap_style: BootstrapStyle,
    /// Explicit ring color override for non-negative values.
    pub positive_color: Option<String>,
    /// Explicit ring color override for negative values.
    pub negative_color: Option<String>,
    /// Value-to-display policy; the default matches the newest generation.
    pub policy: StatePolicy,
}

impl Default for ProgressCircleProps {
    fn default() -> Self {
        Self {
            progress_attribute: String::new(),
            maximum_value_attribute: None,
            static_maximum_value: 100.0,
            text_size: TextSize::default(),
            animate: true,
            on_click: ClickMode::default(),
            microflow: String::new(),
            page: String::new(),
            page_placement: Placement::default(),
            bootstrap_style: BootstrapStyle::default(),
            positive_color: None,
            negative_color: None,
            policy: StatePolicy::default(),
        }
    }
}

impl ProgressCircleProps {
    /// Validate the click configuration.
    ///
    /// Returns the alert message to show inline, or `None` when the
    /// configuration is usable. A message never blocks mounting; the widget
    /// shell still appears, inert, with the alert.
    #[must_use]
    pub fn validation_alert(&self) -> Option<String> {
        let problem = match self.on_click {
            ClickMode::CallMicroflow if self.microflow.is_empty() => {
                Some("on click microflow is required")
            }
            ClickMode::ShowPage if self.page.is_empty() => Some("on click page is required"),
            _ => None,
        };
        problem.map(|message| format!("Error in progress circle configuration: {message}"))
    }

    /// Whether the widget reacts to clicks at all.
    #[must_use]
    pub fn clickable(&self) -> bool {
        match self.on_click {
            ClickMode::DoNothing => false,
            ClickMode::CallMicroflow => !self.microflow.is_empty(),
            ClickMode::ShowPage => !self.page.is_empty(),
        }
    }
}
