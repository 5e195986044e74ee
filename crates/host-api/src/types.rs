/// Size of the label rendered at the center of a gauge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextSize {
    Small,
    #[default]
    Medium,
    Large,
}

/// What a click on the widget is configured to do.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ClickMode {
    /// Ignore clicks entirely.
    #[default]
    DoNothing,
    /// Navigate to a configured view.
    ShowPage,
    /// Invoke a configured server-side action.
    CallMicroflow,
}

/// Bootstrap-inspired color theme selector for the widget.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BootstrapStyle {
    #[default]
    Default,
    Primary,
    Inverse,
    Success,
    Info,
    Warning,
    Danger,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn click_mode_uses_designer_spelling() {
        let mode: ClickMode = serde_json::from_str("\"callMicroflow\"").expect("parse");
        assert_eq!(mode, ClickMode::CallMicroflow);
    }

    #[test]
    fn defaults_match_the_modeler() {
        assert_eq!(TextSize::default(), TextSize::Medium);
        assert_eq!(ClickMode::default(), ClickMode::DoNothing);
        assert_eq!(BootstrapStyle::default(), BootstrapStyle::Default);
    }
}
