use std::fmt;

/// How measured values map to display text and animation input.
///
/// The widget shipped in several generations with slightly different
/// treatment of missing and out-of-range values. The variants collapse those
/// behaviors into one explicit switch instead of parallel implementations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatePolicy {
    /// Display the percentage as computed, sign and overshoot included
    /// (`"-200%"`, `"180%"`), clamping only the animation fraction. Missing
    /// values render as `"--"`, a non-positive maximum as `"Invalid"`.
    #[default]
    Signed,
    /// Same as [`StatePolicy::Signed`] but renders missing values as an empty
    /// label, for hosts that draw their own placeholder.
    Blank,
    /// Clamp the value into `0..=maximum` before computing the percentage, so
    /// the display never leaves `"0%"..="100%"`. Missing values and a
    /// maximum below one render as `"NA"`.
    Clamped,
}

impl StatePolicy {
    fn no_value_text(self) -> &'static str {
        match self {
            Self::Signed => "--",
            Self::Blank => "",
            Self::Clamped => "NA",
        }
    }

    fn invalid_maximum_text(self) -> &'static str {
        match self {
            Self::Signed | Self::Blank => "Invalid",
            Self::Clamped => "NA",
        }
    }

    fn maximum_is_invalid(self, maximum: f64) -> bool {
        match self {
            Self::Signed | Self::Blank => maximum <= 0.0,
            Self::Clamped => maximum < 1.0,
        }
    }
}

/// Non-fatal condition detected while computing a display state.
///
/// Warnings never stop the widget from rendering; callers typically forward
/// them to the log.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProgressWarning {
    /// The configured maximum cannot serve as a denominator.
    InvalidMaximum { maximum: f64 },
    /// The value was below zero and got clamped to 0%.
    NegativeValue { value: f64 },
    /// The value exceeded the maximum and got clamped to 100%.
    ValueAboveMaximum { value: f64, maximum: f64 },
}

impl fmt::Display for ProgressWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidMaximum { maximum } => {
                write!(f, "the maximum value {maximum} is not a usable denominator")
            }
            Self::NegativeValue { value } => {
                write!(f, "the progress value {value} is below zero, showing 0%")
            }
            Self::ValueAboveMaximum { value, maximum } => {
                write!(
                    f,
                    "the progress value {value} exceeds the maximum {maximum}, showing 100%"
                )
            }
        }
    }
}

/// Display state derived from one (value, maximum) pair.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressState {
    /// Label rendered at the center of the gauge.
    pub display_text: String,
    /// Sweep input for the gauge, always within `[-1.0, 1.0]`.
    pub animation_fraction: f64,
    /// Rounded percentage, absent when a sentinel label is shown.
    pub percentage: Option<i32>,
    /// Condition worth reporting, if any.
    pub warning: Option<ProgressWarning>,
}

impl ProgressState {
    /// Compute the display state for a measured value against a maximum.
    ///
    /// Invalid numeric combinations degrade to a sentinel label; this never
    /// fails and never panics.
    #[must_use]
    pub fn compute(value: Option<f64>, maximum: f64, policy: StatePolicy) -> Self {
        let Some(value) = value else {
            return Self::sentinel(policy.no_value_text(), None);
        };
        if policy.maximum_is_invalid(maximum) {
            return Self::sentinel(
                policy.invalid_maximum_text(),
                Some(ProgressWarning::InvalidMaximum { maximum }),
            );
        }
        match policy {
            StatePolicy::Signed | StatePolicy::Blank => Self::signed(value, maximum),
            StatePolicy::Clamped => Self::clamped(value, maximum),
        }
    }

    /// Whether the state shows a sentinel label instead of a percentage.
    #[must_use]
    pub fn is_sentinel(&self) -> bool {
        self.percentage.is_none()
    }

    fn sentinel(text: &str, warning: Option<ProgressWarning>) -> Self {
        Self {
            display_text: text.to_string(),
            animation_fraction: 0.0,
            percentage: None,
            warning,
        }
    }

    fn signed(value: f64, maximum: f64) -> Self {
        let percentage = (value / maximum * 100.0).round() as i32;
        Self {
            display_text: format!("{percentage}%"),
            animation_fraction: (f64::from(percentage) / 100.0).clamp(-1.0, 1.0),
            percentage: Some(percentage),
            warning: None,
        }
    }

    fn clamped(value: f64, maximum: f64) -> Self {
        let (percentage, warning) = if value < 0.0 {
            (0, Some(ProgressWarning::NegativeValue { value }))
        } else if value > maximum {
            (100, Some(ProgressWarning::ValueAboveMaximum { value, maximum }))
        } else {
            ((value / maximum * 100.0).round() as i32, None)
        };
        Self {
            display_text: format!("{percentage}%"),
            animation_fraction: f64::from(percentage) / 100.0,
            percentage: Some(percentage),
            warning,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_value_shows_placeholder_for_any_maximum() {
        for maximum in [-5.0, 0.0, 1.0, 100.0, 1e9] {
            let state = ProgressState::compute(None, maximum, StatePolicy::Signed);
            assert_eq!(state.display_text, "--");
            assert_eq!(state.animation_fraction, 0.0);
            assert!(state.is_sentinel());
        }
    }

    #[test]
    fn non_positive_maximum_is_invalid() {
        for maximum in [0.0, -1.0, -250.0] {
            let state = ProgressState::compute(Some(80.0), maximum, StatePolicy::Signed);
            assert_eq!(state.display_text, "Invalid");
            assert_eq!(state.animation_fraction, 0.0);
            assert_eq!(
                state.warning,
                Some(ProgressWarning::InvalidMaximum { maximum })
            );
        }
    }

    #[test]
    fn computes_rounded_percentage() {
        let state = ProgressState::compute(Some(80.0), 100.0, StatePolicy::Signed);
        assert_eq!(state.display_text, "80%");
        assert_eq!(state.animation_fraction, 0.8);
        assert_eq!(state.percentage, Some(80));

        let state = ProgressState::compute(Some(1.0), 3.0, StatePolicy::Signed);
        assert_eq!(state.display_text, "33%");
    }

    #[test]
    fn overshoot_keeps_text_but_clamps_animation() {
        let state = ProgressState::compute(Some(180.0), 100.0, StatePolicy::Signed);
        assert_eq!(state.display_text, "180%");
        assert_eq!(state.animation_fraction, 1.0);
    }

    #[test]
    fn negative_values_keep_text_but_clamp_animation() {
        let state = ProgressState::compute(Some(-200.0), 100.0, StatePolicy::Signed);
        assert_eq!(state.display_text, "-200%");
        assert_eq!(state.animation_fraction, -1.0);
        assert_eq!(state.percentage, Some(-200));
    }

    #[test]
    fn zero_is_a_value_not_a_placeholder() {
        let state = ProgressState::compute(Some(0.0), 100.0, StatePolicy::Signed);
        assert_eq!(state.display_text, "0%");
        assert_eq!(state.animation_fraction, 0.0);
        assert!(!state.is_sentinel());
    }

    #[test]
    fn blank_policy_renders_empty_placeholder() {
        let state = ProgressState::compute(None, 100.0, StatePolicy::Blank);
        assert_eq!(state.display_text, "");
        assert!(state.is_sentinel());

        let state = ProgressState::compute(Some(60.0), 100.0, StatePolicy::Blank);
        assert_eq!(state.display_text, "60%");
    }

    #[test]
    fn clamped_policy_limits_the_range() {
        let state = ProgressState::compute(Some(-20.0), 100.0, StatePolicy::Clamped);
        assert_eq!(state.display_text, "0%");
        assert_eq!(
            state.warning,
            Some(ProgressWarning::NegativeValue { value: -20.0 })
        );

        let state = ProgressState::compute(Some(180.0), 100.0, StatePolicy::Clamped);
        assert_eq!(state.display_text, "100%");
        assert_eq!(state.animation_fraction, 1.0);
        assert_eq!(
            state.warning,
            Some(ProgressWarning::ValueAboveMaximum {
                value: 180.0,
                maximum: 100.0
            })
        );
    }

    #[test]
    fn clamped_policy_uses_na_for_missing_and_invalid() {
        let state = ProgressState::compute(None, 100.0, StatePolicy::Clamped);
        assert_eq!(state.display_text, "NA");

        let state = ProgressState::compute(Some(50.0), 0.5, StatePolicy::Clamped);
        assert_eq!(state.display_text, "NA");
        assert!(state.warning.is_some());
    }
}
