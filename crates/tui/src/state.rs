/// Frames a full-length sweep takes, roughly 800ms at the 16ms frame cadence.
const SWEEP_FRAMES: f64 = 50.0;

/// Snap distance below which the shown fraction locks onto the target.
const SNAP: f64 = 1e-6;

/// Retained animation state of one ring.
///
/// The gauge keeps the last pushed label and sweep target between frames and
/// eases the shown fraction toward the target one [`calc_next`](Self::calc_next)
/// step at a time. With animation disabled the shown fraction jumps.
#[derive(Debug, Clone, PartialEq)]
pub struct RingState {
	text: String,
	target: f64,
	shown: f64,
	step: f64,
	animate: bool,
}

impl RingState {
	/// Create a state at rest showing an empty label.
	#[must_use]
	pub fn new(animate: bool) -> Self {
		Self {
			text: String::new(),
			target: 0.0,
			shown: 0.0,
			step: 0.0,
			animate,
		}
	}

	/// Replace the center label.
	pub fn set_text(&mut self, text: &str) {
		if self.text != text {
			self.text.clear();
			self.text.push_str(text);
		}
	}

	/// Current center label.
	#[must_use]
	pub fn text(&self) -> &str {
		&self.text
	}

	/// Set the sweep target, starting a new ease or jumping when animation
	/// is off. Targets are clamped to `[-1.0, 1.0]`.
	pub fn set_target(&mut self, fraction: f64) {
		let fraction = if fraction.is_finite() {
			fraction.clamp(-1.0, 1.0)
		} else {
			0.0
		};
		self.target = fraction;
		if self.animate {
			self.step = (self.target - self.shown).abs() / SWEEP_FRAMES;
		} else {
			self.shown = fraction;
			self.step = 0.0;
		}
	}

	/// Sweep fraction to draw this frame.
	#[must_use]
	pub fn shown(&self) -> f64 {
		self.shown
	}

	/// Sweep fraction the ease is heading toward.
	#[must_use]
	pub fn target(&self) -> f64 {
		self.target
	}

	/// Whether the ease still has frames to go.
	#[must_use]
	pub fn is_settled(&self) -> bool {
		(self.target - self.shown).abs() <= SNAP
	}

	/// Advance the ease by one frame.
	pub fn calc_next(&mut self) {
		if self.is_settled() {
			self.shown = self.target;
			return;
		}
		let remaining = self.target - self.shown;
		if remaining.abs() <= self.step {
			self.shown = self.target;
		} else {
			self.shown += self.step.copysign(remaining);
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn disabled_animation_jumps_to_the_target() {
		let mut state = RingState::new(false);
		state.set_target(0.8);
		assert_eq!(state.shown(), 0.8);
		assert!(state.is_settled());
	}

	#[test]
	fn enabled_animation_eases_toward_the_target() {
		let mut state = RingState::new(true);
		state.set_target(1.0);
		assert_eq!(state.shown(), 0.0);

		state.calc_next();
		assert!(state.shown() > 0.0);
		assert!(state.shown() < 1.0);

		for _ in 0..SWEEP_FRAMES as usize {
			state.calc_next();
		}
		assert_eq!(state.shown(), 1.0);
		assert!(state.is_settled());
	}

	#[test]
	fn retargeting_mid_sweep_eases_from_the_current_position() {
		let mut state = RingState::new(true);
		state.set_target(1.0);
		for _ in 0..10 {
			state.calc_next();
		}
		let mid = state.shown();

		state.set_target(0.0);
		state.calc_next();
		assert!(state.shown() < mid);
	}

	#[test]
	fn targets_are_clamped_and_sanitized() {
		let mut state = RingState::new(false);
		state.set_target(3.5);
		assert_eq!(state.shown(), 1.0);
		state.set_target(-7.0);
		assert_eq!(state.shown(), -1.0);
		state.set_target(f64::NAN);
		assert_eq!(state.shown(), 0.0);
	}

	#[test]
	fn labels_are_retained_between_frames() {
		let mut state = RingState::new(true);
		state.set_text("80%");
		state.calc_next();
		assert_eq!(state.text(), "80%");
	}
}
