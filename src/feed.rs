use std::time::{Duration, Instant};

/// Paces the simulated progress feed.
///
/// The feed is a stand-in for server pushes: every interval it advances the
/// bound object's progress attribute until the capacity is reached. Pausing
/// and completion only gate the pacing; the value writes happen in the app
/// so the feed stays free of store knowledge.
#[derive(Debug)]
pub struct Feed {
	interval: Duration,
	last_tick: Instant,
	paused: bool,
	complete: bool,
}

impl Feed {
	/// Create a running feed.
	#[must_use]
	pub fn new(interval_ms: u64) -> Self {
		Self {
			interval: Duration::from_millis(interval_ms),
			last_tick: Instant::now(),
			paused: false,
			complete: false,
		}
	}

	/// Whether the feed is actively producing updates.
	#[must_use]
	pub fn is_running(&self) -> bool {
		!self.paused && !self.complete
	}

	/// Toggle the paused state.
	pub fn toggle_paused(&mut self) {
		self.paused = !self.paused;
	}

	/// Mark the feed as finished; it stays quiet until reset.
	pub fn mark_complete(&mut self) {
		self.complete = true;
	}

	/// Restart a completed or mid-flight feed.
	pub fn reset(&mut self) {
		self.complete = false;
		self.last_tick = Instant::now();
	}

	/// Whether a step is due at `now`. Consumes the elapsed interval.
	pub fn due(&mut self, now: Instant) -> bool {
		if !self.is_running() {
			return false;
		}
		if now.duration_since(self.last_tick) < self.interval {
			return false;
		}
		self.last_tick = now;
		true
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn steps_become_due_after_the_interval() {
		let mut feed = Feed::new(100);
		let start = Instant::now();
		assert!(!feed.due(start));
		assert!(feed.due(start + Duration::from_millis(150)));
		// The elapsed interval was consumed.
		assert!(!feed.due(start + Duration::from_millis(200)));
	}

	#[test]
	fn paused_feeds_produce_nothing() {
		let mut feed = Feed::new(1);
		feed.toggle_paused();
		assert!(!feed.is_running());
		assert!(!feed.due(Instant::now() + Duration::from_secs(1)));

		feed.toggle_paused();
		assert!(feed.is_running());
	}

	#[test]
	fn completion_silences_the_feed_until_reset() {
		let mut feed = Feed::new(1);
		feed.mark_complete();
		assert!(!feed.is_running());
		assert!(!feed.due(Instant::now() + Duration::from_secs(1)));

		feed.reset();
		assert!(feed.is_running());
	}
}
