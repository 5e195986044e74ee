use progress_circle_host_api::{
	ChangeEvent, SubscriptionBus, SubscriptionHandle, SubscriptionRequest,
};

/// Subscription registry of the demo host.
///
/// Widgets register interest through the `SubscriptionBus` seam; the host
/// asks [`has_subscribers`](Self::has_subscribers) before fanning a change
/// event out to mounted widgets.
#[derive(Debug, Default)]
pub struct HostBus {
	next_handle: u64,
	active: Vec<(SubscriptionHandle, SubscriptionRequest)>,
}

impl HostBus {
	/// Create a bus without registrations.
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Whether any active registration covers the event.
	#[must_use]
	pub fn has_subscribers(&self, event: &ChangeEvent) -> bool {
		self.active.iter().any(|(_, request)| event.matches(request))
	}

	/// Number of active registrations.
	#[must_use]
	pub fn active_count(&self) -> usize {
		self.active.len()
	}
}

impl SubscriptionBus for HostBus {
	fn subscribe(&mut self, request: SubscriptionRequest) -> SubscriptionHandle {
		self.next_handle += 1;
		let handle = SubscriptionHandle::new(self.next_handle);
		self.active.push((handle, request));
		handle
	}

	fn unsubscribe(&mut self, handle: SubscriptionHandle) -> bool {
		let before = self.active.len();
		self.active.retain(|(active, _)| *active != handle);
		self.active.len() < before
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use progress_circle_host_api::Guid;

	#[test]
	fn issues_unique_handles() {
		let mut bus = HostBus::new();
		let first = bus.subscribe(SubscriptionRequest::object(Guid::new(1)));
		let second = bus.subscribe(SubscriptionRequest::object(Guid::new(1)));
		assert_ne!(first, second);
		assert_eq!(bus.active_count(), 2);
	}

	#[test]
	fn unsubscribe_releases_exactly_one_registration() {
		let mut bus = HostBus::new();
		let handle = bus.subscribe(SubscriptionRequest::attribute(Guid::new(1), "progress"));
		assert!(bus.unsubscribe(handle));
		assert!(!bus.unsubscribe(handle));
		assert_eq!(bus.active_count(), 0);
	}

	#[test]
	fn matches_events_against_registrations() {
		let mut bus = HostBus::new();
		bus.subscribe(SubscriptionRequest::attribute(Guid::new(1), "progress"));

		let relevant = ChangeEvent {
			guid: Guid::new(1),
			attribute: Some("progress".to_string()),
		};
		let other_attribute = ChangeEvent {
			guid: Guid::new(1),
			attribute: Some("comment".to_string()),
		};
		let other_object = ChangeEvent {
			guid: Guid::new(2),
			attribute: Some("progress".to_string()),
		};
		assert!(bus.has_subscribers(&relevant));
		assert!(!bus.has_subscribers(&other_attribute));
		assert!(!bus.has_subscribers(&other_object));
	}
}
