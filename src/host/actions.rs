use std::collections::{HashMap, VecDeque};

use progress_circle_host_api::{ActionRunner, Guid, HostError};

/// Store mutation a simulated action performs when it runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionEffect {
	/// Write a fixed value into an attribute of every selected object.
	SetAttribute { attribute: String, value: String },
}

/// Server-side action stand-in for the demo host.
///
/// Invocations are validated immediately but their effects are queued; the
/// host applies them to the store after the widget call returns, mirroring
/// the asynchronous round trip of a real action.
#[derive(Debug, Default)]
pub struct SimulatedActions {
	registry: HashMap<String, ActionEffect>,
	pending: VecDeque<(ActionEffect, Vec<Guid>)>,
	invocations: usize,
}

impl SimulatedActions {
	/// Create a runner without registered actions.
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Register a named action.
	pub fn register(&mut self, name: impl Into<String>, effect: ActionEffect) {
		self.registry.insert(name.into(), effect);
	}

	/// Take all queued effects in invocation order.
	pub fn drain_effects(&mut self) -> Vec<(ActionEffect, Vec<Guid>)> {
		self.pending.drain(..).collect()
	}

	/// Total number of accepted invocations.
	#[must_use]
	pub fn invocations(&self) -> usize {
		self.invocations
	}
}

impl ActionRunner for SimulatedActions {
	fn invoke(&mut self, action: &str, guids: &[Guid]) -> Result<(), HostError> {
		let Some(effect) = self.registry.get(action) else {
			return Err(HostError::UnknownAction {
				name: action.to_string(),
			});
		};
		self.invocations += 1;
		log::info!("action '{action}' invoked for {} object(s)", guids.len());
		self.pending.push_back((effect.clone(), guids.to_vec()));
		Ok(())
	}
}
