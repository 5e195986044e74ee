use std::collections::{HashMap, VecDeque};

use progress_circle_host_api::{ChangeEvent, DataApi, DataObject, Guid, numeric_attribute};

/// One business-data record held by the demo host.
#[derive(Debug, Clone)]
pub struct StoredObject {
	guid: Guid,
	entity: String,
	attributes: HashMap<String, String>,
}

impl DataObject for StoredObject {
	fn guid(&self) -> Guid {
		self.guid
	}

	fn entity(&self) -> &str {
		&self.entity
	}

	fn get(&self, attribute: &str) -> Option<String> {
		self.attributes.get(attribute).cloned()
	}
}

/// Mutable object snapshot queueing a [`ChangeEvent`] per mutation.
///
/// Events accumulate until the host drains and routes them, which keeps
/// mutation sites free of any knowledge about mounted widgets.
#[derive(Debug, Default)]
pub struct ObjectStore {
	objects: HashMap<Guid, StoredObject>,
	next_guid: u64,
	pending: VecDeque<ChangeEvent>,
}

impl ObjectStore {
	/// Create an empty store.
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Create an object and return its identifier.
	pub fn create(&mut self, entity: &str, attributes: &[(&str, &str)]) -> Guid {
		self.next_guid += 1;
		let guid = Guid::new(self.next_guid);
		self.objects.insert(
			guid,
			StoredObject {
				guid,
				entity: entity.to_string(),
				attributes: attributes
					.iter()
					.map(|(name, value)| (name.to_string(), value.to_string()))
					.collect(),
			},
		);
		guid
	}

	/// Set an attribute, queueing an attribute-level change event.
	///
	/// Returns `false` when the object does not exist.
	pub fn set_attribute(&mut self, guid: Guid, attribute: &str, value: impl Into<String>) -> bool {
		let Some(object) = self.objects.get_mut(&guid) else {
			return false;
		};
		object.attributes.insert(attribute.to_string(), value.into());
		self.pending.push_back(ChangeEvent {
			guid,
			attribute: Some(attribute.to_string()),
		});
		true
	}

	/// Set a numeric attribute through the standard string encoding.
	pub fn set_numeric(&mut self, guid: Guid, attribute: &str, value: f64) -> bool {
		self.set_attribute(guid, attribute, value.to_string())
	}

	/// Queue an object-level change event, as a commit or refresh would.
	pub fn touch(&mut self, guid: Guid) {
		if self.objects.contains_key(&guid) {
			self.pending.push_back(ChangeEvent {
				guid,
				attribute: None,
			});
		}
	}

	/// Read an attribute as a number, `None` when absent or non-numeric.
	#[must_use]
	pub fn numeric(&self, guid: Guid, attribute: &str) -> Option<f64> {
		self.object(guid)
			.and_then(|object| numeric_attribute(object, attribute))
	}

	/// Take all queued change events in arrival order.
	pub fn drain_events(&mut self) -> Vec<ChangeEvent> {
		self.pending.drain(..).collect()
	}
}

impl DataApi for ObjectStore {
	fn object(&self, guid: Guid) -> Option<&dyn DataObject> {
		self.objects.get(&guid).map(|object| object as &dyn DataObject)
	}
}
