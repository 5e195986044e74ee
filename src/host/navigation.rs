use progress_circle_host_api::{HostError, Navigator, ViewOptions};

/// A view the navigator has opened.
#[derive(Debug, Clone, PartialEq)]
pub struct OpenView {
	pub name: String,
	pub options: ViewOptions,
}

/// Navigation stand-in for the demo host.
///
/// Knows a fixed set of view names; opening one pushes it on a stack the
/// renderer turns into content, popup or modal chrome. Unknown names fail
/// the same way the real engine rejects a missing page.
#[derive(Debug, Default)]
pub struct ViewStack {
	known: Vec<String>,
	open: Vec<OpenView>,
}

impl ViewStack {
	/// Create a navigator accepting the given view names.
	#[must_use]
	pub fn new(known: Vec<String>) -> Self {
		Self {
			known,
			open: Vec::new(),
		}
	}

	/// The view currently on top, if any.
	#[must_use]
	pub fn current(&self) -> Option<&OpenView> {
		self.open.last()
	}

	/// Close the top view. Returns `false` when nothing was open.
	pub fn close(&mut self) -> bool {
		self.open.pop().is_some()
	}
}

impl Navigator for ViewStack {
	fn open_view(&mut self, view: &str, options: ViewOptions) -> Result<(), HostError> {
		if !self.known.iter().any(|known| known == view) {
			return Err(HostError::UnknownView {
				name: view.to_string(),
			});
		}
		log::info!(
			"view '{view}' opened for {} ({:?})",
			options.context_guid,
			options.placement
		);
		self.open.push(OpenView {
			name: view.to_string(),
			options,
		});
		Ok(())
	}
}
