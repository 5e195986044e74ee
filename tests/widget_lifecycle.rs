//! End-to-end lifecycle of the progress circle inside the in-process host.

use ratatui::Terminal;
use ratatui::backend::TestBackend;

use progress_circle::host::{ActionEffect, HostBus, ObjectStore, SimulatedActions, ViewStack};
use progress_circle::{ProgressCircleContainer, ProgressCircleProps, RingGaugeFactory};
use progress_circle_host_api::{ClickMode, Guid, HostContext, Placement, WidgetPlugin};

struct Host {
	store: ObjectStore,
	bus: HostBus,
	actions: SimulatedActions,
	views: ViewStack,
}

impl Host {
	fn new() -> Self {
		let mut actions = SimulatedActions::new();
		actions.register(
			"ACT_Reset",
			ActionEffect::SetAttribute {
				attribute: "progress".to_string(),
				value: "0".to_string(),
			},
		);
		Self {
			store: ObjectStore::new(),
			bus: HostBus::new(),
			actions,
			views: ViewStack::new(vec!["status.view".to_string()]),
		}
	}

	fn context(&mut self) -> HostContext<'_> {
		HostContext {
			data: &self.store,
			subscriptions: &mut self.bus,
			actions: &mut self.actions,
			navigation: &mut self.views,
		}
	}

	fn seed_job(&mut self, progress: &str) -> Guid {
		let guid = self
			.store
			.create("Deployment.BuildJob", &[("progress", progress), ("capacity", "100")]);
		self.store.drain_events();
		guid
	}

	/// Apply queued action effects and deliver the resulting change events.
	fn settle(&mut self, widget: &mut ProgressCircleContainer) {
		for (effect, guids) in self.actions.drain_effects() {
			match effect {
				ActionEffect::SetAttribute { attribute, value } => {
					for guid in guids {
						self.store.set_attribute(guid, &attribute, value.clone());
					}
				}
			}
		}
		for event in self.store.drain_events() {
			if self.bus.has_subscribers(&event) {
				widget.notify(self.context(), &event);
			}
		}
	}
}

fn props() -> ProgressCircleProps {
	ProgressCircleProps {
		progress_attribute: "progress".to_string(),
		maximum_value_attribute: Some("capacity".to_string()),
		animate: false,
		..ProgressCircleProps::default()
	}
}

fn render_to_text(widget: &mut ProgressCircleContainer) -> String {
	let backend = TestBackend::new(72, 12);
	let mut terminal = Terminal::new(backend).expect("terminal");
	terminal
		.draw(|frame| widget.render(frame, frame.area()))
		.expect("draw frame");
	let buffer = terminal.backend().buffer();
	let mut lines = Vec::new();
	for y in 0..buffer.area.height {
		let mut line = String::new();
		for x in 0..buffer.area.width {
			line.push_str(buffer[(x, y)].symbol());
		}
		lines.push(line);
	}
	lines.join("\n")
}

#[test]
fn renders_bound_progress_through_the_ring() {
	let mut host = Host::new();
	let guid = host.seed_job("80");
	let mut widget =
		ProgressCircleContainer::new(props(), Box::new(RingGaugeFactory));

	widget.mount(host.context()).expect("mount");
	widget.update(host.context(), Some(guid));

	assert!(render_to_text(&mut widget).contains("80%"));

	widget.unmount(host.context());
	assert_eq!(host.bus.active_count(), 0);
}

#[test]
fn attribute_changes_flow_into_the_rendered_label() {
	let mut host = Host::new();
	let guid = host.seed_job("80");
	let mut widget =
		ProgressCircleContainer::new(props(), Box::new(RingGaugeFactory));
	widget.mount(host.context()).expect("mount");
	widget.update(host.context(), Some(guid));

	host.store.set_numeric(guid, "progress", 45.0);
	for event in host.store.drain_events() {
		if host.bus.has_subscribers(&event) {
			widget.notify(host.context(), &event);
		}
	}

	assert!(render_to_text(&mut widget).contains("45%"));
}

#[test]
fn microflow_click_round_trips_through_the_host() {
	let mut host = Host::new();
	let guid = host.seed_job("80");
	let mut widget = ProgressCircleContainer::new(
		ProgressCircleProps {
			on_click: ClickMode::CallMicroflow,
			microflow: "ACT_Reset".to_string(),
			..props()
		},
		Box::new(RingGaugeFactory),
	);
	widget.mount(host.context()).expect("mount");
	widget.update(host.context(), Some(guid));

	widget.click(host.context());
	host.settle(&mut widget);

	assert_eq!(host.store.numeric(guid, "progress"), Some(0.0));
	let rendered = render_to_text(&mut widget);
	assert!(rendered.contains("0%"));
	assert!(!rendered.contains("80%"));
	assert_eq!(widget.runtime_alert(), None);
}

#[test]
fn unknown_microflow_click_shows_the_host_error() {
	let mut host = Host::new();
	let guid = host.seed_job("80");
	let mut widget = ProgressCircleContainer::new(
		ProgressCircleProps {
			on_click: ClickMode::CallMicroflow,
			microflow: "ACT_Missing".to_string(),
			..props()
		},
		Box::new(RingGaugeFactory),
	);
	widget.mount(host.context()).expect("mount");
	widget.update(host.context(), Some(guid));

	widget.click(host.context());

	let rendered = render_to_text(&mut widget);
	assert!(rendered.contains("Error while executing microflow ACT_Missing"));
}

#[test]
fn page_click_opens_the_view_with_placement() {
	let mut host = Host::new();
	let guid = host.seed_job("80");
	let mut widget = ProgressCircleContainer::new(
		ProgressCircleProps {
			on_click: ClickMode::ShowPage,
			page: "status.view".to_string(),
			page_placement: Placement::Modal,
			..props()
		},
		Box::new(RingGaugeFactory),
	);
	widget.mount(host.context()).expect("mount");
	widget.update(host.context(), Some(guid));

	widget.click(host.context());

	let view = host.views.current().expect("view opened");
	assert_eq!(view.name, "status.view");
	assert_eq!(view.options.context_guid, guid);
	assert_eq!(view.options.placement, Placement::Modal);
}

#[test]
fn incomplete_click_configuration_renders_the_alert_shell() {
	let mut host = Host::new();
	let guid = host.seed_job("80");
	let mut widget = ProgressCircleContainer::new(
		ProgressCircleProps {
			on_click: ClickMode::ShowPage,
			..props()
		},
		Box::new(RingGaugeFactory),
	);
	widget.mount(host.context()).expect("mount");
	widget.update(host.context(), Some(guid));

	widget.click(host.context());

	assert!(host.views.current().is_none());
	let rendered = render_to_text(&mut widget);
	assert!(rendered.contains("on click page is required"));
	// The inert shell replaces the gauge entirely.
	assert!(!rendered.contains("80%"));
}
