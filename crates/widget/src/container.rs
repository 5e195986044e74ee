use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

use progress_circle_host_api::{
    ChangeEvent, ClickMode, DataApi, Guid, HostContext, SubscriptionHandle, SubscriptionRequest,
    ViewOptions, WidgetDescriptor, WidgetError, WidgetPlugin, numeric_attribute,
};

use crate::alert::render_alert;
use crate::gauge::{Gauge, GaugeFactory, GaugeOptions};
use crate::props::ProgressCircleProps;
use crate::state::ProgressState;

static DESCRIPTOR: WidgetDescriptor = WidgetDescriptor {
    id: "progress-circle",
    name: "Progress circle",
};

/// Descriptor the container registers under.
#[must_use]
pub fn descriptor() -> &'static WidgetDescriptor {
    &DESCRIPTOR
}

/// Object identity the widget is currently bound to.
#[derive(Debug, Clone, PartialEq, Eq)]
struct BoundObject {
    guid: Guid,
    entity: String,
}

/// Lifecycle glue binding host data to the ring gauge.
///
/// The container owns the subscription set for its bound object, recomputes
/// the display state on every notification, dispatches clicks to the host's
/// action or navigation service, and releases the gauge exactly once on
/// teardown.
pub struct ProgressCircleContainer {
    props: ProgressCircleProps,
    factory: Box<dyn GaugeFactory>,
    gauge: Option<Box<dyn Gauge>>,
    bound: Option<BoundObject>,
    value: Option<f64>,
    maximum: f64,
    config_alert: Option<String>,
    runtime_alert: Option<String>,
    subscriptions: Vec<SubscriptionHandle>,
}

impl ProgressCircleContainer {
    /// Create an unmounted container with the given configuration.
    #[must_use]
    pub fn new(props: ProgressCircleProps, factory: Box<dyn GaugeFactory>) -> Self {
        let maximum = props.static_maximum_value;
        Self {
            props,
            factory,
            gauge: None,
            bound: None,
            value: None,
            maximum,
            config_alert: None,
            runtime_alert: None,
            subscriptions: Vec::new(),
        }
    }

    /// The configuration alert, when the click setup is incomplete.
    #[must_use]
    pub fn config_alert(&self) -> Option<&str> {
        self.config_alert.as_deref()
    }

    /// The alert raised by the last failed click dispatch, if any.
    #[must_use]
    pub fn runtime_alert(&self) -> Option<&str> {
        self.runtime_alert.as_deref()
    }

    fn reset_subscriptions(&mut self, host: &mut HostContext<'_>) {
        for handle in self.subscriptions.drain(..) {
            if !host.subscriptions.unsubscribe(handle) {
                log::warn!("stale subscription handle {}", handle.raw());
            }
        }
        let Some(bound) = &self.bound else {
            return;
        };
        let guid = bound.guid;
        self.subscriptions
            .push(host.subscriptions.subscribe(SubscriptionRequest::object(guid)));
        self.subscriptions.push(
            host.subscriptions
                .subscribe(SubscriptionRequest::attribute(
                    guid,
                    self.props.progress_attribute.clone(),
                )),
        );
        if let Some(maximum_attribute) = &self.props.maximum_value_attribute {
            self.subscriptions.push(
                host.subscriptions
                    .subscribe(SubscriptionRequest::attribute(
                        guid,
                        maximum_attribute.clone(),
                    )),
            );
        }
    }

    fn read_values(&mut self, data: &dyn DataApi) {
        let object = self.bound.as_ref().and_then(|bound| data.object(bound.guid));
        match object {
            Some(object) => {
                self.value = numeric_attribute(object, &self.props.progress_attribute);
                self.maximum = self
                    .props
                    .maximum_value_attribute
                    .as_deref()
                    .and_then(|attribute| numeric_attribute(object, attribute))
                    .unwrap_or(self.props.static_maximum_value);
            }
            None => {
                self.value = None;
                self.maximum = self.props.static_maximum_value;
            }
        }
    }

    fn apply_state(&mut self) {
        let state = ProgressState::compute(self.value, self.maximum, self.props.policy);
        if let Some(warning) = state.warning {
            log::warn!("{}: {warning}", DESCRIPTOR.id);
        }
        if let Some(gauge) = &mut self.gauge {
            gauge.set_text(&state.display_text);
            gauge.animate(state.animation_fraction);
        }
    }

    fn event_is_relevant(&self, event: &ChangeEvent) -> bool {
        let Some(bound) = &self.bound else {
            return false;
        };
        if event.guid != bound.guid {
            return false;
        }
        match &event.attribute {
            None => true,
            Some(attribute) => {
                *attribute == self.props.progress_attribute
                    || Some(attribute.as_str()) == self.props.maximum_value_attribute.as_deref()
            }
        }
    }

    fn click_microflow(&mut self, host: &mut HostContext<'_>) {
        let Some(bound) = &self.bound else {
            return;
        };
        if self.props.microflow.is_empty() {
            return;
        }
        let name = self.props.microflow.clone();
        match host.actions.invoke(&name, &[bound.guid]) {
            Ok(()) => self.runtime_alert = None,
            Err(error) => {
                self.runtime_alert =
                    Some(format!("Error while executing microflow {name}: {error}"));
            }
        }
    }

    fn click_page(&mut self, host: &mut HostContext<'_>) {
        let Some(bound) = &self.bound else {
            return;
        };
        if self.props.page.is_empty() {
            return;
        }
        let name = self.props.page.clone();
        let options = ViewOptions {
            context_guid: bound.guid,
            context_entity: bound.entity.clone(),
            placement: self.props.page_placement,
        };
        match host.navigation.open_view(&name, options) {
            Ok(()) => self.runtime_alert = None,
            Err(error) => {
                self.runtime_alert = Some(format!("Error while opening page {name}: {error}"));
            }
        }
    }

    fn release_gauge(&mut self) {
        if let Some(mut gauge) = self.gauge.take() {
            gauge.dispose();
        }
    }
}

impl WidgetPlugin for ProgressCircleContainer {
    fn descriptor(&self) -> &'static WidgetDescriptor {
        &DESCRIPTOR
    }

    fn mount(&mut self, _host: HostContext<'_>) -> Result<(), WidgetError> {
        self.config_alert = self.props.validation_alert();
        let options = GaugeOptions {
            animate: self.props.animate,
            text_size: self.props.text_size,
            bootstrap_style: self.props.bootstrap_style,
            positive_color: self.props.positive_color.clone(),
            negative_color: self.props.negative_color.clone(),
        };
        self.gauge = Some(self.factory.create(options)?);
        log::debug!("{} mounted", DESCRIPTOR.id);
        self.apply_state();
        Ok(())
    }

    fn update(&mut self, mut host: HostContext<'_>, object: Option<Guid>) {
        self.bound = object.and_then(|guid| {
            host.data.object(guid).map(|object| BoundObject {
                guid,
                entity: object.entity().to_string(),
            })
        });
        self.reset_subscriptions(&mut host);
        self.read_values(host.data);
        self.apply_state();
    }

    fn notify(&mut self, host: HostContext<'_>, event: &ChangeEvent) {
        if !self.event_is_relevant(event) {
            return;
        }
        self.read_values(host.data);
        self.apply_state();
    }

    fn click(&mut self, mut host: HostContext<'_>) {
        if self.config_alert.is_some() {
            return;
        }
        match self.props.on_click {
            ClickMode::DoNothing => {}
            ClickMode::CallMicroflow => self.click_microflow(&mut host),
            ClickMode::ShowPage => self.click_page(&mut host),
        }
    }

    fn render(&mut self, frame: &mut Frame<'_>, area: Rect) {
        if let Some(message) = &self.config_alert {
            render_alert(frame, area, message);
            return;
        }
        let (gauge_area, alert_area) = if self.runtime_alert.is_some() && area.height > 1 {
            let split = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(1), Constraint::Length(1)])
                .split(area);
            (split[0], Some(split[1]))
        } else {
            (area, None)
        };
        if let Some(gauge) = &mut self.gauge {
            gauge.tick();
            gauge.render(frame, gauge_area);
        }
        if let (Some(message), Some(alert_area)) = (&self.runtime_alert, alert_area) {
            render_alert(frame, alert_area, message);
        }
    }

    fn unmount(&mut self, mut host: HostContext<'_>) {
        self.bound = None;
        self.reset_subscriptions(&mut host);
        self.release_gauge();
        log::debug!("{} unmounted", DESCRIPTOR.id);
    }
}

impl Drop for ProgressCircleContainer {
    fn drop(&mut self) {
        self.release_gauge();
    }
}
