use ratatui::Frame;
use ratatui::layout::Rect;

use crate::actions::{ActionRunner, Navigator};
use crate::error::WidgetError;
use crate::object::{DataApi, Guid};
use crate::subscription::{ChangeEvent, SubscriptionBus};

/// Static metadata advertising a widget implementation to the host.
pub struct WidgetDescriptor {
    /// Stable identifier used for registration and routing.
    pub id: &'static str,
    /// Human-readable widget name.
    pub name: &'static str,
}

/// Host services handed to a widget for the duration of one lifecycle call.
///
/// Bundling the seams in a context struct keeps the [`WidgetPlugin`] method
/// signatures stable when the host grows new services.
pub struct HostContext<'a> {
    pub data: &'a dyn DataApi,
    pub subscriptions: &'a mut dyn SubscriptionBus,
    pub actions: &'a mut dyn ActionRunner,
    pub navigation: &'a mut dyn Navigator,
}

/// Capability interface implemented by embeddable widgets.
///
/// The host drives the full lifecycle: one `mount`, any number of `update`,
/// `notify`, `click` and `render` calls, then exactly one `unmount`. All
/// calls happen on the UI thread.
pub trait WidgetPlugin {
    /// Static descriptor advertising widget metadata.
    fn descriptor(&self) -> &'static WidgetDescriptor;

    /// Prepare the widget for rendering.
    ///
    /// Configuration problems must not fail the mount; they surface through
    /// the widget's own alert rendering instead.
    fn mount(&mut self, host: HostContext<'_>) -> Result<(), WidgetError>;

    /// Bind the widget to a (possibly absent) context object.
    ///
    /// Called whenever the hosting page changes the object identity. The
    /// widget re-establishes its subscription set against the new object.
    fn update(&mut self, host: HostContext<'_>, object: Option<Guid>);

    /// Deliver a change notification.
    ///
    /// Hosts may fan events out broadly; widgets ignore events outside their
    /// own subscription set.
    fn notify(&mut self, host: HostContext<'_>, event: &ChangeEvent);

    /// Deliver a click on the widget's area.
    fn click(&mut self, host: HostContext<'_>);

    /// Draw the widget into the given area.
    fn render(&mut self, frame: &mut Frame<'_>, area: Rect);

    /// Tear the widget down, releasing subscriptions and drawing resources.
    ///
    /// Must be safe to call after a failed `mount` and idempotent with
    /// respect to resource release.
    fn unmount(&mut self, host: HostContext<'_>);
}
