//! Shared interfaces between widget plugins and the host runtime.
//!
//! A host embeds widgets through the [`WidgetPlugin`] capability trait and
//! hands them narrow views of its own services: object data ([`DataApi`]),
//! change notifications ([`SubscriptionBus`]), server-side actions
//! ([`ActionRunner`]) and navigation ([`Navigator`]). Widgets never reach
//! around these seams, which keeps plugin code testable against mock hosts.

pub mod actions;
pub mod error;
pub mod object;
pub mod registry;
pub mod subscription;
pub mod types;
pub mod widget;

pub use actions::{ActionRunner, Navigator, Placement, ViewOptions};
pub use error::{HostError, WidgetError, WidgetRegistryError};
pub use object::{DataApi, DataObject, Guid, numeric_attribute};
pub use registry::{RegisteredWidget, WidgetRegistry};
pub use subscription::{ChangeEvent, SubscriptionBus, SubscriptionHandle, SubscriptionRequest};
pub use types::{BootstrapStyle, ClickMode, TextSize};
pub use widget::{HostContext, WidgetDescriptor, WidgetPlugin};
