//! Library exports for embedding the progress circle widget and its demo
//! host services.
//!
//! The root module primarily re-exports types from the workspace crates so
//! that embedders can register and drive the widget without digging through
//! the crate hierarchy. The [`host`] module provides in-process
//! implementations of the host-boundary seams suitable for demos and tests.

pub mod app_dirs;
pub mod host;
pub mod logging;

pub use host::{ActionEffect, HostBus, ObjectStore, SimulatedActions, ViewStack};

pub use progress_circle_host_api::{
	ChangeEvent, Guid, HostContext, Placement, SubscriptionBus, WidgetPlugin, WidgetRegistry,
};
pub use progress_circle_tui::{Ring, RingGauge, RingGaugeFactory, RingState, RingTheme};
pub use progress_circle_widget::{
	ProgressCircleContainer, ProgressCircleProps, ProgressState, StatePolicy,
};
