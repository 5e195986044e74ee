//! Circular progress widget.
//!
//! The widget binds a numeric attribute of a host data object to an animated
//! ring gauge. [`state`] holds the pure value-to-display computation,
//! [`props`] the designer-facing configuration, [`container`] the lifecycle
//! glue that subscribes to host data and dispatches click actions through the
//! seams defined in `progress-circle-host-api`. The drawing primitive itself
//! is injected through the [`gauge`] seam so rendering backends and tests can
//! supply their own.

pub mod alert;
pub mod container;
pub mod gauge;
pub mod props;
pub mod state;

pub use container::{ProgressCircleContainer, descriptor};
pub use gauge::{Gauge, GaugeFactory, GaugeOptions};
pub use props::ProgressCircleProps;
pub use state::{ProgressState, ProgressWarning, StatePolicy};
