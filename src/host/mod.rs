//! In-process host runtime backing the demo.
//!
//! Stands in for the client engine a widget plugin normally runs inside:
//! an object store with change notifications, a subscription bus, simulated
//! server-side actions and a navigation stack. Widgets only ever see these
//! through the seams in `progress-circle-host-api`.

pub mod actions;
pub mod bus;
pub mod data;
pub mod navigation;

pub use actions::{ActionEffect, SimulatedActions};
pub use bus::HostBus;
pub use data::ObjectStore;
pub use navigation::{OpenView, ViewStack};
