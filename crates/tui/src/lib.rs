//! Terminal rendering backend for the progress circle widget.
//!
//! Draws the ring on a Braille canvas: a muted full-circle trail with the
//! progress arc swept over it and the display text at the center. The
//! [`RingGauge`] adapter implements the widget crate's `Gauge` seam so the
//! container stays independent of the drawing layer.

/// Ring gauge adapter and factory.
pub mod gauge;
/// Canvas widget drawing the trail, arc and center label.
pub mod ring;
/// Retained animation state stepping between sweep targets.
pub mod state;
/// Color palettes for the bootstrap-inspired styles.
pub mod theme;

pub use gauge::{RingGauge, RingGaugeFactory};
pub use ring::Ring;
pub use state::RingState;
pub use theme::RingTheme;
