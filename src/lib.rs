//! Tool-selection and element state for a drawing board UI.
//!
//! Exposes the instrument registry, the selection store, and the drawing
//! element descriptor so that UI layers (toolbar, canvas, input handling)
//! can share one source of truth for which instrument is active and what
//! data an element placement carries.

pub mod config;
pub mod controls;
pub mod element;
pub mod instrument;

pub use config::Config;
pub use controls::{ControlsStore, SubscriptionId};
pub use element::DrawingElementProps;
pub use instrument::{AVAILABLE_INSTRUMENTS, Instrument, InvalidInstrument};
