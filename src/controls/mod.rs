//! Instrument selection state.
//!
//! This module holds the session-scoped "controls" state: which drawing
//! instrument is currently active. Toolbar and canvas components read it,
//! toolbar clicks and keyboard shortcuts write it through the single setter,
//! and subscribers are notified synchronously after each change so dependent
//! UI (toolbar highlighting, cursor icon, pointer dispatch) stays consistent.

mod store;

pub use store::{ControlsStore, SubscriptionId};
