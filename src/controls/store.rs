//! Selection store for the active drawing instrument.

use crate::config::Config;
use crate::instrument::{Instrument, InvalidInstrument};
use log::{debug, warn};
use std::fmt;

/// Handle identifying a registered subscriber.
///
/// Returned by [`ControlsStore::subscribe`] and consumed by
/// [`ControlsStore::unsubscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type InstrumentCallback = Box<dyn FnMut(Instrument)>;

/// Shared state holder for the currently selected instrument.
///
/// Exactly one instrument is selected at any time; a fresh store starts on
/// [`Instrument::Cursor`]. The store is an explicit value passed to the
/// components that need it rather than a process global, so tests and
/// embedders construct their own instances.
///
/// All access happens on the UI thread: mutation goes through the setters,
/// and subscribers run synchronously inside them, so reads always observe
/// the most recently set value.
pub struct ControlsStore {
    selected_instrument: Instrument,
    subscribers: Vec<(SubscriptionId, InstrumentCallback)>,
    next_subscription_id: u64,
}

impl ControlsStore {
    /// Creates a store with the default instrument (`cursor`) selected.
    pub fn new() -> Self {
        Self::with_instrument(Instrument::default())
    }

    /// Creates a store with a specific initial instrument.
    pub fn with_instrument(instrument: Instrument) -> Self {
        Self {
            selected_instrument: instrument,
            subscribers: Vec::new(),
            next_subscription_id: 0,
        }
    }

    /// Creates a store whose initial instrument comes from the config file.
    pub fn from_config(config: &Config) -> Self {
        Self::with_instrument(config.controls.default_instrument)
    }

    /// Returns the currently selected instrument.
    pub fn selected_instrument(&self) -> Instrument {
        self.selected_instrument
    }

    /// Replaces the selected instrument and notifies all subscribers.
    ///
    /// Setting the already-selected instrument is allowed and still
    /// notifies, so subscribers never miss a toolbar click.
    pub fn set_instrument(&mut self, instrument: Instrument) {
        debug!(
            "Instrument changed: {} -> {}",
            self.selected_instrument, instrument
        );
        self.selected_instrument = instrument;
        self.notify();
    }

    /// Sets the instrument from its toolbar/config name.
    ///
    /// Names outside the registry are rejected with [`InvalidInstrument`]
    /// and the selection is left untouched; no subscriber fires.
    pub fn set_instrument_by_name(&mut self, name: &str) -> Result<Instrument, InvalidInstrument> {
        let instrument: Instrument = name.parse().inspect_err(|err| {
            warn!("Rejected instrument selection: {err}");
        })?;
        self.set_instrument(instrument);
        Ok(instrument)
    }

    /// Registers a callback invoked after every successful instrument change.
    ///
    /// Callbacks run synchronously in registration order with the new
    /// instrument value. The returned id cancels the registration via
    /// [`unsubscribe`](Self::unsubscribe).
    pub fn subscribe(&mut self, callback: impl FnMut(Instrument) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription_id);
        self.next_subscription_id += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Removes a subscriber; returns whether the id was still registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
        self.subscribers.len() != before
    }

    fn notify(&mut self) {
        let instrument = self.selected_instrument;
        for (_, callback) in &mut self.subscribers {
            callback(instrument);
        }
    }
}

impl Default for ControlsStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ControlsStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ControlsStore")
            .field("selected_instrument", &self.selected_instrument)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
