//! Configuration type definitions.

use crate::instrument::Instrument;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Instrument selection settings.
///
/// Controls which instrument the session starts with. Users switch
/// instruments at runtime through the toolbar; this only sets the initial
/// selection.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema)]
pub struct ControlsConfig {
    /// Instrument selected when the session opens: `cursor` or `box`
    #[serde(default = "default_instrument")]
    pub default_instrument: Instrument,
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            default_instrument: default_instrument(),
        }
    }
}

fn default_instrument() -> Instrument {
    Instrument::Cursor
}
