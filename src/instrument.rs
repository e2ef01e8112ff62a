//! Drawing instrument registry.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Drawing instrument selection.
///
/// The active instrument determines how pointer input on the canvas is
/// interpreted: `Cursor` selects and moves existing elements, `Box` creates
/// a rectangle element from a drag. Serialized names are kebab-case
/// (`cursor`, `box`), matching the toolbar identifiers and the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum Instrument {
    /// Selection/pointer mode (default)
    Cursor,
    /// Rectangle-drawing mode
    Box,
}

/// All valid instruments, in toolbar display order.
///
/// Every [`Instrument`] variant appears here exactly once; toolbar code
/// iterates this instead of hard-coding the variants.
pub const AVAILABLE_INSTRUMENTS: [Instrument; 2] = [Instrument::Cursor, Instrument::Box];

/// Error returned when an instrument name is not in the registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid instrument '{0}' (expected one of: cursor, box)")]
pub struct InvalidInstrument(pub String);

impl Instrument {
    /// Returns the canonical kebab-case name used by toolbars and config files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Instrument::Cursor => "cursor",
            Instrument::Box => "box",
        }
    }
}

impl Default for Instrument {
    fn default() -> Self {
        Instrument::Cursor
    }
}

impl fmt::Display for Instrument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Instrument {
    type Err = InvalidInstrument;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cursor" => Ok(Instrument::Cursor),
            "box" => Ok(Instrument::Box),
            other => Err(InvalidInstrument(other.to_string())),
        }
    }
}
