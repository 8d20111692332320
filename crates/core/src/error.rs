//! Configuration update errors.
//!
//! These cover the one failure mode an update can hit: referencing a
//! catalogue entry that does not exist. Rejecting the update (rather than
//! silently substituting a default) keeps pricing from drifting away from
//! what the customer thinks they selected. The pricing path itself never
//! returns these - a stale ID that slipped in through a restored snapshot is
//! default-substituted there, because a price estimate must always render.

use thiserror::Error;

use crate::types::{FinishId, FontId, MaterialId, NfcChipId, ShapeId, TextEffectId};

/// A configuration update referenced an unknown catalogue entry.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// The shape ID is not in the catalogue.
    #[error("unknown shape: {0}")]
    UnknownShape(ShapeId),
    /// The material ID is not in the catalogue.
    #[error("unknown material: {0}")]
    UnknownMaterial(MaterialId),
    /// The NFC chip ID is not in the catalogue.
    #[error("unknown NFC chip: {0}")]
    UnknownNfcChip(NfcChipId),
    /// The finish ID is not in the catalogue.
    #[error("unknown finish: {0}")]
    UnknownFinish(FinishId),
    /// The text effect ID is not in the catalogue.
    #[error("unknown text effect: {0}")]
    UnknownTextEffect(TextEffectId),
    /// The font ID is not in the catalogue.
    #[error("unknown font: {0}")]
    UnknownFont(FontId),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = ConfigurationError::UnknownMaterial(MaterialId::new("adamantium"));
        assert_eq!(err.to_string(), "unknown material: adamantium");
    }
}
