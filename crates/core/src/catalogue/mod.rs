//! The option catalogue: read-only collections of customizer options.
//!
//! The catalogue is loaded once at process start and is immutable
//! thereafter, which keeps pricing reproducible for a given (catalogue,
//! configuration) pair - essential for quote consistency. Consumers look
//! options up by ID and must handle the `None` case (a stale configuration
//! referencing a removed entry) by falling back to a documented default
//! rather than failing.
//!
//! [`Catalogue::builtin`] returns the compiled-in catalogue; deployments
//! that curate their own option set load it with [`Catalogue::from_json`]
//! at startup, where structural problems fail fast as [`CatalogueError`].

mod builtin;
pub mod options;

use std::collections::HashSet;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{FinishId, FontId, MaterialId, NfcChipId, ShapeId, TextEffectId};

pub use options::{Durability, Finish, Font, FontCategory, Material, NfcChip, Shape, TextEffect};

/// Slug of the default shape, substituted when a configuration references an
/// unknown shape.
pub const DEFAULT_SHAPE: &str = "business-card";
/// Slug of the default material.
pub const DEFAULT_MATERIAL: &str = "pla";
/// Slug of the default NFC chip.
pub const DEFAULT_NFC_CHIP: &str = "ntag215";
/// Slug of the default finish.
pub const DEFAULT_FINISH: &str = "matte";
/// Slug of the default (no-op) text effect.
pub const DEFAULT_TEXT_EFFECT: &str = "none";
/// Slug of the default font.
pub const DEFAULT_FONT: &str = "inter";

static BUILTIN: LazyLock<Catalogue> = LazyLock::new(builtin::build);

/// Errors that can occur when loading or validating a catalogue.
///
/// These are startup-time failures: a catalogue that loads successfully can
/// never cause the pricing path to fail.
#[derive(Debug, Error)]
pub enum CatalogueError {
    /// The JSON document could not be parsed.
    #[error("failed to parse catalogue document: {0}")]
    Parse(#[from] serde_json::Error),
    /// A collection has no entries.
    #[error("catalogue collection '{0}' is empty")]
    EmptyCollection(&'static str),
    /// Two entries in a collection share an ID.
    #[error("duplicate id '{id}' in catalogue collection '{collection}'")]
    DuplicateId {
        /// Collection containing the duplicate.
        collection: &'static str,
        /// The duplicated slug.
        id: String,
    },
    /// The documented default entry for a collection is missing.
    #[error("catalogue collection '{collection}' is missing default entry '{id}'")]
    MissingDefault {
        /// Collection missing its default.
        collection: &'static str,
        /// The required default slug.
        id: &'static str,
    },
    /// A price modifier is outside its documented range.
    #[error("invalid modifier for '{id}' in '{collection}': {reason}")]
    InvalidModifier {
        /// Collection containing the entry.
        collection: &'static str,
        /// The offending entry's slug.
        id: String,
        /// What was out of range.
        reason: String,
    },
}

/// Read-only collections of customizer options, keyed by slug.
///
/// Collections preserve their declaration order, which is the order the
/// customizer displays them in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalogue {
    shapes: Vec<Shape>,
    materials: Vec<Material>,
    nfc_chips: Vec<NfcChip>,
    finishes: Vec<Finish>,
    text_effects: Vec<TextEffect>,
    fonts: Vec<Font>,
}

impl Catalogue {
    /// The compiled-in catalogue.
    ///
    /// Built on first access and shared for the lifetime of the process.
    #[must_use]
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    /// Assemble a catalogue from collections, validating the structural
    /// contract (non-empty collections, unique slugs, defaults present,
    /// modifiers within range).
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogueError`] describing the first violation found.
    pub fn new(
        shapes: Vec<Shape>,
        materials: Vec<Material>,
        nfc_chips: Vec<NfcChip>,
        finishes: Vec<Finish>,
        text_effects: Vec<TextEffect>,
        fonts: Vec<Font>,
    ) -> Result<Self, CatalogueError> {
        let catalogue = Self {
            shapes,
            materials,
            nfc_chips,
            finishes,
            text_effects,
            fonts,
        };
        catalogue.validate()?;
        Ok(catalogue)
    }

    /// Load a catalogue from a JSON document.
    ///
    /// Intended for startup: a deployment that curates its own option set
    /// loads it once here, and pricing uses the result unchanged for the
    /// life of the process.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogueError`] if the document cannot be parsed or
    /// violates the structural contract.
    pub fn from_json(document: &str) -> Result<Self, CatalogueError> {
        let catalogue: Self = serde_json::from_str(document)?;
        catalogue.validate()?;

        tracing::info!(
            shapes = catalogue.shapes.len(),
            materials = catalogue.materials.len(),
            nfc_chips = catalogue.nfc_chips.len(),
            finishes = catalogue.finishes.len(),
            text_effects = catalogue.text_effects.len(),
            fonts = catalogue.fonts.len(),
            "catalogue loaded"
        );

        Ok(catalogue)
    }

    /// All shapes, in display order.
    #[must_use]
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// All materials, in display order.
    #[must_use]
    pub fn materials(&self) -> &[Material] {
        &self.materials
    }

    /// All NFC chips, in display order.
    #[must_use]
    pub fn nfc_chips(&self) -> &[NfcChip] {
        &self.nfc_chips
    }

    /// All finishes, in display order.
    #[must_use]
    pub fn finishes(&self) -> &[Finish] {
        &self.finishes
    }

    /// All text effects, in display order.
    #[must_use]
    pub fn text_effects(&self) -> &[TextEffect] {
        &self.text_effects
    }

    /// All fonts, in display order.
    #[must_use]
    pub fn fonts(&self) -> &[Font] {
        &self.fonts
    }

    /// Look up a shape by ID.
    #[must_use]
    pub fn shape(&self, id: &ShapeId) -> Option<&Shape> {
        self.shapes.iter().find(|shape| &shape.id == id)
    }

    /// Look up a material by ID.
    #[must_use]
    pub fn material(&self, id: &MaterialId) -> Option<&Material> {
        self.materials.iter().find(|material| &material.id == id)
    }

    /// Look up an NFC chip by ID.
    #[must_use]
    pub fn nfc_chip(&self, id: &NfcChipId) -> Option<&NfcChip> {
        self.nfc_chips.iter().find(|chip| &chip.id == id)
    }

    /// Look up a finish by ID.
    #[must_use]
    pub fn finish(&self, id: &FinishId) -> Option<&Finish> {
        self.finishes.iter().find(|finish| &finish.id == id)
    }

    /// Look up a text effect by ID.
    #[must_use]
    pub fn text_effect(&self, id: &TextEffectId) -> Option<&TextEffect> {
        self.text_effects.iter().find(|effect| &effect.id == id)
    }

    /// Look up a font by ID.
    #[must_use]
    pub fn font(&self, id: &FontId) -> Option<&Font> {
        self.fonts.iter().find(|font| &font.id == id)
    }

    fn validate(&self) -> Result<(), CatalogueError> {
        check_collection("shapes", self.shapes.iter().map(|s| s.id.as_str()))?;
        check_collection("materials", self.materials.iter().map(|m| m.id.as_str()))?;
        check_collection("nfc_chips", self.nfc_chips.iter().map(|c| c.id.as_str()))?;
        check_collection("finishes", self.finishes.iter().map(|f| f.id.as_str()))?;
        check_collection(
            "text_effects",
            self.text_effects.iter().map(|e| e.id.as_str()),
        )?;
        check_collection("fonts", self.fonts.iter().map(|f| f.id.as_str()))?;

        check_default("shapes", DEFAULT_SHAPE, || {
            self.shape(&ShapeId::new(DEFAULT_SHAPE)).is_some()
        })?;
        check_default("materials", DEFAULT_MATERIAL, || {
            self.material(&MaterialId::new(DEFAULT_MATERIAL)).is_some()
        })?;
        check_default("nfc_chips", DEFAULT_NFC_CHIP, || {
            self.nfc_chip(&NfcChipId::new(DEFAULT_NFC_CHIP)).is_some()
        })?;
        check_default("finishes", DEFAULT_FINISH, || {
            self.finish(&FinishId::new(DEFAULT_FINISH)).is_some()
        })?;
        check_default("text_effects", DEFAULT_TEXT_EFFECT, || {
            self.text_effect(&TextEffectId::new(DEFAULT_TEXT_EFFECT))
                .is_some()
        })?;
        check_default("fonts", DEFAULT_FONT, || {
            self.font(&FontId::new(DEFAULT_FONT)).is_some()
        })?;

        for shape in &self.shapes {
            if shape.size_modifier <= rust_decimal::Decimal::ZERO {
                return Err(CatalogueError::InvalidModifier {
                    collection: "shapes",
                    id: shape.id.as_str().to_owned(),
                    reason: format!("size modifier {} must be positive", shape.size_modifier),
                });
            }
        }
        for material in &self.materials {
            if material.price_modifier < rust_decimal::Decimal::ONE {
                return Err(CatalogueError::InvalidModifier {
                    collection: "materials",
                    id: material.id.as_str().to_owned(),
                    reason: format!(
                        "price modifier {} must be at least 1.0",
                        material.price_modifier
                    ),
                });
            }
        }
        for finish in &self.finishes {
            if finish.price_modifier < rust_decimal::Decimal::ONE {
                return Err(CatalogueError::InvalidModifier {
                    collection: "finishes",
                    id: finish.id.as_str().to_owned(),
                    reason: format!(
                        "price modifier {} must be at least 1.0",
                        finish.price_modifier
                    ),
                });
            }
        }
        for effect in &self.text_effects {
            if effect.price_modifier < rust_decimal::Decimal::ZERO {
                return Err(CatalogueError::InvalidModifier {
                    collection: "text_effects",
                    id: effect.id.as_str().to_owned(),
                    reason: format!("surcharge {} must not be negative", effect.price_modifier),
                });
            }
        }
        for chip in &self.nfc_chips {
            if chip.price < rust_decimal::Decimal::ZERO {
                return Err(CatalogueError::InvalidModifier {
                    collection: "nfc_chips",
                    id: chip.id.as_str().to_owned(),
                    reason: format!("price {} must not be negative", chip.price),
                });
            }
        }

        Ok(())
    }
}

/// Check a collection is non-empty and its slugs are unique.
fn check_collection<'a>(
    collection: &'static str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<(), CatalogueError> {
    let mut seen = HashSet::new();
    let mut any = false;
    for id in ids {
        any = true;
        if !seen.insert(id) {
            return Err(CatalogueError::DuplicateId {
                collection,
                id: id.to_owned(),
            });
        }
    }
    if any {
        Ok(())
    } else {
        Err(CatalogueError::EmptyCollection(collection))
    }
}

/// Check the documented default entry exists in its collection.
fn check_default(
    collection: &'static str,
    id: &'static str,
    exists: impl FnOnce() -> bool,
) -> Result<(), CatalogueError> {
    if exists() {
        Ok(())
    } else {
        Err(CatalogueError::MissingDefault { collection, id })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_satisfies_validation() {
        Catalogue::builtin().validate().unwrap();
    }

    #[test]
    fn test_builtin_defaults_resolve() {
        let catalogue = Catalogue::builtin();
        assert!(catalogue.shape(&ShapeId::new(DEFAULT_SHAPE)).is_some());
        assert!(
            catalogue
                .material(&MaterialId::new(DEFAULT_MATERIAL))
                .is_some()
        );
        assert!(
            catalogue
                .nfc_chip(&NfcChipId::new(DEFAULT_NFC_CHIP))
                .is_some()
        );
        assert!(catalogue.finish(&FinishId::new(DEFAULT_FINISH)).is_some());
        assert!(
            catalogue
                .text_effect(&TextEffectId::new(DEFAULT_TEXT_EFFECT))
                .is_some()
        );
        assert!(catalogue.font(&FontId::new(DEFAULT_FONT)).is_some());
    }

    #[test]
    fn test_lookup_unknown_id_is_none() {
        let catalogue = Catalogue::builtin();
        assert!(catalogue.shape(&ShapeId::new("dodecahedron")).is_none());
        assert!(catalogue.material(&MaterialId::new("adamantium")).is_none());
    }

    #[test]
    fn test_json_roundtrip() {
        let catalogue = Catalogue::builtin();
        let json = serde_json::to_string(catalogue).unwrap();
        let reloaded = Catalogue::from_json(&json).unwrap();
        assert_eq!(reloaded.shapes().len(), catalogue.shapes().len());
        assert_eq!(reloaded.fonts().len(), catalogue.fonts().len());
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(matches!(
            Catalogue::from_json("not json"),
            Err(CatalogueError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_default_material_rejected() {
        let catalogue = Catalogue::builtin();
        let mut json: serde_json::Value = serde_json::to_value(catalogue).unwrap();
        let materials = json["materials"].as_array_mut().unwrap();
        materials.retain(|m| m["id"] != DEFAULT_MATERIAL);
        let document = serde_json::to_string(&json).unwrap();

        assert!(matches!(
            Catalogue::from_json(&document),
            Err(CatalogueError::MissingDefault {
                collection: "materials",
                ..
            })
        ));
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let catalogue = Catalogue::builtin();
        let mut json: serde_json::Value = serde_json::to_value(catalogue).unwrap();
        let shapes = json["shapes"].as_array_mut().unwrap();
        let first = shapes.first().cloned().unwrap();
        shapes.push(first);
        let document = serde_json::to_string(&json).unwrap();

        assert!(matches!(
            Catalogue::from_json(&document),
            Err(CatalogueError::DuplicateId {
                collection: "shapes",
                ..
            })
        ));
    }

    #[test]
    fn test_negative_chip_price_rejected() {
        let catalogue = Catalogue::builtin();
        let mut json: serde_json::Value = serde_json::to_value(catalogue).unwrap();
        json["nfc_chips"][0]["price"] = serde_json::Value::String("-1.00".to_owned());
        let document = serde_json::to_string(&json).unwrap();

        assert!(matches!(
            Catalogue::from_json(&document),
            Err(CatalogueError::InvalidModifier {
                collection: "nfc_chips",
                ..
            })
        ));
    }
}
