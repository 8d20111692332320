//! Catalogue option definitions.
//!
//! Each option is one immutable, pre-defined choice a customer can make in
//! the product customizer, carrying its price modifier and any physical
//! attributes the preview renderer needs.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{
    Dimensions, FinishId, FontId, HexColor, MaterialId, NfcChipId, ShapeId, TextEffectId,
};

// =============================================================================
// Shape
// =============================================================================

/// A product shape (the printed body's outline).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shape {
    /// Shape ID (slug).
    pub id: ShapeId,
    /// Display name.
    pub name: String,
    /// Customer-facing description.
    pub description: String,
    /// Default physical dimensions of the printed body.
    pub dimensions: Dimensions,
    /// Multiplicative price factor applied to the base price.
    ///
    /// Dimensionless and positive, typically 0.7 - 1.1: smaller shapes use
    /// less material and print faster.
    pub size_modifier: Decimal,
}

// =============================================================================
// Material
// =============================================================================

/// Durability tier of a material.
///
/// Informational only: shown next to the material in the customizer, never
/// consumed by pricing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Durability {
    #[default]
    Standard,
    High,
    Premium,
}

/// A print material.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Material {
    /// Material ID (slug).
    pub id: MaterialId,
    /// Display name.
    pub name: String,
    /// Customer-facing description.
    pub description: String,
    /// Multiplicative price factor applied to the base price (>= 1.0).
    pub price_modifier: Decimal,
    /// Swatch colors this material is stocked in.
    ///
    /// The customizer offers these as one-click swatches; direct hex entry
    /// outside this set is still accepted by the engine.
    pub swatches: Vec<HexColor>,
    /// Durability tier (informational).
    pub durability: Durability,
}

// =============================================================================
// NFC Chip
// =============================================================================

/// An embeddable NFC chip.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NfcChip {
    /// Chip ID (slug).
    pub id: NfcChipId,
    /// Display name.
    pub name: String,
    /// Usable memory in bytes.
    pub memory_bytes: u32,
    /// Maximum URL length the chip can encode, in characters.
    pub url_capacity_chars: u32,
    /// Flat price added per unit (currency units).
    pub price: Decimal,
    /// Customer-facing description.
    pub description: String,
}

// =============================================================================
// Finish
// =============================================================================

/// A surface finish.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Finish {
    /// Finish ID (slug).
    pub id: FinishId,
    /// Display name.
    pub name: String,
    /// Customer-facing description.
    pub description: String,
    /// Multiplicative price factor (>= 1.0).
    ///
    /// Carried in the catalogue and displayed in the customizer; the current
    /// pricing algorithm does not consume it.
    pub price_modifier: Decimal,
}

// =============================================================================
// Text Effect
// =============================================================================

/// A treatment applied to custom text (raised, engraved, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextEffect {
    /// Text effect ID (slug).
    pub id: TextEffectId,
    /// Display name.
    pub name: String,
    /// Customer-facing description.
    pub description: String,
    /// Flat surcharge added on top of the text base fee (>= 0).
    pub price_modifier: Decimal,
}

// =============================================================================
// Font
// =============================================================================

/// Typeface category for customizer fonts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontCategory {
    Sans,
    Serif,
    Mono,
    Display,
}

/// A font available for custom text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Font {
    /// Font ID (slug).
    pub id: FontId,
    /// Display name.
    pub name: String,
    /// Typeface category.
    pub category: FontCategory,
}
