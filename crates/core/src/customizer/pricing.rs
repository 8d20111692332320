//! Deterministic pricing for a configuration.
//!
//! Pricing is a pure function of (catalogue, configuration): there is no
//! cache and no incremental state, so the estimate can never drift from the
//! selection driving it. The computation is cheap enough to rerun on every
//! option click.
//!
//! The one failure mode - a configuration referencing a catalogue entry
//! that no longer exists (a restored snapshot after a catalogue change) -
//! is handled by substituting the documented default entry and logging a
//! warning. A price must always be produced for the customizer to stay
//! usable; a missing estimate costs more than a defaulted one.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::catalogue::{Catalogue, DEFAULT_MATERIAL, DEFAULT_NFC_CHIP, DEFAULT_SHAPE};
use crate::customizer::configuration::{Configuration, DesignUpload};
use crate::types::{CurrencyCode, MaterialId, NfcChipId, Price, ShapeId, round_currency};

// =============================================================================
// Constants
// =============================================================================

/// Base price per unit before any modifier (10.00).
pub const BASE_PRICE: Decimal = Decimal::from_parts(1000, 0, 0, false, 2);

/// Flat fee for any non-empty custom text (3.00), before the effect
/// surcharge.
pub const TEXT_BASE_FEE: Decimal = Decimal::from_parts(300, 0, 0, false, 2);

/// Flat fee for an uploaded custom design (5.00).
pub const DESIGN_UPLOAD_FEE: Decimal = Decimal::from_parts(500, 0, 0, false, 2);

/// Chip price used when neither the selected chip nor the default chip
/// resolves (2.50).
pub const FALLBACK_NFC_CHIP_PRICE: Decimal = Decimal::from_parts(250, 0, 0, false, 2);

/// Display ceiling for the estimated price range: `max` is the per-unit
/// price times this factor (1.20). Kept for parity with the published
/// estimator; it corresponds to no catalogue modifier.
pub const RANGE_CEILING_FACTOR: Decimal = Decimal::from_parts(120, 0, 0, false, 2);

/// A quantity discount tier.
struct QuantityTier {
    /// Minimum quantity for this tier (inclusive).
    min_quantity: u32,
    /// Per-unit discount rate.
    rate: Decimal,
}

/// Discount tiers, highest threshold first. The first matching tier wins;
/// tiers are not cumulative.
const QUANTITY_TIERS: [QuantityTier; 3] = [
    QuantityTier {
        min_quantity: 100,
        rate: Decimal::from_parts(25, 0, 0, false, 2),
    },
    QuantityTier {
        min_quantity: 50,
        rate: Decimal::from_parts(15, 0, 0, false, 2),
    },
    QuantityTier {
        min_quantity: 25,
        rate: Decimal::from_parts(10, 0, 0, false, 2),
    },
];

/// The per-unit discount rate for a quantity.
#[must_use]
pub fn discount_rate(quantity: u32) -> Decimal {
    QUANTITY_TIERS
        .iter()
        .find(|tier| quantity >= tier.min_quantity)
        .map_or(Decimal::ZERO, |tier| tier.rate)
}

// =============================================================================
// Breakdown
// =============================================================================

/// Itemized pricing for a configuration.
///
/// Recomputed on every query, never stored. All amounts are per unit
/// except `total`, which covers the full order quantity and is the only
/// rounded figure (two decimals, midpoint away from zero).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceBreakdown {
    /// Constant base price per unit.
    pub base_price: Decimal,
    /// Multiplicative factor from the selected shape.
    pub size_modifier: Decimal,
    /// Multiplicative factor from the selected material.
    pub material_modifier: Decimal,
    /// Flat price of the selected NFC chip.
    pub nfc_chip_price: Decimal,
    /// Text fee plus effect surcharge; zero when the text content is blank.
    pub text_price: Decimal,
    /// Design fee; zero when no design asset is attached.
    pub design_upload_price: Decimal,
    /// Per-unit price before the quantity discount.
    pub subtotal_per_unit: Decimal,
    /// Discount rate from the quantity tier.
    pub discount_rate: Decimal,
    /// Per-unit discount amount (`subtotal_per_unit` x `discount_rate`).
    pub quantity_discount: Decimal,
    /// Order quantity the total covers (after the defensive minimum of 1).
    pub quantity: u32,
    /// Rounded total for the full order.
    pub total: Decimal,
    /// Currency all amounts are denominated in.
    pub currency_code: CurrencyCode,
}

impl PriceBreakdown {
    /// Discounted per-unit price, rounded for display and quoting.
    #[must_use]
    pub fn per_unit(&self) -> Decimal {
        round_currency(self.subtotal_per_unit - self.quantity_discount)
    }
}

/// Displayed price estimate for the current configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PriceRange {
    /// Floor of the estimate: the discounted per-unit price.
    pub min: Price,
    /// Ceiling of the estimate: per-unit price plus 20%.
    pub max: Price,
    /// Discounted per-unit price.
    pub per_unit: Price,
}

// =============================================================================
// Calculation
// =============================================================================

/// Compute the itemized price for a configuration.
///
/// Deterministic for a given (catalogue, configuration) pair. Never fails:
/// unresolvable catalogue references are default-substituted (with a
/// warning) and a quantity of zero is priced as one.
#[must_use]
pub fn calculate_price(catalogue: &Catalogue, config: &Configuration) -> PriceBreakdown {
    let size_modifier = catalogue.shape(&config.shape).map_or_else(
        || {
            tracing::warn!(shape = %config.shape, "unknown shape, substituting default");
            catalogue
                .shape(&ShapeId::new(DEFAULT_SHAPE))
                .map_or(Decimal::ONE, |shape| shape.size_modifier)
        },
        |shape| shape.size_modifier,
    );

    let material_modifier = catalogue.material(&config.material).map_or_else(
        || {
            tracing::warn!(material = %config.material, "unknown material, substituting default");
            catalogue
                .material(&MaterialId::new(DEFAULT_MATERIAL))
                .map_or(Decimal::ONE, |material| material.price_modifier)
        },
        |material| material.price_modifier,
    );

    let nfc_chip_price = catalogue.nfc_chip(&config.nfc_chip).map_or_else(
        || {
            tracing::warn!(nfc_chip = %config.nfc_chip, "unknown NFC chip, substituting default");
            catalogue
                .nfc_chip(&NfcChipId::new(DEFAULT_NFC_CHIP))
                .map_or(FALLBACK_NFC_CHIP_PRICE, |chip| chip.price)
        },
        |chip| chip.price,
    );

    let text_price = if config.text.content.trim().is_empty() {
        Decimal::ZERO
    } else {
        let effect_surcharge = catalogue.text_effect(&config.text.effect).map_or_else(
            || {
                tracing::warn!(
                    effect = %config.text.effect,
                    "unknown text effect, pricing text without surcharge"
                );
                Decimal::ZERO
            },
            |effect| effect.price_modifier,
        );
        TEXT_BASE_FEE + effect_surcharge
    };

    let design_upload_price = if config.design.as_ref().is_some_and(DesignUpload::has_asset) {
        DESIGN_UPLOAD_FEE
    } else {
        Decimal::ZERO
    };

    let subtotal_per_unit = BASE_PRICE * size_modifier * material_modifier
        + nfc_chip_price
        + text_price
        + design_upload_price;

    let quantity = config.quantity.max(1);
    let discount_rate = discount_rate(quantity);
    let quantity_discount = subtotal_per_unit * discount_rate;

    let total = round_currency((subtotal_per_unit - quantity_discount) * Decimal::from(quantity));

    PriceBreakdown {
        base_price: BASE_PRICE,
        size_modifier,
        material_modifier,
        nfc_chip_price,
        text_price,
        design_upload_price,
        subtotal_per_unit,
        discount_rate,
        quantity_discount,
        quantity,
        total,
        currency_code: CurrencyCode::USD,
    }
}

/// Compute the displayed price estimate for a configuration.
///
/// `min` is the discounted per-unit price; `max` adds the flat display
/// ceiling of [`RANGE_CEILING_FACTOR`].
#[must_use]
pub fn calculate_price_range(catalogue: &Catalogue, config: &Configuration) -> PriceRange {
    let breakdown = calculate_price(catalogue, config);
    let per_unit = breakdown.per_unit();
    let max = round_currency(per_unit * RANGE_CEILING_FACTOR);

    PriceRange {
        min: Price::new(per_unit, breakdown.currency_code),
        max: Price::new(max, breakdown.currency_code),
        per_unit: Price::new(per_unit, breakdown.currency_code),
    }
}
