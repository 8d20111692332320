//! Configuration state for one customization session.
//!
//! A [`Configuration`] is the full selection state behind the 3D preview,
//! the price estimator, and the quote form. It is mutated exclusively
//! through partial updates with merge semantics: [`Configuration::apply`]
//! merges top-level fields (the nested text object is replaced wholesale),
//! and [`Configuration::apply_text`] merges within the text sub-object.
//! Both are pure - they validate against the catalogue and return a new
//! value, leaving the input untouched on failure.

use serde::{Deserialize, Serialize};

use crate::catalogue::{
    Catalogue, DEFAULT_FINISH, DEFAULT_FONT, DEFAULT_MATERIAL, DEFAULT_NFC_CHIP, DEFAULT_SHAPE,
    DEFAULT_TEXT_EFFECT,
};
use crate::error::ConfigurationError;
use crate::types::{FinishId, FontId, HexColor, MaterialId, NfcChipId, ShapeId, TextEffectId};

// =============================================================================
// Text
// =============================================================================

/// Custom text printed on the product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextSettings {
    /// Free text; may be empty and may contain line breaks.
    pub content: String,
    /// Font from the catalogue.
    pub font: FontId,
    /// Point size. The customizer offers 8-24 pt; the engine does not
    /// enforce the range.
    pub size_pt: u32,
    /// Text effect from the catalogue.
    pub effect: TextEffectId,
    /// Text color.
    pub color: HexColor,
}

impl Default for TextSettings {
    fn default() -> Self {
        Self {
            content: String::new(),
            font: FontId::new(DEFAULT_FONT),
            size_pt: 12,
            effect: TextEffectId::new(DEFAULT_TEXT_EFFECT),
            color: HexColor::white(),
        }
    }
}

/// Partial update merged into the text sub-object by
/// [`Configuration::apply_text`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TextUpdate {
    /// New text content.
    pub content: Option<String>,
    /// New font.
    pub font: Option<FontId>,
    /// New point size.
    pub size_pt: Option<u32>,
    /// New text effect.
    pub effect: Option<TextEffectId>,
    /// New text color.
    pub color: Option<HexColor>,
}

// =============================================================================
// Design upload
// =============================================================================

/// 2D placement of an uploaded design on the product face.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlacementTransform {
    /// Horizontal offset from center, millimeters.
    pub offset_x: f64,
    /// Vertical offset from center, millimeters.
    pub offset_y: f64,
    /// Uniform scale factor.
    pub scale: f64,
    /// Rotation in degrees, clockwise.
    pub rotation_degrees: f64,
}

impl Default for PlacementTransform {
    fn default() -> Self {
        Self {
            offset_x: 0.0,
            offset_y: 0.0,
            scale: 1.0,
            rotation_degrees: 0.0,
        }
    }
}

/// An uploaded design file held in memory for the preview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesignFile {
    /// Original file name.
    pub name: String,
    /// MIME type as reported by the upload surface.
    pub content_type: String,
    /// Raw file bytes.
    pub bytes: Vec<u8>,
}

/// A customer design placed on the product.
///
/// The in-memory `file` never crosses the persistence boundary: it is
/// skipped during serialization, so a restored configuration keeps the
/// preview URL and placement but the customer must re-attach the file.
/// That is expected behavior, not a bug.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignUpload {
    /// In-memory file handle. Not serializable.
    #[serde(skip)]
    pub file: Option<DesignFile>,
    /// Hosted preview image URL, if one has been generated.
    pub preview_url: Option<String>,
    /// Placement on the product face.
    pub transform: PlacementTransform,
}

impl DesignUpload {
    /// Whether this upload still references an actual asset (an attached
    /// file or a hosted preview). The design fee applies only when it does.
    #[must_use]
    pub const fn has_asset(&self) -> bool {
        self.file.is_some() || self.preview_url.is_some()
    }
}

/// Replace-on-write update for the design slot.
///
/// The design sub-object is never deep-merged; these variants make that
/// explicit at the call site.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DesignUpdate {
    /// Replace the design slot with a new upload.
    Attach(DesignUpload),
    /// Re-place the existing design; no-op when no design is attached.
    Transform(PlacementTransform),
    /// Remove the design.
    Clear,
}

// =============================================================================
// Configuration
// =============================================================================

/// Full selection state for one customization session.
///
/// Held in memory only; any persistence goes through the snapshot surface
/// on [`CustomizerSession`](crate::customizer::CustomizerSession).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Configuration {
    /// Selected shape.
    pub shape: ShapeId,
    /// Selected material.
    pub material: MaterialId,
    /// Selected NFC chip.
    pub nfc_chip: NfcChipId,
    /// Selected finish.
    pub finish: FinishId,
    /// Body color. Material swatches are a UI convenience; any valid
    /// 6-digit hex is accepted here.
    pub color: HexColor,
    /// Custom text settings.
    pub text: TextSettings,
    /// Uploaded design, if any.
    pub design: Option<DesignUpload>,
    /// Order quantity, minimum 1. No upper bound is enforced here; the
    /// customizer caps input at 10,000.
    pub quantity: u32,
}

impl Default for Configuration {
    /// The documented session defaults: business-card shape, PLA material,
    /// NTAG215 chip, matte finish, black body, empty text, no design,
    /// quantity 1.
    fn default() -> Self {
        Self {
            shape: ShapeId::new(DEFAULT_SHAPE),
            material: MaterialId::new(DEFAULT_MATERIAL),
            nfc_chip: NfcChipId::new(DEFAULT_NFC_CHIP),
            finish: FinishId::new(DEFAULT_FINISH),
            color: HexColor::black(),
            text: TextSettings::default(),
            design: None,
            quantity: 1,
        }
    }
}

/// Partial update merged into a [`Configuration`] by
/// [`Configuration::apply`]. Unset fields are retained.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigurationUpdate {
    /// New shape.
    pub shape: Option<ShapeId>,
    /// New material.
    pub material: Option<MaterialId>,
    /// New NFC chip.
    pub nfc_chip: Option<NfcChipId>,
    /// New finish.
    pub finish: Option<FinishId>,
    /// New body color.
    pub color: Option<HexColor>,
    /// Replacement for the whole text sub-object. Callers that want a
    /// field-level merge use [`Configuration::apply_text`] instead.
    pub text: Option<TextSettings>,
    /// Design slot operation.
    pub design: Option<DesignUpdate>,
    /// New quantity. Zero is clamped to 1.
    pub quantity: Option<u32>,
}

impl Configuration {
    /// Merge a partial update into this configuration.
    ///
    /// Catalogue references are validated up front, so on error the update
    /// is rejected as a whole and the prior state remains in effect.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError`] when the update references a
    /// catalogue entry that does not exist.
    pub fn apply(
        &self,
        catalogue: &Catalogue,
        update: ConfigurationUpdate,
    ) -> Result<Self, ConfigurationError> {
        if let Some(shape) = &update.shape {
            if catalogue.shape(shape).is_none() {
                return Err(ConfigurationError::UnknownShape(shape.clone()));
            }
        }
        if let Some(material) = &update.material {
            if catalogue.material(material).is_none() {
                return Err(ConfigurationError::UnknownMaterial(material.clone()));
            }
        }
        if let Some(nfc_chip) = &update.nfc_chip {
            if catalogue.nfc_chip(nfc_chip).is_none() {
                return Err(ConfigurationError::UnknownNfcChip(nfc_chip.clone()));
            }
        }
        if let Some(finish) = &update.finish {
            if catalogue.finish(finish).is_none() {
                return Err(ConfigurationError::UnknownFinish(finish.clone()));
            }
        }
        if let Some(text) = &update.text {
            validate_text(catalogue, &text.font, &text.effect)?;
        }

        let mut next = self.clone();
        if let Some(shape) = update.shape {
            next.shape = shape;
        }
        if let Some(material) = update.material {
            next.material = material;
        }
        if let Some(nfc_chip) = update.nfc_chip {
            next.nfc_chip = nfc_chip;
        }
        if let Some(finish) = update.finish {
            next.finish = finish;
        }
        if let Some(color) = update.color {
            next.color = color;
        }
        if let Some(text) = update.text {
            next.text = text;
        }
        if let Some(design) = update.design {
            match design {
                DesignUpdate::Attach(upload) => next.design = Some(upload),
                DesignUpdate::Transform(transform) => {
                    if let Some(current) = next.design.as_mut() {
                        current.transform = transform;
                    }
                }
                DesignUpdate::Clear => next.design = None,
            }
        }
        if let Some(quantity) = update.quantity {
            next.quantity = quantity.max(1);
        }

        Ok(next)
    }

    /// Merge a partial update into the text sub-object only.
    ///
    /// This is the field-level counterpart to the wholesale `text`
    /// replacement in [`Configuration::apply`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError`] when the update references a font or
    /// text effect that does not exist.
    pub fn apply_text(
        &self,
        catalogue: &Catalogue,
        update: TextUpdate,
    ) -> Result<Self, ConfigurationError> {
        let font = update.font.as_ref().unwrap_or(&self.text.font);
        let effect = update.effect.as_ref().unwrap_or(&self.text.effect);
        validate_text(catalogue, font, effect)?;

        let mut next = self.clone();
        if let Some(content) = update.content {
            next.text.content = content;
        }
        if let Some(font) = update.font {
            next.text.font = font;
        }
        if let Some(size_pt) = update.size_pt {
            next.text.size_pt = size_pt;
        }
        if let Some(effect) = update.effect {
            next.text.effect = effect;
        }
        if let Some(color) = update.color {
            next.text.color = color;
        }

        Ok(next)
    }
}

fn validate_text(
    catalogue: &Catalogue,
    font: &FontId,
    effect: &TextEffectId,
) -> Result<(), ConfigurationError> {
    if catalogue.font(font).is_none() {
        return Err(ConfigurationError::UnknownFont(font.clone()));
    }
    if catalogue.text_effect(effect).is_none() {
        return Err(ConfigurationError::UnknownTextEffect(effect.clone()));
    }
    Ok(())
}
