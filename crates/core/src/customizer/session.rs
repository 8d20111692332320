//! Customization session state.
//!
//! A [`CustomizerSession`] is the single source of truth for one customer's
//! customization flow: it owns the [`Configuration`], applies updates, and
//! derives prices, the preview contract, and the quote summary from the one
//! shared state. It is an explicitly owned value - construct it where the
//! session starts and thread it to whichever surface is currently driving
//! it; surfaces that only observe compare [`CustomizerSession::revision`]
//! instead of duplicating state.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::catalogue::{Catalogue, DEFAULT_SHAPE};
use crate::customizer::configuration::{Configuration, ConfigurationUpdate, TextUpdate};
use crate::customizer::pricing::{self, PriceBreakdown, PriceRange};
use crate::customizer::summary::format_summary;
use crate::error::ConfigurationError;
use crate::types::{Dimensions, HexColor, MaterialId, ShapeId};

/// What the 3D preview renderer consumes on every change.
///
/// Dimensions are millimeters; color is a 6-digit hex string.
#[derive(Debug, Clone, Serialize)]
pub struct PreviewState {
    /// Physical dimensions of the selected shape.
    pub dimensions: Dimensions,
    /// Current body color.
    pub color: HexColor,
    /// Selected material, for the renderer's surface shading.
    pub material: MaterialId,
}

/// A configuration captured for local save/restore.
///
/// JSON-safe: the design file handle is dropped at capture time, so only
/// the preview URL and placement survive persistence. After a restore the
/// customer re-attaches the file; that is the documented contract of the
/// storage shim, not a defect.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedConfiguration {
    /// Session the capture came from, for quote correlation.
    pub session_id: Uuid,
    /// When the capture was taken.
    pub saved_at: DateTime<Utc>,
    /// The captured configuration.
    pub configuration: Configuration,
}

/// Owns one customization session's state.
#[derive(Debug, Clone)]
pub struct CustomizerSession {
    id: Uuid,
    started_at: DateTime<Utc>,
    catalogue: Arc<Catalogue>,
    configuration: Configuration,
    revision: u64,
}

impl CustomizerSession {
    /// Start a session with the documented default configuration.
    #[must_use]
    pub fn new(catalogue: Arc<Catalogue>) -> Self {
        Self {
            id: Uuid::new_v4(),
            started_at: Utc::now(),
            catalogue,
            configuration: Configuration::default(),
            revision: 0,
        }
    }

    /// Start a session from a previously saved configuration.
    ///
    /// The restored state keeps everything except the design file handle,
    /// which never survives persistence. A fresh session ID is assigned;
    /// the origin session is recorded in the snapshot itself.
    #[must_use]
    pub fn restore(catalogue: Arc<Catalogue>, saved: SavedConfiguration) -> Self {
        Self {
            id: Uuid::new_v4(),
            started_at: Utc::now(),
            catalogue,
            configuration: saved.configuration,
            revision: 0,
        }
    }

    /// Session ID.
    #[must_use]
    pub const fn id(&self) -> Uuid {
        self.id
    }

    /// When the session started.
    #[must_use]
    pub const fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// The catalogue this session prices against.
    #[must_use]
    pub fn catalogue(&self) -> &Catalogue {
        &self.catalogue
    }

    /// The current configuration.
    #[must_use]
    pub const fn configuration(&self) -> &Configuration {
        &self.configuration
    }

    /// Monotonic change counter. Bumped once per accepted update; observers
    /// re-read derived state when it moves.
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    /// Apply a partial update to the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError`] when the update references an unknown
    /// catalogue entry; the session state is left unchanged and the
    /// revision does not move.
    pub fn apply(
        &mut self,
        update: ConfigurationUpdate,
    ) -> Result<&Configuration, ConfigurationError> {
        let next = self.configuration.apply(&self.catalogue, update)?;
        self.configuration = next;
        self.revision += 1;
        Ok(&self.configuration)
    }

    /// Apply a partial update to the text sub-object.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError`] when the update references an unknown
    /// font or text effect; the session state is left unchanged.
    pub fn apply_text(&mut self, update: TextUpdate) -> Result<&Configuration, ConfigurationError> {
        let next = self.configuration.apply_text(&self.catalogue, update)?;
        self.configuration = next;
        self.revision += 1;
        Ok(&self.configuration)
    }

    /// Itemized price for the current configuration. Recomputed on every
    /// call.
    #[must_use]
    pub fn price(&self) -> PriceBreakdown {
        pricing::calculate_price(&self.catalogue, &self.configuration)
    }

    /// Displayed price estimate for the current configuration.
    #[must_use]
    pub fn price_range(&self) -> PriceRange {
        pricing::calculate_price_range(&self.catalogue, &self.configuration)
    }

    /// Plain-text summary for a quote request.
    #[must_use]
    pub fn summary(&self) -> String {
        format_summary(&self.catalogue, &self.configuration)
    }

    /// The contract the preview renderer consumes.
    ///
    /// Falls back to the default shape's dimensions when the configured
    /// shape is unknown, mirroring the pricing substitution.
    #[must_use]
    pub fn preview_state(&self) -> PreviewState {
        let dimensions = self
            .catalogue
            .shape(&self.configuration.shape)
            .or_else(|| self.catalogue.shape(&ShapeId::new(DEFAULT_SHAPE)))
            .map_or(Dimensions::millimeters(85.6, 54.0), |shape| {
                shape.dimensions
            });

        PreviewState {
            dimensions,
            color: self.configuration.color.clone(),
            material: self.configuration.material.clone(),
        }
    }

    /// Capture the configuration for local save.
    ///
    /// The design file handle is dropped eagerly so the in-memory snapshot
    /// equals its serialized form.
    #[must_use]
    pub fn snapshot(&self) -> SavedConfiguration {
        let mut configuration = self.configuration.clone();
        if let Some(design) = configuration.design.as_mut() {
            design.file = None;
        }

        SavedConfiguration {
            session_id: self.id,
            saved_at: Utc::now(),
            configuration,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::customizer::configuration::{
        DesignFile, DesignUpdate, DesignUpload, PlacementTransform,
    };
    use crate::types::MaterialId;

    fn session() -> CustomizerSession {
        CustomizerSession::new(Arc::new(Catalogue::builtin().clone()))
    }

    #[test]
    fn test_new_session_has_defaults_and_revision_zero() {
        let session = session();
        assert_eq!(session.revision(), 0);
        assert_eq!(*session.configuration(), Configuration::default());
    }

    #[test]
    fn test_accepted_update_bumps_revision() {
        let mut session = session();
        session
            .apply(ConfigurationUpdate {
                material: Some(MaterialId::new("petg")),
                ..ConfigurationUpdate::default()
            })
            .unwrap();
        assert_eq!(session.revision(), 1);
    }

    #[test]
    fn test_rejected_update_leaves_state_and_revision() {
        let mut session = session();
        let before = session.configuration().clone();

        let result = session.apply(ConfigurationUpdate {
            material: Some(MaterialId::new("unobtainium")),
            ..ConfigurationUpdate::default()
        });

        assert!(result.is_err());
        assert_eq!(*session.configuration(), before);
        assert_eq!(session.revision(), 0);
    }

    #[test]
    fn test_preview_state_reflects_configuration() {
        let mut session = session();
        session
            .apply(ConfigurationUpdate {
                shape: Some(ShapeId::new("coaster")),
                color: Some(HexColor::parse("#2563EB").unwrap()),
                ..ConfigurationUpdate::default()
            })
            .unwrap();

        let preview = session.preview_state();
        assert!((preview.dimensions.width - 95.0).abs() < f64::EPSILON);
        assert_eq!(preview.color.as_str(), "#2563EB");
    }

    #[test]
    fn test_snapshot_drops_file_keeps_preview_and_transform() {
        let mut session = session();
        session
            .apply(ConfigurationUpdate {
                design: Some(DesignUpdate::Attach(DesignUpload {
                    file: Some(DesignFile {
                        name: "logo.png".to_owned(),
                        content_type: "image/png".to_owned(),
                        bytes: vec![9; 32],
                    }),
                    preview_url: Some("https://cdn.tapforge.io/previews/a.png".to_owned()),
                    transform: PlacementTransform {
                        offset_x: 1.0,
                        offset_y: 2.0,
                        scale: 0.75,
                        rotation_degrees: 45.0,
                    },
                })),
                ..ConfigurationUpdate::default()
            })
            .unwrap();

        let snapshot = session.snapshot();
        let design = snapshot.configuration.design.as_ref().unwrap();
        assert!(design.file.is_none());
        assert!(design.preview_url.is_some());
        assert!((design.transform.scale - 0.75).abs() < f64::EPSILON);

        // The live session still holds the file for the preview.
        assert!(
            session
                .configuration()
                .design
                .as_ref()
                .unwrap()
                .file
                .is_some()
        );
    }

    #[test]
    fn test_restore_roundtrips_through_json() {
        let mut session = session();
        session
            .apply(ConfigurationUpdate {
                material: Some(MaterialId::new("resin")),
                quantity: Some(50),
                ..ConfigurationUpdate::default()
            })
            .unwrap();

        let json = serde_json::to_string(&session.snapshot()).unwrap();
        let saved: SavedConfiguration = serde_json::from_str(&json).unwrap();
        let restored = CustomizerSession::restore(session.catalogue.clone(), saved);

        assert_eq!(*restored.configuration(), *session.configuration());
        assert_ne!(restored.id(), session.id());
        assert_eq!(restored.price().total, session.price().total);
    }
}
