//! Integration tests for TapForge.
//!
//! The core is pure computation, so these tests run with no services:
//!
//! ```bash
//! cargo test -p tapforge-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `pricing_scenarios` - the published pricing contract, end to end
//! - `customizer_flow` - a full customization session driven like the UI
//! - `saved_configurations` - local save/restore and catalogue drift

use std::sync::Arc;

use tapforge_core::{Catalogue, Configuration, ConfigurationUpdate, CustomizerSession, MaterialId};

/// The shared catalogue, the way a consuming surface would hold it.
#[must_use]
pub fn catalogue() -> Arc<Catalogue> {
    Arc::new(Catalogue::builtin().clone())
}

/// A fresh session over the builtin catalogue.
#[must_use]
pub fn session() -> CustomizerSession {
    CustomizerSession::new(catalogue())
}

/// The default configuration at a given quantity.
///
/// # Panics
///
/// Panics if the builtin catalogue rejects the update; that would mean the
/// builtin data itself is broken.
#[must_use]
pub fn config_with_quantity(quantity: u32) -> Configuration {
    Configuration::default()
        .apply(
            Catalogue::builtin(),
            ConfigurationUpdate {
                quantity: Some(quantity),
                ..ConfigurationUpdate::default()
            },
        )
        .expect("builtin catalogue accepts a quantity update")
}

/// The default configuration switched to the given material.
///
/// # Panics
///
/// Panics if the material is not in the builtin catalogue.
#[must_use]
pub fn config_with_material(material: &str) -> Configuration {
    Configuration::default()
        .apply(
            Catalogue::builtin(),
            ConfigurationUpdate {
                material: Some(MaterialId::new(material)),
                ..ConfigurationUpdate::default()
            },
        )
        .expect("material exists in the builtin catalogue")
}
