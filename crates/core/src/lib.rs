//! TapForge Core - customization and pricing engine.
//!
//! This crate owns the one subsystem of the TapForge storefront with real
//! domain logic: mapping a customer's product configuration (shape,
//! material, NFC chip, finish, text, design upload, quantity) to a
//! deterministic price breakdown, and the configuration state machine that
//! drives the 3D preview, the price estimator, and the quote form from a
//! single shared model.
//!
//! # Architecture
//!
//! The crate is pure computation - no network, no database, no filesystem.
//! The web storefront, the WebGL preview, and the commerce backend are
//! external consumers.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for IDs, prices, colors, and dimensions
//! - [`catalogue`] - Read-only collections of customizer options
//! - [`customizer`] - Configuration state, pricing, sessions, summaries
//! - [`error`] - Configuration update errors

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalogue;
pub mod customizer;
pub mod error;
pub mod types;

pub use catalogue::{Catalogue, CatalogueError};
pub use customizer::*;
pub use error::ConfigurationError;
pub use types::*;
