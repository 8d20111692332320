//! The configuration and pricing engine.
//!
//! One shared model drives every customizer surface: the 3D preview, the
//! price estimator, and the quote form all read the same
//! [`Configuration`], and every price query recomputes from it
//! deterministically. Consumers issue partial updates; the engine merges
//! and validates them and derives everything else.

pub mod configuration;
pub mod pricing;
pub mod session;
pub mod summary;

pub use configuration::{
    Configuration, ConfigurationUpdate, DesignFile, DesignUpdate, DesignUpload,
    PlacementTransform, TextSettings, TextUpdate,
};
pub use pricing::{
    BASE_PRICE, DESIGN_UPLOAD_FEE, PriceBreakdown, PriceRange, RANGE_CEILING_FACTOR,
    TEXT_BASE_FEE, calculate_price, calculate_price_range, discount_rate,
};
pub use session::{CustomizerSession, PreviewState, SavedConfiguration};
pub use summary::format_summary;
