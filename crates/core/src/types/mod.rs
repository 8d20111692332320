//! Core types for TapForge.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod color;
pub mod dimensions;
pub mod id;
pub mod money;

pub use color::{ColorError, HexColor};
pub use dimensions::{DimensionUnit, Dimensions};
pub use id::*;
pub use money::{CurrencyCode, Price, round_currency};
