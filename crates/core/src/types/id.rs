//! Newtype IDs for type-safe catalogue references.
//!
//! Use the `define_option_id!` macro to create type-safe ID wrappers that
//! prevent accidentally mixing IDs from different catalogue collections.
//! Catalogue IDs are human-readable slugs (`"business-card"`, `"pla"`), so
//! the wrappers are string-backed rather than numeric.

/// Macro to define a type-safe catalogue ID wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`
/// - Conversion methods: `new()`, `as_str()`, `into_inner()`
/// - `From<&str>`, `From<String>`, and `AsRef<str>` implementations
///
/// # Example
///
/// ```rust
/// # use tapforge_core::define_option_id;
/// define_option_id!(ShapeId);
/// define_option_id!(MaterialId);
///
/// let shape = ShapeId::new("business-card");
/// let material = MaterialId::new("pla");
///
/// // These are different types, so this won't compile:
/// // let _: ShapeId = material;
/// ```
#[macro_export]
macro_rules! define_option_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from a string slug.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the underlying slug as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consumes the ID and returns its inner string.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

// Define IDs for each catalogue collection
define_option_id!(ShapeId);
define_option_id!(MaterialId);
define_option_id!(NfcChipId);
define_option_id!(FinishId);
define_option_id!(TextEffectId);
define_option_id!(FontId);
