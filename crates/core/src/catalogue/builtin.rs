//! The compiled-in option catalogue.
//!
//! This is the option set the TapForge customizer ships with. Deployments
//! that curate their own set load a JSON document through
//! [`Catalogue::from_json`](super::Catalogue::from_json) instead; the
//! builtin data must satisfy the same structural contract, which
//! `catalogue::tests` asserts.

use rust_decimal::Decimal;

use super::Catalogue;
use super::options::{
    Durability, Finish, Font, FontCategory, Material, NfcChip, Shape, TextEffect,
};
use crate::types::{Dimensions, HexColor};

/// Parse a compile-time swatch literal.
fn hex(color: &str) -> HexColor {
    HexColor::parse(color).expect("builtin swatch is valid hex")
}

pub(super) fn build() -> Catalogue {
    Catalogue {
        shapes: shapes(),
        materials: materials(),
        nfc_chips: nfc_chips(),
        finishes: finishes(),
        text_effects: text_effects(),
        fonts: fonts(),
    }
}

fn shapes() -> Vec<Shape> {
    vec![
        Shape {
            id: "business-card".into(),
            name: "Business Card".into(),
            description: "Standard credit-card footprint, the classic NFC business card.".into(),
            dimensions: Dimensions::millimeters(85.6, 54.0),
            size_modifier: Decimal::new(100, 2),
        },
        Shape {
            id: "square".into(),
            name: "Square".into(),
            description: "Compact square tile for tap points and product tags.".into(),
            dimensions: Dimensions::millimeters(50.0, 50.0),
            size_modifier: Decimal::new(85, 2),
        },
        Shape {
            id: "circle".into(),
            name: "Circle".into(),
            description: "Round disc, sized to fit under a sticker or badge.".into(),
            dimensions: Dimensions::millimeters(45.0, 45.0),
            size_modifier: Decimal::new(70, 2),
        },
        Shape {
            id: "keychain-tag".into(),
            name: "Keychain Tag".into(),
            description: "Slim tag with a lanyard hole for keyrings.".into(),
            dimensions: Dimensions::millimeters(30.0, 50.0),
            size_modifier: Decimal::new(75, 2),
        },
        Shape {
            id: "coaster".into(),
            name: "Coaster".into(),
            description: "Full-size drink coaster for venues and events.".into(),
            dimensions: Dimensions::millimeters(95.0, 95.0),
            size_modifier: Decimal::new(110, 2),
        },
    ]
}

fn materials() -> Vec<Material> {
    vec![
        Material {
            id: "pla".into(),
            name: "PLA".into(),
            description: "Matte biopolymer with the widest color range. Everyday durability."
                .into(),
            price_modifier: Decimal::new(100, 2),
            swatches: vec![
                hex("#FFFFFF"),
                hex("#000000"),
                hex("#D92626"),
                hex("#2563EB"),
                hex("#16A34A"),
                hex("#F59E0B"),
            ],
            durability: Durability::Standard,
        },
        Material {
            id: "petg".into(),
            name: "PETG".into(),
            description: "Tough, slightly glossy polymer. Handles heat and daily carry.".into(),
            price_modifier: Decimal::new(120, 2),
            swatches: vec![
                hex("#FFFFFF"),
                hex("#000000"),
                hex("#1D4ED8"),
                hex("#DC2626"),
                hex("#0D9488"),
            ],
            durability: Durability::High,
        },
        Material {
            id: "resin".into(),
            name: "Resin".into(),
            description: "High-detail cast resin with a premium, glass-smooth surface.".into(),
            price_modifier: Decimal::new(180, 2),
            swatches: vec![
                hex("#000000"),
                hex("#FFFFFF"),
                hex("#6B7280"),
                hex("#7C3AED"),
                hex("#B45309"),
            ],
            durability: Durability::Premium,
        },
        Material {
            id: "wood-composite".into(),
            name: "Wood Composite".into(),
            description: "PLA with real wood fibre. Warm grain, sands and stains like timber."
                .into(),
            price_modifier: Decimal::new(145, 2),
            swatches: vec![hex("#8B5A2B"), hex("#A0522D"), hex("#6F4E37"), hex("#3E2723")],
            durability: Durability::High,
        },
    ]
}

fn nfc_chips() -> Vec<NfcChip> {
    vec![
        NfcChip {
            id: "ntag213".into(),
            name: "NTAG213".into(),
            memory_bytes: 144,
            url_capacity_chars: 132,
            price: Decimal::new(150, 2),
            description: "Entry-level chip. Fits a short link or contact card.".into(),
        },
        NfcChip {
            id: "ntag215".into(),
            name: "NTAG215".into(),
            memory_bytes: 504,
            url_capacity_chars: 492,
            price: Decimal::new(250, 2),
            description: "The all-rounder. Room for a full vCard or long campaign URL.".into(),
        },
        NfcChip {
            id: "ntag216".into(),
            name: "NTAG216".into(),
            memory_bytes: 888,
            url_capacity_chars: 854,
            price: Decimal::new(400, 2),
            description: "Maximum capacity for rich records and multi-field payloads.".into(),
        },
    ]
}

fn finishes() -> Vec<Finish> {
    vec![
        Finish {
            id: "matte".into(),
            name: "Matte".into(),
            description: "As-printed satin-flat surface.".into(),
            price_modifier: Decimal::new(100, 2),
        },
        Finish {
            id: "satin".into(),
            name: "Satin".into(),
            description: "Light polish with a soft sheen.".into(),
            price_modifier: Decimal::new(105, 2),
        },
        Finish {
            id: "glossy".into(),
            name: "Glossy".into(),
            description: "Clear-coated high gloss.".into(),
            price_modifier: Decimal::new(110, 2),
        },
        Finish {
            id: "textured".into(),
            name: "Textured".into(),
            description: "Fine grip texture across the face.".into(),
            price_modifier: Decimal::new(115, 2),
        },
    ]
}

fn text_effects() -> Vec<TextEffect> {
    vec![
        TextEffect {
            id: "none".into(),
            name: "None".into(),
            description: "Printed flat in the text color.".into(),
            price_modifier: Decimal::ZERO,
        },
        TextEffect {
            id: "raised".into(),
            name: "Raised".into(),
            description: "Text printed proud of the surface.".into(),
            price_modifier: Decimal::new(150, 2),
        },
        TextEffect {
            id: "engraved".into(),
            name: "Engraved".into(),
            description: "Text recessed into the body.".into(),
            price_modifier: Decimal::new(200, 2),
        },
        TextEffect {
            id: "glow".into(),
            name: "Glow".into(),
            description: "Raised text in glow-in-the-dark filament.".into(),
            price_modifier: Decimal::new(350, 2),
        },
    ]
}

fn fonts() -> Vec<Font> {
    vec![
        Font {
            id: "inter".into(),
            name: "Inter".into(),
            category: FontCategory::Sans,
        },
        Font {
            id: "playfair-display".into(),
            name: "Playfair Display".into(),
            category: FontCategory::Serif,
        },
        Font {
            id: "roboto-mono".into(),
            name: "Roboto Mono".into(),
            category: FontCategory::Mono,
        },
        Font {
            id: "archivo-black".into(),
            name: "Archivo Black".into(),
            category: FontCategory::Display,
        },
    ]
}
