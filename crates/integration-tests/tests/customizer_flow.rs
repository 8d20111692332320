//! A full customization session driven the way the UI drives it: one
//! partial update per interaction, with price, preview, and summary read
//! back after each step.

#![allow(clippy::unwrap_used)]

use rust_decimal::Decimal;
use tapforge_core::{
    ConfigurationUpdate, FinishId, HexColor, MaterialId, NfcChipId, ShapeId, TextEffectId,
    TextUpdate,
};
use tapforge_integration_tests::session;

fn dec(cents: i64) -> Decimal {
    Decimal::new(cents, 2)
}

#[test]
fn walkthrough_from_defaults_to_quote() {
    let mut session = session();

    // Fresh session shows the default estimate.
    assert_eq!(session.price().total, dec(1250));
    assert_eq!(session.revision(), 0);

    // Customer picks a keychain tag in PETG...
    session
        .apply(ConfigurationUpdate {
            shape: Some(ShapeId::new("keychain-tag")),
            material: Some(MaterialId::new("petg")),
            ..ConfigurationUpdate::default()
        })
        .unwrap();
    // 10.00 x 0.75 x 1.2 + 2.50 = 11.50
    assert_eq!(session.price().subtotal_per_unit, dec(1150));

    // ...upgrades the chip and the finish...
    session
        .apply(ConfigurationUpdate {
            nfc_chip: Some(NfcChipId::new("ntag216")),
            finish: Some(FinishId::new("glossy")),
            ..ConfigurationUpdate::default()
        })
        .unwrap();
    // 10.00 x 0.75 x 1.2 + 4.00 = 13.00 (finish does not price)
    assert_eq!(session.price().subtotal_per_unit, dec(1300));

    // ...adds engraved text...
    session
        .apply_text(TextUpdate {
            content: Some("Tap me".to_owned()),
            effect: Some(TextEffectId::new("engraved")),
            ..TextUpdate::default()
        })
        .unwrap();
    // 13.00 + (3.00 + 2.00) = 18.00
    assert_eq!(session.price().subtotal_per_unit, dec(1800));

    // ...and orders 50 for the team.
    session
        .apply(ConfigurationUpdate {
            quantity: Some(50),
            ..ConfigurationUpdate::default()
        })
        .unwrap();

    let breakdown = session.price();
    assert_eq!(breakdown.discount_rate, dec(15));
    // 18.00 - 2.70 = 15.30 per unit; x50 = 765.00
    assert_eq!(breakdown.per_unit(), dec(1530));
    assert_eq!(breakdown.total, dec(76500));

    // Four interactions, four revisions.
    assert_eq!(session.revision(), 4);

    // The quote form gets consistent numbers.
    let summary = session.summary();
    assert!(summary.contains("Quantity: 50"));
    assert!(summary.contains("Price per unit: $15.30"));
    assert!(summary.contains("Order total: $765.00"));
    assert!(summary.contains("Text: \"Tap me\""));
}

#[test]
fn preview_follows_each_change() {
    let mut session = session();

    let before = session.preview_state();
    assert!((before.dimensions.width - 85.6).abs() < f64::EPSILON);
    assert_eq!(before.color.as_str(), "#000000");

    session
        .apply(ConfigurationUpdate {
            shape: Some(ShapeId::new("circle")),
            color: Some(HexColor::parse("#D92626").unwrap()),
            material: Some(MaterialId::new("resin")),
            ..ConfigurationUpdate::default()
        })
        .unwrap();

    let after = session.preview_state();
    assert!((after.dimensions.width - 45.0).abs() < f64::EPSILON);
    assert_eq!(after.color.as_str(), "#D92626");
    assert_eq!(after.material, MaterialId::new("resin"));
}

#[test]
fn rejected_update_changes_nothing() {
    let mut session = session();
    let price_before = session.price();

    let err = session.apply(ConfigurationUpdate {
        shape: Some(ShapeId::new("dodecahedron")),
        quantity: Some(100),
        ..ConfigurationUpdate::default()
    });

    assert!(err.is_err());
    assert_eq!(session.revision(), 0);
    // The valid quantity in the same update must not have been merged.
    assert_eq!(session.price(), price_before);
}

#[test]
fn sessions_are_independent() {
    let mut first = session();
    let second = session();

    first
        .apply(ConfigurationUpdate {
            material: Some(MaterialId::new("resin")),
            ..ConfigurationUpdate::default()
        })
        .unwrap();

    assert_ne!(first.id(), second.id());
    assert_ne!(first.price().total, second.price().total);
    assert_eq!(second.revision(), 0);
}
