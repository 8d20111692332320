//! Plain-text configuration summary for quote requests.
//!
//! Pure formatting over the configuration and its price breakdown; the
//! quote-submission surface sends the result as an opaque text blob. Never
//! fails: a catalogue entry that no longer resolves renders as its raw ID.

use crate::catalogue::Catalogue;
use crate::customizer::configuration::Configuration;
use crate::customizer::pricing::{calculate_price, calculate_price_range};
use crate::types::{CurrencyCode, Price};

/// Render a human-readable summary of a configuration.
#[must_use]
pub fn format_summary(catalogue: &Catalogue, config: &Configuration) -> String {
    let breakdown = calculate_price(catalogue, config);
    let range = calculate_price_range(catalogue, config);
    let currency = breakdown.currency_code;

    let shape = catalogue.shape(&config.shape).map_or_else(
        || config.shape.to_string(),
        |shape| format!("{} ({})", shape.name, shape.dimensions),
    );
    let material = catalogue
        .material(&config.material)
        .map_or_else(|| config.material.to_string(), |m| m.name.clone());
    let chip = catalogue.nfc_chip(&config.nfc_chip).map_or_else(
        || config.nfc_chip.to_string(),
        |chip| format!("{} ({} bytes)", chip.name, chip.memory_bytes),
    );
    let finish = catalogue
        .finish(&config.finish)
        .map_or_else(|| config.finish.to_string(), |f| f.name.clone());

    let mut lines = vec![
        "TapForge quote request".to_owned(),
        format!("Shape: {shape}"),
        format!("Material: {material}"),
        format!("Color: {}", config.color),
        format!("NFC chip: {chip}"),
        format!("Finish: {finish}"),
    ];

    if !config.text.content.trim().is_empty() {
        let font = catalogue
            .font(&config.text.font)
            .map_or_else(|| config.text.font.to_string(), |f| f.name.clone());
        let effect = catalogue
            .text_effect(&config.text.effect)
            .map_or_else(|| config.text.effect.to_string(), |e| e.name.clone());
        lines.push(format!(
            "Text: \"{}\" ({font}, {} pt, {effect})",
            config.text.content, config.text.size_pt
        ));
    }

    if config
        .design
        .as_ref()
        .is_some_and(super::configuration::DesignUpload::has_asset)
    {
        lines.push("Custom design: attached".to_owned());
    }

    lines.push(format!("Quantity: {}", breakdown.quantity));
    lines.push(format!(
        "Price per unit: {}",
        display(breakdown.per_unit(), currency)
    ));
    lines.push(format!(
        "Estimated range: {} - {}",
        range.min.display(),
        range.max.display()
    ));
    lines.push(format!("Order total: {}", display(breakdown.total, currency)));

    lines.join("\n")
}

fn display(amount: rust_decimal::Decimal, currency: CurrencyCode) -> String {
    Price::new(amount, currency).display()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::customizer::configuration::{ConfigurationUpdate, TextUpdate};
    use crate::types::{MaterialId, NfcChipId};

    #[test]
    fn test_summary_for_default_configuration() {
        let catalogue = Catalogue::builtin();
        let summary = format_summary(catalogue, &Configuration::default());

        assert!(summary.contains("Shape: Business Card (85.6 x 54 mm)"));
        assert!(summary.contains("Material: PLA"));
        assert!(summary.contains("NFC chip: NTAG215 (504 bytes)"));
        assert!(summary.contains("Finish: Matte"));
        assert!(summary.contains("Quantity: 1"));
        assert!(summary.contains("Price per unit: $12.50"));
        assert!(summary.contains("Order total: $12.50"));
        // Blank text and absent design contribute no lines
        assert!(!summary.contains("Text:"));
        assert!(!summary.contains("Custom design"));
    }

    #[test]
    fn test_summary_includes_text_line_when_set() {
        let catalogue = Catalogue::builtin();
        let config = Configuration::default()
            .apply_text(
                catalogue,
                TextUpdate {
                    content: Some("Jane Doe".to_owned()),
                    ..TextUpdate::default()
                },
            )
            .unwrap();

        let summary = format_summary(catalogue, &config);
        assert!(summary.contains("Text: \"Jane Doe\" (Inter, 12 pt, None)"));
    }

    #[test]
    fn test_summary_renders_raw_id_for_unknown_entries() {
        let catalogue = Catalogue::builtin();
        let config = Configuration {
            material: MaterialId::new("discontinued-alloy"),
            nfc_chip: NfcChipId::new("ntag999"),
            ..Configuration::default()
        };

        let summary = format_summary(catalogue, &config);
        assert!(summary.contains("Material: discontinued-alloy"));
        assert!(summary.contains("NFC chip: ntag999"));
    }

    #[test]
    fn test_summary_shows_discounted_totals() {
        let catalogue = Catalogue::builtin();
        let config = Configuration::default()
            .apply(
                catalogue,
                ConfigurationUpdate {
                    quantity: Some(25),
                    ..ConfigurationUpdate::default()
                },
            )
            .unwrap();

        let summary = format_summary(catalogue, &config);
        assert!(summary.contains("Price per unit: $11.25"));
        assert!(summary.contains("Order total: $281.25"));
        assert!(summary.contains("Estimated range: $11.25 - $13.50"));
    }
}
