//! Presentation records derived from control figures

use figures_format::{format_prefixed, FormatError};
use serde::Serialize;

/// One summary card: a labelled raw value plus a style tag
///
/// Built fresh on every successful fetch; never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayCard {
    /// Human-readable label
    pub label: String,
    /// Unformatted value taken from the record
    pub raw_value: f64,
    /// Style hint for the renderer (e.g. a border colour class)
    pub style_tag: String,
}

impl DisplayCard {
    /// Create a card
    #[inline]
    #[must_use]
    pub fn new(label: impl Into<String>, raw_value: f64, style_tag: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            raw_value,
            style_tag: style_tag.into(),
        }
    }

    /// Format the value and prepend `currency_symbol`
    ///
    /// # Errors
    /// - `FormatError::NonFinite` if the raw value is NaN or infinite
    pub fn render(&self, currency_symbol: &str) -> Result<RenderedCard, FormatError> {
        Ok(RenderedCard {
            label: self.label.clone(),
            text: format_prefixed(currency_symbol, self.raw_value)?,
            style_tag: self.style_tag.clone(),
        })
    }
}

/// A card ready to print
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedCard {
    /// Label
    pub label: String,
    /// Currency prefix followed by the formatted amount
    pub text: String,
    /// Style tag
    pub style_tag: String,
}

impl std::fmt::Display for RenderedCard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\t{}\t{}", self.label, self.text, self.style_tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_prefixes_formatted_value() {
        let card = DisplayCard::new("Grand Total", 452_300.75, "border-green-500");
        let rendered = card.render("Q ").unwrap();

        assert_eq!(rendered.text, "Q 452,300.75");
        assert_eq!(rendered.label, "Grand Total");
        assert_eq!(rendered.style_tag, "border-green-500");
        assert_eq!(
            rendered.to_string(),
            "Grand Total\tQ 452,300.75\tborder-green-500"
        );
    }

    #[test]
    fn rendered_card_serializes_flat() {
        let rendered = DisplayCard::new("VAT", 54_321.12, "border-blue-500")
            .render("$")
            .unwrap();
        assert_eq!(
            serde_json::to_value(&rendered).unwrap(),
            serde_json::json!({
                "label": "VAT",
                "text": "$54,321.12",
                "styleTag": "border-blue-500"
            })
        );
    }

    #[test]
    fn display_card_uses_payload_field_case() {
        let card = DisplayCard::new("Grand Total", 452_300.75, "border-green-500");
        assert_eq!(
            serde_json::to_value(&card).unwrap(),
            serde_json::json!({
                "label": "Grand Total",
                "rawValue": 452_300.75,
                "styleTag": "border-green-500"
            })
        );
    }

    #[test]
    fn render_rejects_non_finite() {
        let card = DisplayCard::new("Broken", f64::NAN, "border-red-500");
        assert!(card.render("$").is_err());
    }
}
