//! Card layout: the ordered (field, label, style) table
//!
//! The layout decides which figures are surfaced and in what order. Card
//! count and order depend only on the layout, never on the values.

use crate::card::DisplayCard;
use crate::error::LayoutError;
use figures_gateway::{ControlFigures, FigureField};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// One row of the layout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardSpec {
    /// Field to read
    pub field: FigureField,
    /// Label shown on the card
    pub label: String,
    /// Style tag passed to the renderer
    pub style_tag: String,
}

impl CardSpec {
    /// Create a row
    #[inline]
    #[must_use]
    pub fn new(field: FigureField, label: impl Into<String>, style_tag: impl Into<String>) -> Self {
        Self {
            field,
            label: label.into(),
            style_tag: style_tag.into(),
        }
    }
}

/// Ordered card table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardLayout {
    specs: Vec<CardSpec>,
}

impl CardLayout {
    /// Layout from explicit rows
    ///
    /// # Errors
    /// - `LayoutError::Empty` for no rows
    /// - `LayoutError::BlankLabel` for a row without a label
    pub fn new(specs: Vec<CardSpec>) -> Result<Self, LayoutError> {
        let layout = Self { specs };
        layout.validate()?;
        Ok(layout)
    }

    /// Check the rows
    ///
    /// # Errors
    /// - `LayoutError::Empty` for no rows
    /// - `LayoutError::BlankLabel` for a row without a label
    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.specs.is_empty() {
            return Err(LayoutError::Empty);
        }
        if let Some(index) = self.specs.iter().position(|s| s.label.trim().is_empty()) {
            return Err(LayoutError::BlankLabel { index });
        }
        Ok(())
    }

    /// Rows in display order
    #[inline]
    #[must_use]
    pub fn specs(&self) -> &[CardSpec] {
        &self.specs
    }

    /// Number of cards this layout produces
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.specs.len()
    }

    /// Whether the layout has no rows
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// Map a record to its cards
    #[must_use]
    pub fn build(&self, figures: &ControlFigures) -> Arc<[DisplayCard]> {
        self.specs
            .iter()
            .map(|spec| {
                DisplayCard::new(
                    spec.label.clone(),
                    spec.field.value(figures),
                    spec.style_tag.clone(),
                )
            })
            .collect()
    }
}

impl Default for CardLayout {
    /// Five cards: document count, grand total, VAT, petroleum tax and
    /// hospitality tourism. The remaining fields are opt-in.
    fn default() -> Self {
        Self {
            specs: vec![
                CardSpec::new(FigureField::DocumentCount, "Document Count", "border-indigo-500"),
                CardSpec::new(FigureField::GrandTotal, "Grand Total", "border-green-500"),
                CardSpec::new(FigureField::Vat, "VAT", "border-blue-500"),
                CardSpec::new(FigureField::PetroleumTax, "Petroleum Tax", "border-yellow-500"),
                CardSpec::new(
                    FigureField::HospitalityTourism,
                    "Hospitality Tourism",
                    "border-purple-500",
                ),
            ],
        }
    }
}
