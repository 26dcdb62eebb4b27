//! Control-figure records and the batch envelope they arrive in

use crate::error::GatewayError;
use serde::{Deserialize, Serialize};

/// Fiscal totals for one reporting query
///
/// Every amount is a non-negative decimal quantity; `document_count` is a
/// plain count. Fields missing from a payload decode as zero.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ControlFigures {
    /// Number of documents covered by the totals
    pub document_count: u64,
    /// Grand total across all documents
    pub grand_total: f64,
    /// Value-added tax
    pub vat: f64,
    /// Petroleum tax
    pub petroleum_tax: f64,
    /// Hospitality tourism levy
    pub hospitality_tourism: f64,
    /// Travel tourism levy
    pub travel_tourism: f64,
    /// Press stamp duty
    pub press_stamp: f64,
    /// Fire department levy
    pub fire_dept: f64,
    /// Municipal rate
    pub municipal_rate: f64,
    /// Alcoholic beverages tax
    pub alcoholic_beverages: f64,
    /// Tobacco tax
    pub tobacco: f64,
    /// Cement tax
    pub cement: f64,
    /// Non-alcoholic beverages tax
    pub non_alcoholic_beverages: f64,
    /// Port tariff
    pub port_tariff: f64,
}

impl ControlFigures {
    /// First field holding a negative or non-finite amount, if any
    #[must_use]
    pub fn first_invalid_field(&self) -> Option<FigureField> {
        FigureField::ALL.into_iter().find(|field| {
            let value = field.value(self);
            !value.is_finite() || value < 0.0
        })
    }
}

/// Selector over the fields of [`ControlFigures`]
///
/// Serialized by the camelCase field name so card layouts can name fields in
/// configuration files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FigureField {
    /// `documentCount`
    DocumentCount,
    /// `grandTotal`
    GrandTotal,
    /// `vat`
    Vat,
    /// `petroleumTax`
    PetroleumTax,
    /// `hospitalityTourism`
    HospitalityTourism,
    /// `travelTourism`
    TravelTourism,
    /// `pressStamp`
    PressStamp,
    /// `fireDept`
    FireDept,
    /// `municipalRate`
    MunicipalRate,
    /// `alcoholicBeverages`
    AlcoholicBeverages,
    /// `tobacco`
    Tobacco,
    /// `cement`
    Cement,
    /// `nonAlcoholicBeverages`
    NonAlcoholicBeverages,
    /// `portTariff`
    PortTariff,
}

impl FigureField {
    /// Every field, in declaration order
    pub const ALL: [FigureField; 14] = [
        Self::DocumentCount,
        Self::GrandTotal,
        Self::Vat,
        Self::PetroleumTax,
        Self::HospitalityTourism,
        Self::TravelTourism,
        Self::PressStamp,
        Self::FireDept,
        Self::MunicipalRate,
        Self::AlcoholicBeverages,
        Self::Tobacco,
        Self::Cement,
        Self::NonAlcoholicBeverages,
        Self::PortTariff,
    ];

    /// Read this field from a record
    #[inline]
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn value(self, figures: &ControlFigures) -> f64 {
        match self {
            Self::DocumentCount => figures.document_count as f64,
            Self::GrandTotal => figures.grand_total,
            Self::Vat => figures.vat,
            Self::PetroleumTax => figures.petroleum_tax,
            Self::HospitalityTourism => figures.hospitality_tourism,
            Self::TravelTourism => figures.travel_tourism,
            Self::PressStamp => figures.press_stamp,
            Self::FireDept => figures.fire_dept,
            Self::MunicipalRate => figures.municipal_rate,
            Self::AlcoholicBeverages => figures.alcoholic_beverages,
            Self::Tobacco => figures.tobacco,
            Self::Cement => figures.cement,
            Self::NonAlcoholicBeverages => figures.non_alcoholic_beverages,
            Self::PortTariff => figures.port_tariff,
        }
    }

    /// Wire name of the field
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::DocumentCount => "documentCount",
            Self::GrandTotal => "grandTotal",
            Self::Vat => "vat",
            Self::PetroleumTax => "petroleumTax",
            Self::HospitalityTourism => "hospitalityTourism",
            Self::TravelTourism => "travelTourism",
            Self::PressStamp => "pressStamp",
            Self::FireDept => "fireDept",
            Self::MunicipalRate => "municipalRate",
            Self::AlcoholicBeverages => "alcoholicBeverages",
            Self::Tobacco => "tobacco",
            Self::Cement => "cement",
            Self::NonAlcoholicBeverages => "nonAlcoholicBeverages",
            Self::PortTariff => "portTariff",
        }
    }
}

impl std::fmt::Display for FigureField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Response envelope: `{ "data": [ControlFigures, ...] }`
///
/// Consumers read the first record only.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FiguresBatch {
    /// Records in the order the backend sent them
    pub data: Vec<ControlFigures>,
}

impl FiguresBatch {
    /// Batch holding a single record
    #[inline]
    #[must_use]
    pub fn single(figures: ControlFigures) -> Self {
        Self {
            data: vec![figures],
        }
    }

    /// Decode a JSON payload, rejecting negative or non-finite amounts
    ///
    /// # Errors
    /// - `GatewayError::Decode` on malformed JSON or invalid amounts
    pub fn from_json(payload: &str) -> Result<Self, GatewayError> {
        let batch: Self = serde_json::from_str(payload)?;
        for (idx, figures) in batch.data.iter().enumerate() {
            if let Some(field) = figures.first_invalid_field() {
                return Err(GatewayError::Decode(format!(
                    "record {idx}: field {field} must be a non-negative amount"
                )));
            }
        }
        Ok(batch)
    }

    /// The record consumers display
    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<&ControlFigures> {
        self.data.first()
    }

    /// Number of records
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the batch carries no records
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_decode_as_zero() {
        let batch = FiguresBatch::from_json(
            r#"{"data":[{"documentCount":128,"grandTotal":452300.75,"vat":54321.12,"petroleumTax":1200,"hospitalityTourism":800}]}"#,
        )
        .unwrap();

        let figures = batch.first().unwrap();
        assert_eq!(figures.document_count, 128);
        assert_eq!(figures.grand_total, 452_300.75);
        assert_eq!(figures.petroleum_tax, 1200.0);
        assert_eq!(figures.port_tariff, 0.0);
        assert_eq!(figures.tobacco, 0.0);
    }

    #[test]
    fn negative_amounts_are_rejected() {
        let err = FiguresBatch::from_json(r#"{"data":[{"vat":-1.0}]}"#).unwrap_err();
        assert!(matches!(err, GatewayError::Decode(_)));
        assert!(err.to_string().contains("vat"));
    }

    #[test]
    fn malformed_json_is_a_decode_error() {
        let err = FiguresBatch::from_json("{\"data\": [").unwrap_err();
        assert!(matches!(err, GatewayError::Decode(_)));
    }

    #[test]
    fn empty_batch_has_no_first() {
        let batch = FiguresBatch::from_json(r#"{"data":[]}"#).unwrap();
        assert!(batch.is_empty());
        assert!(batch.first().is_none());
    }

    #[test]
    fn field_names_match_wire_names() {
        let figures = ControlFigures::default();
        let json = serde_json::to_value(figures).unwrap();
        for field in FigureField::ALL {
            assert!(json.get(field.as_str()).is_some(), "missing {field}");
            let encoded = serde_json::to_value(field).unwrap();
            assert_eq!(encoded, field.as_str());
        }
    }

    #[test]
    fn selector_reads_the_matching_field() {
        let figures = ControlFigures {
            document_count: 3,
            cement: 9.5,
            ..ControlFigures::default()
        };
        assert_eq!(FigureField::DocumentCount.value(&figures), 3.0);
        assert_eq!(FigureField::Cement.value(&figures), 9.5);
        assert_eq!(FigureField::Vat.value(&figures), 0.0);
    }
}
