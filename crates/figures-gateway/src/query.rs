//! Fetch filters: document type plus an optional inclusive date range

use crate::error::QueryError;
use chrono::NaiveDate;
use serde::Serialize;

/// Document type requested when nothing else is configured
pub const DEFAULT_DOCUMENT_TYPE: &str = "FACT";

/// Which bounds a [`DateRange`] carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangeKind {
    /// No bounds
    Unbounded,
    /// Start bound only
    From,
    /// End bound only
    Until,
    /// Both bounds
    Between,
}

/// Inclusive date range; either bound may be absent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct DateRange {
    #[serde(rename = "startDate", skip_serializing_if = "Option::is_none")]
    start: Option<NaiveDate>,
    #[serde(rename = "endDate", skip_serializing_if = "Option::is_none")]
    end: Option<NaiveDate>,
}

impl DateRange {
    /// Range without bounds
    #[inline]
    #[must_use]
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Range from optional bounds
    ///
    /// # Errors
    /// - `QueryError::InvertedRange` if both bounds are set and start > end
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Result<Self, QueryError> {
        if let (Some(start), Some(end)) = (start, end) {
            if start > end {
                return Err(QueryError::InvertedRange { start, end });
            }
        }
        Ok(Self { start, end })
    }

    /// Everything on or after `start`
    #[inline]
    #[must_use]
    pub fn starting(start: NaiveDate) -> Self {
        Self {
            start: Some(start),
            end: None,
        }
    }

    /// Everything on or before `end`
    #[inline]
    #[must_use]
    pub fn ending(end: NaiveDate) -> Self {
        Self {
            start: None,
            end: Some(end),
        }
    }

    /// Both bounds, inclusive
    ///
    /// # Errors
    /// - `QueryError::InvertedRange` if start > end
    #[inline]
    pub fn between(start: NaiveDate, end: NaiveDate) -> Result<Self, QueryError> {
        Self::new(Some(start), Some(end))
    }

    /// Start bound
    #[inline]
    #[must_use]
    pub fn start(&self) -> Option<NaiveDate> {
        self.start
    }

    /// End bound
    #[inline]
    #[must_use]
    pub fn end(&self) -> Option<NaiveDate> {
        self.end
    }

    /// Which of the four bound combinations this is
    #[must_use]
    pub fn kind(&self) -> RangeKind {
        match (self.start, self.end) {
            (None, None) => RangeKind::Unbounded,
            (Some(_), None) => RangeKind::From,
            (None, Some(_)) => RangeKind::Until,
            (Some(_), Some(_)) => RangeKind::Between,
        }
    }

    /// Whether `date` falls inside the range
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start.map_or(true, |s| date >= s) && self.end.map_or(true, |e| date <= e)
    }
}

/// Parameters sent with a figures request
///
/// Serializes as `{ "type": ..., "startDate"?: ..., "endDate"?: ... }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FiguresQuery {
    #[serde(rename = "type")]
    doc_type: String,
    #[serde(flatten)]
    range: DateRange,
}

impl FiguresQuery {
    /// Query for a document type over all dates
    ///
    /// # Errors
    /// - `QueryError::EmptyDocumentType` if the code is blank
    pub fn new(doc_type: impl Into<String>) -> Result<Self, QueryError> {
        let doc_type = doc_type.into();
        if doc_type.trim().is_empty() {
            return Err(QueryError::EmptyDocumentType);
        }
        Ok(Self {
            doc_type,
            range: DateRange::unbounded(),
        })
    }

    /// Restrict to a date range
    #[inline]
    #[must_use]
    pub fn with_range(mut self, range: DateRange) -> Self {
        self.range = range;
        self
    }

    /// Document type code
    #[inline]
    #[must_use]
    pub fn doc_type(&self) -> &str {
        &self.doc_type
    }

    /// Date range
    #[inline]
    #[must_use]
    pub fn range(&self) -> &DateRange {
        &self.range
    }
}
