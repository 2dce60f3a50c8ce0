use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Composite identity of a holding: one scheme held under one folio.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "camelCase")]
pub struct HoldingKey {
    pub folio_no: String,
    pub scheme: String,
}

impl HoldingKey {
    pub fn new(folio_no: impl Into<String>, scheme: impl Into<String>) -> Self {
        Self {
            folio_no: folio_no.into(),
            scheme: scheme.into(),
        }
    }
}

impl fmt::Display for HoldingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.folio_no, self.scheme)
    }
}

/// Current position of an investor in one scheme, as reported by the
/// registrar's holdings statement. Read-only to the engine.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    pub folio_no: String,
    pub scheme: String,
    /// Investor tax identifier (PAN).
    pub pan_no: String,
    pub holder_name: Option<String>,
    /// Unit balance at statement date.
    pub closing_units: Option<Decimal>,
    /// Market value of the balance at statement date.
    pub current_value: Option<Decimal>,
    pub email: Option<String>,
    pub mobile_no: Option<String>,
}

impl Holding {
    pub fn key(&self) -> HoldingKey {
        HoldingKey::new(self.folio_no.clone(), self.scheme.clone())
    }

    /// Unit balance, defaulting to zero if not reported
    pub fn units(&self) -> Decimal {
        self.closing_units.unwrap_or(Decimal::ZERO)
    }

    /// Market value, defaulting to zero if not reported
    pub fn value(&self) -> Decimal {
        self.current_value.unwrap_or(Decimal::ZERO)
    }
}

/// Criteria for loading holdings. `None` fields do not constrain the query.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HoldingFilter {
    /// Investor tax identifier (PAN).
    pub investor_id: Option<String>,
    pub folio_no: Option<String>,
}

impl HoldingFilter {
    pub fn for_investor(investor_id: Option<&str>) -> Self {
        Self {
            investor_id: investor_id.map(str::to_string),
            folio_no: None,
        }
    }

    pub fn with_folio(mut self, folio_no: Option<&str>) -> Self {
        self.folio_no = folio_no.map(str::to_string);
        self
    }

    /// In-memory equivalent of the storage-side filter.
    #[cfg(test)]
    pub(crate) fn matches(&self, holding: &Holding) -> bool {
        self.investor_id
            .as_deref()
            .map_or(true, |id| holding.pan_no == id)
            && self
                .folio_no
                .as_deref()
                .map_or(true, |folio| holding.folio_no == folio)
    }
}
