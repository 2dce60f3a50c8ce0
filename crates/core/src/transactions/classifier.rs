//! Transaction classification for cost-basis calculation.
//!
//! Maps a registrar transaction-type code to the direction it moves units.
//! Only the code prefix matters; suffixes carry registrar-specific detail
//! (SIP, reversal markers, etc.) that the engine does not need.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::transactions_constants::{ACCUMULATING_PREFIXES, CONSUMING_PREFIXES};

/// Direction in which a transaction moves units of a scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TransactionDirection {
    /// Adds a lot: purchase, switch-in, transfer-in, dividend reinvestment.
    Accumulating,
    /// Consumes units: redemption, switch-out, transfer-out.
    Consuming,
    /// Any other code. Contributes to neither aggregate.
    Unclassified,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClassifierError {
    #[error("Transaction type code is empty")]
    InvalidCode,
}

/// Classify a transaction-type code by its prefix.
///
/// Fails only when the code is empty (or whitespace).
pub fn classify(code: &str) -> Result<TransactionDirection, ClassifierError> {
    let code = code.trim();
    if code.is_empty() {
        return Err(ClassifierError::InvalidCode);
    }

    if ACCUMULATING_PREFIXES
        .iter()
        .any(|prefix| code.starts_with(prefix))
    {
        return Ok(TransactionDirection::Accumulating);
    }

    if CONSUMING_PREFIXES
        .iter()
        .any(|prefix| code.starts_with(prefix))
    {
        return Ok(TransactionDirection::Consuming);
    }

    Ok(TransactionDirection::Unclassified)
}

/// Classify an optional code; missing or empty codes are `Unclassified`.
pub fn classify_code(code: Option<&str>) -> TransactionDirection {
    code.and_then(|c| classify(c).ok())
        .unwrap_or(TransactionDirection::Unclassified)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accumulating_codes() {
        for code in ["P", "PSIP", "SI", "SIN", "TI", "TICOB", "DR", "DRR"] {
            assert_eq!(
                classify(code),
                Ok(TransactionDirection::Accumulating),
                "code {code}"
            );
        }
    }

    #[test]
    fn test_consuming_codes() {
        for code in ["R", "RSWP", "SO", "SOR", "TO", "TOCOB"] {
            assert_eq!(
                classify(code),
                Ok(TransactionDirection::Consuming),
                "code {code}"
            );
        }
    }

    #[test]
    fn test_other_codes_are_unclassified() {
        for code in ["DP", "S", "T", "J", "BON", "x"] {
            assert_eq!(
                classify(code),
                Ok(TransactionDirection::Unclassified),
                "code {code}"
            );
        }
    }

    #[test]
    fn test_prefix_match_is_case_sensitive() {
        assert_eq!(classify("p"), Ok(TransactionDirection::Unclassified));
        assert_eq!(classify("r"), Ok(TransactionDirection::Unclassified));
    }

    #[test]
    fn test_empty_code_is_invalid() {
        assert_eq!(classify(""), Err(ClassifierError::InvalidCode));
        assert_eq!(classify("   "), Err(ClassifierError::InvalidCode));
    }

    #[test]
    fn test_missing_code_is_not_a_crash() {
        assert_eq!(classify_code(None), TransactionDirection::Unclassified);
        assert_eq!(classify_code(Some("")), TransactionDirection::Unclassified);
        assert_eq!(classify_code(Some(" P")), TransactionDirection::Accumulating);
    }
}
