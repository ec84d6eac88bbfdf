//! Validation and boundary-coercion utilities

use bigdecimal::BigDecimal;
use std::str::FromStr;

use crate::types::*;

/// Coerce a raw amount string into a decimal.
///
/// Boundary inputs that do not parse as numbers are treated as "no amount"
/// and become zero; they are never propagated as errors.
pub fn coerce_amount(raw: &str) -> BigDecimal {
    BigDecimal::from_str(raw.trim()).unwrap_or_else(|_| BigDecimal::from(0))
}

/// Coerce an optional raw amount, treating absence as zero
pub fn coerce_opt_amount(raw: Option<&str>) -> BigDecimal {
    raw.map(coerce_amount).unwrap_or_else(|| BigDecimal::from(0))
}

/// Validate a currency code
pub fn validate_currency_code(code: &str) -> ClaimResult<()> {
    if code.is_empty() {
        return Err(ClaimError::Validation(
            "Currency code cannot be empty".to_string(),
        ));
    }

    if code.len() > 8 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(ClaimError::Validation(format!(
            "Invalid currency code: '{}'",
            code
        )));
    }

    Ok(())
}

/// Validate an advance entry before it is saved.
///
/// At least one side (given or returned) must be complete, and when both
/// sides name a currency the two must match. The match is enforced here at
/// entry time, never inside the reconciliation engine.
pub fn validate_advance_entry(entry: &AdvanceEntry) -> ClaimResult<()> {
    if !entry.given_side_complete() && !entry.return_side_complete() {
        return Err(ClaimError::Validation(
            "Either the advance or the return section must be filled completely".to_string(),
        ));
    }

    let given = entry.given_currency.trim();
    let returned = entry.returned_currency.trim();
    if !given.is_empty() && !returned.is_empty() && given != returned {
        return Err(ClaimError::Validation(format!(
            "Given and returned currencies must match: '{}' vs '{}'",
            given, returned
        )));
    }

    Ok(())
}
