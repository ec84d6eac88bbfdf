//! Advance netting and local-currency totals

use bigdecimal::BigDecimal;

use crate::reconciliation::rates::ExchangeRateTable;
use crate::types::AdvanceEntry;

/// Compute the derived `spent_amount` / `spent_amount_local` fields for an
/// advance entry.
///
/// Runs once at entry-save time; the reconciler reads the stored values
/// and never recomputes them. `spent_amount` is given minus returned and
/// may be negative when the claimant returned more than received. The
/// conversion rate comes from whichever side is complete, the given side
/// taking precedence when both are; an absent rate defaults to 1 (no
/// conversion).
pub fn derive_spent(entry: &mut AdvanceEntry, rates: &ExchangeRateTable) {
    entry.spent_amount = &entry.given_amount - &entry.returned_amount;

    let one = BigDecimal::from(1);
    let rate = if entry.given_side_complete() {
        rates.rate_or(entry.given_currency.trim(), one)
    } else if entry.return_side_complete() {
        rates.rate_or(entry.returned_currency.trim(), one)
    } else {
        one
    };

    entry.spent_amount_local = &entry.spent_amount * rate;
}

/// Total net advance in local currency across all entries.
///
/// Entries with a non-positive `spent_amount_local` are excluded, the same
/// ignore-non-positive convention applied to expense items.
pub fn total_advance_local(entries: &[AdvanceEntry]) -> BigDecimal {
    let zero = BigDecimal::from(0);
    entries
        .iter()
        .filter(|entry| entry.spent_amount_local > zero)
        .map(|entry| &entry.spent_amount_local)
        .sum()
}
