//! Claim reconciliation engine
//!
//! Pure functions that turn a claim's line items into its financial
//! summary: per-currency totals, local-currency equivalents, and the
//! due-to-company / due-to-you settlement. No I/O, no retained state; all
//! inputs arrive fully resolved and by value.

pub mod advances;
pub mod expenses;
pub mod rates;
pub mod settlement;

pub use expenses::ExpenseBreakdown;
pub use rates::ExchangeRateTable;
pub use settlement::Settlement;

use crate::types::{AdvanceEntry, ClaimTotals, ExchangeRate, ExpenseLineItem, Role};

/// Run the full reconciliation for one claim.
///
/// Aggregates expenses under the policy selected by `role`, totals the
/// pre-derived advance amounts, and nets the two into the settlement
/// direction. Idempotent: identical inputs produce identical totals.
pub fn reconcile(
    expense_entries: &[ExpenseLineItem],
    currency_entries: &[ExchangeRate],
    advance_entries: &[AdvanceEntry],
    local_currency: &str,
    role: Role,
) -> ClaimTotals {
    let rates = ExchangeRateTable::from_entries(currency_entries);
    let breakdown = expenses::aggregate(expense_entries, &rates, local_currency, role);
    let advance_amount_local = advances::total_advance_local(advance_entries);
    let settlement = settlement::settle(
        &breakdown.total_expense_local,
        &breakdown.per_diem_total_local,
        &advance_amount_local,
        role,
    );

    ClaimTotals {
        per_currency_totals: breakdown.per_currency_totals,
        total_expense_local: breakdown.total_expense_local,
        per_diem_total_local: breakdown.per_diem_total_local,
        advance_amount_local,
        due_to_company: settlement.due_to_company,
        due_to_you: settlement.due_to_you,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bigdecimal::BigDecimal;
    use chrono::NaiveDate;

    fn expense(id: u64, code: &str, currency: &str, amount: i64) -> ExpenseLineItem {
        ExpenseLineItem::new(
            id,
            "Travel".to_string(),
            code.to_string(),
            currency.to_string(),
            BigDecimal::from(amount),
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        )
    }

    fn advance(id: u64, currency: &str, given: i64, rates: &ExchangeRateTable) -> AdvanceEntry {
        let mut entry = AdvanceEntry::new(id);
        entry.given_currency = currency.to_string();
        entry.given_amount = BigDecimal::from(given);
        entry.given_paid_through = "Bank transfer".to_string();
        entry.advance_given_date = NaiveDate::from_ymd_opt(2024, 2, 20);
        advances::derive_spent(&mut entry, rates);
        entry
    }

    #[test]
    fn full_reconciliation_for_claimant() {
        let currency_entries = vec![ExchangeRate::new("USD".to_string(), BigDecimal::from(80))];
        let rates = ExchangeRateTable::from_entries(&currency_entries);

        let expenses = vec![
            expense(1, "Hotel", "USD", 100),
            expense(2, "Meals", "THB", 500),
        ];
        let advances = vec![advance(1, "THB", 3000, &rates)];

        let totals = reconcile(&expenses, &currency_entries, &advances, "THB", Role::Claimant);

        assert_eq!(totals.total_expense_local, BigDecimal::from(8500));
        assert_eq!(totals.advance_amount_local, BigDecimal::from(3000));
        assert_eq!(totals.due_to_you, BigDecimal::from(5500));
        assert_eq!(totals.due_to_company, BigDecimal::from(0));
        assert_eq!(
            totals.per_currency_totals.get("USD"),
            Some(&BigDecimal::from(100))
        );
        assert_eq!(
            totals.per_currency_totals.get("THB"),
            Some(&BigDecimal::from(500))
        );
    }

    #[test]
    fn reconcile_is_idempotent() {
        let currency_entries = vec![ExchangeRate::new("USD".to_string(), BigDecimal::from(80))];
        let expenses = vec![expense(1, "Per diem", "USD", 40)];

        let first = reconcile(&expenses, &currency_entries, &[], "THB", Role::FinanceController);
        let second = reconcile(&expenses, &currency_entries, &[], "THB", Role::FinanceController);
        assert_eq!(first, second);
    }

    #[test]
    fn settlement_sides_are_complementary() {
        let expenses = vec![expense(1, "Hotel", "THB", 1000)];
        let rates = ExchangeRateTable::new();
        for advance_amount in [0, 500, 1000, 1500] {
            let advances = if advance_amount > 0 {
                vec![advance(1, "THB", advance_amount, &rates)]
            } else {
                Vec::new()
            };
            let totals = reconcile(&expenses, &[], &advances, "THB", Role::Claimant);
            let zero = BigDecimal::from(0);
            assert!(totals.due_to_company == zero || totals.due_to_you == zero);
        }
    }
}
