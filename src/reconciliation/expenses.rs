//! Expense aggregation by currency and category

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::reconciliation::rates::ExchangeRateTable;
use crate::types::{ExpenseCategory, ExpenseLineItem, Role};

/// Aggregated expense figures for one claim
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseBreakdown {
    /// Raw sums per original currency, independent of conversion
    pub per_currency_totals: HashMap<String, BigDecimal>,
    /// Ordinary expense total in the local currency; for the claimant view
    /// this also carries per-diem items
    pub total_expense_local: BigDecimal,
    /// Per-diem total in the local currency; only populated for the
    /// finance-controller view
    pub per_diem_total_local: BigDecimal,
}

/// Sum expense line items per currency and convert them to the local
/// currency under the policy selected by `role`.
///
/// Items with a blank currency or non-positive amount contribute nothing.
/// Per-currency totals always accumulate the raw amount regardless of
/// category. Conversion differs by role:
///
/// - `Role::FinanceController`: a foreign amount is divided by its rate,
///   and per-diem items accumulate separately into `per_diem_total_local`.
/// - `Role::Claimant`: a foreign amount is multiplied by its rate, and
///   per-diem items fold into `total_expense_local`.
///
/// A foreign item with no captured rate keeps its raw per-currency total
/// but contributes zero to the local conversion.
pub fn aggregate(
    items: &[ExpenseLineItem],
    rates: &ExchangeRateTable,
    local_currency: &str,
    role: Role,
) -> ExpenseBreakdown {
    let zero = BigDecimal::from(0);
    let mut per_currency_totals: HashMap<String, BigDecimal> = HashMap::new();
    let mut total_expense_local = zero.clone();
    let mut per_diem_total_local = zero.clone();

    for item in items {
        if !item.qualifies() {
            continue;
        }
        let currency = item.currency_trimmed();

        per_currency_totals
            .entry(currency.to_string())
            .and_modify(|total| *total += &item.amount)
            .or_insert_with(|| item.amount.clone());

        let converted = if currency == local_currency {
            item.amount.clone()
        } else {
            match rates.rate(currency) {
                Some(rate) if *rate > zero => match role {
                    Role::FinanceController => &item.amount / rate,
                    Role::Claimant => &item.amount * rate,
                },
                // Absent rate zeroes the local contribution
                _ => zero.clone(),
            }
        };

        match (role, item.category) {
            (Role::FinanceController, ExpenseCategory::PerDiem) => {
                per_diem_total_local += converted;
            }
            _ => {
                total_expense_local += converted;
            }
        }
    }

    ExpenseBreakdown {
        per_currency_totals,
        total_expense_local,
        per_diem_total_local,
    }
}
