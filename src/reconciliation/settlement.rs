//! Settlement direction after netting claimed expenses against advances

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

use crate::types::Role;

/// Net settlement between the company and the claimant
///
/// At most one side is non-zero; at equality both are zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settlement {
    pub due_to_company: BigDecimal,
    pub due_to_you: BigDecimal,
}

/// Derive the settlement direction from the aggregated totals.
///
/// `total_claimed` adds the per-diem total back only for the
/// finance-controller view; the claimant aggregation already folds per-diem
/// into `total_expense_local`, so adding it again would double-count.
pub fn settle(
    total_expense_local: &BigDecimal,
    per_diem_total_local: &BigDecimal,
    advance_amount_local: &BigDecimal,
    role: Role,
) -> Settlement {
    let total_claimed = match role {
        Role::FinanceController => total_expense_local + per_diem_total_local,
        Role::Claimant => total_expense_local.clone(),
    };

    let zero = BigDecimal::from(0);
    if total_claimed < *advance_amount_local {
        Settlement {
            due_to_company: advance_amount_local - &total_claimed,
            due_to_you: zero,
        }
    } else {
        Settlement {
            due_to_company: zero,
            due_to_you: &total_claimed - advance_amount_local,
        }
    }
}
