//! Claim aggregate, approval workflow, and editing session

pub mod session;
pub mod workflow;

pub use session::*;
pub use workflow::*;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::reconciliation::ExchangeRateTable;
use crate::types::{
    AdvanceEntry, Attachment, ClaimTotals, Employee, ExchangeRate, ExpenseLineItem, Timestamps,
};

/// A single expense-reimbursement request owned by one employee
///
/// The claim and everything inside it are value objects; the editing
/// session owns the aggregate for the duration of editing and no shared
/// mutable references cross entity boundaries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claim {
    pub id: Uuid,
    /// Human-facing reference number
    pub claim_number: String,
    /// Claim category (Travel, Travel and Entertainment, ...)
    pub category: String,
    pub employee: Employee,
    pub purpose: String,
    pub days_away: u32,
    pub remarks: String,
    pub approval_requirements: ApprovalRequirements,
    pub status: ApprovalStatus,
    /// Settlement currency resolved from the employee's location
    pub local_currency: String,
    pub expense_entries: Vec<ExpenseLineItem>,
    pub currency_entries: Vec<ExchangeRate>,
    pub advance_entries: Vec<AdvanceEntry>,
    pub attachments: Vec<Attachment>,
    /// Summary persisted at the summary step, if one has been saved
    pub totals: Option<ClaimTotals>,
    pub is_resubmitted: bool,
    pub timestamps: Timestamps,
}

impl Claim {
    /// Create a new draft claim
    pub fn new(employee: Employee, category: String, local_currency: String) -> Self {
        let id = Uuid::new_v4();
        let claim_number = format!("EC-{}", &id.simple().to_string()[..8].to_uppercase());
        Self {
            id,
            claim_number,
            category,
            employee,
            purpose: String::new(),
            days_away: 0,
            remarks: String::new(),
            approval_requirements: ApprovalRequirements::default(),
            status: ApprovalStatus::Draft,
            local_currency,
            expense_entries: Vec::new(),
            currency_entries: Vec::new(),
            advance_entries: Vec::new(),
            attachments: Vec::new(),
            totals: None,
            is_resubmitted: false,
            timestamps: Timestamps::now(),
        }
    }

    /// Rate table over the currently captured currency entries
    pub fn rate_table(&self) -> ExchangeRateTable {
        ExchangeRateTable::from_entries(&self.currency_entries)
    }
}
