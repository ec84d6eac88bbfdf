//! Core types and data structures for the claims system

use bigdecimal::BigDecimal;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::str::FromStr;

/// Viewing role that selects the aggregation and conversion policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// The employee submitting the claim
    Claimant,
    /// Finance business controller reviewing the claim
    FinanceController,
}

impl Role {
    /// Wire spelling used by the approval backend
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Claimant => "claimant",
            Role::FinanceController => "FBC",
        }
    }
}

impl FromStr for Role {
    type Err = ClaimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "claimant" => Ok(Role::Claimant),
            "FBC" | "financeController" => Ok(Role::FinanceController),
            other => Err(ClaimError::UnknownRole(other.to_string())),
        }
    }
}

/// Expense categories with distinct aggregation treatment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExpenseCategory {
    /// Itemized expense (travel, lodging, entertainment, ...)
    Ordinary,
    /// Flat daily allowance
    PerDiem,
}

impl ExpenseCategory {
    /// Map a reference-data expense code onto a category
    pub fn from_expense_code(code: &str) -> Self {
        if code.trim() == "Per diem" {
            ExpenseCategory::PerDiem
        } else {
            ExpenseCategory::Ordinary
        }
    }
}

/// Exchange rate captured during the currency-entry step
///
/// One active rate per destination currency; re-adding a currency replaces
/// the previous rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExchangeRate {
    /// Currency the claimant spent in, exactly as stored by reference data
    pub destination_currency: String,
    /// Units of local currency per destination unit
    pub rate: BigDecimal,
    /// Supporting documents (rate proofs, bank slips)
    pub attachments: Vec<Attachment>,
}

impl ExchangeRate {
    /// Create a new exchange rate entry
    pub fn new(destination_currency: String, rate: BigDecimal) -> Self {
        Self {
            destination_currency,
            rate,
            attachments: Vec::new(),
        }
    }
}

/// Attachment metadata; file content lives in the external document store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attachment {
    /// Identifier assigned by the document store once uploaded
    pub id: Option<String>,
    pub name: String,
    pub content_type: String,
    pub size: u64,
}

/// Single expense line captured during the expense-entry step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseLineItem {
    /// Identifier local to the claim
    pub id: u64,
    /// Claim type (Travel, Entertainment, ...)
    pub expense_type: String,
    /// Reference-data expense code
    pub expense_code: String,
    /// General-ledger code resolved from the expense code
    pub gl_code: String,
    /// Currency the expense was paid in
    pub currency: String,
    /// Amount in the original currency
    pub amount: BigDecimal,
    /// Aggregation category derived from the expense code
    pub category: ExpenseCategory,
    /// Date the expense was incurred
    pub expense_date: NaiveDate,
    pub remarks: String,
    /// Attendee list, only meaningful for entertainment expenses
    pub attendees: Option<String>,
    pub attachments: Vec<Attachment>,
}

impl ExpenseLineItem {
    /// Create a new expense line item
    pub fn new(
        id: u64,
        expense_type: String,
        expense_code: String,
        currency: String,
        amount: BigDecimal,
        expense_date: NaiveDate,
    ) -> Self {
        let category = ExpenseCategory::from_expense_code(&expense_code);
        Self {
            id,
            expense_type,
            expense_code,
            gl_code: String::new(),
            currency,
            amount,
            category,
            expense_date,
            remarks: String::new(),
            attendees: None,
            attachments: Vec::new(),
        }
    }

    /// Whether the item contributes to totals
    ///
    /// Blank currency or a non-positive amount means the item is excluded
    /// from every total. This is the ignore-non-positive policy, not an
    /// error condition.
    pub fn qualifies(&self) -> bool {
        !self.currency.trim().is_empty() && self.amount > BigDecimal::from(0)
    }

    /// Currency code trimmed of surrounding whitespace, as used for lookups
    pub fn currency_trimmed(&self) -> &str {
        self.currency.trim()
    }
}

/// Cash advance given to the claimant and any amount returned
///
/// `spent_amount` and `spent_amount_local` are derived once at entry-save
/// time (see [`crate::reconciliation::advances::derive_spent`]); the
/// reconciler never recomputes them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvanceEntry {
    /// Identifier local to the claim
    pub id: u64,
    pub given_currency: String,
    pub given_amount: BigDecimal,
    pub given_paid_through: String,
    pub advance_given_date: Option<NaiveDate>,
    pub returned_currency: String,
    pub returned_amount: BigDecimal,
    pub returned_paid_through: String,
    pub advance_return_date: Option<NaiveDate>,
    /// given_amount - returned_amount, in the entry currency; may be
    /// negative when more was returned than received
    pub spent_amount: BigDecimal,
    /// spent_amount converted to the local currency
    pub spent_amount_local: BigDecimal,
}

impl AdvanceEntry {
    /// Create an empty advance entry
    pub fn new(id: u64) -> Self {
        Self {
            id,
            given_currency: String::new(),
            given_amount: BigDecimal::from(0),
            given_paid_through: String::new(),
            advance_given_date: None,
            returned_currency: String::new(),
            returned_amount: BigDecimal::from(0),
            returned_paid_through: String::new(),
            advance_return_date: None,
            spent_amount: BigDecimal::from(0),
            spent_amount_local: BigDecimal::from(0),
        }
    }

    /// Whether the advance-given side has all required fields populated
    pub fn given_side_complete(&self) -> bool {
        !self.given_currency.trim().is_empty()
            && !self.given_paid_through.trim().is_empty()
            && self.advance_given_date.is_some()
    }

    /// Whether the advance-returned side has all required fields populated
    pub fn return_side_complete(&self) -> bool {
        !self.returned_currency.trim().is_empty()
            && !self.returned_paid_through.trim().is_empty()
            && self.advance_return_date.is_some()
    }
}

/// Employee details resolved from the directory at claim-entry time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub name: String,
    /// Location code; resolves the claim's local currency
    pub location: String,
    pub cost_center: String,
    pub department: String,
    /// Payroll identifier, used for ownership scoping
    pub qad_number: String,
    pub entity: Option<String>,
    pub email: Option<String>,
}

/// Acting user and site scope, passed explicitly to operations that scope
/// data instead of being read from ambient state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimContext {
    /// Matches [`Employee::qad_number`] for ownership checks
    pub user_id: String,
    pub role: Role,
    pub site: Option<String>,
}

impl ClaimContext {
    pub fn new(user_id: String, role: Role) -> Self {
        Self {
            user_id,
            role,
            site: None,
        }
    }
}

/// Financial summary produced by the reconciliation engine
///
/// Invariant: at most one of `due_to_company` / `due_to_you` is non-zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimTotals {
    /// Raw per-currency sums in the original currencies
    pub per_currency_totals: HashMap<String, BigDecimal>,
    /// Ordinary expense total converted to the local currency
    pub total_expense_local: BigDecimal,
    /// Per-diem total in local currency; zero for the claimant view, which
    /// folds per-diem into `total_expense_local`
    pub per_diem_total_local: BigDecimal,
    /// Net advance disbursed, already in local currency
    pub advance_amount_local: BigDecimal,
    pub due_to_company: BigDecimal,
    pub due_to_you: BigDecimal,
}

/// Creation and modification timestamps carried for audit display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Timestamps {
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Timestamps {
    pub fn now() -> Self {
        let now = chrono::Utc::now().naive_utc();
        Self {
            created_at: now,
            updated_at: now,
        }
    }

    pub fn touch(&mut self) {
        self.updated_at = chrono::Utc::now().naive_utc();
    }
}

/// Errors that can occur in the claims system
#[derive(Debug, thiserror::Error)]
pub enum ClaimError {
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("Claim not found: {0}")]
    ClaimNotFound(String),
    #[error("Entry not found: {0}")]
    EntryNotFound(u64),
    #[error("Unknown role: {0}")]
    UnknownRole(String),
    #[error("Invalid status transition: {0}")]
    InvalidTransition(String),
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type for claim operations
pub type ClaimResult<T> = Result<T, ClaimError>;
