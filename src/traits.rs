//! Traits for storage abstraction and entry validation

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::claim::Claim;
use crate::types::*;
use crate::utils::validation;

/// Storage abstraction for claims
///
/// Keeps the core backend-agnostic: the surrounding application wires this
/// to its headless CMS / REST layer, tests use the in-memory
/// implementation.
#[async_trait]
pub trait ClaimStorage: Send + Sync {
    /// Save a new claim
    async fn save_claim(&mut self, claim: &Claim) -> ClaimResult<()>;

    /// Get a claim by ID
    async fn get_claim(&self, claim_id: &Uuid) -> ClaimResult<Option<Claim>>;

    /// Update an existing claim
    async fn update_claim(&mut self, claim: &Claim) -> ClaimResult<()>;

    /// Delete a claim
    async fn delete_claim(&mut self, claim_id: &Uuid) -> ClaimResult<()>;

    /// List claims visible to the given context: claimants see their own,
    /// the finance controller sees everything in scope
    async fn list_claims(&self, context: &ClaimContext) -> ClaimResult<Vec<Claim>>;

    /// Persist a claim's entry lists in one operation, reporting per-item
    /// outcomes instead of failing the whole batch
    async fn save_entries_batch(
        &mut self,
        claim_id: &Uuid,
        batch: EntryBatch,
    ) -> ClaimResult<BatchOutcome>;
}

/// Full entry set of a claim, persisted as one batch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct EntryBatch {
    pub expense_entries: Vec<ExpenseLineItem>,
    pub currency_entries: Vec<ExchangeRate>,
    pub advance_entries: Vec<AdvanceEntry>,
}

/// Per-item result report for a batch save
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct BatchOutcome {
    /// Number of items accepted
    pub saved: usize,
    pub failures: Vec<BatchFailure>,
}

impl BatchOutcome {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// One rejected batch item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchFailure {
    /// Expense/advance entry id or currency code identifying the item
    pub item: String,
    pub reason: String,
}

/// Trait for implementing custom entry validation rules
pub trait EntryValidator: Send + Sync {
    /// Validate an expense entry before saving
    fn validate_expense(&self, item: &ExpenseLineItem) -> ClaimResult<()>;

    /// Validate a currency entry before saving
    fn validate_rate(&self, rate: &ExchangeRate) -> ClaimResult<()>;

    /// Validate an advance entry before saving
    fn validate_advance(&self, entry: &AdvanceEntry) -> ClaimResult<()>;
}

/// Default entry validator with the standard rules
pub struct DefaultEntryValidator;

impl EntryValidator for DefaultEntryValidator {
    fn validate_expense(&self, item: &ExpenseLineItem) -> ClaimResult<()> {
        // Non-positive amounts are tolerated (they are excluded from
        // totals), but a positive amount needs a currency to convert
        if item.amount > bigdecimal::BigDecimal::from(0) {
            validation::validate_currency_code(item.currency_trimmed())?;
        }
        Ok(())
    }

    fn validate_rate(&self, rate: &ExchangeRate) -> ClaimResult<()> {
        validation::validate_currency_code(rate.destination_currency.trim())?;
        if rate.rate <= bigdecimal::BigDecimal::from(0) {
            return Err(ClaimError::Validation(
                "Exchange rate must be positive".to_string(),
            ));
        }
        Ok(())
    }

    fn validate_advance(&self, entry: &AdvanceEntry) -> ClaimResult<()> {
        validation::validate_advance_entry(entry)
    }
}
