//! Claim editing session over a storage backend

use uuid::Uuid;

use crate::claim::{ApprovalStatus, Claim};
use crate::reconciliation::{self, advances};
use crate::traits::*;
use crate::types::*;

/// Owns a claim for the duration of editing
///
/// Mirrors the wizard flow: entries are captured step by step while the
/// claim is in Draft, the summary step runs the reconciliation engine, and
/// submit / cancel / resubmit drive the approval workflow. All entry
/// mutations are rejected once the claim has left Draft.
pub struct ClaimSession<S: ClaimStorage> {
    storage: S,
    claim: Claim,
    validator: Box<dyn EntryValidator>,
}

impl<S: ClaimStorage> ClaimSession<S> {
    /// Start a new draft claim and persist it
    pub async fn start(
        mut storage: S,
        employee: Employee,
        category: String,
        local_currency: String,
    ) -> ClaimResult<Self> {
        let claim = Claim::new(employee, category, local_currency);
        storage.save_claim(&claim).await?;
        Ok(Self {
            storage,
            claim,
            validator: Box::new(DefaultEntryValidator),
        })
    }

    /// Resume editing an existing claim
    pub async fn resume(storage: S, claim_id: &Uuid) -> ClaimResult<Self> {
        let claim = storage
            .get_claim(claim_id)
            .await?
            .ok_or_else(|| ClaimError::ClaimNotFound(claim_id.to_string()))?;
        Ok(Self {
            storage,
            claim,
            validator: Box::new(DefaultEntryValidator),
        })
    }

    /// Replace the entry validator
    pub fn with_validator(mut self, validator: Box<dyn EntryValidator>) -> Self {
        self.validator = validator;
        self
    }

    /// The claim being edited
    pub fn claim(&self) -> &Claim {
        &self.claim
    }

    fn ensure_editable(&self) -> ClaimResult<()> {
        if self.claim.status.is_editable() {
            Ok(())
        } else {
            Err(ClaimError::Validation(format!(
                "Claim {} is not editable in status '{}'",
                self.claim.claim_number,
                self.claim.status.as_str()
            )))
        }
    }

    // Expense entries

    /// Add an expense entry
    pub fn add_expense_entry(&mut self, item: ExpenseLineItem) -> ClaimResult<()> {
        self.ensure_editable()?;
        self.validator.validate_expense(&item)?;
        self.claim.expense_entries.push(item);
        self.claim.timestamps.touch();
        Ok(())
    }

    /// Update an expense entry in place
    pub fn update_expense_entry(&mut self, item: ExpenseLineItem) -> ClaimResult<()> {
        self.ensure_editable()?;
        self.validator.validate_expense(&item)?;
        let existing = self
            .claim
            .expense_entries
            .iter_mut()
            .find(|entry| entry.id == item.id)
            .ok_or(ClaimError::EntryNotFound(item.id))?;
        *existing = item;
        self.claim.timestamps.touch();
        Ok(())
    }

    /// Remove an expense entry
    pub fn remove_expense_entry(&mut self, id: u64) -> ClaimResult<()> {
        self.ensure_editable()?;
        let before = self.claim.expense_entries.len();
        self.claim.expense_entries.retain(|entry| entry.id != id);
        if self.claim.expense_entries.len() == before {
            return Err(ClaimError::EntryNotFound(id));
        }
        self.claim.timestamps.touch();
        Ok(())
    }

    // Currency entries

    /// Add or replace the rate for a destination currency
    pub fn upsert_currency_entry(&mut self, rate: ExchangeRate) -> ClaimResult<()> {
        self.ensure_editable()?;
        self.validator.validate_rate(&rate)?;
        match self
            .claim
            .currency_entries
            .iter_mut()
            .find(|entry| entry.destination_currency == rate.destination_currency)
        {
            Some(existing) => *existing = rate,
            None => self.claim.currency_entries.push(rate),
        }
        self.claim.timestamps.touch();
        Ok(())
    }

    /// Remove the rate for a destination currency
    pub fn remove_currency_entry(&mut self, destination_currency: &str) -> ClaimResult<()> {
        self.ensure_editable()?;
        let before = self.claim.currency_entries.len();
        self.claim
            .currency_entries
            .retain(|entry| entry.destination_currency != destination_currency);
        if self.claim.currency_entries.len() == before {
            return Err(ClaimError::Validation(format!(
                "No rate captured for currency '{}'",
                destination_currency
            )));
        }
        self.claim.timestamps.touch();
        Ok(())
    }

    // Advance entries

    /// Add an advance entry, deriving its spent amounts at save time
    pub fn add_advance_entry(&mut self, mut entry: AdvanceEntry) -> ClaimResult<()> {
        self.ensure_editable()?;
        self.validator.validate_advance(&entry)?;
        advances::derive_spent(&mut entry, &self.claim.rate_table());
        self.claim.advance_entries.push(entry);
        self.claim.timestamps.touch();
        Ok(())
    }

    /// Update an advance entry, re-deriving its spent amounts
    pub fn update_advance_entry(&mut self, mut entry: AdvanceEntry) -> ClaimResult<()> {
        self.ensure_editable()?;
        self.validator.validate_advance(&entry)?;
        advances::derive_spent(&mut entry, &self.claim.rate_table());
        let existing = self
            .claim
            .advance_entries
            .iter_mut()
            .find(|candidate| candidate.id == entry.id)
            .ok_or(ClaimError::EntryNotFound(entry.id))?;
        *existing = entry;
        self.claim.timestamps.touch();
        Ok(())
    }

    /// Remove an advance entry
    pub fn remove_advance_entry(&mut self, id: u64) -> ClaimResult<()> {
        self.ensure_editable()?;
        let before = self.claim.advance_entries.len();
        self.claim.advance_entries.retain(|entry| entry.id != id);
        if self.claim.advance_entries.len() == before {
            return Err(ClaimError::EntryNotFound(id));
        }
        self.claim.timestamps.touch();
        Ok(())
    }

    // Summary and workflow

    /// Run the reconciliation engine over the current entries
    pub fn summarize(&self, role: Role) -> ClaimTotals {
        reconciliation::reconcile(
            &self.claim.expense_entries,
            &self.claim.currency_entries,
            &self.claim.advance_entries,
            &self.claim.local_currency,
            role,
        )
    }

    /// Compute and persist the financial summary onto the claim
    pub async fn save_summary(&mut self, role: Role) -> ClaimResult<ClaimTotals> {
        let totals = self.summarize(role);
        self.claim.totals = Some(totals.clone());
        self.claim.timestamps.touch();
        self.storage.update_claim(&self.claim).await?;
        Ok(totals)
    }

    /// Persist the current entry lists as one batch
    pub async fn save_entries(&mut self) -> ClaimResult<BatchOutcome> {
        let batch = EntryBatch {
            expense_entries: self.claim.expense_entries.clone(),
            currency_entries: self.claim.currency_entries.clone(),
            advance_entries: self.claim.advance_entries.clone(),
        };
        self.storage.save_entries_batch(&self.claim.id, batch).await
    }

    /// Submit the draft for approval, saving the summary first
    pub async fn submit(&mut self, role: Role) -> ClaimResult<()> {
        let next = ApprovalStatus::first_pending(self.claim.approval_requirements);
        self.claim.status = self.claim.status.transition(next)?;
        let totals = self.summarize(role);
        self.claim.totals = Some(totals);
        self.claim.timestamps.touch();
        self.storage.update_claim(&self.claim).await
    }

    /// Cancel the claim
    pub async fn cancel(&mut self) -> ClaimResult<()> {
        self.claim.status = self.claim.status.transition(ApprovalStatus::Cancelled)?;
        self.claim.timestamps.touch();
        self.storage.update_claim(&self.claim).await
    }

    /// Return the claim to draft for another editing round
    pub async fn resubmit(&mut self) -> ClaimResult<()> {
        self.claim.status = self.claim.status.transition(ApprovalStatus::Draft)?;
        self.claim.is_resubmitted = true;
        self.claim.timestamps.touch();
        self.storage.update_claim(&self.claim).await
    }
}
