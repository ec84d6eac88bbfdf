//! In-memory storage implementation for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use uuid::Uuid;

use crate::claim::Claim;
use crate::traits::*;
use crate::types::*;

/// In-memory claim storage for testing and development
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    claims: Arc<RwLock<HashMap<Uuid, Claim>>>,
}

impl MemoryStorage {
    /// Create a new memory storage instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all data (useful for testing)
    pub fn clear(&self) {
        self.claims.write().unwrap().clear();
    }
}

#[async_trait]
impl ClaimStorage for MemoryStorage {
    async fn save_claim(&mut self, claim: &Claim) -> ClaimResult<()> {
        self.claims
            .write()
            .unwrap()
            .insert(claim.id, claim.clone());
        Ok(())
    }

    async fn get_claim(&self, claim_id: &Uuid) -> ClaimResult<Option<Claim>> {
        Ok(self.claims.read().unwrap().get(claim_id).cloned())
    }

    async fn update_claim(&mut self, claim: &Claim) -> ClaimResult<()> {
        let mut claims = self.claims.write().unwrap();
        if claims.contains_key(&claim.id) {
            claims.insert(claim.id, claim.clone());
            Ok(())
        } else {
            Err(ClaimError::ClaimNotFound(claim.id.to_string()))
        }
    }

    async fn delete_claim(&mut self, claim_id: &Uuid) -> ClaimResult<()> {
        if self.claims.write().unwrap().remove(claim_id).is_some() {
            Ok(())
        } else {
            Err(ClaimError::ClaimNotFound(claim_id.to_string()))
        }
    }

    async fn list_claims(&self, context: &ClaimContext) -> ClaimResult<Vec<Claim>> {
        let claims = self.claims.read().unwrap();
        let visible: Vec<Claim> = claims
            .values()
            .filter(|claim| match context.role {
                Role::FinanceController => context
                    .site
                    .as_ref()
                    .is_none_or(|site| &claim.employee.location == site),
                Role::Claimant => claim.employee.qad_number == context.user_id,
            })
            .cloned()
            .collect();
        Ok(visible)
    }

    async fn save_entries_batch(
        &mut self,
        claim_id: &Uuid,
        batch: EntryBatch,
    ) -> ClaimResult<BatchOutcome> {
        let mut claims = self.claims.write().unwrap();
        let claim = claims
            .get_mut(claim_id)
            .ok_or_else(|| ClaimError::ClaimNotFound(claim_id.to_string()))?;

        let validator = DefaultEntryValidator;
        let mut outcome = BatchOutcome::default();

        let mut expenses = Vec::new();
        for item in batch.expense_entries {
            match validator.validate_expense(&item) {
                Ok(()) => {
                    expenses.push(item);
                    outcome.saved += 1;
                }
                Err(err) => outcome.failures.push(BatchFailure {
                    item: format!("expense:{}", item.id),
                    reason: err.to_string(),
                }),
            }
        }

        let mut currencies = Vec::new();
        for rate in batch.currency_entries {
            match validator.validate_rate(&rate) {
                Ok(()) => {
                    currencies.push(rate);
                    outcome.saved += 1;
                }
                Err(err) => outcome.failures.push(BatchFailure {
                    item: format!("currency:{}", rate.destination_currency),
                    reason: err.to_string(),
                }),
            }
        }

        let mut advances = Vec::new();
        for entry in batch.advance_entries {
            match validator.validate_advance(&entry) {
                Ok(()) => {
                    advances.push(entry);
                    outcome.saved += 1;
                }
                Err(err) => outcome.failures.push(BatchFailure {
                    item: format!("advance:{}", entry.id),
                    reason: err.to_string(),
                }),
            }
        }

        claim.expense_entries = expenses;
        claim.currency_entries = currencies;
        claim.advance_entries = advances;
        claim.timestamps.touch();

        Ok(outcome)
    }
}
