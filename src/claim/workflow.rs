//! Approval workflow for a claim document

use serde::{Deserialize, Serialize};

use crate::types::{ClaimError, ClaimResult};

/// Which approval stations a claim must pass before reaching finance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ApprovalRequirements {
    pub needs_n1: bool,
    pub needs_n2: bool,
    pub needs_hr: bool,
}

/// Linear document status of a claim
///
/// Draft moves through the pending stations to the finance controller and
/// ends Approved or Rejected; Cancelled is reachable from any non-terminal
/// state, and a rejected or pending claim can return to Draft for
/// resubmission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ApprovalStatus {
    Draft,
    PendingAtN1,
    PendingAtN2,
    PendingAtHr,
    PendingAtFinanceController,
    Approved,
    Rejected,
    Cancelled,
}

impl ApprovalStatus {
    /// Wire spelling used in persistence payloads
    pub fn as_str(&self) -> &'static str {
        match self {
            ApprovalStatus::Draft => "draft",
            ApprovalStatus::PendingAtN1 => "pendingAtN1",
            ApprovalStatus::PendingAtN2 => "pendingAtN2",
            ApprovalStatus::PendingAtHr => "pendingAtHr",
            ApprovalStatus::PendingAtFinanceController => "pendingAtFinanceController",
            ApprovalStatus::Approved => "approved",
            ApprovalStatus::Rejected => "rejected",
            ApprovalStatus::Cancelled => "cancelled",
        }
    }

    /// Whether the claim can still be edited
    pub fn is_editable(&self) -> bool {
        matches!(self, ApprovalStatus::Draft)
    }

    /// Whether the workflow has ended
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            ApprovalStatus::Approved | ApprovalStatus::Rejected | ApprovalStatus::Cancelled
        )
    }

    fn is_pending(&self) -> bool {
        matches!(
            self,
            ApprovalStatus::PendingAtN1
                | ApprovalStatus::PendingAtN2
                | ApprovalStatus::PendingAtHr
                | ApprovalStatus::PendingAtFinanceController
        )
    }

    /// The station a draft submission lands on first
    pub fn first_pending(requirements: ApprovalRequirements) -> ApprovalStatus {
        if requirements.needs_n1 {
            ApprovalStatus::PendingAtN1
        } else if requirements.needs_n2 {
            ApprovalStatus::PendingAtN2
        } else if requirements.needs_hr {
            ApprovalStatus::PendingAtHr
        } else {
            ApprovalStatus::PendingAtFinanceController
        }
    }

    /// Whether moving to `to` is a legal transition
    pub fn can_transition(&self, to: ApprovalStatus) -> bool {
        use ApprovalStatus::*;
        match (self, to) {
            // Cancellation from any live state
            (from, Cancelled) if !from.is_terminal() => true,
            // Submission from draft to any station
            (Draft, to) if to.is_pending() => true,
            // Forward through the chain, or rejection at any station
            (PendingAtN1, PendingAtN2 | PendingAtHr | PendingAtFinanceController | Rejected) => true,
            (PendingAtN2, PendingAtHr | PendingAtFinanceController | Rejected) => true,
            (PendingAtHr, PendingAtFinanceController | Rejected) => true,
            (PendingAtFinanceController, Approved | Rejected) => true,
            // Recall / resubmission back to draft
            (Rejected, Draft) => true,
            (from, Draft) if from.is_pending() => true,
            _ => false,
        }
    }

    /// Apply a transition, failing fast on an illegal move
    pub fn transition(self, to: ApprovalStatus) -> ClaimResult<ApprovalStatus> {
        if self.can_transition(to) {
            Ok(to)
        } else {
            Err(ClaimError::InvalidTransition(format!(
                "{} -> {}",
                self.as_str(),
                to.as_str()
            )))
        }
    }
}
