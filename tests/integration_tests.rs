//! Integration tests for claims-core

use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use claims_core::{
    reconcile, AdvanceEntry, ApprovalStatus, ClaimContext, ClaimSession, ClaimStorage, Employee,
    ExchangeRate, ExpenseLineItem, Role,
};
use claims_core::utils::MemoryStorage;

fn employee(name: &str, qad: &str, location: &str) -> Employee {
    Employee {
        name: name.to_string(),
        location: location.to_string(),
        cost_center: "CC-104".to_string(),
        department: "Field Service".to_string(),
        qad_number: qad.to_string(),
        entity: None,
        email: None,
    }
}

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

fn advance(id: u64, currency: &str, given: i64, returned: i64) -> AdvanceEntry {
    let mut entry = AdvanceEntry::new(id);
    entry.given_currency = currency.to_string();
    entry.given_amount = BigDecimal::from(given);
    entry.given_paid_through = "Bank transfer".to_string();
    entry.advance_given_date = NaiveDate::from_ymd_opt(2024, 2, 20);
    entry.returned_amount = BigDecimal::from(returned);
    entry
}

#[tokio::test]
async fn test_complete_claim_workflow() {
    let storage = MemoryStorage::new();
    let mut session = ClaimSession::start(
        storage,
        employee("Anong S.", "QAD-2211", "TH"),
        "Travel".to_string(),
        "THB".to_string(),
    )
    .await
    .unwrap();

    // Currency-entry step
    session
        .upsert_currency_entry(ExchangeRate::new("USD".to_string(), BigDecimal::from(35)))
        .unwrap();

    // Expense-entry step: one foreign item, one local, one per-diem
    session.add_expense_entry(expense(1, "Hotel", "USD", 100)).unwrap();
    session.add_expense_entry(expense(2, "Meals", "THB", 1200)).unwrap();
    session.add_expense_entry(expense(3, "Per diem", "THB", 800)).unwrap();

    // Advance step: 2000 THB given, 500 returned
    session.add_advance_entry(advance(1, "THB", 2000, 500)).unwrap();

    // Claimant summary: USD converts by multiplying, per-diem folds in
    let totals = session.save_summary(Role::Claimant).await.unwrap();
    assert_eq!(totals.total_expense_local, BigDecimal::from(5500)); // 3500 + 1200 + 800
    assert_eq!(totals.per_diem_total_local, BigDecimal::from(0));
    assert_eq!(totals.advance_amount_local, BigDecimal::from(1500));
    assert_eq!(totals.due_to_you, BigDecimal::from(4000));
    assert_eq!(totals.due_to_company, BigDecimal::from(0));
    assert_eq!(
        totals.per_currency_totals.get("THB"),
        Some(&BigDecimal::from(2000))
    );
    assert_eq!(
        totals.per_currency_totals.get("USD"),
        Some(&BigDecimal::from(100))
    );

    // Submit for approval
    session.submit(Role::Claimant).await.unwrap();
    assert_eq!(
        session.claim().status,
        ApprovalStatus::PendingAtFinanceController
    );
}

#[tokio::test]
async fn test_batch_entry_persistence_reports_per_item_outcomes() {
    let storage = MemoryStorage::new();
    let mut session = ClaimSession::start(
        storage,
        employee("Anong S.", "QAD-2211", "TH"),
        "Travel".to_string(),
        "THB".to_string(),
    )
    .await
    .unwrap();

    session.add_expense_entry(expense(1, "Hotel", "THB", 900)).unwrap();
    session
        .upsert_currency_entry(ExchangeRate::new("USD".to_string(), BigDecimal::from(35)))
        .unwrap();
    session.add_advance_entry(advance(1, "THB", 1000, 0)).unwrap();

    let outcome = session.save_entries().await.unwrap();
    assert!(outcome.is_complete());
    assert_eq!(outcome.saved, 3);
}

#[tokio::test]
async fn test_claim_listing_respects_context_scope() {
    let mut storage = MemoryStorage::new();

    let own = claims_core::Claim::new(
        employee("Anong S.", "QAD-2211", "TH"),
        "Travel".to_string(),
        "THB".to_string(),
    );
    let other = claims_core::Claim::new(
        employee("Mikael B.", "QAD-5120", "SE"),
        "Travel".to_string(),
        "SEK".to_string(),
    );
    storage.save_claim(&own).await.unwrap();
    storage.save_claim(&other).await.unwrap();

    // A claimant only sees their own claims
    let ctx = ClaimContext::new("QAD-2211".to_string(), Role::Claimant);
    let visible = storage.list_claims(&ctx).await.unwrap();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].employee.qad_number, "QAD-2211");

    // The finance controller sees everything without a site scope
    let fbc = ClaimContext::new("FIN-1".to_string(), Role::FinanceController);
    assert_eq!(storage.list_claims(&fbc).await.unwrap().len(), 2);

    // And only the site's claims with one
    let mut scoped = ClaimContext::new("FIN-1".to_string(), Role::FinanceController);
    scoped.site = Some("SE".to_string());
    let visible = storage.list_claims(&scoped).await.unwrap();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].employee.location, "SE");
}

#[tokio::test]
async fn test_cancel_and_resubmit_lifecycle() {
    let storage = MemoryStorage::new();
    let mut session = ClaimSession::start(
        storage,
        employee("Anong S.", "QAD-2211", "TH"),
        "Travel".to_string(),
        "THB".to_string(),
    )
    .await
    .unwrap();

    session.add_expense_entry(expense(1, "Hotel", "THB", 400)).unwrap();
    session.submit(Role::Claimant).await.unwrap();

    // Pull back for corrections, then cancel entirely
    session.resubmit().await.unwrap();
    assert_eq!(session.claim().status, ApprovalStatus::Draft);
    assert!(session.claim().is_resubmitted);

    session.cancel().await.unwrap();
    assert_eq!(session.claim().status, ApprovalStatus::Cancelled);
    assert!(session.cancel().await.is_err());
}

#[test]
fn test_fbc_summary_breaks_out_per_diem() {
    // THB 500 per-diem with THB local currency under the
    // finance-controller view
    let expenses = vec![expense(1, "Per diem", "THB", 500)];
    let totals = reconcile(&expenses, &[], &[], "THB", Role::FinanceController);
    assert_eq!(totals.per_diem_total_local, BigDecimal::from(500));
    assert_eq!(totals.total_expense_local, BigDecimal::from(0));

    // Per-diem still counts toward the settlement for this role
    assert_eq!(totals.due_to_you, BigDecimal::from(500));
    assert_eq!(totals.due_to_company, BigDecimal::from(0));
}

#[test]
fn test_over_returned_advance_excluded_from_total() {
    // Returned more than given nets to -50, which must
    // contribute 0 rather than -50
    let mut entry = advance(1, "THB", 200, 250);
    claims_core::reconciliation::advances::derive_spent(
        &mut entry,
        &claims_core::ExchangeRateTable::new(),
    );
    assert_eq!(entry.spent_amount, BigDecimal::from(-50));

    let totals = reconcile(&[], &[], &[entry], "THB", Role::Claimant);
    assert_eq!(totals.advance_amount_local, BigDecimal::from(0));
    assert_eq!(totals.due_to_company, BigDecimal::from(0));
    assert_eq!(totals.due_to_you, BigDecimal::from(0));
}

#[test]
fn test_totals_serialize_for_persistence() {
    let expenses = vec![expense(1, "Hotel", "THB", 1000)];
    let totals = reconcile(&expenses, &[], &[], "THB", Role::Claimant);

    let json = serde_json::to_string(&totals).unwrap();
    let back: claims_core::ClaimTotals = serde_json::from_str(&json).unwrap();
    assert_eq!(back, totals);
}
