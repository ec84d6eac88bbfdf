//! End-to-end claim session walkthrough

use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use claims_core::utils::MemoryStorage;
use claims_core::{
    AdvanceEntry, ClaimSession, Employee, ExchangeRate, ExpenseLineItem, Role,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("📋 Claims Core - Claim Walkthrough\n");

    // 1. Employee step
    let employee = Employee {
        name: "Anong S.".to_string(),
        location: "TH".to_string(),
        cost_center: "CC-104".to_string(),
        department: "Field Service".to_string(),
        qad_number: "QAD-2211".to_string(),
        entity: Some("TH01".to_string()),
        email: Some("anong.s@example.com".to_string()),
    };

    let storage = MemoryStorage::new();
    let mut session = ClaimSession::start(
        storage,
        employee,
        "Travel".to_string(),
        "THB".to_string(),
    )
    .await?;
    println!("Started claim {}\n", session.claim().claim_number);

    // 2. Currency step
    session.upsert_currency_entry(ExchangeRate::new("USD".to_string(), BigDecimal::from(35)))?;
    println!("Captured USD rate: 35");

    // 3. Expense step
    let mut hotel = ExpenseLineItem::new(
        1,
        "Travel".to_string(),
        "Hotel".to_string(),
        "USD".to_string(),
        BigDecimal::from(180),
        NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(),
    );
    hotel.gl_code = "6400".to_string();
    session.add_expense_entry(hotel)?;

    let meals = ExpenseLineItem::new(
        2,
        "Travel".to_string(),
        "Meals".to_string(),
        "THB".to_string(),
        BigDecimal::from(950),
        NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
    );
    session.add_expense_entry(meals)?;
    println!("Captured {} expense entries", session.claim().expense_entries.len());

    // 4. Advance step
    let mut advance = AdvanceEntry::new(1);
    advance.given_currency = "THB".to_string();
    advance.given_amount = BigDecimal::from(4000);
    advance.given_paid_through = "Bank transfer".to_string();
    advance.advance_given_date = NaiveDate::from_ymd_opt(2024, 2, 26);
    session.add_advance_entry(advance)?;
    println!(
        "Captured advance, spent locally: THB {}\n",
        session.claim().advance_entries[0].spent_amount_local
    );

    // 5. Summary step
    let outcome = session.save_entries().await?;
    println!("Batch save: {} item(s) accepted, {} failed", outcome.saved, outcome.failures.len());

    let totals = session.save_summary(Role::Claimant).await?;
    println!("  Total Expense:  THB {}", totals.total_expense_local);
    println!("  Advance Amount: THB {}", totals.advance_amount_local);
    println!("  Due to Company: THB {}", totals.due_to_company);
    println!("  Due to You:     THB {}", totals.due_to_you);

    // 6. Submit for approval
    session.submit(Role::Claimant).await?;
    println!(
        "\nSubmitted; claim is now '{}'",
        session.claim().status.as_str()
    );

    Ok(())
}
