//! Reconciliation engine examples

use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use claims_core::{reconcile, AdvanceEntry, ExchangeRate, ExpenseLineItem, Role};
use claims_core::reconciliation::advances;
use claims_core::ExchangeRateTable;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("🧾 Claims Core - Settlement Report Examples\n");

    let date = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();

    // Currency entries captured during the trip
    let currency_entries = vec![
        ExchangeRate::new("USD".to_string(), BigDecimal::from(35)),
        ExchangeRate::new("EUR".to_string(), BigDecimal::from(38)),
    ];

    // Expense entries in three currencies, including a per-diem allowance
    let mut hotel = ExpenseLineItem::new(
        1,
        "Travel".to_string(),
        "Hotel".to_string(),
        "USD".to_string(),
        BigDecimal::from(220),
        date,
    );
    hotel.remarks = "Two nights, Hamburg".to_string();

    let taxi = ExpenseLineItem::new(
        2,
        "Travel".to_string(),
        "Taxi".to_string(),
        "EUR".to_string(),
        BigDecimal::from(45),
        date,
    );
    let meals = ExpenseLineItem::new(
        3,
        "Travel".to_string(),
        "Meals".to_string(),
        "THB".to_string(),
        BigDecimal::from(1600),
        date,
    );
    let per_diem = ExpenseLineItem::new(
        4,
        "Travel".to_string(),
        "Per diem".to_string(),
        "THB".to_string(),
        BigDecimal::from(2400),
        date,
    );
    let expenses = vec![hotel, taxi, meals, per_diem];

    // Advance of 5000 THB, 1000 returned
    let rates = ExchangeRateTable::from_entries(&currency_entries);
    let mut advance = AdvanceEntry::new(1);
    advance.given_currency = "THB".to_string();
    advance.given_amount = BigDecimal::from(5000);
    advance.given_paid_through = "Bank transfer".to_string();
    advance.advance_given_date = NaiveDate::from_ymd_opt(2024, 2, 26);
    advance.returned_currency = "THB".to_string();
    advance.returned_amount = BigDecimal::from(1000);
    advance.returned_paid_through = "Cash".to_string();
    advance.advance_return_date = NaiveDate::from_ymd_opt(2024, 3, 6);
    advances::derive_spent(&mut advance, &rates);
    let advance_entries = vec![advance];

    // 1. Claimant view: foreign amounts multiply by the rate, per-diem
    //    folds into the main total
    println!("👤 Claimant view:");
    let claimant = reconcile(&expenses, &currency_entries, &advance_entries, "THB", Role::Claimant);
    println!("  Total Expense:  THB {}", claimant.total_expense_local);
    println!("  Advance Amount: THB {}", claimant.advance_amount_local);
    println!("  Due to Company: THB {}", claimant.due_to_company);
    println!("  Due to You:     THB {}", claimant.due_to_you);
    println!();

    // 2. Finance-controller view: foreign amounts divide by the rate and
    //    per-diem is reported separately
    println!("🏦 Finance-controller view:");
    let fbc = reconcile(
        &expenses,
        &currency_entries,
        &advance_entries,
        "THB",
        Role::FinanceController,
    );
    println!("  Total Expense:   THB {}", fbc.total_expense_local);
    println!("  Per Diem Amount: THB {}", fbc.per_diem_total_local);
    println!("  Advance Amount:  THB {}", fbc.advance_amount_local);
    println!("  Due to Company:  THB {}", fbc.due_to_company);
    println!("  Due to You:      THB {}", fbc.due_to_you);
    println!();

    // 3. Raw per-currency totals, shared by both views
    println!("💱 Per-currency totals:");
    let mut currencies: Vec<_> = claimant.per_currency_totals.iter().collect();
    currencies.sort_by(|a, b| a.0.cmp(b.0));
    for (currency, total) in currencies {
        println!("  {}: {}", currency, total);
    }

    Ok(())
}
