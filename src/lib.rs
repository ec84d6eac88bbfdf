//! # Claims Core
//!
//! A library for expense-claim processing: multi-currency reconciliation,
//! advance settlement, and the claim approval workflow.
//!
//! ## Features
//!
//! - **Reconciliation engine**: pure functions turning expense, currency,
//!   and advance entries into per-currency totals, local-currency
//!   equivalents, and the due-to-company / due-to-you settlement
//! - **Role-based policies**: claimant and finance-controller views apply
//!   different conversion and per-diem aggregation rules, selected by an
//!   explicit role parameter
//! - **Claim sessions**: draft editing with entry validation and the
//!   linear approval workflow (draft, approval stations, finance
//!   controller, approved/rejected/cancelled)
//! - **Storage abstraction**: backend-agnostic design with a trait-based
//!   storage seam and batch entry persistence
//!
//! ## Quick Start
//!
//! ```rust
//! use claims_core::reconciliation::reconcile;
//! use claims_core::{ExchangeRate, ExpenseLineItem, Role};
//! use bigdecimal::BigDecimal;
//! use chrono::NaiveDate;
//!
//! let expenses = vec![ExpenseLineItem::new(
//!     1,
//!     "Travel".to_string(),
//!     "Hotel".to_string(),
//!     "USD".to_string(),
//!     BigDecimal::from(100),
//!     NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
//! )];
//! let rates = vec![ExchangeRate::new("USD".to_string(), BigDecimal::from(80))];
//!
//! let totals = reconcile(&expenses, &rates, &[], "THB", Role::Claimant);
//! assert_eq!(totals.total_expense_local, BigDecimal::from(8000));
//! ```

pub mod claim;
pub mod reconciliation;
pub mod traits;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use claim::*;
pub use reconciliation::{reconcile, ExchangeRateTable, ExpenseBreakdown, Settlement};
pub use traits::*;
pub use types::*;
