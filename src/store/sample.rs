use chrono::NaiveDate;

use crate::models::{Finance, FinanceId, FinanceType};

/// The three records a fresh session starts with
pub fn sample_finances() -> Vec<Finance> {
    let dec = |day| NaiveDate::from_ymd_opt(2025, 12, day).expect("valid sample date");

    vec![
        Finance::new(FinanceId::new(1), "Food", FinanceType::Expense, 5.70, dec(4)),
        Finance::new(FinanceId::new(2), "Groceries", FinanceType::Expense, 52.34, dec(4)),
        Finance::new(FinanceId::new(3), "Paycheck", FinanceType::Income, 1000.29, dec(8)),
    ]
}
