//! Finance record display formatting
//!
//! Formats records for terminal output as cards, a list table, and a
//! detail view.

use crate::form::DATE_FORMAT;
use crate::models::Finance;

/// Format an amount with a currency symbol and two decimals
///
/// Negative amounts put the sign before the symbol (`-$3.50`).
pub fn format_amount(amount: f64, currency: &str) -> String {
    if amount < 0.0 {
        format!("-{}{:.2}", currency, amount.abs())
    } else {
        format!("{}{:.2}", currency, amount)
    }
}

/// Format a record as a two-line card
pub fn format_finance_card(finance: &Finance, currency: &str) -> String {
    format!(
        "Date: {} | {}\nAmount: {}  {}",
        finance.date.format(DATE_FORMAT),
        finance.name,
        format_amount(finance.amount, currency),
        finance.category
    )
}

/// Format records as a table, followed by income/expense totals
pub fn format_finance_list(finances: &[Finance], currency: &str) -> String {
    if finances.is_empty() {
        return "No finance records.\n".to_string();
    }

    let name_width = finances
        .iter()
        .map(|f| f.name.chars().count())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut output = String::new();
    output.push_str(&format!(
        "{:>4}  {:10}  {:<name_width$}  {:8}  {:>12}\n",
        "ID",
        "Date",
        "Name",
        "Type",
        "Amount",
        name_width = name_width,
    ));
    output.push_str(&"-".repeat(4 + 2 + 10 + 2 + name_width + 2 + 8 + 2 + 12));
    output.push('\n');

    for finance in finances {
        output.push_str(&format!(
            "{:>4}  {:10}  {:<name_width$}  {:8}  {:>12}\n",
            finance.id.get(),
            finance.date.format(DATE_FORMAT).to_string(),
            finance.name,
            finance.category.as_str(),
            format_amount(finance.amount, currency),
            name_width = name_width,
        ));
    }

    let income: f64 = finances
        .iter()
        .filter(|f| f.category.is_income())
        .map(|f| f.amount)
        .sum();
    let expenses: f64 = finances
        .iter()
        .filter(|f| !f.category.is_income())
        .map(|f| f.amount)
        .sum();
    let net: f64 = finances.iter().map(Finance::signed_amount).sum();

    output.push('\n');
    output.push_str(&format!("Income:   {:>12}\n", format_amount(income, currency)));
    output.push_str(&format!("Expenses: {:>12}\n", format_amount(expenses, currency)));
    output.push_str(&format!("Net:      {:>12}\n", format_amount(net, currency)));

    output
}

/// Format every field of a record
pub fn format_finance_details(finance: &Finance, currency: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Finance:  {}\n", finance.id));
    output.push_str(&format!("Name:     {}\n", finance.name));
    output.push_str(&format!("Date:     {}\n", finance.date.format(DATE_FORMAT)));
    output.push_str(&format!("Category: {}\n", finance.category));
    output.push_str(&format!("Amount:   {}\n", format_amount(finance.amount, currency)));

    output
}
