use cash_core::{
    currency::{format_currency, format_signed, CurrencyFormat, NegativeStyle},
    domain::{Transaction, TransactionCategory, TransactionKind},
};

#[test]
fn formats_balance_for_brazilian_locale() {
    let format = CurrencyFormat::new("pt-BR", "BRL");
    assert_eq!(format_currency(1234567.891, &format), "R$ 1.234.567,89");
    assert_eq!(format_currency(-10.0, &format), "-R$ 10,00");
    assert_eq!(format_currency(0.0, &format), "R$ 0,00");
}

#[test]
fn formats_with_parentheses_when_requested() {
    let mut format = CurrencyFormat::new("en-US", "USD");
    format.negative_style = NegativeStyle::Parentheses;
    assert_eq!(format_currency(-1234.5, &format), "($1,234.50)");
}

#[test]
fn signed_amount_follows_transaction_kind() {
    let format = CurrencyFormat::default();
    let expense = Transaction::new(
        1,
        "Rent",
        1200.0,
        TransactionKind::Expense,
        TransactionCategory::Fixed,
    );
    let income = Transaction::new(
        2,
        "Salary",
        3000.0,
        TransactionKind::Income,
        TransactionCategory::Fixed,
    );
    assert_eq!(format_signed(&expense, &format), "- R$ 1.200,00");
    assert_eq!(format_signed(&income, &format), "+ R$ 3.000,00");
}
