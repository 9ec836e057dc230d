//! Locale-aware money formatting for balances and transaction amounts.

use serde::{Deserialize, Serialize};

use crate::domain::transaction::Transaction;

/// ISO 4217 currency representation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct CurrencyCode(pub String);

impl CurrencyCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CurrencyCode {
    fn default() -> Self {
        Self::new("BRL")
    }
}

/// Separators used when rendering numbers for a language tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleConfig {
    pub language_tag: String,
    pub decimal_separator: char,
    pub grouping_separator: char,
}

impl LocaleConfig {
    pub fn from_tag(tag: &str) -> Self {
        let (decimal_separator, grouping_separator) =
            match tag.trim().to_ascii_lowercase().as_str() {
                "pt-br" | "pt_br" | "pt" | "de-de" | "es-es" => (',', '.'),
                "fr-fr" => (',', ' '),
                _ => ('.', ','),
            };
        Self {
            language_tag: tag.trim().to_string(),
            decimal_separator,
            grouping_separator,
        }
    }
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self::from_tag("pt-BR")
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum NegativeStyle {
    #[default]
    Sign,
    Parentheses,
}

/// Everything needed to render an amount.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CurrencyFormat {
    pub code: CurrencyCode,
    pub locale: LocaleConfig,
    pub negative_style: NegativeStyle,
}

impl CurrencyFormat {
    pub fn new(locale_tag: &str, currency: &str) -> Self {
        Self {
            code: CurrencyCode::new(currency),
            locale: LocaleConfig::from_tag(locale_tag),
            negative_style: NegativeStyle::Sign,
        }
    }
}

pub fn symbol_for(code: &str) -> String {
    match code {
        "BRL" => "R$".into(),
        "USD" => "$".into(),
        "EUR" => "€".into(),
        "GBP" => "£".into(),
        "JPY" => "¥".into(),
        _ => code.into(),
    }
}

pub fn minor_units_for(code: &str) -> u8 {
    match code {
        "JPY" => 0,
        "KWD" | "BHD" => 3,
        _ => 2,
    }
}

/// Multi-letter symbols are separated from the digits by a space.
fn symbol_spacing(symbol: &str) -> &'static str {
    if symbol.chars().count() > 1 {
        " "
    } else {
        ""
    }
}

pub fn format_number(locale: &LocaleConfig, value: f64, precision: u8) -> String {
    let body = format!("{:.*}", precision as usize, value);
    let (int_part, frac_part) = match body.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (body.as_str(), None),
    };
    let grouped = match int_part.strip_prefix('-') {
        Some(digits) => format!("-{}", group_digits(digits, locale.grouping_separator)),
        None => group_digits(int_part, locale.grouping_separator),
    };
    match frac_part {
        Some(frac) => format!("{}{}{}", grouped, locale.decimal_separator, frac),
        None => grouped,
    }
}

fn group_digits(digits: &str, separator: char) -> String {
    let mut grouped = String::new();
    for (count, ch) in digits.chars().rev().enumerate() {
        if count != 0 && count % 3 == 0 {
            grouped.insert(0, separator);
        }
        grouped.insert(0, ch);
    }
    grouped
}

pub fn format_currency(amount: f64, format: &CurrencyFormat) -> String {
    let precision = minor_units_for(format.code.as_str());
    let body = format_number(&format.locale, amount.abs(), precision);
    let symbol = symbol_for(format.code.as_str());
    let unsigned = format!("{}{}{}", symbol, symbol_spacing(&symbol), body);
    if amount < 0.0 && body.chars().any(|ch| ch.is_ascii_digit() && ch != '0') {
        match format.negative_style {
            NegativeStyle::Sign => format!("-{unsigned}"),
            NegativeStyle::Parentheses => format!("({unsigned})"),
        }
    } else {
        unsigned
    }
}

/// Renders a transaction amount with the sign implied by its kind,
/// e.g. `+ R$ 10,00` or `- R$ 10,00`.
pub fn format_signed(transaction: &Transaction, format: &CurrencyFormat) -> String {
    format!(
        "{} {}",
        transaction.kind.sign(),
        format_currency(transaction.amount, format)
    )
}
