//! Money type with decimal precision and currency.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! This type wraps `rust_decimal::Decimal` for arbitrary precision.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Represents a monetary amount with currency.
///
/// Uses `Decimal` internally to avoid floating-point precision errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    /// The amount in major units (e.g., euros, with cents as decimals).
    pub amount: Decimal,
    /// ISO 4217 currency code (e.g., "EUR").
    pub currency: Currency,
}

/// ISO 4217 currency codes supported by the system.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// Euro
    #[default]
    Eur,
    /// US Dollar
    Usd,
    /// Pound Sterling
    Gbp,
}

/// Locale conventions used when rendering an amount for display.
struct DisplayStyle {
    symbol: &'static str,
    symbol_after: bool,
    group_separator: char,
    decimal_separator: char,
    /// Integer digits needed before grouping kicks in.
    min_grouping_digits: usize,
}

impl Currency {
    const fn display_style(self) -> DisplayStyle {
        match self {
            // es-ES: "1234,56 €", "12.345,67 €"
            Self::Eur => DisplayStyle {
                symbol: "€",
                symbol_after: true,
                group_separator: '.',
                decimal_separator: ',',
                min_grouping_digits: 5,
            },
            Self::Usd => DisplayStyle {
                symbol: "$",
                symbol_after: false,
                group_separator: ',',
                decimal_separator: '.',
                min_grouping_digits: 4,
            },
            Self::Gbp => DisplayStyle {
                symbol: "£",
                symbol_after: false,
                group_separator: ',',
                decimal_separator: '.',
                min_grouping_digits: 4,
            },
        }
    }
}

impl Money {
    /// Creates a new Money instance.
    #[must_use]
    pub const fn new(amount: Decimal, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Creates an amount in euros.
    #[must_use]
    pub const fn eur(amount: Decimal) -> Self {
        Self::new(amount, Currency::Eur)
    }

    /// Creates a zero amount in the specified currency.
    #[must_use]
    pub fn zero(currency: Currency) -> Self {
        Self {
            amount: Decimal::ZERO,
            currency,
        }
    }

    /// Returns true if the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Returns true if the amount is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.amount.is_sign_negative() && !self.amount.is_zero()
    }

    /// Renders the amount the way the browser `Intl` formatter does for the
    /// currency's home locale, always with two decimals.
    ///
    /// Euros follow es-ES rules: the symbol trails after a no-break space and
    /// thousands are only grouped from five integer digits on.
    #[must_use]
    pub fn format_localized(&self) -> String {
        let style = self.currency.display_style();
        let rounded = self
            .amount
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
            "-"
        } else {
            ""
        };

        let digits = format!("{:.2}", rounded.abs());
        let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));
        let grouped = group_digits(int_part, style.group_separator, style.min_grouping_digits);
        let number = format!("{grouped}{}{frac_part}", style.decimal_separator);

        if style.symbol_after {
            format!("{sign}{number}\u{a0}{}", style.symbol)
        } else {
            format!("{sign}{}{number}", style.symbol)
        }
    }
}

fn group_digits(int_part: &str, separator: char, min_grouping_digits: usize) -> String {
    if int_part.len() < min_grouping_digits {
        return int_part.to_string();
    }

    let mut out = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.amount.round_dp(2), self.currency)
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Eur => write!(f, "EUR"),
            Self::Usd => write!(f, "USD"),
            Self::Gbp => write!(f, "GBP"),
        }
    }
}

impl std::str::FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "EUR" => Ok(Self::Eur),
            "USD" => Ok(Self::Usd),
            "GBP" => Ok(Self::Gbp),
            _ => Err(format!("Unknown currency: {s}")),
        }
    }
}
