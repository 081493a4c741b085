use serde::{Deserialize, Serialize};

use crate::error::{Result, VoyageError};

/// Display currencies supported by the platform. All catalog prices are
/// stored in USD and converted on render with a static rate snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Zmw,
    Usd,
    Eur,
    Gbp,
    Zar,
}

impl Currency {
    pub const ALL: [Currency; 5] = [
        Currency::Zmw,
        Currency::Usd,
        Currency::Eur,
        Currency::Gbp,
        Currency::Zar,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Currency::Zmw => "ZMW",
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP",
            Currency::Zar => "ZAR",
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Currency::Zmw => "K",
            Currency::Usd => "$",
            Currency::Eur => "€",
            Currency::Gbp => "£",
            Currency::Zar => "R",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Currency::Zmw => "Zambian Kwacha",
            Currency::Usd => "US Dollar",
            Currency::Eur => "Euro",
            Currency::Gbp => "British Pound",
            Currency::Zar => "South African Rand",
        }
    }

    /// Static conversion rate from USD.
    pub fn rate(self) -> f64 {
        match self {
            Currency::Zmw => 27.5,
            Currency::Usd => 1.0,
            Currency::Eur => 0.85,
            Currency::Gbp => 0.73,
            Currency::Zar => 18.2,
        }
    }

    pub fn from_code(code: &str) -> Result<Self> {
        match code.trim().to_ascii_uppercase().as_str() {
            "ZMW" => Ok(Currency::Zmw),
            "USD" => Ok(Currency::Usd),
            "EUR" => Ok(Currency::Eur),
            "GBP" => Ok(Currency::Gbp),
            "ZAR" => Ok(Currency::Zar),
            _ => Err(VoyageError::UnknownCurrency { code: code.into() }),
        }
    }

    pub fn convert(self, usd: f64) -> f64 {
        usd * self.rate()
    }

    /// Localized price string: symbol, converted amount rounded half away
    /// from zero, zero decimals, thousands separated.
    pub fn format_usd(self, usd: f64) -> String {
        #[allow(clippy::cast_possible_truncation)]
        let rounded = self.convert(usd).round() as i64;
        format!("{}{}", self.symbol(), group_thousands(rounded))
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}) — {}", self.code(), self.symbol(), self.name())
    }
}

fn group_thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        out.push('-');
    }
    let first = digits.len() % 3;
    for (i, ch) in digits.chars().enumerate() {
        if i != 0 && (i + 3 - first) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
