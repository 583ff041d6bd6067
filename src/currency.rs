// 💱 Currency Converter - Mock rate table behind a simulated network hop
// Lookups are tagged with a sequence number; only the latest issued lookup may update the display

use crate::error::{ToolError, ToolResult};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

// ============================================================================
// CURRENCY
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Usd,
    Eur,
    Gbp,
    Jpy,
    Aud,
    Cad,
    Chf,
    Cny,
    Sek,
    Nzd,
    Mxn,
    Sgd,
    Hkd,
    Nok,
    Inr,
    Krw,
    Rub,
    Brl,
    Zar,
    Try,
}

impl Currency {
    pub const ALL: [Currency; 20] = [
        Currency::Usd,
        Currency::Eur,
        Currency::Gbp,
        Currency::Jpy,
        Currency::Aud,
        Currency::Cad,
        Currency::Chf,
        Currency::Cny,
        Currency::Sek,
        Currency::Nzd,
        Currency::Mxn,
        Currency::Sgd,
        Currency::Hkd,
        Currency::Nok,
        Currency::Inr,
        Currency::Krw,
        Currency::Rub,
        Currency::Brl,
        Currency::Zar,
        Currency::Try,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP",
            Currency::Jpy => "JPY",
            Currency::Aud => "AUD",
            Currency::Cad => "CAD",
            Currency::Chf => "CHF",
            Currency::Cny => "CNY",
            Currency::Sek => "SEK",
            Currency::Nzd => "NZD",
            Currency::Mxn => "MXN",
            Currency::Sgd => "SGD",
            Currency::Hkd => "HKD",
            Currency::Nok => "NOK",
            Currency::Inr => "INR",
            Currency::Krw => "KRW",
            Currency::Rub => "RUB",
            Currency::Brl => "BRL",
            Currency::Zar => "ZAR",
            Currency::Try => "TRY",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Currency::Usd => "US Dollar",
            Currency::Eur => "Euro",
            Currency::Gbp => "British Pound",
            Currency::Jpy => "Japanese Yen",
            Currency::Aud => "Australian Dollar",
            Currency::Cad => "Canadian Dollar",
            Currency::Chf => "Swiss Franc",
            Currency::Cny => "Chinese Yuan",
            Currency::Sek => "Swedish Krona",
            Currency::Nzd => "New Zealand Dollar",
            Currency::Mxn => "Mexican Peso",
            Currency::Sgd => "Singapore Dollar",
            Currency::Hkd => "Hong Kong Dollar",
            Currency::Nok => "Norwegian Krone",
            Currency::Inr => "Indian Rupee",
            Currency::Krw => "South Korean Won",
            Currency::Rub => "Russian Ruble",
            Currency::Brl => "Brazilian Real",
            Currency::Zar => "South African Rand",
            Currency::Try => "Turkish Lira",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Usd | Currency::Mxn => "$",
            Currency::Eur => "€",
            Currency::Gbp => "£",
            Currency::Jpy | Currency::Cny => "¥",
            Currency::Aud => "A$",
            Currency::Cad => "C$",
            Currency::Chf => "CHF",
            Currency::Sek | Currency::Nok => "kr",
            Currency::Nzd => "NZ$",
            Currency::Sgd => "S$",
            Currency::Hkd => "HK$",
            Currency::Inr => "₹",
            Currency::Krw => "₩",
            Currency::Rub => "₽",
            Currency::Brl => "R$",
            Currency::Zar => "R",
            Currency::Try => "₺",
        }
    }

    /// Neighbour in the catalog order, wrapping around
    pub fn step(&self, forward: bool) -> Self {
        let len = Self::ALL.len();
        let idx = Self::ALL.iter().position(|c| c == self).unwrap_or(0);
        let next = if forward { (idx + 1) % len } else { (idx + len - 1) % len };
        Self::ALL[next]
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = ToolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Currency::ALL
            .into_iter()
            .find(|c| c.code().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ToolError::UnknownCurrency(s.to_string()))
    }
}

// ============================================================================
// RATE TABLE
// ============================================================================

const MOCK_RATES: &[(Currency, Currency, f64)] = &[
    (Currency::Usd, Currency::Eur, 0.85),
    (Currency::Usd, Currency::Gbp, 0.73),
    (Currency::Usd, Currency::Jpy, 110.0),
    (Currency::Usd, Currency::Aud, 1.35),
    (Currency::Usd, Currency::Cad, 1.25),
    (Currency::Usd, Currency::Chf, 0.92),
    (Currency::Usd, Currency::Cny, 6.45),
    (Currency::Usd, Currency::Inr, 74.5),
    (Currency::Eur, Currency::Usd, 1.18),
    (Currency::Eur, Currency::Gbp, 0.86),
    (Currency::Eur, Currency::Jpy, 129.0),
    (Currency::Eur, Currency::Aud, 1.59),
    (Currency::Eur, Currency::Cad, 1.47),
    (Currency::Eur, Currency::Chf, 1.08),
    (Currency::Eur, Currency::Cny, 7.59),
    (Currency::Eur, Currency::Inr, 87.8),
    (Currency::Gbp, Currency::Usd, 1.37),
    (Currency::Gbp, Currency::Eur, 1.16),
    (Currency::Gbp, Currency::Jpy, 150.0),
    (Currency::Gbp, Currency::Aud, 1.85),
    (Currency::Gbp, Currency::Cad, 1.71),
    (Currency::Gbp, Currency::Chf, 1.26),
    (Currency::Gbp, Currency::Cny, 8.83),
    (Currency::Gbp, Currency::Inr, 102.0),
];

/// Sparse pair → rate table
#[derive(Debug, Clone)]
pub struct RateTable {
    rates: HashMap<(Currency, Currency), f64>,
}

impl RateTable {
    /// Hardcoded mock rates; not a live feed
    pub fn mock() -> Self {
        RateTable::from_entries(MOCK_RATES.iter().copied())
    }

    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (Currency, Currency, f64)>,
    {
        let rates = entries
            .into_iter()
            .filter(|(_, _, rate)| *rate > 0.0 && rate.is_finite())
            .map(|(from, to, rate)| ((from, to), rate))
            .collect();
        RateTable { rates }
    }

    /// Stored rate for exactly this direction
    pub fn direct(&self, from: Currency, to: Currency) -> Option<f64> {
        self.rates.get(&(from, to)).copied()
    }

    /// Resolved rate: identity, direct, inverted reverse, or 1 as a silent fallback
    pub fn rate(&self, from: Currency, to: Currency) -> f64 {
        self.resolve(from, to).unwrap_or(1.0)
    }

    /// Like `rate`, but None when the table can't answer
    pub fn resolve(&self, from: Currency, to: Currency) -> Option<f64> {
        if from == to {
            return Some(1.0);
        }

        self.direct(from, to)
            .or_else(|| self.direct(to, from).map(|reverse| 1.0 / reverse))
    }

    /// `amount × rate` to two decimals; empty when the amount isn't a number
    pub fn converted_amount(&self, amount: &str, from: Currency, to: Currency) -> String {
        convert_at(amount, self.rate(from, to))
    }
}

impl Default for RateTable {
    fn default() -> Self {
        Self::mock()
    }
}

/// `amount × rate` to two decimals; empty when the amount isn't a number
pub fn convert_at(amount: &str, rate: f64) -> String {
    match crate::units::parse_number(amount) {
        Some(value) => format!("{:.2}", value * rate),
        None => String::new(),
    }
}

/// Rate from the mock table
pub fn rate(from: Currency, to: Currency) -> f64 {
    RateTable::mock().rate(from, to)
}

/// Converted amount from the mock table, two decimals
pub fn converted_amount(amount: &str, from: Currency, to: Currency) -> String {
    RateTable::mock().converted_amount(amount, from, to)
}

/// "$12.50" style rendering
pub fn format_currency(value: &str, currency: Currency) -> String {
    format!("{}{}", currency.symbol(), value)
}

// ============================================================================
// RATE SOURCE
// ============================================================================

/// Stand-in for an exchange-rate API: the mock table plus a fixed delay
#[derive(Debug, Clone)]
pub struct MockRateSource {
    table: RateTable,
    delay: Duration,
    fail: bool,
}

impl MockRateSource {
    pub fn new(delay: Duration) -> Self {
        MockRateSource {
            table: RateTable::mock(),
            delay,
            fail: false,
        }
    }

    /// A source whose every lookup fails, for exercising the error notice
    pub fn failing(delay: Duration) -> Self {
        MockRateSource {
            fail: true,
            ..MockRateSource::new(delay)
        }
    }

    pub fn table(&self) -> &RateTable {
        &self.table
    }

    pub async fn fetch(&self, from: Currency, to: Currency) -> ToolResult<f64> {
        tokio::time::sleep(self.delay).await;

        if self.fail {
            return Err(ToolError::RateUnavailable);
        }
        Ok(self.table.rate(from, to))
    }

    /// Run a lookup to completion, carrying the request's tag through
    pub async fn lookup(&self, request: RateRequest) -> RateResponse {
        let result = self.fetch(request.from, request.to).await;
        RateResponse { request, result }
    }
}

// ============================================================================
// CONVERTER STATE
// ============================================================================

/// One issued lookup
#[derive(Debug, Clone, PartialEq)]
pub struct RateRequest {
    pub seq: u64,
    pub amount: String,
    pub from: Currency,
    pub to: Currency,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RateResponse {
    pub request: RateRequest,
    pub result: ToolResult<f64>,
}

#[derive(Debug, Clone)]
pub struct CurrencyConverter {
    pub amount: String,
    pub from: Currency,
    pub to: Currency,
    pub converted: String,
    pub rate: Option<f64>,
    pub loading: bool,
    pub last_updated: Option<DateTime<Local>>,
    pub notice: Option<String>,
    latest_seq: u64,
}

impl CurrencyConverter {
    pub fn new() -> Self {
        CurrencyConverter {
            amount: "1".to_string(),
            from: Currency::Usd,
            to: Currency::Eur,
            converted: String::new(),
            rate: None,
            loading: false,
            last_updated: None,
            notice: None,
            latest_seq: 0,
        }
    }

    pub fn latest_seq(&self) -> u64 {
        self.latest_seq
    }

    pub fn set_amount(&mut self, amount: &str) -> Option<RateRequest> {
        self.amount = amount.to_string();
        self.request()
    }

    pub fn set_from(&mut self, currency: Currency) -> Option<RateRequest> {
        self.from = currency;
        self.request()
    }

    pub fn set_to(&mut self, currency: Currency) -> Option<RateRequest> {
        self.to = currency;
        self.request()
    }

    pub fn swap(&mut self) -> Option<RateRequest> {
        std::mem::swap(&mut self.from, &mut self.to);
        self.request()
    }

    /// Issue a lookup for the current inputs.
    ///
    /// Every call supersedes whatever is in flight. A blank amount issues nothing;
    /// same-currency pairs resolve on the spot.
    pub fn request(&mut self) -> Option<RateRequest> {
        self.latest_seq += 1;

        if self.amount.trim().is_empty() {
            self.loading = false;
            return None;
        }

        if self.from == self.to {
            self.rate = Some(1.0);
            self.converted = self.amount.clone();
            self.loading = false;
            return None;
        }

        self.loading = true;
        tracing::debug!(seq = self.latest_seq, from = %self.from, to = %self.to, "rate lookup issued");

        Some(RateRequest {
            seq: self.latest_seq,
            amount: self.amount.clone(),
            from: self.from,
            to: self.to,
        })
    }

    /// Apply a finished lookup. Returns false when it was superseded and dropped.
    pub fn apply(&mut self, response: RateResponse) -> bool {
        let RateResponse { request, result } = response;

        if request.seq != self.latest_seq {
            tracing::debug!(seq = request.seq, latest = self.latest_seq, "stale rate lookup discarded");
            return false;
        }

        self.loading = false;
        match result {
            Ok(rate) => {
                self.rate = Some(rate);
                self.converted = convert_at(&request.amount, rate);
                self.last_updated = Some(Local::now());
                self.notice = None;
            }
            Err(e) => {
                tracing::warn!(error = %e, "rate lookup failed");
                self.notice = Some(e.to_string());
            }
        }
        true
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// "$1 = €0.85", shown once a rate and a result are both present
    pub fn summary(&self) -> Option<String> {
        if self.rate.is_none() || self.amount.is_empty() || self.converted.is_empty() {
            return None;
        }
        Some(format!(
            "{} = {}",
            format_currency(&self.amount, self.from),
            format_currency(&self.converted, self.to)
        ))
    }

    /// "1 USD = 0.8500 EUR"
    pub fn rate_line(&self) -> Option<String> {
        self.rate
            .map(|rate| format!("1 {} = {:.4} {}", self.from, rate, self.to))
    }
}

impl Default for CurrencyConverter {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================
