//! Cell rendering.
//!
//! A [`CellRenderers`] registry maps column keys to renderers. Columns
//! without an entry use the plain-text fallback. Missing and null values
//! never reach a renderer; they show [`MISSING_VALUE`].

use std::collections::HashMap;

use serde_json::{Number, Value};

pub const MISSING_VALUE: &str = "N/A";

const STAR_COUNT: usize = 5;
const STAR_FILLED: char = '★';
const STAR_EMPTY: char = '☆';

/// Turns one JSON value into cell text.
pub trait CellRenderer: Send + Sync {
    fn render(&self, value: &Value) -> String;
}

/// Fallback: the value's plain-text conversion.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextRenderer;

impl CellRenderer for PlainTextRenderer {
    fn render(&self, value: &Value) -> String {
        plain_text(value)
    }
}

/// US dollars, en-US grouping: `$1,234.50`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CurrencyRenderer;

impl CellRenderer for CurrencyRenderer {
    fn render(&self, value: &Value) -> String {
        match value.as_f64() {
            Some(amount) => format_currency(amount),
            None => plain_text(value),
        }
    }
}

/// Five stars, rounded to the nearest whole star.
#[derive(Debug, Clone, Copy, Default)]
pub struct StarRatingRenderer;

impl CellRenderer for StarRatingRenderer {
    fn render(&self, value: &Value) -> String {
        match value.as_f64() {
            Some(rating) => star_rating(rating),
            None => plain_text(value),
        }
    }
}

/// Column key → renderer, with a plain-text fallback.
pub struct CellRenderers {
    by_key: HashMap<String, Box<dyn CellRenderer>>,
    fallback: Box<dyn CellRenderer>,
}

impl CellRenderers {
    /// Registry with no per-column overrides.
    pub fn plain() -> Self {
        Self {
            by_key: HashMap::new(),
            fallback: Box::new(PlainTextRenderer),
        }
    }

    pub fn with(mut self, key: impl Into<String>, renderer: impl CellRenderer + 'static) -> Self {
        self.by_key.insert(key.into(), Box::new(renderer));
        self
    }

    /// Text for the cell at `key`, given the record's value (if any).
    pub fn render(&self, key: &str, value: Option<&Value>) -> String {
        match value {
            None | Some(Value::Null) => MISSING_VALUE.to_string(),
            Some(value) => self
                .by_key
                .get(key)
                .unwrap_or(&self.fallback)
                .render(value),
        }
    }
}

impl Default for CellRenderers {
    /// `price` as currency, `rating` as stars.
    fn default() -> Self {
        Self::plain()
            .with("price", CurrencyRenderer)
            .with("rating", StarRatingRenderer)
    }
}

pub fn format_currency(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{}${}.{:02}", sign, group_thousands(cents / 100), cents % 100)
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

pub fn star_rating(rating: f64) -> String {
    let filled = rating.clamp(0.0, STAR_COUNT as f64).round() as usize;
    let mut stars = String::with_capacity(STAR_COUNT * STAR_FILLED.len_utf8());
    stars.extend(std::iter::repeat_n(STAR_FILLED, filled));
    stars.extend(std::iter::repeat_n(STAR_EMPTY, STAR_COUNT - filled));
    stars
}

/// Text form of a JSON value, the way a browser would stringify it.
pub fn plain_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => number_text(n),
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(plain_text).collect::<Vec<_>>().join(","),
        Value::Object(_) => value.to_string(),
    }
}

fn number_text(n: &Number) -> String {
    if n.is_i64() || n.is_u64() {
        return n.to_string();
    }
    match n.as_f64() {
        Some(f) if f.fract() == 0.0 && f.abs() < 1e21 => format!("{f:.0}"),
        Some(f) => f.to_string(),
        None => n.to_string(),
    }
}
