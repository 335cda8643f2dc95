// src/format.rs
//
// Spanish-locale display helpers used by the templates.

use chrono::{Datelike, NaiveDate};

const MONTHS: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

/// Group thousands with `.`. Four-digit numbers stay ungrouped, as es-ES does.
pub fn format_number(n: u64) -> String {
    let digits = n.to_string();
    if digits.len() <= 4 {
        return digits;
    }

    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

/// Whole euros, e.g. `285.000 €` (non-breaking space before the sign).
pub fn format_price(price: u32) -> String {
    format!("{}\u{a0}€", format_number(u64::from(price)))
}

/// e.g. `1 de diciembre de 2025`
pub fn format_date(date: NaiveDate) -> String {
    format!(
        "{} de {} de {}",
        date.day(),
        MONTHS[date.month0() as usize],
        date.year()
    )
}

/// e.g. `diciembre de 2025`
pub fn format_month_year(date: NaiveDate) -> String {
    format!("{} de {}", MONTHS[date.month0() as usize], date.year())
}

/// Cut `text` to at most `max_chars` characters, ending with `…` when cut.
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars).collect();
    format!("{}…", cut.trim_end())
}

/// Glue words together so they never wrap apart.
pub fn nbsp(text: &str) -> String {
    text.replace(' ', "\u{a0}")
}

pub fn plural<'a>(n: usize, one: &'a str, many: &'a str) -> &'a str {
    if n == 1 {
        one
    } else {
        many
    }
}
