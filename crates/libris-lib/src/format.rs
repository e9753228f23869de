use chrono::{DateTime, NaiveDate, NaiveDateTime};

pub const INVALID_DATE: &str = "Invalid Date";

/// Above this every f64 is a whole number.
const WHOLE_DOLLARS_ONLY: f64 = 1e20;

const DATE_TIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Renders an amount as US dollars, e.g. `$1,234.50` or `-$3.00`.
pub fn format_currency(amount: f64) -> String {
    if amount.is_nan() {
        return "$NaN".to_string();
    }

    let sign = if amount.is_sign_negative() && amount != 0.0 {
        "-"
    } else {
        ""
    };
    if amount.is_infinite() {
        return format!("{}$∞", sign);
    }

    let amount = amount.abs();
    if amount >= WHOLE_DOLLARS_ONLY {
        // no fractional part left at this magnitude, and the value may not
        // fit in an integer; Display gives the shortest exact digits
        return format!("{}${}.00", sign, group_thousands(&format!("{}", amount.trunc())));
    }

    // f64::round rounds half away from zero
    let cents = (amount * 100.0).round() as u128;
    let dollars = group_thousands(&(cents / 100).to_string());

    format!("{}${}.{:02}", sign, dollars, cents % 100)
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

/// Renders a date string as a long date, e.g. `March 5, 2024`.
///
/// The calendar date is taken as written; no timezone conversion happens.
pub fn format_date(date: &str) -> String {
    match parse_date(date.trim()) {
        Some(date) => date.format("%B %-d, %Y").to_string(),
        None => INVALID_DATE.to_string(),
    }
}

fn parse_date(date: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        return Some(date);
    }

    if let Ok(date_time) = DateTime::parse_from_rfc3339(date) {
        return Some(date_time.date_naive());
    }

    DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(date, format).ok())
        .map(|date_time| date_time.date())
}
