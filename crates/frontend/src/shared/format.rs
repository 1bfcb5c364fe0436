//! Locale formatting helpers (id-ID).

use chrono::{DateTime, Datelike, NaiveDate, Utc};

/// Format an IDR amount the way the backoffice expects: "Rp 250.000",
/// no decimals, dot as thousands separator. Negative amounts keep the
/// sign in front of the currency symbol.
pub fn format_idr(amount: f64) -> String {
    let negative = amount < 0.0;
    let rounded = amount.abs().round() as u64;
    let digits = rounded.to_string();

    let mut grouped = String::new();
    let chars: Vec<char> = digits.chars().rev().collect();
    for (i, c) in chars.iter().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(*c);
    }
    let grouped: String = grouped.chars().rev().collect();

    if negative {
        format!("-Rp {grouped}")
    } else {
        format!("Rp {grouped}")
    }
}

const MONTHS_ID: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "Mei", "Jun", "Jul", "Agt", "Sep", "Okt", "Nov", "Des",
];

const WEEKDAYS_ID: [&str; 7] = [
    "Senin", "Selasa", "Rabu", "Kamis", "Jumat", "Sabtu", "Minggu",
];

/// "15/01/2024" — table cells.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// "Senin, 4 Agt 2025" — courier page header.
pub fn format_date_long(date: NaiveDate) -> String {
    let weekday = WEEKDAYS_ID[date.weekday().num_days_from_monday() as usize];
    let month = MONTHS_ID[date.month0() as usize];
    format!("{}, {} {} {}", weekday, date.day(), month, date.year())
}

/// "15/01/2024 14:02" — timestamps on the reports page.
pub fn format_datetime(ts: DateTime<Utc>) -> String {
    ts.format("%d/%m/%Y %H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idr_grouping() {
        assert_eq!(format_idr(0.0), "Rp 0");
        assert_eq!(format_idr(950.0), "Rp 950");
        assert_eq!(format_idr(95000.0), "Rp 95.000");
        assert_eq!(format_idr(1250000.0), "Rp 1.250.000");
        assert_eq!(format_idr(-120000.0), "-Rp 120.000");
    }

    #[test]
    fn dates_in_id_locale() {
        let d = NaiveDate::from_ymd_opt(2025, 8, 4).unwrap();
        assert_eq!(format_date(d), "04/08/2025");
        assert_eq!(format_date_long(d), "Senin, 4 Agt 2025");
    }
}
