//! Date parsing for the two CSV dialects the importers accept.

use chrono::NaiveDate;

/// Format used by the point-of-sale export, e.g. `24-Feb-2026`.
const SALES_FORMAT: &str = "%d-%b-%Y";

/// Formats tried in order for bank-statement rows.
const BANK_FORMATS: [&str; 3] = ["%d/%m/%Y", "%Y-%m-%d", "%d-%m-%Y"];

/// Parses a date cell from the sales export. The register sheet uses exactly
/// one format; anything else makes the row unusable.
pub fn parse_sales_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), SALES_FORMAT).ok()
}

/// Parses a date cell from a bank statement, first match wins.
pub fn parse_bank_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    BANK_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn sales_format_only() {
        assert_eq!(parse_sales_date("24-Feb-2026"), Some(date(2026, 2, 24)));
        assert_eq!(parse_sales_date("2026-02-24"), None);
        assert_eq!(parse_sales_date("-"), None);
        assert_eq!(parse_sales_date(""), None);
    }

    #[test]
    fn bank_formats_agree() {
        let expected = Some(date(2026, 2, 24));
        assert_eq!(parse_bank_date("24/02/2026"), expected);
        assert_eq!(parse_bank_date("2026-02-24"), expected);
        assert_eq!(parse_bank_date("24-02-2026"), expected);
    }

    #[test]
    fn bank_rejects_unknown_format() {
        assert_eq!(parse_bank_date("24-Feb-2026"), None);
        assert_eq!(parse_bank_date("not a date"), None);
    }
}
