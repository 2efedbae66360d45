use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;

/// Shape of the date the remote sheet understands.
static DDMMYYYY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{2}/\d{2}/\d{4}$").expect("static date pattern"));

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// `DD/MM/YYYY`, zero-padded.
pub fn format_ddmmyyyy(d: NaiveDate) -> String {
    d.format("%d/%m/%Y").to_string()
}

/// Default date proposed for a new kitchen list.
pub fn today_ddmmyyyy() -> String {
    format_ddmmyyyy(today())
}

/// True when `s` looks like `DD/MM/YYYY`. Only the shape is checked:
/// whether the day exists is for the remote sheet to decide.
pub fn is_ddmmyyyy(s: &str) -> bool {
    DDMMYYYY.is_match(s)
}

/// `09/02/2026` → `09-02-2026`, for file names.
pub fn to_file_stamp(date: &str) -> String {
    date.replace('/', "-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_with_zero_padding() {
        let d = NaiveDate::from_ymd_opt(2026, 2, 9).unwrap();
        assert_eq!(format_ddmmyyyy(d), "09/02/2026");
        let d = NaiveDate::from_ymd_opt(2025, 11, 30).unwrap();
        assert_eq!(format_ddmmyyyy(d), "30/11/2025");
    }

    #[test]
    fn today_default_has_expected_shape() {
        let s = today_ddmmyyyy();
        assert!(is_ddmmyyyy(&s));
        assert_eq!(s, format_ddmmyyyy(today()));
    }

    #[test]
    fn shape_check_only() {
        assert!(is_ddmmyyyy("09/02/2026"));
        assert!(is_ddmmyyyy("31/02/2026"));
        assert!(!is_ddmmyyyy("9/2/2026"));
        assert!(!is_ddmmyyyy("2026-02-09"));
        assert!(!is_ddmmyyyy("09/02/2026 "));
    }

    #[test]
    fn file_stamp_replaces_every_slash() {
        assert_eq!(to_file_stamp("09/02/2026"), "09-02-2026");
    }
}
