use chrono::{DateTime, Utc};

/// Short date for history rows, e.g. "14 Nov 2023".
#[must_use]
pub fn format_date(at: DateTime<Utc>) -> String {
    at.format("%d %b %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use britpass_core::time::fixed_now;

    #[test]
    fn formats_day_month_year() {
        assert_eq!(format_date(fixed_now()), "14 Nov 2023");
    }
}
