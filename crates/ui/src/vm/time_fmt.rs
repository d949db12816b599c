use chrono::{DateTime, Utc};

#[must_use]
pub fn format_completed_at(value: DateTime<Utc>) -> String {
    value.format("%-d %B %Y, %H:%M UTC").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::time::fixed_now;

    #[test]
    fn formats_day_month_year() {
        assert_eq!(format_completed_at(fixed_now()), "14 November 2023, 22:13 UTC");
    }
}
