use chrono::{Datelike, NaiveDate, Weekday};

/// The next `count` business days strictly after `after`.
///
/// Weekends are skipped; no holiday calendar is applied. The result is
/// strictly increasing and never contains `after` itself.
pub fn next_business_days(after: NaiveDate, count: usize) -> Vec<NaiveDate> {
    let mut days = Vec::with_capacity(count);
    let mut current = after;
    while days.len() < count {
        current = current.succ_opt().expect("calendar overflow");
        if !is_weekend(current) {
            days.push(current);
        }
    }
    days
}

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn friday_rolls_over_the_weekend() {
        // 2024-03-01 is a Friday
        let days = next_business_days(date(2024, 3, 1), 3);
        assert_eq!(
            days,
            vec![date(2024, 3, 4), date(2024, 3, 5), date(2024, 3, 6)]
        );
    }

    #[test]
    fn start_date_is_excluded() {
        let days = next_business_days(date(2024, 3, 4), 1);
        assert_eq!(days, vec![date(2024, 3, 5)]);
    }

    #[test]
    fn ten_days_are_strictly_increasing_weekdays() {
        let days = next_business_days(date(2024, 6, 12), 10);
        assert_eq!(days.len(), 10);
        for pair in days.windows(2) {
            assert!(pair[0] < pair[1]);
        }
        for day in &days {
            assert!(!is_weekend(*day));
        }
    }
}
