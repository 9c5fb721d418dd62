// src/services/clock.rs
use chrono::{Datelike, Local, NaiveDate};

pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;

    /// Calendar date in the `Www Mmm DD YYYY` form used for the notice gate.
    fn today_string(&self) -> String {
        date_string(self.today())
    }
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

pub fn date_string(date: NaiveDate) -> String {
    format!(
        "{} {}",
        date.format("%a %b %d"),
        date.year()
    )
}

#[cfg(test)]
pub struct FixedClock(pub NaiveDate);

#[cfg(test)]
impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_string_format() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        assert_eq!(date_string(date), "Mon Oct 19 2026");

        let padded = NaiveDate::from_ymd_opt(2026, 3, 5).unwrap();
        assert_eq!(date_string(padded), "Thu Mar 05 2026");
    }

    #[test]
    fn test_fixed_clock() {
        let clock = FixedClock(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
        assert_eq!(clock.today_string(), "Wed Jan 01 2025");
    }
}
