use crate::validators::FieldValidator;

use chrono::{Datelike, NaiveDate, Utc};

pub struct Birthdate;

const MIN_AGE_YEARS: i32 = 18;
const MAX_AGE_YEARS: i32 = 120;

// Date inputs submit ISO calendar dates
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Whole years elapsed from `birth` to `today`: the year difference, minus
/// one if today's month/day falls before the birth month/day.
pub(crate) fn age_in_years(birth: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        age -= 1;
    }
    age
}

impl FieldValidator for Birthdate {
    fn is_valid(&self, raw: &str) -> bool {
        let Ok(birth) = NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT) else {
            return false;
        };
        let age = age_in_years(birth, Utc::now().date_naive());
        (MIN_AGE_YEARS..=MAX_AGE_YEARS).contains(&age)
    }
}

#[cfg(test)]
mod test {
    use crate::validators::birthdate::age_in_years;
    use crate::validators::*;
    use chrono::{Days, Months, NaiveDate, Utc};

    fn years_before_today(years: u32) -> NaiveDate {
        Utc::now().date_naive() - Months::new(12 * years)
    }

    #[test]
    fn age_counts_whole_years() {
        let birth = NaiveDate::from_ymd_opt(2000, 6, 15).unwrap();
        let day_before = NaiveDate::from_ymd_opt(2018, 6, 14).unwrap();
        let birthday = NaiveDate::from_ymd_opt(2018, 6, 15).unwrap();
        let day_after = NaiveDate::from_ymd_opt(2018, 6, 16).unwrap();
        assert_eq!(age_in_years(birth, day_before), 17);
        assert_eq!(age_in_years(birth, birthday), 18);
        assert_eq!(age_in_years(birth, day_after), 18);
    }

    #[test]
    fn accepts_adults_within_range() {
        let exactly_18 = years_before_today(18).format("%Y-%m-%d").to_string();
        assert!(Birthdate.is_valid(&exactly_18), "{}", exactly_18);

        let exactly_120 = years_before_today(120).format("%Y-%m-%d").to_string();
        assert!(Birthdate.is_valid(&exactly_120), "{}", exactly_120);
    }

    #[test]
    fn rejects_out_of_range_ages() {
        let one_day_short = (years_before_today(18) + Days::new(1))
            .format("%Y-%m-%d")
            .to_string();
        assert!(!Birthdate.is_valid(&one_day_short), "{}", one_day_short);

        let too_old = years_before_today(121).format("%Y-%m-%d").to_string();
        assert!(!Birthdate.is_valid(&too_old), "{}", too_old);
    }

    #[test]
    fn rejects_unparsable_dates() {
        let invalid_dates = vec!["", "not-a-date", "2000-13-01", "2000-02-30", "15/06/2000"];
        for date in invalid_dates {
            assert!(!Birthdate.is_valid(date), "{}", date);
        }
    }
}
