use time::{Date, Month, OffsetDateTime, PrimitiveDateTime};

/// Builds a calendar date from loose year/month/day parts.
///
/// Out of range components (month 13, February 30th, ...) are reported as
/// [`crate::Error::InvalidDate`].
pub fn date(year: i32, month: u8, day: u8) -> crate::Result<Date> {
    let month = Month::try_from(month)?;

    Ok(Date::from_calendar_date(year, month, day)?)
}

/// Today's date in UTC.
pub fn today() -> Date {
    OffsetDateTime::now_utc().date()
}

pub fn now() -> PrimitiveDateTime {
    let now = OffsetDateTime::now_utc();

    PrimitiveDateTime::new(now.date(), now.time())
}

/// Unix timestamp of midnight UTC at the start of `date`.
pub fn to_timestamp(date: Date) -> i64 {
    date.midnight().assume_utc().unix_timestamp()
}

pub fn from_timestamp(timestamp: i64) -> crate::Result<Date> {
    Ok(OffsetDateTime::from_unix_timestamp(timestamp)?.date())
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn builds_valid_dates() {
        assert_eq!(date(2020, 8, 29).unwrap(), date!(2020 - 08 - 29));
    }

    #[test]
    fn rejects_impossible_dates() {
        assert!(date(2021, 2, 29).is_err());
        assert!(date(2021, 13, 1).is_err());
        assert!(date(2021, 0, 1).is_err());
    }

    #[test]
    fn timestamps_are_midnight_utc() {
        let day = date!(2020 - 08 - 29);
        let ts = to_timestamp(day);
        assert_eq!(ts % 86_400, 0);
        assert_eq!(from_timestamp(ts).unwrap(), day);
    }

    #[test]
    fn today_is_the_utc_date() {
        let before = OffsetDateTime::now_utc().date();
        let day = today();
        let after = OffsetDateTime::now_utc().date();

        assert!(day == before || day == after);
        assert!(now().date() >= after);
    }
}
