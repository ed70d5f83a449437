use chrono::{DateTime, Months, NaiveDate, Utc};
use chrono_tz::Tz;

/// Timezone of the exchange trading calendar.
/// Report and collection dates are business dates in this zone.
pub const EXCHANGE_TZ: Tz = chrono_tz::Europe::Moscow;

/// Converts a UTC instant to an exchange business date.
pub fn exchange_date_from_utc(instant: DateTime<Utc>) -> NaiveDate {
    instant.with_timezone(&EXCHANGE_TZ).date_naive()
}

/// Current exchange business date.
pub fn exchange_today() -> NaiveDate {
    exchange_date_from_utc(Utc::now())
}

/// Adds whole months, clamping to the end of shorter months (Jan 31 + 1 month = Feb 28/29).
/// Saturates at `NaiveDate::MAX`.
pub fn add_months(date: NaiveDate, months: u32) -> NaiveDate {
    date.checked_add_months(Months::new(months))
        .unwrap_or(NaiveDate::MAX)
}

pub fn add_years(date: NaiveDate, years: u32) -> NaiveDate {
    add_months(date, years * 12)
}
