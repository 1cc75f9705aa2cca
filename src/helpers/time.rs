use chrono::{DateTime, NaiveDate, Utc};

/// Current time in UTC.
pub fn now_utc() -> DateTime<Utc> {
    Utc::now()
}

/// Today's calendar date in UTC, the usual lower bound for a search.
pub fn today_utc() -> NaiveDate {
    now_utc().date_naive()
}
