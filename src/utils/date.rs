use chrono::{DateTime, Local, NaiveDate};

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// 00:00:00 of the given day in local time.
pub fn start_of_day(d: NaiveDate) -> DateTime<Local> {
    d.and_hms_opt(0, 0, 0)
        .unwrap()
        .and_local_timezone(Local)
        .unwrap()
}

/// 23:59:59.999 of the given day in local time.
pub fn end_of_day(d: NaiveDate) -> DateTime<Local> {
    d.and_hms_milli_opt(23, 59, 59, 999)
        .unwrap()
        .and_local_timezone(Local)
        .unwrap()
}
