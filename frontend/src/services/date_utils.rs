use chrono::{NaiveDate, Weekday};

/// Column headers for a Sunday-first week
pub const WEEKDAY_HEADERS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Read the browser clock once and return the local calendar date
pub fn current_date() -> NaiveDate {
    use js_sys::Date;
    let now = Date::new_0();
    let year = now.get_full_year() as i32;
    let month = now.get_month() + 1; // JavaScript months are 0-indexed
    let day = now.get_date();

    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_else(|| {
        log::error!("📅 Browser clock returned an invalid date: {}-{}-{}", year, month, day);
        NaiveDate::default()
    })
}

/// Empty cells before the 1st in a Sunday-first grid
pub fn leading_blank_cells(first_weekday: Weekday) -> u32 {
    first_weekday.num_days_from_sunday()
}
