use chrono::{Datelike, Days, Local, NaiveDate, Weekday};

/// The number of days shown in the habit grid.
pub const WINDOW_DAYS: usize = 7;

/// Today as a local calendar date.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Format a date as its key: zero-padded `YYYY-MM-DD`.
pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Parse a date key back into a date. Strict: exactly `YYYY-MM-DD`.
pub fn parse_date_key(key: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(key, "%Y-%m-%d").ok()
}

/// The seven date keys ending on `today`, oldest first.
///
/// The TUI captures this window once at startup and keeps it for the whole
/// session; a session running across midnight shows the old window until
/// restarted.
pub fn week_keys(today: NaiveDate) -> Vec<String> {
    (0..WINDOW_DAYS as u64)
        .rev()
        .filter_map(|back| today.checked_sub_days(Days::new(back)))
        .map(date_key)
        .collect()
}

/// Short column label for a window date, e.g. `Mo 18`.
pub fn day_label(date: NaiveDate) -> String {
    let day = match date.weekday() {
        Weekday::Mon => "Mo",
        Weekday::Tue => "Tu",
        Weekday::Wed => "We",
        Weekday::Thu => "Th",
        Weekday::Fri => "Fr",
        Weekday::Sat => "Sa",
        Weekday::Sun => "Su",
    };
    format!("{} {:02}", day, date.day())
}
