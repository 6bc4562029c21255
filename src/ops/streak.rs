use chrono::{Days, NaiveDate};

use crate::model::Habit;
use crate::util::dates::date_key;

/// Current streak: the number of consecutive done days ending on `today`,
/// walking backward one day at a time and stopping at the first missing or
/// false log entry. An unticked today means 0 no matter what came before.
/// Streaks count all history, not just the seven days the grid shows.
pub fn current_streak(habit: &Habit, today: NaiveDate) -> u32 {
    let mut streak = 0;
    let mut day = today;
    while habit.is_done(&date_key(day)) {
        streak += 1;
        day = match day.checked_sub_days(Days::new(1)) {
            Some(prev) => prev,
            None => break,
        };
    }
    streak
}
