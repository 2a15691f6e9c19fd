use crate::dates::{self, InvalidInput};
use crate::models::{AppData, DailyCompletion, StatsResponse};
use chrono::{Duration, Local, NaiveDate};

pub fn build_stats(data: &AppData) -> Result<StatsResponse, InvalidInput> {
    build_stats_at(Local::now().date_naive(), data)
}

pub fn build_stats_at(today: NaiveDate, data: &AppData) -> Result<StatsResponse, InvalidInput> {
    let total = data.habits.len();

    let mut last_7_days = Vec::with_capacity(7);
    for offset in (0..7).rev() {
        let date = today - Duration::days(offset as i64);
        let key = dates::date_key(date);
        let completed = data
            .habits
            .iter()
            .filter(|habit| habit.completed_dates.contains(&key))
            .count();
        last_7_days.push(DailyCompletion {
            date: key,
            completed,
            total,
            all_done: total > 0 && completed == total,
        });
    }

    let mut best_streak = 0;
    for habit in &data.habits {
        let completed = dates::parse_date_set(&habit.completed_dates)?;
        best_streak = best_streak.max(dates::current_streak(&completed, today));
    }

    Ok(StatsResponse {
        last_7_days,
        habit_count: total,
        best_streak,
    })
}
