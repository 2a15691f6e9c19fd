use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// One tracked habit. `completed_dates` holds ISO `YYYY-MM-DD` keys; the
/// set keeps them unique and sorted. `streak` is the snapshot taken at the
/// last toggle; responses recompute it from the dates instead of trusting
/// it across day boundaries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Habit {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub completed_dates: BTreeSet<String>,
    #[serde(default)]
    pub streak: u32,
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppData {
    #[serde(default)]
    pub next_id: u64,
    #[serde(default)]
    pub habits: Vec<Habit>,
}

impl AppData {
    pub fn habit_mut(&mut self, id: u64) -> Option<&mut Habit> {
        self.habits.iter_mut().find(|habit| habit.id == id)
    }
}

#[derive(Debug, Deserialize)]
pub struct NewHabitRequest {
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct HabitView {
    pub id: u64,
    pub name: String,
    pub streak: u32,
    pub completed_today: bool,
    pub total_completions: usize,
    pub tracked_days: i64,
    pub created_at: String,
}

#[derive(Debug, Deserialize)]
pub struct AgeQuery {
    pub birth: String,
    pub reference: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AgeResponse {
    pub years: u32,
    pub months: u32,
    pub days: u32,
    pub days_until_next_anniversary: u32,
    pub reference_date: String,
}

#[derive(Debug, Serialize)]
pub struct DailyCompletion {
    pub date: String,
    pub completed: usize,
    pub total: usize,
    pub all_done: bool,
}

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub last_7_days: Vec<DailyCompletion>,
    pub habit_count: usize,
    pub best_streak: u32,
}
