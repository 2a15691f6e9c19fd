use crate::dates;
use crate::errors::AppError;
use crate::models::{
    AgeQuery, AgeResponse, Habit, HabitView, NewHabitRequest, StatsResponse,
};
use crate::state::AppState;
use crate::stats::build_stats;
use crate::storage::persist_data;
use crate::ui::render_index;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Html,
    Json,
};
use chrono::{Local, NaiveDate};

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let today = Local::now().date_naive();
    let data = state.data.lock().await;
    Html(render_index(&dates::date_key(today), data.habits.len()))
}

pub async fn list_habits(State(state): State<AppState>) -> Result<Json<Vec<HabitView>>, AppError> {
    let today = Local::now().date_naive();
    let data = state.data.lock().await;
    let mut views = Vec::with_capacity(data.habits.len());
    for habit in &data.habits {
        views.push(habit_view(habit, today)?);
    }
    Ok(Json(views))
}

pub async fn create_habit(
    State(state): State<AppState>,
    Json(payload): Json<NewHabitRequest>,
) -> Result<Json<HabitView>, AppError> {
    let name = payload.name.trim();
    if name.is_empty() {
        return Err(AppError::bad_request("habit name must not be empty"));
    }

    let today = Local::now().date_naive();
    let mut data = state.data.lock().await;
    data.next_id += 1;
    let habit = Habit {
        id: data.next_id,
        name: name.to_string(),
        completed_dates: Default::default(),
        streak: 0,
        created_at: Local::now().to_rfc3339(),
    };
    let view = habit_view(&habit, today)?;
    data.habits.push(habit);

    persist_data(&state.data_path, &data).await?;

    Ok(Json(view))
}

pub async fn delete_habit(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<StatusCode, AppError> {
    let mut data = state.data.lock().await;
    let before = data.habits.len();
    data.habits.retain(|habit| habit.id != id);
    if data.habits.len() == before {
        return Err(AppError::not_found(format!("no habit with id {id}")));
    }

    persist_data(&state.data_path, &data).await?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn toggle_habit(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<HabitView>, AppError> {
    let today = Local::now().date_naive();
    let key = dates::date_key(today);
    let mut data = state.data.lock().await;
    let habit = data
        .habit_mut(id)
        .ok_or_else(|| AppError::not_found(format!("no habit with id {id}")))?;

    if !habit.completed_dates.remove(&key) {
        habit.completed_dates.insert(key);
    }

    // Always recount from the full set; an incremental bump would go stale
    // on toggle-off or across midnight.
    let completed = dates::parse_date_set(&habit.completed_dates)?;
    habit.streak = dates::current_streak(&completed, today);
    let view = habit_view(habit, today)?;

    persist_data(&state.data_path, &data).await?;

    Ok(Json(view))
}

pub async fn get_stats(State(state): State<AppState>) -> Result<Json<StatsResponse>, AppError> {
    let data = state.data.lock().await;
    Ok(Json(build_stats(&data)?))
}

pub async fn get_age(Query(query): Query<AgeQuery>) -> Result<Json<AgeResponse>, AppError> {
    let birth = dates::parse_date(&query.birth)?;
    let reference = match &query.reference {
        Some(value) => dates::parse_date(value)?,
        None => Local::now().date_naive(),
    };

    let age = dates::age_breakdown(birth, reference)?;
    let countdown = dates::days_until_anniversary(birth, reference)?;

    Ok(Json(AgeResponse {
        years: age.years,
        months: age.months,
        days: age.days,
        days_until_next_anniversary: countdown,
        reference_date: dates::date_key(reference),
    }))
}

fn habit_view(habit: &Habit, today: NaiveDate) -> Result<HabitView, AppError> {
    let completed = dates::parse_date_set(&habit.completed_dates)?;
    Ok(HabitView {
        id: habit.id,
        name: habit.name.clone(),
        streak: dates::current_streak(&completed, today),
        completed_today: completed.contains(&today),
        total_completions: completed.len(),
        tracked_days: dates::days_between(created_day(habit, today), today),
        created_at: habit.created_at.clone(),
    })
}

// created_at is RFC 3339; its leading ten characters are the calendar day.
fn created_day(habit: &Habit, today: NaiveDate) -> NaiveDate {
    habit
        .created_at
        .get(..10)
        .and_then(|day| dates::parse_date(day).ok())
        .unwrap_or(today)
}
