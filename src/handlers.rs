use crate::errors::AppError;
use crate::models::{
    AddHabitRequest, DashboardSummary, DeleteResponse, Habit, HabitList, StatsResponse,
};
use crate::state::AppState;
use crate::stats::{build_stats, dashboard_summary, pending_habits_at};
use crate::storage::persist_data;
use crate::store::{self, StoreError};
use crate::ui::render_index;
use axum::{
    extract::{Form, Path, State},
    response::{Html, Redirect},
    Json,
};

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let habits = state.habits.lock().await;
    Html(render_index(store::today(), &habits))
}

pub async fn list_habits(State(state): State<AppState>) -> Json<HabitList> {
    let habits = state.habits.lock().await;
    Json(habits.clone())
}

pub async fn add_habit(
    State(state): State<AppState>,
    Json(payload): Json<AddHabitRequest>,
) -> Result<Json<Habit>, AppError> {
    let habit = apply_add(&state, &payload).await?;
    Ok(Json(habit))
}

pub async fn toggle_habit(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Habit>, AppError> {
    let habit = apply_toggle(&state, id).await?;
    Ok(Json(habit))
}

pub async fn delete_habit(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<DeleteResponse>, AppError> {
    let deleted = apply_delete(&state, id).await?;
    Ok(Json(DeleteResponse { deleted }))
}

pub async fn get_summary(State(state): State<AppState>) -> Json<DashboardSummary> {
    let habits = state.habits.lock().await;
    Json(dashboard_summary(&habits))
}

pub async fn get_stats(State(state): State<AppState>) -> Json<StatsResponse> {
    let habits = state.habits.lock().await;
    Json(build_stats(&habits))
}

pub async fn get_pending(State(state): State<AppState>) -> Json<Vec<Habit>> {
    let habits = state.habits.lock().await;
    Json(pending_habits_at(store::today(), &habits))
}

pub async fn add_habit_form(
    State(state): State<AppState>,
    Form(payload): Form<AddHabitRequest>,
) -> Result<Redirect, AppError> {
    let mut habits = state.habits.lock().await;
    match store::add_habit(&mut habits, &payload.name, &payload.category, &payload.color) {
        Ok(_) => {
            persist_data(&state.data_path, &habits).await?;
            Ok(Redirect::to("/?notice=added"))
        }
        Err(StoreError::Validation(_)) => Ok(Redirect::to("/?notice=empty-name")),
        Err(err) => Err(err.into()),
    }
}

pub async fn toggle_habit_form(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Redirect, AppError> {
    let mut habits = state.habits.lock().await;
    match store::toggle_habit(&mut habits, id, store::today()) {
        Ok(_) => {
            persist_data(&state.data_path, &habits).await?;
            Ok(Redirect::to("/?notice=done"))
        }
        Err(StoreError::AlreadyCompleted) => Ok(Redirect::to("/?notice=already-done")),
        // unknown id from a stale page; nothing to surface
        Err(StoreError::NotFound(_)) => Ok(Redirect::to("/")),
        Err(err) => Err(err.into()),
    }
}

pub async fn delete_habit_form(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Redirect, AppError> {
    apply_delete(&state, id).await?;
    Ok(Redirect::to("/?notice=deleted"))
}

async fn apply_add(state: &AppState, payload: &AddHabitRequest) -> Result<Habit, AppError> {
    let mut habits = state.habits.lock().await;
    let habit = store::add_habit(&mut habits, &payload.name, &payload.category, &payload.color)?;
    persist_data(&state.data_path, &habits).await?;
    Ok(habit)
}

async fn apply_toggle(state: &AppState, id: i64) -> Result<Habit, AppError> {
    let mut habits = state.habits.lock().await;
    let habit = store::toggle_habit(&mut habits, id, store::today())?;
    persist_data(&state.data_path, &habits).await?;
    Ok(habit)
}

async fn apply_delete(state: &AppState, id: i64) -> Result<bool, AppError> {
    let mut habits = state.habits.lock().await;
    let deleted = store::delete_habit(&mut habits, id);
    if deleted {
        persist_data(&state.data_path, &habits).await?;
    }
    Ok(deleted)
}
