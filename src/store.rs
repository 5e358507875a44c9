use crate::models::{Habit, HabitList};
use chrono::{Local, NaiveDate, Utc};

/// Canonical day key for equality comparisons; the sole time granularity.
pub fn day_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[derive(Debug, PartialEq)]
pub enum StoreError {
    Validation(String),
    NotFound(i64),
    AlreadyCompleted,
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Validation(reason) => write!(f, "{reason}"),
            StoreError::NotFound(id) => write!(f, "no habit with id {id}"),
            StoreError::AlreadyCompleted => write!(f, "already completed today"),
        }
    }
}

impl std::error::Error for StoreError {}

const DEFAULT_CATEGORY: &str = "General";
const DEFAULT_COLOR: &str = "#4f46e5";

pub fn add_habit(
    list: &mut HabitList,
    name: &str,
    category: &str,
    color: &str,
) -> Result<Habit, StoreError> {
    add_habit_with_id(list, name, category, color, Utc::now().timestamp_millis())
}

/// Ids come from the creation wall clock; `candidate_id` is bumped past any
/// existing id so back-to-back adds within the same millisecond stay unique.
pub fn add_habit_with_id(
    list: &mut HabitList,
    name: &str,
    category: &str,
    color: &str,
    candidate_id: i64,
) -> Result<Habit, StoreError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(StoreError::Validation("habit name must not be empty".into()));
    }

    let max_id = list.habits.iter().map(|habit| habit.id).max();
    let id = match max_id {
        Some(max) if candidate_id <= max => max + 1,
        _ => candidate_id,
    };

    let category = category.trim();
    let color = color.trim();
    let habit = Habit {
        id,
        name: name.to_string(),
        category: if category.is_empty() { DEFAULT_CATEGORY } else { category }.to_string(),
        color: if color.is_empty() { DEFAULT_COLOR } else { color }.to_string(),
        streak: 0,
        last_date: None,
        history: Vec::new(),
    };

    list.habits.push(habit.clone());
    Ok(habit)
}

pub fn toggle_habit(list: &mut HabitList, id: i64, today: NaiveDate) -> Result<Habit, StoreError> {
    let habit = list
        .habits
        .iter_mut()
        .find(|habit| habit.id == id)
        .ok_or(StoreError::NotFound(id))?;

    let key = day_key(today);
    if habit.last_date.as_deref() == Some(key.as_str()) {
        return Err(StoreError::AlreadyCompleted);
    }

    habit.streak = habit.streak.saturating_add(1);
    habit.last_date = Some(key.clone());
    habit.history.push(key);
    Ok(habit.clone())
}

pub fn delete_habit(list: &mut HabitList, id: i64) -> bool {
    let before = list.habits.len();
    list.habits.retain(|habit| habit.id != id);
    list.habits.len() != before
}
