use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Habit {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub color: String,
    pub streak: u32,
    pub last_date: Option<String>,
    pub history: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct HabitList {
    pub habits: Vec<Habit>,
}

impl HabitList {
    pub fn find(&self, id: i64) -> Option<&Habit> {
        self.habits.iter().find(|habit| habit.id == id)
    }
}

#[derive(Debug, Deserialize)]
pub struct AddHabitRequest {
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub color: String,
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub deleted: bool,
}

#[derive(Debug, Serialize)]
pub struct DashboardSummary {
    pub today_count: usize,
    pub best_streak: u32,
    pub total_habits: usize,
}

#[derive(Debug, Serialize)]
pub struct WeeklyDayPoint {
    pub date: String,
    pub label: String,
    pub completed: usize,
}

#[derive(Debug, Serialize)]
pub struct StreakPoint {
    pub name: String,
    pub streak: u32,
}

#[derive(Debug, Serialize)]
pub struct CompletionRatio {
    pub completed: usize,
    pub pending: usize,
}

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub week: Vec<WeeklyDayPoint>,
    pub streaks: Vec<StreakPoint>,
    pub ratio: CompletionRatio,
}
