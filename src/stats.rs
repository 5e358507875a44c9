use crate::models::{
    CompletionRatio, DashboardSummary, Habit, HabitList, StatsResponse, StreakPoint,
    WeeklyDayPoint,
};
use crate::store::{day_key, today};
use chrono::{Datelike, Duration, NaiveDate};

const DAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

pub fn build_stats(list: &HabitList) -> StatsResponse {
    build_stats_at(today(), list)
}

pub fn build_stats_at(today: NaiveDate, list: &HabitList) -> StatsResponse {
    StatsResponse {
        week: weekly_completion_at(today, list),
        streaks: streak_series(list),
        ratio: completion_ratio_at(today, list),
    }
}

pub fn dashboard_summary(list: &HabitList) -> DashboardSummary {
    dashboard_summary_at(today(), list)
}

pub fn dashboard_summary_at(today: NaiveDate, list: &HabitList) -> DashboardSummary {
    let key = day_key(today);
    DashboardSummary {
        today_count: completed_count(list, &key),
        best_streak: list.habits.iter().map(|habit| habit.streak).max().unwrap_or(0),
        total_habits: list.habits.len(),
    }
}

/// Completions per day for the week containing `today`, Sunday first.
/// Date arithmetic rolls over month and year boundaries.
pub fn weekly_completion_at(today: NaiveDate, list: &HabitList) -> Vec<WeeklyDayPoint> {
    let sunday = today - Duration::days(today.weekday().num_days_from_sunday() as i64);

    (0..7)
        .map(|offset| {
            let date = sunday + Duration::days(offset);
            let key = day_key(date);
            let completed = list
                .habits
                .iter()
                .filter(|habit| habit.history.iter().any(|day| day == &key))
                .count();
            WeeklyDayPoint {
                date: key,
                label: DAY_LABELS[offset as usize].to_string(),
                completed,
            }
        })
        .collect()
}

pub fn streak_series(list: &HabitList) -> Vec<StreakPoint> {
    list.habits
        .iter()
        .map(|habit| StreakPoint {
            name: habit.name.clone(),
            streak: habit.streak,
        })
        .collect()
}

pub fn completion_ratio_at(today: NaiveDate, list: &HabitList) -> CompletionRatio {
    let completed = completed_count(list, &day_key(today));
    CompletionRatio {
        completed,
        pending: list.habits.len().saturating_sub(completed),
    }
}

pub fn pending_habits_at(today: NaiveDate, list: &HabitList) -> Vec<Habit> {
    let key = day_key(today);
    list.habits
        .iter()
        .filter(|habit| habit.last_date.as_deref() != Some(key.as_str()))
        .cloned()
        .collect()
}

fn completed_count(list: &HabitList, key: &str) -> usize {
    list.habits
        .iter()
        .filter(|habit| habit.last_date.as_deref() == Some(key))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{add_habit_with_id, toggle_habit};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn list_with(names: &[&str]) -> HabitList {
        let mut list = HabitList::default();
        for (index, name) in names.iter().enumerate() {
            add_habit_with_id(&mut list, name, "", "", index as i64 + 1).unwrap();
        }
        list
    }

    #[test]
    fn summary_of_empty_collection_is_all_zero() {
        let summary = dashboard_summary_at(date(2024, 1, 2), &HabitList::default());
        assert_eq!(summary.today_count, 0);
        assert_eq!(summary.best_streak, 0);
        assert_eq!(summary.total_habits, 0);
    }

    #[test]
    fn summary_counts_today_and_best_streak() {
        let mut list = list_with(&["Read", "Run", "Write"]);
        let today = date(2024, 1, 2);
        toggle_habit(&mut list, 1, date(2024, 1, 1)).unwrap();
        toggle_habit(&mut list, 1, today).unwrap();
        toggle_habit(&mut list, 2, today).unwrap();

        let summary = dashboard_summary_at(today, &list);
        assert_eq!(summary.today_count, 2);
        assert_eq!(summary.best_streak, 2);
        assert_eq!(summary.total_habits, 3);
    }

    #[test]
    fn weekly_completion_has_seven_sunday_first_slots() {
        // 2024-01-02 is a Tuesday; its week runs 2023-12-31 .. 2024-01-06.
        let week = weekly_completion_at(date(2024, 1, 2), &HabitList::default());

        assert_eq!(week.len(), 7);
        assert_eq!(week[0].date, "2023-12-31");
        assert_eq!(week[0].label, "Sun");
        assert_eq!(week[6].date, "2024-01-06");
        assert_eq!(week[6].label, "Sat");
    }

    #[test]
    fn weekly_completion_reflects_history_in_the_right_slot() {
        let mut list = list_with(&["Read"]);
        let today = date(2024, 1, 2);
        toggle_habit(&mut list, 1, today).unwrap();

        let week = weekly_completion_at(today, &list);
        let total: usize = week.iter().map(|day| day.completed).sum();
        assert_eq!(total, 1);
        // Tuesday slot
        assert_eq!(week[2].date, "2024-01-02");
        assert_eq!(week[2].completed, 1);
    }

    #[test]
    fn weekly_completion_ignores_days_outside_the_window() {
        let mut list = list_with(&["Read"]);
        toggle_habit(&mut list, 1, date(2023, 12, 1)).unwrap();

        let week = weekly_completion_at(date(2024, 1, 2), &list);
        assert!(week.iter().all(|day| day.completed == 0));
    }

    #[test]
    fn streak_series_preserves_collection_order() {
        let mut list = list_with(&["Read", "Run"]);
        toggle_habit(&mut list, 2, date(2024, 1, 2)).unwrap();

        let series = streak_series(&list);
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].name, "Read");
        assert_eq!(series[0].streak, 0);
        assert_eq!(series[1].name, "Run");
        assert_eq!(series[1].streak, 1);
    }

    #[test]
    fn completion_ratio_splits_completed_and_pending() {
        let mut list = list_with(&["Read", "Run", "Write"]);
        let today = date(2024, 1, 2);
        toggle_habit(&mut list, 1, today).unwrap();

        let ratio = completion_ratio_at(today, &list);
        assert_eq!(ratio.completed, 1);
        assert_eq!(ratio.pending, 2);
    }

    #[test]
    fn pending_habits_excludes_completed_today() {
        let mut list = list_with(&["Read", "Run"]);
        let today = date(2024, 1, 2);
        toggle_habit(&mut list, 1, today).unwrap();
        // yesterday's completion still counts as pending today
        toggle_habit(&mut list, 2, date(2024, 1, 1)).unwrap();

        let pending = pending_habits_at(today, &list);
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].name, "Run");
    }
}
