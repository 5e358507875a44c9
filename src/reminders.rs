use crate::state::AppState;
use crate::stats::pending_habits_at;
use crate::store;
use std::{env, time::Duration};
use tokio::time::{interval, MissedTickBehavior};
use tracing::info;

const DEFAULT_INTERVAL_SECS: u64 = 60;

pub fn resolve_interval() -> Duration {
    interval_from(env::var("REMINDER_INTERVAL_SECS").ok().as_deref())
}

fn interval_from(value: Option<&str>) -> Duration {
    let secs = value
        .and_then(|raw| raw.trim().parse::<u64>().ok())
        .filter(|secs| *secs > 0)
        .unwrap_or(DEFAULT_INTERVAL_SECS);
    Duration::from_secs(secs)
}

/// Read-only periodic check; one reminder line per habit still pending today.
pub async fn run(state: AppState, period: Duration) {
    let mut ticker = interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // the first tick completes immediately; skip it so startup stays quiet
    ticker.tick().await;

    loop {
        ticker.tick().await;
        let pending = {
            let habits = state.habits.lock().await;
            pending_habits_at(store::today(), &habits)
        };
        for habit in &pending {
            info!(habit = %habit.name, streak = habit.streak, "reminder: not completed today");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interval_defaults_to_one_minute() {
        assert_eq!(interval_from(None), Duration::from_secs(60));
        assert_eq!(interval_from(Some("")), Duration::from_secs(60));
        assert_eq!(interval_from(Some("abc")), Duration::from_secs(60));
        assert_eq!(interval_from(Some("0")), Duration::from_secs(60));
    }

    #[test]
    fn interval_honors_override() {
        assert_eq!(interval_from(Some("5")), Duration::from_secs(5));
        assert_eq!(interval_from(Some(" 90 ")), Duration::from_secs(90));
    }
}
