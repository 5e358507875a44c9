use crate::errors::AppError;
use crate::models::HabitList;
use std::{env, path::Path, path::PathBuf};
use tokio::fs;
use tracing::error;

pub fn resolve_data_path() -> Result<PathBuf, std::io::Error> {
    if let Ok(path) = env::var("APP_DATA_PATH") {
        return Ok(PathBuf::from(path));
    }

    Ok(PathBuf::from("data/habits.json"))
}

/// Strict parse of the persisted representation.
pub fn parse_data(bytes: &[u8]) -> Result<HabitList, serde_json::Error> {
    serde_json::from_slice(bytes)
}

/// Missing, unreadable, or corrupt data degrades to an empty collection.
pub async fn load_data(path: &Path) -> HabitList {
    match fs::read(path).await {
        Ok(bytes) => match parse_data(&bytes) {
            Ok(list) => list,
            Err(err) => {
                error!("failed to parse data file: {err}");
                HabitList::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => HabitList::default(),
        Err(err) => {
            error!("failed to read data file: {err}");
            HabitList::default()
        }
    }
}

pub async fn persist_data(path: &Path, list: &HabitList) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(list).map_err(AppError::internal)?;
    fs::write(path, payload).await.map_err(AppError::internal)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{add_habit_with_id, toggle_habit};
    use chrono::NaiveDate;

    #[test]
    fn parse_round_trips_a_collection() {
        let mut list = HabitList::default();
        add_habit_with_id(&mut list, "Read", "Mind", "#10b981", 7).unwrap();
        toggle_habit(&mut list, 7, NaiveDate::from_ymd_opt(2024, 1, 2).unwrap()).unwrap();

        let payload = serde_json::to_vec_pretty(&list).unwrap();
        let parsed = parse_data(&payload).unwrap();
        assert_eq!(parsed, list);
    }

    #[test]
    fn parse_round_trips_empty_collection() {
        let payload = serde_json::to_vec(&HabitList::default()).unwrap();
        assert_eq!(parse_data(&payload).unwrap(), HabitList::default());
    }

    #[test]
    fn parse_rejects_malformed_payload() {
        assert!(parse_data(b"{\"habits\": 3}").is_err());
        assert!(parse_data(b"not json").is_err());
    }

    #[tokio::test]
    async fn load_falls_back_to_empty_on_corrupt_file() {
        let mut path = std::env::temp_dir();
        path.push(format!("habit_pro_corrupt_{}.json", std::process::id()));
        fs::write(&path, b"{{{{").await.unwrap();

        let list = load_data(&path).await;
        assert!(list.habits.is_empty());

        let _ = fs::remove_file(&path).await;
    }

    #[tokio::test]
    async fn load_treats_missing_file_as_empty() {
        let list = load_data(Path::new("/nonexistent/habit_pro/habits.json")).await;
        assert!(list.habits.is_empty());
    }
}
