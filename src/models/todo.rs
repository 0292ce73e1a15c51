use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(rename_all = "snake_case")]
pub enum TodoStatus {
    #[default]
    Pending,
    InProgress,
    Done,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Todo {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub status: TodoStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Request body for both create and full-replace update.
///
/// Omitted or `null` fields take their defaults, so a PUT without
/// `description` clears it rather than keeping the stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewTodo {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: TodoStatus,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_todo_null_fields_take_defaults() {
        let todo: NewTodo =
            serde_json::from_str(r#"{"name":"a","description":null,"status":null}"#).unwrap();
        assert_eq!(todo.name, "a");
        assert_eq!(todo.description, "");
        assert_eq!(todo.status, TodoStatus::Pending);
    }

    #[test]
    fn test_new_todo_missing_fields_take_defaults() {
        let todo: NewTodo = serde_json::from_str("{}").unwrap();
        assert_eq!(todo.name, "");
        assert_eq!(todo.description, "");
        assert_eq!(todo.status, TodoStatus::Pending);
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        assert!(serde_json::from_str::<NewTodo>(r#"{"name":"a","status":"someday"}"#).is_err());
    }
}
