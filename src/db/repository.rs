use chrono::Utc;
use sqlx::SqlitePool;

use crate::db::RepositoryError;
use crate::models::{NewTodo, Todo};

/// Data access for the `todos` table.
///
/// Soft-deleted rows (`deleted_at` set) are invisible to every operation.
#[derive(Clone, Debug)]
pub struct TodoRepository {
    db: SqlitePool,
}

impl TodoRepository {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    pub async fn ping(&self) -> Result<(), RepositoryError> {
        sqlx::query("SELECT 1").execute(&self.db).await?;
        Ok(())
    }

    pub async fn list(&self) -> Result<Vec<Todo>, RepositoryError> {
        let todos = sqlx::query_as::<_, Todo>(
            r#"
            SELECT id, name, description, status, created_at, updated_at, deleted_at
            FROM todos
            WHERE deleted_at IS NULL
            ORDER BY id
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        Ok(todos)
    }

    pub async fn get(&self, id: i64) -> Result<Todo, RepositoryError> {
        sqlx::query_as::<_, Todo>(
            r#"
            SELECT id, name, description, status, created_at, updated_at, deleted_at
            FROM todos
            WHERE id = ?1 AND deleted_at IS NULL
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await?
        .ok_or(RepositoryError::NotFound(id))
    }

    pub async fn create(&self, new: NewTodo) -> Result<Todo, RepositoryError> {
        let now = Utc::now();

        sqlx::query_as::<_, Todo>(
            r#"
            INSERT INTO todos (name, description, status, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?4)
            RETURNING id, name, description, status, created_at, updated_at, deleted_at
            "#,
        )
        .bind(new.name)
        .bind(new.description)
        .bind(new.status)
        .bind(now)
        .fetch_one(&self.db)
        .await
        .map_err(RepositoryError::from_write)
    }

    /// Overwrites name, description and status wholesale. Never inserts.
    pub async fn update(&self, id: i64, replacement: NewTodo) -> Result<Todo, RepositoryError> {
        let now = Utc::now();

        sqlx::query_as::<_, Todo>(
            r#"
            UPDATE todos
            SET name = ?1,
                description = ?2,
                status = ?3,
                updated_at = ?4
            WHERE id = ?5 AND deleted_at IS NULL
            RETURNING id, name, description, status, created_at, updated_at, deleted_at
            "#,
        )
        .bind(replacement.name)
        .bind(replacement.description)
        .bind(replacement.status)
        .bind(now)
        .bind(id)
        .fetch_optional(&self.db)
        .await
        .map_err(RepositoryError::from_write)?
        .ok_or(RepositoryError::NotFound(id))
    }

    /// Soft delete. Returns the number of rows affected, 0 when nothing live matched.
    pub async fn delete(&self, id: i64) -> Result<u64, RepositoryError> {
        let now = Utc::now();
        let affected = sqlx::query(
            r#"
            UPDATE todos
            SET deleted_at = ?1
            WHERE id = ?2 AND deleted_at IS NULL
            "#,
        )
        .bind(now)
        .bind(id)
        .execute(&self.db)
        .await?
        .rows_affected();

        Ok(affected)
    }
}
