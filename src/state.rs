use sqlx::SqlitePool;

use crate::db::TodoRepository;

#[derive(Clone)]
pub struct AppState {
    pub todos: TodoRepository,
}

impl AppState {
    pub fn new(db: SqlitePool) -> Self {
        Self {
            todos: TodoRepository::new(db),
        }
    }
}
