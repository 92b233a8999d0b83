mod memory;
mod postgres;

pub use memory::MemoryTodoStore;
pub use postgres::PgTodoStore;

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::routes::todos::Todo;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Field changes applied by the mark-completed operation. A `None` field
/// keeps whatever value is already stored.
#[derive(Debug, Default)]
pub struct TodoChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub completed: bool,
}

/// The persistence collaborator. Handlers only ever talk to the store
/// through this trait; the concrete backend is injected at startup.
#[async_trait]
pub trait TodoStore: Send + Sync {
    /// Insert a new todo with `completed = false` and a fresh id.
    async fn create(&self, title: String, description: Option<String>) -> Result<Todo, StoreError>;

    /// Fetch every stored todo.
    async fn find(&self) -> Result<Vec<Todo>, StoreError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Todo>, StoreError>;

    /// Apply `changes` to the todo with `id` and return the updated row,
    /// or `None` if no such todo exists.
    async fn find_by_id_and_update(
        &self,
        id: Uuid,
        changes: TodoChanges,
    ) -> Result<Option<Todo>, StoreError>;

    async fn find_by_id_and_delete(&self, id: Uuid) -> Result<Option<Todo>, StoreError>;
}
