use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{StoreError, TodoChanges, TodoStore};
use crate::routes::todos::Todo;

/// In-memory store used by the integration tests. Same per-document
/// semantics as the Postgres store, no durability.
#[derive(Default)]
pub struct MemoryTodoStore {
    todos: RwLock<HashMap<Uuid, Todo>>,
}

#[async_trait]
impl TodoStore for MemoryTodoStore {
    async fn create(&self, title: String, description: Option<String>) -> Result<Todo, StoreError> {
        let now = Utc::now();
        let todo = Todo {
            id: Uuid::new_v4(),
            title,
            description,
            completed: false,
            created_at: now,
            updated_at: now,
        };

        self.todos.write().await.insert(todo.id, todo.clone());

        Ok(todo)
    }

    async fn find(&self) -> Result<Vec<Todo>, StoreError> {
        let todos = self.todos.read().await;
        let mut all: Vec<Todo> = todos.values().cloned().collect();
        all.sort_by_key(|t| (t.created_at, t.id));

        Ok(all)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Todo>, StoreError> {
        Ok(self.todos.read().await.get(&id).cloned())
    }

    async fn find_by_id_and_update(
        &self,
        id: Uuid,
        changes: TodoChanges,
    ) -> Result<Option<Todo>, StoreError> {
        let mut todos = self.todos.write().await;

        let Some(todo) = todos.get_mut(&id) else {
            return Ok(None);
        };

        if let Some(title) = changes.title {
            todo.title = title;
        }
        if let Some(description) = changes.description {
            todo.description = Some(description);
        }
        todo.completed = changes.completed;
        todo.updated_at = Utc::now();

        Ok(Some(todo.clone()))
    }

    async fn find_by_id_and_delete(&self, id: Uuid) -> Result<Option<Todo>, StoreError> {
        Ok(self.todos.write().await.remove(&id))
    }
}
