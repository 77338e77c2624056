//! In-memory task table

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use uuid::Uuid;

/// A single task row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: Uuid,
    pub text: String,
    pub is_completed: bool,
    pub created_at: DateTime<Utc>,
}

/// Task table kept in insertion order
#[derive(Debug, Default)]
pub struct TaskStore {
    tasks: RwLock<Vec<Task>>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, text: &str, is_completed: bool) -> Task {
        let task = Task {
            id: Uuid::new_v4(),
            text: text.to_string(),
            is_completed,
            created_at: Utc::now(),
        };
        self.tasks.write().await.push(task.clone());
        task
    }

    pub async fn list(&self) -> Vec<Task> {
        self.tasks.read().await.clone()
    }

    pub async fn get(&self, id: Uuid) -> Option<Task> {
        self.tasks.read().await.iter().find(|t| t.id == id).cloned()
    }

    /// Update completion; returns the updated row if it exists
    pub async fn set_completed(&self, id: Uuid, is_completed: bool) -> Option<Task> {
        let mut tasks = self.tasks.write().await;
        let task = tasks.iter_mut().find(|t| t.id == id)?;
        task.is_completed = is_completed;
        Some(task.clone())
    }

    pub async fn remove(&self, id: Uuid) -> Option<Task> {
        let mut tasks = self.tasks.write().await;
        let index = tasks.iter().position(|t| t.id == id)?;
        Some(tasks.remove(index))
    }
}
