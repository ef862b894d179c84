/// Task model and database operations
///
/// This module provides the Task model and CRUD operations for managing
/// tasks.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE tasks (
///     id          BIGSERIAL PRIMARY KEY,
///     title       VARCHAR(255) NOT NULL,
///     description TEXT,
///     completed   BOOLEAN NOT NULL DEFAULT FALSE
/// );
/// ```
///
/// # Example
///
/// ```no_run
/// use taskman_shared::models::task::{CreateTask, Task, UpdateTask};
/// use taskman_shared::db::pool::{create_pool, DatabaseConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = create_pool(DatabaseConfig::default()).await?;
///
/// let task = Task::create(
///     &pool,
///     CreateTask {
///         title: "buy milk".to_string(),
///         description: None,
///         completed: false,
///     },
/// )
/// .await?;
///
/// // Mark it done, leaving the other fields untouched
/// let updated = Task::update(
///     &pool,
///     task.id,
///     UpdateTask {
///         completed: Some(true),
///         ..Default::default()
///     },
/// )
/// .await?;
/// # Ok(())
/// # }
/// ```

use serde::{Deserialize, Serialize};
use sqlx::PgPool;

/// Task model representing a single to-do item
///
/// The id is assigned by the database at creation and never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Task {
    /// Unique task ID (BIGSERIAL)
    pub id: i64,

    /// Short title, required at creation
    pub title: String,

    /// Optional longer description
    pub description: Option<String>,

    /// Whether the task is done
    pub completed: bool,
}

/// Input for creating a new task
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTask {
    /// Task title (required)
    pub title: String,

    /// Optional description
    pub description: Option<String>,

    /// Completion flag (callers default this to false when absent)
    pub completed: bool,
}

/// Input for partially updating an existing task
///
/// All fields are optional. Only `Some` fields are written; `None` fields
/// are left untouched, never reset to defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTask {
    /// New title
    pub title: Option<String>,

    /// New description
    pub description: Option<String>,

    /// New completion flag
    pub completed: Option<bool>,
}

impl UpdateTask {
    /// True if no field is set
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.completed.is_none()
    }
}

impl Task {
    /// Creates a new task in the database
    ///
    /// The insert and the id assignment are a single statement, so a failed
    /// create leaves no partial state.
    ///
    /// # Returns
    ///
    /// The newly created task with its generated id
    ///
    /// # Errors
    ///
    /// Returns an error if the database connection fails
    pub async fn create(pool: &PgPool, data: CreateTask) -> Result<Self, sqlx::Error> {
        let task = sqlx::query_as::<_, Task>(
            r#"
            INSERT INTO tasks (title, description, completed)
            VALUES ($1, $2, $3)
            RETURNING id, title, description, completed
            "#,
        )
        .bind(data.title)
        .bind(data.description)
        .bind(data.completed)
        .fetch_one(pool)
        .await?;

        Ok(task)
    }

    /// Finds a task by ID
    ///
    /// # Returns
    ///
    /// The task if found, None otherwise — a missing id is not an error
    ///
    /// # Errors
    ///
    /// Returns an error if the database connection fails
    pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<Self>, sqlx::Error> {
        let task = sqlx::query_as::<_, Task>(
            r#"
            SELECT id, title, description, completed
            FROM tasks
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(task)
    }

    /// Lists tasks, optionally filtered by completion state
    ///
    /// With `completed: None` every task is returned; otherwise only tasks
    /// whose `completed` flag equals the filter. Ordered by id, i.e.
    /// insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error if the database connection fails
    pub async fn list(pool: &PgPool, completed: Option<bool>) -> Result<Vec<Self>, sqlx::Error> {
        let tasks = match completed {
            Some(flag) => {
                sqlx::query_as::<_, Task>(
                    r#"
                    SELECT id, title, description, completed
                    FROM tasks
                    WHERE completed = $1
                    ORDER BY id
                    "#,
                )
                .bind(flag)
                .fetch_all(pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, Task>(
                    r#"
                    SELECT id, title, description, completed
                    FROM tasks
                    ORDER BY id
                    "#,
                )
                .fetch_all(pool)
                .await?
            }
        };

        Ok(tasks)
    }

    /// Partially updates an existing task
    ///
    /// Only `Some` fields in `data` are written. The check-and-write is a
    /// single `UPDATE ... RETURNING` statement, so a concurrent delete
    /// cannot produce a partial write: either the row exists and every
    /// present field is applied, or `None` comes back and nothing was
    /// written.
    ///
    /// # Returns
    ///
    /// The updated task if found, None if no task has this id. An empty
    /// `data` returns the row unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error if the database connection fails
    pub async fn update(
        pool: &PgPool,
        id: i64,
        data: UpdateTask,
    ) -> Result<Option<Self>, sqlx::Error> {
        if data.is_empty() {
            return Self::find_by_id(pool, id).await;
        }

        // Build the UPDATE over whichever fields are present
        let mut assignments = Vec::new();
        let mut bind_count = 1;

        if data.title.is_some() {
            bind_count += 1;
            assignments.push(format!("title = ${}", bind_count));
        }
        if data.description.is_some() {
            bind_count += 1;
            assignments.push(format!("description = ${}", bind_count));
        }
        if data.completed.is_some() {
            bind_count += 1;
            assignments.push(format!("completed = ${}", bind_count));
        }

        let query = format!(
            "UPDATE tasks SET {} WHERE id = $1 RETURNING id, title, description, completed",
            assignments.join(", ")
        );

        let mut q = sqlx::query_as::<_, Task>(&query).bind(id);

        if let Some(title) = data.title {
            q = q.bind(title);
        }
        if let Some(description) = data.description {
            q = q.bind(description);
        }
        if let Some(completed) = data.completed {
            q = q.bind(completed);
        }

        let task = q.fetch_optional(pool).await?;

        Ok(task)
    }

    /// Deletes a task by ID
    ///
    /// # Returns
    ///
    /// True if a task was deleted, false if no task has this id
    ///
    /// # Errors
    ///
    /// Returns an error if the database connection fails
    pub async fn delete(pool: &PgPool, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Counts total number of tasks
    ///
    /// # Errors
    ///
    /// Returns an error if the database connection fails
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM tasks")
            .fetch_one(pool)
            .await?;

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_task_struct() {
        let create_task = CreateTask {
            title: "write tests".to_string(),
            description: Some("for the task model".to_string()),
            completed: false,
        };

        assert_eq!(create_task.title, "write tests");
        assert!(!create_task.completed);
    }

    #[test]
    fn test_update_task_default_is_empty() {
        let update = UpdateTask::default();
        assert!(update.is_empty());
        assert!(update.title.is_none());
        assert!(update.description.is_none());
        assert!(update.completed.is_none());
    }

    #[test]
    fn test_update_task_with_field_is_not_empty() {
        let update = UpdateTask {
            completed: Some(true),
            ..Default::default()
        };
        assert!(!update.is_empty());
    }

    // Integration tests for database operations are in tests/task_model_tests.rs
}
