/// Database models for taskman
///
/// This module contains the entity models and their CRUD operations.
/// Expected "not found" conditions are returned as `Option`/`bool`; only
/// genuine storage failures surface as `sqlx::Error`.
///
/// # Models
///
/// - `task`: Tasks with title, optional description, and completion flag
/// - `user`: User accounts for registration and token issuance
///
/// # Example
///
/// ```no_run
/// use taskman_shared::models::task::{CreateTask, Task};
/// use taskman_shared::db::pool::{create_pool, DatabaseConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = create_pool(DatabaseConfig::default()).await?;
///
/// let task = Task::create(
///     &pool,
///     CreateTask {
///         title: "write the report".to_string(),
///         description: None,
///         completed: false,
///     },
/// )
/// .await?;
/// # Ok(())
/// # }
/// ```

pub mod task;
pub mod user;
