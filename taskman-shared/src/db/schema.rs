/// Startup schema bootstrap
///
/// This module creates the tables the service needs if they do not already
/// exist. It runs once at process startup, before the listener accepts
/// traffic, and never touches existing data: there is no migration history
/// and no destructive DDL.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE IF NOT EXISTS tasks (
///     id          BIGSERIAL PRIMARY KEY,
///     title       VARCHAR(255) NOT NULL,
///     description TEXT,
///     completed   BOOLEAN NOT NULL DEFAULT FALSE
/// );
///
/// CREATE TABLE IF NOT EXISTS users (
///     id              BIGSERIAL PRIMARY KEY,
///     username        VARCHAR(255) NOT NULL UNIQUE,
///     hashed_password VARCHAR(255) NOT NULL
/// );
/// ```
///
/// # Example
///
/// ```no_run
/// use taskman_shared::db::pool::{create_pool, DatabaseConfig};
/// use taskman_shared::db::schema::ensure_schema;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = create_pool(DatabaseConfig::default()).await?;
/// ensure_schema(&pool).await?;
/// # Ok(())
/// # }
/// ```

use sqlx::PgPool;
use tracing::{debug, info};

const CREATE_TASKS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS tasks (
    id          BIGSERIAL PRIMARY KEY,
    title       VARCHAR(255) NOT NULL,
    description TEXT,
    completed   BOOLEAN NOT NULL DEFAULT FALSE
)
"#;

const CREATE_USERS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id              BIGSERIAL PRIMARY KEY,
    username        VARCHAR(255) NOT NULL UNIQUE,
    hashed_password VARCHAR(255) NOT NULL
)
"#;

/// Ensures the tasks and users tables exist
///
/// Idempotent: safe to run on every startup. Each statement is
/// `CREATE TABLE IF NOT EXISTS`, so existing tables and their rows are left
/// untouched.
///
/// # Errors
///
/// Returns an error if a DDL statement fails or the database connection is
/// lost during bootstrap.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    info!("Ensuring database schema");

    sqlx::query(CREATE_TASKS_TABLE).execute(pool).await?;
    debug!("tasks table ready");

    sqlx::query(CREATE_USERS_TABLE).execute(pool).await?;
    debug!("users table ready");

    info!("Database schema ready");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_statements_are_idempotent() {
        assert!(CREATE_TASKS_TABLE.contains("IF NOT EXISTS"));
        assert!(CREATE_USERS_TABLE.contains("IF NOT EXISTS"));
    }

    // Integration tests require a running database
    // These are in the tests/ directory and run with `cargo test -- --ignored`
}
