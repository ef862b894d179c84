/// Task CRUD endpoints
///
/// This module provides the task management endpoints:
/// - Create, list (with optional completion filter), get, partial update,
///   delete
///
/// # Endpoints
///
/// - `POST /tasks` - Create a task
/// - `GET /tasks?completed={true|false}` - List tasks
/// - `GET /tasks/:id` - Get a task by id
/// - `PATCH /tasks/:id` - Partially update a task
/// - `DELETE /tasks/:id` - Delete a task

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
};
use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use taskman_shared::models::task::{CreateTask, Task, UpdateTask};
use validator::Validate;

/// Create task request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateTaskRequest {
    /// Task title (required)
    #[validate(length(min = 1, max = 255, message = "Title must be 1-255 characters"))]
    pub title: String,

    /// Optional description
    pub description: Option<String>,

    /// Completion flag, defaults to false when absent
    pub completed: Option<bool>,
}

/// Partial update request
///
/// Absent fields are left untouched.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateTaskRequest {
    /// New title
    #[validate(length(min = 1, max = 255, message = "Title must be 1-255 characters"))]
    pub title: Option<String>,

    /// New description
    pub description: Option<String>,

    /// New completion flag
    pub completed: Option<bool>,
}

/// List query parameters
#[derive(Debug, Default, Deserialize)]
pub struct ListTasksQuery {
    /// When present, only tasks with this completion state are returned
    pub completed: Option<bool>,
}

/// Delete confirmation response
#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteTaskResponse {
    /// Confirmation message
    pub message: String,
}

/// Create task endpoint handler
///
/// # Endpoint
///
/// ```text
/// POST /tasks
/// Content-Type: application/json
///
/// {
///   "title": "buy milk",
///   "description": "2 liters",
///   "completed": false
/// }
/// ```
///
/// # Errors
///
/// - `422 Unprocessable Entity`: Validation failed
/// - `500 Internal Server Error`: Storage failure
pub async fn create_task(
    State(state): State<AppState>,
    Json(req): Json<CreateTaskRequest>,
) -> ApiResult<Json<Task>> {
    req.validate().map_err(ApiError::from)?;

    let task = Task::create(
        &state.db,
        CreateTask {
            title: req.title,
            description: req.description,
            completed: req.completed.unwrap_or(false),
        },
    )
    .await?;

    Ok(Json(task))
}

/// List tasks endpoint handler
///
/// # Endpoint
///
/// ```text
/// GET /tasks
/// GET /tasks?completed=true
/// ```
///
/// Without the query parameter every task is returned; with it, only tasks
/// whose completion state matches.
pub async fn list_tasks(
    State(state): State<AppState>,
    Query(query): Query<ListTasksQuery>,
) -> ApiResult<Json<Vec<Task>>> {
    let tasks = Task::list(&state.db, query.completed).await?;

    Ok(Json(tasks))
}

/// Get task endpoint handler
///
/// # Endpoint
///
/// ```text
/// GET /tasks/:id
/// ```
///
/// # Errors
///
/// - `404 Not Found`: No task with this id
pub async fn get_task(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<Task>> {
    let task = Task::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Task not found".to_string()))?;

    Ok(Json(task))
}

/// Update task endpoint handler
///
/// Applies only the fields present in the payload; absent fields keep their
/// stored values.
///
/// # Endpoint
///
/// ```text
/// PATCH /tasks/:id
/// Content-Type: application/json
///
/// { "completed": true }
/// ```
///
/// # Errors
///
/// - `404 Not Found`: No task with this id (nothing is written)
/// - `422 Unprocessable Entity`: Validation failed
pub async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateTaskRequest>,
) -> ApiResult<Json<Task>> {
    req.validate().map_err(ApiError::from)?;

    let task = Task::update(
        &state.db,
        id,
        UpdateTask {
            title: req.title,
            description: req.description,
            completed: req.completed,
        },
    )
    .await?
    .ok_or_else(|| ApiError::NotFound("Task not found".to_string()))?;

    Ok(Json(task))
}

/// Delete task endpoint handler
///
/// # Endpoint
///
/// ```text
/// DELETE /tasks/:id
/// ```
///
/// # Response
///
/// ```json
/// { "message": "Task deleted successfully" }
/// ```
///
/// # Errors
///
/// - `404 Not Found`: No task with this id
pub async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<DeleteTaskResponse>> {
    let deleted = Task::delete(&state.db, id).await?;

    if !deleted {
        return Err(ApiError::NotFound("Task not found".to_string()));
    }

    Ok(Json(DeleteTaskResponse {
        message: "Task deleted successfully".to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_requires_title() {
        let req = CreateTaskRequest {
            title: String::new(),
            description: None,
            completed: None,
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_update_request_absent_fields_deserialize_to_none() {
        let req: UpdateTaskRequest = serde_json::from_str(r#"{"completed": true}"#)
            .expect("Payload should deserialize");

        assert!(req.title.is_none());
        assert!(req.description.is_none());
        assert_eq!(req.completed, Some(true));
    }

    #[test]
    fn test_update_request_validates_present_title() {
        let req = UpdateTaskRequest {
            title: Some(String::new()),
            ..Default::default()
        };
        assert!(req.validate().is_err());

        let req = UpdateTaskRequest {
            title: Some("fine".to_string()),
            ..Default::default()
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_delete_response_shape() {
        let body = serde_json::to_value(DeleteTaskResponse {
            message: "Task deleted successfully".to_string(),
        })
        .expect("Response should serialize");

        assert_eq!(body["message"], "Task deleted successfully");
    }
}
