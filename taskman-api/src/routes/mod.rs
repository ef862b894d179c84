/// API route handlers
///
/// This module contains all route handlers organized by resource:
///
/// - `health`: Health check endpoint
/// - `tasks`: Task CRUD endpoints
/// - `auth`: Registration and token issuance

pub mod auth;
pub mod health;
pub mod tasks;
