//! PostgreSQL implementation of the account repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{ApiUser, NewApiUser, Role};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct UserRow {
    id: i64,
    email: String,
    password_hash: String,
    first_name: String,
    last_name: String,
    phone_number: Option<String>,
    roles: Vec<String>,
    created_at: DateTime<Utc>,
}

impl From<UserRow> for ApiUser {
    fn from(row: UserRow) -> Self {
        let roles = row
            .roles
            .iter()
            .filter_map(|r| match r.parse::<Role>() {
                Ok(role) => Some(role),
                Err(e) => {
                    tracing::warn!(user_id = row.id, "Ignoring stored role: {}", e);
                    None
                }
            })
            .collect();

        ApiUser {
            id: row.id,
            email: row.email,
            password_hash: row.password_hash,
            first_name: row.first_name,
            last_name: row.last_name,
            phone_number: row.phone_number,
            roles,
            created_at: row.created_at,
        }
    }
}

fn role_names(roles: &[Role]) -> Vec<String> {
    roles.iter().map(|r| r.as_str().to_string()).collect()
}

/// PostgreSQL repository for registered accounts.
///
/// Only password hashes are stored; raw passwords never reach this layer.
pub struct PgUserRepository {
    pool: Arc<PgPool>,
}

impl PgUserRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn create(&self, new_user: NewApiUser) -> Result<ApiUser, AppError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (email, password_hash, first_name, last_name, phone_number, roles)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, email, password_hash, first_name, last_name, phone_number, roles, created_at
            "#,
        )
        .bind(new_user.email.to_lowercase())
        .bind(new_user.password_hash)
        .bind(new_user.first_name)
        .bind(new_user.last_name)
        .bind(new_user.phone_number)
        .bind(role_names(&new_user.roles))
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<ApiUser>, AppError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, email, password_hash, first_name, last_name, phone_number, roles, created_at
            FROM users
            WHERE email = lower($1)
            "#,
        )
        .bind(email)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(ApiUser::from))
    }

    async fn list(&self) -> Result<Vec<ApiUser>, AppError> {
        let rows = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, email, password_hash, first_name, last_name, phone_number, roles, created_at
            FROM users
            ORDER BY created_at, id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(ApiUser::from).collect())
    }

    async fn set_roles(&self, id: i64, roles: Vec<Role>) -> Result<ApiUser, AppError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            UPDATE users SET roles = $2
            WHERE id = $1
            RETURNING id, email, password_hash, first_name, last_name, phone_number, roles, created_at
            "#,
        )
        .bind(id)
        .bind(role_names(&roles))
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(ApiUser::from)
            .ok_or_else(|| AppError::not_found("User not found", json!({"id": id})))
    }
}
