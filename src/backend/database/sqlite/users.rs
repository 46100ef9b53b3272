use async_trait::async_trait;

use super::{map_constraint_error, SqliteBackend};
use crate::backend::UserStore;
use crate::error::{AppError, AppResult};
use crate::models::NewUser;

#[async_trait]
impl UserStore for SqliteBackend {
    async fn insert_user(&self, user: &NewUser) -> AppResult<()> {
        sqlx::query("INSERT INTO users (username, email) VALUES (?1, ?2)")
            .bind(&user.username)
            .bind(&user.email)
            .execute(&self.pool)
            .await
            .map_err(|e| map_constraint_error(e, "Username or email already exists"))?;

        Ok(())
    }

    async fn update_user_email(&self, user_id: i64, email: &str) -> AppResult<bool> {
        let result = sqlx::query("UPDATE users SET email = ?1 WHERE user_id = ?2")
            .bind(email)
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Failed to update user: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_user(&self, user_id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM users WHERE user_id = ?1")
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Failed to delete user: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }
}
