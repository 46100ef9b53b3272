use async_trait::async_trait;

use super::{map_constraint_error, SqliteBackend};
use crate::backend::GroupStore;
use crate::error::{AppError, AppResult};
use crate::models::NewGroup;

#[async_trait]
impl GroupStore for SqliteBackend {
    async fn insert_group(&self, group: &NewGroup) -> AppResult<()> {
        sqlx::query("INSERT INTO groups (group_name) VALUES (?1)")
            .bind(&group.group_name)
            .execute(&self.pool)
            .await
            .map_err(|e| map_constraint_error(e, "Group name already exists"))?;

        Ok(())
    }

    async fn update_group_name(&self, group_id: i64, group_name: &str) -> AppResult<bool> {
        let result = sqlx::query("UPDATE groups SET group_name = ?1 WHERE group_id = ?2")
            .bind(group_name)
            .bind(group_id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Failed to update group: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_group(&self, group_id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM groups WHERE group_id = ?1")
            .bind(group_id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Failed to delete group: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::super::connect_test_backend;
    use crate::backend::GroupStore;
    use crate::error::AppError;
    use crate::models::NewGroup;

    fn admins() -> NewGroup {
        NewGroup {
            group_name: "admins".to_string(),
        }
    }

    #[tokio::test]
    async fn insert_then_duplicate_conflicts() {
        let backend = connect_test_backend().await;

        backend.insert_group(&admins()).await.unwrap();

        match backend.insert_group(&admins()).await {
            Err(AppError::Conflict(detail)) => assert_eq!(detail, "Group name already exists"),
            other => panic!("expected Conflict, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn rename_reports_existence_via_rows_affected() {
        let backend = connect_test_backend().await;

        backend.insert_group(&admins()).await.unwrap();

        assert!(backend.update_group_name(1, "operators").await.unwrap());
        assert!(!backend.update_group_name(999, "operators").await.unwrap());
    }

    #[tokio::test]
    async fn delete_is_permanent() {
        let backend = connect_test_backend().await;

        backend.insert_group(&admins()).await.unwrap();

        assert!(backend.delete_group(1).await.unwrap());
        assert!(!backend.delete_group(1).await.unwrap());
    }
}
