use async_trait::async_trait;

use super::{map_constraint_error, SqliteBackend};
use crate::backend::MembershipStore;
use crate::error::{AppError, AppResult};
use crate::models::NewMembership;

#[async_trait]
impl MembershipStore for SqliteBackend {
    async fn insert_membership(
        &self,
        group_id: i64,
        membership: &NewMembership,
    ) -> AppResult<()> {
        sqlx::query("INSERT INTO group_memberships (group_id, user_id, role) VALUES (?1, ?2, ?3)")
            .bind(group_id)
            .bind(membership.user_id)
            .bind(&membership.role)
            .execute(&self.pool)
            .await
            .map_err(|e| map_constraint_error(e, "User is already a member of the group"))?;

        Ok(())
    }

    async fn delete_membership(&self, group_id: i64, user_id: i64) -> AppResult<bool> {
        let result =
            sqlx::query("DELETE FROM group_memberships WHERE group_id = ?1 AND user_id = ?2")
                .bind(group_id)
                .bind(user_id)
                .execute(&self.pool)
                .await
                .map_err(|e| AppError::Database(format!("Failed to delete membership: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::super::connect_test_backend;
    use crate::backend::{GroupStore, MembershipStore, UserStore};
    use crate::error::AppError;
    use crate::models::{NewGroup, NewMembership, NewUser};

    async fn seed_user_and_group(
        backend: &super::SqliteBackend,
    ) -> (i64, i64) {
        backend
            .insert_user(&NewUser {
                username: "alice".to_string(),
                email: "alice@example.com".to_string(),
            })
            .await
            .unwrap();
        backend
            .insert_group(&NewGroup {
                group_name: "admins".to_string(),
            })
            .await
            .unwrap();
        (1, 1)
    }

    fn member(user_id: i64) -> NewMembership {
        NewMembership {
            user_id,
            role: "member".to_string(),
        }
    }

    #[tokio::test]
    async fn insert_then_duplicate_pair_conflicts() {
        let backend = connect_test_backend().await;
        let (user_id, group_id) = seed_user_and_group(&backend).await;

        backend
            .insert_membership(group_id, &member(user_id))
            .await
            .unwrap();

        // Same pair again, even with a different role
        let elevated = NewMembership {
            user_id,
            role: "admin".to_string(),
        };
        match backend.insert_membership(group_id, &elevated).await {
            Err(AppError::Conflict(detail)) => {
                assert_eq!(detail, "User is already a member of the group")
            }
            other => panic!("expected Conflict, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn insert_without_referenced_rows_is_a_database_error() {
        let backend = connect_test_backend().await;

        match backend.insert_membership(42, &member(42)).await {
            Err(AppError::Database(_)) => {}
            other => panic!("expected Database, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn delete_reports_existence_via_rows_affected() {
        let backend = connect_test_backend().await;
        let (user_id, group_id) = seed_user_and_group(&backend).await;

        backend
            .insert_membership(group_id, &member(user_id))
            .await
            .unwrap();

        assert!(backend.delete_membership(group_id, user_id).await.unwrap());
        assert!(!backend.delete_membership(group_id, user_id).await.unwrap());
    }

    #[tokio::test]
    async fn deleting_a_user_cascades_to_memberships() {
        let backend = connect_test_backend().await;
        let (user_id, group_id) = seed_user_and_group(&backend).await;

        backend
            .insert_membership(group_id, &member(user_id))
            .await
            .unwrap();
        backend.delete_user(user_id).await.unwrap();

        assert!(!backend.delete_membership(group_id, user_id).await.unwrap());
    }

    #[tokio::test]
    async fn deleting_a_group_cascades_to_memberships() {
        let backend = connect_test_backend().await;
        let (user_id, group_id) = seed_user_and_group(&backend).await;

        backend
            .insert_membership(group_id, &member(user_id))
            .await
            .unwrap();
        backend.delete_group(group_id).await.unwrap();

        assert!(!backend.delete_membership(group_id, user_id).await.unwrap());
    }
}
