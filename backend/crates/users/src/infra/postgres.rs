//! PostgreSQL Repository Implementation

use sqlx::PgPool;

use crate::domain::entity::user::{NewUser, User, UserPatch};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    full_name::FullName, role_name::RoleName, user_id::UserId,
};
use crate::error::{UserError, UserResult};

/// PostgreSQL-backed user repository
///
/// Cloning is cheap: the pool is reference counted, and every call checks
/// out its own connection for the duration of one statement.
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl UserRepository for PgUserRepository {
    async fn create(&self, user: &NewUser) -> UserResult<UserId> {
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO users (full_name, role, efficiency)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(user.full_name.as_str())
        .bind(user.role.as_str())
        .bind(user.efficiency)
        .fetch_one(&self.pool)
        .await?;

        Ok(UserId::from_raw(id))
    }

    async fn list(&self, role: Option<&RoleName>) -> UserResult<Vec<User>> {
        let rows = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, full_name, role, efficiency
            FROM users
            WHERE $1::TEXT IS NULL OR role = $1::TEXT
            ORDER BY id
            "#,
        )
        .bind(role.map(RoleName::as_str))
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(UserRow::into_user).collect()
    }

    async fn find_by_id(&self, user_id: UserId) -> UserResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, full_name, role, efficiency
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(user_id.get())
        .fetch_optional(&self.pool)
        .await?;

        row.map(UserRow::into_user).transpose()
    }

    async fn update(&self, user_id: UserId, patch: &UserPatch) -> UserResult<Option<User>> {
        if patch.is_empty() {
            return self.find_by_id(user_id).await;
        }

        // NULL parameters keep the current column value
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            UPDATE users
            SET
                full_name = COALESCE($2, full_name),
                role = COALESCE($3, role),
                efficiency = COALESCE($4, efficiency)
            WHERE id = $1
            RETURNING id, full_name, role, efficiency
            "#,
        )
        .bind(user_id.get())
        .bind(patch.full_name.as_ref().map(FullName::as_str))
        .bind(patch.role.as_ref().map(RoleName::as_str))
        .bind(patch.efficiency)
        .fetch_optional(&self.pool)
        .await?;

        row.map(UserRow::into_user).transpose()
    }

    async fn delete(&self, user_id: UserId) -> UserResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            DELETE FROM users
            WHERE id = $1
            RETURNING id, full_name, role, efficiency
            "#,
        )
        .bind(user_id.get())
        .fetch_optional(&self.pool)
        .await?;

        row.map(UserRow::into_user).transpose()
    }

    async fn delete_all(&self) -> UserResult<u64> {
        let deleted = sqlx::query("DELETE FROM users")
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted)
    }
}

// Internal row type for sqlx mapping
#[derive(sqlx::FromRow)]
struct UserRow {
    id: i64,
    full_name: String,
    role: String,
    efficiency: i32,
}

impl UserRow {
    /// Rows written outside this service may violate the text rules
    fn into_user(self) -> UserResult<User> {
        let full_name = FullName::new(self.full_name).map_err(|e| {
            UserError::Internal(format!("stored full_name of user {} is invalid: {e}", self.id))
        })?;
        let role = RoleName::new(self.role).map_err(|e| {
            UserError::Internal(format!("stored role of user {} is invalid: {e}", self.id))
        })?;

        Ok(User {
            id: UserId::from_raw(self.id),
            full_name,
            role,
            efficiency: self.efficiency,
        })
    }
}
