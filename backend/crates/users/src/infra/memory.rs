//! In-Memory Repository Implementation
//!
//! Backs the router tests and `STORAGE=memory` local runs. Ids are handed
//! out from a sequence that never rewinds, like `BIGSERIAL`.

use std::collections::BTreeMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::entity::user::{NewUser, User, UserPatch};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{role_name::RoleName, user_id::UserId};
use crate::error::UserResult;

#[derive(Default)]
struct Table {
    rows: BTreeMap<UserId, User>,
    last_id: i64,
}

/// In-memory user repository. Clones share the same table.
#[derive(Clone, Default)]
pub struct InMemoryUserRepository {
    table: Arc<RwLock<Table>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: &NewUser) -> UserResult<UserId> {
        let mut table = self.table.write().await;
        table.last_id += 1;
        let user_id = UserId::from_raw(table.last_id);
        table.rows.insert(user_id, user.clone().with_id(user_id));
        Ok(user_id)
    }

    async fn list(&self, role: Option<&RoleName>) -> UserResult<Vec<User>> {
        let table = self.table.read().await;
        Ok(table
            .rows
            .values()
            .filter(|user| role.is_none_or(|role| &user.role == role))
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, user_id: UserId) -> UserResult<Option<User>> {
        Ok(self.table.read().await.rows.get(&user_id).cloned())
    }

    async fn update(&self, user_id: UserId, patch: &UserPatch) -> UserResult<Option<User>> {
        let mut table = self.table.write().await;
        Ok(table.rows.get_mut(&user_id).map(|user| {
            user.apply(patch);
            user.clone()
        }))
    }

    async fn delete(&self, user_id: UserId) -> UserResult<Option<User>> {
        Ok(self.table.write().await.rows.remove(&user_id))
    }

    async fn delete_all(&self) -> UserResult<u64> {
        let mut table = self.table.write().await;
        let deleted = table.rows.len() as u64;
        table.rows.clear();
        Ok(deleted)
    }
}
