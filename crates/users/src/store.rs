use crate::{NewUser, User, UserError, UserPatch};
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Debug, Default)]
struct Inner {
    users: BTreeMap<u64, User>,
    next_id: u64,
}

impl Inner {
    fn email_taken(&self, email: &str, except: Option<u64>) -> bool {
        self.users
            .values()
            .any(|u| Some(u.id) != except && u.email.eq_ignore_ascii_case(email))
    }
}

/// In-memory user list ordered by id.
///
/// Cloning shares the same underlying map.
#[derive(Debug, Clone, Default)]
pub struct UserStore {
    inner: Arc<RwLock<Inner>>,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with the two demo users.
    pub fn seeded() -> Self {
        let mut inner = Inner {
            users: BTreeMap::new(),
            next_id: 1,
        };
        for (name, email) in [
            ("John Doe", "john@example.com"),
            ("Jane Smith", "jane@example.com"),
        ] {
            let id = inner.next_id;
            inner.users.insert(
                id,
                User {
                    id,
                    name: name.to_string(),
                    email: email.to_string(),
                },
            );
            inner.next_id += 1;
        }
        Self {
            inner: Arc::new(RwLock::new(inner)),
        }
    }

    pub async fn list(&self) -> Vec<User> {
        self.inner.read().await.users.values().cloned().collect()
    }

    pub async fn get(&self, id: u64) -> Result<User, UserError> {
        self.inner
            .read()
            .await
            .users
            .get(&id)
            .cloned()
            .ok_or(UserError::NotFound(id))
    }

    pub async fn create(&self, new_user: NewUser) -> Result<User, UserError> {
        let name = required(new_user.name);
        let email = required(new_user.email);
        let (Some(name), Some(email)) = (name, email) else {
            return Err(UserError::Validation(
                "Name and email are required".to_string(),
            ));
        };

        let mut inner = self.inner.write().await;
        if inner.email_taken(&email, None) {
            return Err(UserError::Conflict(email));
        }

        // ids start at 1 even for an unseeded store
        let id = inner.next_id.max(1);
        inner.next_id = id + 1;
        let user = User { id, name, email };
        inner.users.insert(id, user.clone());
        tracing::info!("Created user {}", id);
        Ok(user)
    }

    pub async fn update(&self, id: u64, patch: UserPatch) -> Result<User, UserError> {
        let name = patch.name.map(|s| s.trim().to_string());
        let email = patch.email.map(|s| s.trim().to_string());
        if name.as_deref() == Some("") || email.as_deref() == Some("") {
            return Err(UserError::Validation(
                "Name and email must not be empty".to_string(),
            ));
        }

        let mut inner = self.inner.write().await;
        if !inner.users.contains_key(&id) {
            return Err(UserError::NotFound(id));
        }
        if let Some(email) = email.as_deref() {
            if inner.email_taken(email, Some(id)) {
                return Err(UserError::Conflict(email.to_string()));
            }
        }

        let user = inner.users.get_mut(&id).ok_or(UserError::NotFound(id))?;
        if let Some(name) = name {
            user.name = name;
        }
        if let Some(email) = email {
            user.email = email;
        }
        Ok(user.clone())
    }

    pub async fn delete(&self, id: u64) -> Result<User, UserError> {
        let removed = self.inner.write().await.users.remove(&id);
        match removed {
            Some(user) => {
                tracing::info!("Deleted user {}", id);
                Ok(user)
            }
            None => Err(UserError::NotFound(id)),
        }
    }
}

fn required(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
