//! In-memory repositories - used when no database is configured.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use bloglist_core::domain::{Identifiable, Post, User};
use bloglist_core::error::RepoError;
use bloglist_core::ports::{BaseRepository, PostRepository, UserRepository};

/// In-memory repository keeping entities in insertion order behind an async
/// RwLock.
///
/// Note: Data is lost on process restart.
pub struct InMemoryRepository<T> {
    store: RwLock<Vec<T>>,
}

/// In-memory post repository.
pub type InMemoryPostRepository = InMemoryRepository<Post>;

/// In-memory user repository.
pub type InMemoryUserRepository = InMemoryRepository<User>;

/// Entities the in-memory store can hold. `conflicts_with` mirrors the
/// unique keys of the database schema and is checked under the write lock.
pub trait InMemoryEntity: Identifiable + Clone + Send + Sync + 'static {
    fn conflicts_with(&self, _other: &Self) -> bool {
        false
    }
}

impl InMemoryEntity for Post {}

impl InMemoryEntity for User {
    fn conflicts_with(&self, other: &Self) -> bool {
        self.username == other.username
    }
}

impl<T> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(Vec::new()),
        }
    }
}

impl<T> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T> BaseRepository<T, Uuid> for InMemoryRepository<T>
where
    T: InMemoryEntity,
{
    async fn find_all(&self) -> Result<Vec<T>, RepoError> {
        Ok(self.store.read().await.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<T>, RepoError> {
        let store = self.store.read().await;
        Ok(store.iter().find(|e| e.id() == id).cloned())
    }

    async fn save(&self, entity: T) -> Result<T, RepoError> {
        let mut store = self.store.write().await;

        if store
            .iter()
            .any(|e| e.id() != entity.id() && entity.conflicts_with(e))
        {
            return Err(RepoError::Constraint(
                "unique key already exists".to_string(),
            ));
        }

        match store.iter_mut().find(|e| e.id() == entity.id()) {
            Some(existing) => *existing = entity.clone(),
            None => store.push(entity.clone()),
        }

        Ok(entity)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let mut store = self.store.write().await;
        let position = store
            .iter()
            .position(|e| e.id() == id)
            .ok_or(RepoError::NotFound)?;

        store.remove(position);
        Ok(())
    }

    async fn delete_all(&self) -> Result<(), RepoError> {
        self.store.write().await.clear();
        Ok(())
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepoError> {
        let store = self.store.read().await;
        Ok(store.iter().find(|u| u.username == username).cloned())
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn find_by_owner(&self, owner_id: Uuid) -> Result<Vec<Post>, RepoError> {
        let store = self.store.read().await;
        Ok(store
            .iter()
            .filter(|p| p.owner_id == owner_id)
            .cloned()
            .collect())
    }
}
