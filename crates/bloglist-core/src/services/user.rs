//! User registration and lookup.

use std::collections::HashMap;
use std::sync::Arc;

use uuid::Uuid;

use crate::domain::{Post, Registration, User};
use crate::error::{DomainError, RepoError};
use crate::ports::{PasswordService, PostRepository, UserRepository};

pub struct UserService {
    users: Arc<dyn UserRepository>,
    posts: Arc<dyn PostRepository>,
    passwords: Arc<dyn PasswordService>,
}

impl UserService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        posts: Arc<dyn PostRepository>,
        passwords: Arc<dyn PasswordService>,
    ) -> Self {
        Self {
            users,
            posts,
            passwords,
        }
    }

    /// Register a new user. The plaintext password is only used for hashing.
    pub async fn register(&self, registration: Registration) -> Result<User, DomainError> {
        let new_user = registration.validate()?;

        if self
            .users
            .find_by_username(&new_user.username)
            .await?
            .is_some()
        {
            return Err(username_taken(&new_user.username));
        }

        let password_hash = self.passwords.hash(&new_user.password)?;
        let username = new_user.username.clone();
        // The unique key catches a concurrent registration that passed the lookup.
        let user = self
            .users
            .save(User::new(new_user.username, new_user.name, password_hash))
            .await
            .map_err(|e| match e {
                RepoError::Constraint(_) => username_taken(&username),
                other => other.into(),
            })?;

        tracing::info!(user_id = %user.id, username = %user.username, "User registered");
        Ok(user)
    }

    /// Load a user with `blog_ids` filled from post ownership.
    pub async fn find_user(&self, id: Uuid) -> Result<User, DomainError> {
        let mut user = self
            .users
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::user_not_found(id))?;

        user.blog_ids = self
            .posts
            .find_by_owner(id)
            .await?
            .into_iter()
            .map(|p| p.id)
            .collect();

        Ok(user)
    }

    /// Every user with the posts they own.
    pub async fn list_users_with_posts(&self) -> Result<Vec<(User, Vec<Post>)>, DomainError> {
        let users = self.users.find_all().await?;

        let mut by_owner: HashMap<Uuid, Vec<Post>> = HashMap::new();
        for post in self.posts.find_all().await? {
            by_owner.entry(post.owner_id).or_default().push(post);
        }

        Ok(users
            .into_iter()
            .map(|mut user| {
                let posts = by_owner.remove(&user.id).unwrap_or_default();
                user.blog_ids = posts.iter().map(|p| p.id).collect();
                (user, posts)
            })
            .collect())
    }
}

fn username_taken(username: &str) -> DomainError {
    DomainError::Duplicate(format!("username '{}' is already taken", username))
}
