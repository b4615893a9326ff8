//! Post use cases, including the ownership guard on deletion.

use std::collections::HashMap;
use std::sync::Arc;

use uuid::Uuid;

use crate::domain::{BlogStatistics, Post, PostDraft, User};
use crate::error::DomainError;
use crate::ports::{PostRepository, UserRepository};

pub struct BlogService {
    posts: Arc<dyn PostRepository>,
    users: Arc<dyn UserRepository>,
}

impl BlogService {
    pub fn new(posts: Arc<dyn PostRepository>, users: Arc<dyn UserRepository>) -> Self {
        Self { posts, users }
    }

    pub async fn list_posts(&self) -> Result<Vec<Post>, DomainError> {
        Ok(self.posts.find_all().await?)
    }

    /// Every post paired with its owner, if the owner still exists.
    pub async fn list_posts_with_owners(&self) -> Result<Vec<(Post, Option<User>)>, DomainError> {
        let posts = self.posts.find_all().await?;
        let owners: HashMap<Uuid, User> = self
            .users
            .find_all()
            .await?
            .into_iter()
            .map(|u| (u.id, u))
            .collect();

        Ok(posts
            .into_iter()
            .map(|post| {
                let owner = owners.get(&post.owner_id).cloned();
                (post, owner)
            })
            .collect())
    }

    pub async fn get_post(&self, id: Uuid) -> Result<Post, DomainError> {
        self.posts
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::post_not_found(id))
    }

    /// The owner of `post`, or `None` if that user no longer exists.
    pub async fn owner_of(&self, post: &Post) -> Result<Option<User>, DomainError> {
        Ok(self.users.find_by_id(post.owner_id).await?)
    }

    /// Create a post owned by `owner_id`.
    ///
    /// The owner is resolved from a token, so a missing owner means the
    /// token refers to a user that no longer exists.
    pub async fn create_post(&self, owner_id: Uuid, draft: PostDraft) -> Result<Post, DomainError> {
        let content = draft.validate()?;

        let owner = self
            .users
            .find_by_id(owner_id)
            .await?
            .ok_or(DomainError::Unauthorized)?;

        let post = self.posts.save(Post::new(owner.id, content)).await?;
        tracing::info!(post_id = %post.id, owner_id = %owner.id, "Post created");

        Ok(post)
    }

    /// Replace the content of a post. Any caller may update any post.
    pub async fn update_post(&self, id: Uuid, draft: PostDraft) -> Result<Post, DomainError> {
        let content = draft.validate()?;
        let mut post = self.get_post(id).await?;

        post.replace_content(content);
        let post = self.posts.save(post).await?;
        tracing::debug!(post_id = %post.id, likes = post.likes, "Post updated");

        Ok(post)
    }

    /// Delete a post on behalf of `caller_id`, who must own it.
    ///
    /// Like creation, a caller that no longer exists is unauthorized.
    pub async fn delete_post(&self, id: Uuid, caller_id: Uuid) -> Result<(), DomainError> {
        self.users
            .find_by_id(caller_id)
            .await?
            .ok_or(DomainError::Unauthorized)?;

        let post = self.get_post(id).await?;

        if let Err(e) = post.ensure_owned_by(caller_id) {
            tracing::warn!(post_id = %id, caller_id = %caller_id, "Refused to delete post of another user");
            return Err(e);
        }

        self.posts.delete(post.id).await?;
        tracing::info!(post_id = %id, owner_id = %caller_id, "Post deleted");

        Ok(())
    }

    pub async fn statistics(&self) -> Result<BlogStatistics, DomainError> {
        let posts = self.posts.find_all().await?;
        Ok(BlogStatistics::from_posts(&posts))
    }

    /// Remove every post and user. Only wired up for end-to-end test runs.
    pub async fn reset(&self) -> Result<(), DomainError> {
        self.posts.delete_all().await?;
        self.users.delete_all().await?;
        tracing::warn!("All posts and users deleted");
        Ok(())
    }
}
