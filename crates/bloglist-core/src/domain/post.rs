use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Post entity - a blog entry linked to the user that submitted it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub title: String,
    pub author: Option<String>,
    pub url: String,
    pub likes: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Create a new post owned by `owner_id`.
    pub fn new(owner_id: Uuid, content: PostContent) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            owner_id,
            title: content.title,
            author: content.author,
            url: content.url,
            likes: content.likes,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace every content field. Identity and ownership are kept.
    pub fn replace_content(&mut self, content: PostContent) {
        self.title = content.title;
        self.author = content.author;
        self.url = content.url;
        self.likes = content.likes;
        self.updated_at = Utc::now();
    }

    pub fn is_owned_by(&self, user_id: Uuid) -> bool {
        self.owner_id == user_id
    }

    /// Ownership guard for destructive operations.
    pub fn ensure_owned_by(&self, user_id: Uuid) -> Result<(), DomainError> {
        if self.is_owned_by(user_id) {
            Ok(())
        } else {
            Err(DomainError::Forbidden(format!(
                "post {} is owned by another user",
                self.id
            )))
        }
    }
}

/// Post fields as submitted by a client, not yet validated.
#[derive(Debug, Clone, Default)]
pub struct PostDraft {
    pub title: Option<String>,
    pub author: Option<String>,
    pub url: Option<String>,
    pub likes: Option<i64>,
}

/// Post fields that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostContent {
    pub title: String,
    pub author: Option<String>,
    pub url: String,
    pub likes: i64,
}

impl PostDraft {
    /// Check the required fields and apply defaults.
    ///
    /// `title` and `url` must be non-blank, `likes` defaults to zero and may
    /// not be negative. A blank author is stored as no author.
    pub fn validate(self) -> Result<PostContent, DomainError> {
        let (Some(title), Some(url)) = (non_blank(self.title), non_blank(self.url)) else {
            return Err(DomainError::Validation("title or url missing".to_string()));
        };

        let likes = self.likes.unwrap_or(0);
        if likes < 0 {
            return Err(DomainError::Validation(
                "likes must not be negative".to_string(),
            ));
        }

        Ok(PostContent {
            title,
            author: non_blank(self.author),
            url,
            likes,
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> PostDraft {
        PostDraft {
            title: Some("Canonical string reduction".to_string()),
            author: Some("Edsger W. Dijkstra".to_string()),
            url: Some("http://www.cs.utexas.edu/~EWD/transcriptions/EWD08xx/EWD808.html".to_string()),
            likes: Some(12),
        }
    }

    #[test]
    fn test_validate_keeps_fields() {
        let content = draft().validate().unwrap();

        assert_eq!(content.title, "Canonical string reduction");
        assert_eq!(content.author.as_deref(), Some("Edsger W. Dijkstra"));
        assert_eq!(content.likes, 12);
    }

    #[test]
    fn test_missing_likes_defaults_to_zero() {
        let content = PostDraft {
            likes: None,
            ..draft()
        }
        .validate()
        .unwrap();

        assert_eq!(content.likes, 0);
    }

    #[test]
    fn test_missing_title_or_url_is_rejected() {
        let no_title = PostDraft {
            title: None,
            ..draft()
        };
        let blank_url = PostDraft {
            url: Some("   ".to_string()),
            ..draft()
        };

        assert!(matches!(no_title.validate(), Err(DomainError::Validation(_))));
        assert!(matches!(blank_url.validate(), Err(DomainError::Validation(_))));
    }

    #[test]
    fn test_negative_likes_are_rejected() {
        let result = PostDraft {
            likes: Some(-1),
            ..draft()
        }
        .validate();

        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[test]
    fn test_ownership_guard() {
        let owner = Uuid::new_v4();
        let post = Post::new(owner, draft().validate().unwrap());

        assert!(post.ensure_owned_by(owner).is_ok());
        assert!(matches!(
            post.ensure_owned_by(Uuid::new_v4()),
            Err(DomainError::Forbidden(_))
        ));
    }

    #[test]
    fn test_replace_content_keeps_identity() {
        let owner = Uuid::new_v4();
        let mut post = Post::new(owner, draft().validate().unwrap());
        let id = post.id;

        post.replace_content(PostContent {
            title: "Go To Statement Considered Harmful".to_string(),
            author: None,
            url: "https://homepages.cwi.nl/~storm/teaching/reader/Dijkstra68.pdf".to_string(),
            likes: 5,
        });

        assert_eq!(post.id, id);
        assert_eq!(post.owner_id, owner);
        assert_eq!(post.author, None);
        assert_eq!(post.likes, 5);
    }
}
