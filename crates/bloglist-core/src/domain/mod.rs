//! Domain entities - the core business objects.

mod post;
pub mod stats;
mod user;

use uuid::Uuid;

pub use post::{Post, PostContent, PostDraft};
pub use stats::{AuthorLikes, AuthorPosts, BlogStatistics, FavoritePost};
pub use user::{NewUser, Registration, User};

/// Entities stored by id in a repository.
pub trait Identifiable {
    fn id(&self) -> Uuid;
}

impl Identifiable for Post {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Identifiable for User {
    fn id(&self) -> Uuid {
        self.id
    }
}
