//! Application state - shared across all handlers.

use std::sync::Arc;

use bloglist_core::ports::{PasswordService, PostRepository, TokenService, UserRepository};
use bloglist_core::services::{AuthService, BlogService, UserService};
use bloglist_infra::{
    Argon2PasswordService, InMemoryPostRepository, InMemoryUserRepository, JwtTokenService,
};

#[cfg(feature = "postgres")]
use bloglist_infra::{DatabaseConnections, PostgresPostRepository, PostgresUserRepository};

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub blogs: Arc<BlogService>,
    pub users: Arc<UserService>,
    pub auth: Arc<AuthService>,
    pub tokens: Arc<dyn TokenService>,
    pub testing_routes: bool,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(config: &AppConfig) -> Self {
        let (posts, users) = Self::repositories(config).await;
        let tokens: Arc<dyn TokenService> = Arc::new(JwtTokenService::new(config.jwt.clone()));
        let passwords: Arc<dyn PasswordService> = Arc::new(Argon2PasswordService::new());

        tracing::info!(
            testing_routes = config.testing_routes,
            "Application state initialized"
        );

        Self::from_parts(posts, users, passwords, tokens, config.testing_routes)
    }

    /// Wire services from already constructed adapters.
    pub fn from_parts(
        posts: Arc<dyn PostRepository>,
        users: Arc<dyn UserRepository>,
        passwords: Arc<dyn PasswordService>,
        tokens: Arc<dyn TokenService>,
        testing_routes: bool,
    ) -> Self {
        Self {
            blogs: Arc::new(BlogService::new(posts.clone(), users.clone())),
            users: Arc::new(UserService::new(
                users.clone(),
                posts,
                passwords.clone(),
            )),
            auth: Arc::new(AuthService::new(users, passwords, tokens.clone())),
            tokens,
            testing_routes,
        }
    }

    /// State backed by in-memory repositories.
    pub fn in_memory(tokens: Arc<dyn TokenService>, testing_routes: bool) -> Self {
        Self::from_parts(
            Arc::new(InMemoryPostRepository::new()),
            Arc::new(InMemoryUserRepository::new()),
            Arc::new(Argon2PasswordService::new()),
            tokens,
            testing_routes,
        )
    }

    #[cfg(feature = "postgres")]
    async fn repositories(config: &AppConfig) -> (Arc<dyn PostRepository>, Arc<dyn UserRepository>) {
        let Some(db_config) = config.database.as_ref() else {
            tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
            return Self::in_memory_repositories();
        };

        match DatabaseConnections::init(db_config).await {
            Ok(connections) => (
                Arc::new(PostgresPostRepository::new(connections.main.clone())),
                Arc::new(PostgresUserRepository::new(connections.main)),
            ),
            Err(e) => {
                tracing::error!(
                    "Failed to connect to database: {}. Using in-memory fallback.",
                    e
                );
                Self::in_memory_repositories()
            }
        }
    }

    #[cfg(not(feature = "postgres"))]
    async fn repositories(_config: &AppConfig) -> (Arc<dyn PostRepository>, Arc<dyn UserRepository>) {
        tracing::info!("Running without postgres feature - using in-memory repositories");
        Self::in_memory_repositories()
    }

    fn in_memory_repositories() -> (Arc<dyn PostRepository>, Arc<dyn UserRepository>) {
        (
            Arc::new(InMemoryPostRepository::new()),
            Arc::new(InMemoryUserRepository::new()),
        )
    }
}
