//! User handlers.

use actix_web::{HttpResponse, web};

use bloglist_core::domain::{Post, Registration, User};
use bloglist_shared::dto::{PostSummary, RegisterUserRequest, UserResponse};

use crate::middleware::error::AppResult;
use crate::state::AppState;

fn user_response(user: User, posts: Vec<Post>) -> UserResponse {
    UserResponse {
        id: user.id,
        username: user.username,
        name: user.name,
        blogs: posts
            .into_iter()
            .map(|post| PostSummary {
                id: post.id,
                title: post.title,
                author: post.author,
                url: post.url,
            })
            .collect(),
    }
}

/// GET /api/users
pub async fn list(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let users: Vec<UserResponse> = state
        .users
        .list_users_with_posts()
        .await?
        .into_iter()
        .map(|(user, posts)| user_response(user, posts))
        .collect();

    Ok(HttpResponse::Ok().json(users))
}

/// POST /api/users
pub async fn register(
    state: web::Data<AppState>,
    body: web::Json<RegisterUserRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let user = state
        .users
        .register(Registration {
            username: req.username,
            name: req.name,
            password: req.password,
        })
        .await?;

    Ok(HttpResponse::Created().json(user_response(user, Vec::new())))
}
