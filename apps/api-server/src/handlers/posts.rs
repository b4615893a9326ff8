//! Blog post handlers.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use bloglist_core::domain::{BlogStatistics, Post, PostDraft, User};
use bloglist_shared::dto::{
    AuthorLikesResponse, AuthorPostsResponse, FavoritePostResponse, OwnerSummary, PostRequest,
    PostResponse, StatsResponse,
};

use crate::middleware::auth::Identity;
use crate::middleware::error::AppResult;
use crate::state::AppState;

fn draft_from(req: PostRequest) -> PostDraft {
    PostDraft {
        title: req.title,
        author: req.author,
        url: req.url,
        likes: req.likes,
    }
}

fn owner_summary(user: &User) -> OwnerSummary {
    OwnerSummary {
        id: user.id,
        username: user.username.clone(),
        name: user.name.clone(),
    }
}

fn post_response(post: Post, owner: Option<&User>) -> PostResponse {
    PostResponse {
        id: post.id,
        title: post.title,
        author: post.author,
        url: post.url,
        likes: post.likes,
        user: owner.map(owner_summary),
    }
}

fn stats_response(stats: BlogStatistics) -> StatsResponse {
    StatsResponse {
        total_likes: stats.total_likes,
        favorite: stats.favorite.map(|f| FavoritePostResponse {
            title: f.title,
            author: f.author,
            likes: f.likes,
        }),
        most_posts: stats.most_posts.map(|a| AuthorPostsResponse {
            author: a.author,
            blogs: a.posts as u64,
        }),
        most_likes: stats.most_likes.map(|a| AuthorLikesResponse {
            author: a.author,
            likes: a.likes,
        }),
    }
}

/// GET /api/posts
pub async fn list(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts: Vec<PostResponse> = state
        .blogs
        .list_posts_with_owners()
        .await?
        .into_iter()
        .map(|(post, owner)| post_response(post, owner.as_ref()))
        .collect();

    Ok(HttpResponse::Ok().json(posts))
}

/// GET /api/posts/{id}
pub async fn get(state: web::Data<AppState>, path: web::Path<Uuid>) -> AppResult<HttpResponse> {
    let post = state.blogs.get_post(path.into_inner()).await?;
    let owner = state.blogs.owner_of(&post).await?;

    Ok(HttpResponse::Ok().json(post_response(post, owner.as_ref())))
}

/// POST /api/posts - requires a bearer token
pub async fn create(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<PostRequest>,
) -> AppResult<HttpResponse> {
    let post = state
        .blogs
        .create_post(identity.user_id, draft_from(body.into_inner()))
        .await?;
    let owner = state.blogs.owner_of(&post).await?;

    Ok(HttpResponse::Created().json(post_response(post, owner.as_ref())))
}

/// PUT /api/posts/{id}
pub async fn update(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<PostRequest>,
) -> AppResult<HttpResponse> {
    let post = state
        .blogs
        .update_post(path.into_inner(), draft_from(body.into_inner()))
        .await?;
    let owner = state.blogs.owner_of(&post).await?;

    Ok(HttpResponse::Ok().json(post_response(post, owner.as_ref())))
}

/// DELETE /api/posts/{id} - only the owner may delete
pub async fn delete(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    state
        .blogs
        .delete_post(path.into_inner(), identity.user_id)
        .await?;

    Ok(HttpResponse::NoContent().finish())
}

/// GET /api/posts/stats
pub async fn stats(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let stats = state.blogs.statistics().await?;

    Ok(HttpResponse::Ok().json(stats_response(stats)))
}
