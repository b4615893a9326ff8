//! Authentication handlers.

use actix_web::{HttpResponse, web};

use bloglist_shared::dto::{AuthResponse, LoginRequest};

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// POST /api/login
pub async fn login(
    state: web::Data<AppState>,
    body: web::Json<LoginRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let session = state.auth.login(&req.username, &req.password).await?;

    Ok(HttpResponse::Ok().json(AuthResponse {
        access_token: session.token,
        token_type: "Bearer".to_string(),
        expires_in: session.expires_in.max(0) as u64,
        username: session.user.username,
        name: session.user.name,
    }))
}
