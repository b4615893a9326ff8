//! Routes for end-to-end test suites. Only registered when enabled in config.

use actix_web::{HttpResponse, web};

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// POST /api/testing/reset - wipes every post and user
pub async fn reset(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    state.blogs.reset().await?;

    Ok(HttpResponse::NoContent().finish())
}
