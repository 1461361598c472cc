//! Route definitions
//!
//! Paths follow the public reading site: `/book/{id}`, `/chapter/{id}`,
//! `/reaction/{kind}/{id}` and `/comment/...`.

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{books, chapters, comments, health, reactions, users};
use crate::state::AppState;

/// Create the main API router (health routes are mounted separately)
pub fn create_router() -> Router<AppState> {
    Router::new()
        .merge(book_routes())
        .merge(chapter_routes())
        .merge(reaction_routes())
        .merge(comment_routes())
        .merge(user_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

fn book_routes() -> Router<AppState> {
    Router::new()
        .route("/books", get(books::list_books).post(books::create_book))
        .route("/book/:book_id", get(books::get_book))
        .route("/book/:book_id/data", get(books::get_book_data))
        .route("/book/:book_id/chapters", post(books::create_chapter))
}

fn chapter_routes() -> Router<AppState> {
    Router::new().route("/chapter/:chapter_id", get(chapters::read_chapter))
}

fn reaction_routes() -> Router<AppState> {
    Router::new().route(
        "/reaction/:target_kind/:target_id",
        post(reactions::set_reaction),
    )
}

/// `/comment/{kind}/{id}` posts; `/comment/{id}/like|dislike` counts.
/// The first segment shares one parameter name; static segments win.
fn comment_routes() -> Router<AppState> {
    Router::new()
        .route("/comment/:subject/:target_id", post(comments::post_comment))
        .route("/comment/:subject/like", post(comments::like_comment))
        .route("/comment/:subject/dislike", post(comments::dislike_comment))
}

fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users/@me/books", get(users::get_dashboard))
        .route("/users/:user_id", get(users::get_user))
}
