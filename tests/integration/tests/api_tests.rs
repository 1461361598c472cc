//! API Integration Tests
//!
//! Each test spawns its own server on an ephemeral port with in-memory
//! storage, so no external services are needed.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_json, assert_status, fixtures::*, test_config, TestServer,
};
use reqwest::StatusCode;
use serde_json::Value;

async fn create_book(server: &TestServer, author: &TestUser) -> Value {
    let response = server
        .post_auth("/books", &author.token, &CreateBookRequest::unique())
        .await
        .unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

async fn create_chapter(server: &TestServer, author: &TestUser, book_id: &str, title: &str) -> Value {
    let response = server
        .post_auth(
            &format!("/book/{book_id}/chapters"),
            &author.token,
            &CreateChapterRequest::new(title),
        )
        .await
        .unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

fn id(value: &Value) -> String {
    value["id"].as_str().unwrap().to_string()
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["checks"]["storage"], "healthy");
}

// ============================================================================
// Reaction Tests
// ============================================================================

#[tokio::test]
async fn test_unauthenticated_reaction_is_rejected() {
    let server = TestServer::start().await.unwrap();
    let author = seed_user(&server, "author").await.unwrap();
    let book_id = id(&create_book(&server, &author).await);

    let response = server
        .post(&format!("/reaction/book/{book_id}"), &ReactionRequest::like())
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(body["error"]["code"], "MISSING_AUTHORIZATION");

    let response = server
        .post_auth(
            &format!("/reaction/book/{book_id}"),
            "not-a-token",
            &ReactionRequest::like(),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    let page: Value = assert_json(server.get(&format!("/book/{book_id}")).await.unwrap(), StatusCode::OK)
        .await
        .unwrap();
    assert_eq!(page["reactions"]["likes"], 0);
    assert_eq!(page["reactions"]["dislikes"], 0);
}

#[tokio::test]
async fn test_reaction_flip_keeps_one_row() {
    let server = TestServer::start().await.unwrap();
    let author = seed_user(&server, "author").await.unwrap();
    let reader = seed_user(&server, "reader").await.unwrap();
    let book_id = id(&create_book(&server, &author).await);
    let chapter_id = id(&create_chapter(&server, &author, &book_id, "One").await);
    let path = format!("/reaction/chapter/{chapter_id}");

    let response = server
        .post_auth(&path, &reader.token, &ReactionRequest::like())
        .await
        .unwrap();
    let state: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(state["kind"], "like");
    assert_eq!(state["summary"]["likes"], 1);

    let response = server
        .post_auth(&path, &reader.token, &ReactionRequest::dislike())
        .await
        .unwrap();
    let state: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(state["kind"], "dislike");
    assert_eq!(state["summary"]["likes"], 0);
    assert_eq!(state["summary"]["dislikes"], 1);
    assert_eq!(state["summary"]["dislike_users"][0]["username"], reader.username.as_str());

    // Same kind again changes nothing
    let response = server
        .post_auth(&path, &reader.token, &ReactionRequest::dislike())
        .await
        .unwrap();
    let state: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(state["summary"]["dislikes"], 1);
}

#[tokio::test]
async fn test_reaction_counts_across_users() {
    let server = TestServer::start().await.unwrap();
    let author = seed_user(&server, "author").await.unwrap();
    let book_id = id(&create_book(&server, &author).await);
    let path = format!("/reaction/book/{book_id}");

    for i in 0..5 {
        let user = seed_user(&server, "reader").await.unwrap();
        let body = if i < 3 { ReactionRequest::like() } else { ReactionRequest::dislike() };
        let response = server.post_auth(&path, &user.token, &body).await.unwrap();
        assert_status(response, StatusCode::OK).await.unwrap();
    }

    let page: Value = assert_json(server.get(&format!("/book/{book_id}")).await.unwrap(), StatusCode::OK)
        .await
        .unwrap();
    assert_eq!(page["reactions"]["likes"], 3);
    assert_eq!(page["reactions"]["dislikes"], 2);
    assert_eq!(page["reactions"]["like_users"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_invalid_reaction_inputs() {
    let server = TestServer::start().await.unwrap();
    let author = seed_user(&server, "author").await.unwrap();
    let book_id = id(&create_book(&server, &author).await);

    let response = server
        .post_auth(&format!("/reaction/page/{book_id}"), &author.token, &ReactionRequest::like())
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body["error"]["code"], "INVALID_PATH_PARAMETER");

    let response = server
        .post_auth(
            &format!("/reaction/book/{book_id}"),
            &author.token,
            &serde_json::json!({"kind": "love"}),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    let response = server
        .post_auth("/reaction/chapter/123", &author.token, &ReactionRequest::like())
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(body["error"]["code"], "UNKNOWN_CHAPTER");
}

// ============================================================================
// Comment Tests
// ============================================================================

#[tokio::test]
async fn test_comment_thread_and_tallies() {
    let server = TestServer::start().await.unwrap();
    let author = seed_user(&server, "author").await.unwrap();
    let reader = seed_user(&server, "reader").await.unwrap();
    let book_id = id(&create_book(&server, &author).await);
    let chapter_id = id(&create_chapter(&server, &author, &book_id, "One").await);
    let path = format!("/comment/chapter/{chapter_id}");

    let response = server
        .post_auth(&path, &reader.token, &CommentRequest::new("first"))
        .await
        .unwrap();
    let first: Value = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(first["likes"], 0);
    assert_eq!(first["username"], reader.username.as_str());

    let response = server
        .post_auth(&path, &author.token, &CommentRequest::new("second"))
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    // Tallies take no credentials and have no per-caller limit
    let comment_id = id(&first);
    for _ in 0..2 {
        let response = server
            .post_empty(&format!("/comment/{comment_id}/like"))
            .await
            .unwrap();
        assert_status(response, StatusCode::OK).await.unwrap();
    }
    let response = server
        .post_empty(&format!("/comment/{comment_id}/dislike"))
        .await
        .unwrap();
    let tally: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(tally["likes"], 2);
    assert_eq!(tally["dislikes"], 1);

    let view: Value = assert_json(
        server.get(&format!("/chapter/{chapter_id}")).await.unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    let comments = view["comments"].as_array().unwrap();
    assert_eq!(comments.len(), 2);
    assert_eq!(comments[0]["content"], "first");
    assert_eq!(comments[0]["likes"], 2);
    assert_eq!(comments[1]["content"], "second");
}

#[tokio::test]
async fn test_comment_rejections() {
    let server = TestServer::start().await.unwrap();
    let author = seed_user(&server, "author").await.unwrap();
    let book_id = id(&create_book(&server, &author).await);

    let response = server
        .post(&format!("/comment/book/{book_id}"), &CommentRequest::new("anon"))
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    let response = server
        .post_auth(&format!("/comment/book/{book_id}"), &author.token, &CommentRequest::new(""))
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

    let response = server.post_empty("/comment/999/like").await.unwrap();
    let body: Value = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(body["error"]["code"], "UNKNOWN_COMMENT");
}

// ============================================================================
// Book & Chapter Tests
// ============================================================================

#[tokio::test]
async fn test_only_author_adds_chapters() {
    let server = TestServer::start().await.unwrap();
    let author = seed_user(&server, "author").await.unwrap();
    let stranger = seed_user(&server, "stranger").await.unwrap();
    let book_id = id(&create_book(&server, &author).await);

    let response = server
        .post_auth(
            &format!("/book/{book_id}/chapters"),
            &stranger.token,
            &CreateChapterRequest::new("Hijack"),
        )
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(body["error"]["code"], "NOT_BOOK_AUTHOR");

    let data: Value = assert_json(
        server.get(&format!("/book/{book_id}/data")).await.unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    assert!(data["chapters"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_chapter_navigation() {
    let server = TestServer::start().await.unwrap();
    let author = seed_user(&server, "author").await.unwrap();
    let book_id = id(&create_book(&server, &author).await);

    let mut ids = Vec::new();
    for title in ["One", "Two", "Three"] {
        ids.push(id(&create_chapter(&server, &author, &book_id, title).await));
    }

    let view: Value = assert_json(
        server.get(&format!("/chapter/{}", ids[0])).await.unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    assert!(view["previous"].is_null());
    assert_eq!(view["next"]["id"], ids[1].as_str());

    let view: Value = assert_json(
        server.get(&format!("/chapter/{}", ids[2])).await.unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    assert_eq!(view["previous"]["id"], ids[1].as_str());
    assert!(view["next"].is_null());
}

#[tokio::test]
async fn test_book_data_shape() {
    let server = TestServer::start().await.unwrap();
    let author = seed_user(&server, "author").await.unwrap();
    let response = server
        .post_auth(
            "/books",
            &author.token,
            &CreateBookRequest::unique().with_cover("/srv/bookworm/static/uploads/cover.png"),
        )
        .await
        .unwrap();
    let book: Value = assert_json(response, StatusCode::CREATED).await.unwrap();
    let book_id = id(&book);
    create_chapter(&server, &author, &book_id, "One").await;

    let data: Value = assert_json(
        server.get(&format!("/book/{book_id}/data")).await.unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();

    assert_eq!(data["id"], book_id.as_str());
    assert_eq!(data["cover_image"], "/static/uploads/cover.png");
    let chapter = &data["chapters"][0];
    assert_eq!(chapter["title"], "One");
    assert_eq!(chapter["content"], "One content");
    assert!(chapter.as_object().unwrap().contains_key("external_url"));
    assert!(chapter["external_url"].is_null());
}

#[tokio::test]
async fn test_book_data_with_reader_base() {
    let server = TestServer::start_with(&[("EXTERNAL_READER_BASE", "https://read.example/")])
        .await
        .unwrap();
    let author = seed_user(&server, "author").await.unwrap();
    let book_id = id(&create_book(&server, &author).await);
    let chapter_id = id(&create_chapter(&server, &author, &book_id, "One").await);

    let data: Value = assert_json(
        server.get(&format!("/book/{book_id}/data")).await.unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    assert_eq!(
        data["chapters"][0]["external_url"],
        format!("https://read.example/book/{book_id}/chapter/{chapter_id}").as_str()
    );
}

#[tokio::test]
async fn test_book_search_and_profiles() {
    let server = TestServer::start().await.unwrap();
    let author = seed_user(&server, "author").await.unwrap();
    let response = server
        .post_auth(
            "/books",
            &author.token,
            &CreateBookRequest {
                title: "The Left Hand of Darkness".to_string(),
                synopsis: "Winter".to_string(),
                cover_image: None,
            },
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();
    create_book(&server, &author).await;

    let hits: Value = assert_json(server.get("/books?q=left%20hand").await.unwrap(), StatusCode::OK)
        .await
        .unwrap();
    assert_eq!(hits.as_array().unwrap().len(), 1);
    assert_eq!(hits[0]["author_username"], author.username.as_str());

    let profile: Value = assert_json(
        server.get(&format!("/users/{}", author.id)).await.unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    assert_eq!(profile["books"].as_array().unwrap().len(), 2);

    let dashboard: Value = assert_json(
        server.get_auth("/users/@me/books", &author.token).await.unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    assert_eq!(dashboard["user"]["id"], author.id.to_string().as_str());

    let response = server.get("/users/@me/books").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_token_for_unknown_user_is_unauthorized() {
    let server = TestServer::start().await.unwrap();
    let token = server
        .context()
        .jwt_service()
        .issue_access_token(bookworm_core::Snowflake::new(42))
        .unwrap();

    let response = server
        .post_auth("/books", &token, &CreateBookRequest::unique())
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_malformed_token_reports_invalid_token() {
    let server = TestServer::start().await.unwrap();

    let response = server
        .post_auth("/books", "not-a-jwt", &CreateBookRequest::unique())
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(body["error"]["code"], "INVALID_TOKEN");
}

#[tokio::test]
async fn test_run_rejects_unparsable_listen_address() {
    let config = test_config(&[("API_HOST", "not a host")]).unwrap();

    let err = bookworm_api::run(config).await.unwrap_err();
    assert!(matches!(err, bookworm_common::AppError::Config(_)));
}
