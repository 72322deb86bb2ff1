use super::*;
use crate::draft::ImageUpload;
use crate::error::ApiErrorKind;
use crate::request::{HttpMethod, MockHttpClient, RequestBody};
use serde_json::json;

// =========================================================
// 辅助函数
// =========================================================

const BASE: &str = "http://api.test";

fn url(path: &str) -> String {
    format!("{}{}", BASE, path)
}

fn api(client: &MockHttpClient) -> MovieApi<&MockHttpClient> {
    MovieApi::new(client, ApiConfig::new(BASE))
}

fn full_draft() -> MovieDraft {
    MovieDraft {
        title: "Arrival".into(),
        description: "Linguist meets heptapods".into(),
        review: "Moving".into(),
        rating: Some(4),
        image: Some(ImageUpload {
            file_name: "arrival.jpg".into(),
            content_type: "image/jpeg".into(),
            bytes: vec![0xFF, 0xD8],
        }),
    }
}

// =========================================================
// 影片接口
// =========================================================

#[tokio::test]
async fn test_every_call_carries_credentials() {
    let client = MockHttpClient::new();
    let api = api(&client);

    let _ = api.list_movies().await;
    let _ = api.get_movie("1").await;
    let _ = api.create_movie(&full_draft()).await;
    let _ = api.update_movie("1", &full_draft()).await;
    let _ = api.delete_movie("1").await;
    let _ = api.login("a@b.c", "pw").await;
    let _ = api.logout().await;
    let _ = api.register("n", "a@b.c", "pw").await;
    let _ = api.probe_session().await;

    let requests = client.requests.borrow();
    assert_eq!(requests.len(), 9);
    assert!(requests.iter().all(|r| r.credentials));
}

#[tokio::test]
async fn test_list_movies_decodes_array() {
    let client = MockHttpClient::new();
    client.mock_response(
        HttpMethod::Get,
        &url("/api/movies"),
        200,
        json!([
            { "_id": "1", "title": "Alien", "description": "d", "rating": 5 },
            { "_id": "2", "title": "Heat", "description": "d" }
        ]),
    );

    let movies = api(&client).list_movies().await.unwrap();
    assert_eq!(movies.len(), 2);
    assert_eq!(movies[1].rating, None);
}

#[tokio::test]
async fn test_get_movie_not_found() {
    let client = MockHttpClient::new();
    client.mock_response(
        HttpMethod::Get,
        &url("/api/movies/404"),
        404,
        json!({ "message": "Movie not found" }),
    );

    let err = api(&client).get_movie("404").await.unwrap_err();
    assert_eq!(err.kind, ApiErrorKind::NotFound);
    assert_eq!(err.server_message(), Some("Movie not found"));
    assert_eq!(err.spans()[0].operation, "movies.get");
}

#[tokio::test]
async fn test_create_movie_sends_five_fields() {
    let client = MockHttpClient::new();
    client.mock_response(
        HttpMethod::Post,
        &url("/api/movies"),
        201,
        json!({ "_id": "9", "title": "Arrival", "description": "Linguist meets heptapods" }),
    );

    let created = api(&client).create_movie(&full_draft()).await.unwrap();
    assert_eq!(created.map(|m| m.id), Some("9".to_string()));

    let req = client.last_request().unwrap();
    assert_eq!(req.method, HttpMethod::Post);
    let RequestBody::Multipart(form) = req.body else {
        panic!("expected multipart body");
    };
    assert_eq!(
        form.field_names(),
        vec!["title", "description", "review", "rating", "image"]
    );
    assert_eq!(form.text_value("rating"), Some("4"));
}

#[tokio::test]
async fn test_create_movie_requires_title_and_description() {
    let client = MockHttpClient::new();
    let draft = MovieDraft {
        title: "   ".into(),
        ..full_draft()
    };

    let err = api(&client).create_movie(&draft).await.unwrap_err();
    assert_eq!(err.kind, ApiErrorKind::InvalidInput);
    assert_eq!(client.request_count(), 0);

    let draft = MovieDraft {
        description: String::new(),
        ..full_draft()
    };
    assert!(api(&client).update_movie("1", &draft).await.is_err());
    assert_eq!(client.request_count(), 0);
}

#[tokio::test]
async fn test_update_movie_tolerates_non_record_body() {
    let client = MockHttpClient::new();
    client.mock_response(
        HttpMethod::Put,
        &url("/api/movies/3"),
        200,
        json!({ "message": "Movie updated" }),
    );

    let updated = api(&client).update_movie("3", &full_draft()).await.unwrap();
    assert!(updated.is_none());
}

#[tokio::test]
async fn test_delete_forbidden() {
    let client = MockHttpClient::new();
    client.mock_raw(HttpMethod::Delete, &url("/api/movies/3"), 403, "");

    let err = api(&client).delete_movie("3").await.unwrap_err();
    assert!(err.is_forbidden());
    assert_eq!(err.status, Some(403));
}

#[tokio::test]
async fn test_network_error_kind() {
    let client = MockHttpClient::new();
    client.mock_network_error(HttpMethod::Get, &url("/api/movies"));

    let err = api(&client).list_movies().await.unwrap_err();
    assert_eq!(err.kind, ApiErrorKind::Network);
    assert_eq!(err.status, None);
}

// =========================================================
// 认证接口
// =========================================================

#[tokio::test]
async fn test_login_posts_json_credentials() {
    let client = MockHttpClient::new();
    client.mock_response(
        HttpMethod::Post,
        &url("/api/login"),
        200,
        json!({ "user": { "_id": "u1", "email": "a@b.c" } }),
    );

    let user = api(&client).login("a@b.c", "secret").await.unwrap();
    assert_eq!(user.and_then(|u| u.email), Some("a@b.c".to_string()));

    let req = client.last_request().unwrap();
    assert_eq!(req.headers.get("Content-Type").map(String::as_str), Some("application/json"));
    let RequestBody::Json(body) = req.body else {
        panic!("expected json body");
    };
    let body: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(body, json!({ "email": "a@b.c", "password": "secret" }));
}

#[tokio::test]
async fn test_login_success_without_user() {
    let client = MockHttpClient::new();
    client.mock_raw(HttpMethod::Post, &url("/api/login"), 200, "");

    assert_eq!(api(&client).login("a@b.c", "pw").await.unwrap(), None);
}

#[tokio::test]
async fn test_probe_session_shapes() {
    let client = MockHttpClient::new();
    let api = api(&client);

    client.mock_raw(HttpMethod::Get, &url("/api/user"), 200, "");
    assert_eq!(api.probe_session().await.unwrap(), None);

    client.mock_raw(HttpMethod::Get, &url("/api/user"), 200, "null");
    assert_eq!(api.probe_session().await.unwrap(), None);

    client.mock_response(
        HttpMethod::Get,
        &url("/api/user"),
        200,
        json!({ "_id": "u1", "name": "Ripley" }),
    );
    let user = api.probe_session().await.unwrap().unwrap();
    assert_eq!(user.id.as_deref(), Some("u1"));

    client.mock_response(HttpMethod::Get, &url("/api/user"), 401, json!({}));
    assert_eq!(
        api.probe_session().await.unwrap_err().kind,
        ApiErrorKind::Unauthorized
    );
}

#[tokio::test]
async fn test_register_returns_server_message() {
    let client = MockHttpClient::new();
    client.mock_response(
        HttpMethod::Post,
        &url("/api/register"),
        201,
        json!({ "message": "User registered successfully" }),
    );

    let msg = api(&client).register("Ellen", "e@w.y", "pw").await.unwrap();
    assert_eq!(msg.as_deref(), Some("User registered successfully"));
}

#[test]
fn test_oauth_url() {
    let client = MockHttpClient::new();
    assert_eq!(api(&client).oauth_url(), "http://api.test/auth/google");
}
