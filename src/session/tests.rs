use super::*;
use crate::config::ApiConfig;
use crate::error::ApiResult;
use crate::request::{HttpMethod, HttpRequest, HttpResponse, MockHttpClient};
use crate::scope::ViewScope;
use futures::channel::oneshot;
use serde_json::json;
use std::rc::Rc;

const BASE: &str = "http://api.test";

fn url(path: &str) -> String {
    format!("{}{}", BASE, path)
}

fn store(client: &MockHttpClient) -> SessionStore<&MockHttpClient> {
    SessionStore::new(MovieApi::new(client, ApiConfig::new(BASE)))
}

fn mock_login_ok(client: &MockHttpClient) {
    client.mock_response(
        HttpMethod::Post,
        &url("/api/login"),
        200,
        json!({ "user": { "_id": "u1", "email": "ripley@nostromo.io" } }),
    );
}

// =========================================================
// initialize
// =========================================================

#[tokio::test]
async fn test_initialize_always_terminates() {
    let cases: Vec<Box<dyn Fn(&MockHttpClient)>> = vec![
        Box::new(|c: &MockHttpClient| c.mock_raw(HttpMethod::Get, &url("/api/user"), 200, "")),
        Box::new(|c: &MockHttpClient| c.mock_raw(HttpMethod::Get, &url("/api/user"), 200, "null")),
        Box::new(|c: &MockHttpClient| c.mock_raw(HttpMethod::Get, &url("/api/user"), 200, "{not json")),
        Box::new(|c: &MockHttpClient| c.mock_response(HttpMethod::Get, &url("/api/user"), 500, json!({}))),
        Box::new(|c: &MockHttpClient| c.mock_response(HttpMethod::Get, &url("/api/user"), 401, json!({}))),
        Box::new(|c: &MockHttpClient| c.mock_network_error(HttpMethod::Get, &url("/api/user"))),
    ];

    for setup in cases {
        let client = MockHttpClient::new();
        setup(&client);
        let store = store(&client);
        store.initialize().await;

        let state = store.state();
        assert!(!state.is_initializing());
        assert_eq!(state, SessionState::Anonymous);
    }
}

#[tokio::test]
async fn test_initialize_restores_user() {
    let client = MockHttpClient::new();
    client.mock_response(
        HttpMethod::Get,
        &url("/api/user"),
        200,
        json!({ "_id": "u1", "name": "Ellen" }),
    );
    let store = store(&client);
    store.initialize().await;

    assert_eq!(store.current_user().and_then(|u| u.name), Some("Ellen".into()));
}

#[tokio::test]
async fn test_initialize_accepts_any_user_shape() {
    let bodies = [
        json!({ "_id": "u1", "id": "u1", "name": "Ellen" }),
        json!({ "_id": { "$oid": "u1" }, "name": "Ellen" }),
        json!({ "name": "Ellen" }),
    ];

    for body in bodies {
        let client = MockHttpClient::new();
        client.mock_response(HttpMethod::Get, &url("/api/user"), 200, body.clone());
        let store = store(&client);
        store.initialize().await;

        assert!(store.state().is_authenticated(), "{}", body);
        assert_eq!(store.current_user().and_then(|u| u.name), Some("Ellen".into()));
    }
}

#[tokio::test]
async fn test_second_initialize_is_noop() {
    let client = MockHttpClient::new();
    client.mock_raw(HttpMethod::Get, &url("/api/user"), 200, "");
    let store = store(&client);

    store.initialize().await;
    store.initialize().await;
    assert_eq!(client.request_count(), 1);
}

// =========================================================
// login / logout
// =========================================================

#[tokio::test]
async fn test_login_truth_table() {
    // (status, body, expected)
    let cases = [
        (200, r#"{"user":{"_id":"u1"}}"#, true),
        (200, r#"{"user":{"_id":"u1","id":"u1"}}"#, true),
        (200, r#"{"user":{"_id":{"$oid":"u1"}}}"#, true),
        (200, r#"{"user":null}"#, false),
        (200, r#"{"message":"ok"}"#, false),
        (200, "", false),
        (401, r#"{"message":"Invalid credentials"}"#, false),
        (500, "", false),
    ];

    for (status, body, expected) in cases {
        let client = MockHttpClient::new();
        client.mock_raw(HttpMethod::Post, &url("/api/login"), status, body);
        let store = store(&client);

        assert_eq!(store.login("a@b.c", "pw").await, expected, "{} {}", status, body);
        assert_eq!(store.state().is_authenticated(), expected);
    }

    let client = MockHttpClient::new();
    client.mock_network_error(HttpMethod::Post, &url("/api/login"));
    assert!(!store(&client).login("a@b.c", "pw").await);
}

#[tokio::test]
async fn test_failed_login_keeps_previous_user() {
    let client = MockHttpClient::new();
    mock_login_ok(&client);
    let store = store(&client);
    assert!(store.login("a@b.c", "pw").await);

    client.mock_response(HttpMethod::Post, &url("/api/login"), 401, json!({}));
    assert!(!store.login("a@b.c", "wrong").await);
    assert_eq!(
        store.current_user().and_then(|u| u.id),
        Some("u1".to_string())
    );
}

#[tokio::test]
async fn test_logout() {
    let client = MockHttpClient::new();
    mock_login_ok(&client);
    let store = store(&client);
    store.login("a@b.c", "pw").await;

    client.mock_response(HttpMethod::Get, &url("/api/logout"), 500, json!({}));
    assert!(!store.logout().await);
    assert!(store.state().is_authenticated());

    client.mock_raw(HttpMethod::Get, &url("/api/logout"), 200, "");
    assert!(store.logout().await);
    assert_eq!(store.state(), SessionState::Anonymous);
}

// =========================================================
// 并发与观察者
// =========================================================

/// `held` 路径的响应要等测试手动放行
struct DeferredClient {
    inner: MockHttpClient,
    held: &'static str,
    release: RefCell<Option<oneshot::Receiver<()>>>,
}

#[async_trait::async_trait(?Send)]
impl HttpClient for DeferredClient {
    async fn send(&self, req: HttpRequest) -> ApiResult<HttpResponse> {
        if req.url.ends_with(self.held) {
            let release = self.release.borrow_mut().take();
            if let Some(release) = release {
                let _ = release.await;
            }
        }
        self.inner.send(req).await
    }
}

#[tokio::test]
async fn test_login_during_probe_wins() {
    let (tx, rx) = oneshot::channel();
    let inner = MockHttpClient::new();
    inner.mock_raw(HttpMethod::Get, &url("/api/user"), 200, "");
    mock_login_ok(&inner);
    let client = DeferredClient {
        inner,
        held: "/api/user",
        release: RefCell::new(Some(rx)),
    };
    let store = SessionStore::new(MovieApi::new(&client, ApiConfig::new(BASE)));

    let release = async move {
        let _ = tx.send(());
    };
    let (_, logged_in, _) = futures::join!(store.initialize(), store.login("a@b.c", "pw"), release);

    assert!(logged_in);
    assert!(store.state().is_authenticated());

    let order: Vec<String> = client
        .inner
        .requests
        .borrow()
        .iter()
        .map(|r| r.url.clone())
        .collect();
    assert_eq!(order, vec![url("/api/user"), url("/api/login")]);
}

#[tokio::test]
async fn test_login_lands_after_page_leaves() {
    let (tx, rx) = oneshot::channel();
    let inner = MockHttpClient::new();
    mock_login_ok(&inner);
    let client = DeferredClient {
        inner,
        held: "/api/login",
        release: RefCell::new(Some(rx)),
    };
    let store = SessionStore::new(MovieApi::new(&client, ApiConfig::new(BASE)));

    let page = ViewScope::new();
    let watch = page.watch();
    let page_written = Cell::new(false);

    let submit = async {
        let ok = store.login("a@b.c", "pw").await;
        if !watch.is_cancelled() {
            page_written.set(true);
        }
        ok
    };
    let leave_then_reply = async {
        page.cancel();
        let _ = tx.send(());
    };
    let (logged_in, _) = futures::join!(submit, leave_then_reply);

    assert!(logged_in);
    assert!(store.state().is_authenticated());
    assert!(watch.is_cancelled());
    assert!(!page_written.get());
}

#[tokio::test]
async fn test_initialize_after_login_skips_probe() {
    let client = MockHttpClient::new();
    mock_login_ok(&client);
    let store = store(&client);

    assert!(store.login("a@b.c", "pw").await);
    store.initialize().await;

    assert_eq!(client.request_count(), 1);
    assert!(store.state().is_authenticated());
}

#[tokio::test]
async fn test_observers_see_every_write() {
    let client = MockHttpClient::new();
    client.mock_raw(HttpMethod::Get, &url("/api/user"), 200, "");
    client.mock_raw(HttpMethod::Get, &url("/api/logout"), 200, "");
    mock_login_ok(&client);
    let store = store(&client);

    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    store.subscribe(move |state| sink.borrow_mut().push(state.is_authenticated()));

    store.initialize().await;
    store.login("a@b.c", "pw").await;
    store.logout().await;

    assert_eq!(*seen.borrow(), vec![false, true, false]);
}
