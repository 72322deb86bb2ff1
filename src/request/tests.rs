use super::*;
use crate::api::MovieApi;
use crate::config::ApiConfig;
use crate::draft::{ImageUpload, MovieDraft};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

// =========================================================
// 辅助函数：最小 HTTP/1.1 测试服务器
// =========================================================

struct TestServer {
    addr: SocketAddr,
    captured: Arc<Mutex<Vec<String>>>,
}

impl TestServer {
    fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    fn request(&self, index: usize) -> String {
        self.captured.lock().unwrap()[index].to_lowercase()
    }
}

fn reply(status_line: &str, extra_headers: &[&str], body: &str) -> String {
    let mut head = format!("HTTP/1.1 {}\r\n", status_line);
    for h in extra_headers {
        head.push_str(h);
        head.push_str("\r\n");
    }
    format!(
        "{}Content-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        head,
        body.len(),
        body
    )
}

fn content_length(head: &str) -> usize {
    head.lines()
        .filter_map(|line| line.split_once(':'))
        .find(|(k, _)| k.trim().eq_ignore_ascii_case("content-length"))
        .and_then(|(_, v)| v.trim().parse().ok())
        .unwrap_or(0)
}

/// 依次接受连接，每个连接返回一个预设响应，并记录收到的原始请求
async fn spawn_server(replies: Vec<String>) -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let captured = Arc::new(Mutex::new(Vec::new()));
    let sink = captured.clone();

    tokio::spawn(async move {
        for response in replies {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = Vec::new();
            let mut chunk = [0u8; 4096];
            loop {
                let n = socket.read(&mut chunk).await.unwrap();
                if n == 0 {
                    break;
                }
                buf.extend_from_slice(&chunk[..n]);
                let text = String::from_utf8_lossy(&buf);
                if let Some(head_end) = text.find("\r\n\r\n") {
                    let wanted = head_end + 4 + content_length(&text[..head_end]);
                    if buf.len() >= wanted {
                        break;
                    }
                }
            }
            sink.lock()
                .unwrap()
                .push(String::from_utf8_lossy(&buf).into_owned());
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
        }
    });

    TestServer { addr, captured }
}

fn sample_draft() -> MovieDraft {
    MovieDraft {
        title: "Alien".into(),
        description: "Space horror".into(),
        review: "Still terrifying".into(),
        rating: Some(5),
        image: Some(ImageUpload {
            file_name: "alien.png".into(),
            content_type: "image/png".into(),
            bytes: vec![1, 2, 3, 4],
        }),
    }
}

// =========================================================
// ReqwestHttpClient 端到端测试
// =========================================================

#[tokio::test]
async fn test_session_cookie_is_sent_back() {
    let server = spawn_server(vec![
        reply(
            "200 OK",
            &["Set-Cookie: connect.sid=abc123; Path=/; HttpOnly"],
            r#"{"user":{"_id":"u1","name":"Ripley"}}"#,
        ),
        reply("200 OK", &[], "[]"),
    ])
    .await;

    let api = MovieApi::new(ReqwestHttpClient::new(), ApiConfig::new(server.base_url()));

    let user = api.login("ripley@nostromo.io", "pw").await.unwrap();
    assert_eq!(user.and_then(|u| u.name), Some("Ripley".to_string()));

    let movies = api.list_movies().await.unwrap();
    assert!(movies.is_empty());

    let login = server.request(0);
    assert!(login.starts_with("post /api/login http/1.1"));
    assert!(login.contains("content-type: application/json"));
    assert!(login.contains(r#""email":"ripley@nostromo.io""#));

    let list = server.request(1);
    assert!(list.starts_with("get /api/movies http/1.1"));
    assert!(list.contains("cookie: connect.sid=abc123"));
}

#[tokio::test]
async fn test_multipart_body_on_the_wire() {
    let server = spawn_server(vec![reply(
        "201 Created",
        &[],
        r#"{"_id":"m1","title":"Alien","description":"Space horror","rating":5}"#,
    )])
    .await;

    let api = MovieApi::new(ReqwestHttpClient::new(), ApiConfig::new(server.base_url()));
    let created = api.create_movie(&sample_draft()).await.unwrap();
    assert_eq!(created.map(|m| m.id), Some("m1".to_string()));

    let raw = server.request(0);
    assert!(raw.starts_with("post /api/movies http/1.1"));
    assert!(raw.contains("content-type: multipart/form-data; boundary="));
    for field in ["title", "description", "review", "rating"] {
        assert!(raw.contains(&format!("name=\"{}\"\r\n", field)), "missing {field}");
    }
    assert!(raw.contains("name=\"image\"; filename=\"alien.png\""));
}

#[tokio::test]
async fn test_non_success_status_is_not_a_transport_error() {
    let server = spawn_server(vec![reply(
        "403 Forbidden",
        &[],
        r#"{"message":"Not your movie"}"#,
    )])
    .await;

    let client = ReqwestHttpClient::new();
    let req = HttpRequest::new(&format!("{}/api/movies/9", server.base_url()), HttpMethod::Delete);
    let resp = client.send(req).await.unwrap();
    assert_eq!(resp.status, 403);

    let err = resp.error_for_status().unwrap_err();
    assert!(err.is_forbidden());
    assert_eq!(err.server_message(), Some("Not your movie"));
}

#[tokio::test]
async fn test_connection_refused_maps_to_network_error() {
    // 绑定后立即释放端口，保证无人监听
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = ReqwestHttpClient::new();
    let req = HttpRequest::new(&format!("http://{}/api/user", addr), HttpMethod::Get);
    let err = client.send(req).await.unwrap_err();
    assert_eq!(err.kind, crate::error::ApiErrorKind::Network);
}

// =========================================================
// MockHttpClient 行为
// =========================================================

#[tokio::test]
async fn test_mock_records_and_defaults_to_404() {
    let client = MockHttpClient::new();
    client.mock_response(
        HttpMethod::Get,
        "http://x/api/movies",
        200,
        serde_json::json!([]),
    );

    let ok = client
        .send(HttpRequest::new("http://x/api/movies", HttpMethod::Get))
        .await
        .unwrap();
    assert_eq!(ok.status, 200);

    let missing = client
        .send(HttpRequest::new("http://x/api/movies", HttpMethod::Post))
        .await
        .unwrap();
    assert_eq!(missing.status, 404);
    assert_eq!(client.request_count(), 2);
}
