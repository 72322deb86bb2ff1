use crate::config::ApiConfig;
use crate::draft::MovieDraft;
use crate::error::{ApiError, ApiResult};
use crate::request::{HttpClient, HttpRequest, HttpResponse};
use moviehub_shared::protocol::{
    CreateMovie, DeleteMovie, Endpoint, GetMovie, ListMovies, Login, Logout, ProbeSession,
    Register, UpdateMovie,
};
use moviehub_shared::{
    LoginRequest, LoginResponse, MessageResponse, MovieRecord, RegisterRequest, User,
};

// =========================================================
// 影评 API 网关
// =========================================================

/// 唯一允许访问远端 API 的组件
///
/// 每个请求都携带会话凭据；只发送一次，不重试、不设超时，由调用方处理失败。
#[derive(Clone)]
pub struct MovieApi<C> {
    client: C,
    config: ApiConfig,
}

impl<C: HttpClient> MovieApi<C> {
    pub fn new(client: C, config: ApiConfig) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub fn oauth_url(&self) -> String {
        self.config.oauth_url()
    }

    fn request<E: Endpoint>(&self, endpoint: &E) -> HttpRequest {
        HttpRequest::new(&self.config.url(&endpoint.path()), E::METHOD).with_credentials()
    }

    /// 发送请求，非 2xx 转为错误并附上操作名
    async fn execute(&self, req: HttpRequest, op: &str) -> ApiResult<HttpResponse> {
        let target = format!("{} {}", req.method, req.url);
        let result = self
            .client
            .send(req)
            .await
            .and_then(HttpResponse::error_for_status);
        result.map_err(|e| {
            let e = e.in_op_with(op, target);
            log_warn!("[Api] {}", e);
            e
        })
    }

    /// 获取全部影片
    pub async fn list_movies(&self) -> ApiResult<Vec<MovieRecord>> {
        let resp = self.execute(self.request(&ListMovies), "movies.list").await?;
        resp.json().map_err(|e| e.in_op("movies.list"))
    }

    pub async fn get_movie(&self, id: &str) -> ApiResult<MovieRecord> {
        let resp = self
            .execute(self.request(&GetMovie { id }), "movies.get")
            .await?;
        resp.json().map_err(|e| e.in_op_with("movies.get", id))
    }

    /// 新建影片（multipart 上传）
    ///
    /// 标题或简介为空时不发请求。
    pub async fn create_movie(&self, draft: &MovieDraft) -> ApiResult<Option<MovieRecord>> {
        ensure_required(draft).map_err(|e| e.in_op("movies.create"))?;
        let req = self.request(&CreateMovie).with_multipart(draft.to_multipart());
        let resp = self.execute(req, "movies.create").await?;
        Ok(decode_record(&resp, "movies.create"))
    }

    pub async fn update_movie(&self, id: &str, draft: &MovieDraft) -> ApiResult<Option<MovieRecord>> {
        ensure_required(draft).map_err(|e| e.in_op_with("movies.update", id))?;
        let req = self
            .request(&UpdateMovie { id })
            .with_multipart(draft.to_multipart());
        let resp = self.execute(req, "movies.update").await?;
        Ok(decode_record(&resp, "movies.update"))
    }

    pub async fn delete_movie(&self, id: &str) -> ApiResult<()> {
        self.execute(self.request(&DeleteMovie { id }), "movies.delete")
            .await?;
        Ok(())
    }

    /// 邮箱密码登录
    ///
    /// 返回响应体中的 `user`；2xx 但没有 `user` 时返回 `None`。
    pub async fn login(&self, email: &str, password: &str) -> ApiResult<Option<User>> {
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let req = self.request(&Login).with_json(&body)?;
        let resp = self.execute(req, "auth.login").await?;
        let parsed: LoginResponse = if resp.body.trim().is_empty() {
            LoginResponse::default()
        } else {
            resp.json().map_err(|e| e.in_op("auth.login"))?
        };
        Ok(parsed.user)
    }

    pub async fn logout(&self) -> ApiResult<()> {
        self.execute(self.request(&Logout), "auth.logout").await?;
        Ok(())
    }

    /// 注册账号，返回服务端消息（如有）
    pub async fn register(&self, name: &str, email: &str, password: &str) -> ApiResult<Option<String>> {
        let body = RegisterRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        };
        let req = self.request(&Register).with_json(&body)?;
        let resp = self.execute(req, "auth.register").await?;
        Ok(serde_json::from_str::<MessageResponse>(&resp.body)
            .ok()
            .and_then(|m| m.message))
    }

    /// 会话探测：cookie 仍然有效时返回用户
    ///
    /// 空响应体或假值（`null`、`false` 等）表示未登录，其余任何值都算已登录。
    pub async fn probe_session(&self) -> ApiResult<Option<User>> {
        let resp = self
            .execute(self.request(&ProbeSession), "auth.probe")
            .await?;
        if resp.body.trim().is_empty() {
            return Ok(None);
        }
        let body: serde_json::Value = resp.json().map_err(|e| e.in_op("auth.probe"))?;
        Ok(User::from_json(&body))
    }
}

fn ensure_required(draft: &MovieDraft) -> ApiResult<()> {
    if draft.title.trim().is_empty() || draft.description.trim().is_empty() {
        return Err(ApiError::invalid_input("title and description are required"));
    }
    Ok(())
}

/// 2xx 的响应体不是影片记录时仍视为成功
fn decode_record(resp: &HttpResponse, op: &str) -> Option<MovieRecord> {
    if resp.body.trim().is_empty() {
        return None;
    }
    match resp.json::<MovieRecord>() {
        Ok(movie) => Some(movie),
        Err(e) => {
            log_warn!("[Api] {} returned a non-record body: {}", op, e);
            None
        }
    }
}

#[cfg(test)]
mod tests;
