use std::fmt;

use moviehub_shared::MessageResponse;

// =========================================================
// 错误类型枚举
// =========================================================

/// 错误类型
/// 对应 HTTP 状态码语义，另有两类不经过服务端的错误（网络、客户端校验）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    /// 网络/传输层失败（请求未得到任何 HTTP 响应）
    Network,
    /// 2xx 响应体无法解析
    Decode,
    /// 客户端校验失败，请求未发出
    InvalidInput,
    /// 401: 未登录
    Unauthorized,
    /// 403: 无权操作
    Forbidden,
    /// 404: 资源不存在
    NotFound,
    /// 其余 4xx: 服务端校验失败
    Validation,
    /// 5xx: 服务端错误
    Server,
}

impl ApiErrorKind {
    /// 根据非 2xx 状态码归类
    pub fn from_status(status: u16) -> Self {
        match status {
            401 => ApiErrorKind::Unauthorized,
            403 => ApiErrorKind::Forbidden,
            404 => ApiErrorKind::NotFound,
            500..=599 => ApiErrorKind::Server,
            _ => ApiErrorKind::Validation,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            ApiErrorKind::Network => "NETWORK_ERROR",
            ApiErrorKind::Decode => "DECODE_ERROR",
            ApiErrorKind::InvalidInput => "INVALID_INPUT",
            ApiErrorKind::Unauthorized => "UNAUTHORIZED",
            ApiErrorKind::Forbidden => "FORBIDDEN",
            ApiErrorKind::NotFound => "RESOURCE_NOT_FOUND",
            ApiErrorKind::Validation => "VALIDATION_FAILED",
            ApiErrorKind::Server => "SERVER_ERROR",
        }
    }
}

// =========================================================
// 错误上下文追踪
// =========================================================

/// 记录错误发生时所在的操作，如 "movies.update"
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorSpan {
    pub operation: String,
    pub detail: Option<String>,
}

// =========================================================
// 核心错误类型
// =========================================================

/// 网关返回的错误
///
/// - kind: 错误语义
/// - status: HTTP 状态码（网络错误和客户端校验错误没有）
/// - message: 面向开发者的描述
/// - server_message: 服务端响应体中的 `message`，可直接展示给用户
#[derive(Debug, Clone)]
pub struct ApiError {
    pub kind: ApiErrorKind,
    pub status: Option<u16>,
    pub message: String,
    server_message: Option<String>,
    spans: Vec<ErrorSpan>,
}

impl ApiError {
    pub fn new(kind: ApiErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            status: None,
            message: message.into(),
            server_message: None,
            spans: Vec::new(),
        }
    }

    // --- Convenience constructors ---

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::Network, message)
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::Decode, message)
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::InvalidInput, message)
    }

    /// 由非 2xx 响应构造
    ///
    /// 响应体是带 `message` 的 JSON 时记录下来；空体或非 JSON 体不是错误，
    /// 只是没有可展示的服务端消息。
    pub fn from_response(status: u16, body: &str) -> Self {
        let server_message = serde_json::from_str::<MessageResponse>(body)
            .ok()
            .and_then(|m| m.message)
            .filter(|m| !m.trim().is_empty());

        Self {
            kind: ApiErrorKind::from_status(status),
            status: Some(status),
            message: format!("request failed with status {}", status),
            server_message,
            spans: Vec::new(),
        }
    }

    // --- Context builders ---

    pub fn in_op(mut self, operation: impl Into<String>) -> Self {
        self.spans.push(ErrorSpan {
            operation: operation.into(),
            detail: None,
        });
        self
    }

    pub fn in_op_with(mut self, operation: impl Into<String>, detail: impl Into<String>) -> Self {
        self.spans.push(ErrorSpan {
            operation: operation.into(),
            detail: Some(detail.into()),
        });
        self
    }

    // --- Accessors ---

    pub fn error_code(&self) -> &'static str {
        self.kind.error_code()
    }

    pub fn is_forbidden(&self) -> bool {
        self.kind == ApiErrorKind::Forbidden
    }

    pub fn server_message(&self) -> Option<&str> {
        self.server_message.as_deref()
    }

    /// 面向用户的消息：优先使用服务端消息，否则使用给定的兜底文案
    pub fn user_message(&self, fallback: &str) -> String {
        self.server_message
            .clone()
            .unwrap_or_else(|| fallback.to_string())
    }

    pub fn spans(&self) -> &[ErrorSpan] {
        &self.spans
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.error_code(), self.message)?;
        if let Some(msg) = &self.server_message {
            write!(f, ": {}", msg)?;
        }

        if !self.spans.is_empty() {
            write!(f, " | trace: ")?;
            for (i, span) in self.spans.iter().enumerate() {
                if i > 0 {
                    write!(f, " -> ")?;
                }
                write!(f, "{}", span.operation)?;
                if let Some(detail) = &span.detail {
                    write!(f, "({})", detail)?;
                }
            }
        }
        Ok(())
    }
}

impl std::error::Error for ApiError {}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::decode(e.to_string())
    }
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;
