//! MovieHub 客户端核心
//!
//! 与平台无关的部分全部放在这里，浏览器端 (`frontend/`) 只负责渲染和 I/O 适配：
//! - `request`: HTTP 抽象层 (`HttpClient` trait)
//! - `api`: 影评 API 网关，唯一允许发起网络请求的组件
//! - `session`: 会话状态机
//! - `route`: 路由定义
//! - `scope`: 页面请求的生命周期
//! - `views`: 各页面的控制逻辑（加载、提交、错误转换）

// =========================================================
// 跨平台日志宏
// =========================================================

#[cfg(target_arch = "wasm32")]
macro_rules! log_info {
    ($($t:tt)*) => (web_sys::console::log_1(&format!($($t)*).into()))
}

#[cfg(not(target_arch = "wasm32"))]
macro_rules! log_info {
    ($($t:tt)*) => (println!($($t)*))
}

#[cfg(target_arch = "wasm32")]
macro_rules! log_warn {
    ($($t:tt)*) => (web_sys::console::warn_1(&format!($($t)*).into()))
}

#[cfg(not(target_arch = "wasm32"))]
macro_rules! log_warn {
    ($($t:tt)*) => (eprintln!($($t)*))
}

#[cfg(target_arch = "wasm32")]
macro_rules! log_error {
    ($($t:tt)*) => (web_sys::console::error_1(&format!($($t)*).into()))
}

#[cfg(not(target_arch = "wasm32"))]
macro_rules! log_error {
    ($($t:tt)*) => (eprintln!($($t)*))
}

pub mod api;
pub mod config;
pub mod draft;
pub mod error;
pub mod multipart;
pub mod request;
pub mod route;
pub mod scope;
pub mod session;
pub mod views;

pub use api::MovieApi;
pub use config::ApiConfig;
pub use draft::{ImageUpload, MovieDraft};
pub use error::{ApiError, ApiErrorKind, ApiResult};
pub use request::{HttpClient, HttpRequest, HttpResponse, RequestBody};
pub use route::{AppRoute, Navigation};
pub use scope::{ScopeWatch, ViewScope};
pub use session::{SessionState, SessionStore};

pub use moviehub_shared::{MovieRecord, Rating, User};
