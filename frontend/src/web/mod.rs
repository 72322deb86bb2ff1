//! 原生 Web API 封装模块
//!
//! 对浏览器 API 的轻量级封装：fetch、History、LocalStorage、原生对话框。

pub mod dialog;
mod http;
pub mod router;
mod storage;
mod task;

pub use http::FetchClient;
pub use storage::api_base_override;
pub use task::{spawn_detached, spawn_scoped, use_view_scope};
