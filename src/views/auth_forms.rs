//! 登录 / 注册表单
//!
//! 这两个页面的失败提示走阻塞式弹窗，其余页面都是行内提示。

use super::Outcome;
use crate::api::MovieApi;
use crate::request::HttpClient;
use crate::route::AppRoute;
use crate::session::SessionStore;

pub const LOGIN_FAILED: &str = "Login failed, please check your credentials.";
pub const REGISTER_SUCCEEDED: &str = "Registration successful! Please log in.";
pub const REGISTER_FALLBACK: &str = "Something went wrong. Please try again.";

pub async fn submit_login<C: HttpClient>(
    session: &SessionStore<C>,
    email: &str,
    password: &str,
) -> Outcome {
    if session.login(email, password).await {
        Outcome::navigate(AppRoute::Home)
    } else {
        Outcome::alert(LOGIN_FAILED)
    }
}

/// 注册成功后不会自动登录，而是跳转到登录页
pub async fn submit_register<C: HttpClient>(
    api: &MovieApi<C>,
    name: &str,
    email: &str,
    password: &str,
) -> Outcome {
    match api.register(name, email, password).await {
        Ok(_) => Outcome::alert(REGISTER_SUCCEEDED).then_navigate(AppRoute::Login),
        Err(e) => {
            log_error!("[Register] {}", e);
            Outcome::alert(format!(
                "Registration failed: {}",
                e.user_message(REGISTER_FALLBACK)
            ))
        }
    }
}

/// "Login with Google" 的整页跳转地址
pub fn oauth_redirect<C: HttpClient>(api: &MovieApi<C>) -> String {
    api.oauth_url()
}
