//! 浏览器原生对话框与整页跳转

/// 阻塞式提示框
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// 确认框；窗口不可用时视为取消
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// 整页跳转到站外地址（OAuth 登录）
pub fn redirect_to(url: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.location().set_href(url) {
            web_sys::console::error_1(&format!("[Dialog] redirect failed: {:?}", e).into());
        }
    }
}
