//! 认证模块
//!
//! 持有唯一的 [`SessionStore`]，并把它的状态镜像到一个响应式信号里。
//! 路由服务只拿到派生出的认证信号，不直接依赖会话实现。

use crate::web::{FetchClient, api_base_override};
use leptos::prelude::*;
use leptos::task::spawn_local;
use moviehub::{ApiConfig, MovieApi, SessionState, SessionStore};
use std::rc::Rc;

pub type Session = SessionStore<FetchClient>;

/// 认证上下文
///
/// `Copy`，通过 Context 在组件间共享。
#[derive(Clone, Copy)]
pub struct AuthContext {
    /// 会话状态镜像（只读使用，写入只发生在会话回调里）
    pub state: ReadSignal<SessionState>,
    store: StoredValue<Rc<Session>, LocalStorage>,
}

impl AuthContext {
    pub fn new() -> Self {
        let config = ApiConfig::resolve(api_base_override());
        web_sys::console::log_1(&format!("[Auth] API base: {}", config.base_url()).into());

        let store = Rc::new(SessionStore::new(MovieApi::new(FetchClient, config)));
        let (state, set_state) = signal(store.state());
        store.subscribe(move |next| set_state.set(next.clone()));

        Self {
            state,
            store: StoredValue::new_local(store),
        }
    }

    pub fn store(&self) -> Rc<Session> {
        self.store.get_value()
    }

    pub fn api(&self) -> MovieApi<FetchClient> {
        self.store.with_value(|s| s.api().clone())
    }

    /// 启动探测结束后为 true，此前不渲染任何页面
    pub fn is_ready_signal(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || !state.get().is_initializing())
    }

    pub fn is_authenticated_signal(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.get().is_authenticated())
    }
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}

/// 启动会话探测
pub fn init_auth(ctx: &AuthContext) {
    let store = ctx.store();
    spawn_local(async move {
        store.initialize().await;
    });
}
