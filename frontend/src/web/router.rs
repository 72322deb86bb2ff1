//! 路由服务模块 - 核心引擎
//!
//! 所有对 window.history 的操作都集中在此模块。
//! 导航流程：请求 -> 守卫 -> 写入 History（含状态消息）-> 更新路由信号。

use leptos::prelude::*;
use moviehub::{AppRoute, Navigation};
use wasm_bindgen::prelude::*;

fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// 当前 History 条目里携带的状态消息
fn current_history_message() -> Option<String> {
    web_sys::window()
        .and_then(|w| w.history().ok())
        .and_then(|h| h.state().ok())
        .and_then(|state| state.as_string())
}

fn write_history(path: &str, message: Option<&str>, use_push: bool) {
    let Some(history) = web_sys::window().and_then(|w| w.history().ok()) else {
        return;
    };
    let state = message.map(JsValue::from_str).unwrap_or(JsValue::NULL);
    let result = if use_push {
        history.push_state_with_url(&state, "", Some(path))
    } else {
        history.replace_state_with_url(&state, "", Some(path))
    };
    if let Err(e) = result {
        web_sys::console::error_1(&format!("[Router] history write failed: {:?}", e).into());
    }
}

/// 路由器服务
///
/// 通过注入的认证信号实现守卫，与会话实现解耦。
#[derive(Clone, Copy)]
pub struct RouterService {
    current_route: ReadSignal<AppRoute>,
    set_route: WriteSignal<AppRoute>,
    /// 随导航传递的消息（例如编辑被拒后带回详情页的提示）
    nav_message: RwSignal<Option<String>>,
    is_authenticated: Signal<bool>,
}

impl RouterService {
    fn new(is_authenticated: Signal<bool>) -> Self {
        let (current_route, set_route) = signal(AppRoute::from_path(&current_path()));

        Self {
            current_route,
            set_route,
            nav_message: RwSignal::new(current_history_message()),
            is_authenticated,
        }
    }

    pub fn current_route(&self) -> ReadSignal<AppRoute> {
        self.current_route
    }

    pub fn nav_message(&self) -> Signal<Option<String>> {
        self.nav_message.into()
    }

    /// **核心方法：导航与守卫**
    pub fn navigate(&self, to: impl Into<Navigation>) {
        self.navigate_with(to.into(), true);
    }

    fn navigate_with(&self, nav: Navigation, use_push: bool) {
        let Navigation { route, state } = nav;

        if route.requires_auth() && !self.is_authenticated.get_untracked() {
            web_sys::console::log_1(&"[Router] Access Denied. Redirecting to Login.".into());
            let redirect = AppRoute::auth_failure_redirect();
            write_history(&redirect.to_path(), None, use_push);
            self.nav_message.set(None);
            self.set_route.set(redirect);
            return;
        }

        write_history(&route.to_path(), state.as_deref(), use_push);
        self.nav_message.set(state);
        self.set_route.set(route);
    }

    /// 浏览器后退/前进：恢复路由和该条目上的状态消息
    fn init_popstate_listener(&self) {
        let router = *self;

        let closure = Closure::<dyn Fn(web_sys::PopStateEvent)>::new(
            move |ev: web_sys::PopStateEvent| {
                let route = AppRoute::from_path(&current_path());
                let nav = Navigation {
                    route,
                    state: ev.state().as_string(),
                };
                router.navigate_with(nav, false);
            },
        );

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // 监听器与页面同寿命
        closure.forget();
    }

    /// 登出时若停留在受保护页面则跳转登录页（首次运行也会校验初始地址）
    fn setup_auth_redirect(&self) {
        let router = *self;

        Effect::new(move |_| {
            let is_auth = router.is_authenticated.get();
            let route = router.current_route.get_untracked();

            if !is_auth && route.requires_auth() {
                web_sys::console::log_1(
                    &"[Router] Auth state changed: logged out, redirecting to login.".into(),
                );
                router.navigate_with(AppRoute::auth_failure_redirect().into(), false);
            }
        });
    }
}

fn provide_router(is_authenticated: Signal<bool>) -> RouterService {
    let router = RouterService::new(is_authenticated);

    router.init_popstate_listener();
    router.setup_auth_redirect();

    provide_context(router);
    router
}

pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure Router is provided.")
}

// ============================================================================
// UI 组件
// ============================================================================

#[component]
pub fn Router(is_authenticated: Signal<bool>, children: Children) -> impl IntoView {
    provide_router(is_authenticated);

    children()
}

/// 路由出口组件：根据当前路由渲染对应页面
#[component]
pub fn RouterOutlet(matcher: fn(AppRoute) -> AnyView) -> impl IntoView {
    let router = use_router();

    move || matcher(router.current_route().get())
}

/// 站内链接，点击时走路由服务而不是整页刷新
#[component]
pub fn Link(
    to: AppRoute,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let router = use_router();
    let href = to.to_path();

    let on_click = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        router.navigate(to.clone());
    };

    view! {
        <a href=href class=class on:click=on_click>
            {children()}
        </a>
    }
}
