//! MovieHub 前端应用
//!
//! 页面逻辑全部在核心库 `moviehub::views` 中，这里只做渲染和浏览器 I/O：
//! - `web`: fetch / History / LocalStorage / 对话框封装，路由服务
//! - `auth`: 会话上下文
//! - `components`: UI 组件层

mod auth;
mod components {
    pub mod add_movie;
    pub mod edit_movie;
    pub mod feedback;
    pub mod header;
    pub mod home;
    pub mod login;
    pub mod movie_detail;
    pub mod movie_form;
    pub mod register;
}
mod web;

use crate::auth::{AuthContext, init_auth};
use crate::components::add_movie::AddMoviePage;
use crate::components::edit_movie::EditMoviePage;
use crate::components::header::Header;
use crate::components::home::HomePage;
use crate::components::login::LoginPage;
use crate::components::movie_detail::MovieDetailPage;
use crate::components::register::RegisterPage;

use leptos::prelude::*;
use moviehub::AppRoute;
use web::router::{Link, Router, RouterOutlet};

/// 路由匹配函数
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Home => view! { <HomePage /> }.into_any(),
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::Register => view! { <RegisterPage /> }.into_any(),
        AppRoute::AddMovie => view! { <AddMoviePage /> }.into_any(),
        AppRoute::EditMovie(id) => view! { <EditMoviePage id=id /> }.into_any(),
        AppRoute::MovieDetail(id) => view! { <MovieDetailPage id=id /> }.into_any(),
        AppRoute::NotFound => view! {
            <div class="flex items-center justify-center min-h-[60vh]">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-error">"404"</h1>
                    <p class="text-xl mt-4">"Page not found"</p>
                    <Link to=AppRoute::Home class="btn btn-link">"Back to movies"</Link>
                </div>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    let auth_ctx = AuthContext::new();
    provide_context(auth_ctx);
    init_auth(&auth_ctx);

    let is_ready = auth_ctx.is_ready_signal();
    let is_authenticated = auth_ctx.is_authenticated_signal();

    view! {
        // 会话探测结束前不渲染任何页面
        <Show
            when=move || is_ready.get()
            fallback=|| view! {
                <div class="flex items-center justify-center min-h-screen">
                    <span class="loading loading-spinner loading-lg text-primary"></span>
                </div>
            }
        >
            <Router is_authenticated=is_authenticated>
                <Header />
                <main class="min-h-screen bg-base-200">
                    <RouterOutlet matcher=route_matcher />
                </main>
            </Router>
        </Show>
    }
}
