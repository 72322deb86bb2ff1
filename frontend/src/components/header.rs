use crate::auth::use_auth;
use crate::components::feedback::{ErrorMessage, apply_outcome};
use crate::web::router::{Link, use_router};
use crate::web::{spawn_detached, use_view_scope};
use leptos::prelude::*;
use moviehub::AppRoute;
use moviehub::views::header::{BRAND, NavItem, nav_items, submit_logout};

#[component]
pub fn Header() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();
    let scope = use_view_scope();
    let (error, set_error) = signal(Option::<String>::None);

    let on_logout = move |_| {
        set_error.set(None);
        let store = auth.store();
        spawn_detached(
            scope,
            async move { submit_logout(&store).await },
            move |outcome| apply_outcome(outcome, router, set_error),
        );
    };

    let items = move || {
        nav_items(&auth.state.get())
            .into_iter()
            .map(|item| match item {
                NavItem::Link { label, route } => view! {
                    <li><Link to=route>{label}</Link></li>
                }
                .into_any(),
                NavItem::Logout => view! {
                    <li>
                        <button class="btn btn-outline btn-error btn-sm" on:click=on_logout>
                            "Logout"
                        </button>
                    </li>
                }
                .into_any(),
            })
            .collect_view()
    };

    view! {
        <header class="bg-base-100 shadow">
            <div class="navbar max-w-7xl mx-auto">
                <div class="flex-1">
                    <Link to=AppRoute::Home class="btn btn-ghost text-xl">{BRAND}</Link>
                </div>
                <ul class="menu menu-horizontal px-1 gap-1 items-center">{items}</ul>
            </div>
            <div class="max-w-7xl mx-auto px-4">
                <ErrorMessage message=error />
            </div>
        </header>
    }
}
