use crate::auth::use_auth;
use crate::components::feedback::apply_outcome;
use crate::web::router::{Link, use_router};
use crate::web::{dialog, spawn_detached, use_view_scope};
use leptos::prelude::*;
use moviehub::AppRoute;
use moviehub::views::auth_forms::{oauth_redirect, submit_login};

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();
    let scope = use_view_scope();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (is_submitting, set_is_submitting) = signal(false);
    // 登录失败走弹窗，这里不会写入
    let (_, set_error) = signal(Option::<String>::None);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        set_is_submitting.set(true);

        let store = auth.store();
        let (email, password) = (email.get_untracked(), password.get_untracked());
        spawn_detached(
            scope,
            async move { submit_login(&store, &email, &password).await },
            move |outcome| {
                set_is_submitting.set(false);
                apply_outcome(outcome, router, set_error);
            },
        );
    };

    let on_google = move |_| dialog::redirect_to(&oauth_redirect(&auth.api()));

    view! {
        <div class="hero min-h-[80vh] bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <h1 class="text-3xl font-bold">"Login"</h1>
                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <div class="form-control">
                            <input
                                type="email"
                                placeholder="Email"
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                                prop:value=email
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control">
                            <input
                                type="password"
                                placeholder="Password"
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                                prop:value=password
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control mt-6">
                            <button type="submit" class="btn btn-primary" disabled=move || is_submitting.get()>
                                {move || if is_submitting.get() {
                                    view! { <span class="loading loading-spinner"></span> "Logging in..." }.into_any()
                                } else {
                                    "Login".into_any()
                                }}
                            </button>
                        </div>
                    </form>
                    <div class="px-8 pb-8 space-y-2">
                        <button class="btn btn-outline w-full" on:click=on_google>"Login with Google"</button>
                        <p class="text-sm text-center">
                            "No account? " <Link to=AppRoute::Register class="link link-primary">"Register"</Link>
                        </p>
                    </div>
                </div>
            </div>
        </div>
    }
}
