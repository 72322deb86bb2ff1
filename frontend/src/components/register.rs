use crate::auth::use_auth;
use crate::components::feedback::apply_outcome;
use crate::web::router::use_router;
use crate::web::{spawn_scoped, use_view_scope};
use leptos::prelude::*;
use moviehub::views::auth_forms::submit_register;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();
    let scope = use_view_scope();

    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    // 注册结果都走弹窗
    let (_, set_error) = signal(Option::<String>::None);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();

        let api = auth.api();
        let (name, email, password) = (
            name.get_untracked(),
            email.get_untracked(),
            password.get_untracked(),
        );
        spawn_scoped(scope, async move {
            let outcome = submit_register(&api, &name, &email, &password).await;
            apply_outcome(outcome, router, set_error);
        });
    };

    view! {
        <div class="hero min-h-[80vh] bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <h1 class="text-3xl font-bold">"Register"</h1>
                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <input
                            type="text"
                            placeholder="Name"
                            on:input=move |ev| set_name.set(event_target_value(&ev))
                            prop:value=name
                            class="input input-bordered"
                            required
                        />
                        <input
                            type="email"
                            placeholder="Email"
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                            prop:value=email
                            class="input input-bordered"
                            required
                        />
                        <input
                            type="password"
                            placeholder="Password"
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            prop:value=password
                            class="input input-bordered"
                            required
                        />
                        <button type="submit" class="btn btn-primary mt-4">"Register"</button>
                    </form>
                </div>
            </div>
        </div>
    }
}
