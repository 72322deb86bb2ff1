use crate::auth::use_auth;
use crate::components::feedback::{ErrorMessage, apply_outcome};
use crate::components::movie_form::{FormState, MovieFormFields};
use crate::web::router::use_router;
use crate::web::{spawn_scoped, use_view_scope};
use leptos::prelude::*;
use moviehub::views::movie_form::{mount_edit, submit_edit};

#[component]
pub fn EditMoviePage(id: String) -> impl IntoView {
    let auth = use_auth();
    let router = use_router();
    let scope = use_view_scope();

    let state = FormState::new();
    let (error, set_error) = signal(Option::<String>::None);
    let (loading, set_loading) = signal(true);
    let (current_image, set_current_image) = signal(Option::<String>::None);

    // 会话检查在读取影片之前
    let api = auth.api();
    let session = auth.state.get_untracked();
    let movie_id = id.clone();
    spawn_scoped(scope, async move {
        match mount_edit(&session, &api, &movie_id).await {
            Ok(form) => {
                state.fill(&form.draft);
                set_current_image.set(form.current_image);
            }
            Err(outcome) => apply_outcome(outcome, router, set_error),
        }
        set_loading.set(false);
    });

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        set_error.set(None);

        let api = auth.api();
        let id = id.clone();
        let draft = state.to_draft();
        spawn_scoped(scope, async move {
            let outcome = submit_edit(&api, &id, &draft).await;
            apply_outcome(outcome, router, set_error);
        });
    };

    view! {
        <div class="max-w-5xl mx-auto p-4 md:p-8">
            <div class="card lg:card-side bg-base-100 shadow-xl">
                <figure class="lg:w-1/3 p-4">
                    {move || current_image.get().map(|src| view! {
                        <img src=src alt="Current poster" class="rounded-box w-full object-cover" />
                    })}
                </figure>
                <form class="card-body lg:w-2/3" on:submit=on_submit>
                    <h2 class="card-title text-2xl">"Edit Movie"</h2>
                    <ErrorMessage message=error />
                    <Show
                        when=move || !loading.get()
                        fallback=|| view! { <span class="loading loading-spinner loading-lg text-primary"></span> }
                    >
                        <MovieFormFields state=state image_required=false />
                    </Show>
                    <div class="form-control mt-6">
                        <button type="submit" class="btn btn-primary" disabled=move || loading.get()>
                            "Update Movie"
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
