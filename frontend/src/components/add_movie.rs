use crate::auth::use_auth;
use crate::components::feedback::{ErrorMessage, apply_outcome};
use crate::components::movie_form::{FormState, MovieFormFields};
use crate::web::router::use_router;
use crate::web::{spawn_scoped, use_view_scope};
use leptos::prelude::*;
use moviehub::views::movie_form::submit_create;

#[component]
pub fn AddMoviePage() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();
    let scope = use_view_scope();

    let state = FormState::new();
    let (error, set_error) = signal(Option::<String>::None);
    let (is_submitting, set_is_submitting) = signal(false);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        set_error.set(None);
        set_is_submitting.set(true);

        let api = auth.api();
        let draft = state.to_draft();
        spawn_scoped(scope, async move {
            let outcome = submit_create(&api, &draft).await;
            set_is_submitting.set(false);
            apply_outcome(outcome, router, set_error);
        });
    };

    view! {
        <div class="max-w-2xl mx-auto p-4 md:p-8">
            <div class="card bg-base-100 shadow-xl">
                <form class="card-body" on:submit=on_submit>
                    <h2 class="card-title text-2xl">"Add New Movie"</h2>
                    <ErrorMessage message=error />
                    <MovieFormFields state=state image_required=true />
                    <div class="form-control mt-6">
                        <button type="submit" class="btn btn-primary" disabled=move || is_submitting.get()>
                            "Add Movie"
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
