use crate::auth::use_auth;
use crate::components::feedback::{ErrorMessage, apply_outcome};
use crate::web::dialog;
use crate::web::router::use_router;
use crate::web::{spawn_scoped, use_view_scope};
use leptos::prelude::*;
use moviehub::AppRoute;
use moviehub::views::detail::{
    DeleteStep, MovieDetail, begin_delete, confirm_delete, load_detail, shows_owner_actions,
};

#[component]
pub fn MovieDetailPage(id: String) -> impl IntoView {
    let auth = use_auth();
    let router = use_router();
    let scope = use_view_scope();

    let (movie, set_movie) = signal(Option::<MovieDetail>::None);
    let (error, set_error) = signal(Option::<String>::None);
    let nav_message = router.nav_message();
    let show_actions = move || shows_owner_actions(&auth.state.get());

    let api = auth.api();
    let movie_id = id.clone();
    spawn_scoped(scope, async move {
        match load_detail(&api, &movie_id).await {
            Ok(detail) => set_movie.set(Some(detail)),
            Err(message) => set_error.set(Some(message)),
        }
    });

    let edit_id = id.clone();
    let on_edit = move |_| router.navigate(AppRoute::EditMovie(edit_id.clone()));

    let on_delete = move |_| match begin_delete(&auth.state.get_untracked()) {
        DeleteStep::Denied(outcome) => apply_outcome(outcome, router, set_error),
        DeleteStep::Confirm(question) => {
            if !dialog::confirm(question) {
                return;
            }
            let api = auth.api();
            let id = id.clone();
            spawn_scoped(scope, async move {
                let outcome = confirm_delete(&api, &id).await;
                apply_outcome(outcome, router, set_error);
            });
        }
    };

    view! {
        <div class="max-w-5xl mx-auto p-4 md:p-8 space-y-4">
            <ErrorMessage message=error />
            <ErrorMessage message=nav_message />
            {move || movie.get().map(|m| view! {
                <div class="card lg:card-side bg-base-100 shadow-xl">
                    <figure class="lg:w-1/3">
                        <img src=m.poster alt=m.title.clone() class="w-full object-cover" />
                    </figure>
                    <div class="card-body lg:w-2/3">
                        <h1 class="card-title text-3xl">{m.title}</h1>
                        <p>{m.description}</p>
                        <p><strong>"Review: "</strong>{m.review}</p>
                        <p><strong>"Rating: "</strong>{m.rating}</p>
                    </div>
                </div>
            })}
            <Show when=show_actions>
                <div class="flex gap-2">
                    <button class="btn btn-primary" on:click=on_edit.clone()>"Edit"</button>
                    <button class="btn btn-error" on:click=on_delete.clone()>"Delete"</button>
                </div>
            </Show>
        </div>
    }
}
