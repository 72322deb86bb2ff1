use crate::auth::use_auth;
use crate::web::router::use_router;
use crate::web::{spawn_scoped, use_view_scope};
use leptos::prelude::*;
use moviehub::views::home::{HomeView, MovieCard, load_home};

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = use_auth();
    let scope = use_view_scope();
    let (home, set_home) = signal(Option::<HomeView>::None);

    let api = auth.api();
    spawn_scoped(scope, async move {
        set_home.set(Some(load_home(&api).await));
    });

    view! {
        <div class="max-w-7xl mx-auto p-4 md:p-8 space-y-6">
            <h1 class="text-3xl font-bold">"Movie Recommendations & Reviews"</h1>
            {move || match home.get() {
                None => view! {
                    <div class="flex justify-center py-16">
                        <span class="loading loading-spinner loading-lg text-primary"></span>
                    </div>
                }
                .into_any(),
                Some(home) => {
                    let placeholder = home.empty_placeholder();
                    view! {
                        {home.error.map(|message| view! {
                            <div role="alert" class="alert alert-error"><strong>{message}</strong></div>
                        })}
                        {placeholder.map(|text| view! {
                            <p class="text-center text-2xl text-base-content/60">{text}</p>
                        })}
                        <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-6">
                            {home.cards.into_iter().map(|card| view! { <MovieCardView card=card /> }).collect_view()}
                        </div>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}

#[component]
fn MovieCardView(card: MovieCard) -> impl IntoView {
    let router = use_router();
    let MovieCard {
        title,
        description,
        review,
        rating,
        poster,
        target,
        ..
    } = card;

    view! {
        <div class="card bg-base-100 shadow-xl">
            <figure>
                <img src=poster alt=title.clone() class="h-96 w-full object-cover" />
            </figure>
            <div class="card-body">
                <h2 class="card-title">{title}</h2>
                <p>{description}</p>
                <div>
                    <strong>"Review:"</strong>
                    <p>{review}</p>
                    <strong>"Rating:"</strong>
                    <p>{rating}</p>
                </div>
                <div class="card-actions justify-end">
                    <button class="btn btn-primary" on:click=move |_| router.navigate(target.clone())>
                        "Learn More"
                    </button>
                </div>
            </div>
        </div>
    }
}
