//! 把页面控制器返回的 [`Outcome`] 落到 DOM 上

use crate::web::dialog;
use crate::web::router::RouterService;
use leptos::prelude::*;
use moviehub::views::{Feedback, Outcome};

pub fn apply_outcome(outcome: Outcome, router: RouterService, set_error: WriteSignal<Option<String>>) {
    match outcome.feedback {
        Some(Feedback::Inline(message)) => set_error.set(Some(message)),
        Some(Feedback::Alert(message)) => dialog::alert(&message),
        None => {}
    }
    if let Some(nav) = outcome.navigate {
        router.navigate(nav);
    }
}

/// 行内错误提示
#[component]
pub fn ErrorMessage(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some()>
            <div role="alert" class="alert alert-error text-sm py-2">
                <span>{move || message.get().unwrap_or_default()}</span>
            </div>
        </Show>
    }
}
