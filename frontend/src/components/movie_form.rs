//! 新建 / 编辑共用的表单字段

mod form_state;

pub use form_state::FormState;

use leptos::prelude::*;
use leptos::task::spawn_local;
use moviehub::ImageUpload;
use moviehub_shared::MAX_RATING;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, HtmlInputElement};

/// 读取用户选择的海报文件
async fn read_image(file: File) -> Option<ImageUpload> {
    let buffer = JsFuture::from(file.array_buffer()).await.ok()?;
    Some(ImageUpload {
        file_name: file.name(),
        content_type: file.type_(),
        bytes: js_sys::Uint8Array::new(&buffer).to_vec(),
    })
}

fn selected_file(ev: &leptos::ev::Event) -> Option<File> {
    ev.target()?
        .dyn_into::<HtmlInputElement>()
        .ok()?
        .files()?
        .get(0)
}

/// 表单字段
///
/// 新建页所有输入框（含海报）都带 `required`；编辑页海报可不选。
#[component]
pub fn MovieFormFields(state: FormState, image_required: bool) -> impl IntoView {
    let on_image = move |ev: leptos::ev::Event| {
        let Some(file) = selected_file(&ev) else {
            return;
        };
        spawn_local(async move {
            match read_image(file).await {
                Some(image) => state.image.set(Some(image)),
                None => web_sys::console::error_1(&"[MovieForm] failed to read image".into()),
            }
        });
    };

    view! {
        <div class="form-control">
            <label for="title" class="label"><span class="label-text">"Title"</span></label>
            <input id="title" required
                type="text"
                placeholder="Enter movie title"
                on:input=move |ev| state.title.set(event_target_value(&ev))
                prop:value=move || state.title.get()
                class="input input-bordered w-full"
            />
        </div>
        <div class="form-control">
            <label for="description" class="label"><span class="label-text">"Description"</span></label>
            <textarea id="description" required
                placeholder="Enter movie description"
                on:input=move |ev| state.description.set(event_target_value(&ev))
                prop:value=move || state.description.get()
                class="textarea textarea-bordered w-full"
            ></textarea>
        </div>
        <div class="form-control">
            <label for="review" class="label"><span class="label-text">"Review"</span></label>
            <textarea id="review" required
                placeholder="Write your review here"
                on:input=move |ev| state.review.set(event_target_value(&ev))
                prop:value=move || state.review.get()
                class="textarea textarea-bordered w-full"
            ></textarea>
        </div>
        <div class="form-control">
            <label for="rating" class="label"><span class="label-text">"Rating"</span></label>
            <input id="rating" required
                type="number"
                min="1"
                max=MAX_RATING.to_string()
                placeholder="Rate the movie (1-5)"
                on:input=move |ev| state.rating.set(event_target_value(&ev))
                prop:value=move || state.rating.get()
                class="input input-bordered w-full"
            />
        </div>
        <div class="form-control">
            <label for="image" class="label"><span class="label-text">"Poster"</span></label>
            <input id="image"
                type="file"
                accept="image/*"
                required=image_required
                on:change=on_image
                class="file-input file-input-bordered w-full"
            />
        </div>
    }
}
