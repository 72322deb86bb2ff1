//! 影片表单状态
//!
//! 将零散的 signal 整合为 `FormState`，负责数据的持有、预填以及到草稿的转换。

use leptos::prelude::*;
use moviehub::{ImageUpload, MovieDraft};

/// `RwSignal` 是 `Copy`，适合作为 Props 在组件间传递
#[derive(Clone, Copy)]
pub struct FormState {
    pub title: RwSignal<String>,
    pub description: RwSignal<String>,
    pub review: RwSignal<String>,
    /// 数字输入框的原始文本
    pub rating: RwSignal<String>,
    pub image: RwSignal<Option<ImageUpload>>,
}

impl FormState {
    pub fn new() -> Self {
        Self {
            title: RwSignal::new(String::new()),
            description: RwSignal::new(String::new()),
            review: RwSignal::new(String::new()),
            rating: RwSignal::new(String::new()),
            image: RwSignal::new(None),
        }
    }

    /// 用已保存的数据预填（编辑页）
    pub fn fill(&self, draft: &MovieDraft) {
        self.title.set(draft.title.clone());
        self.description.set(draft.description.clone());
        self.review.set(draft.review.clone());
        self.rating
            .set(draft.rating.map(|r| r.to_string()).unwrap_or_default());
        self.image.set(None);
    }

    pub fn to_draft(&self) -> MovieDraft {
        MovieDraft {
            title: self.title.get_untracked(),
            description: self.description.get_untracked(),
            review: self.review.get_untracked(),
            rating: self.rating.get_untracked().trim().parse().ok(),
            image: self.image.get_untracked(),
        }
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}
