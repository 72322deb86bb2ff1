//! 新建 / 编辑影片表单
//!
//! 新建表单只依赖输入框的 `required` 属性；编辑表单在提交前显式检查四个字段。

use super::Outcome;
use crate::api::MovieApi;
use crate::draft::MovieDraft;
use crate::request::HttpClient;
use crate::route::{AppRoute, Navigation};
use crate::session::SessionState;

pub const CREATE_FAILED: &str = "Failed to add movie. Please try again.";
pub const EDIT_FETCH_FAILED: &str = "Failed to fetch movie data.";
pub const EDIT_REQUIRED: &str = "Title, description, review, and rating are required.";
pub const EDIT_FORBIDDEN: &str = "You are not authorized to update this movie.";
pub const EDIT_FAILED: &str = "Failed to update movie.";

// =========================================================
// 新建
// =========================================================

pub async fn submit_create<C: HttpClient>(api: &MovieApi<C>, draft: &MovieDraft) -> Outcome {
    match api.create_movie(draft).await {
        Ok(_) => Outcome::navigate(AppRoute::Home),
        Err(e) => {
            log_error!("[AddMovie] {}", e);
            Outcome::inline(e.user_message(CREATE_FAILED))
        }
    }
}

// =========================================================
// 编辑
// =========================================================

/// 编辑表单的初始数据
#[derive(Debug, Clone, PartialEq)]
pub struct EditForm {
    pub draft: MovieDraft,
    /// 当前海报地址，仅用于预览
    pub current_image: Option<String>,
}

/// 挂载编辑页
///
/// 没有登录用户时直接跳转登录页，不发任何请求；读取失败时提示并回到首页。
pub async fn mount_edit<C: HttpClient>(
    session: &SessionState,
    api: &MovieApi<C>,
    id: &str,
) -> Result<EditForm, Outcome> {
    if !session.is_authenticated() {
        return Err(Outcome::navigate(AppRoute::Login));
    }

    match api.get_movie(id).await {
        Ok(movie) => Ok(EditForm {
            draft: MovieDraft::from_record(&movie),
            current_image: movie.image_url().map(str::to_string),
        }),
        Err(e) => {
            log_error!("[EditMovie] {}", e);
            Err(Outcome::inline(EDIT_FETCH_FAILED).then_navigate(AppRoute::Home))
        }
    }
}

/// 字段存在性检查：空串不通过，只含空白的内容照常放行
pub fn validate_edit(draft: &MovieDraft) -> Result<(), Outcome> {
    if draft.title.is_empty() || draft.description.is_empty() || draft.review.is_empty() {
        return Err(Outcome::inline(EDIT_REQUIRED));
    }
    match draft.rating {
        Some(r) if r > 0 => Ok(()),
        _ => Err(Outcome::inline(EDIT_REQUIRED)),
    }
}

pub async fn submit_edit<C: HttpClient>(api: &MovieApi<C>, id: &str, draft: &MovieDraft) -> Outcome {
    if let Err(out) = validate_edit(draft) {
        return out;
    }

    let detail = AppRoute::MovieDetail(id.to_string());
    match api.update_movie(id, draft).await {
        Ok(_) => Outcome::navigate(detail),
        Err(e) if e.is_forbidden() => {
            Outcome::inline(EDIT_FORBIDDEN).then_navigate(Navigation::with_state(detail, EDIT_FORBIDDEN))
        }
        Err(e) => {
            log_error!("[EditMovie] {}", e);
            Outcome::inline(EDIT_FAILED)
        }
    }
}
