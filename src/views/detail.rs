//! 影片详情页：展示、删除

use super::{NO_RATING, NO_REVIEW, Outcome};
use crate::api::MovieApi;
use crate::request::HttpClient;
use crate::route::{AppRoute, Navigation};
use crate::session::SessionState;
use moviehub_shared::{MAX_RATING, MovieRecord, Rating};

pub const POSTER_PLACEHOLDER: &str = "https://via.placeholder.com/300x450";
pub const FETCH_FAILED: &str = "Error fetching movie details";
pub const DELETE_CONFIRM: &str = "Are you sure you want to delete this movie?";
pub const DELETE_WITHOUT_USER: &str = "You are not authorized to delete the movie";
pub const DELETE_FORBIDDEN: &str = "You are not authorized to delete this movie";
pub const DELETE_FAILED: &str = "Failed to delete movie.";

/// "{r} / 5" 或兜底文案
pub fn rating_label(rating: Option<Rating>) -> String {
    match rating {
        Some(r) => format!("{} / {}", r, MAX_RATING),
        None => NO_RATING.to_string(),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MovieDetail {
    pub id: String,
    pub title: String,
    pub description: String,
    pub review: String,
    pub rating: String,
    pub poster: String,
}

impl From<&MovieRecord> for MovieDetail {
    fn from(movie: &MovieRecord) -> Self {
        Self {
            id: movie.id.clone(),
            title: movie.title.clone(),
            description: movie.description.clone(),
            review: movie.review_text().unwrap_or(NO_REVIEW).to_string(),
            rating: rating_label(movie.rating),
            poster: movie.image_url().unwrap_or(POSTER_PLACEHOLDER).to_string(),
        }
    }
}

pub async fn load_detail<C: HttpClient>(api: &MovieApi<C>, id: &str) -> Result<MovieDetail, String> {
    api.get_movie(id)
        .await
        .map(|movie| MovieDetail::from(&movie))
        .map_err(|e| {
            log_error!("[Detail] {}", e);
            FETCH_FAILED.to_string()
        })
}

/// 编辑/删除按钮只在有登录用户时渲染
pub fn shows_owner_actions(session: &SessionState) -> bool {
    session.is_authenticated()
}

/// 点击删除后的第一步
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteStep {
    /// 未登录，直接给出提示，不发请求
    Denied(Outcome),
    /// 需要用户确认，携带确认文案
    Confirm(&'static str),
}

pub fn begin_delete(session: &SessionState) -> DeleteStep {
    if session.is_authenticated() {
        DeleteStep::Confirm(DELETE_CONFIRM)
    } else {
        DeleteStep::Denied(Outcome::inline(DELETE_WITHOUT_USER))
    }
}

/// 用户确认后执行删除
///
/// 403 时回到详情页并带上提示；其他失败只在页面内提示，不跳转。
pub async fn confirm_delete<C: HttpClient>(api: &MovieApi<C>, id: &str) -> Outcome {
    match api.delete_movie(id).await {
        Ok(()) => Outcome::navigate(AppRoute::Home),
        Err(e) if e.is_forbidden() => Outcome::inline(DELETE_FORBIDDEN).then_navigate(
            Navigation::with_state(AppRoute::MovieDetail(id.to_string()), DELETE_FORBIDDEN),
        ),
        Err(e) => {
            log_error!("[Detail] delete failed: {}", e);
            Outcome::inline(e.user_message(DELETE_FAILED))
        }
    }
}
