//! 首页：影片卡片列表

use super::{NO_RATING, NO_REVIEW};
use crate::api::MovieApi;
use crate::request::HttpClient;
use crate::route::AppRoute;
use moviehub_shared::{MAX_RATING, MovieRecord, Rating};

pub const POSTER_PLACEHOLDER: &str = "https://via.placeholder.com/280x420";
pub const FETCH_FAILED: &str = "Error fetching movies";
pub const EMPTY_LIST: &str = "No movies available";

const STAR_FILLED: char = '⭐';
const STAR_EMPTY: char = '☆';

/// 评分转为 5 个字符的星级串
pub fn render_stars(rating: Rating) -> String {
    (0..MAX_RATING)
        .map(|i| if i < rating.value() { STAR_FILLED } else { STAR_EMPTY })
        .collect()
}

/// 卡片上的评分文字：星级串或兜底文案
pub fn rating_stars(rating: Option<Rating>) -> String {
    rating
        .map(render_stars)
        .unwrap_or_else(|| NO_RATING.to_string())
}

#[derive(Debug, Clone, PartialEq)]
pub struct MovieCard {
    pub id: String,
    pub title: String,
    pub description: String,
    pub review: String,
    pub rating: String,
    pub poster: String,
    /// "Learn More" 的跳转目标
    pub target: AppRoute,
}

impl From<&MovieRecord> for MovieCard {
    fn from(movie: &MovieRecord) -> Self {
        Self {
            id: movie.id.clone(),
            title: movie.title.clone(),
            description: movie.description.clone(),
            review: movie.review_text().unwrap_or(NO_REVIEW).to_string(),
            rating: rating_stars(movie.rating),
            poster: movie.image_url().unwrap_or(POSTER_PLACEHOLDER).to_string(),
            target: AppRoute::MovieDetail(movie.id.clone()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HomeView {
    pub cards: Vec<MovieCard>,
    pub error: Option<String>,
}

impl HomeView {
    /// 列表为空时显示的唯一占位文字（加载失败时同样为空列表）
    pub fn empty_placeholder(&self) -> Option<&'static str> {
        self.cards.is_empty().then_some(EMPTY_LIST)
    }
}

/// 加载首页数据；失败时列表保持为空并带上错误横幅
pub async fn load_home<C: HttpClient>(api: &MovieApi<C>) -> HomeView {
    match api.list_movies().await {
        Ok(movies) => HomeView {
            cards: movies.iter().map(MovieCard::from).collect(),
            error: None,
        },
        Err(e) => {
            log_error!("[Home] {}", e);
            HomeView {
                cards: Vec::new(),
                error: Some(FETCH_FAILED.to_string()),
            }
        }
    }
}
