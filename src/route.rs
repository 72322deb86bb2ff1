//! 路由定义模块 - 领域模型
//!
//! 纯粹的业务逻辑层，不依赖于 DOM。
//! 定义了应用的所有路由及其属性，页面控制器通过 [`Navigation`] 表达跳转意图。

use std::fmt::Display;

/// 地址栏里的路径段是转义过的，路由里保存原始 id
fn decode_segment(segment: &str) -> String {
    urlencoding::decode(segment)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| segment.to_string())
}

/// 应用路由枚举
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AppRoute {
    /// 影片列表 (默认路由)
    #[default]
    Home,
    Login,
    Register,
    AddMovie,
    /// 编辑影片 (需要认证)
    EditMovie(String),
    MovieDetail(String),
    /// 页面未找到
    NotFound,
}

impl AppRoute {
    /// 将 URL path 解析为路由枚举
    pub fn from_path(path: &str) -> Self {
        let trimmed = path.trim_end_matches('/');
        let segments: Vec<&str> = trimmed
            .split('/')
            .filter(|s| !s.is_empty())
            .collect();

        match segments.as_slice() {
            [] => Self::Home,
            ["login"] => Self::Login,
            ["register"] => Self::Register,
            ["add-movie"] => Self::AddMovie,
            ["edit-movie", id] => Self::EditMovie(decode_segment(id)),
            ["movie", id] => Self::MovieDetail(decode_segment(id)),
            _ => Self::NotFound,
        }
    }

    /// 获取路由对应的 URL path
    pub fn to_path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::Login => "/login".to_string(),
            Self::Register => "/register".to_string(),
            Self::AddMovie => "/add-movie".to_string(),
            Self::EditMovie(id) => format!("/edit-movie/{}", urlencoding::encode(id)),
            Self::MovieDetail(id) => format!("/movie/{}", urlencoding::encode(id)),
            Self::NotFound => "/404".to_string(),
        }
    }

    /// **核心守卫逻辑：定义该路由是否需要认证**
    pub fn requires_auth(&self) -> bool {
        matches!(self, Self::EditMovie(_))
    }

    /// 获取认证失败时的重定向目标
    pub fn auth_failure_redirect() -> Self {
        Self::Login
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

/// 一次导航：目标路由 + 随导航传递的状态消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    pub route: AppRoute,
    pub state: Option<String>,
}

impl Navigation {
    pub fn to(route: AppRoute) -> Self {
        Self { route, state: None }
    }

    pub fn with_state(route: AppRoute, message: impl Into<String>) -> Self {
        Self {
            route,
            state: Some(message.into()),
        }
    }
}

impl From<AppRoute> for Navigation {
    fn from(route: AppRoute) -> Self {
        Self::to(route)
    }
}
