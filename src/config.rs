//! 运行时配置
//!
//! API 地址按以下顺序确定：运行时覆盖值 -> 构建时环境变量 -> 默认值。

use moviehub_shared::PATH_OAUTH_GOOGLE;

/// 默认的 API 源地址
pub const DEFAULT_API_BASE: &str = "http://localhost:5000";

/// 浏览器端用于覆盖 API 地址的 LocalStorage 键
pub const API_BASE_STORAGE_KEY: &str = "moviehub_api_base";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim().trim_end_matches('/').to_string();
        Self { base_url }
    }

    /// 解析最终使用的配置
    ///
    /// 构建时环境变量为 `MOVIEHUB_API_BASE`，空字符串的覆盖值视为未设置。
    pub fn resolve(override_url: Option<String>) -> Self {
        Self::resolve_with(override_url, option_env!("MOVIEHUB_API_BASE"))
    }

    fn resolve_with(override_url: Option<String>, build_env: Option<&str>) -> Self {
        let picked = override_url
            .filter(|u| !u.trim().is_empty())
            .or_else(|| {
                build_env
                    .filter(|u| !u.trim().is_empty())
                    .map(str::to_string)
            })
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
        Self::new(picked)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// 第三方登录入口（整页跳转）
    pub fn oauth_url(&self) -> String {
        self.url(PATH_OAUTH_GOOGLE)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}
