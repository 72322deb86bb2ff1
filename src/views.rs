//! 页面控制逻辑
//!
//! 每个页面的加载与提交都在这里完成，结果统一转换为可渲染的 [`Outcome`]，
//! 前端组件只负责把它落到 DOM 上：弹窗、行内提示或跳转。

use crate::route::Navigation;

pub mod auth_forms;
pub mod detail;
pub mod header;
pub mod home;
pub mod movie_form;

/// 缺少影评时的兜底文案
pub const NO_REVIEW: &str = "No review available";
/// 缺少评分时的兜底文案
pub const NO_RATING: &str = "No rating available";

/// 失败提示的展示渠道
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
    /// 页面内的错误文字
    Inline(String),
    /// 阻塞式弹窗
    Alert(String),
}

/// 一次用户操作的结果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outcome {
    pub feedback: Option<Feedback>,
    pub navigate: Option<Navigation>,
}

impl Outcome {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn navigate(to: impl Into<Navigation>) -> Self {
        Self {
            feedback: None,
            navigate: Some(to.into()),
        }
    }

    pub fn inline(message: impl Into<String>) -> Self {
        Self {
            feedback: Some(Feedback::Inline(message.into())),
            navigate: None,
        }
    }

    pub fn alert(message: impl Into<String>) -> Self {
        Self {
            feedback: Some(Feedback::Alert(message.into())),
            navigate: None,
        }
    }

    pub fn then_navigate(mut self, to: impl Into<Navigation>) -> Self {
        self.navigate = Some(to.into());
        self
    }

    pub fn inline_message(&self) -> Option<&str> {
        match &self.feedback {
            Some(Feedback::Inline(msg)) => Some(msg),
            _ => None,
        }
    }

    pub fn alert_message(&self) -> Option<&str> {
        match &self.feedback {
            Some(Feedback::Alert(msg)) => Some(msg),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route::AppRoute;

    #[test]
    fn test_outcome_builders() {
        let out = Outcome::inline("nope").then_navigate(AppRoute::Home);
        assert_eq!(out.inline_message(), Some("nope"));
        assert_eq!(out.alert_message(), None);
        assert_eq!(out.navigate, Some(Navigation::to(AppRoute::Home)));

        assert_eq!(Outcome::none(), Outcome::default());
    }
}
