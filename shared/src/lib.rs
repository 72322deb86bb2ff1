use serde::{Deserialize, Serialize};
use serde_json::Value;

pub mod protocol;
pub mod serde_helper;

// =========================================================
// 常量定义 (Constants)
// =========================================================

pub const PATH_MOVIES: &str = "/api/movies";
pub const PATH_LOGIN: &str = "/api/login";
pub const PATH_LOGOUT: &str = "/api/logout";
pub const PATH_REGISTER: &str = "/api/register";
pub const PATH_USER: &str = "/api/user";
pub const PATH_OAUTH_GOOGLE: &str = "/auth/google";

/// 评分上限（星级数量）
pub const MAX_RATING: u8 = 5;

// =========================================================
// 领域模型 (Domain Models)
// =========================================================

/// 1~5 的评分
///
/// 只能通过 [`Rating::new`] 或 [`Rating::from_raw`] 构造，保证取值范围。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Rating(u8);

impl Rating {
    /// 严格构造：仅接受 1..=5
    pub fn new(value: u8) -> Option<Self> {
        (1..=MAX_RATING).contains(&value).then_some(Self(value))
    }

    /// 宽松构造：用于服务端返回的数据
    ///
    /// 0 视为"无评分"，超过上限的值截断为 5。
    pub fn from_raw(value: u64) -> Option<Self> {
        match value {
            0 => None,
            v => Some(Self(v.min(MAX_RATING as u64) as u8)),
        }
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 当前登录用户
///
/// 客户端只关心"是否存在"，字段全部可选，未知字段忽略。
/// 反序列化走 [`User::from_json`]，`_id`/`id` 同时出现或 id 不是字符串都不会报错。
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl User {
    /// 按真值语义解释服务端返回的用户体
    ///
    /// `null`、`false`、`0`、`""` 表示没有用户；对象按字段尽力读取；
    /// 其余真值视为一个匿名身份的用户。
    pub fn from_json(value: &Value) -> Option<User> {
        match value {
            Value::Null | Value::Bool(false) => None,
            Value::String(s) if s.is_empty() => None,
            Value::Number(n) if n.as_f64() == Some(0.0) => None,
            Value::Object(map) => Some(User {
                id: serde_helper::record_id(map),
                name: map.get("name").and_then(Value::as_str).map(str::to_string),
                email: map.get("email").and_then(Value::as_str).map(str::to_string),
            }),
            _ => Some(User::default()),
        }
    }
}

impl<'de> Deserialize<'de> for User {
    fn deserialize<D: serde::Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(d)?;
        Ok(User::from_json(&value).unwrap_or_default())
    }
}

/// 服务端的电影记录
///
/// 解码经过 [`serde_helper::RawMovieRecord`]：id 取 `_id` 或 `id`，
/// 标题和简介为 `null` 时按空串处理，保证单条异常记录不会拖垮整个列表。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "serde_helper::RawMovieRecord")]
pub struct MovieRecord {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<Rating>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl MovieRecord {
    /// 非空的影评文本
    pub fn review_text(&self) -> Option<&str> {
        self.review.as_deref().filter(|r| !r.is_empty())
    }

    /// 非空的海报地址
    pub fn image_url(&self) -> Option<&str> {
        self.image.as_deref().filter(|i| !i.is_empty())
    }
}

// =========================================================
// 请求/响应体 (Bodies)
// =========================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default, deserialize_with = "serde_helper::truthy_user")]
    pub user: Option<User>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// 服务端的通用消息体 `{ "message": "..." }`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}
