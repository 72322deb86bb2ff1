//! 宽松的反序列化辅助函数
//!
//! 服务端以 multipart 文本字段接收评分，存储后可能返回数字，也可能返回字符串。
//! 记录的 id 可能同时以 `_id` 和 `id` 出现，也可能是 `{"$oid": ...}` 这样的对象。

use crate::{MovieRecord, Rating, User};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};
use std::fmt;

struct RatingVisitor;

impl<'de> Visitor<'de> for RatingVisitor {
    type Value = Option<Rating>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a rating as number, numeric string or null")
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_some<D: Deserializer<'de>>(self, d: D) -> Result<Self::Value, D::Error> {
        d.deserialize_any(self)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(Rating::from_raw(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(u64::try_from(v).ok().and_then(Rating::from_raw))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        if v.is_finite() && v >= 1.0 {
            Ok(Rating::from_raw(v.round() as u64))
        } else {
            Ok(None)
        }
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        let v = v.trim();
        if v.is_empty() {
            return Ok(None);
        }
        match v.parse::<f64>() {
            Ok(n) => self.visit_f64(n),
            Err(_) => Ok(None),
        }
    }
}

/// 评分字段：接受数字、数字字符串或 null，非法值视为"无评分"
pub fn lenient_rating<'de, D>(d: D) -> Result<Option<Rating>, D::Error>
where
    D: Deserializer<'de>,
{
    d.deserialize_option(RatingVisitor)
}

/// 单个 id 值转为字符串：字符串、数字或 `{"$oid": ...}`
fn id_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Object(map) => map.get("$oid").and_then(id_string),
        _ => None,
    }
}

/// 从记录对象中取 id，`_id` 优先
pub fn record_id(map: &Map<String, Value>) -> Option<String> {
    map.get("_id")
        .and_then(id_string)
        .or_else(|| map.get("id").and_then(id_string))
}

/// `user` 字段：按真值语义解释，见 [`User::from_json`]
pub fn truthy_user<'de, D>(d: D) -> Result<Option<User>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(d)?;
    Ok(User::from_json(&value))
}

/// 文本字段：`null` 视为空串，数字和布尔值按字面转换
fn lenient_text<'de, D>(d: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(d)? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    })
}

/// 可选文本字段：非字符串一律视为缺失
fn lenient_opt_text<'de, D>(d: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(d)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

/// [`MovieRecord`] 的线上形态
#[derive(Deserialize)]
pub struct RawMovieRecord {
    #[serde(rename = "_id", default)]
    mongo_id: Option<Value>,
    #[serde(default)]
    id: Option<Value>,
    #[serde(default, deserialize_with = "lenient_text")]
    title: String,
    #[serde(default, deserialize_with = "lenient_text")]
    description: String,
    #[serde(default, deserialize_with = "lenient_opt_text")]
    review: Option<String>,
    #[serde(default, deserialize_with = "lenient_rating")]
    rating: Option<Rating>,
    #[serde(default, deserialize_with = "lenient_opt_text")]
    image: Option<String>,
}

impl From<RawMovieRecord> for MovieRecord {
    fn from(raw: RawMovieRecord) -> Self {
        let id = raw
            .mongo_id
            .as_ref()
            .and_then(id_string)
            .or_else(|| raw.id.as_ref().and_then(id_string))
            .unwrap_or_default();
        MovieRecord {
            id,
            title: raw.title,
            description: raw.description,
            review: raw.review,
            rating: raw.rating,
            image: raw.image,
        }
    }
}
