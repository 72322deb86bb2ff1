//! LocalStorage 封装模块
//!
//! 只读：前端唯一使用的键是 API 地址覆盖。

use moviehub::config::API_BASE_STORAGE_KEY;

pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }

    /// 键不存在或存储不可用时返回 `None`
    pub fn get(key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }
}

/// 运行时 API 地址覆盖（开发时在控制台写入即可切换后端）
pub fn api_base_override() -> Option<String> {
    LocalStorage::get(API_BASE_STORAGE_KEY)
}
