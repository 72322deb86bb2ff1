//! 页面作用域：页面卸载后，尚未返回的请求全部作废

use futures::future::{AbortHandle, Abortable};
use std::cell::RefCell;
use std::future::Future;

pub use futures::future::Aborted;

/// 每个页面持有一个作用域
///
/// 经 [`ViewScope::track`] 包装的 future 在 `cancel()` 或作用域被 drop 后
/// 立即以 `Err(Aborted)` 结束，迟到的响应不会再写入已卸载页面的状态。
#[derive(Default)]
pub struct ViewScope {
    handles: RefCell<Vec<AbortHandle>>,
}

impl ViewScope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn track<F: Future>(&self, fut: F) -> Abortable<F> {
        let (handle, registration) = AbortHandle::new_pair();
        let mut handles = self.handles.borrow_mut();
        handles.retain(|h| !h.is_aborted());
        handles.push(handle);
        Abortable::new(fut, registration)
    }

    /// 只观察作用域是否已取消，不包装任何 future
    ///
    /// 用于必须执行完毕的操作（例如写入会话）：操作照常完成，
    /// 只有回写页面的那一步先检查 [`ScopeWatch::is_cancelled`]。
    pub fn watch(&self) -> ScopeWatch {
        let (handle, _) = AbortHandle::new_pair();
        let mut handles = self.handles.borrow_mut();
        handles.retain(|h| !h.is_aborted());
        handles.push(handle.clone());
        ScopeWatch { handle }
    }

    pub fn cancel(&self) {
        let handles = std::mem::take(&mut *self.handles.borrow_mut());
        if !handles.is_empty() {
            log_info!("[Scope] aborting {} pending request(s)", handles.len());
        }
        for handle in handles {
            handle.abort();
        }
    }

    pub fn pending(&self) -> usize {
        self.handles.borrow().len()
    }
}

#[derive(Clone)]
pub struct ScopeWatch {
    handle: AbortHandle,
}

impl ScopeWatch {
    pub fn is_cancelled(&self) -> bool {
        self.handle.is_aborted()
    }
}

impl Drop for ViewScope {
    fn drop(&mut self) {
        self.cancel();
    }
}
