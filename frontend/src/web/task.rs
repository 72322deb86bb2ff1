//! 绑定页面生命周期的异步任务

use leptos::prelude::*;
use leptos::task::spawn_local;
use moviehub::ViewScope;
use std::future::Future;

pub type ScopeHandle = StoredValue<ViewScope, LocalStorage>;

/// 为当前组件创建请求作用域，组件卸载时中止尚未完成的请求
pub fn use_view_scope() -> ScopeHandle {
    let scope = StoredValue::new_local(ViewScope::new());
    on_cleanup(move || {
        scope.try_with_value(ViewScope::cancel);
    });
    scope
}

/// 在作用域内启动任务；被中止的任务不会再写入页面状态
pub fn spawn_scoped(scope: ScopeHandle, fut: impl Future<Output = ()> + 'static) {
    let Some(tracked) = scope.try_with_value(move |s| s.track(fut)) else {
        return;
    };
    spawn_local(async move {
        if tracked.await.is_err() {
            web_sys::console::log_1(&"[Task] request aborted after unmount".into());
        }
    });
}

/// 操作本身总会执行完毕，只有 `apply` 受作用域约束
///
/// 会话写入这类操作必须落地，即使发起它的页面已经卸载。
pub fn spawn_detached<T: 'static>(
    scope: ScopeHandle,
    op: impl Future<Output = T> + 'static,
    apply: impl FnOnce(T) + 'static,
) {
    let watch = scope.try_with_value(ViewScope::watch);
    spawn_local(async move {
        let value = op.await;
        match watch {
            Some(watch) if !watch.is_cancelled() => apply(value),
            _ => web_sys::console::log_1(&"[Task] page gone, result not applied".into()),
        }
    });
}
