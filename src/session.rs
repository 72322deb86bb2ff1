//! 会话状态机
//!
//! `Uninitialized` --initialize--> `Anonymous` | `Authenticated`
//! `*` --login 成功--> `Authenticated`，`Authenticated` --logout 成功--> `Anonymous`
//!
//! 三个写操作通过同一把异步锁串行执行，写入后同步通知所有观察者。

use crate::api::MovieApi;
use crate::request::HttpClient;
use futures::lock::Mutex;
use moviehub_shared::User;
use std::cell::{Cell, RefCell};

#[derive(Debug, Clone, Default, PartialEq)]
pub enum SessionState {
    /// 启动探测尚未结束
    #[default]
    Uninitialized,
    Anonymous,
    Authenticated(User),
}

impl SessionState {
    pub fn is_initializing(&self) -> bool {
        matches!(self, Self::Uninitialized)
    }

    pub fn current_user(&self) -> Option<&User> {
        match self {
            Self::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_user().is_some()
    }
}

type Observer = Box<dyn Fn(&SessionState)>;

pub struct SessionStore<C> {
    api: MovieApi<C>,
    state: RefCell<SessionState>,
    gate: Mutex<()>,
    initialize_called: Cell<bool>,
    observers: RefCell<Vec<Observer>>,
}

impl<C: HttpClient> SessionStore<C> {
    pub fn new(api: MovieApi<C>) -> Self {
        Self {
            api,
            state: RefCell::new(SessionState::Uninitialized),
            gate: Mutex::new(()),
            initialize_called: Cell::new(false),
            observers: RefCell::new(Vec::new()),
        }
    }

    pub fn api(&self) -> &MovieApi<C> {
        &self.api
    }

    pub fn state(&self) -> SessionState {
        self.state.borrow().clone()
    }

    pub fn current_user(&self) -> Option<User> {
        self.state.borrow().current_user().cloned()
    }

    /// 注册观察者，每次状态写入后同步回调
    pub fn subscribe(&self, observer: impl Fn(&SessionState) + 'static) {
        self.observers.borrow_mut().push(Box::new(observer));
    }

    fn set_state(&self, next: SessionState) {
        *self.state.borrow_mut() = next;
        let snapshot = self.state();
        for observer in self.observers.borrow().iter() {
            observer(&snapshot);
        }
    }

    /// 启动时探测已有会话，整个生命周期只执行一次
    ///
    /// 无论探测结果如何，结束后都不再处于 `Uninitialized`。
    pub async fn initialize(&self) {
        if self.initialize_called.replace(true) {
            log_info!("[Session] initialize already ran, ignoring");
            return;
        }

        let _guard = self.gate.lock().await;
        if !self.state.borrow().is_initializing() {
            log_info!("[Session] state already written, skipping probe");
            return;
        }

        let next = match self.api.probe_session().await {
            Ok(Some(user)) => {
                log_info!("[Session] restored session for {:?}", user.email);
                SessionState::Authenticated(user)
            }
            Ok(None) => SessionState::Anonymous,
            Err(e) => {
                log_error!("[Session] probe failed: {}", e);
                SessionState::Anonymous
            }
        };
        self.set_state(next);
    }

    /// 邮箱密码登录
    ///
    /// 仅当服务端返回 2xx 且响应体带有 `user` 时返回 `true`；失败时状态不变。
    pub async fn login(&self, email: &str, password: &str) -> bool {
        let _guard = self.gate.lock().await;
        match self.api.login(email, password).await {
            Ok(Some(user)) => {
                log_info!("[Session] logged in as {:?}", user.email);
                self.set_state(SessionState::Authenticated(user));
                true
            }
            Ok(None) => {
                log_warn!("[Session] login response carried no user");
                false
            }
            Err(e) => {
                log_warn!("[Session] login failed: {}", e);
                false
            }
        }
    }

    /// 注销；失败时状态不变
    pub async fn logout(&self) -> bool {
        let _guard = self.gate.lock().await;
        match self.api.logout().await {
            Ok(()) => {
                log_info!("[Session] logged out");
                self.set_state(SessionState::Anonymous);
                true
            }
            Err(e) => {
                log_error!("[Session] logout failed: {}", e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests;
