//! 会话状态
//!
//! 只保存在内存里，进程退出即丢失；token 与 role 总是一起设置、一起清除

use std::sync::{Arc, PoisonError, RwLock};

/// 当前登录用户的会话
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    token: Option<String>,
    role: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// 设置登录信息，不校验 token 和 role 的格式
    pub fn set_user(&mut self, token: impl Into<String>, role: impl Into<String>) {
        self.token = Some(token.into());
        self.role = Some(role.into());
    }

    pub fn clear_user(&mut self) {
        self.token = None;
        self.role = None;
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn role(&self) -> Option<&str> {
        self.role.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

/// 可共享的会话句柄
///
/// HTTP 客户端、store 和路由守卫持有同一个句柄；锁只在读写瞬间持有
#[derive(Debug, Clone, Default)]
pub struct SessionHandle {
    inner: Arc<RwLock<Session>>,
}

impl SessionHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// 当前会话的副本
    pub fn snapshot(&self) -> Session {
        self.inner.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    pub fn token(&self) -> Option<String> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .token
            .clone()
    }

    pub fn set_user(&self, token: impl Into<String>, role: impl Into<String>) {
        self.inner
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .set_user(token, role);
    }

    pub fn clear_user(&self) {
        self.inner
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear_user();
    }
}
