//! 状态容器
//!
//! 每个 action 只发一次请求，成功后才写入状态；失败时记录错误、不向上抛。
//! `loading` 在 action 的异步窗口内为 true，任何退出路径都会复位，
//! 包括 action 的 future 被中途丢弃。

pub mod auth_store;
pub mod tests_store;

pub use auth_store::AuthStore;
pub use tests_store::{TestsState, TestsStore};

use std::future::Future;

/// `loading` 标志的守卫，drop 时复位
struct LoadingGuard<'a> {
    flag: &'a mut bool,
}

impl<'a> LoadingGuard<'a> {
    fn start(flag: &'a mut bool) -> Self {
        *flag = true;
        Self { flag }
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        *self.flag = false;
    }
}

/// 在 `loading` 为 true 的窗口内等待请求完成
async fn track<F: Future>(loading: &mut bool, request: F) -> F::Output {
    let _guard = LoadingGuard::start(loading);
    request.await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_resets_flag_on_drop() {
        let mut loading = false;
        {
            let guard = LoadingGuard::start(&mut loading);
            assert!(*guard.flag);
        }
        assert!(!loading);
    }

    #[tokio::test]
    async fn test_track_returns_output() {
        let mut loading = false;
        let value = track(&mut loading, async { 42 }).await;
        assert_eq!(value, 42);
        assert!(!loading);
    }
}
