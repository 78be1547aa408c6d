//! 认证 store
//!
//! 通过认证 API 登录/登出，并维护会话中的 token 和角色

use crate::api::AuthApi;
use crate::error::{ApiError, ApiResult};
use crate::models::UserProfile;
use crate::session::SessionHandle;
use crate::stores::track;
use tracing::{info, warn};

/// 认证 store
pub struct AuthStore<A> {
    api: A,
    session: SessionHandle,
    profile: Option<UserProfile>,
    loading: bool,
    error: Option<ApiError>,
}

impl<A: AuthApi> AuthStore<A> {
    pub fn new(api: A, session: SessionHandle) -> Self {
        Self {
            api,
            session,
            profile: None,
            loading: false,
            error: None,
        }
    }

    pub fn session(&self) -> &SessionHandle {
        &self.session
    }

    pub fn profile(&self) -> Option<&UserProfile> {
        self.profile.as_ref()
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&ApiError> {
        self.error.as_ref()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error.as_ref().map(ApiError::message)
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// 登录
    ///
    /// 先换取 token，再用它查询角色；两步都成功才写入会话，
    /// 任何一步失败都会清空会话
    ///
    /// # 参数
    /// - `username`: 用户名
    /// - `password`: 密码
    pub async fn login(&mut self, username: &str, password: &str) {
        match track(&mut self.loading, authenticate(&self.api, username, password)).await {
            Ok((token, profile)) => {
                info!("✓ 登录成功: {} ({})", profile.full_name(), profile.role);
                self.session.set_user(token, profile.role.clone());
                self.profile = Some(profile);
            }
            Err(e) => {
                warn!("⚠️ 登录失败: {}", e.message());
                self.session.clear_user();
                self.profile = None;
                self.error = Some(e);
            }
        }
    }

    /// 登出；无论后端是否成功，本地会话都会清空
    pub async fn logout(&mut self) {
        let outcome = track(&mut self.loading, self.api.logout()).await;

        self.session.clear_user();
        self.profile = None;

        if let Err(e) = outcome {
            warn!("⚠️ 登出请求失败: {}", e.message());
            self.error = Some(e);
        } else {
            info!("✓ 已登出");
        }
    }
}

async fn authenticate<A: AuthApi>(api: &A, username: &str, password: &str) -> ApiResult<(String, UserProfile)> {
    let token = api.login(username, password).await?.access_token;
    let profile = api.current_user(&token).await?;
    Ok((token, profile))
}
