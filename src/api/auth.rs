//! 认证资源 API

use crate::api::AuthApi;
use crate::clients::HttpClient;
use crate::config::Config;
use crate::error::ApiResult;
use crate::models::{TokenResponse, UserProfile};
use reqwest::header::AUTHORIZATION;
use reqwest::{Method, RequestBuilder};

/// 基于 HTTP 的认证 API
#[derive(Debug, Clone)]
pub struct HttpAuthApi {
    http: HttpClient,
    prefix: String,
}

impl HttpAuthApi {
    pub fn new(http: HttpClient, config: &Config) -> Self {
        Self {
            http,
            prefix: config.auth_path.trim_end_matches('/').to_string(),
        }
    }

    /// 注销请求
    ///
    /// 后端把 `Authorization` 整个当作 token id 解析，这里只发裸 token，不带 `Bearer ` 前缀
    fn logout_request(&self, path: &str) -> RequestBuilder {
        let builder = self.http.request_with_token(Method::POST, path, None);
        match self.http.session().token() {
            Some(token) => builder.header(AUTHORIZATION, token),
            None => builder,
        }
    }
}

impl AuthApi for HttpAuthApi {
    /// 登录接口是 OAuth2 密码表单
    async fn login(&self, username: &str, password: &str) -> ApiResult<TokenResponse> {
        let form = [("username", username), ("password", password)];
        self.http
            .post_form(&format!("{}/login", self.prefix), &form)
            .await
    }

    async fn current_user(&self, token: &str) -> ApiResult<UserProfile> {
        let path = format!("{}/me", self.prefix);
        let builder = self.http.request_with_token(Method::GET, &path, Some(token));
        self.http.fetch(Method::GET, &path, builder).await
    }

    async fn logout(&self) -> ApiResult<()> {
        let path = format!("{}/logout", self.prefix);
        let builder = self.logout_request(&path);
        self.http.dispatch(Method::POST, &path, builder).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::SessionHandle;

    fn api(session: SessionHandle) -> HttpAuthApi {
        let config = Config::default();
        HttpAuthApi::new(HttpClient::new(&config, session).unwrap(), &config)
    }

    #[test]
    fn test_logout_sends_bare_token() {
        let session = SessionHandle::new();
        let api = api(session.clone());

        let request = api.logout_request("/auth/logout").build().unwrap();
        assert!(request.headers().get(AUTHORIZATION).is_none());

        session.set_user("3f2c9a1e-0000-4000-8000-000000000001", "student");
        let request = api.logout_request("/auth/logout").build().unwrap();
        assert_eq!(request.method(), &Method::POST);
        assert_eq!(request.url().path(), "/auth/logout");
        assert_eq!(request.headers()[AUTHORIZATION], "3f2c9a1e-0000-4000-8000-000000000001");
    }
}
