/// 后端 HTTP 客户端
///
/// 所有资源 API 都通过它发请求：固定 origin，发送前从会话读取 token
use crate::config::Config;
use crate::error::{ApiError, ApiResult};
use crate::session::SessionHandle;
use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

/// HTTP 客户端
///
/// 克隆开销很小，内部共享连接池、cookie 和会话
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
    base_url: String,
    session: SessionHandle,
}

impl HttpClient {
    /// 按配置创建客户端
    pub fn new(config: &Config, session: SessionHandle) -> ApiResult<Self> {
        Self::with_base_url(config.api_base_url.clone(), session)
    }

    /// 使用指定 origin 创建客户端
    ///
    /// # 参数
    /// - `base_url`: 后端地址，例如 `http://localhost:8000`
    /// - `session`: 会话句柄，每次请求时读取 token
    pub fn with_base_url(base_url: impl Into<String>, session: SessionHandle) -> ApiResult<Self> {
        // 与浏览器 withCredentials 一致：保留并回传 cookie
        let client = reqwest::Client::builder()
            .cookie_store(true)
            .build()
            .map_err(|e| ApiError::Build {
                message: e.to_string(),
            })?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            session,
        })
    }

    pub fn session(&self) -> &SessionHandle {
        &self.session
    }

    /// 拼接完整地址
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    /// 构建请求
    ///
    /// 会话中有 token 时附加 `Authorization: Bearer <token>`。
    /// token 在这里读取而不是在构造客户端时，所以中途换 token 也能生效。
    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.request_with_token(method, path, self.session.token().as_deref())
    }

    /// 使用显式 token 构建请求，不读取会话
    pub fn request_with_token(&self, method: Method, path: &str, token: Option<&str>) -> RequestBuilder {
        let builder = self.client.request(method, self.url(path));

        match token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// 发送自行构建的请求并解析 JSON 响应
    pub async fn fetch<T: DeserializeOwned>(&self, method: Method, path: &str, builder: RequestBuilder) -> ApiResult<T> {
        self.send_json(method, path, builder).await
    }

    // ========== 常用动词 ==========

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        self.send_json(Method::GET, path, self.request(Method::GET, path))
            .await
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let builder = self.request(Method::POST, path).json(body);
        self.send_json(Method::POST, path, builder).await
    }

    pub async fn put<B, T>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let builder = self.request(Method::PUT, path).json(body);
        self.send_json(Method::PUT, path, builder).await
    }

    /// 表单提交（登录接口使用 `application/x-www-form-urlencoded`）
    pub async fn post_form<F, T>(&self, path: &str, form: &F) -> ApiResult<T>
    where
        F: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let builder = self.request(Method::POST, path).form(form);
        self.send_json(Method::POST, path, builder).await
    }

    /// 发送请求并忽略响应体
    pub async fn execute(&self, method: Method, path: &str) -> ApiResult<()> {
        let builder = self.request(method.clone(), path);
        self.dispatch(method, path, builder).await
    }

    /// 发送自行构建的请求并忽略响应体
    pub async fn dispatch(&self, method: Method, path: &str, builder: RequestBuilder) -> ApiResult<()> {
        self.send(&method, path, builder).await?;
        Ok(())
    }

    pub async fn delete(&self, path: &str) -> ApiResult<()> {
        self.execute(Method::DELETE, path).await
    }

    // ========== 内部实现 ==========

    async fn send_json<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        builder: RequestBuilder,
    ) -> ApiResult<T> {
        let response = self.send(&method, path, builder).await?;

        let body = response
            .text()
            .await
            .map_err(|e| ApiError::network(path, &e))?;

        serde_json::from_str(&body).map_err(|e| {
            warn!("{} {} 响应解析失败: {}", method, path, e);
            ApiError::decode(path, e)
        })
    }

    /// 发送请求，非 2xx 转为 `ApiError::Status`
    async fn send(&self, method: &Method, path: &str, builder: RequestBuilder) -> ApiResult<Response> {
        debug!("➡️ {} {}", method, self.url(path));

        let response = builder.send().await.map_err(|e| {
            warn!("{} {} 网络请求失败: {}", method, path, e);
            ApiError::network(path, &e)
        })?;

        let status = response.status();
        debug!("⬅️ {} {} -> {}", method, path, status);

        let failure = response.error_for_status_ref().err().map(|e| e.to_string());
        if let Some(message) = failure {
            let body = response.text().await.unwrap_or_default();
            let error = ApiError::from_response(path, status.as_u16(), message, &body);
            warn!("{} {} 失败: {}", method, path, error.message());
            return Err(error);
        }

        Ok(response)
    }
}
