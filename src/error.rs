use serde::Deserialize;
use thiserror::Error;

/// API 调用错误
///
/// 只区分三类：网络失败、HTTP 错误状态、响应无法解析。
/// 另有 `Build` 表示请求本身无法构造。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// 网络请求失败（没有收到响应）
    #[error("网络请求失败 ({endpoint}): {message}")]
    Network { endpoint: String, message: String },

    /// 后端返回非 2xx 状态
    #[error("API返回错误响应 ({endpoint}): status={status}, detail={detail:?}")]
    Status {
        endpoint: String,
        status: u16,
        /// 响应体中的 `detail` 字段
        detail: Option<String>,
        /// 传输层的错误描述
        message: String,
    },

    /// 响应体解析失败
    #[error("JSON解析失败 ({endpoint}): {message}")]
    Decode { endpoint: String, message: String },

    /// 请求构造失败
    #[error("请求构造失败: {message}")]
    Build { message: String },
}

/// 错误类别，供调用方按类别处理
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Network,
    Status,
    Decode,
    Build,
}

impl ApiError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ApiError::Network { .. } => ErrorKind::Network,
            ApiError::Status { .. } => ErrorKind::Status,
            ApiError::Decode { .. } => ErrorKind::Decode,
            ApiError::Build { .. } => ErrorKind::Build,
        }
    }

    /// HTTP 状态码（仅 `Status`）
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// 后端给出的 `detail`
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Status { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    /// 展示给用户的错误文本
    ///
    /// 有 `detail` 时用 `detail`，否则用传输层的原始描述
    pub fn message(&self) -> &str {
        match self {
            ApiError::Status {
                detail: Some(detail),
                ..
            } => detail,
            ApiError::Status { message, .. }
            | ApiError::Network { message, .. }
            | ApiError::Decode { message, .. }
            | ApiError::Build { message } => message,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    // ========== 便捷构造函数 ==========

    pub(crate) fn network(endpoint: impl Into<String>, source: &reqwest::Error) -> Self {
        ApiError::Network {
            endpoint: endpoint.into(),
            message: source.to_string(),
        }
    }

    pub(crate) fn decode(endpoint: impl Into<String>, source: impl std::fmt::Display) -> Self {
        ApiError::Decode {
            endpoint: endpoint.into(),
            message: source.to_string(),
        }
    }

    /// 根据错误响应构造 `Status`
    ///
    /// # 参数
    /// - `endpoint`: 请求地址
    /// - `status`: HTTP 状态码
    /// - `message`: 传输层错误描述
    /// - `body`: 响应体原文
    pub(crate) fn from_response(
        endpoint: impl Into<String>,
        status: u16,
        message: impl Into<String>,
        body: &str,
    ) -> Self {
        ApiError::Status {
            endpoint: endpoint.into(),
            status,
            detail: extract_detail(body),
            message: message.into(),
        }
    }
}

/// 错误响应体，只关心字符串形式的 `detail`
#[derive(Deserialize)]
struct ErrorBody {
    detail: serde_json::Value,
}

/// 提取 `{"detail": "..."}` 中的字符串
///
/// 校验错误时 `detail` 是数组，此时视为没有
fn extract_detail(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    match parsed.detail {
        serde_json::Value::String(detail) if !detail.is_empty() => Some(detail),
        _ => None,
    }
}

/// API 调用结果类型
pub type ApiResult<T> = Result<T, ApiError>;
