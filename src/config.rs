//! 程序配置
//!
//! 默认值 → TOML 配置文件 → 环境变量，后者覆盖前者

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// 配置文件路径的环境变量
pub const CONFIG_PATH_ENV: &str = "QUIZ_CLIENT_CONFIG";

/// 默认配置文件路径
pub const DEFAULT_CONFIG_PATH: &str = "quiz_client.toml";

/// 程序配置
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// 后端地址（只包含 origin）
    pub api_base_url: String,
    /// 测验资源的路径前缀
    pub tests_path: String,
    /// 认证资源的路径前缀
    pub auth_path: String,
    /// 成绩资源的路径前缀
    pub results_path: String,
    // --- 演示程序登录 ---
    pub username: Option<String>,
    pub password: Option<String>,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8000".to_string(),
            tests_path: "/tests/tests".to_string(),
            auth_path: "/auth".to_string(),
            results_path: "/results".to_string(),
            username: None,
            password: None,
            verbose_logging: false,
        }
    }
}

/// 配置文件中的字段，全部可选
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct FileConfig {
    api_base_url: Option<String>,
    tests_path: Option<String>,
    auth_path: Option<String>,
    results_path: Option<String>,
    username: Option<String>,
    password: Option<String>,
    verbose_logging: Option<bool>,
}

impl Config {
    /// 只从环境变量读取（缺省值取自 `Default`）
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    /// 读取配置文件（若存在）并叠加环境变量
    pub fn load() -> Result<Self> {
        let path = std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        let path = Path::new(&path);

        let base = if path.exists() {
            Self::from_file(path)?
        } else {
            Self::default()
        };

        Ok(base.with_env_overrides())
    }

    /// 从 TOML 文件读取配置，未填写的字段使用默认值
    ///
    /// # 参数
    /// - `path`: 配置文件路径
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("无法读取配置文件: {}", path.display()))?;

        let file: FileConfig = toml::from_str(&content)
            .with_context(|| format!("无法解析配置文件: {}", path.display()))?;

        let default = Self::default();
        Ok(Self {
            api_base_url: file.api_base_url.unwrap_or(default.api_base_url),
            tests_path: file.tests_path.unwrap_or(default.tests_path),
            auth_path: file.auth_path.unwrap_or(default.auth_path),
            results_path: file.results_path.unwrap_or(default.results_path),
            username: file.username.or(default.username),
            password: file.password.or(default.password),
            verbose_logging: file.verbose_logging.unwrap_or(default.verbose_logging),
        })
    }

    fn with_env_overrides(self) -> Self {
        Self {
            api_base_url: std::env::var("QUIZ_API_BASE_URL").unwrap_or(self.api_base_url),
            tests_path: std::env::var("QUIZ_TESTS_PATH").unwrap_or(self.tests_path),
            auth_path: std::env::var("QUIZ_AUTH_PATH").unwrap_or(self.auth_path),
            results_path: std::env::var("QUIZ_RESULTS_PATH").unwrap_or(self.results_path),
            username: std::env::var("QUIZ_USERNAME").ok().or(self.username),
            password: std::env::var("QUIZ_PASSWORD").ok().or(self.password),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(self.verbose_logging),
        }
    }

    /// 是否配置了演示登录所需的账号
    pub fn credentials(&self) -> Option<(&str, &str)> {
        match (&self.username, &self.password) {
            (Some(user), Some(pass)) => Some((user.as_str(), pass.as_str())),
            _ => None,
        }
    }
}
