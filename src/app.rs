use crate::api::{HttpAuthApi, HttpResultsApi, HttpTestsApi};
use crate::clients::HttpClient;
use crate::config::Config;
use crate::logger::{log_startup, truncate_text};
use crate::router::{Navigation, Router};
use crate::session::SessionHandle;
use crate::stores::{AuthStore, TestsStore};
use anyhow::{Context, Result};
use tracing::{info, warn};

/// 启动后检查的页面
const PROBE_PATHS: [&str; 3] = ["/", "/create-test", "/results"];

/// 应用主结构
///
/// 持有会话句柄，并把它显式传给 HTTP 客户端、store 和路由守卫
pub struct App {
    config: Config,
    session: SessionHandle,
    router: Router,
    auth: AuthStore<HttpAuthApi>,
    tests: TestsStore<HttpTestsApi, HttpResultsApi>,
}

impl App {
    /// 初始化应用
    pub async fn initialize(config: Config) -> Result<Self> {
        log_startup(&config);

        let session = SessionHandle::new();
        let http = HttpClient::new(&config, session.clone()).context("无法创建 HTTP 客户端")?;

        Ok(Self {
            auth: AuthStore::new(HttpAuthApi::new(http.clone(), &config), session.clone()),
            tests: TestsStore::new(
                HttpTestsApi::new(http.clone(), &config),
                HttpResultsApi::new(http, &config),
            ),
            router: Router::default(),
            session,
            config,
        })
    }

    /// 运行：登录（若配置了账号）→ 检查路由 → 拉取测验列表
    pub async fn run(&mut self) -> Result<()> {
        if let Some((username, password)) = self.config.credentials() {
            let (username, password) = (username.to_string(), password.to_string());
            info!("🔑 正在登录: {}", username);
            self.auth.login(&username, &password).await;

            if let Some(message) = self.auth.error_message() {
                warn!("⚠️ 登录失败，以游客身份继续: {}", message);
            }
        } else {
            info!("未配置账号，以游客身份继续");
        }

        self.log_navigation();

        if !self.session.snapshot().is_authenticated() {
            warn!("⚠️ 未登录，跳过测验列表");
            return Ok(());
        }

        self.tests.load_tests().await;

        let state = self.tests.state();
        if let Some(message) = state.error_message() {
            anyhow::bail!("加载测验失败: {}", message);
        }

        info!("📋 共 {} 个测验", state.tests.len());
        for test in &state.tests {
            info!(
                "  - {} | {} | {} 道题",
                test.id,
                truncate_text(test.title().unwrap_or("(无标题)"), 40),
                test.questions.len()
            );
        }

        Ok(())
    }

    fn log_navigation(&self) {
        let session = self.session.snapshot();
        for path in PROBE_PATHS {
            match self.router.navigate(path, &session) {
                Navigation::Proceed(_) => info!("🧭 {} → 允许访问", path),
                Navigation::Redirected { to, .. } => info!("🧭 {} → 重定向到 {}", path, to.path),
                Navigation::NotFound(p) => warn!("🧭 {} → 未找到路由", p),
                Navigation::RedirectLoop(p) => warn!("🧭 {} → 重定向循环", p),
            }
        }
    }
}
