//! 路由
//!
//! 把路径映射到路由，并在每次导航前执行守卫。
//! 重定向的目标同样经过守卫，超过 `MAX_REDIRECTS` 次视为循环。

pub mod guard;
pub mod routes;

pub use guard::GuardDecision;
pub use routes::{default_routes, Route, RouteMatch};

use crate::session::Session;
use tracing::debug;

/// 单次导航允许的最大重定向次数
pub const MAX_REDIRECTS: usize = 8;

/// 导航结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// 直接到达目标
    Proceed(RouteMatch),
    /// 被守卫重定向
    Redirected { from: String, to: RouteMatch },
    /// 没有匹配的路由
    NotFound(String),
    /// 重定向次数超限
    RedirectLoop(String),
}

impl Navigation {
    /// 最终落到的路径
    pub fn path(&self) -> Option<&str> {
        match self {
            Navigation::Proceed(m) | Navigation::Redirected { to: m, .. } => Some(m.path.as_str()),
            Navigation::NotFound(_) | Navigation::RedirectLoop(_) => None,
        }
    }

    pub fn route_name(&self) -> Option<&str> {
        match self {
            Navigation::Proceed(m) | Navigation::Redirected { to: m, .. } => Some(m.route.name.as_str()),
            Navigation::NotFound(_) | Navigation::RedirectLoop(_) => None,
        }
    }

    pub fn is_redirect(&self) -> bool {
        matches!(self, Navigation::Redirected { .. })
    }
}

/// 路由器
#[derive(Debug, Clone)]
pub struct Router {
    routes: Vec<Route>,
    login_path: String,
    home_path: String,
}

impl Default for Router {
    fn default() -> Self {
        Self::new(default_routes())
    }
}

impl Router {
    pub fn new(routes: Vec<Route>) -> Self {
        Self {
            routes,
            login_path: "/login".to_string(),
            home_path: "/".to_string(),
        }
    }

    /// 按声明顺序找第一个匹配的路由
    pub fn resolve(&self, path: &str) -> Option<RouteMatch> {
        let path = routes::normalize(path);
        self.routes.iter().find_map(|route| {
            route.matches(&path).map(|params| RouteMatch {
                route: route.clone(),
                path: path.clone(),
                params,
            })
        })
    }

    /// 导航到指定路径
    ///
    /// # 参数
    /// - `path`: 目标路径
    /// - `session`: 当前会话
    pub fn navigate(&self, path: &str, session: &Session) -> Navigation {
        let requested = routes::normalize(path);
        let mut current = requested.clone();
        let mut redirected = false;

        for _ in 0..=MAX_REDIRECTS {
            let Some(target) = self.resolve(&current) else {
                return Navigation::NotFound(current);
            };

            match guard::check(&target, session, &self.login_path, &self.home_path) {
                GuardDecision::Proceed if !redirected => return Navigation::Proceed(target),
                GuardDecision::Proceed => {
                    return Navigation::Redirected {
                        from: requested,
                        to: target,
                    }
                }
                GuardDecision::Redirect(next) => {
                    debug!("守卫重定向: {} -> {}", current, next);
                    current = next;
                    redirected = true;
                }
            }
        }

        Navigation::RedirectLoop(requested)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(role: Option<&str>) -> Session {
        let mut session = Session::new();
        if let Some(role) = role {
            session.set_user("token", role);
        }
        session
    }

    #[test]
    fn test_create_test_without_token_goes_to_login() {
        let nav = Router::default().navigate("/create-test", &session(None));
        assert_eq!(nav.path(), Some("/login"));
        assert!(nav.is_redirect());
    }

    #[test]
    fn test_create_test_as_student_goes_home() {
        let nav = Router::default().navigate("/create-test", &session(Some("student")));
        assert_eq!(nav.path(), Some("/"));
        assert_eq!(nav.route_name(), Some("home"));
    }

    #[test]
    fn test_create_test_as_teacher_proceeds() {
        let nav = Router::default().navigate("/create-test", &session(Some("teacher")));
        assert!(matches!(nav, Navigation::Proceed(ref m) if m.route.name == "create-test"));
    }

    #[test]
    fn test_login_with_token_goes_home() {
        let nav = Router::default().navigate("/login", &session(Some("student")));
        assert_eq!(
            nav,
            Navigation::Redirected {
                from: "/login".to_string(),
                to: Router::default().resolve("/").unwrap(),
            }
        );
    }

    #[test]
    fn test_login_without_token_proceeds() {
        let nav = Router::default().navigate("/login", &session(None));
        assert!(matches!(nav, Navigation::Proceed(_)));
    }

    #[test]
    fn test_detail_route_carries_param() {
        let nav = Router::default().navigate("/tests/abc-123", &session(Some("student")));
        match nav {
            Navigation::Proceed(m) => assert_eq!(m.param("id"), Some("abc-123")),
            other => panic!("unexpected navigation: {:?}", other),
        }
    }

    #[test]
    fn test_unknown_path() {
        let nav = Router::default().navigate("/nope", &session(None));
        assert_eq!(nav, Navigation::NotFound("/nope".to_string()));
    }

    #[test]
    fn test_redirect_loop_is_detected() {
        // 首页拒绝当前角色时会重定向回首页自身
        let router = Router::new(vec![
            Route::protected("/", "home").with_roles(["admin"]),
            Route::protected("/login", "login"),
        ]);
        let nav = router.navigate("/", &session(Some("student")));
        assert_eq!(nav, Navigation::RedirectLoop("/".to_string()));
    }
}
