//! 路由表

use std::collections::BTreeMap;

/// 路由定义
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    /// 路径模式，`:name` 段匹配任意一段并作为参数
    pub path: String,
    pub name: String,
    pub requires_auth: bool,
    /// 允许访问的角色；为空表示登录即可
    pub roles: Vec<String>,
}

impl Route {
    /// 无需登录的路由
    pub fn public(path: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            requires_auth: false,
            roles: Vec::new(),
        }
    }

    /// 需要登录的路由
    pub fn protected(path: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            requires_auth: true,
            ..Self::public(path, name)
        }
    }

    /// 限定角色
    pub fn with_roles<I, S>(mut self, roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.roles = roles.into_iter().map(Into::into).collect();
        self
    }

    pub fn allows_role(&self, role: Option<&str>) -> bool {
        if self.roles.is_empty() {
            return true;
        }
        role.is_some_and(|role| self.roles.iter().any(|allowed| allowed == role))
    }

    /// 匹配路径，成功时返回参数
    pub fn matches(&self, path: &str) -> Option<BTreeMap<String, String>> {
        let pattern: Vec<&str> = segments(&self.path).collect();
        let actual: Vec<&str> = segments(path).collect();

        if pattern.len() != actual.len() {
            return None;
        }

        let mut params = BTreeMap::new();
        for (expected, value) in pattern.iter().zip(actual.iter()) {
            match expected.strip_prefix(':') {
                Some(name) => {
                    params.insert(name.to_string(), value.to_string());
                }
                None if expected == value => {}
                None => return None,
            }
        }

        Some(params)
    }
}

/// 路由匹配结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    pub route: Route,
    /// 规范化后的实际路径
    pub path: String,
    pub params: BTreeMap<String, String>,
}

impl RouteMatch {
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }
}

/// 去掉查询串、片段和多余的斜杠
pub fn normalize(path: &str) -> String {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let joined: Vec<&str> = segments(path).collect();
    format!("/{}", joined.join("/"))
}

fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

/// 默认路由表
pub fn default_routes() -> Vec<Route> {
    vec![
        Route::public("/", "home"),
        Route::public("/login", "login"),
        Route::protected("/create-test", "create-test").with_roles(["admin", "teacher"]),
        Route::protected("/tests/:id", "test-detail"),
        Route::protected("/tests/:id/edit", "test-edit").with_roles(["admin", "teacher"]),
        Route::protected("/results", "results"),
    ]
}
