//! 导航守卫
//!
//! 只看本地会话，同步判断；token 是否真的有效由后端决定

use crate::router::routes::RouteMatch;
use crate::session::Session;

/// 守卫的判定
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    Proceed,
    Redirect(String),
}

/// 判定一次导航
///
/// 规则按顺序：
/// 1. 需要登录但没有 token → 登录页
/// 2. 需要登录、有 token、角色不在允许列表 → 首页
/// 3. 不需要登录、有 token、目标是登录页 → 首页
/// 4. 其余放行
pub fn check(target: &RouteMatch, session: &Session, login_path: &str, home_path: &str) -> GuardDecision {
    let route = &target.route;

    if route.requires_auth {
        if !session.is_authenticated() {
            return GuardDecision::Redirect(login_path.to_string());
        }
        if !route.allows_role(session.role()) {
            return GuardDecision::Redirect(home_path.to_string());
        }
    } else if session.is_authenticated() && target.path == login_path {
        return GuardDecision::Redirect(home_path.to_string());
    }

    GuardDecision::Proceed
}
