//! # Quiz Client
//!
//! 测验管理系统的客户端：列出/查看/编辑测验和题目、交卷，以及按角色的路由守卫
//!
//! ## 架构设计
//!
//! ### ① 传输层
//! - `clients/` - `HttpClient`，固定 origin，每次请求时从会话读取 Bearer token
//!
//! ### ② 资源层
//! - `api/` - 测验、认证、成绩三组接口，动词和路径一一对应
//!
//! ### ③ 状态层
//! - `session` - token + 角色，只在内存中
//! - `stores/` - `TestsStore`、`AuthStore`，请求成功后才写入状态，失败时记录错误
//!
//! ### ④ 导航层
//! - `router/` - 路由表与同步守卫
//!
//! 数据流：视图 → store action → api → HttpClient → 后端，响应写回 store

pub mod api;
pub mod app;
pub mod clients;
pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod router;
pub mod session;
pub mod stores;

// 重新导出常用类型
pub use api::{AuthApi, HttpAuthApi, HttpResultsApi, HttpTestsApi, ResultsApi, TestsApi};
pub use app::App;
pub use clients::HttpClient;
pub use config::Config;
pub use error::{ApiError, ApiResult, ErrorKind};
pub use models::{AnswerChoice, Question, Test, TestDraft};
pub use router::{Navigation, Router};
pub use session::{Session, SessionHandle};
pub use stores::{AuthStore, TestsState, TestsStore};
