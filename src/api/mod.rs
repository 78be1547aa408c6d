//! API 模块
//!
//! 每个资源一组函数，动词和路径一一对应，不做任何本地恢复。
//! store 通过下面的 trait 调用，测试时可以换成内存实现。

pub mod auth;
pub mod results;
pub mod tests_resource;

use crate::error::ApiResult;
use crate::models::{
    AnswerChoice, Question, QuestionPatch, ResultRecord, Test, TestDraft, TestPatch, TokenResponse,
    UserProfile,
};
use serde_json::Value;
use std::future::Future;
use uuid::Uuid;

pub use auth::HttpAuthApi;
pub use results::HttpResultsApi;
pub use tests_resource::HttpTestsApi;

/// 测验相关接口
pub trait TestsApi {
    fn list_tests(&self) -> impl Future<Output = ApiResult<Vec<Test>>> + Send;

    fn get_test(&self, test_id: Uuid) -> impl Future<Output = ApiResult<Test>> + Send;

    fn create_test(&self, draft: &TestDraft) -> impl Future<Output = ApiResult<Test>> + Send;

    fn update_test(&self, test_id: Uuid, patch: &TestPatch) -> impl Future<Output = ApiResult<Test>> + Send;

    fn delete_test(&self, test_id: Uuid) -> impl Future<Output = ApiResult<()>> + Send;

    fn update_question(
        &self,
        question_id: Uuid,
        patch: &QuestionPatch,
    ) -> impl Future<Output = ApiResult<Question>> + Send;

    fn delete_question(&self, question_id: Uuid) -> impl Future<Output = ApiResult<()>> + Send;

    /// 交卷，返回后端的原始 JSON
    fn submit_test(
        &self,
        test_id: Uuid,
        answers: &[AnswerChoice],
    ) -> impl Future<Output = ApiResult<Value>> + Send;
}

/// 成绩相关接口
pub trait ResultsApi {
    fn list_results(&self) -> impl Future<Output = ApiResult<Vec<ResultRecord>>> + Send;

    fn get_result(&self, result_id: Uuid) -> impl Future<Output = ApiResult<ResultRecord>> + Send;
}

/// 认证相关接口
pub trait AuthApi {
    fn login(&self, username: &str, password: &str) -> impl Future<Output = ApiResult<TokenResponse>> + Send;

    /// 用指定 token 查询当前用户
    fn current_user(&self, token: &str) -> impl Future<Output = ApiResult<UserProfile>> + Send;

    /// 注销会话中的 token
    fn logout(&self) -> impl Future<Output = ApiResult<()>> + Send;
}
