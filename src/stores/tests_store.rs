//! 测验 store
//!
//! 缓存测验列表、当前测验、交卷结果，所有写入都在后端确认之后

use crate::api::{ResultsApi, TestsApi};
use crate::error::ApiError;
use crate::models::{AnswerChoice, QuestionPatch, ResultRecord, Test, TestDraft, TestPatch};
use crate::stores::track;
use serde_json::Value;
use tracing::{info, warn};
use uuid::Uuid;

/// 测验 store 的状态，视图只读
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TestsState {
    pub tests: Vec<Test>,
    pub current_test: Option<Test>,
    pub loading: bool,
    /// 最近一次失败；成功的 action 不会清除它
    pub error: Option<ApiError>,
    /// 最近一次交卷的原始响应
    pub result: Option<Value>,
    pub results: Vec<ResultRecord>,
}

impl TestsState {
    /// 错误文本：优先后端 `detail`，否则为传输层描述
    pub fn error_message(&self) -> Option<&str> {
        self.error.as_ref().map(ApiError::message)
    }
}

/// 测验 store
///
/// action 需要 `&mut self`，同一个 store 上不会有两个 action 交错执行。
/// 测验和成绩是两个独立资源，各用一个 API。
pub struct TestsStore<A, R> {
    api: A,
    results_api: R,
    state: TestsState,
}

impl<A: TestsApi, R: ResultsApi> TestsStore<A, R> {
    pub fn new(api: A, results_api: R) -> Self {
        Self {
            api,
            results_api,
            state: TestsState::default(),
        }
    }

    pub fn state(&self) -> &TestsState {
        &self.state
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn clear_error(&mut self) {
        self.state.error = None;
    }

    // ========== actions ==========

    pub async fn load_tests(&mut self) {
        match track(&mut self.state.loading, self.api.list_tests()).await {
            Ok(tests) => {
                info!("✓ 加载了 {} 个测验", tests.len());
                self.state.tests = tests;
            }
            Err(e) => self.record_error("load_tests", e),
        }
    }

    pub async fn load_test(&mut self, test_id: Uuid) {
        match track(&mut self.state.loading, self.api.get_test(test_id)).await {
            Ok(test) => self.state.current_test = Some(test),
            Err(e) => self.record_error("load_test", e),
        }
    }

    /// 新建测验，成功后追加到列表末尾
    pub async fn create_test(&mut self, draft: &TestDraft) {
        match track(&mut self.state.loading, self.api.create_test(draft)).await {
            Ok(test) => {
                info!("✓ 已创建测验 {}", test.id);
                self.state.tests.push(test);
            }
            Err(e) => self.record_error("create_test", e),
        }
    }

    /// 修改测验，列表中同 id 的条目原位替换，当前测验同 id 时一并替换
    pub async fn update_test(&mut self, test_id: Uuid, patch: &TestPatch) {
        match track(&mut self.state.loading, self.api.update_test(test_id, patch)).await {
            Ok(updated) => {
                if let Some(idx) = self.state.tests.iter().position(|t| t.id == test_id) {
                    self.state.tests[idx] = updated.clone();
                }
                if self.current_test_is(test_id) {
                    self.state.current_test = Some(updated);
                }
            }
            Err(e) => self.record_error("update_test", e),
        }
    }

    pub async fn delete_test(&mut self, test_id: Uuid) {
        match track(&mut self.state.loading, self.api.delete_test(test_id)).await {
            Ok(()) => {
                self.state.tests.retain(|t| t.id != test_id);
                if self.current_test_is(test_id) {
                    self.state.current_test = None;
                }
                info!("✓ 已删除测验 {}", test_id);
            }
            Err(e) => self.record_error("delete_test", e),
        }
    }

    /// 修改题目，只同步到当前测验
    pub async fn update_question(&mut self, question_id: Uuid, patch: &QuestionPatch) {
        match track(&mut self.state.loading, self.api.update_question(question_id, patch)).await {
            Ok(question) => {
                if let Some(current) = self.state.current_test.as_mut() {
                    current.replace_question(question);
                }
            }
            Err(e) => self.record_error("update_question", e),
        }
    }

    pub async fn delete_question(&mut self, question_id: Uuid) {
        match track(&mut self.state.loading, self.api.delete_question(question_id)).await {
            Ok(()) => {
                if let Some(current) = self.state.current_test.as_mut() {
                    current.remove_question(question_id);
                }
            }
            Err(e) => self.record_error("delete_question", e),
        }
    }

    /// 交卷；发请求前清空上一次的结果
    pub async fn submit_test(&mut self, test_id: Uuid, answers: &[AnswerChoice]) {
        self.state.result = None;
        match track(&mut self.state.loading, self.api.submit_test(test_id, answers)).await {
            Ok(result) => {
                info!("✓ 测验 {} 已交卷 ({} 道题)", test_id, answers.len());
                self.state.result = Some(result);
            }
            Err(e) => self.record_error("submit_test", e),
        }
    }

    pub async fn load_results(&mut self) {
        match track(&mut self.state.loading, self.results_api.list_results()).await {
            Ok(results) => self.state.results = results,
            Err(e) => self.record_error("load_results", e),
        }
    }

    // ========== 辅助方法 ==========

    fn current_test_is(&self, test_id: Uuid) -> bool {
        self.state.current_test.as_ref().map(|t| t.id) == Some(test_id)
    }

    fn record_error(&mut self, action: &str, error: ApiError) {
        warn!("⚠️ {} 失败: {}", action, error.message());
        self.state.error = Some(error);
    }
}
