//! 测验资源 API
//!
//! 路径都相对于测验前缀（默认 `/tests/tests`）

use crate::api::TestsApi;
use crate::clients::HttpClient;
use crate::config::Config;
use crate::error::ApiResult;
use crate::models::{AnswerChoice, Question, QuestionPatch, Submission, Test, TestDraft, TestPatch};
use serde_json::Value;
use tracing::debug;
use uuid::Uuid;

/// 基于 HTTP 的测验 API
#[derive(Debug, Clone)]
pub struct HttpTestsApi {
    http: HttpClient,
    prefix: String,
}

impl HttpTestsApi {
    pub fn new(http: HttpClient, config: &Config) -> Self {
        Self {
            prefix: config.tests_path.clone(),
            http,
        }
    }

    fn path(&self, suffix: &str) -> String {
        format!("{}{}", self.prefix.trim_end_matches('/'), suffix)
    }
}

impl TestsApi for HttpTestsApi {
    async fn list_tests(&self) -> ApiResult<Vec<Test>> {
        self.http.get(&self.path("/")).await
    }

    async fn get_test(&self, test_id: Uuid) -> ApiResult<Test> {
        self.http.get(&self.path(&format!("/{}", test_id))).await
    }

    async fn create_test(&self, draft: &TestDraft) -> ApiResult<Test> {
        debug!("新建测验: {} ({} 道题)", draft.title, draft.questions.len());
        self.http.post(&self.path("/"), draft).await
    }

    async fn update_test(&self, test_id: Uuid, patch: &TestPatch) -> ApiResult<Test> {
        self.http.put(&self.path(&format!("/{}", test_id)), patch).await
    }

    async fn delete_test(&self, test_id: Uuid) -> ApiResult<()> {
        self.http.delete(&self.path(&format!("/{}", test_id))).await
    }

    async fn update_question(&self, question_id: Uuid, patch: &QuestionPatch) -> ApiResult<Question> {
        self.http
            .put(&self.path(&format!("/questions/{}", question_id)), patch)
            .await
    }

    async fn delete_question(&self, question_id: Uuid) -> ApiResult<()> {
        self.http
            .delete(&self.path(&format!("/questions/{}", question_id)))
            .await
    }

    async fn submit_test(&self, test_id: Uuid, answers: &[AnswerChoice]) -> ApiResult<Value> {
        let submission = Submission::new(answers.to_vec());
        self.http
            .post(&self.path(&format!("/{}/submit", test_id)), &submission)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::SessionHandle;

    #[test]
    fn test_paths_are_relative_to_prefix() {
        let config = Config::default();
        let http = HttpClient::new(&config, SessionHandle::new()).unwrap();
        let api = HttpTestsApi::new(http, &config);

        assert_eq!(api.path("/"), "/tests/tests/");
        assert_eq!(api.path("/questions/1"), "/tests/tests/questions/1");

        let config = Config {
            tests_path: "/api/tests/".to_string(),
            ..Default::default()
        };
        let http = HttpClient::new(&config, SessionHandle::new()).unwrap();
        let api = HttpTestsApi::new(http, &config);
        assert_eq!(api.path("/1/submit"), "/api/tests/1/submit");
    }
}
