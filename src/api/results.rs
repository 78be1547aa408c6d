//! 成绩资源 API

use crate::api::ResultsApi;
use crate::clients::HttpClient;
use crate::config::Config;
use crate::error::ApiResult;
use crate::models::ResultRecord;
use uuid::Uuid;

/// 基于 HTTP 的成绩 API
///
/// 学生只能看到自己的成绩，过滤由后端完成
#[derive(Debug, Clone)]
pub struct HttpResultsApi {
    http: HttpClient,
    prefix: String,
}

impl HttpResultsApi {
    pub fn new(http: HttpClient, config: &Config) -> Self {
        Self {
            http,
            prefix: config.results_path.trim_end_matches('/').to_string(),
        }
    }
}

impl ResultsApi for HttpResultsApi {
    async fn list_results(&self) -> ApiResult<Vec<ResultRecord>> {
        self.http.get(&format!("{}/", self.prefix)).await
    }

    async fn get_result(&self, result_id: Uuid) -> ApiResult<ResultRecord> {
        self.http.get(&format!("{}/{}", self.prefix, result_id)).await
    }
}
