use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 学生对一道题的作答
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerChoice {
    pub question_id: Uuid,
    pub answer_id: Uuid,
}

/// 交卷请求体：`{ "answers": [...] }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    pub answers: Vec<AnswerChoice>,
}

impl Submission {
    pub fn new(answers: Vec<AnswerChoice>) -> Self {
        Self { answers }
    }
}

/// 成绩记录
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultRecord {
    pub id: Uuid,
    pub student_id: Uuid,
    pub test_id: Uuid,
    pub score: i64,
    #[serde(default)]
    pub test_title: Option<String>,
}
