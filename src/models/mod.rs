pub mod submission;
pub mod user;

pub use submission::{AnswerChoice, ResultRecord, Submission};
pub use test::{AnswerDraft, Question, QuestionDraft, QuestionPatch, Test, TestDraft, TestPatch};
pub use user::{TokenResponse, UserProfile};
