use crate::quiz::QuestionId;

pub type Result<T> = std::result::Result<T, QuizError>;

#[derive(Debug, thiserror::Error)]
pub enum QuizError {
    #[error("Question not found: {0}")]
    QuestionNotFound(QuestionId),

    #[error("Option index {index} is out of range for question {id} ({len} options)")]
    OptionOutOfRange {
        id: QuestionId,
        index: usize,
        len: usize,
    },

    #[error("Unknown question type: {0:?}")]
    UnknownQuestionType(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid value for {key}: {value:?}")]
    InvalidConfig { key: String, value: String },
}
