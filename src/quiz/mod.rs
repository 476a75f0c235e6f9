pub mod error;
pub mod export;
pub mod transform;

use std::fmt;
use std::str::FromStr;

pub use error::{QuizError, Result};

pub type QuestionId = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    ShortAnswerQuestion,
    MultipleChoiceQuestion,
}

impl QuestionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionType::ShortAnswerQuestion => "short_answer_question",
            QuestionType::MultipleChoiceQuestion => "multiple_choice_question",
        }
    }
}

/// Parses the wire name of a question type
///
/// ```
/// use question_set::quiz::QuestionType;
///
/// assert_eq!(
///     "multiple_choice_question".parse::<QuestionType>().ok(),
///     Some(QuestionType::MultipleChoiceQuestion)
/// );
/// assert!("essay".parse::<QuestionType>().is_err());
/// ```
impl FromStr for QuestionType {
    type Err = QuizError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "short_answer_question" => Ok(QuestionType::ShortAnswerQuestion),
            "multiple_choice_question" => Ok(QuestionType::MultipleChoiceQuestion),
            _ => Err(QuizError::UnknownQuestionType(s.to_string())),
        }
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: QuestionType,
    pub body: String,
    pub expected: String,
    pub options: Vec<String>,
    pub points: u32,
    pub published: bool,
}

impl Question {
    /// A placeholder question: no body, no expected answer, no options,
    /// worth nothing and not published.
    pub fn blank(id: QuestionId, name: impl Into<String>, kind: QuestionType) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
            body: String::new(),
            expected: String::new(),
            options: Vec::new(),
            points: 0,
            published: false,
        }
    }

    /// Copy of `source` under a new id.
    pub fn duplicate(id: QuestionId, source: &Question) -> Self {
        Self {
            id,
            ..source.clone()
        }
    }

    /// True when the question has no body, no expected answer and no options.
    pub fn is_empty(&self) -> bool {
        self.body.is_empty() && self.expected.is_empty() && self.options.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    pub question_id: QuestionId,
    pub text: String,
    pub submitted: bool,
    pub correct: bool,
}

impl Answer {
    pub fn blank(question_id: QuestionId) -> Self {
        Self {
            question_id,
            text: String::new(),
            submitted: false,
            correct: false,
        }
    }
}
