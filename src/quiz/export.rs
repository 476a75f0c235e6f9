use crate::quiz::Question;

pub const CSV_HEADER: &str = "id,name,options,points,published";

/// Renders the question set as CSV, one record per question.
///
/// `options` is written as the number of options, not their text. Fields are
/// not quoted, so a comma inside a name ends up as an extra column.
///
/// ```
/// use question_set::quiz::{export::to_csv, Question, QuestionType};
///
/// let mut addition = Question::blank(1, "Addition", QuestionType::ShortAnswerQuestion);
/// addition.points = 1;
/// addition.published = true;
///
/// assert_eq!(
///     to_csv(&[addition]),
///     "id,name,options,points,published\n1,Addition,0,1,true"
/// );
/// ```
pub fn to_csv(questions: &[Question]) -> String {
    let records = questions
        .iter()
        .map(|q| {
            format!(
                "{},{},{},{},{}",
                q.id,
                q.name,
                q.options.len(),
                q.points,
                q.published
            )
        })
        .collect::<Vec<String>>()
        .join("\n");
    format!("{}\n{}", CSV_HEADER, records)
}
