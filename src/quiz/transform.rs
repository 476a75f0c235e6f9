//! Transformations over an ordered set of questions.
//!
//! None of these touch their input: every returned `Vec<Question>` is built
//! from clones, so callers may edit the result freely. Lookups by id stop at
//! the first match.

use crate::quiz::{Answer, Question, QuestionId, QuestionType, QuizError, Result};

pub fn get_published_questions(questions: &[Question]) -> Vec<Question> {
    questions.iter().filter(|q| q.published).cloned().collect()
}

/// Drops questions whose body, expected answer and options are all empty.
pub fn get_non_empty_questions(questions: &[Question]) -> Vec<Question> {
    questions.iter().filter(|q| !q.is_empty()).cloned().collect()
}

pub fn find_question(questions: &[Question], id: QuestionId) -> Option<&Question> {
    questions.iter().find(|q| q.id == id)
}

/// Removes the first question with `id`. An unknown id yields an unchanged copy.
pub fn remove_question(questions: &[Question], id: QuestionId) -> Vec<Question> {
    let mut remaining = questions.to_vec();
    if let Some(index) = questions.iter().position(|q| q.id == id) {
        remaining.remove(index);
    }
    remaining
}

pub fn get_names(questions: &[Question]) -> Vec<String> {
    questions.iter().map(|q| q.name.clone()).collect()
}

/// Total points, widened to `u64` so large sets cannot overflow.
pub fn sum_points(questions: &[Question]) -> u64 {
    questions.iter().map(|q| u64::from(q.points)).sum()
}

pub fn sum_published_points(questions: &[Question]) -> u64 {
    questions
        .iter()
        .filter(|q| q.published)
        .map(|q| u64::from(q.points))
        .sum()
}

pub fn make_answers(questions: &[Question]) -> Vec<Answer> {
    questions.iter().map(|q| Answer::blank(q.id)).collect()
}

pub fn publish_all(questions: &[Question]) -> Vec<Question> {
    questions
        .iter()
        .map(|q| Question {
            published: true,
            ..q.clone()
        })
        .collect()
}

/// True when every question shares the type of the first one (or there are none).
pub fn same_type(questions: &[Question]) -> bool {
    match questions.first() {
        Some(first) => questions.iter().all(|q| q.kind == first.kind),
        None => true,
    }
}

pub fn add_new_question(
    questions: &[Question],
    id: QuestionId,
    name: &str,
    kind: QuestionType,
) -> Vec<Question> {
    let mut extended = questions.to_vec();
    extended.push(Question::blank(id, name, kind));
    extended
}

pub fn rename_question_by_id(
    questions: &[Question],
    target_id: QuestionId,
    new_name: &str,
) -> Result<Vec<Question>> {
    edit_by_id(questions, target_id, |q| {
        q.name = new_name.to_string();
        Ok(())
    })
}

/// Changes the type of the target question. Anything other than a
/// multiple-choice question loses its options.
pub fn change_question_type_by_id(
    questions: &[Question],
    target_id: QuestionId,
    new_kind: QuestionType,
) -> Result<Vec<Question>> {
    edit_by_id(questions, target_id, |q| {
        q.kind = new_kind;
        if new_kind != QuestionType::MultipleChoiceQuestion {
            q.options.clear();
        }
        Ok(())
    })
}

/// Appends `new_option` to the target's options when `option_index` is `None`,
/// otherwise replaces the option at that index.
pub fn edit_option(
    questions: &[Question],
    target_id: QuestionId,
    option_index: Option<usize>,
    new_option: &str,
) -> Result<Vec<Question>> {
    edit_by_id(questions, target_id, |q| match option_index {
        None => {
            q.options.push(new_option.to_string());
            Ok(())
        }
        Some(index) => match q.options.get_mut(index) {
            Some(option) => {
                *option = new_option.to_string();
                Ok(())
            }
            None => Err(QuizError::OptionOutOfRange {
                id: q.id,
                index,
                len: q.options.len(),
            }),
        },
    })
}

/// Inserts a copy of the target question, carrying `new_id`, right after it.
pub fn duplicate_question_in_array(
    questions: &[Question],
    target_id: QuestionId,
    new_id: QuestionId,
) -> Result<Vec<Question>> {
    let index = position_of(questions, target_id)?;
    log::debug!("duplicating question {} as {}", target_id, new_id);

    let mut copied = questions.to_vec();
    copied.insert(index + 1, Question::duplicate(new_id, &questions[index]));
    Ok(copied)
}

fn position_of(questions: &[Question], id: QuestionId) -> Result<usize> {
    questions.iter().position(|q| q.id == id).ok_or_else(|| {
        log::warn!("no question with id {} among {}", id, questions.len());
        QuizError::QuestionNotFound(id)
    })
}

// Applies `edit` to the target inside a fresh copy of the set.
fn edit_by_id<F>(questions: &[Question], target_id: QuestionId, edit: F) -> Result<Vec<Question>>
where
    F: FnOnce(&mut Question) -> Result<()>,
{
    let index = position_of(questions, target_id)?;
    log::debug!("editing question {} at position {}", target_id, index);

    let mut copied = questions.to_vec();
    edit(&mut copied[index])?;
    Ok(copied)
}
