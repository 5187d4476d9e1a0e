//! The question pipeline: turns a question sequence into an answer record.

use crate::error::{Error, Result};
use crate::prompt::Prompter;
use crate::question::{Answers, Question};
use log::{debug, warn};
use std::io::Read;

/// Parses preloaded answers, trying JSON first and YAML second.
///
/// # Returns
/// * `Result<serde_json::Value>` - An object of answers, or `Null` when
///   `content` is blank
///
/// # Errors
/// * `Error::AnswersParseError` if the content is not a mapping in either format
pub fn parse_answers(content: &str) -> Result<serde_json::Value> {
    let content = content.trim();
    if content.is_empty() {
        return Ok(serde_json::Value::Null);
    }

    let value: serde_json::Value = match serde_json::from_str(content) {
        Ok(v) => v,
        Err(_) => serde_yaml::from_str(content)
            .map_err(|e| Error::AnswersParseError(format!("expected JSON or YAML: {}", e)))?,
    };

    match value {
        serde_json::Value::Object(_) | serde_json::Value::Null => Ok(value),
        other => Err(Error::AnswersParseError(format!(
            "expected a mapping of question names to answers, got {}",
            other
        ))),
    }
}

pub fn load_from_stdin() -> Result<serde_json::Value> {
    let mut buffer = String::new();
    std::io::stdin().read_to_string(&mut buffer)?;
    parse_answers(&buffer)
}

/// Returns preloaded answers, or `Null` when none were requested.
pub fn get_answers_from(take_from_stdin: bool) -> Result<serde_json::Value> {
    if take_from_stdin {
        load_from_stdin()
    } else {
        Ok(serde_json::Value::Null)
    }
}

/// Asks every visible question in order and collects the accepted answers.
///
/// A question whose visibility rule fails against the answers gathered so far
/// is skipped and leaves no entry in the record. A visible question is asked
/// again, with the rejection reason, until its validator accepts the answer;
/// there is no retry limit.
///
/// # Errors
/// * Whatever the prompter returns; prompt failures are never retried
pub fn get_answers(prompt: &dyn Prompter, questions: &[Question]) -> Result<Answers> {
    let mut answers = Answers::new();

    for question in questions {
        if !question.visibility.is_visible(&answers) {
            debug!("Skipping '{}': {:?} not satisfied.", question.name, question.visibility);
            continue;
        }

        let mut rejection: Option<String> = None;
        let value = loop {
            let value = prompt.ask(question, rejection.as_deref())?;
            match question.validate(&value) {
                Ok(()) => break value,
                Err(reason) => {
                    warn!("Rejected answer for '{}': {}", question.name, reason);
                    rejection = Some(reason);
                }
            }
        };

        answers.insert(question.name, value);
    }

    Ok(answers)
}
