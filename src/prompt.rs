//! User input handling.
//! The [`Prompter`] trait is the only way the question pipeline talks to the
//! terminal, so the pipeline can be driven by scripted answers as well.

use crate::error::{Error, Result};
use crate::question::{AnswerValue, Question, QuestionKind};
use dialoguer::{Confirm, Input};
use log::debug;

/// Renders a question and returns the raw answer.
pub trait Prompter {
    /// Asks `question` once.
    ///
    /// # Arguments
    /// * `question` - The question to render
    /// * `rejection` - Why the previous answer to this question was refused,
    ///   `None` on the first attempt
    ///
    /// # Returns
    /// * `Result<AnswerValue>` - Unvalidated answer matching `question.kind`
    fn ask(&self, question: &Question, rejection: Option<&str>) -> Result<AnswerValue>;
}

/// Interactive prompter backed by dialoguer.
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }

    fn ask_text(&self, question: &Question) -> Result<AnswerValue> {
        let mut input = Input::<String>::new().with_prompt(question.message).allow_empty(true);
        if let Some(default) = question.default.as_ref().and_then(AnswerValue::as_str) {
            input = input.default(default.to_string());
        }
        Ok(AnswerValue::Text(input.interact_text()?))
    }

    fn ask_number(&self, question: &Question) -> Result<AnswerValue> {
        let mut input = Input::<i64>::new().with_prompt(question.message);
        if let Some(default) = question.default.as_ref().and_then(AnswerValue::as_i64) {
            input = input.default(default);
        }
        Ok(AnswerValue::Number(input.interact_text()?))
    }

    fn ask_yes_no(&self, question: &Question) -> Result<AnswerValue> {
        let default = question.default.as_ref().and_then(AnswerValue::as_bool).unwrap_or(false);
        let answer = Confirm::new().with_prompt(question.message).default(default).interact()?;
        Ok(AnswerValue::Bool(answer))
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        DialoguerPrompter::new()
    }
}

impl Prompter for DialoguerPrompter {
    fn ask(&self, question: &Question, rejection: Option<&str>) -> Result<AnswerValue> {
        if let Some(reason) = rejection {
            eprintln!(">> {}", reason);
        }

        match question.kind {
            QuestionKind::Text => self.ask_text(question),
            QuestionKind::Number => self.ask_number(question),
            QuestionKind::YesNo => self.ask_yes_no(question),
        }
    }
}

/// Answers questions from a preloaded JSON object before asking `inner`.
///
/// A preloaded answer is offered only on the first attempt; once it has been
/// rejected, the question is handed to the inner prompter.
pub struct PreloadedPrompter<'a> {
    inner: &'a dyn Prompter,
    preloaded: serde_json::Value,
}

impl<'a> PreloadedPrompter<'a> {
    pub fn new(inner: &'a dyn Prompter, preloaded: serde_json::Value) -> Self {
        Self { inner, preloaded }
    }

    fn preloaded_answer(&self, question: &Question) -> Result<Option<AnswerValue>> {
        let value = match self.preloaded.get(question.name) {
            None | Some(serde_json::Value::Null) => return Ok(None),
            Some(value) => value,
        };

        let answer = match (question.kind, value) {
            (QuestionKind::Text, serde_json::Value::String(s)) => AnswerValue::Text(s.clone()),
            (QuestionKind::Number, serde_json::Value::Number(n)) => match n.as_i64() {
                Some(n) => AnswerValue::Number(n),
                None => return Err(type_mismatch(question, value)),
            },
            (QuestionKind::YesNo, serde_json::Value::Bool(b)) => AnswerValue::Bool(*b),
            _ => return Err(type_mismatch(question, value)),
        };

        Ok(Some(answer))
    }
}

fn type_mismatch(question: &Question, value: &serde_json::Value) -> Error {
    Error::ValidationError(format!(
        "preloaded answer for '{}' must be {}, got {}",
        question.name, question.kind, value
    ))
}

impl Prompter for PreloadedPrompter<'_> {
    fn ask(&self, question: &Question, rejection: Option<&str>) -> Result<AnswerValue> {
        if rejection.is_none() {
            if let Some(answer) = self.preloaded_answer(question)? {
                debug!("Using preloaded answer for '{}'.", question.name);
                return Ok(answer);
            }
        }
        self.inner.ask(question, rejection)
    }
}
