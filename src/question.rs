//! Questions asked while creating a gadget project and the record of answers.
//!
//! Every question carries its own validation and visibility rules as plain
//! data, so the prompt loop in [`crate::parser`] stays free of
//! question-specific branches.

use crate::constants::{
    DEFAULT_TEXTURE_SIZE, GADGET_NAME, HEIGHT, PACKAGE_NAME, STARTS_GADGETS, USES_PANELS,
    WANTS_VSCODE, WIDTH,
};
use crate::error::{Error, Result};
use crate::package_name::is_valid_package_name;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The kind of value a question asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionKind {
    /// Single line of free text
    Text,
    /// Integer
    Number,
    /// Yes/no confirmation
    YesNo,
}

impl std::fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuestionKind::Text => write!(f, "text"),
            QuestionKind::Number => write!(f, "number"),
            QuestionKind::YesNo => write!(f, "yes/no"),
        }
    }
}

/// A typed answer to a single question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Bool(bool),
    Number(i64),
    Text(String),
}

impl AnswerValue {
    pub fn kind(&self) -> QuestionKind {
        match self {
            AnswerValue::Bool(_) => QuestionKind::YesNo,
            AnswerValue::Number(_) => QuestionKind::Number,
            AnswerValue::Text(_) => QuestionKind::Text,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            AnswerValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            AnswerValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            AnswerValue::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

/// Acceptance rule applied to a raw answer before it enters the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validator {
    /// Must be usable as the name of a new npm package
    PackageName,
    /// Must be a non-empty string
    NonEmpty,
}

impl Validator {
    /// Checks `value`, returning the message to show the user on rejection.
    pub fn validate(&self, value: &AnswerValue) -> std::result::Result<(), String> {
        match self {
            Validator::PackageName => match value.as_str() {
                Some(name) if is_valid_package_name(name) => Ok(()),
                _ => Err("Name must be a valid NPM package name".to_string()),
            },
            Validator::NonEmpty => match value.as_str() {
                Some(s) if !s.is_empty() => Ok(()),
                _ => Err("You must provide a name for your gadget".to_string()),
            },
        }
    }
}

/// Decides from earlier answers whether a question is asked at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Always,
    /// Asked only when the named yes/no question was answered with yes
    WhenConfirmed(&'static str),
}

impl Visibility {
    pub fn is_visible(&self, answers: &Answers) -> bool {
        match self {
            Visibility::Always => true,
            Visibility::WhenConfirmed(key) => answers.is_confirmed(key),
        }
    }
}

/// A single prompt in the question sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct Question {
    /// Unique key of the answer in the record
    pub name: &'static str,
    pub kind: QuestionKind,
    /// Text shown to the user
    pub message: &'static str,
    /// Value used when the user accepts without typing anything
    pub default: Option<AnswerValue>,
    pub validator: Option<Validator>,
    pub visibility: Visibility,
}

impl Question {
    fn new(name: &'static str, kind: QuestionKind, message: &'static str) -> Self {
        Self { name, kind, message, default: None, validator: None, visibility: Visibility::Always }
    }

    pub fn text(name: &'static str, message: &'static str) -> Self {
        Self::new(name, QuestionKind::Text, message)
    }

    pub fn number(name: &'static str, message: &'static str) -> Self {
        Self::new(name, QuestionKind::Number, message)
    }

    pub fn yes_no(name: &'static str, message: &'static str) -> Self {
        Self::new(name, QuestionKind::YesNo, message)
    }

    pub fn with_default(mut self, default: AnswerValue) -> Self {
        self.default = Some(default);
        self
    }

    pub fn with_validator(mut self, validator: Validator) -> Self {
        self.validator = Some(validator);
        self
    }

    pub fn visible_when_confirmed(mut self, key: &'static str) -> Self {
        self.visibility = Visibility::WhenConfirmed(key);
        self
    }

    /// Runs the question's validator, if any, against `value`.
    pub fn validate(&self, value: &AnswerValue) -> std::result::Result<(), String> {
        match &self.validator {
            Some(validator) => validator.validate(value),
            None => Ok(()),
        }
    }
}

/// Returns the questions asked when creating a gadget, in the order they are asked.
pub fn gadget_questions() -> Vec<Question> {
    vec![
        Question::text(PACKAGE_NAME, "What is the package name to use for your gadget?")
            .with_validator(Validator::PackageName),
        Question::text(GADGET_NAME, "What is the user-facing name of your gadget?")
            .with_validator(Validator::NonEmpty),
        Question::yes_no(USES_PANELS, "Does your gadget use panels (i.e. 2D quads in the world)?")
            .with_default(AnswerValue::Bool(true)),
        Question::number(WIDTH, "Texture width")
            .with_default(AnswerValue::Number(DEFAULT_TEXTURE_SIZE))
            .visible_when_confirmed(USES_PANELS),
        Question::number(HEIGHT, "Texture height")
            .with_default(AnswerValue::Number(DEFAULT_TEXTURE_SIZE))
            .visible_when_confirmed(USES_PANELS),
        Question::yes_no(STARTS_GADGETS, "Does your gadget start other gadgets?")
            .with_default(AnswerValue::Bool(false)),
        Question::yes_no(WANTS_VSCODE, "Do you want to debug with VS Code?")
            .with_default(AnswerValue::Bool(true)),
    ]
}

/// Answers collected so far, keyed by question name in the order they were given.
///
/// A skipped question has no entry at all; callers must not read a missing
/// entry as `false` or `0` except where that is the documented meaning.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Answers(IndexMap<String, AnswerValue>);

impl Answers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert<K: Into<String>>(&mut self, key: K, value: AnswerValue) {
        self.0.insert(key.into(), value);
    }

    pub fn get(&self, key: &str) -> Option<&AnswerValue> {
        self.0.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// True only when `key` holds a yes answer.
    pub fn is_confirmed(&self, key: &str) -> bool {
        self.get(key).and_then(AnswerValue::as_bool).unwrap_or(false)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_value(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}

impl<K: Into<String>> FromIterator<(K, AnswerValue)> for Answers {
    fn from_iter<I: IntoIterator<Item = (K, AnswerValue)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

/// Typed view over a complete answer record, used to derive project files.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GadgetAnswers {
    pub package_name: String,
    pub gadget_name: String,
    pub uses_panels: bool,
    /// Present only when the gadget uses panels
    pub width: Option<i64>,
    pub height: Option<i64>,
    pub starts_gadgets: bool,
    #[serde(rename = "wantsVSCode")]
    pub wants_vscode: bool,
}

impl TryFrom<&Answers> for GadgetAnswers {
    type Error = Error;

    fn try_from(answers: &Answers) -> Result<Self> {
        let typed: GadgetAnswers = serde_json::from_value(answers.to_value()?)
            .map_err(|e| Error::ValidationError(format!("incomplete answers: {}", e)))?;

        if typed.uses_panels && (typed.width.is_none() || typed.height.is_none()) {
            return Err(Error::ValidationError(
                "a gadget with panels needs both a texture width and height".to_string(),
            ));
        }

        Ok(typed)
    }
}
