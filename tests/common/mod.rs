#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;

use avcreate::config::ScaffoldConfig;
use avcreate::error::{Error, Result};
use avcreate::prompt::Prompter;
use avcreate::question::{AnswerValue, Answers, Question};

/// Replays a fixed list of answers and records every question it was asked.
pub struct ScriptedPrompter {
    script: RefCell<VecDeque<AnswerValue>>,
    pub asked: RefCell<Vec<(String, Option<String>)>>,
}

impl ScriptedPrompter {
    pub fn new(script: Vec<AnswerValue>) -> Self {
        Self { script: RefCell::new(script.into()), asked: RefCell::new(Vec::new()) }
    }

    pub fn asked_names(&self) -> Vec<String> {
        self.asked.borrow().iter().map(|(name, _)| name.clone()).collect()
    }
}

impl Prompter for ScriptedPrompter {
    fn ask(&self, question: &Question, rejection: Option<&str>) -> Result<AnswerValue> {
        self.asked
            .borrow_mut()
            .push((question.name.to_string(), rejection.map(str::to_string)));
        self.script
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| Error::PromptError(format!("no scripted answer for '{}'", question.name)))
    }
}

pub fn text(s: &str) -> AnswerValue {
    AnswerValue::Text(s.to_string())
}

pub fn test_config() -> ScaffoldConfig {
    ScaffoldConfig {
        tool_version: "9.9.9".to_string(),
        react_version: "^1.2.3".to_string(),
        shared_version: "^4.5.6".to_string(),
        asset_dir: None,
    }
}

/// Answers for a panel gadget that does not start other gadgets.
pub fn panel_answers(wants_vscode: bool) -> Answers {
    Answers::from_iter([
        ("packageName", text("my-thing")),
        ("gadgetName", text("My Thing")),
        ("usesPanels", AnswerValue::Bool(true)),
        ("width", AnswerValue::Number(512)),
        ("height", AnswerValue::Number(256)),
        ("startsGadgets", AnswerValue::Bool(false)),
        ("wantsVSCode", AnswerValue::Bool(wants_vscode)),
    ])
}
