//! Materialization of the template catalog into a project directory.
//!
//! Entries are visited in catalog order. An entry whose path already exists
//! is left untouched, so running the tool again over a partial or edited
//! project only fills in what is missing.

use crate::config::ScaffoldConfig;
use crate::error::{Error, Result};
use crate::filesystem::Filesystem;
use crate::question::{AnswerValue, Answers, GadgetAnswers};
use crate::template::{render_document, substitute, CatalogEntry, Rule};
use log::{debug, info};
use std::path::{Path, PathBuf};

/// What happened to one catalog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// A directory was created
    Created(PathBuf),
    /// A file was written or copied
    Added(PathBuf),
    /// Something already existed at the path; nothing was written
    AlreadyPresent(PathBuf),
}

impl Action {
    /// Path of the entry, relative to the output root.
    pub fn path(&self) -> &Path {
        match self {
            Action::Created(path) | Action::Added(path) | Action::AlreadyPresent(path) => path,
        }
    }

    pub fn is_write(&self) -> bool {
        !matches!(self, Action::AlreadyPresent(_))
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Created(path) => write!(f, "Created: '{}'", path.display()),
            Action::Added(path) => write!(f, "Added: '{}'", path.display()),
            Action::AlreadyPresent(path) => {
                write!(f, "Skipped (already present): '{}'", path.display())
            }
        }
    }
}

/// Content of an entry, ready to be put on disk.
#[derive(Debug)]
enum FileOperation {
    CreateDir,
    Write { content: Vec<u8> },
    Copy { source: PathBuf },
}

pub struct Processor<'a> {
    fs: &'a dyn Filesystem,
    config: &'a ScaffoldConfig,
    output_root: &'a Path,
    answers: &'a Answers,
    gadget: GadgetAnswers,
}

impl<'a> Processor<'a> {
    /// Creates a processor for one run.
    ///
    /// # Errors
    /// * `Error::ValidationError` if `answers` is not a complete gadget answer record
    pub fn new(
        fs: &'a dyn Filesystem,
        config: &'a ScaffoldConfig,
        output_root: &'a Path,
        answers: &'a Answers,
    ) -> Result<Self> {
        let gadget = GadgetAnswers::try_from(answers)?;
        Ok(Self { fs, config, output_root, answers, gadget })
    }

    /// Handles one catalog entry.
    ///
    /// # Returns
    /// * `Ok(None)` if the entry's condition does not hold for these answers
    /// * `Ok(Some(action))` otherwise
    pub fn process(&self, entry: &CatalogEntry) -> Result<Option<Action>> {
        if !entry.condition.is_visible(self.answers) {
            debug!("Not requested: '{}'", entry.path);
            return Ok(None);
        }

        let relative = PathBuf::from(entry.path);
        let target = self.output_root.join(&relative);

        if self.fs.exists(&target) {
            debug!("Already present: '{}'", target.display());
            return Ok(Some(Action::AlreadyPresent(relative)));
        }

        let action = self
            .apply(self.derive(entry)?, &target, relative)
            .map_err(|e| match e {
                Error::IoError(source) => Error::EmitError { path: entry.path.to_string(), source },
                other => other,
            })?;
        info!("{}", action);

        Ok(Some(action))
    }

    /// Handles every entry in order, stopping at the first filesystem error.
    pub fn materialize(&self, catalog: &[CatalogEntry]) -> Result<Vec<Action>> {
        let mut actions = Vec::with_capacity(catalog.len());
        self.materialize_with(catalog, |action| actions.push(action.clone()))?;
        Ok(actions)
    }

    /// Like [`Processor::materialize`], but hands each action to `on_action`
    /// as soon as it is taken, so a failed run still reports what it wrote.
    pub fn materialize_with<F: FnMut(&Action)>(
        &self,
        catalog: &[CatalogEntry],
        mut on_action: F,
    ) -> Result<()> {
        for entry in catalog {
            if let Some(action) = self.process(entry)? {
                on_action(&action);
            }
        }
        Ok(())
    }

    fn apply(&self, operation: FileOperation, target: &Path, relative: PathBuf) -> Result<Action> {
        let action = match operation {
            FileOperation::CreateDir => {
                self.fs.mkdir(target)?;
                Action::Created(relative)
            }
            FileOperation::Write { content } => {
                self.fs.write_file(target, &content)?;
                Action::Added(relative)
            }
            FileOperation::Copy { source } => {
                self.fs.copy_file(&source, target)?;
                Action::Added(relative)
            }
        };
        Ok(action)
    }

    fn derive(&self, entry: &CatalogEntry) -> Result<FileOperation> {
        let operation = match entry.rule {
            Rule::Directory => FileOperation::CreateDir,
            Rule::Verbatim(text) => FileOperation::Write { content: text.as_bytes().to_vec() },
            Rule::Parameterized { template, placeholder, answer } => {
                let value =
                    self.answers.get(answer).and_then(AnswerValue::as_str).ok_or_else(|| {
                        Error::ValidationError(format!(
                            "'{}' needs a text answer for '{}'",
                            entry.path, answer
                        ))
                    })?;
                FileOperation::Write { content: substitute(template, placeholder, value).into_bytes() }
            }
            Rule::Structured(document) => {
                let text = render_document(document, &self.gadget, self.config)?;
                FileOperation::Write { content: text.into_bytes() }
            }
            Rule::Asset { name, bytes } => {
                let replacement = self.config.asset_dir.as_ref().map(|dir| dir.join(name));
                match replacement {
                    Some(source) if self.fs.exists(&source) => FileOperation::Copy { source },
                    _ => FileOperation::Write { content: bytes.to_vec() },
                }
            }
        };
        Ok(operation)
    }
}

/// Materializes `catalog` under `output_root`.
///
/// # Returns
/// * `Result<Vec<Action>>` - One action per requested entry, in catalog order
///
/// # Errors
/// * `Error::ValidationError` if the answers are incomplete
/// * `Error::EmitError` on the first failed filesystem operation; entries after
///   it are not attempted and earlier writes are kept
pub fn materialize(
    fs: &dyn Filesystem,
    config: &ScaffoldConfig,
    output_root: &Path,
    answers: &Answers,
    catalog: &[CatalogEntry],
) -> Result<Vec<Action>> {
    Processor::new(fs, config, output_root, answers)?.materialize(catalog)
}
