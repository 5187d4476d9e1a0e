//! avcreate scaffolds Aardvark gadget projects.
//! It asks a short series of questions, derives the gadget manifest and
//! package descriptor from the answers, and writes a starter project without
//! ever overwriting files that already exist.

/// Command-line interface module
pub mod cli;

/// Scaffolding settings resolved at startup
pub mod config;

/// Question names, companion library names and fixed sizes
pub mod constants;

/// Error types and handling
pub mod error;

/// Filesystem capabilities used while writing the project
pub mod filesystem;

/// Gadget manifest derivation
pub mod manifest;

/// The tool's own package metadata
pub mod metadata;

/// npm package name validation
pub mod package_name;

/// The question pipeline and preloaded answer parsing
pub mod parser;

/// Write-if-absent materialization of the template catalog
pub mod processor;

/// User input handling
pub mod prompt;

/// Question definitions and the answer record
pub mod question;

/// Template catalog and content derivation rules
pub mod template;
