//! Scaffolding configuration.
//! Everything the materializer needs besides the answers, resolved once at
//! startup and passed in explicitly.

use crate::constants::{AARDVARK_REACT, AARDVARK_SHARED};
use crate::error::Result;
use crate::metadata::PackageMetadata;
use std::path::PathBuf;

/// Immutable settings shared by every file derivation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldConfig {
    /// Version of avcreate itself
    pub tool_version: String,
    /// Version specifier for `@aardvarkxr/aardvark-react`
    pub react_version: String,
    /// Version specifier for `@aardvarkxr/aardvark-shared`
    pub shared_version: String,
    /// Directory whose assets replace the ones built into the binary.
    /// An asset missing from it falls back to the built-in copy.
    pub asset_dir: Option<PathBuf>,
}

impl ScaffoldConfig {
    /// Builds the configuration from the tool's package metadata.
    ///
    /// # Errors
    /// * `Error::MetadataError` if either companion library is not declared
    pub fn from_metadata(metadata: &PackageMetadata) -> Result<Self> {
        Ok(Self {
            tool_version: metadata.version.clone(),
            react_version: metadata.dependency(AARDVARK_REACT)?.to_string(),
            shared_version: metadata.dependency(AARDVARK_SHARED)?.to_string(),
            asset_dir: None,
        })
    }

    pub fn with_asset_dir<P: Into<PathBuf>>(mut self, asset_dir: P) -> Self {
        self.asset_dir = Some(asset_dir.into());
        self
    }
}
