//! Package metadata of avcreate itself.
//! Generated projects depend on the same companion library versions this
//! build of the tool was released with.

use crate::error::{Error, Result};
use indexmap::IndexMap;
use log::debug;
use serde::Deserialize;

/// Dependency table bundled with the tool at build time
const BUNDLED_METADATA: &str = include_str!("../templates/metadata.json");

/// The tool's own version and the version specifiers of its companion libraries.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PackageMetadata {
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub dependencies: IndexMap<String, String>,
}

impl PackageMetadata {
    /// Parses a metadata document. A missing `version` is left empty.
    pub fn parse(content: &str) -> Result<Self> {
        serde_json::from_str(content)
            .map_err(|e| Error::MetadataError(format!("invalid package metadata: {}", e)))
    }

    /// Version specifier declared for `package`.
    pub fn dependency(&self, package: &str) -> Result<&str> {
        self.dependencies.get(package).map(String::as_str).ok_or_else(|| {
            Error::MetadataError(format!("no version declared for '{}'", package))
        })
    }
}

/// Reads the metadata bundled into this build.
pub fn read_package_metadata() -> Result<PackageMetadata> {
    let mut metadata = PackageMetadata::parse(BUNDLED_METADATA)?;
    if metadata.version.is_empty() {
        metadata.version = env!("CARGO_PKG_VERSION").to_string();
    }
    debug!("Loaded package metadata for version {}.", metadata.version);
    Ok(metadata)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{AARDVARK_REACT, AARDVARK_SHARED};

    #[test]
    fn test_bundled_metadata_declares_companions() {
        let metadata = read_package_metadata().unwrap();
        assert_eq!(metadata.version, env!("CARGO_PKG_VERSION"));
        assert!(metadata.dependency(AARDVARK_REACT).is_ok());
        assert!(metadata.dependency(AARDVARK_SHARED).is_ok());
    }

    #[test]
    fn test_missing_dependency() {
        let metadata = PackageMetadata::parse(r#"{"version": "1.0.0"}"#).unwrap();
        assert!(matches!(metadata.dependency("react"), Err(Error::MetadataError(_))));
    }
}
