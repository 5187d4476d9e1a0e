use avcreate::config::ScaffoldConfig;
use avcreate::error::Error;
use avcreate::metadata::{read_package_metadata, PackageMetadata};
use std::path::PathBuf;

#[test]
fn test_config_from_metadata() {
    let metadata = PackageMetadata::parse(
        r#"{
            "version": "2.0.0",
            "dependencies": {
                "@aardvarkxr/aardvark-react": "^0.9.1",
                "@aardvarkxr/aardvark-shared": "^0.9.2"
            }
        }"#,
    )
    .unwrap();

    let config = ScaffoldConfig::from_metadata(&metadata).unwrap();

    assert_eq!(config.tool_version, "2.0.0");
    assert_eq!(config.react_version, "^0.9.1");
    assert_eq!(config.shared_version, "^0.9.2");
    assert_eq!(config.asset_dir, None);
}

#[test]
fn test_config_requires_both_companions() {
    let metadata = PackageMetadata::parse(
        r#"{"dependencies": {"@aardvarkxr/aardvark-react": "^0.9.1"}}"#,
    )
    .unwrap();

    let result = ScaffoldConfig::from_metadata(&metadata);

    match result {
        Err(Error::MetadataError(msg)) => assert!(msg.contains("@aardvarkxr/aardvark-shared")),
        other => panic!("Expected MetadataError, got {:?}", other),
    }
}

#[test]
fn test_bundled_config() {
    let config = ScaffoldConfig::from_metadata(&read_package_metadata().unwrap()).unwrap();
    assert_eq!(config.tool_version, env!("CARGO_PKG_VERSION"));
    assert!(config.asset_dir.is_none());
}

#[test]
fn test_asset_dir_override() {
    let metadata = read_package_metadata().unwrap();
    let config = ScaffoldConfig::from_metadata(&metadata).unwrap().with_asset_dir("/tmp/assets");
    assert_eq!(config.asset_dir, Some(PathBuf::from("/tmp/assets")));
}

#[test]
fn test_malformed_metadata() {
    assert!(matches!(PackageMetadata::parse("[1, 2]"), Err(Error::MetadataError(_))));
}
