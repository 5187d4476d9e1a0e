//! The gadget manifest written to `src/manifest.webmanifest`.

use crate::config::ScaffoldConfig;
use crate::constants::{PLACEHOLDER_MODEL, PLACEHOLDER_SURFACE_SIZE};
use crate::question::GadgetAnswers;
use serde::Serialize;

/// Capabilities a gadget requests from the Aardvark runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Permission {
    /// Access to the scene graph; every gadget has it
    #[serde(rename = "scenegraph")]
    SceneGraph,
    /// Allowed to start other gadgets
    #[serde(rename = "master")]
    Master,
}

/// Permissions every generated gadget starts with
pub const BASELINE_PERMISSIONS: [Permission; 1] = [Permission::SceneGraph];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Icon {
    pub src: String,
    #[serde(rename = "type")]
    pub mime_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AardvarkSection {
    pub permissions: Vec<Permission>,
    pub browser_width: i64,
    pub browser_height: i64,
    pub start_automatically: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GadgetManifest {
    pub xr_type: String,
    pub name: String,
    pub icons: Vec<Icon>,
    pub aardvark: AardvarkSection,
}

impl GadgetManifest {
    /// Derives a fresh manifest from the answers.
    ///
    /// The browser surface takes the answered texture size when the gadget
    /// uses panels and the placeholder size otherwise, whatever width or
    /// height the record may hold.
    pub fn from_answers(answers: &GadgetAnswers, config: &ScaffoldConfig) -> Self {
        let (browser_width, browser_height) =
            match (answers.uses_panels, answers.width, answers.height) {
                (true, Some(width), Some(height)) => (width, height),
                _ => (PLACEHOLDER_SURFACE_SIZE, PLACEHOLDER_SURFACE_SIZE),
            };

        let mut permissions = BASELINE_PERMISSIONS.to_vec();
        if answers.starts_gadgets {
            permissions.push(Permission::Master);
        }

        Self {
            xr_type: format!("aardvark-gadget@{}", config.shared_version),
            name: answers.gadget_name.clone(),
            icons: vec![Icon {
                src: format!("models/{}", PLACEHOLDER_MODEL),
                mime_type: "model/gltf-binary".to_string(),
            }],
            aardvark: AardvarkSection {
                permissions,
                browser_width,
                browser_height,
                start_automatically: false,
            },
        }
    }
}
