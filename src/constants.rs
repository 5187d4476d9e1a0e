//! Common constants used throughout avcreate.

/// Question names, also used as keys of the answer record
pub const PACKAGE_NAME: &str = "packageName";
pub const GADGET_NAME: &str = "gadgetName";
pub const USES_PANELS: &str = "usesPanels";
pub const WIDTH: &str = "width";
pub const HEIGHT: &str = "height";
pub const STARTS_GADGETS: &str = "startsGadgets";
pub const WANTS_VSCODE: &str = "wantsVSCode";

/// Companion libraries whose versions are pinned into generated projects
pub const AARDVARK_REACT: &str = "@aardvarkxr/aardvark-react";
pub const AARDVARK_SHARED: &str = "@aardvarkxr/aardvark-shared";

/// Default texture size offered for panel gadgets
pub const DEFAULT_TEXTURE_SIZE: i64 = 1024;

/// Browser surface size used when a gadget has no panels
pub const PLACEHOLDER_SURFACE_SIZE: i64 = 16;

/// Token in the HTML template replaced by the gadget name
pub const TITLE_PLACEHOLDER: &str = "GADGET_NAME";

/// Bundled binary model copied into every project
pub const PLACEHOLDER_MODEL: &str = "placeholder.glb";
