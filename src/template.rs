//! The template catalog: every file a gadget project starts with and the rule
//! that produces its content.

use crate::config::ScaffoldConfig;
use crate::constants::{GADGET_NAME, PLACEHOLDER_MODEL, TITLE_PLACEHOLDER, WANTS_VSCODE};
use crate::error::Result;
use crate::manifest::GadgetManifest;
use crate::question::{GadgetAnswers, Visibility};
use serde::Serialize;
use serde_json::json;

pub const STYLES_CSS: &str = include_str!("../templates/styles.css");
pub const INDEX_HTML: &str = include_str!("../templates/index.html");
pub const MAIN_TSX: &str = include_str!("../templates/main.tsx");
pub const WEBPACK_CONFIG: &str = include_str!("../templates/webpack.config.js");
pub const LAUNCH_JSON: &str = include_str!("../templates/launch.json");
pub const PLACEHOLDER_GLB: &[u8] = include_bytes!("../templates/placeholder.glb");

/// JSON documents built from a constant base plus answer-derived fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Document {
    /// `manifest.webmanifest`, see [`GadgetManifest`]
    Manifest,
    /// `package.json`
    PackageDescriptor,
    /// `tsconfig.json`
    TsConfig,
}

/// How the content of a catalog entry is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Create an empty directory
    Directory,
    /// Write a constant text unchanged
    Verbatim(&'static str),
    /// Write a constant text with every occurrence of `placeholder` replaced
    /// by the answer named `answer`
    Parameterized {
        template: &'static str,
        placeholder: &'static str,
        answer: &'static str,
    },
    /// Serialize a derived document
    Structured(Document),
    /// Binary file emitted byte for byte, either the built-in `bytes` or the
    /// file called `name` in the configured asset directory
    Asset { name: &'static str, bytes: &'static [u8] },
}

/// One output path and the rule for its content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    /// Path relative to the project root, `/`-separated
    pub path: &'static str,
    pub rule: Rule,
    /// Whether the entry is emitted for a given set of answers
    pub condition: Visibility,
}

impl CatalogEntry {
    fn new(path: &'static str, rule: Rule) -> Self {
        Self { path, rule, condition: Visibility::Always }
    }

    fn when_confirmed(mut self, key: &'static str) -> Self {
        self.condition = Visibility::WhenConfirmed(key);
        self
    }
}

/// The gadget project catalog, in emission order. Directories come before
/// the files inside them.
pub fn catalog() -> Vec<CatalogEntry> {
    vec![
        CatalogEntry::new("src", Rule::Directory),
        CatalogEntry::new("src/manifest.webmanifest", Rule::Structured(Document::Manifest)),
        CatalogEntry::new("tsconfig.json", Rule::Structured(Document::TsConfig)),
        CatalogEntry::new("package.json", Rule::Structured(Document::PackageDescriptor)),
        CatalogEntry::new("src/styles.css", Rule::Verbatim(STYLES_CSS)),
        CatalogEntry::new("src/main.tsx", Rule::Verbatim(MAIN_TSX)),
        CatalogEntry::new(
            "src/index.html",
            Rule::Parameterized {
                template: INDEX_HTML,
                placeholder: TITLE_PLACEHOLDER,
                answer: GADGET_NAME,
            },
        ),
        CatalogEntry::new("src/models", Rule::Directory),
        CatalogEntry::new(
            "src/models/placeholder.glb",
            Rule::Asset { name: PLACEHOLDER_MODEL, bytes: PLACEHOLDER_GLB },
        ),
        CatalogEntry::new("webpack.config.js", Rule::Verbatim(WEBPACK_CONFIG)),
        CatalogEntry::new(".vscode", Rule::Directory).when_confirmed(WANTS_VSCODE),
        CatalogEntry::new(".vscode/launch.json", Rule::Verbatim(LAUNCH_JSON))
            .when_confirmed(WANTS_VSCODE),
    ]
}

/// Serializes `value` as JSON indented with tabs.
pub fn to_tab_json<T: Serialize>(value: &T) -> Result<String> {
    let mut out = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"\t");
    let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
    value.serialize(&mut serializer)?;
    // serde_json only ever emits valid UTF-8
    Ok(String::from_utf8_lossy(&out).into_owned())
}

/// Replaces every occurrence of `placeholder` in `template` with `value`.
pub fn substitute(template: &str, placeholder: &str, value: &str) -> String {
    template.replace(placeholder, value)
}

pub fn tsconfig() -> serde_json::Value {
    json!({
        "compilerOptions": {
            "target": "es2015",
            "module": "commonjs",
            "lib": ["es6", "es2015", "dom"],
            "declaration": true,
            "jsx": "react",
            "outDir": "dist",
            "rootDir": "src",
            "strict": false,
            "types": ["node"],
            "experimentalDecorators": true,
            "allowSyntheticDefaultImports": true,
            "importHelpers": true,
            "esModuleInterop": true,
            "resolveJsonModule": true,
            "moduleResolution": "node"
        }
    })
}

/// Base `package.json`; companion libraries are pinned to `config`'s versions.
fn package_base(config: &ScaffoldConfig) -> serde_json::Value {
    json!({
        "name": "",
        "version": "0.1.0",
        "description": "",
        "main": "index.js",
        "scripts": {
            "build": "webpack --env=production",
            "start": "webpack --env=dev --watch --progress",
            "dev-server": "http-server ./dist -p 8080 -c-1 --cors"
        },
        "keywords": [],
        "author": "",
        "license": "",
        "repository": "",
        "devDependencies": {
            "@types/color": "^3.0.0",
            "@types/express": "^4.17.0",
            "@types/react": "^16.8.22",
            "@types/react-dom": "^16.8.4",
            "@types/ws": "^6.0.2",
            "copy-webpack-plugin": "^5.0.3",
            "css-loader": "^3.0.0",
            "html-webpack-plugin": "^3.2.0",
            "http-server": "^0.12.3",
            "mini-css-extract-plugin": "^0.7.0",
            "npm": "^6.12.0",
            "source-map-loader": "^0.2.4",
            "style-loader": "^1.2.1",
            "ts-loader": "^6.0.4",
            "tslib": "^1.10.0",
            "typescript": "^3.5.2",
            "webpack": "^4.34.0",
            "webpack-cli": "^3.3.6"
        },
        "dependencies": {
            "@aardvarkxr/aardvark-react": config.react_version,
            "@aardvarkxr/aardvark-shared": config.shared_version,
            "bind-decorator": "^1.0.11",
            "react": "^16.13.1",
            "react-dom": "^16.13.1"
        }
    })
}

/// Derives `package.json` with the package name and a description naming the gadget.
pub fn package_descriptor(answers: &GadgetAnswers, config: &ScaffoldConfig) -> serde_json::Value {
    let mut package = package_base(config);
    package["name"] = json!(answers.package_name);
    package["description"] = json!(format!("Source for {} gadget", answers.gadget_name));
    package
}

/// Renders a structured document to the text written to disk.
pub fn render_document(
    document: Document,
    answers: &GadgetAnswers,
    config: &ScaffoldConfig,
) -> Result<String> {
    match document {
        Document::Manifest => to_tab_json(&GadgetManifest::from_answers(answers, config)),
        Document::PackageDescriptor => to_tab_json(&package_descriptor(answers, config)),
        Document::TsConfig => to_tab_json(&tsconfig()),
    }
}
