mod common;

use avcreate::manifest::{GadgetManifest, Permission, BASELINE_PERMISSIONS};
use avcreate::question::{AnswerValue, Answers, GadgetAnswers};
use avcreate::template::to_tab_json;
use common::{panel_answers, test_config, text};

fn gadget(answers: &Answers) -> GadgetAnswers {
    GadgetAnswers::try_from(answers).unwrap()
}

#[test]
fn test_panel_size_taken_from_answers() {
    for (width, height) in [(512, 256), (1024, 1024), (1, 4096)] {
        let mut answers = panel_answers(false);
        answers.insert("width", AnswerValue::Number(width));
        answers.insert("height", AnswerValue::Number(height));

        let manifest = GadgetManifest::from_answers(&gadget(&answers), &test_config());

        assert_eq!(manifest.aardvark.browser_width, width);
        assert_eq!(manifest.aardvark.browser_height, height);
    }
}

#[test]
fn test_placeholder_size_without_panels() {
    let mut answers = panel_answers(false);
    answers.insert("usesPanels", AnswerValue::Bool(false));

    let manifest = GadgetManifest::from_answers(&gadget(&answers), &test_config());

    assert_eq!(manifest.aardvark.browser_width, 16);
    assert_eq!(manifest.aardvark.browser_height, 16);
}

#[test]
fn test_negative_size_is_kept() {
    let mut answers = panel_answers(false);
    answers.insert("width", AnswerValue::Number(-5));

    let manifest = GadgetManifest::from_answers(&gadget(&answers), &test_config());

    assert_eq!(manifest.aardvark.browser_width, -5);
}

#[test]
fn test_baseline_permissions() {
    let manifest = GadgetManifest::from_answers(&gadget(&panel_answers(false)), &test_config());
    assert_eq!(manifest.aardvark.permissions, BASELINE_PERMISSIONS.to_vec());
}

#[test]
fn test_master_permission_for_gadgets_starting_gadgets() {
    let mut answers = panel_answers(false);
    answers.insert("startsGadgets", AnswerValue::Bool(true));

    let manifest = GadgetManifest::from_answers(&gadget(&answers), &test_config());

    assert_eq!(manifest.aardvark.permissions.len(), BASELINE_PERMISSIONS.len() + 1);
    assert_eq!(manifest.aardvark.permissions.last(), Some(&Permission::Master));
}

#[test]
fn test_manifests_do_not_share_permissions() {
    let mut master = panel_answers(false);
    master.insert("startsGadgets", AnswerValue::Bool(true));

    let first = GadgetManifest::from_answers(&gadget(&master), &test_config());
    let second = GadgetManifest::from_answers(&gadget(&panel_answers(false)), &test_config());

    assert_eq!(first.aardvark.permissions.len(), 2);
    assert_eq!(second.aardvark.permissions, vec![Permission::SceneGraph]);
}

#[test]
fn test_manifest_json_layout() {
    let manifest = GadgetManifest::from_answers(&gadget(&panel_answers(false)), &test_config());
    let text = to_tab_json(&manifest).unwrap();

    assert!(text.starts_with("{\n\t\"xr_type\": \"aardvark-gadget@^4.5.6\",\n\t\"name\": \"My Thing\","));

    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "xr_type": "aardvark-gadget@^4.5.6",
            "name": "My Thing",
            "icons": [{"src": "models/placeholder.glb", "type": "model/gltf-binary"}],
            "aardvark": {
                "permissions": ["scenegraph"],
                "browserWidth": 512,
                "browserHeight": 256,
                "startAutomatically": false
            }
        })
    );
}

#[test]
fn test_panels_without_size_are_rejected() {
    let answers = Answers::from_iter([
        ("packageName", text("pkg")),
        ("gadgetName", text("G")),
        ("usesPanels", AnswerValue::Bool(true)),
        ("startsGadgets", AnswerValue::Bool(false)),
        ("wantsVSCode", AnswerValue::Bool(false)),
    ]);

    assert!(GadgetAnswers::try_from(&answers).is_err());
}

#[test]
fn test_incomplete_answers_are_rejected() {
    let answers = Answers::from_iter([("packageName", text("pkg"))]);
    assert!(GadgetAnswers::try_from(&answers).is_err());
}
