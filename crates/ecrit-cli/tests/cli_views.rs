//! # CLI View Tests
//!
//! Runs the `files` and `criteria` handlers against a temporary document
//! directory. All tests share the built-in date table, since the table is
//! installed once per process.

use std::path::Path;

use ecrit_cli::context::{LoadArgs, OutputFormat};
use ecrit_cli::criteria::{self, CriteriaArgs};
use ecrit_cli::files::{self, FilesArgs};

fn write_fixture(dir: &Path) {
    std::fs::write(
        dir.join("belowThreshold.json"),
        r#"[
            {"period": {"end_date": "RELEASE_ECRITERIA_ARTICLE_17"}, "criteria": {"languages": {"rules": ["r1"]}}},
            {"period": {"start_date": "RELEASE_ECRITERIA_ARTICLE_17"}, "criteria": {"languages": {"rules": ["r1", "r2"]}, "bankruptcy": {"rules": ["b1"]}}}
        ]"#,
    )
    .unwrap();
    std::fs::write(
        dir.join("negotiation.quick.json"),
        r#"[{"period": {}, "criteria": {"languages": {"rules": ["n1"]}}}]"#,
    )
    .unwrap();
    std::fs::write(dir.join("esco.json"), "{broken").unwrap();
    std::fs::write(
        dir.join("ecrit.yaml"),
        "files:\n  - belowThreshold\n  - negotiation.quick\n  - esco\n  - reporting\n",
    )
    .unwrap();
}

fn load_args(dir: &Path, format: OutputFormat) -> LoadArgs {
    LoadArgs {
        dir: dir.to_path_buf(),
        config: Some(dir.join("ecrit.yaml")),
        format,
    }
}

#[test]
fn files_text_lists_manifest_in_order() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(dir.path());
    let args = FilesArgs {
        load: load_args(dir.path(), OutputFormat::Text),
        only: vec![],
    };
    let mut out = Vec::new();
    files::run(&args, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    let headers: Vec<&str> = text.lines().filter(|l| !l.starts_with(' ') && !l.is_empty()).collect();
    assert_eq!(
        headers,
        vec![
            "belowThreshold (2 periods, 2 current rules)",
            "negotiation.quick (1 periods, 1 current rules)",
            "esco (0 periods, 0 current rules)",
            "reporting (0 periods, 0 current rules)",
        ]
    );
    assert!(text.contains("No rules defined"));
}

#[test]
fn criteria_json_totals() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(dir.path());
    let args = CriteriaArgs {
        load: load_args(dir.path(), OutputFormat::Json),
        only: vec!["languages".to_string()],
    };
    let mut out = Vec::new();
    criteria::run(&args, &mut out).unwrap();
    let json: serde_json::Value = serde_json::from_slice(&out).unwrap();

    let sections = json.as_array().unwrap();
    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0]["criterion"], "languages");
    assert_eq!(sections[0]["file_count"], 2);
    assert_eq!(sections[0]["current_rule_total"], 3);
    assert_eq!(sections[0]["rows"][0]["file"], "belowThreshold");
    assert_eq!(sections[0]["rows"][1]["rules"], serde_json::json!(["n1"]));
}

#[test]
fn missing_config_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let args = FilesArgs {
        load: LoadArgs {
            dir: dir.path().to_path_buf(),
            config: Some(dir.path().join("absent.yaml")),
            format: OutputFormat::Text,
        },
        only: vec![],
    };
    let mut out = Vec::new();
    assert!(files::run(&args, &mut out).is_err());
}
