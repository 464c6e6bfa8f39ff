//! Command-line behaviour of the `ariadne` binary.

use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

fn fixture(name: &str) -> String {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../ariadne-paths/tests/fixtures")
        .join(name)
        .to_string_lossy()
        .into_owned()
}

fn ariadne(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_ariadne"))
        .args(args)
        .env_remove("ARIADNE_CONFIG")
        .env_remove("ARIADNE_SENTINEL_PREFIX")
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run ariadne")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_prints_to_stdout() {
    let output = ariadne(&[
        &fixture("actblue_control.json"),
        &fixture("actblue_annotated.json"),
    ]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("def get_contribution_id(obj: Union[Dict, List]) -> Any:"));
    assert!(out.contains("def get_ip_address(obj: Union[Dict, List]) -> Any:"));
}

#[test]
fn test_writes_to_output_file() {
    let dir = TempDir::new().unwrap();
    let output_file = dir.path().join("helpers.py");
    let output_arg = output_file.to_string_lossy().into_owned();

    let output = ariadne(&[
        &fixture("actblue_control.json"),
        &fixture("actblue_annotated.json"),
        "--output",
        &output_arg,
    ]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let content = std::fs::read_to_string(&output_file).unwrap();
    assert!(content.contains("def get_contribution_id(obj: Union[Dict, List]) -> Any:"));
    assert!(content.contains("def get_ip_address(obj: Union[Dict, List]) -> Any:"));
    assert!(stdout(&output).contains(&format!("Successfully wrote helpers to {output_arg}")));
}

#[test]
fn test_emit_mapping_json() {
    let output = ariadne(&[
        &fixture("actblue_control.json"),
        &fixture("actblue_annotated.json"),
        "--emit",
        "mapping",
    ]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let mapping: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(
        mapping["__want__:candidate_allocation"],
        serde_json::json!(["contribution", "allocations", 0, "amount"])
    );
    assert_eq!(mapping.as_object().unwrap().len(), 10);
}

#[test]
fn test_missing_input_fails() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.json").to_string_lossy().into_owned();

    let output = ariadne(&[&fixture("actblue_control.json"), &missing]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("Error: failed to read"));
    assert!(stdout(&output).is_empty());
}

#[test]
fn test_malformed_input_fails() {
    let dir = TempDir::new().unwrap();
    let bad = dir.path().join("bad.json");
    std::fs::write(&bad, "{ not json").unwrap();

    let output = ariadne(&[&fixture("actblue_control.json"), &bad.to_string_lossy()]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("as JSON"));
}

#[test]
fn test_strict_rejects_duplicate_tags() {
    let dir = TempDir::new().unwrap();
    let control = dir.path().join("control.json");
    let annotated = dir.path().join("annotated.json");
    std::fs::write(&control, r#"{"a": 1, "b": 2}"#).unwrap();
    std::fs::write(&annotated, r#"{"a": "__want__:x", "b": "__want__:x"}"#).unwrap();
    let control = control.to_string_lossy().into_owned();
    let annotated = annotated.to_string_lossy().into_owned();

    let relaxed = ariadne(&[&control, &annotated]);
    assert!(relaxed.status.success());
    assert!(stdout(&relaxed).contains("return _get_data(obj, ('b',), 'x')"));
    assert!(stderr(&relaxed).contains("placeholder tag used more than once"));

    let strict = ariadne(&[&control, &annotated, "--strict"]);
    assert!(!strict.status.success());
    assert!(stderr(&strict).contains("appears at both $.a and $.b"));
}

#[test]
fn test_config_file_and_flag_override() {
    let dir = TempDir::new().unwrap();
    let control = dir.path().join("control.json");
    let annotated = dir.path().join("annotated.json");
    let config = dir.path().join("ariadne.json");
    std::fs::write(&control, r#"{"user": {"id": 7, "name": "Ada"}}"#).unwrap();
    std::fs::write(&annotated, r#"{"user": {"id": "@@user_id", "name": "%%name"}}"#).unwrap();
    std::fs::write(&config, r#"{"sentinel_prefix": "@@", "accessor_prefix": "fetch_"}"#).unwrap();
    let control = control.to_string_lossy().into_owned();
    let annotated = annotated.to_string_lossy().into_owned();
    let config = config.to_string_lossy().into_owned();

    let from_config = ariadne(&[&control, &annotated, "--config", &config]);
    assert!(from_config.status.success(), "stderr: {}", stderr(&from_config));
    let out = stdout(&from_config);
    assert!(out.contains("def fetch_user_id(obj: Union[Dict, List]) -> Any:"));
    assert!(!out.contains("fetch_name"));

    let overridden = ariadne(&[&control, &annotated, "--config", &config, "--prefix", "%%"]);
    assert!(overridden.status.success(), "stderr: {}", stderr(&overridden));
    let out = stdout(&overridden);
    assert!(out.contains("def fetch_name(obj: Union[Dict, List]) -> Any:"));
    assert!(!out.contains("fetch_user_id"));
}

#[test]
fn test_empty_prefix_fails() {
    let output = ariadne(&[
        &fixture("actblue_control.json"),
        &fixture("actblue_annotated.json"),
        "--prefix",
        "",
    ]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("sentinel prefix must not be empty"));
}
