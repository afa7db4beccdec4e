use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

const TINT: &str = r#"
name = "tint"

[[snippets]]
hook = "fragment"
declarations = "uniform vec4 tint;"
post = "cogl_color_out *= tint;"

[[snippets]]
hook = "vertex"
declarations = "uniform float u;"
post = "cogl_position_out.x += u;"
"#;

fn write_file(root: &Path, name: &str, contents: &str) -> PathBuf {
    let path = root.join(name);
    fs::write(&path, contents).unwrap();
    path
}

fn snippetc(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_snippetc"))
        .env_remove("SNIPPETC_DEFAULT_CODE")
        .env("RUST_LOG", "warn")
        .args(args)
        .output()
        .expect("failed to run snippetc")
}

#[test]
fn hooks_lists_every_hook_with_its_value() {
    let output = snippetc(&["hooks"]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    for (name, value) in [
        ("vertex", "0"),
        ("fragment", "2048"),
        ("texture-coord-transform", "4096"),
        ("layer-fragment", "6144"),
        ("texture-lookup", "6145"),
    ] {
        let line = stdout
            .lines()
            .find(|line| line.starts_with(&format!("{name} ")))
            .unwrap_or_else(|| panic!("missing hook {name} in:\n{stdout}"));
        assert!(line.contains(value), "{line}");
    }
    let layer = stdout
        .lines()
        .find(|line| line.trim_start().starts_with("vec4 cogl_layer"))
        .unwrap_or_else(|| panic!("missing cogl_layer builtin in:\n{stdout}"));
    assert!(layer.contains("resulting color for the layer"), "{layer}");
}

#[test]
fn splice_prints_declarations_and_wrapped_default() {
    let root = TempDir::new().unwrap();
    let file = write_file(root.path(), "tint.toml", TINT);

    let output = snippetc(&[
        "splice",
        file.to_str().unwrap(),
        "--hook",
        "fragment",
        "--default",
        "cogl_color_out = cogl_color_in;",
    ]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(
        stdout,
        "uniform vec4 tint;\n\n{\n    cogl_color_out = cogl_color_in;\n    cogl_color_out *= tint;\n}\n"
    );
}

#[test]
fn list_json_round_trips_sections() {
    let root = TempDir::new().unwrap();
    let file = write_file(root.path(), "tint.toml", TINT);

    let output = snippetc(&["list", file.to_str().unwrap(), "--json"]);
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["name"], "tint");
    assert_eq!(value["snippets"][1]["hook"], "vertex");
    assert_eq!(value["snippets"][1]["post"], "cogl_position_out.x += u;");
    assert!(value["snippets"][1].get("pre").is_none());
}

#[test]
fn check_fails_on_invalid_file() {
    let root = TempDir::new().unwrap();
    let file = write_file(
        root.path(),
        "broken.toml",
        "[[snippets]]\nhook = \"texture-lookup\"\n",
    );

    let output = snippetc(&["check", file.to_str().unwrap()]);
    assert!(!output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("no source sections"), "{stdout}");
}

#[test]
fn check_accepts_valid_file() {
    let root = TempDir::new().unwrap();
    let file = write_file(root.path(), "tint.toml", TINT);

    let output = snippetc(&["check", file.to_str().unwrap()]);
    assert!(output.status.success());
    assert!(String::from_utf8(output.stdout).unwrap().contains("ok (2 snippet(s))"));
}
