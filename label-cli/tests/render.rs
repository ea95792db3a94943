use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, content: &str) -> String {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path.to_string_lossy().into_owned()
}

fn label_render(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_label-render"))
        .args(args)
        .env_remove("LOG_DIR")
        .env_remove("LABEL_USER")
        .env("LOG_LEVEL", "warn")
        .output()
        .unwrap()
}

const PARTS: &str = r#"[
    {"type": "part", "id": 1, "name": "Resistor 10k"},
    {"type": "part", "id": 2, "name": "Capacitor 1uF"}
]"#;

#[test]
fn test_renders_to_stdout() {
    let dir = TempDir::new().unwrap();
    let options = write(&dir, "options.json", r#"{"lines": "<b>{{name}}</b>", "barcode_type": "code128"}"#);
    let elements = write(&dir, "elements.json", PARTS);

    let out = label_render(&["--options", &options, "--elements", &elements]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));

    let html = String::from_utf8(out.stdout).unwrap();
    assert!(html.contains("<title>Part Resistor 10k</title>"));
    assert!(html.contains("<b>Resistor 10k</b>"));
    assert!(html.contains("<b>Capacitor 1uF</b>"));
}

#[test]
fn test_renders_to_file() {
    let dir = TempDir::new().unwrap();
    let options = write(&dir, "options.json", r#"{"lines": "{{ page }}: {{ element.name }}", "lines_mode": "twig"}"#);
    let elements = write(&dir, "elements.json", PARTS);
    let output = dir.path().join("labels.html");

    let out = label_render(&[
        "--options",
        &options,
        "--elements",
        &elements,
        "--output",
        &output.to_string_lossy(),
    ]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    assert!(out.stdout.is_empty());

    let html = std::fs::read_to_string(Path::new(&output)).unwrap();
    assert!(html.contains("1: Resistor 10k"));
    assert!(html.contains("2: Capacitor 1uF"));
}

#[test]
fn test_unsupported_element_fails() {
    let dir = TempDir::new().unwrap();
    let options = write(&dir, "options.json", r#"{"lines": "{{name}}", "supported_element": "part_lot"}"#);
    let elements = write(&dir, "elements.json", PARTS);

    let out = label_render(&["--options", &options, "--elements", &elements]);
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
    assert!(String::from_utf8_lossy(&out.stderr).contains("Element #1"));
}

#[test]
fn test_broken_template_produces_no_output() {
    let dir = TempDir::new().unwrap();
    let options = write(&dir, "options.json", r#"{"lines": "{% if %}", "lines_mode": "template"}"#);
    let elements = write(&dir, "elements.json", PARTS);

    let out = label_render(&["--options", &options, "--elements", &elements]);
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
    assert!(String::from_utf8_lossy(&out.stderr).contains("Label generation failed"));
}
