use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn rasterpad_cmd(temp: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("rasterpad").expect("binary exists");
    cmd.env("XDG_CONFIG_HOME", temp.path())
        .env("HOME", temp.path());
    cmd
}

#[test]
fn rasterpad_help_prints_usage() {
    let temp = TempDir::new().unwrap();
    rasterpad_cmd(&temp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Raster canvas editor"));
}

#[test]
fn blank_canvas_uses_config_defaults() {
    let temp = TempDir::new().unwrap();
    rasterpad_cmd(&temp)
        .assert()
        .success()
        .stdout(predicate::str::contains("Canvas 1000x700 (undo: 0, redo: 0)"));
}

#[test]
fn script_from_stdin_draws_and_exports() {
    let temp = TempDir::new().unwrap();
    let output = temp.path().join("out").join("drawing.png");

    rasterpad_cmd(&temp)
        .args(["--width", "200", "--height", "150", "--script", "-", "--output"])
        .arg(&output)
        .write_stdin("tool rect\ncolor #ff0000\ndrag 10 10 90 60\ntool fill\ndown 50 30\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Canvas 200x150 (undo: 2, redo: 0)"));

    let image = image::open(&output).unwrap().to_rgba8();
    assert_eq!(image.dimensions(), (200, 150));
    assert_eq!(image.get_pixel(50, 30).0, [255, 0, 0, 255]);
    assert_eq!(image.get_pixel(150, 100).0, [255, 255, 255, 255]);
}

#[test]
fn undo_shortcut_in_script_leaves_redo() {
    let temp = TempDir::new().unwrap();
    let script = temp.path().join("undo.txt");
    std::fs::write(&script, "// line then undo\ntool line\ndrag 0 0 99 99\nkey Ctrl+Z\n").unwrap();

    rasterpad_cmd(&temp)
        .args(["--width", "100", "--height", "100", "--script"])
        .arg(&script)
        .assert()
        .success()
        .stdout(predicate::str::contains("(undo: 0, redo: 1)"));
}

#[test]
fn resize_requests_are_clamped_to_minimum() {
    let temp = TempDir::new().unwrap();
    rasterpad_cmd(&temp)
        .args(["--script", "-"])
        .write_stdin("resize 20 20\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Canvas 100x100"));
}

#[test]
fn script_errors_report_line() {
    let temp = TempDir::new().unwrap();
    rasterpad_cmd(&temp)
        .args(["--width", "100", "--height", "100", "--script", "-"])
        .write_stdin("tool fill\n\ndown 500 5\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 3"));
}

#[test]
fn unknown_script_command_is_rejected() {
    let temp = TempDir::new().unwrap();
    rasterpad_cmd(&temp)
        .args(["--script", "-"])
        .write_stdin("spray 1 2\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown command 'spray'"));
}

#[test]
fn pathless_export_goes_to_configured_directory() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("config.toml");
    let exports = temp.path().join("exports");
    std::fs::write(
        &config,
        format!(
            "[canvas]\nwidth = 120\nheight = 120\n\n[export]\ndirectory = \"{}\"\nfilename_template = \"sketch\"\n",
            exports.display()
        ),
    )
    .unwrap();

    rasterpad_cmd(&temp)
        .arg("--config")
        .arg(&config)
        .args(["--script", "-"])
        .write_stdin("key Ctrl+S\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("sketch.png"));

    assert!(exports.join("sketch.png").is_file());
}

#[test]
fn init_config_writes_file_once() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("rasterpad").join("config.toml");

    rasterpad_cmd(&temp)
        .arg("--config")
        .arg(&config)
        .arg("--init-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created default config"));
    assert!(config.is_file());

    rasterpad_cmd(&temp)
        .arg("--config")
        .arg(&config)
        .arg("--init-config")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn dump_config_schema_prints_json() {
    Command::cargo_bin("dump_config_schema")
        .expect("binary exists")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"keybindings\""));
}
