use assert_cmd::Command;
use image::{GrayImage, Luma};
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tsmo::report::{BatchReport, ThresholdConfig};
use tsmo::ThresholdParams;

fn write_two_tone(path: &Path) {
    let img = GrayImage::from_fn(32, 32, |x, _| if x < 16 { Luma([20]) } else { Luma([180]) });
    img.save(path).expect("write png");
}

#[test]
fn prints_thresholds_for_each_image() {
    let dir = tempfile::tempdir().unwrap();
    write_two_tone(&dir.path().join("a.png"));
    write_two_tone(&dir.path().join("b.png"));

    Command::cargo_bin("tsmo")
        .unwrap()
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("a.png\nThreshold[0] - "))
        .stdout(predicate::str::contains("b.png\nThreshold[0] - "));
}

#[test]
fn broken_image_is_reported_and_batch_continues() {
    let dir = tempfile::tempdir().unwrap();
    write_two_tone(&dir.path().join("a.png"));
    fs::write(dir.path().join("b.png"), b"garbage").unwrap();
    write_two_tone(&dir.path().join("c.png"));
    let json = dir.path().join("report.json");

    Command::cargo_bin("tsmo")
        .unwrap()
        .arg(dir.path())
        .arg("--json")
        .arg(&json)
        .assert()
        .success()
        .stdout(predicate::str::contains("b.png\nerror: "))
        .stdout(predicate::str::contains("c.png\nThreshold[0] - "));

    let report = BatchReport::load_json(&json).unwrap();
    assert_eq!(report.images.len(), 3);
    assert_eq!(report.failures(), 1);
    assert_eq!(report.params, ThresholdParams::default());
}

#[test]
fn non_divisible_bins_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    write_two_tone(&dir.path().join("a.png"));

    Command::cargo_bin("tsmo")
        .unwrap()
        .arg(dir.path())
        .args(["--bins", "30"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not divisible"));
}

#[test]
fn config_file_supplies_inputs_and_params() {
    let dir = tempfile::tempdir().unwrap();
    let img = dir.path().join("a.png");
    write_two_tone(&img);
    let out = dir.path().join("out.json");

    let cfg = ThresholdConfig {
        inputs: vec![img.display().to_string()],
        output_path: Some(out.display().to_string()),
        recursive: false,
        params: Some(ThresholdParams::new(16, 256)),
    };
    let cfg_path = dir.path().join("config.json");
    cfg.write_json(&cfg_path).unwrap();

    Command::cargo_bin("tsmo")
        .unwrap()
        .arg("--config")
        .arg(&cfg_path)
        .assert()
        .success();

    let report = BatchReport::load_json(&out).unwrap();
    assert_eq!(report.params, ThresholdParams::new(16, 256));
    assert_eq!(report.images.len(), 1);
}

#[test]
fn log_level_controls_pipeline_diagnostics() {
    let dir = tempfile::tempdir().unwrap();
    write_two_tone(&dir.path().join("a.png"));

    Command::cargo_bin("tsmo")
        .unwrap()
        .env_remove("RUST_LOG")
        .arg(dir.path())
        .args(["--log-level", "debug"])
        .assert()
        .success()
        .stderr(predicate::str::contains("tsmo_core::pipeline"));

    Command::cargo_bin("tsmo")
        .unwrap()
        .env_remove("RUST_LOG")
        .arg(dir.path())
        .args(["--log-level", "off"])
        .assert()
        .success()
        .stderr(predicate::str::contains("tsmo_core").not());
}

#[test]
fn missing_inputs_fail() {
    Command::cargo_bin("tsmo")
        .unwrap()
        .assert()
        .failure()
        .stderr(predicate::str::contains("no inputs"));
}
