//! CLI integration tests for shape3d.
//!
//! These tests run the real binary with an isolated home directory so no
//! user configuration leaks in.

use std::fs;
use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use tempfile::TempDir;

/// Get the shape3d binary command, run inside `dir` with `dir` as HOME.
fn shape3d(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("shape3d").unwrap();
    cmd.current_dir(dir.path())
        .env("HOME", dir.path())
        .env_remove("SHAPE3D_CONFIG");
    cmd
}

fn temp_dir() -> TempDir {
    TempDir::new().unwrap()
}

// ============================================================================
// shape3d create
// ============================================================================

#[test]
fn test_create_sphere() {
    let tmp = temp_dir();

    shape3d(&tmp)
        .args(["create", "sphere", "5", "--name", "Ball", "--color", "Red"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Sphere {name='Ball', color='Red'}; radius=5",
        ))
        .stdout(predicate::str::contains("Surface Area: 314.16"))
        .stdout(predicate::str::contains("Volume: 523.60"));
}

#[test]
fn test_create_without_color_is_unspecified() {
    let tmp = temp_dir();

    shape3d(&tmp)
        .args(["create", "cone", "3", "4", "--name", "Tip"])
        .assert()
        .success()
        .stdout(predicate::str::contains("color='Unspecified'"))
        .stdout(predicate::str::contains("radius=3, height=4"));
}

#[test]
fn test_create_uses_config_default_color() {
    let tmp = temp_dir();
    fs::write(
        tmp.path().join("shape3d.toml"),
        "[defaults]\ncolor = \"Green\"\n",
    )
    .unwrap();

    shape3d(&tmp)
        .args(["create", "cube", "2", "--name", "Die"])
        .assert()
        .success()
        .stdout(predicate::str::contains("color='Green'"));
}

#[test]
fn test_create_prism_with_two_dimensions_fails() {
    let tmp = temp_dir();

    shape3d(&tmp)
        .args(["create", "rectangular-prism", "1", "2", "--name", "Flat"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "no constructor for `rectangular-prism` takes 2 dimension(s)",
        ))
        .stderr(predicate::str::contains("accepts 3 dimension(s)"));
}

#[test]
fn test_create_negative_dimension_fails() {
    let tmp = temp_dir();

    shape3d(&tmp)
        .args(["create", "cylinder", "-2", "5", "--name", "Bad"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("radius must be finite and >= 0, got -2"));
}

#[test]
fn test_create_blank_name_fails() {
    let tmp = temp_dir();

    shape3d(&tmp)
        .args(["create", "cube", "1", "--name", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("shape name must be non-empty"));
}

#[test]
fn test_create_unknown_kind_fails() {
    let tmp = temp_dir();

    shape3d(&tmp)
        .args(["create", "torus", "1", "2", "--name", "Donut"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown shape variant `torus`"))
        .stderr(predicate::str::contains("shape3d kinds"));
}

#[test]
fn test_create_json() {
    let tmp = temp_dir();

    let output = shape3d(&tmp)
        .args(["--format", "json", "create", "cube", "3", "--name", "Box"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["kind"], "cube");
    assert_eq!(value["name"], "Box");
    assert_eq!(value["color"], "Unspecified");
    assert_eq!(value["volume"], 27.0);
    assert_eq!(value["surface_area"], 54.0);
}

// ============================================================================
// shape3d list / analyze
// ============================================================================

#[test]
fn test_list_demo_set() {
    let tmp = temp_dir();

    shape3d(&tmp)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Sphere {name='Red Ball'"))
        .stdout(predicate::str::contains("4. RectangularPrism {name='Brown Package'"));
}

#[test]
fn test_list_from_config() {
    let tmp = temp_dir();
    let config = tmp.path().join("shapes.toml");
    fs::write(
        &config,
        r#"
[[shapes]]
kind = "cone"
name = "Ice Cream"
color = "Tan"
dimensions = [3.0, 4.0]
"#,
    )
    .unwrap();

    shape3d(&tmp)
        .args(["--config", config.to_str().unwrap(), "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Cone {name='Ice Cream', color='Tan'}; radius=3, height=4",
        ))
        .stdout(predicate::str::contains("Red Ball").not());
}

#[test]
fn test_bad_config_entry_is_reported() {
    let tmp = temp_dir();
    fs::write(
        tmp.path().join("shape3d.toml"),
        "[[shapes]]\nkind = \"sphere\"\nname = \"Ball\"\ndimensions = [1.0, 2.0]\n",
    )
    .unwrap();

    shape3d(&tmp)
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no constructor for `sphere`"))
        .stderr(predicate::str::contains("configured shape set"));
}

#[test]
fn test_missing_explicit_config_fails() {
    let tmp = temp_dir();

    shape3d(&tmp)
        .args(["--config", "nope.toml", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read config file"));
}

#[test]
fn test_analyze_demo_set() {
    let tmp = temp_dir();

    shape3d(&tmp)
        .arg("analyze")
        .assert()
        .success()
        .stdout(predicate::str::contains("Largest Volume: Red Ball"))
        .stdout(predicate::str::contains("Smallest Volume: Silver Can"))
        .stdout(predicate::str::contains("Total Shapes: 4"))
        .stdout(predicate::str::contains("Sphere: 1 (25.0%)"));
}

#[test]
fn test_analyze_json() {
    let tmp = temp_dir();

    let output = shape3d(&tmp)
        .args(["--format", "json", "analyze"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["count"], 4);
    assert_eq!(value["largest_volume"]["name"], "Red Ball");
    assert_eq!(value["distribution"]["cube"]["count"], 1);
}

// ============================================================================
// shape3d bench / kinds / completions
// ============================================================================

#[test]
fn test_bench_completes() {
    let tmp = temp_dir();

    shape3d(&tmp)
        .args(["bench", "--iterations", "100"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Performance results (100 iterations):"))
        .stdout(predicate::str::contains("Volume Calculations:"))
        .stdout(predicate::str::contains("Brown Package (RectangularPrism)"));
}

#[test]
fn test_bench_time_limit_reports_partial() {
    let tmp = temp_dir();

    let output = shape3d(&tmp)
        .args([
            "--format",
            "json",
            "bench",
            "--iterations",
            "18446744073709551615",
            "--time-limit-ms",
            "50",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["status"]["status"], "cancelled");
    assert_eq!(value["per_shape"].as_array().unwrap().len(), 4);
}

#[test]
fn test_kinds_lists_paths() {
    let tmp = temp_dir();

    shape3d(&tmp)
        .arg("kinds")
        .assert()
        .success()
        .stdout(predicate::str::contains("rectangular-prism (RectangularPrism)"))
        .stdout(predicate::str::contains("cone(name, color, radius, height)"))
        .stdout(predicate::str::contains("cube(name, side_length)"));
}

#[test]
fn test_completions() {
    let tmp = temp_dir();

    shape3d(&tmp)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("shape3d"));
}
