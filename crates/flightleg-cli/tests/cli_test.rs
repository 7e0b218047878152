use std::process::{Command, Output};

use serde_json::Value;

fn solve_leg(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_solve_leg"))
        .args(args)
        .output()
        .expect("failed to run solve_leg")
}

#[test]
fn plan_example_renders_the_full_table() {
    let output = solve_leg(&[
        "--track",
        "360",
        "--tas",
        "120",
        "--wind-dir",
        "270",
        "--wind-speed",
        "20",
        "--distance",
        "50",
    ]);

    assert!(output.status.success(), "expected success: {output:?}");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(
        stdout,
        "WCA:          -10°\n\
         Heading:      350°\n\
         Ground Speed: 118 kt\n\
         Leg Time:     00:25\n"
    );
}

#[test]
fn calm_air_leg_flies_the_track_at_tas() {
    let output = solve_leg(&[
        "--track",
        "90",
        "--tas",
        "100",
        "--wind-dir",
        "0",
        "--wind-speed",
        "0",
        "--distance",
        "100",
    ]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("90°"), "stdout: {stdout}");
    assert!(stdout.contains("100 kt"), "stdout: {stdout}");
    assert!(stdout.contains("01:00"), "stdout: {stdout}");
}

#[test]
fn json_output_carries_raw_and_formatted_values() {
    let output = solve_leg(&[
        "--track",
        "360",
        "--tas",
        "120",
        "--wind-dir",
        "270",
        "--wind-speed",
        "20",
        "--distance",
        "50",
        "--output",
        "json",
    ]);

    assert!(output.status.success());
    let report: Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be valid JSON");

    assert_eq!(report["inputs"]["track_deg"], 360.0);
    assert_eq!(report["inputs"]["tas_kt"], 120.0);
    assert_eq!(report["wca_deg"], -9.6);
    assert_eq!(report["heading_deg"], 350.4);
    assert_eq!(report["ground_speed_kt"], 118.3);
    let secs = report["leg_time_secs"].as_f64().unwrap();
    assert!((1521.0..1522.0).contains(&secs), "leg_time_secs: {secs}");
    assert_eq!(report["formatted"]["wca"], "-10°");
    assert_eq!(report["formatted"]["leg_time"], "00:25");
}

#[test]
fn unflyable_wind_exits_with_no_solution_status() {
    let output = solve_leg(&[
        "--track",
        "0",
        "--tas",
        "50",
        "--wind-dir",
        "90",
        "--wind-speed",
        "60",
        "--distance",
        "100",
    ]);

    assert_eq!(output.status.code(), Some(3));
    assert!(output.stdout.is_empty(), "table mode prints nothing");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Wind too strong to maintain track."),
        "stderr: {stderr}"
    );
}

#[test]
fn overwhelming_headwind_exits_with_no_solution_status() {
    let output = solve_leg(&[
        "--track",
        "0",
        "--tas",
        "50",
        "--wind-dir",
        "0",
        "--wind-speed",
        "60",
        "--distance",
        "100",
    ]);

    assert_eq!(output.status.code(), Some(3));
    assert!(output.stdout.is_empty(), "table mode prints nothing");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Wind too strong to maintain track."),
        "stderr: {stderr}"
    );
}

#[test]
fn unflyable_wind_in_json_mode_emits_an_error_object() {
    // Crosswind exactly matching the TAS leaves zero ground speed.
    let output = solve_leg(&[
        "--track",
        "0",
        "--tas",
        "100",
        "--wind-dir",
        "90",
        "--wind-speed",
        "100",
        "--distance",
        "50",
        "--output",
        "json",
    ]);

    assert_eq!(output.status.code(), Some(3));
    let report: Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be valid JSON");
    assert_eq!(report["error"], "Wind too strong to maintain track.");
}

#[test]
fn out_of_range_track_is_rejected() {
    let output = solve_leg(&[
        "--track",
        "400",
        "--tas",
        "120",
        "--wind-dir",
        "270",
        "--wind-speed",
        "20",
        "--distance",
        "50",
    ]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Track must be between 0 and 360."),
        "stderr: {stderr}"
    );
}

#[test]
fn negative_track_is_rejected() {
    let output = solve_leg(&[
        "--track=-10",
        "--tas",
        "120",
        "--wind-dir",
        "270",
        "--wind-speed",
        "20",
        "--distance",
        "50",
    ]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Track must be between 0 and 360."));
}

#[test]
fn non_finite_tas_is_rejected() {
    let output = solve_leg(&[
        "--track",
        "0",
        "--tas",
        "NaN",
        "--wind-dir",
        "270",
        "--wind-speed",
        "20",
        "--distance",
        "50",
    ]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("TAS must be a valid number."),
        "stderr: {stderr}"
    );
}

#[test]
fn missing_required_flags_are_a_usage_error() {
    let output = solve_leg(&["--track", "360"]);

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--tas"), "stderr: {stderr}");
}

#[test]
fn malformed_number_is_a_usage_error() {
    let output = solve_leg(&[
        "--track",
        "360",
        "--tas",
        "fast",
        "--wind-dir",
        "270",
        "--wind-speed",
        "20",
        "--distance",
        "50",
    ]);

    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn help_lists_all_input_flags() {
    let output = solve_leg(&["--help"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    for flag in ["--track", "--tas", "--wind-dir", "--wind-speed", "--distance", "--output"] {
        assert!(stdout.contains(flag), "help should mention {flag}");
    }
}
