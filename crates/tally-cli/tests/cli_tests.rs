//! Integration tests for the tally CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn tally() -> Command {
    let mut cmd = Command::cargo_bin("tally").unwrap();
    cmd.env_remove("TALLY_CONFIG").env_remove("RUST_LOG");
    cmd
}

fn json_output(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.output().unwrap();
    assert!(output.status.success(), "command failed: {output:?}");
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn test_cli_help() {
    tally()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("break-even"))
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn test_margin_table() {
    tally()
        .args(["margin", "--price", "25", "--cost", "15"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Gross Margin"))
        .stdout(predicate::str::contains("40%"));
}

#[test]
fn test_margin_json() {
    let value = json_output(tally().args(["--format", "json", "margin", "--price", "25", "--cost", "15"]));
    assert_eq!(value["margin"], 10.0);
    assert_eq!(value["percentage_points"], 40.0);
}

#[test]
fn test_margin_zero_price() {
    tally()
        .args(["-f", "minimal", "margin", "--price", "0", "--cost", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0%"));
}

#[test]
fn test_ticket_minimal() {
    tally()
        .args(["-f", "minimal", "ticket", "--total", "1250", "--orders", "50"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("25"));
}

#[test]
fn test_ticket_no_orders() {
    tally()
        .args(["-f", "minimal", "ticket", "--total", "1250", "--orders", "0"])
        .assert()
        .success()
        .stdout(predicate::str::diff("0\n"));
}

#[test]
fn test_variation_from_zero() {
    tally()
        .args(["-f", "minimal", "variation", "--current", "500", "--previous", "0"])
        .assert()
        .success()
        .stdout(predicate::str::diff("100%\n"));
}

#[test]
fn test_variation_negative_values() {
    tally()
        .args(["-f", "minimal", "variation", "--current", "-50", "--previous", "100"])
        .assert()
        .success()
        .stdout(predicate::str::diff("-150%\n"));
}

#[test]
fn test_break_even_units() {
    tally()
        .args(["-f", "minimal", "break-even", "--fixed", "1000", "--price", "25", "--variable", "15"])
        .assert()
        .success()
        .stdout(predicate::str::diff("100\n"));
}

#[test]
fn test_break_even_unreachable() {
    tally()
        .args(["-f", "minimal", "break-even", "--fixed", "1000", "--price", "10", "--variable", "12"])
        .assert()
        .success()
        .stdout(predicate::str::contains("∞"));

    let value = json_output(tally().args([
        "-f", "json", "break-even", "--fixed", "1000", "--price", "10", "--variable", "12",
    ]));
    assert_eq!(value["break_even"], "unreachable");
}

#[test]
fn test_break_even_extreme_price() {
    let value = json_output(tally().args([
        "-f",
        "json",
        "break-even",
        "--fixed",
        "1",
        "--price",
        "79228162514264337593543950335",
        "--variable",
        "-1",
    ]));
    assert!(value["contribution_margin"].as_f64().unwrap() > 7.9e28);
    assert!(value["break_even"]["units"].is_number());
}

#[test]
fn test_cash_flow_extreme_values() {
    tally()
        .args([
            "-f",
            "minimal",
            "cash-flow",
            "--inflow",
            "79228162514264337593543950335",
            "--outflow",
            "0",
            "--opening",
            "1",
        ])
        .assert()
        .success()
        .stdout(predicate::str::diff(
            "79228162514264337593543950335 79228162514264337593543950335\n",
        ));
}

#[test]
fn test_ebitda_with_addbacks() {
    let value = json_output(tally().args([
        "-f",
        "json",
        "ebitda",
        "--revenue",
        "10000",
        "--variable",
        "4000",
        "--fixed",
        "3000",
        "--depreciation",
        "500",
    ]));
    assert_eq!(value["ebitda"], 3500.0);
    assert_eq!(value["amortization"], 0.0);
}

#[test]
fn test_cash_flow_csv() {
    tally()
        .args(["-f", "csv", "cash-flow", "--inflow", "800", "--outflow", "1000", "--opening", "150"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("metric,value"))
        .stdout(predicate::str::contains("Net Flow,-200.00"))
        .stdout(predicate::str::contains("Ending Balance,-50.00"));
}

#[test]
fn test_bom_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bom.json");
    fs::write(
        &path,
        r#"{
            "ingredients": [
                {"unit_price": 4.20, "quantity": 0.5},
                {"unitPrice": "1.10", "quantity": 2}
            ],
            "packaging": [{"unit_price": 0.35, "quantity": 1}]
        }"#,
    )
    .unwrap();

    tally()
        .args(["-f", "minimal", "bom", "--file"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::diff("4.65\n"));
}

#[test]
fn test_bom_missing_file() {
    tally()
        .args(["bom", "--file", "/nonexistent/bom.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot read"));
}

#[test]
fn test_trend_csv() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("sales.csv");
    fs::write(
        &path,
        "date,value\n2024-03-01,10\n2024-03-02,10\n2024-03-03,20\n2024-03-04,20\n",
    )
    .unwrap();

    tally()
        .args(["-f", "minimal", "trend", "--file"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::diff("increasing\n"));

    let value = json_output(tally().args(["-f", "json", "trend", "--file"]).arg(&path));
    assert_eq!(value["average"], 15.0);
    assert_eq!(value["variance"], 25.0);
}

#[test]
fn test_trend_bad_record() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("sales.csv");
    fs::write(&path, "date,value\n2024-03-01,10\n2024-03-02,lots\n").unwrap();

    tally()
        .args(["trend", "--file"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 3"));
}

#[test]
fn test_trend_empty_series_warns() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("empty.csv");
    fs::write(&path, "date,value\n").unwrap();

    tally()
        .args(["-f", "minimal", "trend", "--file"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::diff("stable\n"))
        .stderr(predicate::str::contains("empty"));
}

#[test]
fn test_report_json() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("march.json");
    fs::write(
        &path,
        r#"{
            "current": {
                "label": "2024-03",
                "revenue": 1000,
                "order_count": 40,
                "cost_of_goods": 600,
                "variable_costs": 300,
                "fixed_costs": 400,
                "depreciation": 50,
                "investment": 2000,
                "unit": {"unit_price": 25, "unit_variable_cost": 15}
            },
            "previous": {"revenue": 800},
            "series": [
                {"date": "2024-03-01", "value": 30},
                {"date": "2024-03-02", "value": 31}
            ]
        }"#,
    )
    .unwrap();

    let value = json_output(tally().args(["-f", "json", "report", "--file"]).arg(&path));
    assert_eq!(value["label"], "2024-03");
    assert_eq!(value["average_ticket"], 25.0);
    assert_eq!(value["revenue_variation"], 25.0);
    assert_eq!(value["ebitda"], 350.0);
    assert_eq!(value["return_on_investment"], 15.0);
    assert_eq!(value["break_even"]["units"], 40.0);
    assert_eq!(value["trend"]["direction"], "stable");
}

#[test]
fn test_config_file_rounding() {
    let dir = TempDir::new().unwrap();
    let half_up = dir.path().join("half_up.toml");
    let half_even = dir.path().join("half_even.json");
    fs::write(&half_up, "precision = 0\n").unwrap();
    fs::write(&half_even, r#"{"precision": 0, "rounding": "half_even"}"#).unwrap();

    tally()
        .args(["-f", "minimal", "roi", "--profit", "1", "--investment", "8"])
        .assert()
        .success()
        .stdout(predicate::str::diff("12.5%\n"));

    tally()
        .arg("--config")
        .arg(&half_up)
        .args(["-f", "minimal", "roi", "--profit", "1", "--investment", "8"])
        .assert()
        .success()
        .stdout(predicate::str::diff("13%\n"));

    tally()
        .env("TALLY_CONFIG", &half_even)
        .args(["-f", "minimal", "roi", "--profit", "1", "--investment", "8"])
        .assert()
        .success()
        .stdout(predicate::str::diff("12%\n"));
}

#[test]
fn test_invalid_config_rejected() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("tally.toml");
    fs::write(&config, "precision = 42\n").unwrap();

    tally()
        .arg("--config")
        .arg(&config)
        .args(["roi", "--profit", "1", "--investment", "8"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"))
        .stderr(predicate::str::contains("exceeds maximum"));
}

#[test]
fn test_invalid_decimal_rejected() {
    tally()
        .args(["margin", "--price", "abc", "--cost", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}
