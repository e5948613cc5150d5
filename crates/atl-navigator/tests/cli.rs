use std::time::Duration;

use assert_cmd::Command;
use atl_navigator::data::gate_count;
use atl_navigator::Concourse;
use predicates::str::contains;
use serde_json::Value;

const NO_CONFIG: &str = "/nonexistent/atlnav/config.toml";

fn atlnav() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("atlnav");
    cmd.args(["--config", NO_CONFIG]);
    cmd
}

fn json_stdout(cmd: &mut Command) -> Value {
    let output = cmd.assert().success().get_output().stdout.clone();
    serde_json::from_slice(&output).unwrap()
}

#[test]
fn walk_same_concourse_rounds_half_up() {
    atlnav()
        .args(["walk", "A1", "A10"])
        .assert()
        .success()
        .stdout(contains("Approximately 5 minutes walking time"));
}

#[test]
fn walk_between_concourses() {
    atlnav()
        .args(["walk", "T1", "F1"])
        .assert()
        .success()
        .stdout(contains("Approximately 23 minutes walking time"));
}

#[test]
fn walk_unknown_gate_is_a_notice() {
    atlnav()
        .args(["walk", "Z99", "A1"])
        .assert()
        .success()
        .stderr(contains("Invalid gate numbers"))
        .stderr(contains("Z99"));
}

#[test]
fn gates_for_one_concourse_as_json() {
    let gates = json_stdout(atlnav().args(["gates", "F", "--json"]));
    let gates = gates.as_array().unwrap();
    assert_eq!(gates.len(), gate_count(Concourse::F) as usize);
    assert!(gates.iter().all(|g| g["concourse"] == "F"));
}

#[test]
fn gate_shows_current_flight() {
    atlnav()
        .args(["gate", "A17"])
        .assert()
        .success()
        .stdout(contains("DL404"));
}

#[test]
fn gate_unknown_fails() {
    atlnav()
        .args(["gate", "Z99"])
        .assert()
        .failure()
        .stderr(contains("gate not found: Z99"));
}

#[test]
fn flights_filtered_by_airline() {
    let board = json_stdout(atlnav().args(["flights", "--airline", "dl", "--json"]));
    let departures = board["departures"].as_array().unwrap();
    assert!(!departures.is_empty());
    assert!(departures.len() <= 12);
    assert!(departures
        .iter()
        .chain(board["arrivals"].as_array().unwrap())
        .all(|f| f["airline"]["code"] == "DL"));
}

#[test]
fn services_lounge_filter() {
    let items = json_stdout(atlnav().args(["services", "--filter", "LOUNGE", "--json"]));
    let items = items.as_array().unwrap();
    assert_eq!(items.len(), 14);
    assert!(items.iter().all(|i| i["kind"] == "lounge"));
}

#[test]
fn map_search_on_concourse() {
    let items = json_stdout(atlnav().args(["map", "A", "--query", "shake", "--json"]));
    let items = items.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["item"]["name"], "Shake Shack");
}

#[test]
fn analytics_report_has_four_cards() {
    let report = json_stdout(
        atlnav()
            .env("ATLNAV_DATA__SEED", "7")
            .args(["analytics", "--json"]),
    );
    assert_eq!(report["stat_cards"].as_array().unwrap().len(), 4);
    assert_eq!(report["analytics"]["hourly_traffic"].as_array().unwrap().len(), 24);
}

#[test]
fn config_path_names_app_dir() {
    atlnav()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(contains("atl-navigator"));
}

#[test]
fn config_env_override() {
    atlnav()
        .env("ATLNAV_BOARD__MAX_ROWS", "5")
        .args(["config", "show", "--json"])
        .assert()
        .success()
        .stdout(contains("\"max_rows\": 5"));
}

#[test]
fn invalid_env_config_fails() {
    atlnav()
        .env("ATLNAV_BOARD__MAX_ROWS", "0")
        .args(["config", "show"])
        .assert()
        .failure()
        .stderr(contains("max_rows"));
}

#[test]
fn watch_stops_after_ticks() {
    atlnav()
        .env("ATLNAV_REFRESH__ANALYTICS_INTERVAL_MS", "50")
        .args(["watch", "--ticks", "2"])
        .timeout(Duration::from_secs(30))
        .assert()
        .success()
        .stdout(contains("analytics refreshed"));
}
