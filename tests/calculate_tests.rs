use predicates::prelude::*;

#[test]
fn calculate_default_preset_in_dutch() {
    let mut cmd = assert_cmd::cargo_bin_cmd!("roi-calc");
    cmd.arg("calculate");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("ROI-berekening (preset: light)"))
        .stdout(predicate::str::contains("Besparing per week: € 455"))
        .stdout(predicate::str::contains("Besparing per jaar: € 23.660"))
        .stdout(predicate::str::contains("Uren bespaard: 364 uur/jaar"));
}

#[test]
fn calculate_with_overrides_in_english() {
    let mut cmd = assert_cmd::cargo_bin_cmd!("roi-calc");
    cmd.args([
        "calculate", "--locale", "en", "-p", "manufacturing", "-t", "10", "-a", "0.5",
    ]);

    // 10 * 55 * 4 * 0.5 = 1100 per week
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Team size: 10 people"))
        .stdout(predicate::str::contains("Savings per week: €1,100"))
        .stdout(predicate::str::contains("Savings per year: €57,200"));
}

#[test]
fn calculate_rejects_out_of_range_inputs_with_first_violation() {
    let mut cmd = assert_cmd::cargo_bin_cmd!("roi-calc");
    cmd.args(["calculate", "-t", "0", "-r", "5"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Teamgrootte moet tussen 1 en 1000 zijn"))
        .stderr(predicate::str::contains("Uurtarief").not());
}

#[test]
fn calculate_accepts_team_size_boundaries() {
    for team in ["1", "1000"] {
        let mut cmd = assert_cmd::cargo_bin_cmd!("roi-calc");
        cmd.args(["calculate", "-t", team]);
        cmd.assert().success();
    }
    let mut cmd = assert_cmd::cargo_bin_cmd!("roi-calc");
    cmd.args(["calculate", "--locale", "en", "-t", "1001"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Team size must be between 1 and 1000"));
}

#[test]
fn calculate_as_json() {
    let mut cmd = assert_cmd::cargo_bin_cmd!("roi-calc");
    cmd.args(["calculate", "-f", "json"]);

    let output = cmd.assert().success().get_output().stdout.clone();
    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["result"]["weekly_savings"], 455);
    assert_eq!(value["result"]["monthly_savings"], 1972);
    assert_eq!(value["result"]["annual_savings"], 23660);
    assert_eq!(value["result"]["hours_saved_annually"], 364);
    assert_eq!(value["query"], "team=5&rate=65&hours=2&adoptie=0.7");
}

#[test]
fn calculate_prints_method_note_and_contact_link() {
    let mut cmd = assert_cmd::cargo_bin_cmd!("roi-calc");
    cmd.args(["calculate", "--method-note", "--contact-path", "/contact"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Rekenmethode:"))
        .stdout(predicate::str::contains("/contact?preset=light&annualSavings=23660"));
}
