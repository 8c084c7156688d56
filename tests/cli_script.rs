mod common;

use cashflow_storage_json::save_ledger_to_path;
use common::{script_command, steady_ledger};
use predicates::{prelude::PredicateBooleanExt, str::contains};
use regex::Regex;
use tempfile::{tempdir, NamedTempFile};

#[test]
fn script_mode_builds_and_saves_a_ledger() {
    let home = tempdir().unwrap();
    let tmp = NamedTempFile::new().unwrap();
    let input = format!(
        "ledger new Demo\n\
         add income 2024-06-25 3000 Salary\n\
         add expense 2024-06-10 400 \"Car repair\" --extraordinary\n\
         holding add Gold 2 1800 XAU\n\
         ledger save {}\n\
         exit\n",
        tmp.path().display()
    );

    script_command(&home)
        .write_stdin(input)
        .assert()
        .success()
        .stdout(
            contains("New ledger `Demo` created.")
                .and(contains(
                    "Recorded expense of 400.00 USD on 2024-06-10 (Car repair, extraordinary).",
                ))
                .and(contains("Holding `Gold` added, worth 3600.00 USD."))
                .and(contains("Ledger saved to")),
        );

    let json = std::fs::read_to_string(tmp.path()).unwrap();
    assert!(json.contains("\"Demo\""));
    assert!(json.contains("\"is_extraordinary\": true"));
    assert!(json.contains("\"XAU\""));
}

#[test]
fn project_command_prints_closed_form_projection() {
    let home = tempdir().unwrap();
    let tmp = NamedTempFile::new().unwrap();
    save_ledger_to_path(&steady_ledger(), tmp.path()).unwrap();

    let script = format!("ledger load {}\nproject 2 --seed 7\nexit\n", tmp.path().display());
    let output = script_command(&home)
        .write_stdin(script)
        .assert()
        .success()
        .stdout(
            contains("Ledger `Steady` loaded (5 transactions, 1 holdings).")
                .and(contains("Verdict      : On track"))
                .and(contains("Regular net  : 1000.00 USD / month"))
                .and(contains("Start assets : 10000.00 USD")),
        )
        .get_output()
        .stdout
        .clone();

    let stdout = String::from_utf8(output).unwrap();
    let row = Regex::new(r"(?m)^\s+\+(\d+)\s+(\d{4}-\d{2})\s+(\d+\.\d{2}) USD$").unwrap();
    let rows: Vec<(String, String, String)> = row
        .captures_iter(&stdout)
        .map(|caps| (caps[1].to_string(), caps[2].to_string(), caps[3].to_string()))
        .collect();
    assert_eq!(
        rows,
        vec![
            ("0".into(), "2024-07".into(), "10000.00".into()),
            ("1".into(), "2024-08".into(), "11036.00".into()),
            ("2".into(), "2024-09".into(), "12076.00".into()),
        ]
    );
}

#[test]
fn project_json_output_is_machine_readable() {
    let home = tempdir().unwrap();
    let tmp = NamedTempFile::new().unwrap();
    save_ledger_to_path(&steady_ledger(), tmp.path()).unwrap();

    let script = format!("ledger load {}\nproject 3 --json\n", tmp.path().display());
    let output = script_command(&home)
        .write_stdin(script)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let stdout = String::from_utf8(output).unwrap();
    let start = stdout.find('{').expect("json object");
    let report: serde_json::Value = serde_json::from_str(&stdout[start..]).unwrap();
    assert_eq!(report["ledger"], "Steady");
    assert_eq!(report["as_of"], "2024-07-15");
    assert_eq!(report["result"]["horizon_months"], 3);
    assert_eq!(report["result"]["feedback"], "on_track");
    let points = report["result"]["projection_points"].as_array().unwrap();
    assert_eq!(points.len(), 4);
    assert_eq!(points[0].as_f64(), Some(10000.0));
}

#[test]
fn empty_ledger_projects_flat_with_insufficient_data() {
    let home = tempdir().unwrap();
    script_command(&home)
        .write_stdin("ledger new Empty\nholding add Cash 1 2500.9\nproject 3\n")
        .assert()
        .success()
        .stdout(
            contains("Verdict      : Insufficient data")
                .and(contains("Not enough data to analyse"))
                .and(contains("2500.00 USD")),
        );
}

#[test]
fn invalid_horizons_are_reported_and_the_shell_continues() {
    let home = tempdir().unwrap();
    script_command(&home)
        .write_stdin("ledger new Demo\nproject 0\nproject 601\nbalance\n")
        .assert()
        .success()
        .stdout(
            contains("Horizon must be a positive number of months, got 0")
                .and(contains("Horizon of 601 months exceeds the limit of 600"))
                .and(contains("Balance for `Demo`")),
        );
}

#[test]
fn summaries_report_months_and_categories() {
    let home = tempdir().unwrap();
    let tmp = NamedTempFile::new().unwrap();
    save_ledger_to_path(&steady_ledger(), tmp.path()).unwrap();

    let script = format!(
        "ledger load {}\nsummary monthly\n\
         summary category 2024-01-01 2024-12-31 expense\nbalance\n",
        tmp.path().display()
    );
    script_command(&home)
        .write_stdin(script)
        .assert()
        .success()
        .stdout(
            contains("Monthly summary")
                .and(contains("2024-06"))
                .and(contains("Expenses by category, 2024-01-01 to 2024-12-31"))
                .and(contains("Rent"))
                .and(contains("Total: 4000.00 USD"))
                .and(contains("Current balance: 5000.00 USD"))
                .and(contains("Total assets   : 10000.00 USD")),
        );
}

#[test]
fn config_changes_persist_across_sessions() {
    let home = tempdir().unwrap();
    script_command(&home)
        .write_stdin("config set currency eur\nconfig set default_horizon_months 24\n")
        .assert()
        .success()
        .stdout(contains("`currency` set to `eur`."));

    assert!(home.path().join("config").join("config.json").exists());

    script_command(&home)
        .write_stdin("config show\nledger new Demo\nproject\n")
        .assert()
        .success()
        .stdout(
            contains("currency              : EUR")
                .and(contains("24 months from 2024-07")),
        );
}

#[test]
fn named_ledgers_are_listed_and_reloaded() {
    let home = tempdir().unwrap();
    script_command(&home)
        .write_stdin("ledger new \"Family Plan\"\nadd income 2024-07-01 100\nledger save\n")
        .assert()
        .success()
        .stdout(contains("Ledger saved to"));

    assert!(home
        .path()
        .join("ledgers")
        .join("family_plan.json")
        .exists());

    script_command(&home)
        .write_stdin("ledger list\nledger load \"Family Plan\"\n")
        .assert()
        .success()
        .stdout(
            contains("family_plan")
                .and(contains("Ledger `Family Plan` loaded (1 transactions, 0 holdings).")),
        );
}
