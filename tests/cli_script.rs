use assert_cmd::Command;
use cash_core::{ledger::STORAGE_KEY, storage::JsonFileStore};
use predicates::str::contains;
use tempfile::TempDir;

fn script_command(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("cash_core_cli").unwrap();
    cmd.env("CASH_CORE_CLI_SCRIPT", "1")
        .env("CASH_CORE_HOME", home.path())
        .env("RUST_LOG", "off");
    cmd
}

#[test]
fn script_mode_runs_calculator_flow() {
    let home = TempDir::new().unwrap();
    script_command(&home)
        .write_stdin("digit 7 8\noperator +\ndigit 2\nevaluate\nexit\n")
        .assert()
        .success()
        .stdout(contains("Display: 78 [+]"))
        .stdout(contains("Display: 80"));
}

#[test]
fn script_mode_records_and_persists_transactions() {
    let home = TempDir::new().unwrap();
    script_command(&home)
        .write_stdin("add-transaction Salary 2500 income fixed\nadd-transaction Rent 1000 expense\nexit\n")
        .assert()
        .success()
        .stdout(contains("Balance: R$ 1.500,00 (gain)"));

    let store = JsonFileStore::new(home.path().join("data")).unwrap();
    let json = std::fs::read_to_string(store.value_path(STORAGE_KEY)).unwrap();
    assert!(json.contains("\"Salary\""));

    script_command(&home)
        .write_stdin("list\nbalance\n")
        .assert()
        .success()
        .stdout(contains("Rent"))
        .stdout(contains("Balance: R$ 1.500,00 (gain)"));
}

#[test]
fn script_mode_rejects_invalid_input_and_keeps_running() {
    let home = TempDir::new().unwrap();
    script_command(&home)
        .write_stdin("add-transaction Gift 0 income\nbalance\n")
        .assert()
        .success()
        .stderr(contains("Rejected"))
        .stdout(contains("Balance: R$ 0,00 (gain)"));
}
