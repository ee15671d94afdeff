use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn finance(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("finance").unwrap();
    cmd.env("FINANCE_TRACKER_DATA_DIR", data_dir.path())
        .env_remove("FINANCE_TRACKER_LOG");
    cmd
}

fn add(data_dir: &TempDir, kind: &str, amount: &str, category: &str, date: &str) {
    finance(data_dir)
        .args(["transaction", "add", kind, amount, category, "--date", date])
        .assert()
        .success();
}

#[test]
fn init_creates_ledger_files() {
    let dir = TempDir::new().unwrap();

    finance(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialization complete!"));

    assert_eq!(
        fs::read_to_string(dir.path().join("data").join("transactions.csv")).unwrap(),
        "id,date,amount,category,type,description\n"
    );
    assert_eq!(
        fs::read_to_string(dir.path().join("data").join("budgets.csv")).unwrap(),
        "category,limit\n"
    );
    assert!(dir.path().join("config.json").exists());
}

#[test]
fn add_list_and_summarize() {
    let dir = TempDir::new().unwrap();
    add(&dir, "income", "1000", "Salary", "2024-01-15");
    add(&dir, "expense", "400", "Rent", "2024-01-20");

    finance(&dir)
        .args(["transaction", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Salary"))
        .stdout(predicate::str::contains("$400.00"))
        .stdout(predicate::str::contains("2 transaction(s)"));

    finance(&dir)
        .args(["report", "summary"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$600.00"))
        .stdout(predicate::str::contains("60%"));
}

#[test]
fn list_filters_by_type() {
    let dir = TempDir::new().unwrap();
    add(&dir, "income", "1000", "Salary", "2024-01-15");
    add(&dir, "expense", "400", "Rent", "2024-02-20");

    finance(&dir)
        .args(["transaction", "list", "--type", "expense"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rent"))
        .stdout(predicate::str::contains("Salary").not());

    finance(&dir)
        .args(["transaction", "list", "--month", "2024-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Salary"))
        .stdout(predicate::str::contains("Rent").not());
}

#[test]
fn invalid_transactions_are_rejected() {
    let dir = TempDir::new().unwrap();

    finance(&dir)
        .args(["transaction", "add", "expense", "-5", "Food", "--date", "2024-01-01"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Amount must be a positive number"));

    finance(&dir)
        .args(["transaction", "add", "expense", "5", "Food", "--date", "01/02/2024"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Date must be in YYYY-MM-DD format"));

    finance(&dir)
        .args(["transaction", "add", "gift", "5", "Food", "--date", "2024-01-01"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("income' or 'expense'"));

    assert!(!dir.path().join("data").join("transactions.csv").exists());
}

#[test]
fn budget_status_flags_overspending() {
    let dir = TempDir::new().unwrap();

    finance(&dir)
        .args(["budget", "set", "Food", "100"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$100.00"));

    add(&dir, "expense", "40", "Food", "2024-01-01");
    add(&dir, "expense", "70", "Food", "2024-01-02");
    add(&dir, "expense", "1000", "Other", "2024-01-03");

    finance(&dir)
        .args(["budget", "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$110.00"))
        .stdout(predicate::str::contains("EXCEEDED"))
        .stdout(predicate::str::contains("Over budget: Food"));
}

#[test]
fn budget_set_replaces_and_delete_removes() {
    let dir = TempDir::new().unwrap();

    finance(&dir).args(["budget", "set", "Food", "100"]).assert().success();
    finance(&dir).args(["budget", "set", "Food", "250"]).assert().success();

    assert_eq!(
        fs::read_to_string(dir.path().join("data").join("budgets.csv")).unwrap(),
        "category,limit\nFood,250.00\n"
    );

    finance(&dir).args(["budget", "delete", "Food"]).assert().success();
    finance(&dir)
        .args(["budget", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No budgets set yet."));
}

#[test]
fn empty_ledger_reports_no_data() {
    let dir = TempDir::new().unwrap();

    for report in ["summary", "monthly", "category", "charts", "export"] {
        finance(&dir)
            .args(["report", report])
            .assert()
            .success()
            .stdout(predicate::str::contains("No transactions recorded yet."));
    }
}

#[test]
fn monthly_report_exports_csv() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("monthly.csv");
    add(&dir, "income", "1000", "Salary", "2024-01-15");
    add(&dir, "expense", "50.5", "Food", "2024-02-01");

    finance(&dir)
        .args(["report", "monthly", "--output"])
        .arg(&output)
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "month,income,expense,savings\n2024-01,1000.00,0.00,1000.00\n2024-02,0.00,50.50,-50.50\n"
    );
}

#[test]
fn charts_print_json() {
    let dir = TempDir::new().unwrap();
    add(&dir, "expense", "20", "Food", "2024-03-02");

    finance(&dir)
        .args(["report", "charts"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"monthly_trends\""))
        .stdout(predicate::str::contains("\"daily_spending\""));
}

#[test]
fn operations_are_written_to_log_file() {
    let dir = TempDir::new().unwrap();
    add(&dir, "income", "10", "Gift", "2024-01-01");

    let log = fs::read_to_string(dir.path().join("finance.log")).unwrap();
    assert!(log.contains("add_transaction"));
}
