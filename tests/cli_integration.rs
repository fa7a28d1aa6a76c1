use assert_cmd::Command;
use std::io::Write;

fn ledger_path() -> Command {
    let mut cmd = Command::cargo_bin("ledger-path").unwrap();
    cmd.env_remove("LEDGER_PATH_CONFIG");
    cmd
}

#[test]
fn test_cli_encode() {
    ledger_path()
        .args(["encode", "--account", "12", "--change", "0"])
        .assert()
        .success()
        .stdout("048000002c800001f58000000c80000000\n");
}

#[test]
fn test_cli_decode() {
    ledger_path()
        .args(["decode", "038000002c800001f580000000"])
        .assert()
        .success()
        .stdout("44'/501'/0'\n");
}

#[test]
fn test_cli_parse() {
    ledger_path()
        .args(["parse", "m/44'/501'"])
        .assert()
        .success()
        .stdout("028000002c800001f5\n");
}

#[test]
fn test_cli_rejects_change_without_account() {
    ledger_path().args(["encode", "--change", "1"]).assert().failure().code(2);
}

#[test]
fn test_cli_rejects_truncated_buffer() {
    ledger_path().args(["decode", "048000002c800001f5"]).assert().failure().code(2);
}

#[test]
fn test_cli_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[display]\nmaster_prefix = true").unwrap();

    ledger_path()
        .arg("--config")
        .arg(file.path())
        .args(["decode", "048000002c800001f58000000080000000"])
        .assert()
        .success()
        .stdout("m/44'/501'/0'/0'\n");
}

#[test]
fn test_cli_config_from_env() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[decode]\nverify_prefix = false").unwrap();

    // m/44'/60'/3'
    ledger_path()
        .env("LEDGER_PATH_CONFIG", file.path())
        .args(["decode", "038000002c8000003c80000003"])
        .assert()
        .success()
        .stdout("44'/501'/3'\n");
}

#[test]
fn test_cli_missing_config_file() {
    ledger_path()
        .args(["--config", "/nonexistent/ledger-path.toml", "encode"])
        .assert()
        .failure()
        .code(1);
}
