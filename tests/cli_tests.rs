use std::{fs, path::Path, process::Output, sync::LazyLock};

use escargot::CargoBuild;

static CSV2ENV: LazyLock<escargot::CargoRun> = LazyLock::new(|| {
    CargoBuild::new()
        .bin("csv2env")
        .run()
        .expect("failed to build csv2env")
});

fn run(dir: &Path, args: &[&str]) -> Output {
    CSV2ENV.command().current_dir(dir).args(args).output().unwrap()
}

fn write_inputs(dir: &Path, template: &str, csv: &str) {
    fs::write(dir.join("template.properties"), template).unwrap();
    fs::write(dir.join("client.csv"), csv).unwrap();
}

#[test]
fn help() {
    let output = CSV2ENV.command().arg("--help").output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Generate a .env file from a template and CSV file"));
}

#[test]
fn generate_help() {
    let output = CSV2ENV.command().args(["generate", "--help"]).output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--template"));
    assert!(stdout.contains("--csv"));
    assert!(stdout.contains("--output"));
}

#[test]
fn generate_default_output() {
    let dir = tempfile::tempdir().unwrap();
    write_inputs(dir.path(), "#A#-#B#", "A,B\n1,2\n");

    let output = run(dir.path(), &["generate", "-t", "template.properties", "-c", "client.csv"]);

    assert!(output.status.success(), "{:?}", output);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Successfully generated .env"));
    assert_eq!(fs::read_to_string(dir.path().join(".env")).unwrap(), "1-2");
}

#[test]
fn generate_nested_output() {
    let dir = tempfile::tempdir().unwrap();
    write_inputs(dir.path(), "HOST=#HOST#\n", "HOST\nexample.com\n");

    let output = run(
        dir.path(),
        &[
            "generate",
            "--template",
            "template.properties",
            "--csv",
            "client.csv",
            "--output",
            "envs/prod/.env",
        ],
    );

    assert!(output.status.success(), "{:?}", output);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Successfully generated envs/prod/.env"));
    assert_eq!(
        fs::read_to_string(dir.path().join("envs/prod/.env")).unwrap(),
        "HOST=example.com\n"
    );
}

#[test]
fn missing_csv_flag() {
    let dir = tempfile::tempdir().unwrap();
    write_inputs(dir.path(), "A=#A#\n", "A\n1\n");

    let output = run(dir.path(), &["generate", "-t", "template.properties"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--csv"), "{}", stderr);
    assert!(!dir.path().join(".env").exists());
}

#[test]
fn single_row_csv() {
    let dir = tempfile::tempdir().unwrap();
    write_inputs(dir.path(), "A=#A#\n", "A\n");

    let output = run(dir.path(), &["generate", "-t", "template.properties", "-c", "client.csv"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error reading CSV file"), "{}", stderr);
    assert!(stderr.contains("at least a header row and a data row"), "{}", stderr);
    assert!(!dir.path().join(".env").exists());
}

#[test]
fn missing_template_file() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("client.csv"), "A\n1\n").unwrap();

    let output = run(dir.path(), &["generate", "-t", "missing.properties", "-c", "client.csv"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error reading properties template"), "{}", stderr);
}
