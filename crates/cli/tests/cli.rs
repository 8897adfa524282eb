use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;

fn touch(root: &Path, relative: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, "<module/>").unwrap();
}

fn gwtgen() -> Command {
    let mut cmd = Command::cargo_bin("gwtgen").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

fn fixture(root: &Path) -> String {
    let classes = root.join("classes");
    touch(&classes, "org/mydomain/Printer.gwt.xml");
    touch(&classes, "com/google/gwt/user/User.gwt.xml");
    touch(&classes, "elemental/Json.gwt.xml");
    classes.to_string_lossy().to_string()
}

#[test]
fn generates_descriptor_with_default_excludes() {
    let temp = tempfile::tempdir().unwrap();
    let classes = fixture(temp.path());
    let out = temp.path().join("out");

    gwtgen()
        .arg(format!("--classpath={}", classes))
        .arg(format!("--generationRoot={}", out.display()))
        .assert()
        .success()
        .stderr(predicate::str::contains("Found 1 gwt modules"));

    let xml = fs::read_to_string(out.join("org/eclipse/che/ide/IDE.gwt.xml")).unwrap();
    assert!(xml.contains("<inherits name=\"org.mydomain.Printer\"/>"));
    assert!(!xml.contains("com.google"));
    assert!(!xml.contains("elemental"));
    assert!(xml.contains("<entry-point class='org.eclipse.che.ide.client.IDE'/>"));
}

#[test]
fn honours_custom_names_and_logging_flag() {
    let temp = tempfile::tempdir().unwrap();
    let classes = fixture(temp.path());

    gwtgen()
        .arg(format!("--classpath={}", classes))
        .arg(format!("--generationRoot={}", temp.path().display()))
        .arg("--gwtFileName=App.gwt.xml")
        .arg("--entryPoint=com.acme.client.App")
        .arg("--styleSheet=App.css")
        .arg("--excludePackages=com.google")
        .arg("--loggingEnabled=true")
        .assert()
        .success();

    let xml = fs::read_to_string(temp.path().join("App.gwt.xml")).unwrap();
    assert!(xml.contains("<inherits name=\"elemental.Json\"/>"));
    assert!(xml.contains("<inherits name=\"org.mydomain.Printer\"/>"));
    assert!(xml.contains("<stylesheet src=\"App.css\"/>"));
    assert!(xml.contains("<entry-point class='com.acme.client.App'/>"));
    assert_eq!(xml.matches("value=\"ENABLED\"").count(), 3);
}

#[test]
fn fails_when_destination_exists() {
    let temp = tempfile::tempdir().unwrap();
    let classes = fixture(temp.path());
    let target = temp.path().join("App.gwt.xml");
    fs::write(&target, "keep me").unwrap();

    gwtgen()
        .arg(format!("--classpath={}", classes))
        .arg(format!("--generationRoot={}", temp.path().display()))
        .arg("--gwtFileName=App.gwt.xml")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("already exists"));

    assert_eq!(fs::read_to_string(&target).unwrap(), "keep me");
}

#[test]
fn fails_on_unsupported_classpath_url() {
    let temp = tempfile::tempdir().unwrap();

    gwtgen()
        .arg("--classpath=https://repo.example.com/lib.jar")
        .arg(format!("--generationRoot={}", temp.path().display()))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("unsupported URL scheme"));

    assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 0);
}

#[test]
fn list_prints_modules_without_writing() {
    let temp = tempfile::tempdir().unwrap();
    let classes = fixture(temp.path());
    let out = temp.path().join("out");

    gwtgen()
        .arg(format!("--classpath={}", classes))
        .arg(format!("--generationRoot={}", out.display()))
        .arg("--includePackages=elemental,org")
        .arg("--excludePackages=")
        .arg("--list")
        .assert()
        .success()
        .stdout("elemental/Json.gwt.xml\norg/mydomain/Printer.gwt.xml\n");

    assert!(!out.exists());
}

#[test]
fn list_supports_json_output() {
    let temp = tempfile::tempdir().unwrap();
    let classes = fixture(temp.path());

    let output = gwtgen()
        .arg(format!("--classpath={}", classes))
        .arg("--list")
        .arg("--format=json")
        .output()
        .unwrap();

    assert!(output.status.success());
    let modules: Vec<String> = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(modules, vec!["org/mydomain/Printer.gwt.xml"]);
}

#[test]
fn falls_back_to_classpath_environment() {
    let temp = tempfile::tempdir().unwrap();
    let classes = fixture(temp.path());

    gwtgen()
        .env("CLASSPATH", &classes)
        .arg("--list")
        .assert()
        .success()
        .stdout("org/mydomain/Printer.gwt.xml\n");
}

#[test]
fn fails_cleanly_when_log_dir_cannot_be_created() {
    let temp = tempfile::tempdir().unwrap();
    let classes = fixture(temp.path());
    let blocker = temp.path().join("blocker");
    fs::write(&blocker, "not a directory").unwrap();

    gwtgen()
        .arg(format!("--classpath={}", classes))
        .arg(format!("--generationRoot={}", temp.path().join("out").display()))
        .arg(format!("--log-dir={}", blocker.join("logs").display()))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("panicked").not());

    assert!(!temp.path().join("out").exists());
}
