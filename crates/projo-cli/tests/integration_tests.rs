//! Integration tests for the `projo` binary.

use std::fs;
use std::path::Path;

use predicates::prelude::*;
use tempfile::TempDir;

/// A `projo` command isolated from the developer's own config and env.
fn projo(home: &Path) -> assert_cmd::Command {
    let mut cmd = assert_cmd::cargo_bin_cmd!("projo");
    cmd.env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env_remove("PROJO_CONFIG")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

fn generate_args<'a>(name: &'a str, kind: &'a str, out: &'a Path) -> Vec<String> {
    vec![
        "generate".into(),
        "--name".into(),
        name.into(),
        "--module".into(),
        format!("example.com/{name}"),
        "--type".into(),
        kind.into(),
        "--output".into(),
        out.display().to_string(),
    ]
}

#[test]
fn test_help_flag() {
    let home = TempDir::new().unwrap();
    projo(home.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("ready-to-build Go project skeletons"))
        .stdout(predicate::str::contains("generate"));
}

#[test]
fn test_short_help_uses_one_line_about() {
    let home = TempDir::new().unwrap();
    projo(home.path())
        .arg("-h")
        .assert()
        .success()
        .stdout(predicate::str::contains("Go project structure generator"))
        .stdout(predicate::str::contains("ready-to-build").not());
}

#[test]
fn test_version_flag() {
    let home = TempDir::new().unwrap();
    projo(home.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_generate_command_help() {
    let home = TempDir::new().unwrap();
    projo(home.path())
        .args(["generate", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--module"))
        .stdout(predicate::str::contains("--go-version"))
        .stdout(predicate::str::contains("--dry-run"));
}

#[test]
fn test_generate_cli_project_with_yes() {
    let home = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();

    projo(home.path())
        .args(generate_args("orders", "cli", out.path()))
        .arg("--yes")
        .assert()
        .success()
        .stdout(predicate::str::contains("Project 'orders' generated"))
        .stdout(predicate::str::contains("go mod tidy"))
        .stdout(predicate::str::contains("make build"));

    let root = out.path().join("orders");
    assert!(root.join("internal/command/root.go").is_file());
    let go_mod = fs::read_to_string(root.join("go.mod")).unwrap();
    assert!(go_mod.starts_with("module example.com/orders"));
}

#[test]
fn test_gen_alias_and_library_file_name() {
    let home = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();

    let mut args = generate_args("widget", "lib", out.path());
    args[0] = "gen".into();
    projo(home.path()).args(args).arg("-y").assert().success();

    assert!(out.path().join("widget/widget.go").is_file());
}

#[test]
fn test_generate_dry_run_writes_nothing() {
    let home = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();

    projo(home.path())
        .args(generate_args("orders", "api", out.path()))
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run"))
        .stdout(predicate::str::contains("cmd/api/main.go"));

    assert!(!out.path().join("orders").exists());
}

#[test]
fn test_generate_json_report() {
    let home = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();

    let assert = projo(home.path())
        .args(["--output-format", "json"])
        .args(generate_args("orders", "cli", out.path()))
        .arg("--yes")
        .assert()
        .success();

    let report: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(report["files"], 7);
    assert_eq!(report["directories"], 5);
    assert_eq!(report["archetype"], "cli");
}

#[test]
fn test_declining_the_prompt_cancels() {
    let home = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();

    projo(home.path())
        .args(generate_args("orders", "cli", out.path()))
        .write_stdin("n\n")
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Generate project? [y/N]"))
        .stderr(predicate::str::contains("Operation cancelled"));

    assert!(!out.path().join("orders").exists());
}

#[test]
fn test_accepting_the_prompt_generates() {
    let home = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();

    projo(home.path())
        .args(generate_args("orders", "cli", out.path()))
        .write_stdin("y\n")
        .assert()
        .success();

    assert!(out.path().join("orders/cmd/main.go").is_file());
}

#[test]
fn test_plan_is_shown_before_prompt() {
    let home = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();

    projo(home.path())
        .args(generate_args("orders", "microservice", out.path()))
        .write_stdin("\n")
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Project:     orders"))
        .stdout(predicate::str::contains("Module:      example.com/orders"))
        .stdout(predicate::str::contains("Type:        microservice"))
        .stdout(predicate::str::contains("Go Version:  1.24"));
}

#[test]
fn test_list_table() {
    let home = TempDir::new().unwrap();
    projo(home.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("api"))
        .stdout(predicate::str::contains("microservice"))
        .stdout(predicate::str::contains("alias: lib"));
}

#[test]
fn test_list_json() {
    let home = TempDir::new().unwrap();
    let assert = projo(home.path())
        .args(["ls", "--format", "json"])
        .assert()
        .success();

    let list: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    let names: Vec<&str> = list
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["api", "cli", "microservice", "library"]);
}

#[test]
fn test_list_csv() {
    let home = TempDir::new().unwrap();
    projo(home.path())
        .args(["list", "--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "name,aliases,directories,files,summary\n",
        ))
        .stdout(predicate::str::contains("library,lib,3,7,"));
}

#[test]
fn test_list_verify() {
    let home = TempDir::new().unwrap();
    projo(home.path())
        .args(["list", "--format", "list", "--verify"])
        .assert()
        .success()
        .stdout(predicate::str::contains("25 templates verified"));
}

#[test]
fn test_init_then_config_roundtrip() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("custom/projo.toml");
    let config_arg = config.display().to_string();

    projo(home.path())
        .args(["--config", &config_arg, "init"])
        .assert()
        .success();
    let written = fs::read_to_string(&config).unwrap();
    assert!(written.contains("[defaults]"));
    assert!(written.contains("archetype = \"api\""));

    projo(home.path())
        .args(["--config", &config_arg, "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));

    projo(home.path())
        .args(["--config", &config_arg, "config", "set", "defaults.author", "Ada"])
        .assert()
        .success();

    projo(home.path())
        .args(["--config", &config_arg, "config", "get", "defaults.author"])
        .assert()
        .success()
        .stdout("Ada\n");
}

#[test]
fn test_config_default_archetype_is_used() {
    let home = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    let config = home.path().join("projo.toml");
    fs::write(&config, "[defaults]\narchetype = \"library\"\nauthor = \"Grace\"\n").unwrap();

    projo(home.path())
        .args(["--config", &config.display().to_string()])
        .args([
            "gen",
            "-n",
            "kit",
            "-m",
            "example.com/kit",
            "-o",
            &out.path().display().to_string(),
            "-y",
        ])
        .assert()
        .success();

    assert!(out.path().join("kit/kit.go").is_file());
    let readme = fs::read_to_string(out.path().join("kit/README.md")).unwrap();
    assert!(readme.contains("Grace"));
}

#[test]
fn test_environment_overrides_config_defaults() {
    let home = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();

    projo(home.path())
        .env("PROJO_DEFAULTS__ARCHETYPE", "micro")
        .args([
            "gen",
            "-n",
            "svc",
            "-m",
            "example.com/svc",
            "-o",
            &out.path().display().to_string(),
            "-y",
        ])
        .assert()
        .success();

    assert!(out.path().join("svc/Dockerfile").is_file());
}

#[test]
fn test_config_path_follows_flag() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("elsewhere.toml");

    projo(home.path())
        .args(["--config", &config.display().to_string(), "config", "path"])
        .assert()
        .success()
        .stdout(format!("{}\n", config.display()));
}

#[test]
fn test_completions_bash() {
    let home = TempDir::new().unwrap();
    projo(home.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("projo"));
}

#[test]
fn test_log_file_receives_json_events() {
    let home = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    let log = home.path().join("projo.log");

    projo(home.path())
        .args(["--log-file", &log.display().to_string()])
        .args(generate_args("orders", "cli", out.path()))
        .arg("--yes")
        .assert()
        .success();

    let contents = fs::read_to_string(&log).unwrap();
    assert!(contents.contains("Generation completed"));
    assert!(contents.lines().all(|l| l.starts_with('{')));
}
