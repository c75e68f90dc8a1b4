//! CLI boundary tests for the `quiver` binary

use assert_cmd::Command;
use predicates::prelude::*;
use quiver_test_utils::ToolFixture;
use tempfile::TempDir;

/// A `quiver` invocation wired to a fixture, hermetic from the user's
/// home directory and search path.
fn quiver(fixture: &ToolFixture, home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("quiver").unwrap();
    cmd.current_dir(fixture.project_dir())
        .env("HOME", home.path())
        .env("PATH", "")
        .env("QUIVER_HOST", "/usr/bin/qhost")
        .env("QUIVER_RUNTIME", "rt2.0")
        .env("QUIVER_HOME", fixture.cache_root())
        .env("QUIVER_FALLBACK_ROOTS", fixture.fallback_root());
    cmd
}

#[test]
fn resolve_prints_spec_for_restored_tool() {
    let fixture = ToolFixture::new();
    fixture.write_descriptor().write_lock("tool-portable", "1.0.0");
    fixture.install_assembly("tool-portable", "1.0.0");
    let home = TempDir::new().unwrap();

    quiver(&fixture, &home)
        .args(["resolve", "portable"])
        .assert()
        .success()
        .stdout(predicate::str::contains("/usr/bin/qhost"))
        .stdout(predicate::str::contains("portable"));
}

#[test]
fn resolve_json_output_is_parseable() {
    let fixture = ToolFixture::new();
    fixture.write_descriptor().write_lock("tool-portable", "1.0.0");
    fixture.install_assembly("tool-portable", "1.0.0");
    let home = TempDir::new().unwrap();

    let output = quiver(&fixture, &home)
        .args(["resolve", "--json", "portable", "arg with space"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let spec: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(spec["executable"], "/usr/bin/qhost");
    let args: Vec<&str> = spec["args"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a.as_str().unwrap())
        .collect();
    assert!(args.contains(&"portable"));
    assert!(args.contains(&"\"arg with space\""));
    let argv: Vec<&str> = spec["argv"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a.as_str().unwrap())
        .collect();
    assert!(argv.contains(&"arg with space"));
}

#[cfg(unix)]
#[test]
fn run_delivers_raw_arguments_to_the_tool() {
    use std::os::unix::fs::PermissionsExt;

    let fixture = ToolFixture::new();
    fixture.write_descriptor();
    let home = TempDir::new().unwrap();
    let bin = TempDir::new().unwrap();

    // A PATH-resolved tool that records the argument it actually received.
    let out = home.path().join("observed-arg");
    let script = bin.path().join("echoer");
    std::fs::write(
        &script,
        format!("#!/bin/sh\nprintf '%s\\n' \"$1\" > \"{}\"\n", out.display()),
    )
    .unwrap();
    std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();

    quiver(&fixture, &home)
        .env("PATH", bin.path())
        .args(["run", "echoer", "arg with space"])
        .assert()
        .success();

    // No quoting layer strips escaping on the execve path, so the tool
    // must see the argument exactly as typed.
    assert_eq!(
        std::fs::read_to_string(&out).unwrap(),
        "arg with space\n"
    );
}

#[test]
fn unknown_command_exits_nonzero() {
    let fixture = ToolFixture::new();
    fixture.write_descriptor();
    let home = TempDir::new().unwrap();

    quiver(&fixture, &home)
        .args(["resolve", "nonexistent"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no executable command 'nonexistent' found"));
}

#[test]
fn broken_restore_exits_nonzero_with_assemblies_message() {
    let fixture = ToolFixture::new();
    fixture.write_descriptor().write_lock("tool-portable", "1.0.0");
    // Lock claims the package but nothing is installed anywhere.
    let home = TempDir::new().unwrap();

    quiver(&fixture, &home)
        .args(["resolve", "portable"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Could not find command assemblies for package 'tool-portable'.",
        ));
}

/// A `quiver` invocation with no `QUIVER_*` environment, so only the config
/// file under `home` and the built-in defaults apply.
fn quiver_without_env(fixture: &ToolFixture, home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("quiver").unwrap();
    cmd.current_dir(fixture.project_dir())
        .env("HOME", home.path())
        .env("PATH", "")
        .env_remove("QUIVER_HOST")
        .env_remove("QUIVER_RUNTIME")
        .env_remove("QUIVER_HOME")
        .env_remove("QUIVER_FALLBACK_ROOTS");
    cmd
}

fn write_config(home: &TempDir, content: &str) {
    let dir = home.path().join(".quiver");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("config.toml"), content).unwrap();
}

#[test]
fn config_file_applies_when_env_is_absent() {
    let fixture = ToolFixture::new();
    fixture.write_descriptor().write_lock("tool-portable", "1.0.0");
    fixture.install_assembly("tool-portable", "1.0.0");
    let home = TempDir::new().unwrap();
    write_config(
        &home,
        &format!(
            "host_launcher = \"/opt/qhost-from-file\"\nruntime = \"rt2.0\"\ncache_root = \"{}\"\n",
            fixture.cache_root().display()
        ),
    );

    let output = quiver_without_env(&fixture, &home)
        .args(["resolve", "--json", "portable"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let spec: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(spec["executable"], "/opt/qhost-from-file");
}

#[test]
fn env_overrides_config_file() {
    let fixture = ToolFixture::new();
    fixture.write_descriptor().write_lock("tool-portable", "1.0.0");
    fixture.install_assembly("tool-portable", "1.0.0");
    let home = TempDir::new().unwrap();
    // The cache root still layers in from the file; only the launcher is
    // overridden by the environment.
    write_config(
        &home,
        &format!(
            "host_launcher = \"/opt/qhost-from-file\"\nruntime = \"rt2.0\"\ncache_root = \"{}\"\n",
            fixture.cache_root().display()
        ),
    );

    let output = quiver_without_env(&fixture, &home)
        .env("QUIVER_HOST", "/usr/bin/qhost-env")
        .args(["resolve", "--json", "portable"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let spec: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(spec["executable"], "/usr/bin/qhost-env");
}

#[test]
fn malformed_config_file_is_an_error() {
    let fixture = ToolFixture::new();
    fixture.write_descriptor();
    let home = TempDir::new().unwrap();
    write_config(&home, "host_launcher = [not toml");

    quiver_without_env(&fixture, &home)
        .args(["resolve", "portable"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse config"));
}

#[test]
fn invalid_runtime_moniker_is_an_error() {
    let fixture = ToolFixture::new();
    fixture.write_descriptor();
    let home = TempDir::new().unwrap();

    quiver_without_env(&fixture, &home)
        .env("QUIVER_RUNTIME", "bogus")
        .args(["resolve", "portable"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid runtime target moniker: bogus"));
}
