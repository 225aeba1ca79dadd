/// End-to-end tests for the CLI
///
/// No test reaches the internet: walks point the registry at a loopback
/// port nobody listens on, so every lookup fails fast and exercises the
/// `unknown` fallback through the real binary.
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::net::TcpListener;
use std::path::Path;
use tempfile::TempDir;

/// A loopback URL whose port was just released, so connections are refused
fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}", port)
}

/// Working directory with a config routing all HTTP to a closed port
fn offline_workdir() -> TempDir {
    let dir = TempDir::new().unwrap();
    let url = unreachable_url();
    write_config(
        dir.path(),
        &format!("registry_url: {}\ngithub_api_url: {}\n", url, url),
    );
    dir
}

fn write_config(dir: &Path, content: &str) {
    fs::write(dir.join("npm-license-walker.config.yml"), content).unwrap();
}

// Exit code tests for CLI
mod exit_code_tests {
    use super::*;

    /// Exit code 0: --help should return success
    #[test]
    fn test_exit_code_help() {
        cargo_bin_cmd!("npm-license-walker")
            .arg("--help")
            .assert()
            .code(0)
            .stdout(predicate::str::contains("PACKAGE"));
    }

    /// Exit code 0: --version should return success
    #[test]
    fn test_exit_code_version() {
        cargo_bin_cmd!("npm-license-walker")
            .arg("--version")
            .assert()
            .code(0)
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }

    /// Exit code 2: no package given
    #[test]
    fn test_exit_code_no_arguments() {
        cargo_bin_cmd!("npm-license-walker")
            .assert()
            .code(2)
            .stderr(predicate::str::contains("<PACKAGE>"));
    }

    /// Exit code 2: Invalid arguments
    #[test]
    fn test_exit_code_invalid_argument() {
        cargo_bin_cmd!("npm-license-walker")
            .args(["--invalid-option", "foo"])
            .assert()
            .code(2);
    }

    /// Exit code 2: malformed package identifier
    #[test]
    fn test_exit_code_invalid_identifier() {
        cargo_bin_cmd!("npm-license-walker")
            .arg("@scope-only")
            .assert()
            .code(2)
            .stderr(predicate::str::contains("Invalid package identifier"));
    }

    /// Exit code 2: non-numeric concurrency limit
    #[test]
    fn test_exit_code_invalid_max_concurrent() {
        cargo_bin_cmd!("npm-license-walker")
            .args(["--max-concurrent", "lots", "foo"])
            .assert()
            .code(2);
    }

    /// Exit code 3: output file in a missing directory
    #[test]
    fn test_exit_code_application_error_output_directory() {
        let dir = offline_workdir();
        cargo_bin_cmd!("npm-license-walker")
            .current_dir(dir.path())
            .args(["-o", "missing/dir/licenses.txt", "foo"])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Failed to write to file"));
    }
}

mod walk_tests {
    use super::*;

    #[test]
    fn test_unreachable_registry_prints_unknown_leaf() {
        let dir = offline_workdir();
        cargo_bin_cmd!("npm-license-walker")
            .current_dir(dir.path())
            .arg("foo@1.0.0")
            .assert()
            .code(0)
            .stdout("foo (unknown)\n\n")
            .stderr("");
    }

    #[test]
    fn test_each_argument_gets_its_own_block_in_order() {
        let dir = offline_workdir();
        cargo_bin_cmd!("npm-license-walker")
            .current_dir(dir.path())
            .args(["zeta", "@acme/alpha", "mid@^2.0.0"])
            .assert()
            .code(0)
            .stdout("zeta (unknown)\n\n@acme/alpha (unknown)\n\nmid (unknown)\n\n");
    }

    #[test]
    fn test_verbose_reports_failures_on_stderr_only() {
        let dir = offline_workdir();
        cargo_bin_cmd!("npm-license-walker")
            .current_dir(dir.path())
            .args(["--verbose", "foo"])
            .assert()
            .code(0)
            .stdout("foo (unknown)\n\n")
            .stderr(predicate::str::contains("Failed to fetch metadata for foo"));
    }

    #[test]
    fn test_output_file() {
        let dir = offline_workdir();
        cargo_bin_cmd!("npm-license-walker")
            .current_dir(dir.path())
            .args(["--output", "licenses.txt", "foo"])
            .assert()
            .code(0)
            .stdout("");

        let written = fs::read_to_string(dir.path().join("licenses.txt")).unwrap();
        assert_eq!(written, "foo (unknown)\n\n");
    }

    #[test]
    fn test_no_color_output_is_plain() {
        let dir = offline_workdir();
        cargo_bin_cmd!("npm-license-walker")
            .current_dir(dir.path())
            .args(["--no-color", "--cache", "--max-concurrent", "1", "foo"])
            .assert()
            .code(0)
            .stdout(predicate::str::contains("\u{1b}[").not());
    }
}
