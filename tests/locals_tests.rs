//! End-to-end tests for `nuget locals`, driving the built binary with
//! the resource locations redirected into a temporary sandbox.

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

const USAGE_STDERR: &str = "error: usage: NuGet locals <all | http-cache | global-packages | temp> [--clear | -c | --list | -l]\n\
error: For more information, visit http://docs.nuget.org/docs/reference/command-line-reference";

const INVALID_RESOURCE_STDERR: &str = "error: An invalid local resource name was provided. \
Please provide one of the following values: http-cache, temp, global-packages, all.";

/// Test context with all three resource directories inside a temp dir.
struct TestContext {
    temp_dir: TempDir,
    global_packages: PathBuf,
    http_cache: PathBuf,
    scratch: PathBuf,
}

impl TestContext {
    fn new() -> Self {
        let temp_dir = TempDir::new().expect("failed to create temp dir");
        let global_packages = temp_dir.path().join("global-packages");
        let http_cache = temp_dir.path().join("http-cache");
        let tmp_base = temp_dir.path().join("tmp");
        let scratch = tmp_base.join("NuGetScratch");

        for dir in [&global_packages, &http_cache, &scratch] {
            fs::create_dir_all(dir).expect("failed to create resource dir");
            fs::write(dir.join("cached.dat"), b"payload").expect("failed to seed dir");
            fs::create_dir_all(dir.join("nested")).expect("failed to seed dir");
            fs::write(dir.join("nested").join("more.dat"), b"payload")
                .expect("failed to seed dir");
        }

        Self {
            temp_dir,
            global_packages,
            http_cache,
            scratch,
        }
    }

    fn locals_cmd(&self, args: &[&str]) -> Command {
        let bin_path = env!("CARGO_BIN_EXE_nuget");
        let mut cmd = Command::new(bin_path);
        cmd.arg("locals");
        cmd.args(args);
        cmd.env("NUGET_PACKAGES", &self.global_packages);
        cmd.env("NUGET_HTTP_CACHE_PATH", &self.http_cache);
        // Unix uses TMPDIR as environment variable as opposed to TMP on windows
        cmd.env(
            if cfg!(windows) { "TMP" } else { "TMPDIR" },
            self.temp_dir.path().join("tmp"),
        );
        cmd.env("NO_COLOR", "1");
        cmd
    }

    fn run_locals(&self, args: &[&str]) -> Output {
        self.locals_cmd(args)
            .output()
            .expect("failed to run nuget binary")
    }
}

fn assert_success_with_empty_output(output: &Output, args: &[&str]) {
    assert!(
        output.status.success(),
        "locals {args:?} failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(
        output.stdout.is_empty(),
        "locals {args:?} wrote to stdout: {}",
        String::from_utf8_lossy(&output.stdout)
    );
}

fn assert_failure_with_stderr(output: &Output, expected: &str, args: &[&str]) {
    assert!(!output.status.success(), "locals {args:?} unexpectedly succeeded");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.trim_end(), expected, "locals {args:?}");
}

#[test]
fn list_succeeds_for_every_resource_flag_and_ordering() {
    for resource in ["all", "http-cache", "global-packages", "temp"] {
        for flag in ["--list", "-l"] {
            for args in [[resource, flag], [flag, resource]] {
                let ctx = TestContext::new();
                let output = ctx.run_locals(&args);
                assert_success_with_empty_output(&output, &args);
            }
        }
    }
}

#[test]
fn clear_all_removes_every_resource_directory() {
    for args in [["all", "--clear"], ["all", "-c"], ["--clear", "all"], ["-c", "all"]] {
        let ctx = TestContext::new();
        let output = ctx.run_locals(&args);

        assert_success_with_empty_output(&output, &args);
        assert!(!ctx.global_packages.exists());
        assert!(!ctx.http_cache.exists());
        assert!(!ctx.scratch.exists());
    }
}

#[test]
fn clear_single_resource_leaves_the_others_untouched() {
    for (resource, cleared) in [
        ("http-cache", 0usize),
        ("global-packages", 1),
        ("temp", 2),
    ] {
        for flag in ["--clear", "-c"] {
            for args in [[resource, flag], [flag, resource]] {
                let ctx = TestContext::new();
                let output = ctx.run_locals(&args);
                assert_success_with_empty_output(&output, &args);

                let dirs = [&ctx.http_cache, &ctx.global_packages, &ctx.scratch];
                for (index, dir) in dirs.iter().enumerate() {
                    if index == cleared {
                        assert!(!dir.exists(), "locals {args:?} left {dir:?}");
                    } else {
                        assert!(
                            dir.join("cached.dat").exists(),
                            "locals {args:?} touched {dir:?}"
                        );
                    }
                }
            }
        }
    }
}

#[test]
fn clear_is_idempotent() {
    let ctx = TestContext::new();
    let args = ["http-cache", "--clear"];

    let first = ctx.run_locals(&args);
    assert_success_with_empty_output(&first, &args);
    assert!(!ctx.http_cache.exists());

    let second = ctx.run_locals(&args);
    assert_success_with_empty_output(&second, &args);
}

#[test]
fn operations_on_missing_directories_still_succeed() {
    let ctx = TestContext::new();
    for dir in [&ctx.global_packages, &ctx.http_cache, &ctx.scratch] {
        fs::remove_dir_all(dir).expect("failed to empty sandbox");
    }

    for args in [["all", "--list"], ["all", "--clear"]] {
        let output = ctx.run_locals(&args);
        assert_success_with_empty_output(&output, &args);
    }
}

#[test]
fn missing_arguments_print_the_usage_message() {
    for args in [&[][..], &["--list"][..], &["-l"][..], &["--clear"][..], &["-c"][..]] {
        let ctx = TestContext::new();
        let output = ctx.run_locals(args);
        assert_failure_with_stderr(&output, USAGE_STDERR, args);
    }
}

#[test]
fn resource_without_operation_prints_the_usage_message() {
    for args in [&["all"][..], &["temp"][..]] {
        let ctx = TestContext::new();
        let output = ctx.run_locals(args);
        assert_failure_with_stderr(&output, USAGE_STDERR, args);
    }
}

#[test]
fn unknown_resource_prints_the_invalid_resource_message() {
    for flag in ["--list", "-l", "--clear", "-c"] {
        let args = [flag, "unknownResource"];
        let ctx = TestContext::new();
        let output = ctx.run_locals(&args);
        assert_failure_with_stderr(&output, INVALID_RESOURCE_STDERR, &args);
    }
}

#[test]
fn unrecognized_flags_are_named_in_the_error() {
    for flag in ["-list", "-clear", "--l", "--c"] {
        let args = [flag];
        let ctx = TestContext::new();
        let output = ctx.run_locals(&args);
        let expected = format!(
            "Specify --help for a list of available options and commands.\nerror: Unrecognized option '{flag}'"
        );
        assert_failure_with_stderr(&output, &expected, &args);
    }
}

#[test]
fn help_flag_prints_usage_and_succeeds() {
    let ctx = TestContext::new();
    let output = ctx.run_locals(&["--help"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("usage: NuGet locals"));
}
