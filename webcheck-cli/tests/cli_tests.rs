#![allow(clippy::unwrap_used)]
//! End-to-end tests for the `webcheck` binary: exit codes and report text.

use std::fs;
use std::path::Path;
use std::process::Command;

use assert_cmd::prelude::OutputAssertExt;
use predicates::str::{contains, ends_with};
use tempfile::TempDir;

type TestResult = Result<(), Box<dyn std::error::Error>>;

fn webcheck(root: &Path, subcommand: &str) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_webcheck"));
    cmd.arg("--project-root").arg(root).arg(subcommand);
    cmd
}

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

#[test]
fn test_html_success_exits_zero() -> TestResult {
    let tmp = TempDir::new()?;
    write(
        tmp.path(),
        "public/index.html",
        "<!DOCTYPE html><html><head></head><body></body></html>",
    );

    webcheck(tmp.path(), "html")
        .assert()
        .success()
        .stdout(contains("\u{1f4cb} Validando 1 archivos HTML"))
        .stdout(ends_with("\u{2705} HTML v\u{e1}lido\n\n"));
    Ok(())
}

#[test]
fn test_html_defects_exit_one() -> TestResult {
    let tmp = TempDir::new()?;
    write(tmp.path(), "public/b.html", "<html></html>");

    webcheck(tmp.path(), "html")
        .assert()
        .code(1)
        .stdout(contains("   \u{274c} Falta etiqueta <body>"))
        .stdout(contains("\u{274c} Se encontraron 3 errores en HTML"));
    Ok(())
}

#[test]
fn test_html_missing_public_exits_one() -> TestResult {
    let tmp = TempDir::new()?;

    webcheck(tmp.path(), "html")
        .assert()
        .code(1)
        .stderr(contains("\u{274c} No se encontr\u{f3} el directorio public"));
    Ok(())
}

#[test]
fn test_js_empty_project_exits_zero() -> TestResult {
    let tmp = TempDir::new()?;

    webcheck(tmp.path(), "js")
        .assert()
        .success()
        .stdout("\u{2139}\u{fe0f}  No se encontraron archivos JavaScript\n\n");
    Ok(())
}

#[test]
fn test_js_syntax_error_reports_line() -> TestResult {
    let tmp = TempDir::new()?;
    write(tmp.path(), "bad.js", "function f(){return 1;");

    webcheck(tmp.path(), "js")
        .assert()
        .code(1)
        .stdout(contains("\u{274c} bad.js"))
        .stdout(contains("(l\u{ed}nea 1)"))
        .stdout(contains("Llaves desbalanceadas (1 abiertas, 0 cerradas)"));
    Ok(())
}

#[test]
fn test_all_fails_when_either_pipeline_fails() -> TestResult {
    let tmp = TempDir::new()?;
    write(
        tmp.path(),
        "public/index.html",
        "<!DOCTYPE html><html><head></head><body></body></html>",
    );
    write(tmp.path(), "public/app.js", "const a = [1, 2;\n");

    webcheck(tmp.path(), "all")
        .assert()
        .code(1)
        .stdout(contains("\u{2705} HTML v\u{e1}lido"))
        .stdout(contains("Corchetes desbalanceados (1 abiertos, 0 cerrados)"));
    Ok(())
}

#[test]
fn test_missing_project_root_aborts() -> TestResult {
    let tmp = TempDir::new()?;
    let missing = tmp.path().join("gone");

    webcheck(&missing, "js")
        .assert()
        .code(1)
        .stderr(contains("Error: JavaScript validation aborted"));
    Ok(())
}
