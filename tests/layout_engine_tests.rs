//! Rendering through a stand-in layout engine
//!
//! Small shell scripts take the place of `dot` so the image path runs without
//! Graphviz installed. They are invoked as `<script> -T<fmt> -o <target> <source>`.
#![cfg(unix)]

use assert_cmd::cargo::cargo_bin_cmd;
use astviz::{pipeline, Error, OutputFormat, RenderConfig};
use predicates::prelude::*;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

/// Writes the target after checking the DOT source is in place
const WRITES_TARGET: &str = "#!/bin/sh\n\
                             test \"$1\" = \"-Tpng\" || exit 2\n\
                             test -f \"$4\" || exit 3\n\
                             printf 'image' > \"$3\"\n";

const FAILS_WITH_STDERR: &str = "#!/bin/sh\n\
                                 echo 'Error: syntax error in line 3' >&2\n\
                                 exit 1\n";

fn script(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, body).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

fn png_config(out: &Path, dot_binary: PathBuf) -> RenderConfig {
    RenderConfig {
        format: OutputFormat::Png,
        output_dir: out.to_path_buf(),
        dot_binary,
        ..RenderConfig::default()
    }
}

// Kept as one test: a script still open for writing in a concurrently forked
// child cannot be executed (ETXTBSY).
#[test]
fn layout_engine_paths() {
    let bin = tempfile::tempdir().unwrap();
    let ok = script(bin.path(), "fake-dot", WRITES_TARGET);
    let failing = script(bin.path(), "failing-dot", FAILS_WITH_STDERR);

    // Success with cleanup: only the image is left
    let out = tempfile::tempdir().unwrap();
    let path = pipeline::run("(a (b) (c))", &png_config(out.path(), ok.clone())).unwrap();
    assert_eq!(path, out.path().join("ast_tree.png"));
    assert_eq!(fs::read_to_string(&path).unwrap(), "image");
    assert!(!out.path().join("ast_tree.dot").exists());

    // Success without cleanup: the DOT source stays next to the image
    let out = tempfile::tempdir().unwrap();
    let config = RenderConfig {
        cleanup: false,
        ..png_config(out.path(), ok.clone())
    };
    pipeline::run("(a (b) (c))", &config).unwrap();
    assert!(out.path().join("ast_tree.png").exists());
    let dot = fs::read_to_string(out.path().join("ast_tree.dot")).unwrap();
    assert!(dot.contains("n0 -> n2;"));

    // Non-zero exit: stderr is carried in the error and the source is kept
    let out = tempfile::tempdir().unwrap();
    let err = pipeline::run("(a b)", &png_config(out.path(), failing.clone())).unwrap_err();
    assert!(matches!(err, Error::RenderingFailure { .. }));
    let message = err.to_string();
    assert!(message.contains("exited with"), "{}", message);
    assert!(message.contains("syntax error in line 3"), "{}", message);
    assert!(!out.path().join("ast_tree.png").exists());
    assert!(out.path().join("ast_tree.dot").exists());

    // The binary honours --keep-dot and --dot-binary
    let out = tempfile::tempdir().unwrap();
    let mut cmd = cargo_bin_cmd!("astviz");
    cmd.arg("--dot-binary")
        .arg(&ok)
        .arg("--output-dir")
        .arg(out.path())
        .arg("--keep-dot")
        .write_stdin("(a (b))");
    cmd.assert()
        .success()
        .stdout(predicate::str::ends_with("ast_tree.png\n"));
    assert!(out.path().join("ast_tree.png").exists());
    assert!(out.path().join("ast_tree.dot").exists());

    let mut cmd = cargo_bin_cmd!("astviz");
    cmd.arg("--dot-binary")
        .arg(&failing)
        .arg("--output-dir")
        .arg(out.path())
        .write_stdin("(a (b))");
    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("[ERROR] Rendering failed:"))
        .stderr(predicate::str::contains("syntax error in line 3"));
}
