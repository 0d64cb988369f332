// Shared test helpers for integration tests
#![allow(dead_code)]

use bench_matrix::config::{BenchMatrix, MatrixTables};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// The compiled-in matrix, resolved.
pub fn default_tables() -> MatrixTables {
    BenchMatrix::default()
        .resolve()
        .expect("the built-in matrix must resolve")
}

/// Writes a matrix file into `dir` and returns its path.
pub fn write_matrix(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("Failed to write matrix file");
    path
}

/// A one-scene matrix pointing at the given renderer executables.
pub fn small_matrix_toml(reference: &Path, candidate: &Path) -> String {
    format!(
        r#"
language = "en"
iterations = 3
warmup = 1
scenes = ["sponza"]
variants = ["-w 4", "-w 4 -p"]
distributions = ["primary"]

[reference]
name = "fake-reference"
executable = '{}'

[candidate]
name = "fake-candidate"
executable = '{}'

[offsets]
sponza = {{ tmin = 0.01, ao_tmax = 10.0 }}
"#,
        reference.display(),
        candidate.display()
    )
}

/// Writes an executable shell script standing in for a renderer.
#[cfg(unix)]
pub fn write_fake_renderer(dir: &TempDir, name: &str, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.path().join(name);
    fs::write(&path, format!("#!/bin/sh\n{body}\n")).expect("Failed to write fake renderer");
    let mut permissions = fs::metadata(&path).unwrap().permissions();
    permissions.set_mode(0o755);
    fs::set_permissions(&path, permissions).unwrap();
    path
}
