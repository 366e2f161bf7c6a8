use anyhow::{Context, Result};
use std::env;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

/// Overrides the HTML file that gets embedded.
const SOURCE_ENV: &str = "PAWS_DASHBOARD_HTML";
const DEFAULT_SOURCE: &str = "assets/dashboard.html";
const STAGED_NAME: &str = "dashboard.html";

fn main() -> Result<()> {
    println!("cargo:rerun-if-env-changed={SOURCE_ENV}");

    let manifest_dir = env::var_os("CARGO_MANIFEST_DIR")
        .map(PathBuf::from)
        .context("CARGO_MANIFEST_DIR is not set")?;
    let out_dir = env::var_os("OUT_DIR")
        .map(PathBuf::from)
        .context("OUT_DIR is not set")?;

    let source = resolve_source(&manifest_dir, env::var_os(SOURCE_ENV));
    println!("cargo:rerun-if-changed={}", source.display());

    let html = fs::read(&source)
        .with_context(|| format!("failed to read dashboard asset {}", source.display()))?;
    if html.is_empty() {
        println!(
            "cargo:warning=dashboard asset {} is empty",
            source.display()
        );
    }

    let staged = out_dir.join(STAGED_NAME);
    fs::write(&staged, &html)
        .with_context(|| format!("failed to stage dashboard asset at {}", staged.display()))?;

    let source = fs::canonicalize(&source)
        .with_context(|| format!("failed to canonicalize {}", source.display()))?;
    println!("cargo:rustc-env=PAWS_DASHBOARD_LEN={}", html.len());
    println!("cargo:rustc-env=PAWS_DASHBOARD_SOURCE={}", source.display());

    Ok(())
}

fn resolve_source(manifest_dir: &Path, configured: Option<OsString>) -> PathBuf {
    let path = configured
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SOURCE));
    if path.is_absolute() {
        path
    } else {
        manifest_dir.join(path)
    }
}
