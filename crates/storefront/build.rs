//! Build script for the storefront crate.
//!
//! Fingerprints the stylesheet so pages can link to an immutable,
//! cache-forever URL (`/static/css/derived/main.<hash>.css`).

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};

/// Number of hex characters kept from the digest.
const HASH_LEN: usize = 8;

fn main() {
    let manifest_dir =
        env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR must be set by Cargo");
    let css_dir = Path::new(&manifest_dir).join("static/css");
    let css_path = css_dir.join("main.css");

    println!("cargo:rerun-if-changed={}", css_path.display());

    let Some(hash) = fingerprint(&css_path) else {
        println!("cargo:rustc-env=CSS_HASH=");
        return;
    };
    println!("cargo:rustc-env=CSS_HASH={hash}");

    let derived_dir = css_dir.join("derived");
    fs::create_dir_all(&derived_dir).expect("Failed to create derived CSS directory");
    remove_stale(&derived_dir, &hash);

    let derived_path: PathBuf = derived_dir.join(format!("main.{hash}.css"));
    fs::copy(&css_path, &derived_path).expect("Failed to copy CSS to derived directory");
}

/// Short SHA-256 of the file, or `None` if it cannot be read.
fn fingerprint(path: &Path) -> Option<String> {
    match fs::read(path) {
        Ok(content) => {
            let digest = format!("{:x}", Sha256::digest(&content));
            Some(digest.chars().take(HASH_LEN).collect())
        }
        Err(e) => {
            println!("cargo:warning=Could not read {}: {e}", path.display());
            None
        }
    }
}

/// Delete fingerprinted copies from earlier builds.
fn remove_stale(derived_dir: &Path, current_hash: &str) {
    let Ok(entries) = fs::read_dir(derived_dir) else {
        return;
    };
    let keep = format!("main.{current_hash}.css");
    for entry in entries.flatten() {
        let name = entry.file_name();
        let name = name.to_string_lossy();
        if name.starts_with("main.") && name.ends_with(".css") && name != keep {
            let _ = fs::remove_file(entry.path());
        }
    }
}
