//! Build script for the site crate.
//!
//! Fingerprints the stylesheet so the rendered page can reference it under an
//! immutable, content-addressed file name.

use std::env;
use std::fs;
use std::path::Path;

use sha2::{Digest, Sha256};

/// Length of the fingerprint embedded in the file name.
const HASH_LEN: usize = 8;

fn main() {
    fingerprint_stylesheet();
}

/// Hash `static/css/main.css` and copy it to `static/css/derived/main.<hash>.css`.
///
/// Sets `CSS_HASH` for `env!("CSS_HASH")`. An empty value means the
/// stylesheet was missing and the page falls back to the unhashed file.
fn fingerprint_stylesheet() {
    let manifest_dir =
        env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR must be set by Cargo");
    let css_path = Path::new(&manifest_dir).join("static/css/main.css");

    println!("cargo:rerun-if-changed={}", css_path.display());

    let content = match fs::read(&css_path) {
        Ok(content) => content,
        Err(e) => {
            println!("cargo:warning=Could not read main.css: {e}");
            println!("cargo:rustc-env=CSS_HASH=");
            return;
        }
    };

    let digest = format!("{:x}", Sha256::digest(&content));
    let short_hash = &digest[..HASH_LEN];

    println!("cargo:rustc-env=CSS_HASH={short_hash}");

    let derived_dir = Path::new(&manifest_dir).join("static/css/derived");
    fs::create_dir_all(&derived_dir).expect("Failed to create derived CSS directory");

    let derived_path = derived_dir.join(format!("main.{short_hash}.css"));
    if !derived_path.exists() {
        fs::copy(&css_path, &derived_path).expect("Failed to copy CSS to derived directory");
    }
}
