//! Build script for storefront crate.
//!
//! Hashes the stylesheet so templates can append a cache-busting version to
//! its URL.

use std::env;
use std::fs;
use std::path::Path;

use sha2::{Digest, Sha256};

fn main() {
    hash_css();
}

/// Hash main.css.
///
/// Sets `CSS_HASH` environment variable for use with `env!("CSS_HASH")`.
fn hash_css() {
    let Ok(manifest_dir) = env::var("CARGO_MANIFEST_DIR") else {
        println!("cargo:rustc-env=CSS_HASH=");
        return;
    };
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

    // First 8 hex chars of SHA256
    let hash = format!("{:x}", Sha256::digest(&content));
    let short_hash: String = hash.chars().take(8).collect();

    println!("cargo:rustc-env=CSS_HASH={short_hash}");
}
