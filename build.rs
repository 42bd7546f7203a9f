//! Build script for the playlist feature dataset CLI.
//!
//! Copies the configuration template to the user's local data directory so a
//! ready-to-edit `.env.example` is available in the location where the
//! application looks for its `.env` file.
//!
//! # File Operations
//!
//! The script looks for `.env.example` in the crate root (where Cargo.toml
//! resides) and copies it to the platform-specific local data directory:
//! - Linux: `~/.local/share/playfeat/.env.example`
//! - macOS: `~/Library/Application Support/playfeat/.env.example`
//! - Windows: `%LOCALAPPDATA%/playfeat/.env.example`
//!
//! # Error Handling
//!
//! A missing template produces a cargo warning instead of failing the build;
//! directory creation or copy failures are treated as critical and abort.

use std::{env, fs, path::PathBuf};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Re-run if the template changes
    println!("cargo:rerun-if-changed=env.example");

    // Where to copy FROM (crate root)
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let env_example_path = manifest_dir.join(".env.example");

    // Compute target dir (your local data dir) and ensure it exists
    let mut out_dir = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    out_dir.push("playfeat");
    fs::create_dir_all(&out_dir)?;

    // Only copy if the source exists; otherwise warn instead of failing
    if env_example_path.is_file() {
        let contents = fs::read_to_string(&env_example_path)?;
        fs::write(out_dir.join(".env.example"), contents)?;
    } else {
        println!(
            "cargo:warning=env.example not found at {}",
            env_example_path.display()
        );
    }

    Ok(())
}
