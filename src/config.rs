//! The one-line key file under the per-user config directory. The key is the
//! first non-empty, non-comment line; first runs prompt on stdin and persist
//! the answer with a comment header.

use anyhow::{anyhow, Context, Result};
use std::{
    fs,
    io::{self, BufRead},
    path::{Path, PathBuf},
};

const KEY_FILE_HEADER: &str = "# OpenWeather API key goes here";

pub fn key_file_path() -> Result<PathBuf> {
    let base = dirs::config_dir()
        .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;
    Ok(base.join("zipwx").join("zipwx.config"))
}

/// Load the API key, prompting for one on first run.
pub fn load_or_prompt_key() -> Result<String> {
    let path = key_file_path()?;
    if path.exists() {
        return load_key(&path);
    }

    println!("no OpenWeather API key found, enter one now");
    let mut input = String::new();
    io::stdin()
        .lock()
        .read_line(&mut input)
        .context("Failed to read API key from stdin")?;
    let key = input.trim().to_string();
    if key.is_empty() {
        return Err(anyhow!("No API key entered"));
    }

    store_key(&path, &key)?;
    Ok(key)
}

fn load_key(path: &Path) -> Result<String> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read key file {}", path.display()))?;
    parse_key(&contents)
        .ok_or_else(|| anyhow!("Invalid API key configuration in {}", path.display()))
}

fn parse_key(contents: &str) -> Option<String> {
    contents
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
}

fn store_key(path: &Path, key: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory {}", parent.display()))?;
    }
    fs::write(path, format!("{KEY_FILE_HEADER}\n{key}\n"))
        .with_context(|| format!("Failed to write key file {}", path.display()))?;
    Ok(())
}
