//! Outbound links - hands external URLs to the platform opener

use anyhow::{bail, Context, Result};
use std::process::{Command, Stdio};

/// Only absolute web URLs leave the application
pub fn is_external_url(url: &str) -> bool {
    (url.starts_with("http://") || url.starts_with("https://"))
        && !url.chars().any(char::is_whitespace)
        && url.split("://").nth(1).is_some_and(|rest| !rest.is_empty())
}

/// Open `url` in the system browser without waiting for it
pub fn open_external(url: &str) -> Result<()> {
    if !is_external_url(url) {
        bail!("Refusing to open '{}': not an http(s) URL", url);
    }

    let mut cmd = opener_command(url);
    cmd.stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());

    cmd.spawn()
        .with_context(|| format!("Failed to open '{}'", url))?;

    tracing::info!(url, "opened external link");
    Ok(())
}

#[cfg(target_os = "macos")]
fn opener_command(url: &str) -> Command {
    let mut cmd = Command::new("open");
    cmd.arg(url);
    cmd
}

#[cfg(target_os = "windows")]
fn opener_command(url: &str) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.args(["/C", "start", "", url]);
    cmd
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn opener_command(url: &str) -> Command {
    let mut cmd = Command::new("xdg-open");
    cmd.arg(url);
    cmd
}
