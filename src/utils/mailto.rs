use anyhow::{bail, Context, Result};
use log::info;
use std::process::Command;

pub fn mailto_uri(email: &str) -> String {
	format!("mailto:{}", email.trim())
}

#[cfg(target_os = "windows")]
fn opener(uri: &str) -> Command {
	let mut cmd = Command::new("cmd");
	cmd.args(["/C", "start", "", uri]);
	cmd
}

#[cfg(target_os = "macos")]
fn opener(uri: &str) -> Command {
	let mut cmd = Command::new("open");
	cmd.arg(uri);
	cmd
}

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
fn opener(uri: &str) -> Command {
	let mut cmd = Command::new("xdg-open");
	cmd.arg(uri);
	cmd
}

/// Hands a `mailto:` link to the desktop's default mail client.
pub fn open_mail_client(email: &str) -> Result<()> {
	if email.trim().is_empty() {
		bail!("No e-mail address to open");
	}

	let uri = mailto_uri(email);
	opener(&uri)
		.spawn()
		.with_context(|| format!("Failed to launch mail client for {}", uri))?;

	info!("Opened mail client for {}", email);
	Ok(())
}
