// src/utils/csv_exporter.rs

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, Utc};
use csv::{QuoteStyle, Terminator, WriterBuilder};
use log::info;
use std::path::{Path, PathBuf};

use crate::models::waitlist::WaitlistEntry;
use crate::models::Entry;

pub const WAITLIST_HEADERS: [&str; 7] = [
	"ID",
	"Nome",
	"Email",
	"Telefone",
	"Empresa",
	"Tipo",
	"Data de Cadastro",
];

/// Renders the sign-up timestamp the way the admin UI shows it.
///
/// RFC 3339 values are shown in local time, offset-less values as written,
/// anything else verbatim.
pub fn format_created_at(created_at: Option<&str>) -> String {
	let Some(raw) = created_at else {
		return String::new();
	};
	if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
		return parsed
			.with_timezone(&Local)
			.format("%d/%m/%Y %H:%M:%S")
			.to_string();
	}
	if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
		return parsed.format("%d/%m/%Y %H:%M:%S").to_string();
	}
	raw.to_string()
}

/// Builds the waitlist CSV: a bare header line, then one fully quoted row per entry.
pub fn render_waitlist_csv(entries: &[Entry<WaitlistEntry>]) -> Result<String> {
	let mut writer = WriterBuilder::new()
		.quote_style(QuoteStyle::Always)
		.terminator(Terminator::Any(b'\n'))
		.has_headers(false)
		.from_writer(Vec::new());

	for entry in entries {
		let data = &entry.data;
		writer
			.write_record([
				entry.id.to_string(),
				data.name.clone(),
				data.email.clone(),
				data.phone.clone().unwrap_or_default(),
				data.company.clone().unwrap_or_default(),
				data.kind_label().to_string(),
				format_created_at(data.created_at.as_deref()),
			])
			.with_context(|| format!("Failed to write waitlist row {}", entry.id))?;
	}

	let rows = writer
		.into_inner()
		.map_err(|e| anyhow::anyhow!("Failed to flush CSV writer: {}", e))?;
	let rows = String::from_utf8(rows).context("CSV output is not valid UTF-8")?;

	let mut csv = WAITLIST_HEADERS.join(",");
	if !rows.is_empty() {
		csv.push('\n');
		csv.push_str(rows.trim_end_matches('\n'));
	}
	Ok(csv)
}

pub fn export_filename(date: NaiveDate) -> String {
	format!("lista-espera-{}.csv", date.format("%Y-%m-%d"))
}

/// Writes the waitlist CSV into `dir` and returns the file path.
pub fn export_waitlist(entries: &[Entry<WaitlistEntry>], dir: &Path) -> Result<PathBuf> {
	if entries.is_empty() {
		bail!("No waitlist entries to export");
	}

	let csv = render_waitlist_csv(entries)?;
	std::fs::create_dir_all(dir).context("Failed to create export directory")?;

	let path = dir.join(export_filename(Utc::now().date_naive()));
	std::fs::write(&path, csv).with_context(|| format!("Failed to write {:?}", path))?;

	info!("Exported {} waitlist entries to {:?}", entries.len(), path);
	Ok(path)
}
