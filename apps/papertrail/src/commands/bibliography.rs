//! `preview` and `export`

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use papertrail_styles::{export_file_name, render, CitationStyle};

use super::Session;

const NO_CITATIONS: &str = "No citations to format. Add some citations first.";

fn style_or_default(session: &Session, style: Option<CitationStyle>) -> CitationStyle {
    style.unwrap_or(session.config.output.default_style)
}

pub fn preview(session: &Session, style: Option<CitationStyle>, out: &mut dyn Write) -> Result<()> {
    let records = session.store.list_all()?;
    if records.is_empty() {
        writeln!(out, "{}", NO_CITATIONS)?;
        return Ok(());
    }

    let style = style_or_default(session, style);
    write!(out, "{}", render(&records, &style))?;
    Ok(())
}

/// Write the bibliography to `output`, or `bibliography_<style>.txt`
/// in the working directory
pub fn export(
    session: &Session,
    style: Option<CitationStyle>,
    output: Option<&Path>,
    out: &mut dyn Write,
) -> Result<()> {
    let records = session.store.list_all()?;
    if records.is_empty() {
        writeln!(out, "{}", NO_CITATIONS)?;
        return Ok(());
    }

    let style = style_or_default(session, style);
    let path = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(export_file_name(style)));

    std::fs::write(&path, render(&records, &style))
        .with_context(|| format!("Failed to write bibliography to {}", path.display()))?;

    tracing::info!("Exported {} citations in {} style", records.len(), style);
    writeln!(out, "Bibliography exported to {}", path.display())?;
    Ok(())
}
