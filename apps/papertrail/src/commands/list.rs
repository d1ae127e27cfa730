//! `list`, `delete` and `clear`

use std::io::Write;

use anyhow::{bail, Result};
use papertrail_domain::CitationRecord;

use super::Session;

const TITLE_WIDTH: usize = 50;
const AUTHORS_WIDTH: usize = 30;

/// Cut `text` to `max` characters, marking the cut with `...`
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        let head: String = text.chars().take(max).collect();
        format!("{}...", head)
    } else {
        text.to_string()
    }
}

fn row(record: &CitationRecord) -> String {
    format!(
        "{:>4}  {:<53}  {:<33}  {}",
        record.id.map(|id| id.to_string()).unwrap_or_default(),
        truncate(&record.title, TITLE_WIDTH),
        truncate(&record.authors, AUTHORS_WIDTH),
        record.year().unwrap_or(""),
    )
}

pub fn list(session: &Session, json: bool, out: &mut dyn Write) -> Result<()> {
    let records = session.store.list_all()?;

    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&records)?)?;
        return Ok(());
    }

    if records.is_empty() {
        writeln!(out, "No citations saved yet")?;
        return Ok(());
    }

    writeln!(out, "{:>4}  {:<53}  {:<33}  Year", "ID", "Title", "Authors")?;
    for record in &records {
        writeln!(out, "{}", row(record).trim_end())?;
    }
    Ok(())
}

/// Delete each id; fails after processing all ids if any were missing
pub fn delete(session: &Session, ids: &[i64], out: &mut dyn Write) -> Result<()> {
    let mut missing = Vec::new();
    for &id in ids {
        if session.store.delete(id)? {
            writeln!(out, "Deleted citation {}", id)?;
        } else {
            missing.push(id.to_string());
        }
    }

    if !missing.is_empty() {
        bail!("No citation with id {}", missing.join(", "));
    }
    Ok(())
}

pub fn clear(session: &Session, confirmed: bool, out: &mut dyn Write) -> Result<()> {
    if !confirmed {
        let count = session.store.count()?;
        bail!(
            "Refusing to delete {} citations without --yes (this cannot be undone)",
            count
        );
    }

    let removed = session.store.clear_all()?;
    writeln!(out, "Removed {} citations", removed)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn output(f: impl FnOnce(&mut Vec<u8>) -> Result<()>) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[rstest]
    #[case("short", 10, "short")]
    #[case("exactly10!", 10, "exactly10!")]
    #[case("eleven char", 10, "eleven cha...")]
    #[case("Schrödinger's Katze", 12, "Schrödinger'...")]
    fn test_truncate(#[case] input: &str, #[case] max: usize, #[case] expected: &str) {
        assert_eq!(truncate(input, max), expected);
    }

    #[test]
    fn test_list_truncates_long_columns() {
        let session = Session::in_memory();
        let record = CitationRecord::manual(&"T".repeat(60), &"A".repeat(40), "2001", "", "");
        session.store.create(&record).unwrap();

        let text = output(|out| list(&session, false, out));
        let line = text.lines().nth(1).unwrap();
        assert!(line.contains(&format!("{}...", "T".repeat(50))));
        assert!(line.contains(&format!("{}...", "A".repeat(30))));
        assert!(!line.contains(&"T".repeat(51)));
        assert!(line.ends_with("2001"));
    }

    #[test]
    fn test_list_empty() {
        let session = Session::in_memory();
        assert_eq!(output(|out| list(&session, false, out)), "No citations saved yet\n");
    }

    #[test]
    fn test_list_json_is_full_records() {
        let session = Session::in_memory();
        session
            .store
            .create(&CitationRecord::manual(&"T".repeat(60), "", "", "", ""))
            .unwrap();

        let text = output(|out| list(&session, true, out));
        let records: Vec<CitationRecord> = serde_json::from_str(&text).unwrap();
        assert_eq!(records[0].title.len(), 60);
    }

    #[test]
    fn test_delete_reports_missing_ids() {
        let session = Session::in_memory();
        let id = session
            .store
            .create(&CitationRecord::manual("x", "", "", "", ""))
            .unwrap();

        let mut out = Vec::new();
        let err = delete(&session, &[id, 99], &mut out).unwrap_err();

        assert_eq!(String::from_utf8(out).unwrap(), format!("Deleted citation {}\n", id));
        assert_eq!(err.to_string(), "No citation with id 99");
        assert_eq!(session.store.count().unwrap(), 0);
    }

    #[test]
    fn test_clear_needs_confirmation() {
        let session = Session::in_memory();
        session
            .store
            .create(&CitationRecord::manual("x", "", "", "", ""))
            .unwrap();

        assert!(clear(&session, false, &mut Vec::new()).is_err());
        assert_eq!(session.store.count().unwrap(), 1);

        assert_eq!(output(|out| clear(&session, true, out)), "Removed 1 citations\n");
        assert_eq!(session.store.count().unwrap(), 0);
    }
}
