use std::fs;
use std::path::Path;

use anyhow::Result;
use rust_xlsxwriter::Workbook;

/// Column order of the output sheet. Readers depend on it, never reorder.
pub const COLUMNS: [&str; 5] = ["Title", "Company", "Location", "Experience", "Link"];

/// One extracted listing. Unextractable fields stay empty rather than
/// absent; a record always carries a non-empty title or link.
#[derive(Debug, Clone, PartialEq)]
pub struct JobRecord {
    pub title: String,
    pub company: String,
    pub location: String,
    pub experience: String,
    pub link: String,
}

/// Write all records to a single "Jobs" worksheet, header row first.
/// Zero records still produce a valid header-only workbook.
pub fn write_xlsx(path: &Path, records: &[JobRecord]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name("Jobs")?;

    for (col, header) in COLUMNS.iter().enumerate() {
        sheet.write_string(0, col as u16, *header)?;
    }
    for (i, record) in records.iter().enumerate() {
        let row = (i + 1) as u32;
        sheet.write_string(row, 0, record.title.as_str())?;
        sheet.write_string(row, 1, record.company.as_str())?;
        sheet.write_string(row, 2, record.location.as_str())?;
        sheet.write_string(row, 3, record.experience.as_str())?;
        sheet.write_string(row, 4, record.link.as_str())?;
    }

    workbook.save(path)?;
    Ok(())
}

// ── Tests ──
