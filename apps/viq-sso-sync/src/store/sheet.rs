//! CSV persistence for the user sheet

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use crate::error::{CliError, CliResult};
use crate::models::UserRecord;

/// Columns a row cannot be read without
const REQUIRED_COLUMNS: [&str; 3] = ["Home VIQ ID", "LOGIN NAME", "USER ROLE"];

/// How an export is written to the sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    /// Replace the sheet contents with the new rows
    Overwrite,
    /// Keep existing rows and add the new ones after them
    Append,
}

impl std::fmt::Display for WriteMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WriteMode::Overwrite => write!(f, "overwritten"),
            WriteMode::Append => write!(f, "appended"),
        }
    }
}

/// The sheet file on disk
#[derive(Debug, Clone)]
pub struct SheetStore {
    path: PathBuf,
}

impl SheetStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Read every row in file order
    pub fn read_all(&self) -> CliResult<Vec<UserRecord>> {
        if !self.exists() {
            return Err(CliError::SheetMissing(self.path.clone()));
        }

        let file = File::open(&self.path).map_err(|e| {
            CliError::Sheet(format!("Cannot open {}: {e}", self.path.display()))
        })?;
        read_records(BufReader::new(file))
    }

    /// Replace the sheet with exactly `records`
    pub fn write_replace(&self, records: &[UserRecord]) -> CliResult<()> {
        self.write_atomic(records)
    }

    /// Keep the current rows and add `records` after them; no deduplication
    pub fn write_append(&self, records: &[UserRecord]) -> CliResult<()> {
        let mut rows = self.read_all()?;
        rows.extend_from_slice(records);
        self.write_atomic(&rows)
    }

    pub fn write(&self, mode: WriteMode, records: &[UserRecord]) -> CliResult<()> {
        match mode {
            WriteMode::Overwrite => self.write_replace(records),
            WriteMode::Append => self.write_append(records),
        }
    }

    /// Write to a sibling temp file, then rename over the sheet
    fn write_atomic(&self, records: &[UserRecord]) -> CliResult<()> {
        let tmp = self.temp_path();
        {
            let file = File::create(&tmp).map_err(|e| {
                CliError::Sheet(format!("Cannot create {}: {e}", tmp.display()))
            })?;
            let mut writer = BufWriter::new(file);
            if let Err(e) = write_records(records, &mut writer) {
                let _ = std::fs::remove_file(&tmp);
                return Err(e);
            }
            writer.flush()?;
        }

        std::fs::rename(&tmp, &self.path).map_err(|e| {
            let _ = std::fs::remove_file(&tmp);
            CliError::Sheet(format!("Cannot replace {}: {e}", self.path.display()))
        })
    }

    fn temp_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "sheet.csv".to_string());
        self.path.with_file_name(format!(".{name}.tmp"))
    }
}

/// Parse sheet rows from CSV content
pub fn read_records<R: Read>(reader: R) -> CliResult<Vec<UserRecord>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    // A zero-byte file is a sheet that was never written
    if headers.is_empty() {
        return Ok(Vec::new());
    }

    let missing: Vec<&str> = REQUIRED_COLUMNS
        .iter()
        .copied()
        .filter(|col| !headers.iter().any(|h| h == *col))
        .collect();
    if !missing.is_empty() {
        return Err(CliError::Sheet(format!(
            "Sheet missing required columns: {}",
            missing.join(", ")
        )));
    }

    let mut records = Vec::new();
    for (idx, result) in rdr.deserialize::<UserRecord>().enumerate() {
        let line_num = idx + 2; // +1 for 0-index, +1 for header
        let record =
            result.map_err(|e| CliError::Sheet(format!("Line {line_num}: {e}")))?;
        records.push(record);
    }

    Ok(records)
}

/// Write the header row followed by `records`
pub fn write_records<W: Write>(records: &[UserRecord], writer: W) -> CliResult<()> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    wtr.write_record(UserRecord::HEADERS)?;
    for record in records {
        wtr.serialize(record)?;
    }

    wtr.flush()
        .map_err(|e| CliError::Sheet(format!("Failed to flush sheet: {e}")))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn record(id: i64, login: &str) -> UserRecord {
        UserRecord {
            home_instance_id: id,
            login_name: login.to_string(),
            first_name: "First".to_string(),
            last_name: "Last".to_string(),
            display_name: "First Last".to_string(),
            user_role: "ADMINISTRATOR".to_string(),
            vhm_id: "VHM-1".to_string(),
            owner_id: "55".to_string(),
            instance_name: "Source".to_string(),
        }
    }

    #[test]
    fn test_write_records_header_row() {
        let mut output = Vec::new();
        write_records(&[record(1, "a@saml.login")], &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();

        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("Home VIQ ID,LOGIN NAME,FIRST NAME,LAST NAME,DISPLAY NAME,USER ROLE,VHM ID,OWNER ID,VIQ NAME")
        );
        assert_eq!(
            lines.next(),
            Some("1,a@saml.login,First,Last,First Last,ADMINISTRATOR,VHM-1,55,Source")
        );
    }

    #[test]
    fn test_header_only_sheet_reads_empty() {
        let mut output = Vec::new();
        write_records(&[], &mut output).unwrap();
        let records = read_records(output.as_slice()).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_zero_byte_sheet_reads_empty() {
        let records = read_records(&b""[..]).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_append_to_zero_byte_sheet() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("sheet.csv");
        std::fs::write(&path, "").unwrap();
        let store = SheetStore::new(&path);

        store.write_append(&[record(7, "g@saml.login")]).unwrap();
        assert_eq!(store.read_all().unwrap(), vec![record(7, "g@saml.login")]);
    }

    #[test]
    fn test_read_missing_columns() {
        let csv = "LOGIN NAME,FIRST NAME\na@saml.login,Ann\n";
        let err = read_records(csv.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("Home VIQ ID"));
        assert!(err.to_string().contains("USER ROLE"));
    }

    #[test]
    fn test_read_optional_columns_default() {
        let csv = "Home VIQ ID,LOGIN NAME,USER ROLE\n42,b@saml.login,MONITOR\n";
        let records = read_records(csv.as_bytes()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].home_instance_id, 42);
        assert_eq!(records[0].instance_name, "");
    }

    #[test]
    fn test_read_bad_id_reports_line() {
        let csv = "Home VIQ ID,LOGIN NAME,USER ROLE\n1,a@saml.login,MONITOR\nabc,b,MONITOR\n";
        let err = read_records(csv.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("Line 3"));
    }

    #[test]
    fn test_quoted_fields_survive() {
        let mut r = record(3, "c@saml.login");
        r.display_name = "Doe, \"JD\" John".to_string();
        let mut output = Vec::new();
        write_records(std::slice::from_ref(&r), &mut output).unwrap();
        assert_eq!(read_records(output.as_slice()).unwrap(), vec![r]);
    }

    #[test]
    fn test_read_all_missing_file() {
        let dir = TempDir::new().unwrap();
        let store = SheetStore::new(dir.path().join("absent.csv"));
        assert!(!store.exists());
        assert!(matches!(
            store.read_all().unwrap_err(),
            CliError::SheetMissing(_)
        ));
    }

    #[test]
    fn test_write_leaves_no_temp_file() {
        let dir = TempDir::new().unwrap();
        let store = SheetStore::new(dir.path().join("users.csv"));
        store.write_replace(&[record(1, "a@saml.login")]).unwrap();

        let names: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["users.csv".to_string()]);
    }

    #[test]
    fn test_write_mode_display() {
        assert_eq!(WriteMode::Overwrite.to_string(), "overwritten");
        assert_eq!(WriteMode::Append.to_string(), "appended");
    }
}
