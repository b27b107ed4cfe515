use std::fs::OpenOptions;
use std::io::Write;
use std::iter;
use std::path::Path;

use anyhow::{Context, Result};
use itertools::Itertools;

use crate::domain::Look;

/// Append one look to the CSV log.
///
/// The header row ("timestamp" plus each category name) is written only
/// when the file is being created; after that the log grows by exactly
/// one data row per call. Absent values become empty fields.
pub fn append_look(path: &Path, look: &Look) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .context(format!("Failed to create directory: {}", parent.display()))?;
        }
    }

    let write_header = !path.exists();
    let mut file = OpenOptions::new()
        .append(true)
        .create(true)
        .open(path)
        .context(format!("Failed to open look log: {}", path.display()))?;

    let mut record = String::new();
    if write_header {
        let header = iter::once("timestamp")
            .chain(look.category_names())
            .map(escape_field)
            .join(",");
        record.push_str(&header);
        record.push('\n');
    }
    let row = iter::once(look.timestamp())
        .chain(
            look.entries()
                .iter()
                .map(|(_, value)| value.as_deref().unwrap_or("")),
        )
        .map(escape_field)
        .join(",");
    record.push_str(&row);
    record.push('\n');

    file.write_all(record.as_bytes())
        .context(format!("Failed to append to look log: {}", path.display()))
}

/// Standard CSV quoting: fields containing the delimiter, quotes or line
/// breaks are wrapped in quotes with inner quotes doubled.
fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_look(timestamp: &str) -> Look {
        Look::new(
            timestamp.to_string(),
            vec![
                ("tops".to_string(), Some("White tee".to_string())),
                ("bottoms".to_string(), Some("Blue jeans".to_string())),
                ("shoes".to_string(), None),
            ],
        )
    }

    #[test]
    fn first_save_writes_header_then_row() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("exports").join("looks.csv");

        append_look(&path, &sample_look("2026-08-27 10:00:00")).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "timestamp,tops,bottoms,shoes");
        assert_eq!(lines[1], "2026-08-27 10:00:00,White tee,Blue jeans,");
    }

    #[test]
    fn later_saves_append_rows_without_a_second_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("looks.csv");

        for i in 0..3 {
            append_look(&path, &sample_look(&format!("2026-08-27 10:00:0{i}"))).unwrap();
        }

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines.iter().filter(|l| l.starts_with("timestamp")).count(), 1);
        assert!(lines[3].starts_with("2026-08-27 10:00:02"));
    }

    #[test]
    fn row_fields_match_the_snapshot_at_save_time() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("looks.csv");
        let look = sample_look("2026-08-27 11:30:00");

        append_look(&path, &look).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let data_row = contents.lines().nth(1).unwrap();
        let fields: Vec<&str> = data_row.split(',').collect();
        assert_eq!(fields[0], look.timestamp());
        for (i, (_, value)) in look.entries().iter().enumerate() {
            assert_eq!(fields[i + 1], value.as_deref().unwrap_or(""));
        }
    }

    #[test]
    fn delimiter_bearing_values_are_quoted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("looks.csv");
        let look = Look::new(
            "2026-08-27 12:00:00".to_string(),
            vec![("tops".to_string(), Some("Red, \"vintage\" tee".to_string()))],
        );

        append_look(&path, &look).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("\"Red, \"\"vintage\"\" tee\""));
    }

    #[test]
    fn unwritable_parent_surfaces_an_error() {
        let dir = tempfile::tempdir().unwrap();
        // A file where the parent directory should be makes create_dir_all fail.
        let blocker = dir.path().join("exports");
        std::fs::write(&blocker, b"not a directory").unwrap();

        let path = blocker.join("looks.csv");
        let err = append_look(&path, &sample_look("2026-08-27 13:00:00")).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to create directory"));
    }
}
