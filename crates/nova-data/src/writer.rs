//! CSV and JSON output files.

use nova_core::error::DataError;
use serde::Serialize;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;
use tracing::debug;

fn ensure_parent(path: &Path) -> Result<(), DataError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .map_err(|e| DataError::Write(format!("{}: {}", parent.display(), e)))?;
    }
    Ok(())
}

/// Cell text for an optional value; missing and NaN values are empty cells.
pub fn format_optional(value: Option<f64>) -> String {
    value
        .filter(|v| !v.is_nan())
        .map(|v| v.to_string())
        .unwrap_or_default()
}

/// Write a header row and string rows, creating parent directories.
pub fn write_csv<I, R>(path: &Path, headers: &[&str], rows: I) -> Result<(), DataError>
where
    I: IntoIterator<Item = R>,
    R: IntoIterator,
    R::Item: AsRef<[u8]>,
{
    ensure_parent(path)?;
    let mut writer = csv::Writer::from_path(path)
        .map_err(|e| DataError::Write(format!("{}: {}", path.display(), e)))?;

    writer
        .write_record(headers)
        .map_err(|e| DataError::Csv(e.to_string()))?;
    let mut count = 0usize;
    for row in rows {
        writer
            .write_record(row)
            .map_err(|e| DataError::Csv(e.to_string()))?;
        count += 1;
    }
    writer
        .flush()
        .map_err(|e| DataError::Write(format!("{}: {}", path.display(), e)))?;

    debug!(path = %path.display(), rows = count, "Wrote CSV");
    Ok(())
}

/// Write a value as pretty JSON, creating parent directories.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), DataError> {
    ensure_parent(path)?;
    let file =
        File::create(path).map_err(|e| DataError::Write(format!("{}: {}", path.display(), e)))?;
    serde_json::to_writer_pretty(BufWriter::new(file), value)
        .map_err(|e| DataError::Write(format!("{}: {}", path.display(), e)))?;

    debug!(path = %path.display(), "Wrote JSON");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_optional() {
        assert_eq!(format_optional(None), "");
        assert_eq!(format_optional(Some(19.5)), "19.5");
        assert_eq!(format_optional(Some(f64::NAN)), "");
    }
}
