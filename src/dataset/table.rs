use crate::shared::errors::{AppError, AppResult};
use csv::StringRecord;
use std::path::Path;

/// A raw source table projected down to an explicit column subset, with
/// incomplete rows removed.
///
/// Rows are kept as strings; values pass through to the cleaned output
/// verbatim. A row is incomplete when any retained column is empty, and is
/// dropped wholesale (no partial-row imputation). A missing file or a
/// requested column absent from the header is a fatal error.
#[derive(Debug, Clone)]
pub struct ProjectedTable {
    headers: StringRecord,
    rows: Vec<StringRecord>,
}

impl ProjectedTable {
    pub fn load(path: &Path, columns: &[&str]) -> AppResult<Self> {
        let mut reader = csv::Reader::from_path(path)
            .map_err(|e| AppError::IoError(format!("{}: {}", path.display(), e)))?;
        let source_headers = reader.headers()?.clone();

        let mut indices = Vec::with_capacity(columns.len());
        for &column in columns {
            let index = source_headers
                .iter()
                .position(|header| header == column)
                .ok_or_else(|| {
                    AppError::SchemaError(format!(
                        "column '{}' not found in {}",
                        column,
                        path.display()
                    ))
                })?;
            indices.push(index);
        }

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            if let Some(projected) = project_row(&record, &indices) {
                rows.push(projected);
            }
        }

        Ok(Self {
            headers: columns.iter().collect(),
            rows,
        })
    }

    pub fn headers(&self) -> &StringRecord {
        &self.headers
    }

    pub fn rows(&self) -> &[StringRecord] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|header| header == name)
    }

    /// Keep only rows for which `predicate` returns true. Row order is
    /// preserved.
    pub fn retain<F>(&mut self, mut predicate: F)
    where
        F: FnMut(&StringRecord) -> bool,
    {
        self.rows.retain(|row| predicate(row));
    }

    /// Append a derived column. `values` must hold one entry per row.
    pub fn append_column(&mut self, name: &str, values: Vec<String>) -> AppResult<()> {
        if values.len() != self.rows.len() {
            return Err(AppError::SchemaError(format!(
                "derived column '{}' has {} values for {} rows",
                name,
                values.len(),
                self.rows.len()
            )));
        }
        self.headers.push_field(name);
        for (row, value) in self.rows.iter_mut().zip(values) {
            row.push_field(&value);
        }
        Ok(())
    }

    /// Write the table to `path`, replacing any existing file in full.
    pub fn write_csv(&self, path: &Path) -> AppResult<()> {
        let mut writer = csv::Writer::from_path(path)
            .map_err(|e| AppError::IoError(format!("{}: {}", path.display(), e)))?;
        writer.write_record(&self.headers)?;
        for row in &self.rows {
            writer.write_record(row)?;
        }
        writer.flush()?;
        Ok(())
    }
}

fn project_row(record: &StringRecord, indices: &[usize]) -> Option<StringRecord> {
    let mut projected = StringRecord::new();
    for &index in indices {
        match record.get(index) {
            Some(value) if !value.is_empty() => projected.push_field(value),
            _ => return None,
        }
    }
    Some(projected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_csv(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn projects_requested_columns_in_order() {
        let file = write_csv("a,b,c\n1,2,3\n4,5,6\n");
        let table = ProjectedTable::load(file.path(), &["c", "a"]).unwrap();
        assert_eq!(table.headers(), &StringRecord::from(vec!["c", "a"]));
        assert_eq!(table.rows()[0], StringRecord::from(vec!["3", "1"]));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn drops_rows_with_any_empty_retained_field() {
        let file = write_csv("a,b,c\n1,,3\n4,5,6\n,8,9\n");
        let table = ProjectedTable::load(file.path(), &["a", "b"]).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.rows()[0], StringRecord::from(vec!["4", "5"]));
    }

    #[test]
    fn keeps_rows_empty_only_in_unretained_columns() {
        let file = write_csv("a,b,c\n1,,3\n");
        let table = ProjectedTable::load(file.path(), &["a", "c"]).unwrap();
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn missing_column_is_a_schema_error() {
        let file = write_csv("a,b\n1,2\n");
        let result = ProjectedTable::load(file.path(), &["a", "nope"]);
        assert!(matches!(result, Err(AppError::SchemaError(_))));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let result = ProjectedTable::load(Path::new("no/such/file.csv"), &["a"]);
        assert!(matches!(result, Err(AppError::IoError(_))));
    }

    #[test]
    fn append_column_requires_one_value_per_row() {
        let file = write_csv("a\n1\n2\n");
        let mut table = ProjectedTable::load(file.path(), &["a"]).unwrap();
        assert!(table
            .append_column("d", vec!["x".to_string()])
            .is_err());
        table
            .append_column("d", vec!["x".to_string(), "y".to_string()])
            .unwrap();
        assert_eq!(table.headers(), &StringRecord::from(vec!["a", "d"]));
        assert_eq!(table.rows()[1], StringRecord::from(vec!["2", "y"]));
    }
}
