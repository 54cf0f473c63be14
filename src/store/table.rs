use crate::errors::{AppError, AppResult};
use crate::models::LogRow;
use csv::{ReaderBuilder, Terminator, WriterBuilder};
use std::io::Read;

/// The persisted log exactly as stored: every cell is text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl LogTable {
    /// Parse CSV content. Ragged rows or invalid UTF-8 are errors.
    pub fn from_reader<R: Read>(rdr: R) -> AppResult<Self> {
        let mut rdr = ReaderBuilder::new().has_headers(true).from_reader(rdr);

        let headers: Vec<String> = rdr.headers()?.iter().map(String::from).collect();

        let mut rows = Vec::new();
        for rec in rdr.records() {
            let rec = rec?;
            rows.push(rec.iter().map(String::from).collect());
        }

        Ok(Self { headers, rows })
    }

    pub fn to_csv_bytes(&self) -> AppResult<Vec<u8>> {
        let mut wtr = WriterBuilder::new()
            .terminator(Terminator::Any(b'\n'))
            .from_writer(Vec::new());

        if !self.headers.is_empty() {
            wtr.write_record(&self.headers)?;
        }
        for row in &self.rows {
            wtr.write_record(row)?;
        }

        wtr.into_inner()
            .map_err(|e| AppError::Storage(format!("CSV flush error: {}", e.error())))
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    pub fn cell(&self, row: usize, column: &str) -> Option<&str> {
        let c = self.column_index(column)?;
        self.rows.get(row)?.get(c).map(String::as_str)
    }

    /// Append typed rows after the existing ones. Columns the table does not
    /// have yet are added at the end and existing rows get an empty cell
    /// there; columns a new row lacks are left empty for that row.
    pub fn push_rows(&mut self, new_rows: &[LogRow]) {
        for row in new_rows {
            let record = row.to_record();

            for (col, _) in &record {
                if self.column_index(col).is_none() {
                    self.headers.push(col.clone());
                    for existing in &mut self.rows {
                        existing.push(String::new());
                    }
                }
            }

            let mut cells = vec![String::new(); self.headers.len()];
            for (col, val) in record {
                if let Some(i) = self.column_index(&col) {
                    cells[i] = val;
                }
            }
            self.rows.push(cells);
        }
    }

    /// Typed view of every row, unknown columns in `extra`.
    pub fn to_log_rows(&self) -> Vec<LogRow> {
        self.rows
            .iter()
            .map(|r| {
                LogRow::from_record(
                    self.headers
                        .iter()
                        .zip(r.iter())
                        .map(|(h, v)| (h.as_str(), v.as_str())),
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::log_row::{COL_HOTEL_NAME, COL_JOB_NUMBER, COL_ROOM, COLUMNS};

    fn row(hotel: &str, room: &str) -> LogRow {
        let mut r = LogRow::default();
        r.hotel.name = hotel.into();
        r.room.room_number = room.into();
        r
    }

    #[test]
    fn first_push_takes_headers_from_rows() {
        let mut t = LogTable::default();
        t.push_rows(&[row("Sunrise Inn", "101")]);

        assert_eq!(t.headers, COLUMNS.map(String::from).to_vec());
        assert_eq!(t.cell(0, COL_ROOM), Some("101"));
    }

    #[test]
    fn legacy_columns_are_kept_and_new_ones_added() {
        let legacy = "Hotel Name,Room #,Notes\nOld Motel,7,quiet\n";
        let mut t = LogTable::from_reader(legacy.as_bytes()).unwrap();
        t.push_rows(&[row("Sunrise Inn", "101")]);

        // existing order first
        assert_eq!(&t.headers[..3], &["Hotel Name", "Room #", "Notes"]);
        assert_eq!(t.headers.len(), 3 + COLUMNS.len() - 2);

        // old row has holes for the new columns
        assert_eq!(t.cell(0, COL_JOB_NUMBER), Some(""));
        // new row has a hole for the legacy column
        assert_eq!(t.cell(1, "Notes"), Some(""));
        assert_eq!(t.cell(1, COL_HOTEL_NAME), Some("Sunrise Inn"));
    }

    #[test]
    fn ragged_content_is_rejected() {
        let bad = "a,b\n1,2,3\n";
        assert!(LogTable::from_reader(bad.as_bytes()).is_err());
    }

    #[test]
    fn serialization_quotes_only_when_needed() {
        let t = LogTable {
            headers: vec!["Hotel Name".into(), "Hotel Address".into()],
            rows: vec![vec!["Sunrise Inn".into(), "1 Main St, Tulsa".into()]],
        };
        let out = String::from_utf8(t.to_csv_bytes().unwrap()).unwrap();
        assert_eq!(out, "Hotel Name,Hotel Address\nSunrise Inn,\"1 Main St, Tulsa\"\n");
    }
}
