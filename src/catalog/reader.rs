use super::CatalogError;
use crate::model::{RawRecord, METADATA_COLUMNS};
use camino::Utf8Path;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};

/// Number of non-ingredient columns that close every catalog row.
pub const TRAILING_COLUMNS: usize = 2;

/// Column layout taken from a catalog header row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogSchema {
    columns: Vec<String>,
}

impl CatalogSchema {
    /// Validates a header row.
    ///
    /// The header must start with the metadata columns and leave room for
    /// the trailing columns.
    pub fn from_header<S: Into<String>>(
        header: impl IntoIterator<Item = S>,
    ) -> Result<Self, CatalogError> {
        let columns: Vec<String> = header.into_iter().map(Into::into).collect();

        if columns.len() < METADATA_COLUMNS.len() + TRAILING_COLUMNS {
            return Err(CatalogError::InvalidHeader(format!(
                "expected at least {} columns, found {}",
                METADATA_COLUMNS.len() + TRAILING_COLUMNS,
                columns.len()
            )));
        }
        for (expected, found) in METADATA_COLUMNS.iter().zip(&columns) {
            if expected != found {
                return Err(CatalogError::InvalidHeader(format!(
                    "expected column {expected:?}, found {found:?}"
                )));
            }
        }

        Ok(CatalogSchema { columns })
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Ingredient columns, excluding metadata and trailing columns.
    pub fn universe(&self) -> &[String] {
        &self.columns[METADATA_COLUMNS.len()..self.columns.len() - TRAILING_COLUMNS]
    }

    /// Pairs a row's cells with the header. Short rows are padded with
    /// empty cells.
    pub fn record(
        &self,
        cells: Vec<Option<String>>,
        line: usize,
    ) -> Result<RawRecord, CatalogError> {
        if cells.len() > self.columns.len() {
            return Err(CatalogError::RowLength {
                line,
                expected: self.columns.len(),
                found: cells.len(),
            });
        }

        let mut cells = cells.into_iter();
        Ok(self
            .columns
            .iter()
            .map(|column| (column.clone(), cells.next().flatten()))
            .collect())
    }
}

const BOM: char = '\u{feff}';

/// One physical record of the catalog text, before it is paired with the
/// header.
#[derive(Debug, PartialEq, Eq)]
struct Row {
    /// 1-based line the record starts on
    line: usize,
    cells: Vec<String>,
}

impl Row {
    fn is_blank(&self) -> bool {
        self.cells.len() == 1 && self.cells[0].trim().is_empty()
    }
}

/// Splits catalog text into rows of tab-separated cells.
///
/// A cell that starts with `"` is quoted: it runs to the next unpaired `"`,
/// may contain tabs and line breaks, and `""` inside it stands for one `"`.
/// `\r\n` line endings are accepted.
fn split_rows(text: &str) -> Result<Vec<Row>, CatalogError> {
    let mut rows = Vec::new();
    let mut cells = Vec::new();
    let mut cell = String::new();
    let mut line = 1;
    let mut row_line = 1;
    let mut field_start = true;
    let mut quoted_since = None;

    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if quoted_since.is_some() {
            match c {
                '"' if chars.peek() == Some(&'"') => {
                    chars.next();
                    cell.push('"');
                }
                '"' => quoted_since = None,
                '\n' => {
                    line += 1;
                    cell.push(c);
                }
                _ => cell.push(c),
            }
            continue;
        }

        match c {
            '"' if field_start => {
                quoted_since = Some(line);
                field_start = false;
            }
            '\t' => {
                cells.push(std::mem::take(&mut cell));
                field_start = true;
            }
            '\r' if chars.peek() == Some(&'\n') => {}
            '\n' => {
                cells.push(std::mem::take(&mut cell));
                rows.push(Row {
                    line: row_line,
                    cells: std::mem::take(&mut cells),
                });
                line += 1;
                row_line = line;
                field_start = true;
            }
            _ => {
                cell.push(c);
                field_start = false;
            }
        }
    }

    if let Some(line) = quoted_since {
        return Err(CatalogError::UnterminatedQuote { line });
    }
    if !cells.is_empty() || !cell.is_empty() {
        cells.push(cell);
        rows.push(Row {
            line: row_line,
            cells,
        });
    }

    rows.retain(|row| !row.is_blank());
    Ok(rows)
}

/// Reads a tab-separated catalog: a header row, then one recipe per row.
///
/// A leading byte-order mark is ignored, blank lines are skipped and empty
/// cells become `None`.
pub fn parse_records<R: BufRead>(
    mut reader: R,
) -> Result<(CatalogSchema, Vec<RawRecord>), CatalogError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    let text = text.strip_prefix(BOM).unwrap_or(&text);

    let mut rows = split_rows(text)?.into_iter();
    let header = rows.next().ok_or(CatalogError::Empty)?;
    let schema = CatalogSchema::from_header(header.cells)?;

    let records = rows
        .map(|row| {
            let cells = row
                .cells
                .into_iter()
                .map(|cell| (!cell.is_empty()).then_some(cell))
                .collect();
            schema.record(cells, row.line)
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok((schema, records))
}

/// Reads a catalog file into its schema and rows.
pub fn read_records(path: &Utf8Path) -> Result<(CatalogSchema, Vec<RawRecord>), CatalogError> {
    let file = File::open(path)?;
    parse_records(BufReader::new(file))
}
