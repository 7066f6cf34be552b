use std::path::Path;

use anyhow::{Context, Result, bail};
use calamine::{Data, Reader, open_workbook_auto};
use tracing::info;

use crate::io::sheet::{Cell, Sheet};

/// Reads one worksheet (the first one unless `sheet_name` is given). The
/// first non-empty row is the header; fully empty trailing rows are dropped.
/// Header text is kept as written.
pub fn read_sheet(path: &Path, sheet_name: Option<&str>) -> Result<Sheet> {
    let mut workbook = open_workbook_auto(path)
        .with_context(|| format!("failed to open workbook {}", path.display()))?;

    let sheet_names = workbook.sheet_names().to_owned();
    let name = match sheet_name {
        Some(name) => {
            if !sheet_names.iter().any(|s| s == name) {
                bail!(
                    "sheet '{}' not found in {} (sheets: {})",
                    name,
                    path.display(),
                    sheet_names.join(", ")
                );
            }
            name.to_string()
        }
        None => sheet_names
            .first()
            .cloned()
            .with_context(|| format!("no worksheets in {}", path.display()))?,
    };

    let range = workbook
        .worksheet_range(&name)
        .with_context(|| format!("failed to read sheet '{}' of {}", name, path.display()))?;

    // The range starts at the first used cell; pad skipped leading columns
    // back in so column positions match the file.
    let lead = range.start().map_or(0, |(_, col)| col as usize);
    let mut rows = range.rows();
    let mut headers = vec![String::new(); lead];
    if let Some(header) = rows.next() {
        headers.extend(header.iter().map(|v| to_cell(v).as_text()));
    }

    let mut sheet = Sheet::new(name, headers);
    for row in rows {
        let mut cells = vec![Cell::Empty; lead];
        cells.extend(row.iter().map(to_cell));
        sheet.rows.push(cells);
    }
    while sheet
        .rows
        .last()
        .is_some_and(|r| r.iter().all(Cell::is_empty))
    {
        sheet.rows.pop();
    }

    info!(
        path = %path.display(),
        sheet = %sheet.name,
        columns = sheet.headers.len(),
        rows = sheet.n_rows(),
        "sheet_loaded"
    );
    Ok(sheet)
}

fn to_cell(value: &Data) -> Cell {
    match value {
        Data::Empty => Cell::Empty,
        Data::Int(v) => Cell::Number(*v as f64),
        Data::Float(v) => Cell::Number(*v),
        Data::String(s) => Cell::Text(s.clone()),
        Data::Bool(b) => Cell::Bool(*b),
        Data::DateTime(dt) => Cell::DateTime(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Cell::Text(s.clone()),
        Data::Error(e) => Cell::Text(format!("#{:?}", e)),
    }
}
