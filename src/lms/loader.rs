use std::path::Path;

use anyhow::{Context, Result, bail};
use tracing::{info, warn};

use crate::io::sheet::{Cell, Sheet};
use crate::io::xlsx_reader::read_sheet;
use crate::lms::{LmsRow, LmsTable, Measure, ReferencePaths, ReferenceSet};

pub fn load_reference_set(paths: &ReferencePaths) -> Result<ReferenceSet> {
    Ok(ReferenceSet {
        boys_0_2: load_table(&paths.boys_0_2)?,
        girls_0_2: load_table(&paths.girls_0_2)?,
        boys_2_5: load_table(&paths.boys_2_5)?,
        girls_2_5: load_table(&paths.girls_2_5)?,
    })
}

pub fn load_table(path: &Path) -> Result<LmsTable> {
    let sheet = read_sheet(path, None)
        .with_context(|| format!("failed to load LMS table {}", path.display()))?;
    let name = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("lms")
        .to_string();
    let table = table_from_sheet(&name, &sheet)?;
    info!(
        table = %table.name,
        measure = %table.measure,
        rows = table.rows.len(),
        "lms_table_loaded"
    );
    Ok(table)
}

/// Builds a table from a sheet holding a `Length` or `Height` column and
/// `L`, `M`, `S`. Rows without a measure value are skipped; empty
/// coefficients load as NaN and surface later as undefined Z-scores.
pub fn table_from_sheet(name: &str, sheet: &Sheet) -> Result<LmsTable> {
    let (measure, measure_col) = if let Some(idx) = sheet.column_index("Length") {
        (Measure::Length, idx)
    } else if let Some(idx) = sheet.column_index("Height") {
        (Measure::Height, idx)
    } else {
        bail!("{}: no 'Length' or 'Height' column", name);
    };
    let l_col = sheet.require_column("L")?;
    let m_col = sheet.require_column("M")?;
    let s_col = sheet.require_column("S")?;

    let mut rows = Vec::with_capacity(sheet.n_rows());
    let mut skipped = 0usize;
    for i in 0..sheet.n_rows() {
        let line_no = i + 2;
        let measure_cell = sheet.cell(i, measure_col);
        if measure_cell.is_empty() {
            skipped += 1;
            continue;
        }
        let value = measure_cell.as_f64().with_context(|| {
            format!(
                "{}:{} non-numeric {} value '{}'",
                name,
                line_no,
                measure,
                measure_cell.as_text()
            )
        })?;
        rows.push(LmsRow {
            measure: value,
            l: coefficient(sheet.cell(i, l_col), name, line_no, "L")?,
            m: coefficient(sheet.cell(i, m_col), name, line_no, "M")?,
            s: coefficient(sheet.cell(i, s_col), name, line_no, "S")?,
        });
    }
    if skipped > 0 {
        warn!(table = name, skipped, "lms rows without measure skipped");
    }

    Ok(LmsTable::new(name, measure, rows))
}

fn coefficient(cell: &Cell, name: &str, line_no: usize, column: &str) -> Result<f64> {
    if cell.is_empty() {
        return Ok(f64::NAN);
    }
    match cell.as_f64() {
        Some(v) => Ok(v),
        None => bail!(
            "{}:{} non-numeric {} value '{}'",
            name,
            line_no,
            column,
            cell.as_text()
        ),
    }
}
