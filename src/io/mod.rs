use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use anyhow::{Context, Result};

use crate::schema::v1::WhzReportV1;

pub mod json_writer;
pub mod sheet;
pub mod summary;
pub mod tsv_writer;
pub mod xlsx_reader;
pub mod xlsx_writer;

pub fn write_json(path: &Path, report: &WhzReportV1) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, report)?;
    Ok(())
}
