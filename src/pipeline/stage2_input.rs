use anyhow::Result;
use tracing::info;

use crate::ctx::Ctx;
use crate::io::sheet::Sheet;
use crate::io::xlsx_reader::read_sheet;
use crate::pipeline::Stage;
use crate::scores::ChildRecord;

pub struct Stage2Input;

impl Stage2Input {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage2Input {
    fn name(&self) -> &'static str {
        "stage2_input"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let sheet = read_sheet(&ctx.input, ctx.sheet.as_deref())?;
        let records = extract_records(&sheet, ctx)?;

        info!(
            sheet = %sheet.name,
            records = records.len(),
            "input_records_ready"
        );
        ctx.report.input_meta.sheet = Some(sheet.name.clone());
        ctx.report.input_meta.records = Some(records.len() as u64);
        ctx.records = records;
        ctx.table = Some(sheet);
        Ok(())
    }
}

/// Missing sex/height/weight columns abort the run; bad values inside them
/// are left for the per-record calculator to report.
pub fn extract_records(sheet: &Sheet, ctx: &Ctx) -> Result<Vec<ChildRecord>> {
    let sex_col = sheet.require_column(&ctx.columns.sex)?;
    let height_col = sheet.require_column(&ctx.columns.height)?;
    let weight_col = sheet.require_column(&ctx.columns.weight)?;
    let id_col = match &ctx.columns.id {
        Some(name) => Some(sheet.require_column(name)?),
        None => None,
    };

    let mut records = Vec::with_capacity(sheet.n_rows());
    for row in 0..sheet.n_rows() {
        let id = match id_col {
            Some(col) => sheet.cell(row, col).as_text(),
            None => row.to_string(),
        };
        records.push(ChildRecord {
            row,
            id,
            sex: sheet.cell(row, sex_col).clone(),
            height: sheet.cell(row, height_col).clone(),
            weight: sheet.cell(row, weight_col).clone(),
        });
    }
    Ok(records)
}
