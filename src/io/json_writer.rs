use std::path::Path;

use anyhow::Result;

use crate::ctx::Ctx;
use crate::schema::v1::{Failure, WhzReportV1};

pub fn build_report(ctx: &Ctx) -> Result<WhzReportV1> {
    let mut report = ctx.report.clone();
    report.version = env!("CARGO_PKG_VERSION").to_string();
    report.input_meta.records = Some(ctx.records.len() as u64);
    report.input_meta.language = ctx.language;
    report.failures = ctx
        .failures
        .iter()
        .map(|f| Failure {
            row: f.row as u64,
            id: f.id.clone(),
            kind: f.kind.to_string(),
            message: f.message.clone(),
        })
        .collect();
    Ok(report)
}

pub fn write_json(path: &Path, ctx: &Ctx) -> Result<()> {
    let report = build_report(ctx)?;
    crate::io::write_json(path, &report)
}
