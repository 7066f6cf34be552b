use anyhow::{Context, Result};
use std::fs;
use tracing::info;

use crate::ctx::Ctx;
use crate::pipeline::Stage;

pub struct Stage0Scaffold;

impl Stage0Scaffold {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage0Scaffold {
    fn name(&self) -> &'static str {
        "stage0_scaffold"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        fs::create_dir_all(&ctx.output.out_dir)
            .with_context(|| format!("failed to create {}", ctx.output.out_dir.display()))?;
        info!(
            out_dir = %ctx.output.out_dir.display(),
            "output_dir_ready"
        );

        ctx.report.input_meta.sheet = ctx.sheet.clone();
        ctx.report.input_meta.sex_column = ctx.columns.sex.clone();
        ctx.report.input_meta.height_column = ctx.columns.height.clone();
        ctx.report.input_meta.weight_column = ctx.columns.weight.clone();
        ctx.report.scores.whz_column = ctx.columns.whz.clone();
        ctx.report.scores.class_column = ctx.columns.class.clone();
        ctx.report.scores.output_path = Some(ctx.output.xlsx_path.display().to_string());
        if ctx.write_tsv {
            ctx.report.scores.tsv_path = Some(
                ctx.output
                    .tsv_path
                    .file_name()
                    .unwrap_or_default()
                    .to_string_lossy()
                    .to_string(),
            );
        }

        Ok(())
    }
}
