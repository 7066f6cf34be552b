use anyhow::{Context, Result};
use tracing::info;

use crate::ctx::Ctx;
use crate::io::sheet::{Cell, Sheet};
use crate::io::xlsx_writer::{ChartSpec, write_workbook};
use crate::io::{json_writer, tsv_writer};
use crate::pipeline::Stage;
use crate::scores::classify::{Language, WhzClass};

pub struct Stage5Output;

impl Stage5Output {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage5Output {
    fn name(&self) -> &'static str {
        "stage5_output"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let table = ctx.table.as_ref().context("input table missing")?;
        let augmented = augment_table(table, ctx)?;
        let chart = chart_spec(ctx);
        write_workbook(&ctx.output.xlsx_path, &augmented, Some(&chart))?;
        info!(path = %ctx.output.xlsx_path.display(), "workbook_written");

        let report = json_writer::build_report(ctx)?;
        ctx.report = report;

        if ctx.write_json {
            json_writer::write_json(&ctx.output.json_path, ctx)?;
        }
        if ctx.write_tsv {
            tsv_writer::write_tsv(&ctx.output.tsv_path, ctx)?;
        }

        info!("stage5_output_ready");
        Ok(())
    }
}

/// Input table plus the Z-score and classification columns. Undefined
/// scores are written as empty cells.
pub fn augment_table(table: &Sheet, ctx: &Ctx) -> Result<Sheet> {
    let mut out = table.clone();
    let whz = ctx
        .outcomes
        .iter()
        .map(|o| match o {
            Ok(Some(z)) => Cell::Number(*z),
            _ => Cell::Empty,
        })
        .collect();
    let classes = ctx
        .classes
        .iter()
        .map(|c| Cell::Text(c.label(ctx.language).to_string()))
        .collect();
    out.set_column(&ctx.columns.whz, whz)?;
    out.set_column(&ctx.columns.class, classes)?;
    Ok(out)
}

pub fn chart_spec(ctx: &Ctx) -> ChartSpec {
    let counts = ctx.class_counts();
    let categories = WhzClass::CHARTED
        .iter()
        .map(|class| {
            let count = counts
                .iter()
                .find(|(c, _)| c == class)
                .map(|(_, n)| *n)
                .unwrap_or(0);
            (class.label(ctx.language).to_string(), count)
        })
        .collect();

    let (title, x_label, y_label) = match ctx.language {
        Language::Es => (
            "Clasificación del WHZ en Niños/as",
            "Clasificación WHZ",
            "Número de Niños/as",
        ),
        Language::En => (
            "WHZ classification of children",
            "WHZ classification",
            "Number of children",
        ),
    };

    ChartSpec {
        title: title.to_string(),
        x_label: x_label.to_string(),
        y_label: y_label.to_string(),
        categories,
        draw_chart: ctx.draw_chart,
    }
}
