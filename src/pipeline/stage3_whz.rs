use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::ctx::Ctx;
use crate::pipeline::Stage;
use crate::scores::RecordFailure;
use crate::scores::whz::WhzCalculator;

pub struct Stage3Whz;

impl Stage3Whz {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage3Whz {
    fn name(&self) -> &'static str {
        "stage3_whz"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let refs = ctx
            .references
            .take()
            .context("reference tables not loaded")?;
        let calculator = WhzCalculator::new(refs);

        let mut outcomes = Vec::with_capacity(ctx.records.len());
        let mut failures = Vec::new();
        for record in &ctx.records {
            let outcome = calculator.calculate_record(record);
            if let Err(err) = &outcome {
                warn!(
                    row = record.row,
                    id = %record.id,
                    kind = err.kind(),
                    "whz calculation failed: {}",
                    err
                );
                failures.push(RecordFailure {
                    row: record.row,
                    id: record.id.clone(),
                    kind: err.kind(),
                    message: err.to_string(),
                });
            }
            outcomes.push(outcome);
        }

        ctx.references = Some(calculator.into_references());
        ctx.outcomes = outcomes;
        ctx.failures = failures;
        ctx.report.scores.computed = ctx.computed_count() as u64;
        ctx.report.scores.undefined = (ctx.outcomes.len() - ctx.computed_count()) as u64;
        info!(
            computed = ctx.report.scores.computed,
            undefined = ctx.report.scores.undefined,
            failed = ctx.failures.len(),
            "whz_scores_ready"
        );
        Ok(())
    }
}
