use anyhow::Result;
use tracing::info;

use crate::ctx::Ctx;
use crate::pipeline::Stage;
use crate::schema::v1::ClassCount;
use crate::scores::classify::classify_outcome;

pub struct Stage4Classify;

impl Stage4Classify {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage4Classify {
    fn name(&self) -> &'static str {
        "stage4_classify"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        ctx.classes = ctx.outcomes.iter().map(classify_outcome).collect();

        let total = ctx.classes.len().max(1) as f64;
        ctx.report.classification = ctx
            .class_counts()
            .into_iter()
            .map(|(class, count)| ClassCount {
                class: class.key().to_string(),
                label: class.label(ctx.language).to_string(),
                count: count as u64,
                fraction: round6(count as f64 / total),
            })
            .collect();
        info!("classification_ready");
        Ok(())
    }
}

fn round6(v: f64) -> f64 {
    (v * 1_000_000.0).round() / 1_000_000.0
}
