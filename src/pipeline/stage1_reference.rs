use anyhow::Result;
use tracing::info;

use crate::ctx::Ctx;
use crate::lms::load_reference_set;
use crate::pipeline::Stage;
use crate::schema::v1::ReferenceMeta;

pub struct Stage1Reference;

impl Stage1Reference {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage1Reference {
    fn name(&self) -> &'static str {
        "stage1_reference"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let refs = load_reference_set(&ctx.reference_paths)?;

        for table in refs.tables() {
            if table.rows.is_empty() {
                ctx.warnings.push(format!(
                    "LMS table {} has no rows; matching records get no z-score",
                    table.name
                ));
            }
        }

        ctx.report.references = refs
            .tables()
            .iter()
            .map(|t| ReferenceMeta {
                name: t.name.clone(),
                measure: t.measure.to_string(),
                rows: t.rows.len() as u64,
            })
            .collect();
        ctx.references = Some(refs);
        info!("reference_tables_ready");
        Ok(())
    }
}
