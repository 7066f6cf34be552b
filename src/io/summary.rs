use anyhow::Result;

use crate::ctx::Ctx;
use crate::scores::classify::WhzClass;

const BAR_WIDTH: usize = 40;

pub fn format_summary(ctx: &Ctx) -> Result<String> {
    let version = env!("CARGO_PKG_VERSION");
    let counts = ctx.class_counts();
    let max = counts.iter().map(|(_, c)| *c).max().unwrap_or(0);
    let label_width = WhzClass::ALL
        .iter()
        .map(|c| c.label(ctx.language).chars().count())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    out.push_str(&format!("kira-whz v{}\n", version));
    out.push_str(&format!(
        "Input: {} records, {} z-scores, {} undefined\n",
        ctx.records.len(),
        ctx.computed_count(),
        ctx.records.len() - ctx.computed_count()
    ));
    out.push_str(&format!("Output: {}\n", ctx.output.xlsx_path.display()));

    for (class, count) in &counts {
        let label = class.label(ctx.language);
        let pad = label_width - label.chars().count();
        out.push_str(&format!(
            "{}{} | {} {}\n",
            label,
            " ".repeat(pad),
            bar(*count, max),
            count
        ));
    }

    if ctx.failures.is_empty() {
        out.push_str("Failures: none\n");
    } else {
        out.push_str(&format!("Failures: {}\n", ctx.failures.len()));
        for f in &ctx.failures {
            out.push_str(&format!("- row {} (id {}): {}\n", f.row, f.id, f.message));
        }
    }

    Ok(out)
}

fn bar(count: usize, max: usize) -> String {
    if max == 0 || count == 0 {
        return String::new();
    }
    let width = ((count * BAR_WIDTH) as f64 / max as f64).ceil() as usize;
    "#".repeat(width.max(1))
}
