use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result, bail};

use crate::ctx::Ctx;

pub fn write_tsv(path: &Path, ctx: &Ctx) -> Result<()> {
    let n = ctx.records.len();
    ensure_len(ctx.outcomes.len(), n, "outcomes")?;
    ensure_len(ctx.classes.len(), n, "classes")?;

    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    let mut w = BufWriter::new(file);

    writeln!(w, "row\tid\t{}\t{}", ctx.columns.whz, ctx.columns.class)?;
    for i in 0..n {
        let record = &ctx.records[i];
        let z = match &ctx.outcomes[i] {
            Ok(Some(z)) => format!("{:.6}", z),
            _ => String::new(),
        };
        writeln!(
            w,
            "{}\t{}\t{}\t{}",
            record.row,
            record.id,
            z,
            ctx.classes[i].label(ctx.language)
        )?;
    }
    w.flush()?;
    Ok(())
}

fn ensure_len(got: usize, expected: usize, name: &str) -> Result<()> {
    if got != expected {
        bail!("{} length mismatch: {} != {}", name, got, expected);
    }
    Ok(())
}
