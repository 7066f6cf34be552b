use crate::lms::LmsRow;

/// Row whose measure is closest to `target`. The first row wins on ties;
/// an empty table has no match.
pub fn nearest_row(rows: &[LmsRow], target: f64) -> Option<&LmsRow> {
    let mut best: Option<(&LmsRow, f64)> = None;
    for row in rows {
        let diff = (row.measure - target).abs();
        match best {
            Some((_, best_diff)) if diff >= best_diff => {}
            _ => best = Some((row, diff)),
        }
    }
    best.map(|(row, _)| row)
}
