use crate::io::sheet::Cell;
use crate::lms::{ReferenceSet, Sex, nearest_row, select_table};
use crate::scores::{ChildRecord, WhzError, WhzOutcome};

/// Box-Cox (LMS) transform of `weight` against one reference row.
/// There is no limiting form for `l == 0`; the result is then NaN.
pub fn lms_z(weight: f64, l: f64, m: f64, s: f64) -> f64 {
    ((weight / m).powf(l) - 1.0) / (l * s)
}

pub struct WhzCalculator {
    refs: ReferenceSet,
}

impl WhzCalculator {
    pub fn new(refs: ReferenceSet) -> Self {
        Self { refs }
    }

    pub fn references(&self) -> &ReferenceSet {
        &self.refs
    }

    pub fn into_references(self) -> ReferenceSet {
        self.refs
    }

    pub fn calculate_record(&self, record: &ChildRecord) -> WhzOutcome {
        let sex = parse_sex(&record.sex)?;
        let height = parse_measurement(&record.height, "height")?;
        let weight = parse_measurement(&record.weight, "weight")?;
        self.calculate(sex, height, weight)
    }

    pub fn calculate(&self, sex: Sex, height_cm: f64, weight_kg: f64) -> WhzOutcome {
        let (table, _column) = select_table(&self.refs, sex, height_cm)?;
        let Some(row) = nearest_row(&table.rows, height_cm) else {
            return Ok(None);
        };
        if row.m.is_nan() || row.m <= 0.0 {
            return Err(WhzError::Computation(format!(
                "median M must be positive, got {} at {}={} in {}",
                row.m, table.measure, row.measure, table.name
            )));
        }
        let z = lms_z(weight_kg, row.l, row.m, row.s);
        if !z.is_finite() {
            return Err(WhzError::Computation(format!(
                "non-finite z-score (L={}, M={}, S={}) at {}={} in {}",
                row.l, row.m, row.s, table.measure, row.measure, table.name
            )));
        }
        Ok(Some(z))
    }
}

fn parse_sex(cell: &Cell) -> Result<Sex, WhzError> {
    match cell {
        Cell::Text(s) => s.parse(),
        other => Err(WhzError::InvalidInput(format!(
            "sex must be 'Hombre' or 'Mujer', got '{}'",
            other.as_text()
        ))),
    }
}

fn parse_measurement(cell: &Cell, field: &str) -> Result<f64, WhzError> {
    if cell.is_empty() {
        return Err(WhzError::Computation(format!("missing {}", field)));
    }
    let value = cell.as_f64().ok_or_else(|| {
        WhzError::Computation(format!("non-numeric {} '{}'", field, cell.as_text()))
    })?;
    if !value.is_finite() {
        return Err(WhzError::Computation(format!(
            "non-finite {} {}",
            field, value
        )));
    }
    Ok(value)
}
