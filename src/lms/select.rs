use std::fmt;
use std::str::FromStr;

use crate::lms::{LmsTable, Measure, ReferenceSet};
use crate::scores::WhzError;

/// Heights below this use the 0–2 years weight-for-length tables.
pub const BAND_THRESHOLD_CM: f64 = 87.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    pub fn label(self) -> &'static str {
        match self {
            Sex::Male => "Hombre",
            Sex::Female => "Mujer",
        }
    }
}

impl FromStr for Sex {
    type Err = WhzError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Hombre" => Ok(Sex::Male),
            "Mujer" => Ok(Sex::Female),
            other => Err(WhzError::InvalidInput(format!(
                "sex must be 'Hombre' or 'Mujer', got '{}'",
                other
            ))),
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeightBand {
    UnderTwo,
    TwoToFive,
}

impl HeightBand {
    pub fn for_height(height_cm: f64) -> Self {
        if height_cm < BAND_THRESHOLD_CM {
            HeightBand::UnderTwo
        } else {
            HeightBand::TwoToFive
        }
    }

    pub fn measure(self) -> Measure {
        match self {
            HeightBand::UnderTwo => Measure::Length,
            HeightBand::TwoToFive => Measure::Height,
        }
    }
}

pub fn select_table(
    refs: &ReferenceSet,
    sex: Sex,
    height_cm: f64,
) -> Result<(&LmsTable, &'static str), WhzError> {
    let band = HeightBand::for_height(height_cm);
    let table = refs.table(sex, band);
    let column = band.measure().column_name();
    if !table.has_column(column) {
        return Err(WhzError::Schema {
            table: table.name.clone(),
            column,
        });
    }
    Ok((table, column))
}
