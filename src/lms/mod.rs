//! WHO LMS reference tables.
//!
//! Weight-for-length (0–2 years) and weight-for-height (2–5 years) tables,
//! one per sex. Each row summarizes the reference weight distribution at one
//! measure value by its Box-Cox power (L), median (M) and coefficient of
//! variation (S).

mod loader;
mod lookup;
mod select;

use std::fmt;
use std::path::{Path, PathBuf};

pub use loader::{load_reference_set, load_table, table_from_sheet};
pub use lookup::nearest_row;
pub use select::{BAND_THRESHOLD_CM, HeightBand, Sex, select_table};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Measure {
    Length,
    Height,
}

impl Measure {
    pub fn column_name(self) -> &'static str {
        match self {
            Measure::Length => "Length",
            Measure::Height => "Height",
        }
    }
}

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column_name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LmsRow {
    pub measure: f64,
    pub l: f64,
    pub m: f64,
    pub s: f64,
}

#[derive(Debug, Clone)]
pub struct LmsTable {
    pub name: String,
    pub measure: Measure,
    pub rows: Vec<LmsRow>,
}

impl LmsTable {
    pub fn new(name: impl Into<String>, measure: Measure, rows: Vec<LmsRow>) -> Self {
        Self {
            name: name.into(),
            measure,
            rows,
        }
    }

    pub fn has_column(&self, column: &str) -> bool {
        self.measure.column_name() == column
    }
}

/// The four tables, loaded once and shared read-only by the calculator.
#[derive(Debug, Clone)]
pub struct ReferenceSet {
    pub boys_0_2: LmsTable,
    pub girls_0_2: LmsTable,
    pub boys_2_5: LmsTable,
    pub girls_2_5: LmsTable,
}

impl ReferenceSet {
    pub fn table(&self, sex: Sex, band: HeightBand) -> &LmsTable {
        match (sex, band) {
            (Sex::Male, HeightBand::UnderTwo) => &self.boys_0_2,
            (Sex::Female, HeightBand::UnderTwo) => &self.girls_0_2,
            (Sex::Male, HeightBand::TwoToFive) => &self.boys_2_5,
            (Sex::Female, HeightBand::TwoToFive) => &self.girls_2_5,
        }
    }

    pub fn tables(&self) -> [&LmsTable; 4] {
        [
            &self.boys_0_2,
            &self.girls_0_2,
            &self.boys_2_5,
            &self.girls_2_5,
        ]
    }
}

pub const BOYS_0_2_FILE: &str = "wfl_boys_0-to-2-years_zscores.xlsx";
pub const GIRLS_0_2_FILE: &str = "wfl_girls_0-to-2-years_zscores.xlsx";
pub const BOYS_2_5_FILE: &str = "wfh_boys_2-to-5-years_zscores.xlsx";
pub const GIRLS_2_5_FILE: &str = "wfh_girls_2-to-5-years_zscores.xlsx";

#[derive(Debug, Clone)]
pub struct ReferencePaths {
    pub boys_0_2: PathBuf,
    pub girls_0_2: PathBuf,
    pub boys_2_5: PathBuf,
    pub girls_2_5: PathBuf,
}

impl ReferencePaths {
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            boys_0_2: dir.join(BOYS_0_2_FILE),
            girls_0_2: dir.join(GIRLS_0_2_FILE),
            boys_2_5: dir.join(BOYS_2_5_FILE),
            girls_2_5: dir.join(GIRLS_2_5_FILE),
        }
    }
}
