use std::path::{Path, PathBuf};

use crate::io::sheet::Sheet;
use crate::lms::{ReferencePaths, ReferenceSet};
use crate::schema::v1::WhzReportV1;
use crate::scores::classify::{Language, WhzClass};
use crate::scores::{ChildRecord, RecordFailure, WhzOutcome};

#[derive(Debug, Clone)]
pub struct ColumnNames {
    pub sex: String,
    pub height: String,
    pub weight: String,
    pub id: Option<String>,
    pub whz: String,
    pub class: String,
}

impl Default for ColumnNames {
    fn default() -> Self {
        Self {
            sex: "Sexo_Niño".to_string(),
            height: "Altura_Niño".to_string(),
            weight: "Peso_Niño".to_string(),
            id: None,
            whz: "WHZ".to_string(),
            class: "Clasificacion_WHZ".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct OutputPaths {
    pub out_dir: PathBuf,
    pub xlsx_path: PathBuf,
    pub json_path: PathBuf,
    pub tsv_path: PathBuf,
}

impl OutputPaths {
    pub fn for_workbook(xlsx_path: PathBuf) -> Self {
        let out_dir = match xlsx_path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        Self {
            json_path: out_dir.join("whz.json"),
            tsv_path: out_dir.join("whz.tsv"),
            out_dir,
            xlsx_path,
        }
    }
}

#[derive(Debug)]
pub struct Ctx {
    pub input: PathBuf,
    pub sheet: Option<String>,
    pub reference_paths: ReferencePaths,
    pub columns: ColumnNames,
    pub language: Language,
    pub write_json: bool,
    pub write_tsv: bool,
    pub draw_chart: bool,
    pub warnings: Vec<String>,
    pub references: Option<ReferenceSet>,
    pub table: Option<Sheet>,
    pub records: Vec<ChildRecord>,
    pub outcomes: Vec<WhzOutcome>,
    pub classes: Vec<WhzClass>,
    pub failures: Vec<RecordFailure>,
    pub output: OutputPaths,
    pub report: WhzReportV1,
}

impl Ctx {
    pub fn new(
        input: PathBuf,
        out_path: PathBuf,
        reference_paths: ReferencePaths,
        language: Language,
        tool_version: &str,
    ) -> Self {
        let report = WhzReportV1::empty(tool_version, &input.display().to_string(), language);
        Self {
            input,
            sheet: None,
            reference_paths,
            columns: ColumnNames::default(),
            language,
            write_json: false,
            write_tsv: false,
            draw_chart: true,
            warnings: Vec::new(),
            references: None,
            table: None,
            records: Vec::new(),
            outcomes: Vec::new(),
            classes: Vec::new(),
            failures: Vec::new(),
            output: OutputPaths::for_workbook(out_path),
            report,
        }
    }

    pub fn with_reference_dir(
        input: PathBuf,
        out_path: PathBuf,
        reference_dir: &Path,
        language: Language,
        tool_version: &str,
    ) -> Self {
        Self::new(
            input,
            out_path,
            ReferencePaths::in_dir(reference_dir),
            language,
            tool_version,
        )
    }

    /// Counts per class in `WhzClass::ALL` order.
    pub fn class_counts(&self) -> Vec<(WhzClass, usize)> {
        WhzClass::ALL
            .iter()
            .map(|&class| (class, self.classes.iter().filter(|&&c| c == class).count()))
            .collect()
    }

    pub fn computed_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, Ok(Some(_))))
            .count()
    }
}
