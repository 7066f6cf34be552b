use serde::{Deserialize, Serialize};

use crate::scores::classify::Language;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputMeta {
    pub path: String,
    pub sheet: Option<String>,
    pub records: Option<u64>,
    pub sex_column: String,
    pub height_column: String,
    pub weight_column: String,
    pub language: Language,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReferenceMeta {
    pub name: String,
    pub measure: String,
    pub rows: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassCount {
    pub class: String,
    pub label: String,
    pub count: u64,
    pub fraction: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scores {
    pub computed: u64,
    pub undefined: u64,
    pub whz_column: String,
    pub class_column: String,
    pub output_path: Option<String>,
    pub tsv_path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Failure {
    pub row: u64,
    pub id: String,
    pub kind: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WhzReportV1 {
    pub tool: String,
    pub version: String,
    pub schema_version: String,
    pub input_meta: InputMeta,
    pub references: Vec<ReferenceMeta>,
    pub scores: Scores,
    pub classification: Vec<ClassCount>,
    pub failures: Vec<Failure>,
}

impl WhzReportV1 {
    pub fn empty(tool_version: &str, input_path: &str, language: Language) -> Self {
        Self {
            tool: "kira-whz".to_string(),
            version: tool_version.to_string(),
            schema_version: "v1".to_string(),
            input_meta: InputMeta {
                path: input_path.to_string(),
                sheet: None,
                records: None,
                sex_column: String::new(),
                height_column: String::new(),
                weight_column: String::new(),
                language,
            },
            references: Vec::new(),
            scores: Scores {
                computed: 0,
                undefined: 0,
                whz_column: String::new(),
                class_column: String::new(),
                output_path: None,
                tsv_path: None,
            },
            classification: Vec::new(),
            failures: Vec::new(),
        }
    }
}
