use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::scores::classify::Language;

#[derive(Debug, Parser)]
#[command(
    name = "kira-whz",
    version,
    about = "Weight-for-height Z-scores and nutritional status from WHO LMS tables"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    Run(RunArgs),
    Validate(ValidateArgs),
}

#[derive(Debug, Args)]
pub struct TableArgs {
    #[arg(
        long,
        default_value = "data/Data_encuesta_SMART_COL_2023.xlsx",
        help = "Input workbook with one row per child"
    )]
    pub input: PathBuf,

    #[arg(long, help = "Worksheet to read (default: first sheet)")]
    pub sheet: Option<String>,

    #[arg(
        long,
        default_value = "data",
        help = "Directory holding the four WHO LMS workbooks"
    )]
    pub reference_dir: PathBuf,

    #[arg(long = "boys-0-2", help = "Override: boys weight-for-length (0-2 years)")]
    pub boys_0_2: Option<PathBuf>,

    #[arg(long = "girls-0-2", help = "Override: girls weight-for-length (0-2 years)")]
    pub girls_0_2: Option<PathBuf>,

    #[arg(long = "boys-2-5", help = "Override: boys weight-for-height (2-5 years)")]
    pub boys_2_5: Option<PathBuf>,

    #[arg(long = "girls-2-5", help = "Override: girls weight-for-height (2-5 years)")]
    pub girls_2_5: Option<PathBuf>,

    #[arg(long, default_value = "Sexo_Niño")]
    pub sex_column: String,

    #[arg(
        long,
        default_value = "Altura_Niño",
        help = "Height in cm; text cells are parsed as numbers, decimal comma accepted"
    )]
    pub height_column: String,

    #[arg(
        long,
        default_value = "Peso_Niño",
        help = "Weight in kg; text cells are parsed as numbers, decimal comma accepted"
    )]
    pub weight_column: String,

    #[arg(long, help = "Column used to identify records in diagnostics (default: row index)")]
    pub id_column: Option<String>,
}

#[derive(Debug, Args)]
pub struct RunArgs {
    #[command(flatten)]
    pub table: TableArgs,

    #[arg(long, default_value = "data/df_reducido_con_whz.xlsx")]
    pub out: PathBuf,

    #[arg(long, default_value = "WHZ")]
    pub whz_column: String,

    #[arg(long, default_value = "Clasificacion_WHZ")]
    pub class_column: String,

    #[arg(long, value_enum, default_value_t = LanguageArg::Es)]
    pub language: LanguageArg,

    #[arg(long, default_value_t = false)]
    pub json: bool,

    #[arg(long, default_value_t = false)]
    pub tsv: bool,

    #[arg(long, default_value_t = false, help = "Skip the chart in the summary sheet")]
    pub no_chart: bool,
}

#[derive(Debug, Args)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub table: TableArgs,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LanguageArg {
    Es,
    En,
}

impl From<LanguageArg> for Language {
    fn from(arg: LanguageArg) -> Self {
        match arg {
            LanguageArg::Es => Language::Es,
            LanguageArg::En => Language::En,
        }
    }
}
