use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use kira_whz::cli::{Cli, Commands, TableArgs};
use kira_whz::ctx::{ColumnNames, Ctx};
use kira_whz::io;
use kira_whz::lms::ReferencePaths;
use kira_whz::pipeline::Pipeline;
use kira_whz::pipeline::stage1_reference::Stage1Reference;
use kira_whz::pipeline::stage2_input::Stage2Input;
use kira_whz::scores::classify::Language;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run(args) => {
            let mut ctx = build_ctx(&args.table, args.out, args.language.into());
            ctx.columns.whz = args.whz_column;
            ctx.columns.class = args.class_column;
            ctx.write_json = args.json;
            ctx.write_tsv = args.tsv;
            ctx.draw_chart = !args.no_chart;

            Pipeline::full().run(&mut ctx)?;
            print_summary(&ctx)?;
        }
        Commands::Validate(args) => {
            let mut ctx = build_ctx(&args.table, PathBuf::from("."), Language::Es);
            let pipeline = Pipeline::new(vec![
                Box::new(Stage1Reference::new()),
                Box::new(Stage2Input::new()),
            ]);
            pipeline.run(&mut ctx)?;
            print_validate_summary(&ctx);
        }
    }

    Ok(())
}

fn build_ctx(table: &TableArgs, out: PathBuf, language: Language) -> Ctx {
    let defaults = ReferencePaths::in_dir(&table.reference_dir);
    let reference_paths = ReferencePaths {
        boys_0_2: table.boys_0_2.clone().unwrap_or(defaults.boys_0_2),
        girls_0_2: table.girls_0_2.clone().unwrap_or(defaults.girls_0_2),
        boys_2_5: table.boys_2_5.clone().unwrap_or(defaults.boys_2_5),
        girls_2_5: table.girls_2_5.clone().unwrap_or(defaults.girls_2_5),
    };
    let mut ctx = Ctx::new(
        table.input.clone(),
        out,
        reference_paths,
        language,
        env!("CARGO_PKG_VERSION"),
    );
    ctx.sheet = table.sheet.clone();
    ctx.columns = ColumnNames {
        sex: table.sex_column.clone(),
        height: table.height_column.clone(),
        weight: table.weight_column.clone(),
        id: table.id_column.clone(),
        ..ColumnNames::default()
    };
    ctx
}

fn print_summary(ctx: &Ctx) -> Result<()> {
    let summary = io::summary::format_summary(ctx)?;
    print!("{}", summary);
    print_warnings(ctx);
    Ok(())
}

fn print_validate_summary(ctx: &Ctx) {
    println!("kira-whz validate ok");
    if let Some(refs) = &ctx.references {
        for table in refs.tables() {
            println!("{}\t{}\t{}", table.name, table.measure, table.rows.len());
        }
    }
    println!("records: {}", ctx.records.len());
    print_warnings(ctx);
}

fn print_warnings(ctx: &Ctx) {
    if !ctx.warnings.is_empty() {
        println!("warnings:");
        for warning in &ctx.warnings {
            println!("- {}", warning);
        }
    }
}
