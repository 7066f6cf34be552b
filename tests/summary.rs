use std::path::PathBuf;

use kira_whz::ctx::Ctx;
use kira_whz::io::sheet::Cell;
use kira_whz::io::summary::format_summary;
use kira_whz::lms::ReferencePaths;
use kira_whz::scores::classify::{Language, WhzClass};
use kira_whz::scores::{ChildRecord, RecordFailure, WhzError};

fn ctx(language: Language) -> Ctx {
    let mut ctx = Ctx::new(
        PathBuf::from("input.xlsx"),
        PathBuf::from("out/with_whz.xlsx"),
        ReferencePaths::in_dir(&PathBuf::from("data")),
        language,
        "0.0.0-test",
    );
    for row in 0..3 {
        ctx.records.push(ChildRecord {
            row,
            id: row.to_string(),
            sex: Cell::Text("Hombre".into()),
            height: Cell::Number(80.0),
            weight: Cell::Number(10.0),
        });
    }
    ctx.outcomes = vec![
        Ok(Some(0.2)),
        Ok(Some(2.4)),
        Err(WhzError::InvalidInput("sex must be 'Hombre' or 'Mujer', got 'Otro'".into())),
    ];
    ctx.classes = vec![WhzClass::Normal, WhzClass::Overweight, WhzClass::Unknown];
    ctx.failures = vec![RecordFailure {
        row: 2,
        id: "2".into(),
        kind: "invalid_input",
        message: "invalid input: sex must be 'Hombre' or 'Mujer', got 'Otro'".into(),
    }];
    ctx
}

#[test]
fn summary_format() {
    let s = format_summary(&ctx(Language::Es)).unwrap();
    assert!(s.contains("kira-whz v"));
    assert!(s.contains("Input: 3 records, 2 z-scores, 1 undefined"));
    assert!(s.contains("Output: out/with_whz.xlsx"));
    assert!(s.contains("Sobrepeso"));
    assert!(s.contains("Failures: 1"));
    assert!(s.contains("- row 2 (id 2): invalid input"));
}

#[test]
fn summary_bars_in_fixed_order() {
    let s = format_summary(&ctx(Language::En)).unwrap();
    let severe = s.find("Severe acute malnutrition").unwrap();
    let normal = s.find("Normal").unwrap();
    let over = s.find("Overweight").unwrap();
    let unknown = s.find("Unknown").unwrap();
    assert!(severe < normal && normal < over && over < unknown);

    let normal_line = s.lines().find(|l| l.starts_with("Normal")).unwrap();
    assert!(normal_line.contains('#'));
    assert!(normal_line.ends_with(" 1"));
}

#[test]
fn summary_without_failures() {
    let mut c = ctx(Language::Es);
    c.failures.clear();
    let s = format_summary(&c).unwrap();
    assert!(s.contains("Failures: none"));
}
