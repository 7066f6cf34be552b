use kira_whz::io::sheet::{Cell, Sheet};
use kira_whz::io::xlsx_writer::write_sheet;
use kira_whz::lms::{Measure, load_table, table_from_sheet};
use tempfile::TempDir;

fn lms_sheet(measure: &str) -> Sheet {
    let mut sheet = Sheet::new(
        "Sheet1",
        vec![
            measure.to_string(),
            "L".into(),
            "M".into(),
            "S".into(),
            "SD0".into(),
        ],
    );
    sheet.rows.push(vec![
        Cell::Number(45.0),
        Cell::Number(-0.3521),
        Cell::Number(2.441),
        Cell::Number(0.09182),
        Cell::Number(2.441),
    ]);
    sheet.rows.push(vec![
        Cell::Number(45.5),
        Cell::Number(-0.3521),
        Cell::Number(2.5244),
        Cell::Number(0.09153),
        Cell::Number(2.5244),
    ]);
    sheet
}

#[test]
fn detects_length_tables() {
    let table = table_from_sheet("wfl_boys", &lms_sheet("Length")).unwrap();
    assert_eq!(table.measure, Measure::Length);
    assert_eq!(table.rows.len(), 2);
    assert_eq!(table.rows[1].measure, 45.5);
    assert!((table.rows[1].m - 2.5244).abs() < 1e-12);
}

#[test]
fn detects_height_tables() {
    let table = table_from_sheet("wfh_boys", &lms_sheet("Height")).unwrap();
    assert_eq!(table.measure, Measure::Height);
    assert!(table.has_column("Height"));
    assert!(!table.has_column("Length"));
}

#[test]
fn rows_without_measure_are_skipped() {
    let mut sheet = lms_sheet("Length");
    sheet.rows.push(vec![Cell::Empty, Cell::Number(1.0)]);
    let table = table_from_sheet("wfl_boys", &sheet).unwrap();
    assert_eq!(table.rows.len(), 2);
}

#[test]
fn empty_coefficients_load_as_nan() {
    let mut sheet = lms_sheet("Length");
    sheet.rows.push(vec![Cell::Number(46.0), Cell::Empty]);
    let table = table_from_sheet("wfl_boys", &sheet).unwrap();
    assert_eq!(table.rows.len(), 3);
    assert!(table.rows[2].l.is_nan());
}

#[test]
fn missing_measure_column_fails() {
    let err = table_from_sheet("bad", &lms_sheet("Age")).unwrap_err();
    assert!(err.to_string().contains("Length"));
}

#[test]
fn missing_coefficient_column_fails() {
    let sheet = Sheet::new("Sheet1", vec!["Length".into(), "L".into(), "M".into()]);
    assert!(table_from_sheet("bad", &sheet).is_err());
}

#[test]
fn non_numeric_coefficient_fails_with_line() {
    let mut sheet = lms_sheet("Length");
    sheet.rows[0][2] = Cell::Text("n/a".into());
    let err = table_from_sheet("wfl_boys", &sheet).unwrap_err();
    assert!(err.to_string().contains("wfl_boys:2"));
}

#[test]
fn loads_from_workbook() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("wfl_girls_0-to-2-years_zscores.xlsx");
    write_sheet(&path, &lms_sheet("Length")).unwrap();

    let table = load_table(&path).unwrap();
    assert_eq!(table.name, "wfl_girls_0-to-2-years_zscores");
    assert_eq!(table.measure, Measure::Length);
    assert_eq!(table.rows.len(), 2);
}

#[test]
fn missing_workbook_fails() {
    let tmp = TempDir::new().unwrap();
    assert!(load_table(&tmp.path().join("nope.xlsx")).is_err());
}
