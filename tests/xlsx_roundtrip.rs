use kira_whz::io::sheet::{Cell, Sheet};
use kira_whz::io::xlsx_reader::read_sheet;
use kira_whz::io::xlsx_writer::{
    ChartSpec, SUMMARY_SHEET, summary_sheet_name, write_sheet, write_workbook,
};
use tempfile::TempDir;

fn sample() -> Sheet {
    let mut sheet = Sheet::new(
        "datos",
        vec!["Nombre".into(), "Edad".into(), "Activo".into()],
    );
    sheet.rows.push(vec![
        Cell::Text("Ana".into()),
        Cell::Number(3.5),
        Cell::Bool(true),
    ]);
    sheet.rows.push(vec![Cell::Text("Luis".into()), Cell::Empty, Cell::Bool(false)]);
    sheet
}

#[test]
fn sheet_roundtrip_preserves_values() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("t.xlsx");
    let sheet = sample();
    write_sheet(&path, &sheet).unwrap();

    let back = read_sheet(&path, None).unwrap();
    assert_eq!(back.name, "datos");
    assert_eq!(back.headers, sheet.headers);
    assert_eq!(back.n_rows(), 2);
    for r in 0..sheet.n_rows() {
        for c in 0..sheet.headers.len() {
            assert_eq!(back.cell(r, c), sheet.cell(r, c), "cell ({}, {})", r, c);
        }
    }
}

#[test]
fn named_sheet_is_selected() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("t.xlsx");
    let spec = ChartSpec {
        title: "t".into(),
        x_label: "clase".into(),
        y_label: "n".into(),
        categories: vec![("a".into(), 2), ("b".into(), 0)],
        draw_chart: true,
    };
    write_workbook(&path, &sample(), Some(&spec)).unwrap();

    let summary = read_sheet(&path, Some(SUMMARY_SHEET)).unwrap();
    assert_eq!(summary.headers, vec!["clase", "n"]);
    assert_eq!(summary.cell(0, 0), &Cell::Text("a".into()));
    assert_eq!(summary.cell(0, 1).as_f64(), Some(2.0));
    assert_eq!(summary.cell(1, 1).as_f64(), Some(0.0));
}

#[test]
fn unknown_sheet_fails() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("t.xlsx");
    write_sheet(&path, &sample()).unwrap();
    let err = read_sheet(&path, Some("otra")).unwrap_err();
    assert!(err.to_string().contains("otra"));
}

#[test]
fn header_whitespace_is_kept() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("t.xlsx");
    let mut sheet = sample();
    sheet.headers[0] = " Nombre ".into();
    write_sheet(&path, &sheet).unwrap();

    let back = read_sheet(&path, None).unwrap();
    assert_eq!(back.headers[0], " Nombre ");
    assert_eq!(back.column_index("Nombre"), Some(0));
}

#[test]
fn leading_empty_column_keeps_positions() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("t.xlsx");
    let mut sheet = Sheet::new("datos", vec!["".into(), "Nombre".into(), "Edad".into()]);
    sheet
        .rows
        .push(vec![Cell::Empty, Cell::Text("Ana".into()), Cell::Number(3.0)]);
    write_sheet(&path, &sheet).unwrap();

    let back = read_sheet(&path, None).unwrap();
    assert_eq!(back.headers, sheet.headers);
    assert_eq!(back.cell(0, 0), &Cell::Empty);
    assert_eq!(back.cell(0, 1), &Cell::Text("Ana".into()));
    assert_eq!(back.cell(0, 2).as_f64(), Some(3.0));
}

#[test]
fn summary_name_avoids_data_sheet() {
    assert_eq!(summary_sheet_name("datos"), SUMMARY_SHEET);
    assert_eq!(summary_sheet_name("Resumen"), "Resumen_WHZ");
    assert_eq!(summary_sheet_name("RESUMEN"), "Resumen_WHZ");
    assert_eq!(summary_sheet_name("resumen_whz"), SUMMARY_SHEET);
}
