use kira_whz::lms::{LmsRow, nearest_row};

fn rows(measures: &[f64]) -> Vec<LmsRow> {
    measures
        .iter()
        .enumerate()
        .map(|(i, &m)| LmsRow {
            measure: m,
            l: 1.0,
            m: i as f64 + 1.0,
            s: 0.1,
        })
        .collect()
}

#[test]
fn picks_closest_measure() {
    let rows = rows(&[50.0, 60.0, 70.0]);
    let row = nearest_row(&rows, 61.0).unwrap();
    assert_eq!(row.measure, 60.0);
}

#[test]
fn tie_goes_to_first_row() {
    let rows = rows(&[50.0, 60.0, 70.0]);
    let row = nearest_row(&rows, 65.0).unwrap();
    assert_eq!(row.measure, 60.0);
    assert_eq!(row.m, 2.0);
}

#[test]
fn duplicate_measures_keep_first() {
    let rows = rows(&[60.0, 60.0]);
    let row = nearest_row(&rows, 60.0).unwrap();
    assert_eq!(row.m, 1.0);
}

#[test]
fn outside_range_uses_edge_row() {
    let rows = rows(&[50.0, 60.0, 70.0]);
    assert_eq!(nearest_row(&rows, 10.0).unwrap().measure, 50.0);
    assert_eq!(nearest_row(&rows, 120.0).unwrap().measure, 70.0);
}

#[test]
fn empty_table_has_no_match() {
    assert!(nearest_row(&[], 61.0).is_none());
}
