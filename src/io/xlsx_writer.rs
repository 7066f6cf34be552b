use std::path::Path;

use anyhow::{Context, Result};
use rust_xlsxwriter::{Chart, ChartType, Format, Workbook, Worksheet};

use crate::io::sheet::{Cell, Sheet};

pub const SUMMARY_SHEET: &str = "Resumen";
const DATE_FORMAT: &str = "yyyy-mm-dd hh:mm:ss";

/// Class counts for the summary worksheet, in chart order.
#[derive(Debug, Clone)]
pub struct ChartSpec {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub categories: Vec<(String, usize)>,
    pub draw_chart: bool,
}

pub fn write_sheet(path: &Path, sheet: &Sheet) -> Result<()> {
    write_workbook(path, sheet, None)
}

/// Name for the summary worksheet that does not clash with the data sheet.
/// Excel compares sheet names case-insensitively.
pub fn summary_sheet_name(data_sheet: &str) -> String {
    let taken = |name: &str| name.to_lowercase() == data_sheet.to_lowercase();
    if !taken(SUMMARY_SHEET) {
        return SUMMARY_SHEET.to_string();
    }
    let alt = format!("{}_WHZ", SUMMARY_SHEET);
    if !taken(&alt) {
        return alt;
    }
    format!("{}_2", alt)
}

pub fn write_workbook(path: &Path, sheet: &Sheet, summary: Option<&ChartSpec>) -> Result<()> {
    let mut workbook = Workbook::new();

    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name(&sheet.name)
        .with_context(|| format!("invalid sheet name '{}'", sheet.name))?;
    write_table(worksheet, sheet)?;

    if let Some(spec) = summary {
        let name = summary_sheet_name(&sheet.name);
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(&name)?;
        write_summary(worksheet, &name, spec)?;
    }

    workbook
        .save(path)
        .with_context(|| format!("failed to write workbook {}", path.display()))?;
    Ok(())
}

fn write_table(worksheet: &mut Worksheet, sheet: &Sheet) -> Result<()> {
    let date_format = Format::new().set_num_format(DATE_FORMAT);
    for (col, header) in sheet.headers.iter().enumerate() {
        // Blank headers stay blank cells so leading empty columns survive a reload.
        if header.is_empty() {
            continue;
        }
        worksheet.write_string(0, col as u16, header)?;
    }
    for (r, row) in sheet.rows.iter().enumerate() {
        let xl_row = (r + 1) as u32;
        for (c, cell) in row.iter().enumerate() {
            let xl_col = c as u16;
            match cell {
                Cell::Empty => {}
                Cell::Number(v) => {
                    worksheet.write_number(xl_row, xl_col, *v)?;
                }
                Cell::Text(s) => {
                    worksheet.write_string(xl_row, xl_col, s)?;
                }
                Cell::Bool(b) => {
                    worksheet.write_boolean(xl_row, xl_col, *b)?;
                }
                Cell::DateTime(v) => {
                    worksheet.write_number_with_format(xl_row, xl_col, *v, &date_format)?;
                }
            }
        }
    }
    Ok(())
}

fn write_summary(worksheet: &mut Worksheet, name: &str, spec: &ChartSpec) -> Result<()> {
    worksheet.write_string(0, 0, &spec.x_label)?;
    worksheet.write_string(0, 1, &spec.y_label)?;
    for (i, (label, count)) in spec.categories.iter().enumerate() {
        let row = (i + 1) as u32;
        worksheet.write_string(row, 0, label)?;
        worksheet.write_number(row, 1, *count as f64)?;
    }
    worksheet.set_column_width(0, 32)?;

    if !spec.draw_chart || spec.categories.is_empty() {
        return Ok(());
    }

    let last = spec.categories.len() as u32;
    let mut chart = Chart::new(ChartType::Column);
    chart
        .add_series()
        .set_categories((name, 1, 0, last, 0))
        .set_values((name, 1, 1, last, 1))
        .set_name((name, 0, 1));
    chart.title().set_name(spec.title.as_str());
    chart.x_axis().set_name(spec.x_label.as_str());
    chart.y_axis().set_name(spec.y_label.as_str());
    chart.legend().set_hidden();
    worksheet.insert_chart(0, 3, &chart)?;
    Ok(())
}
