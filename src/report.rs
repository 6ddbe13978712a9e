//! CSV report writer.
//!
//! Columns are the legislator fields, `total_cost`, then the union of the
//! opaque award fields in first-seen order. Unmatched rows render their
//! award cells empty.

use crate::error::Result;
use crate::join::JoinedRow;
use serde_json::Value;
use std::io::Write;
use std::path::Path;

const LEGISLATOR_COLUMNS: [&str; 3] = ["legislator_name", "state", "congressional_district"];

pub fn write_report_file(path: &Path, rows: &[JoinedRow]) -> Result<()> {
    let writer = csv::Writer::from_path(path)?;
    write_report(writer, rows)
}

pub fn write_report<W: Write>(mut writer: csv::Writer<W>, rows: &[JoinedRow]) -> Result<()> {
    let award_columns = award_columns(rows);

    let mut header: Vec<&str> = LEGISLATOR_COLUMNS.to_vec();
    header.push("total_cost");
    header.extend(award_columns.iter().map(String::as_str));
    writer.write_record(&header)?;

    for row in rows {
        let mut record = vec![
            row.legislator_name.clone(),
            row.state.clone(),
            row.district.clone(),
            row.total_cost.map(|c| c.to_string()).unwrap_or_default(),
        ];
        for column in &award_columns {
            record.push(
                row.award_fields
                    .get(column)
                    .map(render_value)
                    .unwrap_or_default(),
            );
        }
        writer.write_record(&record)?;
    }

    writer.flush()?;
    Ok(())
}

/// Union of opaque award fields across all rows, in first-seen order.
fn award_columns(rows: &[JoinedRow]) -> Vec<String> {
    let mut columns: Vec<String> = Vec::new();
    for row in rows {
        for key in row.award_fields.keys() {
            if !columns.iter().any(|c| c == key) {
                columns.push(key.clone());
            }
        }
    }
    columns
}

fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Map;

    fn row(name: &str, state: &str, district: &str, cost: Option<f64>) -> JoinedRow {
        JoinedRow {
            legislator_name: name.to_string(),
            state: state.to_string(),
            district: district.to_string(),
            total_cost: cost,
            award_fields: Map::new(),
        }
    }

    fn rendered(rows: &[JoinedRow]) -> String {
        let mut buffer = Vec::new();
        write_report(csv::Writer::from_writer(&mut buffer), rows).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn header_unions_award_fields_in_first_seen_order() {
        let mut first = row("A", "NY", "03", Some(10.0));
        first
            .award_fields
            .insert("project_title".to_string(), Value::String("x".to_string()));
        let mut second = row("B", "PA", "02", Some(5.0));
        second
            .award_fields
            .insert("project_title".to_string(), Value::String("y".to_string()));
        second
            .award_fields
            .insert("pi_name".to_string(), Value::String("z".to_string()));

        let output = rendered(&[first, second]);
        let header = output.lines().next().unwrap();
        assert_eq!(
            header,
            "legislator_name,state,congressional_district,total_cost,project_title,pi_name"
        );
    }

    #[test]
    fn unmatched_rows_render_empty_award_cells() {
        let mut matched = row("A", "NY", "03", Some(10.0));
        matched
            .award_fields
            .insert("project_title".to_string(), Value::String("x".to_string()));
        let unmatched = row("B", "NY", "11", None);

        let output = rendered(&[matched, unmatched]);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[1], "A,NY,03,10,x");
        assert_eq!(lines[2], "B,NY,11,,");
    }

    #[test]
    fn non_string_values_render_bare() {
        let mut matched = row("A", "NY", "03", Some(1234.5));
        matched
            .award_fields
            .insert("fy".to_string(), Value::from(2019));
        let output = rendered(&[matched]);
        assert!(output.lines().nth(1).unwrap().ends_with("1234.5,2019"));
    }
}
