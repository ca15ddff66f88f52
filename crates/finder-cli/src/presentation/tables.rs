//! Result table rendering.
//!
//! [`render_results`] is a pure function of the loading flag and the result
//! list: a transient message while a submission is outstanding, a six-column
//! table in backend order, or an empty-state message.

use std::fmt::Write as _;

use finder_core::ServerRecord;

const HEADERS: [&str; 6] = ["ID", "Model", "RAM", "HDD", "Location", "Price"];
const COLUMN_GAP: &str = "  ";

/// Render the result area of the form.
pub fn render_results(loading: bool, records: &[ServerRecord]) -> String {
    if loading {
        return "Loading...".to_string();
    }
    if records.is_empty() {
        return "No servers found.".to_string();
    }

    let rows: Vec<[String; 6]> = records
        .iter()
        .map(|r| {
            [
                r.id.to_string(),
                r.model.clone(),
                r.ram.clone(),
                r.hdd.clone(),
                r.location.clone(),
                r.price.to_string(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.len());
        }
    }

    let total_width =
        widths.iter().sum::<usize>() + COLUMN_GAP.len() * (HEADERS.len() - 1);

    let mut out = String::new();
    write_row(&mut out, &HEADERS.map(str::to_string), &widths);
    out.push('\n');
    out.push_str(&"-".repeat(total_width));
    for row in &rows {
        out.push('\n');
        write_row(&mut out, row, &widths);
    }
    out
}

fn write_row(out: &mut String, cells: &[String; 6], widths: &[usize; 6]) {
    for (i, (cell, &width)) in cells.iter().zip(widths).enumerate() {
        if i > 0 {
            out.push_str(COLUMN_GAP);
        }
        if i == cells.len() - 1 {
            // No padding after the last column
            out.push_str(cell);
        } else {
            let _ = write!(out, "{cell:<width$}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use finder_core::FieldValue;

    fn record(id: u64, model: &str, price: &str) -> ServerRecord {
        ServerRecord {
            id: FieldValue::Number(id.into()),
            model: model.to_string(),
            ram: "16GB".to_string(),
            hdd: "SATA".to_string(),
            location: "AmsterdamAMS-01".to_string(),
            price: FieldValue::Text(price.to_string()),
        }
    }

    #[test]
    fn test_loading_renders_transient_message() {
        assert_eq!(render_results(true, &[]), "Loading...");
        // Loading wins even if stale results are still around
        assert_eq!(render_results(true, &[record(1, "X", "$10")]), "Loading...");
    }

    #[test]
    fn test_empty_renders_empty_state() {
        assert_eq!(render_results(false, &[]), "No servers found.");
    }

    #[test]
    fn test_table_preserves_backend_order() {
        let records = vec![record(2, "HP DL120", "$44"), record(1, "Dell R210", "$50")];
        let table = render_results(false, &records);

        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 4, "header, separator, two rows");
        assert!(lines[0].starts_with("ID"));
        assert!(lines[2].contains("HP DL120"), "first backend row first");
        assert!(lines[3].contains("Dell R210"));
    }

    #[test]
    fn test_columns_align_to_widest_cell() {
        let records = vec![
            record(1, "Short", "$1"),
            record(2, "A much longer model name", "$2"),
        ];
        let table = render_results(false, &records);

        let lines: Vec<&str> = table.lines().collect();
        // RAM column starts at the same offset in every row
        let offset = lines[0].find("RAM").unwrap();
        assert_eq!(lines[2].find("16GB").unwrap(), offset);
        assert_eq!(lines[3].find("16GB").unwrap(), offset);
    }

    #[test]
    fn test_all_six_fields_appear() {
        let table = render_results(false, &[record(7, "Dell R730", "$99.00")]);
        for cell in ["7", "Dell R730", "16GB", "SATA", "AmsterdamAMS-01", "$99.00"] {
            assert!(table.contains(cell), "missing {cell}");
        }
    }
}
