//! 엑셀 저장 → 다시 읽기 통합 테스트.

use calamine::{open_workbook, Data, Reader, Xlsx};
use madi_cli::commands::compute_table;
use madi_cli::commands::export::{export_workbook, ExportCommandConfig};
use madi_core::ExportConfig;

#[test]
fn exported_file_matches_printed_table() {
    let path = std::env::temp_dir().join(format!("madi-it-{}.xlsx", std::process::id()));
    let settings = ExportConfig {
        file_stem: "ladder".to_string(),
        sheet_name: "Ladder".to_string(),
    };
    let command = ExportCommandConfig {
        price: "1,234.567".to_string(),
        output: Some(path.clone()),
    };

    export_workbook(&command, &settings).unwrap().unwrap();
    let table = compute_table("1234.57").unwrap().unwrap();

    let mut workbook: Xlsx<_> = open_workbook(&path).unwrap();
    let range = workbook.worksheet_range("Ladder").unwrap();
    let mut rows = range.rows();

    let header: Vec<String> = rows.next().unwrap().iter().map(|c| c.to_string()).collect();
    assert_eq!(header, table.headers());

    for (sheet_row, row) in rows.zip(&table.rows) {
        let cells: Vec<String> = sheet_row
            .iter()
            .map(|c| match c {
                Data::Float(f) => format!("{}", *f as u8),
                other => other.to_string(),
            })
            .collect();
        assert_eq!(cells, row.cells());
    }
    assert_eq!(range.height(), 50);

    std::fs::remove_file(&path).unwrap();
}
