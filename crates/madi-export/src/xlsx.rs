//! 사다리 표 → .xlsx 문서.
//!
//! 색상 없이 세 열(마디 번호, 계산된 가격, 마디 간격)만 기록합니다.
//! 숫자 마디 번호는 숫자 셀, `시가`는 문자열 셀이며, 가격과 간격은 화면에
//! 표시되는 문자열 그대로 문자열 셀로 기록합니다.

use std::path::Path;

use madi_core::{ExportConfig, LadderTable, NodeLabel};
use rust_xlsxwriter::{
    DocProperties, ExcelDateTime, Format, FormatAlign, FormatBorder, Workbook, Worksheet,
};
use tracing::{debug, info};

use crate::error::{ExportError, ExportResult};

/// .xlsx 다운로드 MIME 타입.
pub const XLSX_MIME_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// 문서 생성 시각 고정값. 같은 표는 같은 바이트를 생성합니다.
const PINNED_CREATION_DATE: (u16, u8, u8) = (2024, 1, 1);

/// 열 너비 (마디 번호, 계산된 가격, 마디 간격).
const COLUMN_WIDTHS: [f64; 3] = [10.0, 14.0, 10.0];

/// 단일 시트 엑셀 내보내기.
#[derive(Debug, Clone)]
pub struct XlsxExporter {
    sheet_name: String,
    file_stem: String,
}

impl Default for XlsxExporter {
    fn default() -> Self {
        Self::from_config(&ExportConfig::default())
    }
}

impl XlsxExporter {
    /// 내보내기 설정으로 생성합니다.
    pub fn from_config(config: &ExportConfig) -> Self {
        Self {
            sheet_name: config.sheet_name.clone(),
            file_stem: config.file_stem.clone(),
        }
    }

    /// 시트 이름.
    pub fn sheet_name(&self) -> &str {
        &self.sheet_name
    }

    /// 다운로드 파일 이름 (`<file_stem>.xlsx`).
    pub fn file_name(&self) -> String {
        format!("{}.xlsx", self.file_stem)
    }

    /// 표를 .xlsx 바이트로 변환합니다.
    pub fn export(&self, table: &LadderTable) -> ExportResult<Vec<u8>> {
        if table.is_empty() {
            return Err(ExportError::EmptyTable);
        }

        let mut workbook = Workbook::new();
        let created = ExcelDateTime::from_ymd(
            PINNED_CREATION_DATE.0,
            PINNED_CREATION_DATE.1,
            PINNED_CREATION_DATE.2,
        )?;
        let properties = DocProperties::new()
            .set_title(&self.file_stem)
            .set_creation_datetime(&created);
        workbook.set_properties(&properties);

        let worksheet = workbook.add_worksheet();
        worksheet.set_name(&self.sheet_name)?;
        write_table(worksheet, table)?;

        let bytes = workbook.save_to_buffer()?;
        debug!(
            opening_price = %table.opening_price,
            rows = table.len(),
            bytes = bytes.len(),
            "Ladder table exported"
        );
        Ok(bytes)
    }

    /// 표를 .xlsx 파일로 저장합니다.
    pub fn export_to_path(&self, table: &LadderTable, path: impl AsRef<Path>) -> ExportResult<usize> {
        let bytes = self.export(table)?;
        std::fs::write(path.as_ref(), &bytes)?;
        info!(path = %path.as_ref().display(), bytes = bytes.len(), "Workbook saved");
        Ok(bytes.len())
    }
}

fn write_table(worksheet: &mut Worksheet, table: &LadderTable) -> ExportResult<()> {
    let header_format = Format::new()
        .set_bold()
        .set_border(FormatBorder::Thin)
        .set_align(FormatAlign::Center);

    for (col, header) in table.headers().iter().enumerate() {
        let col = col as u16;
        worksheet.write_string_with_format(0, col, *header, &header_format)?;
        worksheet.set_column_width(col, COLUMN_WIDTHS[col as usize])?;
    }

    for (offset, row) in table.rows.iter().enumerate() {
        let r = offset as u32 + 1;
        match row.label {
            NodeLabel::Offset(n) => {
                worksheet.write_number(r, 0, n)?;
            }
            NodeLabel::Opening => {
                worksheet.write_string(r, 0, NodeLabel::OPENING_TEXT)?;
            }
        }
        worksheet.write_string(r, 1, row.price.as_str())?;
        worksheet.write_string(r, 2, row.step.as_str())?;
    }

    Ok(())
}
