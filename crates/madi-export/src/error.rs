//! 내보내기 모듈 오류 타입.

use madi_core::MadiError;
use thiserror::Error;

/// 내보내기 관련 오류.
#[derive(Debug, Error)]
pub enum ExportError {
    /// 엑셀 문서 생성 오류
    #[error("Workbook error: {0}")]
    Workbook(#[from] rust_xlsxwriter::XlsxError),

    /// 빈 표는 내보낼 수 없음
    #[error("Nothing to export: table has no rows")]
    EmptyTable,

    /// 파일 쓰기 오류
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// 내보내기 작업을 위한 Result 타입.
pub type ExportResult<T> = Result<T, ExportError>;

impl From<ExportError> for MadiError {
    fn from(err: ExportError) -> Self {
        MadiError::Export(err.to_string())
    }
}
