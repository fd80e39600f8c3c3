//! 마디 표 엑셀 내보내기.
//!
//! 이 crate는 다음 기능을 제공합니다:
//! - 단일 시트(.xlsx) 문서 생성 (머리글 1행 + 데이터 49행, 행 번호 열 없음)
//! - 다운로드용 MIME 타입 및 파일 이름 규칙

pub mod error;
pub mod xlsx;

pub use error::{ExportError, ExportResult};
pub use xlsx::{XlsxExporter, XLSX_MIME_TYPE};
