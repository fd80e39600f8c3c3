//! 마디 계산기 CLI 도구.
//!
//! 이 crate는 다음 기능을 제공합니다:
//! - 색상 표 / JSON 출력
//! - 엑셀(.xlsx) 파일 저장
//! - 표준 마디 간격 조회

pub mod commands;

pub use commands::*;
