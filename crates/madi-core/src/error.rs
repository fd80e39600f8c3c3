//! 마디 계산기의 에러 타입.
//!
//! 이 모듈은 계산기 전반에서 사용되는 에러 타입을 정의합니다.

use thiserror::Error;

/// 핵심 마디 계산 에러.
#[derive(Debug, Error)]
pub enum MadiError {
    /// 사다리 구성 요소의 길이가 49와 다름
    #[error("{subject} 길이 오류: {actual} ({expected} 필요)")]
    LengthMismatch {
        /// 검사 대상 (가격 리스트, 마디 간격, 마디 번호)
        subject: LadderPart,
        /// 실제 길이
        actual: usize,
        /// 기대 길이
        expected: usize,
    },

    /// 잘못된 입력
    #[error("잘못된 입력: {0}")]
    InvalidInput(String),

    /// 설정 에러
    #[error("설정 에러: {0}")]
    Config(String),

    /// 내보내기 에러
    #[error("내보내기 에러: {0}")]
    Export(String),

}

/// 길이 검증 대상이 되는 사다리 구성 요소.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LadderPart {
    /// 계산된 가격 리스트
    Prices,
    /// 마디 간격 테이블
    Steps,
    /// 마디 번호 리스트
    Labels,
}

impl std::fmt::Display for LadderPart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            LadderPart::Prices => "가격 리스트",
            LadderPart::Steps => "마디 간격",
            LadderPart::Labels => "마디 번호",
        };
        f.write_str(name)
    }
}

/// 마디 계산 작업을 위한 Result 타입.
pub type MadiResult<T> = Result<T, MadiError>;

impl MadiError {
    /// 사다리 불변식(길이 49) 위반인지 확인합니다.
    ///
    /// 이 에러는 입력을 바꾸지 않는 한 재시도해도 결과가 같습니다.
    pub fn is_invariant_violation(&self) -> bool {
        matches!(self, MadiError::LengthMismatch { .. })
    }

    /// 사용자가 입력을 고쳐서 해결할 수 있는 에러인지 확인합니다.
    pub fn is_user_error(&self) -> bool {
        matches!(self, MadiError::InvalidInput(_))
    }
}

impl From<config::ConfigError> for MadiError {
    fn from(err: config::ConfigError) -> Self {
        MadiError::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_mismatch_message() {
        let err = MadiError::LengthMismatch {
            subject: LadderPart::Prices,
            actual: 48,
            expected: 49,
        };
        assert_eq!(err.to_string(), "가격 리스트 길이 오류: 48 (49 필요)");
        assert!(err.is_invariant_violation());
        assert!(!err.is_user_error());
    }

    #[test]
    fn test_invalid_input_is_user_error() {
        let err = MadiError::InvalidInput("abc".to_string());
        assert!(err.is_user_error());
        assert!(!err.is_invariant_violation());
    }
}
