//! API 에러 응답 타입.
//!
//! JSON 엔드포인트에서 일관된 에러 형식을 제공합니다.
//!
//! ```json
//! {
//!   "code": "INVALID_INPUT",
//!   "message": "잘못된 입력: 숫자가 아닙니다: abc",
//!   "timestamp": 1738300800
//! }
//! ```

use axum::{http::StatusCode, Json};
use madi_core::MadiError;
use madi_export::ExportError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// API 에러 응답.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// 에러 코드 (예: "INVALID_INPUT", "LADDER_INVARIANT")
    pub code: String,
    /// 사람이 읽을 수 있는 에러 메시지
    pub message: String,
    /// 추가 에러 상세 정보 (선택적)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
    /// 에러 발생 타임스탬프 (Unix timestamp)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
}

impl ApiErrorResponse {
    /// 타임스탬프를 포함한 에러를 생성합니다.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
            timestamp: Some(chrono::Utc::now().timestamp()),
        }
    }

    /// 상세 정보를 포함한 에러를 생성합니다.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: Value,
    ) -> Self {
        Self {
            details: Some(details),
            ..Self::new(code, message)
        }
    }
}

impl std::fmt::Display for ApiErrorResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiErrorResponse {}

/// API 핸들러 Result 타입.
pub type ApiResult<T> = Result<T, (StatusCode, Json<ApiErrorResponse>)>;

/// 계산 에러를 HTTP 응답으로 변환합니다.
///
/// 입력 오류는 400, 사다리 불변식 위반은 500으로 응답합니다.
pub fn madi_error_response(err: &MadiError) -> (StatusCode, Json<ApiErrorResponse>) {
    match err {
        MadiError::InvalidInput(_) => (
            StatusCode::BAD_REQUEST,
            Json(ApiErrorResponse::new("INVALID_INPUT", err.to_string())),
        ),
        MadiError::LengthMismatch {
            subject,
            actual,
            expected,
        } => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiErrorResponse::with_details(
                "LADDER_INVARIANT",
                err.to_string(),
                serde_json::json!({
                    "subject": subject.to_string(),
                    "actual": actual,
                    "expected": expected,
                }),
            )),
        ),
        _ => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiErrorResponse::new("INTERNAL_ERROR", err.to_string())),
        ),
    }
}

/// 내보내기 에러를 HTTP 응답으로 변환합니다.
pub fn export_error_response(err: &ExportError) -> (StatusCode, Json<ApiErrorResponse>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiErrorResponse::new("EXPORT_ERROR", err.to_string())),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use madi_core::LadderPart;

    #[test]
    fn test_invalid_input_maps_to_400() {
        let (status, Json(body)) =
            madi_error_response(&MadiError::InvalidInput("abc".to_string()));
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.code, "INVALID_INPUT");
        assert!(body.timestamp.is_some());
    }

    #[test]
    fn test_length_mismatch_maps_to_500_with_details() {
        let err = MadiError::LengthMismatch {
            subject: LadderPart::Steps,
            actual: 40,
            expected: 49,
        };
        let (status, Json(body)) = madi_error_response(&err);
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.code, "LADDER_INVARIANT");

        let details = body.details.unwrap();
        assert_eq!(details["actual"], 40);
        assert_eq!(details["expected"], 49);
    }

    #[test]
    fn test_json_skips_empty_fields() {
        let mut error = ApiErrorResponse::new("X", "y");
        error.timestamp = None;
        let json = serde_json::to_string(&error).unwrap();
        assert_eq!(json, r#"{"code":"X","message":"y"}"#);
    }
}
