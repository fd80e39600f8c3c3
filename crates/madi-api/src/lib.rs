//! 마디 계산기 웹 서버.
//!
//! 이 크레이트는 다음을 제공합니다:
//! - 시가 입력 폼과 구간별 색상 표를 보여주는 HTML 페이지
//! - 엑셀(.xlsx) 다운로드
//! - JSON 사다리 API
//! - 헬스 체크 엔드포인트
//!
//! # 모듈 구성
//!
//! - [`state`]: 애플리케이션 공유 상태 (AppState)
//! - [`routes`]: HTTP 엔드포인트
//! - [`view`]: HTML 렌더링
//! - [`error`]: API 에러 응답

pub mod error;
pub mod routes;
pub mod state;
pub mod view;

pub use error::{ApiErrorResponse, ApiResult};
pub use routes::create_router;
pub use state::AppState;

#[cfg(any(test, feature = "test-utils"))]
pub use state::{create_test_state, create_test_state_with_steps};
