//! HTTP 라우트.
//!
//! # 라우트 구조
//!
//! - `/` - 시가 입력 폼과 색상 표 (HTML)
//! - `/api/v1/ladder` - 사다리 표 (JSON)
//! - `/api/v1/ladder/export` - 엑셀 다운로드
//! - `/health` - 헬스 체크 (liveness)
//! - `/health/ready` - 상세 헬스 체크 (readiness)

pub mod health;
pub mod ladder;
pub mod page;

pub use health::{health_router, HealthResponse};
pub use ladder::{ladder_router, LadderResponse, PriceQuery};
pub use page::page_router;

use std::sync::Arc;
use std::time::Duration;

use axum::http::StatusCode;
use axum::Router;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// 전체 라우터를 생성합니다.
pub fn create_router(state: Arc<AppState>) -> Router {
    let timeout = Duration::from_secs(state.config.server.request_timeout_secs);

    Router::new()
        .merge(page_router())
        .nest("/health", health_router())
        .nest("/api/v1/ladder", ladder_router())
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            timeout,
        ))
        .with_state(state)
}
