//! 시가 입력 페이지.
//!
//! 계산 실패는 이번 요청의 오류 배너로만 표시하고 서버는 계속 동작합니다.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Html,
    routing::get,
    Router,
};
use madi_core::{ladder_span, parse_opening_price, MadiError};
use std::sync::Arc;
use tracing::{error, warn};

use crate::routes::ladder::PriceQuery;
use crate::state::AppState;
use crate::view::{render_page, PageOutcome};

/// 입력 폼과 계산 결과 페이지.
///
/// GET /?price=100.00
pub async fn index(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PriceQuery>,
) -> (StatusCode, Html<String>) {
    let input = query.price.unwrap_or_default();
    let (status, outcome) = page_outcome(&state, input);
    (status, Html(render_page(&state.config.ui, &outcome)))
}

fn page_outcome(state: &AppState, input: String) -> (StatusCode, PageOutcome) {
    let price = match parse_opening_price(&input) {
        Ok(Some(price)) => price,
        Ok(None) => return (StatusCode::OK, PageOutcome::Empty { input }),
        Err(e) => {
            warn!(input = %input, error = %e, "Rejected opening price");
            return (StatusCode::BAD_REQUEST, error_outcome(input, &e));
        }
    };

    let result = ladder_span!("ladder_request", price, "page").in_scope(|| state.build_table(price));
    match result {
        Ok(table) => (
            StatusCode::OK,
            PageOutcome::Table {
                download_href: format!("/api/v1/ladder/export?price={}", table.opening_price),
                file_name: state.exporter.file_name(),
                table,
            },
        ),
        Err(e) => {
            error!(opening_price = %price, error = %e, "Ladder computation failed");
            (StatusCode::INTERNAL_SERVER_ERROR, error_outcome(input, &e))
        }
    }
}

fn error_outcome(input: String, err: &MadiError) -> PageOutcome {
    let message = if err.is_user_error() {
        err.to_string()
    } else {
        format!("계산 중 오류가 발생했습니다: {err}")
    };
    PageOutcome::Error { input, message }
}

/// 페이지 라우터.
pub fn page_router() -> Router<Arc<AppState>> {
    Router::new().route("/", get(index))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{create_test_state, create_test_state_with_steps};
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    async fn fetch(state: AppState, uri: &str) -> (StatusCode, String) {
        let app = page_router().with_state(Arc::new(state));
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_index_without_price() {
        let (status, html) = fetch(create_test_state(), "/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("<form"));
        assert!(!html.contains("<table"));
    }

    #[tokio::test]
    async fn test_index_with_zero_price_shows_nothing() {
        let (status, html) = fetch(create_test_state(), "/?price=0").await;
        assert_eq!(status, StatusCode::OK);
        assert!(!html.contains("<table"));
        assert!(!html.contains("엑셀 다운로드"));
    }

    #[tokio::test]
    async fn test_index_with_price_renders_table() {
        let (status, html) = fetch(create_test_state(), "/?price=100").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(html.matches("<tr class=\"zone-").count(), 49);
        assert!(html.contains("<td>24</td><td>115.00</td><td>0.60</td>"));
        assert!(html.contains("href=\"/api/v1/ladder/export?price=100.00\""));
        assert!(html.contains("value=\"100.00\""));
    }

    #[tokio::test]
    async fn test_index_with_invalid_price() {
        let (status, html) = fetch(create_test_state(), "/?price=abc").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(html.contains("class=\"error\""));
        assert!(html.contains("value=\"abc\""));
    }

    #[tokio::test]
    async fn test_broken_step_table_shows_banner() {
        let state = create_test_state_with_steps(&madi_core::STANDARD_STEP_GAPS[..48]);
        let (status, html) = fetch(state, "/?price=100").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(html.contains("class=\"error\""));
        assert!(html.contains("마디 간격 길이 오류: 48 (49 필요)"));
        assert!(!html.contains("<table"));
    }
}
