//! 사다리 JSON API 및 엑셀 다운로드.
//!
//! 시가가 없거나 0이면 두 엔드포인트 모두 204 No Content로 응답합니다.

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use madi_core::{ladder_span, parse_opening_price, LadderTable, OpeningPrice, TableRow};
use madi_export::XLSX_MIME_TYPE;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, warn};

use crate::error::{export_error_response, madi_error_response, ApiResult};
use crate::state::AppState;

/// 시가 쿼리 파라미터.
#[derive(Debug, Default, Deserialize)]
pub struct PriceQuery {
    /// 시가 입력 (비어 있거나 0이면 계산하지 않음)
    pub price: Option<String>,
}

/// 사다리 표 응답.
#[derive(Debug, Serialize)]
pub struct LadderResponse {
    /// 기준 시가 (소수점 둘째 자리)
    pub opening_price: String,
    /// 열 머리글
    pub headers: [&'static str; 3],
    /// 위에서 아래 순서의 행
    pub rows: Vec<TableRow>,
}

impl From<LadderTable> for LadderResponse {
    fn from(table: LadderTable) -> Self {
        Self {
            opening_price: table.opening_price.to_string(),
            headers: table.headers(),
            rows: table.rows,
        }
    }
}

/// 쿼리에서 시가를 읽습니다. 입력이 없거나 0이면 `Ok(None)`.
fn opening_price_from(query: &PriceQuery) -> ApiResult<Option<OpeningPrice>> {
    parse_opening_price(query.price.as_deref().unwrap_or_default())
        .map_err(|e| madi_error_response(&e))
}

fn compute_table(state: &AppState, price: OpeningPrice) -> ApiResult<LadderTable> {
    ladder_span!("ladder_request", price, "api").in_scope(|| {
        state.build_table(price).map_err(|e| {
            warn!(error = %e, "Ladder computation failed");
            madi_error_response(&e)
        })
    })
}

/// 사다리 표 조회.
///
/// GET /api/v1/ladder?price=100.00
pub async fn get_ladder(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PriceQuery>,
) -> ApiResult<Response> {
    let Some(price) = opening_price_from(&query)? else {
        return Ok(StatusCode::NO_CONTENT.into_response());
    };

    let table = compute_table(&state, price)?;
    Ok(Json(LadderResponse::from(table)).into_response())
}

/// 엑셀 다운로드.
///
/// GET /api/v1/ladder/export?price=100.00
pub async fn export_ladder(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PriceQuery>,
) -> ApiResult<Response> {
    let Some(price) = opening_price_from(&query)? else {
        return Ok(StatusCode::NO_CONTENT.into_response());
    };

    let table = compute_table(&state, price)?;
    let bytes = state
        .export_table(&table)
        .map_err(|e| export_error_response(&e))?;

    let file_name = state.exporter.file_name();
    info!(opening_price = %price, bytes = bytes.len(), file = %file_name, "Serving workbook");

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, XLSX_MIME_TYPE.to_string()),
            (header::CONTENT_DISPOSITION, content_disposition(&file_name)),
        ],
        bytes,
    )
        .into_response())
}

/// 첨부 파일 헤더 값. 비 ASCII 파일 이름은 RFC 5987 형식으로 인코딩합니다.
pub fn content_disposition(file_name: &str) -> String {
    let fallback: String = file_name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();

    format!(
        "attachment; filename=\"{}\"; filename*=UTF-8''{}",
        fallback,
        percent_encode(file_name)
    )
}

fn percent_encode(s: &str) -> String {
    let mut out = String::with_capacity(s.len() * 3);
    for byte in s.bytes() {
        if byte.is_ascii_alphanumeric() || matches!(byte, b'.' | b'-' | b'_' | b'~') {
            out.push(byte as char);
        } else {
            out.push_str(&format!("%{:02X}", byte));
        }
    }
    out
}

/// 사다리 라우터.
pub fn ladder_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(get_ladder))
        .route("/export", get(export_ladder))
}
