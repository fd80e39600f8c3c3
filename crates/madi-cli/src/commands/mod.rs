//! CLI 명령어 구현 모듈.
//!
//! 계산 실패는 `anyhow` 에러로 `main`까지 전파되어 0이 아닌 종료 코드로 끝납니다.

pub mod export;
pub mod steps;
pub mod table;

use anyhow::{Context, Result};
use madi_core::{generate_ladder, parse_opening_price, LadderTable, StepTable};
use tracing::info;

/// 0 또는 빈 시가 입력 시 안내 문구.
pub const EMPTY_PRICE_NOTICE: &str = "시가가 0이거나 비어 있어 계산하지 않습니다.";

/// 표준 간격 테이블로 시가 입력을 표로 변환합니다.
///
/// 시가가 0이거나 비어 있으면 `Ok(None)`.
pub fn compute_table(input: &str) -> Result<Option<LadderTable>> {
    compute_table_with(input, &StepTable::standard())
}

/// 지정한 간격 테이블로 시가 입력을 표로 변환합니다.
pub fn compute_table_with(input: &str, steps: &StepTable<'_>) -> Result<Option<LadderTable>> {
    let Some(price) = parse_opening_price(input)
        .with_context(|| format!("Invalid opening price: {}", input))?
    else {
        info!(input = %input, "Empty opening price, nothing to compute");
        return Ok(None);
    };

    let _span = madi_core::ladder_span!("ladder_command", price, "cli").entered();
    let ladder = generate_ladder(price, steps).context("Ladder computation failed")?;
    Ok(Some(LadderTable::from_ladder(&ladder)))
}
