//! 애플리케이션 공유 상태.
//!
//! 모든 핸들러가 `Arc<AppState>`로 공유합니다. 상태는 생성 후 변경되지
//! 않으므로 잠금이 필요 없습니다.

use chrono::{DateTime, Utc};
use madi_core::{
    generate_ladder, AppConfig, LadderTable, MadiResult, OpeningPrice, StepTable,
};
use madi_export::{ExportResult, XlsxExporter};

/// 애플리케이션 상태.
#[derive(Debug, Clone)]
pub struct AppState {
    /// 애플리케이션 설정
    pub config: AppConfig,
    /// 마디 간격 테이블 (운영에서는 항상 표준 테이블)
    pub steps: StepTable<'static>,
    /// 엑셀 내보내기
    pub exporter: XlsxExporter,
    /// 서버 버전
    pub version: String,
    /// 서버 시작 시각
    pub started_at: DateTime<Utc>,
}

impl AppState {
    /// 표준 간격 테이블로 상태를 생성합니다.
    pub fn new(config: AppConfig) -> Self {
        let exporter = XlsxExporter::from_config(&config.export);
        Self {
            config,
            steps: StepTable::standard(),
            exporter,
            version: env!("CARGO_PKG_VERSION").to_string(),
            started_at: Utc::now(),
        }
    }

    /// 시가로 사다리를 계산하고 표로 변환합니다.
    pub fn build_table(&self, price: OpeningPrice) -> MadiResult<LadderTable> {
        let ladder = generate_ladder(price, &self.steps)?;
        Ok(LadderTable::from_ladder(&ladder))
    }

    /// 표를 .xlsx 바이트로 변환합니다.
    pub fn export_table(&self, table: &LadderTable) -> ExportResult<Vec<u8>> {
        self.exporter.export(table)
    }

    /// 서버 업타임(초).
    pub fn uptime_secs(&self) -> i64 {
        (Utc::now() - self.started_at).num_seconds()
    }
}

/// 기본 설정의 테스트용 상태.
#[cfg(any(test, feature = "test-utils"))]
pub fn create_test_state() -> AppState {
    AppState::new(AppConfig::default())
}

/// 임의 간격 테이블을 쓰는 테스트용 상태 (불변식 위반 경로 확인용).
#[cfg(any(test, feature = "test-utils"))]
pub fn create_test_state_with_steps(gaps: &'static [rust_decimal::Decimal]) -> AppState {
    let mut state = create_test_state();
    state.steps = StepTable::from_gaps(gaps);
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use madi_core::{STANDARD_STEP_GAPS, NODE_COUNT};
    use rust_decimal_macros::dec;

    #[test]
    fn test_build_table() {
        let state = create_test_state();
        let table = state.build_table(OpeningPrice::new(dec!(100)).unwrap()).unwrap();
        assert_eq!(table.len(), NODE_COUNT);
    }

    #[test]
    fn test_build_table_with_broken_steps() {
        let state = create_test_state_with_steps(&STANDARD_STEP_GAPS[..40]);
        let err = state
            .build_table(OpeningPrice::new(dec!(100)).unwrap())
            .unwrap_err();
        assert!(err.is_invariant_violation());
    }
}
