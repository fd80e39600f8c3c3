//! 고정 마디 간격 테이블.
//!
//! 49개 간격 중 위쪽 24개(인덱스 0..24)는 시가에서 위로, 아래쪽 24개
//! (인덱스 25..49)는 시가에서 아래로 한 마디씩 이동할 때 사용됩니다.
//! 인덱스 24는 시가 자리로 간격이 없습니다(0).

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// 사다리 전체 마디 수 (위 24 + 시가 1 + 아래 24).
pub const NODE_COUNT: usize = 49;

/// 시가 한쪽의 마디 수.
pub const HALF_SPAN: usize = 24;

/// 시가 행의 위치.
pub const OPENING_INDEX: usize = HALF_SPAN;

/// 표준 마디 간격.
pub static STANDARD_STEP_GAPS: [Decimal; NODE_COUNT] = [
    dec!(0.6), dec!(0.55), dec!(0.7), dec!(0.65), dec!(0.6),
    dec!(0.75), dec!(0.5), dec!(0.65), dec!(0.6), dec!(0.55),
    dec!(0.7), dec!(0.65), dec!(0.6), dec!(0.75), dec!(0.5),
    dec!(0.65), dec!(0.6), dec!(0.55), dec!(0.7), dec!(0.65),
    dec!(0.6), dec!(0.75), dec!(0.5), dec!(0.65),
    dec!(0),
    dec!(0.6), dec!(0.55), dec!(0.7), dec!(0.65), dec!(0.6),
    dec!(0.75), dec!(0.5), dec!(0.65), dec!(0.6), dec!(0.55),
    dec!(0.7), dec!(0.65), dec!(0.6), dec!(0.75), dec!(0.5),
    dec!(0.65), dec!(0.6), dec!(0.55), dec!(0.7), dec!(0.65),
    dec!(0.6), dec!(0.75), dec!(0.5), dec!(0.65),
];

/// 마디 간격 테이블에 대한 읽기 전용 뷰.
///
/// 표준 테이블은 [`StepTable::standard`]로 얻습니다. 임의의 슬라이스를
/// 감싸는 [`StepTable::from_gaps`]는 길이 검증 경로를 확인할 때만 씁니다.
/// 길이는 여기서 검증하지 않고 사다리 생성 시점에 검증합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepTable<'a> {
    gaps: &'a [Decimal],
}

impl StepTable<'static> {
    /// 표준 49마디 간격 테이블.
    pub fn standard() -> Self {
        Self {
            gaps: &STANDARD_STEP_GAPS,
        }
    }
}

impl<'a> StepTable<'a> {
    /// 주어진 간격 슬라이스를 감쌉니다.
    pub fn from_gaps(gaps: &'a [Decimal]) -> Self {
        Self { gaps }
    }

    /// 간격 개수.
    pub fn len(&self) -> usize {
        self.gaps.len()
    }

    /// 간격이 하나도 없는지 여부.
    pub fn is_empty(&self) -> bool {
        self.gaps.is_empty()
    }

    /// 위치별 간격.
    pub fn gap(&self, index: usize) -> Option<Decimal> {
        self.gaps.get(index).copied()
    }

    /// 전체 간격 슬라이스.
    pub fn gaps(&self) -> &'a [Decimal] {
        self.gaps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_table_shape() {
        let table = StepTable::standard();
        assert_eq!(table.len(), NODE_COUNT);
        assert_eq!(table.gap(OPENING_INDEX), Some(Decimal::ZERO));
        assert!(table.gaps().iter().all(|g| *g >= Decimal::ZERO));
    }

    #[test]
    fn test_halves_are_mirrored_sequences() {
        let gaps = StepTable::standard().gaps();
        assert_eq!(&gaps[..HALF_SPAN], &gaps[OPENING_INDEX + 1..]);
    }

    #[test]
    fn test_gap_out_of_range() {
        assert_eq!(StepTable::standard().gap(NODE_COUNT), None);
        assert!(StepTable::from_gaps(&[]).is_empty());
    }
}
