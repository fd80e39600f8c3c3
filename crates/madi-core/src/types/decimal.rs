//! 가격 계산을 위한 Decimal 유틸리티.

use rust_decimal::{Decimal, RoundingStrategy};

/// 가격 타입.
pub type Price = Decimal;

/// 가격 소수점 자릿수.
pub const PRICE_SCALE: u32 = 2;

/// 마디 가격 계산과 표시를 위한 Decimal 확장 트레이트.
pub trait DecimalExt {
    /// 소수점 둘째 자리로 반올림합니다 (0.5는 0에서 먼 쪽으로).
    fn round_price(&self) -> Decimal;

    /// 소수점 둘째 자리 고정 문자열 (예: "100.60").
    fn to_price_string(&self) -> String;

    /// 마디 간격 표시 문자열.
    ///
    /// 정수이면 정수 형태("0"), 아니면 소수점 둘째 자리("0.60").
    fn to_step_string(&self) -> String;
}

impl DecimalExt for Decimal {
    fn round_price(&self) -> Decimal {
        self.round_dp_with_strategy(PRICE_SCALE, RoundingStrategy::MidpointAwayFromZero)
    }

    fn to_price_string(&self) -> String {
        let mut fixed = self.round_price();
        fixed.rescale(PRICE_SCALE);
        fixed.to_string()
    }

    fn to_step_string(&self) -> String {
        if self.fract().is_zero() {
            self.trunc().normalize().to_string()
        } else {
            self.to_price_string()
        }
    }
}
