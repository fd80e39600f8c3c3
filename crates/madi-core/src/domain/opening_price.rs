//! 시가 입력.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::{MadiError, MadiResult};
use crate::types::{DecimalExt, Price};

/// 시가 상한 (10^25).
///
/// 사다리 최상단 가격도 Decimal의 28자리 안에서 소수점 둘째 자리를 유지해야 합니다.
pub const MAX_OPENING_PRICE: Decimal = dec!(10000000000000000000000000);

/// 사다리의 기준이 되는 시가. 항상 0보다 큽니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct OpeningPrice(Price);

impl OpeningPrice {
    /// 양수 가격만 시가로 받아들입니다.
    ///
    /// 0 이하이면 `None`을 반환합니다. 이는 에러가 아니라 "아직 입력 없음"입니다.
    pub fn new(price: Price) -> Option<Self> {
        (price > Decimal::ZERO).then_some(Self(price))
    }

    /// 시가 값.
    pub fn value(&self) -> Price {
        self.0
    }
}

impl std::fmt::Display for OpeningPrice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0.to_price_string())
    }
}

impl From<OpeningPrice> for Decimal {
    fn from(price: OpeningPrice) -> Self {
        price.0
    }
}

impl TryFrom<Decimal> for OpeningPrice {
    type Error = MadiError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        ensure_within_range(value, &value.to_string())?;
        Self::new(value)
            .ok_or_else(|| MadiError::InvalidInput(format!("시가는 0보다 커야 합니다: {}", value)))
    }
}

/// 사용자 입력 문자열을 시가로 변환합니다.
///
/// 입력 칸과 같이 소수점 둘째 자리로 맞춥니다.
/// - 빈 문자열 또는 0 → `Ok(None)` (계산하지 않음)
/// - 음수 또는 숫자가 아닌 값 → `MadiError::InvalidInput`
pub fn parse_opening_price(input: &str) -> MadiResult<Option<OpeningPrice>> {
    let trimmed = input.trim().replace(',', "");
    if trimmed.is_empty() {
        return Ok(None);
    }

    let value = Decimal::from_str(&trimmed)
        .or_else(|_| Decimal::from_scientific(&trimmed))
        .map_err(|_| MadiError::InvalidInput(format!("숫자가 아닙니다: {}", input.trim())))?;

    if value.is_sign_negative() && !value.is_zero() {
        return Err(MadiError::InvalidInput(format!(
            "시가는 0 이상이어야 합니다: {}",
            input.trim()
        )));
    }

    ensure_within_range(value, input.trim())?;
    Ok(OpeningPrice::new(value.round_price()))
}

fn ensure_within_range(value: Decimal, input: &str) -> MadiResult<()> {
    if value > MAX_OPENING_PRICE {
        return Err(MadiError::InvalidInput(format!(
            "시가가 너무 큽니다 (최대 {}): {}",
            MAX_OPENING_PRICE, input
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_new_rejects_non_positive() {
        assert!(OpeningPrice::new(dec!(0)).is_none());
        assert!(OpeningPrice::new(dec!(-1)).is_none());
        assert_eq!(OpeningPrice::new(dec!(0.01)).unwrap().value(), dec!(0.01));
    }

    #[test]
    fn test_parse_gate() {
        assert_eq!(parse_opening_price("").unwrap(), None);
        assert_eq!(parse_opening_price("   ").unwrap(), None);
        assert_eq!(parse_opening_price("0").unwrap(), None);
        assert_eq!(parse_opening_price("0.00").unwrap(), None);
        assert_eq!(parse_opening_price("0.001").unwrap(), None);
    }

    #[test]
    fn test_parse_normalizes_to_two_places() {
        let price = parse_opening_price("100.005").unwrap().unwrap();
        assert_eq!(price.value(), dec!(100.01));

        let price = parse_opening_price("1,234.5").unwrap().unwrap();
        assert_eq!(price.value(), dec!(1234.5));
        assert_eq!(price.to_string(), "1234.50");
    }

    #[test]
    fn test_parse_invalid() {
        assert!(parse_opening_price("abc").unwrap_err().is_user_error());
        assert!(parse_opening_price("-5").unwrap_err().is_user_error());
    }

    #[test]
    fn test_parse_rejects_price_beyond_scale_limit() {
        let err = parse_opening_price("1e27").unwrap_err();
        assert!(err.is_user_error());
        assert!(parse_opening_price("10000000000000000000000001").is_err());

        let price = parse_opening_price("1e25").unwrap().unwrap();
        assert_eq!(price.value(), MAX_OPENING_PRICE);
    }

    #[test]
    fn test_serde_rejects_zero() {
        let parsed: Result<OpeningPrice, _> = serde_json::from_str("\"0\"");
        assert!(parsed.is_err());

        let parsed: OpeningPrice = serde_json::from_str("\"4321.25\"").unwrap();
        assert_eq!(parsed.value(), dec!(4321.25));
    }
}
