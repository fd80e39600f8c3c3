//! 시가 기준 49마디 가격 사다리 생성.
//!
//! 위쪽 절반은 시가에서 바깥쪽으로 한 칸씩 간격을 더하고, 아래쪽 절반은
//! 한 칸씩 간격을 뺍니다. 매 단계마다 직전 (이미 반올림된) 가격에 간격을
//! 더한 뒤 소수점 둘째 자리로 반올림합니다. 마지막에 한 번만 반올림하는
//! 누적합과는 결과가 다를 수 있으며, 이 단계별 반올림을 그대로 유지합니다.

use rust_decimal::Decimal;
use serde::{Serialize, Serializer};
use tracing::{debug, error};

use super::opening_price::OpeningPrice;
use super::step_table::{StepTable, HALF_SPAN, NODE_COUNT, OPENING_INDEX};
use super::zone::Zone;
use crate::error::{LadderPart, MadiError, MadiResult};
use crate::types::{DecimalExt, Price};

/// 마디 번호.
///
/// 숫자 번호는 위쪽과 아래쪽이 모두 1..24를 사용하므로 행을 구분하는
/// 용도로 쓰면 안 됩니다. 행의 식별자는 위치(`position`)입니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeLabel {
    /// 시가로부터 떨어진 마디 수 (1..=24)
    Offset(u8),
    /// 시가 행
    Opening,
}

impl NodeLabel {
    /// 시가 라벨 표시 문자열.
    pub const OPENING_TEXT: &'static str = "시가";

    /// 시가 행인지 여부.
    pub fn is_opening(&self) -> bool {
        matches!(self, NodeLabel::Opening)
    }

    /// 숫자 마디 번호 (시가 행은 `None`).
    pub fn offset(&self) -> Option<u8> {
        match self {
            NodeLabel::Offset(n) => Some(*n),
            NodeLabel::Opening => None,
        }
    }
}

impl std::fmt::Display for NodeLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NodeLabel::Offset(n) => write!(f, "{}", n),
            NodeLabel::Opening => f.write_str(Self::OPENING_TEXT),
        }
    }
}

impl Serialize for NodeLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            NodeLabel::Offset(n) => serializer.serialize_u8(*n),
            NodeLabel::Opening => serializer.serialize_str(Self::OPENING_TEXT),
        }
    }
}

/// 위에서 아래 순서의 마디 번호 `[24, 23, ..., 1, 시가, 1, 2, ..., 24]`.
pub fn node_labels() -> Vec<NodeLabel> {
    let span = HALF_SPAN as u8;
    (1..=span)
        .rev()
        .map(NodeLabel::Offset)
        .chain(std::iter::once(NodeLabel::Opening))
        .chain((1..=span).map(NodeLabel::Offset))
        .collect()
}

/// 사다리의 한 행.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LadderRow {
    /// 위에서부터의 위치 (0..49)
    pub position: usize,
    /// 마디 번호
    pub label: NodeLabel,
    /// 계산된 가격
    pub price: Price,
    /// 이 위치에 사용된 마디 간격
    pub step: Decimal,
}

impl LadderRow {
    /// 행의 구간.
    pub fn zone(&self) -> Zone {
        Zone::classify(self.position, &self.label)
    }
}

/// 49마디 가격 사다리.
///
/// 생성 후에는 항상 정확히 49행이며 인덱스 24는 시가 행입니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ladder {
    opening_price: OpeningPrice,
    rows: Vec<LadderRow>,
}

impl Ladder {
    /// 기준 시가.
    pub fn opening_price(&self) -> OpeningPrice {
        self.opening_price
    }

    /// 위에서 아래 순서의 모든 행.
    pub fn rows(&self) -> &[LadderRow] {
        &self.rows
    }

    /// 위치별 행.
    pub fn get(&self, position: usize) -> Option<&LadderRow> {
        self.rows.get(position)
    }

    /// 시가 행.
    pub fn opening_row(&self) -> Option<&LadderRow> {
        self.rows.iter().find(|row| row.label.is_opening())
    }

    /// 위에서 아래 순서의 가격.
    pub fn prices(&self) -> Vec<Price> {
        self.rows.iter().map(|row| row.price).collect()
    }

    /// 행 수 (항상 49).
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// 행이 없는지 여부. 생성된 사다리는 항상 `false`입니다.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// 행 반복자.
    pub fn iter(&self) -> std::slice::Iter<'_, LadderRow> {
        self.rows.iter()
    }
}

impl<'a> IntoIterator for &'a Ladder {
    type Item = &'a LadderRow;
    type IntoIter = std::slice::Iter<'a, LadderRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

fn ensure_node_count(subject: LadderPart, actual: usize) -> MadiResult<()> {
    if actual == NODE_COUNT {
        return Ok(());
    }
    error!(
        subject = %subject,
        actual,
        expected = NODE_COUNT,
        "Ladder invariant violated"
    );
    Err(MadiError::LengthMismatch {
        subject,
        actual,
        expected: NODE_COUNT,
    })
}

fn out_of_range(price: Price, gap: Decimal) -> MadiError {
    MadiError::InvalidInput(format!(
        "가격 범위를 벗어났습니다: {} ± {}",
        price, gap
    ))
}

/// 시가 기준 49마디 가격 사다리를 생성합니다.
///
/// - `ladder[24] == price`
/// - `i = 23..=0`: `ladder[i] = round2(ladder[i + 1] + steps[i])`
/// - `i = 25..=48`: `ladder[i] = round2(ladder[i - 1] - steps[i])`
///
/// # Errors
///
/// 간격 테이블, 가격 리스트, 마디 번호 중 하나라도 길이가 49가 아니면
/// `MadiError::LengthMismatch`를 반환합니다. 잘라내거나 채우지 않습니다.
pub fn generate_ladder(price: OpeningPrice, steps: &StepTable<'_>) -> MadiResult<Ladder> {
    ensure_node_count(LadderPart::Steps, steps.len())?;
    let gaps = steps.gaps();
    let opening = price.value();

    let mut upper = Vec::with_capacity(HALF_SPAN);
    let mut current = opening;
    for gap in gaps[..HALF_SPAN].iter().rev() {
        current = current
            .checked_add(*gap)
            .ok_or_else(|| out_of_range(current, *gap))?
            .round_price();
        upper.push(current);
    }
    upper.reverse();

    let mut lower = Vec::with_capacity(HALF_SPAN);
    current = opening;
    for gap in &gaps[OPENING_INDEX + 1..] {
        current = current
            .checked_sub(*gap)
            .ok_or_else(|| out_of_range(current, *gap))?
            .round_price();
        lower.push(current);
    }

    let prices: Vec<Price> = upper
        .into_iter()
        .chain(std::iter::once(opening))
        .chain(lower)
        .collect();
    ensure_node_count(LadderPart::Prices, prices.len())?;

    let labels = node_labels();
    ensure_node_count(LadderPart::Labels, labels.len())?;

    let rows: Vec<LadderRow> = prices
        .into_iter()
        .zip(labels)
        .zip(gaps.iter().copied())
        .enumerate()
        .map(|(position, ((price, label), step))| LadderRow {
            position,
            label,
            price,
            step,
        })
        .collect();

    debug!(
        opening_price = %price,
        top = %rows[0].price,
        bottom = %rows[NODE_COUNT - 1].price,
        "Ladder generated"
    );

    Ok(Ladder {
        opening_price: price,
        rows,
    })
}
