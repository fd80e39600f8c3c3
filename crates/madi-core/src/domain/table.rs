//! 사다리 → 표 형식 변환.
//!
//! 표시 문자열은 화면과 엑셀 내보내기에서 공통으로 사용하며,
//! 가격 계산에는 다시 사용되지 않습니다.

use serde::Serialize;

use super::ladder::{Ladder, NodeLabel};
use super::opening_price::OpeningPrice;
use super::zone::Zone;
use crate::types::DecimalExt;

/// 표 열 머리글.
pub const LABEL_HEADER: &str = "마디 번호";
/// 가격 열 머리글.
pub const PRICE_HEADER: &str = "계산된 가격";
/// 간격 열 머리글.
pub const STEP_HEADER: &str = "마디 간격";

/// 세 열 머리글 (마디 번호, 계산된 가격, 마디 간격).
pub const TABLE_HEADERS: [&str; 3] = [LABEL_HEADER, PRICE_HEADER, STEP_HEADER];

/// 표의 한 행.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableRow {
    /// 위에서부터의 위치. 표시 열이 아닌 내부 식별자.
    pub position: usize,
    /// 마디 번호
    pub label: NodeLabel,
    /// 가격 (소수점 둘째 자리 고정)
    pub price: String,
    /// 마디 간격 (정수면 정수 형태)
    pub step: String,
    /// 행 구간
    pub zone: Zone,
}

impl TableRow {
    /// 표시용 마디 번호 문자열.
    pub fn label_text(&self) -> String {
        self.label.to_string()
    }

    /// 세 열 값 (마디 번호, 가격, 간격).
    pub fn cells(&self) -> [String; 3] {
        [self.label_text(), self.price.clone(), self.step.clone()]
    }
}

/// 49행 3열 사다리 표.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LadderTable {
    /// 기준 시가
    pub opening_price: OpeningPrice,
    /// 위에서 아래 순서의 행
    pub rows: Vec<TableRow>,
}

impl LadderTable {
    /// 사다리를 표 형식으로 변환합니다.
    pub fn from_ladder(ladder: &Ladder) -> Self {
        let rows = ladder
            .iter()
            .map(|row| TableRow {
                position: row.position,
                label: row.label,
                price: row.price.to_price_string(),
                step: row.step.to_step_string(),
                zone: row.zone(),
            })
            .collect();

        Self {
            opening_price: ladder.opening_price(),
            rows,
        }
    }

    /// 열 머리글.
    pub fn headers(&self) -> [&'static str; 3] {
        TABLE_HEADERS
    }

    /// 행 수.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// 행이 없는지 여부.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// 구간별 행 반복자.
    pub fn rows_in(&self, zone: Zone) -> impl Iterator<Item = &TableRow> {
        self.rows.iter().filter(move |row| row.zone == zone)
    }
}
