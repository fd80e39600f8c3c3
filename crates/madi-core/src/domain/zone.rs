//! 행 구간 분류 (위쪽 / 시가 / 아래쪽).

use serde::{Deserialize, Serialize};

use super::ladder::NodeLabel;
use super::step_table::OPENING_INDEX;

/// 사다리 행의 구간.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Zone {
    /// 시가보다 위 (인덱스 0..24)
    Upper,
    /// 시가 행
    Opening,
    /// 시가보다 아래 (인덱스 25..49)
    Lower,
}

impl Zone {
    /// 행 위치와 마디 번호로 구간을 결정합니다.
    ///
    /// 시가 행은 가격 값이 아니라 마디 번호로 판정합니다. 가격은 우연히
    /// 겹칠 수 있고, 숫자 마디 번호는 위아래가 같은 1..24를 쓰기 때문입니다.
    pub fn classify(position: usize, label: &NodeLabel) -> Self {
        if label.is_opening() {
            Zone::Opening
        } else if position < OPENING_INDEX {
            Zone::Upper
        } else {
            Zone::Lower
        }
    }

    /// 배경 색상 이름 (CSS 색상 키워드).
    pub fn tint(&self) -> &'static str {
        match self {
            Zone::Upper => "lightsalmon",
            Zone::Opening => "lightgreen",
            Zone::Lower => "lightblue",
        }
    }

    /// 배경 색상 RGB 값.
    pub fn tint_rgb(&self) -> (u8, u8, u8) {
        match self {
            Zone::Upper => (0xFF, 0xA0, 0x7A),
            Zone::Opening => (0x90, 0xEE, 0x90),
            Zone::Lower => (0xAD, 0xD8, 0xE6),
        }
    }

    /// 구간 태그 (A: 위쪽, B: 시가, C: 아래쪽).
    pub fn tag(&self) -> char {
        match self {
            Zone::Upper => 'A',
            Zone::Opening => 'B',
            Zone::Lower => 'C',
        }
    }
}

impl std::fmt::Display for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Zone::Upper => "위쪽",
            Zone::Opening => "시가",
            Zone::Lower => "아래쪽",
        };
        f.write_str(name)
    }
}
