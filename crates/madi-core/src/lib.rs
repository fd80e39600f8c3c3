//! # Madi Core
//!
//! 해외선물 마디 계산기의 핵심 도메인 모델 및 타입을 제공합니다.
//!
//! 이 크레이트는 계산기 전반에서 사용되는 기본 타입을 제공합니다:
//! - 고정 마디 간격 테이블
//! - 시가 기준 49마디 가격 사다리 생성
//! - 표 형식 변환 및 구간(위쪽/시가/아래쪽) 분류
//! - 설정 관리
//! - 로깅 인프라

pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod types;

pub use self::config::*;
pub use domain::*;
pub use error::*;
pub use logging::*;
pub use types::*;
