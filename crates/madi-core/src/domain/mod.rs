//! 마디 사다리 계산을 위한 도메인 모델.

mod ladder;
mod opening_price;
mod step_table;
mod table;
mod zone;

pub use ladder::*;
pub use opening_price::*;
pub use step_table::*;
pub use table::*;
pub use zone::*;
