//! 비용 계산식 모음. 모두 부수효과가 없는 순수 함수다.

pub mod formulas;

pub use formulas::*;
