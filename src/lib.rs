//! 차량 보유비용 예측 로직을 라이브러리로 분리하여 CLI 외의 호출자도 그대로 쓸 수 있게 한다.
//!
//! 핵심은 [`cost`] 계산식, [`projection::project`], [`comparison::compare`]이며
//! 나머지 모듈(설정, 저장소, 출력, 번역)은 CLI를 위한 주변 기능이다.

pub mod app;
pub mod comparison;
pub mod config;
pub mod cost;
pub mod i18n;
pub mod input;
pub mod projection;
pub mod report;
pub mod store;
pub mod telemetry;
pub mod ui_cli;

pub use comparison::{compare, Comparison, ComparisonRow};
pub use input::{InputDraft, InputError, InputRecord, VehicleRole};
pub use projection::{project, ProjectionRow, ProjectionTable, PROJECTION_HORIZON};
